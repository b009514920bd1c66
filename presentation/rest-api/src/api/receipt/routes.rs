use std::sync::Arc;

use poem_openapi::{Multipart, OpenApi, payload::Json, types::multipart::Upload};

use business::domain::receipt::use_cases::extract::{ExtractReceiptParams, ExtractReceiptUseCase};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::receipt::dto::ReceiptExtractionResponse;
use crate::api::tags::ApiTags;

#[derive(Debug, Multipart)]
pub struct UploadReceiptRequest {
    /// Receipt image file
    pub file: Upload,
}

pub struct ReceiptApi {
    extract_use_case: Arc<dyn ExtractReceiptUseCase>,
}

impl ReceiptApi {
    pub fn new(extract_use_case: Arc<dyn ExtractReceiptUseCase>) -> Self {
        Self { extract_use_case }
    }
}

/// Receipt extraction API
///
/// Accepts an uploaded receipt image and returns the fields extracted by
/// the vision model.
#[OpenApi]
impl ReceiptApi {
    /// Upload a receipt image
    ///
    /// Stores the image transiently, sends it to the vision model, and
    /// returns the extracted fields as `{"extracted_text": ...}`.
    #[oai(path = "/api/upload", method = "post", tag = "ApiTags::Receipts")]
    async fn upload_receipt(&self, body: UploadReceiptRequest) -> UploadReceiptResponse {
        let filename = body.file.file_name().unwrap_or_default().to_string();

        let content = match body.file.into_vec().await {
            Ok(content) => content,
            Err(_) => {
                return UploadReceiptResponse::BadRequest(Json(ErrorResponse {
                    error: "receipt.upload_unreadable".to_string(),
                }));
            }
        };

        match self
            .extract_use_case
            .execute(ExtractReceiptParams { filename, content })
            .await
        {
            Ok(extraction) => UploadReceiptResponse::Ok(Json(extraction.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => UploadReceiptResponse::BadRequest(json),
                    422 => UploadReceiptResponse::UnprocessableEntity(json),
                    502 => UploadReceiptResponse::BadGateway(json),
                    _ => UploadReceiptResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum UploadReceiptResponse {
    #[oai(status = 200)]
    Ok(Json<ReceiptExtractionResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 422)]
    UnprocessableEntity(Json<ErrorResponse>),
    #[oai(status = 502)]
    BadGateway(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
