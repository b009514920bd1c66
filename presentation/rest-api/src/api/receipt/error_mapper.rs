use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::receipt::errors::ReceiptError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for ReceiptError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let status = match &self {
            ReceiptError::FilenameEmpty => StatusCode::BAD_REQUEST,
            ReceiptError::InvalidAiResponse(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ReceiptError::Upstream => StatusCode::BAD_GATEWAY,
            ReceiptError::ImageNotFound
            | ReceiptError::ImageIo
            | ReceiptError::CredentialMissing => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (
            status,
            Json(ErrorResponse {
                error: self.to_string(),
            }),
        )
    }
}
