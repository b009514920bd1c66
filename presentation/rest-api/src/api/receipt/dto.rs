use poem_openapi::Object;

use business::domain::receipt::model::ReceiptExtraction;

/// Successful extraction envelope.
///
/// `extracted_text` carries the JSON document exactly as the model returned
/// it (store name, date, invoice code, product list); no schema is enforced.
#[derive(Debug, Clone, Object)]
pub struct ReceiptExtractionResponse {
    pub extracted_text: serde_json::Value,
}

impl From<ReceiptExtraction> for ReceiptExtractionResponse {
    fn from(extraction: ReceiptExtraction) -> Self {
        Self {
            extracted_text: extraction.document,
        }
    }
}
