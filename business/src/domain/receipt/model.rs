/// Structured fields extracted from one receipt image.
///
/// The document holds whatever JSON object the vision model returned
/// (store name, date, invoice code, products). Its shape is trusted but
/// never validated against a schema.
#[derive(Debug, Clone, PartialEq)]
pub struct ReceiptExtraction {
    pub document: serde_json::Value,
}
