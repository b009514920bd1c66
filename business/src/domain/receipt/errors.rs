/// Receipt extraction errors.
/// Use code-style identifiers for all error variants for i18n compatibility.
#[derive(Debug, thiserror::Error)]
pub enum ReceiptError {
    #[error("receipt.filename_empty")]
    FilenameEmpty,
    #[error("receipt.image_not_found")]
    ImageNotFound,
    #[error("receipt.image_io")]
    ImageIo,
    #[error("receipt.credential_missing")]
    CredentialMissing,
    #[error("receipt.upstream")]
    Upstream,
    /// The model replied with text that is not valid JSON.
    /// Carries the offending completion text for diagnostics.
    #[error("receipt.invalid_ai_response")]
    InvalidAiResponse(String),
}
