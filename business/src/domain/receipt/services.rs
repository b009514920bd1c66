use std::path::{Path, PathBuf};

use async_trait::async_trait;

use super::errors::ReceiptError;
use super::model::ReceiptExtraction;

/// Service port for transient storage of uploaded receipt images.
///
/// Each upload is written under a filename chosen by the caller; callers
/// must use distinct names to avoid collisions between requests.
pub trait UploadStoreService: Send + Sync {
    fn save(&self, filename: &str, content: &[u8]) -> Result<PathBuf, ReceiptError>;
}

/// Service port for turning a stored image into its base64 text form,
/// suitable for embedding in a data URI.
pub trait ImageEncoderService: Send + Sync {
    fn encode(&self, path: &Path) -> Result<String, ReceiptError>;
}

/// Service port for extracting receipt fields from an encoded image
/// via an external vision model.
#[async_trait]
pub trait ReceiptExtractorService: Send + Sync {
    async fn extract(&self, image_base64: &str) -> Result<ReceiptExtraction, ReceiptError>;
}
