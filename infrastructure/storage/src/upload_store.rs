use std::fs;
use std::path::PathBuf;

use business::domain::receipt::errors::ReceiptError;
use business::domain::receipt::services::UploadStoreService;

/// Filesystem adapter for transient upload storage.
///
/// Uploads are written under a single configured directory; files are
/// only kept long enough to run the extraction and are never read back
/// by anything else.
pub struct UploadStoreFs {
    upload_dir: PathBuf,
}

impl UploadStoreFs {
    pub fn new(upload_dir: PathBuf) -> Self {
        Self { upload_dir }
    }
}

impl UploadStoreService for UploadStoreFs {
    fn save(&self, filename: &str, content: &[u8]) -> Result<PathBuf, ReceiptError> {
        fs::create_dir_all(&self.upload_dir).map_err(|_| ReceiptError::ImageIo)?;

        let path = self.upload_dir.join(filename);
        fs::write(&path, content).map_err(|_| ReceiptError::ImageIo)?;

        Ok(path)
    }
}
