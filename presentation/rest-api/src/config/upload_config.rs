use std::env;
use std::path::PathBuf;

/// Configuration for transient upload storage
///
/// Environment variables:
/// - UPLOAD_DIR: Directory for uploaded receipt images (default: "uploads")
pub struct UploadConfig {
    pub upload_dir: PathBuf,
}

impl UploadConfig {
    pub fn from_env() -> Self {
        let upload_dir = env::var("UPLOAD_DIR").unwrap_or_else(|_| "uploads".to_string());

        Self {
            upload_dir: PathBuf::from(upload_dir),
        }
    }
}
