use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

use business::domain::receipt::errors::ReceiptError;
use business::domain::receipt::services::ImageEncoderService;

/// Filesystem adapter that reads an image and base64-encodes it for
/// embedding in a data URI.
pub struct ImageEncoderFs;

impl ImageEncoderService for ImageEncoderFs {
    fn encode(&self, path: &Path) -> Result<String, ReceiptError> {
        let bytes = fs::read(path).map_err(|err| match err.kind() {
            ErrorKind::NotFound => ReceiptError::ImageNotFound,
            _ => ReceiptError::ImageIo,
        })?;

        Ok(STANDARD.encode(bytes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_round_trip_image_bytes_through_base64() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("receipt.jpg");
        let original: Vec<u8> = (0u8..=255).collect();
        fs::write(&path, &original).unwrap();

        let encoded = ImageEncoderFs.encode(&path).unwrap();
        let decoded = STANDARD.decode(encoded).unwrap();

        assert_eq!(decoded, original);
    }

    #[test]
    fn should_report_not_found_for_missing_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("does-not-exist.jpg");

        let result = ImageEncoderFs.encode(&path);

        assert!(matches!(result, Err(ReceiptError::ImageNotFound)));
    }
}
