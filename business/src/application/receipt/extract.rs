use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::receipt::errors::ReceiptError;
use crate::domain::receipt::model::ReceiptExtraction;
use crate::domain::receipt::services::{
    ImageEncoderService, ReceiptExtractorService, UploadStoreService,
};
use crate::domain::receipt::use_cases::extract::{ExtractReceiptParams, ExtractReceiptUseCase};

pub struct ExtractReceiptUseCaseImpl {
    pub store: Arc<dyn UploadStoreService>,
    pub encoder: Arc<dyn ImageEncoderService>,
    pub extractor: Arc<dyn ReceiptExtractorService>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ExtractReceiptUseCase for ExtractReceiptUseCaseImpl {
    async fn execute(
        &self,
        params: ExtractReceiptParams,
    ) -> Result<ReceiptExtraction, ReceiptError> {
        if params.filename.is_empty() {
            return Err(ReceiptError::FilenameEmpty);
        }

        self.logger
            .info(&format!("Extracting receipt from '{}'", params.filename));

        let path = self.store.save(&params.filename, &params.content)?;
        let image_base64 = self.encoder.encode(&path)?;
        let extraction = self.extractor.extract(&image_base64).await;

        match &extraction {
            Ok(_) => self.logger.info("Receipt extraction succeeded"),
            Err(ReceiptError::InvalidAiResponse(raw)) => {
                self.logger
                    .warn(&format!("Model reply was not valid JSON: {}", raw));
            }
            Err(err) => self.logger.error(&format!("Receipt extraction failed: {}", err)),
        }

        extraction
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::mock;
    use serde_json::json;
    use std::path::{Path, PathBuf};

    mock! {
        pub Store {}

        impl UploadStoreService for Store {
            fn save(&self, filename: &str, content: &[u8]) -> Result<PathBuf, ReceiptError>;
        }
    }

    mock! {
        pub Encoder {}

        impl ImageEncoderService for Encoder {
            fn encode(&self, path: &Path) -> Result<String, ReceiptError>;
        }
    }

    mock! {
        pub Extractor {}

        #[async_trait]
        impl ReceiptExtractorService for Extractor {
            async fn extract(&self, image_base64: &str) -> Result<ReceiptExtraction, ReceiptError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    fn saving_store() -> MockStore {
        let mut store = MockStore::new();
        store
            .expect_save()
            .returning(|filename, _| Ok(PathBuf::from("uploads").join(filename)));
        store
    }

    fn encoding_encoder() -> MockEncoder {
        let mut encoder = MockEncoder::new();
        encoder
            .expect_encode()
            .returning(|_| Ok("aW1hZ2U=".to_string()));
        encoder
    }

    #[tokio::test]
    async fn should_return_document_when_extraction_succeeds() {
        let document = json!({
            "store_name": "Acme",
            "date": "2024-01-01",
            "invoice_code": "INV1",
            "products": [{"name": "Widget", "amount": "9.99"}]
        });
        let expected = document.clone();

        let mut mock_extractor = MockExtractor::new();
        mock_extractor.expect_extract().returning(move |_| {
            Ok(ReceiptExtraction {
                document: document.clone(),
            })
        });

        let use_case = ExtractReceiptUseCaseImpl {
            store: Arc::new(saving_store()),
            encoder: Arc::new(encoding_encoder()),
            extractor: Arc::new(mock_extractor),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(ExtractReceiptParams {
                filename: "receipt.jpg".to_string(),
                content: vec![0xff, 0xd8, 0xff],
            })
            .await;

        assert!(result.is_ok());
        assert_eq!(result.unwrap().document, expected);
    }

    #[tokio::test]
    async fn should_reject_empty_filename_without_touching_any_port() {
        let mut store = MockStore::new();
        store.expect_save().never();
        let mut encoder = MockEncoder::new();
        encoder.expect_encode().never();
        let mut extractor = MockExtractor::new();
        extractor.expect_extract().never();

        let use_case = ExtractReceiptUseCaseImpl {
            store: Arc::new(store),
            encoder: Arc::new(encoder),
            extractor: Arc::new(extractor),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(ExtractReceiptParams {
                filename: "".to_string(),
                content: vec![1, 2, 3],
            })
            .await;

        assert!(matches!(result, Err(ReceiptError::FilenameEmpty)));
    }

    #[tokio::test]
    async fn should_not_extract_when_encoding_fails() {
        let mut encoder = MockEncoder::new();
        encoder
            .expect_encode()
            .returning(|_| Err(ReceiptError::ImageNotFound));
        let mut extractor = MockExtractor::new();
        extractor.expect_extract().never();

        let use_case = ExtractReceiptUseCaseImpl {
            store: Arc::new(saving_store()),
            encoder: Arc::new(encoder),
            extractor: Arc::new(extractor),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(ExtractReceiptParams {
                filename: "receipt.jpg".to_string(),
                content: vec![1, 2, 3],
            })
            .await;

        assert!(matches!(result, Err(ReceiptError::ImageNotFound)));
    }

    #[tokio::test]
    async fn should_propagate_invalid_response_with_raw_text() {
        let mut mock_extractor = MockExtractor::new();
        mock_extractor
            .expect_extract()
            .returning(|_| Err(ReceiptError::InvalidAiResponse("not json".to_string())));

        let use_case = ExtractReceiptUseCaseImpl {
            store: Arc::new(saving_store()),
            encoder: Arc::new(encoding_encoder()),
            extractor: Arc::new(mock_extractor),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(ExtractReceiptParams {
                filename: "receipt.jpg".to_string(),
                content: vec![1, 2, 3],
            })
            .await;

        match result {
            Err(ReceiptError::InvalidAiResponse(raw)) => assert_eq!(raw, "not json"),
            other => panic!("expected InvalidAiResponse, got {:?}", other.map(|r| r.document)),
        }
    }

    #[tokio::test]
    async fn should_propagate_upstream_failure() {
        let mut mock_extractor = MockExtractor::new();
        mock_extractor
            .expect_extract()
            .returning(|_| Err(ReceiptError::Upstream));

        let use_case = ExtractReceiptUseCaseImpl {
            store: Arc::new(saving_store()),
            encoder: Arc::new(encoding_encoder()),
            extractor: Arc::new(mock_extractor),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(ExtractReceiptParams {
                filename: "receipt.jpg".to_string(),
                content: vec![1, 2, 3],
            })
            .await;

        assert!(matches!(result, Err(ReceiptError::Upstream)));
    }
}
