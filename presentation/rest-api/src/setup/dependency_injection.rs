use std::sync::Arc;

use logger::TracingLogger;
use mistral::client::MistralClient;
use mistral::receipt_extractor::ReceiptExtractorMistral;
use storage::image_encoder::ImageEncoderFs;
use storage::upload_store::UploadStoreFs;

use business::application::receipt::extract::ExtractReceiptUseCaseImpl;

use crate::config::mistral_config::MistralConfig;
use crate::config::upload_config::UploadConfig;

pub struct DependencyContainer {
    pub health_api: crate::api::health::routes::Api,
    pub receipt_api: crate::api::receipt::routes::ReceiptApi,
}

impl DependencyContainer {
    pub fn new() -> Self {
        let logger = Arc::new(TracingLogger);
        let health_api = crate::api::health::routes::Api::new();

        // Infrastructure adapters
        let upload_config = UploadConfig::from_env();
        let store = Arc::new(UploadStoreFs::new(upload_config.upload_dir));
        let encoder = Arc::new(ImageEncoderFs);

        let mistral_config = MistralConfig::from_env();
        let mistral_client = MistralClient::new(mistral_config.api_key);
        let extractor = Arc::new(ReceiptExtractorMistral::new(mistral_client));

        // Receipt use cases
        let extract_use_case = Arc::new(ExtractReceiptUseCaseImpl {
            store,
            encoder,
            extractor,
            logger,
        });

        let receipt_api = crate::api::receipt::routes::ReceiptApi::new(extract_use_case);

        Self {
            health_api,
            receipt_api,
        }
    }
}
