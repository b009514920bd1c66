use async_trait::async_trait;

use crate::domain::receipt::errors::ReceiptError;
use crate::domain::receipt::model::ReceiptExtraction;

pub struct ExtractReceiptParams {
    pub filename: String,
    pub content: Vec<u8>,
}

#[async_trait]
pub trait ExtractReceiptUseCase: Send + Sync {
    async fn execute(
        &self,
        params: ExtractReceiptParams,
    ) -> Result<ReceiptExtraction, ReceiptError>;
}
