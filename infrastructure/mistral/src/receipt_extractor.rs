use async_trait::async_trait;
use serde_json::json;

use business::domain::receipt::errors::ReceiptError;
use business::domain::receipt::model::ReceiptExtraction;
use business::domain::receipt::services::ReceiptExtractorService;

use crate::client::MistralClient;

const MODEL: &str = "pixtral-12b-2409";

const EXTRACTION_PROMPT: &str = "Analyze this receipt and extract the following information in a structured dictionary format:\
'store_name': The name of the store.\
'date': The invoice date.\
'invoice_code': The unique invoice number found on the receipt.\
'products': A list of dictionaries, each containing:\
'name': The product name.\
'amount': The price of the product.\
Return the response as a valid JSON object with no additional text, explanations, or formatting. The response must start with '{' and end with '}'.";

pub struct ReceiptExtractorMistral {
    client: MistralClient,
}

impl ReceiptExtractorMistral {
    pub fn new(client: MistralClient) -> Self {
        Self { client }
    }

    /// Removes a markdown code-fence wrapper, if present.
    ///
    /// Only an exact ```json prefix and an exact ``` suffix are recognized;
    /// fences anywhere else in the text are left alone. Unfenced text passes
    /// through unchanged.
    fn strip_code_fence(content: &str) -> &str {
        let content = content.strip_prefix("```json").unwrap_or(content);
        content.strip_suffix("```").unwrap_or(content)
    }

    fn parse_completion(content: &str) -> Result<ReceiptExtraction, ReceiptError> {
        let stripped = Self::strip_code_fence(content);

        let document: serde_json::Value = serde_json::from_str(stripped)
            .map_err(|_| ReceiptError::InvalidAiResponse(content.to_string()))?;

        Ok(ReceiptExtraction { document })
    }
}

#[async_trait]
impl ReceiptExtractorService for ReceiptExtractorMistral {
    async fn extract(&self, image_base64: &str) -> Result<ReceiptExtraction, ReceiptError> {
        let auth_header = self
            .client
            .auth_header()
            .ok_or(ReceiptError::CredentialMissing)?;

        let body = json!({
            "model": MODEL,
            "messages": [
                {
                    "role": "user",
                    "content": [
                        {
                            "type": "text",
                            "text": EXTRACTION_PROMPT,
                        },
                        {
                            "type": "image_url",
                            "image_url": format!("data:image/jpeg;base64,{}", image_base64),
                        },
                    ],
                },
            ],
        });

        let response = self
            .client
            .client
            .post(self.client.chat_completions_url())
            .header("Content-Type", "application/json")
            .header("Authorization", auth_header)
            .json(&body)
            .send()
            .await
            .map_err(|_| ReceiptError::Upstream)?;

        if !response.status().is_success() {
            return Err(ReceiptError::Upstream);
        }

        let data: serde_json::Value = response.json().await.map_err(|_| ReceiptError::Upstream)?;

        let text = data["choices"][0]["message"]["content"]
            .as_str()
            .ok_or(ReceiptError::Upstream)?;

        Self::parse_completion(text)
    }
}
