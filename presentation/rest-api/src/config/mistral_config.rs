/// Configuration for Mistral API access.
///
/// The key is read as an `Option` on purpose: a missing credential fails
/// the request that needs it, never process startup.
pub struct MistralConfig {
    pub api_key: Option<String>,
}

impl MistralConfig {
    pub fn from_env() -> Self {
        Self {
            api_key: std::env::var("MISTRAL_API_KEY").ok(),
        }
    }
}
