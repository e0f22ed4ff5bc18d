use crate::cli::Args;

pub const OPENAI_CHAT_URL: &str = "https://api.openai.com/v1/chat/completions";
pub const API_KEY_ENV: &str = "OPENAI_API_KEY";

/// Settings for the suggestion backend. The API key is deliberately not
/// part of this struct: it is read from the environment at call time, so a
/// missing key surfaces as a per-request error instead of a startup failure.
#[derive(Debug, Clone)]
pub struct SuggestionConfig {
    pub model: String,
    pub max_tokens: u32,
    pub base_url: String,
}

impl Default for SuggestionConfig {
    fn default() -> Self {
        SuggestionConfig {
            model: "gpt-3.5-turbo".to_string(),
            max_tokens: 50,
            base_url: OPENAI_CHAT_URL.to_string(),
        }
    }
}

impl SuggestionConfig {
    pub fn from_args(args: &Args) -> Self {
        let defaults = Self::default();
        SuggestionConfig {
            model: args.model.clone().unwrap_or(defaults.model),
            max_tokens: args.max_tokens.unwrap_or(defaults.max_tokens),
            base_url: args.url.clone().unwrap_or(defaults.base_url),
        }
    }

    /// Read the credential from the environment. Empty values count as
    /// missing.
    pub fn api_key() -> Option<String> {
        std::env::var(API_KEY_ENV).ok().filter(|k| !k.is_empty())
    }
}
