use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::SuggestionConfig;

/// Everything that can go wrong between the user asking for a suggestion
/// and text coming back. Each variant's Display text is what the shell
/// prints in place of a suggestion; failures here are values, never exits.
#[derive(Error, Debug)]
pub enum SuggestionError {
    #[error("OpenAI API key not found.")]
    MissingApiKey,

    #[error("Failed to connect to OpenAI API.")]
    Transport(#[from] reqwest::Error),

    #[error("Failed to connect to OpenAI API.")]
    Api { status: u16 },

    #[error("Error parsing OpenAI response.")]
    MalformedResponse(#[from] serde_json::Error),

    #[error("No suggestion available.")]
    NoChoices,
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest {
    model: String,
    messages: Vec<ChatMessage>,
    max_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    content: String,
}

/// Thin client for the chat-completion endpoint. One outbound POST per
/// suggestion, no retry, library-default timeouts.
pub struct SuggestionClient {
    config: SuggestionConfig,
    http_client: reqwest::Client,
}

impl SuggestionClient {
    pub fn new(config: SuggestionConfig) -> Self {
        SuggestionClient {
            config,
            http_client: reqwest::Client::new(),
        }
    }

    /// Fixed prompt template embedding the average mood score.
    pub fn build_prompt(mood_score: f64) -> String {
        format!(
            "User's mood is {}/10. Suggest a simple, positive activity to \
             improve their mental health. Keep the suggestion concise.",
            mood_score
        )
    }

    /// Ask the API for an activity suggestion for the given average mood.
    /// The credential is read from the environment here, at call time.
    pub async fn fetch_suggestion(&self, mood_score: f64) -> Result<String, SuggestionError> {
        let api_key = SuggestionConfig::api_key().ok_or(SuggestionError::MissingApiKey)?;

        let request_body = ChatCompletionRequest {
            model: self.config.model.clone(),
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: Self::build_prompt(mood_score),
            }],
            max_tokens: self.config.max_tokens,
        };

        let response = self
            .http_client
            .post(&self.config.base_url)
            .header("Authorization", format!("Bearer {}", api_key))
            .header("Content-Type", "application/json")
            .json(&request_body)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(SuggestionError::Api {
                status: response.status().as_u16(),
            });
        }

        let body = response.text().await?;
        parse_suggestion(&body)
    }

    /// Like `fetch_suggestion`, but failures come back as the text the
    /// user sees. Never returns an error.
    pub async fn suggestion_text(&self, mood_score: f64) -> String {
        match self.fetch_suggestion(mood_score).await {
            Ok(suggestion) => suggestion,
            Err(e) => e.to_string(),
        }
    }
}

/// Pull the first choice's message text out of a response body.
fn parse_suggestion(body: &str) -> Result<String, SuggestionError> {
    let response: ChatCompletionResponse = serde_json::from_str(body)?;

    response
        .choices
        .into_iter()
        .next()
        .map(|choice| choice.message.content)
        .ok_or(SuggestionError::NoChoices)
}
