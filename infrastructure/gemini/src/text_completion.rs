use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{Value, json};

use business::domain::recommendation::errors::UpstreamError;
use business::domain::recommendation::services::TextCompletionService;

use crate::client::GeminiClient;

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

#[derive(Debug, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    text: Option<String>,
}

pub struct TextCompletionGemini {
    client: GeminiClient,
}

impl TextCompletionGemini {
    pub fn new(client: GeminiClient) -> Self {
        Self { client }
    }

    fn build_body(prompt: &str) -> Value {
        json!({
            "contents": [
                {"role": "user", "parts": [{"text": prompt}]},
            ],
        })
    }

    /// Concatenates the text parts of the first candidate.
    fn extract_text(data: GenerateContentResponse) -> Result<String, UpstreamError> {
        let content = data
            .candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content)
            .ok_or_else(|| {
                UpstreamError::MalformedResponse("response has no candidate content".to_string())
            })?;

        let text: String = content
            .parts
            .into_iter()
            .filter_map(|part| part.text)
            .collect();

        if text.trim().is_empty() {
            return Err(UpstreamError::EmptyCompletion);
        }
        Ok(text)
    }
}

#[async_trait]
impl TextCompletionService for TextCompletionGemini {
    async fn complete(&self, prompt: &str) -> Result<String, UpstreamError> {
        let api_key = self
            .client
            .api_key
            .as_deref()
            .ok_or(UpstreamError::MissingCredential)?;

        let response = self
            .client
            .client
            .post(self.client.generate_content_url())
            .header("Content-Type", "application/json")
            .header("x-goog-api-key", api_key)
            .json(&Self::build_body(prompt))
            .send()
            .await
            .map_err(|e| UpstreamError::Unavailable(e.to_string()))?;

        if !response.status().is_success() {
            return Err(UpstreamError::Status(response.status().as_u16()));
        }

        let data: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| UpstreamError::MalformedResponse(e.to_string()))?;

        Self::extract_text(data)
    }
}
