use serde::{Deserialize, Serialize};

use super::AdviceModel;
use crate::error::AdviceError;

#[derive(Debug, Serialize)]
struct GenerateRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
struct Part {
    text: String,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    text: String,
}

/// Google Generative Language (Gemini) client.
pub struct GeminiClient {
    api_key: String,
    model: String,
    client: reqwest::Client,
}

impl GeminiClient {
    pub fn new(api_key: String, model: String) -> Self {
        Self {
            api_key,
            model,
            client: reqwest::Client::new(),
        }
    }

    fn api_url(&self) -> String {
        format!(
            "https://generativelanguage.googleapis.com/v1beta/models/{}:generateContent?key={}",
            self.model, self.api_key
        )
    }
}

#[async_trait::async_trait]
impl AdviceModel for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<String, AdviceError> {
        let request = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
        };

        log::debug!("📤 Sending {} byte prompt to model {}", prompt.len(), self.model);

        let response = self.client.post(self.api_url()).json(&request).send().await?;

        let status = response.status();
        log::debug!("📥 Gemini response status: {}", status);

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            log::error!("❌ Gemini API error ({}): {}", status, body);
            return Err(AdviceError::Http {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await?;
        let generate_response: GenerateResponse =
            serde_json::from_str(&body).map_err(|e| AdviceError::InvalidJson(e.to_string()))?;

        extract_text(generate_response)
    }
}

fn extract_text(response: GenerateResponse) -> Result<String, AdviceError> {
    response
        .candidates
        .into_iter()
        .next()
        .and_then(|candidate| candidate.content.parts.into_iter().next())
        .map(|part| part.text)
        .ok_or(AdviceError::EmptyResponse)
}
