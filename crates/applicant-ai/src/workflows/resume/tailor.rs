//! Resume tailoring backend: an OpenAI-compatible chat-completions call.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

use crate::config::TailorConfig;

/// Failures from the tailoring backend. Callers decide the fallback; this
/// layer only reports.
#[derive(Debug, thiserror::Error)]
pub enum TailorError {
    #[error("tailoring backend request failed: {0}")]
    Backend(String),
    #[error("tailoring backend returned no content")]
    EmptyCompletion,
}

/// Opaque text-transform: rewrite `base_resume` against `job_description`.
#[async_trait]
pub trait ResumeTailor: Send + Sync {
    async fn tailor(&self, base_resume: &str, job_description: &str)
        -> Result<String, TailorError>;
}

const SYSTEM_PROMPT: &str = "You are an expert career coach and resume writer. Your goal is to \
     tailor a candidate's resume to a specific job description to maximize their chances of \
     getting an interview. Do not invent false information, but highlight relevant skills and \
     experiences.";

/// Client for OpenAI-compatible chat-completion APIs (OpenAI itself, or any
/// local server speaking the same protocol).
pub struct OpenAiTailor {
    client: Client,
    base_url: String,
    model: String,
    api_key: String,
}

impl OpenAiTailor {
    pub fn new(config: &TailorConfig) -> Result<Self, TailorError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(120))
            .build()
            .map_err(|err| TailorError::Backend(err.to_string()))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            api_key: config.api_key.clone().unwrap_or_default(),
        })
    }
}

#[async_trait]
impl ResumeTailor for OpenAiTailor {
    async fn tailor(
        &self,
        base_resume: &str,
        job_description: &str,
    ) -> Result<String, TailorError> {
        let user_prompt = format!(
            "Here is my base resume:\n\n{base_resume}\n\nHere is the job description:\n\n\
             {job_description}\n\nPlease rewrite the resume to better match the job description. \
             Focus on keywords and relevant achievements."
        );

        let request = ChatRequest {
            model: &self.model,
            temperature: 0.7,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: SYSTEM_PROMPT.to_string(),
                },
                ChatMessage {
                    role: "user",
                    content: user_prompt,
                },
            ],
        };

        let url = format!("{}/chat/completions", self.base_url);
        debug!(model = %self.model, "requesting tailored resume");

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|err| TailorError::Backend(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(TailorError::Backend(format!("http status {status}: {body}")));
        }

        let completion: ChatResponse = response
            .json()
            .await
            .map_err(|err| TailorError::Backend(err.to_string()))?;

        completion
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .filter(|content| !content.trim().is_empty())
            .ok_or(TailorError::EmptyCompletion)
    }
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    temperature: f32,
    messages: Vec<ChatMessage>,
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: &'static str,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ChatResponseMessage {
    content: String,
}
