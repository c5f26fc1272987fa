//! Hosted language model generator
//!
//! Sends one Messages API request per worksheet, then an optional second
//! request asking the model to check its own answers. Verification is best
//! effort: any failure keeps the answers from the first pass.

use std::time::{Duration, Instant};

use anyhow::{Context, Result, anyhow};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use url::Url;

use super::diagrams::{add_diagrams, needs_diagrams};
use super::parse::{extract_json, normalize_questions, parse_generated};
use super::prompt::{SYSTEM_PROMPT, build_prompt, build_verification_prompt};
use super::{Answer, Question, Worksheet, WorksheetError, WorksheetGenerator, WorksheetInput};
use crate::config::WorksheetSettings;

pub const API_KEY_VAR: &str = "ANTHROPIC_API_KEY";
const API_VERSION: &str = "2023-06-01";

#[derive(Debug, Clone)]
pub struct AnthropicConfig {
    pub api_key: String,
    pub api_url: Url,
    pub model: String,
    pub max_tokens: u32,
    pub timeout: Duration,
    pub verify_answers: bool,
}

impl AnthropicConfig {
    pub fn new(api_key: impl Into<String>, settings: &WorksheetSettings) -> Result<Self> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(anyhow!("{} cannot be empty", API_KEY_VAR));
        }
        let api_url = Url::parse(&settings.api_url)
            .with_context(|| format!("Invalid model API URL: {}", settings.api_url))?;

        Ok(Self {
            api_key,
            api_url,
            model: settings.model.clone(),
            max_tokens: settings.max_tokens,
            timeout: settings.timeout(),
            verify_answers: settings.verify_answers,
        })
    }

    /// `None` when no API key is configured
    pub fn from_env(settings: &WorksheetSettings) -> Option<Result<Self>> {
        std::env::var(API_KEY_VAR)
            .ok()
            .filter(|key| !key.trim().is_empty())
            .map(|key| Self::new(key, settings))
    }
}

#[derive(Serialize)]
struct MessagesRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    system: Option<&'a str>,
    messages: [UserMessage<'a>; 1],
}

#[derive(Serialize)]
struct UserMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Deserialize)]
struct MessagesResponse {
    #[serde(default)]
    content: Vec<ContentBlock>,
}

#[derive(Deserialize)]
struct ContentBlock {
    #[serde(rename = "type", default)]
    kind: String,
    #[serde(default)]
    text: String,
}

/// The fields verification is allowed to change
#[derive(Deserialize)]
struct CheckedAnswer {
    #[serde(default)]
    correct_answer: Option<Answer>,
    #[serde(default)]
    explanation: String,
}

pub struct AnthropicGenerator {
    config: AnthropicConfig,
    http_client: reqwest::Client,
}

impl AnthropicGenerator {
    pub fn new(config: AnthropicConfig) -> Result<Self> {
        let http_client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .context("Failed to create HTTP client")?;
        Ok(Self {
            config,
            http_client,
        })
    }

    pub fn config(&self) -> &AnthropicConfig {
        &self.config
    }

    /// Text of the first content block of a single-turn conversation
    async fn complete(&self, system: Option<&str>, prompt: &str) -> Result<String, WorksheetError> {
        let request = MessagesRequest {
            model: &self.config.model,
            max_tokens: self.config.max_tokens,
            system,
            messages: [UserMessage {
                role: "user",
                content: prompt,
            }],
        };

        let response = self
            .http_client
            .post(self.config.api_url.clone())
            .header("x-api-key", &self.config.api_key)
            .header("anthropic-version", API_VERSION)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(WorksheetError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: MessagesResponse = serde_json::from_str(&body)
            .map_err(|e| WorksheetError::InvalidResponse(format!("messages payload: {}", e)))?;
        parsed
            .content
            .into_iter()
            .find(|block| block.kind.is_empty() || block.kind == "text")
            .map(|block| block.text)
            .ok_or_else(|| WorksheetError::InvalidResponse("empty response".to_string()))
    }

    async fn verify_answers(&self, input: &WorksheetInput, mut questions: Vec<Question>) -> Vec<Question> {
        let prompt = build_verification_prompt(&input.subject, &input.topic, &questions);
        let reply = match self.complete(None, &prompt).await {
            Ok(reply) => reply,
            Err(e) => {
                tracing::warn!("answer verification failed: {}", e);
                return questions;
            }
        };

        let checked = extract_json(&reply)
            .and_then(|json| serde_json::from_str::<Vec<CheckedAnswer>>(json).ok());
        let Some(checked) = checked else {
            tracing::warn!("answer verification returned no question array");
            return questions;
        };
        if checked.len() != questions.len() {
            tracing::warn!(
                "answer verification returned {} questions, expected {}",
                checked.len(),
                questions.len()
            );
            return questions;
        }

        let mut corrected = 0;
        for (question, answer) in questions.iter_mut().zip(checked) {
            if answer.correct_answer.is_some() && answer.correct_answer != question.correct_answer {
                question.correct_answer = answer.correct_answer;
                corrected += 1;
            }
            if !answer.explanation.is_empty() {
                question.explanation = answer.explanation;
            }
        }
        tracing::info!("verified {} answers, corrected {}", questions.len(), corrected);
        questions
    }
}

#[async_trait]
impl WorksheetGenerator for AnthropicGenerator {
    async fn generate_worksheet(&self, input: &WorksheetInput) -> Result<Worksheet, WorksheetError> {
        let started = Instant::now();
        let reply = self.complete(Some(SYSTEM_PROMPT), &build_prompt(input)).await?;

        let generated = parse_generated(&reply).inspect_err(|_| {
            tracing::debug!("unparseable generation reply: {:.500}", reply);
        })?;

        let mut questions = generated.questions;
        normalize_questions(&mut questions);

        if self.config.verify_answers {
            questions = self.verify_answers(input, questions).await;
        }
        if needs_diagrams(&input.topic, &input.subject) {
            add_diagrams(&mut questions);
        }

        let title = if generated.title.trim().is_empty() {
            format!("{} Worksheet", input.topic)
        } else {
            generated.title
        };

        tracing::info!(
            "generated {} questions on '{}' in {:?}",
            questions.len(),
            input.topic,
            started.elapsed()
        );
        Ok(Worksheet::draft(input, title, questions))
    }
}
