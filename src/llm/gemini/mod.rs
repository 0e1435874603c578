//! Google Gemini generation backend.
//!
//! One `generateContent` call per prompt. The API key travels in the
//! `x-goog-api-key` header so it never appears in URLs or transport errors.

use crate::error::{GenerationError, GenerationErrorKind};
use crate::llm::{
    build_http_client, build_http_client_with_timeout, sanitize_api_error,
    traits::{GenerationClient, GenerationResult},
};
use reqwest::{Client, StatusCode};
use std::future::Future;
use std::pin::Pin;

mod types;
use types::{Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig, Part};

pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_MODEL: &str = "gemini-1.5-flash-latest";

const PROVIDER: &str = "gemini";
const MAX_OUTPUT_TOKENS: u32 = 2048;

pub struct GeminiClient {
    api_key: Option<String>,
    model: String,
    temperature: f64,
    api_base: String,
    client: Client,
}

impl GeminiClient {
    pub fn new(api_key: Option<String>, model: impl Into<String>) -> Self {
        Self {
            api_key: api_key
                .map(|key| key.trim().to_string())
                .filter(|key| !key.is_empty()),
            model: model.into(),
            temperature: 0.7,
            api_base: DEFAULT_API_BASE.to_string(),
            client: build_http_client(),
        }
    }

    #[must_use]
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into().trim_end_matches('/').to_string();
        self
    }

    #[must_use]
    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = temperature;
        self
    }

    #[must_use]
    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.client = build_http_client_with_timeout(timeout_secs);
        self
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    fn model_name(model: &str) -> String {
        if model.starts_with("models/") {
            model.to_string()
        } else {
            format!("models/{model}")
        }
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/{}:generateContent",
            self.api_base,
            Self::model_name(&self.model)
        )
    }

    fn build_request(prompt: &str, temperature: f64) -> GenerateContentRequest {
        GenerateContentRequest {
            contents: vec![Content {
                role: "user".to_string(),
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
            generation_config: GenerationConfig {
                temperature,
                max_output_tokens: MAX_OUTPUT_TOKENS,
            },
        }
    }

    /// Map a non-success HTTP status to a failure class.
    ///
    /// Gemini reports a bad key as `400 INVALID_ARGUMENT` with reason
    /// `API_KEY_INVALID`, so the body is inspected for 400s.
    fn classify_status(status: StatusCode, body: &str) -> GenerationErrorKind {
        match status.as_u16() {
            401 => GenerationErrorKind::Auth,
            400 if body.contains("API_KEY_INVALID") || body.contains("API key not valid") => {
                GenerationErrorKind::Auth
            }
            403 | 429 => GenerationErrorKind::QuotaOrPermission,
            408 | 500..=599 => GenerationErrorKind::Transient,
            _ => GenerationErrorKind::Unknown,
        }
    }

    fn classify_transport(err: &reqwest::Error) -> GenerationErrorKind {
        if err.is_decode() || err.is_builder() {
            GenerationErrorKind::Unknown
        } else {
            GenerationErrorKind::Transient
        }
    }

    fn transport_error(err: reqwest::Error) -> GenerationError {
        let kind = Self::classify_transport(&err);
        let err = err.without_url();
        GenerationError::new(kind, PROVIDER, sanitize_api_error(&err.to_string()))
    }

    fn extract_text(result: &GenerateContentResponse) -> GenerationResult {
        if let Some(err) = result.error.as_ref() {
            return Err(GenerationError::unknown(
                PROVIDER,
                sanitize_api_error(&err.message),
            ));
        }

        if let Some(reason) = result
            .prompt_feedback
            .as_ref()
            .and_then(|feedback| feedback.block_reason.as_deref())
        {
            return Err(GenerationError::unknown(
                PROVIDER,
                format!("prompt blocked: {reason}"),
            ));
        }

        let candidate = result
            .candidates
            .as_ref()
            .and_then(|candidates| candidates.first());

        let text = candidate
            .and_then(|candidate| candidate.content.as_ref())
            .map(|content| {
                let mut out = String::new();
                for part in &content.parts {
                    if let Some(t) = &part.text {
                        out.push_str(t);
                    }
                }
                out
            })
            .unwrap_or_default();

        if text.trim().is_empty() {
            let finish = candidate
                .and_then(|candidate| candidate.finish_reason.as_deref())
                .unwrap_or("none");
            return Err(GenerationError::unknown(
                PROVIDER,
                format!("no text in response (finish reason: {finish})"),
            ));
        }

        Ok(text)
    }

    async fn call_api(&self, prompt: &str) -> GenerationResult {
        let api_key = self.api_key.as_deref().ok_or_else(|| {
            GenerationError::auth(
                PROVIDER,
                "Gemini API key not found. Set GEMINI_API_KEY or GOOGLE_API_KEY \
                 (get one from https://aistudio.google.com/app/apikey)",
            )
        })?;

        let request = Self::build_request(prompt, self.temperature);
        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", api_key)
            .json(&request)
            .send()
            .await
            .map_err(Self::transport_error)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let kind = Self::classify_status(status, &body);
            tracing::warn!(
                provider = PROVIDER,
                status = status.as_u16(),
                kind = kind.as_str(),
                "generation request failed"
            );
            return Err(GenerationError::new(
                kind,
                PROVIDER,
                format!("Gemini API error ({status}): {}", sanitize_api_error(&body)),
            ));
        }

        let result: GenerateContentResponse =
            response.json().await.map_err(Self::transport_error)?;
        Self::extract_text(&result)
    }
}

impl GenerationClient for GeminiClient {
    fn name(&self) -> &str {
        PROVIDER
    }

    fn generate<'a>(
        &'a self,
        prompt: &'a str,
    ) -> Pin<Box<dyn Future<Output = GenerationResult> + Send + 'a>> {
        Box::pin(self.call_api(prompt))
    }
}
