use postwright::llm::{GeminiClient, GenerationClient, RetryingGenerationClient};
use postwright::persona::PersonaProfile;
use postwright::pipeline::{PostingPipeline, Publisher};
use postwright::publish::{LinkedInClient, PublishCredentials};
use serde_json::{Value, json};
use std::sync::Arc;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const MODEL: &str = "gemini-test";
pub const GENERATE_PATH: &str = "/v1beta/models/gemini-test:generateContent";
pub const DRAFT: &str = "Hook...Body...CTA...#tag1 #tag2 #tag3";

pub fn persona() -> Arc<PersonaProfile> {
    Arc::new(PersonaProfile::new("X", "Y", "Z", vec!["A".into(), "B".into()], "G").unwrap())
}

pub fn gemini_reply(text: &str) -> Value {
    json!({
        "candidates": [{
            "content": {"role": "model", "parts": [{"text": text}]},
            "finishReason": "STOP"
        }]
    })
}

pub async fn mount_gemini_text(server: &MockServer, text: &str) {
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(gemini_reply(text)))
        .mount(server)
        .await;
}

pub fn generator(server: &MockServer, retries: u32) -> Arc<dyn GenerationClient> {
    let gemini = GeminiClient::new(Some("AIza-test-key".into()), MODEL)
        .with_api_base(server.uri())
        .with_timeout_secs(5);
    Arc::new(RetryingGenerationClient::new(Box::new(gemini), retries, 1))
}

pub fn credentials() -> PublishCredentials {
    PublishCredentials::new("li-token", "abc123").unwrap()
}

pub fn pipeline(gemini: &MockServer, linkedin: Option<&MockServer>) -> PostingPipeline {
    let pipeline = PostingPipeline::new(persona(), generator(gemini, 2)).unwrap();
    match linkedin {
        Some(server) => {
            let client = LinkedInClient::new()
                .with_api_base(server.uri())
                .with_timeout_secs(5);
            pipeline.with_publisher(Publisher::new(Arc::new(client), Ok(credentials())))
        }
        None => pipeline,
    }
}
