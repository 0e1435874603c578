use crate::mock_services::{
    DRAFT, GENERATE_PATH, MODEL, gemini_reply, mount_gemini_text, persona, pipeline,
};
use postwright::llm::GeminiClient;
use postwright::pipeline::{AutoApprove, ErrorKind, NeverPublish, PipelineStage, PostingPipeline};
use postwright::topic::SingleTopicSource;
use std::sync::Arc;
use std::time::{Duration, Instant};
use wiremock::matchers::{body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn draft_comes_back_verbatim_without_publisher() {
    let gemini = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .and(header("x-goog-api-key", "AIza-test-key"))
        .and(body_string_contains(r#"\"AI tools\""#))
        .and(body_string_contains("A, B"))
        .respond_with(ResponseTemplate::new(200).set_body_json(gemini_reply(DRAFT)))
        .expect(1)
        .mount(&gemini)
        .await;

    let report = pipeline(&gemini, None)
        .run(&mut SingleTopicSource::new("AI tools"), &mut NeverPublish)
        .await;

    assert_eq!(report.generated_text.as_deref(), Some(DRAFT));
    assert!(report.error_kind().is_none());
    assert!(report.publish_outcome.is_none());
    assert!(report.was_skipped());
}

#[tokio::test]
async fn invalid_key_is_auth_and_never_publishes() {
    let gemini = MockServer::start().await;
    let linkedin = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(400).set_body_string(
            r#"{"error":{"code":400,"message":"API key not valid. Please pass a valid API key.","status":"INVALID_ARGUMENT"}}"#,
        ))
        .expect(1)
        .mount(&gemini)
        .await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&linkedin)
        .await;

    let report = pipeline(&gemini, Some(&linkedin))
        .run(&mut SingleTopicSource::new("AI tools"), &mut AutoApprove)
        .await;

    assert_eq!(report.error_kind(), Some(ErrorKind::Auth));
    assert!(report.generated_text.is_none());
    assert!(report.publish_outcome.is_none());
}

#[tokio::test]
async fn rate_limit_is_not_retried() {
    let gemini = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(429).set_body_string("quota exceeded"))
        .expect(1)
        .mount(&gemini)
        .await;

    let report = pipeline(&gemini, None)
        .run(&mut SingleTopicSource::new("AI tools"), &mut NeverPublish)
        .await;

    assert_eq!(report.error_kind(), Some(ErrorKind::QuotaOrPermission));
}

#[tokio::test]
async fn transient_failures_are_retried_until_success() {
    let gemini = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(503))
        .up_to_n_times(2)
        .expect(2)
        .mount(&gemini)
        .await;
    mount_gemini_text(&gemini, DRAFT).await;

    let report = pipeline(&gemini, None)
        .run(&mut SingleTopicSource::new("AI tools"), &mut NeverPublish)
        .await;

    assert_eq!(report.generated_text.as_deref(), Some(DRAFT));
    assert!(report.error.is_none());
}

#[tokio::test]
async fn persistent_outage_ends_run_as_transient() {
    let gemini = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(500))
        .expect(3)
        .mount(&gemini)
        .await;

    let report = pipeline(&gemini, None)
        .run(&mut SingleTopicSource::new("AI tools"), &mut NeverPublish)
        .await;

    assert_eq!(report.error_kind(), Some(ErrorKind::Transient));
    assert_eq!(report.last_stage(), PipelineStage::PromptBuilt);
}

#[tokio::test]
async fn blank_topic_never_calls_gemini() {
    let gemini = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(gemini_reply(DRAFT)))
        .expect(0)
        .mount(&gemini)
        .await;

    let report = pipeline(&gemini, None)
        .run(&mut SingleTopicSource::new("   "), &mut NeverPublish)
        .await;

    assert_eq!(report.error_kind(), Some(ErrorKind::InvalidTopic));
}

#[tokio::test]
async fn hung_generation_call_is_cut_off_as_transient() {
    let gemini = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(gemini_reply(DRAFT))
                .set_delay(Duration::from_secs(10)),
        )
        .mount(&gemini)
        .await;
    let client = GeminiClient::new(Some("AIza-test-key".into()), MODEL)
        .with_api_base(gemini.uri())
        .with_timeout_secs(1);
    let pipeline = PostingPipeline::new(persona(), Arc::new(client)).unwrap();

    let started = Instant::now();
    let report = pipeline
        .run(&mut SingleTopicSource::new("AI tools"), &mut NeverPublish)
        .await;

    assert!(started.elapsed() < Duration::from_secs(5));
    assert_eq!(report.error_kind(), Some(ErrorKind::Transient));
    assert!(report.generated_text.is_none());
}
