use crate::mock_services::{DRAFT, credentials, generator, mount_gemini_text, persona, pipeline};
use postwright::error::CredentialsError;
use postwright::pipeline::{AutoApprove, ErrorKind, PostingPipeline, Publisher};
use postwright::publish::{LinkedInClient, PublishOutcome};
use postwright::topic::SingleTopicSource;
use serde_json::json;
use std::sync::Arc;
use std::time::{Duration, Instant};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn generated_post_is_shared_with_exact_payload() {
    let gemini = MockServer::start().await;
    let linkedin = MockServer::start().await;
    mount_gemini_text(&gemini, DRAFT).await;
    Mock::given(method("POST"))
        .and(path("/v2/ugcPosts"))
        .and(header("authorization", "Bearer li-token"))
        .and(header("x-restli-protocol-version", "2.0.0"))
        .and(body_json(json!({
            "author": "urn:li:person:abc123",
            "lifecycleState": "PUBLISHED",
            "specificContent": {
                "com.linkedin.ugc.ShareContent": {
                    "shareCommentary": {"text": DRAFT},
                    "shareMediaCategory": "NONE"
                }
            },
            "visibility": {"com.linkedin.ugc.MemberNetworkVisibility": "PUBLIC"}
        })))
        .respond_with(ResponseTemplate::new(201).insert_header("x-restli-id", "urn:li:share:42"))
        .expect(1)
        .mount(&linkedin)
        .await;

    let report = pipeline(&gemini, Some(&linkedin))
        .run(&mut SingleTopicSource::new("AI tools"), &mut AutoApprove)
        .await;

    assert_eq!(report.generated_text.as_deref(), Some(DRAFT));
    assert_eq!(
        report.publish_outcome,
        Some(PublishOutcome::Success {
            post_id: Some("urn:li:share:42".into())
        })
    );
    assert!(report.is_success());
}

#[tokio::test]
async fn forbidden_share_is_reported_with_body() {
    let gemini = MockServer::start().await;
    let linkedin = MockServer::start().await;
    mount_gemini_text(&gemini, DRAFT).await;
    let body = r#"{"message":"Not enough permissions to access: POST /ugcPosts","status":403}"#;
    Mock::given(method("POST"))
        .and(path("/v2/ugcPosts"))
        .respond_with(ResponseTemplate::new(403).set_body_string(body))
        .expect(1)
        .mount(&linkedin)
        .await;

    let report = pipeline(&gemini, Some(&linkedin))
        .run(&mut SingleTopicSource::new("AI tools"), &mut AutoApprove)
        .await;

    assert!(report.error.is_none());
    assert_eq!(report.generated_text.as_deref(), Some(DRAFT));
    assert_eq!(
        report.publish_outcome,
        Some(PublishOutcome::Rejected {
            status: 403,
            body: body.to_string()
        })
    );
    assert!(!report.is_success());
}

#[tokio::test]
async fn unreachable_network_is_a_transport_error() {
    let gemini = MockServer::start().await;
    mount_gemini_text(&gemini, DRAFT).await;
    // Nothing listens on port 1.
    let client = LinkedInClient::new()
        .with_api_base("http://127.0.0.1:1")
        .with_timeout_secs(2);
    let pipeline = PostingPipeline::new(persona(), generator(&gemini, 0))
        .unwrap()
        .with_publisher(Publisher::new(Arc::new(client), Ok(credentials())));

    let report = pipeline
        .run(&mut SingleTopicSource::new("AI tools"), &mut AutoApprove)
        .await;

    assert!(report.error.is_none());
    assert_eq!(report.generated_text.as_deref(), Some(DRAFT));
    assert!(matches!(
        report.publish_outcome,
        Some(PublishOutcome::TransportError { .. })
    ));
}

#[tokio::test]
async fn missing_person_id_fails_before_generation() {
    let gemini = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&gemini)
        .await;
    let pipeline = PostingPipeline::new(persona(), generator(&gemini, 0))
        .unwrap()
        .with_publisher(Publisher::new(
            Arc::new(LinkedInClient::new()),
            Err(CredentialsError::MissingAuthorId),
        ));

    let report = pipeline
        .run(&mut SingleTopicSource::new("AI tools"), &mut AutoApprove)
        .await;

    assert_eq!(report.error_kind(), Some(ErrorKind::MissingCredentials));
    assert!(report.generated_text.is_none());
}

#[tokio::test]
async fn hung_share_call_is_cut_off_as_transport_error() {
    let gemini = MockServer::start().await;
    let linkedin = MockServer::start().await;
    mount_gemini_text(&gemini, DRAFT).await;
    Mock::given(method("POST"))
        .and(path("/v2/ugcPosts"))
        .respond_with(ResponseTemplate::new(201).set_delay(Duration::from_secs(10)))
        .mount(&linkedin)
        .await;
    let client = LinkedInClient::new()
        .with_api_base(linkedin.uri())
        .with_timeout_secs(1);
    let pipeline = PostingPipeline::new(persona(), generator(&gemini, 0))
        .unwrap()
        .with_publisher(Publisher::new(Arc::new(client), Ok(credentials())));

    let started = Instant::now();
    let report = pipeline
        .run(&mut SingleTopicSource::new("AI tools"), &mut AutoApprove)
        .await;

    assert!(started.elapsed() < Duration::from_secs(5));
    assert!(report.error.is_none());
    assert_eq!(report.generated_text.as_deref(), Some(DRAFT));
    assert!(matches!(
        report.publish_outcome,
        Some(PublishOutcome::TransportError { .. })
    ));
}
