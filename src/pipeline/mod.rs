//! One end-to-end posting run: topic → prompt → draft → optional publish.

pub mod approval;
pub mod report;

pub use approval::{AutoApprove, ConfirmApproval, NeverPublish, PublishApproval};
pub use report::{ErrorKind, PipelineError, PipelineReport, PipelineStage};

use crate::error::{CredentialsError, PromptError};
use crate::llm::GenerationClient;
use crate::persona::PersonaProfile;
use crate::prompt::PromptBuilder;
use crate::publish::{PublishClient, PublishCredentials};
use crate::topic::TopicSource;
use std::sync::Arc;

/// A publishing backend together with the credentials it posts with.
///
/// Credentials are kept as resolved (possibly failed) so a run can report
/// `MissingCredentials` instead of the process refusing to start.
pub struct Publisher {
    client: Arc<dyn PublishClient>,
    credentials: Result<PublishCredentials, CredentialsError>,
}

impl Publisher {
    pub fn new(
        client: Arc<dyn PublishClient>,
        credentials: Result<PublishCredentials, CredentialsError>,
    ) -> Self {
        Self {
            client,
            credentials,
        }
    }
}

pub struct PostingPipeline {
    persona: Arc<PersonaProfile>,
    prompts: PromptBuilder,
    generator: Arc<dyn GenerationClient>,
    publisher: Option<Publisher>,
}

impl PostingPipeline {
    pub fn new(
        persona: Arc<PersonaProfile>,
        generator: Arc<dyn GenerationClient>,
    ) -> Result<Self, PromptError> {
        Ok(Self {
            persona,
            prompts: PromptBuilder::new()?,
            generator,
            publisher: None,
        })
    }

    #[must_use]
    pub fn with_publisher(mut self, publisher: Publisher) -> Self {
        self.publisher = Some(publisher);
        self
    }

    /// Execute one run. Never fails: every failure ends up in the report.
    pub async fn run(
        &self,
        topics: &mut dyn TopicSource,
        approval: &mut dyn PublishApproval,
    ) -> PipelineReport {
        let mut report = PipelineReport::started();

        let topic = match topics.next_topic() {
            Ok(topic) => topic,
            Err(e) => return report.fail(e),
        };
        report.topic = Some(topic.clone());
        report.enter(PipelineStage::TopicAcquired);

        let prompt = match self.prompts.build(&self.persona, &topic) {
            Ok(prompt) => prompt,
            Err(e) => {
                tracing::warn!(topic = topic.as_str(), "prompt not built: {e}");
                return report.fail(e);
            }
        };
        report.enter(PipelineStage::PromptBuilt);

        // A run that cannot publish must not reach generation.
        let credentials = match self.publisher.as_ref().map(|p| &p.credentials) {
            Some(Err(e)) => {
                tracing::warn!(topic = topic.as_str(), "publish credentials missing: {e}");
                return report.fail(e.clone());
            }
            Some(Ok(credentials)) => Some(credentials),
            None => None,
        };

        tracing::info!(
            topic = topic.as_str(),
            provider = self.generator.name(),
            "generating post"
        );
        let text = match self.generator.generate(&prompt).await {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!(
                    topic = topic.as_str(),
                    kind = e.kind.as_str(),
                    "generation failed: {e}"
                );
                return report.fail(e);
            }
        };
        report.generated_text = Some(text.clone());
        report.enter(PipelineStage::Generated);

        let target = self
            .publisher
            .as_ref()
            .zip(credentials)
            .filter(|_| approval.approve(&text));
        match target {
            Some((publisher, credentials)) => {
                report.enter(PipelineStage::PublishAttempted);
                let outcome = publisher.client.publish(&text, credentials).await;
                if outcome.is_success() {
                    tracing::info!(topic = topic.as_str(), "run published: {outcome}");
                } else {
                    tracing::warn!(
                        topic = topic.as_str(),
                        network = publisher.client.name(),
                        "publish attempt failed"
                    );
                }
                report.publish_outcome = Some(outcome);
            }
            None => {
                tracing::info!(topic = topic.as_str(), "publish skipped");
                report.enter(PipelineStage::Skipped);
            }
        }

        report.finish()
    }
}
