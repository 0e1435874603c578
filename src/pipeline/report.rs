use crate::error::{
    CredentialsError, GenerationError, GenerationErrorKind, PromptError, TopicError,
};
use crate::publish::PublishOutcome;
use std::fmt;
use thiserror::Error;

/// States a pipeline run moves through, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineStage {
    Idle,
    TopicAcquired,
    PromptBuilt,
    Generated,
    PublishAttempted,
    Skipped,
    Done,
}

/// Coarse failure class reported for a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Topic,
    InvalidTopic,
    Prompt,
    Auth,
    QuotaOrPermission,
    Transient,
    Unknown,
    MissingCredentials,
}

impl ErrorKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Topic => "topic",
            Self::InvalidTopic => "invalid_topic",
            Self::Prompt => "prompt",
            Self::Auth => "auth",
            Self::QuotaOrPermission => "quota_or_permission",
            Self::Transient => "transient",
            Self::Unknown => "unknown",
            Self::MissingCredentials => "missing_credentials",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<GenerationErrorKind> for ErrorKind {
    fn from(kind: GenerationErrorKind) -> Self {
        match kind {
            GenerationErrorKind::Auth => Self::Auth,
            GenerationErrorKind::QuotaOrPermission => Self::QuotaOrPermission,
            GenerationErrorKind::Transient => Self::Transient,
            GenerationErrorKind::Unknown => Self::Unknown,
        }
    }
}

/// Why a run ended before producing a draft.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PipelineError {
    #[error("topic unavailable: {0}")]
    Topic(#[from] TopicError),

    #[error("prompt: {0}")]
    Prompt(#[from] PromptError),

    #[error("generation failed: {0}")]
    Generation(#[from] GenerationError),

    #[error("cannot publish: {0}")]
    MissingCredentials(#[from] CredentialsError),
}

impl PipelineError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Topic(_) => ErrorKind::Topic,
            Self::Prompt(PromptError::InvalidTopic) => ErrorKind::InvalidTopic,
            Self::Prompt(PromptError::Render(_)) => ErrorKind::Prompt,
            Self::Generation(err) => err.kind.into(),
            Self::MissingCredentials(_) => ErrorKind::MissingCredentials,
        }
    }
}

/// Everything one run produced. The sole return value of a run.
///
/// A run that got past generation carries `generated_text` and no `error`;
/// a run that stopped earlier carries `error` and no text. A failed publish
/// attempt is reported through `publish_outcome`, next to the text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineReport {
    pub topic: Option<String>,
    pub generated_text: Option<String>,
    pub publish_outcome: Option<PublishOutcome>,
    pub error: Option<PipelineError>,
    pub stages: Vec<PipelineStage>,
}

impl PipelineReport {
    pub(super) fn started() -> Self {
        Self {
            topic: None,
            generated_text: None,
            publish_outcome: None,
            error: None,
            stages: vec![PipelineStage::Idle],
        }
    }

    pub(super) fn enter(&mut self, stage: PipelineStage) {
        tracing::debug!(?stage, "pipeline transition");
        self.stages.push(stage);
    }

    pub(super) fn fail(mut self, error: impl Into<PipelineError>) -> Self {
        self.error = Some(error.into());
        self.enter(PipelineStage::Done);
        self
    }

    pub(super) fn finish(mut self) -> Self {
        self.enter(PipelineStage::Done);
        self
    }

    pub fn error_kind(&self) -> Option<ErrorKind> {
        self.error.as_ref().map(PipelineError::kind)
    }

    /// The stage the run reached just before `Done`.
    pub fn last_stage(&self) -> PipelineStage {
        self.stages
            .iter()
            .rev()
            .copied()
            .find(|stage| *stage != PipelineStage::Done)
            .unwrap_or(PipelineStage::Idle)
    }

    pub fn was_skipped(&self) -> bool {
        self.stages.contains(&PipelineStage::Skipped)
    }

    /// No error, and a publish attempt (if any) succeeded.
    pub fn is_success(&self) -> bool {
        self.error.is_none()
            && self
                .publish_outcome
                .as_ref()
                .is_none_or(PublishOutcome::is_success)
    }
}
