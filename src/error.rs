use std::fmt;
use thiserror::Error;

// ─── Top-level error hierarchy ───────────────────────────────────────────────

/// Structured error hierarchy for `Postwright`.
///
/// Startup-time failures (config, persona, schedule) surface through this
/// type and stop the process. Per-run failures never do: the pipeline turns
/// them into fields of a `PipelineReport` instead.
#[derive(Debug, Error)]
pub enum PostwrightError {
    // ── Config ───────────────────────────────────────────────────────────
    #[error("config: {0}")]
    Config(#[from] ConfigError),

    // ── Persona ─────────────────────────────────────────────────────────
    #[error("persona: {0}")]
    Persona(#[from] PersonaError),

    // ── Prompt / Template ───────────────────────────────────────────────
    #[error("prompt: {0}")]
    Prompt(#[from] PromptError),

    // ── Generation ──────────────────────────────────────────────────────
    #[error("generation: {0}")]
    Generation(#[from] GenerationError),

    // ── Publish credentials ─────────────────────────────────────────────
    #[error("credentials: {0}")]
    Credentials(#[from] CredentialsError),

    // ── Schedule ────────────────────────────────────────────────────────
    #[error("schedule: {0}")]
    Schedule(#[from] ScheduleError),

    // ── Generic fallthrough (wraps anyhow for interop) ──────────────────
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

// ─── Config errors ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("validation failed: {0}")]
    Validation(String),
}

// ─── Persona errors ─────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PersonaError {
    #[error("persona field `{0}` must not be empty")]
    EmptyField(&'static str),

    #[error("persona needs at least one content pillar")]
    NoPillars,

    #[error("content pillar #{0} must not be empty")]
    EmptyPillar(usize),
}

// ─── Prompt errors ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PromptError {
    #[error("topic must not be empty or whitespace")]
    InvalidTopic,

    #[error("template render failed: {0}")]
    Render(String),
}

// ─── Generation errors ──────────────────────────────────────────────────────

/// Classification of a failed generation call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationErrorKind {
    /// Invalid or missing credential.
    Auth,
    /// Rate limit or plan restriction.
    QuotaOrPermission,
    /// Network failure or 5xx; safe to retry.
    Transient,
    Unknown,
}

impl GenerationErrorKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Auth => "auth",
            Self::QuotaOrPermission => "quota_or_permission",
            Self::Transient => "transient",
            Self::Unknown => "unknown",
        }
    }

    pub fn is_retryable(self) -> bool {
        self == Self::Transient
    }
}

impl fmt::Display for GenerationErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{provider} {kind} error: {message}")]
pub struct GenerationError {
    pub kind: GenerationErrorKind,
    pub provider: String,
    pub message: String,
}

impl GenerationError {
    pub fn new(
        kind: GenerationErrorKind,
        provider: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            provider: provider.into(),
            message: message.into(),
        }
    }

    pub fn auth(provider: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(GenerationErrorKind::Auth, provider, message)
    }

    pub fn unknown(provider: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(GenerationErrorKind::Unknown, provider, message)
    }
}

// ─── Topic errors ───────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TopicError {
    #[error("topic input was empty")]
    Empty,

    #[error("operator ended the session")]
    Closed,

    #[error("topic source has no more topics")]
    Exhausted,

    #[error("failed to read topic: {0}")]
    Input(String),
}

// ─── Publish credential errors ──────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CredentialsError {
    #[error("LinkedIn access token is missing (set LINKEDIN_ACCESS_TOKEN)")]
    MissingAccessToken,

    #[error("LinkedIn person id is missing (set LINKEDIN_PERSON_ID)")]
    MissingAuthorId,
}

// ─── Schedule errors ────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScheduleError {
    #[error("invalid time of day `{0}` (expected HH:MM)")]
    InvalidTime(String),

    #[error("schedule has no entries")]
    NoEntries,

    #[error("time {0} is scheduled more than once")]
    DuplicateTime(String),
}

// ─── Convenience re-exports ─────────────────────────────────────────────────

/// Shorthand result type for the crate.
pub type Result<T> = std::result::Result<T, PostwrightError>;
