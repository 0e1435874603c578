use crate::auth::{DEFAULT_REDIRECT_URI, DEFAULT_SCOPES};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Path to config.toml - computed at load time, not serialized
    #[serde(skip)]
    pub config_path: PathBuf,

    #[serde(default)]
    pub generation: GenerationConfig,

    #[serde(default)]
    pub publish: PublishConfig,

    #[serde(default)]
    pub persona: PersonaConfig,

    #[serde(default)]
    pub schedule: ScheduleConfig,

    #[serde(default)]
    pub reliability: ReliabilityConfig,

    #[serde(default)]
    pub oauth: OAuthConfig,
}

// ── Generation ──────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationConfig {
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default = "default_temperature")]
    pub temperature: f64,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Override for the Gemini endpoint base URL.
    #[serde(default)]
    pub api_base: Option<String>,
}

fn default_model() -> String {
    crate::llm::gemini::DEFAULT_MODEL.into()
}

fn default_temperature() -> f64 {
    0.7
}

fn default_timeout_secs() -> u64 {
    crate::llm::DEFAULT_TIMEOUT_SECS
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
            api_key: None,
            temperature: default_temperature(),
            timeout_secs: default_timeout_secs(),
            api_base: None,
        }
    }
}

// ── Publish ─────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PublishConfig {
    #[serde(default)]
    pub access_token: Option<String>,
    #[serde(default)]
    pub person_id: Option<String>,
    #[serde(default)]
    pub api_base: Option<String>,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for PublishConfig {
    fn default() -> Self {
        Self {
            access_token: None,
            person_id: None,
            api_base: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl PublishConfig {
    /// True when either credential part has been supplied.
    pub fn is_configured(&self) -> bool {
        self.access_token.as_deref().is_some_and(|t| !t.trim().is_empty())
            || self.person_id.as_deref().is_some_and(|id| !id.trim().is_empty())
    }
}

// ── Persona ─────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonaConfig {
    #[serde(default = "default_niche")]
    pub niche: String,
    #[serde(default = "default_audience")]
    pub audience: String,
    #[serde(default = "default_voice")]
    pub voice: String,
    #[serde(default = "default_content_pillars")]
    pub content_pillars: Vec<String>,
    #[serde(default = "default_goal")]
    pub goal: String,
}

fn default_niche() -> String {
    "AI consultant helping small businesses automate their marketing.".into()
}

fn default_audience() -> String {
    "Non-technical small business owners and marketing managers.".into()
}

fn default_voice() -> String {
    "Helpful, approachable, and practical. I avoid jargon and focus on real-world benefits."
        .into()
}

fn default_content_pillars() -> Vec<String> {
    vec![
        "Practical AI tool reviews".into(),
        "AI for lead generation".into(),
        "Demystifying AI concepts for beginners".into(),
        "Future of marketing with AI".into(),
    ]
}

fn default_goal() -> String {
    "To start conversations and generate leads for my consulting services.".into()
}

impl Default for PersonaConfig {
    fn default() -> Self {
        Self {
            niche: default_niche(),
            audience: default_audience(),
            voice: default_voice(),
            content_pillars: default_content_pillars(),
            goal: default_goal(),
        }
    }
}

// ── Schedule ────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleConfig {
    /// Local times of day, `HH:MM`.
    #[serde(default = "default_times")]
    pub times: Vec<String>,
    #[serde(default = "default_poll_secs")]
    pub poll_secs: u64,
    /// Candidate topics for scheduled runs, drawn uniformly at random.
    #[serde(default = "default_topics")]
    pub topics: Vec<String>,
}

fn default_times() -> Vec<String> {
    vec!["09:00".into(), "15:00".into()]
}

fn default_poll_secs() -> u64 {
    60
}

fn default_topics() -> Vec<String> {
    vec![
        "Three AI tools that save a small business five hours a week".into(),
        "How to use AI to qualify inbound leads".into(),
        "What a large language model actually is, in plain words".into(),
        "Where AI-assisted marketing is heading next year".into(),
        "A common AI automation mistake and how to avoid it".into(),
    ]
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            times: default_times(),
            poll_secs: default_poll_secs(),
            topics: default_topics(),
        }
    }
}

// ── Reliability ─────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReliabilityConfig {
    /// Extra attempts after a transient generation failure.
    #[serde(default = "default_generation_retries")]
    pub generation_retries: u32,
    #[serde(default = "default_generation_backoff_ms")]
    pub generation_backoff_ms: u64,
}

fn default_generation_retries() -> u32 {
    2
}

fn default_generation_backoff_ms() -> u64 {
    500
}

impl Default for ReliabilityConfig {
    fn default() -> Self {
        Self {
            generation_retries: default_generation_retries(),
            generation_backoff_ms: default_generation_backoff_ms(),
        }
    }
}

// ── OAuth ───────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OAuthConfig {
    #[serde(default)]
    pub client_id: Option<String>,
    #[serde(default = "default_redirect_uri")]
    pub redirect_uri: String,
    #[serde(default = "default_scopes")]
    pub scopes: String,
}

fn default_redirect_uri() -> String {
    DEFAULT_REDIRECT_URI.into()
}

fn default_scopes() -> String {
    DEFAULT_SCOPES.into()
}

impl Default for OAuthConfig {
    fn default() -> Self {
        Self {
            client_id: None,
            redirect_uri: default_redirect_uri(),
            scopes: default_scopes(),
        }
    }
}
