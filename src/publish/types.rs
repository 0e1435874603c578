use crate::error::CredentialsError;
use serde::Serialize;
use std::fmt;

// ── Credentials ─────────────────────────────────────────────────────────────

/// Bearer token plus the platform-assigned person id it posts as.
#[derive(Clone, PartialEq, Eq)]
pub struct PublishCredentials {
    access_token: String,
    author_id: String,
}

impl PublishCredentials {
    pub fn new(
        access_token: impl Into<String>,
        author_id: impl Into<String>,
    ) -> Result<Self, CredentialsError> {
        let access_token: String = access_token.into();
        let author_id: String = author_id.into();
        Self::from_optional(Some(&access_token), Some(&author_id))
    }

    /// Validate possibly-absent credential parts. Both must be non-blank.
    pub fn from_optional(
        access_token: Option<&str>,
        author_id: Option<&str>,
    ) -> Result<Self, CredentialsError> {
        let access_token = access_token
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .ok_or(CredentialsError::MissingAccessToken)?;
        let author_id = author_id
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .ok_or(CredentialsError::MissingAuthorId)?;

        Ok(Self {
            access_token: access_token.to_string(),
            author_id: author_id.to_string(),
        })
    }

    pub fn access_token(&self) -> &str {
        &self.access_token
    }

    pub fn author_id(&self) -> &str {
        &self.author_id
    }

    pub fn author_urn(&self) -> String {
        format!("urn:li:person:{}", self.author_id)
    }
}

impl fmt::Debug for PublishCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PublishCredentials")
            .field("access_token", &"[REDACTED]")
            .field("author_id", &self.author_id)
            .finish()
    }
}

// ── Outcome ─────────────────────────────────────────────────────────────────

/// Result of exactly one publish attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PublishOutcome {
    /// The network answered `201 Created`.
    Success { post_id: Option<String> },
    /// Any other HTTP status; the body is kept verbatim for the operator.
    Rejected { status: u16, body: String },
    /// DNS, connect, timeout or reset before a status was received.
    TransportError { detail: String },
}

impl PublishOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }
}

impl fmt::Display for PublishOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success { post_id: Some(id) } => write!(f, "published ({id})"),
            Self::Success { post_id: None } => f.write_str("published"),
            Self::Rejected { status, body } => write!(f, "rejected with HTTP {status}: {body}"),
            Self::TransportError { detail } => write!(f, "transport error: {detail}"),
        }
    }
}

// ── Wire payload ────────────────────────────────────────────────────────────

/// Body of `POST /v2/ugcPosts` for a text-only public share.
#[derive(Debug, Serialize)]
pub struct UgcPost<'a> {
    author: String,
    #[serde(rename = "lifecycleState")]
    lifecycle_state: &'static str,
    #[serde(rename = "specificContent")]
    specific_content: SpecificContent<'a>,
    visibility: Visibility,
}

#[derive(Debug, Serialize)]
struct SpecificContent<'a> {
    #[serde(rename = "com.linkedin.ugc.ShareContent")]
    share_content: ShareContent<'a>,
}

#[derive(Debug, Serialize)]
struct ShareContent<'a> {
    #[serde(rename = "shareCommentary")]
    share_commentary: ShareCommentary<'a>,
    #[serde(rename = "shareMediaCategory")]
    share_media_category: &'static str,
}

#[derive(Debug, Serialize)]
struct ShareCommentary<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
struct Visibility {
    #[serde(rename = "com.linkedin.ugc.MemberNetworkVisibility")]
    member_network_visibility: &'static str,
}

impl<'a> UgcPost<'a> {
    pub fn text_share(text: &'a str, credentials: &PublishCredentials) -> Self {
        Self {
            author: credentials.author_urn(),
            lifecycle_state: "PUBLISHED",
            specific_content: SpecificContent {
                share_content: ShareContent {
                    share_commentary: ShareCommentary { text },
                    share_media_category: "NONE",
                },
            },
            visibility: Visibility {
                member_network_visibility: "PUBLIC",
            },
        }
    }
}
