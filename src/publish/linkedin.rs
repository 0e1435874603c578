//! LinkedIn REST client: UGC share publishing plus the profile and
//! permission probes the `check` command uses.

use super::traits::PublishClient;
use super::types::{PublishCredentials, PublishOutcome, UgcPost};
use crate::llm::{build_http_client, build_http_client_with_timeout, sanitize_api_error};
use anyhow::{Context, Result, bail};
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use std::future::Future;
use std::pin::Pin;

pub const DEFAULT_API_BASE: &str = "https://api.linkedin.com";
pub const RESTLI_PROTOCOL_VERSION: &str = "2.0.0";

const NETWORK: &str = "linkedin";

pub struct LinkedInClient {
    api_base: String,
    client: Client,
}

/// Identity of the token owner, as returned by `GET /v2/me`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LinkedInProfile {
    pub id: String,
    #[serde(rename = "localizedFirstName", default)]
    pub first_name: String,
    #[serde(rename = "localizedLastName", default)]
    pub last_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PermissionCheck {
    Granted,
    /// 403: the app lacks the `w_member_social` scope.
    MissingScope,
    Unexpected(u16),
}

impl LinkedInClient {
    pub fn new() -> Self {
        Self {
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
    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.client = build_http_client_with_timeout(timeout_secs);
        self
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.api_base)
    }

    async fn post_share(&self, text: &str, credentials: &PublishCredentials) -> PublishOutcome {
        let payload = UgcPost::text_share(text, credentials);
        let response = self
            .client
            .post(self.url("/v2/ugcPosts"))
            .bearer_auth(credentials.access_token())
            .header("X-Restli-Protocol-Version", RESTLI_PROTOCOL_VERSION)
            .json(&payload)
            .send()
            .await;

        let response = match response {
            Ok(response) => response,
            Err(err) => {
                let detail = err.without_url().to_string();
                tracing::warn!(network = NETWORK, "publish transport error: {detail}");
                return PublishOutcome::TransportError { detail };
            }
        };

        let status = response.status();
        if status == StatusCode::CREATED {
            let post_id = response
                .headers()
                .get("x-restli-id")
                .and_then(|value| value.to_str().ok())
                .map(ToOwned::to_owned);
            tracing::info!(network = NETWORK, post_id = post_id.as_deref(), "post published");
            return PublishOutcome::Success { post_id };
        }

        let body = match response.text().await {
            Ok(body) => body,
            Err(err) => format!("<failed to read response body: {}>", err.without_url()),
        };
        tracing::warn!(
            network = NETWORK,
            status = status.as_u16(),
            "publish rejected: {}",
            sanitize_api_error(&body)
        );
        PublishOutcome::Rejected {
            status: status.as_u16(),
            body,
        }
    }

    /// Look up the person behind `access_token`; its `id` is the author id.
    pub async fn fetch_profile(&self, access_token: &str) -> Result<LinkedInProfile> {
        let response = self
            .client
            .get(self.url("/v2/me"))
            .bearer_auth(access_token)
            .send()
            .await
            .context("LinkedIn profile request failed")?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            bail!("LinkedIn profile lookup failed ({status}): {body}");
        }

        response
            .json::<LinkedInProfile>()
            .await
            .context("LinkedIn profile response was not valid JSON")
    }

    pub async fn check_posting_permissions(&self, access_token: &str) -> Result<PermissionCheck> {
        let response = self
            .client
            .get(self.url("/v2/people/~/shares"))
            .bearer_auth(access_token)
            .send()
            .await
            .context("LinkedIn permission check failed")?;

        Ok(match response.status() {
            StatusCode::OK => PermissionCheck::Granted,
            StatusCode::FORBIDDEN => PermissionCheck::MissingScope,
            other => PermissionCheck::Unexpected(other.as_u16()),
        })
    }
}

impl PublishClient for LinkedInClient {
    fn name(&self) -> &str {
        NETWORK
    }

    fn publish<'a>(
        &'a self,
        text: &'a str,
        credentials: &'a PublishCredentials,
    ) -> Pin<Box<dyn Future<Output = PublishOutcome> + Send + 'a>> {
        Box::pin(self.post_share(text, credentials))
    }
}
