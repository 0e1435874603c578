use crate::llm::{build_http_client, sanitize_api_error};
use anyhow::{Context, Result, bail};
use reqwest::Client;
use serde::Deserialize;
use url::Url;

pub const AUTHORIZATION_URL: &str = "https://www.linkedin.com/oauth/v2/authorization";
pub const DEFAULT_TOKEN_BASE: &str = "https://www.linkedin.com";
pub const DEFAULT_REDIRECT_URI: &str = "http://localhost:3000";
pub const DEFAULT_SCOPES: &str = "r_liteprofile w_member_social";

/// Build the URL the operator opens in a browser to grant access.
pub fn authorization_url(client_id: &str, redirect_uri: &str, scopes: &str) -> Result<String> {
    let client_id = client_id.trim();
    if client_id.is_empty() {
        bail!("LinkedIn client id is required (set LINKEDIN_CLIENT_ID or [oauth].client_id)");
    }

    let url = Url::parse_with_params(
        AUTHORIZATION_URL,
        &[
            ("response_type", "code"),
            ("client_id", client_id),
            ("redirect_uri", redirect_uri),
            ("scope", scopes),
        ],
    )
    .context("failed to build LinkedIn authorization URL")?;

    Ok(url.into())
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    #[serde(default)]
    expires_in: Option<u64>,
}

/// Access token issued by the code exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssuedToken {
    pub access_token: String,
    pub expires_in_secs: Option<u64>,
}

pub struct OAuthClient {
    token_base: String,
    client: Client,
}

impl OAuthClient {
    pub fn new() -> Self {
        Self {
            token_base: DEFAULT_TOKEN_BASE.to_string(),
            client: build_http_client(),
        }
    }

    #[must_use]
    pub fn with_token_base(mut self, token_base: impl Into<String>) -> Self {
        self.token_base = token_base.into().trim_end_matches('/').to_string();
        self
    }

    /// Trade an authorization `code` for an access token.
    pub async fn exchange_code(
        &self,
        client_id: &str,
        client_secret: &str,
        code: &str,
        redirect_uri: &str,
    ) -> Result<IssuedToken> {
        for (name, value) in [
            ("client id", client_id),
            ("client secret", client_secret),
            ("authorization code", code),
        ] {
            if value.trim().is_empty() {
                bail!("{name} is required");
            }
        }

        let response = self
            .client
            .post(format!("{}/oauth/v2/accessToken", self.token_base))
            .form(&[
                ("grant_type", "authorization_code"),
                ("code", code.trim()),
                ("redirect_uri", redirect_uri),
                ("client_id", client_id.trim()),
                ("client_secret", client_secret.trim()),
            ])
            .send()
            .await
            .map_err(reqwest::Error::without_url)
            .context("LinkedIn token request failed")?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            bail!(
                "LinkedIn token exchange failed ({status}): {}",
                sanitize_api_error(&body)
            );
        }

        let token: TokenResponse = response
            .json()
            .await
            .context("LinkedIn token response was not valid JSON")?;
        tracing::info!(expires_in = token.expires_in, "LinkedIn access token issued");

        Ok(IssuedToken {
            access_token: token.access_token,
            expires_in_secs: token.expires_in,
        })
    }
}
