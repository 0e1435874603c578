//! LinkedIn three-legged OAuth helpers. The posting core only consumes the
//! resulting token; these back the `auth` subcommands.

pub mod oauth;

pub use oauth::{
    AUTHORIZATION_URL, DEFAULT_REDIRECT_URI, DEFAULT_SCOPES, OAuthClient, authorization_url,
};
