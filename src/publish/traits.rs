use super::types::{PublishCredentials, PublishOutcome};
use std::future::Future;
use std::pin::Pin;

/// Publishing backend: one synchronous attempt per call, no internal retry.
///
/// Failures are values, not errors: every attempt yields a `PublishOutcome`.
pub trait PublishClient: Send + Sync {
    /// Network identifier (e.g. "linkedin").
    fn name(&self) -> &str;

    fn publish<'a>(
        &'a self,
        text: &'a str,
        credentials: &'a PublishCredentials,
    ) -> Pin<Box<dyn Future<Output = PublishOutcome> + Send + 'a>>;
}
