use super::traits::{GenerationClient, GenerationResult};
use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

const MAX_BACKOFF_MS: u64 = 30_000;

/// Generation wrapper that retries transient failures with exponential backoff.
///
/// Auth, quota/permission and unknown failures are returned on first sight.
pub struct RetryingGenerationClient {
    inner: Box<dyn GenerationClient>,
    max_retries: u32,
    base_backoff_ms: u64,
}

impl RetryingGenerationClient {
    pub fn new(inner: Box<dyn GenerationClient>, max_retries: u32, base_backoff_ms: u64) -> Self {
        Self {
            inner,
            max_retries,
            base_backoff_ms: base_backoff_ms.max(1),
        }
    }
}

impl GenerationClient for RetryingGenerationClient {
    fn name(&self) -> &str {
        self.inner.name()
    }

    fn generate<'a>(
        &'a self,
        prompt: &'a str,
    ) -> Pin<Box<dyn Future<Output = GenerationResult> + Send + 'a>> {
        Box::pin(async move {
            let mut backoff_ms = self.base_backoff_ms;
            let mut attempt = 0;

            loop {
                match self.inner.generate(prompt).await {
                    Ok(text) => {
                        if attempt > 0 {
                            tracing::info!(
                                provider = self.inner.name(),
                                attempt,
                                "generation recovered after retries"
                            );
                        }
                        return Ok(text);
                    }
                    Err(err) if err.kind.is_retryable() && attempt < self.max_retries => {
                        attempt += 1;
                        tracing::warn!(
                            provider = self.inner.name(),
                            attempt,
                            max_retries = self.max_retries,
                            backoff_ms,
                            "transient generation failure, retrying: {err}"
                        );
                        tokio::time::sleep(Duration::from_millis(backoff_ms)).await;
                        backoff_ms = backoff_ms.saturating_mul(2).min(MAX_BACKOFF_MS);
                    }
                    Err(err) => return Err(err),
                }
            }
        })
    }
}
