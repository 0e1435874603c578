use crate::error::GenerationError;
use std::future::Future;
use std::pin::Pin;

/// Generated post text, or a classified failure.
pub type GenerationResult = Result<String, GenerationError>;

/// Text-completion backend: one prompt in, one text blob out.
///
/// Implementations classify every failure into a `GenerationErrorKind` at the
/// call boundary so callers branch on kind rather than on message text.
pub trait GenerationClient: Send + Sync {
    /// Backend identifier (e.g. "gemini").
    fn name(&self) -> &str;

    fn generate<'a>(
        &'a self,
        prompt: &'a str,
    ) -> Pin<Box<dyn Future<Output = GenerationResult> + Send + 'a>>;
}

impl<T: GenerationClient + ?Sized> GenerationClient for Box<T> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn generate<'a>(
        &'a self,
        prompt: &'a str,
    ) -> Pin<Box<dyn Future<Output = GenerationResult> + Send + 'a>> {
        (**self).generate(prompt)
    }
}
