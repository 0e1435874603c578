// ── Infrastructure ───────────────────────────────────────────────────────────
pub mod http_client;
pub mod scrub;
pub mod traits;

// ── Decorator layers ────────────────────────────────────────────────────────
pub mod reliable;

// ── Provider implementations ────────────────────────────────────────────────
pub mod gemini;

// ── Infrastructure re-exports ───────────────────────────────────────────────
pub use http_client::{DEFAULT_TIMEOUT_SECS, build_http_client, build_http_client_with_timeout};
pub use scrub::{sanitize_api_error, scrub_secret_patterns};
pub use traits::{GenerationClient, GenerationResult};

// ── Provider + decorator re-exports ─────────────────────────────────────────
pub use gemini::GeminiClient;
pub use reliable::RetryingGenerationClient;
