mod builder;
mod engine;

pub use builder::{POST_PROMPT_NAME, PromptBuilder};
pub use engine::TeraEngine;
