//! Where pipeline topics come from.

mod fixed;
mod interactive;

pub use fixed::{FixedListTopicSource, SingleTopicSource};
pub use interactive::InteractiveTopicSource;

use crate::error::TopicError;

/// Capability "supply one topic per call".
pub trait TopicSource {
    fn next_topic(&mut self) -> Result<String, TopicError>;
}
