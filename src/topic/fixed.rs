use super::TopicSource;
use crate::error::TopicError;
use rand::seq::IndexedRandom;

/// Uniform random choice, with replacement, from a fixed candidate list.
///
/// Never exhausts: the same list serves every scheduled run.
#[derive(Debug, Clone)]
pub struct FixedListTopicSource {
    candidates: Vec<String>,
}

impl FixedListTopicSource {
    /// Blank candidates are dropped; `None` when nothing usable remains.
    pub fn new(candidates: impl IntoIterator<Item = String>) -> Option<Self> {
        let candidates: Vec<String> = candidates
            .into_iter()
            .map(|topic| topic.trim().to_string())
            .filter(|topic| !topic.is_empty())
            .collect();
        if candidates.is_empty() {
            None
        } else {
            Some(Self { candidates })
        }
    }

    pub fn candidates(&self) -> &[String] {
        &self.candidates
    }
}

impl TopicSource for FixedListTopicSource {
    fn next_topic(&mut self) -> Result<String, TopicError> {
        self.candidates
            .choose(&mut rand::rng())
            .cloned()
            .ok_or(TopicError::Exhausted)
    }
}

/// Yields one preset topic, then reports exhaustion.
#[derive(Debug, Clone)]
pub struct SingleTopicSource {
    topic: Option<String>,
}

impl SingleTopicSource {
    pub fn new(topic: impl Into<String>) -> Self {
        Self {
            topic: Some(topic.into()),
        }
    }
}

impl TopicSource for SingleTopicSource {
    fn next_topic(&mut self) -> Result<String, TopicError> {
        self.topic.take().ok_or(TopicError::Exhausted)
    }
}
