use super::TopicSource;
use crate::error::TopicError;
use dialoguer::Input;

const EXIT_WORDS: [&str; 2] = ["exit", "quit"];

/// Reads one topic line per call from the operator's terminal.
pub struct InteractiveTopicSource {
    prompt: String,
}

impl InteractiveTopicSource {
    pub fn new() -> Self {
        Self {
            prompt: "Enter your post topic".to_string(),
        }
    }
}

/// Classify a raw input line: exit words close the session, blank input is
/// `Empty`, anything else is returned trimmed.
pub(super) fn interpret_line(line: &str) -> Result<String, TopicError> {
    let trimmed = line.trim();
    if EXIT_WORDS
        .iter()
        .any(|word| trimmed.eq_ignore_ascii_case(word))
    {
        return Err(TopicError::Closed);
    }
    if trimmed.is_empty() {
        return Err(TopicError::Empty);
    }
    Ok(trimmed.to_string())
}

impl TopicSource for InteractiveTopicSource {
    fn next_topic(&mut self) -> Result<String, TopicError> {
        let line: String = Input::new()
            .with_prompt(self.prompt.as_str())
            .allow_empty(true)
            .interact_text()
            .map_err(|e| TopicError::Input(e.to_string()))?;
        interpret_line(&line)
    }
}
