use super::Config;
use crate::cron::ScheduleEntry;
use crate::error::{ConfigError, CredentialsError, PersonaError, PostwrightError, ScheduleError};
use crate::persona::PersonaProfile;
use crate::publish::PublishCredentials;

impl Config {
    /// Startup checks. Any failure here stops the process before a run.
    pub fn validate(&self) -> Result<(), PostwrightError> {
        self.persona_profile()?;
        self.schedule_entries()?;

        if !(0.0..=2.0).contains(&self.generation.temperature) {
            return Err(ConfigError::Validation(format!(
                "generation.temperature must be within 0.0..=2.0, got {}",
                self.generation.temperature
            ))
            .into());
        }
        if self.generation.model.trim().is_empty() {
            return Err(ConfigError::Validation("generation.model must not be empty".into()).into());
        }
        if self.generation.timeout_secs == 0 || self.publish.timeout_secs == 0 {
            return Err(
                ConfigError::Validation("timeouts must be at least one second".into()).into(),
            );
        }
        if self.schedule.topics.iter().all(|t| t.trim().is_empty()) {
            return Err(ConfigError::Validation(
                "schedule.topics needs at least one non-empty topic".into(),
            )
            .into());
        }

        Ok(())
    }

    pub fn persona_profile(&self) -> Result<PersonaProfile, PersonaError> {
        let persona = &self.persona;
        PersonaProfile::new(
            persona.niche.as_str(),
            persona.audience.as_str(),
            persona.voice.as_str(),
            persona.content_pillars.clone(),
            persona.goal.as_str(),
        )
    }

    pub fn schedule_entries(&self) -> Result<Vec<ScheduleEntry>, ScheduleError> {
        if self.schedule.times.is_empty() {
            return Err(ScheduleError::NoEntries);
        }
        self.schedule.times.iter().map(|t| t.parse::<ScheduleEntry>()).collect()
    }

    /// The configured generation key, if it is non-blank.
    pub fn generation_api_key(&self) -> Option<&str> {
        self.generation
            .api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
    }

    pub fn publish_credentials(&self) -> Result<PublishCredentials, CredentialsError> {
        PublishCredentials::from_optional(
            self.publish.access_token.as_deref(),
            self.publish.person_id.as_deref(),
        )
    }
}
