mod env_overrides;
mod loader;
#[cfg(test)]
mod test_env;
mod types;
mod validate;

pub use types::{
    Config, GenerationConfig, OAuthConfig, PersonaConfig, PublishConfig, ReliabilityConfig,
    ScheduleConfig,
};
