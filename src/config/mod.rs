pub mod schema;

pub use schema::{
    Config, GenerationConfig, OAuthConfig, PersonaConfig, PublishConfig, ReliabilityConfig,
    ScheduleConfig,
};
