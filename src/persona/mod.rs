pub mod profile;

pub use profile::PersonaProfile;
