pub mod linkedin;
pub mod traits;
pub mod types;

pub use linkedin::{LinkedInClient, LinkedInProfile, PermissionCheck};
pub use traits::PublishClient;
pub use types::{PublishCredentials, PublishOutcome, UgcPost};
