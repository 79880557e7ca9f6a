pub mod profile;
pub mod recommendation;

pub use profile::{Availability, ExperienceLevel, Profile, Project};
pub use recommendation::Recommendation;
