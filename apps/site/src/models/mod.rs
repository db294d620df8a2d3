pub mod experience;
pub mod gallery;
pub mod profile;
pub mod skills;

// Re-export the model types consumed across the crate.
pub use experience::ExperienceEntry;
pub use gallery::{Category, GalleryEntry, MediaRef};
pub use profile::{Education, Profile};
pub use skills::{CategoryCount, SkillGroup, SkillGrowthPoint};
