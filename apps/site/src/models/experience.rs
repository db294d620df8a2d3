use serde::{Deserialize, Serialize};

/// One role on the experience timeline.
///
/// Entries render in declaration order — reverse-chronological by authoring
/// convention, not enforced here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub role: String,
    pub date_range: String,
    pub bullets: Vec<String>,
}
