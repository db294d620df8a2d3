use serde::{Deserialize, Serialize};

/// Biographical header data. Built once at startup, immutable afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub description: String,
    pub email: String,
    pub linkedin_url: String,
    pub github_url: String,
    /// File name under the assets directory, if a profile photo ships with
    /// the deployment.
    pub profile_image: Option<String>,
    /// File name of the downloadable résumé PDF under the assets directory.
    pub resume_document: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Education {
    pub institution: String,
    pub degree: String,
}
