use serde::{Deserialize, Serialize};

/// Body of `POST /userstories`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewUserStory {
    pub project: u64,
    pub subject: String,
    pub description: String,
}

/// A user story as returned by Taiga.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserStory {
    pub id: u64,
    pub subject: String,
    #[serde(rename = "ref", default)]
    pub reference: Option<u64>,
}
