use serde::{Deserialize, Serialize};

/// Body of `POST /epics`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewEpic {
    pub project: u64,
    pub subject: String,
    pub description: String,
}

/// An epic as returned by Taiga.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Epic {
    pub id: u64,
    /// Project-scoped reference number shown in the Taiga UI (`#123`).
    #[serde(rename = "ref")]
    pub reference: u64,
    #[serde(default)]
    pub subject: String,
}
