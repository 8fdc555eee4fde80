use std::fmt;

use serde::{Deserialize, Serialize};

/// Body of `POST /epics/{epic}/related_userstories`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewEpicStoryLink {
    pub epic: u64,
    pub user_story: u64,
    /// 1-based position of the story inside the epic.
    pub order: u32,
}

impl fmt::Display for NewEpicStoryLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{epic: {}, user_story: {}, order: {}}}",
            self.epic, self.user_story, self.order
        )
    }
}

/// A related-userstory record as returned by Taiga.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct EpicStoryLink {
    pub epic: u64,
    pub user_story: u64,
    /// Server-side ordering value; Taiga may renumber it.
    #[serde(default)]
    pub order: i64,
}
