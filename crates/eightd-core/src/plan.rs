//! Everything a run will post, computed up front.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::entities::{NewEpic, NewUserStory};
use crate::errors::CoreError;
use crate::naming;
use crate::problem::ProblemStatement;
use crate::template::EIGHT_D_STORIES;

/// The epic and stories a run creates, in creation order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunPlan {
    pub project_id: u64,
    pub epic: NewEpic,
    pub stories: Vec<NewUserStory>,
}

impl RunPlan {
    /// Build a plan for `date` with a caller-chosen suffix.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] if `suffix` is not four lowercase
    /// hex characters.
    pub fn build(
        project_id: u64,
        problem: &ProblemStatement,
        date: NaiveDate,
        suffix: &str,
    ) -> Result<Self, CoreError> {
        naming::validate_suffix(suffix)?;

        let epic = NewEpic {
            project: project_id,
            subject: naming::epic_subject(problem, date, suffix),
            description: naming::epic_description(problem, date),
        };
        let stories = EIGHT_D_STORIES
            .iter()
            .map(|entry| NewUserStory {
                project: project_id,
                subject: entry.subject.to_string(),
                description: entry.description.to_string(),
            })
            .collect();

        Ok(Self {
            project_id,
            epic,
            stories,
        })
    }

    /// Build a plan for today (local time) with a fresh random suffix.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Random`] if no suffix can be drawn.
    pub fn for_today(project_id: u64, problem: &ProblemStatement) -> Result<Self, CoreError> {
        let today = chrono::Local::now().date_naive();
        let suffix = naming::random_suffix()?;
        Self::build(project_id, problem, today, &suffix)
    }

    /// Stories paired with their 1-based link order.
    pub fn ordered_stories(&self) -> impl Iterator<Item = (u32, &NewUserStory)> {
        (1u32..).zip(self.stories.iter())
    }
}
