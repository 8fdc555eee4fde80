use eightd_core::entities::{NewUserStory, UserStory};

use crate::Session;
use crate::error::TaigaError;
use crate::http::{check_response, read_json};

impl Session<'_> {
    /// Create a user story.
    ///
    /// # Errors
    ///
    /// Returns [`TaigaError`] on transport failure, a non-success status, or
    /// a response without `id`/`subject`.
    pub async fn create_user_story(&self, story: &NewUserStory) -> Result<UserStory, TaigaError> {
        let resp = check_response(self.post("userstories").json(story).send().await?).await?;
        let created: UserStory = read_json(resp, "user story response").await?;
        tracing::debug!(story_id = created.id, subject = %created.subject, "user story created");
        Ok(created)
    }
}
