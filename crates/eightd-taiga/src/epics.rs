use eightd_core::entities::{Epic, EpicStoryLink, NewEpic, NewEpicStoryLink};
use serde::Serialize;

use crate::Session;
use crate::error::TaigaError;
use crate::http::{check_response, read_json};

/// A successful link together with the status Taiga answered with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Linked {
    pub status: u16,
    pub link: EpicStoryLink,
}

impl Session<'_> {
    /// Create an epic.
    ///
    /// # Errors
    ///
    /// Returns [`TaigaError`] on transport failure, a non-success status, or
    /// a response without `id`/`ref`.
    pub async fn create_epic(&self, epic: &NewEpic) -> Result<Epic, TaigaError> {
        let resp = check_response(self.post("epics").json(epic).send().await?).await?;
        let created: Epic = read_json(resp, "epic response").await?;
        tracing::info!(epic_id = created.id, epic_ref = created.reference, "epic created");
        Ok(created)
    }

    /// Attach a story to an epic at `payload.order`.
    ///
    /// # Errors
    ///
    /// A non-success status comes back as [`TaigaError::Api`] with the
    /// status and body, so the caller can report both. [`TaigaError::Parse`]
    /// is only returned after a 2xx, i.e. the link exists remotely.
    pub async fn link_story_to_epic(&self, payload: &NewEpicStoryLink) -> Result<Linked, TaigaError> {
        let path = format!("epics/{}/related_userstories", payload.epic);
        let resp = match check_response(self.post(&path).json(payload).send().await?).await {
            Ok(resp) => resp,
            Err(error) => {
                tracing::debug!(
                    epic_id = payload.epic,
                    story_id = payload.user_story,
                    order = payload.order,
                    %error,
                    "link failed"
                );
                return Err(error);
            }
        };
        let status = resp.status().as_u16();
        let link: EpicStoryLink = read_json(resp, "link response").await?;
        Ok(Linked { status, link })
    }
}
