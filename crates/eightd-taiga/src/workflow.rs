//! The end-to-end run: authenticate, create the epic, then create and link
//! every story of the plan.
//!
//! Strictly sequential and fail-fast. Nothing is retried and nothing created
//! before a failure is rolled back; the [`RunFailure`] carries a partial
//! [`RunReport`] describing what already exists remotely.
//!
//! Progress is published as [`RunEvent`]s to a [`RunObserver`]. This module
//! never prints; rendering is left to the caller.

use std::fmt;

use eightd_core::RunPlan;
use eightd_core::entities::{Epic, NewEpicStoryLink, UserStory};
use serde::Serialize;

use crate::{Credentials, TaigaClient, TaigaError};

/// Progress notifications, in the order they occur.
#[derive(Debug)]
pub enum RunEvent<'a> {
    Authenticating { username: &'a str },
    Authenticated,
    CreatingEpic { subject: &'a str, project_id: u64 },
    EpicCreated { epic: &'a Epic },
    CreatingStories { count: usize },
    /// Sent before the link request goes out.
    LinkRequested { payload: &'a NewEpicStoryLink },
    StoryLinked {
        status: u16,
        story: &'a UserStory,
    },
    Finished { report: &'a RunReport },
}

/// Receives [`RunEvent`]s as the run progresses.
pub trait RunObserver {
    fn on_event(&mut self, event: &RunEvent<'_>);
}

impl<F> RunObserver for F
where
    F: FnMut(&RunEvent<'_>),
{
    fn on_event(&mut self, event: &RunEvent<'_>) {
        self(event);
    }
}

/// A story that exists remotely, with its intended position in the epic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreatedStory {
    pub order: u32,
    pub story: UserStory,
    /// Taiga accepted the link with a 2xx, even if its body was unreadable.
    pub linked: bool,
}

/// What a run created.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RunReport {
    pub epic: Option<Epic>,
    pub stories: Vec<CreatedStory>,
}

impl RunReport {
    #[must_use]
    pub fn linked_count(&self) -> usize {
        self.stories.iter().filter(|s| s.linked).count()
    }
}

/// The step a run aborted in. Positions are 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "step", rename_all = "snake_case")]
pub enum Step {
    Auth,
    Epic,
    Story { position: u32 },
    Link { position: u32 },
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Auth => f.write_str("authentication"),
            Self::Epic => f.write_str("epic creation"),
            Self::Story { position } => write!(f, "creation of story {position}"),
            Self::Link { position } => write!(f, "linking of story {position}"),
        }
    }
}

/// An aborted run.
#[derive(Debug, thiserror::Error)]
#[error("{step} failed")]
pub struct RunFailure {
    pub step: Step,
    #[source]
    pub error: TaigaError,
    /// Everything created before the failure. Left in place remotely.
    pub partial: RunReport,
}

/// Run `plan` against Taiga.
///
/// # Errors
///
/// Returns [`RunFailure`] on the first failing request. No further requests
/// are made after it.
pub async fn execute<O: RunObserver>(
    client: &TaigaClient,
    credentials: &Credentials,
    plan: &RunPlan,
    observer: &mut O,
) -> Result<RunReport, RunFailure> {
    let mut report = RunReport::default();

    observer.on_event(&RunEvent::Authenticating {
        username: &credentials.username,
    });
    let session = match client.authenticate(credentials).await {
        Ok(session) => session,
        Err(error) => return Err(abort(Step::Auth, error, report)),
    };
    observer.on_event(&RunEvent::Authenticated);

    observer.on_event(&RunEvent::CreatingEpic {
        subject: &plan.epic.subject,
        project_id: plan.project_id,
    });
    let epic = match session.create_epic(&plan.epic).await {
        Ok(epic) => epic,
        Err(error) => return Err(abort(Step::Epic, error, report)),
    };
    observer.on_event(&RunEvent::EpicCreated { epic: &epic });
    let epic_id = epic.id;
    report.epic = Some(epic);

    observer.on_event(&RunEvent::CreatingStories {
        count: plan.stories.len(),
    });
    for (order, new_story) in plan.ordered_stories() {
        let story = match session.create_user_story(new_story).await {
            Ok(story) => story,
            Err(error) => return Err(abort(Step::Story { position: order }, error, report)),
        };

        let payload = NewEpicStoryLink {
            epic: epic_id,
            user_story: story.id,
            order,
        };
        observer.on_event(&RunEvent::LinkRequested { payload: &payload });
        match session.link_story_to_epic(&payload).await {
            Ok(linked) => {
                observer.on_event(&RunEvent::StoryLinked {
                    status: linked.status,
                    story: &story,
                });
                report.stories.push(CreatedStory {
                    order,
                    story,
                    linked: true,
                });
            }
            Err(error) => {
                // A parse error here means the link status was already 2xx.
                let linked = matches!(error, TaigaError::Parse(_));
                report.stories.push(CreatedStory {
                    order,
                    story,
                    linked,
                });
                return Err(abort(Step::Link { position: order }, error, report));
            }
        }
    }

    tracing::info!(
        base_url = client.base_url(),
        epic_id,
        stories = report.stories.len(),
        "run finished"
    );
    observer.on_event(&RunEvent::Finished { report: &report });
    Ok(report)
}

fn abort(step: Step, error: TaigaError, partial: RunReport) -> RunFailure {
    tracing::debug!(%step, %error, created = partial.stories.len(), "run aborted");
    RunFailure {
        step,
        error,
        partial,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_display() {
        assert_eq!(Step::Auth.to_string(), "authentication");
        assert_eq!(Step::Link { position: 3 }.to_string(), "linking of story 3");
    }

    #[test]
    fn step_serializes_with_tag() {
        let value = serde_json::to_value(Step::Story { position: 2 }).unwrap();
        assert_eq!(value, serde_json::json!({"step": "story", "position": 2}));
    }

    #[test]
    fn linked_count_ignores_unlinked() {
        let story = |id, linked| CreatedStory {
            order: u32::try_from(id).unwrap(),
            story: UserStory {
                id,
                subject: format!("S{id}"),
                reference: None,
            },
            linked,
        };
        let report = RunReport {
            epic: None,
            stories: vec![story(1, true), story(2, true), story(3, false)],
        };
        assert_eq!(report.linked_count(), 2);
    }

    #[test]
    fn failure_chain_shows_the_body_once() {
        let failure = RunFailure {
            step: Step::Link { position: 3 },
            error: TaigaError::Api {
                status: 400,
                body: "BODY".into(),
            },
            partial: RunReport::default(),
        };
        let rendered = format!("{:#}", anyhow::Error::from(failure));
        assert_eq!(
            rendered,
            "linking of story 3 failed: HTTP request failed (400): BODY"
        );
        assert_eq!(rendered.matches("BODY").count(), 1);
    }

    #[test]
    fn closures_are_observers() {
        let mut seen = 0;
        let mut observer = |_: &RunEvent<'_>| seen += 1;
        observer.on_event(&RunEvent::Authenticated);
        observer.on_event(&RunEvent::CreatingStories { count: 9 });
        assert_eq!(seen, 2);
    }
}
