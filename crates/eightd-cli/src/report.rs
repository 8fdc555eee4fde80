//! Human-readable progress and failure lines for `eightd run`.

use std::io::{self, Write};

use eightd_taiga::TaigaError;
use eightd_taiga::workflow::{RunEvent, RunFailure, RunObserver, Step};

/// Prints one status line per [`RunEvent`].
pub struct ConsoleReporter<W> {
    out: W,
    silent: bool,
}

impl<W: Write> ConsoleReporter<W> {
    pub const fn new(out: W, silent: bool) -> Self {
        Self { out, silent }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_event(&mut self, event: &RunEvent<'_>) -> io::Result<()> {
        match event {
            RunEvent::Authenticating { username } => {
                writeln!(self.out, "🔑 Authenticating as {username}...")
            }
            RunEvent::Authenticated => writeln!(self.out, "✅ Auth success"),
            RunEvent::CreatingEpic {
                subject,
                project_id,
            } => writeln!(
                self.out,
                "📦 Creating epic: {subject} in project {project_id}..."
            ),
            RunEvent::EpicCreated { epic } => writeln!(
                self.out,
                "✅ Epic created (ID {}, Ref {})",
                epic.id, epic.reference
            ),
            RunEvent::CreatingStories { count } => {
                writeln!(self.out, "📌 Creating and linking {count} user stories...")
            }
            RunEvent::LinkRequested { payload } => writeln!(
                self.out,
                "\n➡️ Linking Story {} to Epic {} with payload: {payload}",
                payload.user_story, payload.epic
            ),
            RunEvent::StoryLinked { status, story } => {
                writeln!(self.out, "✅ Linked successfully (HTTP {status})")?;
                writeln!(
                    self.out,
                    "   → Story created and linked: {} (Story ID {})",
                    story.subject, story.id
                )
            }
            RunEvent::Finished { report } => writeln!(
                self.out,
                "\n🎉 Done! {} of {} stories linked.",
                report.linked_count(),
                report.stories.len()
            ),
        }
    }
}

impl<W: Write> RunObserver for ConsoleReporter<W> {
    fn on_event(&mut self, event: &RunEvent<'_>) {
        if self.silent {
            return;
        }
        if let Err(error) = self.write_event(event) {
            tracing::warn!(%error, "failed to write progress line");
        }
    }
}

/// Print the diagnostic for an aborted run, including what was left behind.
pub fn report_failure<W: Write>(out: &mut W, failure: &RunFailure) -> io::Result<()> {
    match (&failure.step, &failure.error) {
        (Step::Link { .. }, TaigaError::Api { status, body }) => {
            writeln!(out, "❌ Failed linking (HTTP {status})")?;
            writeln!(out, "Response: {body}")?;
        }
        (step, error) => writeln!(out, "❌ {step} failed: {error}")?,
    }

    if let Some(epic) = &failure.partial.epic {
        writeln!(
            out,
            "⚠️  Left in Taiga without rollback: epic {} (Ref {}) with {} stories, {} linked.",
            epic.id,
            epic.reference,
            failure.partial.stories.len(),
            failure.partial.linked_count()
        )?;
    }
    Ok(())
}
