//! Taiga entities as they cross the wire.
//!
//! `New*` structs are request bodies. The unprefixed structs hold the subset
//! of the server response eightd reads back; unknown fields are ignored.

mod epic;
mod link;
mod story;

pub use epic::{Epic, NewEpic};
pub use link::{EpicStoryLink, NewEpicStoryLink};
pub use story::{NewUserStory, UserStory};
