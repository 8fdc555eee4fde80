//! # eightd-core
//!
//! Core types shared across the eightd crates:
//! - Taiga entity structs (epics, user stories, epic/story links) and their
//!   create payloads
//! - The problem statement that drives epic naming
//! - Epic subject and 5W2H description generation
//! - The fixed D0–D8 user story template
//! - The run plan assembled from all of the above
//! - Cross-cutting error types

pub mod entities;
pub mod errors;
pub mod naming;
pub mod plan;
pub mod problem;
pub mod template;

pub use errors::CoreError;
pub use plan::RunPlan;
pub use problem::ProblemStatement;
