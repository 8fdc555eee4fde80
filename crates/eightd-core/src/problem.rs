//! The quality problem an 8D epic is opened for.

use serde::{Deserialize, Serialize};

/// Inputs to epic naming and the 5W2H description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProblemStatement {
    /// Logical product/project name (e.g. `X3570`).
    pub project_name: String,
    /// Production line the problem was seen on.
    pub line_name: String,
    /// Category of the error (e.g. `Parameter`, `Hardware`).
    pub error_type: String,
    /// Short free-text description. Spaces become underscores in the subject.
    pub error_desc: String,
    /// Number of affected units or observed issues.
    pub quantity: u32,
    /// How the problem was detected.
    pub inspection_method: String,
}
