//! Epic subject and 5W2H description generation.
//!
//! Both functions are pure: the caller supplies the date and the random
//! suffix, so a run can be previewed or reproduced exactly.

use chrono::NaiveDate;

use crate::errors::CoreError;
use crate::problem::ProblemStatement;

/// Number of random bytes behind the subject suffix (two hex chars each).
const SUFFIX_BYTES: usize = 2;

/// Build the epic subject:
/// `{project}_{line}_{error_type}_{error_desc}_{YYYYMMDD}_{suffix}`.
///
/// Spaces in `error_desc` are replaced with underscores. No other
/// sanitizing is applied.
#[must_use]
pub fn epic_subject(problem: &ProblemStatement, date: NaiveDate, suffix: &str) -> String {
    format!(
        "{}_{}_{}_{}_{}_{suffix}",
        problem.project_name,
        problem.line_name,
        problem.error_type,
        problem.error_desc.replace(' ', "_"),
        date.format("%Y%m%d"),
    )
}

/// Render the fixed 5W2H problem description.
#[must_use]
pub fn epic_description(problem: &ProblemStatement, date: NaiveDate) -> String {
    format!(
        "
📌 **5W2H Problem Description**

- **What:** {error_type} issue – {error_desc}
- **Where:** {project} production line ({line})
- **When:** {when}
- **Who:** Operators and quality engineers monitoring the line
- **Why:** Root cause not yet identified – requires investigation
- **How:** Detected via {method}
- **How many:** {quantity} affected units/issues observed
",
        error_type = problem.error_type,
        error_desc = problem.error_desc,
        project = problem.project_name,
        line = problem.line_name,
        when = date.format("%Y-%m-%d"),
        method = problem.inspection_method,
        quantity = problem.quantity,
    )
}

/// Draw a fresh 4-hex-character suffix from the OS random source.
///
/// # Errors
///
/// Returns [`CoreError::Random`] if the OS RNG is unavailable.
pub fn random_suffix() -> Result<String, CoreError> {
    let mut bytes = [0u8; SUFFIX_BYTES];
    getrandom::fill(&mut bytes).map_err(|e| CoreError::Random(e.to_string()))?;
    Ok(bytes.iter().map(|b| format!("{b:02x}")).collect())
}

/// Check that `suffix` is exactly four lowercase hex characters.
///
/// # Errors
///
/// Returns [`CoreError::Validation`] describing the mismatch.
pub fn validate_suffix(suffix: &str) -> Result<(), CoreError> {
    let well_formed = suffix.len() == SUFFIX_BYTES * 2
        && suffix
            .chars()
            .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c));
    if well_formed {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "suffix '{suffix}' must be {} lowercase hex characters",
            SUFFIX_BYTES * 2
        )))
    }
}
