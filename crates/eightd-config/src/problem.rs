//! Problem statement settings used for epic naming.

use eightd_core::ProblemStatement;
use serde::{Deserialize, Serialize};

fn default_project_name() -> String {
    "X3570".to_string()
}

fn default_line_name() -> String {
    "L1_AOI".to_string()
}

fn default_error_type() -> String {
    "error1".to_string()
}

fn default_error_desc() -> String {
    "Threshold".to_string()
}

const fn default_quantity() -> u32 {
    15
}

fn default_inspection_method() -> String {
    "Automated AOI system".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ProblemConfig {
    #[serde(default = "default_project_name")]
    pub project_name: String,

    #[serde(default = "default_line_name")]
    pub line_name: String,

    /// e.g. "Parameter", "Hardware", "Software".
    #[serde(default = "default_error_type")]
    pub error_type: String,

    #[serde(default = "default_error_desc")]
    pub error_desc: String,

    #[serde(default = "default_quantity")]
    pub quantity: u32,

    #[serde(default = "default_inspection_method")]
    pub inspection_method: String,
}

impl Default for ProblemConfig {
    fn default() -> Self {
        Self {
            project_name: default_project_name(),
            line_name: default_line_name(),
            error_type: default_error_type(),
            error_desc: default_error_desc(),
            quantity: default_quantity(),
            inspection_method: default_inspection_method(),
        }
    }
}

impl ProblemConfig {
    #[must_use]
    pub fn statement(&self) -> ProblemStatement {
        ProblemStatement {
            project_name: self.project_name.clone(),
            line_name: self.line_name.clone(),
            error_type: self.error_type.clone(),
            error_desc: self.error_desc.clone(),
            quantity: self.quantity,
            inspection_method: self.inspection_method.clone(),
        }
    }
}
