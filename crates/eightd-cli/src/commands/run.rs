use std::io;

use eightd_config::EightdConfig;
use eightd_core::RunPlan;
use eightd_taiga::workflow::{self, RunFailure, RunReport, Step};
use eightd_taiga::{Credentials, TaigaClient};
use serde::Serialize;

use crate::cli::{GlobalFlags, OutputFormat};
use crate::output::output;
use crate::report::{ConsoleReporter, report_failure};

/// Machine-readable result of `eightd run`.
#[derive(Debug, Serialize)]
struct RunSummary<'a> {
    status: &'static str,
    project_id: u64,
    epic_subject: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    failed: Option<FailedStep>,
    created: &'a RunReport,
}

#[derive(Debug, Serialize)]
struct FailedStep {
    #[serde(flatten)]
    step: Step,
    #[serde(skip_serializing_if = "Option::is_none")]
    http_status: Option<u16>,
    error: String,
}

impl<'a> RunSummary<'a> {
    fn completed(plan: &'a RunPlan, report: &'a RunReport) -> Self {
        Self {
            status: "completed",
            project_id: plan.project_id,
            epic_subject: plan.epic.subject.as_str(),
            failed: None,
            created: report,
        }
    }

    fn aborted(plan: &'a RunPlan, failure: &'a RunFailure) -> Self {
        Self {
            status: "aborted",
            project_id: plan.project_id,
            epic_subject: plan.epic.subject.as_str(),
            failed: Some(FailedStep {
                step: failure.step,
                http_status: failure.error.status(),
                error: failure.error.to_string(),
            }),
            created: &failure.partial,
        }
    }
}

pub async fn handle(config: &EightdConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let plan = RunPlan::for_today(config.taiga.project_id, &config.problem.statement())?;
    let client = TaigaClient::new(config.taiga.api_root())?;
    let credentials = Credentials {
        username: config.taiga.username.clone(),
        password: config.taiga.password.clone(),
    };

    let text = flags.format == OutputFormat::Text;
    let mut reporter = ConsoleReporter::new(io::stdout(), !text || flags.quiet);

    match workflow::execute(&client, &credentials, &plan, &mut reporter).await {
        Ok(report) => {
            if text {
                return Ok(());
            }
            output(&RunSummary::completed(&plan, &report), flags.format)
        }
        Err(failure) => {
            if text {
                report_failure(&mut io::stdout().lock(), &failure)?;
            } else {
                output(&RunSummary::aborted(&plan, &failure), flags.format)?;
            }
            Err(failure.into())
        }
    }
}
