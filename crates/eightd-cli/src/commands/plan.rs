use std::io::{self, Write};

use eightd_config::EightdConfig;
use eightd_core::RunPlan;

use crate::cli::{GlobalFlags, OutputFormat};
use crate::output::output;

pub fn handle(config: &EightdConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let plan = RunPlan::for_today(config.taiga.project_id, &config.problem.statement())?;

    if flags.format == OutputFormat::Text {
        write_plan(&mut io::stdout().lock(), &plan)?;
        return Ok(());
    }
    output(&plan, flags.format)
}

fn write_plan<W: Write>(out: &mut W, plan: &RunPlan) -> io::Result<()> {
    writeln!(out, "Project: {}", plan.project_id)?;
    writeln!(out, "Epic:    {}", plan.epic.subject)?;
    write!(out, "{}", plan.epic.description)?;
    writeln!(out)?;
    writeln!(out, "Stories:")?;
    for (order, story) in plan.ordered_stories() {
        writeln!(out, "  {order}. {}", story.subject)?;
    }
    Ok(())
}
