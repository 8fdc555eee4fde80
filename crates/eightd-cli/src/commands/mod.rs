use eightd_config::EightdConfig;

use crate::cli::{Commands, GlobalFlags};

pub mod plan;
pub mod run;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(
    command: Commands,
    config: &EightdConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Run => run::handle(config, flags).await,
        Commands::Plan => plan::handle(config, flags),
    }
}
