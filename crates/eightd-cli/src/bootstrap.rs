use anyhow::Context;
use eightd_config::EightdConfig;

use crate::cli::GlobalFlags;

/// Load `.env`, then the layered configuration.
pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<EightdConfig> {
    let explicit = flags.config.as_deref();
    EightdConfig::load_with_dotenv(explicit).with_context(|| match explicit {
        Some(path) => format!("failed to load configuration (with {})", path.display()),
        None => "failed to load configuration".to_string(),
    })
}
