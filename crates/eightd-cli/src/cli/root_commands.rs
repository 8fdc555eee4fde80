use clap::Subcommand;

/// Top-level command tree.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Subcommand)]
pub enum Commands {
    /// Authenticate, create the epic, then create and link the D0-D8 stories.
    #[default]
    Run,
    /// Print the epic and stories a run would create, without contacting Taiga.
    Plan,
}
