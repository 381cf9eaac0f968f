use clap::{Parser, Subcommand};

/// CLI arguments parser using `clap`
#[derive(Parser, Debug)]
#[command(name = "git-profiles", version, about = "Git profile switcher")]
pub struct Cli {
    /// Subcommand chosen to execute; the interactive menu runs without one
    #[command(subcommand)]
    pub command: Option<Commands>,
}

// Subcommands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Add a new Git profile
    Add {
        /// Profile name (prompted for if omitted)
        name: Option<String>,
        /// Git username (prompted for if omitted)
        username: Option<String>,
        /// Git email (prompted for if omitted)
        email: Option<String>,
    },
    /// Remove a Git profile
    #[command(visible_aliases = ["rm", "r"])]
    Remove,
    /// List all Git profiles
    #[command(visible_aliases = ["l", "ls", "lst"])]
    List,
    /// Switch Git profile
    #[command(visible_aliases = ["sw", "s"])]
    Switch,
    /// Show current Git configuration
    #[command(visible_alias = "c")]
    Current,
}
