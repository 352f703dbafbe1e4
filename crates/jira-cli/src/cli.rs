use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "jira", version, about = "Terminal client for Jira issue tracking")]
pub struct Cli {
    /// Path to a TOML config file (defaults to the standard config dirs)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the authenticated user
    User,
    /// Show one issue in detail
    Issue {
        /// Issue key, e.g. "PROJ-123"
        key: String,
    },
    /// List open issues assigned to the current user
    Issues {
        /// Restrict the search to one project
        #[arg(short, long)]
        project: Option<String>,
    },
    /// List worklogs recorded on an issue
    Worklogs {
        /// Issue key, e.g. "PROJ-123"
        key: Option<String>,
        /// Numeric issue id, used when no key is given
        #[arg(long, conflicts_with = "key")]
        id: Option<String>,
    },
}
