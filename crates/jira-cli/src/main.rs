mod cli;
mod config;
mod output;
mod presenter;

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use jira_api::{IssueSelector, JiraApi, JiraClient};

use cli::{Cli, Commands};
use output::{ConsoleLogger, TextRenderer};
use presenter::Presenter;

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("{}: {:#}", "Error".red().bold(), e);
        return ExitCode::from(1);
    }

    ExitCode::SUCCESS
}

fn run(cli: Cli) -> Result<()> {
    let config = config::load(cli.config.clone())?;

    let api = JiraApi::new(JiraClient::new(config));
    let renderer = TextRenderer;
    let logger = ConsoleLogger;
    // From here on the presenter owns failures; they become log lines,
    // not exit codes.
    let presenter = Presenter::new(api, &renderer, &logger);

    match &cli.command {
        Commands::User => presenter.render_user(),
        Commands::Issue { key } => presenter.render_issue(key),
        Commands::Issues { project } => presenter.render_issues(project.as_deref()),
        Commands::Worklogs { key, id } => {
            presenter.render_issue_worklogs(&IssueSelector {
                key: key.clone(),
                id: id.clone(),
            });
        }
    }

    Ok(())
}
