//! editguard - advisory edit hooks for Android TV Compose projects.

use clap::{CommandFactory, Parser};
use tracing::debug;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use editguard::cli::{self, Cli, Commands};
use editguard::config::Config;
use editguard::guard::{Decision, Phase};
use editguard::Error;

fn main() -> Result<(), Error> {
    let cli = Cli::parse();

    let (config, config_error) = match Config::load() {
        Ok(config) => (config, None),
        Err(e) => (Config::default(), Some(e)),
    };

    // stdout is reserved for command output; logs share stderr with advisories
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .unwrap_or_else(|_| EnvFilter::new("editguard=warn"));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    if let Some(e) = config_error {
        debug!(error = %e, "Falling back to default config");
    }

    match cli.command {
        None => {
            Cli::command().print_help()?;
            println!();
        }
        Some(Commands::PreEdit) => {
            exit_with(cli::handle::run(Phase::PreEdit, &config));
        }
        Some(Commands::PostEdit) => {
            exit_with(cli::handle::run(Phase::PostEdit, &config));
        }
        Some(Commands::Rules) => {
            cli::rules::run();
        }
        Some(Commands::Install { project }) => {
            cli::hooks::install(project)?;
        }
        Some(Commands::Uninstall { project }) => {
            cli::hooks::uninstall(project)?;
        }
    }

    Ok(())
}

fn exit_with(decision: Decision) {
    let code = decision.exit_code();
    if code != 0 {
        std::process::exit(code);
    }
}
