//! CLI commands for editguard.

pub mod handle;
pub mod hooks;
pub mod rules;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// editguard - advisory edit hooks for Android TV Compose projects
#[derive(Parser)]
#[command(name = "editguard")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Warn about sensitive files before an edit (reads the event on stdin)
    PreEdit,

    /// Check new composables for D-pad focus handling (reads the event on stdin)
    PostEdit,

    /// List the built-in rules
    Rules,

    /// Register the hooks in .claude/settings.json
    Install {
        /// Project root (defaults to the current directory)
        #[arg(long)]
        project: Option<PathBuf>,
    },

    /// Remove the hooks from .claude/settings.json
    Uninstall {
        /// Project root (defaults to the current directory)
        #[arg(long)]
        project: Option<PathBuf>,
    },
}
