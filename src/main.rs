mod app;
mod components;
mod config;
mod error;
mod event;
mod filter;
mod fs;
mod handler;
mod logging;
mod output;
mod selection;
mod session;
mod theme;
mod tui;
mod ui;
mod viewport;

use std::path::PathBuf;

use clap::Parser;

use crate::config::{AppConfig, GeneralConfig, TreeConfig};
use crate::error::AppError;
use crate::fs::tree::BuildOptions;
use crate::output::emit::{emit, Emitted};
use crate::session::{run_selector, SessionOptions};

/// Pick files from a directory tree and emit their contents.
#[derive(Parser, Debug)]
#[command(name = "fpick", version, about)]
struct Cli {
    /// Directory to scan (defaults to current directory)
    #[arg(default_value = ".")]
    path: PathBuf,

    /// Path to a custom config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Initial output mode
    #[arg(long, short, value_parser = ["stdout", "clipboard", "file"])]
    output: Option<String>,

    /// File written when the output mode is "file"
    #[arg(long)]
    output_file: Option<PathBuf>,

    /// Start with git-ignored files shown
    #[arg(long)]
    show_ignored: bool,

    /// Maximum directory depth to scan
    #[arg(long)]
    max_depth: Option<usize>,
}

impl Cli {
    /// Flags that override config file values.
    fn overrides(&self) -> AppConfig {
        AppConfig {
            general: GeneralConfig {
                show_ignored: self.show_ignored.then_some(true),
                output: self.output.clone(),
                output_file: self
                    .output_file
                    .as_ref()
                    .map(|p| p.to_string_lossy().to_string()),
            },
            tree: TreeConfig {
                max_depth: self.max_depth,
                extra_skip_dirs: None,
            },
            ..Default::default()
        }
    }
}

async fn run(cli: Cli) -> error::Result<()> {
    let config = AppConfig::load(cli.config.as_deref(), Some(&cli.overrides()));
    let log_dir = config.log_directory();
    let _log_guard = logging::init_logging(config.log_level(), log_dir.as_deref());

    let root = cli.path.canonicalize().map_err(|_| {
        AppError::InvalidPath(format!("{} does not exist", cli.path.display()))
    })?;
    if !root.is_dir() {
        return Err(AppError::InvalidPath(format!(
            "{} is not a directory",
            root.display()
        )));
    }
    let cwd = std::env::current_dir()?.canonicalize()?;

    let options = SessionOptions {
        show_ignored: config.show_ignored(),
        output_mode: config.output_mode(),
        build: BuildOptions {
            walk: config.walk_options(),
        },
        theme: theme::resolve_theme(&config.theme),
    };
    tracing::info!(
        root = %root.display(),
        output = options.output_mode.label(),
        show_ignored = options.show_ignored,
        "session start"
    );

    let Some(selection) = run_selector(&root, &cwd, &options).await? else {
        tracing::info!("cancelled");
        return Ok(());
    };
    if selection.files.is_empty() {
        eprintln!("No files selected.");
        return Ok(());
    }

    let assembled = output::assemble::assemble(&selection.files);
    for skipped in &assembled.skipped {
        eprintln!("Skipped {skipped}");
    }

    let output_file = config.output_file();
    let noun = if assembled.included == 1 { "file" } else { "files" };
    match emit(selection.output_mode, &assembled.text, &output_file)? {
        Emitted::Stdout => {}
        Emitted::Clipboard => {
            eprintln!("Copied {} {noun} to the clipboard.", assembled.included)
        }
        Emitted::File(path) => {
            eprintln!("Wrote {} {noun} to {}.", assembled.included, path.display())
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli).await {
        tracing::error!(error = %e, "exiting with error");
        eprintln!("fpick: {e}");
        std::process::exit(1);
    }
}
