//! unbiasctl - detect and remove bias in news text
//!
//! With no subcommand the interactive two-tab TUI starts.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::io::IsTerminal;
use std::path::PathBuf;
use std::sync::Arc;
use unbias_common::{BiasApi, HttpBiasApi, InputMode, UnbiasConfig};
use unbiasctl::commands::{self, OutputOptions};
use unbiasctl::errors::{EXIT_GENERAL_ERROR, EXIT_SUCCESS};
use unbiasctl::logging::{self, LogTarget};
use unbiasctl::{output, tui, VERSION};

#[derive(Parser)]
#[command(name = "unbiasctl")]
#[command(about = "UnBias - detect and remove bias in news text", long_about = None)]
#[command(version = VERSION)]
struct Cli {
    /// Read configuration from this file instead of the default locations
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Debug-level logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the interactive Analyzer / Rewriter screens (default)
    Tui,

    /// Analyze a text, or an article link with --url
    Analyze {
        /// Treat the input as an article link to extract first
        #[arg(long)]
        url: bool,

        /// Print the display-ready report as JSON
        #[arg(long)]
        json: bool,

        /// Text or link; read from stdin when omitted
        text: Option<String>,
    },

    /// Rewrite a text without bias
    Rewrite {
        /// Print {"unbiased_text": ...} as JSON
        #[arg(long)]
        json: bool,

        /// Text to rewrite; read from stdin when omitted
        text: Option<String>,
    },

    /// Show the effective configuration
    Config {
        /// Print the config file location only
        #[arg(long)]
        path: bool,

        /// Write a default config file there if none exists
        #[arg(long)]
        init: bool,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let code = match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("unbiasctl: {:#}", e);
            EXIT_GENERAL_ERROR
        }
    };

    std::process::exit(code);
}

async fn run(cli: Cli) -> Result<i32> {
    let command = cli.command.unwrap_or(Commands::Tui);

    let target = match command {
        Commands::Tui => LogTarget::File,
        _ => LogTarget::Stderr,
    };
    let log_path = logging::init(target, cli.verbose)?;

    tracing::debug!(?log_path, "logging initialized");

    if let Commands::Config { path, init } = command {
        // --init creates the file, so it must not be required to load
        let config = if init {
            UnbiasConfig::default()
        } else {
            UnbiasConfig::load(cli.config.as_deref())?
        };
        let file = match cli.config {
            Some(file) => file,
            None => UnbiasConfig::user_config_path()?,
        };
        let mut stdout = std::io::stdout();
        return commands::config(&config, &file, path, init, &mut stdout);
    }

    let config = UnbiasConfig::load(cli.config.as_deref())?;

    let api: Arc<dyn BiasApi> = Arc::new(HttpBiasApi::new(config.api.clone())?);
    let opts = output_options();
    let mut stdout = std::io::stdout();
    let mut stderr = std::io::stderr();

    match command {
        Commands::Tui => {
            tui::run(&config, api).await?;
            Ok(EXIT_SUCCESS)
        }
        Commands::Analyze { url, json, text } => {
            let mode = if url { InputMode::Url } else { InputMode::Text };
            let input = commands::read_input(text)?;
            let opts = OutputOptions { json, ..opts };
            commands::analyze(api.as_ref(), mode, &input, opts, &mut stdout, &mut stderr).await
        }
        Commands::Rewrite { json, text } => {
            let input = commands::read_input(text)?;
            let opts = OutputOptions { json, ..opts };
            commands::rewrite(api.as_ref(), &input, opts, &mut stdout, &mut stderr).await
        }
        Commands::Config { .. } => Ok(EXIT_SUCCESS),
    }
}

fn output_options() -> OutputOptions {
    let tty = std::io::stdout().is_terminal();
    let width = crossterm::terminal::size()
        .map(|(cols, _)| usize::from(cols).saturating_sub(2))
        .ok()
        .filter(|_| tty)
        .unwrap_or(output::DEFAULT_WIDTH);

    OutputOptions {
        json: false,
        color: tty && std::env::var_os("NO_COLOR").is_none(),
        width,
        spinner: true,
    }
}
