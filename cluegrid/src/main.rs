mod cli;
mod logging;

use anyhow::Result;
use clap::{Parser, Subcommand};
use cluegrid_core::{
    config::{self, Config},
    service::{HttpTriviaProvider, TriviaProvider},
    state::AppState,
};
use cluegrid_tui::Theme;
use std::{process::ExitCode, str::FromStr, sync::Arc};

#[derive(Parser)]
#[command(version, about = "Terminal trivia board game")]
struct Cli {
    /// Override path to config file
    #[arg(short, long)]
    config: Option<std::path::PathBuf>,

    /// Log file verbosity (error, warn, info, debug, trace)
    #[arg(long, value_name = "LEVEL")]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Acquire a game dataset and print it without starting the UI
    Fetch {
        /// Number of categories, overriding the configured board size
        #[arg(long)]
        categories: Option<usize>,
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let json_errors = command_wants_json(cli.command.as_ref());

    let log_level = cli
        .log_level
        .as_deref()
        .unwrap_or(logging::DEFAULT_LOG_LEVEL);
    let log_level = log::LevelFilter::from_str(log_level).unwrap_or(log::LevelFilter::Warn);
    if let Err(error) = logging::setup_logging(log_level) {
        eprintln!("Warning: failed to initialise logging: {error}");
    }

    let config = match config::load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(error) => {
            let cli_error = crate::cli::CliError::system(error.to_string());
            crate::cli::print_error(&cli_error, json_errors);
            return ExitCode::from(2);
        }
    };

    let provider: Arc<dyn TriviaProvider> =
        match HttpTriviaProvider::new(&config.service.base_url) {
            Ok(provider) => Arc::new(provider),
            Err(error) => {
                let cli_error = crate::cli::CliError::system(error.to_string());
                crate::cli::print_error(&cli_error, json_errors);
                return ExitCode::from(2);
            }
        };

    let result = match cli.command {
        Some(Commands::Fetch { categories, json }) => {
            crate::cli::cmd_fetch(&config, provider.as_ref(), categories, json)
        }
        None => run_tui(&config, &provider).map_err(crate::cli::CliError::from),
    };

    match result {
        Ok(()) => ExitCode::from(0),
        Err(error) => {
            crate::cli::print_error(&error, json_errors);
            let code: u8 = match error.code() {
                1 => 1,
                _ => 2,
            };
            ExitCode::from(code)
        }
    }
}

fn run_tui(config: &Config, provider: &Arc<dyn TriviaProvider>) -> Result<()> {
    let mut state = AppState::new(config.board.categories);
    let theme = Theme::from_config(&config.theme);

    let mut terminal = if should_disable_alt_screen() {
        // Inline viewport keeps drawing in the primary screen buffer, which makes
        // tmux capture-pane output usable for automation/debugging.
        ratatui::init_with_options(ratatui::TerminalOptions {
            viewport: ratatui::Viewport::Inline(30),
        })
    } else {
        ratatui::init()
    };
    let result = cluegrid_tui::run(&mut terminal, &mut state, provider, &theme);
    ratatui::restore();

    result
}

fn command_wants_json(command: Option<&Commands>) -> bool {
    match command {
        Some(Commands::Fetch { json, .. }) => *json,
        None => false,
    }
}

fn should_disable_alt_screen() -> bool {
    match std::env::var("CLUEGRID_NO_ALT_SCREEN") {
        Ok(value) => {
            let value = value.trim().to_ascii_lowercase();
            !matches!(value.as_str(), "" | "0" | "false" | "no" | "off")
        }
        Err(_) => false,
    }
}
