//! Showcase TUI - Main entry point
//!
//! Loads the page, then either runs the interactive slider UI or one of the
//! headless commands.

use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::fs::File;
use std::io::stdout;
use std::path::Path;
use std::sync::Mutex;
use tracing::{debug, error, info};
use tracing_subscriber::{EnvFilter, fmt::writer::BoxMakeWriter};

use showcase::app::App;
use showcase::cli::{Cli, Commands};
use showcase::config_file::ShowcaseConfig;
use showcase::error::{self, ShowcaseError};

/// Initialize the logger. RUST_LOG overrides the level picked here.
///
/// The interactive UI owns the terminal, so without `--log-file` its logs are
/// discarded rather than written over the screen.
fn init_logger(cli: &Cli, interactive: bool) -> Result<(), Box<dyn std::error::Error>> {
    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let (writer, ansi) = match &cli.log_file {
        Some(path) => {
            let file = File::create(path)
                .map_err(|e| error::general_error(format!("Failed to open log file: {}", e)))?;
            (BoxMakeWriter::new(Mutex::new(file)), false)
        }
        None if interactive => (BoxMakeWriter::new(std::io::sink), false),
        None => (BoxMakeWriter::new(std::io::stderr), true),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(ansi)
        .with_file(true)
        .with_line_number(true)
        .init();
    Ok(())
}

/// Built-in page, or the one in `--config`
fn load_config(path: Option<&Path>) -> Result<ShowcaseConfig, Box<dyn std::error::Error>> {
    let Some(path) = path else {
        debug!("Using built-in page");
        return Ok(ShowcaseConfig::default());
    };
    info!("Loading page configuration from: {:?}", path);
    let config = ShowcaseConfig::load_from_file(path)
        .and_then(|c| c.validate().map(|()| c))
        .map_err(|e| ShowcaseError::config(format!("{:#}", e)))?;
    Ok(config)
}

/// Main application entry point
fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse_args();
    let interactive = matches!(cli.command, None | Some(Commands::Run));
    init_logger(&cli, interactive)?;
    info!("Showcase starting up");

    match &cli.command {
        Some(Commands::Validate { file }) => {
            info!("Validating configuration file: {:?}", file);
            let result = ShowcaseConfig::load_from_file(file).and_then(|c| c.validate());
            match result {
                Ok(()) => println!("✓ Configuration file is valid: {}", file.display()),
                Err(e) => {
                    error!("Configuration validation failed: {:#}", e);
                    eprintln!("✗ Configuration validation failed: {:#}", e);
                    std::process::exit(1);
                }
            }
        }
        Some(Commands::DumpConfig { file }) => {
            ShowcaseConfig::default().save_to_file(file)?;
            println!("✓ Wrote built-in page to {}", file.display());
        }
        Some(Commands::Render {
            track,
            index,
            width,
        }) => {
            let config = load_config(cli.config.as_deref())?;
            run_headless_render(&config, track, *index, *width)?;
        }
        Some(Commands::Run) | None => {
            let config = load_config(cli.config.as_deref())?;
            run_tui(&config)?;
        }
    }

    Ok(())
}

/// Print one slider's view state as JSON
fn run_headless_render(
    config: &ShowcaseConfig,
    track: &str,
    index: usize,
    width: Option<f32>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut page = config.build_page();
    page.content_loaded();
    if let Some(width) = width {
        page.dispatch(showcase::UiEvent::Resize { width });
    }
    let view = page.snapshot(track, index)?;
    debug!(transform = %view.transform_css(), "rendered view");
    println!("{}", view.to_json()?);
    Ok(())
}

/// Run the interactive UI
fn run_tui(config: &ShowcaseConfig) -> Result<(), Box<dyn std::error::Error>> {
    debug!("Initializing terminal for TUI mode");

    enable_raw_mode()
        .map_err(|e| error::general_error(format!("Failed to enable raw mode: {}", e)))?;
    crossterm::execute!(stdout(), EnterAlternateScreen, EnableMouseCapture)
        .map_err(|e| error::general_error(format!("Failed to enter alternate screen: {}", e)))?;

    let backend = CrosstermBackend::new(stdout());
    let result = Terminal::new(backend)
        .map_err(|e| error::general_error(format!("Failed to create terminal: {}", e)))
        .and_then(|mut terminal| App::new(config.build_page()).run(&mut terminal));

    // Always restore the terminal, even if the app failed
    let _ = disable_raw_mode();
    let _ = crossterm::execute!(stdout(), DisableMouseCapture, LeaveAlternateScreen);

    result.map_err(Into::into)
}
