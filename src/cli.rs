use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Showcase - testimonial and case-study carousels in the terminal
#[derive(Parser)]
#[command(name = "showcase")]
#[command(about = "Browse the marketing page sliders in an interactive terminal UI")]
#[command(version)]
pub struct Cli {
    /// Page configuration file (JSON). Defaults to the built-in page.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Write logs to this file instead of stderr
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    /// Log at debug level (RUST_LOG still takes precedence)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the interactive slider UI
    Run,
    /// Validate a page configuration file
    Validate {
        /// Path to configuration file to validate
        file: PathBuf,
    },
    /// Write the built-in page configuration to a file
    DumpConfig {
        /// Destination path
        file: PathBuf,
    },
    /// Print a slider's view state as JSON without starting the UI
    Render {
        /// Track selector of the slider (e.g. .slider-track)
        #[arg(short, long)]
        track: String,
        /// Card index to navigate to
        #[arg(short, long, default_value_t = 0)]
        index: usize,
        /// Viewport width in pixels (defaults to the config's)
        #[arg(short, long)]
        width: Option<f32>,
    },
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
