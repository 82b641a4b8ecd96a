use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about)]
pub struct Args {
    /// Algorithm to visualize (contains-duplicate, two-sum, max-profit)
    #[arg(short, long)]
    pub algorithm: Option<String>,

    /// Source listing language (python, javascript, java, cpp)
    #[arg(short, long)]
    pub language: Option<String>,

    /// Comma-separated input numbers, e.g. "7, 1, 5, 3, 6, 4"
    #[arg(short, long)]
    pub input: Option<String>,

    /// Target sum for two-sum
    #[arg(short, long, allow_hyphen_values = true)]
    pub target: Option<String>,

    /// Playback speed multiplier
    #[arg(short, long)]
    pub speed: Option<f64>,

    /// Start playing immediately
    #[arg(long, num_args = 0..=1, default_missing_value = "true")]
    pub autoplay: Option<bool>,

    /// Path to config TOML; must exist when given (default: algoscope.toml, optional)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Write logs to this file
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Log level or filter directive (e.g. debug, algoscope=trace)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Print the available algorithms and languages, then exit
    #[arg(long, default_value_t = false)]
    pub list: bool,
}
