use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;

pub const DEFAULT_DATASET_PATH: &str = "./usa_dataset.csv";
pub const DEFAULT_OUTPUT_DIR: &str = ".";
const DEFAULT_BANNER_DELAY_MS: u64 = 50;

/// Command-line flags. Anything left unset falls back to the environment.
#[derive(Debug, Parser)]
#[command(name = "job-analyzer")]
#[command(about = "Recommends jobs for your skills and charts where and what they require", long_about = None)]
pub struct Cli {
    /// Path to the postings CSV
    #[arg(short, long)]
    pub dataset: Option<PathBuf>,

    /// Directory the HTML reports are written to
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Comma-separated skills; skips the interactive prompt
    #[arg(short, long)]
    pub skills: Option<String>,

    /// Do not open the report in a browser
    #[arg(long)]
    pub no_open: bool,

    /// Skip the banner
    #[arg(short, long)]
    pub quiet: bool,
}

/// Application configuration loaded from environment variables, then
/// overridden by command-line flags.
#[derive(Debug, Clone)]
pub struct Config {
    pub dataset_path: PathBuf,
    pub output_dir: PathBuf,
    pub skills: Option<String>,
    pub open_browser: bool,
    pub show_banner: bool,
    pub banner_delay: Duration,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            dataset_path: env_or("JOB_ANALYZER_DATASET", DEFAULT_DATASET_PATH).into(),
            output_dir: env_or("JOB_ANALYZER_OUTPUT_DIR", DEFAULT_OUTPUT_DIR).into(),
            skills: None,
            open_browser: true,
            show_banner: true,
            banner_delay: Duration::from_millis(
                std::env::var("JOB_ANALYZER_BANNER_DELAY_MS")
                    .unwrap_or_else(|_| DEFAULT_BANNER_DELAY_MS.to_string())
                    .parse::<u64>()
                    .context("JOB_ANALYZER_BANNER_DELAY_MS must be a whole number of milliseconds")?,
            ),
            rust_log: env_or("RUST_LOG", "info"),
        })
    }

    pub fn apply_cli(mut self, cli: Cli) -> Self {
        if let Some(dataset) = cli.dataset {
            self.dataset_path = dataset;
        }
        if let Some(output_dir) = cli.output_dir {
            self.output_dir = output_dir;
        }
        self.skills = cli.skills;
        self.open_browser = !cli.no_open;
        self.show_banner = !cli.quiet;
        self
    }

    pub fn states_map_path(&self) -> PathBuf {
        self.output_dir.join("states_map.html")
    }

    pub fn education_path(&self) -> PathBuf {
        self.output_dir.join("jobs_education.html")
    }

    pub fn result_path(&self) -> PathBuf {
        self.output_dir.join("result.html")
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
