use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::formatting::ColorMode;

#[derive(Parser, Debug)]
#[command(name = "program-health")]
#[command(about = "Program health scoring and PMI recommendations for technical program managers", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Score every program in a portfolio snapshot
    Assess {
        /// JSON snapshot with programs, risks, milestones, dependencies and adopters
        snapshot: PathBuf,

        /// Output format (defaults to `[output] default_format`, then terminal)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Show only the N highest-priority recommendations
        #[arg(long, value_name = "N")]
        top: Option<usize>,

        /// Evaluate overdue milestones as of this RFC 3339 timestamp instead of now
        #[arg(long, value_name = "TIMESTAMP")]
        as_of: Option<String>,

        /// Configuration file (defaults to the nearest .program-health.toml)
        #[arg(short, long, env = "PROGRAM_HEALTH_CONFIG")]
        config: Option<PathBuf>,

        /// Disable colored output
        #[arg(long)]
        plain: bool,

        /// When to color terminal output: auto, always or never
        #[arg(long, value_name = "WHEN", value_parser = parse_color_mode, conflicts_with = "plain")]
        color: Option<ColorMode>,

        /// Send alerts for unhealthy programs to the configured channels
        #[arg(long)]
        notify: bool,

        /// Increase log verbosity (-v info, -vv debug, -vvv trace)
        #[arg(short, long, action = clap::ArgAction::Count)]
        verbosity: u8,
    },

    /// List ranked recommendations without the health table
    Recommend {
        /// JSON snapshot with programs, risks, milestones, dependencies and adopters
        snapshot: PathBuf,

        /// Output format
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Show only the N highest-priority recommendations
        /// (defaults to `[recommendations] daily_limit`)
        #[arg(long, value_name = "N")]
        top: Option<usize>,

        /// Show every recommendation, ignoring the configured limit
        #[arg(long, conflicts_with = "top")]
        all: bool,

        /// Evaluate overdue milestones as of this RFC 3339 timestamp instead of now
        #[arg(long, value_name = "TIMESTAMP")]
        as_of: Option<String>,

        /// Configuration file (defaults to the nearest .program-health.toml)
        #[arg(short, long, env = "PROGRAM_HEALTH_CONFIG")]
        config: Option<PathBuf>,

        /// Disable colored output
        #[arg(long)]
        plain: bool,

        /// When to color terminal output: auto, always or never
        #[arg(long, value_name = "WHEN", value_parser = parse_color_mode, conflicts_with = "plain")]
        color: Option<ColorMode>,

        /// Increase log verbosity (-v info, -vv debug, -vvv trace)
        #[arg(short, long, action = clap::ArgAction::Count)]
        verbosity: u8,
    },

    /// Write a default .program-health.toml to the current directory
    Init {
        /// Overwrite an existing configuration file
        #[arg(short, long)]
        force: bool,
    },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub enum OutputFormat {
    Json,
    Markdown,
    Terminal,
}

impl From<OutputFormat> for crate::output::OutputFormat {
    fn from(f: OutputFormat) -> Self {
        match f {
            OutputFormat::Json => crate::output::OutputFormat::Json,
            OutputFormat::Markdown => crate::output::OutputFormat::Markdown,
            OutputFormat::Terminal => crate::output::OutputFormat::Terminal,
        }
    }
}

fn parse_color_mode(value: &str) -> Result<ColorMode, String> {
    ColorMode::parse(value)
        .ok_or_else(|| format!("invalid color mode '{value}' (expected auto, always or never)"))
}
