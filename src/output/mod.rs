//! Rendering assessments for people and machines.
//!
//! Each format renders to a `String` first; [`emit`] then decides whether it
//! lands on stdout or in a file.

mod json;
mod markdown;
mod terminal;

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use crate::assessment::PortfolioReport;
use crate::formatting::Painter;
use crate::recommendations::Recommendation;

pub use json::{render_recommendations_json, render_report_json};
pub use markdown::{render_recommendations_markdown, render_report_markdown};
pub use terminal::{render_recommendations_terminal, render_report_terminal};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Terminal,
    Json,
    Markdown,
}

impl OutputFormat {
    /// Parse the `[output] default_format` config value.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "terminal" => Some(Self::Terminal),
            "json" => Some(Self::Json),
            "markdown" | "md" => Some(Self::Markdown),
            _ => None,
        }
    }
}

pub fn render_report(
    format: OutputFormat,
    report: &PortfolioReport,
    painter: Painter,
) -> Result<String> {
    Ok(match format {
        OutputFormat::Terminal => render_report_terminal(report, painter),
        OutputFormat::Json => render_report_json(report)?,
        OutputFormat::Markdown => render_report_markdown(report),
    })
}

pub fn render_recommendations(
    format: OutputFormat,
    recommendations: &[Recommendation],
    painter: Painter,
) -> Result<String> {
    Ok(match format {
        OutputFormat::Terminal => render_recommendations_terminal(recommendations, painter),
        OutputFormat::Json => render_recommendations_json(recommendations)?,
        OutputFormat::Markdown => render_recommendations_markdown(recommendations),
    })
}

/// Print `content`, or write it to `output_file` creating parent directories.
pub fn emit(content: &str, output_file: Option<&Path>) -> Result<()> {
    match output_file {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create {}", parent.display()))?;
            }
            fs::write(path, content)
                .with_context(|| format!("Failed to write {}", path.display()))?;
        }
        None => println!("{content}"),
    }
    Ok(())
}
