use anyhow::Result;
use std::path::PathBuf;

use super::{load_snapshots, parse_as_of, resolve_config, resolve_format, resolve_painter};
use crate::cli;
use crate::formatting::ColorMode;
use crate::output::{emit, render_recommendations};
use crate::recommendations::RecommendationEngine;

pub struct RecommendConfig {
    pub snapshot: PathBuf,
    pub format: Option<cli::OutputFormat>,
    pub output: Option<PathBuf>,
    pub top: Option<usize>,
    pub all: bool,
    pub as_of: Option<String>,
    pub config: Option<PathBuf>,
    pub plain: bool,
    pub color: Option<ColorMode>,
}

/// `--all` wins, then `--top`, then the configured daily limit.
pub fn effective_limit(top: Option<usize>, all: bool, daily_limit: usize) -> Option<usize> {
    if all {
        None
    } else {
        Some(top.unwrap_or(daily_limit))
    }
}

pub fn recommend(args: RecommendConfig) -> Result<()> {
    let config = resolve_config(args.config.as_deref())?;
    let as_of = parse_as_of(args.as_of.as_deref())?;
    let snapshots = load_snapshots(&args.snapshot)?;

    let rec_config = config.recommendations();
    let limit = effective_limit(args.top, args.all, rec_config.daily_limit);
    let engine = RecommendationEngine::new(rec_config, config.completeness());
    let recommendations = engine.generate(&snapshots, as_of, limit);

    let format = resolve_format(args.format, &config);
    let painter = resolve_painter(args.plain, args.color, args.output.is_some(), &config);
    let content = render_recommendations(format, &recommendations, painter)?;
    emit(&content, args.output.as_deref())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn limit_precedence() {
        assert_eq!(effective_limit(None, false, 8), Some(8));
        assert_eq!(effective_limit(Some(3), false, 8), Some(3));
        assert_eq!(effective_limit(None, true, 8), None);
    }
}
