use anyhow::Result;
use std::path::PathBuf;
use tracing::{info, warn};

use super::{load_snapshots, parse_as_of, resolve_config, resolve_format, resolve_painter};
use crate::assessment::{Assessor, PortfolioReport};
use crate::cli;
use crate::formatting::ColorMode;
use crate::integrations::{build_alerts, dispatch, sinks_for, Channel, DispatchSummary};
use crate::output::{emit, render_report};
use crate::recommendations::Recommendation;

pub struct AssessConfig {
    pub snapshot: PathBuf,
    pub format: Option<cli::OutputFormat>,
    pub output: Option<PathBuf>,
    pub top: Option<usize>,
    pub as_of: Option<String>,
    pub config: Option<PathBuf>,
    pub plain: bool,
    pub color: Option<ColorMode>,
    pub notify: bool,
}

pub fn assess_portfolio(args: AssessConfig) -> Result<()> {
    let config = resolve_config(args.config.as_deref())?;
    let as_of = parse_as_of(args.as_of.as_deref())?;
    let snapshots = load_snapshots(&args.snapshot)?;

    let limit = args
        .top
        .or(Some(config.recommendations().dashboard_limit));
    let assessor = Assessor::from_config(&config);
    let report = assessor.assess_portfolio(&snapshots, as_of, limit);

    if args.notify {
        let channels = config.enabled_channels();
        if channels.is_empty() {
            warn!("--notify given but no channels are enabled under [integrations]");
        } else {
            // Escalations come from the full ranking; the limit only trims the report.
            let ranked = assessor.recommend(&snapshots, as_of, None);
            let summary = notify(&report, &ranked, &channels);
            info!(
                delivered = summary.delivered.len(),
                failed = summary.failures.len(),
                "Dispatched alerts"
            );
        }
    }

    let format = resolve_format(args.format, &config);
    let painter = resolve_painter(args.plain, args.color, args.output.is_some(), &config);
    let content = render_report(format, &report, painter)?;
    emit(&content, args.output.as_deref())
}

fn notify(
    report: &PortfolioReport,
    recommendations: &[Recommendation],
    channels: &[Channel],
) -> DispatchSummary {
    let sinks = sinks_for(channels);
    let alerts: Vec<_> = report
        .programs
        .iter()
        .flat_map(|assessment| build_alerts(assessment, recommendations))
        .collect();
    dispatch(&alerts, &sinks)
}
