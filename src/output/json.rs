use anyhow::Result;

use crate::assessment::PortfolioReport;
use crate::recommendations::Recommendation;

pub fn render_report_json(report: &PortfolioReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

pub fn render_recommendations_json(recommendations: &[Recommendation]) -> Result<String> {
    Ok(serde_json::to_string_pretty(recommendations)?)
}
