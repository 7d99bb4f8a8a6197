use std::fmt::Write;

use crate::assessment::{PortfolioReport, ProgramAssessment};
use crate::health::HealthStatus;
use crate::recommendations::Recommendation;

pub fn render_report_markdown(report: &PortfolioReport) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "# Program Health Report\n");
    let _ = writeln!(
        out,
        "Generated {}\n",
        report.generated_at.format("%Y-%m-%d %H:%M UTC")
    );

    write_summary(&mut out, report);
    write_program_table(&mut out, &report.programs);

    let _ = writeln!(out, "## Recommendations\n");
    write_recommendation_list(&mut out, &report.recommendations);

    out
}

pub fn render_recommendations_markdown(recommendations: &[Recommendation]) -> String {
    let mut out = String::from("# Recommendations\n\n");
    write_recommendation_list(&mut out, recommendations);
    out
}

fn write_summary(out: &mut String, report: &PortfolioReport) {
    let _ = writeln!(out, "## Summary\n");
    let _ = writeln!(out, "| Metric | Value |");
    let _ = writeln!(out, "|--------|-------|");
    let _ = writeln!(out, "| Programs | {} |", report.programs.len());
    let average = report
        .average_health
        .map_or_else(|| "n/a".to_string(), |v| v.to_string());
    let _ = writeln!(out, "| Average health | {average} |");
    for status in [
        HealthStatus::Healthy,
        HealthStatus::NeedsAttention,
        HealthStatus::AtRisk,
    ] {
        let count = report.status_counts.get(&status).copied().unwrap_or(0);
        let _ = writeln!(out, "| {status} | {count} |");
    }
    out.push('\n');
}

fn write_program_table(out: &mut String, programs: &[ProgramAssessment]) {
    if programs.is_empty() {
        return;
    }

    let _ = writeln!(out, "## Programs\n");
    let _ = writeln!(
        out,
        "| ID | Program | Health | Status | Complete | Open risks | Missing |"
    );
    let _ = writeln!(
        out,
        "|----|---------|--------|--------|----------|------------|---------|"
    );
    for p in programs {
        let missing = p.completeness.missing_names().join(", ");
        let _ = writeln!(
            out,
            "| {} | {} | {} | {} | {}% | {} | {} |",
            p.program_id,
            escape_cell(&p.program_name),
            p.health.score,
            p.health.status,
            p.completeness.percentage,
            p.risks.open,
            if missing.is_empty() { "-".to_string() } else { missing }
        );
    }
    out.push('\n');
}

fn write_recommendation_list(out: &mut String, recommendations: &[Recommendation]) {
    if recommendations.is_empty() {
        let _ = writeln!(out, "_No recommendations._");
        return;
    }

    for (i, rec) in recommendations.iter().enumerate() {
        let scope = rec
            .program_id
            .map_or_else(|| "portfolio".to_string(), |id| format!("program {id}"));
        let _ = writeln!(
            out,
            "{}. **{}** `{}` ({}, {})",
            i + 1,
            rec.title,
            rec.priority,
            rec.category,
            scope
        );
        let _ = writeln!(out, "   {}", rec.description);
        let _ = writeln!(out, "   _Reference: {}_", rec.pmi_reference);
    }
}

fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|")
}
