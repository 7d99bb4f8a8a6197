use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, CellAlignment, Color, ContentArrangement, Table};
use std::fmt::Write;

use crate::assessment::{PortfolioReport, ProgramAssessment};
use crate::formatting::Painter;
use crate::health::{HealthColor, HealthStatus};
use crate::recommendations::Recommendation;

pub fn render_report_terminal(report: &PortfolioReport, painter: Painter) -> String {
    let mut out = String::new();

    let _ = writeln!(
        out,
        "{}",
        painter.header(&format!(
            "PROGRAM HEALTH  ({})",
            report.generated_at.format("%Y-%m-%d %H:%M UTC")
        ))
    );

    let average = report
        .average_health
        .map_or_else(|| "n/a".to_string(), |v| v.to_string());
    let counts: Vec<String> = [
        HealthStatus::Healthy,
        HealthStatus::NeedsAttention,
        HealthStatus::AtRisk,
    ]
    .iter()
    .map(|status| {
        let n = report.status_counts.get(status).copied().unwrap_or(0);
        painter.health(status.color(), &format!("{status}: {n}"))
    })
    .collect();
    let _ = writeln!(
        out,
        "Programs: {}  Average health: {}  {}",
        report.programs.len(),
        average,
        counts.join("  ")
    );

    if !report.programs.is_empty() {
        let _ = writeln!(out, "{}", program_table(&report.programs, painter));
    }

    let _ = writeln!(out);
    out.push_str(&render_recommendations_terminal(&report.recommendations, painter));
    out
}

pub fn render_recommendations_terminal(recommendations: &[Recommendation], painter: Painter) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", painter.header("RECOMMENDATIONS"));

    if recommendations.is_empty() {
        let _ = writeln!(out, "No recommendations. Every program follows the checked practices.");
        return out;
    }

    for (i, rec) in recommendations.iter().enumerate() {
        let tag = format!("[{}]", rec.priority.label().to_uppercase());
        let scope = rec
            .program_id
            .map_or_else(|| "portfolio".to_string(), |id| format!("program {id}"));
        let _ = writeln!(
            out,
            "{:>3}. {} {} ({}, {})",
            i + 1,
            painter.priority(rec.priority, &tag),
            rec.title,
            rec.category,
            scope
        );
        let _ = writeln!(out, "     {}", rec.description);
        let _ = writeln!(out, "     Reference: {}", rec.pmi_reference);
    }
    out
}

fn program_table(programs: &[ProgramAssessment], painter: Painter) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            "ID", "Program", "Health", "Status", "Complete", "Risks", "Missing",
        ]);

    for p in programs {
        let health_cells = [
            Cell::new(p.health.score).set_alignment(CellAlignment::Right),
            Cell::new(p.health.status),
        ];
        let health_cells = health_cells.map(|cell| {
            if painter.enabled() {
                cell.fg(table_color(p.health.color))
            } else {
                cell
            }
        });
        let [score_cell, status_cell] = health_cells;

        table.add_row(vec![
            Cell::new(p.program_id),
            Cell::new(&p.program_name),
            score_cell,
            status_cell,
            Cell::new(format!("{}%", p.completeness.percentage)).set_alignment(CellAlignment::Right),
            Cell::new(format!("{} open / {} critical", p.risks.open, p.risks.critical)),
            Cell::new(p.completeness.missing_count()).set_alignment(CellAlignment::Right),
        ]);
    }
    table
}

fn table_color(color: HealthColor) -> Color {
    match color {
        HealthColor::Green => Color::Green,
        HealthColor::Yellow => Color::Yellow,
        HealthColor::Red => Color::Red,
    }
}
