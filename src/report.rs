//! Terminal tables for check and comparison results.
use crate::comparator::ComparisonReport;
use crate::common::{bytes2hr, secs2hr};
use crate::uniqueness::Verdict;
use comfy_table::{
    Cell, CellAlignment, ContentArrangement, Table,
    modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL,
};

fn new_table(header: Vec<Cell>) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(header);
    table
}

fn right(text: String) -> Cell {
    Cell::new(text).set_alignment(CellAlignment::Right)
}

pub fn comparison_table(report: &ComparisonReport) -> Table {
    let mut table = new_table(vec![
        Cell::new(""),
        Cell::new("Exact count").set_alignment(CellAlignment::Center),
        Cell::new("HyperLogLog").set_alignment(CellAlignment::Center),
    ]);

    table.add_row(vec![
        Cell::new("Unique elements"),
        right(format!("{:.1}", report.exact_count as f64)),
        right(format!("{:.1}", report.hll_estimate)),
    ]);
    table.add_row(vec![
        Cell::new("Execution time (s)"),
        right(format!("{:.2}", report.exact_secs())),
        right(format!("{:.2}", report.hll_secs())),
    ]);
    table.add_row(vec![
        Cell::new("Execution time"),
        right(secs2hr(report.exact_secs())),
        right(secs2hr(report.hll_secs())),
    ]);
    table.add_row(vec![
        Cell::new("Relative error"),
        right("-".to_string()),
        right(format!("{:.2}%", report.relative_error() * 100.0)),
    ]);
    table.add_row(vec![
        Cell::new("Sketch memory"),
        right("-".to_string()),
        right(bytes2hr(report.hll_memory)),
    ]);
    table
}

pub fn verdict_table(results: &[(String, Verdict)]) -> Table {
    let mut table = new_table(vec![
        Cell::new("Password").set_alignment(CellAlignment::Center),
        Cell::new("Status").set_alignment(CellAlignment::Center),
    ]);
    for (password, verdict) in results {
        table.add_row(vec![
            Cell::new(format!("{password:?}")),
            Cell::new(verdict.to_string()),
        ]);
    }
    table
}
