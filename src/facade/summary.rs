use comfy_table::{Cell, CellAlignment, ContentArrangement, Row as CRow, Table, presets::ASCII_MARKDOWN};

use super::run::RunReport;

fn count_row(label: &str, value: usize) -> CRow {
    let mut row = CRow::new();
    row.add_cell(Cell::new(label).set_alignment(CellAlignment::Left));
    row.add_cell(Cell::new(value).set_alignment(CellAlignment::Right));
    row
}

/// Counts and per-kind dropped-record totals.
/// Columns: Item | Count
pub fn summary_table(rep: &RunReport) -> Table {
    let mut t = Table::new();
    t.load_preset(ASCII_MARKDOWN);
    t.set_content_arrangement(ContentArrangement::Dynamic);
    t.set_header(vec!["Item", "Count"]);
    t.add_row(count_row("projects", *rep.projects()));
    t.add_row(count_row("allocations", *rep.allocations()));
    t.add_row(count_row("resource groups", *rep.resource_groups()));
    t.add_row(count_row("resources", *rep.resources()));
    for (kind, n) in rep.diagnostics().tally() {
        t.add_row(count_row(&format!("dropped: {}", kind), n));
    }
    t
}

pub fn print_summary(rep: &RunReport) {
    println!("{}", summary_table(rep));
    for path in rep.written() {
        println!("wrote {}", path.display());
    }
}
