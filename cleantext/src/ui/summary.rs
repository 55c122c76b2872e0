// cleantext/src/ui/summary.rs
//! Tables for the run summary and the rule listing.

use comfy_table::{presets::UTF8_FULL, Cell, ContentArrangement, Table};
use std::io::{self, Write};

use cleantext_core::{PipelineReport, PipelineVariant, RedactionRule};

use super::output_format::print_warn_message;

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

/// Row counts, token counts and per-rule redactions of a finished run.
pub fn report_table(report: &PipelineReport, variant: PipelineVariant) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Metric", "Value"]);
    table.add_row(vec![Cell::new("Pipeline"), Cell::new(variant)]);
    table.add_row(vec![Cell::new("Rows"), Cell::new(report.rows)]);
    table.add_row(vec![Cell::new("Missing cells"), Cell::new(report.missing_cells)]);
    table.add_row(vec![Cell::new("Coerced cells"), Cell::new(report.coerced_cells)]);
    table.add_row(vec![Cell::new("Tokens before filtering"), Cell::new(report.tokens_in)]);
    table.add_row(vec![Cell::new("Stopwords removed"), Cell::new(report.stopwords_removed())]);
    table.add_row(vec![Cell::new("Tokens kept"), Cell::new(report.tokens_out)]);
    for item in report.redactions.items() {
        table.add_row(vec![
            Cell::new(format!("Redacted: {}", item.rule_name)),
            Cell::new(item.occurrences),
        ]);
    }
    table
}

pub fn print_summary<W: Write>(
    report: &PipelineReport,
    variant: PipelineVariant,
    writer: &mut W,
    color: bool,
) -> io::Result<()> {
    writeln!(writer, "{}", report_table(report, variant))?;
    if report.coerced_cells > 0 {
        print_warn_message(
            writer,
            &format!("{} non-text cells were converted to text.", report.coerced_cells),
            color,
        )?;
    }
    Ok(())
}

/// Active redaction rules in application order.
pub fn rules_table(rules: &[RedactionRule]) -> Table {
    let mut table = new_table();
    table.set_header(vec!["#", "Rule", "Pattern", "Description"]);
    for (i, rule) in rules.iter().enumerate() {
        table.add_row(vec![
            Cell::new(i + 1),
            Cell::new(&rule.name),
            Cell::new(rule.pattern.as_deref().unwrap_or("")),
            Cell::new(rule.description.as_deref().unwrap_or("")),
        ]);
    }
    table
}
