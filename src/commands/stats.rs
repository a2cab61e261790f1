use owo_colors::OwoColorize;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::api::TicketApi;
use crate::commands::print_json;
use crate::desk::stats::{breakdown_rows, headline};
use crate::error::Result;
use crate::types::{Breakdown, TicketStats};

/// A row in a breakdown table
#[derive(Tabled)]
struct BreakdownRow {
    #[tabled(rename = "Label")]
    label: String,
    #[tabled(rename = "Tickets")]
    count: u64,
}

/// Show aggregate ticket statistics
pub async fn cmd_stats<A: TicketApi>(api: &A, output_json: bool) -> Result<()> {
    let stats = api.stats().await?;

    if output_json {
        return print_json(&stats);
    }

    println!("{}", render_stats(&stats));
    Ok(())
}

fn render_stats(stats: &TicketStats) -> String {
    let mut out = String::new();
    for (value, label) in headline(stats) {
        out.push_str(&format!("{:<16} {}\n", label, value.bold()));
    }
    for (title, breakdown) in [
        ("By Priority", &stats.priority_breakdown),
        ("By Category", &stats.category_breakdown),
    ] {
        if let Some(table) = breakdown_table(breakdown) {
            out.push_str(&format!("\n{}\n{}\n", title.cyan().bold(), table));
        }
    }
    out.trim_end().to_string()
}

fn breakdown_table(breakdown: &Breakdown) -> Option<String> {
    if breakdown.is_empty() {
        return None;
    }
    let rows: Vec<BreakdownRow> = breakdown_rows(breakdown)
        .into_iter()
        .map(|(label, count)| BreakdownRow { label, count })
        .collect();
    let mut table = Table::new(rows);
    table.with(Style::rounded());
    Some(table.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::BreakdownEntry;

    #[test]
    fn test_breakdown_table_keeps_service_order() {
        let breakdown = Breakdown(vec![
            BreakdownEntry {
                key: "low".to_string(),
                count: 3,
            },
            BreakdownEntry {
                key: "critical".to_string(),
                count: 1,
            },
        ]);
        let table = breakdown_table(&breakdown).unwrap();
        insta::assert_snapshot!(table, @r"
        ╭──────────┬─────────╮
        │ Label    │ Tickets │
        ├──────────┼─────────┤
        │ Low      │ 3       │
        │ Critical │ 1       │
        ╰──────────┴─────────╯
        ");
    }

    #[test]
    fn test_empty_breakdown_has_no_table() {
        assert!(breakdown_table(&Breakdown::default()).is_none());
    }
}
