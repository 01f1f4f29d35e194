// Copyright (C) 2026 Checkmk GmbH - License: GNU General Public License v2
// This file is part of Checkmk (https://checkmk.com). It is subject to the terms and
// conditions defined in the file COPYING, which is part of this source code package.

//! Formats and prints usage report summaries to the console.

use comfy_table::{Cell, Table};

use super::aggregate::WorkloadUsage;
use super::UsageReport;

const BYTES_PER_GIB: f64 = 1_073_741_824.0;

/// Summarize the report to the console.
///
/// Prints the repository header followed by the per-workload usage table,
/// largest workload first.
pub fn summarize_report(report: &UsageReport<'_>) {
    println!("Repository: {}", report.repository.name());
    println!("Restore points: {}\n", report.totals.restore_points);

    println!("{}\n", usage_table(report));
}

/// Create a table with the default preset styling.
fn default_table_preset() -> Table {
    let mut table = Table::new();
    table
        .load_preset(comfy_table::presets::UTF8_FULL_CONDENSED)
        .apply_modifier(comfy_table::modifiers::UTF8_ROUND_CORNERS)
        .set_content_arrangement(comfy_table::ContentArrangement::Dynamic);
    table
}

/// Create the per-workload usage table with a bold total row.
fn usage_table(report: &UsageReport<'_>) -> Table {
    let mut table = default_table_preset();
    table.set_header(vec![
        Cell::new("Workload").add_attribute(comfy_table::Attribute::Bold),
        Cell::new("Size (GiB)").add_attribute(comfy_table::Attribute::Bold),
    ]);
    for (name, size) in usage_rows(&report.workloads) {
        table.add_row(vec![Cell::new(name), Cell::new(size)]);
    }
    table.add_row(vec![
        Cell::new("Total").add_attribute(comfy_table::Attribute::Bold),
        Cell::new(format_gib(report.totals.bytes)).add_attribute(comfy_table::Attribute::Bold),
    ]);
    table
}

/// Project ranked workloads onto display rows of (name, size in GiB).
pub(crate) fn usage_rows<'a>(workloads: &[WorkloadUsage<'a>]) -> Vec<(&'a str, String)> {
    workloads
        .iter()
        .map(|usage| (usage.name, format_gib(usage.bytes)))
        .collect()
}

/// Format a byte count as binary gigabytes with two decimal places.
///
/// Divides by 1024³ and rounds half away from zero on the second decimal.
/// Note the CSV export intentionally carries raw bytes instead of this
/// rounded value.
pub(crate) fn format_gib(bytes: u64) -> String {
    let gib = bytes as f64 / BYTES_PER_GIB;
    format!("{:.2}", (gib * 100.0).round() / 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    const GIB: u64 = 1 << 30;

    #[test]
    fn test_format_gib_whole_values() {
        assert_eq!(format_gib(0), "0.00");
        assert_eq!(format_gib(GIB), "1.00");
        assert_eq!(format_gib(3 * GIB), "3.00");
    }

    #[test]
    fn test_format_gib_half_gib() {
        assert_eq!(format_gib(GIB + GIB / 2), "1.50");
    }

    #[test]
    fn test_format_gib_rounds_half_away_from_zero() {
        // 2^27 bytes is exactly 0.125 GiB, i.e. 12.5 hundredths.
        assert_eq!(format_gib(1 << 27), "0.13");
    }

    #[test]
    fn test_format_gib_rounds_below_half_down() {
        // 0.124 GiB worth of bytes.
        assert_eq!(format_gib(133_143_986), "0.12");
    }

    #[test]
    fn test_usage_rows_scenario() {
        // vm1 holds two restore points (2 GiB + 1 GiB), vm2 one (0.5 GiB).
        let workloads = vec![
            WorkloadUsage {
                name: "vm1",
                bytes: 3 * GIB,
            },
            WorkloadUsage {
                name: "vm2",
                bytes: GIB / 2,
            },
        ];
        let rows = usage_rows(&workloads);
        assert_eq!(
            rows,
            vec![("vm1", "3.00".to_string()), ("vm2", "0.50".to_string())]
        );
    }
}
