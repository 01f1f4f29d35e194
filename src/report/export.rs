// Copyright (C) 2026 Checkmk GmbH - License: GNU General Public License v2
// This file is part of Checkmk (https://checkmk.com). It is subject to the terms and
// conditions defined in the file COPYING, which is part of this source code package.

//! Writes usage reports as CSV files, one per repository.

use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use super::UsageReport;

/// Write the report as `<repository-name>.csv` into `dir`.
///
/// Columns are `Name,Value` with the raw byte count, rows in ranked
/// order. Raw bytes here intentionally differ from the console table's
/// rounded gigabyte display. An existing file of the same name is
/// overwritten.
///
/// # Errors
/// Returns an error if the file cannot be created or written.
pub fn export_report(report: &UsageReport<'_>, dir: &Path) -> Result<PathBuf> {
    let path = dir.join(format!("{}.csv", report.repository.name()));
    let file = File::create(&path)
        .with_context(|| format!("Failed to create CSV output file: {}", path.display()))?;
    let mut writer = BufWriter::new(file);

    writeln!(writer, "{},{}", quote("Name"), quote("Value"))?;
    for usage in &report.workloads {
        writeln!(writer, "{},{}", quote(usage.name), quote(&usage.bytes.to_string()))?;
    }

    writer
        .flush()
        .with_context(|| format!("Failed to write CSV output file: {}", path.display()))?;
    Ok(path)
}

/// Quote a CSV field, doubling embedded quotes.
fn quote(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}
