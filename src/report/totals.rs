// Copyright (C) 2026 Checkmk GmbH - License: GNU General Public License v2
// This file is part of Checkmk (https://checkmk.com). It is subject to the terms and
// conditions defined in the file COPYING, which is part of this source code package.

//! Roll-up counters for one repository's usage report.

use serde::Serialize;

use super::aggregate::WorkloadUsage;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub(crate) struct ReportTotals {
    pub(crate) restore_points: usize,
    pub(crate) workloads: usize,
    pub(crate) bytes: u64,
}

impl ReportTotals {
    #[must_use]
    pub(crate) fn calculate(restore_points: usize, workloads: &[WorkloadUsage<'_>]) -> Self {
        Self {
            restore_points,
            workloads: workloads.len(),
            bytes: workloads.iter().map(|usage| usage.bytes).sum(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calculate() {
        let workloads = vec![
            WorkloadUsage {
                name: "vm1",
                bytes: 30,
            },
            WorkloadUsage {
                name: "vm2",
                bytes: 12,
            },
        ];
        let totals = ReportTotals::calculate(5, &workloads);
        assert_eq!(totals.restore_points, 5);
        assert_eq!(totals.workloads, 2);
        assert_eq!(totals.bytes, 42);
    }

    #[test]
    fn test_calculate_empty() {
        let totals = ReportTotals::calculate(0, &[]);
        assert_eq!(totals.workloads, 0);
        assert_eq!(totals.bytes, 0);
    }
}
