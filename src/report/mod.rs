// Copyright (C) 2026 Checkmk GmbH - License: GNU General Public License v2
// This file is part of Checkmk (https://checkmk.com). It is subject to the terms and
// conditions defined in the file COPYING, which is part of this source code package.

//! Usage report struct and public API for one repository's per-workload totals.

mod aggregate;
mod console;
mod export;
mod totals;

pub use aggregate::WorkloadUsage;
pub use console::summarize_report;
pub use export::export_report;

use serde::Serialize;

use crate::inventory::{Inventory, Repository};
use aggregate::{aggregate, attributed, rank};
use totals::ReportTotals;

/// Per-workload stored backup size for one repository, ranked largest
/// first with ties broken by workload name.
#[derive(Debug, Serialize)]
pub struct UsageReport<'a> {
    repository: &'a Repository,
    totals: ReportTotals,
    workloads: Vec<WorkloadUsage<'a>>,
}

impl<'a> UsageReport<'a> {
    /// Create a new report for one repository.
    ///
    /// Restore points are attributed by repository id; points whose id
    /// resolves to no repository are excluded. Workload totals sum every
    /// storage stat of every attributed restore point.
    #[must_use]
    pub fn new(inventory: &'a Inventory, repository: &'a Repository) -> Self {
        let points = attributed(inventory, repository);
        let workloads = rank(&aggregate(&points));
        let totals = ReportTotals::calculate(points.len(), &workloads);

        Self {
            repository,
            totals,
            workloads,
        }
    }

    /// Get the repository this report covers.
    #[must_use]
    pub fn repository(&self) -> &Repository {
        self.repository
    }

    /// Get the ranked per-workload totals.
    #[must_use]
    pub fn workloads(&self) -> &[WorkloadUsage<'a>] {
        &self.workloads
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inventory::{RepositoryKind, RestorePoint};

    const GIB: u64 = 1 << 30;

    #[test]
    fn test_report_assembles_ranked_totals() {
        let inventory = Inventory::new_for_testing(
            vec![Repository::new_for_testing(
                "r1",
                "Main",
                RepositoryKind::Standard,
            )],
            vec![
                RestorePoint::new_for_testing("r1", "vm2", &[GIB / 2]),
                RestorePoint::new_for_testing("r1", "vm1", &[2 * GIB]),
                RestorePoint::new_for_testing("r1", "vm1", &[GIB]),
            ],
        );
        let repository = inventory.find_repository("Main").unwrap();
        let report = UsageReport::new(&inventory, repository);

        assert_eq!(report.repository().name(), "Main");
        assert_eq!(report.totals.restore_points, 3);
        assert_eq!(report.totals.bytes, 3 * GIB + GIB / 2);
        let names: Vec<&str> = report.workloads().iter().map(|usage| usage.name).collect();
        assert_eq!(names, ["vm1", "vm2"]);
    }

    #[test]
    fn test_report_json_projection() {
        let inventory = Inventory::new_for_testing(
            vec![Repository::new_for_testing(
                "r1",
                "Main",
                RepositoryKind::Standard,
            )],
            vec![RestorePoint::new_for_testing("r1", "vm1", &[42])],
        );
        let repository = inventory.find_repository("Main").unwrap();
        let report = UsageReport::new(&inventory, repository);

        let json: serde_json::Value =
            serde_json::from_str(&serde_json::to_string(&report).unwrap()).unwrap();
        assert_eq!(json["repository"]["name"], "Main");
        assert_eq!(json["totals"]["bytes"], 42);
        assert_eq!(json["workloads"][0]["name"], "vm1");
        assert_eq!(json["workloads"][0]["bytes"], 42);
    }
}
