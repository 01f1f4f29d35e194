// Copyright (C) 2026 Checkmk GmbH - License: GNU General Public License v2
// This file is part of Checkmk (https://checkmk.com). It is subject to the terms and
// conditions defined in the file COPYING, which is part of this source code package.

//! Attributes restore points to a repository, groups them by workload, and sums their stored bytes.

use serde::Serialize;
use std::cmp::Reverse;
use std::collections::HashMap;

use crate::inventory::{Inventory, Repository, RestorePoint};

/// Total stored bytes per workload name.
pub(crate) type WorkloadTotals<'a> = HashMap<&'a str, u64>;

/// One ranked entry of a usage report: a workload and its total bytes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorkloadUsage<'a> {
    pub(crate) name: &'a str,
    pub(crate) bytes: u64,
}

impl<'a> WorkloadUsage<'a> {
    /// Get the workload name.
    #[must_use]
    pub fn name(&self) -> &'a str {
        self.name
    }

    /// Get the total stored bytes.
    #[must_use]
    pub fn bytes(&self) -> u64 {
        self.bytes
    }
}

/// Filter the inventory's restore points to those owned by `repository`.
///
/// Ownership is resolved by repository id. A restore point whose id
/// matches no known repository is excluded here, silently, and therefore
/// counted in no repository's result.
pub(crate) fn attributed<'a>(
    inventory: &'a Inventory,
    repository: &Repository,
) -> Vec<&'a RestorePoint> {
    let index = inventory.repository_index();
    inventory
        .restore_points()
        .iter()
        .filter(|point| {
            index
                .get(point.repository_id.as_str())
                .is_some_and(|owner| owner.id == repository.id)
        })
        .collect()
}

/// Group restore points by workload name and sum their stored bytes.
///
/// Workload names are matched byte-exact, with no normalization. Points
/// sharing a name sum into one entry; a point with no storage stats
/// contributes zero.
pub(crate) fn aggregate<'a>(points: &[&'a RestorePoint]) -> WorkloadTotals<'a> {
    let mut totals = WorkloadTotals::new();
    for &point in points {
        *totals.entry(point.workload()).or_default() += point.stored_bytes();
    }
    totals
}

/// Order workload totals by size descending; ties by name ascending.
pub(crate) fn rank<'a>(totals: &WorkloadTotals<'a>) -> Vec<WorkloadUsage<'a>> {
    let mut ranked: Vec<WorkloadUsage<'a>> = totals
        .iter()
        .map(|(&name, &bytes)| WorkloadUsage { name, bytes })
        .collect();
    ranked.sort_by_key(|usage| (Reverse(usage.bytes), usage.name));
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inventory::RepositoryKind;

    const GIB: u64 = 1 << 30;

    fn two_repository_inventory() -> Inventory {
        Inventory::new_for_testing(
            vec![
                Repository::new_for_testing("r1", "Main", RepositoryKind::Standard),
                Repository::new_for_testing("r2", "Other", RepositoryKind::Standard),
            ],
            vec![
                RestorePoint::new_for_testing("r1", "vm1", &[2 * GIB]),
                RestorePoint::new_for_testing("r1", "vm1", &[GIB]),
                RestorePoint::new_for_testing("r1", "vm2", &[GIB / 2]),
                RestorePoint::new_for_testing("r2", "vm1", &[7 * GIB]),
                RestorePoint::new_for_testing("gone", "vm3", &[9 * GIB]),
            ],
        )
    }

    fn totals_for<'a>(inventory: &'a Inventory, name: &str) -> WorkloadTotals<'a> {
        let repository = inventory.find_repository(name).unwrap();
        aggregate(&attributed(inventory, repository))
    }

    #[test]
    fn test_conservation_of_total() {
        let inventory = two_repository_inventory();
        let repository = inventory.find_repository("Main").unwrap();
        let points = attributed(&inventory, repository);
        let stat_sum: u64 = points.iter().map(|point| point.stored_bytes()).sum();
        let totals = aggregate(&points);
        assert_eq!(totals.values().sum::<u64>(), stat_sum);
        assert_eq!(stat_sum, 3 * GIB + GIB / 2);
    }

    #[test]
    fn test_no_cross_repository_leakage() {
        let inventory = two_repository_inventory();
        let main = totals_for(&inventory, "Main");
        let other = totals_for(&inventory, "Other");
        assert_eq!(main["vm1"], 3 * GIB);
        assert_eq!(other["vm1"], 7 * GIB);
    }

    #[test]
    fn test_unresolvable_point_counted_nowhere() {
        let inventory = two_repository_inventory();
        for name in ["Main", "Other"] {
            assert!(!totals_for(&inventory, name).contains_key("vm3"));
        }
    }

    #[test]
    fn test_empty_input_yields_empty_result() {
        let inventory = Inventory::new_for_testing(
            vec![Repository::new_for_testing(
                "r1",
                "Main",
                RepositoryKind::Standard,
            )],
            vec![],
        );
        assert!(totals_for(&inventory, "Main").is_empty());
    }

    #[test]
    fn test_workload_names_are_case_sensitive() {
        let inventory = Inventory::new_for_testing(
            vec![Repository::new_for_testing(
                "r1",
                "Main",
                RepositoryKind::Standard,
            )],
            vec![
                RestorePoint::new_for_testing("r1", "VM1", &[1]),
                RestorePoint::new_for_testing("r1", "vm1", &[2]),
            ],
        );
        let totals = totals_for(&inventory, "Main");
        assert_eq!(totals["VM1"], 1);
        assert_eq!(totals["vm1"], 2);
    }

    #[test]
    fn test_rank_orders_by_size_descending() {
        let inventory = two_repository_inventory();
        let ranked = rank(&totals_for(&inventory, "Main"));
        let names: Vec<&str> = ranked.iter().map(|usage| usage.name).collect();
        assert_eq!(names, ["vm1", "vm2"]);
        assert!(ranked.windows(2).all(|pair| pair[0].bytes >= pair[1].bytes));
    }

    #[test]
    fn test_rank_ties_broken_by_name_ascending() {
        let mut totals = WorkloadTotals::new();
        totals.insert("bravo", 5);
        totals.insert("alpha", 5);
        totals.insert("charlie", 9);
        let names: Vec<&str> = rank(&totals).iter().map(|usage| usage.name).collect();
        assert_eq!(names, ["charlie", "alpha", "bravo"]);
    }
}
