// Copyright (C) 2026 Checkmk GmbH - License: GNU General Public License v2
// This file is part of Checkmk (https://checkmk.com). It is subject to the terms and
// conditions defined in the file COPYING, which is part of this source code package.

//! Owns the records loaded from a snapshot. Provides API for looking up repositories and resolving restore-point ownership.

mod records;
mod snapshot;

use std::collections::HashMap;
use std::path::Path;

pub use records::{Repository, RepositoryKind, RestorePoint, Storage, StorageStat};
pub use snapshot::{InventoryError, InventoryResult};

/// Repositories keyed by their id, for restore-point attribution.
pub(crate) type RepositoryIndex<'a> = HashMap<&'a str, &'a Repository>;

/// In-memory view of one backup server inventory snapshot.
#[derive(Debug)]
pub struct Inventory {
    repositories: Vec<Repository>,
    restore_points: Vec<RestorePoint>,
}

impl Inventory {
    /// Load an inventory from a snapshot file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed, or if the
    /// snapshot contains repositories with duplicate names or ids.
    pub fn load(path: &Path) -> InventoryResult<Self> {
        snapshot::load(path)
    }

    pub(crate) fn new(repositories: Vec<Repository>, restore_points: Vec<RestorePoint>) -> Self {
        Self {
            repositories,
            restore_points,
        }
    }

    /// Get all repositories in the inventory.
    #[must_use]
    pub fn repositories(&self) -> &[Repository] {
        &self.repositories
    }

    /// Get all restore points in the inventory.
    #[must_use]
    pub fn restore_points(&self) -> &[RestorePoint] {
        &self.restore_points
    }

    /// Get subset of scale-out repositories.
    #[must_use]
    pub fn scale_outs(&self) -> Vec<&Repository> {
        self.repositories
            .iter()
            .filter(|repository| repository.kind == RepositoryKind::ScaleOut)
            .collect()
    }

    /// Look up a repository by exact name.
    #[must_use]
    pub fn find_repository(&self, name: &str) -> Option<&Repository> {
        self.repositories
            .iter()
            .find(|repository| repository.name == name)
    }

    /// Resolve the repository owning a restore point.
    ///
    /// Returns `None` when the point's repository id matches no known
    /// repository; such points are excluded from every aggregation.
    #[must_use]
    pub fn repository_of(&self, point: &RestorePoint) -> Option<&Repository> {
        self.repositories
            .iter()
            .find(|repository| repository.id == point.repository_id)
    }

    pub(crate) fn repository_index(&self) -> RepositoryIndex<'_> {
        self.repositories
            .iter()
            .map(|repository| (repository.id.as_str(), repository))
            .collect()
    }

    #[cfg(test)]
    /// Create a test inventory from the given records.
    /// This is only available in test builds.
    pub(crate) fn new_for_testing(
        repositories: Vec<Repository>,
        restore_points: Vec<RestorePoint>,
    ) -> Self {
        Self::new(repositories, restore_points)
    }
}
