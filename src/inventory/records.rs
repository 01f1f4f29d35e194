// Copyright (C) 2026 Checkmk GmbH - License: GNU General Public License v2
// This file is part of Checkmk (https://checkmk.com). It is subject to the terms and
// conditions defined in the file COPYING, which is part of this source code package.

//! Defines the record types of a backup server inventory snapshot.

use serde::{Deserialize, Serialize};

/// Kind of a backup repository.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RepositoryKind {
    /// A plain, single-extent repository.
    Standard,
    /// An extendable repository composed of multiple extents.
    ScaleOut,
}

/// A named backup storage target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Repository {
    pub(crate) id: String,
    pub(crate) name: String,
    pub(crate) kind: RepositoryKind,
}

impl Repository {
    /// Get the repository name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the repository kind.
    #[must_use]
    pub fn kind(&self) -> RepositoryKind {
        self.kind
    }
}

/// One backup's recoverable state for a workload.
///
/// The owning repository is referenced by id and resolved through the
/// inventory; the workload name is an opaque, byte-exact string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RestorePoint {
    pub(crate) repository_id: String,
    pub(crate) workload: String,
    #[serde(default)]
    pub(crate) storage: Storage,
}

impl RestorePoint {
    /// Get the name of the workload this restore point belongs to.
    #[must_use]
    pub fn workload(&self) -> &str {
        &self.workload
    }

    /// Total stored bytes across all of the point's storage stats.
    ///
    /// A restore point may carry several stats (incremental chain parts);
    /// all are summed. A point with no stats contributes zero.
    #[must_use]
    pub fn stored_bytes(&self) -> u64 {
        self.storage.stats.iter().map(|stat| stat.backup_size).sum()
    }
}

/// Stored-data statistics of a restore point.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Storage {
    #[serde(default)]
    pub(crate) stats: Vec<StorageStat>,
}

/// A single size measurement of stored backup data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageStat {
    #[serde(default)]
    pub(crate) backup_size: u64,
}

#[cfg(test)]
impl Repository {
    /// Create a test repository. This is only available in test builds.
    pub(crate) fn new_for_testing(id: &str, name: &str, kind: RepositoryKind) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            kind,
        }
    }
}

#[cfg(test)]
impl RestorePoint {
    /// Create a test restore point with one stat per given size.
    /// This is only available in test builds.
    pub(crate) fn new_for_testing(repository_id: &str, workload: &str, sizes: &[u64]) -> Self {
        Self {
            repository_id: repository_id.to_string(),
            workload: workload.to_string(),
            storage: Storage {
                stats: sizes
                    .iter()
                    .map(|&backup_size| StorageStat { backup_size })
                    .collect(),
            },
        }
    }
}
