// Copyright (C) 2026 Checkmk GmbH - License: GNU General Public License v2
// This file is part of Checkmk (https://checkmk.com). It is subject to the terms and
// conditions defined in the file COPYING, which is part of this source code package.

//! Loads and validates inventory snapshots exported from the backup server.

use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use super::records::{Repository, RestorePoint};
use super::Inventory;

/// Result type for inventory operations.
pub type InventoryResult<T> = std::result::Result<T, InventoryError>;

/// Errors that can occur while loading an inventory snapshot.
#[derive(Debug, Error)]
pub enum InventoryError {
    #[error("Failed to read snapshot file: {path:?}")]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse snapshot file: {path:?}")]
    ParseFailed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("Duplicate repository name in snapshot: {name}")]
    DuplicateRepositoryName { name: String },
    #[error("Duplicate repository id in snapshot: {id}")]
    DuplicateRepositoryId { id: String },
}

/// Wire shape of a snapshot file. Both sections may be absent.
#[derive(Deserialize)]
struct Snapshot {
    #[serde(default)]
    repositories: Vec<Repository>,
    #[serde(default)]
    restore_points: Vec<RestorePoint>,
}

/// Load an inventory from a snapshot file.
///
/// # Errors
/// Returns an error if the file cannot be read, is not valid snapshot
/// JSON, or contains repositories with duplicate names or ids.
pub(crate) fn load(path: &Path) -> InventoryResult<Inventory> {
    let content = fs::read_to_string(path).map_err(|e| InventoryError::ReadFailed {
        path: path.to_path_buf(),
        source: e,
    })?;
    parse(&content, path)
}

/// Parse and validate snapshot JSON.
///
/// Repository names must be unique because the command line selects
/// repositories by name; ids must be unique because restore points are
/// attributed by id. A restore point referencing an unknown repository id
/// is accepted here and excluded later during aggregation.
pub(crate) fn parse(content: &str, path: &Path) -> InventoryResult<Inventory> {
    let snapshot: Snapshot =
        serde_json::from_str(content).map_err(|e| InventoryError::ParseFailed {
            path: path.to_path_buf(),
            source: e,
        })?;
    validate(&snapshot.repositories)?;
    Ok(Inventory::new(snapshot.repositories, snapshot.restore_points))
}

fn validate(repositories: &[Repository]) -> InventoryResult<()> {
    let mut names = HashSet::new();
    let mut ids = HashSet::new();
    for repository in repositories {
        if !names.insert(repository.name.as_str()) {
            return Err(InventoryError::DuplicateRepositoryName {
                name: repository.name.clone(),
            });
        }
        if !ids.insert(repository.id.as_str()) {
            return Err(InventoryError::DuplicateRepositoryId {
                id: repository.id.clone(),
            });
        }
    }
    Ok(())
}
