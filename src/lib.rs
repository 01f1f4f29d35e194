// Copyright (C) 2026 Checkmk GmbH - License: GNU General Public License v2
// This file is part of Checkmk (https://checkmk.com). It is subject to the terms and
// conditions defined in the file COPYING, which is part of this source code package.

//! A tool for reporting per-workload stored backup size across backup repositories.
//!
//! This crate provides functionality to:
//! - Load an inventory snapshot exported from a backup server
//! - Attribute restore points to their owning repository
//! - Sum stored size per workload and rank the result largest-first
//! - Render console tables and export per-repository CSV files

pub mod inventory;
pub mod report;

// Re-export key types for convenience
pub use inventory::{Inventory, Repository, RepositoryKind, RestorePoint};
pub use report::{export_report, summarize_report, UsageReport};
