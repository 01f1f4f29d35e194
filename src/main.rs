// Copyright (C) 2026 Checkmk GmbH - License: GNU General Public License v2
// This file is part of Checkmk (https://checkmk.com). It is subject to the terms and
// conditions defined in the file COPYING, which is part of this source code package.
mod args;

use anyhow::{anyhow, bail, Context, Result};
use clap::Parser;
use std::path::Path;

use args::Args;
use backup_usage_reporter::inventory::{Inventory, Repository, RepositoryKind};
use backup_usage_reporter::report::{export_report, summarize_report, UsageReport};

fn main() -> Result<()> {
    let args = Args::parse();
    let inventory = load_inventory(&args.snapshot)?;
    let repositories = select_repositories(&inventory, &args)?;
    for repository in repositories {
        let report = UsageReport::new(&inventory, repository);
        if args.csv {
            let path = export_report(&report, Path::new("."))?;
            eprintln!("Wrote CSV report: file={}", path.display());
        } else {
            summarize_report(&report);
        }
    }
    Ok(())
}

/// Load the inventory snapshot from a filepath.
///
/// # Errors
/// Returns an error if the snapshot cannot be read or fails validation.
fn load_inventory(path: &Path) -> Result<Inventory> {
    eprintln!("Loading inventory snapshot: file={}", path.display());

    let inventory = Inventory::load(path)
        .with_context(|| format!("Failed to load inventory snapshot: {}", path.display()))?;

    eprintln!(
        "Loading completed: repositories={}, restore points={}",
        inventory.repositories().len(),
        inventory.restore_points().len()
    );
    Ok(inventory)
}

/// Resolve the command-line selection against the live repository list.
///
/// Without `--scale-out`, every requested name must exist. With
/// `--scale-out`, the selection is every scale-out repository, narrowed
/// by any explicitly requested names (which must be scale-out).
fn select_repositories<'a>(inventory: &'a Inventory, args: &Args) -> Result<Vec<&'a Repository>> {
    if args.scale_out && args.repository.is_empty() {
        let scale_outs = inventory.scale_outs();
        if scale_outs.is_empty() {
            eprintln!("No scale-out repositories in inventory");
        }
        return Ok(scale_outs);
    }

    args.repository
        .iter()
        .map(|name| {
            let repository = find_repository(inventory, name)?;
            if args.scale_out && repository.kind() != RepositoryKind::ScaleOut {
                bail!("Repository is not a scale-out repository: {name}");
            }
            Ok(repository)
        })
        .collect()
}

fn find_repository<'a>(inventory: &'a Inventory, name: &str) -> Result<&'a Repository> {
    inventory.find_repository(name).ok_or_else(|| {
        let available: Vec<&str> = inventory
            .repositories()
            .iter()
            .map(Repository::name)
            .collect();
        anyhow!(
            "Unknown repository: {name} (available: {})",
            available.join(", ")
        )
    })
}
