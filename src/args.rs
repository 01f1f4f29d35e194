// Copyright (C) 2026 Checkmk GmbH - License: GNU General Public License v2
// This file is part of Checkmk (https://checkmk.com). It is subject to the terms and
// conditions defined in the file COPYING, which is part of this source code package.
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "backup_usage_reporter")]
#[command(version)]
#[command(about = "Reports per-workload stored backup size for repositories of a backup server")]
pub(crate) struct Args {
    /// Path to the inventory snapshot file (JSON export of the backup server).
    pub snapshot: PathBuf,

    #[arg(
        long,
        short = 'r',
        value_delimiter = ',',
        required_unless_present = "scale_out",
        long_help = "Name(s) of the repositories to report on.\n\
                Repeatable, or comma-separated in a single value.\n\
                Names are validated against the loaded inventory.\n\
                Mandatory unless --scale-out is given."
    )]
    pub repository: Vec<String>,

    /// Write one <repository-name>.csv per repository instead of printing tables.
    #[arg(long)]
    pub csv: bool,

    /// Report every scale-out repository; explicit --repository names narrow the set.
    #[arg(long)]
    pub scale_out: bool,
}
