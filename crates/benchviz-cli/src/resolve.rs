// Dweve BenchViz - Benchmark Result Visualization
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Results directory resolution.

use crate::error::CliError;
use std::env;
use std::path::{Path, PathBuf};

/// Name of the directory benchmark runs write their summaries to.
pub const RESULTS_DIR_NAME: &str = "benchmark_results";

/// Name of the chart directory created inside the results directory.
pub const CHARTS_DIR_NAME: &str = "charts";

/// Default results directory for a program installed in `exe_dir`.
///
/// Prefers a sibling `benchmark_results` of `exe_dir` when it exists and
/// falls back to `exe_dir/benchmark_results` otherwise.
///
/// # Examples
///
/// ```
/// use benchviz_cli::resolve::default_results_dir;
/// use std::path::Path;
///
/// let root = tempfile::tempdir().unwrap();
/// let bin = root.path().join("bin");
/// assert_eq!(default_results_dir(&bin), bin.join("benchmark_results"));
///
/// std::fs::create_dir(root.path().join("benchmark_results")).unwrap();
/// assert_eq!(default_results_dir(&bin), root.path().join("benchmark_results"));
/// ```
pub fn default_results_dir(exe_dir: &Path) -> PathBuf {
    match exe_dir.parent().map(|parent| parent.join(RESULTS_DIR_NAME)) {
        Some(candidate) if candidate.exists() => candidate,
        _ => exe_dir.join(RESULTS_DIR_NAME),
    }
}

/// Results directory for this run: `explicit` if given, otherwise the
/// default next to the running executable.
///
/// # Errors
///
/// Returns `CliError::Io` if the executable path cannot be determined.
pub fn resolve_results_dir(explicit: Option<PathBuf>) -> Result<PathBuf, CliError> {
    if let Some(dir) = explicit {
        return Ok(dir);
    }

    let exe = env::current_exe().map_err(|e| CliError::io_error("<current executable>", e))?;
    let exe_dir = exe.parent().ok_or_else(|| {
        CliError::invalid_input(format!(
            "executable '{}' has no parent directory",
            exe.display()
        ))
    })?;
    Ok(default_results_dir(exe_dir))
}

/// Chart directory for `results_dir`.
pub fn charts_dir(results_dir: &Path) -> PathBuf {
    results_dir.join(CHARTS_DIR_NAME)
}
