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

//! Temporary results directories.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// File name the benchmark runner writes for `platform`.
///
/// ```
/// assert_eq!(
///     benchviz_test::summary_file_name("flink"),
///     "benchmark_summary_flink.csv"
/// );
/// ```
pub fn summary_file_name(platform: &str) -> String {
    format!("benchmark_summary_{}.csv", platform)
}

/// A results directory in a fresh temporary location.
///
/// The directory and its contents are removed when the value is dropped.
/// Builder methods panic on I/O failure, since they only run inside tests.
#[derive(Debug)]
pub struct ResultsDir {
    dir: TempDir,
    summaries: usize,
}

impl Default for ResultsDir {
    fn default() -> Self {
        Self::new()
    }
}

impl ResultsDir {
    /// Creates an empty results directory.
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("create temp results dir"),
            summaries: 0,
        }
    }

    /// Writes `benchmark_summary_<platform>.csv`.
    pub fn summary(mut self, platform: &str, csv: &str) -> Self {
        self.write(&summary_file_name(platform), csv);
        self.summaries += 1;
        self
    }

    /// Writes an arbitrary file, creating parent directories.
    pub fn file(self, name: &str, contents: &str) -> Self {
        self.write(name, contents);
        self
    }

    /// Path of the directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Where chart images are written for this directory.
    pub fn charts_dir(&self) -> PathBuf {
        self.dir.path().join("charts")
    }

    /// Number of summary files written through [`ResultsDir::summary`].
    pub fn summary_count(&self) -> usize {
        self.summaries
    }

    fn write(&self, name: &str, contents: &str) {
        let path = self.dir.path().join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create fixture parent dir");
        }
        fs::write(&path, contents).expect("write fixture file");
    }
}
