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

//! Platform names derived from summary file names.

use std::path::Path;

/// Derive a platform name from a summary file path.
///
/// Takes the last underscore-delimited segment of the file name and keeps
/// the text before its first `.`. Only the final segment survives, so a
/// platform name that itself contains underscores is truncated to its last
/// part.
///
/// Returns `None` when that token is empty.
///
/// # Examples
///
/// ```
/// use benchviz_csv::platform_from_path;
///
/// assert_eq!(
///     platform_from_path("results/benchmark_summary_flink.csv").as_deref(),
///     Some("flink")
/// );
/// assert_eq!(
///     platform_from_path("benchmark_summary_apache_flink.csv").as_deref(),
///     Some("flink")
/// );
/// assert_eq!(platform_from_path("benchmark_summary_.csv"), None);
/// ```
pub fn platform_from_path(path: impl AsRef<Path>) -> Option<String> {
    let name = path.as_ref().file_name()?.to_string_lossy();
    let segment = name.rsplit('_').next()?;
    let token = segment.split('.').next()?;
    if token.is_empty() {
        None
    } else {
        Some(token.to_string())
    }
}
