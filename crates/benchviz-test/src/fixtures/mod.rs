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

//! Canonical summary files.
//!
//! - **summaries**: Well-formed `benchmark_summary_*.csv` contents
//! - **errors**: Summary files every loader must reject
//! - **builders**: Builder for in-memory result tables

pub mod builders;
pub mod errors;
mod summaries;

pub use summaries::*;

use crate::SampleList;

/// Returns every well-formed summary sample as (platform, csv) pairs.
///
/// Useful for running the same test across all fixtures.
pub fn all() -> SampleList {
    vec![
        ("flink", flink_summary()),
        ("spark", spark_summary()),
        ("rpi", repeated_runs()),
        ("edge", sparse_metrics()),
        ("empty", header_only()),
    ]
}
