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

//! The four measured quantities of a benchmark run.

use std::fmt;

/// A measured quantity recorded per (Platform, Query) run.
///
/// Variants are declared in chart order; `Ord` follows that order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Metric {
    /// Wall-clock execution time in seconds.
    ExecutionTime,
    /// Peak resident memory in MB.
    MaxMemory,
    /// Average resident memory in MB.
    AvgMemory,
    /// Processed messages per second.
    Throughput,
}

impl Metric {
    /// All metrics, in chart order.
    pub const ALL: [Metric; 4] = [
        Metric::ExecutionTime,
        Metric::MaxMemory,
        Metric::AvgMemory,
        Metric::Throughput,
    ];

    /// Number of known metrics.
    pub const COUNT: usize = Self::ALL.len();

    /// Position of this metric in [`Metric::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    /// The exact CSV header this metric is read from.
    ///
    /// # Examples
    ///
    /// ```
    /// use benchviz_core::Metric;
    ///
    /// assert_eq!(Metric::ExecutionTime.column_name(), "Execution Time (s)");
    /// assert_eq!(Metric::Throughput.column_name(), "Throughput (msgs/s)");
    /// ```
    pub fn column_name(self) -> &'static str {
        match self {
            Metric::ExecutionTime => "Execution Time (s)",
            Metric::MaxMemory => "Max Memory (MB)",
            Metric::AvgMemory => "Avg Memory (MB)",
            Metric::Throughput => "Throughput (msgs/s)",
        }
    }

    /// Abbreviated column label used in the summary table image.
    pub fn short_label(self) -> &'static str {
        match self {
            Metric::ExecutionTime => "Exec Time (s)",
            Metric::MaxMemory => "Max Mem (MB)",
            Metric::AvgMemory => "Avg Mem (MB)",
            Metric::Throughput => "Throughput (msgs/s)",
        }
    }

    /// Leading word of the column name, lower-cased.
    ///
    /// # Examples
    ///
    /// ```
    /// use benchviz_core::Metric;
    ///
    /// assert_eq!(Metric::ExecutionTime.slug(), "execution");
    /// assert_eq!(Metric::MaxMemory.slug(), "max");
    /// ```
    pub fn slug(self) -> String {
        self.column_name()
            .split_whitespace()
            .next()
            .unwrap_or_default()
            .to_lowercase()
    }

    /// File name of the comparison chart for this metric.
    pub fn chart_file_name(self) -> String {
        format!("comparison_{}.png", self.slug())
    }

    /// Look up a metric by its exact CSV header.
    ///
    /// Matching is case-sensitive; `"execution time (s)"` is not a metric.
    pub fn from_column(name: &str) -> Option<Metric> {
        Self::ALL.into_iter().find(|m| m.column_name() == name)
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column_name())
    }
}
