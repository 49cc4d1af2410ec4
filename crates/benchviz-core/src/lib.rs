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

//! Data model and aggregation for benchmark result tables.
//!
//! A benchmark run produces one [`ResultRecord`] per (Platform, Query)
//! pair. Records from every platform are collected into a single
//! [`ResultTable`], which can then be reshaped in two ways:
//!
//! - [`ResultTable::pivot`]: one metric as a Query × Platform grid of means,
//!   the layout behind each comparison chart.
//! - [`ResultTable::summarize`]: grouped means per (Platform, Query), the
//!   layout behind the summary table.
//!
//! Missing values are `None` throughout. They are skipped by the means and
//! printed as [`NOT_AVAILABLE`] by [`format_value`].
//!
//! # Examples
//!
//! ```
//! use benchviz_core::{Metric, ResultRecord, ResultTable};
//!
//! let mut table = ResultTable::new();
//! table.push(ResultRecord::new("flink", "Q1").with(Metric::ExecutionTime, 2.5));
//! table.push(ResultRecord::new("spark", "Q1").with(Metric::ExecutionTime, 4.0));
//!
//! let pivot = table.pivot(Metric::ExecutionTime);
//! assert_eq!(pivot.get("Q1", "flink"), Some(2.5));
//!
//! let summary = table.summarize();
//! assert_eq!(summary.len(), 2);
//! println!("{}", summary);
//! ```

mod aggregate;
mod format;
mod metric;
mod pivot;
mod record;
mod summary;
mod table;

pub use aggregate::Mean;
pub use format::{format_value, NOT_AVAILABLE};
pub use metric::Metric;
pub use pivot::PivotTable;
pub use record::{MetricValues, ResultRecord};
pub use summary::{Summary, SummaryRow};
pub use table::ResultTable;
