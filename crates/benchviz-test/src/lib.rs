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

//! Shared test fixtures and utilities for BenchViz crates.
//!
//! This crate provides canonical summary files, invalid samples, table
//! builders and temporary results directories, so the loader, chart and CLI
//! tests all exercise the same data.
//!
//! # Quick Start
//!
//! ```rust
//! use benchviz_test::{fixtures, ResultsDir};
//!
//! // Lay out a results directory with two platforms
//! let dir = ResultsDir::new()
//!     .summary("flink", fixtures::flink_summary())
//!     .summary("spark", fixtures::spark_summary());
//! assert_eq!(dir.summary_count(), 2);
//!
//! // Build an in-memory table directly
//! use benchviz_core::Metric;
//! use benchviz_test::fixtures::builders::TableBuilder;
//!
//! let table = TableBuilder::new()
//!     .row("a", "Q1", &[(Metric::ExecutionTime, 1.0)])
//!     .row("b", "Q1", &[(Metric::ExecutionTime, 3.0)])
//!     .build();
//! assert_eq!(table.len(), 2);
//! ```

pub mod fixtures;
mod results_dir;

pub use results_dir::{summary_file_name, ResultsDir};

/// Type alias for a list of named CSV samples.
pub type SampleList = Vec<(&'static str, &'static str)>;
