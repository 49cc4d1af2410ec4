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

//! Discovery and parsing of per-platform benchmark summary CSV files.
//!
//! Each benchmark run on a platform writes a `benchmark_summary_<platform>.csv`
//! file with one row per query. This crate finds those files in a results
//! directory, parses them and concatenates them into a single
//! [`ResultTable`](benchviz_core::ResultTable).
//!
//! # Features
//!
//! - **Discovery**: Sorted glob matching inside one directory, with the
//!   directory path escaped
//! - **Platform fallback**: Rows without a `Platform` value take the platform
//!   from the file name
//! - **Lenient metrics**: Unparsable or non-finite metric cells are missing,
//!   not errors
//! - **Per-file failures**: A bad file is reported and skipped, the rest still
//!   load
//!
//! # Examples
//!
//! ## Parsing One File
//!
//! ```
//! use benchviz_core::Metric;
//! use benchviz_csv::{parse_results_str, LoaderConfig};
//!
//! let csv = "Query,Execution Time (s),Throughput (msgs/s)\nQ1,2.5,\nQ2,1.0,900\n";
//! let table = parse_results_str(csv, Some("flink"), &LoaderConfig::default()).unwrap();
//!
//! assert_eq!(table.len(), 2);
//! assert_eq!(table.records()[0].get(Metric::Throughput), None);
//! assert_eq!(table.records()[1].get(Metric::Throughput), Some(900.0));
//! ```
//!
//! ## Loading a Results Directory
//!
//! ```no_run
//! use benchviz_csv::{load_results, LoaderConfig};
//! use std::path::Path;
//!
//! let report = load_results(Path::new("benchmark_results"), &LoaderConfig::default()).unwrap();
//! if report.no_files() {
//!     println!("nothing to do");
//! }
//! ```

mod config;
mod error;
mod loader;
mod parse;
mod platform;

pub use config::{LoaderConfig, DEFAULT_MAX_ROWS, DEFAULT_PATTERN};
pub use error::{CsvError, Result};
pub use loader::{
    discover_result_files, load_file, load_results, LoadReport, LoadedFile, SkippedFile,
};
pub use parse::{coerce_metric, parse_results, parse_results_str, PLATFORM_COLUMN, QUERY_COLUMN};
pub use platform::platform_from_path;
