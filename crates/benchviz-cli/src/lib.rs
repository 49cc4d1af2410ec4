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

//! BenchViz CLI library.
//!
//! The `benchviz` binary takes one optional argument, the results
//! directory, and runs a single straight-line pipeline:
//!
//! 1. **Resolve** the results directory ([`resolve::resolve_results_dir`])
//! 2. **Load** every `benchmark_summary_*.csv` in it, reporting and skipping
//!    unreadable files
//! 3. **Plot** one comparison chart per metric plus a summary table image
//!    into `<results_dir>/charts`
//! 4. **Print** the grouped-mean summary
//!
//! Steps 3 and 4 are skipped, with exit status 0, when nothing could be
//! loaded.
//!
//! # Examples
//!
//! ```no_run
//! use benchviz_cli::commands::{visualize, Outcome, VisualizeConfig};
//! use benchviz_cli::resolve::resolve_results_dir;
//!
//! # fn main() -> Result<(), benchviz_cli::error::CliError> {
//! let dir = resolve_results_dir(None)?;
//! let mut stdout = std::io::stdout().lock();
//! if let Outcome::Plotted(report) = visualize(&dir, &VisualizeConfig::default(), &mut stdout)? {
//!     println!("{} images", report.written().count());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Logging
//!
//! Diagnostics go to stderr through `tracing`, filtered by `RUST_LOG`.
//! Library crates log at `warn` unless told otherwise.

pub mod commands;
pub mod error;
pub mod resolve;

/// Log filter used when `RUST_LOG` is not set.
pub const DEFAULT_LOG_FILTER: &str = "warn";
