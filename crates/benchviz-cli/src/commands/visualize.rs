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

//! Visualize command - load a results directory, chart it and print the
//! summary.

use crate::error::CliError;
use crate::resolve::charts_dir;
use benchviz_chart::{plot_comparisons, ChartConfig, PlotReport};
use benchviz_csv::{load_results, LoaderConfig};
use colored::Colorize;
use std::io::Write;
use std::path::Path;

/// Settings for a visualize run.
#[derive(Debug, Clone, Default)]
pub struct VisualizeConfig {
    /// How summary files are found and parsed.
    pub loader: LoaderConfig,
    /// What is charted and how.
    pub charts: ChartConfig,
}

/// How a visualize run ended.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// Nothing could be loaded; no chart directory was created.
    NoResults,
    /// Data was loaded and handed to the plotter.
    Plotted(PlotReport),
}

/// Visualize the summary files in `results_dir`.
///
/// Status lines and the final summary go to `out`; charts are written to
/// `<results_dir>/charts`. Unreadable summary files are reported and
/// skipped. Finding no usable data is not an error.
///
/// # Errors
///
/// Returns `Err` if the discovery pattern is invalid, a chart cannot be
/// written, or writing to `out` fails.
///
/// # Examples
///
/// ```no_run
/// use benchviz_cli::commands::{visualize, VisualizeConfig};
/// use std::path::Path;
///
/// # fn main() -> Result<(), benchviz_cli::error::CliError> {
/// let mut stdout = std::io::stdout().lock();
/// visualize(Path::new("benchmark_results"), &VisualizeConfig::default(), &mut stdout)?;
/// # Ok(())
/// # }
/// ```
pub fn visualize<W: Write>(
    results_dir: &Path,
    config: &VisualizeConfig,
    out: &mut W,
) -> Result<Outcome, CliError> {
    let write_err = |e| CliError::io_error("<stdout>", e);

    writeln!(out, "Looking for benchmark results in: {}", results_dir.display())
        .map_err(write_err)?;

    let report = load_results(results_dir, &config.loader)?;
    if report.no_files() {
        writeln!(out, "No benchmark results found in {}", results_dir.display())
            .map_err(write_err)?;
    }
    for skipped in &report.skipped {
        let line = format!("Error reading {}: {}", skipped.path.display(), skipped.error);
        writeln!(out, "{}", line.yellow()).map_err(write_err)?;
    }

    let Some(table) = report.into_table() else {
        writeln!(out, "No results to visualize.").map_err(write_err)?;
        return Ok(Outcome::NoResults);
    };

    let output_dir = charts_dir(results_dir);
    let plotted = plot_comparisons(Some(&table), &output_dir, &config.charts)?;
    if !plotted.is_empty() {
        writeln!(
            out,
            "{} Generated comparison charts in {}",
            "✓".green().bold(),
            output_dir.display()
        )
        .map_err(write_err)?;
    }

    write!(out, "Summary of results:\n{}", table.summarize()).map_err(write_err)?;
    Ok(Outcome::Plotted(plotted))
}
