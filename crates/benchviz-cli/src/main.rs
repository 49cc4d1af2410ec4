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

//! BenchViz Command Line Interface

use benchviz_cli::commands::{visualize, VisualizeConfig};
use benchviz_cli::error::CliError;
use benchviz_cli::resolve::resolve_results_dir;
use benchviz_cli::DEFAULT_LOG_FILTER;
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// BenchViz - compare benchmark results across platforms
///
/// Reads every `benchmark_summary_*.csv` in the results directory, writes
/// one bar chart per metric and a summary table image to `<dir>/charts`,
/// and prints the per-platform, per-query means.
///
/// # Examples
///
/// ```bash
/// # Use the benchmark_results directory next to the installation
/// benchviz
///
/// # Use an explicit directory, with debug logging
/// RUST_LOG=debug benchviz ./nightly/benchmark_results
/// ```
#[derive(Parser)]
#[command(name = "benchviz")]
#[command(author, version, about = "BenchViz - compare benchmark results across platforms", long_about = None)]
struct Cli {
    /// Directory containing benchmark_summary_*.csv files
    /// (default: benchmark_results next to the executable)
    #[arg(value_name = "RESULTS_DIR")]
    results_dir: Option<PathBuf>,
}

fn run(cli: Cli) -> Result<(), CliError> {
    let results_dir = resolve_results_dir(cli.results_dir)?;
    let mut stdout = std::io::stdout().lock();
    visualize(&results_dir, &VisualizeConfig::default(), &mut stdout)?;
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
