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

//! Grouped bar charts and summary table images for benchmark results.
//!
//! [`plot_comparisons`] turns a unified [`ResultTable`] into one PNG bar
//! chart per metric present in the table, `comparison_<slug>.png`, plus a
//! `summary_table.png` with the grouped means.
//!
//! # Examples
//!
//! ```no_run
//! use benchviz_chart::{plot_comparisons, ChartConfig};
//! use benchviz_core::{Metric, ResultRecord, ResultTable};
//! use std::path::Path;
//!
//! let mut table = ResultTable::new();
//! table.push(ResultRecord::new("flink", "Q1").with(Metric::ExecutionTime, 2.5));
//!
//! let report = plot_comparisons(Some(&table), Path::new("charts"), &ChartConfig::default()).unwrap();
//! for path in report.written() {
//!     println!("{}", path.display());
//! }
//! ```
//!
//! Rendering rasterizes text, so a sans-serif system font must be available.

mod bar;
mod config;
mod error;
mod palette;
mod table;

pub use bar::render_metric_chart;
pub use config::{
    ChartConfig, DEFAULT_CHART_SIZE, DEFAULT_SUMMARY_TITLE, DEFAULT_TABLE_WIDTH,
    SUMMARY_TABLE_FILE,
};
pub use error::{ChartError, Result};
pub use palette::{series_color, PALETTE};
pub use table::render_summary_table;

use benchviz_core::{Metric, ResultTable};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// One bar chart to render.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartPlan {
    /// Metric on the y axis.
    pub metric: Metric,
    /// Output image path.
    pub path: PathBuf,
}

/// Images written by [`plot_comparisons`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlotReport {
    /// Comparison charts, in metric order.
    pub charts: Vec<PathBuf>,
    /// Summary table image, if one was written.
    pub summary_table: Option<PathBuf>,
}

impl PlotReport {
    /// Whether nothing was written.
    pub fn is_empty(&self) -> bool {
        self.charts.is_empty() && self.summary_table.is_none()
    }

    /// Every written path, charts first.
    pub fn written(&self) -> impl Iterator<Item = &Path> {
        self.charts
            .iter()
            .chain(self.summary_table.iter())
            .map(PathBuf::as_path)
    }
}

/// Charts to render for `table`: one per configured metric that the table
/// has, in configuration order. Repeated metrics are planned once.
///
/// # Examples
///
/// ```
/// use benchviz_chart::{plan_charts, ChartConfig};
/// use benchviz_core::{Metric, ResultRecord, ResultTable};
/// use std::path::Path;
///
/// let mut table = ResultTable::new();
/// table.push(ResultRecord::new("flink", "Q1").with(Metric::MaxMemory, 512.0));
///
/// let plans = plan_charts(&table, Path::new("charts"), &ChartConfig::default());
/// assert_eq!(plans.len(), 1);
/// assert_eq!(plans[0].path, Path::new("charts/comparison_max.png"));
/// ```
pub fn plan_charts(table: &ResultTable, output_dir: &Path, config: &ChartConfig) -> Vec<ChartPlan> {
    let mut plans: Vec<ChartPlan> = Vec::new();
    for &metric in &config.metrics {
        if !table.has_metric(metric) || plans.iter().any(|p| p.metric == metric) {
            continue;
        }
        plans.push(ChartPlan {
            metric,
            path: output_dir.join(metric.chart_file_name()),
        });
    }
    plans
}

/// Render every comparison chart and the summary table into `output_dir`.
///
/// When `table` is `None` or has no rows nothing is written and the output
/// directory is not created. Otherwise the directory is created if needed.
///
/// # Errors
///
/// Returns `ChartError::Io` if the directory cannot be created and
/// `ChartError::Render` if an image cannot be drawn or saved.
pub fn plot_comparisons(
    table: Option<&ResultTable>,
    output_dir: &Path,
    config: &ChartConfig,
) -> Result<PlotReport> {
    let Some(table) = table.filter(|t| !t.is_empty()) else {
        warn!("No valid data to plot");
        return Ok(PlotReport::default());
    };

    fs::create_dir_all(output_dir).map_err(|e| ChartError::Io {
        path: output_dir.to_path_buf(),
        message: e.to_string(),
    })?;

    let mut report = PlotReport::default();
    for plan in plan_charts(table, output_dir, config) {
        let pivot = table.pivot(plan.metric);
        debug!(
            metric = %plan.metric,
            queries = pivot.queries().len(),
            platforms = pivot.platforms().len(),
            "rendering comparison chart"
        );
        render_metric_chart(&pivot, &plan.path, config)?;
        report.charts.push(plan.path);
    }

    let summary_path = output_dir.join(SUMMARY_TABLE_FILE);
    render_summary_table(&table.summarize(), &summary_path, config)?;
    report.summary_table = Some(summary_path);

    info!("Generated comparison charts in {}", output_dir.display());
    Ok(report)
}
