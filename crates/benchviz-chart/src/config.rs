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

//! Chart configuration.

use benchviz_core::Metric;

/// Pixel size of each comparison chart.
pub const DEFAULT_CHART_SIZE: (u32, u32) = (1200, 800);

/// Pixel width of the summary table image.
pub const DEFAULT_TABLE_WIDTH: u32 = 1400;

/// Title drawn above the summary table.
pub const DEFAULT_SUMMARY_TITLE: &str = "NebulaStream Query Benchmark Summary";

/// File name of the summary table image.
pub const SUMMARY_TABLE_FILE: &str = "summary_table.png";

/// Configuration for chart generation.
///
/// # Examples
///
/// ```
/// use benchviz_chart::ChartConfig;
/// use benchviz_core::Metric;
///
/// // Only chart execution time, on a smaller canvas
/// let config = ChartConfig {
///     metrics: vec![Metric::ExecutionTime],
///     chart_size: (800, 600),
///     ..Default::default()
/// };
/// assert_eq!(config.table_width, 1400);
/// ```
#[derive(Debug, Clone)]
pub struct ChartConfig {
    /// Metrics to chart, in order (default: all four). Metrics absent from
    /// the table are skipped.
    pub metrics: Vec<Metric>,

    /// Width and height of each comparison chart (default: 1200×800).
    pub chart_size: (u32, u32),

    /// Width of the summary table image (default: 1400). The height follows
    /// the number of rows.
    pub table_width: u32,

    /// Title of the summary table image.
    pub summary_title: String,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            metrics: Metric::ALL.to_vec(),
            chart_size: DEFAULT_CHART_SIZE,
            table_width: DEFAULT_TABLE_WIDTH,
            summary_title: DEFAULT_SUMMARY_TITLE.to_string(),
        }
    }
}
