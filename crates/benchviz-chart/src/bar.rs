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

//! Grouped bar chart of one metric across platforms.

use crate::config::ChartConfig;
use crate::error::Result;
use crate::palette::series_color;
use benchviz_core::PivotTable;
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use std::ops::Range;
use std::path::Path;

const TITLE_FONT_SIZE: u32 = 32;
const AXIS_LABEL_FONT_SIZE: u32 = 22;
const TICK_LABEL_FONT_SIZE: u32 = 18;
const LEGEND_FONT_SIZE: u32 = 18;
const DATA_LABEL_FONT_SIZE: u32 = 14;

/// Share of each query slot taken up by its bars.
const GROUP_WIDTH: f64 = 0.8;

/// Headroom above the tallest bar for its value label.
const HEADROOM: f64 = 1.15;

/// Plot margin in pixels; the legend box lines up with the plot's top edge.
const MARGIN: u32 = 20;

const LEGEND_PADDING: i32 = 10;
const LEGEND_ROW_HEIGHT: i32 = 26;
const LEGEND_SWATCH_WIDTH: i32 = 20;
const LEGEND_TITLE: &str = "Platform";

/// Horizontal extent of the bar for `platform` within the `query` group.
///
/// Groups are centered on integer x positions, bars are laid out left to
/// right in platform order.
pub(crate) fn bar_span(query: usize, platform: usize, platforms: usize) -> Range<f64> {
    let bar_width = GROUP_WIDTH / platforms.max(1) as f64;
    let left = query as f64 - GROUP_WIDTH / 2.0 + platform as f64 * bar_width;
    left..left + bar_width
}

/// Y axis range covering every cell plus label headroom.
///
/// Always includes zero so bars grow from the axis; an empty pivot gets a
/// unit range.
pub(crate) fn value_range(pivot: &PivotTable) -> Range<f64> {
    let high = pivot.max_value().unwrap_or(0.0).max(0.0) * HEADROOM;
    let low = pivot.min_value().unwrap_or(0.0).min(0.0) * HEADROOM;
    if high - low > 0.0 {
        low..high
    } else {
        0.0..1.0
    }
}

/// Width in pixels of the legend strip right of the plot.
///
/// Fits the swatch and the longest platform name, capped at a third of the
/// chart width.
pub(crate) fn legend_width(platforms: &[String], chart_width: u32) -> u32 {
    let longest = platforms
        .iter()
        .map(|p| p.chars().count())
        .chain(std::iter::once(LEGEND_TITLE.len()))
        .max()
        .unwrap_or(0) as u32;
    // Average glyph advance is about 0.6 em.
    let text = longest * LEGEND_FONT_SIZE * 3 / 5;
    let needed = (3 * LEGEND_PADDING + LEGEND_SWATCH_WIDTH) as u32 + text + MARGIN;
    needed.min(chart_width / 3)
}

/// Draw the legend box: a `Platform` header, then one swatch per platform
/// in series order.
fn draw_legend(area: &DrawingArea<BitMapBackend<'_>, Shift>, platforms: &[String]) -> Result<()> {
    let (width, _) = area.dim_in_pixel();
    let top = MARGIN as i32;
    let bottom = top + (platforms.len() as i32 + 1) * LEGEND_ROW_HEIGHT + LEGEND_PADDING;
    let right = width as i32 - MARGIN as i32;

    area.draw(&Rectangle::new([(0, top), (right, bottom)], BLACK.stroke_width(1)))?;

    let font = ("sans-serif", LEGEND_FONT_SIZE)
        .into_font()
        .color(&BLACK)
        .pos(Pos::new(HPos::Left, VPos::Center));
    let row_center =
        |row: i32| top + LEGEND_PADDING / 2 + row * LEGEND_ROW_HEIGHT + LEGEND_ROW_HEIGHT / 2;

    area.draw(&Text::new(LEGEND_TITLE, (LEGEND_PADDING, row_center(0)), font.clone()))?;
    for (col, platform) in platforms.iter().enumerate() {
        let y = row_center(col as i32 + 1);
        area.draw(&Rectangle::new(
            [(LEGEND_PADDING, y - 5), (LEGEND_PADDING + LEGEND_SWATCH_WIDTH, y + 5)],
            series_color(col).filled(),
        ))?;
        area.draw(&Text::new(
            platform.as_str(),
            (2 * LEGEND_PADDING + LEGEND_SWATCH_WIDTH, y),
            font.clone(),
        ))?;
    }
    Ok(())
}

/// Render `pivot` as a grouped bar chart PNG at `path`.
///
/// One group per query, one bar per platform, each bar labelled with its
/// value to two decimals. Missing cells draw no bar. An empty pivot still
/// produces the titled chart. The legend sits in its own strip right of the
/// plot, so it never covers bars or their labels.
pub fn render_metric_chart(pivot: &PivotTable, path: &Path, config: &ChartConfig) -> Result<()> {
    let metric = pivot.metric();
    let queries = pivot.queries();
    let platforms = pivot.platforms();
    let slots = queries.len().max(1);

    let root = BitMapBackend::new(path, config.chart_size).into_drawing_area();
    root.fill(&WHITE)?;
    let root = root.titled(
        &format!("Comparison of {} Across Platforms", metric.column_name()),
        ("sans-serif", TITLE_FONT_SIZE),
    )?;

    let legend = legend_width(platforms, config.chart_size.0);
    let (plot_area, legend_area) = root.split_horizontally(config.chart_size.0 - legend);

    let mut chart = ChartBuilder::on(&plot_area)
        .margin(MARGIN)
        .x_label_area_size(60)
        .y_label_area_size(90)
        .build_cartesian_2d(-0.5..(slots as f64 - 0.5), value_range(pivot))?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .bold_line_style(BLACK.mix(0.15))
        .light_line_style(TRANSPARENT)
        .x_labels(slots)
        .x_label_formatter(&|x| {
            let idx = x.round() as usize;
            if (x - idx as f64).abs() < 0.3 {
                queries.get(idx).cloned().unwrap_or_default()
            } else {
                String::new()
            }
        })
        .y_desc(metric.column_name())
        .x_desc("Query")
        .label_style(("sans-serif", TICK_LABEL_FONT_SIZE))
        .axis_desc_style(("sans-serif", AXIS_LABEL_FONT_SIZE))
        .draw()?;

    for col in 0..platforms.len() {
        let color = series_color(col);
        let mut bars = Vec::new();
        let mut labels = Vec::new();

        for row in 0..queries.len() {
            let Some(value) = pivot.cell(row, col) else {
                continue;
            };
            let span = bar_span(row, col, platforms.len());
            let mid = (span.start + span.end) / 2.0;

            bars.push(Rectangle::new(
                [(span.start + 0.01, 0.0), (span.end - 0.01, value)],
                color.filled(),
            ));
            labels.push(Text::new(
                format!("{:.2}", value),
                (mid, value),
                ("sans-serif", DATA_LABEL_FONT_SIZE)
                    .into_font()
                    .color(&BLACK)
                    .pos(Pos::new(HPos::Center, VPos::Bottom)),
            ));
        }

        chart.draw_series(bars)?;
        chart.draw_series(labels)?;
    }

    draw_legend(&legend_area, platforms)?;

    root.present()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use benchviz_core::{Metric, ResultRecord, ResultTable};

    fn pivot(rows: &[(&str, &str, f64)]) -> PivotTable {
        let mut table = ResultTable::new();
        for (platform, query, value) in rows {
            table.push(ResultRecord::new(*platform, *query).with(Metric::ExecutionTime, *value));
        }
        table.pivot(Metric::ExecutionTime)
    }

    #[test]
    fn test_bar_spans_fill_group_in_order() {
        let first = bar_span(0, 0, 2);
        let second = bar_span(0, 1, 2);
        assert!((first.start - -0.4).abs() < 1e-9);
        assert!((first.end - second.start).abs() < 1e-9);
        assert!((second.end - 0.4).abs() < 1e-9);
    }

    #[test]
    fn test_bar_spans_stay_in_slot() {
        for platforms in 1..12 {
            for p in 0..platforms {
                let span = bar_span(3, p, platforms);
                assert!(span.start >= 2.5 && span.end <= 3.5);
            }
        }
    }

    #[test]
    fn test_legend_width_fits_longest_name() {
        let short = legend_width(&["a".to_string()], 1200);
        let long = legend_width(&["a".to_string(), "raspberry-pi-cluster".to_string()], 1200);
        assert!(long > short);
        // The header sets the floor.
        assert_eq!(short, legend_width(&[], 1200));
    }

    #[test]
    fn test_legend_width_leaves_room_for_plot() {
        let names = vec!["x".repeat(200)];
        assert_eq!(legend_width(&names, 1200), 400);
        assert!(legend_width(&["flink".to_string()], 1200) < 1200 / 3);
    }

    #[test]
    fn test_value_range_has_headroom() {
        let range = value_range(&pivot(&[("a", "Q1", 2.0), ("b", "Q1", 4.0)]));
        assert_eq!(range.start, 0.0);
        assert!((range.end - 4.6).abs() < 1e-9);
    }

    #[test]
    fn test_value_range_includes_negatives() {
        let range = value_range(&pivot(&[("a", "Q1", -1.0), ("b", "Q1", 1.0)]));
        assert!(range.start < -1.0);
        assert!(range.end > 1.0);
    }

    #[test]
    fn test_value_range_of_empty_pivot() {
        let table = ResultTable::with_metrics([Metric::Throughput]);
        assert_eq!(value_range(&table.pivot(Metric::Throughput)), 0.0..1.0);
    }

    #[test]
    fn test_value_range_of_zeros() {
        assert_eq!(value_range(&pivot(&[("a", "Q1", 0.0)])), 0.0..1.0);
    }
}
