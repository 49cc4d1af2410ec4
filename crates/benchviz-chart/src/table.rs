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

//! Summary table image.

use crate::config::ChartConfig;
use crate::error::Result;
use benchviz_core::{format_value, Metric, Summary};
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use std::path::Path;

const TITLE_FONT_SIZE: u32 = 28;
const CELL_FONT_SIZE: u32 = 16;

const ROW_HEIGHT: u32 = 36;
const TITLE_HEIGHT: u32 = 80;
const MARGIN: u32 = 40;

const HEADER_FILL: RGBColor = RGBColor(230, 230, 230);

/// Column headings of the summary table image.
pub(crate) fn header() -> Vec<String> {
    ["Platform", "Query"]
        .into_iter()
        .map(str::to_string)
        .chain(Metric::ALL.into_iter().map(|m| m.short_label().to_string()))
        .collect()
}

/// Formatted cells, one line per summary row.
///
/// Every metric gets a column whether or not the data has it; missing
/// values show as `N/A`.
pub(crate) fn body(summary: &Summary) -> Vec<Vec<String>> {
    summary
        .rows()
        .iter()
        .map(|row| {
            [row.platform.clone(), row.query.clone()]
                .into_iter()
                .chain(Metric::ALL.into_iter().map(|m| format_value(row.values.get(m))))
                .collect()
        })
        .collect()
}

/// Image height for a table of `rows` body rows.
pub(crate) fn table_height(rows: usize) -> u32 {
    TITLE_HEIGHT + ROW_HEIGHT * (rows as u32 + 1) + MARGIN
}

/// Render `summary` as a static table PNG at `path`.
///
/// The image is `config.table_width` wide and grows in height with the
/// number of rows.
pub fn render_summary_table(summary: &Summary, path: &Path, config: &ChartConfig) -> Result<()> {
    let header = header();
    let body = body(summary);
    let width = config.table_width;

    let root = BitMapBackend::new(path, (width, table_height(body.len()))).into_drawing_area();
    root.fill(&WHITE)?;

    root.draw(&Text::new(
        config.summary_title.clone(),
        ((width / 2) as i32, (TITLE_HEIGHT / 2) as i32),
        ("sans-serif", TITLE_FONT_SIZE)
            .into_font()
            .color(&BLACK)
            .pos(Pos::new(HPos::Center, VPos::Center)),
    ))?;

    let left = MARGIN as i32;
    let column_width = width.saturating_sub(2 * MARGIN) as i32 / header.len() as i32;
    let row_height = ROW_HEIGHT as i32;

    for (line, cells) in std::iter::once(&header).chain(body.iter()).enumerate() {
        let top = TITLE_HEIGHT as i32 + line as i32 * row_height;
        for (col, text) in cells.iter().enumerate() {
            let x0 = left + col as i32 * column_width;
            let corners = [(x0, top), (x0 + column_width, top + row_height)];

            if line == 0 {
                root.draw(&Rectangle::new(corners, HEADER_FILL.filled()))?;
            }
            root.draw(&Rectangle::new(corners, BLACK.mix(0.4).stroke_width(1)))?;
            root.draw(&Text::new(
                text.as_str(),
                (x0 + column_width / 2, top + row_height / 2),
                ("sans-serif", CELL_FONT_SIZE)
                    .into_font()
                    .color(&BLACK)
                    .pos(Pos::new(HPos::Center, VPos::Center)),
            ))?;
        }
    }

    root.present()?;
    Ok(())
}
