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

//! Grouped-mean summary of a result table.
//!
//! The summary groups rows by (Platform, Query), sorted by that key, and
//! reduces every metric to its mean. Its `Display` impl renders the aligned
//! text table printed at the end of a run:
//!
//! ```text
//! Platform  Query  Execution Time (s)  Throughput (msgs/s)
//! flink     Q1                   2.50                  N/A
//! ```

use crate::format::format_value;
use crate::{Mean, Metric, MetricValues, ResultTable};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// Means of one (Platform, Query) group.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryRow {
    /// Group platform.
    pub platform: String,
    /// Group query.
    pub query: String,
    /// Mean of each metric over the group, `None` when no row had a value.
    pub values: MetricValues,
    /// Number of rows in the group.
    pub runs: usize,
}

/// Grouped-mean summary, one row per (Platform, Query).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Summary {
    rows: Vec<SummaryRow>,
    metrics: BTreeSet<Metric>,
}

impl Summary {
    /// Rows sorted by (platform, query).
    pub fn rows(&self) -> &[SummaryRow] {
        &self.rows
    }

    /// Number of groups.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether there are no groups.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Metric columns carried over from the source table.
    pub fn metrics(&self) -> impl Iterator<Item = Metric> + '_ {
        self.metrics.iter().copied()
    }
}

impl ResultTable {
    /// Group by (Platform, Query) and take the mean of every metric.
    ///
    /// # Examples
    ///
    /// ```
    /// use benchviz_core::{Metric, ResultRecord, ResultTable};
    ///
    /// let mut table = ResultTable::with_metrics([Metric::Throughput]);
    /// table.push(ResultRecord::new("flink", "Q1").with(Metric::ExecutionTime, 2.0));
    /// table.push(ResultRecord::new("flink", "Q1").with(Metric::ExecutionTime, 3.0));
    ///
    /// let summary = table.summarize();
    /// assert_eq!(summary.len(), 1);
    /// let row = &summary.rows()[0];
    /// assert_eq!(row.values.get(Metric::ExecutionTime), Some(2.5));
    /// assert_eq!(row.values.get(Metric::Throughput), None);
    /// assert_eq!(row.runs, 2);
    /// ```
    pub fn summarize(&self) -> Summary {
        let mut groups: BTreeMap<(&str, &str), (usize, [Mean; Metric::COUNT])> = BTreeMap::new();
        for record in self.records() {
            let (runs, means) = groups
                .entry((record.platform.as_str(), record.query.as_str()))
                .or_default();
            *runs += 1;
            for (metric, value) in record.values.iter() {
                means[metric.index()].add(value);
            }
        }

        let rows = groups
            .into_iter()
            .map(|((platform, query), (runs, means))| {
                let mut values = MetricValues::new();
                for metric in Metric::ALL {
                    values.set(metric, means[metric.index()].value());
                }
                SummaryRow {
                    platform: platform.to_string(),
                    query: query.to_string(),
                    values,
                    runs,
                }
            })
            .collect();

        Summary {
            rows,
            metrics: self.metrics().collect(),
        }
    }
}

#[derive(Clone, Copy)]
enum Align {
    Left,
    Right,
}

fn write_row(
    f: &mut fmt::Formatter<'_>,
    cells: &[String],
    aligns: &[Align],
    widths: &[usize],
) -> fmt::Result {
    let line: Vec<String> = cells
        .iter()
        .zip(aligns)
        .zip(widths)
        .map(|((cell, align), width)| match align {
            Align::Left => format!("{:<width$}", cell, width = width),
            Align::Right => format!("{:>width$}", cell, width = width),
        })
        .collect();
    writeln!(f, "{}", line.join("  ").trim_end())
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let metrics: Vec<Metric> = self.metrics().collect();

        let mut titles = vec!["Platform".to_string(), "Query".to_string()];
        titles.extend(metrics.iter().map(|m| m.column_name().to_string()));
        let mut aligns = vec![Align::Left, Align::Left];
        aligns.extend(metrics.iter().map(|_| Align::Right));

        let body: Vec<Vec<String>> = self
            .rows
            .iter()
            .map(|row| {
                let mut cells = vec![row.platform.clone(), row.query.clone()];
                cells.extend(metrics.iter().map(|m| format_value(row.values.get(*m))));
                cells
            })
            .collect();

        let widths: Vec<usize> = titles
            .iter()
            .enumerate()
            .map(|(i, title)| {
                body.iter()
                    .map(|cells| cells[i].chars().count())
                    .chain(std::iter::once(title.chars().count()))
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        write_row(f, &titles, &aligns, &widths)?;
        for cells in &body {
            write_row(f, cells, &aligns, &widths)?;
        }
        Ok(())
    }
}
