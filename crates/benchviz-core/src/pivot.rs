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

//! Query × Platform reshaping of a single metric.

use crate::{Mean, Metric, ResultTable};
use std::collections::{BTreeMap, BTreeSet};

/// A single metric laid out with one row per query and one column per
/// platform.
///
/// Each cell holds the mean of the metric over every row sharing that
/// (query, platform) pair. Rows and columns are sorted. Queries and
/// platforms without a single value are dropped entirely.
#[derive(Debug, Clone, PartialEq)]
pub struct PivotTable {
    metric: Metric,
    queries: Vec<String>,
    platforms: Vec<String>,
    cells: Vec<Vec<Option<f64>>>,
}

impl PivotTable {
    /// The metric the cells hold.
    pub fn metric(&self) -> Metric {
        self.metric
    }

    /// Row keys, sorted.
    pub fn queries(&self) -> &[String] {
        &self.queries
    }

    /// Column keys, sorted.
    pub fn platforms(&self) -> &[String] {
        &self.platforms
    }

    /// Whether there is no cell at all.
    pub fn is_empty(&self) -> bool {
        self.queries.is_empty()
    }

    /// Cell by position.
    pub fn cell(&self, row: usize, column: usize) -> Option<f64> {
        self.cells.get(row).and_then(|r| r.get(column)).copied().flatten()
    }

    /// Cell by key.
    pub fn get(&self, query: &str, platform: &str) -> Option<f64> {
        let row = self.queries.iter().position(|q| q == query)?;
        let column = self.platforms.iter().position(|p| p == platform)?;
        self.cell(row, column)
    }

    /// One query's cells, aligned with [`PivotTable::platforms`].
    pub fn row(&self, row: usize) -> &[Option<f64>] {
        self.cells.get(row).map(Vec::as_slice).unwrap_or_default()
    }

    /// Largest cell value.
    pub fn max_value(&self) -> Option<f64> {
        self.cells
            .iter()
            .flatten()
            .flatten()
            .copied()
            .fold(None, |acc: Option<f64>, v| Some(acc.map_or(v, |a| a.max(v))))
    }

    /// Smallest cell value.
    pub fn min_value(&self) -> Option<f64> {
        self.cells
            .iter()
            .flatten()
            .flatten()
            .copied()
            .fold(None, |acc: Option<f64>, v| Some(acc.map_or(v, |a| a.min(v))))
    }
}

impl ResultTable {
    /// Reshape one metric into a Query × Platform grid of means.
    ///
    /// # Examples
    ///
    /// ```
    /// use benchviz_core::{Metric, ResultRecord, ResultTable};
    ///
    /// let mut table = ResultTable::new();
    /// table.push(ResultRecord::new("a", "Q1").with(Metric::ExecutionTime, 1.0));
    /// table.push(ResultRecord::new("b", "Q1").with(Metric::ExecutionTime, 3.0));
    ///
    /// let pivot = table.pivot(Metric::ExecutionTime);
    /// assert_eq!(pivot.queries(), ["Q1"]);
    /// assert_eq!(pivot.platforms(), ["a", "b"]);
    /// assert_eq!(pivot.get("Q1", "b"), Some(3.0));
    /// ```
    pub fn pivot(&self, metric: Metric) -> PivotTable {
        let mut means: BTreeMap<(&str, &str), Mean> = BTreeMap::new();
        for record in self.records() {
            let Some(value) = record.get(metric).filter(|v| v.is_finite()) else {
                continue;
            };
            means
                .entry((record.query.as_str(), record.platform.as_str()))
                .or_default()
                .add(Some(value));
        }

        let queries: Vec<String> = means
            .keys()
            .map(|(q, _)| q.to_string())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();
        let platforms: Vec<String> = means
            .keys()
            .map(|(_, p)| p.to_string())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        let cells = queries
            .iter()
            .map(|q| {
                platforms
                    .iter()
                    .map(|p| {
                        means
                            .get(&(q.as_str(), p.as_str()))
                            .and_then(Mean::value)
                    })
                    .collect()
            })
            .collect();

        PivotTable {
            metric,
            queries,
            platforms,
            cells,
        }
    }
}
