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

//! Result records.

use crate::Metric;

/// One optional value per [`Metric`].
///
/// `None` marks a missing value. Missing is never the same as zero.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MetricValues([Option<f64>; Metric::COUNT]);

impl MetricValues {
    /// All values missing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Value for `metric`, if present.
    pub fn get(&self, metric: Metric) -> Option<f64> {
        self.0[metric.index()]
    }

    /// Set (or clear) the value for `metric`.
    pub fn set(&mut self, metric: Metric, value: Option<f64>) {
        self.0[metric.index()] = value;
    }

    /// Builder form of [`MetricValues::set`].
    pub fn with(mut self, metric: Metric, value: f64) -> Self {
        self.set(metric, Some(value));
        self
    }

    /// Iterate `(metric, value)` pairs in metric order.
    pub fn iter(&self) -> impl Iterator<Item = (Metric, Option<f64>)> + '_ {
        Metric::ALL.into_iter().map(move |m| (m, self.get(m)))
    }
}

/// One benchmark run of a query on a platform.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultRecord {
    /// Execution environment the query ran on.
    pub platform: String,
    /// Benchmark query identifier.
    pub query: String,
    /// Measured values.
    pub values: MetricValues,
}

impl ResultRecord {
    /// Create a record with all metrics missing.
    pub fn new(platform: impl Into<String>, query: impl Into<String>) -> Self {
        Self {
            platform: platform.into(),
            query: query.into(),
            values: MetricValues::new(),
        }
    }

    /// Set a metric value, builder style.
    ///
    /// # Examples
    ///
    /// ```
    /// use benchviz_core::{Metric, ResultRecord};
    ///
    /// let rec = ResultRecord::new("flink", "Q1").with(Metric::ExecutionTime, 2.5);
    /// assert_eq!(rec.get(Metric::ExecutionTime), Some(2.5));
    /// assert_eq!(rec.get(Metric::Throughput), None);
    /// ```
    pub fn with(mut self, metric: Metric, value: f64) -> Self {
        self.values.set(metric, Some(value));
        self
    }

    /// Value of `metric` for this run.
    pub fn get(&self, metric: Metric) -> Option<f64> {
        self.values.get(metric)
    }
}
