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

//! Mean reduction over optional values.

/// Running arithmetic mean that skips missing values.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Mean {
    sum: f64,
    count: usize,
}

impl Mean {
    /// Add a value. `None` and non-finite values are skipped.
    pub fn add(&mut self, value: Option<f64>) {
        if let Some(v) = value.filter(|v| v.is_finite()) {
            self.sum += v;
            self.count += 1;
        }
    }

    /// Number of values that contributed.
    pub fn count(&self) -> usize {
        self.count
    }

    /// The mean, or `None` if nothing contributed.
    ///
    /// # Examples
    ///
    /// ```
    /// use benchviz_core::Mean;
    ///
    /// let mut mean = Mean::default();
    /// assert_eq!(mean.value(), None);
    /// mean.add(Some(1.0));
    /// mean.add(None);
    /// mean.add(Some(3.0));
    /// assert_eq!(mean.value(), Some(2.0));
    /// ```
    pub fn value(&self) -> Option<f64> {
        if self.count == 0 {
            None
        } else {
            Some(self.sum / self.count as f64)
        }
    }
}

impl FromIterator<Option<f64>> for Mean {
    fn from_iter<I: IntoIterator<Item = Option<f64>>>(iter: I) -> Self {
        let mut mean = Mean::default();
        for value in iter {
            mean.add(value);
        }
        mean
    }
}
