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

//! Value formatting shared by the text summary and the rendered images.

/// Marker printed in place of a missing value.
pub const NOT_AVAILABLE: &str = "N/A";

/// Format a metric value with two decimal places, or [`NOT_AVAILABLE`].
///
/// Non-finite values count as missing, so `nan` never reaches the output.
///
/// # Examples
///
/// ```
/// use benchviz_core::format_value;
///
/// assert_eq!(format_value(Some(2.5)), "2.50");
/// assert_eq!(format_value(None), "N/A");
/// assert_eq!(format_value(Some(f64::NAN)), "N/A");
/// ```
pub fn format_value(value: Option<f64>) -> String {
    match value {
        Some(v) if v.is_finite() => format!("{:.2}", v),
        _ => NOT_AVAILABLE.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_decimals() {
        assert_eq!(format_value(Some(0.0)), "0.00");
        assert_eq!(format_value(Some(1.005)), "1.00");
        assert_eq!(format_value(Some(1234.5678)), "1234.57");
        assert_eq!(format_value(Some(-3.0)), "-3.00");
    }

    #[test]
    fn test_missing_never_prints_nan() {
        for value in [None, Some(f64::NAN), Some(f64::INFINITY)] {
            let out = format_value(value);
            assert_eq!(out, NOT_AVAILABLE);
            assert!(!out.to_lowercase().contains("nan"));
        }
    }
}
