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

//! Parse a single summary CSV document into a result table.

use crate::config::LoaderConfig;
use crate::error::{CsvError, Result};
use benchviz_core::{Metric, ResultRecord, ResultTable};
use std::io::Read;
use std::path::Path;
use tracing::warn;

/// Header of the optional platform column.
pub const PLATFORM_COLUMN: &str = "Platform";

/// Header of the required query column.
pub const QUERY_COLUMN: &str = "Query";

/// Convert a metric cell to a number.
///
/// Anything that does not parse as a finite `f64` is missing, never an
/// error.
///
/// # Examples
///
/// ```
/// use benchviz_csv::coerce_metric;
///
/// assert_eq!(coerce_metric("2.5"), Some(2.5));
/// assert_eq!(coerce_metric(" 512 "), Some(512.0));
/// assert_eq!(coerce_metric("1e3"), Some(1000.0));
/// assert_eq!(coerce_metric(""), None);
/// assert_eq!(coerce_metric("N/A"), None);
/// assert_eq!(coerce_metric("nan"), None);
/// ```
pub fn coerce_metric(field: &str) -> Option<f64> {
    let value = field.trim().parse::<f64>().ok()?;
    if value.is_finite() {
        Some(value)
    } else {
        None
    }
}

/// Positions of the recognized columns in a header row.
#[derive(Debug)]
struct ColumnLayout {
    width: usize,
    query: usize,
    platform: Option<usize>,
    metrics: Vec<(Metric, usize)>,
}

impl ColumnLayout {
    /// Locate recognized columns. Header matching is exact; the first
    /// occurrence of a duplicated header wins.
    fn from_headers(headers: &csv::StringRecord) -> Result<Self> {
        let position = |name: &str| headers.iter().position(|h| h == name);

        let query = position(QUERY_COLUMN)
            .ok_or_else(|| CsvError::MissingColumn(QUERY_COLUMN.to_string()))?;
        let metrics = Metric::ALL
            .into_iter()
            .filter_map(|m| position(m.column_name()).map(|idx| (m, idx)))
            .collect();

        Ok(Self {
            width: headers.len(),
            query,
            platform: position(PLATFORM_COLUMN),
            metrics,
        })
    }
}

/// Parse a summary CSV string.
///
/// See [`parse_results`].
///
/// # Examples
///
/// ```
/// use benchviz_core::Metric;
/// use benchviz_csv::{parse_results_str, LoaderConfig};
///
/// let csv = "Query,Execution Time (s),Max Memory (MB)\nQ1,2.5,512\n";
/// let table = parse_results_str(csv, Some("flink"), &LoaderConfig::default()).unwrap();
///
/// let row = &table.records()[0];
/// assert_eq!(row.platform, "flink");
/// assert_eq!(row.query, "Q1");
/// assert_eq!(row.get(Metric::ExecutionTime), Some(2.5));
/// assert_eq!(row.get(Metric::MaxMemory), Some(512.0));
/// assert_eq!(row.get(Metric::Throughput), None);
/// ```
pub fn parse_results_str(
    csv: &str,
    fallback_platform: Option<&str>,
    config: &LoaderConfig,
) -> Result<ResultTable> {
    parse_results(csv.as_bytes(), fallback_platform, config)
}

/// Parse a summary CSV document from a reader.
///
/// The first row is the header. `Query` is required; `Platform` and the
/// four metric columns are optional, and unknown columns are ignored. Every
/// metric column found in the header is declared on the returned table,
/// even if all of its cells turn out to be missing.
///
/// A row takes its platform from the `Platform` column when the file has
/// one and the cell is not blank, and from `fallback_platform` otherwise.
/// A row with a blank `Query` cell is dropped with a warning; the rest of
/// the document is still parsed.
///
/// # Errors
///
/// - `MissingColumn("Query")` when the header has no `Query` column
/// - `MissingColumn("Platform")` when a row needs the fallback and there
///   is none
/// - `ParseError` for malformed CSV or a row wider than the header
/// - `SecurityLimit` past `config.max_rows` data rows
///
/// Rows shorter than the header are accepted; their trailing cells are
/// missing.
pub fn parse_results<R: Read>(
    reader: R,
    fallback_platform: Option<&str>,
    config: &LoaderConfig,
) -> Result<ResultTable> {
    parse_source(reader, None, fallback_platform, config)
}

/// [`parse_results`] for a document read from `source`, which is named in
/// row warnings.
pub(crate) fn parse_source<R: Read>(
    reader: R,
    source: Option<&Path>,
    fallback_platform: Option<&str>,
    config: &LoaderConfig,
) -> Result<ResultTable> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .delimiter(config.delimiter)
        .has_headers(true)
        .flexible(true)
        .trim(if config.trim {
            csv::Trim::All
        } else {
            csv::Trim::None
        })
        .from_reader(reader);

    let headers = csv_reader
        .headers()
        .map_err(|e| CsvError::ParseError {
            line: 1,
            message: e.to_string(),
        })?
        .clone();
    let layout = ColumnLayout::from_headers(&headers)?;

    let mut table = ResultTable::with_metrics(layout.metrics.iter().map(|(m, _)| *m));

    for (record_idx, result) in csv_reader.records().enumerate() {
        if record_idx >= config.max_rows {
            return Err(CsvError::SecurityLimit {
                limit: config.max_rows,
                actual: record_idx + 1,
            });
        }

        // Header occupies line 1.
        let line = record_idx + 2;
        let record = result.map_err(|e| CsvError::ParseError {
            line,
            message: e.to_string(),
        })?;

        if record.len() > layout.width {
            return Err(CsvError::ParseError {
                line,
                message: format!(
                    "expected {} fields, found {}",
                    layout.width,
                    record.len()
                ),
            });
        }

        let query = record.get(layout.query).unwrap_or_default().trim();
        if query.is_empty() {
            match source {
                Some(path) => {
                    warn!(file = %path.display(), line, "dropping row with a blank Query")
                }
                None => warn!(line, "dropping row with a blank Query"),
            }
            continue;
        }

        let platform = layout
            .platform
            .and_then(|idx| record.get(idx))
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .or(fallback_platform)
            .ok_or_else(|| CsvError::MissingColumn(PLATFORM_COLUMN.to_string()))?;

        let mut row = ResultRecord::new(platform, query);
        for (metric, idx) in &layout.metrics {
            row.values
                .set(*metric, record.get(*idx).and_then(coerce_metric));
        }
        table.push(row);
    }

    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(csv: &str) -> Result<ResultTable> {
        parse_results_str(csv, Some("flink"), &LoaderConfig::default())
    }

    #[test]
    fn test_platform_from_filename_when_column_absent() {
        let table = parse("Query,Execution Time (s),Max Memory (MB)\nQ1,2.5,512\n").unwrap();
        assert_eq!(table.len(), 1);
        let row = &table.records()[0];
        assert_eq!(row.platform, "flink");
        assert_eq!(row.get(Metric::ExecutionTime), Some(2.5));
        assert_eq!(row.get(Metric::MaxMemory), Some(512.0));
        assert_eq!(row.get(Metric::Throughput), None);
        assert!(!table.has_metric(Metric::Throughput));
    }

    #[test]
    fn test_platform_column_wins() {
        let table = parse("Platform,Query\nspark,Q1\n").unwrap();
        assert_eq!(table.records()[0].platform, "spark");
    }

    #[test]
    fn test_blank_platform_cell_uses_fallback() {
        let table = parse("Platform,Query\n,Q1\nspark,Q2\n").unwrap();
        assert_eq!(table.records()[0].platform, "flink");
        assert_eq!(table.records()[1].platform, "spark");
    }

    #[test]
    fn test_no_platform_anywhere_fails() {
        let err = parse_results_str("Query\nQ1\n", None, &LoaderConfig::default()).unwrap_err();
        assert!(matches!(err, CsvError::MissingColumn(ref c) if c == "Platform"));

        let err = parse_results_str("Platform,Query\n,Q1\n", None, &LoaderConfig::default())
            .unwrap_err();
        assert!(matches!(err, CsvError::MissingColumn(ref c) if c == "Platform"));
    }

    #[test]
    fn test_missing_query_column_fails() {
        let err = parse("Platform,Execution Time (s)\nflink,1.0\n").unwrap_err();
        assert!(matches!(err, CsvError::MissingColumn(ref c) if c == "Query"));
    }

    #[test]
    fn test_header_matching_is_case_sensitive() {
        let err = parse("query\nQ1\n").unwrap_err();
        assert!(matches!(err, CsvError::MissingColumn(_)));

        let table = parse("Query,execution time (s)\nQ1,2.0\n").unwrap();
        assert!(!table.has_metric(Metric::ExecutionTime));
    }

    #[test]
    fn test_blank_query_row_is_dropped() {
        let table = parse("Query,Execution Time (s)\nQ1,1.0\n ,2.0\nQ2,3.0\n").unwrap();
        let rows: Vec<(&str, Option<f64>)> = table
            .records()
            .iter()
            .map(|r| (r.query.as_str(), r.get(Metric::ExecutionTime)))
            .collect();
        assert_eq!(rows, vec![("Q1", Some(1.0)), ("Q2", Some(3.0))]);
    }

    #[test]
    fn test_all_queries_blank_is_empty_table() {
        let table = parse("Query,Max Memory (MB)\n,64\n\"\",128\n").unwrap();
        assert!(table.is_empty());
        assert!(table.has_metric(Metric::MaxMemory));
    }

    #[test]
    fn test_unparsable_metric_becomes_missing() {
        let table = parse("Query,Throughput (msgs/s)\nQ1,N/A\nQ2,\nQ3,1200.5\n").unwrap();
        let values: Vec<Option<f64>> = table
            .records()
            .iter()
            .map(|r| r.get(Metric::Throughput))
            .collect();
        assert_eq!(values, vec![None, None, Some(1200.5)]);
        assert!(table.has_metric(Metric::Throughput));
    }

    #[test]
    fn test_short_rows_are_missing_values() {
        let table = parse("Query,Execution Time (s),Throughput (msgs/s)\nQ1,3.0\n").unwrap();
        let row = &table.records()[0];
        assert_eq!(row.get(Metric::ExecutionTime), Some(3.0));
        assert_eq!(row.get(Metric::Throughput), None);
    }

    #[test]
    fn test_wide_rows_fail() {
        let err = parse("Query,Execution Time (s)\nQ1,3.0,extra\n").unwrap_err();
        assert!(matches!(err, CsvError::ParseError { line: 2, .. }));
    }

    #[test]
    fn test_unknown_columns_are_ignored() {
        let table = parse("Query,Notes,Avg Memory (MB)\nQ1,warm cache,128\n").unwrap();
        assert_eq!(table.records()[0].get(Metric::AvgMemory), Some(128.0));
        let metrics: Vec<Metric> = table.metrics().collect();
        assert_eq!(metrics, vec![Metric::AvgMemory]);
    }

    #[test]
    fn test_header_only_is_empty_table() {
        let table = parse("Query,Execution Time (s)\n").unwrap();
        assert!(table.is_empty());
        assert!(table.has_metric(Metric::ExecutionTime));
    }

    #[test]
    fn test_empty_input_has_no_query_column() {
        assert!(matches!(parse(""), Err(CsvError::MissingColumn(_))));
    }

    #[test]
    fn test_row_limit() {
        let config = LoaderConfig {
            max_rows: 2,
            ..Default::default()
        };
        let err = parse_results_str("Query\nQ1\nQ2\nQ3\n", Some("a"), &config).unwrap_err();
        assert!(matches!(err, CsvError::SecurityLimit { limit: 2, actual: 3 }));
    }

    #[test]
    fn test_custom_delimiter() {
        let config = LoaderConfig {
            delimiter: b';',
            ..Default::default()
        };
        let table =
            parse_results_str("Query;Max Memory (MB)\nQ1;64\n", Some("a"), &config).unwrap();
        assert_eq!(table.records()[0].get(Metric::MaxMemory), Some(64.0));
    }

    #[test]
    fn test_row_order_preserved() {
        let table = parse("Query\nQ3\nQ1\nQ2\n").unwrap();
        let queries: Vec<&str> = table.records().iter().map(|r| r.query.as_str()).collect();
        assert_eq!(queries, vec!["Q3", "Q1", "Q2"]);
    }
}
