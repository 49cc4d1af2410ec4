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

//! Summary files that fail to load.

use crate::SampleList;

/// Invalid summary samples as (name, csv) pairs.
///
/// Every sample is rejected even when a fallback platform is available.
pub fn invalid_summary_samples() -> SampleList {
    vec![
        ("empty", ""),
        ("missing_query_column", "Platform,Execution Time (s)\nflink,1.0\n"),
        ("lowercase_query_column", "query,Execution Time (s)\nQ1,1.0\n"),
        ("wide_row", "Query,Execution Time (s)\nQ1,1.0,2.0\n"),
    ]
}

/// A summary with no `Query` column.
pub fn missing_query_column() -> &'static str {
    "Platform,Execution Time (s)\nflink,1.0\n"
}
