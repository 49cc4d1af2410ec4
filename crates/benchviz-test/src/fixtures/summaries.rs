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

//! Well-formed summary file contents.

/// Three metrics, no `Platform` and no throughput column.
///
/// Two queries. The platform must come from the file name.
pub fn flink_summary() -> &'static str {
    "Query,Execution Time (s),Max Memory (MB),Avg Memory (MB)\n\
     Q1,2.5,512,300\n\
     Q2,1.25,640,410\n"
}

/// All four metrics with an explicit `Platform` column.
///
/// Throughput for Q2 is blank.
pub fn spark_summary() -> &'static str {
    "Platform,Query,Execution Time (s),Max Memory (MB),Avg Memory (MB),Throughput (msgs/s)\n\
     spark,Q1,4.0,1024,800,1500\n\
     spark,Q2,3.5,900,700,\n"
}

/// Two runs of the same query, for mean aggregation.
pub fn repeated_runs() -> &'static str {
    "Query,Execution Time (s),Throughput (msgs/s)\n\
     Q1,1.0,100\n\
     Q1,3.0,300\n"
}

/// Unparsable and non-finite metric cells, an unknown column and a short row.
pub fn sparse_metrics() -> &'static str {
    "Query,Notes,Execution Time (s),Max Memory (MB)\n\
     Q1,cold start,N/A,256\n\
     Q2,,inf,\n\
     Q3,warm\n"
}

/// One row with a blank `Query` between valid rows.
pub fn blank_query_row() -> &'static str {
    "Query,Execution Time (s)\n\
     Q1,2.5\n\
     Q2,1.0\n\
     ,9.9\n\
     Q3,4.0\n"
}

/// Header row without data.
pub fn header_only() -> &'static str {
    "Query,Execution Time (s)\n"
}
