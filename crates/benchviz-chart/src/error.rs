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

//! Error types for chart rendering.

use plotters::drawing::DrawingAreaErrorKind;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while writing chart images.
#[derive(Debug, Error)]
pub enum ChartError {
    /// Filesystem error on the output location.
    #[error("I/O error on '{}': {message}", path.display())]
    Io {
        /// Path being created or written.
        path: PathBuf,
        /// Underlying error message.
        message: String,
    },

    /// The drawing backend failed.
    #[error("Render error: {0}")]
    Render(String),
}

/// Convenience type alias for `Result` with `ChartError`.
pub type Result<T> = std::result::Result<T, ChartError>;

impl<E> From<DrawingAreaErrorKind<E>> for ChartError
where
    E: std::error::Error + Send + Sync,
{
    fn from(err: DrawingAreaErrorKind<E>) -> Self {
        ChartError::Render(err.to_string())
    }
}
