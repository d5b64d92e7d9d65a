// SPDX-License-Identifier: MIT OR Apache-2.0

use thiserror::Error;

/// Returned by the checked constructors when runtime-shaped input does not fit the target
/// matrix shape.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Error)]
pub enum ShapeError {
    #[error("expected {expected} rows, found {found}")]
    RowCount { expected: usize, found: usize },

    #[error("expected {expected} columns in row {row}, found {found}")]
    ColumnCount {
        row: usize,
        expected: usize,
        found: usize,
    },
}

impl ShapeError {
    /// The number of rows or columns the target shape required.
    #[must_use]
    #[inline]
    pub const fn expected(&self) -> usize {
        match *self {
            Self::RowCount { expected, .. } | Self::ColumnCount { expected, .. } => expected,
        }
    }

    /// The number of rows or columns actually supplied.
    #[must_use]
    #[inline]
    pub const fn found(&self) -> usize {
        match *self {
            Self::RowCount { found, .. } | Self::ColumnCount { found, .. } => found,
        }
    }
}
