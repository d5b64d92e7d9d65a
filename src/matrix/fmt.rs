// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::matrix::Matrix;
use core::fmt;

/// Renders the matrix as a bracketed grid, one row per line:
///
/// ```text
/// [
///     [1.0, 2.0, 3.0],
///     [4.0, 5.0, 6.0],
/// ]
/// ```
///
/// Elements use their `Debug` form, so floats always show a decimal point. A precision such as
/// `{:.2}` applies to every element.
impl<T: fmt::Debug, const ROWS: usize, const COLS: usize> fmt::Display for Matrix<T, ROWS, COLS> {
    fn fmt(&self, fmtr: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = fmtr.precision();

        fmtr.write_str("[\n")?;
        for row in &self.data {
            fmtr.write_str("    [")?;
            for (i, elem) in row.iter().enumerate() {
                if i > 0 {
                    fmtr.write_str(", ")?;
                }

                match precision {
                    Some(precision) => write!(fmtr, "{elem:.precision$?}")?,
                    None => write!(fmtr, "{elem:?}")?,
                }
            }
            fmtr.write_str("],\n")?;
        }
        fmtr.write_str("]")
    }
}
