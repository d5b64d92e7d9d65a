// SPDX-License-Identifier: MIT OR Apache-2.0

//! A matrix serializes as a sequence of rows, each a sequence of scalars: `[[1.0, 2.0], [3.0, 4.0]]`.

use crate::{matrix::Matrix, utils::num::Zero, vector::Vector};
use core::{fmt, marker::PhantomData};
use serde_core::{
    de::{self, Deserialize, Deserializer, Error, SeqAccess},
    ser::{Serialize, Serializer},
};

impl<T: Serialize, const ROWS: usize, const COLS: usize> Serialize for Matrix<T, ROWS, COLS> {
    #[inline]
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.data.iter().map(|row| &row[..]))
    }
}

impl<'de, T, const ROWS: usize, const COLS: usize> Deserialize<'de> for Matrix<T, ROWS, COLS>
where
    T: Deserialize<'de> + Copy + Zero,
{
    #[inline]
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct Visitor<T, const ROWS: usize, const COLS: usize>(PhantomData<Matrix<T, ROWS, COLS>>);

        impl<'de, T, const ROWS: usize, const COLS: usize> de::Visitor<'de> for Visitor<T, ROWS, COLS>
        where
            T: Deserialize<'de> + Copy + Zero,
        {
            type Value = Matrix<T, ROWS, COLS>;

            #[inline]
            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                write!(formatter, "{ROWS} rows of {COLS} elements each")
            }

            #[inline]
            fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
                let mut rows = [Vector::<T, COLS>::ZERO; ROWS];

                // Each row checks its own length.
                let mut i = 0;
                while let Some(row) = seq.next_element::<Vector<T, COLS>>()? {
                    match rows.get_mut(i) {
                        Some(slot) => *slot = row,
                        None => return Err(A::Error::invalid_length(i + 1, &self)),
                    }
                    i += 1;
                }

                if i < ROWS {
                    return Err(A::Error::invalid_length(i, &self));
                }

                Ok(Matrix::from_rows(rows))
            }
        }

        deserializer.deserialize_seq(Visitor(PhantomData))
    }
}
