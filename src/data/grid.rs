use serde::Serialize;

use super::model::{Number, PixelPair};
use crate::error::{ConvertError, Result};

/// Number of `[x, y]` pairs in one grid row.
pub const GROUP_SIZE: usize = 7;
/// Number of rows in the grid.
pub const GROUP_COUNT: usize = 64;
/// Data rows a pixel CSV must contain.
pub const EXPECTED_ROWS: usize = GROUP_SIZE * GROUP_COUNT;

/// 64 rows of 7 coordinate pairs. Group `i` holds samples `[7*i, 7*i + 7)`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct PixelGrid {
    groups: Vec<[PixelPair; GROUP_SIZE]>,
}

impl PixelGrid {
    /// Group a flat run of samples in their original order.
    ///
    /// Fails with [`ConvertError::RowCount`] unless exactly
    /// [`EXPECTED_ROWS`] samples are given.
    pub fn from_pairs(pairs: &[PixelPair]) -> Result<Self> {
        if pairs.len() != EXPECTED_ROWS {
            return Err(ConvertError::RowCount {
                expected: EXPECTED_ROWS,
                actual: pairs.len(),
            });
        }

        let groups: Vec<[PixelPair; GROUP_SIZE]> = pairs
            .chunks_exact(GROUP_SIZE)
            .map(|chunk| {
                let mut group = [[Number::Integer(0); 2]; GROUP_SIZE];
                group.copy_from_slice(chunk);
                group
            })
            .collect();

        log::debug!("grouped {} samples into {} rows", pairs.len(), groups.len());
        Ok(PixelGrid { groups })
    }

    pub fn groups(&self) -> &[[PixelPair; GROUP_SIZE]] {
        &self.groups
    }

    /// Samples back in file order.
    #[cfg(test)]
    fn flatten(&self) -> Vec<PixelPair> {
        self.groups.iter().flatten().copied().collect()
    }
}
