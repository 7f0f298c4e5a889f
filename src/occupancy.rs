// Copyright 2024 rectgrid Developers
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

//! Per-cell occupancy counts over a compressed grid

use crate::error::{RectangleError, RectangleResult};
use crate::grid::Grid;
use crate::indexpair::IndexPair;
use itertools::Itertools;
use std::collections::BTreeMap;
use std::fmt;
use std::ops::RangeBounds;

/// Number of rectangles covering each cell, keyed and ordered by `IndexPair`.
///
/// Every cell of the grid it was seeded from has an entry, covered or not.
/// The counts can only be changed inside the crate; callers get read-only access.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OccupancyGrid {
    cells: BTreeMap<IndexPair, u64>,
    width: usize,
    height: usize,
}

impl OccupancyGrid {
    /// Every cell of `grid` with a count of zero
    pub(crate) fn seeded(grid: &Grid) -> OccupancyGrid {
        OccupancyGrid {
            cells: grid.iter().map(|pair| (pair, 0)).collect(),
            width: grid.width(),
            height: grid.height(),
        }
    }

    /// Add one to every cell of `footprint`.
    ///
    /// Fails on the first footprint cell that has no entry; cells visited before it keep
    /// their increment.
    pub(crate) fn paint(&mut self, footprint: &Grid) -> RectangleResult<()> {
        for pair in footprint {
            match self.cells.get_mut(&pair) {
                Some(count) => *count += 1,
                None => return Err(RectangleError::CellOutOfGrid(pair)),
            }
        }
        Ok(())
    }

    /// The count at `pair`, or `None` outside the grid
    pub fn get(&self, pair: &IndexPair) -> Option<u64> {
        self.cells.get(pair).copied()
    }

    /// All cells and counts in `IndexPair` order
    pub fn iter(&self) -> impl Iterator<Item = (IndexPair, u64)> + '_ {
        self.cells.iter().map(|(&pair, &count)| (pair, count))
    }

    /// Cells whose `IndexPair` falls in `range`, in order
    pub fn range<R>(&self, range: R) -> impl Iterator<Item = (IndexPair, u64)> + '_
        where R: RangeBounds<IndexPair>
    {
        self.cells.range(range).map(|(&pair, &count)| (pair, count))
    }

    /// Cells covered by at least two rectangles
    pub fn overlapping_cells(&self) -> impl Iterator<Item = (IndexPair, u64)> + '_ {
        self.iter().filter(|&(_, count)| count > 1)
    }

    /// Cells covered by at least one rectangle
    pub fn covered_cells(&self) -> impl Iterator<Item = (IndexPair, u64)> + '_ {
        self.iter().filter(|&(_, count)| count > 0)
    }

    /// The highest count in the grid, zero when empty
    pub fn max_count(&self) -> u64 {
        self.cells.values().copied().max().unwrap_or(0)
    }

    /// Sum of all counts
    pub fn total(&self) -> u64 {
        self.cells.values().sum()
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Number of columns of cells
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows of cells
    pub fn height(&self) -> usize {
        self.height
    }

    /// The counts of row `y_index`, by ascending `x_index`
    pub fn row(&self, y_index: usize) -> Vec<u64> {
        (0..self.width)
            .map(|x_index| self.get(&IndexPair::new(x_index, y_index)).unwrap_or(0))
            .collect()
    }
}

/// One row per line, row `y = 0` first, rendered as `[c0, c1, ...]`
impl fmt::Display for OccupancyGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y_index in 0..self.height {
            writeln!(f, "[{}]", self.row(y_index).iter().join(", "))?;
        }
        Ok(())
    }
}
