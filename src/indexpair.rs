// Copyright 2024 rectgrid Developers
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

//! Cell addresses in compressed index space

use crate::geometry::Direction;
use std::fmt;

/// A cell address in compressed index space.
///
/// Pairs order by `x_index` first, then `y_index`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IndexPair {
    x_index: usize,
    y_index: usize,
}

impl IndexPair {
    pub fn new(x_index: usize, y_index: usize) -> IndexPair {
        IndexPair { x_index, y_index }
    }

    pub fn x_index(&self) -> usize {
        self.x_index
    }

    pub fn y_index(&self) -> usize {
        self.y_index
    }

    /// The neighbouring pair one step in `direction`.
    ///
    /// Returns `None` when the step would leave the index space, i.e. moving
    /// `Left` from column 0 or `Bottom` from row 0.
    pub fn increment(&self, direction: Direction) -> Option<IndexPair> {
        let moved = |index: usize| {
            if direction.is_increment() {
                index.checked_add(1)
            } else {
                index.checked_sub(1)
            }
        };
        if direction.is_horizontal() {
            moved(self.x_index).map(|x_index| IndexPair::new(x_index, self.y_index))
        } else {
            moved(self.y_index).map(|y_index| IndexPair::new(self.x_index, y_index))
        }
    }
}

impl From<(usize, usize)> for IndexPair {
    fn from((x_index, y_index): (usize, usize)) -> IndexPair {
        IndexPair::new(x_index, y_index)
    }
}

impl fmt::Display for IndexPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x_index, self.y_index)
    }
}
