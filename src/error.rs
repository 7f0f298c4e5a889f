// Copyright 2024 rectgrid Developers
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

//! Error types for rectangle construction, compression and painting.

use crate::geometry::Axis;
use crate::indexpair::IndexPair;
use thiserror::Error;

/// A specialized Result type for rectgrid operations.
pub type RectangleResult<T> = Result<T, RectangleError>;

/// Reasons an operation on rectangles or their compressed grid was rejected.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RectangleError {
    /// The input set held a missing rectangle.
    #[error("rectangle set contains a missing entry")]
    NullPointers,

    /// `left` was not strictly less than `right`.
    #[error("left border must be less than right border")]
    InvalidHorizontalBorders,

    /// `bottom` was not strictly less than `top`.
    #[error("bottom border must be less than top border")]
    InvalidVerticalBorders,

    /// A lookup asked for a value that never took part in compression.
    #[error("value is not a border on the {axis} axis")]
    UnknownBorder { axis: Axis },

    /// A footprint cell fell outside the occupancy grid.
    #[error("cell {0} lies outside the occupancy grid")]
    CellOutOfGrid(IndexPair),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_reason() {
        assert_eq!(
            "rectangle set contains a missing entry",
            RectangleError::NullPointers.to_string()
        );
        assert_eq!(
            "value is not a border on the y axis",
            RectangleError::UnknownBorder { axis: Axis::Y }.to_string()
        );
        assert_eq!(
            "cell (3,4) lies outside the occupancy grid",
            RectangleError::CellOutOfGrid(IndexPair::new(3, 4)).to_string()
        );
    }
}
