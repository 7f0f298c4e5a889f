// Copyright 2024 rectgrid Developers
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

//! Overlap detection for axis-aligned rectangles over any totally ordered coordinate type.
//!
//! Rectangle borders are compressed onto dense index lines (`PlaneMap`), every rectangle paints
//! its footprint onto a shared occupancy grid, and the set overlaps iff some cell is covered
//! twice. Integer coordinates work as they are; real coordinates go through `OrderedFloat`.
//!
//! ```rust
//! use rectgrid::{IndexPair, Rectangle, RectangleGroup};
//!
//! let group = RectangleGroup::from(vec![
//!     Rectangle::new(0, 2, 0, 1).unwrap(),
//!     Rectangle::new(2, 3, 1, 2).unwrap(),
//!     Rectangle::new(1, 2, 2, 3).unwrap(),
//! ]).unwrap();
//!
//! assert!(!group.is_overlapping());
//! assert_eq!(4, group.plane_map().x_size());
//! assert_eq!(Some(1), group.matrix_grid().get(&IndexPair::new(2, 1)));
//! ```

mod error;
mod geometry;
mod grid;
mod group;
mod indexpair;
mod occupancy;
mod planemap;

pub use error::{RectangleError, RectangleResult};
pub use geometry::{Axis, Direction, Rectangle};
pub use grid::{Cells, Grid};
pub use group::RectangleGroup;
pub use indexpair::IndexPair;
pub use occupancy::OccupancyGrid;
pub use planemap::{AxisMap, PlaneMap};
pub use ordered_float::OrderedFloat;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn staircase_integration() {
        let mut rectangles = Vec::new();
        for i in 0..16 {
            rectangles.push(Rectangle::new(i, i + 1, i, i + 1).unwrap());
        }
        let group = RectangleGroup::from(rectangles.clone()).unwrap();
        assert_eq!(17, group.plane_map().x_size());
        assert_eq!(16 * 16, group.matrix_grid().len());
        assert_eq!(16, group.matrix_grid().covered_cells().count());
        assert!(!group.is_overlapping());

        rectangles.push(Rectangle::new(3, 5, 3, 5).unwrap());
        let group = RectangleGroup::from(rectangles).unwrap();
        assert!(group.is_overlapping());
        assert_eq!(2, group.overlapping_cells().count());
    }
}
