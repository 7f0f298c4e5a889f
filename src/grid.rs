// Copyright 2024 rectgrid Developers
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

//! Enumeration of the cells inside a rectangle of index space

use crate::geometry::{Direction, Rectangle};
use crate::indexpair::IndexPair;
use itertools::{Itertools, Product};
use std::ops::Range;

/// The cells of an index rectangle, as a restartable sequence.
///
/// A grid built from `Rectangle(left, right, bottom, top)` holds every cell `(x, y)` with
/// `left <= x < right` and `bottom <= y < top`: the `right` and `top` lines are the first
/// ones excluded. A `Grid` stores only its bounds; cells are produced on demand.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    columns: Range<usize>,
    rows: Range<usize>,
}

impl Grid {
    /// The full grid between `x_lines` vertical and `y_lines` horizontal index lines.
    ///
    /// Empty when either axis has fewer than two lines.
    pub fn spanning(x_lines: usize, y_lines: usize) -> Grid {
        Grid {
            columns: 0..x_lines.saturating_sub(1),
            rows: 0..y_lines.saturating_sub(1),
        }
    }

    /// Cells in row-major order: `y` ascending on the outside, `x` ascending inside
    pub fn iter(&self) -> Cells {
        Cells { inner: self.rows.clone().cartesian_product(self.columns.clone()) }
    }

    /// Number of cells
    pub fn len(&self) -> usize {
        self.columns.len() * self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty() || self.rows.is_empty()
    }

    pub fn width(&self) -> usize {
        self.columns.len()
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn contains(&self, pair: &IndexPair) -> bool {
        self.columns.contains(&pair.x_index()) && self.rows.contains(&pair.y_index())
    }

    /// The neighbour of `pair` one step in `direction`, if it is still inside this grid
    pub fn step(&self, pair: &IndexPair, direction: Direction) -> Option<IndexPair> {
        pair.increment(direction).filter(|next| self.contains(next))
    }
}

impl<'a> From<&'a Rectangle<usize>> for Grid {
    fn from(rectangle: &'a Rectangle<usize>) -> Grid {
        Grid {
            columns: *rectangle.left()..*rectangle.right(),
            rows: *rectangle.bottom()..*rectangle.top(),
        }
    }
}

impl From<Rectangle<usize>> for Grid {
    fn from(rectangle: Rectangle<usize>) -> Grid {
        Grid::from(&rectangle)
    }
}

impl<'a> IntoIterator for &'a Grid {
    type Item = IndexPair;
    type IntoIter = Cells;

    fn into_iter(self) -> Cells {
        self.iter()
    }
}

/// Iterator over the cells of a `Grid`
#[derive(Debug, Clone)]
pub struct Cells {
    inner: Product<Range<usize>, Range<usize>>,
}

impl Iterator for Cells {
    type Item = IndexPair;

    fn next(&mut self) -> Option<IndexPair> {
        self.inner.next().map(|(y_index, x_index)| IndexPair::new(x_index, y_index))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(left: usize, right: usize, bottom: usize, top: usize) -> Grid {
        Grid::from(Rectangle::new(left, right, bottom, top).unwrap())
    }

    #[test]
    fn half_open_row_major() {
        let cells: Vec<IndexPair> = grid(1, 3, 2, 4).iter().collect();
        assert_eq!(
            vec![
                IndexPair::new(1, 2),
                IndexPair::new(2, 2),
                IndexPair::new(1, 3),
                IndexPair::new(2, 3),
            ],
            cells
        );
    }

    #[test]
    fn restartable() {
        let g = grid(0, 3, 0, 2);
        let first: Vec<IndexPair> = g.iter().collect();
        let second: Vec<IndexPair> = (&g).into_iter().collect();
        assert_eq!(first, second);
        assert_eq!(6, g.len());
        assert_eq!(g.len(), first.len());
    }

    #[test]
    fn spanning_counts_cells_between_lines() {
        let g = Grid::spanning(4, 3);
        assert_eq!(3, g.width());
        assert_eq!(2, g.height());
        assert_eq!(6, g.iter().count());
        assert!(g.contains(&IndexPair::new(2, 1)));
        assert!(!g.contains(&IndexPair::new(3, 1)));
        assert!(!g.contains(&IndexPair::new(0, 2)));
    }

    #[test]
    fn spanning_degenerate() {
        assert!(Grid::spanning(0, 0).is_empty());
        assert!(Grid::spanning(1, 5).is_empty());
        assert_eq!(0, Grid::spanning(5, 1).iter().count());
        assert_eq!(0, Grid::spanning(5, 1).len());
    }

    #[test]
    fn step_stays_inside() {
        let g = grid(1, 3, 1, 3);
        let corner = IndexPair::new(1, 1);
        assert_eq!(None, g.step(&corner, Direction::Left));
        assert_eq!(None, g.step(&corner, Direction::Bottom));
        assert_eq!(Some(IndexPair::new(2, 1)), g.step(&corner, Direction::Right));
        assert_eq!(None, g.step(&IndexPair::new(2, 1), Direction::Right));
        assert_eq!(Some(IndexPair::new(1, 2)), g.step(&corner, Direction::Top));
    }
}
