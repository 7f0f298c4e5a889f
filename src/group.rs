// Copyright 2024 rectgrid Developers
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

//! Overlap detection for a set of rectangles.
//!
//! Building a `RectangleGroup` compresses every border into a `PlaneMap`, seeds an
//! `OccupancyGrid` with one zero per compressed cell, and lets every rectangle add one to
//! each cell of its footprint. The rectangles overlap exactly when some cell ends above one.
//! No arithmetic is ever done on the coordinate type; it only needs a total order.

use crate::error::{RectangleError, RectangleResult};
use crate::geometry::Rectangle;
use crate::grid::Grid;
use crate::indexpair::IndexPair;
use crate::occupancy::OccupancyGrid;
use crate::planemap::PlaneMap;
use std::collections::BTreeSet;
use tracing::{debug, trace, warn};

/// An immutable set of rectangles together with its compressed occupancy grid
#[derive(Debug, Clone)]
pub struct RectangleGroup<S> {
    rectangle_set: BTreeSet<Rectangle<S>>,
    plane_map: PlaneMap<S>,
    matrix_grid: OccupancyGrid,
    is_overlapping: bool,
}

impl<S> RectangleGroup<S>
    where S: Ord + Clone
{
    /// Build a group from `rectangles`. Equal rectangles count once.
    pub fn from<I>(rectangles: I) -> RectangleResult<RectangleGroup<S>>
        where I: IntoIterator<Item = Rectangle<S>>
    {
        RectangleGroup::build(rectangles.into_iter().collect())
    }

    /// Build a group from possibly missing rectangles.
    ///
    /// Any `None` entry rejects the whole input with `NullPointers` before compression starts.
    pub fn from_optional<I>(rectangles: I) -> RectangleResult<RectangleGroup<S>>
        where I: IntoIterator<Item = Option<Rectangle<S>>>
    {
        let rectangle_set = rectangles
            .into_iter()
            .collect::<Option<BTreeSet<Rectangle<S>>>>()
            .ok_or_else(|| {
                warn!("rejecting rectangle set with a missing entry");
                RectangleError::NullPointers
            })?;
        RectangleGroup::build(rectangle_set)
    }

    fn build(rectangle_set: BTreeSet<Rectangle<S>>) -> RectangleResult<RectangleGroup<S>> {
        let plane_map = PlaneMap::from_rectangles(&rectangle_set);
        let grid = Grid::spanning(plane_map.x_size(), plane_map.y_size());
        debug!(
            rectangles = rectangle_set.len(),
            x_lines = plane_map.x_size(),
            y_lines = plane_map.y_size(),
            cells = grid.len(),
            "compressed rectangle borders"
        );

        let mut matrix_grid = OccupancyGrid::seeded(&grid);
        for rectangle in &rectangle_set {
            let compressed = plane_map.compress(rectangle)?;
            let footprint = Grid::from(&compressed);
            trace!(?compressed, cells = footprint.len(), "painting footprint");
            matrix_grid.paint(&footprint)?;
        }

        let is_overlapping = matrix_grid.overlapping_cells().next().is_some();
        debug!(is_overlapping, max_count = matrix_grid.max_count(), "occupancy grid built");

        Ok(RectangleGroup { rectangle_set, plane_map, matrix_grid, is_overlapping })
    }

    /// The compressed sub-grid covered by `rectangle`.
    ///
    /// Fails with `UnknownBorder` if one of its borders is not a border of this group.
    pub fn footprint(&self, rectangle: &Rectangle<S>) -> RectangleResult<Grid> {
        self.plane_map.compress(rectangle).map(Grid::from)
    }
}

impl<S> RectangleGroup<S> {
    pub fn rectangle_set(&self) -> &BTreeSet<Rectangle<S>> {
        &self.rectangle_set
    }

    pub fn plane_map(&self) -> &PlaneMap<S> {
        &self.plane_map
    }

    pub fn matrix_grid(&self) -> &OccupancyGrid {
        &self.matrix_grid
    }

    /// True if any cell is covered by two or more rectangles
    pub fn is_overlapping(&self) -> bool {
        self.is_overlapping
    }

    /// Cells covered by two or more rectangles, with their counts
    pub fn overlapping_cells(&self) -> impl Iterator<Item = (IndexPair, u64)> + '_ {
        self.matrix_grid.overlapping_cells()
    }

    /// Diagnostic rendering of the occupancy grid, one bracketed row per line
    pub fn matrix_grid_to_string(&self) -> String {
        self.matrix_grid.to_string()
    }
}
