// Copyright 2024 rectgrid Developers
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

//! Coordinate compression of rectangle borders onto dense index lines

use crate::error::{RectangleError, RectangleResult};
use crate::geometry::{Axis, Rectangle};
use itertools::Itertools;

/// Order-preserving bijection between the distinct border values of one axis and `0..len()`.
///
/// The values are kept sorted and deduplicated, so a value's index is its rank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AxisMap<S> {
    values: Vec<S>,
}

impl<S: Ord> AxisMap<S> {
    /// Compress the given border values. Duplicates collapse onto one index.
    pub fn from_borders<I>(borders: I) -> AxisMap<S>
        where I: IntoIterator<Item = S>
    {
        AxisMap { values: borders.into_iter().sorted().dedup().collect() }
    }

    /// The index of `value`, if it was one of the compressed borders
    pub fn index_of(&self, value: &S) -> Option<usize> {
        self.values.binary_search(value).ok()
    }
}

impl<S> AxisMap<S> {
    /// The number of distinct border values, which is also the number of index lines
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// The border value compressed to `index`
    pub fn value_at(&self, index: usize) -> Option<&S> {
        self.values.get(index)
    }

    /// Border values in index order
    pub fn values(&self) -> &[S] {
        &self.values
    }
}

/// Coordinate compression for both axes of a rectangle set.
///
/// The x axis compresses every `left` and `right` border, the y axis every `bottom` and `top`.
/// Both maps are built once and never change afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaneMap<S> {
    horizontal: AxisMap<S>,
    vertical: AxisMap<S>,
}

impl<S: Ord + Clone> PlaneMap<S> {
    /// Build the plane map from the borders of `rectangles`
    pub fn from_rectangles<'a, I>(rectangles: I) -> PlaneMap<S>
        where I: IntoIterator<Item = &'a Rectangle<S>>,
              S: 'a
    {
        let mut x_borders = Vec::new();
        let mut y_borders = Vec::new();
        for rectangle in rectangles {
            let (left, right) = rectangle.borders(Axis::X);
            let (bottom, top) = rectangle.borders(Axis::Y);
            x_borders.extend([left.clone(), right.clone()]);
            y_borders.extend([bottom.clone(), top.clone()]);
        }
        PlaneMap {
            horizontal: AxisMap::from_borders(x_borders),
            vertical: AxisMap::from_borders(y_borders),
        }
    }
}

impl<S: Ord> PlaneMap<S> {
    /// The compressed index of `value` on `axis`.
    ///
    /// Fails with `UnknownBorder` when `value` was not a border of any rectangle on that axis.
    pub fn index_of(&self, value: &S, axis: Axis) -> RectangleResult<usize> {
        self.axis(axis)
            .index_of(value)
            .ok_or(RectangleError::UnknownBorder { axis })
    }

    pub fn x_index_of(&self, value: &S) -> Option<usize> {
        self.horizontal.index_of(value)
    }

    pub fn y_index_of(&self, value: &S) -> Option<usize> {
        self.vertical.index_of(value)
    }

    /// Translate every border of `rectangle` into index space
    pub fn compress(&self, rectangle: &Rectangle<S>) -> RectangleResult<Rectangle<usize>> {
        Rectangle::new(
            self.index_of(rectangle.left(), Axis::X)?,
            self.index_of(rectangle.right(), Axis::X)?,
            self.index_of(rectangle.bottom(), Axis::Y)?,
            self.index_of(rectangle.top(), Axis::Y)?,
        )
    }
}

impl<S> PlaneMap<S> {
    /// Number of distinct x borders, i.e. vertical grid lines
    pub fn x_size(&self) -> usize {
        self.horizontal.len()
    }

    /// Number of distinct y borders, i.e. horizontal grid lines
    pub fn y_size(&self) -> usize {
        self.vertical.len()
    }

    pub fn axis(&self, axis: Axis) -> &AxisMap<S> {
        match axis {
            Axis::X => &self.horizontal,
            Axis::Y => &self.vertical,
        }
    }

    /// Reverse lookup: the border value that was compressed to `index` on `axis`
    pub fn value_at(&self, index: usize, axis: Axis) -> Option<&S> {
        self.axis(axis).value_at(index)
    }
}

impl<'a, S> FromIterator<&'a Rectangle<S>> for PlaneMap<S>
    where S: Ord + Clone + 'a
{
    fn from_iter<I: IntoIterator<Item = &'a Rectangle<S>>>(iter: I) -> PlaneMap<S> {
        PlaneMap::from_rectangles(iter)
    }
}
