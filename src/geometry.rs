// Copyright 2024 rectgrid Developers
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

//! Axis-aligned rectangles and the border vocabulary used to address them

use crate::error::{RectangleError, RectangleResult};
use std::fmt;

/// One of the two axes of the plane
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Axis {
    /// The horizontal axis, carrying `left` and `right` borders
    X,
    /// The vertical axis, carrying `bottom` and `top` borders
    Y,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Axis::X => write!(f, "x"),
            Axis::Y => write!(f, "y"),
        }
    }
}

/// Names a rectangle border, and the direction a step across that border takes
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    /// Towards smaller x
    Left,
    /// Towards larger x
    Right,
    /// Towards smaller y
    Bottom,
    /// Towards larger y
    Top,
}

impl Direction {
    /// Every direction, in border order
    pub const ALL: [Direction; 4] = [Direction::Left, Direction::Right, Direction::Bottom, Direction::Top];

    /// True for `Left` and `Right`
    pub fn is_horizontal(self) -> bool {
        match self {
            Direction::Left | Direction::Right => true,
            Direction::Bottom | Direction::Top => false,
        }
    }

    /// True when stepping in this direction grows the index
    pub fn is_increment(self) -> bool {
        match self {
            Direction::Right | Direction::Top => true,
            Direction::Left | Direction::Bottom => false,
        }
    }

    /// The axis this direction moves along
    pub fn axis(self) -> Axis {
        if self.is_horizontal() {
            Axis::X
        } else {
            Axis::Y
        }
    }

    /// The direction facing the other border of the same axis
    pub fn opposite(self) -> Direction {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            Direction::Bottom => Direction::Top,
            Direction::Top => Direction::Bottom,
        }
    }
}

/// An axis-aligned rectangle over an ordered coordinate type.
///
/// The borders satisfy `left < right` and `bottom < top`; `new` rejects anything else.
/// Ordering and equality compare `left`, `right`, `bottom`, `top` in that order, so
/// rectangles can be collected into ordered sets.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Rectangle<S> {
    left: S,
    right: S,
    bottom: S,
    top: S,
}

impl<S: Ord> Rectangle<S> {
    /// New Rectangle from its four borders
    pub fn new(left: S, right: S, bottom: S, top: S) -> RectangleResult<Rectangle<S>> {
        if left >= right {
            return Err(RectangleError::InvalidHorizontalBorders);
        }
        if bottom >= top {
            return Err(RectangleError::InvalidVerticalBorders);
        }
        Ok(Rectangle { left, right, bottom, top })
    }
}

impl<S> Rectangle<S> {
    pub fn left(&self) -> &S {
        &self.left
    }

    pub fn right(&self) -> &S {
        &self.right
    }

    pub fn bottom(&self) -> &S {
        &self.bottom
    }

    pub fn top(&self) -> &S {
        &self.top
    }

    /// The border facing `direction`
    pub fn border(&self, direction: Direction) -> &S {
        match direction {
            Direction::Left => &self.left,
            Direction::Right => &self.right,
            Direction::Bottom => &self.bottom,
            Direction::Top => &self.top,
        }
    }

    /// The (low, high) borders along `axis`
    pub fn borders(&self, axis: Axis) -> (&S, &S) {
        match axis {
            Axis::X => (&self.left, &self.right),
            Axis::Y => (&self.bottom, &self.top),
        }
    }
}

// Deserialized borders are validated by `new`
#[cfg(feature = "serde")]
impl<'de, S> serde::Deserialize<'de> for Rectangle<S>
    where S: serde::Deserialize<'de> + Ord
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where D: serde::Deserializer<'de>
    {
        #[derive(serde::Deserialize)]
        struct Raw<S> {
            left: S,
            right: S,
            bottom: S,
            top: S,
        }

        let raw = Raw::deserialize(deserializer)?;
        Rectangle::new(raw.left, raw.right, raw.bottom, raw.top).map_err(serde::de::Error::custom)
    }
}

impl<S: fmt::Display> fmt::Display for Rectangle<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}] x [{}, {}]", self.left, self.right, self.bottom, self.top)
    }
}
