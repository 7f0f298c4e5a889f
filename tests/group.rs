// Copyright 2024 rectgrid Developers
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

use proptest::collection::vec;
use proptest::prelude::*;
use rectgrid::{Axis, IndexPair, OrderedFloat, Rectangle, RectangleError, RectangleGroup};
use std::collections::BTreeSet;

fn arb_rectangle() -> impl Strategy<Value = Rectangle<i32>> {
    (0i32..8, 1i32..4, 0i32..8, 1i32..4)
        .prop_map(|(left, width, bottom, height)| Rectangle::new(left, left + width, bottom, bottom + height).unwrap())
}

fn arb_rectangles() -> impl Strategy<Value = Vec<Rectangle<i32>>> {
    vec(arb_rectangle(), 0..8)
}

fn intersects(a: &Rectangle<i32>, b: &Rectangle<i32>) -> bool {
    a.left() < b.right() && b.left() < a.right() && a.bottom() < b.top() && b.bottom() < a.top()
}

#[test]
fn assignment_scenarios() {
    let tiling = vec![
        Rectangle::new(0, 2, 0, 1).unwrap(),
        Rectangle::new(2, 3, 1, 2).unwrap(),
        Rectangle::new(1, 2, 2, 3).unwrap(),
    ];
    let group = RectangleGroup::from(tiling).unwrap();
    assert!(!group.is_overlapping());
    assert_eq!(Some(0), group.matrix_grid().get(&IndexPair::new(2, 2)));

    let a = Rectangle::new(OrderedFloat(2.71), OrderedFloat(3.14), OrderedFloat(0.0), OrderedFloat(1.0)).unwrap();
    let b = Rectangle::new(OrderedFloat(0.1), OrderedFloat(3.14), OrderedFloat(0.0), OrderedFloat(1.0)).unwrap();
    let group = RectangleGroup::from(vec![a, b]).unwrap();
    assert_eq!(3, group.plane_map().x_size());
    assert!(group.is_overlapping());

    let with_missing = vec![Some(Rectangle::new(0, 2, 0, 1).unwrap()), Some(Rectangle::new(2, 3, 1, 2).unwrap()), None];
    match RectangleGroup::from_optional(with_missing) {
        Err(RectangleError::NullPointers) => {}
        other => panic!("expected NullPointers, got {:?}", other.map(|g| g.is_overlapping())),
    }
}

proptest! {
    #[test]
    fn compression_counts_distinct_borders(rectangles in arb_rectangles()) {
        let group = RectangleGroup::from(rectangles.clone()).unwrap();
        let xs: BTreeSet<i32> = rectangles.iter().flat_map(|r| vec![*r.left(), *r.right()]).collect();
        let ys: BTreeSet<i32> = rectangles.iter().flat_map(|r| vec![*r.bottom(), *r.top()]).collect();
        prop_assert_eq!(xs.len(), group.plane_map().x_size());
        prop_assert_eq!(ys.len(), group.plane_map().y_size());

        // ascending values get ascending dense indices
        for (expected, x) in xs.iter().enumerate() {
            prop_assert_eq!(Ok(expected), group.plane_map().index_of(x, Axis::X));
        }
        for (expected, y) in ys.iter().enumerate() {
            prop_assert_eq!(Some(expected), group.plane_map().y_index_of(y));
        }
    }

    #[test]
    fn counts_match_footprints(rectangles in arb_rectangles()) {
        let group = RectangleGroup::from(rectangles).unwrap();
        let footprints: Vec<_> = group
            .rectangle_set()
            .iter()
            .map(|r| group.footprint(r).unwrap())
            .collect();
        for (pair, count) in group.matrix_grid().iter() {
            let expected = footprints.iter().filter(|f| f.contains(&pair)).count() as u64;
            prop_assert_eq!(expected, count);
        }
        let painted: usize = footprints.iter().map(|f| f.len()).sum();
        prop_assert_eq!(painted as u64, group.matrix_grid().total());
    }

    #[test]
    fn overlap_matches_pairwise_intersection(rectangles in arb_rectangles()) {
        let group = RectangleGroup::from(rectangles).unwrap();
        let distinct: Vec<&Rectangle<i32>> = group.rectangle_set().iter().collect();
        let mut pairwise = false;
        for (i, a) in distinct.iter().enumerate() {
            for b in &distinct[i + 1..] {
                pairwise |= intersects(a, b);
            }
        }
        prop_assert_eq!(pairwise, group.is_overlapping());
        prop_assert_eq!(group.matrix_grid().max_count() >= 2, group.is_overlapping());
    }

    #[test]
    fn input_order_does_not_matter(rectangles in arb_rectangles()) {
        let forward = RectangleGroup::from(rectangles.clone()).unwrap();
        let backward = RectangleGroup::from(rectangles.into_iter().rev()).unwrap();
        prop_assert_eq!(forward.matrix_grid(), backward.matrix_grid());
        prop_assert_eq!(forward.matrix_grid_to_string(), backward.matrix_grid_to_string());
    }
}
