// Copyright 2025 the Seristyle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Symbol paths for data-point glyphs and legend swatches.

use kurbo::{BezPath, Circle, Shape};

/// A small set of symbol shapes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Symbol {
    /// An axis-aligned square.
    Square,
    /// A circle.
    Circle,
    /// A square rotated 45 degrees.
    Diamond,
    /// A triangle pointing up.
    TriangleUp,
    /// A triangle pointing down.
    TriangleDown,
}

impl Symbol {
    /// Returns a path for this symbol centered at `cx, cy`, using `size` as
    /// the diameter/side.
    pub fn path(self, cx: f64, cy: f64, size: f64) -> BezPath {
        let h = size * 0.5;
        match self {
            Self::Square => polygon(&[
                (cx - h, cy - h),
                (cx + h, cy - h),
                (cx + h, cy + h),
                (cx - h, cy + h),
            ]),
            Self::Circle => circle_path(cx, cy, h),
            Self::Diamond => polygon(&[(cx, cy - h), (cx + h, cy), (cx, cy + h), (cx - h, cy)]),
            Self::TriangleUp => polygon(&[(cx, cy - h), (cx + h, cy + h), (cx - h, cy + h)]),
            Self::TriangleDown => polygon(&[(cx - h, cy - h), (cx + h, cy - h), (cx, cy + h)]),
        }
    }
}

fn polygon(points: &[(f64, f64)]) -> BezPath {
    let mut p = BezPath::new();
    let mut iter = points.iter().copied();
    if let Some(first) = iter.next() {
        p.move_to(first);
        for point in iter {
            p.line_to(point);
        }
        p.close_path();
    }
    p
}

fn circle_path(cx: f64, cy: f64, r: f64) -> BezPath {
    let circle = Circle::new((cx, cy), r);
    // Flattening tolerance is fixed; callers needing device-dependent
    // precision can build their own path.
    let tolerance = 0.1;
    circle.path_elements(tolerance).collect()
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn square_bounds_match_size() {
        let path = Symbol::Square.path(0.0, 0.0, 6.0);
        let b = path.bounding_box();
        assert_eq!((b.x0, b.y0, b.x1, b.y1), (-3.0, -3.0, 3.0, 3.0));
    }

    #[test]
    fn diamond_bounds_match_size() {
        let path = Symbol::Diamond.path(10.0, 4.0, 8.0);
        let b = path.bounding_box();
        assert_eq!((b.x0, b.y0, b.x1, b.y1), (6.0, 0.0, 14.0, 8.0));
    }

    #[test]
    fn triangles_are_closed() {
        for symbol in [Symbol::TriangleUp, Symbol::TriangleDown] {
            let path = symbol.path(0.0, 0.0, 4.0);
            assert!(path.area().abs() > 0.0, "triangle path encloses area");
        }
    }
}
