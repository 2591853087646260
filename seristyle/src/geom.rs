// Copyright 2025 the Seristyle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rectangle insets and anchoring used by marker label placement.

use kurbo::{Point, Rect};

/// How an inset adjustment is applied along one axis of a rectangle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LengthAdjust {
    /// Leave the axis unchanged.
    None,
    /// Move both edges inward by the insets.
    Contract,
    /// Move both edges outward by the insets.
    Expand,
}

/// Insets around a rectangle, in pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RectInsets {
    /// Inset from the top edge.
    pub top: f64,
    /// Inset from the left edge.
    pub left: f64,
    /// Inset from the bottom edge.
    pub bottom: f64,
    /// Inset from the right edge.
    pub right: f64,
}

impl RectInsets {
    /// Insets with four independent sides.
    pub fn new(top: f64, left: f64, bottom: f64, right: f64) -> Self {
        Self {
            top,
            left,
            bottom,
            right,
        }
    }

    /// The same inset on every side.
    pub fn uniform(value: f64) -> Self {
        Self::new(value, value, value, value)
    }

    /// Applies these insets to `base`, expanding or contracting each axis
    /// independently.
    pub fn adjusted_rect(
        &self,
        base: Rect,
        horizontal: LengthAdjust,
        vertical: LengthAdjust,
    ) -> Rect {
        let (mut x0, mut x1) = (base.x0, base.x1);
        match horizontal {
            LengthAdjust::None => {}
            LengthAdjust::Contract => {
                x0 += self.left;
                x1 -= self.right;
            }
            LengthAdjust::Expand => {
                x0 -= self.left;
                x1 += self.right;
            }
        }
        let (mut y0, mut y1) = (base.y0, base.y1);
        match vertical {
            LengthAdjust::None => {}
            LengthAdjust::Contract => {
                y0 += self.top;
                y1 -= self.bottom;
            }
            LengthAdjust::Expand => {
                y0 -= self.top;
                y1 += self.bottom;
            }
        }
        Rect::new(x0, y0, x1, y1)
    }
}

/// A nine-way anchor position within a rectangle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RectAnchor {
    /// Top-left corner.
    TopLeft,
    /// Middle of the top edge.
    Top,
    /// Top-right corner.
    TopRight,
    /// Middle of the left edge.
    Left,
    /// Center of the rectangle.
    Center,
    /// Middle of the right edge.
    Right,
    /// Bottom-left corner.
    BottomLeft,
    /// Middle of the bottom edge.
    Bottom,
    /// Bottom-right corner.
    BottomRight,
}

impl RectAnchor {
    /// The point this anchor names within `rect`.
    pub fn anchor_point(self, rect: Rect) -> Point {
        let cx = (rect.x0 + rect.x1) * 0.5;
        let cy = (rect.y0 + rect.y1) * 0.5;
        match self {
            Self::TopLeft => Point::new(rect.x0, rect.y0),
            Self::Top => Point::new(cx, rect.y0),
            Self::TopRight => Point::new(rect.x1, rect.y0),
            Self::Left => Point::new(rect.x0, cy),
            Self::Center => Point::new(cx, cy),
            Self::Right => Point::new(rect.x1, cy),
            Self::BottomLeft => Point::new(rect.x0, rect.y1),
            Self::Bottom => Point::new(cx, rect.y1),
            Self::BottomRight => Point::new(rect.x1, rect.y1),
        }
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn contract_moves_edges_inward() {
        let insets = RectInsets::new(1.0, 2.0, 3.0, 4.0);
        let base = Rect::new(0.0, 0.0, 100.0, 50.0);
        let r = insets.adjusted_rect(base, LengthAdjust::Contract, LengthAdjust::Contract);
        assert_eq!(r, Rect::new(2.0, 1.0, 96.0, 47.0));
    }

    #[test]
    fn expand_moves_edges_outward() {
        let insets = RectInsets::uniform(3.0);
        let base = Rect::new(10.0, 10.0, 20.0, 20.0);
        let r = insets.adjusted_rect(base, LengthAdjust::Expand, LengthAdjust::None);
        assert_eq!(r, Rect::new(7.0, 10.0, 23.0, 20.0));
    }

    #[test]
    fn mixed_axes_adjust_independently() {
        let insets = RectInsets::uniform(2.0);
        let base = Rect::new(0.0, 0.0, 10.0, 10.0);
        let r = insets.adjusted_rect(base, LengthAdjust::Contract, LengthAdjust::Expand);
        assert_eq!(r, Rect::new(2.0, -2.0, 8.0, 12.0));
    }

    #[test]
    fn anchor_points_cover_corners_and_midpoints() {
        let rect = Rect::new(0.0, 0.0, 10.0, 4.0);
        assert_eq!(RectAnchor::TopLeft.anchor_point(rect), Point::new(0.0, 0.0));
        assert_eq!(RectAnchor::Center.anchor_point(rect), Point::new(5.0, 2.0));
        assert_eq!(RectAnchor::Bottom.anchor_point(rect), Point::new(5.0, 4.0));
        assert_eq!(
            RectAnchor::Right.anchor_point(rect),
            Point::new(10.0, 2.0)
        );
    }
}
