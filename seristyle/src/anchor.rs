// Copyright 2025 the Seristyle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Item label anchors and their pixel-space geometry.

use kurbo::Point;

use crate::axis::Orientation;
use crate::text::TextAlign;

/// cos(30 degrees), the long leg of a clock-face displacement.
const ADJ: f64 = 0.866_025_403_784_438_6;
/// sin(30 degrees), the short leg.
const OPP: f64 = 0.5;

/// The positions an item label can take relative to its data point.
///
/// The numbered variants follow a clock face: 12 is straight up, 3 straight
/// right, and so on in 30 degree steps. `Inside*` anchors sit at one
/// anchor-offset radius from the point, `Outside*` anchors at twice that
/// radius.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LabelAnchor {
    /// On the data point itself.
    Center,
    /// Inside ring, 1 o'clock.
    Inside1,
    /// Inside ring, 2 o'clock.
    Inside2,
    /// Inside ring, 3 o'clock.
    Inside3,
    /// Inside ring, 4 o'clock.
    Inside4,
    /// Inside ring, 5 o'clock.
    Inside5,
    /// Inside ring, 6 o'clock.
    Inside6,
    /// Inside ring, 7 o'clock.
    Inside7,
    /// Inside ring, 8 o'clock.
    Inside8,
    /// Inside ring, 9 o'clock.
    Inside9,
    /// Inside ring, 10 o'clock.
    Inside10,
    /// Inside ring, 11 o'clock.
    Inside11,
    /// Inside ring, 12 o'clock.
    Inside12,
    /// Outside ring, 1 o'clock.
    Outside1,
    /// Outside ring, 2 o'clock.
    Outside2,
    /// Outside ring, 3 o'clock.
    Outside3,
    /// Outside ring, 4 o'clock.
    Outside4,
    /// Outside ring, 5 o'clock.
    Outside5,
    /// Outside ring, 6 o'clock.
    Outside6,
    /// Outside ring, 7 o'clock.
    Outside7,
    /// Outside ring, 8 o'clock.
    Outside8,
    /// Outside ring, 9 o'clock.
    Outside9,
    /// Outside ring, 10 o'clock.
    Outside10,
    /// Outside ring, 11 o'clock.
    Outside11,
    /// Outside ring, 12 o'clock.
    Outside12,
}

impl LabelAnchor {
    /// The label anchor point for a data point rendered at `(x, y)`.
    ///
    /// `orientation` is part of the call contract for callers that pair the
    /// anchor point with orientation-dependent text alignment; the
    /// displacement itself is computed in already-oriented pixel space and
    /// does not vary with it.
    pub fn anchor_point(self, x: f64, y: f64, _orientation: Orientation, offset: f64) -> Point {
        let (dx, dy) = self.unit_displacement();
        Point::new(x + dx * offset, y + dy * offset)
    }

    fn unit_displacement(self) -> (f64, f64) {
        match self {
            Self::Center => (0.0, 0.0),
            Self::Inside1 => (OPP, -ADJ),
            Self::Inside2 => (ADJ, -OPP),
            Self::Inside3 => (1.0, 0.0),
            Self::Inside4 => (ADJ, OPP),
            Self::Inside5 => (OPP, ADJ),
            Self::Inside6 => (0.0, 1.0),
            Self::Inside7 => (-OPP, ADJ),
            Self::Inside8 => (-ADJ, OPP),
            Self::Inside9 => (-1.0, 0.0),
            Self::Inside10 => (-ADJ, -OPP),
            Self::Inside11 => (-OPP, -ADJ),
            Self::Inside12 => (0.0, -1.0),
            Self::Outside1 => (2.0 * OPP, -2.0 * ADJ),
            Self::Outside2 => (2.0 * ADJ, -2.0 * OPP),
            Self::Outside3 => (2.0, 0.0),
            Self::Outside4 => (2.0 * ADJ, 2.0 * OPP),
            Self::Outside5 => (2.0 * OPP, 2.0 * ADJ),
            Self::Outside6 => (0.0, 2.0),
            Self::Outside7 => (-2.0 * OPP, 2.0 * ADJ),
            Self::Outside8 => (-2.0 * ADJ, 2.0 * OPP),
            Self::Outside9 => (-2.0, 0.0),
            Self::Outside10 => (-2.0 * ADJ, -2.0 * OPP),
            Self::Outside11 => (-2.0 * OPP, -2.0 * ADJ),
            Self::Outside12 => (0.0, -2.0),
        }
    }
}

/// A complete item label placement: anchor position, text alignment, and
/// rotation.
#[derive(Clone, Debug, PartialEq)]
pub struct LabelPosition {
    anchor: LabelAnchor,
    text_align: TextAlign,
    rotation_align: TextAlign,
    angle: f64,
}

impl LabelPosition {
    /// An unrotated placement.
    pub fn new(anchor: LabelAnchor, text_align: TextAlign) -> Self {
        Self::with_rotation(anchor, text_align, TextAlign::Center, 0.0)
    }

    /// A placement rotated by `angle` radians around the rotation anchor.
    pub fn with_rotation(
        anchor: LabelAnchor,
        text_align: TextAlign,
        rotation_align: TextAlign,
        angle: f64,
    ) -> Self {
        Self {
            anchor,
            text_align,
            rotation_align,
            angle,
        }
    }

    /// Where the label anchors relative to the data point.
    pub fn anchor(&self) -> LabelAnchor {
        self.anchor
    }

    /// How the text aligns against the anchor point.
    pub fn text_align(&self) -> TextAlign {
        self.text_align
    }

    /// The point within the text the rotation pivots around.
    pub fn rotation_align(&self) -> TextAlign {
        self.rotation_align
    }

    /// Rotation angle in radians.
    pub fn angle(&self) -> f64 {
        self.angle
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    const OFFSET: f64 = 2.0;

    const INSIDE: [LabelAnchor; 12] = [
        LabelAnchor::Inside1,
        LabelAnchor::Inside2,
        LabelAnchor::Inside3,
        LabelAnchor::Inside4,
        LabelAnchor::Inside5,
        LabelAnchor::Inside6,
        LabelAnchor::Inside7,
        LabelAnchor::Inside8,
        LabelAnchor::Inside9,
        LabelAnchor::Inside10,
        LabelAnchor::Inside11,
        LabelAnchor::Inside12,
    ];

    const OUTSIDE: [LabelAnchor; 12] = [
        LabelAnchor::Outside1,
        LabelAnchor::Outside2,
        LabelAnchor::Outside3,
        LabelAnchor::Outside4,
        LabelAnchor::Outside5,
        LabelAnchor::Outside6,
        LabelAnchor::Outside7,
        LabelAnchor::Outside8,
        LabelAnchor::Outside9,
        LabelAnchor::Outside10,
        LabelAnchor::Outside11,
        LabelAnchor::Outside12,
    ];

    #[test]
    fn center_has_no_displacement() {
        let p = LabelAnchor::Center.anchor_point(10.0, 20.0, Orientation::Vertical, OFFSET);
        assert_eq!(p, Point::new(10.0, 20.0));
    }

    #[test]
    fn cardinal_positions_are_axis_aligned() {
        let at = |anchor: LabelAnchor| anchor.anchor_point(0.0, 0.0, Orientation::Vertical, OFFSET);
        assert_eq!(at(LabelAnchor::Inside3), Point::new(OFFSET, 0.0));
        assert_eq!(at(LabelAnchor::Inside9), Point::new(-OFFSET, 0.0));
        assert_eq!(at(LabelAnchor::Inside6), Point::new(0.0, OFFSET));
        assert_eq!(at(LabelAnchor::Inside12), Point::new(0.0, -OFFSET));
        assert_eq!(at(LabelAnchor::Outside3), Point::new(2.0 * OFFSET, 0.0));
        assert_eq!(at(LabelAnchor::Outside12), Point::new(0.0, -2.0 * OFFSET));
    }

    #[test]
    fn diagonal_positions_use_thirty_degree_legs() {
        let p = LabelAnchor::Inside1.anchor_point(0.0, 0.0, Orientation::Vertical, OFFSET);
        assert_eq!(p, Point::new(0.5 * OFFSET, -0.866_025_403_784_438_6 * OFFSET));
        let p = LabelAnchor::Inside8.anchor_point(0.0, 0.0, Orientation::Vertical, OFFSET);
        assert_eq!(p, Point::new(-0.866_025_403_784_438_6 * OFFSET, 0.5 * OFFSET));
    }

    #[test]
    fn outside_ring_doubles_inside_displacement() {
        for (inside, outside) in INSIDE.iter().zip(OUTSIDE.iter()) {
            let i = inside.anchor_point(0.0, 0.0, Orientation::Vertical, OFFSET);
            let o = outside.anchor_point(0.0, 0.0, Orientation::Vertical, OFFSET);
            assert_eq!(o.x, 2.0 * i.x, "{inside:?}/{outside:?} x");
            assert_eq!(o.y, 2.0 * i.y, "{inside:?}/{outside:?} y");
        }
    }

    #[test]
    fn every_ring_point_lies_on_its_radius() {
        for anchor in INSIDE {
            let p = anchor.anchor_point(0.0, 0.0, Orientation::Vertical, OFFSET);
            let r2 = p.x * p.x + p.y * p.y;
            assert!((r2 - OFFSET * OFFSET).abs() < 1e-12, "{anchor:?} radius");
        }
    }

    #[test]
    fn orientation_does_not_affect_displacement() {
        for anchor in INSIDE {
            let h = anchor.anchor_point(3.0, 4.0, Orientation::Horizontal, OFFSET);
            let v = anchor.anchor_point(3.0, 4.0, Orientation::Vertical, OFFSET);
            assert_eq!(h, v);
        }
    }
}
