// Copyright 2025 the Seristyle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Plot orientation, axis roles, and the value-axis collaborator contract.

use kurbo::Rect;

/// The orientation of a plot.
///
/// `Vertical` is the common arrangement: domain values run along the
/// horizontal screen axis and range values run vertically. `Horizontal`
/// swaps them (bar charts with horizontal bars, for example).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Domain runs vertically, range horizontally.
    Horizontal,
    /// Domain runs horizontally, range vertically.
    Vertical,
}

impl Orientation {
    /// The other orientation.
    pub fn flipped(self) -> Self {
        match self {
            Self::Horizontal => Self::Vertical,
            Self::Vertical => Self::Horizontal,
        }
    }
}

/// The side of the data area an axis is attached to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AxisEdge {
    /// Above the data area.
    Top,
    /// Below the data area.
    Bottom,
    /// Left of the data area.
    Left,
    /// Right of the data area.
    Right,
}

/// Which role an axis plays in the plot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AxisRole {
    /// The independent axis (categories or x values).
    Domain,
    /// The dependent axis (measured values).
    Range,
}

impl AxisRole {
    /// The data-area edge values project against for this role, given the
    /// plot orientation.
    pub fn default_edge(self, orientation: Orientation) -> AxisEdge {
        match (self, orientation) {
            (Self::Domain, Orientation::Vertical) => AxisEdge::Bottom,
            (Self::Domain, Orientation::Horizontal) => AxisEdge::Left,
            (Self::Range, Orientation::Vertical) => AxisEdge::Left,
            (Self::Range, Orientation::Horizontal) => AxisEdge::Bottom,
        }
    }

    /// The orientation marker geometry is laid out in for this role.
    ///
    /// Range-axis markers draw perpendicular to domain-axis markers, which
    /// is expressed as a flip of the plot orientation.
    pub fn draw_orientation(self, orientation: Orientation) -> Orientation {
        match self {
            Self::Domain => orientation,
            Self::Range => orientation.flipped(),
        }
    }
}

/// The value-to-pixel contract marker geometry depends on.
pub trait ValueAxis {
    /// The currently visible `(lo, hi)` value range.
    fn visible_range(&self) -> (f64, f64);

    /// Converts a data value to a pixel coordinate along the given edge of
    /// the data area.
    ///
    /// Values outside the visible range extrapolate; callers clip.
    fn value_to_pixel(&self, value: f64, data_area: Rect, edge: AxisEdge) -> f64;

    /// Returns `true` if `value` lies within the visible range.
    fn contains(&self, value: f64) -> bool {
        let (lo, hi) = self.visible_range();
        value >= lo && value <= hi
    }

    /// Returns `true` if the interval `[v0, v1]` intersects the visible
    /// range.
    fn intersects(&self, v0: f64, v1: f64) -> bool {
        let (lo, hi) = self.visible_range();
        if v0 <= lo {
            v1 > lo
        } else {
            v0 < hi && v1 >= v0
        }
    }
}

/// A linear value axis.
///
/// The screen-vertical direction inverts: larger values map to smaller y
/// pixel coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearAxis {
    lo: f64,
    hi: f64,
}

impl LinearAxis {
    /// An axis showing values from `lo` to `hi`.
    pub fn new(lo: f64, hi: f64) -> Self {
        Self { lo, hi }
    }
}

impl ValueAxis for LinearAxis {
    fn visible_range(&self) -> (f64, f64) {
        (self.lo, self.hi)
    }

    fn value_to_pixel(&self, value: f64, data_area: Rect, edge: AxisEdge) -> f64 {
        let frac = (value - self.lo) / (self.hi - self.lo);
        match edge {
            AxisEdge::Top | AxisEdge::Bottom => data_area.x0 + frac * data_area.width(),
            AxisEdge::Left | AxisEdge::Right => data_area.y1 - frac * data_area.height(),
        }
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn default_edges_follow_role_and_orientation() {
        assert_eq!(
            AxisRole::Domain.default_edge(Orientation::Vertical),
            AxisEdge::Bottom
        );
        assert_eq!(
            AxisRole::Domain.default_edge(Orientation::Horizontal),
            AxisEdge::Left
        );
        assert_eq!(
            AxisRole::Range.default_edge(Orientation::Vertical),
            AxisEdge::Left
        );
        assert_eq!(
            AxisRole::Range.default_edge(Orientation::Horizontal),
            AxisEdge::Bottom
        );
    }

    #[test]
    fn range_role_flips_draw_orientation() {
        assert_eq!(
            AxisRole::Range.draw_orientation(Orientation::Vertical),
            Orientation::Horizontal
        );
        assert_eq!(
            AxisRole::Domain.draw_orientation(Orientation::Vertical),
            Orientation::Vertical
        );
    }

    #[test]
    fn linear_axis_maps_values_along_both_edges() {
        let axis = LinearAxis::new(0.0, 10.0);
        let area = Rect::new(0.0, 0.0, 100.0, 40.0);
        assert_eq!(axis.value_to_pixel(5.0, area, AxisEdge::Bottom), 50.0);
        assert_eq!(axis.value_to_pixel(0.0, area, AxisEdge::Left), 40.0);
        assert_eq!(axis.value_to_pixel(10.0, area, AxisEdge::Left), 0.0);
    }

    #[test]
    fn intersects_uses_half_open_touching_rules() {
        let axis = LinearAxis::new(0.0, 10.0);
        assert!(axis.intersects(-5.0, 5.0));
        assert!(axis.intersects(5.0, 15.0));
        assert!(!axis.intersects(-5.0, -1.0));
        assert!(!axis.intersects(11.0, 20.0));
        // Touching only at the lower bound does not count.
        assert!(!axis.intersects(-5.0, 0.0));
    }

    #[test]
    fn contains_is_inclusive() {
        let axis = LinearAxis::new(0.0, 10.0);
        assert!(axis.contains(0.0));
        assert!(axis.contains(10.0));
        assert!(!axis.contains(10.1));
    }
}
