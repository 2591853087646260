// Copyright 2025 the Seristyle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Value and interval markers and their pixel-space geometry.

use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use kurbo::{Line, Point, Rect, Stroke};
use peniko::color::palette::css;
use peniko::{Brush, Color};

use crate::axis::{AxisRole, Orientation, ValueAxis};
use crate::geom::{LengthAdjust, RectAnchor, RectInsets};
use crate::ops::RenderOp;
use crate::text::{TextAlign, TextStyle};

/// Re-fits a gradient brush to the rectangle it is about to fill.
///
/// Gradients are authored in an abstract unit space; an interval marker calls
/// the transformer with its clipped pixel rectangle so the gradient spans
/// exactly the filled area. Solid brushes never reach the transformer.
pub trait GradientTransformer: fmt::Debug {
    /// Returns `brush` re-fitted to `target`.
    fn transform(&self, brush: &Brush, target: Rect) -> Brush;
}

/// The text label attached to a marker.
#[derive(Clone, Debug)]
pub struct MarkerLabel {
    /// The label text.
    pub text: String,
    /// The label font.
    pub font: TextStyle,
    /// The text fill brush.
    pub fill: Brush,
    /// Background fill behind the text.
    pub background: Brush,
    /// Where on the marker geometry the label anchors.
    pub anchor: RectAnchor,
    /// How the text aligns against the anchor point.
    pub align: TextAlign,
    /// Insets applied to the marker geometry before anchoring.
    pub offset: RectInsets,
    /// How the insets adjust the geometry along the marker's own axis; the
    /// perpendicular axis always contracts.
    pub offset_type: LengthAdjust,
}

impl MarkerLabel {
    /// A label with the customary defaults: 9px sans-serif black text on a
    /// translucent gray background, anchored at the top-left of the marker
    /// with contracting 3px insets.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            font: TextStyle::new(9.0),
            fill: css::BLACK.into(),
            background: Brush::Solid(Color::from_rgba8(100, 100, 100, 100)),
            anchor: RectAnchor::TopLeft,
            align: TextAlign::Center,
            offset: RectInsets::uniform(3.0),
            offset_type: LengthAdjust::Contract,
        }
    }
}

/// A marker highlighting a single value on an axis.
#[derive(Clone, Debug)]
pub struct ValueMarker {
    /// The marked value, in data space.
    pub value: f64,
    /// The line brush.
    pub paint: Brush,
    /// The line stroke.
    pub stroke: Stroke,
    /// Composite alpha, `0.0..=1.0`.
    pub alpha: f32,
    /// Optional text label.
    pub label: Option<MarkerLabel>,
}

impl ValueMarker {
    /// A thin gray marker at `value`.
    pub fn new(value: f64) -> Self {
        Self {
            value,
            paint: css::GRAY.into(),
            stroke: Stroke::new(0.5),
            alpha: 0.8,
            label: None,
        }
    }

    /// Builder-style paint override.
    pub fn with_paint(mut self, paint: Brush) -> Self {
        self.paint = paint;
        self
    }

    /// Builder-style stroke override.
    pub fn with_stroke(mut self, stroke: Stroke) -> Self {
        self.stroke = stroke;
        self
    }

    /// Builder-style alpha override.
    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.alpha = alpha;
        self
    }

    /// Builder-style label.
    pub fn with_label(mut self, label: MarkerLabel) -> Self {
        self.label = Some(label);
        self
    }

    /// Generates the draw ops for this marker against `axis`.
    ///
    /// A value outside the axis's visible range produces no ops. Otherwise
    /// the marker is a line spanning the data area, perpendicular to the
    /// axis the marker belongs to.
    pub fn ops(
        &self,
        axis: &dyn ValueAxis,
        data_area: Rect,
        orientation: Orientation,
        role: AxisRole,
    ) -> Vec<RenderOp> {
        let mut out = Vec::new();
        if !axis.contains(self.value) {
            return out;
        }
        let pixel = axis.value_to_pixel(self.value, data_area, role.default_edge(orientation));
        let draw = role.draw_orientation(orientation);
        let line = match draw {
            Orientation::Horizontal => {
                Line::new((data_area.x0, pixel), (data_area.x1, pixel))
            }
            Orientation::Vertical => Line::new((pixel, data_area.y0), (pixel, data_area.y1)),
        };
        out.push(RenderOp::StrokeLine {
            line,
            brush: self.paint.clone(),
            stroke: self.stroke.clone(),
            alpha: self.alpha,
        });
        if let Some(label) = &self.label {
            let bounds = Rect::from_points(line.p0, line.p1);
            // A line has no thickness to contract into, so the marker's own
            // axis expands instead of honoring the label's offset type.
            let pos =
                domain_label_anchor_point(draw, bounds, &label.offset, LengthAdjust::Expand, label.anchor);
            out.push(label_op(label, pos, self.alpha));
        }
        out
    }
}

/// A marker highlighting an interval of values on an axis.
#[derive(Debug)]
pub struct IntervalMarker {
    /// The interval start, in data space.
    pub start: f64,
    /// The interval end, in data space.
    pub end: f64,
    /// The band fill brush.
    pub paint: Brush,
    /// Composite alpha, `0.0..=1.0`.
    pub alpha: f32,
    /// Optional outline drawn along the interval endpoints.
    pub outline: Option<(Brush, Stroke)>,
    /// Optional gradient re-fit hook, consulted when `paint` is a gradient.
    pub gradient_transformer: Option<Box<dyn GradientTransformer>>,
    /// Optional text label.
    pub label: Option<MarkerLabel>,
}

impl IntervalMarker {
    /// A translucent gray band from `start` to `end`.
    pub fn new(start: f64, end: f64) -> Self {
        Self {
            start,
            end,
            paint: css::GRAY.into(),
            alpha: 0.8,
            outline: None,
            gradient_transformer: None,
            label: None,
        }
    }

    /// Builder-style paint override.
    pub fn with_paint(mut self, paint: Brush) -> Self {
        self.paint = paint;
        self
    }

    /// Builder-style alpha override.
    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.alpha = alpha;
        self
    }

    /// Builder-style outline.
    pub fn with_outline(mut self, brush: Brush, stroke: Stroke) -> Self {
        self.outline = Some((brush, stroke));
        self
    }

    /// Builder-style gradient re-fit hook.
    pub fn with_gradient_transformer(mut self, transformer: Box<dyn GradientTransformer>) -> Self {
        self.gradient_transformer = Some(transformer);
        self
    }

    /// Builder-style label.
    pub fn with_label(mut self, label: MarkerLabel) -> Self {
        self.label = Some(label);
        self
    }

    /// Generates the draw ops for this marker against `axis`.
    ///
    /// An interval that does not intersect the visible range produces no
    /// ops. The filled band is clipped to the data area; outline lines are
    /// only emitted for endpoints that are themselves inside the visible
    /// range, so a clipped edge is never outlined.
    pub fn ops(
        &self,
        axis: &dyn ValueAxis,
        data_area: Rect,
        orientation: Orientation,
        role: AxisRole,
    ) -> Vec<RenderOp> {
        let mut out = Vec::new();
        if !axis.intersects(self.start, self.end) {
            return out;
        }
        let edge = role.default_edge(orientation);
        let start_px = axis.value_to_pixel(self.start, data_area, edge);
        let end_px = axis.value_to_pixel(self.end, data_area, edge);
        let low = start_px.min(end_px);
        let high = start_px.max(end_px);
        let draw = role.draw_orientation(orientation);
        let rect = match draw {
            Orientation::Horizontal => Rect::new(
                data_area.x0,
                low.max(data_area.y0),
                data_area.x1,
                high.min(data_area.y1),
            ),
            Orientation::Vertical => Rect::new(
                low.max(data_area.x0),
                data_area.y0,
                high.min(data_area.x1),
                data_area.y1,
            ),
        };
        let brush = match (&self.paint, &self.gradient_transformer) {
            (Brush::Gradient(_), Some(transformer)) => transformer.transform(&self.paint, rect),
            _ => self.paint.clone(),
        };
        out.push(RenderOp::FillRect {
            rect,
            brush,
            alpha: self.alpha,
        });

        if let Some((brush, stroke)) = &self.outline {
            let endpoints = match draw {
                Orientation::Horizontal => [
                    (
                        self.start,
                        Line::new((data_area.x0, start_px), (data_area.x1, start_px)),
                    ),
                    (
                        self.end,
                        Line::new((data_area.x0, end_px), (data_area.x1, end_px)),
                    ),
                ],
                Orientation::Vertical => [
                    (
                        self.start,
                        Line::new((start_px, data_area.y0), (start_px, data_area.y1)),
                    ),
                    (
                        self.end,
                        Line::new((end_px, data_area.y0), (end_px, data_area.y1)),
                    ),
                ],
            };
            for (value, line) in endpoints {
                if axis.contains(value) {
                    out.push(RenderOp::StrokeLine {
                        line,
                        brush: brush.clone(),
                        stroke: stroke.clone(),
                        alpha: self.alpha,
                    });
                }
            }
        }

        if let Some(label) = &self.label {
            let pos = match role {
                AxisRole::Domain => {
                    domain_label_anchor_point(draw, rect, &label.offset, label.offset_type, label.anchor)
                }
                AxisRole::Range => {
                    range_label_anchor_point(draw, rect, &label.offset, label.offset_type, label.anchor)
                }
            };
            out.push(label_op(label, pos, self.alpha));
        }
        out
    }
}

/// A marker of either kind.
#[derive(Debug)]
pub enum Marker {
    /// A single-value marker.
    Value(ValueMarker),
    /// An interval marker.
    Interval(IntervalMarker),
}

impl Marker {
    /// Generates the draw ops for this marker against `axis`.
    pub fn ops(
        &self,
        axis: &dyn ValueAxis,
        data_area: Rect,
        orientation: Orientation,
        role: AxisRole,
    ) -> Vec<RenderOp> {
        match self {
            Self::Value(marker) => marker.ops(axis, data_area, orientation, role),
            Self::Interval(marker) => marker.ops(axis, data_area, orientation, role),
        }
    }
}

/// Anchor point for a domain-role marker label.
///
/// The marker's own axis follows `offset_type`; the perpendicular axis
/// always contracts so the label clears the data-area border.
fn domain_label_anchor_point(
    orientation: Orientation,
    marker_area: Rect,
    offset: &RectInsets,
    offset_type: LengthAdjust,
    anchor: RectAnchor,
) -> Point {
    let rect = match orientation {
        Orientation::Horizontal => {
            offset.adjusted_rect(marker_area, LengthAdjust::Contract, offset_type)
        }
        Orientation::Vertical => {
            offset.adjusted_rect(marker_area, offset_type, LengthAdjust::Contract)
        }
    };
    anchor.anchor_point(rect)
}

/// Anchor point for a range-role marker label. Mirror image of the domain
/// rule.
fn range_label_anchor_point(
    orientation: Orientation,
    marker_area: Rect,
    offset: &RectInsets,
    offset_type: LengthAdjust,
    anchor: RectAnchor,
) -> Point {
    let rect = match orientation {
        Orientation::Horizontal => {
            offset.adjusted_rect(marker_area, offset_type, LengthAdjust::Contract)
        }
        Orientation::Vertical => {
            offset.adjusted_rect(marker_area, LengthAdjust::Contract, offset_type)
        }
    };
    anchor.anchor_point(rect)
}

fn label_op(label: &MarkerLabel, pos: Point, alpha: f32) -> RenderOp {
    RenderOp::DrawLabel {
        text: label.text.clone(),
        pos,
        font: label.font.clone(),
        fill: label.fill.clone(),
        background: Some(label.background.clone()),
        align: label.align,
        rotation_align: TextAlign::Center,
        angle: 0.0,
        alpha,
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;
    use crate::axis::LinearAxis;

    const AREA: Rect = Rect {
        x0: 0.0,
        y0: 0.0,
        x1: 100.0,
        y1: 40.0,
    };

    fn axis() -> LinearAxis {
        LinearAxis::new(0.0, 10.0)
    }

    #[test]
    fn out_of_range_value_marker_is_skipped() {
        let marker = ValueMarker::new(15.0);
        let ops = marker.ops(&axis(), AREA, Orientation::Vertical, AxisRole::Domain);
        assert!(ops.is_empty(), "value outside the axis range draws nothing");
    }

    #[test]
    fn domain_value_marker_spans_the_data_area_vertically() {
        let marker = ValueMarker::new(5.0);
        let ops = marker.ops(&axis(), AREA, Orientation::Vertical, AxisRole::Domain);
        assert_eq!(ops.len(), 1);
        match &ops[0] {
            RenderOp::StrokeLine { line, alpha, .. } => {
                assert_eq!(line.p0, Point::new(50.0, 0.0));
                assert_eq!(line.p1, Point::new(50.0, 40.0));
                assert_eq!(*alpha, 0.8);
            }
            other => panic!("expected a line, got {other:?}"),
        }
    }

    #[test]
    fn range_value_marker_draws_perpendicular() {
        let marker = ValueMarker::new(5.0);
        let ops = marker.ops(&axis(), AREA, Orientation::Vertical, AxisRole::Range);
        match &ops[0] {
            RenderOp::StrokeLine { line, .. } => {
                // Range values project against the left edge, inverted.
                assert_eq!(line.p0, Point::new(0.0, 20.0));
                assert_eq!(line.p1, Point::new(100.0, 20.0));
            }
            other => panic!("expected a line, got {other:?}"),
        }
    }

    #[test]
    fn interval_marker_clips_to_the_data_area_and_outlines_only_inside_edges() {
        let marker = IntervalMarker::new(-5.0, 5.0)
            .with_outline(css::BLACK.into(), Stroke::new(1.0));
        let ops = marker.ops(&axis(), AREA, Orientation::Vertical, AxisRole::Domain);
        assert_eq!(ops.len(), 2, "band plus one outline line");
        match &ops[0] {
            RenderOp::FillRect { rect, .. } => {
                assert_eq!(*rect, Rect::new(0.0, 0.0, 50.0, 40.0));
            }
            other => panic!("expected a band, got {other:?}"),
        }
        match &ops[1] {
            RenderOp::StrokeLine { line, .. } => {
                // Only the in-range endpoint (5.0 at x=50) is outlined.
                assert_eq!(line.p0, Point::new(50.0, 0.0));
                assert_eq!(line.p1, Point::new(50.0, 40.0));
            }
            other => panic!("expected a line, got {other:?}"),
        }
    }

    #[test]
    fn non_intersecting_interval_is_skipped() {
        let marker = IntervalMarker::new(11.0, 20.0);
        let ops = marker.ops(&axis(), AREA, Orientation::Vertical, AxisRole::Domain);
        assert!(ops.is_empty(), "disjoint interval draws nothing");
    }

    #[test]
    fn value_marker_label_expands_along_the_line() {
        let mut label = MarkerLabel::new("threshold");
        label.anchor = RectAnchor::TopRight;
        let marker = ValueMarker::new(5.0).with_label(label);
        let ops = marker.ops(&axis(), AREA, Orientation::Vertical, AxisRole::Domain);
        assert_eq!(ops.len(), 2);
        match &ops[1] {
            RenderOp::DrawLabel { pos, text, .. } => {
                assert_eq!(text, "threshold");
                // Line bounds are the degenerate rect x=50, y in 0..40.
                // Horizontal axis expands by 3, vertical contracts by 3.
                assert_eq!(*pos, Point::new(53.0, 3.0));
            }
            other => panic!("expected a label, got {other:?}"),
        }
    }

    #[test]
    fn interval_label_honors_the_offset_type() {
        let mut label = MarkerLabel::new("band");
        label.anchor = RectAnchor::TopLeft;
        let marker = IntervalMarker::new(2.0, 8.0).with_label(label);
        let ops = marker.ops(&axis(), AREA, Orientation::Vertical, AxisRole::Domain);
        match ops.last() {
            Some(RenderOp::DrawLabel { pos, .. }) => {
                // Band is x in 20..80; both axes contract by the 3px insets.
                assert_eq!(*pos, Point::new(23.0, 3.0));
            }
            other => panic!("expected a label, got {other:?}"),
        }
    }

    #[test]
    fn range_interval_label_uses_the_mirrored_rule() {
        let mut label = MarkerLabel::new("band");
        label.anchor = RectAnchor::TopLeft;
        label.offset_type = LengthAdjust::Expand;
        let marker = IntervalMarker::new(2.0, 8.0).with_label(label);
        let ops = marker.ops(&axis(), AREA, Orientation::Vertical, AxisRole::Range);
        match ops.last() {
            Some(RenderOp::DrawLabel { pos, .. }) => {
                // Range band on a vertical plot is y in 8..32 (inverted
                // axis). The band's own axis expands, the other contracts.
                assert_eq!(*pos, Point::new(-3.0, 11.0));
            }
            other => panic!("expected a label, got {other:?}"),
        }
    }

    #[derive(Debug)]
    struct SolidOverride;

    impl GradientTransformer for SolidOverride {
        fn transform(&self, _brush: &Brush, _target: Rect) -> Brush {
            css::RED.into()
        }
    }

    #[test]
    fn gradient_transformer_only_sees_gradient_fills() {
        use peniko::Gradient;

        let solid = IntervalMarker::new(2.0, 8.0)
            .with_gradient_transformer(Box::new(SolidOverride));
        let ops = solid.ops(&axis(), AREA, Orientation::Vertical, AxisRole::Domain);
        match &ops[0] {
            RenderOp::FillRect { brush: Brush::Solid(color), .. } => {
                assert_eq!(*color, css::GRAY);
            }
            other => panic!("expected the untransformed solid fill, got {other:?}"),
        }

        let gradient = IntervalMarker::new(2.0, 8.0)
            .with_paint(Brush::Gradient(Gradient::new_linear(
                (0.0, 0.0),
                (1.0, 0.0),
            )))
            .with_gradient_transformer(Box::new(SolidOverride));
        let ops = gradient.ops(&axis(), AREA, Orientation::Vertical, AxisRole::Domain);
        match &ops[0] {
            RenderOp::FillRect { brush: Brush::Solid(color), .. } => {
                assert_eq!(*color, css::RED);
            }
            other => panic!("expected the transformed fill, got {other:?}"),
        }
    }
}
