// Copyright 2025 the Seristyle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Resolved drawing operations handed to an external drawing surface.

use alloc::string::String;

use kurbo::{Line, Point, Rect, Stroke};
use peniko::Brush;

use crate::text::{TextAlign, TextStyle};

/// A single resolved drawing operation.
///
/// This crate never touches pixels. Geometry routines emit these ops with
/// every attribute already resolved, and the drawing surface interprets them
/// in order.
#[derive(Clone, Debug)]
pub enum RenderOp {
    /// Fill a rectangle.
    FillRect {
        /// The rectangle, in pixel space.
        rect: Rect,
        /// The fill brush.
        brush: Brush,
        /// Composite alpha, `0.0..=1.0`.
        alpha: f32,
    },
    /// Stroke a line.
    StrokeLine {
        /// The line, in pixel space.
        line: Line,
        /// The stroke brush.
        brush: Brush,
        /// The stroke style.
        stroke: Stroke,
        /// Composite alpha, `0.0..=1.0`.
        alpha: f32,
    },
    /// Draw an aligned, optionally rotated text label.
    DrawLabel {
        /// The label text.
        text: String,
        /// The anchor point, in pixel space.
        pos: Point,
        /// The text style.
        font: TextStyle,
        /// The text fill brush.
        fill: Brush,
        /// Optional background fill behind the measured text bounds.
        background: Option<Brush>,
        /// How the text aligns against `pos`.
        align: TextAlign,
        /// The point within the text the rotation pivots around.
        rotation_align: TextAlign,
        /// Rotation angle in radians.
        angle: f64,
        /// Composite alpha, `0.0..=1.0`.
        alpha: f32,
    },
}
