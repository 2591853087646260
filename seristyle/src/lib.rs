// Copyright 2025 the Seristyle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-series style resolution and marker geometry for 2D charts.
//!
//! This crate is the attribute layer a chart renderer sits on:
//! - **Attribute families** (paint, stroke, shape, item labels, visibility)
//!   resolve per-item values through a three-tier model: a per-series
//!   override wins, then a value lazily drawn from a [`PaletteSupplier`] and
//!   cached per series, then a mandatory family default.
//! - **Change notification**: every mutating call fires exactly one event to
//!   registered listeners, delivered synchronously and last registered
//!   first. Lookups never notify, even when they cache-fill.
//! - **Geometry**: item label anchor points on a clock face around a data
//!   point, and value/interval marker geometry clipped against an axis's
//!   visible range.
//!
//! Drawing, datasets, and axis implementations stay outside. Geometry
//! routines emit [`RenderOp`]s for an external drawing surface, and
//! value-to-pixel conversion goes through the [`ValueAxis`] contract.

#![no_std]

extern crate alloc;

mod anchor;
mod axis;
mod event;
mod geom;
mod label;
mod marker;
mod ops;
mod overrides;
mod paint;
mod palette;
mod renderer;
mod shape;
mod stroke;
mod symbol;
mod text;
mod visibility;

pub use anchor::{LabelAnchor, LabelPosition};
pub use axis::{AxisEdge, AxisRole, LinearAxis, Orientation, ValueAxis};
pub use event::{ListenerId, RenderChangeEvent, RendererId};
pub use geom::{LengthAdjust, RectAnchor, RectInsets};
pub use label::{LabelStyle, LabelStyleMut};
pub use marker::{GradientTransformer, IntervalMarker, Marker, MarkerLabel, ValueMarker};
pub use ops::RenderOp;
pub use overrides::{SeriesOverrides, StyleTable};
pub use paint::{PaintStyle, PaintStyleMut};
pub use palette::{PaletteSupplier, StandardPalette};
pub use renderer::{ItemStyle, ItemStyleView, Renderer};
pub use shape::{ShapeStyle, ShapeStyleMut};
pub use stroke::{StrokeStyle, StrokeStyleMut};
pub use symbol::Symbol;
pub use text::{FontFamily, TextAlign, TextStyle};
pub use visibility::{VisibilityStyle, VisibilityStyleMut};
