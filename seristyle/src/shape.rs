// Copyright 2025 the Seristyle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The shape attribute family: item shapes and legend shapes.

use core::fmt;

use kurbo::BezPath;

use crate::event::Notifier;
use crate::overrides::{SeriesOverrides, StyleTable};
use crate::palette::PaletteSupplier;
use crate::symbol::Symbol;

/// Shape attributes resolved per series.
///
/// Item shapes resolve through the usual override table. Legend shapes layer
/// on top of them: a per-series legend shape, then the (nullable) default
/// legend shape, then whatever the item shape lookup yields.
#[derive(Clone, Debug)]
pub struct ShapeStyle {
    shape: StyleTable<BezPath>,
    legend_shape: SeriesOverrides<BezPath>,
    default_legend_shape: Option<BezPath>,
    treat_legend_shape_as_line: bool,
}

impl Default for ShapeStyle {
    fn default() -> Self {
        Self::new()
    }
}

impl ShapeStyle {
    /// A 6x6 square item shape, no legend shapes.
    pub fn new() -> Self {
        Self {
            shape: StyleTable::new(Symbol::Square.path(0.0, 0.0, 6.0), true),
            legend_shape: SeriesOverrides::new(),
            default_legend_shape: None,
            treat_legend_shape_as_line: false,
        }
    }

    /// The raw shape override for a series.
    pub fn series_shape(&self, series: usize) -> Option<&BezPath> {
        self.shape.get(series)
    }

    /// The shape used when a series has no override and auto-population does
    /// not apply.
    pub fn default_shape(&self) -> &BezPath {
        self.shape.default_value()
    }

    /// Whether shape lookups auto-populate from a supplier.
    pub fn auto_populate_shape(&self) -> bool {
        self.shape.auto_populate()
    }

    /// The raw legend shape override for a series.
    pub fn legend_shape(&self, series: usize) -> Option<&BezPath> {
        self.legend_shape.get(series)
    }

    /// The family-wide default legend shape, if any. When unset, legend
    /// lookups fall through to the item shape.
    pub fn default_legend_shape(&self) -> Option<&BezPath> {
        self.default_legend_shape.as_ref()
    }

    /// Whether a legend builder should render the resolved legend shape as a
    /// line marker instead of a filled glyph.
    pub fn treat_legend_shape_as_line(&self) -> bool {
        self.treat_legend_shape_as_line
    }
}

/// Mutable view over [`ShapeStyle`]: setters fire change events, lookups may
/// cache-fill from the attached palette supplier.
pub struct ShapeStyleMut<'a> {
    pub(crate) style: &'a mut ShapeStyle,
    pub(crate) supplier: Option<&'a mut dyn PaletteSupplier>,
    pub(crate) notifier: Notifier<'a>,
}

impl ShapeStyleMut<'_> {
    /// The resolved shape for an item; items share their series shape.
    pub fn item_shape(&mut self, row: usize, _column: usize) -> BezPath {
        self.lookup_series_shape(row)
    }

    /// The resolved series shape: override, else a value auto-populated from
    /// the supplier, else the default.
    pub fn lookup_series_shape(&mut self, series: usize) -> BezPath {
        let supplier = self.supplier.as_deref_mut();
        self.style
            .shape
            .lookup_with(series, || supplier.map(|s| s.next_shape()))
    }

    /// Sets the shape override for a series.
    pub fn set_series_shape(&mut self, series: usize, shape: Option<BezPath>, notify: bool) {
        self.style.shape.set(series, shape);
        self.notifier.fire(notify);
    }

    /// Sets the default shape.
    pub fn set_default_shape(&mut self, shape: BezPath, notify: bool) {
        self.style.shape.set_default(shape);
        self.notifier.fire(notify);
    }

    /// Removes every per-series shape override.
    pub fn clear_series_shapes(&mut self, notify: bool) {
        self.style.shape.clear();
        self.notifier.fire(notify);
    }

    /// Sets whether shape lookups auto-populate. Does not notify.
    pub fn set_auto_populate_shape(&mut self, auto: bool) {
        self.style.shape.set_auto_populate(auto);
    }

    /// The resolved legend shape for a series: per-series legend shape, then
    /// the default legend shape, then the resolved item shape.
    pub fn lookup_legend_shape(&mut self, series: usize) -> BezPath {
        if let Some(shape) = self.style.legend_shape.get(series) {
            return shape.clone();
        }
        if let Some(shape) = &self.style.default_legend_shape {
            return shape.clone();
        }
        self.lookup_series_shape(series)
    }

    /// Sets the legend shape override for a series.
    pub fn set_legend_shape(&mut self, series: usize, shape: Option<BezPath>, notify: bool) {
        self.style.legend_shape.set(series, shape);
        self.notifier.fire(notify);
    }

    /// Removes every per-series legend shape override.
    pub fn clear_series_legend_shapes(&mut self, notify: bool) {
        self.style.legend_shape.clear();
        self.notifier.fire(notify);
    }

    /// Sets or clears the default legend shape.
    pub fn set_default_legend_shape(&mut self, shape: Option<BezPath>, notify: bool) {
        self.style.default_legend_shape = shape;
        self.notifier.fire(notify);
    }

    /// Sets the treat-as-line flag, firing only when the value actually
    /// changes.
    pub fn set_treat_legend_shape_as_line(&mut self, as_line: bool, notify: bool) {
        if self.style.treat_legend_shape_as_line != as_line {
            self.style.treat_legend_shape_as_line = as_line;
            self.notifier.fire(notify);
        }
    }
}

impl fmt::Debug for ShapeStyleMut<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ShapeStyleMut")
            .field("style", &self.style)
            .finish_non_exhaustive()
    }
}
