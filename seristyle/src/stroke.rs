// Copyright 2025 the Seristyle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The stroke attribute family: series strokes and outline strokes.

use core::fmt;

use kurbo::Stroke;

use crate::event::Notifier;
use crate::overrides::StyleTable;
use crate::palette::PaletteSupplier;

/// Stroke attributes resolved per series.
#[derive(Clone, Debug)]
pub struct StrokeStyle {
    stroke: StyleTable<Stroke>,
    outline: StyleTable<Stroke>,
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self::new()
    }
}

impl StrokeStyle {
    /// Hairline strokes of width 1 for both tables; only the primary table
    /// auto-populates.
    pub fn new() -> Self {
        Self {
            stroke: StyleTable::new(Stroke::new(1.0), true),
            outline: StyleTable::new(Stroke::new(1.0), false),
        }
    }

    /// The raw stroke override for a series.
    pub fn series_stroke(&self, series: usize) -> Option<&Stroke> {
        self.stroke.get(series)
    }

    /// The stroke used when a series has no override and auto-population does
    /// not apply.
    pub fn default_stroke(&self) -> &Stroke {
        self.stroke.default_value()
    }

    /// Whether stroke lookups auto-populate from a supplier.
    pub fn auto_populate_stroke(&self) -> bool {
        self.stroke.auto_populate()
    }

    /// The raw outline stroke override for a series.
    pub fn series_outline_stroke(&self, series: usize) -> Option<&Stroke> {
        self.outline.get(series)
    }

    /// The default outline stroke.
    pub fn default_outline_stroke(&self) -> &Stroke {
        self.outline.default_value()
    }

    /// Whether outline stroke lookups auto-populate from a supplier.
    pub fn auto_populate_outline_stroke(&self) -> bool {
        self.outline.auto_populate()
    }
}

/// Mutable view over [`StrokeStyle`]: setters fire change events, lookups may
/// cache-fill from the attached palette supplier.
pub struct StrokeStyleMut<'a> {
    pub(crate) style: &'a mut StrokeStyle,
    pub(crate) supplier: Option<&'a mut dyn PaletteSupplier>,
    pub(crate) notifier: Notifier<'a>,
}

impl StrokeStyleMut<'_> {
    /// The resolved stroke for an item; items share their series stroke.
    pub fn item_stroke(&mut self, row: usize, _column: usize) -> Stroke {
        self.lookup_series_stroke(row)
    }

    /// The resolved series stroke: override, else a value auto-populated from
    /// the supplier, else the default.
    pub fn lookup_series_stroke(&mut self, series: usize) -> Stroke {
        let supplier = self.supplier.as_deref_mut();
        self.style
            .stroke
            .lookup_with(series, || supplier.map(|s| s.next_stroke()))
    }

    /// Sets the stroke override for a series.
    pub fn set_series_stroke(&mut self, series: usize, stroke: Option<Stroke>, notify: bool) {
        self.style.stroke.set(series, stroke);
        self.notifier.fire(notify);
    }

    /// Sets the default stroke.
    pub fn set_default_stroke(&mut self, stroke: Stroke, notify: bool) {
        self.style.stroke.set_default(stroke);
        self.notifier.fire(notify);
    }

    /// Removes every per-series stroke override.
    pub fn clear_series_strokes(&mut self, notify: bool) {
        self.style.stroke.clear();
        self.notifier.fire(notify);
    }

    /// Sets whether stroke lookups auto-populate. Does not notify.
    pub fn set_auto_populate_stroke(&mut self, auto: bool) {
        self.style.stroke.set_auto_populate(auto);
    }

    /// The resolved outline stroke for an item.
    pub fn item_outline_stroke(&mut self, row: usize, _column: usize) -> Stroke {
        self.lookup_series_outline_stroke(row)
    }

    /// The resolved series outline stroke.
    pub fn lookup_series_outline_stroke(&mut self, series: usize) -> Stroke {
        let supplier = self.supplier.as_deref_mut();
        self.style
            .outline
            .lookup_with(series, || supplier.map(|s| s.next_outline_stroke()))
    }

    /// Sets the outline stroke override for a series.
    pub fn set_series_outline_stroke(
        &mut self,
        series: usize,
        stroke: Option<Stroke>,
        notify: bool,
    ) {
        self.style.outline.set(series, stroke);
        self.notifier.fire(notify);
    }

    /// Sets the default outline stroke.
    pub fn set_default_outline_stroke(&mut self, stroke: Stroke, notify: bool) {
        self.style.outline.set_default(stroke);
        self.notifier.fire(notify);
    }

    /// Removes every per-series outline stroke override.
    pub fn clear_series_outline_strokes(&mut self, notify: bool) {
        self.style.outline.clear();
        self.notifier.fire(notify);
    }

    /// Sets whether outline stroke lookups auto-populate. Does not notify.
    pub fn set_auto_populate_outline_stroke(&mut self, auto: bool) {
        self.style.outline.set_auto_populate(auto);
    }
}

impl fmt::Debug for StrokeStyleMut<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StrokeStyleMut")
            .field("style", &self.style)
            .finish_non_exhaustive()
    }
}
