// Copyright 2025 the Seristyle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The paint attribute family: series paint, fill paint, and outline paint.

use core::fmt;

use peniko::Brush;
use peniko::color::palette::css;

use crate::event::Notifier;
use crate::overrides::StyleTable;
use crate::palette::PaletteSupplier;

/// Paint attributes resolved per series.
///
/// Three tables: the primary paint (auto-populated by default), the fill
/// paint, and the outline paint (both resolved from their defaults unless
/// overridden or explicitly switched to auto-population).
#[derive(Clone, Debug)]
pub struct PaintStyle {
    paint: StyleTable<Brush>,
    fill: StyleTable<Brush>,
    outline: StyleTable<Brush>,
}

impl Default for PaintStyle {
    fn default() -> Self {
        Self::new()
    }
}

impl PaintStyle {
    /// Blue paint, white fill, gray outline.
    pub fn new() -> Self {
        Self {
            paint: StyleTable::new(css::BLUE.into(), true),
            fill: StyleTable::new(css::WHITE.into(), false),
            outline: StyleTable::new(css::GRAY.into(), false),
        }
    }

    /// The raw paint override for a series.
    pub fn series_paint(&self, series: usize) -> Option<&Brush> {
        self.paint.get(series)
    }

    /// The paint used when a series has no override and auto-population does
    /// not apply.
    pub fn default_paint(&self) -> &Brush {
        self.paint.default_value()
    }

    /// Whether paint lookups auto-populate from a supplier.
    pub fn auto_populate_paint(&self) -> bool {
        self.paint.auto_populate()
    }

    /// The raw fill paint override for a series.
    pub fn series_fill_paint(&self, series: usize) -> Option<&Brush> {
        self.fill.get(series)
    }

    /// The default fill paint.
    pub fn default_fill_paint(&self) -> &Brush {
        self.fill.default_value()
    }

    /// Whether fill paint lookups auto-populate from a supplier.
    pub fn auto_populate_fill_paint(&self) -> bool {
        self.fill.auto_populate()
    }

    /// The raw outline paint override for a series.
    pub fn series_outline_paint(&self, series: usize) -> Option<&Brush> {
        self.outline.get(series)
    }

    /// The default outline paint.
    pub fn default_outline_paint(&self) -> &Brush {
        self.outline.default_value()
    }

    /// Whether outline paint lookups auto-populate from a supplier.
    pub fn auto_populate_outline_paint(&self) -> bool {
        self.outline.auto_populate()
    }
}

/// Mutable view over [`PaintStyle`]: setters fire change events, lookups may
/// cache-fill from the attached palette supplier.
pub struct PaintStyleMut<'a> {
    pub(crate) style: &'a mut PaintStyle,
    pub(crate) supplier: Option<&'a mut dyn PaletteSupplier>,
    pub(crate) notifier: Notifier<'a>,
}

impl PaintStyleMut<'_> {
    /// The resolved paint for an item; items share their series paint.
    pub fn item_paint(&mut self, row: usize, _column: usize) -> Brush {
        self.lookup_series_paint(row)
    }

    /// The resolved series paint: override, else a value auto-populated from
    /// the supplier, else the default.
    ///
    /// Auto-population caches into the override table without notifying.
    pub fn lookup_series_paint(&mut self, series: usize) -> Brush {
        let supplier = self.supplier.as_deref_mut();
        self.style
            .paint
            .lookup_with(series, || supplier.map(|s| s.next_color().into()))
    }

    /// Sets the paint override for a series.
    pub fn set_series_paint(&mut self, series: usize, paint: Option<Brush>, notify: bool) {
        self.style.paint.set(series, paint);
        self.notifier.fire(notify);
    }

    /// Sets the default paint.
    pub fn set_default_paint(&mut self, paint: Brush, notify: bool) {
        self.style.paint.set_default(paint);
        self.notifier.fire(notify);
    }

    /// Removes every per-series paint override.
    pub fn clear_series_paints(&mut self, notify: bool) {
        self.style.paint.clear();
        self.notifier.fire(notify);
    }

    /// Sets whether paint lookups auto-populate. Does not notify.
    pub fn set_auto_populate_paint(&mut self, auto: bool) {
        self.style.paint.set_auto_populate(auto);
    }

    /// The resolved fill paint for an item.
    pub fn item_fill_paint(&mut self, row: usize, _column: usize) -> Brush {
        self.lookup_series_fill_paint(row)
    }

    /// The resolved series fill paint.
    pub fn lookup_series_fill_paint(&mut self, series: usize) -> Brush {
        let supplier = self.supplier.as_deref_mut();
        self.style
            .fill
            .lookup_with(series, || supplier.map(|s| s.next_fill_color().into()))
    }

    /// Sets the fill paint override for a series.
    pub fn set_series_fill_paint(&mut self, series: usize, paint: Option<Brush>, notify: bool) {
        self.style.fill.set(series, paint);
        self.notifier.fire(notify);
    }

    /// Sets the default fill paint.
    pub fn set_default_fill_paint(&mut self, paint: Brush, notify: bool) {
        self.style.fill.set_default(paint);
        self.notifier.fire(notify);
    }

    /// Removes every per-series fill paint override.
    pub fn clear_series_fill_paints(&mut self, notify: bool) {
        self.style.fill.clear();
        self.notifier.fire(notify);
    }

    /// Sets whether fill paint lookups auto-populate. Does not notify.
    pub fn set_auto_populate_fill_paint(&mut self, auto: bool) {
        self.style.fill.set_auto_populate(auto);
    }

    /// The resolved outline paint for an item.
    pub fn item_outline_paint(&mut self, row: usize, _column: usize) -> Brush {
        self.lookup_series_outline_paint(row)
    }

    /// The resolved series outline paint.
    pub fn lookup_series_outline_paint(&mut self, series: usize) -> Brush {
        let supplier = self.supplier.as_deref_mut();
        self.style
            .outline
            .lookup_with(series, || supplier.map(|s| s.next_outline_color().into()))
    }

    /// Sets the outline paint override for a series.
    pub fn set_series_outline_paint(&mut self, series: usize, paint: Option<Brush>, notify: bool) {
        self.style.outline.set(series, paint);
        self.notifier.fire(notify);
    }

    /// Sets the default outline paint.
    pub fn set_default_outline_paint(&mut self, paint: Brush, notify: bool) {
        self.style.outline.set_default(paint);
        self.notifier.fire(notify);
    }

    /// Removes every per-series outline paint override.
    pub fn clear_series_outline_paints(&mut self, notify: bool) {
        self.style.outline.clear();
        self.notifier.fire(notify);
    }

    /// Sets whether outline paint lookups auto-populate. Does not notify.
    pub fn set_auto_populate_outline_paint(&mut self, auto: bool) {
        self.style.outline.set_auto_populate(auto);
    }
}

impl fmt::Debug for PaintStyleMut<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PaintStyleMut")
            .field("style", &self.style)
            .finish_non_exhaustive()
    }
}
