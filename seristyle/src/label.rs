// Copyright 2025 the Seristyle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The item label attribute family: fonts, paints, label positions, and
//! legend text styling.

use core::fmt;

use peniko::Brush;
use peniko::color::palette::css;

use crate::anchor::{LabelAnchor, LabelPosition};
use crate::event::Notifier;
use crate::overrides::{SeriesOverrides, StyleTable};
use crate::text::{TextAlign, TextStyle};

/// Item label attributes resolved per series.
///
/// None of the label tables auto-populate; lookups are pure and live on this
/// type directly. Positive and negative values carry separate positions so
/// that bars below the axis can label outward in the other direction.
///
/// Legend text styling rides along here: unlike the item tables it has no
/// mandatory default, so a legend builder that resolves `None` falls back to
/// its own theme.
#[derive(Clone, Debug)]
pub struct LabelStyle {
    font: StyleTable<TextStyle>,
    paint: StyleTable<Brush>,
    positive_position: StyleTable<LabelPosition>,
    negative_position: StyleTable<LabelPosition>,
    legend_text_font: SeriesOverrides<TextStyle>,
    default_legend_text_font: Option<TextStyle>,
    legend_text_paint: SeriesOverrides<Brush>,
    default_legend_text_paint: Option<Brush>,
    anchor_offset: f64,
}

impl Default for LabelStyle {
    fn default() -> Self {
        Self::new()
    }
}

impl LabelStyle {
    /// Black 10px sans-serif labels above positive values and below negative
    /// ones.
    pub fn new() -> Self {
        Self {
            font: StyleTable::new(TextStyle::new(10.0), false),
            paint: StyleTable::new(css::BLACK.into(), false),
            positive_position: StyleTable::new(
                LabelPosition::new(LabelAnchor::Outside12, TextAlign::BottomCenter),
                false,
            ),
            negative_position: StyleTable::new(
                LabelPosition::new(LabelAnchor::Outside6, TextAlign::TopCenter),
                false,
            ),
            legend_text_font: SeriesOverrides::new(),
            default_legend_text_font: None,
            legend_text_paint: SeriesOverrides::new(),
            default_legend_text_paint: None,
            anchor_offset: 2.0,
        }
    }

    /// The resolved font for an item label; items share their series font.
    pub fn item_label_font(&self, row: usize, _column: usize) -> TextStyle {
        self.font.lookup(row)
    }

    /// The raw font override for a series.
    pub fn series_item_label_font(&self, series: usize) -> Option<&TextStyle> {
        self.font.get(series)
    }

    /// The font used when a series has no override.
    pub fn default_item_label_font(&self) -> &TextStyle {
        self.font.default_value()
    }

    /// The resolved paint for an item label.
    pub fn item_label_paint(&self, row: usize, _column: usize) -> Brush {
        self.paint.lookup(row)
    }

    /// The raw paint override for a series.
    pub fn series_item_label_paint(&self, series: usize) -> Option<&Brush> {
        self.paint.get(series)
    }

    /// The label paint used when a series has no override.
    pub fn default_item_label_paint(&self) -> &Brush {
        self.paint.default_value()
    }

    /// The resolved position for a positive-value item label.
    pub fn positive_item_label_position(&self, row: usize, _column: usize) -> LabelPosition {
        self.positive_position.lookup(row)
    }

    /// The raw positive-position override for a series.
    pub fn series_positive_item_label_position(&self, series: usize) -> Option<&LabelPosition> {
        self.positive_position.get(series)
    }

    /// The positive-value position used when a series has no override.
    pub fn default_positive_item_label_position(&self) -> &LabelPosition {
        self.positive_position.default_value()
    }

    /// The resolved position for a negative-value item label.
    pub fn negative_item_label_position(&self, row: usize, _column: usize) -> LabelPosition {
        self.negative_position.lookup(row)
    }

    /// The raw negative-position override for a series.
    pub fn series_negative_item_label_position(&self, series: usize) -> Option<&LabelPosition> {
        self.negative_position.get(series)
    }

    /// The negative-value position used when a series has no override.
    pub fn default_negative_item_label_position(&self) -> &LabelPosition {
        self.negative_position.default_value()
    }

    /// The resolved legend text font for a series: per-series override, then
    /// the (nullable) default.
    pub fn lookup_legend_text_font(&self, series: usize) -> Option<&TextStyle> {
        self.legend_text_font
            .get(series)
            .or(self.default_legend_text_font.as_ref())
    }

    /// The raw legend text font override for a series.
    pub fn legend_text_font(&self, series: usize) -> Option<&TextStyle> {
        self.legend_text_font.get(series)
    }

    /// The family-wide default legend text font, if any.
    pub fn default_legend_text_font(&self) -> Option<&TextStyle> {
        self.default_legend_text_font.as_ref()
    }

    /// The resolved legend text paint for a series: per-series override, then
    /// the (nullable) default.
    pub fn lookup_legend_text_paint(&self, series: usize) -> Option<&Brush> {
        self.legend_text_paint
            .get(series)
            .or(self.default_legend_text_paint.as_ref())
    }

    /// The raw legend text paint override for a series.
    pub fn legend_text_paint(&self, series: usize) -> Option<&Brush> {
        self.legend_text_paint.get(series)
    }

    /// The family-wide default legend text paint, if any.
    pub fn default_legend_text_paint(&self) -> Option<&Brush> {
        self.default_legend_text_paint.as_ref()
    }

    /// The radius, in pixels, of the inside anchor ring around a data point.
    pub fn anchor_offset(&self) -> f64 {
        self.anchor_offset
    }
}

/// Mutable view over [`LabelStyle`] whose setters fire change events.
pub struct LabelStyleMut<'a> {
    pub(crate) style: &'a mut LabelStyle,
    pub(crate) notifier: Notifier<'a>,
}

impl LabelStyleMut<'_> {
    /// Sets the font override for a series.
    pub fn set_series_item_label_font(
        &mut self,
        series: usize,
        font: Option<TextStyle>,
        notify: bool,
    ) {
        self.style.font.set(series, font);
        self.notifier.fire(notify);
    }

    /// Sets the default item label font.
    pub fn set_default_item_label_font(&mut self, font: TextStyle, notify: bool) {
        self.style.font.set_default(font);
        self.notifier.fire(notify);
    }

    /// Removes every per-series font override.
    pub fn clear_series_item_label_fonts(&mut self, notify: bool) {
        self.style.font.clear();
        self.notifier.fire(notify);
    }

    /// Sets the paint override for a series.
    pub fn set_series_item_label_paint(
        &mut self,
        series: usize,
        paint: Option<Brush>,
        notify: bool,
    ) {
        self.style.paint.set(series, paint);
        self.notifier.fire(notify);
    }

    /// Sets the default item label paint.
    pub fn set_default_item_label_paint(&mut self, paint: Brush, notify: bool) {
        self.style.paint.set_default(paint);
        self.notifier.fire(notify);
    }

    /// Removes every per-series paint override.
    pub fn clear_series_item_label_paints(&mut self, notify: bool) {
        self.style.paint.clear();
        self.notifier.fire(notify);
    }

    /// Sets the positive-position override for a series.
    pub fn set_series_positive_item_label_position(
        &mut self,
        series: usize,
        position: Option<LabelPosition>,
        notify: bool,
    ) {
        self.style.positive_position.set(series, position);
        self.notifier.fire(notify);
    }

    /// Sets the default positive-value position.
    pub fn set_default_positive_item_label_position(
        &mut self,
        position: LabelPosition,
        notify: bool,
    ) {
        self.style.positive_position.set_default(position);
        self.notifier.fire(notify);
    }

    /// Removes every per-series positive-position override.
    pub fn clear_series_positive_item_label_positions(&mut self, notify: bool) {
        self.style.positive_position.clear();
        self.notifier.fire(notify);
    }

    /// Sets the negative-position override for a series.
    pub fn set_series_negative_item_label_position(
        &mut self,
        series: usize,
        position: Option<LabelPosition>,
        notify: bool,
    ) {
        self.style.negative_position.set(series, position);
        self.notifier.fire(notify);
    }

    /// Sets the default negative-value position.
    pub fn set_default_negative_item_label_position(
        &mut self,
        position: LabelPosition,
        notify: bool,
    ) {
        self.style.negative_position.set_default(position);
        self.notifier.fire(notify);
    }

    /// Removes every per-series negative-position override.
    pub fn clear_series_negative_item_label_positions(&mut self, notify: bool) {
        self.style.negative_position.clear();
        self.notifier.fire(notify);
    }

    /// Sets the legend text font override for a series.
    pub fn set_legend_text_font(&mut self, series: usize, font: Option<TextStyle>, notify: bool) {
        self.style.legend_text_font.set(series, font);
        self.notifier.fire(notify);
    }

    /// Sets or clears the default legend text font.
    pub fn set_default_legend_text_font(&mut self, font: Option<TextStyle>, notify: bool) {
        self.style.default_legend_text_font = font;
        self.notifier.fire(notify);
    }

    /// Sets the legend text paint override for a series.
    pub fn set_legend_text_paint(&mut self, series: usize, paint: Option<Brush>, notify: bool) {
        self.style.legend_text_paint.set(series, paint);
        self.notifier.fire(notify);
    }

    /// Sets or clears the default legend text paint.
    pub fn set_default_legend_text_paint(&mut self, paint: Option<Brush>, notify: bool) {
        self.style.default_legend_text_paint = paint;
        self.notifier.fire(notify);
    }

    /// Sets the anchor ring radius. Always fires a change event.
    pub fn set_anchor_offset(&mut self, offset: f64) {
        self.style.anchor_offset = offset;
        self.notifier.fire(true);
    }
}

impl fmt::Debug for LabelStyleMut<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LabelStyleMut")
            .field("style", &self.style)
            .finish_non_exhaustive()
    }
}
