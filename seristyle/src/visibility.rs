// Copyright 2025 the Seristyle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Series, legend, item-label, and hit-entity visibility flags.

use core::fmt;

use crate::event::Notifier;
use crate::overrides::StyleTable;

/// Visibility state for series, legend entries, item labels, and hit
/// entities.
///
/// Visibility never auto-populates; each table resolves override-then-default
/// only.
#[derive(Clone, Debug, PartialEq)]
pub struct VisibilityStyle {
    series_visible: StyleTable<bool>,
    series_visible_in_legend: StyleTable<bool>,
    item_labels_visible: StyleTable<bool>,
    create_entities: StyleTable<bool>,
    entity_radius: f64,
    bounds_visible_only: bool,
}

impl Default for VisibilityStyle {
    fn default() -> Self {
        Self::new()
    }
}

impl VisibilityStyle {
    /// Everything visible, item labels off, hit entities on with a 3px
    /// fallback radius, bounds restricted to visible series.
    pub fn new() -> Self {
        Self {
            series_visible: StyleTable::new(true, false),
            series_visible_in_legend: StyleTable::new(true, false),
            item_labels_visible: StyleTable::new(false, false),
            create_entities: StyleTable::new(true, false),
            entity_radius: 3.0,
            bounds_visible_only: true,
        }
    }

    /// Whether the series should be drawn at all.
    pub fn is_series_visible(&self, series: usize) -> bool {
        self.series_visible.lookup(series)
    }

    /// Whether the given item should be drawn.
    ///
    /// Items carry no independent visibility; this resolves at the series
    /// level.
    pub fn is_item_visible(&self, series: usize, _item: usize) -> bool {
        self.is_series_visible(series)
    }

    /// The raw per-series visibility override, without the default fallback.
    pub fn series_visible(&self, series: usize) -> Option<bool> {
        self.series_visible.get(series).copied()
    }

    /// The visibility used when a series has no override.
    pub fn default_series_visible(&self) -> bool {
        *self.series_visible.default_value()
    }

    /// Whether the series appears in the legend.
    pub fn is_series_visible_in_legend(&self, series: usize) -> bool {
        self.series_visible_in_legend.lookup(series)
    }

    /// The raw per-series legend visibility override.
    pub fn series_visible_in_legend(&self, series: usize) -> Option<bool> {
        self.series_visible_in_legend.get(series).copied()
    }

    /// The legend visibility used when a series has no override.
    pub fn default_series_visible_in_legend(&self) -> bool {
        *self.series_visible_in_legend.default_value()
    }

    /// Whether the label for the given item should be drawn.
    ///
    /// Delegates to the series; the column index does not participate.
    pub fn is_item_label_visible(&self, row: usize, _column: usize) -> bool {
        self.is_series_item_labels_visible(row)
    }

    /// Whether item labels are drawn for the series.
    pub fn is_series_item_labels_visible(&self, series: usize) -> bool {
        self.item_labels_visible.lookup(series)
    }

    /// The raw per-series item-label visibility override.
    pub fn series_item_labels_visible(&self, series: usize) -> Option<bool> {
        self.item_labels_visible.get(series).copied()
    }

    /// The item-label visibility used when a series has no override.
    pub fn default_item_labels_visible(&self) -> bool {
        *self.item_labels_visible.default_value()
    }

    /// Whether a hit-test entity should be created for the given item.
    ///
    /// Delegates to the series; the column index does not participate.
    pub fn creates_item_entity(&self, row: usize, _column: usize) -> bool {
        self.creates_series_entities(row)
    }

    /// Whether hit-test entities are created for the series.
    pub fn creates_series_entities(&self, series: usize) -> bool {
        self.create_entities.lookup(series)
    }

    /// The raw per-series entity-creation override.
    pub fn series_creates_entities(&self, series: usize) -> Option<bool> {
        self.create_entities.get(series).copied()
    }

    /// The entity-creation flag used when a series has no override.
    pub fn default_creates_entities(&self) -> bool {
        *self.create_entities.default_value()
    }

    /// The radius, in pixels, of the circular hit area used when an item has
    /// no natural area of its own.
    pub fn entity_radius(&self) -> f64 {
        self.entity_radius
    }

    /// Whether hidden series are excluded from data-bounds computation.
    pub fn bounds_visible_only(&self) -> bool {
        self.bounds_visible_only
    }
}

/// Mutable view over [`VisibilityStyle`] whose setters fire change events.
pub struct VisibilityStyleMut<'a> {
    pub(crate) style: &'a mut VisibilityStyle,
    pub(crate) notifier: Notifier<'a>,
}

impl VisibilityStyleMut<'_> {
    /// Sets the visibility override for a series.
    ///
    /// The emitted event is structural: series visibility feeds axis
    /// auto-ranging downstream.
    pub fn set_series_visible(&mut self, series: usize, visible: Option<bool>, notify: bool) {
        self.style.series_visible.set(series, visible);
        self.notifier.fire_structural(notify);
    }

    /// Sets the default series visibility. Structural.
    pub fn set_default_series_visible(&mut self, visible: bool, notify: bool) {
        self.style.series_visible.set_default(visible);
        self.notifier.fire_structural(notify);
    }

    /// Sets the legend visibility override for a series.
    pub fn set_series_visible_in_legend(
        &mut self,
        series: usize,
        visible: Option<bool>,
        notify: bool,
    ) {
        self.style.series_visible_in_legend.set(series, visible);
        self.notifier.fire(notify);
    }

    /// Sets the default legend visibility.
    pub fn set_default_series_visible_in_legend(&mut self, visible: bool, notify: bool) {
        self.style.series_visible_in_legend.set_default(visible);
        self.notifier.fire(notify);
    }

    /// Sets the item-label visibility override for a series.
    pub fn set_series_item_labels_visible(
        &mut self,
        series: usize,
        visible: Option<bool>,
        notify: bool,
    ) {
        self.style.item_labels_visible.set(series, visible);
        self.notifier.fire(notify);
    }

    /// Sets the default item-label visibility.
    pub fn set_default_item_labels_visible(&mut self, visible: bool, notify: bool) {
        self.style.item_labels_visible.set_default(visible);
        self.notifier.fire(notify);
    }

    /// Sets the entity-creation override for a series.
    pub fn set_series_creates_entities(
        &mut self,
        series: usize,
        create: Option<bool>,
        notify: bool,
    ) {
        self.style.create_entities.set(series, create);
        self.notifier.fire(notify);
    }

    /// Sets the default entity-creation flag.
    pub fn set_default_creates_entities(&mut self, create: bool, notify: bool) {
        self.style.create_entities.set_default(create);
        self.notifier.fire(notify);
    }

    /// Sets the fallback hit-area radius. Does not notify; the radius only
    /// affects future hit tests, never the rendered output.
    pub fn set_entity_radius(&mut self, radius: f64) {
        self.style.entity_radius = radius;
    }

    /// Sets whether data bounds only consider visible series.
    ///
    /// Always fires a structural event.
    pub fn set_bounds_visible_only(&mut self, visible_only: bool) {
        self.style.bounds_visible_only = visible_only;
        self.notifier.fire_structural(true);
    }
}

impl fmt::Debug for VisibilityStyleMut<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VisibilityStyleMut")
            .field("style", &self.style)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn defaults_match_conventions() {
        let v = VisibilityStyle::new();
        assert!(v.is_series_visible(0));
        assert!(v.is_series_visible_in_legend(0));
        assert!(!v.is_series_item_labels_visible(0));
        assert!(v.bounds_visible_only());
    }

    #[test]
    fn item_visibility_delegates_to_series() {
        let v = VisibilityStyle::new();
        for item in 0..4 {
            assert_eq!(v.is_item_visible(1, item), v.is_series_visible(1));
            assert!(!v.is_item_label_visible(1, item));
        }
    }

    #[test]
    fn entity_creation_delegates_to_series() {
        let v = VisibilityStyle::new();
        assert!(v.default_creates_entities());
        assert_eq!(v.entity_radius(), 3.0);
        for item in 0..4 {
            assert!(v.creates_item_entity(0, item));
        }
    }
}
