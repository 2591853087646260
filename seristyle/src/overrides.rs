// Copyright 2025 the Seristyle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sparse per-series attribute storage and the three-tier lookup table.

use hashbrown::HashMap;

/// A sparse mapping from series index to an optional attribute value.
///
/// An entry holding `None` records that a series was explicitly configured to
/// have no value; a missing entry means the series was never configured.
/// Lookups resolve both states the same way, but they remain distinct for
/// equality comparisons.
#[derive(Clone, Debug, PartialEq)]
pub struct SeriesOverrides<T> {
    entries: HashMap<usize, Option<T>>,
}

impl<T> Default for SeriesOverrides<T> {
    fn default() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }
}

impl<T> SeriesOverrides<T> {
    /// Creates an empty override map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the value configured for a series, if any.
    pub fn get(&self, series: usize) -> Option<&T> {
        self.entries.get(&series).and_then(|v| v.as_ref())
    }

    /// Returns `true` if the series has an entry, even an explicit `None`.
    pub fn contains(&self, series: usize) -> bool {
        self.entries.contains_key(&series)
    }

    /// Sets or replaces the entry for a series.
    pub fn set(&mut self, series: usize, value: Option<T>) {
        self.entries.insert(series, value);
    }

    /// Removes every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Returns `true` if no series has an entry.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The number of configured series.
    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

/// A per-series override table with a mandatory default value.
///
/// Resolution is three-tier: a per-series override wins, then (when
/// `auto_populate` is on and a source is supplied) a lazily generated value
/// that is cached back into the table, then the default.
#[derive(Clone, Debug, PartialEq)]
pub struct StyleTable<T> {
    overrides: SeriesOverrides<T>,
    default: T,
    auto_populate: bool,
}

impl<T: Clone> StyleTable<T> {
    /// Creates a table with no overrides and the given default.
    pub fn new(default: T, auto_populate: bool) -> Self {
        Self {
            overrides: SeriesOverrides::new(),
            default,
            auto_populate,
        }
    }

    /// The raw override for a series, without the default fallback.
    pub fn get(&self, series: usize) -> Option<&T> {
        self.overrides.get(series)
    }

    /// Sets or replaces the override for a series.
    pub fn set(&mut self, series: usize, value: Option<T>) {
        self.overrides.set(series, value);
    }

    /// Removes every per-series override, leaving the default in place.
    pub fn clear(&mut self) {
        self.overrides.clear();
    }

    /// The default value, used when no override resolves.
    pub fn default_value(&self) -> &T {
        &self.default
    }

    /// Replaces the default value.
    pub fn set_default(&mut self, value: T) {
        self.default = value;
    }

    /// Whether lookups cache generated values into the override table.
    pub fn auto_populate(&self) -> bool {
        self.auto_populate
    }

    /// Sets the auto-population flag.
    pub fn set_auto_populate(&mut self, auto: bool) {
        self.auto_populate = auto;
    }

    /// Resolves the value for a series without an auto-population source.
    pub fn lookup(&self, series: usize) -> T {
        self.overrides
            .get(series)
            .cloned()
            .unwrap_or_else(|| self.default.clone())
    }

    /// Resolves the value for a series, drawing on `next` when the series has
    /// no override and auto-population is enabled.
    ///
    /// A generated value is stored as the series override, so repeat lookups
    /// return the same value without consulting `next` again. The cache fill
    /// is silent; it is not a user mutation and never notifies.
    pub fn lookup_with(&mut self, series: usize, next: impl FnOnce() -> Option<T>) -> T {
        if self.auto_populate && self.overrides.get(series).is_none() {
            if let Some(value) = next() {
                self.overrides.set(series, Some(value));
            }
        }
        self.lookup(series)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_none_is_distinct_from_unset() {
        let mut overrides = SeriesOverrides::<u32>::new();
        overrides.set(0, None);
        assert!(overrides.contains(0));
        assert!(!overrides.contains(1));
        assert_eq!(overrides.get(0), None);
        assert_ne!(overrides, SeriesOverrides::new());
    }

    #[test]
    fn lookup_falls_back_to_default() {
        let table = StyleTable::new(7_u32, true);
        assert_eq!(table.lookup(3), 7);
    }

    #[test]
    fn override_wins_over_generated_value() {
        let mut table = StyleTable::new(0_u32, true);
        table.set(2, Some(9));
        assert_eq!(table.lookup_with(2, || Some(1)), 9);
    }

    #[test]
    fn lookup_with_caches_generated_value_once() {
        let mut table = StyleTable::new(0_u32, true);
        let mut calls = 0;
        for _ in 0..3 {
            let v = table.lookup_with(5, || {
                calls += 1;
                Some(42)
            });
            assert_eq!(v, 42);
        }
        assert_eq!(calls, 1);
        assert_eq!(table.get(5), Some(&42));
    }

    #[test]
    fn lookup_with_skips_source_when_auto_populate_off() {
        let mut table = StyleTable::new(3_u32, false);
        let v = table.lookup_with(0, || Some(42));
        assert_eq!(v, 3);
        assert_eq!(table.get(0), None);
    }

    #[test]
    fn absent_source_leaves_table_untouched() {
        let mut table = StyleTable::new(3_u32, true);
        assert_eq!(table.lookup_with(0, || None), 3);
        assert!(!table.overrides.contains(0));
    }

    #[test]
    fn clear_keeps_default() {
        let mut table = StyleTable::new(1_u32, true);
        table.set(0, Some(5));
        table.clear();
        assert_eq!(table.lookup(0), 1);
    }
}
