// Copyright 2025 the Seristyle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cycling suppliers of default visual attributes.

use kurbo::{BezPath, Stroke};
use peniko::Color;
use peniko::color::palette::css;

use crate::symbol::Symbol;

/// A stateful source of default visual attributes.
///
/// Attribute families consult a supplier when a series has no explicit
/// override and auto-population is enabled; the generated value is cached per
/// series. Every call advances the corresponding sequence, so suppliers never
/// hand the same slot to two series.
pub trait PaletteSupplier {
    /// The next primary series color.
    fn next_color(&mut self) -> Color;
    /// The next fill color.
    fn next_fill_color(&mut self) -> Color;
    /// The next outline color.
    fn next_outline_color(&mut self) -> Color;
    /// The next primary stroke style.
    fn next_stroke(&mut self) -> Stroke;
    /// The next outline stroke style.
    fn next_outline_stroke(&mut self) -> Stroke;
    /// The next item shape.
    fn next_shape(&mut self) -> BezPath;
}

const SERIES_COLORS: [Color; 8] = [
    css::CRIMSON,
    css::ROYAL_BLUE,
    css::SEA_GREEN,
    css::DARK_ORANGE,
    css::MEDIUM_PURPLE,
    css::GOLDENROD,
    css::TEAL,
    css::INDIAN_RED,
];

const FILL_COLORS: [Color; 4] = [
    css::LIGHT_STEEL_BLUE,
    css::MISTY_ROSE,
    css::HONEYDEW,
    css::LAVENDER,
];

const OUTLINE_COLORS: [Color; 3] = [css::DIM_GRAY, css::DARK_SLATE_GRAY, css::BLACK];

const STROKE_WIDTHS: [f64; 3] = [1.0, 2.0, 0.5];

const OUTLINE_STROKE_WIDTHS: [f64; 1] = [1.0];

const SHAPES: [Symbol; 5] = [
    Symbol::Square,
    Symbol::Circle,
    Symbol::Diamond,
    Symbol::TriangleUp,
    Symbol::TriangleDown,
];

const SHAPE_SIZE: f64 = 6.0;

/// The standard cycling palette.
///
/// Each attribute kind cycles through a fixed sequence independently of the
/// others, wrapping when exhausted.
#[derive(Clone, Debug, Default)]
pub struct StandardPalette {
    color: usize,
    fill: usize,
    outline: usize,
    stroke: usize,
    outline_stroke: usize,
    shape: usize,
}

impl StandardPalette {
    /// A palette with every sequence at its start.
    pub fn new() -> Self {
        Self::default()
    }
}

fn cycle<T: Copy>(items: &[T], index: &mut usize) -> T {
    let value = items[*index % items.len()];
    *index += 1;
    value
}

impl PaletteSupplier for StandardPalette {
    fn next_color(&mut self) -> Color {
        cycle(&SERIES_COLORS, &mut self.color)
    }

    fn next_fill_color(&mut self) -> Color {
        cycle(&FILL_COLORS, &mut self.fill)
    }

    fn next_outline_color(&mut self) -> Color {
        cycle(&OUTLINE_COLORS, &mut self.outline)
    }

    fn next_stroke(&mut self) -> Stroke {
        Stroke::new(cycle(&STROKE_WIDTHS, &mut self.stroke))
    }

    fn next_outline_stroke(&mut self) -> Stroke {
        Stroke::new(cycle(&OUTLINE_STROKE_WIDTHS, &mut self.outline_stroke))
    }

    fn next_shape(&mut self) -> BezPath {
        cycle(&SHAPES, &mut self.shape).path(0.0, 0.0, SHAPE_SIZE)
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn colors_advance_per_call_and_wrap() {
        let mut palette = StandardPalette::new();
        let first = palette.next_color();
        let second = palette.next_color();
        assert_ne!(first, second);
        for _ in 0..(SERIES_COLORS.len() - 2) {
            palette.next_color();
        }
        // One full cycle brings the sequence back to its start.
        assert_eq!(palette.next_color(), first);
    }

    #[test]
    fn sequences_are_independent() {
        let mut palette = StandardPalette::new();
        palette.next_color();
        palette.next_color();
        assert_eq!(palette.next_stroke().width, STROKE_WIDTHS[0]);
        assert_eq!(palette.next_fill_color(), FILL_COLORS[0]);
    }

    #[test]
    fn shapes_cycle_through_symbols() {
        let mut palette = StandardPalette::new();
        let first = palette.next_shape();
        for _ in 0..(SHAPES.len() - 1) {
            palette.next_shape();
        }
        assert_eq!(palette.next_shape(), first);
    }
}
