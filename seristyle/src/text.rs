// Copyright 2025 the Seristyle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Text styling value types for item and marker labels.
//!
//! Text layout and measurement live outside this crate; these types carry
//! enough information for a downstream text system to do both.

use alloc::string::String;

/// A font family selection.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum FontFamily {
    /// A generic serif face.
    Serif,
    /// A generic sans-serif face.
    SansSerif,
    /// A generic monospace face.
    Monospace,
    /// A concrete family name, resolved by the text system.
    Named(String),
}

/// Text styling for a label.
#[derive(Clone, Debug, PartialEq)]
pub struct TextStyle {
    /// Font size in pixels.
    pub font_size: f64,
    /// The font family.
    pub family: FontFamily,
    /// CSS-style font weight (400 regular, 700 bold).
    pub weight: u16,
    /// Whether the face is italic.
    pub italic: bool,
}

impl TextStyle {
    /// A regular sans-serif style at the given size.
    pub fn new(font_size: f64) -> Self {
        Self {
            font_size,
            family: FontFamily::SansSerif,
            weight: 400,
            italic: false,
        }
    }

    /// Builder-style family override.
    pub fn with_family(mut self, family: FontFamily) -> Self {
        self.family = family;
        self
    }

    /// Builder-style weight override.
    pub fn with_weight(mut self, weight: u16) -> Self {
        self.weight = weight;
        self
    }
}

impl Default for TextStyle {
    fn default() -> Self {
        Self::new(12.0)
    }
}

/// A nine-way alignment anchoring text relative to a point.
///
/// `TopLeft` places the text's top-left corner on the point, `BottomCenter`
/// centers the text horizontally with its baseline box bottom on the point,
/// and so on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TextAlign {
    /// Top edge, left edge.
    TopLeft,
    /// Top edge, horizontally centered.
    TopCenter,
    /// Top edge, right edge.
    TopRight,
    /// Vertically centered, left edge.
    CenterLeft,
    /// Fully centered.
    Center,
    /// Vertically centered, right edge.
    CenterRight,
    /// Bottom edge, left edge.
    BottomLeft,
    /// Bottom edge, horizontally centered.
    BottomCenter,
    /// Bottom edge, right edge.
    BottomRight,
}
