// Copyright 2025 the Seristyle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The renderer core: composed attribute state plus change notification.

use alloc::boxed::Box;
use alloc::string::String;
use core::fmt;

use kurbo::{BezPath, Stroke};
use peniko::Brush;

use crate::axis::Orientation;
use crate::event::{ListenerId, ListenerRegistry, Notifier, RenderChangeEvent, RendererId};
use crate::label::{LabelStyle, LabelStyleMut};
use crate::ops::RenderOp;
use crate::paint::{PaintStyle, PaintStyleMut};
use crate::palette::PaletteSupplier;
use crate::shape::{ShapeStyle, ShapeStyleMut};
use crate::stroke::{StrokeStyle, StrokeStyleMut};
use crate::visibility::{VisibilityStyle, VisibilityStyleMut};

/// The composition root for per-series style state.
///
/// A renderer owns one instance of each attribute family and the listener
/// registry, and nothing else; datasets, axes, and drawing stay outside. It
/// has no attribute setters of its own. Mutation goes through the family
/// views returned by the `*_mut` and `*_with` accessors, which pair a family
/// with the notifier so a mutating call with `notify = true` fires exactly
/// one change event, and auto-populating lookups fire none.
///
/// The `*_with` accessors additionally attach a [`PaletteSupplier`], the
/// source for auto-populated values. The renderer does not own the supplier;
/// it belongs to whatever composes the chart.
pub struct Renderer {
    id: RendererId,
    visibility: VisibilityStyle,
    paint: PaintStyle,
    stroke: StrokeStyle,
    shape: ShapeStyle,
    label: LabelStyle,
    listeners: ListenerRegistry,
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer {
    /// A renderer with every family at its defaults and no listeners.
    pub fn new() -> Self {
        Self {
            id: RendererId::next(),
            visibility: VisibilityStyle::new(),
            paint: PaintStyle::new(),
            stroke: StrokeStyle::new(),
            shape: ShapeStyle::new(),
            label: LabelStyle::new(),
            listeners: ListenerRegistry::default(),
        }
    }

    /// The process-unique id this renderer's events are tagged with.
    pub fn id(&self) -> RendererId {
        self.id
    }

    /// Read access to the visibility family.
    pub fn visibility(&self) -> &VisibilityStyle {
        &self.visibility
    }

    /// Mutation view over the visibility family.
    pub fn visibility_mut(&mut self) -> VisibilityStyleMut<'_> {
        VisibilityStyleMut {
            style: &mut self.visibility,
            notifier: Notifier {
                renderer: self.id,
                listeners: &mut self.listeners,
            },
        }
    }

    /// Read access to the paint family.
    pub fn paint(&self) -> &PaintStyle {
        &self.paint
    }

    /// Mutation view over the paint family, without a palette supplier;
    /// lookups fall back to the family defaults.
    pub fn paint_mut(&mut self) -> PaintStyleMut<'_> {
        PaintStyleMut {
            style: &mut self.paint,
            supplier: None,
            notifier: Notifier {
                renderer: self.id,
                listeners: &mut self.listeners,
            },
        }
    }

    /// Mutation view over the paint family with a palette supplier attached
    /// for auto-population.
    pub fn paint_with<'a>(&'a mut self, supplier: &'a mut dyn PaletteSupplier) -> PaintStyleMut<'a> {
        PaintStyleMut {
            style: &mut self.paint,
            supplier: Some(supplier),
            notifier: Notifier {
                renderer: self.id,
                listeners: &mut self.listeners,
            },
        }
    }

    /// Read access to the stroke family.
    pub fn stroke(&self) -> &StrokeStyle {
        &self.stroke
    }

    /// Mutation view over the stroke family, without a palette supplier.
    pub fn stroke_mut(&mut self) -> StrokeStyleMut<'_> {
        StrokeStyleMut {
            style: &mut self.stroke,
            supplier: None,
            notifier: Notifier {
                renderer: self.id,
                listeners: &mut self.listeners,
            },
        }
    }

    /// Mutation view over the stroke family with a palette supplier attached.
    pub fn stroke_with<'a>(
        &'a mut self,
        supplier: &'a mut dyn PaletteSupplier,
    ) -> StrokeStyleMut<'a> {
        StrokeStyleMut {
            style: &mut self.stroke,
            supplier: Some(supplier),
            notifier: Notifier {
                renderer: self.id,
                listeners: &mut self.listeners,
            },
        }
    }

    /// Read access to the shape family.
    pub fn shape(&self) -> &ShapeStyle {
        &self.shape
    }

    /// Mutation view over the shape family, without a palette supplier.
    pub fn shape_mut(&mut self) -> ShapeStyleMut<'_> {
        ShapeStyleMut {
            style: &mut self.shape,
            supplier: None,
            notifier: Notifier {
                renderer: self.id,
                listeners: &mut self.listeners,
            },
        }
    }

    /// Mutation view over the shape family with a palette supplier attached.
    pub fn shape_with<'a>(&'a mut self, supplier: &'a mut dyn PaletteSupplier) -> ShapeStyleMut<'a> {
        ShapeStyleMut {
            style: &mut self.shape,
            supplier: Some(supplier),
            notifier: Notifier {
                renderer: self.id,
                listeners: &mut self.listeners,
            },
        }
    }

    /// Read access to the item label family.
    pub fn label(&self) -> &LabelStyle {
        &self.label
    }

    /// Mutation view over the item label family. Label lookups never
    /// auto-populate, so there is no supplier variant.
    pub fn label_mut(&mut self) -> LabelStyleMut<'_> {
        LabelStyleMut {
            style: &mut self.label,
            notifier: Notifier {
                renderer: self.id,
                listeners: &mut self.listeners,
            },
        }
    }

    /// Registers a change listener and returns its removal handle.
    pub fn add_change_listener(
        &mut self,
        listener: impl FnMut(&RenderChangeEvent) + 'static,
    ) -> ListenerId {
        self.listeners.add(Box::new(listener))
    }

    /// Removes a previously registered listener. Returns `false` if the
    /// handle was unknown.
    pub fn remove_change_listener(&mut self, id: ListenerId) -> bool {
        self.listeners.remove(id)
    }

    /// Whether the listener behind `id` is currently registered.
    pub fn has_listener(&self, id: ListenerId) -> bool {
        self.listeners.contains(id)
    }

    /// Fires a plain (non-structural) change event tagged with this
    /// renderer's id.
    pub fn fire_change_event(&mut self) {
        let event = RenderChangeEvent::new(self.id, false);
        self.notify_listeners(&event);
    }

    /// Delivers a pre-built event to every listener, last registered first.
    pub fn notify_listeners(&mut self, event: &RenderChangeEvent) {
        self.listeners.notify(event);
    }

    /// Builds the draw op for one item label, resolving position, font, and
    /// paint for the given item.
    ///
    /// `(x, y)` is the item's pixel position and `negative` selects between
    /// the positive and negative label positions. Callers are expected to
    /// have consulted [`VisibilityStyle::is_item_label_visible`] first.
    pub fn item_label_op(
        &self,
        series: usize,
        item: usize,
        text: impl Into<String>,
        x: f64,
        y: f64,
        negative: bool,
        orientation: Orientation,
    ) -> RenderOp {
        let position = if negative {
            self.label.negative_item_label_position(series, item)
        } else {
            self.label.positive_item_label_position(series, item)
        };
        let pos =
            position
                .anchor()
                .anchor_point(x, y, orientation, self.label.anchor_offset());
        RenderOp::DrawLabel {
            text: text.into(),
            pos,
            font: self.label.item_label_font(series, item),
            fill: self.label.item_label_paint(series, item),
            background: None,
            align: position.text_align(),
            rotation_align: position.rotation_align(),
            angle: position.angle(),
            alpha: 1.0,
        }
    }

    /// Item resolution view without a palette supplier.
    pub fn items(&mut self) -> ItemStyleView<'_> {
        ItemStyleView {
            renderer: self,
            supplier: None,
        }
    }

    /// Item resolution view with a palette supplier attached for
    /// auto-population.
    pub fn items_with<'a>(&'a mut self, supplier: &'a mut dyn PaletteSupplier) -> ItemStyleView<'a> {
        ItemStyleView {
            renderer: self,
            supplier: Some(supplier),
        }
    }
}

/// Per-item visual attribute resolution.
///
/// Drawing code depends on this seam rather than on [`Renderer`] directly,
/// so a renderer that special-cases individual items (highlighting one bar,
/// say) can substitute its own strategy in front of the table-backed
/// default.
pub trait ItemStyle {
    /// The paint for one item.
    fn item_paint(&mut self, row: usize, column: usize) -> Brush;
    /// The fill paint for one item.
    fn item_fill_paint(&mut self, row: usize, column: usize) -> Brush;
    /// The outline paint for one item.
    fn item_outline_paint(&mut self, row: usize, column: usize) -> Brush;
    /// The stroke for one item.
    fn item_stroke(&mut self, row: usize, column: usize) -> Stroke;
    /// The outline stroke for one item.
    fn item_outline_stroke(&mut self, row: usize, column: usize) -> Stroke;
    /// The shape for one item.
    fn item_shape(&mut self, row: usize, column: usize) -> BezPath;
}

/// The table-backed [`ItemStyle`] implementation: item lookups over a whole
/// renderer, resolving through each family in turn.
pub struct ItemStyleView<'a> {
    renderer: &'a mut Renderer,
    supplier: Option<&'a mut dyn PaletteSupplier>,
}

impl ItemStyle for ItemStyleView<'_> {
    fn item_paint(&mut self, row: usize, column: usize) -> Brush {
        match self.supplier.as_deref_mut() {
            Some(supplier) => self.renderer.paint_with(supplier).item_paint(row, column),
            None => self.renderer.paint_mut().item_paint(row, column),
        }
    }

    fn item_fill_paint(&mut self, row: usize, column: usize) -> Brush {
        match self.supplier.as_deref_mut() {
            Some(supplier) => self.renderer.paint_with(supplier).item_fill_paint(row, column),
            None => self.renderer.paint_mut().item_fill_paint(row, column),
        }
    }

    fn item_outline_paint(&mut self, row: usize, column: usize) -> Brush {
        match self.supplier.as_deref_mut() {
            Some(supplier) => self
                .renderer
                .paint_with(supplier)
                .item_outline_paint(row, column),
            None => self.renderer.paint_mut().item_outline_paint(row, column),
        }
    }

    fn item_stroke(&mut self, row: usize, column: usize) -> Stroke {
        match self.supplier.as_deref_mut() {
            Some(supplier) => self.renderer.stroke_with(supplier).item_stroke(row, column),
            None => self.renderer.stroke_mut().item_stroke(row, column),
        }
    }

    fn item_outline_stroke(&mut self, row: usize, column: usize) -> Stroke {
        match self.supplier.as_deref_mut() {
            Some(supplier) => self
                .renderer
                .stroke_with(supplier)
                .item_outline_stroke(row, column),
            None => self.renderer.stroke_mut().item_outline_stroke(row, column),
        }
    }

    fn item_shape(&mut self, row: usize, column: usize) -> BezPath {
        match self.supplier.as_deref_mut() {
            Some(supplier) => self.renderer.shape_with(supplier).item_shape(row, column),
            None => self.renderer.shape_mut().item_shape(row, column),
        }
    }
}

impl fmt::Debug for ItemStyleView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ItemStyleView")
            .field("renderer", &self.renderer.id)
            .finish_non_exhaustive()
    }
}

impl Clone for Renderer {
    /// Deep copy of all attribute state.
    ///
    /// The copy gets a fresh id and an empty listener registry; listener
    /// registrations never transfer to copies.
    fn clone(&self) -> Self {
        Self {
            id: RendererId::next(),
            visibility: self.visibility.clone(),
            paint: self.paint.clone(),
            stroke: self.stroke.clone(),
            shape: self.shape.clone(),
            label: self.label.clone(),
            listeners: ListenerRegistry::default(),
        }
    }
}

impl fmt::Debug for Renderer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Renderer")
            .field("id", &self.id)
            .field("visibility", &self.visibility)
            .field("paint", &self.paint)
            .field("stroke", &self.stroke)
            .field("shape", &self.shape)
            .field("label", &self.label)
            .field("listeners", &self.listeners)
            .finish()
    }
}
