// Copyright 2025 the GeoCreator Authors
// SPDX-License-Identifier: Apache-2.0

//! The document: an ordered layer stack of shapes plus its id allocator.
//!
//! Index 0 of the shape list is the bottom layer (painted first); the last
//! entry is the top layer. The active shape is tracked as an optional
//! `ShapeId` and mirrored in each shape's `is_active` flag, so at most one
//! shape is active at a time.

use super::entity_id::{IdAllocator, ShapeId};
use super::shape::{Shape, ShapeColor, ShapeKind};
use kurbo::Point;

/// Ordered collection of shapes defining paint order
#[derive(Debug, Clone, Default)]
pub struct Document {
    shapes: Vec<Shape>,
    ids: IdAllocator,
    active: Option<ShapeId>,
}

impl Document {
    /// Create a document with no shapes
    ///
    /// Editing code normally goes through `clear`, which leaves one empty
    /// active shape ready to receive points.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a document from parts that were already validated
    pub(crate) fn from_parts(shapes: Vec<Shape>, next_id: u64) -> Self {
        Self {
            shapes,
            ids: IdAllocator::starting_at(next_id),
            active: None,
        }
    }

    // ===== ACCESSORS =====

    /// All shapes, bottom layer first
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// The id the next started shape will receive
    pub fn next_id(&self) -> u64 {
        self.ids.peek()
    }

    pub fn get(&self, id: ShapeId) -> Option<&Shape> {
        self.shapes.iter().find(|s| s.id() == id)
    }

    pub fn get_mut(&mut self, id: ShapeId) -> Option<&mut Shape> {
        self.shapes.iter_mut().find(|s| s.id() == id)
    }

    pub fn active_id(&self) -> Option<ShapeId> {
        self.active
    }

    pub fn active(&self) -> Option<&Shape> {
        self.active.and_then(|id| self.get(id))
    }

    pub fn active_mut(&mut self) -> Option<&mut Shape> {
        let id = self.active?;
        self.get_mut(id)
    }

    // ===== ACTIVE SHAPE =====

    /// Make `id` the active shape, deactivating the previous one
    ///
    /// Ids that are not in the document leave no shape active.
    pub fn set_active(&mut self, id: ShapeId) {
        self.deactivate();
        if let Some(shape) = self.get_mut(id) {
            shape.set_active(true);
            self.active = Some(id);
        }
    }

    /// Clear the active shape
    pub fn deactivate(&mut self) {
        if let Some(shape) = self.active_mut() {
            shape.set_active(false);
        }
        self.active = None;
    }

    // ===== LAYER STACK =====

    /// Start an empty shape on the top layer and make it active
    pub fn start_new_shape(&mut self, kind: ShapeKind) -> ShapeId {
        self.deactivate();
        let id = self.ids.next();
        let mut shape = Shape::new(id, kind, ShapeColor::random());
        shape.set_active(true);
        self.shapes.push(shape);
        self.active = Some(id);
        tracing::debug!("Started {} shape {} ({} layers)", kind.label(), id, self.shapes.len());
        id
    }

    /// Remove a shape and clear the active shape
    ///
    /// Unknown ids are ignored and leave the active shape untouched.
    pub fn delete(&mut self, id: ShapeId) -> Option<Shape> {
        let index = self.index_of(id)?;
        let mut removed = self.shapes.remove(index);
        self.deactivate();
        removed.set_active(false);
        tracing::debug!("Deleted shape {}", id);
        Some(removed)
    }

    /// Move a shape to the top layer; returns false for unknown ids
    pub fn bring_to_front(&mut self, id: ShapeId) -> bool {
        let Some(index) = self.index_of(id) else {
            return false;
        };
        let shape = self.shapes.remove(index);
        self.shapes.push(shape);
        true
    }

    /// Move a shape to the bottom layer; returns false for unknown ids
    pub fn send_to_back(&mut self, id: ShapeId) -> bool {
        let Some(index) = self.index_of(id) else {
            return false;
        };
        let shape = self.shapes.remove(index);
        self.shapes.insert(0, shape);
        true
    }

    /// Drawable shapes from the bottom layer to the top
    pub fn paint_order(&self) -> impl DoubleEndedIterator<Item = &Shape> {
        self.shapes.iter().filter(|s| s.is_drawable())
    }

    /// The topmost drawable shape whose outline contains `pt`
    pub fn hit_test_topmost(&self, pt: Point) -> Option<ShapeId> {
        self.paint_order()
            .rev()
            .find(|s| s.contains(pt))
            .map(Shape::id)
    }

    /// Drop every shape, restart ids at 0, and start one new shape
    pub fn clear(&mut self, kind: ShapeKind) -> ShapeId {
        self.shapes.clear();
        self.active = None;
        self.ids.reset();
        self.start_new_shape(kind)
    }

    fn index_of(&self, id: ShapeId) -> Option<usize> {
        self.shapes.iter().position(|s| s.id() == id)
    }
}
