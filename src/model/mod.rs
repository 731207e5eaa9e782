// Copyright 2025 the GeoCreator Authors
// SPDX-License-Identifier: Apache-2.0

//! Shape data model: ids, shapes, outlines, the layer stack and its saved form

pub mod document;
pub mod entity_id;
pub mod outline;
pub mod saved;
pub mod shape;

pub use document::Document;
pub use entity_id::{IdAllocator, ShapeId};
pub use outline::{Outline, Primitive, compute_outline};
pub use saved::{DocumentError, SavedDocument};
pub use shape::{Shape, ShapeColor, ShapeKind};
