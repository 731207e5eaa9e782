// Copyright 2025 the GeoCreator Authors
// SPDX-License-Identifier: Apache-2.0

//! Unique identifiers for shapes.
//!
//! Each `ShapeId` is a monotonically increasing `u64` handed out by the
//! `IdAllocator` owned by a `Document`. There is no global counter: the
//! allocator is document state and is persisted alongside the shapes, so ids
//! are never reused within one document, even across save and load.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A unique identifier for a shape within one document
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShapeId(u64);

impl ShapeId {
    /// Wrap a raw id value
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// The raw id value
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ShapeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Hands out shape ids in increasing order, starting at zero
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IdAllocator {
    next: u64,
}

impl IdAllocator {
    /// Create an allocator whose first id is 0
    pub fn new() -> Self {
        Self::default()
    }

    /// Resume allocation from a persisted counter
    pub fn starting_at(next: u64) -> Self {
        Self { next }
    }

    /// Allocate the next id
    ///
    /// The counter stops at `u64::MAX`. Saved documents that would resume
    /// there are rejected on load, so only 2^64 allocations in one session
    /// could reach it.
    pub fn next(&mut self) -> ShapeId {
        let id = ShapeId(self.next);
        match self.next.checked_add(1) {
            Some(next) => self.next = next,
            None => tracing::error!("Shape id space exhausted at {}", id),
        }
        id
    }

    /// The id the next call to `next` will return
    pub fn peek(&self) -> u64 {
        self.next
    }

    /// Start over from 0 (only valid once every shape has been discarded)
    pub fn reset(&mut self) {
        self.next = 0;
    }
}
