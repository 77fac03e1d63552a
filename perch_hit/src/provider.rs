// Copyright 2026 the Perch Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The provider seam: anything that can answer a hit-test query.
//!
//! ## Overview
//!
//! A [`HitProvider`] turns a 2D screen point into candidate intersections of
//! the requested kinds. The production provider is whatever tracking stack
//! hosts the session; this crate ships two:
//!
//! - [`PlaneScene`](crate::scene::PlaneScene), a small plane store that
//!   answers queries by closed-form ray/plane intersection.
//! - [`ScriptedHits`], a canned list for tests and benches.
//!
//! ## Ordering
//!
//! The order of returned candidates is implementation-defined. Consumers must
//! scan explicitly rather than assume a sort; `PlaneScene` happens to answer
//! nearest-first, `ScriptedHits` preserves insertion order.

use alloc::vec::Vec;

use kurbo::Point;

use crate::types::{HitCandidate, KindFilter};

/// A source of candidate intersections for a screen point.
pub trait HitProvider {
    /// Produce all candidates of the requested kinds under `point`.
    ///
    /// An empty result is a normal outcome, not an error.
    fn query(&self, point: Point, kinds: KindFilter) -> Vec<HitCandidate>;
}

/// A canned provider over a fixed candidate list.
///
/// Ignores the query point and filters the stored list by kind, preserving
/// insertion order. Useful for tests, benches, and replaying recorded frames.
#[derive(Clone, Debug, Default)]
pub struct ScriptedHits {
    hits: Vec<HitCandidate>,
}

impl ScriptedHits {
    /// A provider with no candidates.
    pub fn new() -> Self {
        Self { hits: Vec::new() }
    }

    /// A provider answering from the given list.
    pub fn from_hits(hits: Vec<HitCandidate>) -> Self {
        Self { hits }
    }

    /// Append a candidate to the script.
    pub fn push(&mut self, hit: HitCandidate) {
        self.hits.push(hit);
    }
}

impl HitProvider for ScriptedHits {
    fn query(&self, _point: Point, kinds: KindFilter) -> Vec<HitCandidate> {
        self.hits
            .iter()
            .filter(|h| kinds.requests(h.kind))
            .cloned()
            .collect()
    }
}
