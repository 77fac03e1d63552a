// Copyright 2026 the Perch Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Request types for the placement resolver.

use kurbo::{Point, Size};
use perch_hit::types::AlignmentFilter;

/// One placement query: where on screen to probe and what to accept.
///
/// ## Defaults
///
/// - `point`: the screen origin; use [`PlacementRequest::centered`] for the
///   conventional center-of-viewport probe.
/// - `infinite_planes`: off. Infinite-plane reasoning costs a second provider
///   query and is only wanted while dragging past a detected boundary.
/// - `reference_height`: none. Set it to the placed object's current world Y
///   while dragging, so horizontal infinite planes at unrelated heights are
///   not snapped to.
/// - `alignments`: both horizontal and vertical.
#[derive(Clone, Debug, PartialEq)]
pub struct PlacementRequest {
    /// Screen point to probe.
    pub point: Point,
    /// Whether Tier 2 (infinite plane extrapolation) may run.
    pub infinite_planes: bool,
    /// World Y of the object being placed, if one already exists.
    pub reference_height: Option<f32>,
    /// Alignments the caller accepts.
    pub alignments: AlignmentFilter,
}

impl Default for PlacementRequest {
    fn default() -> Self {
        Self {
            point: Point::ZERO,
            infinite_planes: false,
            reference_height: None,
            alignments: AlignmentFilter::default(),
        }
    }
}

impl PlacementRequest {
    /// A request probing the given screen point.
    pub fn new(point: Point) -> Self {
        Self {
            point,
            ..Self::default()
        }
    }

    /// A request probing the center of a viewport of the given size.
    pub fn centered(viewport: Size) -> Self {
        Self::new(Point::new(viewport.width / 2.0, viewport.height / 2.0))
    }

    /// Enable or disable infinite-plane reasoning.
    pub fn set_infinite_planes(&mut self, enabled: bool) {
        self.infinite_planes = enabled;
    }

    /// Set the reference object height used by the horizontal snap band.
    pub fn set_reference_height(&mut self, height: Option<f32>) {
        self.reference_height = height;
    }

    /// Restrict the accepted alignments.
    pub fn set_alignments(&mut self, alignments: AlignmentFilter) {
        self.alignments = alignments;
    }
}
