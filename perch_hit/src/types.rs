// Copyright 2026 the Perch Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for hit testing: alignments, candidate kinds, poses, and hits.

use glam::{Quat, Vec3};

use crate::scene::AnchorId;

/// Orientation class of a detected planar surface.
///
/// Plane detectors classify surfaces by their world-space orientation:
/// floors, tables, and seats are `Horizontal`; walls and doors are
/// `Vertical`. Slanted surfaces are not modeled.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum PlaneAlignment {
    /// Surface normal points along world up (floors, tabletops).
    Horizontal,
    /// Surface normal is perpendicular to world up (walls).
    Vertical,
}

bitflags::bitflags! {
    /// The set of plane alignments a caller accepts for placement.
    ///
    /// An empty filter is legal; it simply matches no candidate.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct AlignmentFilter: u8 {
        /// Accept horizontal surfaces.
        const HORIZONTAL = 0b0000_0001;
        /// Accept vertical surfaces.
        const VERTICAL   = 0b0000_0010;
    }
}

impl Default for AlignmentFilter {
    fn default() -> Self {
        Self::HORIZONTAL | Self::VERTICAL
    }
}

impl AlignmentFilter {
    /// Whether the filter accepts the given alignment.
    pub fn accepts(self, alignment: PlaneAlignment) -> bool {
        match alignment {
            PlaneAlignment::Horizontal => self.contains(Self::HORIZONTAL),
            PlaneAlignment::Vertical => self.contains(Self::VERTICAL),
        }
    }
}

impl From<PlaneAlignment> for AlignmentFilter {
    fn from(alignment: PlaneAlignment) -> Self {
        match alignment {
            PlaneAlignment::Horizontal => Self::HORIZONTAL,
            PlaneAlignment::Vertical => Self::VERTICAL,
        }
    }
}

/// How a candidate intersection was produced.
///
/// ## Semantics
///
/// - `PlaneGeometry`: the ray crossed the *observed* extent of a tracked
///   plane. Highest confidence; the surface is precisely modeled there.
/// - `InfinitePlane`: the ray crossed the mathematical extension of a tracked
///   plane beyond its observed extent. Useful when dragging past a detected
///   boundary that is understood to continue.
/// - `EstimatedHorizontal` / `EstimatedVertical`: heuristic surfaces inferred
///   without a tracked anchor (for example from sparse feature points).
///   Lowest confidence; no anchor back-reference exists.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum HitKind {
    /// Intersection with the observed extent of a tracked plane.
    PlaneGeometry,
    /// Intersection with the infinite extension of a tracked plane.
    InfinitePlane,
    /// Intersection with an estimated horizontal surface.
    EstimatedHorizontal,
    /// Intersection with an estimated vertical surface.
    EstimatedVertical,
}

bitflags::bitflags! {
    /// The candidate kinds a query should produce.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct KindFilter: u8 {
        /// Observed plane geometry.
        const PLANE_GEOMETRY      = 0b0000_0001;
        /// Infinite plane extensions.
        const INFINITE_PLANE      = 0b0000_0010;
        /// Estimated horizontal surfaces.
        const ESTIMATED_HORIZONTAL = 0b0000_0100;
        /// Estimated vertical surfaces.
        const ESTIMATED_VERTICAL   = 0b0000_1000;

        /// The standard first query: observed geometry plus both estimated
        /// kinds. Infinite planes are queried separately and only on demand.
        const PRIMARY = Self::PLANE_GEOMETRY.bits()
            | Self::ESTIMATED_HORIZONTAL.bits()
            | Self::ESTIMATED_VERTICAL.bits();
    }
}

impl KindFilter {
    /// Whether the filter requests the given kind.
    pub fn requests(self, kind: HitKind) -> bool {
        match kind {
            HitKind::PlaneGeometry => self.contains(Self::PLANE_GEOMETRY),
            HitKind::InfinitePlane => self.contains(Self::INFINITE_PLANE),
            HitKind::EstimatedHorizontal => self.contains(Self::ESTIMATED_HORIZONTAL),
            HitKind::EstimatedVertical => self.contains(Self::ESTIMATED_VERTICAL),
        }
    }
}

/// World-space transform of a hit: where the intersection lies and how a
/// placed object would be oriented on the surface.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Pose {
    /// World-space position of the intersection.
    pub position: Vec3,
    /// World-space orientation; local +Y is the surface normal.
    pub orientation: Quat,
}

impl Pose {
    /// The identity pose at the world origin.
    pub const IDENTITY: Self = Self {
        position: Vec3::ZERO,
        orientation: Quat::IDENTITY,
    };

    /// Pose at `position` with the default orientation.
    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            orientation: Quat::IDENTITY,
        }
    }
}

impl Default for Pose {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Back-reference from a candidate to the tracked plane it was computed
/// against.
///
/// Estimated candidates carry no anchor; their alignment is implied by their
/// [`HitKind`].
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct AnchorRef {
    /// Handle of the tracked plane anchor.
    pub id: AnchorId,
    /// Alignment of the tracked plane.
    pub alignment: PlaneAlignment,
}

/// One candidate intersection produced by a [`HitProvider`] query.
///
/// Candidates are plain values: constructed per query, consumed by the
/// resolver, never shared or retained across frames.
///
/// [`HitProvider`]: crate::provider::HitProvider
#[derive(Clone, Debug, PartialEq)]
pub struct HitCandidate {
    /// How this intersection was produced.
    pub kind: HitKind,
    /// Distance from the ray origin to the intersection, in meters.
    /// Non-negative; providers must not report hits behind the ray origin.
    pub distance: f32,
    /// World-space transform of the intersection.
    pub pose: Pose,
    /// Tracked plane this hit was computed against, if any.
    pub anchor: Option<AnchorRef>,
}

impl HitCandidate {
    /// The alignment of the surface this candidate lies on.
    ///
    /// Taken from the anchor when one exists; estimated kinds imply their
    /// alignment. Returns `None` only for an anchorless [`HitKind::PlaneGeometry`]
    /// or [`HitKind::InfinitePlane`] candidate, which a well-formed provider
    /// does not produce.
    pub fn alignment(&self) -> Option<PlaneAlignment> {
        match self.kind {
            HitKind::EstimatedHorizontal => Some(PlaneAlignment::Horizontal),
            HitKind::EstimatedVertical => Some(PlaneAlignment::Vertical),
            HitKind::PlaneGeometry | HitKind::InfinitePlane => {
                self.anchor.map(|a| a.alignment)
            }
        }
    }
}
