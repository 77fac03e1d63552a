// Copyright 2026 the Perch Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Resolver implementation.
//!
//! ## Overview
//!
//! Scans candidate intersections from a [`HitProvider`] and selects at most
//! one placement, in three ordered tiers. The first tier to produce a match
//! wins.
//!
//! ## Tiers
//!
//! 1. Observed plane geometry whose alignment passes the filter. Highest
//!    confidence; short-circuits everything else.
//! 2. Infinite plane extensions, only when the request enables them. Vertical
//!    matches win immediately. Horizontal matches must sit within
//!    [`HORIZONTAL_SNAP_TOLERANCE`] of the reference height when one is set;
//!    a horizontal candidate outside the band is skipped, not a loop exit.
//! 3. Estimated surfaces: the first horizontal and first vertical estimate
//!    in provider order, arbitrated by the alignment filter and, when both
//!    pass, by ray distance.
//!
//! ## Queries
//!
//! At most two provider queries per call: the primary kinds always, the
//! infinite kind only when Tier 1 failed and the request asks for it.
//!
//! ## No state
//!
//! `resolve` is a pure function of the request and the provider's answers.
//! No result is an ordinary outcome ("no placement this frame"), not an
//! error; callers retry next frame.

use perch_hit::provider::HitProvider;
use perch_hit::types::{AlignmentFilter, HitCandidate, HitKind, KindFilter, PlaneAlignment};

use crate::types::PlacementRequest;

/// Half-width of the snap band around the reference height, in meters.
///
/// A horizontal infinite plane is only accepted while dragging if its hit
/// lies within this band of the object's current height; otherwise a lower
/// table or the floor would capture the object merely by being geometrically
/// infinite.
pub const HORIZONTAL_SNAP_TOLERANCE: f32 = 0.05;

/// Select the most plausible placement for `request` from `provider`'s
/// answers, or `None` when no candidate passes any tier.
pub fn resolve<P: HitProvider>(
    request: &PlacementRequest,
    provider: &P,
) -> Option<HitCandidate> {
    let primary = provider.query(request.point, KindFilter::PRIMARY);

    // Tier 1: observed geometry is the highest-confidence signal.
    if let Some(hit) = plane_geometry_hit(&primary, request.alignments) {
        return Some(hit.clone());
    }

    // Tier 2: the second query is issued lazily; skipping it when Tier 1
    // matched keeps the call at one query.
    if request.infinite_planes {
        let infinite = provider.query(request.point, KindFilter::INFINITE_PLANE);
        if let Some(hit) = infinite_plane_hit(&infinite, request) {
            return Some(hit.clone());
        }
    }

    // Tier 3: estimated fallback.
    estimated_hit(&primary, request.alignments).cloned()
}

/// First observed-geometry candidate whose alignment passes the filter.
fn plane_geometry_hit(
    candidates: &[HitCandidate],
    alignments: AlignmentFilter,
) -> Option<&HitCandidate> {
    candidates.iter().find(|c| {
        c.kind == HitKind::PlaneGeometry && c.alignment().is_some_and(|a| alignments.accepts(a))
    })
}

/// First acceptable infinite-plane candidate in provider order.
fn infinite_plane_hit<'h>(
    candidates: &'h [HitCandidate],
    request: &PlacementRequest,
) -> Option<&'h HitCandidate> {
    for c in candidates {
        if c.kind != HitKind::InfinitePlane {
            continue;
        }
        let Some(alignment) = c.alignment() else {
            continue;
        };
        if !request.alignments.accepts(alignment) {
            continue;
        }
        match alignment {
            // Vertical extensions are unambiguous; first match wins.
            PlaneAlignment::Vertical => return Some(c),
            PlaneAlignment::Horizontal => match request.reference_height {
                None => return Some(c),
                Some(height)
                    if (c.pose.position.y - height).abs() <= HORIZONTAL_SNAP_TOLERANCE =>
                {
                    return Some(c);
                }
                // Unrelated horizontal surface; keep scanning.
                Some(_) => {}
            },
        }
    }
    None
}

/// Estimated fallback over the first horizontal and first vertical estimate.
fn estimated_hit(
    candidates: &[HitCandidate],
    alignments: AlignmentFilter,
) -> Option<&HitCandidate> {
    // No closer ranking signal exists among estimates, so the first of each
    // kind in provider order stands for that kind.
    let h = candidates
        .iter()
        .find(|c| c.kind == HitKind::EstimatedHorizontal);
    let v = candidates
        .iter()
        .find(|c| c.kind == HitKind::EstimatedVertical);

    let wants_h = alignments.contains(AlignmentFilter::HORIZONTAL);
    let wants_v = alignments.contains(AlignmentFilter::VERTICAL);
    match (wants_h, wants_v) {
        (true, true) => match (h, v) {
            (Some(h), Some(v)) => Some(if v.distance < h.distance { v } else { h }),
            (Some(h), None) => Some(h),
            (None, v) => v,
        },
        (true, false) => h,
        // An object meant for a wall can still sit flat; a wall is not an
        // acceptable stand-in for a tabletop, so the reverse is not offered.
        (false, true) => v.or(h),
        (false, false) => None,
    }
}
