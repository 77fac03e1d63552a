// Copyright 2026 the Perch Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Resolver basics.
//!
//! This minimal example feeds canned candidates to the resolver and shows how
//! the three tiers arbitrate: observed geometry first, then infinite planes,
//! then estimated surfaces.
//!
//! Run:
//! - `cargo run -p perch_demos --example placement_basics`

use glam::Vec3;
use kurbo::Size;
use perch_hit::provider::ScriptedHits;
use perch_hit::scene::AnchorId;
use perch_hit::types::{AnchorRef, HitCandidate, HitKind, PlaneAlignment, Pose};
use perch_resolver::resolver::resolve;
use perch_resolver::types::PlacementRequest;

fn describe(label: &str, placement: Option<HitCandidate>) {
    match placement {
        Some(hit) => println!(
            "{label}: {:?} at {:?} (distance {:.2} m)",
            hit.kind, hit.pose.position, hit.distance
        ),
        None => println!("{label}: no placement this frame"),
    }
}

fn main() {
    // One frame's worth of candidates: a tabletop hit, the same plane's
    // infinite extension, and a weak horizontal estimate.
    let provider = ScriptedHits::from_hits(vec![
        HitCandidate {
            kind: HitKind::EstimatedHorizontal,
            distance: 2.1,
            pose: Pose::from_position(Vec3::new(0.1, 0.69, -2.0)),
            anchor: None,
        },
        HitCandidate {
            kind: HitKind::PlaneGeometry,
            distance: 1.8,
            pose: Pose::from_position(Vec3::new(0.0, 0.70, -1.7)),
            anchor: Some(AnchorRef {
                id: AnchorId::new(0),
                alignment: PlaneAlignment::Horizontal,
            }),
        },
        HitCandidate {
            kind: HitKind::InfinitePlane,
            distance: 1.8,
            pose: Pose::from_position(Vec3::new(0.0, 0.70, -1.7)),
            anchor: Some(AnchorRef {
                id: AnchorId::new(0),
                alignment: PlaneAlignment::Horizontal,
            }),
        },
    ]);

    let viewport = Size::new(1920.0, 1080.0);

    // Observed geometry wins outright.
    let request = PlacementRequest::centered(viewport);
    describe("default request", resolve(&request, &provider));

    // A vertical-only request has no wall to use, so it degrades to the
    // horizontal estimate rather than returning nothing.
    let mut walls_only = PlacementRequest::centered(viewport);
    walls_only.set_alignments(perch_hit::types::AlignmentFilter::VERTICAL);
    describe("vertical-only request", resolve(&walls_only, &provider));

    // With no estimates and no geometry there is simply no placement.
    let empty = ScriptedHits::new();
    describe("empty frame", resolve(&request, &empty));
}
