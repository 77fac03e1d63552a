// Copyright 2026 the Perch Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dragging past a detected boundary.
//!
//! Builds a [`PlaneScene`] with a tabletop whose observed extent is small,
//! then resolves a probe beyond that extent. Without infinite planes the drag
//! falls off the table; with them, and a reference height from the object
//! being dragged, the placement continues on the table's plane while the
//! floor below stays rejected by the snap band.
//!
//! Run:
//! - `cargo run -p perch_demos --example scene_placement`

use glam::{Vec2, Vec3};
use kurbo::{Point, Size};
use perch_hit::scene::{PlaneScene, PlaneSurface, Ray, RayMapper};
use perch_resolver::resolver::resolve;
use perch_resolver::types::PlacementRequest;

const VIEWPORT: Size = Size::new(800.0, 800.0);
const PIXELS_PER_METER: f64 = 200.0;

/// Overhead orthographic camera: screen x/y map to world x/z, rays point
/// straight down from 3 m up.
struct Overhead;

impl RayMapper for Overhead {
    fn ray_at(&self, point: Point) -> Ray {
        let x = (point.x - VIEWPORT.width / 2.0) / PIXELS_PER_METER;
        let z = (point.y - VIEWPORT.height / 2.0) / PIXELS_PER_METER;
        #[allow(
            clippy::cast_possible_truncation,
            reason = "screen coordinates are far below f32 range"
        )]
        let origin = Vec3::new(x as f32, 3.0, z as f32);
        Ray {
            origin,
            direction: Vec3::NEG_Y,
        }
    }
}

fn main() {
    let mut scene = PlaneScene::new(Overhead);
    // Tabletop at 0.7 m with a 0.5 m observed radius, floor detected below.
    scene.add_anchor(PlaneSurface::horizontal(
        Vec3::new(0.0, 0.7, 0.0),
        Vec2::splat(0.5),
    ));
    scene.add_anchor(PlaneSurface::horizontal(Vec3::ZERO, Vec2::splat(5.0)));

    // Probe over the table: observed geometry answers.
    let over_table = PlacementRequest::centered(VIEWPORT);
    println!(
        "over the table   -> {:?}",
        resolve(&over_table, &scene).map(|hit| (hit.kind, hit.pose.position))
    );

    // Probe 1 m past the table edge. The floor's observed geometry is the
    // only Tier 1 answer there.
    let past_edge = Point::new(VIEWPORT.width / 2.0 + PIXELS_PER_METER, VIEWPORT.height / 2.0);
    println!(
        "past the edge    -> {:?}",
        resolve(&PlacementRequest::new(past_edge), &scene).map(|hit| (hit.kind, hit.pose.position))
    );

    // Same probe while dragging an object that sits at table height, with
    // only infinite planes to consult: the tabletop's extension is inside
    // the snap band, the floor's is not.
    let mut dragging = PlacementRequest::new(past_edge);
    dragging.set_infinite_planes(true);
    dragging.set_reference_height(Some(0.7));
    dragging.set_alignments(perch_hit::types::AlignmentFilter::HORIZONTAL);
    let mut bare = PlaneScene::new(Overhead);
    bare.add_anchor(PlaneSurface::horizontal(
        Vec3::new(0.0, 0.7, 0.0),
        Vec2::splat(0.5),
    ));
    bare.add_anchor(PlaneSurface::horizontal(Vec3::ZERO, Vec2::splat(0.5)));
    println!(
        "dragging at 0.7m -> {:?}",
        resolve(&dragging, &bare).map(|hit| (hit.kind, hit.pose.position))
    );
}
