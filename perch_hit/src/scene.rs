// Copyright 2026 the Perch Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A minimal plane scene that answers hit-test queries by ray casting.
//!
//! ## Overview
//!
//! [`PlaneScene`] stores tracked plane anchors (with their observed extents)
//! and estimated patches, and implements [`HitProvider`] with closed-form
//! ray/plane intersection. It exists to make demos, tests, and benches
//! self-contained; it is planes only, not a collision engine.
//!
//! Screen-to-world mapping stays outside: the scene asks a [`RayMapper`] for
//! the world ray under a screen point, so camera and projection concerns live
//! with the caller.
//!
//! [`HitProvider`]: crate::provider::HitProvider

use alloc::vec::Vec;

use glam::{Vec2, Vec3};
use kurbo::Point;

use crate::provider::HitProvider;
use crate::types::{AnchorRef, HitCandidate, HitKind, KindFilter, PlaneAlignment, Pose};

/// Threshold below which a ray is treated as parallel to a plane.
const PLANE_EPSILON: f32 = 1e-5;

/// A world-space ray.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Ray {
    /// Ray origin.
    pub origin: Vec3,
    /// Ray direction. Should be normalized so reported distances are metric.
    pub direction: Vec3,
}

impl Ray {
    /// The point at parameter `t` along the ray.
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }
}

/// Maps a 2D screen point to a world-space ray.
///
/// Implemented by whatever owns the camera. Demos use a fixed downward or
/// forward ray; a real app would unproject through its view and projection
/// transforms.
pub trait RayMapper {
    /// The world ray under `point`.
    fn ray_at(&self, point: Point) -> Ray;
}

/// Handle of a tracked plane anchor within a [`PlaneScene`].
///
/// Plain index into the scene's anchor list; anchors are never removed, so
/// handles stay valid for the life of the scene.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct AnchorId(pub(crate) u32);

impl AnchorId {
    /// Wrap a raw index. Providers outside this crate mint their own handles.
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// The raw index.
    pub const fn raw(self) -> u32 {
        self.0
    }

    pub(crate) const fn idx(self) -> usize {
        self.0 as usize
    }
}

/// A planar surface stored by the scene.
///
/// The pose's local +Y is the surface normal; the observed extent spans the
/// local X and Z axes around the pose position.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PlaneSurface {
    /// Orientation class of the surface.
    pub alignment: PlaneAlignment,
    /// Center and orientation of the surface.
    pub pose: Pose,
    /// Observed half-extent along the local X and Z axes, in meters.
    pub half_extent: Vec2,
}

impl PlaneSurface {
    /// An axis-aligned horizontal surface centered at `center`.
    pub fn horizontal(center: Vec3, half_extent: Vec2) -> Self {
        Self {
            alignment: PlaneAlignment::Horizontal,
            pose: Pose::from_position(center),
            half_extent,
        }
    }

    /// World-space surface normal (the pose's local +Y).
    pub fn normal(&self) -> Vec3 {
        self.pose.orientation * Vec3::Y
    }

    /// Intersect `ray` with the surface's plane.
    ///
    /// Returns the ray parameter, or `None` when the ray is parallel to the
    /// plane or the intersection lies behind the origin.
    fn raycast(&self, ray: &Ray) -> Option<f32> {
        let normal = self.normal();
        let denom = ray.direction.dot(normal);
        if denom.abs() < PLANE_EPSILON {
            return None;
        }
        let t = (self.pose.position - ray.origin).dot(normal) / denom;
        if t >= 0.0 { Some(t) } else { None }
    }

    /// Whether a point on the surface's plane lies within the observed extent.
    fn contains(&self, point: Vec3) -> bool {
        let offset = point - self.pose.position;
        let u = offset.dot(self.pose.orientation * Vec3::X);
        let v = offset.dot(self.pose.orientation * Vec3::Z);
        u.abs() <= self.half_extent.x && v.abs() <= self.half_extent.y
    }

    fn hit_at(&self, ray: &Ray, t: f32, kind: HitKind, anchor: Option<AnchorRef>) -> HitCandidate {
        HitCandidate {
            kind,
            distance: t,
            pose: Pose {
                position: ray.at(t),
                orientation: self.pose.orientation,
            },
            anchor,
        }
    }
}

/// A store of tracked anchors and estimated patches that answers hit-test
/// queries for a fixed [`RayMapper`].
#[derive(Debug)]
pub struct PlaneScene<M: RayMapper> {
    mapper: M,
    anchors: Vec<PlaneSurface>,
    patches: Vec<PlaneSurface>,
}

impl<M: RayMapper> PlaneScene<M> {
    /// An empty scene using `mapper` for screen-to-world conversion.
    pub fn new(mapper: M) -> Self {
        Self {
            mapper,
            anchors: Vec::new(),
            patches: Vec::new(),
        }
    }

    /// Add a tracked plane anchor and return its handle.
    pub fn add_anchor(&mut self, surface: PlaneSurface) -> AnchorId {
        let id = AnchorId(u32::try_from(self.anchors.len()).unwrap_or(u32::MAX));
        self.anchors.push(surface);
        id
    }

    /// Add an estimated patch: a surface with no tracked anchor. Queries for
    /// the estimated kinds intersect against these.
    pub fn add_patch(&mut self, surface: PlaneSurface) {
        self.patches.push(surface);
    }

    /// Look up a tracked anchor.
    pub fn anchor(&self, id: AnchorId) -> Option<&PlaneSurface> {
        self.anchors.get(id.idx())
    }

    /// Replace a tracked anchor's surface, e.g. after the detector grows its
    /// observed extent.
    pub fn update_anchor(&mut self, id: AnchorId, surface: PlaneSurface) -> bool {
        match self.anchors.get_mut(id.idx()) {
            Some(slot) => {
                *slot = surface;
                true
            }
            None => false,
        }
    }
}

impl<M: RayMapper> HitProvider for PlaneScene<M> {
    fn query(&self, point: Point, kinds: KindFilter) -> Vec<HitCandidate> {
        let ray = self.mapper.ray_at(point);
        let mut out = Vec::new();

        for (i, surface) in self.anchors.iter().enumerate() {
            let Some(t) = surface.raycast(&ray) else {
                continue;
            };
            let anchor = Some(AnchorRef {
                id: AnchorId(u32::try_from(i).unwrap_or(u32::MAX)),
                alignment: surface.alignment,
            });
            if kinds.requests(HitKind::PlaneGeometry) && surface.contains(ray.at(t)) {
                out.push(surface.hit_at(&ray, t, HitKind::PlaneGeometry, anchor));
            }
            if kinds.requests(HitKind::InfinitePlane) {
                out.push(surface.hit_at(&ray, t, HitKind::InfinitePlane, anchor));
            }
        }

        for surface in &self.patches {
            let kind = match surface.alignment {
                PlaneAlignment::Horizontal => HitKind::EstimatedHorizontal,
                PlaneAlignment::Vertical => HitKind::EstimatedVertical,
            };
            if !kinds.requests(kind) {
                continue;
            }
            let Some(t) = surface.raycast(&ray) else {
                continue;
            };
            if surface.contains(ray.at(t)) {
                out.push(surface.hit_at(&ray, t, kind, None));
            }
        }

        // Nearest-first. Consumers may not rely on this, but it matches what
        // a tracking stack typically reports.
        out.sort_by(|a, b| a.distance.total_cmp(&b.distance));
        out
    }
}
