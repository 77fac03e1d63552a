// Copyright 2026 the Perch Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use glam::{Vec2, Vec3};
use kurbo::{Point, Size};
use perch_hit::provider::ScriptedHits;
use perch_hit::scene::{AnchorId, PlaneScene, PlaneSurface, Ray, RayMapper};
use perch_hit::types::{AnchorRef, HitCandidate, HitKind, PlaneAlignment, Pose};
use perch_resolver::resolver::resolve;
use perch_resolver::types::PlacementRequest;

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
    fn next_f32(&mut self) -> f32 {
        let v = self.next_u64() >> 40;
        (v as f32) / ((1u64 << 24) as f32)
    }
}

fn estimated(rng: &mut Rng, kind: HitKind) -> HitCandidate {
    let d = 0.5 + rng.next_f32() * 4.0;
    HitCandidate {
        kind,
        distance: d,
        pose: Pose::from_position(Vec3::new(0.0, rng.next_f32(), -d)),
        anchor: None,
    }
}

fn infinite(rng: &mut Rng, i: u32, y: f32) -> HitCandidate {
    HitCandidate {
        kind: HitKind::InfinitePlane,
        distance: 1.0 + rng.next_f32(),
        pose: Pose::from_position(Vec3::new(0.0, y, 0.0)),
        anchor: Some(AnchorRef {
            id: AnchorId::new(i),
            alignment: PlaneAlignment::Horizontal,
        }),
    }
}

/// A frame where only estimates exist: the resolver scans the whole primary
/// list twice in Tier 3.
fn estimate_only_frame(n: usize) -> ScriptedHits {
    let mut rng = Rng::new(0x5eed);
    let mut hits = Vec::with_capacity(n);
    for i in 0..n {
        let kind = if i % 2 == 0 {
            HitKind::EstimatedHorizontal
        } else {
            HitKind::EstimatedVertical
        };
        hits.push(estimated(&mut rng, kind));
    }
    ScriptedHits::from_hits(hits)
}

/// A frame where every infinite plane misses the snap band, forcing a full
/// Tier 2 scan before the estimated fallback.
fn band_miss_frame(n: usize) -> ScriptedHits {
    let mut rng = Rng::new(0xfeed);
    let mut hits = Vec::with_capacity(n + 1);
    for i in 0..n {
        // All well below the 1.0 m reference height used by the request.
        hits.push(infinite(&mut rng, i as u32, 0.1));
    }
    hits.push(estimated(&mut rng, HitKind::EstimatedHorizontal));
    ScriptedHits::from_hits(hits)
}

fn bench_resolve(c: &mut Criterion) {
    let viewport = Size::new(1920.0, 1080.0);

    let mut group = c.benchmark_group("resolve/estimates_only");
    for n in [4usize, 64, 512] {
        let provider = estimate_only_frame(n);
        let request = PlacementRequest::centered(viewport);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, _| {
            b.iter(|| black_box(resolve(black_box(&request), &provider)));
        });
    }
    group.finish();

    let mut group = c.benchmark_group("resolve/infinite_band_miss");
    for n in [4usize, 64, 512] {
        let provider = band_miss_frame(n);
        let mut request = PlacementRequest::centered(viewport);
        request.set_infinite_planes(true);
        request.set_reference_height(Some(1.0));
        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, _| {
            b.iter(|| black_box(resolve(black_box(&request), &provider)));
        });
    }
    group.finish();
}

struct Overhead;

impl RayMapper for Overhead {
    fn ray_at(&self, point: Point) -> Ray {
        #[allow(
            clippy::cast_possible_truncation,
            reason = "screen coordinates are far below f32 range"
        )]
        let origin = Vec3::new((point.x / 100.0) as f32, 5.0, (point.y / 100.0) as f32);
        Ray {
            origin,
            direction: Vec3::NEG_Y,
        }
    }
}

fn bench_scene(c: &mut Criterion) {
    let mut group = c.benchmark_group("scene/resolve");
    for n in [4usize, 64, 512] {
        let mut rng = Rng::new(0xb0a7);
        let mut scene = PlaneScene::new(Overhead);
        for _ in 0..n {
            let y = rng.next_f32() * 2.0;
            let x = rng.next_f32() * 10.0;
            scene.add_anchor(PlaneSurface::horizontal(
                Vec3::new(x, y, 0.0),
                Vec2::splat(0.4),
            ));
        }
        let mut request = PlacementRequest::centered(Size::new(1000.0, 1000.0));
        request.set_infinite_planes(true);
        request.set_reference_height(Some(1.0));
        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, _| {
            b.iter(|| black_box(resolve(black_box(&request), &scene)));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_resolve, bench_scene);
criterion_main!(benches);
