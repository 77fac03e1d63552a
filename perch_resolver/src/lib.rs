// Copyright 2026 the Perch Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=perch_resolver --heading-base-level=0

//! Perch Resolver: a deterministic, `no_std` placement policy for AR hit tests.
//!
//! ## Overview
//!
//! Given a 2D screen point and a set of alignment constraints, this crate
//! asks a [`HitProvider`](perch_hit::provider::HitProvider) for candidate
//! ray intersections and selects the single most plausible placement for a
//! virtual object, or none. It does not cast rays itself; feed it any
//! provider, such as [`perch_hit::scene::PlaneScene`] or a real tracking
//! stack behind the trait.
//!
//! ## Selection
//!
//! Three ordered tiers; the first match wins:
//!
//! 1. **Observed geometry** — a hit on the measured extent of a tracked
//!    plane whose alignment passes the request's filter.
//! 2. **Infinite planes** — opt-in via
//!    [`PlacementRequest::infinite_planes`](crate::types::PlacementRequest).
//!    A detector reports only the observed extent of a surface; dragging an
//!    object past that boundary should not hit a hard edge when the surface
//!    plainly continues. Vertical extensions match immediately. Horizontal
//!    extensions must lie within
//!    [`HORIZONTAL_SNAP_TOLERANCE`](crate::resolver::HORIZONTAL_SNAP_TOLERANCE)
//!    of the request's reference height when one is set, so an unrelated
//!    lower surface cannot capture the object.
//! 3. **Estimated surfaces** — the first horizontal and first vertical
//!    estimate stand for their kinds; the alignment filter arbitrates, with
//!    distance as the tie-break when both pass. A vertical-only request
//!    degrades to a horizontal estimate (an object meant for a wall can
//!    still sit flat), never the reverse.
//!
//! No match is a normal outcome, not an error: callers typically resolve
//! once per interaction frame and simply retry on the next one.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Size;
//! use perch_hit::provider::ScriptedHits;
//! use perch_hit::types::{HitCandidate, HitKind, Pose};
//! use perch_resolver::resolver::resolve;
//! use perch_resolver::types::PlacementRequest;
//!
//! let mut provider = ScriptedHits::new();
//! provider.push(HitCandidate {
//!     kind: HitKind::EstimatedHorizontal,
//!     distance: 1.2,
//!     pose: Pose::IDENTITY,
//!     anchor: None,
//! });
//!
//! let request = PlacementRequest::centered(Size::new(1920.0, 1080.0));
//! let placement = resolve(&request, &provider);
//! assert_eq!(placement.map(|p| p.kind), Some(HitKind::EstimatedHorizontal));
//! ```
//!
//! ## Concurrency
//!
//! `resolve` is synchronous, side-effect-free apart from the provider
//! queries, and keeps no state between calls. Identical requests against
//! identical provider answers return identical results, so it is safe to
//! call every rendering frame.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod resolver;
pub mod types;
