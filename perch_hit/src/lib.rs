// Copyright 2026 the Perch Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=perch_hit --heading-base-level=0

//! Perch Hit: the hit-test data model for AR placement.
//!
//! Perch Hit defines what a hit-test answer looks like and who can produce
//! one. It is the provider side of the Perch pair; the policy side is
//! `perch_resolver`, which ranks these answers into a single placement.
//!
//! - Candidate kinds, plane alignments, filters, poses, and anchors live in
//!   [`types`].
//! - The [`provider::HitProvider`] trait is the seam to the tracking stack
//!   that actually casts rays; [`provider::ScriptedHits`] replays canned
//!   answers for tests and benches.
//! - [`scene::PlaneScene`] is a small self-contained provider over stored
//!   planes, enough to run the demos without a tracking stack. It is planes
//!   only, not a collision engine.
//!
//! ## Conventions
//!
//! - Screen space is `f64` via [`kurbo::Point`]; world space is `f32` via
//!   [`glam`]. Distances are meters.
//! - Candidate order within a query answer is implementation-defined.
//!   Consumers scan explicitly and must not assume a sort.
//! - Everything is per-call plain data: no retained state, no interior
//!   mutability, no cross-frame sharing.
//!
//! ## Minimal usage
//!
//! ```
//! use perch_hit::provider::{HitProvider, ScriptedHits};
//! use perch_hit::types::{HitCandidate, HitKind, KindFilter, Pose};
//!
//! let mut script = ScriptedHits::new();
//! script.push(HitCandidate {
//!     kind: HitKind::EstimatedHorizontal,
//!     distance: 1.2,
//!     pose: Pose::IDENTITY,
//!     anchor: None,
//! });
//!
//! let out = script.query(kurbo::Point::ZERO, KindFilter::PRIMARY);
//! assert_eq!(out.len(), 1);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod provider;
pub mod scene;
pub mod types;
