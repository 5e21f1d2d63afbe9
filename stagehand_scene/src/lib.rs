// Copyright 2025 the Stagehand Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Stagehand Scene: named transition presets for stacked navigation UIs.
//!
//! ## Overview
//!
//! This crate assembles complete, immutable [`TransitionConfig`] values — the
//! spring parameters, gesture set, and compiled style interpolators for one
//! scene transition. It is the top layer over
//! [`stagehand_interpolate`] (keyframe specs and evaluators) and
//! [`stagehand_gesture`] (swipe thresholds), and it is where logical
//! start/end semantics resolve against the text direction.
//!
//! ## Inputs
//!
//! Hosts inject all geometry: a [`Viewport`] (current size plus the device
//! pixel ratio used as the translate rounding quantum) queried fresh at
//! composition time, and a [`DirectionContext`] built once from the locale's
//! [`LayoutDirection`]. Nothing is cached here — composing after a rotation
//! or layout-direction change just means passing new inputs.
//!
//! ## Composition
//!
//! [`compose`] starts every preset from [`TransitionConfig::base`] and
//! replaces `gestures` and/or `animation_interpolators` wholesale per
//! preset. Thirteen presets are exported, from iOS-style edge pushes through
//! Android fades to bidirectional swipe-jump navigation; see [`ScenePreset`].
//! Composed gestures are validated against the viewport — a preset with a
//! broken full-distance invariant fails with [`ConfigurationError`] instead
//! of being exported.
//!
//! ```rust
//! use kurbo::Size;
//! use stagehand_scene::{
//!     DirectionContext, LayoutDirection, ScenePreset, Viewport, compose,
//! };
//!
//! let ctx = DirectionContext::new(LayoutDirection::Ltr);
//! let vp = Viewport::new(Size::new(320.0, 640.0), 2.0);
//!
//! let config = compose(ScenePreset::PushFromRight, &ctx, vp)?;
//! assert_eq!(config.spring_friction, 26.0);
//!
//! // The host feeds animation progress into the compiled evaluators and
//! // applies the snapshots to its views each frame.
//! let snapshot = config.animation_interpolators.into.evaluate(0.5);
//! assert!(!snapshot.is_empty());
//! # Ok::<(), stagehand_scene::ConfigurationError>(())
//! ```
//!
//! ## Scope
//!
//! No rendering, no touch capture, no spring integration. The host runtime
//! owns the transition state machine (idle → gesture-tracking → settling →
//! committed/cancelled) and consumes these configs as static parameters for
//! the duration of one transition.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod animations;
mod config;
mod direction;
mod viewport;

pub use config::{
    AnimationInterpolators, ConfigurationError, GestureKind, Gestures, ScenePreset,
    TransitionConfig, compose, compose_all,
};
pub use direction::{DirectionContext, LayoutDirection, LogicalAnimation, LogicalGesture};
pub use viewport::Viewport;
