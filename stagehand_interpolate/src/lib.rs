// Copyright 2025 the Stagehand Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Stagehand Interpolate: declarative keyframe specs compiled into pure evaluators.
//!
//! This crate provides the value model for scene-transition animations: each
//! animatable style property (opacity, translation, scale, rotation) is
//! described by an [`InterpolationSpec`] — either a constant or a `from → to`
//! range over a progress domain — and a [`PropertyInterpolatorSet`] collects
//! one spec per property. [`StyleInterpolator::compile`] turns a set into a
//! pure `progress → StyleSnapshot` evaluator.
//!
//! The crate deliberately knows nothing about views, frames, or touch input.
//! Host runtimes are responsible for:
//!
//! - driving an animation clock (or a gesture) that produces `progress` values,
//! - calling [`StyleInterpolator::evaluate`] once per frame, and
//! - applying the returned [`StyleSnapshot`] to actual view transforms.
//!
//! ## Evaluation rules
//!
//! For a ranged spec, progress is first clamped to `[min, max]` unless
//! `extrapolate` is set, then mapped linearly from `[min, max]` onto
//! `[from, to]` (component-wise for vector values). An optional rounding
//! quantum snaps the output to multiples of `1/quantum`, e.g. the device
//! pixel ratio for translations or `100` for opacity steps of `0.01`.
//!
//! A degenerate range (`min == max`) always yields `to`; the compiler records
//! a [`CompileWarning::DegenerateRange`] so preset authors can catch
//! accidental zero-width ranges via [`StyleInterpolator::warnings`].
//!
//! Non-finite progress never reaches visible output: `NaN` and `-inf` clamp
//! to `min`, `+inf` clamps to `max`.
//!
//! ## Minimal example
//!
//! ```rust
//! use stagehand_interpolate::{
//!     InterpolationSpec, PropertyInterpolatorSet, RangedSpec, StyleInterpolator,
//!     StyleProperty, StyleValue,
//! };
//!
//! let set = PropertyInterpolatorSet::new()
//!     .with(
//!         StyleProperty::Opacity,
//!         InterpolationSpec::Ranged(RangedSpec::new(1.0, 0.0)),
//!     )
//!     .with(StyleProperty::ScaleX, InterpolationSpec::constant(1.0));
//!
//! let interpolator = StyleInterpolator::compile(&set);
//! let snapshot = interpolator.evaluate(0.5);
//! assert_eq!(snapshot.get(StyleProperty::Opacity), Some(StyleValue::Scalar(0.5)));
//! assert_eq!(snapshot.get(StyleProperty::ScaleX), Some(StyleValue::Scalar(1.0)));
//! ```
//!
//! Evaluators are plain data (`Clone + PartialEq`), reentrant, and share no
//! state: evaluating the same progress twice yields bit-identical snapshots,
//! and two evaluators never observe each other.
//!
//! This crate is `no_std` and uses `alloc`.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

mod interpolator;
mod spec;

pub use interpolator::{CompileWarning, StyleInterpolator, StyleSnapshot};
pub use spec::{
    Curve, InterpolationSpec, PropertyInterpolatorSet, RangedSpec, StyleProperty, StyleValue, Vec3,
};
