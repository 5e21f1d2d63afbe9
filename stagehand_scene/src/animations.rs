// Copyright 2025 the Stagehand Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Geometry-aware animation factories, named by physical direction.
//!
//! Each factory takes the current [`Viewport`] and returns a
//! [`PropertyInterpolatorSet`] describing one side of a transition. Derived
//! factories call a base factory and overlay specific keys (for example,
//! flipping the translate sign to point the opposite direction) without
//! touching the other properties.
//!
//! Direction-sensitive factories should be reached through
//! [`DirectionContext`](crate::DirectionContext) so logical start/end
//! semantics resolve against the text direction; the platform-specific
//! factories at the bottom of this module (bottom-sheet rise, Android fade)
//! are deliberately non-mirrored and are used directly.

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use stagehand_interpolate::{
    InterpolationSpec, PropertyInterpolatorSet, RangedSpec, StyleProperty, StyleValue, Vec3,
};

use crate::viewport::Viewport;

/// Fraction of the width that partial slides travel.
const PARTIAL_SLIDE_RATIO: f64 = 0.3;

/// A full-domain linear range snapped to the device pixel grid.
fn pixel_snapped(
    from: impl Into<StyleValue>,
    to: impl Into<StyleValue>,
    vp: Viewport,
) -> RangedSpec {
    RangedSpec {
        extrapolate: true,
        round: Some(vp.pixel_ratio),
        ..RangedSpec::new(from, to)
    }
}

/// Slide 30% of the width to the left, opacity held.
#[must_use]
pub fn to_the_left_ios(vp: Viewport) -> PropertyInterpolatorSet {
    PropertyInterpolatorSet::new()
        .with(
            StyleProperty::TransformTranslate,
            pixel_snapped(
                Vec3::ZERO,
                Vec3::new(-vp.width() * PARTIAL_SLIDE_RATIO, 0.0, 0.0),
                vp,
            ),
        )
        .with(StyleProperty::Opacity, InterpolationSpec::constant(1.0))
}

/// Slide 30% of the width to the right, opacity held.
#[must_use]
pub fn to_the_right_ios(vp: Viewport) -> PropertyInterpolatorSet {
    to_the_left_ios(vp).with(
        StyleProperty::TransformTranslate,
        pixel_snapped(
            Vec3::ZERO,
            Vec3::new(vp.width() * PARTIAL_SLIDE_RATIO, 0.0, 0.0),
            vp,
        ),
    )
}

/// Recede to the left: 30% slide, scale down to 0.95, fade to 0.3.
#[must_use]
pub fn fade_to_the_left(vp: Viewport) -> PropertyInterpolatorSet {
    let shift = (vp.width() * PARTIAL_SLIDE_RATIO).round();
    PropertyInterpolatorSet::new()
        .with(
            StyleProperty::TransformTranslate,
            pixel_snapped(Vec3::ZERO, Vec3::new(-shift, 0.0, 0.0), vp),
        )
        .with(
            StyleProperty::TransformScale,
            RangedSpec {
                extrapolate: true,
                ..RangedSpec::new(Vec3::splat(1.0), Vec3::new(0.95, 0.95, 1.0))
            },
        )
        .with(
            StyleProperty::Opacity,
            RangedSpec {
                round: Some(100.0),
                ..RangedSpec::new(1.0, 0.3)
            },
        )
        .with(StyleProperty::TranslateX, pixel_snapped(0.0, -shift, vp))
        .with(
            StyleProperty::ScaleX,
            RangedSpec {
                extrapolate: true,
                ..RangedSpec::new(1.0, 0.95)
            },
        )
        .with(
            StyleProperty::ScaleY,
            RangedSpec {
                extrapolate: true,
                ..RangedSpec::new(1.0, 0.95)
            },
        )
}

/// Recede to the right: mirrored [`fade_to_the_left`].
#[must_use]
pub fn fade_to_the_right(vp: Viewport) -> PropertyInterpolatorSet {
    let shift = (vp.width() * PARTIAL_SLIDE_RATIO).round();
    fade_to_the_left(vp)
        .with(
            StyleProperty::TransformTranslate,
            pixel_snapped(Vec3::ZERO, Vec3::new(shift, 0.0, 0.0), vp),
        )
        .with(StyleProperty::TranslateX, pixel_snapped(0.0, shift, vp))
}

/// Fade in over the second half of the transition.
#[must_use]
pub fn fade_in(_vp: Viewport) -> PropertyInterpolatorSet {
    PropertyInterpolatorSet::new().with(
        StyleProperty::Opacity,
        RangedSpec {
            min: 0.5,
            max: 1.0,
            round: Some(100.0),
            ..RangedSpec::new(0.0, 1.0)
        },
    )
}

/// Fade out over the first half of the transition.
#[must_use]
pub fn fade_out(_vp: Viewport) -> PropertyInterpolatorSet {
    PropertyInterpolatorSet::new().with(
        StyleProperty::Opacity,
        RangedSpec {
            min: 0.0,
            max: 0.5,
            round: Some(100.0),
            ..RangedSpec::new(1.0, 0.0)
        },
    )
}

/// Slide a full width to the left.
#[must_use]
pub fn to_the_left(vp: Viewport) -> PropertyInterpolatorSet {
    PropertyInterpolatorSet::new()
        .with(
            StyleProperty::TransformTranslate,
            pixel_snapped(Vec3::ZERO, Vec3::new(-vp.width(), 0.0, 0.0), vp),
        )
        .with(StyleProperty::Opacity, InterpolationSpec::constant(1.0))
        .with(StyleProperty::TranslateX, pixel_snapped(0.0, -vp.width(), vp))
}

/// Slide a full width to the right.
#[must_use]
pub fn to_the_right(vp: Viewport) -> PropertyInterpolatorSet {
    to_the_left(vp)
        .with(
            StyleProperty::TransformTranslate,
            pixel_snapped(Vec3::ZERO, Vec3::new(vp.width(), 0.0, 0.0), vp),
        )
        .with(StyleProperty::TranslateX, pixel_snapped(0.0, vp.width(), vp))
}

/// Slide a full height upward.
#[must_use]
pub fn to_the_up(vp: Viewport) -> PropertyInterpolatorSet {
    PropertyInterpolatorSet::new()
        .with(
            StyleProperty::TransformTranslate,
            pixel_snapped(Vec3::ZERO, Vec3::new(0.0, -vp.height(), 0.0), vp),
        )
        .with(StyleProperty::Opacity, InterpolationSpec::constant(1.0))
        .with(StyleProperty::TranslateY, pixel_snapped(0.0, -vp.height(), vp))
}

/// Slide a full height downward.
#[must_use]
pub fn to_the_down(vp: Viewport) -> PropertyInterpolatorSet {
    to_the_up(vp)
        .with(
            StyleProperty::TransformTranslate,
            pixel_snapped(Vec3::ZERO, Vec3::new(0.0, vp.height(), 0.0), vp),
        )
        .with(StyleProperty::TranslateY, pixel_snapped(0.0, vp.height(), vp))
}

/// Enter from beyond the right edge.
#[must_use]
pub fn from_the_right(vp: Viewport) -> PropertyInterpolatorSet {
    PropertyInterpolatorSet::new()
        .with(StyleProperty::Opacity, InterpolationSpec::constant(1.0))
        .with(
            StyleProperty::TransformTranslate,
            pixel_snapped(Vec3::new(vp.width(), 0.0, 0.0), Vec3::ZERO, vp),
        )
        .with(StyleProperty::TranslateX, pixel_snapped(vp.width(), 0.0, vp))
        .with(StyleProperty::ScaleX, InterpolationSpec::constant(1.0))
        .with(StyleProperty::ScaleY, InterpolationSpec::constant(1.0))
}

/// Enter from beyond the left edge.
#[must_use]
pub fn from_the_left(vp: Viewport) -> PropertyInterpolatorSet {
    from_the_right(vp)
        .with(
            StyleProperty::TransformTranslate,
            pixel_snapped(Vec3::new(-vp.width(), 0.0, 0.0), Vec3::ZERO, vp),
        )
        .with(StyleProperty::TranslateX, pixel_snapped(-vp.width(), 0.0, vp))
}

/// Enter from below the bottom edge.
#[must_use]
pub fn from_the_down(vp: Viewport) -> PropertyInterpolatorSet {
    from_the_right(vp)
        .with(
            StyleProperty::TransformTranslate,
            pixel_snapped(Vec3::new(0.0, vp.height(), 0.0), Vec3::ZERO, vp),
        )
        .with(StyleProperty::TranslateY, pixel_snapped(vp.height(), 0.0, vp))
}

/// Enter from above the top edge.
#[must_use]
pub fn from_the_top(vp: Viewport) -> PropertyInterpolatorSet {
    from_the_right(vp)
        .with(
            StyleProperty::TransformTranslate,
            pixel_snapped(Vec3::new(0.0, -vp.height(), 0.0), Vec3::ZERO, vp),
        )
        .with(StyleProperty::TranslateY, pixel_snapped(-vp.height(), 0.0, vp))
}

/// Recede in place: scale down to 0.95 and fade to 0.3 without moving.
#[must_use]
pub fn to_the_back(vp: Viewport) -> PropertyInterpolatorSet {
    PropertyInterpolatorSet::new()
        .with(
            StyleProperty::TransformTranslate,
            pixel_snapped(Vec3::ZERO, Vec3::ZERO, vp),
        )
        .with(
            StyleProperty::TransformScale,
            RangedSpec {
                extrapolate: true,
                ..RangedSpec::new(Vec3::splat(1.0), Vec3::new(0.95, 0.95, 1.0))
            },
        )
        .with(
            StyleProperty::Opacity,
            RangedSpec {
                round: Some(100.0),
                ..RangedSpec::new(1.0, 0.3)
            },
        )
        .with(
            StyleProperty::ScaleX,
            RangedSpec {
                extrapolate: true,
                ..RangedSpec::new(1.0, 0.95)
            },
        )
        .with(
            StyleProperty::ScaleY,
            RangedSpec {
                extrapolate: true,
                ..RangedSpec::new(1.0, 0.95)
            },
        )
}

/// Rise from the bottom of the screen, opacity held.
#[must_use]
pub fn from_the_front(vp: Viewport) -> PropertyInterpolatorSet {
    PropertyInterpolatorSet::new()
        .with(StyleProperty::Opacity, InterpolationSpec::constant(1.0))
        .with(
            StyleProperty::TransformTranslate,
            pixel_snapped(Vec3::new(0.0, vp.height(), 0.0), Vec3::ZERO, vp),
        )
        .with(StyleProperty::TranslateY, pixel_snapped(vp.height(), 0.0, vp))
        .with(StyleProperty::ScaleX, InterpolationSpec::constant(1.0))
        .with(StyleProperty::ScaleY, InterpolationSpec::constant(1.0))
}

/// The Android recede: hold in place at full opacity.
#[must_use]
pub fn to_the_back_android(_vp: Viewport) -> PropertyInterpolatorSet {
    PropertyInterpolatorSet::new().with(StyleProperty::Opacity, InterpolationSpec::constant(1.0))
}

/// The Android entry: a short 100-unit rise with a late fade-in.
#[must_use]
pub fn from_the_front_android(vp: Viewport) -> PropertyInterpolatorSet {
    PropertyInterpolatorSet::new()
        .with(
            StyleProperty::Opacity,
            RangedSpec {
                min: 0.5,
                max: 1.0,
                round: Some(100.0),
                ..RangedSpec::new(0.0, 1.0)
            },
        )
        .with(
            StyleProperty::TransformTranslate,
            pixel_snapped(Vec3::new(0.0, 100.0, 0.0), Vec3::ZERO, vp),
        )
        .with(StyleProperty::TranslateY, pixel_snapped(100.0, 0.0, vp))
}
