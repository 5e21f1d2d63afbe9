// Copyright 2025 the Stagehand Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Spec types: style properties, values, and keyframe range descriptors.

use hashbrown::HashMap;

/// A 3-component vector value, used for translate/scale/rotate properties.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Vec3 {
    /// X component.
    pub x: f64,
    /// Y component.
    pub y: f64,
    /// Z component.
    pub z: f64,
}

impl Vec3 {
    /// The zero vector.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    /// Creates a new vector.
    #[must_use]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// A vector with all three components set to `v`.
    #[must_use]
    pub const fn splat(v: f64) -> Self {
        Self::new(v, v, v)
    }
}

/// A style value: either a scalar or a 3-component vector.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum StyleValue {
    /// A scalar property value (opacity, `translateX`, ...).
    Scalar(f64),
    /// A vector property value (`transformTranslate`, `transformScale`, ...).
    Vector(Vec3),
}

impl StyleValue {
    /// Returns `true` if both values have the same shape (scalar/vector).
    #[must_use]
    pub const fn same_shape(&self, other: &Self) -> bool {
        matches!(
            (self, other),
            (Self::Scalar(_), Self::Scalar(_)) | (Self::Vector(_), Self::Vector(_))
        )
    }

    /// Applies `f` to every component of the value.
    #[must_use]
    pub fn map(self, mut f: impl FnMut(f64) -> f64) -> Self {
        match self {
            Self::Scalar(v) => Self::Scalar(f(v)),
            Self::Vector(v) => Self::Vector(Vec3::new(f(v.x), f(v.y), f(v.z))),
        }
    }
}

impl From<f64> for StyleValue {
    fn from(v: f64) -> Self {
        Self::Scalar(v)
    }
}

impl From<Vec3> for StyleValue {
    fn from(v: Vec3) -> Self {
        Self::Vector(v)
    }
}

/// Progress-to-output mapping curve for a ranged spec.
///
/// Only linear mapping exists today; the enum leaves room for eased curves
/// without changing the spec shape.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Curve {
    /// Straight-line mapping from the progress domain onto `[from, to]`.
    #[default]
    Linear,
}

/// A `from → to` keyframe range over a progress domain.
///
/// `min`/`max` bound the progress domain (nominally within `[0, 1]`, not
/// enforced). With `extrapolate` set, progress outside `[min, max]` continues
/// the linear trend past `from`/`to`; otherwise output is clamped to the
/// range. `round` is an optional quantum `q` snapping output to multiples of
/// `1/q`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RangedSpec {
    /// Output value at `min` progress.
    pub from: StyleValue,
    /// Output value at `max` progress.
    pub to: StyleValue,
    /// Start of the progress domain.
    pub min: f64,
    /// End of the progress domain.
    pub max: f64,
    /// Mapping curve.
    pub curve: Curve,
    /// Allow output outside `[from, to]` when progress is outside `[min, max]`.
    pub extrapolate: bool,
    /// Optional rounding quantum; output snaps to multiples of `1/round`.
    pub round: Option<f64>,
}

impl RangedSpec {
    /// Creates a linear range over the full `[0, 1]` progress domain with no
    /// extrapolation and no rounding.
    ///
    /// Use struct update syntax to adjust the remaining fields:
    ///
    /// ```rust
    /// use stagehand_interpolate::RangedSpec;
    ///
    /// let spec = RangedSpec {
    ///     extrapolate: true,
    ///     round: Some(2.0),
    ///     ..RangedSpec::new(0.0, -320.0)
    /// };
    /// assert_eq!(spec.min, 0.0);
    /// assert_eq!(spec.max, 1.0);
    /// ```
    ///
    /// `from` and `to` must have the same shape; a mixed scalar/vector range
    /// is reported by the compiler as a diagnostic and evaluates as a
    /// constant `to`.
    #[must_use]
    pub fn new(from: impl Into<StyleValue>, to: impl Into<StyleValue>) -> Self {
        let (from, to) = (from.into(), to.into());
        debug_assert!(
            from.same_shape(&to),
            "RangedSpec from/to shape mismatch: {from:?} vs {to:?}"
        );
        Self {
            from,
            to,
            min: 0.0,
            max: 1.0,
            curve: Curve::Linear,
            extrapolate: false,
            round: None,
        }
    }
}

/// How one style property evolves over progress.
///
/// Exactly one variant is active per spec; a constant never carries range
/// data and a range never carries a fixed value.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum InterpolationSpec {
    /// A fixed value, ignoring progress entirely.
    Constant {
        /// The emitted value.
        value: StyleValue,
    },
    /// A keyframe range mapped over progress.
    Ranged(RangedSpec),
}

impl InterpolationSpec {
    /// Creates a constant spec.
    #[must_use]
    pub fn constant(value: impl Into<StyleValue>) -> Self {
        Self::Constant {
            value: value.into(),
        }
    }
}

impl From<RangedSpec> for InterpolationSpec {
    fn from(spec: RangedSpec) -> Self {
        Self::Ranged(spec)
    }
}

/// The animatable style property keys.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StyleProperty {
    /// Scene opacity (scalar).
    Opacity,
    /// Full transform translation (vector).
    TransformTranslate,
    /// Full transform scale (vector).
    TransformScale,
    /// Euler rotation in radians (vector).
    TransformRotateRadians,
    /// Horizontal translation (scalar).
    TranslateX,
    /// Vertical translation (scalar).
    TranslateY,
    /// Horizontal scale (scalar).
    ScaleX,
    /// Vertical scale (scalar).
    ScaleY,
}

impl StyleProperty {
    /// The property's style-sheet name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Opacity => "opacity",
            Self::TransformTranslate => "transformTranslate",
            Self::TransformScale => "transformScale",
            Self::TransformRotateRadians => "transformRotateRadians",
            Self::TranslateX => "translateX",
            Self::TranslateY => "translateY",
            Self::ScaleX => "scaleX",
            Self::ScaleY => "scaleY",
        }
    }
}

/// A property-name → spec mapping describing one side of a transition.
///
/// Keys are unique and order-irrelevant. Sets compose by shallow overlay:
/// replacing one property's spec leaves every other property untouched,
/// which is how derived animation factories reuse a base factory while
/// substituting e.g. the translate direction.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PropertyInterpolatorSet {
    specs: HashMap<StyleProperty, InterpolationSpec>,
}

impl PropertyInterpolatorSet {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self {
            specs: HashMap::new(),
        }
    }

    /// Inserts or replaces the spec for `property`, consuming and returning
    /// the set for declarative construction.
    #[must_use]
    pub fn with(mut self, property: StyleProperty, spec: impl Into<InterpolationSpec>) -> Self {
        self.set(property, spec);
        self
    }

    /// Inserts or replaces the spec for `property`.
    pub fn set(&mut self, property: StyleProperty, spec: impl Into<InterpolationSpec>) {
        self.specs.insert(property, spec.into());
    }

    /// Returns the spec for `property`, if present.
    #[must_use]
    pub fn get(&self, property: StyleProperty) -> Option<&InterpolationSpec> {
        self.specs.get(&property)
    }

    /// Overlays `patch` onto this set: every key present in `patch` replaces
    /// the corresponding spec wholesale; keys absent from `patch` are kept.
    #[must_use]
    pub fn overlay(mut self, patch: &Self) -> Self {
        for (&property, spec) in patch.iter() {
            self.specs.insert(property, *spec);
        }
        self
    }

    /// Number of properties in the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.specs.len()
    }

    /// Returns `true` if the set has no properties.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }

    /// Iterates over `(property, spec)` pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&StyleProperty, &InterpolationSpec)> {
        self.specs.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ranged_defaults_cover_unit_domain() {
        let spec = RangedSpec::new(0.0, 1.0);
        assert_eq!(spec.min, 0.0);
        assert_eq!(spec.max, 1.0);
        assert_eq!(spec.curve, Curve::Linear);
        assert!(!spec.extrapolate);
        assert!(spec.round.is_none());
    }

    #[test]
    fn style_value_conversions() {
        assert_eq!(StyleValue::from(0.5), StyleValue::Scalar(0.5));
        assert_eq!(
            StyleValue::from(Vec3::new(1.0, 2.0, 3.0)),
            StyleValue::Vector(Vec3::new(1.0, 2.0, 3.0))
        );
        assert!(StyleValue::Scalar(1.0).same_shape(&StyleValue::Scalar(2.0)));
        assert!(!StyleValue::Scalar(1.0).same_shape(&StyleValue::Vector(Vec3::ZERO)));
    }

    #[test]
    fn overlay_replaces_only_patched_keys() {
        let base = PropertyInterpolatorSet::new()
            .with(StyleProperty::Opacity, InterpolationSpec::constant(1.0))
            .with(
                StyleProperty::TranslateX,
                RangedSpec::new(0.0, -100.0),
            );
        let patch = PropertyInterpolatorSet::new().with(
            StyleProperty::TranslateX,
            RangedSpec::new(0.0, 100.0),
        );

        let merged = base.clone().overlay(&patch);

        // Patched key replaced wholesale.
        assert_eq!(
            merged.get(StyleProperty::TranslateX),
            Some(&InterpolationSpec::Ranged(RangedSpec::new(0.0, 100.0)))
        );
        // Unpatched key untouched.
        assert_eq!(
            merged.get(StyleProperty::Opacity),
            base.get(StyleProperty::Opacity)
        );
        assert_eq!(merged.len(), 2);
    }

    #[test]
    fn with_replaces_existing_key() {
        let set = PropertyInterpolatorSet::new()
            .with(StyleProperty::Opacity, InterpolationSpec::constant(1.0))
            .with(StyleProperty::Opacity, InterpolationSpec::constant(0.5));
        assert_eq!(set.len(), 1);
        assert_eq!(
            set.get(StyleProperty::Opacity),
            Some(&InterpolationSpec::constant(0.5))
        );
    }
}
