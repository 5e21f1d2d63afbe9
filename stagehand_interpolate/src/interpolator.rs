// Copyright 2025 the Stagehand Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Compiling property spec sets into pure `progress → snapshot` evaluators.

use alloc::vec::Vec;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use smallvec::SmallVec;

use crate::spec::{
    InterpolationSpec, PropertyInterpolatorSet, RangedSpec, StyleProperty, StyleValue, Vec3,
};

/// Non-fatal diagnostics recorded while compiling a spec set.
///
/// Warnings never prevent compilation; the affected spec gets a defined
/// fallback instead. They exist so preset authors notice accidental
/// zero-width ranges or mixed-shape keyframes.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CompileWarning {
    /// A ranged spec has `min == max`; it evaluates as a constant `to`.
    DegenerateRange {
        /// The property whose range is zero-width.
        property: StyleProperty,
    },
    /// A ranged spec mixes scalar and vector endpoints; it evaluates as a
    /// constant `to`.
    MismatchedShape {
        /// The property whose endpoints disagree in shape.
        property: StyleProperty,
    },
}

/// The evaluated style values for one progress position.
///
/// Property order is fixed by the compiled interpolator (sorted by
/// [`StyleProperty`]), so snapshots from the same evaluator compare and
/// iterate deterministically. Storage is inline for the known property count;
/// evaluation does not allocate.
#[derive(Clone, Debug, PartialEq)]
pub struct StyleSnapshot {
    values: SmallVec<[(StyleProperty, StyleValue); 8]>,
}

impl StyleSnapshot {
    /// Returns the evaluated value for `property`, if the compiled set
    /// contains it.
    #[must_use]
    pub fn get(&self, property: StyleProperty) -> Option<StyleValue> {
        self.values
            .iter()
            .find(|(p, _)| *p == property)
            .map(|(_, v)| *v)
    }

    /// Iterates over `(property, value)` pairs in property order.
    pub fn iter(&self) -> impl Iterator<Item = (StyleProperty, StyleValue)> + '_ {
        self.values.iter().copied()
    }

    /// Number of evaluated properties.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if the snapshot holds no properties.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// A compiled, pure `progress → StyleSnapshot` evaluator.
///
/// Compiling sorts the entries by property, so two interpolators compiled
/// from equal sets are equal and evaluate identically. The evaluator holds
/// no mutable state: it can be shared across concurrently running
/// transitions and called once per animation frame.
#[derive(Clone, Debug, PartialEq)]
pub struct StyleInterpolator {
    entries: Vec<(StyleProperty, InterpolationSpec)>,
    warnings: Vec<CompileWarning>,
}

impl StyleInterpolator {
    /// Compiles `specs` into an evaluator.
    ///
    /// Degenerate and mixed-shape ranges are accepted with a defined
    /// fallback and reported via [`warnings`](Self::warnings).
    #[must_use]
    pub fn compile(specs: &PropertyInterpolatorSet) -> Self {
        let mut entries: Vec<(StyleProperty, InterpolationSpec)> =
            specs.iter().map(|(&p, &s)| (p, s)).collect();
        entries.sort_unstable_by_key(|(property, _)| *property);

        let mut warnings = Vec::new();
        for (property, spec) in &entries {
            if let InterpolationSpec::Ranged(ranged) = spec {
                if !ranged.from.same_shape(&ranged.to) {
                    warnings.push(CompileWarning::MismatchedShape {
                        property: *property,
                    });
                } else if ranged.max == ranged.min {
                    warnings.push(CompileWarning::DegenerateRange {
                        property: *property,
                    });
                }
            }
        }

        Self { entries, warnings }
    }

    /// Evaluates every property at `progress`.
    ///
    /// Non-finite progress clamps per ranged spec: `NaN` and `-inf` to
    /// `min`, `+inf` to `max`. Constant specs ignore progress entirely.
    #[must_use]
    pub fn evaluate(&self, progress: f64) -> StyleSnapshot {
        let values = self
            .entries
            .iter()
            .map(|(property, spec)| {
                let value = match spec {
                    InterpolationSpec::Constant { value } => *value,
                    InterpolationSpec::Ranged(ranged) => eval_ranged(ranged, progress),
                };
                (*property, value)
            })
            .collect();
        StyleSnapshot { values }
    }

    /// Diagnostics recorded at compile time, in property order.
    #[must_use]
    pub fn warnings(&self) -> &[CompileWarning] {
        &self.warnings
    }

    /// Number of compiled properties.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no properties were compiled.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Evaluates one ranged spec at `progress`.
fn eval_ranged(spec: &RangedSpec, progress: f64) -> StyleValue {
    // Never let NaN/inf reach visible output: clamp to the nearest finite
    // domain bound (NaN has no nearest bound; it resolves to `min`).
    let progress = if progress.is_nan() || progress == f64::NEG_INFINITY {
        spec.min
    } else if progress == f64::INFINITY {
        spec.max
    } else {
        progress
    };

    // Zero-width domain: the limit of the linear map is `to`.
    if spec.max == spec.min {
        return snap(spec.to, spec.round);
    }

    // A mixed-shape range has no meaningful linear map; fall back to `to`.
    if !spec.from.same_shape(&spec.to) {
        return snap(spec.to, spec.round);
    }

    let t = if spec.extrapolate {
        progress
    } else {
        // Manual clamp: `min`/`max` are caller data and f64::clamp panics on
        // an inverted range.
        progress.max(spec.min).min(spec.max)
    };
    let k = (t - spec.min) / (spec.max - spec.min);

    let value = match (spec.from, spec.to) {
        (StyleValue::Scalar(from), StyleValue::Scalar(to)) => {
            StyleValue::Scalar(from + (to - from) * k)
        }
        (StyleValue::Vector(from), StyleValue::Vector(to)) => StyleValue::Vector(Vec3::new(
            from.x + (to.x - from.x) * k,
            from.y + (to.y - from.y) * k,
            from.z + (to.z - from.z) * k,
        )),
        // Shapes checked above.
        _ => spec.to,
    };
    snap(value, spec.round)
}

/// Snaps every component of `value` to multiples of `1/quantum`.
fn snap(value: StyleValue, quantum: Option<f64>) -> StyleValue {
    match quantum {
        Some(q) => {
            debug_assert!(q > 0.0, "rounding quantum must be positive, got {q}");
            value.map(|v| (v * q).round() / q)
        }
        None => value,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opacity_fade() -> PropertyInterpolatorSet {
        // Fade from 1 to 0.3 over the full domain, clamped, in 0.01 steps.
        PropertyInterpolatorSet::new().with(
            StyleProperty::Opacity,
            RangedSpec {
                round: Some(100.0),
                ..RangedSpec::new(1.0, 0.3)
            },
        )
    }

    #[test]
    fn constant_ignores_progress() {
        let set = PropertyInterpolatorSet::new()
            .with(StyleProperty::ScaleX, InterpolationSpec::constant(1.0));
        let interpolator = StyleInterpolator::compile(&set);

        for progress in [-10.0, 0.0, 0.5, 1.0, 42.0] {
            assert_eq!(
                interpolator.evaluate(progress).get(StyleProperty::ScaleX),
                Some(StyleValue::Scalar(1.0))
            );
        }
    }

    #[test]
    fn linear_midpoint() {
        let set = PropertyInterpolatorSet::new()
            .with(StyleProperty::TranslateX, RangedSpec::new(0.0, -320.0));
        let interpolator = StyleInterpolator::compile(&set);

        assert_eq!(
            interpolator.evaluate(0.5).get(StyleProperty::TranslateX),
            Some(StyleValue::Scalar(-160.0))
        );
    }

    #[test]
    fn clamped_range_stays_within_endpoints() {
        let interpolator = StyleInterpolator::compile(&opacity_fade());

        // Well outside the domain on both sides.
        for progress in [-5.0, -0.1, 0.0, 0.3, 0.99, 1.0, 1.5, 100.0] {
            let Some(StyleValue::Scalar(v)) =
                interpolator.evaluate(progress).get(StyleProperty::Opacity)
            else {
                panic!("opacity missing");
            };
            assert!((0.3..=1.0).contains(&v), "opacity {v} escaped [0.3, 1.0]");
        }
    }

    #[test]
    fn extrapolation_continues_past_endpoints() {
        let set = PropertyInterpolatorSet::new().with(
            StyleProperty::TranslateX,
            RangedSpec {
                extrapolate: true,
                ..RangedSpec::new(0.0, 100.0)
            },
        );
        let interpolator = StyleInterpolator::compile(&set);

        assert_eq!(
            interpolator.evaluate(2.0).get(StyleProperty::TranslateX),
            Some(StyleValue::Scalar(200.0))
        );
        assert_eq!(
            interpolator.evaluate(-1.0).get(StyleProperty::TranslateX),
            Some(StyleValue::Scalar(-100.0))
        );
    }

    #[test]
    fn degenerate_range_always_yields_to() {
        let set = PropertyInterpolatorSet::new().with(
            StyleProperty::Opacity,
            RangedSpec {
                min: 0.5,
                max: 0.5,
                ..RangedSpec::new(1.0, 0.0)
            },
        );
        let interpolator = StyleInterpolator::compile(&set);

        for progress in [-100.0, 0.0, 0.5, 1.0, 100.0] {
            assert_eq!(
                interpolator.evaluate(progress).get(StyleProperty::Opacity),
                Some(StyleValue::Scalar(0.0))
            );
        }
        assert_eq!(
            interpolator.warnings(),
            [CompileWarning::DegenerateRange {
                property: StyleProperty::Opacity
            }]
        );
    }

    #[test]
    fn rounding_quantum_snaps_to_exact_multiples() {
        let interpolator = StyleInterpolator::compile(&opacity_fade());

        // Progress values chosen to produce awkward intermediate values.
        for i in 0..=100 {
            let progress = f64::from(i) / 100.0 * 1.37 - 0.2;
            let Some(StyleValue::Scalar(v)) =
                interpolator.evaluate(progress).get(StyleProperty::Opacity)
            else {
                panic!("opacity missing");
            };
            let scaled = v * 100.0;
            assert_eq!(scaled, scaled.round(), "opacity {v} is not a 0.01 multiple");
        }
    }

    #[test]
    fn pixel_ratio_quantum_snaps_vectors_componentwise() {
        let set = PropertyInterpolatorSet::new().with(
            StyleProperty::TransformTranslate,
            RangedSpec {
                extrapolate: true,
                round: Some(2.0), // a 2x device pixel ratio
                ..RangedSpec::new(Vec3::ZERO, Vec3::new(-320.0, 0.0, 0.0))
            },
        );
        let interpolator = StyleInterpolator::compile(&set);

        let Some(StyleValue::Vector(v)) = interpolator
            .evaluate(0.333)
            .get(StyleProperty::TransformTranslate)
        else {
            panic!("translate missing");
        };
        assert_eq!(v.x * 2.0, (v.x * 2.0).round());
        assert_eq!(v.y, 0.0);
        assert_eq!(v.z, 0.0);
    }

    #[test]
    fn partial_domain_maps_linearly() {
        // Fade in over the second half of the transition.
        let set = PropertyInterpolatorSet::new().with(
            StyleProperty::Opacity,
            RangedSpec {
                min: 0.5,
                max: 1.0,
                round: Some(100.0),
                ..RangedSpec::new(0.0, 1.0)
            },
        );
        let interpolator = StyleInterpolator::compile(&set);

        assert_eq!(
            interpolator.evaluate(0.25).get(StyleProperty::Opacity),
            Some(StyleValue::Scalar(0.0))
        );
        assert_eq!(
            interpolator.evaluate(0.75).get(StyleProperty::Opacity),
            Some(StyleValue::Scalar(0.5))
        );
        assert_eq!(
            interpolator.evaluate(1.0).get(StyleProperty::Opacity),
            Some(StyleValue::Scalar(1.0))
        );
    }

    #[test]
    fn non_finite_progress_clamps_to_domain_bounds() {
        let set = PropertyInterpolatorSet::new().with(
            StyleProperty::TranslateX,
            RangedSpec {
                extrapolate: true,
                ..RangedSpec::new(0.0, 100.0)
            },
        );
        let interpolator = StyleInterpolator::compile(&set);

        assert_eq!(
            interpolator
                .evaluate(f64::NAN)
                .get(StyleProperty::TranslateX),
            Some(StyleValue::Scalar(0.0))
        );
        assert_eq!(
            interpolator
                .evaluate(f64::NEG_INFINITY)
                .get(StyleProperty::TranslateX),
            Some(StyleValue::Scalar(0.0))
        );
        assert_eq!(
            interpolator
                .evaluate(f64::INFINITY)
                .get(StyleProperty::TranslateX),
            Some(StyleValue::Scalar(100.0))
        );
    }

    #[test]
    fn mismatched_shape_falls_back_to_constant_to() {
        let set = PropertyInterpolatorSet::new().with(
            StyleProperty::TransformScale,
            RangedSpec {
                to: StyleValue::Vector(Vec3::splat(0.95)),
                ..RangedSpec::new(1.0, 1.0)
            },
        );
        let interpolator = StyleInterpolator::compile(&set);

        assert_eq!(
            interpolator.evaluate(0.5).get(StyleProperty::TransformScale),
            Some(StyleValue::Vector(Vec3::splat(0.95)))
        );
        assert_eq!(
            interpolator.warnings(),
            [CompileWarning::MismatchedShape {
                property: StyleProperty::TransformScale
            }]
        );
    }

    #[test]
    fn evaluation_is_deterministic() {
        let set = opacity_fade().with(
            StyleProperty::TransformTranslate,
            RangedSpec {
                extrapolate: true,
                round: Some(2.0),
                ..RangedSpec::new(Vec3::ZERO, Vec3::new(-96.0, 0.0, 0.0))
            },
        );
        let interpolator = StyleInterpolator::compile(&set);

        // Same progress twice yields bit-identical snapshots, and two
        // independently compiled evaluators agree.
        let other = StyleInterpolator::compile(&set);
        assert_eq!(interpolator, other);
        for progress in [0.0, 0.123_456_789, 0.5, 0.999, 1.0] {
            assert_eq!(interpolator.evaluate(progress), interpolator.evaluate(progress));
            assert_eq!(interpolator.evaluate(progress), other.evaluate(progress));
        }
    }

    #[test]
    fn snapshot_iterates_in_property_order() {
        let set = PropertyInterpolatorSet::new()
            .with(StyleProperty::ScaleY, InterpolationSpec::constant(1.0))
            .with(StyleProperty::Opacity, InterpolationSpec::constant(1.0))
            .with(StyleProperty::TranslateX, InterpolationSpec::constant(0.0));
        let interpolator = StyleInterpolator::compile(&set);
        let snapshot = interpolator.evaluate(0.0);

        let order: Vec<StyleProperty> = snapshot.iter().map(|(p, _)| p).collect();
        assert_eq!(
            order,
            [
                StyleProperty::Opacity,
                StyleProperty::TranslateX,
                StyleProperty::ScaleY
            ]
        );
    }
}
