// Copyright 2025 the Stagehand Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Assembling named transition presets from a shared base configuration.

use alloc::vec::Vec;
use core::fmt;

use stagehand_gesture::{
    GestureConfig, GestureConfigError, GestureOverrides, OverswipeConfig, SwipeDirection,
};
use stagehand_interpolate::StyleInterpolator;

use crate::animations;
use crate::direction::{DirectionContext, LogicalAnimation, LogicalGesture};
use crate::viewport::Viewport;

/// The named transition presets a navigation host can request.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ScenePreset {
    /// iOS-style push: enter from the end edge, previous scene slides back.
    PushFromRight,
    /// Mirrored push: enter from the start edge.
    PushFromLeft,
    /// Enter from the end edge, previous scene recedes with a fade.
    FloatFromRight,
    /// Enter from the start edge, previous scene fades toward the end.
    FloatFromLeft,
    /// Bottom sheet: rise from the bottom, previous scene recedes in place.
    FloatFromBottom,
    /// Android bottom entry: short rise with fade, no dismissal gesture.
    FloatFromBottomAndroid,
    /// Android cross-fade, no dismissal gesture.
    FadeAndroid,
    /// Full-width swipe with detachable jump gestures, entering from start.
    SwipeFromLeft,
    /// Bidirectional horizontal jump navigation, entering from the end.
    HorizontalSwipeJump,
    /// Horizontal jump navigation with a pop gesture, fade-out exit.
    HorizontalSwipeJumpFromRight,
    /// Horizontal jump navigation with a pop gesture, slide-out exit.
    HorizontalSwipeJumpFromLeft,
    /// Bidirectional vertical jump navigation, content moving up.
    VerticalUpSwipeJump,
    /// Bidirectional vertical jump navigation, content moving down.
    VerticalDownSwipeJump,
}

impl ScenePreset {
    /// Every supported preset.
    pub const ALL: [Self; 13] = [
        Self::PushFromRight,
        Self::PushFromLeft,
        Self::FloatFromRight,
        Self::FloatFromLeft,
        Self::FloatFromBottom,
        Self::FloatFromBottomAndroid,
        Self::FadeAndroid,
        Self::SwipeFromLeft,
        Self::HorizontalSwipeJump,
        Self::HorizontalSwipeJumpFromRight,
        Self::HorizontalSwipeJumpFromLeft,
        Self::VerticalUpSwipeJump,
        Self::VerticalDownSwipeJump,
    ];

    /// The preset's exported name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::PushFromRight => "PushFromRight",
            Self::PushFromLeft => "PushFromLeft",
            Self::FloatFromRight => "FloatFromRight",
            Self::FloatFromLeft => "FloatFromLeft",
            Self::FloatFromBottom => "FloatFromBottom",
            Self::FloatFromBottomAndroid => "FloatFromBottomAndroid",
            Self::FadeAndroid => "FadeAndroid",
            Self::SwipeFromLeft => "SwipeFromLeft",
            Self::HorizontalSwipeJump => "HorizontalSwipeJump",
            Self::HorizontalSwipeJumpFromRight => "HorizontalSwipeJumpFromRight",
            Self::HorizontalSwipeJumpFromLeft => "HorizontalSwipeJumpFromLeft",
            Self::VerticalUpSwipeJump => "VerticalUpSwipeJump",
            Self::VerticalDownSwipeJump => "VerticalDownSwipeJump",
        }
    }
}

/// The gesture slots a preset can populate.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum GestureKind {
    /// Dismiss the current scene one level.
    Pop,
    /// Jump backward in history without returning to rest in between.
    JumpBack,
    /// Jump forward in history without returning to rest in between.
    JumpForward,
}

impl GestureKind {
    /// The slot's exported name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pop => "pop",
            Self::JumpBack => "jumpBack",
            Self::JumpForward => "jumpForward",
        }
    }
}

/// The gestures enabled on one preset.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Gestures {
    /// Swipe-to-dismiss.
    pub pop: Option<GestureConfig>,
    /// Backward jump of a bidirectional pair.
    pub jump_back: Option<GestureConfig>,
    /// Forward jump of a bidirectional pair.
    pub jump_forward: Option<GestureConfig>,
}

impl Gestures {
    /// A gesture set with only a pop gesture.
    #[must_use]
    pub const fn pop_only(pop: GestureConfig) -> Self {
        Self {
            pop: Some(pop),
            jump_back: None,
            jump_forward: None,
        }
    }

    /// A gesture set with a bidirectional jump pair and no pop.
    #[must_use]
    pub const fn jump_pair(jump_back: GestureConfig, jump_forward: GestureConfig) -> Self {
        Self {
            pop: None,
            jump_back: Some(jump_back),
            jump_forward: Some(jump_forward),
        }
    }

    /// Iterates over the populated slots.
    pub fn iter(&self) -> impl Iterator<Item = (GestureKind, &GestureConfig)> {
        [
            (GestureKind::Pop, self.pop.as_ref()),
            (GestureKind::JumpBack, self.jump_back.as_ref()),
            (GestureKind::JumpForward, self.jump_forward.as_ref()),
        ]
        .into_iter()
        .filter_map(|(kind, config)| config.map(|c| (kind, c)))
    }
}

/// The compiled evaluators for both sides of a transition.
#[derive(Clone, Debug, PartialEq)]
pub struct AnimationInterpolators {
    /// Evaluator for the entering scene.
    pub into: StyleInterpolator,
    /// Evaluator for the leaving scene.
    pub out: StyleInterpolator,
}

/// One composed transition preset, ready for a navigation host to consume.
///
/// A config is an independent immutable snapshot of the preset against the
/// geometry and direction context it was composed with; compose again after
/// a rotation or layout-direction change. The host's transition state
/// machine reads it for the duration of one transition and discards it.
#[derive(Clone, Debug, PartialEq)]
pub struct TransitionConfig {
    /// Enabled gestures, or `None` when gesture-driven dismissal is off.
    pub gestures: Option<Gestures>,
    /// Spring friction handed to the host's spring runtime.
    pub spring_friction: f64,
    /// Spring tension handed to the host's spring runtime.
    pub spring_tension: f64,
    /// Velocity to start at when transitioning without a gesture.
    pub default_transition_velocity: f64,
    /// Compiled interpolators for the entering and leaving scenes.
    pub animation_interpolators: AnimationInterpolators,
}

impl TransitionConfig {
    /// The shared base every preset derives from: standard spring constants,
    /// a start-to-end pop gesture, and an end-entry/start-fade interpolator
    /// pair.
    #[must_use]
    pub fn base(ctx: &DirectionContext, vp: Viewport) -> Self {
        Self {
            gestures: Some(Gestures::pop_only(
                ctx.gesture(LogicalGesture::StartToEnd, vp.size),
            )),
            spring_friction: 26.0,
            spring_tension: 200.0,
            default_transition_velocity: 1.5,
            animation_interpolators: resolved(ctx, LogicalAnimation::FromTheEnd, LogicalAnimation::FadeToTheStart, vp),
        }
    }
}

/// Errors preventing a preset from being exported.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum ConfigurationError {
    /// A composed gesture violates the full-distance invariant.
    Gesture {
        /// The preset being composed.
        preset: ScenePreset,
        /// The offending gesture slot.
        gesture: GestureKind,
        /// The underlying gesture error.
        source: GestureConfigError,
    },
}

impl fmt::Display for ConfigurationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Gesture {
                preset,
                gesture,
                source,
            } => write!(
                f,
                "preset {} gesture {}: {source}",
                preset.as_str(),
                gesture.as_str()
            ),
        }
    }
}

impl core::error::Error for ConfigurationError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::Gesture { source, .. } => Some(source),
        }
    }
}

/// Composes one named preset against the current geometry and direction
/// context.
///
/// Preset overrides replace the base's `gestures` and
/// `animation_interpolators` wholesale; each preset defines a complete
/// behavior rather than a diff. Every composed gesture is validated against
/// the viewport before the config is returned.
pub fn compose(
    preset: ScenePreset,
    ctx: &DirectionContext,
    vp: Viewport,
) -> Result<TransitionConfig, ConfigurationError> {
    use LogicalAnimation as A;

    let base = TransitionConfig::base(ctx, vp);
    let config = match preset {
        ScenePreset::PushFromRight => TransitionConfig {
            animation_interpolators: resolved(ctx, A::FromTheEnd, A::ToTheStartIos, vp),
            ..base
        },
        ScenePreset::PushFromLeft => TransitionConfig {
            animation_interpolators: resolved(ctx, A::FromTheStart, A::ToTheEndIos, vp),
            ..base
        },
        ScenePreset::FloatFromRight => base,
        ScenePreset::FloatFromLeft => TransitionConfig {
            gestures: Some(Gestures::pop_only(
                ctx.gesture(LogicalGesture::EndToStart, vp.size),
            )),
            animation_interpolators: resolved(ctx, A::FromTheStart, A::FadeToTheEnd, vp),
            ..base
        },
        ScenePreset::FloatFromBottom => TransitionConfig {
            gestures: Some(Gestures::pop_only(
                ctx.gesture(LogicalGesture::StartToEnd, vp.size)
                    .with_overrides(&GestureOverrides {
                        edge_hit_width: Some(Some(150.0)),
                        direction: Some(SwipeDirection::TopToBottom),
                        full_distance: Some(vp.height()),
                        ..Default::default()
                    }),
            )),
            animation_interpolators: AnimationInterpolators {
                into: compiled(&animations::from_the_front(vp)),
                out: compiled(&animations::to_the_back(vp)),
            },
            ..base
        },
        ScenePreset::FloatFromBottomAndroid => TransitionConfig {
            gestures: None,
            default_transition_velocity: 3.0,
            spring_friction: 20.0,
            animation_interpolators: AnimationInterpolators {
                into: compiled(&animations::from_the_front_android(vp)),
                out: compiled(&animations::to_the_back_android(vp)),
            },
            ..base
        },
        ScenePreset::FadeAndroid => TransitionConfig {
            gestures: None,
            animation_interpolators: AnimationInterpolators {
                into: compiled(&animations::fade_in(vp)),
                out: compiled(&animations::fade_out(vp)),
            },
            ..base
        },
        ScenePreset::SwipeFromLeft => TransitionConfig {
            gestures: Some(Gestures::jump_pair(
                jump(ctx.gesture(LogicalGesture::EndToStart, vp.size)),
                jump(ctx.gesture(LogicalGesture::StartToEnd, vp.size)),
            )),
            animation_interpolators: resolved(ctx, A::FromTheStart, A::ToTheEnd, vp),
            ..base
        },
        ScenePreset::HorizontalSwipeJump => TransitionConfig {
            gestures: Some(Gestures::jump_pair(
                jump(ctx.gesture(LogicalGesture::StartToEnd, vp.size)),
                jump(ctx.gesture(LogicalGesture::EndToStart, vp.size)),
            )),
            animation_interpolators: resolved(ctx, A::FromTheEnd, A::ToTheStart, vp),
            ..base
        },
        ScenePreset::HorizontalSwipeJumpFromRight => TransitionConfig {
            gestures: Some(Gestures {
                pop: Some(ctx.gesture(LogicalGesture::EndToStart, vp.size)),
                ..Gestures::jump_pair(
                    jump(ctx.gesture(LogicalGesture::EndToStart, vp.size)),
                    jump(ctx.gesture(LogicalGesture::StartToEnd, vp.size)),
                )
            }),
            animation_interpolators: resolved(ctx, A::FromTheStart, A::FadeToTheEnd, vp),
            ..base
        },
        ScenePreset::HorizontalSwipeJumpFromLeft => TransitionConfig {
            gestures: Some(Gestures {
                pop: Some(ctx.gesture(LogicalGesture::EndToStart, vp.size)),
                ..Gestures::jump_pair(
                    jump(ctx.gesture(LogicalGesture::EndToStart, vp.size)),
                    jump(ctx.gesture(LogicalGesture::StartToEnd, vp.size)),
                )
            }),
            animation_interpolators: resolved(ctx, A::FromTheStart, A::ToTheEnd, vp),
            ..base
        },
        ScenePreset::VerticalUpSwipeJump => TransitionConfig {
            gestures: Some(Gestures::jump_pair(
                jump(GestureConfig::top_to_bottom(vp.size)),
                jump(GestureConfig::bottom_to_top(vp.size)),
            )),
            animation_interpolators: AnimationInterpolators {
                into: compiled(&animations::from_the_down(vp)),
                out: compiled(&animations::to_the_up(vp)),
            },
            ..base
        },
        ScenePreset::VerticalDownSwipeJump => TransitionConfig {
            gestures: Some(Gestures::jump_pair(
                jump(GestureConfig::bottom_to_top(vp.size)),
                jump(GestureConfig::top_to_bottom(vp.size)),
            )),
            animation_interpolators: AnimationInterpolators {
                into: compiled(&animations::from_the_top(vp)),
                out: compiled(&animations::to_the_down(vp)),
            },
            ..base
        },
    };

    if let Some(gestures) = &config.gestures {
        for (kind, gesture) in gestures.iter() {
            gesture
                .validate(vp.size)
                .map_err(|source| ConfigurationError::Gesture {
                    preset,
                    gesture: kind,
                    source,
                })?;
        }
    }
    Ok(config)
}

/// Composes every supported preset, failing on the first configuration
/// error.
pub fn compose_all(
    ctx: &DirectionContext,
    vp: Viewport,
) -> Result<Vec<(ScenePreset, TransitionConfig)>, ConfigurationError> {
    ScenePreset::ALL
        .iter()
        .map(|&preset| compose(preset, ctx, vp).map(|config| (preset, config)))
        .collect()
}

/// Resolves and compiles a logical into/out animation pair.
fn resolved(
    ctx: &DirectionContext,
    into: LogicalAnimation,
    out: LogicalAnimation,
    vp: Viewport,
) -> AnimationInterpolators {
    AnimationInterpolators {
        into: compiled(&ctx.animation(into, vp)),
        out: compiled(&ctx.animation(out, vp)),
    }
}

fn compiled(set: &stagehand_interpolate::PropertyInterpolatorSet) -> StyleInterpolator {
    StyleInterpolator::compile(set)
}

/// The common jump overlay: detachable, no edge restriction, base overswipe.
fn jump(base: GestureConfig) -> GestureConfig {
    base.with_overrides(&GestureOverrides {
        overswipe: Some(Some(OverswipeConfig::BASE)),
        edge_hit_width: Some(None),
        is_detachable: Some(true),
        ..Default::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::direction::LayoutDirection;
    use kurbo::Size;
    use stagehand_interpolate::{StyleProperty, StyleValue, Vec3};

    const VP: Viewport = Viewport::new(Size::new(320.0, 640.0), 2.0);

    fn ltr() -> DirectionContext {
        DirectionContext::new(LayoutDirection::Ltr)
    }

    fn rtl() -> DirectionContext {
        DirectionContext::new(LayoutDirection::Rtl)
    }

    #[test]
    fn every_preset_is_override_complete() {
        for ctx in [ltr(), rtl()] {
            for preset in ScenePreset::ALL {
                let config = compose(preset, &ctx, VP).expect("preset composes");
                assert!(config.spring_friction > 0.0, "{preset:?}");
                assert!(config.spring_tension > 0.0, "{preset:?}");
                assert!(config.default_transition_velocity > 0.0, "{preset:?}");
                assert!(
                    !config.animation_interpolators.into.is_empty(),
                    "{preset:?} has an empty entering interpolator"
                );
                assert!(
                    !config.animation_interpolators.out.is_empty(),
                    "{preset:?} has an empty leaving interpolator"
                );
            }
        }
    }

    #[test]
    fn gestureless_presets_still_carry_interpolators() {
        for preset in [ScenePreset::FadeAndroid, ScenePreset::FloatFromBottomAndroid] {
            let config = compose(preset, &ltr(), VP).unwrap();
            assert!(config.gestures.is_none(), "{preset:?}");
            assert!(!config.animation_interpolators.into.is_empty());
            assert!(!config.animation_interpolators.out.is_empty());
        }
    }

    #[test]
    fn jump_pairs_are_mirrored_detachable_and_unrestricted() {
        let jump_presets = [
            ScenePreset::SwipeFromLeft,
            ScenePreset::HorizontalSwipeJump,
            ScenePreset::HorizontalSwipeJumpFromRight,
            ScenePreset::HorizontalSwipeJumpFromLeft,
            ScenePreset::VerticalUpSwipeJump,
            ScenePreset::VerticalDownSwipeJump,
        ];
        for ctx in [ltr(), rtl()] {
            for preset in jump_presets {
                let config = compose(preset, &ctx, VP).unwrap();
                let gestures = config.gestures.expect("jump presets keep gestures");
                let back = gestures.jump_back.expect("jumpBack");
                let forward = gestures.jump_forward.expect("jumpForward");

                assert_eq!(
                    back.direction,
                    forward.direction.opposite(),
                    "{preset:?} jump directions are not opposites"
                );
                for gesture in [back, forward] {
                    assert!(gesture.is_detachable, "{preset:?}");
                    assert_eq!(gesture.edge_hit_width, None, "{preset:?}");
                    assert_eq!(gesture.overswipe, Some(OverswipeConfig::BASE), "{preset:?}");
                }
            }
        }
    }

    #[test]
    fn push_from_right_entry_mirrors_under_rtl() {
        let config = compose(ScenePreset::PushFromRight, &rtl(), VP).unwrap();
        let snapshot = config.animation_interpolators.into.evaluate(0.0);
        // Entry resolves to the left-edge factory under RTL.
        assert_eq!(
            snapshot.get(StyleProperty::TransformTranslate),
            Some(StyleValue::Vector(Vec3::new(-320.0, 0.0, 0.0)))
        );

        // And the pop gesture mirrors with it.
        let pop = config.gestures.unwrap().pop.unwrap();
        assert_eq!(pop.direction, SwipeDirection::RightToLeft);
    }

    #[test]
    fn push_from_right_entry_under_ltr() {
        let config = compose(ScenePreset::PushFromRight, &ltr(), VP).unwrap();
        let snapshot = config.animation_interpolators.into.evaluate(0.0);
        assert_eq!(
            snapshot.get(StyleProperty::TransformTranslate),
            Some(StyleValue::Vector(Vec3::new(320.0, 0.0, 0.0)))
        );

        let pop = config.gestures.unwrap().pop.unwrap();
        assert_eq!(pop.direction, SwipeDirection::LeftToRight);
        assert_eq!(pop.edge_hit_width, Some(30.0));
        assert_eq!(pop.full_distance, 320.0);
    }

    #[test]
    fn float_from_bottom_redirects_the_pop_gesture() {
        let config = compose(ScenePreset::FloatFromBottom, &ltr(), VP).unwrap();
        let pop = config.gestures.unwrap().pop.unwrap();
        assert_eq!(pop.direction, SwipeDirection::TopToBottom);
        assert_eq!(pop.full_distance, 640.0);
        assert_eq!(pop.edge_hit_width, Some(150.0));
        // The rest of the thresholds come from the shared base.
        assert_eq!(pop.snap_velocity, 2.0);
        assert!(!pop.is_detachable);
    }

    #[test]
    fn android_bottom_sheet_overrides_the_physics() {
        let config = compose(ScenePreset::FloatFromBottomAndroid, &ltr(), VP).unwrap();
        assert_eq!(config.spring_friction, 20.0);
        assert_eq!(config.spring_tension, 200.0);
        assert_eq!(config.default_transition_velocity, 3.0);
    }

    #[test]
    fn composition_is_idempotent() {
        for ctx in [ltr(), rtl()] {
            for preset in [
                ScenePreset::PushFromRight,
                ScenePreset::FloatFromBottom,
                ScenePreset::HorizontalSwipeJump,
                ScenePreset::FadeAndroid,
            ] {
                let first = compose(preset, &ctx, VP).unwrap();
                let second = compose(preset, &ctx, VP).unwrap();
                assert_eq!(first, second, "{preset:?} did not compose identically");
            }
        }
    }

    #[test]
    fn compose_all_exports_every_preset_once() {
        let configs = compose_all(&ltr(), VP).unwrap();
        assert_eq!(configs.len(), ScenePreset::ALL.len());
        for (i, (preset, _)) in configs.iter().enumerate() {
            assert_eq!(*preset, ScenePreset::ALL[i]);
        }
    }

    #[test]
    fn fade_android_interpolators_cross_fade() {
        let config = compose(ScenePreset::FadeAndroid, &ltr(), VP).unwrap();
        let into = &config.animation_interpolators.into;
        let out = &config.animation_interpolators.out;

        // Entering scene is invisible until the midpoint, then fades in.
        assert_eq!(
            into.evaluate(0.25).get(StyleProperty::Opacity),
            Some(StyleValue::Scalar(0.0))
        );
        assert_eq!(
            into.evaluate(1.0).get(StyleProperty::Opacity),
            Some(StyleValue::Scalar(1.0))
        );
        // Leaving scene is gone by the midpoint.
        assert_eq!(
            out.evaluate(0.5).get(StyleProperty::Opacity),
            Some(StyleValue::Scalar(0.0))
        );
    }
}
