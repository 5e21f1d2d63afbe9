// Copyright 2025 the Stagehand Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gesture parameter records and their overlay composition.

use core::fmt;

use kurbo::Size;

use crate::direction::SwipeDirection;

/// Resistance applied once a gesture travels past its full distance.
///
/// Only jump-style gestures carry overswipe; a pop simply completes.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct OverswipeConfig {
    /// Constant friction term.
    pub friction_constant: f64,
    /// Friction growth per unit of distance past the full distance.
    pub friction_by_distance: f64,
}

impl OverswipeConfig {
    /// The shared overswipe tuning used by every jump preset.
    pub const BASE: Self = Self {
        friction_constant: 1.0,
        friction_by_distance: 1.5,
    };
}

/// Parameters for one recognized gesture.
///
/// Every field is a plain threshold or flag consumed by the host gesture
/// runtime; this type carries no recognition state. Configs are immutable
/// values: derive new ones with [`with_overrides`](Self::with_overrides).
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GestureConfig {
    /// Physical direction the swipe travels.
    pub direction: SwipeDirection,
    /// Geometry extent representing 100% gesture completion. Must equal the
    /// viewport width for horizontal directions and height for vertical ones.
    pub full_distance: f64,
    /// How far the swipe must drag to start transitioning.
    pub gesture_detect_movement: f64,
    /// Amplitude of release velocity that is considered still.
    pub not_moving: f64,
    /// Fraction of directional move required.
    pub direction_ratio: f64,
    /// Velocity to transition with when the gesture release was "not moving".
    pub snap_velocity: f64,
    /// Region that can trigger the swipe, measured from the originating edge.
    /// `None` means the whole screen responds.
    pub edge_hit_width: Option<f64>,
    /// Ratio of gesture completion at which a non-velocity release commits.
    pub still_completion_ratio: f64,
    /// Whether the gesture can end and restart during one continuous touch.
    pub is_detachable: bool,
    /// Overswipe resistance past the full distance, if any.
    pub overswipe: Option<OverswipeConfig>,
}

impl GestureConfig {
    /// Default edge region for pop gestures, in logical units.
    pub const DEFAULT_EDGE_HIT_WIDTH: f64 = 30.0;

    /// The base left-to-right swipe over the viewport width.
    #[must_use]
    pub fn left_to_right(size: Size) -> Self {
        Self {
            direction: SwipeDirection::LeftToRight,
            full_distance: size.width,
            gesture_detect_movement: 2.0,
            not_moving: 0.3,
            direction_ratio: 0.66,
            snap_velocity: 2.0,
            edge_hit_width: Some(Self::DEFAULT_EDGE_HIT_WIDTH),
            still_completion_ratio: 3.0 / 5.0,
            is_detachable: false,
            overswipe: None,
        }
    }

    /// The base right-to-left swipe over the viewport width.
    #[must_use]
    pub fn right_to_left(size: Size) -> Self {
        Self {
            direction: SwipeDirection::RightToLeft,
            ..Self::left_to_right(size)
        }
    }

    /// The base bottom-to-top swipe over the viewport height.
    #[must_use]
    pub fn bottom_to_top(size: Size) -> Self {
        Self {
            direction: SwipeDirection::BottomToTop,
            full_distance: size.height,
            ..Self::left_to_right(size)
        }
    }

    /// The base top-to-bottom swipe over the viewport height.
    #[must_use]
    pub fn top_to_bottom(size: Size) -> Self {
        Self {
            direction: SwipeDirection::TopToBottom,
            full_distance: size.height,
            ..Self::left_to_right(size)
        }
    }

    /// Returns a new config with every field present in `overrides` replaced
    /// and every absent field kept from `self`. The base is not mutated;
    /// multiple presets may derive from the same base.
    #[must_use]
    pub fn with_overrides(&self, overrides: &GestureOverrides) -> Self {
        Self {
            direction: overrides.direction.unwrap_or(self.direction),
            full_distance: overrides.full_distance.unwrap_or(self.full_distance),
            gesture_detect_movement: overrides
                .gesture_detect_movement
                .unwrap_or(self.gesture_detect_movement),
            not_moving: overrides.not_moving.unwrap_or(self.not_moving),
            direction_ratio: overrides.direction_ratio.unwrap_or(self.direction_ratio),
            snap_velocity: overrides.snap_velocity.unwrap_or(self.snap_velocity),
            edge_hit_width: overrides.edge_hit_width.unwrap_or(self.edge_hit_width),
            still_completion_ratio: overrides
                .still_completion_ratio
                .unwrap_or(self.still_completion_ratio),
            is_detachable: overrides.is_detachable.unwrap_or(self.is_detachable),
            overswipe: overrides.overswipe.unwrap_or(self.overswipe),
        }
    }

    /// Checks the full-distance invariant against the viewport: horizontal
    /// gestures must span the width, vertical gestures the height.
    pub fn validate(&self, size: Size) -> Result<(), GestureConfigError> {
        let expected = self.direction.axis().extent(size);
        if self.full_distance == expected {
            Ok(())
        } else {
            Err(GestureConfigError::FullDistanceMismatch {
                direction: self.direction,
                full_distance: self.full_distance,
                expected,
            })
        }
    }
}

/// A partial [`GestureConfig`]: `Some` fields replace the base, `None`
/// fields are kept.
///
/// `edge_hit_width` and `overswipe` are doubly optional so an override can
/// clear them (`Some(None)`) as well as leave them alone (`None`).
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct GestureOverrides {
    /// Replacement swipe direction.
    pub direction: Option<SwipeDirection>,
    /// Replacement full distance.
    pub full_distance: Option<f64>,
    /// Replacement detection movement threshold.
    pub gesture_detect_movement: Option<f64>,
    /// Replacement still-velocity amplitude.
    pub not_moving: Option<f64>,
    /// Replacement directional-move fraction.
    pub direction_ratio: Option<f64>,
    /// Replacement snap velocity.
    pub snap_velocity: Option<f64>,
    /// Replacement edge region; `Some(None)` removes the edge restriction.
    pub edge_hit_width: Option<Option<f64>>,
    /// Replacement still-completion ratio.
    pub still_completion_ratio: Option<f64>,
    /// Replacement detachability flag.
    pub is_detachable: Option<bool>,
    /// Replacement overswipe tuning; `Some(None)` removes overswipe.
    pub overswipe: Option<Option<OverswipeConfig>>,
}

/// Errors from gesture configuration checks.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum GestureConfigError {
    /// `full_distance` does not span the viewport along the gesture's axis.
    FullDistanceMismatch {
        /// The gesture's direction.
        direction: SwipeDirection,
        /// The configured full distance.
        full_distance: f64,
        /// The viewport extent along the gesture's axis.
        expected: f64,
    },
}

impl fmt::Display for GestureConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FullDistanceMismatch {
                direction,
                full_distance,
                expected,
            } => write!(
                f,
                "{} gesture full_distance {full_distance} does not span the viewport ({expected})",
                direction.as_str()
            ),
        }
    }
}

impl core::error::Error for GestureConfigError {}
