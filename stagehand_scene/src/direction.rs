// Copyright 2025 the Stagehand Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Resolving logical start/end semantics against the text direction.
//!
//! Every direction-sensitive preset names its animations and gestures
//! logically (`ToTheStart`, `FromTheEnd`, ...) and resolves them through a
//! [`DirectionContext`]. Under left-to-right layout, "start" is the physical
//! left; under right-to-left layout every left/right pairing inverts, so the
//! whole preset table mirrors from a single flag.
//!
//! The context is an explicit value: hosts construct one at startup and pass
//! it to every composition. A layout-direction change is a reconfiguration
//! event — construct a new context rather than mutating a shared one.

use kurbo::Size;
use stagehand_gesture::GestureConfig;
use stagehand_interpolate::PropertyInterpolatorSet;

use crate::animations;
use crate::viewport::Viewport;

/// The text/layout direction of the current locale.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum LayoutDirection {
    /// Left-to-right layout; "start" is the left edge.
    Ltr,
    /// Right-to-left layout; "start" is the right edge.
    Rtl,
}

impl LayoutDirection {
    /// Returns `true` for right-to-left layout.
    #[must_use]
    pub const fn is_rtl(self) -> bool {
        matches!(self, Self::Rtl)
    }
}

/// Logical names for the direction-sensitive animation factories.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum LogicalAnimation {
    /// Partial slide toward the start edge, opacity held.
    ToTheStartIos,
    /// Partial slide toward the end edge, opacity held.
    ToTheEndIos,
    /// Recede toward the start edge with scale and fade.
    FadeToTheStart,
    /// Recede toward the end edge with scale and fade.
    FadeToTheEnd,
    /// Full slide toward the start edge.
    ToTheStart,
    /// Full slide toward the end edge.
    ToTheEnd,
    /// Entry from beyond the start edge.
    FromTheStart,
    /// Entry from beyond the end edge.
    FromTheEnd,
}

impl LogicalAnimation {
    /// The same motion with start and end swapped.
    #[must_use]
    pub const fn mirrored(self) -> Self {
        match self {
            Self::ToTheStartIos => Self::ToTheEndIos,
            Self::ToTheEndIos => Self::ToTheStartIos,
            Self::FadeToTheStart => Self::FadeToTheEnd,
            Self::FadeToTheEnd => Self::FadeToTheStart,
            Self::ToTheStart => Self::ToTheEnd,
            Self::ToTheEnd => Self::ToTheStart,
            Self::FromTheStart => Self::FromTheEnd,
            Self::FromTheEnd => Self::FromTheStart,
        }
    }

    /// All logical animation names.
    pub const ALL: [Self; 8] = [
        Self::ToTheStartIos,
        Self::ToTheEndIos,
        Self::FadeToTheStart,
        Self::FadeToTheEnd,
        Self::ToTheStart,
        Self::ToTheEnd,
        Self::FromTheStart,
        Self::FromTheEnd,
    ];
}

/// Logical names for the direction-sensitive base gestures.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum LogicalGesture {
    /// Swipe traveling from the start edge toward the end edge.
    StartToEnd,
    /// Swipe traveling from the end edge toward the start edge.
    EndToStart,
}

impl LogicalGesture {
    /// The same gesture with start and end swapped.
    #[must_use]
    pub const fn mirrored(self) -> Self {
        match self {
            Self::StartToEnd => Self::EndToStart,
            Self::EndToStart => Self::StartToEnd,
        }
    }
}

/// Direction resolution for one layout direction.
///
/// Resolution is exhaustive by construction: every logical name is a match
/// arm, so a missing mapping cannot compile. Platform presets that are
/// deliberately non-mirrored (the bottom-sheet rise, the Android fade) call
/// the physical factories in [`animations`] directly instead of going
/// through the context.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct DirectionContext {
    layout: LayoutDirection,
}

impl DirectionContext {
    /// Creates a context for `layout`.
    #[must_use]
    pub const fn new(layout: LayoutDirection) -> Self {
        Self { layout }
    }

    /// The layout direction this context resolves against.
    #[must_use]
    pub const fn layout(&self) -> LayoutDirection {
        self.layout
    }

    /// Builds the interpolator set for a logical animation name.
    #[must_use]
    pub fn animation(&self, name: LogicalAnimation, vp: Viewport) -> PropertyInterpolatorSet {
        let name = match self.layout {
            LayoutDirection::Ltr => name,
            LayoutDirection::Rtl => name.mirrored(),
        };
        // Physical dispatch under LTR semantics: start = left, end = right.
        match name {
            LogicalAnimation::ToTheStartIos => animations::to_the_left_ios(vp),
            LogicalAnimation::ToTheEndIos => animations::to_the_right_ios(vp),
            LogicalAnimation::FadeToTheStart => animations::fade_to_the_left(vp),
            LogicalAnimation::FadeToTheEnd => animations::fade_to_the_right(vp),
            LogicalAnimation::ToTheStart => animations::to_the_left(vp),
            LogicalAnimation::ToTheEnd => animations::to_the_right(vp),
            LogicalAnimation::FromTheStart => animations::from_the_left(vp),
            LogicalAnimation::FromTheEnd => animations::from_the_right(vp),
        }
    }

    /// Builds the base gesture config for a logical gesture name.
    #[must_use]
    pub fn gesture(&self, name: LogicalGesture, size: Size) -> GestureConfig {
        let name = match self.layout {
            LayoutDirection::Ltr => name,
            LayoutDirection::Rtl => name.mirrored(),
        };
        match name {
            LogicalGesture::StartToEnd => GestureConfig::left_to_right(size),
            LogicalGesture::EndToStart => GestureConfig::right_to_left(size),
        }
    }
}
