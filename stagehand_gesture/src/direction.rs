// Copyright 2025 the Stagehand Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Physical swipe directions and their axes.

use kurbo::Size;

/// The physical direction a swipe travels across the screen.
///
/// These are already direction-resolved: logical start/end semantics are
/// mapped to left/right by `stagehand_scene` before a config is built.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SwipeDirection {
    /// Finger travels from the left edge toward the right.
    LeftToRight,
    /// Finger travels from the right edge toward the left.
    RightToLeft,
    /// Finger travels from the top edge toward the bottom.
    TopToBottom,
    /// Finger travels from the bottom edge toward the top.
    BottomToTop,
}

impl SwipeDirection {
    /// The exact opposite direction.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::LeftToRight => Self::RightToLeft,
            Self::RightToLeft => Self::LeftToRight,
            Self::TopToBottom => Self::BottomToTop,
            Self::BottomToTop => Self::TopToBottom,
        }
    }

    /// The axis this direction travels along.
    #[must_use]
    pub const fn axis(self) -> Axis {
        match self {
            Self::LeftToRight | Self::RightToLeft => Axis::Horizontal,
            Self::TopToBottom | Self::BottomToTop => Axis::Vertical,
        }
    }

    /// The direction's wire name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::LeftToRight => "left-to-right",
            Self::RightToLeft => "right-to-left",
            Self::TopToBottom => "top-to-bottom",
            Self::BottomToTop => "bottom-to-top",
        }
    }
}

/// A screen axis.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// The left-right axis.
    Horizontal,
    /// The top-bottom axis.
    Vertical,
}

impl Axis {
    /// The viewport extent along this axis.
    #[must_use]
    pub const fn extent(self, size: Size) -> f64 {
        match self {
            Self::Horizontal => size.width,
            Self::Vertical => size.height,
        }
    }
}
