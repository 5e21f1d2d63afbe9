// Copyright 2025 the Stagehand Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Injected device geometry and display metrics.

use kurbo::Size;

/// The device geometry and display metrics a composition is built against.
///
/// Hosts query these from their platform services at config-construction
/// time and build a fresh `Viewport` per composition; this crate never
/// caches one across calls.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Viewport {
    /// Current viewport size in logical units.
    pub size: Size,
    /// Device pixel density, used as the default rounding quantum for
    /// translate specs so output lands on the physical pixel grid.
    pub pixel_ratio: f64,
}

impl Viewport {
    /// Creates a viewport from a size and a device pixel ratio.
    #[must_use]
    pub const fn new(size: Size, pixel_ratio: f64) -> Self {
        Self { size, pixel_ratio }
    }

    /// Viewport width in logical units.
    #[must_use]
    pub const fn width(&self) -> f64 {
        self.size.width
    }

    /// Viewport height in logical units.
    #[must_use]
    pub const fn height(&self) -> f64 {
        self.size.height
    }
}
