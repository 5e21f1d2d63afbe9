// Copyright 2025 the Stagehand Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Stagehand Gesture: swipe gesture configuration for scene transitions.
//!
//! This crate holds the parameter model for gesture-driven transition
//! control: activation thresholds, release-velocity classification, edge hit
//! regions, and overswipe friction. It performs no gesture recognition
//! itself — a host runtime delivers raw touch deltas and velocities against
//! these thresholds to decide gesture start, commit, and cancel.
//!
//! A [`GestureConfig`] describes one recognized gesture (a pop, or one side
//! of a bidirectional jump pair). Configs start from a physical base factory
//! ([`GestureConfig::left_to_right`] and friends) and compose by structural
//! overlay: [`GestureConfig::with_overrides`] takes a partial
//! [`GestureOverrides`] record and returns a new config, never mutating the
//! base. Logical start/end resolution against text direction lives one layer
//! up, in `stagehand_scene`.
//!
//! ```rust
//! use kurbo::Size;
//! use stagehand_gesture::{GestureConfig, GestureOverrides, OverswipeConfig};
//!
//! let size = Size::new(320.0, 640.0);
//! let pop = GestureConfig::left_to_right(size);
//! assert_eq!(pop.full_distance, 320.0);
//! assert_eq!(pop.edge_hit_width, Some(30.0));
//!
//! // A jump gesture responds anywhere on screen and may restart mid-touch.
//! let jump = pop.with_overrides(&GestureOverrides {
//!     edge_hit_width: Some(None),
//!     is_detachable: Some(true),
//!     overswipe: Some(Some(OverswipeConfig::BASE)),
//!     ..Default::default()
//! });
//! assert_eq!(jump.edge_hit_width, None);
//! assert!(jump.is_detachable);
//! // The base is untouched.
//! assert_eq!(pop.edge_hit_width, Some(30.0));
//! ```
//!
//! This crate is `no_std` and does not allocate.

#![no_std]

mod config;
mod direction;

pub use config::{GestureConfig, GestureConfigError, GestureOverrides, OverswipeConfig};
pub use direction::{Axis, SwipeDirection};
