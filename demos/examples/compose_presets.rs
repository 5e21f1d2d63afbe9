// Copyright 2025 the Stagehand Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Compose every transition preset and sample its interpolators.
//!
//! This example shows the full flow a navigation host would run:
//! - build a `DirectionContext` from the locale's layout direction,
//! - build a `Viewport` from the current geometry and pixel ratio,
//! - compose presets and inspect their gestures, springs, and evaluators.
//!
//! Run:
//! - `cargo run -p stagehand_demos --example compose_presets`

use kurbo::Size;
use stagehand_interpolate::StyleProperty;
use stagehand_scene::{
    DirectionContext, LayoutDirection, ScenePreset, Viewport, compose, compose_all,
};

fn main() {
    let vp = Viewport::new(Size::new(320.0, 640.0), 2.0);

    for layout in [LayoutDirection::Ltr, LayoutDirection::Rtl] {
        let ctx = DirectionContext::new(layout);
        println!("== {layout:?} ==");

        let configs = compose_all(&ctx, vp).expect("all presets compose");
        for (preset, config) in &configs {
            let gestures = match &config.gestures {
                Some(g) => g
                    .iter()
                    .map(|(kind, gesture)| {
                        format!("{}:{}", kind.as_str(), gesture.direction.as_str())
                    })
                    .collect::<Vec<_>>()
                    .join(" "),
                None => "-".to_owned(),
            };
            println!(
                "{:<30} spring {:>2}/{:<3} velocity {:<3} gestures [{gestures}]",
                preset.as_str(),
                config.spring_friction,
                config.spring_tension,
                config.default_transition_velocity,
            );
        }
        println!();
    }

    // Sample the entering-scene evaluator of a push transition the way a
    // frame loop would.
    let ctx = DirectionContext::new(LayoutDirection::Ltr);
    let push = compose(ScenePreset::PushFromRight, &ctx, vp).expect("push composes");
    println!("PushFromRight entering translateX over progress:");
    for step in 0..=4 {
        let progress = f64::from(step) / 4.0;
        let snapshot = push.animation_interpolators.into.evaluate(progress);
        if let Some(value) = snapshot.get(StyleProperty::TranslateX) {
            println!("  progress {progress:.2} -> {value:?}");
        }
    }
}
