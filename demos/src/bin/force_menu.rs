// Copyright 2026 the Press Menu Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scripted force-press menu.
//!
//! Replays a pressure-sensing touch sequence through a `ForceMenuController`
//! at 60 Hz and prints what the host would draw on each frame.
//!
//! Run:
//! - `RUST_LOG=debug cargo run -p pressmenu_demos --bin force_menu`

use std::time::Duration;

use kurbo::{Point, Rect};
use pressmenu::{
    ControllerHost, FeedbackSignal, ForceCapability, ForceMenu, ForceMenuController,
    GesturePhase, Presentation, PresentationConfig,
};

const FRAME: Duration = Duration::from_millis(16);

struct Printer {
    bounds: Rect,
}

impl ControllerHost for Printer {
    fn phase_changed(&mut self, phase: GesturePhase) {
        println!("  phase -> {phase:?}");
    }

    fn presentation_changed(&mut self, presentation: &Presentation) {
        let center = self.bounds.center();
        let corner = presentation.main_transform(center) * Point::ZERO;
        println!(
            "  content scale {:.3} (origin at {:.1}, {:.1}), menu {}",
            presentation.main_scale,
            corner.x,
            corner.y,
            if presentation.menu_visible {
                format!("alpha {:.2}", presentation.menu_alpha)
            } else {
                "hidden".to_owned()
            }
        );
    }

    fn feedback(&mut self, signal: FeedbackSignal) {
        println!("  feedback: {signal:?}");
    }
}

/// A touch event in the script.
enum Step {
    Down(Point),
    Move(Point, f64),
    Up,
    Idle,
}

fn main() {
    env_logger::init();

    let config = PresentationConfig::default();
    let bounds = Rect::new(0.0, 0.0, 390.0, 844.0);
    println!("menu frame: {:?}", config.menu_frame(bounds));

    let menu = ForceMenu::new(vec!["Mail", "Calendar", "Photos", "Camera", "Maps", "Weather"]);
    let mut controller =
        match ForceMenuController::new(config, ForceCapability::Available, menu, Printer { bounds }) {
            Ok(controller) => controller,
            Err(err) => {
                eprintln!("cannot build controller: {err}");
                return;
            }
        };
    controller.menu_mut().select(Some(1));

    let start = Point::new(195.0, 600.0);
    let mut script = vec![Step::Down(start)];
    // Press harder over a few frames until the menu commits.
    for force in [0.6, 1.4, 2.1, 2.7, 3.3] {
        script.push(Step::Move(start, force));
    }
    script.extend((0..4).map(|_| Step::Idle));
    // Drag upward toward later items.
    for i in 1..=12 {
        script.push(Step::Move(
            Point::new(start.x, start.y - f64::from(i) * 3.0),
            0.8,
        ));
    }
    script.push(Step::Up);
    script.extend((0..14).map(|_| Step::Idle));

    let mut now = Duration::ZERO;
    for (frame, step) in script.into_iter().enumerate() {
        println!("frame {frame:>2} @ {:>4} ms", now.as_millis());
        match step {
            Step::Down(at) => controller.touch_began(1, at, now),
            Step::Move(at, force) => controller.touch_moved(at, force, now),
            Step::Up => controller.touch_ended(now),
            Step::Idle => {}
        }
        controller.advance(now);
        if let Some(candidate) = controller.menu().candidate_item() {
            println!("  hovering {candidate} (offset {:.1})", controller.menu().offset());
        }
        now += FRAME;
    }

    println!(
        "selected: {}",
        controller.menu().selected_item().copied().unwrap_or("nothing")
    );
}
