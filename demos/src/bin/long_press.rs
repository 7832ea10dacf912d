// Copyright 2026 the Press Menu Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Long press fallback.
//!
//! Drives a bare `ForcePressRecognizer` on hardware without pressure sensing,
//! sleeping only as long as the recognizer asks: until the next timer deadline
//! while idle, one frame at a time while the entry factor animates.
//!
//! Run:
//! - `RUST_LOG=trace cargo run -p pressmenu_demos --bin long_press`

use std::time::Duration;

use kurbo::Point;
use pressmenu_gesture::{
    FeedbackSignal, ForceCapability, ForcePressRecognizer, GestureConfig, GestureHost,
    GestureUpdate,
};

const FRAME: Duration = Duration::from_millis(16);

struct Console;

impl GestureHost for Console {
    fn changed(&mut self, update: &GestureUpdate) {
        println!(
            "{:?}/{:?} entry {:.3} dy {:.1}",
            update.phase, update.outcome, update.entry_factor, update.translation.y
        );
    }

    fn feedback(&mut self, signal: FeedbackSignal) {
        println!("*{signal:?}*");
    }
}

/// Wakes the recognizer until it has nothing left to do or `until` passes.
fn pump(rec: &mut ForcePressRecognizer, now: &mut Duration, until: Duration, host: &mut Console) {
    loop {
        let next = if rec.needs_frames() {
            *now + FRAME
        } else {
            match rec.next_deadline() {
                Some(deadline) => deadline,
                None => return,
            }
        };
        if next > until {
            return;
        }
        *now = next;
        rec.advance(*now, host);
    }
}

fn main() {
    env_logger::init();

    let config = GestureConfig::default().with_long_touch_slop(Some(12.0));
    let mut rec = match ForcePressRecognizer::new(config, ForceCapability::Unavailable) {
        Ok(rec) => rec,
        Err(err) => {
            eprintln!("bad configuration: {err}");
            return;
        }
    };
    let mut host = Console;
    let mut now = Duration::ZERO;

    println!("-- finger wanders off before the long press fires");
    rec.touch_began(1, Point::new(50.0, 50.0), now, &mut host);
    now += Duration::from_millis(120);
    rec.touch_moved(Point::new(70.0, 50.0), 0.0, now, &mut host);
    pump(&mut rec, &mut now, Duration::from_secs(1), &mut host);
    rec.touch_ended(now, &mut host);

    println!("-- finger rests, drags, releases");
    now = Duration::from_secs(2);
    rec.touch_began(1, Point::new(50.0, 400.0), now, &mut host);
    pump(&mut rec, &mut now, Duration::from_secs(3), &mut host);
    for step in 1..=5 {
        now += FRAME;
        rec.touch_moved(Point::new(50.0, 400.0 - f64::from(step) * 8.0), 0.0, now, &mut host);
    }
    rec.touch_ended(now, &mut host);
    pump(&mut rec, &mut now, Duration::from_secs(4), &mut host);
}
