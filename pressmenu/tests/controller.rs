// Copyright 2026 the Press Menu Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Controller routing: menu lifecycle calls, presentation and host output.

use core::time::Duration;

use kurbo::Point;
use pressmenu::{
    ControllerHost, FeedbackSignal, ForceCapability, ForceMenu, ForceMenuController,
    GesturePhase, MenuListener, Presentation, PresentationConfig,
};

#[derive(Clone, Debug, PartialEq)]
enum MenuCall {
    Begin,
    Scroll(f64),
    Select,
    End { canceled: bool },
}

#[derive(Default)]
struct MenuLog {
    calls: Vec<MenuCall>,
}

impl MenuListener for MenuLog {
    fn begin(&mut self) {
        self.calls.push(MenuCall::Begin);
    }

    fn did_scroll(&mut self, y: f64) {
        self.calls.push(MenuCall::Scroll(y));
    }

    fn did_select(&mut self) {
        self.calls.push(MenuCall::Select);
    }

    fn end(&mut self, canceled: bool) {
        self.calls.push(MenuCall::End { canceled });
    }
}

#[derive(Default)]
struct HostLog {
    phases: Vec<GesturePhase>,
    presentations: Vec<Presentation>,
    feedback: Vec<FeedbackSignal>,
}

impl ControllerHost for HostLog {
    fn phase_changed(&mut self, phase: GesturePhase) {
        self.phases.push(phase);
    }

    fn presentation_changed(&mut self, presentation: &Presentation) {
        self.presentations.push(*presentation);
    }

    fn feedback(&mut self, signal: FeedbackSignal) {
        self.feedback.push(signal);
    }
}

fn ms(value: u64) -> Duration {
    Duration::from_millis(value)
}

fn controller(capability: ForceCapability) -> ForceMenuController<MenuLog, HostLog> {
    ForceMenuController::new(
        PresentationConfig::default(),
        capability,
        MenuLog::default(),
        HostLog::default(),
    )
    .unwrap()
}

fn frames(controller: &mut ForceMenuController<MenuLog, HostLog>, from: u64, until: u64) {
    let mut now = from;
    while now < until {
        now = (now + 16).min(until);
        controller.advance(ms(now));
    }
}

#[test]
fn full_gesture_drives_menu_lifecycle() {
    let mut c = controller(ForceCapability::Unavailable);
    c.touch_began(1, Point::new(0.0, 500.0), ms(0));
    c.advance(ms(300));
    frames(&mut c, 300, 700);
    c.touch_moved(Point::new(0.0, 480.0), 0.0, ms(710));
    c.touch_ended(ms(720));
    frames(&mut c, 720, 920);

    let calls = &c.menu().calls;
    assert_eq!(calls.first(), Some(&MenuCall::Begin));
    assert_eq!(calls.last(), Some(&MenuCall::End { canceled: false }));
    assert!(calls.contains(&MenuCall::Scroll(-20.0)));
    assert!(calls.contains(&MenuCall::Select));

    let begins = calls.iter().filter(|c| **c == MenuCall::Begin).count();
    assert_eq!(begins, 1);

    // Scrolling stops before selecting starts.
    let last_scroll = calls
        .iter()
        .rposition(|c| matches!(c, MenuCall::Scroll(_)))
        .unwrap();
    let first_select = calls.iter().position(|c| *c == MenuCall::Select).unwrap();
    assert!(last_scroll < first_select);

    assert_eq!(
        c.host().phases,
        [
            GesturePhase::Enter,
            GesturePhase::Scroll,
            GesturePhase::Exit,
            GesturePhase::None
        ]
    );
    assert_eq!(c.host().feedback, [FeedbackSignal::Tap]);
}

#[test]
fn cancel_ends_menu_as_canceled_without_select() {
    let mut c = controller(ForceCapability::Available);
    c.touch_began(1, Point::ZERO, ms(0));
    c.touch_moved(Point::ZERO, 3.0, ms(0));
    c.advance(ms(20));
    c.touch_cancelled();

    let calls = &c.menu().calls;
    assert_eq!(calls.first(), Some(&MenuCall::Begin));
    assert_eq!(calls.last(), Some(&MenuCall::End { canceled: true }));
    assert!(!calls.contains(&MenuCall::Select));
    assert_eq!(
        c.host().feedback,
        [FeedbackSignal::Confirm, FeedbackSignal::Reject]
    );
    assert_eq!(c.presentation(), Presentation::from_entry(0.0, 0.9));
}

#[test]
fn partial_press_released_is_canceled() {
    let mut c = controller(ForceCapability::Available);
    c.touch_began(1, Point::ZERO, ms(0));
    c.touch_moved(Point::ZERO, 2.0, ms(10));
    c.touch_ended(ms(20));

    assert_eq!(
        c.menu().calls,
        [MenuCall::Begin, MenuCall::End { canceled: true }]
    );
    // The phase never left None, so the host never heard about one.
    assert!(c.host().phases.is_empty());
}

#[test]
fn presentation_follows_entry_factor() {
    let mut c = controller(ForceCapability::Available);
    c.touch_began(1, Point::ZERO, ms(0));
    c.touch_moved(Point::ZERO, 1.5, ms(10));

    let partial = c.presentation();
    assert!(partial.main_scale < 1.0);
    assert!(!partial.menu_visible);

    c.touch_moved(Point::ZERO, 2.8, ms(20));
    let deeper = c.presentation();
    assert!(deeper.main_scale < partial.main_scale);
    assert!(deeper.menu_visible);
    assert!(deeper.menu_alpha > 0.0);

    c.touch_moved(Point::ZERO, 3.0, ms(30));
    c.advance(ms(80));
    let open = c.presentation();
    assert!((open.main_scale - 0.9).abs() < 1e-9);
    assert_eq!(open.menu_alpha, 1.0);

    let reported = c.host().presentations.last().copied();
    assert_eq!(reported, Some(open));
}

#[test]
fn disabling_mid_gesture_cancels() {
    let mut c = controller(ForceCapability::Unavailable);
    c.touch_began(1, Point::ZERO, ms(0));
    c.advance(ms(300));
    assert_eq!(c.phase(), GesturePhase::Enter);

    c.set_enabled(false);
    assert!(!c.is_enabled());
    assert_eq!(c.phase(), GesturePhase::None);
    assert_eq!(c.menu().calls.last(), Some(&MenuCall::End { canceled: true }));

    c.touch_began(1, Point::ZERO, ms(400));
    c.advance(ms(800));
    assert_eq!(c.phase(), GesturePhase::None);

    c.set_enabled(true);
    c.touch_began(1, Point::ZERO, ms(900));
    c.advance(ms(1200));
    assert_eq!(c.phase(), GesturePhase::Enter);
}

#[test]
fn menu_selection_commits_through_controller() {
    let items = vec!["one", "two", "three", "four", "five"];
    let mut c = ForceMenuController::new(
        PresentationConfig::default(),
        ForceCapability::Available,
        ForceMenu::new(items).with_item_height(40.0),
        (),
    )
    .unwrap();
    c.menu_mut().select(Some(2));

    c.touch_began(1, Point::new(0.0, 200.0), ms(0));
    c.touch_moved(Point::new(0.0, 200.0), 3.0, ms(0));
    c.advance(ms(50));
    assert!(c.menu().is_scrolling());

    c.touch_moved(Point::new(0.0, 180.0), 1.0, ms(60));
    assert_eq!(c.menu().candidate(), Some(3));
    assert_eq!(c.menu().selected(), Some(2));

    c.touch_ended(ms(70));
    c.advance(ms(270));
    assert_eq!(c.menu().selected_item(), Some(&"four"));
    assert!(!c.menu().is_scrolling());
}

#[test]
fn canceled_gesture_keeps_menu_selection() {
    let mut c = ForceMenuController::new(
        PresentationConfig::default(),
        ForceCapability::Available,
        ForceMenu::new(vec![1, 2, 3, 4, 5]).with_item_height(40.0),
        (),
    )
    .unwrap();
    c.menu_mut().select(Some(2));

    c.touch_began(1, Point::new(0.0, 200.0), ms(0));
    c.touch_moved(Point::new(0.0, 200.0), 3.0, ms(0));
    c.advance(ms(50));
    c.touch_moved(Point::new(0.0, 100.0), 1.0, ms(60));
    c.touch_cancelled();

    assert_eq!(c.menu().selected(), Some(2));
    let (menu, ()) = c.into_parts();
    assert_eq!(menu.scroll_y(), 0.0);
    assert!((menu.offset() - 2.0 * 40.0 * 0.666).abs() < 1e-9);
}
