// Copyright 2025 the Hover Recognizer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hit-slop buffering: crossing the invisible touch-target ring.
//!
//! An element with visual bounds 20×20..80×80 carries a touch hit-region of
//! 0×0..100×100. Moving from the visual bounds into the ring reports a
//! hover-out and buffers the state; moving back in reports a hover-in again.
//! Entering the ring directly from outside reports nothing at all.
//!
//! Run:
//! - `cargo run -p hover_recognizer_examples --example hover_hit_slop`

use hover_recognizer::recognizer::{HoverPhase, HoverRecognizer};
use hover_recognizer::types::{
    DispatchContext, EventType, HoverConfig, HoverEventKind, PlatformCapabilities, PointerEvent,
    PointerKind,
};
use kurbo::{Point, Rect};

struct Host {
    slop: Rect,
    visual: Rect,
    sent: Vec<HoverEventKind>,
}

impl DispatchContext<u32, &'static str> for Host {
    fn is_target_within_event_component(&self, _node: &u32) -> bool {
        false
    }
    fn is_target_owned(&self, _node: &u32) -> bool {
        false
    }
    fn is_position_within_touch_hit_target(&self, position: Point) -> bool {
        self.slop.contains(position) && !self.visual.contains(position)
    }
    fn dispatch_event(
        &mut self,
        kind: HoverEventKind,
        _listener: &&'static str,
        target: &u32,
        _bubbles: bool,
    ) {
        println!("  dispatch {kind:?} on node {target}");
        self.sent.push(kind);
    }
}

fn move_to(x: f64, y: f64) -> PointerEvent<u32> {
    PointerEvent {
        event_type: EventType::PointerMove,
        target: 1,
        related_target: None,
        position: Point::new(x, y),
        pointer_kind: PointerKind::Mouse,
    }
}

fn main() {
    let recognizer = HoverRecognizer::new(PlatformCapabilities {
        pointer_events: true,
    });
    let config = HoverConfig {
        on_hover_in: Some("in"),
        on_hover_out: Some("out"),
        on_hover_change: Some("change"),
    };
    let mut host = Host {
        slop: Rect::new(0.0, 0.0, 100.0, 100.0),
        visual: Rect::new(20.0, 20.0, 80.0, 80.0),
        sent: Vec::new(),
    };
    let mut state = recognizer.create_state();

    println!("== Enter through the slop ring ==");
    // Over lands in the ring: buffered, silent.
    recognizer.handle_event(
        &mut host,
        &PointerEvent {
            event_type: EventType::PointerOver,
            target: 1,
            related_target: None,
            position: Point::new(10.0, 50.0),
            pointer_kind: PointerKind::Mouse,
        },
        &config,
        &mut state,
    );
    assert_eq!(state.phase(), HoverPhase::InHitSlop);
    assert!(host.sent.is_empty());
    println!("  (buffered in hit slop; nothing dispatched)");

    println!("== Cross into the visual bounds ==");
    recognizer.handle_event(&mut host, &move_to(50.0, 50.0), &config, &mut state);
    assert!(state.is_hovered());

    println!("== Drift back into the ring ==");
    recognizer.handle_event(&mut host, &move_to(90.0, 50.0), &config, &mut state);
    assert_eq!(state.phase(), HoverPhase::InHitSlop);

    println!("== And in again ==");
    recognizer.handle_event(&mut host, &move_to(40.0, 40.0), &config, &mut state);
    assert!(state.is_hovered());

    assert_eq!(
        host.sent,
        vec![
            HoverEventKind::HoverIn,
            HoverEventKind::HoverChange(true),
            HoverEventKind::HoverOut,
            HoverEventKind::HoverChange(false),
            HoverEventKind::HoverIn,
            HoverEventKind::HoverChange(true),
        ]
    );
}
