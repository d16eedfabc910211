// Copyright 2025 the Hover Recognizer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Basic hover recognition: mouse enter/leave and touch suppression.
//!
//! This example drives one tracked element through a mouse hover pass and a
//! touch interaction, printing every synthesized event the recognizer pushes
//! back through the dispatch context.
//!
//! Run:
//! - `cargo run -p hover_recognizer_examples --example hover_basics`

use hover_recognizer::recognizer::HoverRecognizer;
use hover_recognizer::types::{
    DispatchContext, EventType, HoverConfig, HoverEventKind, PlatformCapabilities, PointerEvent,
    PointerKind,
};
use kurbo::Point;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
struct Node(u32);

/// A toy dispatch layer: no hit slop, no nested components, events are
/// recorded and printed.
struct Host {
    sent: Vec<(HoverEventKind, &'static str, Node)>,
}

impl DispatchContext<Node, &'static str> for Host {
    fn is_target_within_event_component(&self, _node: &Node) -> bool {
        false
    }
    fn is_target_owned(&self, _node: &Node) -> bool {
        false
    }
    fn is_position_within_touch_hit_target(&self, _position: Point) -> bool {
        false
    }
    fn dispatch_event(
        &mut self,
        kind: HoverEventKind,
        listener: &&'static str,
        target: &Node,
        bubbles: bool,
    ) {
        println!("  dispatch {kind:?} -> {listener} on {target:?} (bubbles: {bubbles})");
        self.sent.push((kind, *listener, *target));
    }
}

fn event(event_type: EventType, kind: PointerKind) -> PointerEvent<Node> {
    PointerEvent {
        event_type,
        target: Node(7),
        related_target: None,
        position: Point::new(40.0, 40.0),
        pointer_kind: kind,
    }
}

fn main() {
    let recognizer = HoverRecognizer::new(PlatformCapabilities {
        pointer_events: true,
    });
    println!(
        "subscribing to {:?}",
        recognizer.target_event_types()
    );

    let config = HoverConfig {
        on_hover_in: Some("on_hover_in"),
        on_hover_out: Some("on_hover_out"),
        on_hover_change: Some("on_hover_change"),
    };
    let mut host = Host { sent: Vec::new() };
    let mut state = recognizer.create_state();

    println!("== Mouse pass ==");
    recognizer.handle_event(
        &mut host,
        &event(EventType::PointerOver, PointerKind::Mouse),
        &config,
        &mut state,
    );
    assert!(state.is_hovered());
    recognizer.handle_event(
        &mut host,
        &event(EventType::PointerOut, PointerKind::Mouse),
        &config,
        &mut state,
    );
    assert!(!state.is_hovered());
    assert_eq!(
        host.sent
            .iter()
            .map(|(kind, ..)| *kind)
            .collect::<Vec<_>>(),
        vec![
            HoverEventKind::HoverIn,
            HoverEventKind::HoverChange(true),
            HoverEventKind::HoverOut,
            HoverEventKind::HoverChange(false),
        ]
    );

    println!("== Touch pass ==");
    host.sent.clear();
    recognizer.handle_event(
        &mut host,
        &event(EventType::PointerOver, PointerKind::Touch),
        &config,
        &mut state,
    );
    // Touch never hovers; a later mouse over stays suppressed until an out
    // event resets the element.
    recognizer.handle_event(
        &mut host,
        &event(EventType::PointerOver, PointerKind::Mouse),
        &config,
        &mut state,
    );
    assert!(host.sent.is_empty());
    assert!(state.is_touched());
    println!("  (no dispatches; touch suppression active)");
}
