// Copyright 2025 the Hover Recognizer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=hover_recognizer --heading-base-level=0

//! Hover Recognizer: a touch-aware hover gesture recognizer for UI toolkits.
//!
//! ## Overview
//!
//! This crate turns a stream of low-level pointer/touch/mouse events into
//! semantically meaningful hover transitions. It does not route events and it
//! does not invoke user callbacks. Instead, a host dispatch layer feeds it one
//! event at a time through [`HoverRecognizer::handle_event`](crate::recognizer::HoverRecognizer::handle_event),
//! and the recognizer pushes synthesized `hoverin` / `hoverout` / `hoverchange`
//! events back through an injected [`DispatchContext`](crate::types::DispatchContext).
//!
//! The hard part is disambiguation, and that is the whole job of this crate:
//!
//! - Touch-originated pointer events mimic hover on many platforms. A touch
//!   pointer must never produce hover transitions, and once a stream is
//!   identified as touch it stays suppressed until an out event resets it.
//! - Elements often carry an enlarged invisible touch-target region ("hit
//!   slop") around their visual bounds. Crossing into or out of that ring must
//!   buffer the hover state rather than produce spurious enter/leave pairs.
//! - Bubbling and re-entrant events whose related target is still inside the
//!   same logical component must not re-report hover.
//!
//! ## State machine
//!
//! Each tracked element owns one [`HoverState`](crate::recognizer::HoverState),
//! a four-phase machine:
//!
//! - `Idle`: no interaction.
//! - `Hovering`: a hover-in has been reported and no hover-out yet.
//! - `InHitSlop`: the pointer sits in the extended touch hit-region but
//!   outside the visual bounds; a transitional, non-hover sub-state.
//! - `Touched`: the stream is touch-originated; hover logic is suppressed.
//!
//! Transitions are driven by the event type, with a fixed priority on over
//! events: touch detection first, then hit-slop membership, then hover.
//! See [`recognizer`] for the full table.
//!
//! ## Workflow
//!
//! 1) Detect platform capabilities once at startup and build a
//!    [`HoverRecognizer`](crate::recognizer::HoverRecognizer); register the
//!    native event types it reports via
//!    [`target_event_types`](crate::recognizer::HoverRecognizer::target_event_types).
//! 2) Create one state per tracked element with
//!    [`create_state`](crate::recognizer::HoverRecognizer::create_state).
//! 3) For each native event, call `handle_event` with the host's
//!    [`DispatchContext`](crate::types::DispatchContext), the element's
//!    [`HoverConfig`](crate::types::HoverConfig), and its state. Synthesized
//!    events come back through the context, always with `bubbles = true`.
//!
//! ## Minimal usage
//!
//! ```
//! use hover_recognizer::recognizer::HoverRecognizer;
//! use hover_recognizer::types::{
//!     DispatchContext, EventType, HoverConfig, HoverEventKind, PlatformCapabilities,
//!     PointerEvent, PointerKind,
//! };
//! use kurbo::Point;
//!
//! # struct Host {
//! #     sent: Vec<(HoverEventKind, u32)>,
//! # }
//! # impl DispatchContext<u32, &'static str> for Host {
//! #     fn is_target_within_event_component(&self, _node: &u32) -> bool {
//! #         false
//! #     }
//! #     fn is_target_owned(&self, _node: &u32) -> bool {
//! #         false
//! #     }
//! #     fn is_position_within_touch_hit_target(&self, _position: Point) -> bool {
//! #         false
//! #     }
//! #     fn dispatch_event(
//! #         &mut self,
//! #         kind: HoverEventKind,
//! #         _listener: &&'static str,
//! #         target: &u32,
//! #         _bubbles: bool,
//! #     ) {
//! #         self.sent.push((kind, *target));
//! #     }
//! # }
//! let recognizer = HoverRecognizer::new(PlatformCapabilities {
//!     pointer_events: true,
//! });
//! let config = HoverConfig {
//!     on_hover_in: Some("in"),
//!     on_hover_out: Some("out"),
//!     on_hover_change: Some("change"),
//! };
//! let mut state = recognizer.create_state();
//! let mut host = Host { sent: Vec::new() };
//!
//! // A mouse pointer enters element 7, outside any touch hit-slop ring.
//! recognizer.handle_event(
//!     &mut host,
//!     &PointerEvent {
//!         event_type: EventType::PointerOver,
//!         target: 7,
//!         related_target: None,
//!         position: Point::new(12.0, 8.0),
//!         pointer_kind: PointerKind::Mouse,
//!     },
//!     &config,
//!     &mut state,
//! );
//!
//! assert!(state.is_hovered());
//! assert_eq!(
//!     host.sent,
//!     vec![
//!         (HoverEventKind::HoverIn, 7),
//!         (HoverEventKind::HoverChange(true), 7),
//!     ]
//! );
//! ```
//!
//! ## Layering
//!
//! The recognizer is a pure transition function over injected collaborators.
//! Event registration, callback invocation, and hit-slop geometry live in the
//! host; the [`DispatchContext`](crate::types::DispatchContext) trait is the
//! entire seam. Emission is fire-and-forget: delivery is the dispatch layer's
//! concern, and the recognizer never fails.
//!
//! This crate is `no_std` and does not allocate.

#![no_std]

#[cfg(test)]
extern crate alloc;

pub mod recognizer;
pub mod types;
