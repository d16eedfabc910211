// Copyright 2025 the Hover Recognizer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The hover state machine and its emission rules.
//!
//! ## State machine
//!
//! Each tracked element owns one [`HoverState`] wrapping a [`HoverPhase`]:
//!
//! | Event | Precondition | Effect |
//! |---|---|---|
//! | `TouchStart` | — | phase = `Touched` |
//! | `PointerOver` / `MouseOver` | `Idle` or `InHitSlop`, target not owned | touch pointer → `Touched`; position within hit slop → `InHitSlop`; otherwise emit hover-in, phase = `Hovering` |
//! | `PointerOut` / `MouseOut` | — | if `Hovering`: emit hover-out; then always phase = `Idle` (full reset) |
//! | `PointerMove` | phase ≠ `Touched` | `InHitSlop` → leaving the slop emits hover-in and phase = `Hovering`; `Hovering` → entering the slop emits hover-out and phase = `InHitSlop` |
//! | `PointerCancel` | — | if `Hovering`: emit hover-out, phase = `Touched` |
//!
//! The over arm checks in a fixed priority order: touch detection first, then
//! hit-slop membership, then hover. `Touched` suppresses over and move
//! handling entirely; only an out event clears it, and cancel latches it.
//! The hit slop acts as a buffer: a move can only enter it from `Hovering`
//! and only leave it into `Hovering`, never from a cold state.
//!
//! ## Emission rules
//!
//! Hover-in and hover-out share the related-target guard: when the event's
//! related target is still within the same logical component, nothing is
//! emitted (the pointer merely crossed an internal boundary). They differ in
//! listener pairing:
//!
//! - hover-in emits nothing unless `on_hover_change` is present; with it, an
//!   optional `hoverin` precedes the mandatory `hoverchange(true)`.
//! - hover-out emits `hoverout` and/or `hoverchange(false)` independently,
//!   whichever listeners are present.
//!
//! The asymmetry is inherited from the source policy this recognizer
//! implements and is preserved deliberately; hosts that want `hoverin` alone
//! must also attach a change listener.
//!
//! State transitions never depend on whether emission actually dispatched
//! anything: a suppressed hover-in still moves the phase to `Hovering`, so
//! the machine and the host's notion of the pointer position stay in step.
//!
//! ## Minimal example
//!
//! ```
//! use hover_recognizer::recognizer::{HoverPhase, HoverRecognizer};
//! use hover_recognizer::types::{
//!     DispatchContext, EventType, HoverConfig, HoverEventKind, PlatformCapabilities,
//!     PointerEvent, PointerKind,
//! };
//! use kurbo::Point;
//!
//! # struct Host;
//! # impl DispatchContext<u32, u32> for Host {
//! #     fn is_target_within_event_component(&self, _node: &u32) -> bool {
//! #         false
//! #     }
//! #     fn is_target_owned(&self, _node: &u32) -> bool {
//! #         false
//! #     }
//! #     fn is_position_within_touch_hit_target(&self, _position: Point) -> bool {
//! #         false
//! #     }
//! #     fn dispatch_event(&mut self, _kind: HoverEventKind, _l: &u32, _t: &u32, _b: bool) {}
//! # }
//! let recognizer = HoverRecognizer::new(PlatformCapabilities {
//!     pointer_events: true,
//! });
//! let mut state = recognizer.create_state();
//! let mut host = Host;
//!
//! // A touch pointer never produces hover; the stream is latched as touched.
//! recognizer.handle_event(
//!     &mut host,
//!     &PointerEvent {
//!         event_type: EventType::PointerOver,
//!         target: 1,
//!         related_target: None,
//!         position: Point::ZERO,
//!         pointer_kind: PointerKind::Touch,
//!     },
//!     &HoverConfig::default(),
//!     &mut state,
//! );
//! assert_eq!(state.phase(), HoverPhase::Touched);
//! ```

use crate::types::{
    DispatchContext, EventType, EventTypes, HoverConfig, HoverEventKind, PlatformCapabilities,
    PointerEvent, PointerKind,
};

/// The logical phase of a tracked element's hover interaction.
///
/// An explicit tagged state rather than independent flags, so contradictory
/// combinations (hovered while buffered in the hit slop, hovered while
/// touched) are unrepresentable.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum HoverPhase {
    /// No interaction in progress.
    #[default]
    Idle,
    /// A hover-in has been reported and no matching hover-out yet.
    Hovering,
    /// The pointer is inside the extended touch hit-region but outside the
    /// visual bounds. Transitional; not reported as hover.
    InHitSlop,
    /// The interaction stream is touch-originated; hover is suppressed until
    /// an out event resets the element.
    Touched,
}

/// Mutable hover state, one instance per tracked element.
///
/// Created by [`HoverRecognizer::create_state`] when the host begins tracking
/// an element, mutated exclusively by
/// [`HoverRecognizer::handle_event`], and discarded when tracking stops.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct HoverState {
    phase: HoverPhase,
}

impl HoverState {
    /// A fresh, idle state.
    pub fn new() -> Self {
        Self::default()
    }

    /// The current phase.
    pub fn phase(&self) -> HoverPhase {
        self.phase
    }

    /// Returns `true` iff a hover-in has been reported and no matching
    /// hover-out yet.
    pub fn is_hovered(&self) -> bool {
        self.phase == HoverPhase::Hovering
    }

    /// Returns `true` while the pointer is buffered in the hit-slop ring.
    pub fn is_in_hit_slop(&self) -> bool {
        self.phase == HoverPhase::InHitSlop
    }

    /// Returns `true` while the interaction stream is identified as touch.
    pub fn is_touched(&self) -> bool {
        self.phase == HoverPhase::Touched
    }
}

/// The hover recognizer: subscription set plus the transition function.
///
/// ## Usage
///
/// - Construct once per process with [`HoverRecognizer::new`], passing the
///   host's detected [`PlatformCapabilities`].
/// - Register listeners for exactly [`Self::target_event_types`].
/// - Per tracked element, keep one [`HoverState`] from [`Self::create_state`]
///   and feed every matching native event through [`Self::handle_event`].
///
/// The recognizer holds no per-element data itself; it is a stateless
/// transition table over the state the host passes back in. The host is
/// responsible for serializing events per element — each `handle_event` call
/// runs to completion and never suspends.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct HoverRecognizer {
    targets: EventTypes,
}

impl HoverRecognizer {
    /// Create a recognizer for a host with the given capabilities.
    pub fn new(caps: PlatformCapabilities) -> Self {
        Self {
            targets: EventTypes::for_capabilities(caps),
        }
    }

    /// The native event types this recognizer wants to receive.
    pub fn target_event_types(&self) -> EventTypes {
        self.targets
    }

    /// Create a fresh state for a newly tracked element.
    pub fn create_state(&self) -> HoverState {
        HoverState::new()
    }

    /// Process one native event for one tracked element.
    ///
    /// Reads and writes `state` in place and pushes zero or more synthesized
    /// events through `ctx`. Every branch is total: unrecognized situations
    /// fall through silently and absent listeners are no-ops, so this never
    /// fails and never panics.
    pub fn handle_event<K, L, C>(
        &self,
        ctx: &mut C,
        event: &PointerEvent<K>,
        config: &HoverConfig<L>,
        state: &mut HoverState,
    ) where
        C: DispatchContext<K, L>,
    {
        match event.event_type {
            EventType::TouchStart => {
                state.phase = HoverPhase::Touched;
            }
            EventType::PointerOver | EventType::MouseOver => {
                // Hovering already reported, or touch suppression active:
                // nothing to do. Owned targets are skipped so a nested
                // component reports its own hover instead.
                if !matches!(state.phase, HoverPhase::Idle | HoverPhase::InHitSlop)
                    || ctx.is_target_owned(&event.target)
                {
                    return;
                }
                // Fixed priority: touch detection, then hit-slop membership,
                // then hover.
                if event.pointer_kind == PointerKind::Touch {
                    state.phase = HoverPhase::Touched;
                } else if ctx.is_position_within_touch_hit_target(event.position) {
                    state.phase = HoverPhase::InHitSlop;
                } else {
                    dispatch_hover_in(ctx, event, config);
                    state.phase = HoverPhase::Hovering;
                }
            }
            EventType::PointerOut | EventType::MouseOut => {
                if state.phase == HoverPhase::Hovering {
                    dispatch_hover_out(ctx, event, config);
                }
                // Full reset on any out event, including touch suppression.
                state.phase = HoverPhase::Idle;
            }
            EventType::PointerMove => match state.phase {
                HoverPhase::InHitSlop => {
                    if !ctx.is_position_within_touch_hit_target(event.position) {
                        dispatch_hover_in(ctx, event, config);
                        state.phase = HoverPhase::Hovering;
                    }
                }
                HoverPhase::Hovering => {
                    if ctx.is_position_within_touch_hit_target(event.position) {
                        dispatch_hover_out(ctx, event, config);
                        state.phase = HoverPhase::InHitSlop;
                    }
                }
                HoverPhase::Idle | HoverPhase::Touched => {}
            },
            EventType::PointerCancel => {
                if state.phase == HoverPhase::Hovering {
                    dispatch_hover_out(ctx, event, config);
                    // Cancellation is treated as touch taking over: hover
                    // stays suppressed until the next qualifying over event
                    // after an out reset.
                    state.phase = HoverPhase::Touched;
                }
            }
        }
    }
}

/// Emit the hover-in pair for `event`'s target.
///
/// No-op without a change listener: `hoverin` and `hoverchange(true)` are
/// only delivered together. Aborts when the related target is within the same
/// logical component (the pointer crossed an internal boundary, not the
/// component's).
fn dispatch_hover_in<K, L, C>(ctx: &mut C, event: &PointerEvent<K>, config: &HoverConfig<L>)
where
    C: DispatchContext<K, L>,
{
    let Some(on_hover_change) = &config.on_hover_change else {
        return;
    };
    if let Some(related) = &event.related_target
        && ctx.is_target_within_event_component(related)
    {
        return;
    }
    if let Some(on_hover_in) = &config.on_hover_in {
        ctx.dispatch_event(HoverEventKind::HoverIn, on_hover_in, &event.target, true);
    }
    ctx.dispatch_event(
        HoverEventKind::HoverChange(true),
        on_hover_change,
        &event.target,
        true,
    );
}

/// Emit the hover-out pair for `event`'s target.
///
/// Same related-target guard as hover-in, but `hoverout` and
/// `hoverchange(false)` fire independently of each other.
fn dispatch_hover_out<K, L, C>(ctx: &mut C, event: &PointerEvent<K>, config: &HoverConfig<L>)
where
    C: DispatchContext<K, L>,
{
    if let Some(related) = &event.related_target
        && ctx.is_target_within_event_component(related)
    {
        return;
    }
    if let Some(on_hover_out) = &config.on_hover_out {
        ctx.dispatch_event(HoverEventKind::HoverOut, on_hover_out, &event.target, true);
    }
    if let Some(on_hover_change) = &config.on_hover_change {
        ctx.dispatch_event(
            HoverEventKind::HoverChange(false),
            on_hover_change,
            &event.target,
            true,
        );
    }
}
