// Copyright 2025 the Hover Recognizer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core types for the recognizer: event discriminators, subscription sets,
//! per-element configuration, and the host dispatch collaborator.
//!
//! ## Overview
//!
//! These types describe the recognizer protocol and its inputs/outputs.
//! They are referenced by the [`recognizer`](crate::recognizer) and
//! implemented or constructed by the host dispatch layer.

use kurbo::Point;

/// Low-level event discriminator driving the transition table.
///
/// Appears on each [`PointerEvent`] handed to
/// [`HoverRecognizer::handle_event`](crate::recognizer::HoverRecognizer::handle_event).
/// The mouse/touch variants are legacy fallbacks for hosts without native
/// pointer-event support; the table treats `MouseOver`/`MouseOut` exactly
/// like their pointer counterparts.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum EventType {
    /// Pointer entered the element or one of its descendants.
    PointerOver,
    /// Pointer moved while over the element.
    PointerMove,
    /// Pointer left the element.
    PointerOut,
    /// The host canceled the pointer stream (e.g. touch takeover).
    PointerCancel,
    /// Legacy fallback: a touch interaction began.
    TouchStart,
    /// Legacy fallback for [`PointerOver`](Self::PointerOver).
    MouseOver,
    /// Legacy fallback for [`PointerOut`](Self::PointerOut).
    MouseOut,
}

bitflags::bitflags! {
    /// Set of native event types a recognizer subscribes to.
    ///
    /// Computed once per process from [`PlatformCapabilities`] via
    /// [`EventTypes::for_capabilities`]; exposed by
    /// [`HoverRecognizer::target_event_types`](crate::recognizer::HoverRecognizer::target_event_types)
    /// so the host can register exactly these listeners.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct EventTypes: u8 {
        /// Subscribe to [`EventType::PointerOver`].
        const POINTER_OVER   = 0b0000_0001;
        /// Subscribe to [`EventType::PointerMove`].
        const POINTER_MOVE   = 0b0000_0010;
        /// Subscribe to [`EventType::PointerOut`].
        const POINTER_OUT    = 0b0000_0100;
        /// Subscribe to [`EventType::PointerCancel`].
        const POINTER_CANCEL = 0b0000_1000;
        /// Subscribe to [`EventType::TouchStart`].
        const TOUCH_START    = 0b0001_0000;
        /// Subscribe to [`EventType::MouseOver`].
        const MOUSE_OVER     = 0b0010_0000;
        /// Subscribe to [`EventType::MouseOut`].
        const MOUSE_OUT      = 0b0100_0000;
    }
}

impl EventTypes {
    /// The pointer-event subscriptions every recognizer needs.
    pub const POINTER: Self = Self::POINTER_OVER
        .union(Self::POINTER_MOVE)
        .union(Self::POINTER_OUT)
        .union(Self::POINTER_CANCEL);

    /// The legacy touch/mouse fallback subscriptions.
    pub const FALLBACK: Self = Self::TOUCH_START
        .union(Self::MOUSE_OVER)
        .union(Self::MOUSE_OUT);

    /// Compute the subscription set for a host platform.
    ///
    /// Pointer events are always requested. The touch/mouse fallbacks are
    /// added only when the platform lacks native pointer-event support. This
    /// is a static configuration decision made once at startup, not a
    /// per-event branch.
    pub fn for_capabilities(caps: PlatformCapabilities) -> Self {
        if caps.pointer_events {
            Self::POINTER
        } else {
            Self::POINTER | Self::FALLBACK
        }
    }

    /// Returns `true` if this set subscribes to the given event type.
    pub fn wants(self, event_type: EventType) -> bool {
        let flag = match event_type {
            EventType::PointerOver => Self::POINTER_OVER,
            EventType::PointerMove => Self::POINTER_MOVE,
            EventType::PointerOut => Self::POINTER_OUT,
            EventType::PointerCancel => Self::POINTER_CANCEL,
            EventType::TouchStart => Self::TOUCH_START,
            EventType::MouseOver => Self::MOUSE_OVER,
            EventType::MouseOut => Self::MOUSE_OUT,
        };
        self.contains(flag)
    }
}

/// Host input capabilities, detected once at startup.
///
/// Pass the detected value to
/// [`HoverRecognizer::new`](crate::recognizer::HoverRecognizer::new); the
/// recognizer derives its subscription set from it. Keeping this an explicit
/// constructor argument (rather than ambient process state) keeps recognizers
/// testable under both configurations.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct PlatformCapabilities {
    /// Whether the host delivers native pointer events.
    pub pointer_events: bool,
}

/// The physical device class behind a pointer event.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum PointerKind {
    /// A mouse or comparable indirect pointing device.
    Mouse,
    /// A stylus/pen.
    Pen,
    /// A finger on a touch surface. Never produces hover.
    Touch,
}

/// A native input event as seen by the recognizer.
///
/// `K` is the host's node key type. The recognizer never interprets keys
/// itself; it hands them to the [`DispatchContext`] predicates and back out
/// through [`DispatchContext::dispatch_event`].
#[derive(Clone, Debug)]
pub struct PointerEvent<K> {
    /// Discriminator driving the transition table.
    pub event_type: EventType,
    /// The logical target node for dispatch.
    pub target: K,
    /// For over/out transitions, the node being left/entered on the other
    /// side of the boundary, if any.
    pub related_target: Option<K>,
    /// Pointer position in the coordinate space the host's hit-slop
    /// predicate expects. Not validated here.
    pub position: Point,
    /// Device class reported by the host for this event.
    pub pointer_kind: PointerKind,
}

/// Per-element hover configuration: which listeners are attached.
///
/// `L` is the host's listener handle type (a callback id, a boxed closure,
/// a widget message constructor — the recognizer only passes it through to
/// [`DispatchContext::dispatch_event`]). All-absent is the default and makes
/// the recognizer a state-only tracker that never dispatches.
#[derive(Clone, Debug)]
pub struct HoverConfig<L> {
    /// Listener for synthesized `hoverin` events.
    ///
    /// Note: `hoverin` is only delivered when [`on_hover_change`](Self::on_hover_change)
    /// is also present. See
    /// [`recognizer`](crate::recognizer) for the pairing rule.
    pub on_hover_in: Option<L>,
    /// Listener for synthesized `hoverout` events. Fires on its own, without
    /// requiring a change listener.
    pub on_hover_out: Option<L>,
    /// Listener for synthesized `hoverchange` events, invoked with `true` on
    /// entering hover and `false` on leaving.
    pub on_hover_change: Option<L>,
}

impl<L> Default for HoverConfig<L> {
    fn default() -> Self {
        Self {
            on_hover_in: None,
            on_hover_out: None,
            on_hover_change: None,
        }
    }
}

/// A synthesized high-level event produced by the recognizer.
///
/// Passed to [`DispatchContext::dispatch_event`] together with the listener
/// from the element's [`HoverConfig`], the target node, and `bubbles = true`.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum HoverEventKind {
    /// `hoverin`: the pointer began hovering the element.
    HoverIn,
    /// `hoverout`: the pointer stopped hovering the element.
    HoverOut,
    /// `hoverchange`: carries `true` on entering hover, `false` on leaving.
    HoverChange(bool),
}

/// The host dispatch collaborator injected into every `handle_event` call.
///
/// The recognizer consumes exactly this capability set: target predicates for
/// its guards, the hit-slop membership test, and fire-and-forget event
/// emission. Modeling the seam as a trait keeps the transition function pure
/// and testable with a recording implementation.
pub trait DispatchContext<K, L> {
    /// Returns `true` if `node` belongs to the same logical event component
    /// as the element being tracked. Used to suppress re-hover when the
    /// pointer moves between descendant nodes of one component.
    fn is_target_within_event_component(&self, node: &K) -> bool;

    /// Returns `true` if the lowest-level target already belongs to a nested
    /// component that will itself report hover.
    fn is_target_owned(&self, node: &K) -> bool;

    /// Returns `true` if `position` lies within the element's extended touch
    /// hit-region but outside its visual bounds.
    fn is_position_within_touch_hit_target(&self, position: Point) -> bool;

    /// Schedule delivery of a synthesized event to `listener` on `target`.
    ///
    /// Delivery success or failure is the dispatch layer's concern; the
    /// recognizer never observes the outcome. The recognizer always passes
    /// `bubbles = true`.
    fn dispatch_event(&mut self, kind: HoverEventKind, listener: &L, target: &K, bubbles: bool);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pointer_platform_subscribes_to_pointer_events_only() {
        let set = EventTypes::for_capabilities(PlatformCapabilities {
            pointer_events: true,
        });
        assert_eq!(set, EventTypes::POINTER);
        assert!(set.wants(EventType::PointerOver));
        assert!(set.wants(EventType::PointerMove));
        assert!(set.wants(EventType::PointerOut));
        assert!(set.wants(EventType::PointerCancel));
        assert!(!set.wants(EventType::TouchStart));
        assert!(!set.wants(EventType::MouseOver));
        assert!(!set.wants(EventType::MouseOut));
    }

    #[test]
    fn legacy_platform_adds_touch_and_mouse_fallbacks() {
        let set = EventTypes::for_capabilities(PlatformCapabilities {
            pointer_events: false,
        });
        assert_eq!(set, EventTypes::POINTER | EventTypes::FALLBACK);
        assert!(set.wants(EventType::TouchStart));
        assert!(set.wants(EventType::MouseOver));
        assert!(set.wants(EventType::MouseOut));
        // Pointer subscriptions are unconditional.
        assert!(set.wants(EventType::PointerOver));
    }

    #[test]
    fn default_config_has_no_listeners() {
        let config: HoverConfig<u32> = HoverConfig::default();
        assert!(config.on_hover_in.is_none());
        assert!(config.on_hover_out.is_none());
        assert!(config.on_hover_change.is_none());
    }
}
