// Copyright 2025 the Hover Recognizer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use hover_recognizer::recognizer::{HoverRecognizer, HoverState};
use hover_recognizer::types::{
    DispatchContext, EventType, HoverConfig, HoverEventKind, PlatformCapabilities, PointerEvent,
    PointerKind,
};
use kurbo::{Point, Rect};

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
    fn next_f64(&mut self) -> f64 {
        let v = self.next_u64() >> 11;
        (v as f64) / ((1u64 << 53) as f64)
    }
}

/// Host with a rectangular slop ring and a dispatch counter.
struct Host {
    slop: Rect,
    visual: Rect,
    dispatched: u64,
}

impl Host {
    fn new() -> Self {
        Self {
            slop: Rect::new(0.0, 0.0, 100.0, 100.0),
            visual: Rect::new(20.0, 20.0, 80.0, 80.0),
            dispatched: 0,
        }
    }
}

impl DispatchContext<u32, u32> for Host {
    fn is_target_within_event_component(&self, _node: &u32) -> bool {
        false
    }
    fn is_target_owned(&self, _node: &u32) -> bool {
        false
    }
    fn is_position_within_touch_hit_target(&self, position: Point) -> bool {
        self.slop.contains(position) && !self.visual.contains(position)
    }
    fn dispatch_event(&mut self, _kind: HoverEventKind, _l: &u32, _t: &u32, _b: bool) {
        self.dispatched += 1;
    }
}

fn config() -> HoverConfig<u32> {
    HoverConfig {
        on_hover_in: Some(1),
        on_hover_out: Some(2),
        on_hover_change: Some(3),
    }
}

fn gen_move_stream(count: usize, seed: u64) -> Vec<PointerEvent<u32>> {
    // Random walk over the element: most moves stay inside the visual
    // bounds, some wander through the slop ring.
    let mut rng = Rng::new(seed);
    let mut out = Vec::with_capacity(count + 1);
    out.push(PointerEvent {
        event_type: EventType::PointerOver,
        target: 1,
        related_target: None,
        position: Point::new(50.0, 50.0),
        pointer_kind: PointerKind::Mouse,
    });
    for _ in 0..count {
        out.push(PointerEvent {
            event_type: EventType::PointerMove,
            target: 1,
            related_target: None,
            position: Point::new(rng.next_f64() * 100.0, rng.next_f64() * 100.0),
            pointer_kind: PointerKind::Mouse,
        });
    }
    out
}

fn gen_touch_storm(count: usize) -> Vec<PointerEvent<u32>> {
    // Alternating touch-start/over/out traffic: exercises suppression and
    // the full-reset path without any emission.
    let mut out = Vec::with_capacity(count);
    for i in 0..count {
        let event_type = match i % 3 {
            0 => EventType::TouchStart,
            1 => EventType::PointerOver,
            _ => EventType::PointerOut,
        };
        out.push(PointerEvent {
            event_type,
            target: 1,
            related_target: None,
            position: Point::new(50.0, 50.0),
            pointer_kind: if i % 3 == 0 {
                PointerKind::Touch
            } else {
                PointerKind::Mouse
            },
        });
    }
    out
}

fn run_stream(
    recognizer: &HoverRecognizer,
    host: &mut Host,
    state: &mut HoverState,
    stream: &[PointerEvent<u32>],
) {
    let config = config();
    for event in stream {
        recognizer.handle_event(host, black_box(event), &config, state);
    }
}

fn bench_hover_transitions(c: &mut Criterion) {
    let recognizer = HoverRecognizer::new(PlatformCapabilities {
        pointer_events: true,
    });

    let mut group = c.benchmark_group("hover_transitions");
    for &n in &[1_000usize, 10_000] {
        let moves = gen_move_stream(n, 0x5eed);
        group.throughput(Throughput::Elements(moves.len() as u64));
        group.bench_function(format!("random_walk/{n}"), |b| {
            b.iter(|| {
                let mut host = Host::new();
                let mut state = recognizer.create_state();
                run_stream(&recognizer, &mut host, &mut state, &moves);
                black_box(host.dispatched)
            });
        });

        let storm = gen_touch_storm(n);
        group.throughput(Throughput::Elements(storm.len() as u64));
        group.bench_function(format!("touch_storm/{n}"), |b| {
            b.iter(|| {
                let mut host = Host::new();
                let mut state = recognizer.create_state();
                run_stream(&recognizer, &mut host, &mut state, &storm);
                black_box(state.is_hovered())
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_hover_transitions);
criterion_main!(benches);
