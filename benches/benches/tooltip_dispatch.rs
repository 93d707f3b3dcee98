// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Rect, Size};
use understory_tooltip::document::{Document, DocumentEvent};
use understory_tooltip::engine::TooltipEngine;
use understory_tooltip::listeners::Listeners;
use understory_tooltip::registry::Registry;
use understory_tooltip::router::route;
use understory_tooltip::surface::{Frame, Surface};
use understory_tooltip::types::{TooltipConfig, Trigger};

const OWNERS: u32 = 1024;

struct Grid;

impl Document<u32> for Grid {
    type Target = u32;
    fn viewport(&self) -> Option<Size> {
        Some(Size::new(1280.0, 800.0))
    }
    fn find_target(&self, owner: &u32) -> Option<u32> {
        (*owner < OWNERS).then_some(*owner)
    }
    fn target_rect(&self, target: &u32) -> Option<Rect> {
        let x = f64::from(target % 32) * 40.0;
        let y = f64::from(target / 32) * 25.0;
        Some(Rect::from_origin_size((x, y), (32.0, 20.0)))
    }
    fn listen(&mut self, _: Listeners) {}
    fn unlisten(&mut self, _: Listeners) {}
    fn request_frame(&mut self) {}
}

struct Sink;

impl Surface<u32> for Sink {
    fn acquire(&mut self, _: &str) -> bool {
        true
    }
    fn render(&mut self, frame: Frame<'_, u32>) {
        black_box(frame.is_visible());
    }
    fn measure(&self) -> Option<Size> {
        Some(Size::new(120.0, 32.0))
    }
}

fn trigger_for(id: u32) -> Trigger {
    if id % 4 == 0 {
        Trigger::Click
    } else {
        Trigger::Hover
    }
}

fn bench_route(c: &mut Criterion) {
    let mut reg = Registry::new();
    for id in 0..OWNERS {
        reg.register(id, TooltipConfig::new(id).with_trigger(trigger_for(id)));
    }
    let mut group = c.benchmark_group("route");
    group.throughput(Throughput::Elements(u64::from(OWNERS) * 2));
    group.bench_function("pointer_and_click", |b| {
        b.iter(|| {
            for id in 0..OWNERS {
                black_box(route(&DocumentEvent::PointerOver(Some(id)), &reg, None));
                let click = DocumentEvent::Click {
                    target: Some(id),
                    in_surface: false,
                };
                black_box(route(&click, &reg, Some(&0)));
            }
        })
    });
    group.finish();
}

fn bench_engine(c: &mut Criterion) {
    let mut group = c.benchmark_group("engine");
    group.throughput(Throughput::Elements(u64::from(OWNERS)));
    group.bench_function("hover_sweep", |b| {
        b.iter_batched(
            || {
                let mut engine = TooltipEngine::new(Grid, Sink);
                for id in 0..OWNERS {
                    engine.register(id, TooltipConfig::new(id));
                }
                engine
            },
            |mut engine| {
                for id in 0..OWNERS {
                    engine.handle(DocumentEvent::PointerOver(Some(id)));
                    engine.handle(DocumentEvent::Frame);
                    engine.handle(DocumentEvent::Scroll);
                    engine.handle(DocumentEvent::PointerOut(Some(id)));
                }
                black_box(engine.active_owner().copied());
            },
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

criterion_group!(benches, bench_route, bench_engine);
criterion_main!(benches);
