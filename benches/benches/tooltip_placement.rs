// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Rect, Size};
use understory_tooltip::placement::{PlacementOptions, place};
use understory_tooltip::types::Side;

/// Targets on a grid that overshoots the viewport, so every branch
/// (fit, flip, clamp) is taken.
fn gen_targets(n: usize, viewport: Size) -> Vec<Rect> {
    let step_x = (viewport.width + 200.0) / n as f64;
    let step_y = (viewport.height + 200.0) / n as f64;
    let mut out = Vec::with_capacity(n * n);
    for y in 0..n {
        for x in 0..n {
            let x0 = x as f64 * step_x - 100.0;
            let y0 = y as f64 * step_y - 100.0;
            out.push(Rect::from_origin_size((x0, y0), (48.0, 24.0)));
        }
    }
    out
}

fn bench_place(c: &mut Criterion) {
    let viewport = Size::new(1280.0, 800.0);
    let floating = Size::new(160.0, 48.0);
    let targets = gen_targets(64, viewport);
    let options = PlacementOptions::default();

    let mut group = c.benchmark_group("place");
    group.throughput(Throughput::Elements(targets.len() as u64));
    for side in [Side::Top, Side::Bottom, Side::Left, Side::Right] {
        group.bench_function(format!("{side:?}"), |b| {
            b.iter(|| {
                let mut flipped = 0_usize;
                for t in &targets {
                    let p = place(
                        black_box(floating),
                        black_box(*t),
                        viewport,
                        side,
                        options,
                    );
                    flipped += usize::from(p.flipped);
                }
                black_box(flipped);
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_place);
criterion_main!(benches);
