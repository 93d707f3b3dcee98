// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Click-triggered tooltips.
//!
//! A click toggles its owner's tooltip, a click on another owner moves the
//! single tooltip there, a click inside the tooltip keeps it, and a click
//! anywhere else dismisses it.
//!
//! Run:
//! - `cargo run -p understory_examples --example tooltip_click`

use kurbo::{Rect, Size};
use understory_tooltip::activation::Transition;
use understory_tooltip::document::{Document, DocumentEvent};
use understory_tooltip::engine::TooltipEngine;
use understory_tooltip::listeners::Listeners;
use understory_tooltip::surface::{Frame, Surface};
use understory_tooltip::types::{TooltipConfig, Trigger};

struct Page;

impl Document<u32> for Page {
    type Target = u32;
    fn viewport(&self) -> Option<Size> {
        Some(Size::new(1024.0, 768.0))
    }
    fn find_target(&self, owner: &u32) -> Option<u32> {
        (*owner < 3).then_some(*owner)
    }
    fn target_rect(&self, target: &u32) -> Option<Rect> {
        let x = 100.0 + f64::from(*target) * 120.0;
        Some(Rect::from_origin_size((x, 200.0), (80.0, 30.0)))
    }
    fn listen(&mut self, _: Listeners) {}
    fn unlisten(&mut self, _: Listeners) {}
    fn request_frame(&mut self) {}
}

struct Overlay;

impl Surface<&'static str> for Overlay {
    fn acquire(&mut self, _: &str) -> bool {
        true
    }
    fn render(&mut self, frame: Frame<'_, &'static str>) {
        if let Frame::Visible {
            content, origin, ..
        } = frame
        {
            println!("    draw {content:?} at ({}, {})", origin.x, origin.y);
        }
    }
    fn measure(&self) -> Option<Size> {
        Some(Size::new(140.0, 48.0))
    }
}

fn click(target: Option<u32>, in_surface: bool) -> DocumentEvent<u32> {
    DocumentEvent::Click { target, in_surface }
}

fn main() {
    let mut engine = TooltipEngine::new(Page, Overlay);
    for (id, text) in [(0, "Details A"), (1, "Details B"), (2, "Details C")] {
        engine.register(id, TooltipConfig::new(text).with_trigger(Trigger::Click));
    }

    let script = [
        ("click owner 0", click(Some(0), false)),
        ("click owner 1", click(Some(1), false)),
        ("click inside tooltip", click(None, true)),
        ("click owner 1 again", click(Some(1), false)),
        ("click owner 2", click(Some(2), false)),
        ("click empty space", click(None, false)),
    ];
    for (label, event) in script {
        println!("== {label} ==");
        let t = engine.handle(event);
        engine.flush();
        match t {
            Transition::Shown(id) => println!("  shown {id}"),
            Transition::Retargeted { from, to } => println!("  moved {from} -> {to}"),
            Transition::Hidden(id) => println!("  hidden {id}"),
            Transition::Unchanged => println!("  unchanged"),
        }
        println!("  active: {:?}", engine.active_owner());
    }
}
