// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tooltip basics.
//!
//! A toy page with three buttons. Hovering each one shows its tooltip through
//! the two-pass pipeline; the last button sits near the top edge so the
//! tooltip flips below it.
//!
//! Run:
//! - `cargo run -p understory_examples --example tooltip_basics`

use kurbo::{Rect, Size};
use understory_tooltip::document::{Document, DocumentEvent};
use understory_tooltip::engine::TooltipEngine;
use understory_tooltip::listeners::Listeners;
use understory_tooltip::surface::{Frame, Surface};
use understory_tooltip::types::{Side, TooltipConfig};

struct Page {
    buttons: Vec<(&'static str, Rect)>,
}

impl Document<&'static str> for Page {
    type Target = Rect;
    fn viewport(&self) -> Option<Size> {
        Some(Size::new(800.0, 600.0))
    }
    fn find_target(&self, owner: &&'static str) -> Option<Rect> {
        self.buttons
            .iter()
            .find(|(id, _)| id == owner)
            .map(|(_, r)| *r)
    }
    fn target_rect(&self, target: &Rect) -> Option<Rect> {
        Some(*target)
    }
    fn listen(&mut self, l: Listeners) {
        println!("listen   {l:?}");
    }
    fn unlisten(&mut self, l: Listeners) {
        println!("unlisten {l:?}");
    }
    fn request_frame(&mut self) {
        println!("  frame requested");
    }
}

/// Prints every frame; pretends each character is 7x16 pixels.
#[derive(Default)]
struct Console {
    last_len: usize,
}

impl Surface<String> for Console {
    fn acquire(&mut self, _: &str) -> bool {
        true
    }
    fn render(&mut self, frame: Frame<'_, String>) {
        match frame {
            Frame::Hidden => println!("  [hidden]"),
            Frame::Measure { content, .. } => {
                self.last_len = content.len();
                println!("  [measure] {content:?}");
            }
            Frame::Visible {
                content,
                origin,
                side,
                ..
            } => println!("  [visible] {content:?} at {origin:?} on {side:?}"),
        }
    }
    fn measure(&self) -> Option<Size> {
        Some(Size::new(self.last_len as f64 * 7.0 + 16.0, 24.0))
    }
}

fn main() {
    let page = Page {
        buttons: vec![
            ("save", Rect::from_origin_size((100.0, 300.0), (60.0, 24.0))),
            ("open", Rect::from_origin_size((760.0, 300.0), (32.0, 24.0))),
            ("menu", Rect::from_origin_size((200.0, 4.0), (40.0, 24.0))),
        ],
    };
    let mut engine = TooltipEngine::new(page, Console::default());

    println!("== Register ==");
    engine.register("save", TooltipConfig::new("Save the document".to_owned()));
    engine.register(
        "open",
        TooltipConfig::new("Open a file".to_owned()).with_side(Side::Right),
    );
    engine.register("menu", TooltipConfig::new("Main menu".to_owned()));

    for id in ["save", "open", "menu"] {
        println!("== Hover {id} ==");
        engine.handle(DocumentEvent::PointerOver(Some(id)));
        engine.handle(DocumentEvent::Frame);
        if let Some(p) = engine.placement() {
            println!("  flipped: {}", p.flipped);
        }
        engine.handle(DocumentEvent::PointerOut(Some(id)));
    }

    println!("== Unmount ==");
    for id in ["save", "open", "menu"] {
        engine.deregister(&id);
    }
}
