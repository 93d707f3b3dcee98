// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Browser adapter on top of `web-sys`.
//!
//! ## Feature
//!
//! Enable with `web_adapter`.
//!
//! ## Notes
//!
//! - [`WebDocument`] installs delegated listeners on the document (`pointerover`,
//!   `pointerout`, `click`, capturing `scroll`) and on the window (`resize`), and
//!   turns them into [`DocumentEvent`]s for a handler callback.
//! - An event's owner id is the id of the nearest element with an `id`
//!   attribute, starting at the event target. Pointer moves between elements
//!   inside one owner are not reported.
//! - The second pass of a show is scheduled with `requestAnimationFrame`.
//! - [`WebSurface`] mounts one `div` with the reserved id under `<body>`,
//!   positioned `fixed`, and re-finds it by id before every render.
//!
//! Outside a browser (no `window`) both report themselves unavailable and the
//! engine stays idle.
//!
//! ## Wiring
//!
//! ```no_run
//! use understory_tooltip::adapters::web::shared_engine;
//! use understory_tooltip::types::TooltipConfig;
//!
//! let tooltips = shared_engine::<String>();
//! tooltips
//!     .borrow_mut()
//!     .register("save-button".to_owned(), TooltipConfig::new("Save changes".to_owned()));
//! ```

use alloc::format;
use alloc::rc::{Rc, Weak};
use alloc::string::String;
use alloc::vec::Vec;
use core::cell::{Cell, RefCell};
use core::fmt;

use kurbo::{Rect, Size};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Element, Event, EventTarget, HtmlElement, MouseEvent, Node, Window};

use crate::document::{Document, DocumentEvent};
use crate::engine::TooltipEngine;
use crate::listeners::Listeners;
use crate::surface::{Frame, Surface};

/// Callback receiving every translated document event.
pub type EventHandler = Rc<dyn Fn(DocumentEvent<String>)>;

/// Engine type produced by [`shared_engine`].
pub type WebEngine<C> = TooltipEngine<String, C, WebDocument, WebSurface>;

/// Create an engine for the current page, shared behind `Rc<RefCell<_>>`.
///
/// Listener callbacks hold a weak handle, so dropping the last strong handle
/// drops the engine, which removes the listeners. Events that arrive while the
/// engine is already borrowed are dropped.
pub fn shared_engine<C: HtmlContent + 'static>() -> Rc<RefCell<WebEngine<C>>> {
    Rc::new_cyclic(|weak: &Weak<RefCell<WebEngine<C>>>| {
        let weak = weak.clone();
        let document = WebDocument::new(move |event| {
            let Some(engine) = weak.upgrade() else {
                return;
            };
            match engine.try_borrow_mut() {
                Ok(mut engine) => {
                    engine.handle(event);
                }
                Err(_) => log::warn!("tooltip event dropped: engine busy"),
            }
        });
        RefCell::new(TooltipEngine::new(document, WebSurface::new()))
    })
}

struct Installed {
    kind: Listeners,
    target: EventTarget,
    name: &'static str,
    capture: bool,
    callback: Closure<dyn FnMut(Event)>,
}

/// [`Document`] implementation for the browser's `window.document`.
pub struct WebDocument {
    window: Option<Window>,
    document: Option<web_sys::Document>,
    surface_id: &'static str,
    handler: EventHandler,
    installed: Vec<Installed>,
    frame_callback: Option<Closure<dyn FnMut(f64)>>,
    frame_requested: Rc<Cell<bool>>,
}

impl fmt::Debug for WebDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WebDocument")
            .field("available", &self.document.is_some())
            .field("surface_id", &self.surface_id)
            .field("installed", &self.installed.len())
            .field("frame_requested", &self.frame_requested.get())
            .finish_non_exhaustive()
    }
}

impl WebDocument {
    /// Bind to the current window and forward events to `handler`.
    pub fn new(handler: impl Fn(DocumentEvent<String>) + 'static) -> Self {
        let window = web_sys::window();
        let document = window.as_ref().and_then(Window::document);
        Self {
            window,
            document,
            surface_id: crate::surface::SURFACE_ID,
            handler: Rc::new(handler),
            installed: Vec::new(),
            frame_callback: None,
            frame_requested: Rc::new(Cell::new(false)),
        }
    }

    /// Use `id` for the surface containment check on clicks.
    ///
    /// Must match [`EngineConfig::surface_id`](crate::engine::EngineConfig::surface_id).
    #[must_use]
    pub fn with_surface_id(mut self, id: &'static str) -> Self {
        self.surface_id = id;
        self
    }

    fn install(&mut self, kind: Listeners) {
        let (Some(window), Some(document)) = (&self.window, &self.document) else {
            return;
        };
        let Some((name, capture, on_window)) = listener_spec(kind) else {
            return;
        };
        let target: EventTarget = if on_window {
            window.clone().into()
        } else {
            document.clone().into()
        };
        let handler = Rc::clone(&self.handler);
        let surface_id = self.surface_id;
        let callback = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
            if let Some(event) = translate(kind, &event, surface_id) {
                handler(event);
            }
        });
        if let Err(err) = target.add_event_listener_with_callback_and_bool(
            name,
            callback.as_ref().unchecked_ref(),
            capture,
        ) {
            log::warn!("failed to add {name} listener: {err:?}");
            return;
        }
        self.installed.push(Installed {
            kind,
            target,
            name,
            capture,
            callback,
        });
    }
}

impl Document<String> for WebDocument {
    type Target = Element;

    fn viewport(&self) -> Option<Size> {
        self.document.as_ref()?;
        let window = self.window.as_ref()?;
        let width = window.inner_width().ok()?.as_f64()?;
        let height = window.inner_height().ok()?.as_f64()?;
        Some(Size::new(width, height))
    }

    fn find_target(&self, owner: &String) -> Option<Element> {
        self.document.as_ref()?.get_element_by_id(owner)
    }

    fn target_rect(&self, target: &Element) -> Option<Rect> {
        if !target.is_connected() {
            return None;
        }
        let r = target.get_bounding_client_rect();
        Some(Rect::from_origin_size(
            (r.left(), r.top()),
            (r.width(), r.height()),
        ))
    }

    fn listen(&mut self, listeners: Listeners) {
        for kind in listeners.iter() {
            if !self.installed.iter().any(|i| i.kind == kind) {
                self.install(kind);
            }
        }
    }

    fn unlisten(&mut self, listeners: Listeners) {
        self.installed.retain(|i| {
            if !listeners.contains(i.kind) {
                return true;
            }
            if let Err(err) = i.target.remove_event_listener_with_callback_and_bool(
                i.name,
                i.callback.as_ref().unchecked_ref(),
                i.capture,
            ) {
                log::warn!("failed to remove {} listener: {err:?}", i.name);
            }
            false
        });
    }

    fn request_frame(&mut self) {
        let Some(window) = &self.window else {
            return;
        };
        if self.frame_requested.get() {
            return;
        }
        let callback = self.frame_callback.get_or_insert_with(|| {
            let handler = Rc::clone(&self.handler);
            let requested = Rc::clone(&self.frame_requested);
            Closure::<dyn FnMut(f64)>::new(move |_timestamp: f64| {
                requested.set(false);
                handler(DocumentEvent::Frame);
            })
        });
        match window.request_animation_frame(callback.as_ref().unchecked_ref()) {
            Ok(_) => self.frame_requested.set(true),
            Err(err) => log::warn!("requestAnimationFrame failed: {err:?}"),
        }
    }
}

/// Event name, capture flag, and whether the listener goes on the window.
fn listener_spec(kind: Listeners) -> Option<(&'static str, bool, bool)> {
    let (name, on_window) = if kind == Listeners::POINTER_OVER {
        ("pointerover", false)
    } else if kind == Listeners::POINTER_OUT {
        ("pointerout", false)
    } else if kind == Listeners::CLICK {
        ("click", false)
    } else if kind == Listeners::SCROLL {
        ("scroll", false)
    } else if kind == Listeners::RESIZE {
        ("resize", true)
    } else {
        return None;
    };
    Some((name, kind.is_capture(), on_window))
}

fn translate(kind: Listeners, event: &Event, surface_id: &str) -> Option<DocumentEvent<String>> {
    if kind == Listeners::POINTER_OVER || kind == Listeners::POINTER_OUT {
        pointer_event(kind, crossing(event))
    } else if kind == Listeners::CLICK {
        Some(DocumentEvent::Click {
            target: owner_id(event),
            in_surface: in_surface(event, surface_id),
        })
    } else if kind == Listeners::SCROLL {
        Some(DocumentEvent::Scroll)
    } else if kind == Listeners::RESIZE {
        Some(DocumentEvent::Resize)
    } else {
        None
    }
}

/// A pointer entering or leaving the owner resolved from the event target.
#[derive(Clone, Debug, PartialEq, Eq)]
struct Crossing {
    owner: Option<String>,
    /// The other end of the move (`relatedTarget`) is inside the same owner.
    internal: bool,
}

fn owner_element(event: &Event) -> Option<Element> {
    let element = event.target()?.dyn_into::<Element>().ok()?;
    element.closest("[id]").ok()?
}

fn non_empty_id(owner: &Element) -> Option<String> {
    let id = owner.id();
    (!id.is_empty()).then_some(id)
}

fn owner_id(event: &Event) -> Option<String> {
    non_empty_id(&owner_element(event)?)
}

fn crossing(event: &Event) -> Crossing {
    let Some(owner) = owner_element(event) else {
        return Crossing {
            owner: None,
            internal: false,
        };
    };
    let internal = event
        .dyn_ref::<MouseEvent>()
        .and_then(MouseEvent::related_target)
        .and_then(|t| t.dyn_into::<Node>().ok())
        .is_some_and(|related| owner.contains(Some(&related)));
    Crossing {
        owner: non_empty_id(&owner),
        internal,
    }
}

// Moves between descendants of one owner fire an out/over pair that both
// resolve to that owner; they never reach the engine.
fn pointer_event(kind: Listeners, crossing: Crossing) -> Option<DocumentEvent<String>> {
    if crossing.internal {
        return None;
    }
    if kind == Listeners::POINTER_OVER {
        Some(DocumentEvent::PointerOver(crossing.owner))
    } else if kind == Listeners::POINTER_OUT {
        Some(DocumentEvent::PointerOut(crossing.owner))
    } else {
        None
    }
}

fn in_surface(event: &Event, surface_id: &str) -> bool {
    let Some(node) = event.target().and_then(|t| t.dyn_into::<Node>().ok()) else {
        return false;
    };
    let Some(document) = node.owner_document() else {
        return false;
    };
    document
        .get_element_by_id(surface_id)
        .is_some_and(|surface| surface.contains(Some(&node)))
}

/// Content that knows how to write itself into the surface element.
pub trait HtmlContent {
    /// Replace the children of `element` with this content.
    fn write_into(&self, element: &HtmlElement);
}

impl HtmlContent for String {
    fn write_into(&self, element: &HtmlElement) {
        element.set_text_content(Some(self));
    }
}

impl HtmlContent for &str {
    fn write_into(&self, element: &HtmlElement) {
        element.set_text_content(Some(self));
    }
}

/// [`Surface`] implementation backed by a single fixed-position `div`.
#[derive(Debug)]
pub struct WebSurface {
    document: Option<web_sys::Document>,
    element: Option<HtmlElement>,
}

impl Default for WebSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl WebSurface {
    /// Bind to the current window's document.
    pub fn new() -> Self {
        Self {
            document: web_sys::window().and_then(|w| w.document()),
            element: None,
        }
    }

    fn set_style(&self, props: &[(&str, &str)]) {
        let Some(element) = &self.element else {
            return;
        };
        let style = element.style();
        for (name, value) in props {
            if let Err(err) = style.set_property(name, value) {
                log::warn!("failed to set tooltip style {name}: {err:?}");
            }
        }
    }
}

impl<C: HtmlContent> Surface<C> for WebSurface {
    fn acquire(&mut self, id: &str) -> bool {
        let Some(document) = &self.document else {
            return false;
        };
        if let Some(existing) = document
            .get_element_by_id(id)
            .and_then(|e| e.dyn_into::<HtmlElement>().ok())
        {
            self.element = Some(existing);
            return true;
        }
        let Some(body) = document.body() else {
            return false;
        };
        let element = match document.create_element("div") {
            Ok(e) => e.unchecked_into::<HtmlElement>(),
            Err(err) => {
                log::warn!("failed to create tooltip surface: {err:?}");
                return false;
            }
        };
        element.set_id(id);
        if let Err(err) = element.set_attribute("role", "tooltip") {
            log::warn!("failed to set tooltip role: {err:?}");
        }
        if let Err(err) = body.append_child(&element) {
            log::warn!("failed to mount tooltip surface: {err:?}");
            return false;
        }
        log::debug!("tooltip surface mounted as #{id}");
        self.element = Some(element);
        self.set_style(&[
            ("position", "fixed"),
            ("top", "0px"),
            ("left", "0px"),
            ("visibility", "hidden"),
        ]);
        true
    }

    fn render(&mut self, frame: Frame<'_, C>) {
        let Some(element) = &self.element else {
            return;
        };
        match frame {
            Frame::Hidden => {
                element.set_text_content(None);
                self.set_style(&[("visibility", "hidden")]);
            }
            Frame::Measure {
                content,
                stack_order,
            } => {
                content.write_into(element);
                let z = format!("{stack_order}");
                self.set_style(&[
                    ("visibility", "hidden"),
                    ("top", "0px"),
                    ("left", "0px"),
                    ("z-index", &z),
                ]);
            }
            Frame::Visible {
                content,
                origin,
                side,
                stack_order,
            } => {
                content.write_into(element);
                let side = match side {
                    crate::types::Side::Top => "top",
                    crate::types::Side::Bottom => "bottom",
                    crate::types::Side::Left => "left",
                    crate::types::Side::Right => "right",
                };
                if let Err(err) = element.set_attribute("data-side", side) {
                    log::warn!("failed to set tooltip side: {err:?}");
                }
                let top = format!("{}px", origin.y);
                let left = format!("{}px", origin.x);
                let z = format!("{stack_order}");
                self.set_style(&[
                    ("top", &top),
                    ("left", &left),
                    ("z-index", &z),
                    ("visibility", "visible"),
                ]);
            }
        }
    }

    fn measure(&self) -> Option<Size> {
        let r = self.element.as_ref()?.get_bounding_client_rect();
        Some(Size::new(r.width(), r.height()))
    }
}
