// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The tooltip engine: one explicitly constructed context per page session.
//!
//! ## Overview
//!
//! [`TooltipEngine`] owns the [`Registry`], the [`ActivationState`], the
//! [`Document`] and the [`Surface`]. Construct one where the application
//! shell mounts and hand it (or a shared handle to it) to every owner.
//!
//! ## Lifecycle
//!
//! - Owners call [`TooltipEngine::register`] on mount and on every prop update,
//!   and [`TooltipEngine::deregister`] on unmount.
//! - The document feeds listener events to [`TooltipEngine::handle`].
//! - A show is two passes. [`TooltipEngine::show`] renders the content
//!   invisibly and requests a frame; once layout has settled,
//!   [`TooltipEngine::flush`] runs [`TooltipEngine::measure`] and then
//!   [`TooltipEngine::commit`], which places the content and makes it visible.
//!
//! Listeners are installed when the first owner registers and removed when
//! the last owner leaves or the engine is dropped.
//!
//! ## Example
//!
//! ```
//! use kurbo::{Point, Rect, Size};
//! use understory_tooltip::document::{Document, DocumentEvent};
//! use understory_tooltip::engine::TooltipEngine;
//! use understory_tooltip::listeners::Listeners;
//! use understory_tooltip::surface::{Frame, Surface};
//! use understory_tooltip::types::{Side, TooltipConfig};
//!
//! struct Page;
//! impl Document<&'static str> for Page {
//!     type Target = Rect;
//!     fn viewport(&self) -> Option<Size> { Some(Size::new(1280.0, 900.0)) }
//!     fn find_target(&self, owner: &&'static str) -> Option<Rect> {
//!         (*owner == "btn").then(|| Rect::from_origin_size((100.0, 10.0), (50.0, 20.0)))
//!     }
//!     fn target_rect(&self, target: &Rect) -> Option<Rect> { Some(*target) }
//!     fn listen(&mut self, _: Listeners) {}
//!     fn unlisten(&mut self, _: Listeners) {}
//!     fn request_frame(&mut self) {}
//! }
//!
//! #[derive(Default)]
//! struct Overlay { at: Option<Point> }
//! impl Surface<&'static str> for Overlay {
//!     fn acquire(&mut self, _: &str) -> bool { true }
//!     fn render(&mut self, frame: Frame<'_, &'static str>) {
//!         self.at = match frame {
//!             Frame::Visible { origin, .. } => Some(origin),
//!             _ => None,
//!         };
//!     }
//!     fn measure(&self) -> Option<Size> { Some(Size::new(30.0, 40.0)) }
//! }
//!
//! let mut engine = TooltipEngine::new(Page, Overlay::default());
//! engine.register("btn", TooltipConfig::new("Hi").with_side(Side::Top));
//!
//! engine.handle(DocumentEvent::PointerOver(Some("btn")));
//! assert!(engine.is_pending());
//! engine.handle(DocumentEvent::Frame);
//! assert_eq!(engine.surface().at, Some(Point::new(110.0, 38.0)));
//! ```

use core::fmt;
use core::hash::Hash;

use crate::activation::{ActivationState, Transition};
use crate::document::{Document, DocumentEvent};
use crate::error::ShowRejected;
use crate::listeners::ListenerLease;
use crate::placement::{Measurement, Placement, PlacementOptions};
use crate::registry::Registry;
use crate::router::{Command, route};
use crate::surface::{Frame, SURFACE_ID, Surface};
use crate::types::{TooltipConfig, Trigger};

/// Engine-wide settings.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct EngineConfig {
    /// Gap and viewport padding used for every placement.
    pub placement: PlacementOptions,
    /// Reserved id of the shared mount point.
    pub surface_id: &'static str,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            placement: PlacementOptions::default(),
            surface_id: SURFACE_ID,
        }
    }
}

/// Singleton tooltip engine.
///
/// `K` is the owner id, `C` the content payload, `D` the host document and
/// `S` the shared render surface. At most one owner is visible at a time.
pub struct TooltipEngine<K, C, D: Document<K>, S> {
    registry: Registry<K, C>,
    activation: ActivationState<K, D::Target>,
    document: D,
    surface: S,
    config: EngineConfig,
    lease: ListenerLease,
    pending: bool,
    placement: Option<Placement>,
}

impl<K: fmt::Debug, C, D: Document<K>, S> fmt::Debug for TooltipEngine<K, C, D, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let active = match &self.activation {
            ActivationState::Idle => None,
            ActivationState::Active { owner, .. } => Some(owner),
        };
        f.debug_struct("TooltipEngine")
            .field("active", &active)
            .field("pending", &self.pending)
            .field("listening", &self.lease.is_held())
            .field("placement", &self.placement)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl<K, C, D, S> TooltipEngine<K, C, D, S>
where
    K: Clone + Eq + Hash,
    D: Document<K>,
    S: Surface<C>,
{
    /// Create an engine with the default [`EngineConfig`].
    pub fn new(document: D, surface: S) -> Self {
        Self::with_config(document, surface, EngineConfig::default())
    }

    /// Create an engine with an explicit configuration.
    pub fn with_config(document: D, surface: S, config: EngineConfig) -> Self {
        Self {
            registry: Registry::new(),
            activation: ActivationState::new(),
            document,
            surface,
            config,
            lease: ListenerLease::new(),
            pending: false,
            placement: None,
        }
    }

    /// Register `owner`, or replace its config if it is already registered.
    ///
    /// If `owner` is currently visible it is re-measured with the new config.
    pub fn register(&mut self, owner: K, config: TooltipConfig<C>) {
        let replaced = self.registry.register(owner.clone(), config).is_some();
        if self.document.viewport().is_some() {
            self.lease.acquire::<K, D>(&mut self.document);
        }
        if replaced && self.activation.is_active(&owner) {
            self.begin_measure();
        }
    }

    /// Remove `owner`, hiding it first if it is the active owner.
    pub fn deregister(&mut self, owner: &K) -> Option<TooltipConfig<C>> {
        if self.activation.is_active(owner) {
            self.hide_all();
        }
        let removed = self.registry.remove(owner);
        self.lease
            .sync::<K, D>(&mut self.document, self.registry.len());
        removed
    }

    /// The config registered for `owner`.
    pub fn lookup(&self, owner: &K) -> Option<&TooltipConfig<C>> {
        self.registry.lookup(owner)
    }

    /// Make `owner` the active owner and start the measure pass.
    ///
    /// If `owner` is already visible it is repositioned in place instead.
    /// `trigger` must match the owner's registered trigger. On refusal the
    /// activation state is unchanged.
    pub fn show(&mut self, owner: K, trigger: Trigger) -> Result<Transition<K>, ShowRejected> {
        if self.document.viewport().is_none() {
            return Err(ShowRejected::Unavailable);
        }
        let config = self
            .registry
            .lookup(&owner)
            .ok_or(ShowRejected::UnknownOwner)?;
        if config.trigger != trigger {
            return Err(ShowRejected::TriggerMismatch {
                expected: config.trigger,
                actual: trigger,
            });
        }
        let target = self
            .document
            .find_target(&owner)
            .ok_or(ShowRejected::MissingTarget)?;
        if !self.surface.acquire(self.config.surface_id) {
            return Err(ShowRejected::Unavailable);
        }
        let transition = self.activation.show(owner, target);
        if transition.is_change() {
            self.begin_measure();
        } else {
            // Already active: a pending show still gets its frame, a placed
            // one moves in place without going invisible.
            self.reposition();
        }
        log::debug!("tooltip show: {:?}", TransitionKind::of(&transition));
        Ok(transition)
    }

    /// Hide `owner` if it is active. Requests for other owners are ignored.
    pub fn hide(&mut self, owner: &K) -> Transition<K> {
        let transition = self.activation.hide(owner);
        if transition.is_change() {
            self.clear_surface();
        }
        transition
    }

    /// Hide whatever is active.
    pub fn hide_all(&mut self) -> Transition<K> {
        let transition = self.activation.hide_any();
        if transition.is_change() {
            self.clear_surface();
        }
        transition
    }

    /// Route one document event and apply the resulting command.
    ///
    /// Refused shows are logged and reported as [`Transition::Unchanged`].
    pub fn handle(&mut self, event: DocumentEvent<K>) -> Transition<K> {
        let command = route(&event, &self.registry, self.activation.owner());
        match command {
            Command::Show(owner, trigger) => match self.show(owner, trigger) {
                Ok(transition) => transition,
                Err(rejected) => {
                    log::debug!("tooltip show refused: {rejected}");
                    Transition::Unchanged
                }
            },
            Command::Hide(owner) => self.hide(&owner),
            Command::HideAll => self.hide_all(),
            Command::Reposition => {
                let before = self.activation.owner().cloned();
                self.reposition();
                self.hidden_since(before)
            }
            Command::Flush => {
                let before = self.activation.owner().cloned();
                self.flush();
                self.hidden_since(before)
            }
            Command::Ignore => Transition::Unchanged,
        }
    }

    /// Gather the geometry for the active owner.
    ///
    /// Returns `None` when idle, when there is no document, when the target
    /// has no layout, or when the surface has not been laid out yet.
    pub fn measure(&self) -> Option<Measurement> {
        let (_, target) = self.activation.active()?;
        let viewport = self.document.viewport()?;
        let target = self.document.target_rect(target)?;
        let floating = self.surface.measure()?;
        Some(Measurement {
            floating,
            target,
            viewport,
        })
    }

    /// Place the active owner's content using `measurement` and make it visible.
    pub fn commit(&mut self, measurement: Measurement) -> Option<Placement> {
        let owner = self.activation.owner()?;
        let config = self.registry.lookup(owner)?;
        if !self.surface.acquire(self.config.surface_id) {
            return None;
        }
        let placement = measurement.place(config.side, self.config.placement);
        self.surface.render(Frame::Visible {
            content: &config.content,
            origin: placement.origin,
            side: placement.side,
            stack_order: config.stack_order,
        });
        self.pending = false;
        self.placement = Some(placement);
        Some(placement)
    }

    /// Run the second pass of a pending show.
    pub fn flush(&mut self) -> Option<Placement> {
        if !self.pending {
            return None;
        }
        match self.measure() {
            Some(m) => self.commit(m),
            None => {
                self.recover_unmeasured();
                None
            }
        }
    }

    /// Recompute the active tooltip's position after a scroll or resize.
    ///
    /// No-op when idle or while a show is still waiting for its second pass.
    /// Hides the tooltip if its target has gone away.
    pub fn reposition(&mut self) -> Option<Placement> {
        if self.pending || self.activation.is_idle() {
            return None;
        }
        match self.measure() {
            Some(m) => self.commit(m),
            None => {
                self.recover_unmeasured();
                None
            }
        }
    }

    /// The active owner, if any.
    pub fn active_owner(&self) -> Option<&K> {
        self.activation.owner()
    }

    /// True between the measure pass of a show and its commit.
    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// The placement of the visible tooltip, if it has been committed.
    pub fn placement(&self) -> Option<Placement> {
        self.placement
    }

    /// True while the document-level listeners are installed.
    pub fn listeners_installed(&self) -> bool {
        self.lease.is_held()
    }

    /// The owner registry.
    pub fn registry(&self) -> &Registry<K, C> {
        &self.registry
    }

    /// The engine configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// The host document.
    pub fn document(&self) -> &D {
        &self.document
    }

    /// Mutable access to the host document.
    pub fn document_mut(&mut self) -> &mut D {
        &mut self.document
    }

    /// The render surface.
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Mutable access to the render surface.
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Render the active owner invisibly and schedule the commit pass.
    fn begin_measure(&mut self) {
        let Some(owner) = self.activation.owner() else {
            return;
        };
        let Some(config) = self.registry.lookup(owner) else {
            return;
        };
        if !self.surface.acquire(self.config.surface_id) {
            return;
        }
        self.surface.render(Frame::Measure {
            content: &config.content,
            stack_order: config.stack_order,
        });
        self.pending = true;
        self.placement = None;
        self.document.request_frame();
    }

    fn clear_surface(&mut self) {
        self.pending = false;
        self.placement = None;
        if self.surface.acquire(self.config.surface_id) {
            self.surface.render(Frame::Hidden);
        }
    }

    // The target vanished: hide. Otherwise the surface has not laid out yet,
    // so a pending show waits for another frame.
    fn recover_unmeasured(&mut self) {
        let target_gone = match self.activation.active() {
            Some((_, target)) => self.document.target_rect(target).is_none(),
            None => return,
        };
        if target_gone {
            log::debug!("tooltip target detached; hiding");
            self.hide_all();
        } else if self.pending {
            self.document.request_frame();
        }
    }

    fn hidden_since(&self, before: Option<K>) -> Transition<K> {
        match before {
            Some(owner) if self.activation.is_idle() => Transition::Hidden(owner),
            _ => Transition::Unchanged,
        }
    }
}

impl<K, C, D: Document<K>, S> Drop for TooltipEngine<K, C, D, S> {
    fn drop(&mut self) {
        self.lease.release::<K, D>(&mut self.document);
    }
}

/// Payload-free view of a transition for logging.
#[derive(Debug)]
enum TransitionKind {
    Shown,
    Retargeted,
    Hidden,
    Unchanged,
}

impl TransitionKind {
    fn of<K>(t: &Transition<K>) -> Self {
        match t {
            Transition::Shown(_) => Self::Shown,
            Transition::Retargeted { .. } => Self::Retargeted,
            Transition::Hidden(_) => Self::Hidden,
            Transition::Unchanged => Self::Unchanged,
        }
    }
}
