// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The environment the engine runs in: viewport, target lookup, listeners,
//! and frame scheduling.
//!
//! ## Overview
//!
//! [`Document`] is the seam between the engine and a concrete UI host. A
//! browser implementation lives in [`adapters`](crate::adapters) behind the
//! `web_adapter` feature; tests and native toolkits provide their own.
//!
//! Events observed by the installed listeners come back into the engine as
//! [`DocumentEvent`] values through
//! [`TooltipEngine::handle`](crate::engine::TooltipEngine::handle).

use kurbo::{Rect, Size};

use crate::listeners::Listeners;

/// Host environment for the tooltip engine.
///
/// `K` is the owner id type. A target is the element carrying the same id as
/// its owner.
pub trait Document<K> {
    /// Handle to a target element.
    type Target: Clone;

    /// Size of the visible viewport, or `None` if there is no document
    /// (for example during server-side rendering). With `None` every engine
    /// operation is a no-op.
    fn viewport(&self) -> Option<Size>;

    /// Find the element whose id is `owner`.
    fn find_target(&self, owner: &K) -> Option<Self::Target>;

    /// Current bounding box of `target` in viewport coordinates, or `None` if
    /// it is no longer attached.
    fn target_rect(&self, target: &Self::Target) -> Option<Rect>;

    /// Install the given document-level listeners.
    fn listen(&mut self, listeners: Listeners);

    /// Remove listeners previously installed with [`Document::listen`].
    fn unlisten(&mut self, listeners: Listeners);

    /// Ask for [`DocumentEvent::Frame`] to be delivered after the next layout.
    fn request_frame(&mut self);
}

/// An event observed by the document-level listeners.
///
/// Element-bearing events carry the id of the element involved, if it has one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DocumentEvent<K> {
    /// Pointer moved onto an element.
    PointerOver(Option<K>),
    /// Pointer moved off an element.
    PointerOut(Option<K>),
    /// Click on an element.
    Click {
        /// Id of the clicked element.
        target: Option<K>,
        /// True if the click landed inside the render surface.
        in_surface: bool,
    },
    /// Any scroll, including nested scroll containers.
    Scroll,
    /// Viewport resize.
    Resize,
    /// Layout settled after a frame requested with [`Document::request_frame`].
    Frame,
}
