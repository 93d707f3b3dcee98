// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The single shared render surface.
//!
//! Every tooltip is drawn into one mount point addressed by a reserved id.
//! The surface holds no state of its own beyond what it was last asked to
//! draw; the engine re-renders it on every activation or position change.

use kurbo::{Point, Size};

use crate::types::Side;

/// Reserved id of the shared mount point.
pub const SURFACE_ID: &str = "understory-tooltip-root";

/// What the surface should display.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Frame<'a, C> {
    /// Nothing visible.
    Hidden,
    /// First pass of a show: lay out `content` invisibly so it can be measured.
    Measure {
        /// Payload to lay out.
        content: &'a C,
        /// Stacking order of the floating element.
        stack_order: i32,
    },
    /// Second pass: `content` visible at `origin`.
    Visible {
        /// Payload to display.
        content: &'a C,
        /// Top-left corner in viewport coordinates.
        origin: Point,
        /// Side of the target the content sits on.
        side: Side,
        /// Stacking order of the floating element.
        stack_order: i32,
    },
}

impl<C> Frame<'_, C> {
    /// Returns true for [`Frame::Visible`].
    pub fn is_visible(&self) -> bool {
        matches!(self, Self::Visible { .. })
    }
}

/// A mount point that renders one [`Frame`] at a time.
pub trait Surface<C> {
    /// Find the mount point with `id`, creating it if it is missing.
    ///
    /// Called before every render so a mount point lost to a full remount is
    /// re-created. Returns false if there is no document to mount into.
    fn acquire(&mut self, id: &str) -> bool;

    /// Replace whatever is displayed with `frame`.
    fn render(&mut self, frame: Frame<'_, C>);

    /// Rendered size of the floating element, if it has been laid out.
    fn measure(&self) -> Option<Size>;
}
