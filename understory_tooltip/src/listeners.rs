// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Document-level listener set and its reference-counted lease.
//!
//! The engine routes every owner through one fixed set of delegated listeners.
//! [`ListenerLease`] installs that set when the first owner registers and
//! removes it when the last one leaves, so the listener count depends on
//! whether any owner exists, never on how many.

use crate::document::Document;

bitflags::bitflags! {
    /// Document-level listeners used by the router.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct Listeners: u8 {
        /// Pointer entered an element (bubble phase).
        const POINTER_OVER = 0b0000_0001;
        /// Pointer left an element (bubble phase).
        const POINTER_OUT  = 0b0000_0010;
        /// Click (bubble phase).
        const CLICK        = 0b0000_0100;
        /// Scroll anywhere in the document (capture phase).
        const SCROLL       = 0b0000_1000;
        /// Window resize.
        const RESIZE       = 0b0001_0000;
        /// Everything the router consumes.
        const ROUTER = Self::POINTER_OVER.bits()
            | Self::POINTER_OUT.bits()
            | Self::CLICK.bits()
            | Self::SCROLL.bits()
            | Self::RESIZE.bits();
    }
}

impl Listeners {
    /// Returns true for listeners that must be installed in the capture phase.
    pub fn is_capture(self) -> bool {
        self.contains(Self::SCROLL)
    }
}

/// Tracks whether the router's listener set is currently installed.
///
/// Acquire and release are idempotent, so callers can invoke them on every
/// registry change without counting owners themselves.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ListenerLease {
    installed: bool,
}

impl ListenerLease {
    /// Create a lease that holds nothing.
    pub const fn new() -> Self {
        Self { installed: false }
    }

    /// Returns true while the listener set is installed.
    pub const fn is_held(&self) -> bool {
        self.installed
    }

    /// Install [`Listeners::ROUTER`] on `doc` unless already installed.
    ///
    /// Returns true if this call installed them.
    pub fn acquire<K, D: Document<K> + ?Sized>(&mut self, doc: &mut D) -> bool {
        if self.installed {
            return false;
        }
        doc.listen(Listeners::ROUTER);
        self.installed = true;
        log::debug!("tooltip listeners installed");
        true
    }

    /// Remove the listener set from `doc` if installed.
    ///
    /// Returns true if this call removed them.
    pub fn release<K, D: Document<K> + ?Sized>(&mut self, doc: &mut D) -> bool {
        if !self.installed {
            return false;
        }
        doc.unlisten(Listeners::ROUTER);
        self.installed = false;
        log::debug!("tooltip listeners removed");
        true
    }

    /// Acquire while `owners > 0`, release at zero.
    pub fn sync<K, D: Document<K> + ?Sized>(&mut self, doc: &mut D, owners: usize) {
        if owners == 0 {
            self.release(doc);
        } else {
            self.acquire(doc);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn router_set_is_the_union() {
        let all = Listeners::POINTER_OVER
            | Listeners::POINTER_OUT
            | Listeners::CLICK
            | Listeners::SCROLL
            | Listeners::RESIZE;
        assert_eq!(Listeners::ROUTER, all);
        assert_eq!(Listeners::ROUTER.iter().count(), 5);
        assert!(Listeners::SCROLL.is_capture());
        assert!(!Listeners::CLICK.is_capture());
    }
}
