// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Activation state: which owner, if any, currently shows its tooltip.
//!
//! ## Usage
//!
//! 1) Call [`ActivationState::show`] when an owner should become visible.
//! 2) Call [`ActivationState::hide`] with the owner that asked to hide; stale
//!    requests for other owners are ignored.
//! 3) Call [`ActivationState::hide_any`] to force the idle state.
//!
//! Each call returns the [`Transition`] it produced, so callers know whether
//! the render surface needs to change.
//!
//! ## Minimal example
//!
//! ```
//! use understory_tooltip::activation::{ActivationState, Transition};
//! let mut a: ActivationState<u32, ()> = ActivationState::new();
//! assert_eq!(a.show(1, ()), Transition::Shown(1));
//! assert_eq!(a.show(2, ()), Transition::Retargeted { from: 1, to: 2 });
//! assert_eq!(a.hide(&1), Transition::Unchanged);
//! assert_eq!(a.hide(&2), Transition::Hidden(2));
//! ```

/// Single-active state machine over owner ids.
///
/// `T` is a handle to the owner's target element, as produced by
/// [`Document::find_target`](crate::document::Document::find_target).
///
/// There is never more than one active owner: showing a second owner moves
/// straight from one to the other without an intermediate idle state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ActivationState<K, T> {
    /// No tooltip is visible.
    Idle,
    /// `owner` shows its tooltip against `target`.
    Active {
        /// The active owner.
        owner: K,
        /// Handle to the owner's target element.
        target: T,
    },
}

impl<K, T> Default for ActivationState<K, T> {
    fn default() -> Self {
        Self::Idle
    }
}

/// The effect of one activation request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Transition<K> {
    /// Idle → active.
    Shown(K),
    /// Active owner changed without passing through idle.
    Retargeted {
        /// Previously active owner.
        from: K,
        /// Newly active owner.
        to: K,
    },
    /// Active → idle.
    Hidden(K),
    /// Nothing observable changed.
    Unchanged,
}

impl<K> Transition<K> {
    /// Returns true unless this is [`Transition::Unchanged`].
    pub fn is_change(&self) -> bool {
        !matches!(self, Self::Unchanged)
    }
}

impl<K: Clone + Eq, T> ActivationState<K, T> {
    /// Create an idle state.
    pub fn new() -> Self {
        Self::Idle
    }

    /// The active owner and its target, if any.
    pub fn active(&self) -> Option<(&K, &T)> {
        match self {
            Self::Idle => None,
            Self::Active { owner, target } => Some((owner, target)),
        }
    }

    /// The active owner, if any.
    pub fn owner(&self) -> Option<&K> {
        self.active().map(|(owner, _)| owner)
    }

    /// Returns true if `owner` is the active owner.
    pub fn is_active(&self, owner: &K) -> bool {
        self.owner() == Some(owner)
    }

    /// Returns true if no owner is active.
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// Make `owner` active against `target`.
    ///
    /// Showing the owner that is already active refreshes its target and
    /// reports [`Transition::Unchanged`].
    pub fn show(&mut self, owner: K, target: T) -> Transition<K> {
        let prev = core::mem::replace(
            self,
            Self::Active {
                owner: owner.clone(),
                target,
            },
        );
        match prev {
            Self::Idle => Transition::Shown(owner),
            Self::Active { owner: from, .. } if from == owner => Transition::Unchanged,
            Self::Active { owner: from, .. } => Transition::Retargeted { from, to: owner },
        }
    }

    /// Hide `owner` if it is the active owner; otherwise do nothing.
    pub fn hide(&mut self, owner: &K) -> Transition<K> {
        if self.is_active(owner) {
            self.hide_any()
        } else {
            Transition::Unchanged
        }
    }

    /// Return to idle regardless of which owner is active.
    pub fn hide_any(&mut self) -> Transition<K> {
        match core::mem::replace(self, Self::Idle) {
            Self::Idle => Transition::Unchanged,
            Self::Active { owner, .. } => Transition::Hidden(owner),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[test]
    fn show_from_idle() {
        let mut a: ActivationState<u32, &str> = ActivationState::new();
        assert!(a.is_idle());
        assert_eq!(a.show(1, "t1"), Transition::Shown(1));
        assert_eq!(a.active(), Some((&1, &"t1")));
    }

    #[test]
    fn reshow_same_owner_refreshes_target() {
        let mut a: ActivationState<u32, &str> = ActivationState::new();
        a.show(1, "old");
        assert_eq!(a.show(1, "new"), Transition::Unchanged);
        assert_eq!(a.active(), Some((&1, &"new")));
    }

    // Late pointer-out from the previous owner must not hide the new one.
    #[test]
    fn stale_hide_is_ignored() {
        let mut a: ActivationState<u32, ()> = ActivationState::new();
        a.show(1, ());
        a.show(2, ());
        assert_eq!(a.hide(&1), Transition::Unchanged);
        assert!(a.is_active(&2));
        assert_eq!(a.hide(&2), Transition::Hidden(2));
        assert!(a.is_idle());
    }

    #[test]
    fn hide_any_from_both_states() {
        let mut a: ActivationState<u32, ()> = ActivationState::new();
        assert_eq!(a.hide_any(), Transition::Unchanged);
        a.show(3, ());
        assert_eq!(a.hide_any(), Transition::Hidden(3));
        assert!(!Transition::<u32>::Unchanged.is_change());
    }

    // Interleaved requests across many owners never leave two owners active:
    // the number of live activations implied by the transition stream is 0 or 1.
    #[test]
    fn at_most_one_active_over_interleaved_requests() {
        let mut a: ActivationState<u32, ()> = ActivationState::new();
        let mut live: Vec<u32> = Vec::new();
        let mut seed = 0x2545_f491_u32;
        for _ in 0..500 {
            seed ^= seed << 13;
            seed ^= seed >> 17;
            seed ^= seed << 5;
            let owner = seed % 7;
            let t = match seed % 3 {
                0 => a.hide(&owner),
                1 => a.hide_any(),
                _ => a.show(owner, ()),
            };
            match t {
                Transition::Shown(k) => live.push(k),
                Transition::Retargeted { from, to } => {
                    live.retain(|k| *k != from);
                    live.push(to);
                }
                Transition::Hidden(k) => live.retain(|x| *x != k),
                Transition::Unchanged => {}
            }
            assert!(live.len() <= 1);
            assert_eq!(live.first(), a.owner());
        }
    }
}
