// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Event routing: turn a [`DocumentEvent`] into a [`Command`].
//!
//! ## Overview
//!
//! [`route`] is the dispatch table for the delegated listeners. It looks the
//! event's element id up in the [`Registry`] and decides what the activation
//! state should do. It only computes the command; the
//! [engine](crate::engine::TooltipEngine) executes it.
//!
//! ## Rules
//!
//! - Pointer-over on a hover owner shows it; pointer-out on it hides it.
//! - A click on a click owner toggles it.
//! - Any other click dismisses an active click tooltip, unless it lands inside
//!   the render surface.
//! - Scroll and resize reposition the active tooltip.
//! - A frame event flushes a pending show.
//! - Elements without a registered id are ignored.

use core::hash::Hash;

use crate::document::DocumentEvent;
use crate::registry::Registry;
use crate::types::Trigger;

/// What the engine should do in response to an event.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command<K> {
    /// Show the owner, checked against the given trigger.
    Show(K, Trigger),
    /// Hide the owner if it is active.
    Hide(K),
    /// Hide whatever is active.
    HideAll,
    /// Recompute the position of the active tooltip.
    Reposition,
    /// Run the second (measure and commit) pass of a pending show.
    Flush,
    /// Nothing to do.
    Ignore,
}

/// Map `event` to a command given the registry and the active owner.
///
/// ```
/// use understory_tooltip::document::DocumentEvent;
/// use understory_tooltip::registry::Registry;
/// use understory_tooltip::router::{route, Command};
/// use understory_tooltip::types::{TooltipConfig, Trigger};
///
/// let mut reg: Registry<&str, ()> = Registry::new();
/// reg.register("save", TooltipConfig::new(()).with_trigger(Trigger::Click));
///
/// let click = DocumentEvent::Click { target: Some("save"), in_surface: false };
/// assert_eq!(route(&click, &reg, None), Command::Show("save", Trigger::Click));
/// assert_eq!(route(&click, &reg, Some(&"save")), Command::Hide("save"));
/// ```
pub fn route<K: Clone + Eq + Hash, C>(
    event: &DocumentEvent<K>,
    registry: &Registry<K, C>,
    active: Option<&K>,
) -> Command<K> {
    let trigger_of = |id: &K| registry.lookup(id).map(|cfg| cfg.trigger);
    let command = match event {
        DocumentEvent::PointerOver(Some(id)) if trigger_of(id) == Some(Trigger::Hover) => {
            Command::Show(id.clone(), Trigger::Hover)
        }
        DocumentEvent::PointerOut(Some(id)) if trigger_of(id) == Some(Trigger::Hover) => {
            Command::Hide(id.clone())
        }
        DocumentEvent::Click {
            in_surface: true, ..
        } => Command::Ignore,
        DocumentEvent::Click {
            target: Some(id), ..
        } if trigger_of(id) == Some(Trigger::Click) => {
            if active == Some(id) {
                Command::Hide(id.clone())
            } else {
                Command::Show(id.clone(), Trigger::Click)
            }
        }
        DocumentEvent::Click { .. } => match active {
            Some(owner) if trigger_of(owner) == Some(Trigger::Click) => Command::HideAll,
            _ => Command::Ignore,
        },
        DocumentEvent::Scroll | DocumentEvent::Resize => Command::Reposition,
        DocumentEvent::Frame => Command::Flush,
        DocumentEvent::PointerOver(_) | DocumentEvent::PointerOut(_) => Command::Ignore,
    };
    log::trace!(
        "routed {} to {}",
        event_name(event),
        command_name(&command)
    );
    command
}

fn event_name<K>(event: &DocumentEvent<K>) -> &'static str {
    match event {
        DocumentEvent::PointerOver(_) => "pointerover",
        DocumentEvent::PointerOut(_) => "pointerout",
        DocumentEvent::Click { .. } => "click",
        DocumentEvent::Scroll => "scroll",
        DocumentEvent::Resize => "resize",
        DocumentEvent::Frame => "frame",
    }
}

fn command_name<K>(command: &Command<K>) -> &'static str {
    match command {
        Command::Show(..) => "show",
        Command::Hide(_) => "hide",
        Command::HideAll => "hide-all",
        Command::Reposition => "reposition",
        Command::Flush => "flush",
        Command::Ignore => "ignore",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TooltipConfig;

    fn registry() -> Registry<u32, ()> {
        let mut reg = Registry::new();
        reg.register(1, TooltipConfig::new(()));
        reg.register(2, TooltipConfig::new(()).with_trigger(Trigger::Click));
        reg.register(3, TooltipConfig::new(()).with_trigger(Trigger::Click));
        reg
    }

    fn click(target: Option<u32>) -> DocumentEvent<u32> {
        DocumentEvent::Click {
            target,
            in_surface: false,
        }
    }

    #[test]
    fn hover_owner_shows_and_hides_on_pointer() {
        let reg = registry();
        assert_eq!(
            route(&DocumentEvent::PointerOver(Some(1)), &reg, None),
            Command::Show(1, Trigger::Hover)
        );
        assert_eq!(
            route(&DocumentEvent::PointerOut(Some(1)), &reg, Some(&1)),
            Command::Hide(1)
        );
    }

    #[test]
    fn pointer_ignores_click_owners_and_unknown_ids() {
        let reg = registry();
        assert_eq!(
            route(&DocumentEvent::PointerOver(Some(2)), &reg, None),
            Command::Ignore
        );
        assert_eq!(
            route(&DocumentEvent::PointerOut(Some(2)), &reg, Some(&2)),
            Command::Ignore
        );
        assert_eq!(
            route(&DocumentEvent::PointerOver(Some(99)), &reg, None),
            Command::Ignore
        );
        assert_eq!(
            route(&DocumentEvent::PointerOver(None), &reg, None),
            Command::Ignore
        );
    }

    #[test]
    fn click_toggles_click_owner() {
        let reg = registry();
        assert_eq!(
            route(&click(Some(2)), &reg, None),
            Command::Show(2, Trigger::Click)
        );
        assert_eq!(route(&click(Some(2)), &reg, Some(&2)), Command::Hide(2));
        // Another click owner retargets.
        assert_eq!(
            route(&click(Some(3)), &reg, Some(&2)),
            Command::Show(3, Trigger::Click)
        );
    }

    #[test]
    fn click_elsewhere_dismisses_only_click_tooltips() {
        let reg = registry();
        assert_eq!(route(&click(None), &reg, Some(&2)), Command::HideAll);
        assert_eq!(route(&click(Some(1)), &reg, Some(&2)), Command::HideAll);
        assert_eq!(route(&click(Some(99)), &reg, Some(&2)), Command::HideAll);
        // Active hover tooltip is not dismissed by clicks.
        assert_eq!(route(&click(None), &reg, Some(&1)), Command::Ignore);
        assert_eq!(route(&click(None), &reg, None), Command::Ignore);
    }

    #[test]
    fn click_inside_surface_is_ignored() {
        let reg = registry();
        let ev = DocumentEvent::Click {
            target: Some(2),
            in_surface: true,
        };
        assert_eq!(route(&ev, &reg, Some(&2)), Command::Ignore);
        let ev = DocumentEvent::Click {
            target: None,
            in_surface: true,
        };
        assert_eq!(route(&ev, &reg, Some(&2)), Command::Ignore);
    }

    #[test]
    fn viewport_and_frame_events() {
        let reg = registry();
        assert_eq!(
            route(&DocumentEvent::Scroll, &reg, None),
            Command::Reposition
        );
        assert_eq!(
            route(&DocumentEvent::Resize, &reg, Some(&1)),
            Command::Reposition
        );
        assert_eq!(route(&DocumentEvent::Frame, &reg, None), Command::Flush);
    }
}
