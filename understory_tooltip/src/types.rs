// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core types for tooltips: sides, triggers, and per-owner configuration.
//!
//! ## Overview
//!
//! A [`TooltipConfig`] is what an owner registers under its id.
//! It is a plain value: updating an owner replaces the whole config.
//! The payload `C` is never inspected here; it is forwarded to the
//! [`Surface`](crate::surface::Surface) untouched.

/// Default stacking order for a tooltip that does not ask for one.
pub const DEFAULT_STACK_ORDER: i32 = 1000;

/// Side of the target on which the floating element is placed.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum Side {
    /// Above the target.
    #[default]
    Top,
    /// Below the target.
    Bottom,
    /// Left of the target.
    Left,
    /// Right of the target.
    Right,
}

impl Side {
    /// The side across the target on the same axis (`Top` ↔ `Bottom`, `Left` ↔ `Right`).
    ///
    /// ```
    /// use understory_tooltip::types::Side;
    /// assert_eq!(Side::Top.opposite(), Side::Bottom);
    /// assert_eq!(Side::Right.opposite(), Side::Left);
    /// ```
    pub const fn opposite(self) -> Self {
        match self {
            Self::Top => Self::Bottom,
            Self::Bottom => Self::Top,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Returns true for `Top` and `Bottom`.
    pub const fn is_vertical(self) -> bool {
        matches!(self, Self::Top | Self::Bottom)
    }
}

/// Interaction that shows a tooltip.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum Trigger {
    /// Shown on pointer-over, hidden on pointer-out.
    #[default]
    Hover,
    /// Toggled by clicks on the owner; dismissed by clicks elsewhere.
    Click,
}

/// Configuration registered by one tooltip owner.
#[derive(Clone, Debug, PartialEq)]
pub struct TooltipConfig<C> {
    /// Opaque payload handed to the render surface.
    pub content: C,
    /// Preferred placement side.
    pub side: Side,
    /// Interaction that shows the tooltip.
    pub trigger: Trigger,
    /// Stacking order of the floating element. Higher is drawn on top.
    pub stack_order: i32,
}

impl<C> TooltipConfig<C> {
    /// Create a hover tooltip above its target with the default stacking order.
    pub fn new(content: C) -> Self {
        Self {
            content,
            side: Side::default(),
            trigger: Trigger::default(),
            stack_order: DEFAULT_STACK_ORDER,
        }
    }

    /// Set the preferred side.
    #[must_use]
    pub fn with_side(mut self, side: Side) -> Self {
        self.side = side;
        self
    }

    /// Set the trigger.
    #[must_use]
    pub fn with_trigger(mut self, trigger: Trigger) -> Self {
        self.trigger = trigger;
        self
    }

    /// Set the stacking order.
    #[must_use]
    pub fn with_stack_order(mut self, stack_order: i32) -> Self {
        self.stack_order = stack_order;
        self
    }
}
