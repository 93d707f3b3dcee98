// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_tooltip --heading-base-level=0

//! Understory Tooltip: a headless, `no_std` singleton tooltip engine.
//!
//! ## Overview
//!
//! Many owners declare a tooltip; one shared surface draws it.
//! This crate keeps a registry of owners, tracks which single owner is active,
//! routes document-level events to show/hide decisions, and computes a
//! viewport-aware position for the floating element.
//! It does not draw anything. Rendering and DOM access go through two traits,
//! [`Document`](crate::document::Document) and [`Surface`](crate::surface::Surface).
//!
//! ## Pieces
//!
//! - [`Registry`](crate::registry::Registry): owner id → [`TooltipConfig`](crate::types::TooltipConfig).
//! - [`ActivationState`](crate::activation::ActivationState): `Idle` or `Active(owner, target)`; never two owners.
//! - [`route`](crate::router::route): dispatch rules from [`DocumentEvent`](crate::document::DocumentEvent) to a [`Command`](crate::router::Command).
//! - [`place`](crate::placement::place): pure positioning with a single flip and a clamp.
//! - [`ListenerLease`](crate::listeners::ListenerLease): one fixed listener set, however many owners exist.
//! - [`TooltipEngine`](crate::engine::TooltipEngine): the context object that ties them together.
//!
//! ## Workflow
//!
//! 1) Construct one [`TooltipEngine`](crate::engine::TooltipEngine) per page session, with your
//!    document and surface implementations.
//! 2) Owners register on mount and update, and deregister on unmount.
//!    The first registration installs the delegated listeners.
//! 3) Feed every listener event to [`TooltipEngine::handle`](crate::engine::TooltipEngine::handle).
//! 4) A show renders the content invisibly and requests a frame.
//!    Deliver [`DocumentEvent::Frame`](crate::document::DocumentEvent::Frame) once layout has settled;
//!    the engine measures, places, and reveals the content.
//! 5) Scroll and resize events reposition the active tooltip.
//!
//! ## Failure model
//!
//! Nothing here panics or returns hard errors in normal use.
//! A missing target, an unknown owner, or a missing document leaves the
//! engine idle; stale hides are ignored.
//! [`TooltipEngine::show`](crate::engine::TooltipEngine::show) reports the reason as a
//! [`ShowRejected`](crate::error::ShowRejected) for callers that care.
//!
//! ## Features
//!
//! - `std` (default) / `libm`: forwarded to Kurbo.
//! - `web_adapter`: [`adapters::web`](crate::adapters) implements the traits on top of `web-sys`.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod activation;
pub mod adapters;
pub mod document;
pub mod engine;
pub mod error;
pub mod listeners;
pub mod placement;
pub mod registry;
pub mod router;
pub mod surface;
pub mod types;
