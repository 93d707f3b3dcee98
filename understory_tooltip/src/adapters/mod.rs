// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Adapters that implement [`Document`](crate::document::Document) and
//! [`Surface`](crate::surface::Surface) for concrete hosts.
//!
//! Enabled via feature flags to keep the core small and `no_std` by default.

#[cfg(feature = "web_adapter")]
pub mod web;
