// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Reasons a show request is refused.
//!
//! None of these are failures of the engine. A refused show leaves the
//! activation state untouched, and [`TooltipEngine::handle`] only logs them.
//!
//! [`TooltipEngine::handle`]: crate::engine::TooltipEngine::handle

use crate::types::Trigger;

/// Why [`TooltipEngine::show`](crate::engine::TooltipEngine::show) did nothing.
#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ShowRejected {
    /// There is no document, or no surface could be mounted.
    #[error("no document available")]
    Unavailable,
    /// No owner is registered under the requested id.
    #[error("owner is not registered")]
    UnknownOwner,
    /// The owner is registered with a different trigger.
    #[error("owner is triggered by {expected:?}, not {actual:?}")]
    TriggerMismatch {
        /// Trigger the owner registered with.
        expected: Trigger,
        /// Trigger of the request.
        actual: Trigger,
    },
    /// No element carries the owner's id, or it has no layout yet.
    #[error("no target element carries the owner id")]
    MissingTarget,
}
