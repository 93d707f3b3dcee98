// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Owner registry: maps owner ids to their current [`TooltipConfig`].
//!
//! The registry is plain data. Removing the active owner is handled one level
//! up by [`TooltipEngine::deregister`](crate::engine::TooltipEngine::deregister),
//! which hides before it removes.

use core::hash::Hash;

use hashbrown::HashMap;

use crate::types::TooltipConfig;

/// Mapping from owner id to tooltip configuration.
///
/// Keys are unique. Registering an id that is already present replaces its
/// config (last writer wins); this is the steady state for prop updates.
///
/// ```
/// use understory_tooltip::registry::Registry;
/// use understory_tooltip::types::TooltipConfig;
///
/// let mut reg: Registry<&str, &str> = Registry::new();
/// assert!(reg.register("btn", TooltipConfig::new("Hi")).is_none());
/// assert!(reg.register("btn", TooltipConfig::new("Hello")).is_some());
/// assert_eq!(reg.lookup(&"btn").map(|c| c.content), Some("Hello"));
/// ```
#[derive(Clone, Debug)]
pub struct Registry<K, C> {
    entries: HashMap<K, TooltipConfig<C>>,
}

impl<K, C> Default for Registry<K, C> {
    fn default() -> Self {
        Self {
            entries: HashMap::default(),
        }
    }
}

impl<K: Eq + Hash, C> Registry<K, C> {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the config for `owner`, returning the previous one.
    pub fn register(&mut self, owner: K, config: TooltipConfig<C>) -> Option<TooltipConfig<C>> {
        self.entries.insert(owner, config)
    }

    /// Remove the entry for `owner`.
    pub fn remove(&mut self, owner: &K) -> Option<TooltipConfig<C>> {
        self.entries.remove(owner)
    }

    /// Look up the config for `owner`.
    pub fn lookup(&self, owner: &K) -> Option<&TooltipConfig<C>> {
        self.entries.get(owner)
    }

    /// Returns true if `owner` is registered.
    pub fn contains(&self, owner: &K) -> bool {
        self.entries.contains_key(owner)
    }

    /// Number of registered owners.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no owner is registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over all entries in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &TooltipConfig<C>)> + '_ {
        self.entries.iter()
    }
}
