// SPDX-License-Identifier: MIT OR Apache-2.0
//! Out-of-place rendering targets.
//!
//! A [`Portal`] forwards content to a [`PortalRegistry`] so it can be drawn
//! somewhere other than where it was produced (e.g. above every other layer).
//! The registry is optional: without one the portal renders in place.
//! Portals are independent of the tween engine.

use indexmap::IndexMap;
use std::cell::RefCell;
use std::rc::Rc;
use uuid::Uuid;

/// Key of a registered portal target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PortalKey(pub Uuid);

impl PortalKey {
    /// Create a new random portal key
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for PortalKey {
    fn default() -> Self {
        Self::new()
    }
}

/// Receives content rendered through portals
pub trait PortalRegistry<C> {
    /// Allocate a new target
    fn register(&mut self) -> PortalKey;

    /// Replace the content of a target
    fn update(&mut self, key: PortalKey, content: C);

    /// Release a target
    fn deregister(&mut self, key: PortalKey);
}

/// Shared handle to a registry
pub type SharedRegistry<C> = Rc<RefCell<dyn PortalRegistry<C>>>;

/// In-memory registry keeping content in registration order
#[derive(Debug, Clone)]
pub struct PortalHost<C> {
    targets: IndexMap<PortalKey, Option<C>>,
}

impl<C> PortalHost<C> {
    /// Create an empty host
    pub fn new() -> Self {
        Self {
            targets: IndexMap::new(),
        }
    }

    /// Content of a target, if any has been pushed
    pub fn content(&self, key: PortalKey) -> Option<&C> {
        self.targets.get(&key).and_then(Option::as_ref)
    }

    /// All pushed content, in registration order
    pub fn contents(&self) -> impl Iterator<Item = &C> {
        self.targets.values().filter_map(Option::as_ref)
    }

    /// Number of registered targets
    pub fn len(&self) -> usize {
        self.targets.len()
    }

    /// Check if no targets are registered
    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }
}

impl<C> Default for PortalHost<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> PortalRegistry<C> for PortalHost<C> {
    fn register(&mut self) -> PortalKey {
        let key = PortalKey::new();
        self.targets.insert(key, None);
        key
    }

    fn update(&mut self, key: PortalKey, content: C) {
        if let Some(slot) = self.targets.get_mut(&key) {
            *slot = Some(content);
        }
    }

    fn deregister(&mut self, key: PortalKey) {
        self.targets.shift_remove(&key);
    }
}

/// Renders content through a registry, or in place when none is available
pub struct Portal<C> {
    registry: Option<SharedRegistry<C>>,
    key: Option<PortalKey>,
    checked: bool,
    in_place: bool,
}

impl<C> Portal<C> {
    /// Create a portal over an optional registry
    pub fn new(registry: Option<SharedRegistry<C>>) -> Self {
        Self {
            registry,
            key: None,
            checked: false,
            in_place: false,
        }
    }

    /// Check for the registry capability
    ///
    /// Runs once; later calls do nothing.
    pub fn mount(&mut self) {
        if self.checked {
            return;
        }
        if self.registry.is_none() {
            tracing::warn!("Portal rendering is not supported without a portal registry. Content will be rendered in place");
            self.in_place = true;
        }
        self.checked = true;
    }

    /// Render content
    ///
    /// Returns the content when rendering in place. Otherwise pushes it to the
    /// registry, registering a target on first use, and returns `None`.
    pub fn render(&mut self, content: C) -> Option<C> {
        self.mount();

        let Some(registry) = self.registry.as_ref().filter(|_| !self.in_place) else {
            return Some(content);
        };

        let mut registry = registry.borrow_mut();
        let key = *self.key.get_or_insert_with(|| registry.register());
        registry.update(key, content);
        None
    }

    /// Release the registered target
    pub fn unmount(&mut self) {
        if let (Some(registry), Some(key)) = (self.registry.as_ref(), self.key.take()) {
            registry.borrow_mut().deregister(key);
        }
    }

    /// Check if content is rendered in place
    pub fn is_in_place(&self) -> bool {
        self.in_place
    }

    /// Key of the registered target
    pub fn key(&self) -> Option<PortalKey> {
        self.key
    }
}
