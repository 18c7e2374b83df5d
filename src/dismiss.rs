//! Outside-interaction listeners
//!
//! A widget whose panel is open holds a `ListenerGuard` from the shared
//! `DismissRegistry`. The guard records the screen area the widget owns; when a
//! pointer press lands, `dispatch` reports every listening widget whose area
//! does not contain the press. Dropping the guard unregisters the listener, so
//! closing a panel or dropping the widget always releases it.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use ratatui::layout::{Position, Rect};

/// Identity of a widget on the page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WidgetId(pub usize);

#[derive(Debug)]
struct Listener {
    id: u64,
    owner: WidgetId,
    bounds: Vec<Rect>,
}

#[derive(Debug, Default)]
struct Listeners {
    next_id: u64,
    entries: Vec<Listener>,
}

/// Process-wide set of outside-interaction listeners
#[derive(Debug, Clone, Default)]
pub struct DismissRegistry {
    inner: Rc<RefCell<Listeners>>,
}

impl DismissRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener for `owner`, released when the guard drops
    pub fn listen(&self, owner: WidgetId) -> ListenerGuard {
        let mut listeners = self.inner.borrow_mut();
        let id = listeners.next_id;
        listeners.next_id += 1;
        listeners.entries.push(Listener {
            id,
            owner,
            bounds: Vec::new(),
        });
        log::debug!("Listening for outside interaction on {:?}", owner);

        ListenerGuard {
            id,
            owner,
            registry: Rc::downgrade(&self.inner),
        }
    }

    pub fn len(&self) -> usize {
        self.inner.borrow().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_listening(&self, owner: WidgetId) -> bool {
        self.inner
            .borrow()
            .entries
            .iter()
            .any(|listener| listener.owner == owner)
    }

    /// Widgets for which a press at `position` is an outside interaction
    pub fn dispatch(&self, position: Position) -> Vec<WidgetId> {
        self.inner
            .borrow()
            .entries
            .iter()
            .filter(|listener| !listener.bounds.iter().any(|rect| rect.contains(position)))
            .map(|listener| listener.owner)
            .collect()
    }
}

/// Scoped registration in a `DismissRegistry`
#[derive(Debug)]
pub struct ListenerGuard {
    id: u64,
    owner: WidgetId,
    registry: Weak<RefCell<Listeners>>,
}

impl ListenerGuard {
    pub fn owner(&self) -> WidgetId {
        self.owner
    }

    /// Replace the areas this listener treats as inside
    pub fn set_bounds(&self, bounds: &[Rect]) {
        let Some(registry) = self.registry.upgrade() else {
            return;
        };
        let mut listeners = registry.borrow_mut();
        if let Some(listener) = listeners.entries.iter_mut().find(|l| l.id == self.id) {
            listener.bounds.clear();
            listener.bounds.extend_from_slice(bounds);
        }
    }
}

impl Drop for ListenerGuard {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            registry.borrow_mut().entries.retain(|l| l.id != self.id);
            log::debug!("Released outside-interaction listener for {:?}", self.owner);
        }
    }
}

#[cfg(test)]
#[path = "dismiss_tests.rs"]
mod dismiss_tests;
