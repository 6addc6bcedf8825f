//! Document-wide pointer listener registry.
//!
//! Listeners registered here receive pointer events regardless of which
//! element is under the pointer, so a drag keeps tracking after the pointer
//! leaves the pressed item. Registrations are held by [`ListenerGuard`]s and
//! removed when the guard drops.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use crate::event::PointerKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

#[derive(Debug, Default)]
struct Registry {
    next_id: u64,
    listeners: Vec<(ListenerId, PointerKind)>,
}

/// Handle to the shared registry. Clones refer to the same registry.
#[derive(Debug, Clone, Default)]
pub struct PointerSurface {
    registry: Rc<RefCell<Registry>>,
}

impl PointerSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register one listener for each of `kinds`. All of them stay
    /// registered until the returned guard is dropped.
    pub fn listen(&self, kinds: &[PointerKind]) -> ListenerGuard {
        let mut registry = self.registry.borrow_mut();
        let id = ListenerId(registry.next_id);
        registry.next_id += 1;
        for kind in kinds {
            registry.listeners.push((id, *kind));
        }
        log::trace!("[surface] registered {:?} for {:?}", id, kinds);

        ListenerGuard {
            id,
            registry: Rc::downgrade(&self.registry),
        }
    }

    pub fn is_listening(&self, id: ListenerId, kind: PointerKind) -> bool {
        self.registry
            .borrow()
            .listeners
            .iter()
            .any(|(l, k)| *l == id && *k == kind)
    }

    /// Listeners for `kind`, in registration order.
    pub fn listeners_for(&self, kind: PointerKind) -> Vec<ListenerId> {
        self.registry
            .borrow()
            .listeners
            .iter()
            .filter(|(_, k)| *k == kind)
            .map(|(id, _)| *id)
            .collect()
    }

    /// Total registrations across all kinds.
    pub fn listener_count(&self) -> usize {
        self.registry.borrow().listeners.len()
    }
}

/// Keeps a set of registrations alive. Dropping it removes them exactly once.
#[derive(Debug)]
pub struct ListenerGuard {
    id: ListenerId,
    registry: Weak<RefCell<Registry>>,
}

impl ListenerGuard {
    pub fn id(&self) -> ListenerId {
        self.id
    }
}

impl Drop for ListenerGuard {
    fn drop(&mut self) {
        // Surface already gone: nothing left to deregister from.
        let Some(registry) = self.registry.upgrade() else {
            return;
        };
        let borrowed = registry.try_borrow_mut();
        match borrowed {
            Ok(mut registry) => {
                registry.listeners.retain(|(id, _)| *id != self.id);
                log::trace!("[surface] released {:?}", self.id);
            }
            Err(_) => log::warn!("[surface] registry busy, leaking {:?}", self.id),
        };
    }
}
