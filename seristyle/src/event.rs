// Copyright 2025 the Seristyle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Change events and the listener registry.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;
use core::sync::atomic::{AtomicU64, Ordering};

/// Identifies a live [`Renderer`](crate::Renderer).
///
/// Events carry the id of the renderer that fired them, so a listener
/// attached to several renderers can tell them apart. Ids are process-unique
/// and never reused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RendererId(u64);

impl RendererId {
    pub(crate) fn next() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(1);
        Self(NEXT.fetch_add(1, Ordering::Relaxed))
    }

    /// The raw id value.
    pub fn to_raw(self) -> u64 {
        self.0
    }
}

/// A change notification delivered to renderer listeners.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RenderChangeEvent {
    renderer: RendererId,
    structural: bool,
}

impl RenderChangeEvent {
    /// An event originating from the given renderer.
    pub fn new(renderer: RendererId, structural: bool) -> Self {
        Self {
            renderer,
            structural,
        }
    }

    /// The renderer that fired this event.
    pub fn renderer(&self) -> RendererId {
        self.renderer
    }

    /// `true` for changes that can alter downstream bounds computation
    /// (series visibility and the bounds flag), `false` for repaint-only
    /// changes.
    pub fn is_structural(&self) -> bool {
        self.structural
    }
}

/// Handle returned from listener registration, used for removal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type ListenerFn = dyn FnMut(&RenderChangeEvent);

/// The registered listeners of one renderer.
#[derive(Default)]
pub(crate) struct ListenerRegistry {
    next: u64,
    entries: Vec<(ListenerId, Box<ListenerFn>)>,
}

impl ListenerRegistry {
    pub(crate) fn add(&mut self, listener: Box<ListenerFn>) -> ListenerId {
        self.next += 1;
        let id = ListenerId(self.next);
        self.entries.push((id, listener));
        id
    }

    pub(crate) fn remove(&mut self, id: ListenerId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry, _)| *entry != id);
        self.entries.len() != before
    }

    pub(crate) fn contains(&self, id: ListenerId) -> bool {
        self.entries.iter().any(|(entry, _)| *entry == id)
    }

    /// Delivers `event` to every listener, last registered first.
    ///
    /// Reverse order lets enclosing components observe a change after the
    /// components they contain have already reacted to it.
    pub(crate) fn notify(&mut self, event: &RenderChangeEvent) {
        for (_, listener) in self.entries.iter_mut().rev() {
            listener(event);
        }
    }
}

impl fmt::Debug for ListenerRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListenerRegistry")
            .field("len", &self.entries.len())
            .finish_non_exhaustive()
    }
}

/// Couples the owning renderer's id with a borrow of its listener registry,
/// so style views can fire change events without holding a back-reference to
/// the renderer itself.
pub(crate) struct Notifier<'a> {
    pub(crate) renderer: RendererId,
    pub(crate) listeners: &'a mut ListenerRegistry,
}

impl Notifier<'_> {
    pub(crate) fn fire(&mut self, notify: bool) {
        if notify {
            self.listeners
                .notify(&RenderChangeEvent::new(self.renderer, false));
        }
    }

    pub(crate) fn fire_structural(&mut self, notify: bool) {
        if notify {
            self.listeners
                .notify(&RenderChangeEvent::new(self.renderer, true));
        }
    }
}

impl fmt::Debug for Notifier<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Notifier")
            .field("renderer", &self.renderer)
            .field("listeners", &self.listeners)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::rc::Rc;
    use alloc::vec::Vec;
    use core::cell::RefCell;

    use super::*;

    fn recording_listener(
        log: &Rc<RefCell<Vec<u32>>>,
        tag: u32,
    ) -> Box<dyn FnMut(&RenderChangeEvent)> {
        let log = Rc::clone(log);
        Box::new(move |_| log.borrow_mut().push(tag))
    }

    #[test]
    fn ids_are_unique() {
        assert_ne!(RendererId::next(), RendererId::next());
    }

    #[test]
    fn delivery_is_reverse_registration_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut registry = ListenerRegistry::default();
        registry.add(recording_listener(&log, 1));
        registry.add(recording_listener(&log, 2));
        registry.add(recording_listener(&log, 3));
        registry.notify(&RenderChangeEvent::new(RendererId::next(), false));
        assert_eq!(*log.borrow(), [3, 2, 1]);
    }

    #[test]
    fn removal_by_id_is_exact() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut registry = ListenerRegistry::default();
        let a = registry.add(recording_listener(&log, 1));
        let b = registry.add(recording_listener(&log, 2));
        assert!(registry.remove(a));
        assert!(!registry.remove(a));
        assert!(registry.contains(b));
        registry.notify(&RenderChangeEvent::new(RendererId::next(), false));
        assert_eq!(*log.borrow(), [2]);
    }
}
