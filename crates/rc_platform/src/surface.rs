use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use log::{trace, warn};

use crate::{PointerEvent, PointerEventKind};

/// Identifier of a registered pointer listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type Handler = Rc<RefCell<dyn FnMut(&PointerEvent)>>;

struct Listener {
    id: ListenerId,
    kind: PointerEventKind,
    handler: Handler,
}

#[derive(Default)]
struct Registry {
    next_id: u64,
    listeners: Vec<Listener>,
}

impl Registry {
    fn insert(&mut self, kind: PointerEventKind, handler: Handler) -> ListenerId {
        self.next_id += 1;
        let id = ListenerId(self.next_id);
        self.listeners.push(Listener { id, kind, handler });
        id
    }

    fn remove(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|l| l.id != id);
        self.listeners.len() != before
    }
}

/// Global pointer input surface (the window-level event source).
///
/// Cloning yields another handle to the same registry. Single-threaded: the
/// host event loop calls [`PointerSurface::dispatch`] for every pointer event.
#[derive(Clone, Default)]
pub struct PointerSurface {
    registry: Rc<RefCell<Registry>>,
}

impl PointerSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a raw listener. Prefer [`PointerSurface::subscription`], which
    /// releases its listeners automatically.
    pub fn add_listener<F>(&self, kind: PointerEventKind, handler: F) -> ListenerId
    where
        F: FnMut(&PointerEvent) + 'static,
    {
        let handler: Handler = Rc::new(RefCell::new(handler));
        self.registry.borrow_mut().insert(kind, handler)
    }

    /// Returns `false` if the listener was not registered.
    pub fn remove_listener(&self, id: ListenerId) -> bool {
        self.registry.borrow_mut().remove(id)
    }

    pub fn is_registered(&self, id: ListenerId) -> bool {
        self.registry.borrow().listeners.iter().any(|l| l.id == id)
    }

    pub fn listener_count(&self) -> usize {
        self.registry.borrow().listeners.len()
    }

    pub fn listener_count_for(&self, kind: PointerEventKind) -> usize {
        self.registry
            .borrow()
            .listeners
            .iter()
            .filter(|l| l.kind == kind)
            .count()
    }

    /// Start an empty scoped subscription on this surface.
    pub fn subscription(&self) -> Subscription {
        Subscription {
            registry: Rc::downgrade(&self.registry),
            ids: Vec::new(),
        }
    }

    /// Deliver `event` to every listener of its kind, in registration order.
    ///
    /// Listeners may add or release subscriptions while being called; a listener
    /// released earlier in the same dispatch is skipped. Returns the number of
    /// listeners that ran.
    pub fn dispatch(&self, event: &PointerEvent) -> usize {
        let handlers: Vec<(ListenerId, Handler)> = self
            .registry
            .borrow()
            .listeners
            .iter()
            .filter(|l| l.kind == event.kind)
            .map(|l| (l.id, Rc::clone(&l.handler)))
            .collect();

        let mut delivered = 0;
        for (id, handler) in handlers {
            if !self.is_registered(id) {
                continue;
            }
            match handler.try_borrow_mut() {
                Ok(mut f) => {
                    (&mut *f)(event);
                    delivered += 1;
                }
                Err(_) => warn!("skipping re-entrant dispatch to pointer listener {id:?}"),
            }
        }

        trace!("dispatched {:?} to {delivered} listener(s)", event.kind);
        delivered
    }
}

impl fmt::Debug for PointerSurface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PointerSurface")
            .field("listeners", &self.listener_count())
            .finish()
    }
}

/// Scoped set of listeners on a [`PointerSurface`].
///
/// Dropping the subscription releases exactly the listeners it registered.
/// It holds the surface weakly, so a surface torn down first is not kept alive.
pub struct Subscription {
    registry: Weak<RefCell<Registry>>,
    ids: Vec<ListenerId>,
}

impl Subscription {
    /// Register `handler` for `kind` as part of this subscription.
    pub fn listen<F>(&mut self, kind: PointerEventKind, handler: F) -> ListenerId
    where
        F: FnMut(&PointerEvent) + 'static,
    {
        let handler: Handler = Rc::new(RefCell::new(handler));
        let Some(registry) = self.registry.upgrade() else {
            warn!("pointer surface is gone; listener for {kind:?} not registered");
            return ListenerId(0);
        };
        let id = registry.borrow_mut().insert(kind, handler);
        self.ids.push(id);
        id
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Release all listeners now. Safe to call repeatedly.
    ///
    /// Returns how many listeners were actually removed.
    pub fn release(&mut self) -> usize {
        let ids = std::mem::take(&mut self.ids);
        let Some(registry) = self.registry.upgrade() else {
            return 0;
        };
        let mut registry = registry.borrow_mut();
        ids.into_iter().filter(|id| registry.remove(*id)).count()
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.release();
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription").field("ids", &self.ids).finish()
    }
}
