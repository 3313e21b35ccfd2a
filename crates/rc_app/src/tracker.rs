use std::cell::{Cell, RefCell};
use std::rc::Rc;

use log::debug;
use rc_geometry::Rectangle;
use rc_platform::{PointerEvent, PointerEventKind, PointerSurface, Subscription};
use rc_settings::Settings;

use crate::classifier::CornerClassifier;
use crate::selection::{Action, Effect, Mode, Model, Snapshot, Thresholds};

/// Identifier of a registered selection observer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObserverId(u64);

type Observer = Rc<dyn Fn(&Effect)>;

/// State shared between the tracker and its pointer handlers.
struct Shared {
    model: RefCell<Model>,
    classifier: CornerClassifier,
    observers: RefCell<Vec<(ObserverId, Observer)>>,
    next_observer: Cell<u64>,
}

impl Shared {
    fn apply(&self, action: Action) {
        let effects = self.model.borrow_mut().reduce(action);
        if effects.is_empty() {
            return;
        }

        // Observers may call back into the tracker, so no borrow is held while notifying.
        let observers: Vec<Observer> = self
            .observers
            .borrow()
            .iter()
            .map(|(_, o)| Rc::clone(o))
            .collect();
        for effect in &effects {
            for observer in &observers {
                observer(effect);
            }
        }
    }

    fn on_down(&self, event: &PointerEvent) {
        let current = self.model.borrow().rectangle();
        let hit = self.classifier.hit(event, current.as_ref());
        self.apply(Action::PointerDown {
            position: event.position(),
            button: event.button,
            hit,
        });
    }

    fn on_move(&self, event: &PointerEvent) {
        self.apply(Action::PointerMove {
            position: event.position(),
        });
    }

    fn on_up(&self, event: &PointerEvent) {
        self.apply(Action::PointerUp {
            position: event.position(),
            button: event.button,
        });
    }
}

/// Selection tracker bound to a pointer surface.
///
/// `start()` subscribes the down/move/up handlers, `stop()` (or dropping the
/// tracker) releases them. State changes are pushed synchronously to observers.
pub struct SelectionTracker {
    surface: PointerSurface,
    shared: Rc<Shared>,
    subscription: Option<Subscription>,
}

impl SelectionTracker {
    pub fn new(surface: PointerSurface, settings: &Settings) -> Self {
        Self::with_parts(
            surface,
            Thresholds::from(settings),
            CornerClassifier::from(settings),
        )
    }

    pub fn with_parts(
        surface: PointerSurface,
        thresholds: Thresholds,
        classifier: CornerClassifier,
    ) -> Self {
        Self {
            surface,
            shared: Rc::new(Shared {
                model: RefCell::new(Model::new(thresholds)),
                classifier,
                observers: RefCell::new(Vec::new()),
                next_observer: Cell::new(0),
            }),
            subscription: None,
        }
    }

    /// Reset to idle and (re)subscribe to pointer events.
    ///
    /// Calling this while already started releases the previous handlers first.
    pub fn start(&mut self) {
        self.release();
        self.shared.apply(Action::Clear);

        let mut sub = self.surface.subscription();
        let shared = Rc::clone(&self.shared);
        sub.listen(PointerEventKind::Down, move |ev| shared.on_down(ev));
        let shared = Rc::clone(&self.shared);
        sub.listen(PointerEventKind::Move, move |ev| shared.on_move(ev));
        let shared = Rc::clone(&self.shared);
        sub.listen(PointerEventKind::Up, move |ev| shared.on_up(ev));

        debug!("selection tracking started");
        self.subscription = Some(sub);
    }

    /// Release the pointer handlers and clear all state. Idempotent.
    pub fn stop(&mut self) {
        if self.release() {
            debug!("selection tracking stopped");
        }
        self.shared.apply(Action::Clear);
    }

    /// Drop the current selection without touching the subscription.
    pub fn clear(&self) {
        self.shared.apply(Action::Clear);
    }

    fn release(&mut self) -> bool {
        match self.subscription.take() {
            Some(mut sub) => {
                sub.release();
                true
            }
            None => false,
        }
    }

    pub fn is_active(&self) -> bool {
        self.subscription.is_some()
    }

    pub fn current_rectangle(&self) -> Option<Rectangle> {
        self.shared.model.borrow().rectangle()
    }

    pub fn is_drawing(&self) -> bool {
        self.shared.model.borrow().mode().is_drawing()
    }

    pub fn is_resizing(&self) -> bool {
        self.shared.model.borrow().mode().is_resizing()
    }

    pub fn mode(&self) -> Mode {
        *self.shared.model.borrow().mode()
    }

    pub fn snapshot(&self) -> Snapshot {
        self.shared.model.borrow().snapshot()
    }

    /// Register an observer called synchronously for every effect.
    pub fn observe<F>(&self, observer: F) -> ObserverId
    where
        F: Fn(&Effect) + 'static,
    {
        let id = ObserverId(self.shared.next_observer.get() + 1);
        self.shared.next_observer.set(id.0);
        self.shared
            .observers
            .borrow_mut()
            .push((id, Rc::new(observer)));
        id
    }

    pub fn unobserve(&self, id: ObserverId) -> bool {
        let mut observers = self.shared.observers.borrow_mut();
        let before = observers.len();
        observers.retain(|(oid, _)| *oid != id);
        observers.len() != before
    }
}

impl Drop for SelectionTracker {
    fn drop(&mut self) {
        self.stop();
    }
}
