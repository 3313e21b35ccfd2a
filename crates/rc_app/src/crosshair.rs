use std::cell::Cell;
use std::rc::Rc;

use log::debug;
use rc_geometry::Point;
use rc_platform::{PointerEventKind, PointerSurface, Subscription};

/// Mirrors the pointer position for the crosshair overlay.
pub struct CrosshairTracker {
    surface: PointerSurface,
    position: Rc<Cell<Option<Point>>>,
    subscription: Option<Subscription>,
}

impl CrosshairTracker {
    pub fn new(surface: PointerSurface) -> Self {
        Self {
            surface,
            position: Rc::new(Cell::new(None)),
            subscription: None,
        }
    }

    /// Center the crosshair in the viewport and follow pointer moves.
    pub fn start(&mut self, viewport_width: i32, viewport_height: i32) {
        self.subscription = None;
        self.position
            .set(Some(Point::new(viewport_width / 2, viewport_height / 2)));

        let mut sub = self.surface.subscription();
        let position = Rc::clone(&self.position);
        sub.listen(PointerEventKind::Move, move |ev| {
            position.set(Some(ev.position()))
        });
        self.subscription = Some(sub);
        debug!("crosshair tracking started");
    }

    pub fn stop(&mut self) {
        // Dropping the subscription releases the move handler.
        self.subscription = None;
        self.position.set(None);
    }

    pub fn position(&self) -> Option<Point> {
        self.position.get()
    }
}
