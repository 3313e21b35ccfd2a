use std::cell::RefCell;
use std::fs;
use std::path::Path;
use std::rc::Rc;

use anyhow::Context;
use log::{debug, info};
use rc_app::{Effect, SelectionTracker};
use rc_geometry::{CornerId, Rectangle};
use rc_platform::{Element, MouseButton, PointerEvent, PointerSurface};
use rc_settings::Settings;
use serde::Serialize;

/// Outcome of replaying a pointer session.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct SessionReport {
    /// Selection left on screen after the last event.
    pub selection: Option<Rectangle>,
    /// Every drawn selection that passed the confirmation threshold.
    pub confirmed: Vec<Rectangle>,
    pub discarded: usize,
    /// Number of observable state changes.
    pub updates: usize,
}

/// Built-in session: draw a selection, then drag its bottom-right handle.
///
/// The handle press carries a marker-class target and lands on the corner, so
/// both corner detection strategies recognize it.
pub fn default_script() -> Vec<PointerEvent> {
    let handle = Element::new()
        .with_class("resize-handle")
        .with_class(CornerId::BottomRight.class_name());

    vec![
        PointerEvent::down(100, 100, MouseButton::Left),
        PointerEvent::moved(180, 160),
        PointerEvent::moved(300, 240),
        PointerEvent::up(300, 240, MouseButton::Left),
        PointerEvent::down(300, 240, MouseButton::Left).with_target(handle),
        PointerEvent::moved(330, 250),
        PointerEvent::moved(340, 260),
        PointerEvent::up(340, 260, MouseButton::Left),
    ]
}

/// Load a JSON array of pointer events.
pub fn load_script(path: &Path) -> anyhow::Result<Vec<PointerEvent>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read script {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("failed to parse script {}", path.display()))
}

/// Feed `events` through a freshly started tracker and report what happened.
pub fn replay(settings: &Settings, events: &[PointerEvent]) -> SessionReport {
    let surface = PointerSurface::new();
    let mut tracker = SelectionTracker::new(surface.clone(), settings);
    tracker.start();

    let report = Rc::new(RefCell::new(SessionReport::default()));
    let r = Rc::clone(&report);
    let observer = tracker.observe(move |effect| {
        let mut report = r.borrow_mut();
        match effect {
            Effect::Changed(snapshot) => {
                report.updates += 1;
                debug!("selection update: {snapshot:?}");
            }
            Effect::Confirmed { selection } => report.confirmed.push(*selection),
            Effect::Discarded => report.discarded += 1,
        }
    });

    for event in events {
        surface.dispatch(event);
    }

    tracker.unobserve(observer);
    let mut report = report.take();
    report.selection = tracker.current_rectangle();
    tracker.stop();

    info!(
        "replayed {} event(s): {} update(s), {} confirmed, {} discarded",
        events.len(),
        report.updates,
        report.confirmed.len(),
        report.discarded
    );
    report
}
