use log::{debug, info, trace};
use rc_geometry::{CornerId, Point, Rectangle, apply_corner_delta};
use rc_platform::MouseButton;
use rc_settings::Settings;
use serde::Serialize;

/// A drawn selection is confirmed only if both sides are strictly larger than this (pixels).
pub const MIN_CONFIRM_SIZE: i32 = 5;

/// A resize frame is accepted only if both sides are at least this (pixels).
pub const MIN_RESIZE_SIZE: i32 = 10;

/// Size rules applied by the selection model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Thresholds {
    pub min_confirm_size: i32,
    pub min_resize_size: i32,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            min_confirm_size: MIN_CONFIRM_SIZE,
            min_resize_size: MIN_RESIZE_SIZE,
        }
    }
}

impl From<&Settings> for Thresholds {
    fn from(s: &Settings) -> Self {
        Self {
            min_confirm_size: s.min_confirm_size,
            min_resize_size: s.min_resize_size,
        }
    }
}

/// Validate a rectangle against an inclusive minimum size.
#[inline]
pub fn validate_min_size(rect: Rectangle, min_size: i32) -> Option<Rectangle> {
    rect.is_at_least(min_size).then_some(rect)
}

/// Apply a corner drag to `baseline`, and reject the update if it violates `min_size`.
#[inline]
pub fn update_rect_by_corner_validated(
    corner: CornerId,
    dx: i32,
    dy: i32,
    baseline: Rectangle,
    min_size: i32,
) -> Option<Rectangle> {
    validate_min_size(apply_corner_delta(corner, dx, dy, baseline), min_size)
}

/// What a pointer-down landed on.
///
/// The host classifies the target (element markers or handle hit-testing);
/// the model only applies the dispatch rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerHit {
    /// Plain overlay surface.
    Surface,
    /// The confirm control (or something inside it). It owns its own clicks.
    ConfirmControl,
    /// One of the corner handles.
    Corner(CornerId),
}

/// Interaction mode. Each variant carries exactly the data valid for it.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    #[default]
    Idle,
    /// Dragging out a new selection from `anchor`.
    Drawing { anchor: Point },
    /// Dragging `corner` of `baseline`; deltas are measured from `anchor`.
    Resizing {
        corner: CornerId,
        anchor: Point,
        baseline: Rectangle,
    },
}

impl Mode {
    #[inline]
    pub fn is_idle(&self) -> bool {
        matches!(self, Mode::Idle)
    }

    #[inline]
    pub fn is_drawing(&self) -> bool {
        matches!(self, Mode::Drawing { .. })
    }

    #[inline]
    pub fn is_resizing(&self) -> bool {
        matches!(self, Mode::Resizing { .. })
    }
}

/// Input actions (pure).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    PointerDown {
        position: Point,
        button: MouseButton,
        hit: PointerHit,
    },
    PointerMove {
        position: Point,
    },
    PointerUp {
        position: Point,
        button: MouseButton,
    },
    /// Drop the current selection and return to idle.
    Clear,
}

/// Read-only view of the selection state handed to renderers.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub current_rectangle: Option<Rectangle>,
    pub is_drawing: bool,
    pub is_resizing: bool,
}

/// Effects emitted by the model (observed by the host).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// The observable state changed. Emitted at most once per action.
    Changed(Snapshot),
    /// A drawn selection passed the confirmation threshold and is ready for capture.
    Confirmed { selection: Rectangle },
    /// A drawn selection was too small and has been dropped.
    Discarded,
}

/// Selection state machine model.
#[derive(Debug, Default)]
pub struct Model {
    mode: Mode,
    rectangle: Option<Rectangle>,
    thresholds: Thresholds,
}

impl Model {
    pub fn new(thresholds: Thresholds) -> Self {
        Self {
            thresholds,
            ..Self::default()
        }
    }

    pub fn mode(&self) -> &Mode {
        &self.mode
    }

    pub fn rectangle(&self) -> Option<Rectangle> {
        self.rectangle
    }

    pub fn thresholds(&self) -> Thresholds {
        self.thresholds
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            current_rectangle: self.rectangle,
            is_drawing: self.mode.is_drawing(),
            is_resizing: self.mode.is_resizing(),
        }
    }

    pub fn reduce(&mut self, action: Action) -> Vec<Effect> {
        let before = self.snapshot();
        let mut effects = Vec::new();

        match action {
            Action::PointerDown {
                position,
                button,
                hit,
            } => self.pointer_down(position, button, hit),
            Action::PointerMove { position } => self.pointer_move(position),
            Action::PointerUp { position, button } => {
                if let Some(effect) = self.pointer_up(position, button) {
                    effects.push(effect);
                }
            }
            Action::Clear => {
                self.mode = Mode::Idle;
                self.rectangle = None;
            }
        }

        let after = self.snapshot();
        if after != before {
            effects.insert(0, Effect::Changed(after));
        }
        effects
    }

    fn pointer_down(&mut self, position: Point, button: MouseButton, hit: PointerHit) {
        if !button.is_primary() {
            trace!("ignoring {button:?} pointer-down");
            return;
        }

        match hit {
            PointerHit::ConfirmControl => {
                trace!("pointer-down on confirm control; left to the control");
            }
            PointerHit::Corner(corner) => match self.rectangle {
                Some(baseline) => {
                    debug!("resize {corner:?} from {position:?}");
                    self.mode = Mode::Resizing {
                        corner,
                        anchor: position,
                        baseline,
                    };
                }
                None => self.begin_drawing(position),
            },
            PointerHit::Surface => self.begin_drawing(position),
        }
    }

    fn begin_drawing(&mut self, anchor: Point) {
        debug!("draw from {anchor:?}");
        self.mode = Mode::Drawing { anchor };
        self.rectangle = Some(Rectangle::at_point(anchor));
    }

    fn pointer_move(&mut self, position: Point) {
        match self.mode {
            Mode::Idle => {}
            Mode::Drawing { anchor } => {
                self.rectangle = Some(Rectangle::spanning(anchor, position));
            }
            Mode::Resizing {
                corner,
                anchor,
                baseline,
            } => {
                let (dx, dy) = position.delta_from(anchor);
                match update_rect_by_corner_validated(
                    corner,
                    dx,
                    dy,
                    baseline,
                    self.thresholds.min_resize_size,
                ) {
                    Some(updated) => self.rectangle = Some(updated),
                    None => trace!("resize frame ({dx}, {dy}) below minimum size; rejected"),
                }
            }
        }
    }

    fn pointer_up(&mut self, position: Point, button: MouseButton) -> Option<Effect> {
        if !button.is_primary() {
            trace!("ignoring {button:?} pointer-up");
            return None;
        }

        match self.mode {
            Mode::Idle => None,
            Mode::Resizing { .. } => {
                debug!("resize finished at {:?}", self.rectangle);
                self.mode = Mode::Idle;
                None
            }
            Mode::Drawing { anchor } => {
                self.mode = Mode::Idle;
                // The up position is not part of the selection; only moves shape it.
                match self
                    .rectangle
                    .filter(|r| r.exceeds(self.thresholds.min_confirm_size))
                {
                    Some(selection) => {
                        info!("selection confirmed: {selection:?}");
                        Some(Effect::Confirmed { selection })
                    }
                    None => {
                        debug!(
                            "selection from {anchor:?} released at {position:?} too small; discarded"
                        );
                        self.rectangle = None;
                        Some(Effect::Discarded)
                    }
                }
            }
        }
    }
}
