use rc_geometry::Point;
use serde::{Deserialize, Serialize};

use crate::Element;

/// Mouse button.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MouseButton {
    #[default]
    Left,
    Right,
    Middle,
}

impl MouseButton {
    /// The primary (main) button; the only one that starts or confirms a selection.
    #[inline]
    pub fn is_primary(self) -> bool {
        self == MouseButton::Left
    }
}

/// Pointer event kind. Listeners are registered per kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PointerEventKind {
    Down,
    Move,
    Up,
}

/// Platform-agnostic pointer event in client coordinates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointerEvent {
    pub kind: PointerEventKind,
    /// Button that changed state. Move events carry the primary button.
    #[serde(default)]
    pub button: MouseButton,
    pub x: i32,
    pub y: i32,
    /// Element under the pointer, if the host can tell.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<Element>,
}

impl PointerEvent {
    pub fn down(x: i32, y: i32, button: MouseButton) -> Self {
        Self {
            kind: PointerEventKind::Down,
            button,
            x,
            y,
            target: None,
        }
    }

    pub fn moved(x: i32, y: i32) -> Self {
        Self {
            kind: PointerEventKind::Move,
            button: MouseButton::Left,
            x,
            y,
            target: None,
        }
    }

    pub fn up(x: i32, y: i32, button: MouseButton) -> Self {
        Self {
            kind: PointerEventKind::Up,
            button,
            x,
            y,
            target: None,
        }
    }

    pub fn with_target(mut self, target: Element) -> Self {
        self.target = Some(target);
        self
    }

    #[inline]
    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }
}
