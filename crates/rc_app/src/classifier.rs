use rc_geometry::{CornerId, HANDLE_HIT_RADIUS, Rectangle, corner_at_position};
use rc_platform::{ElementQuery, PointerEvent};
use rc_settings::{CornerDetection, Settings};

use crate::selection::PointerHit;

/// Corner carried by `element` through its marker classes.
///
/// The element must be a resize handle (`handle_class`) and carry one of the
/// corner classes (`top-left`, `top-right`, `bottom-left`, `bottom-right`).
pub fn classify_element(element: &impl ElementQuery, handle_class: &str) -> Option<CornerId> {
    if !element.has_class(handle_class) {
        return None;
    }
    CornerId::ALL
        .into_iter()
        .find(|corner| element.has_class(corner.class_name()))
}

/// Maps a pointer-down to what it landed on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CornerClassifier {
    detection: CornerDetection,
    handle_class: String,
    confirm_class: String,
    hit_radius: i32,
}

impl Default for CornerClassifier {
    fn default() -> Self {
        Self::from(&Settings::default())
    }
}

impl From<&Settings> for CornerClassifier {
    fn from(s: &Settings) -> Self {
        Self {
            detection: s.corner_detection,
            handle_class: s.handle_class.clone(),
            confirm_class: s.confirm_class.clone(),
            hit_radius: s.handle_hit_radius,
        }
    }
}

impl CornerClassifier {
    /// Hit-test against the selection corners instead of element markers.
    pub fn hit_radius(radius: i32) -> Self {
        Self {
            detection: CornerDetection::HitRadius,
            hit_radius: radius,
            ..Self::default()
        }
    }

    pub fn detection(&self) -> CornerDetection {
        self.detection
    }

    /// Corner handle under the pointer, if any.
    ///
    /// `current` is the live selection; hit-testing needs it, marker matching does not.
    pub fn classify(&self, event: &PointerEvent, current: Option<&Rectangle>) -> Option<CornerId> {
        match self.detection {
            CornerDetection::MarkerClass => event
                .target
                .as_ref()
                .and_then(|el| classify_element(el, &self.handle_class)),
            CornerDetection::HitRadius => {
                current.and_then(|rect| corner_at_position(event.position(), rect, self.radius()))
            }
        }
    }

    /// Full pointer-down classification: confirm control first, then corners.
    pub fn hit(&self, event: &PointerEvent, current: Option<&Rectangle>) -> PointerHit {
        if event
            .target
            .as_ref()
            .is_some_and(|el| el.is_within(&self.confirm_class))
        {
            return PointerHit::ConfirmControl;
        }
        match self.classify(event, current) {
            Some(corner) => PointerHit::Corner(corner),
            None => PointerHit::Surface,
        }
    }

    fn radius(&self) -> i32 {
        if self.hit_radius > 0 {
            self.hit_radius
        } else {
            HANDLE_HIT_RADIUS
        }
    }
}
