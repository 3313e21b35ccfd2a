use serde::{Deserialize, Serialize};

use crate::{Point, Rectangle};

/// Default corner-handle hit radius (in pixels).
pub const HANDLE_HIT_RADIUS: i32 = 8;

/// One of the four resize handles of a selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CornerId {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl CornerId {
    pub const ALL: [CornerId; 4] = [
        CornerId::TopLeft,
        CornerId::TopRight,
        CornerId::BottomLeft,
        CornerId::BottomRight,
    ];

    /// Marker class carried by the handle element for this corner.
    pub fn class_name(self) -> &'static str {
        match self {
            CornerId::TopLeft => "top-left",
            CornerId::TopRight => "top-right",
            CornerId::BottomLeft => "bottom-left",
            CornerId::BottomRight => "bottom-right",
        }
    }

    pub fn from_class_name(class: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.class_name() == class)
    }

    /// Position of this corner on `rect`.
    pub fn position_on(self, rect: &Rectangle) -> Point {
        match self {
            CornerId::TopLeft => rect.top_left(),
            CornerId::TopRight => rect.top_right(),
            CornerId::BottomLeft => rect.bottom_left(),
            CornerId::BottomRight => rect.bottom_right(),
        }
    }
}

/// Move the edges owned by `corner` by `(dx, dy)` and renormalize.
///
/// The opposite corner stays where it is; dragging past it flips the result
/// back into a top-left/bottom-right rectangle.
pub fn apply_corner_delta(corner: CornerId, dx: i32, dy: i32, baseline: Rectangle) -> Rectangle {
    let mut left = baseline.start_x();
    let mut top = baseline.start_y();
    let mut right = baseline.end_x();
    let mut bottom = baseline.end_y();

    match corner {
        CornerId::TopLeft => {
            left += dx;
            top += dy;
        }
        CornerId::TopRight => {
            right += dx;
            top += dy;
        }
        CornerId::BottomLeft => {
            left += dx;
            bottom += dy;
        }
        CornerId::BottomRight => {
            right += dx;
            bottom += dy;
        }
    }

    Rectangle::from_edges(left, top, right, bottom)
}

/// Detect which corner handle (if any) lies within `radius` of `point`.
///
/// Corners are checked top-left, top-right, bottom-right, bottom-left, so the
/// first match wins on tiny rectangles where handles overlap.
pub fn corner_at_position(point: Point, rect: &Rectangle, radius: i32) -> Option<CornerId> {
    // Widened so pointers far outside the selection cannot overflow.
    let radius = i64::from(radius);
    let radius_sq = radius * radius;

    let is_near = |p: Point| -> bool {
        let dx = i64::from(point.x) - i64::from(p.x);
        let dy = i64::from(point.y) - i64::from(p.y);
        dx * dx + dy * dy <= radius_sq
    };

    [
        CornerId::TopLeft,
        CornerId::TopRight,
        CornerId::BottomRight,
        CornerId::BottomLeft,
    ]
    .into_iter()
    .find(|corner| is_near(corner.position_on(rect)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn class_names_round_trip() {
        for corner in CornerId::ALL {
            assert_eq!(CornerId::from_class_name(corner.class_name()), Some(corner));
        }
        assert_eq!(CornerId::from_class_name("center"), None);
    }

    #[test]
    fn top_left_delta_moves_start_and_keeps_end() {
        let rect = Rectangle::from_edges(10, 10, 100, 100);
        let r = apply_corner_delta(CornerId::TopLeft, 5, 5, rect);
        assert_eq!((r.start_x(), r.start_y()), (15, 15));
        assert_eq!((r.end_x(), r.end_y()), (100, 100));
    }

    #[test]
    fn bottom_right_delta_grows_size_and_keeps_start() {
        let rect = Rectangle::from_edges(10, 10, 100, 100);
        let r = apply_corner_delta(CornerId::BottomRight, 5, 5, rect);
        assert_eq!((r.start_x(), r.start_y()), (10, 10));
        assert_eq!((r.width(), r.height()), (95, 95));
    }

    #[test]
    fn top_right_delta_moves_right_and_top() {
        let rect = Rectangle::from_edges(0, 0, 50, 50);
        let r = apply_corner_delta(CornerId::TopRight, 10, -10, rect);
        assert_eq!(r, Rectangle::from_edges(0, -10, 60, 50));
    }

    #[test]
    fn dragging_past_opposite_corner_renormalizes() {
        let rect = Rectangle::from_edges(0, 0, 20, 20);
        let r = apply_corner_delta(CornerId::BottomLeft, 50, 0, rect);
        assert_eq!((r.start_x(), r.end_x()), (20, 50));
        assert_eq!(r.width(), 30);
    }

    #[test]
    fn hit_test_finds_corners_within_radius() {
        let rect = Rectangle::from_edges(0, 0, 100, 100);
        assert_eq!(
            corner_at_position(Point::new(2, 2), &rect, HANDLE_HIT_RADIUS),
            Some(CornerId::TopLeft)
        );
        assert_eq!(
            corner_at_position(Point::new(98, 3), &rect, HANDLE_HIT_RADIUS),
            Some(CornerId::TopRight)
        );
        assert_eq!(
            corner_at_position(Point::new(104, 104), &rect, HANDLE_HIT_RADIUS),
            Some(CornerId::BottomRight)
        );
        assert_eq!(
            corner_at_position(Point::new(0, 93), &rect, HANDLE_HIT_RADIUS),
            Some(CornerId::BottomLeft)
        );
        assert_eq!(corner_at_position(Point::new(50, 50), &rect, HANDLE_HIT_RADIUS), None);
        // (10, 10) is ~14px from the corner.
        assert_eq!(corner_at_position(Point::new(10, 10), &rect, HANDLE_HIT_RADIUS), None);
    }

    #[test]
    fn far_away_pointer_is_not_a_hit() {
        let rect = Rectangle::from_edges(0, 0, 100, 100);
        assert_eq!(corner_at_position(Point::new(50_000, 0), &rect, HANDLE_HIT_RADIUS), None);
        assert_eq!(
            corner_at_position(Point::new(i32::MIN, i32::MAX), &rect, HANDLE_HIT_RADIUS),
            None
        );
    }
}
