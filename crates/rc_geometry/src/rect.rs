use serde::{Deserialize, Serialize};

/// Pointer position in viewport (client) coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Offset of `self` relative to `origin`, as `(dx, dy)`.
    #[inline]
    pub fn delta_from(self, origin: Point) -> (i32, i32) {
        (self.x - origin.x, self.y - origin.y)
    }
}

/// Normalized selection rectangle.
///
/// `start` is always the top-left corner and `end` the bottom-right one, so
/// `width == end_x - start_x` and `height == end_y - start_y` are never negative.
/// The only way to build one is through the normalizing constructors below.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Rectangle {
    start_x: i32,
    start_y: i32,
    end_x: i32,
    end_y: i32,
    width: i32,
    height: i32,
}

impl Rectangle {
    /// Rectangle spanning two arbitrary points (in any order).
    pub fn spanning(a: Point, b: Point) -> Self {
        Self::from_edges(a.x, a.y, b.x, b.y)
    }

    /// Zero-size rectangle sitting on `point`.
    #[inline]
    pub fn at_point(point: Point) -> Self {
        Self::spanning(point, point)
    }

    /// Build from edge coordinates; edges may be swapped.
    pub fn from_edges(x1: i32, y1: i32, x2: i32, y2: i32) -> Self {
        let start_x = x1.min(x2);
        let start_y = y1.min(y2);
        let width = (x2 - x1).abs();
        let height = (y2 - y1).abs();
        Self {
            start_x,
            start_y,
            end_x: start_x + width,
            end_y: start_y + height,
            width,
            height,
        }
    }

    #[inline]
    pub fn start_x(&self) -> i32 {
        self.start_x
    }

    #[inline]
    pub fn start_y(&self) -> i32 {
        self.start_y
    }

    #[inline]
    pub fn end_x(&self) -> i32 {
        self.end_x
    }

    #[inline]
    pub fn end_y(&self) -> i32 {
        self.end_y
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    #[inline]
    pub fn top_left(&self) -> Point {
        Point::new(self.start_x, self.start_y)
    }

    #[inline]
    pub fn top_right(&self) -> Point {
        Point::new(self.end_x, self.start_y)
    }

    #[inline]
    pub fn bottom_left(&self) -> Point {
        Point::new(self.start_x, self.end_y)
    }

    #[inline]
    pub fn bottom_right(&self) -> Point {
        Point::new(self.end_x, self.end_y)
    }

    /// True if both sides are strictly larger than `min_size`.
    #[inline]
    pub fn exceeds(&self, min_size: i32) -> bool {
        self.width > min_size && self.height > min_size
    }

    /// True if both sides are at least `min_size`.
    #[inline]
    pub fn is_at_least(&self, min_size: i32) -> bool {
        self.width >= min_size && self.height >= min_size
    }

    #[inline]
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.start_x
            && point.x <= self.end_x
            && point.y >= self.start_y
            && point.y <= self.end_y
    }
}
