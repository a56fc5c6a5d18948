//! Integer screen geometry.

/// A point in pixels. Screen coordinates unless stated otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned rectangle: origin plus size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// A `side × side` square whose center is exactly `center`.
    ///
    /// The origin is `center - side / 2` with integer division, the same
    /// rounding `center()` uses, so the round trip is exact for odd sides.
    pub fn centered_square(center: Point, side: u32) -> Self {
        let side = i32::try_from(side).unwrap_or(i32::MAX);
        Self::new(center.x - side / 2, center.y - side / 2, side, side)
    }

    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2, self.y + self.height / 2)
    }

    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }

    /// Half-open containment: the right and bottom edges are outside.
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.x && p.x < self.right() && p.y >= self.y && p.y < self.bottom()
    }
}

/// Center of a screen of the given size whose origin is at (0, 0).
pub fn screen_center(width: i32, height: i32) -> Point {
    Point::new(width / 2, height / 2)
}
