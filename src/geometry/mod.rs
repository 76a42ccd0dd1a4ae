pub mod hit_testing;

pub use hit_testing::Hit;

/// A point in drawing-local pixel coordinates (origin at the top-left of the canvas)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The pixel containing a screen-space offset
    pub fn from_offset(offset: egui::Vec2) -> Self {
        Self::new(offset.x.floor() as i32, offset.y.floor() as i32)
    }
}

/// An axis-aligned integer rectangle: `x..x + width`, `y..y + height`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PixelRect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl PixelRect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self { x, y, width, height }
    }

    /// Normalized rectangle spanned by two corner points, in either order
    pub fn spanning(a: Point, b: Point) -> Self {
        Self {
            x: a.x.min(b.x),
            y: a.y.min(b.y),
            width: (a.x - b.x).abs(),
            height: (a.y - b.y).abs(),
        }
    }

    /// Square of side `size` centered on `center`, rounded the way integer
    /// halving rounds (the extra pixel of an odd side goes right/down).
    pub fn centered_square(center: Point, size: i32) -> Self {
        Self::new(
            center.x.saturating_sub(size / 2),
            center.y.saturating_sub(size / 2),
            size,
            size,
        )
    }

    pub fn right(&self) -> i32 {
        self.x.saturating_add(self.width)
    }

    pub fn bottom(&self) -> i32 {
        self.y.saturating_add(self.height)
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.x && p.x < self.right() && p.y >= self.y && p.y < self.bottom()
    }

    /// Clamps a point into the rectangle (inclusive of the last row/column)
    pub fn clamp(&self, p: Point) -> Point {
        Point::new(
            p.x.clamp(self.x, (self.right() - 1).max(self.x)),
            p.y.clamp(self.y, (self.bottom() - 1).max(self.y)),
        )
    }

    pub fn to_egui(&self) -> egui::Rect {
        egui::Rect::from_min_size(
            egui::pos2(self.x as f32, self.y as f32),
            egui::vec2(self.width as f32, self.height as f32),
        )
    }
}
