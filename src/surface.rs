use egui::{Color32, ColorImage};

use crate::geometry::{PixelRect, Point};

/// An off-screen RGBA raster, row-major with the top row first.
///
/// Every drawing primitive clips against the surface bounds, so marks that
/// hang over an edge are simply cut off.
#[derive(Clone, PartialEq)]
pub struct Surface {
    width: usize,
    height: usize,
    pixels: Vec<Color32>,
}

// Pixel dumps are useless in test failure output
impl std::fmt::Debug for Surface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Surface")
            .field("width", &self.width)
            .field("height", &self.height)
            .finish_non_exhaustive()
    }
}

impl Surface {
    /// A fully transparent surface
    pub fn new(width: usize, height: usize) -> Self {
        Self::filled(width, height, Color32::TRANSPARENT)
    }

    pub fn filled(width: usize, height: usize, color: Color32) -> Self {
        Self {
            width,
            height,
            pixels: vec![color; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn size(&self) -> [usize; 2] {
        [self.width, self.height]
    }

    pub fn bounds(&self) -> PixelRect {
        PixelRect::new(0, 0, self.width as i32, self.height as i32)
    }

    pub fn pixels(&self) -> &[Color32] {
        &self.pixels
    }

    fn index(&self, p: Point) -> Option<usize> {
        if p.x < 0 || p.y < 0 {
            return None;
        }
        let (x, y) = (p.x as usize, p.y as usize);
        (x < self.width && y < self.height).then_some(y * self.width + x)
    }

    pub fn get(&self, p: Point) -> Option<Color32> {
        self.index(p).map(|i| self.pixels[i])
    }

    pub fn set(&mut self, p: Point, color: Color32) {
        if let Some(i) = self.index(p) {
            self.pixels[i] = color;
        }
    }

    pub fn fill(&mut self, color: Color32) {
        self.pixels.fill(color);
    }

    /// True when every pixel has full alpha
    pub fn is_opaque(&self) -> bool {
        self.pixels.iter().all(|c| c.is_opaque())
    }

    /// True when every pixel equals `color`
    pub fn is_uniform(&self, color: Color32) -> bool {
        self.pixels.iter().all(|c| *c == color)
    }

    /// Intersects `rect` with the surface, returning pixel ranges
    fn clip(&self, rect: PixelRect) -> Option<(std::ops::Range<usize>, std::ops::Range<usize>)> {
        let x0 = rect.x.max(0);
        let y0 = rect.y.max(0);
        let x1 = rect.right().min(self.width as i32);
        let y1 = rect.bottom().min(self.height as i32);
        (x0 < x1 && y0 < y1).then(|| (x0 as usize..x1 as usize, y0 as usize..y1 as usize))
    }

    pub fn fill_rect(&mut self, rect: PixelRect, color: Color32) {
        let Some((xs, ys)) = self.clip(rect) else {
            return;
        };
        for y in ys {
            let row = y * self.width;
            self.pixels[row + xs.start..row + xs.end].fill(color);
        }
    }

    /// Fills every pixel whose distance from `center` is at most `radius`
    pub fn fill_circle(&mut self, center: Point, radius: i32, color: Color32) {
        if radius < 0 {
            return;
        }
        let r2 = i64::from(radius) * i64::from(radius);
        let side = radius.saturating_mul(2).saturating_add(1);
        let bounds = PixelRect::new(
            center.x.saturating_sub(radius),
            center.y.saturating_sub(radius),
            side,
            side,
        );
        let Some((xs, ys)) = self.clip(bounds) else {
            return;
        };
        for y in ys {
            let dy = i64::from(y as i32 - center.y);
            for x in xs.clone() {
                let dx = i64::from(x as i32 - center.x);
                if dx * dx + dy * dy <= r2 {
                    self.pixels[y * self.width + x] = color;
                }
            }
        }
    }

    /// Draws the border of `rect`, `thickness` pixels wide, inside the rectangle
    pub fn stroke_rect(&mut self, rect: PixelRect, thickness: i32, color: Color32) {
        if rect.is_empty() || thickness <= 0 {
            return;
        }
        let t = thickness.min(rect.width).min(rect.height);
        self.fill_rect(PixelRect::new(rect.x, rect.y, rect.width, t), color);
        self.fill_rect(PixelRect::new(rect.x, rect.bottom() - t, rect.width, t), color);
        self.fill_rect(PixelRect::new(rect.x, rect.y, t, rect.height), color);
        self.fill_rect(PixelRect::new(rect.right() - t, rect.y, t, rect.height), color);
    }

    /// Replaces this surface's pixels with `other`'s (sizes must match)
    pub fn copy_from(&mut self, other: &Surface) {
        debug_assert_eq!(self.size(), other.size());
        let n = self.pixels.len().min(other.pixels.len());
        self.pixels[..n].copy_from_slice(&other.pixels[..n]);
    }

    /// Source-over composition of `other` onto this surface, anchored at the origin
    pub fn blit_over(&mut self, other: &Surface) {
        let w = self.width.min(other.width);
        let h = self.height.min(other.height);
        for y in 0..h {
            let dst_row = y * self.width;
            let src_row = y * other.width;
            for x in 0..w {
                let src = other.pixels[src_row + x];
                let dst = &mut self.pixels[dst_row + x];
                *dst = blend_over(src, *dst);
            }
        }
    }

    pub fn to_color_image(&self) -> ColorImage {
        let mut image = ColorImage::new(self.size(), Color32::TRANSPARENT);
        image.pixels.copy_from_slice(&self.pixels);
        image
    }
}

/// Premultiplied source-over
fn blend_over(src: Color32, dst: Color32) -> Color32 {
    match src.a() {
        255 => src,
        0 => dst,
        a => {
            let inv = 255 - u16::from(a);
            let mix = |s: u8, d: u8| (u16::from(s) + (u16::from(d) * inv + 127) / 255) as u8;
            Color32::from_rgba_premultiplied(
                mix(src.r(), dst.r()),
                mix(src.g(), dst.g()),
                mix(src.b(), dst.b()),
                mix(a, dst.a()),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_rect_clips_at_edges() {
        let mut surface = Surface::new(10, 10);
        surface.fill_rect(PixelRect::new(-5, 8, 8, 8), Color32::RED);

        assert_eq!(surface.get(Point::new(0, 8)), Some(Color32::RED));
        assert_eq!(surface.get(Point::new(2, 9)), Some(Color32::RED));
        assert_eq!(surface.get(Point::new(3, 9)), Some(Color32::TRANSPARENT));
        assert_eq!(surface.get(Point::new(0, 7)), Some(Color32::TRANSPARENT));
        assert_eq!(surface.get(Point::new(-1, 9)), None);
    }

    #[test]
    fn test_fill_circle_radius() {
        let mut surface = Surface::new(21, 21);
        surface.fill_circle(Point::new(10, 10), 5, Color32::BLUE);

        assert_eq!(surface.get(Point::new(10, 10)), Some(Color32::BLUE));
        assert_eq!(surface.get(Point::new(15, 10)), Some(Color32::BLUE));
        assert_eq!(surface.get(Point::new(16, 10)), Some(Color32::TRANSPARENT));
        // (4, 4) from the center is ~5.66 away
        assert_eq!(surface.get(Point::new(14, 14)), Some(Color32::TRANSPARENT));
    }

    #[test]
    fn test_fill_circle_with_extreme_radius_covers_surface() {
        let mut surface = Surface::new(6, 4);
        surface.fill_circle(Point::new(3, 2), i32::MAX, Color32::BLUE);
        assert!(surface.is_uniform(Color32::BLUE));

        surface.fill_rect(PixelRect::new(i32::MAX - 1, 0, i32::MAX, 4), Color32::RED);
        assert!(surface.is_uniform(Color32::BLUE));
    }

    #[test]
    fn test_stroke_rect_leaves_interior() {
        let mut surface = Surface::new(10, 10);
        surface.stroke_rect(PixelRect::new(2, 2, 5, 4), 1, Color32::BLACK);

        assert_eq!(surface.get(Point::new(2, 2)), Some(Color32::BLACK));
        assert_eq!(surface.get(Point::new(6, 5)), Some(Color32::BLACK));
        assert_eq!(surface.get(Point::new(4, 3)), Some(Color32::TRANSPARENT));
        assert_eq!(surface.get(Point::new(7, 2)), Some(Color32::TRANSPARENT));
    }

    #[test]
    fn test_blit_over_keeps_destination_under_transparency() {
        let mut base = Surface::filled(4, 4, Color32::WHITE);
        let mut top = Surface::new(4, 4);
        top.set(Point::new(1, 1), Color32::RED);

        base.blit_over(&top);

        assert_eq!(base.get(Point::new(1, 1)), Some(Color32::RED));
        assert_eq!(base.get(Point::new(0, 0)), Some(Color32::WHITE));
        assert!(base.is_opaque());
    }

    #[test]
    fn test_color_image_matches_pixels() {
        let mut surface = Surface::filled(3, 2, Color32::WHITE);
        surface.set(Point::new(2, 1), Color32::GREEN);

        let image = surface.to_color_image();
        assert_eq!(image.size, [3, 2]);
        assert_eq!(image.pixels[5], Color32::GREEN);
    }
}
