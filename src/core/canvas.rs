// IconGen - core/canvas.rs
//
// Square RGB raster with the two fill primitives the icon needs.
// Pure in-memory drawing; encoding lives in core/icon.rs.

use crate::core::model::{BoundingBox, Color};
use image::RgbImage;

/// In-memory pixel buffer for one icon.
///
/// Owned by a single render call and discarded after encoding.
#[derive(Debug, Clone)]
pub struct Canvas {
    image: RgbImage,
}

impl Canvas {
    /// Allocate a `size` x `size` canvas filled with `background`.
    pub fn new(size: u32, background: Color) -> Self {
        Self {
            image: RgbImage::from_pixel(size, size, background),
        }
    }

    /// Side length in pixels.
    pub fn size(&self) -> u32 {
        self.image.width()
    }

    /// Colour at `(x, y)`. Panics if the coordinate is outside the canvas.
    pub fn pixel(&self, x: u32, y: u32) -> Color {
        *self.image.get_pixel(x, y)
    }

    /// Borrow the underlying image.
    pub fn as_image(&self) -> &RgbImage {
        &self.image
    }

    /// Fill the ellipse inscribed in `bbox`.
    ///
    /// A pixel is filled when its centre lies on or inside the ellipse. The
    /// box is inclusive, so its edges sit on the outer edges of the `x0` and
    /// `x1` pixel columns.
    pub fn fill_ellipse(&mut self, bbox: BoundingBox, color: Color) {
        let Some((xs, ys)) = self.clip(bbox) else {
            return;
        };

        let cx = (f64::from(bbox.x0) + f64::from(bbox.x1) + 1.0) / 2.0;
        let cy = (f64::from(bbox.y0) + f64::from(bbox.y1) + 1.0) / 2.0;
        let rx = (f64::from(bbox.x1) - f64::from(bbox.x0) + 1.0) / 2.0;
        let ry = (f64::from(bbox.y1) - f64::from(bbox.y0) + 1.0) / 2.0;

        for y in ys {
            let dy = (f64::from(y) + 0.5 - cy) / ry;
            for x in xs.clone() {
                let dx = (f64::from(x) + 0.5 - cx) / rx;
                if dx * dx + dy * dy <= 1.0 {
                    self.image.put_pixel(x, y, color);
                }
            }
        }
    }

    /// Fill the rectangle `bbox`, edges included.
    pub fn fill_rect(&mut self, bbox: BoundingBox, color: Color) {
        let Some((xs, ys)) = self.clip(bbox) else {
            return;
        };
        for y in ys {
            for x in xs.clone() {
                self.image.put_pixel(x, y, color);
            }
        }
    }

    /// Intersect `bbox` with the canvas, as pixel ranges.
    fn clip(
        &self,
        bbox: BoundingBox,
    ) -> Option<(std::ops::RangeInclusive<u32>, std::ops::RangeInclusive<u32>)> {
        let size = self.size();
        if bbox.is_empty() || size == 0 || bbox.x0 >= size || bbox.y0 >= size {
            return None;
        }
        let x1 = bbox.x1.min(size - 1);
        let y1 = bbox.y1.min(size - 1);
        Some((bbox.x0..=x1, bbox.y0..=y1))
    }
}
