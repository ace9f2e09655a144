// IconGen - core/model.rs
//
// Core data model types. Pure data definitions with no I/O.
//
// These types are the shared vocabulary between the drawing code and the
// driver: what to generate (IconSpec) and where each shape goes
// (IconGeometry / BoundingBox).

use crate::util::constants;

/// 8-bit RGB colour as used by the canvas.
pub type Color = image::Rgb<u8>;

/// Canvas background, also used to punch shapes back out of the ring.
pub fn background() -> Color {
    image::Rgb(constants::BACKGROUND_COLOR)
}

/// Ring colour.
pub fn foreground() -> Color {
    image::Rgb(constants::FOREGROUND_COLOR)
}

// =============================================================================
// Icon specification
// =============================================================================

/// One entry of the icon set: the file name to write and the side length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconSpec {
    /// File name relative to the output directory, e.g. `icon16.png`.
    pub filename: String,

    /// Side length in pixels. The icon is always square.
    pub size: u32,
}

impl IconSpec {
    pub fn new(filename: impl Into<String>, size: u32) -> Self {
        Self {
            filename: filename.into(),
            size,
        }
    }

    /// The fixed icon set from [`constants::ICON_SET`], in generation order.
    pub fn default_set() -> Vec<Self> {
        constants::ICON_SET
            .iter()
            .map(|&(name, size)| Self::new(name, size))
            .collect()
    }
}

// =============================================================================
// Geometry
// =============================================================================

/// Axis-aligned box with inclusive corners.
///
/// A box spanning `x0..=x1` covers `x1 - x0 + 1` pixel columns. Corners may
/// lie outside the canvas; drawing clips them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    pub x0: u32,
    pub y0: u32,
    pub x1: u32,
    pub y1: u32,
}

impl BoundingBox {
    pub fn new(x0: u32, y0: u32, x1: u32, y1: u32) -> Self {
        Self { x0, y0, x1, y1 }
    }

    /// Square box inset by `inset` on every side of a `size` canvas.
    pub fn inset(size: u32, inset: u32) -> Self {
        let far = size.saturating_sub(inset);
        Self::new(inset, inset, far, far)
    }

    /// True when the corners are inverted and the box covers nothing.
    pub fn is_empty(&self) -> bool {
        self.x1 < self.x0 || self.y1 < self.y0
    }
}

/// Derived measurements for a single icon size.
///
/// All values come from integer division on `size`, so small icons may end
/// up with zero margins. That produces degenerate but valid shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconGeometry {
    pub size: u32,
    /// Inset of the outer disc.
    pub margin: u32,
    /// Inset of the inner (hole) disc.
    pub inner_margin: u32,
}

impl IconGeometry {
    pub fn for_size(size: u32) -> Self {
        let margin = size / constants::MARGIN_DIVISOR;
        let inner_margin = margin + size / constants::RING_THICKNESS_DIVISOR;
        Self {
            size,
            margin,
            inner_margin,
        }
    }

    /// The white disc that becomes the ring.
    pub fn outer_disc(&self) -> BoundingBox {
        BoundingBox::inset(self.size, self.margin)
    }

    /// The background-coloured disc that hollows out the ring.
    pub fn inner_disc(&self) -> BoundingBox {
        BoundingBox::inset(self.size, self.inner_margin)
    }

    /// The rectangle that removes the right half of the ring, leaving a "C".
    pub fn cutout(&self) -> BoundingBox {
        let far = self.size.saturating_sub(self.margin);
        BoundingBox::new(self.size / 2, self.margin, far, far)
    }
}
