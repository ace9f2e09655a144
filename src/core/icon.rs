// IconGen - core/icon.rs
//
// Draws the "C" letterform and encodes the result as PNG.
//
// The letter is built from three fills rather than an arc: a white disc, a
// background disc punched out of its middle, and a background rectangle over
// the right half. Keep it that way so output stays pixel-stable.

use crate::core::canvas::Canvas;
use crate::core::model::{self, IconGeometry};
use crate::util::constants;
use crate::util::error::RenderError;
use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder};

/// Render the icon for a `size` x `size` canvas.
pub fn render(size: u32) -> Result<Canvas, RenderError> {
    if size == 0 {
        return Err(RenderError::ZeroSize);
    }
    if size > constants::MAX_ICON_SIZE {
        return Err(RenderError::TooLarge {
            size,
            max: constants::MAX_ICON_SIZE,
        });
    }

    let geometry = IconGeometry::for_size(size);
    tracing::debug!(
        size,
        margin = geometry.margin,
        inner_margin = geometry.inner_margin,
        "Rendering icon"
    );

    let background = model::background();
    let mut canvas = Canvas::new(size, background);
    canvas.fill_ellipse(geometry.outer_disc(), model::foreground());
    canvas.fill_ellipse(geometry.inner_disc(), background);
    canvas.fill_rect(geometry.cutout(), background);

    Ok(canvas)
}

/// Encode a canvas as PNG bytes.
///
/// The encoder writes no timestamps or text chunks, so identical canvases
/// always produce identical bytes.
pub fn encode_png(canvas: &Canvas) -> Result<Vec<u8>, RenderError> {
    let image = canvas.as_image();
    let mut bytes = Vec::new();
    PngEncoder::new(&mut bytes)
        .write_image(
            image.as_raw(),
            image.width(),
            image.height(),
            ExtendedColorType::Rgb8,
        )
        .map_err(|e| RenderError::Encode {
            size: canvas.size(),
            source: e,
        })?;
    Ok(bytes)
}

/// Render and encode in one step.
pub fn render_png(size: u32) -> Result<Vec<u8>, RenderError> {
    let canvas = render(size)?;
    encode_png(&canvas)
}
