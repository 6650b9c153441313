//! PNG export for rendered pixel buffers.

use std::path::Path;

use crate::{PixelBuffer, RenderError};

/// Encode `image` as an 8-bit RGB PNG at `path`.
pub fn save_png(image: &PixelBuffer, path: impl AsRef<Path>) -> Result<(), RenderError> {
    let path = path.as_ref();
    image::save_buffer_with_format(
        path,
        image.as_bytes(),
        image.width(),
        image.height(),
        image::ColorType::Rgb8,
        image::ImageFormat::Png,
    )?;
    log::info!("Saved {}x{} image to {}", image.width(), image.height(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_png_roundtrip_dimensions() {
        let image = PixelBuffer::new(4, 3);
        let path = std::env::temp_dir().join(format!("orb_save_png_{}.png", std::process::id()));

        save_png(&image, &path).expect("png written");
        let decoded = image::open(&path).expect("png readable").to_rgb8();
        std::fs::remove_file(&path).ok();

        assert_eq!(decoded.dimensions(), (4, 3));
        assert_eq!(decoded.as_raw().as_slice(), image.as_bytes());
    }

    #[test]
    fn test_save_png_bad_path() {
        let image = PixelBuffer::new(1, 1);
        let result = save_png(&image, "/nonexistent-dir/definitely/missing.png");
        assert!(matches!(result, Err(RenderError::Image(_))));
    }
}
