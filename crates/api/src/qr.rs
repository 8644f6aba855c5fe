//! Static QR code rendering.
//!
//! The two QR codes are pure encodes of fixed URLs (the registration and
//! check-in form addresses). They never expire and any number of users can
//! scan the same image.

use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder, Luma};
use qrcode::QrCode;

/// Minimum rendered image edge in pixels. Large enough to scan from a
/// printed sheet or a phone screen.
const MIN_DIMENSIONS: u32 = 360;

#[derive(Debug, thiserror::Error)]
pub enum QrRenderError {
    #[error("QR encoding failed: {0}")]
    Encode(#[from] qrcode::types::QrError),

    #[error("PNG encoding failed: {0}")]
    Png(#[from] image::ImageError),
}

/// Render `data` as a black-on-white PNG QR image.
pub fn qr_png(data: &str) -> Result<Vec<u8>, QrRenderError> {
    let code = QrCode::new(data.as_bytes())?;
    let img = code
        .render::<Luma<u8>>()
        .min_dimensions(MIN_DIMENSIONS, MIN_DIMENSIONS)
        .build();

    let mut png = Vec::new();
    PngEncoder::new(&mut png).write_image(
        img.as_raw(),
        img.width(),
        img.height(),
        ExtendedColorType::L8,
    )?;
    Ok(png)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_a_png() {
        let png = qr_png("http://localhost:3000/register").unwrap();
        // PNG magic bytes.
        assert_eq!(&png[..8], &[0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1a, b'\n']);
    }

    #[test]
    fn different_urls_produce_different_images() {
        let a = qr_png("http://localhost:3000/register").unwrap();
        let b = qr_png("http://localhost:3000/checkin").unwrap();
        assert_ne!(a, b);
    }
}
