/// Encoder adapter: wraps the `qrcode` crate behind the two renderings
/// this tool produces (a square grayscale raster and a Unicode terminal
/// grid).
use std::path::Path;

use image::{GrayImage, ImageFormat, Luma};
use qrcode::render::unicode;
use qrcode::{EcLevel, QrCode};

use super::errors::CodecError;

/// Minimum edge length of the rasterized symbol, in pixels.
pub const IMAGE_EDGE: u32 = 256;

/// Build a QR symbol from the payload at the given error-correction level.
///
/// Image output uses `EcLevel::M`; terminal output trades redundancy for a
/// smaller footprint with `EcLevel::L`. Version is auto-selected.
///
/// # Errors
///
/// - `CodecError::EmptyPayload` — nothing to encode (the underlying library
///   would happily emit a degenerate symbol, so this is rejected up front)
/// - `CodecError::Symbol` — the payload exceeds single-symbol capacity at
///   the chosen level
pub fn build_symbol(payload: &[u8], level: EcLevel) -> Result<QrCode, CodecError> {
    if payload.is_empty() {
        return Err(CodecError::EmptyPayload);
    }
    Ok(QrCode::with_error_correction_level(payload, level)?)
}

/// Rasterize a symbol to a square grayscale image at least `IMAGE_EDGE`
/// pixels on a side.
///
/// The renderer only emits whole pixels per module, so high-version symbols
/// get a larger image rather than fractional modules. Scaling the render
/// down to a fixed edge would smear modules together and make dense symbols
/// unreadable.
#[must_use]
pub fn render_raster(code: &QrCode) -> GrayImage {
    code.render::<Luma<u8>>()
        .min_dimensions(IMAGE_EDGE, IMAGE_EDGE)
        .build()
}

/// Render a symbol as Unicode half-block characters for the terminal,
/// with the quiet zone disabled.
#[must_use]
pub fn render_terminal(code: &QrCode) -> String {
    code.render::<unicode::Dense1x2>()
        .dark_color(unicode::Dense1x2::Dark)
        .light_color(unicode::Dense1x2::Light)
        .quiet_zone(false)
        .build()
}

/// Write a rasterized symbol to `path` as JPEG.
///
/// # Errors
///
/// `CodecError::Image` when the file cannot be created or encoded.
pub fn write_jpeg(img: &GrayImage, path: &Path) -> Result<(), CodecError> {
    img.save_with_format(path, ImageFormat::Jpeg)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_payload_rejected() {
        let result = build_symbol(b"", EcLevel::M);
        assert!(matches!(result, Err(CodecError::EmptyPayload)));
    }

    #[test]
    fn test_oversized_payload_rejected() {
        // Version 40 at level M caps out well below 4000 bytes.
        let payload = vec![b'a'; 4000];
        let result = build_symbol(&payload, EcLevel::M);
        assert!(matches!(result, Err(CodecError::Symbol(_))));
    }

    #[test]
    fn test_raster_is_square_at_minimum_edge() {
        let code = build_symbol(b"Hello123", EcLevel::M).unwrap();
        let (width, height) = render_raster(&code).dimensions();
        assert_eq!(width, height);
        assert!(width >= IMAGE_EDGE);
    }

    #[test]
    fn test_dense_symbol_raster_grows_past_minimum_edge() {
        // A ~1 KB payload needs far more modules than IMAGE_EDGE can hold
        // at one pixel each; the raster must grow, never shrink modules.
        let payload = vec![b'x'; 1024];
        let code = build_symbol(&payload, EcLevel::M).unwrap();
        let (width, height) = render_raster(&code).dimensions();
        assert_eq!(width, height);
        assert!(width >= IMAGE_EDGE);
        // Whole pixels per module, quiet zone of 4 modules on each side.
        let modules = u32::try_from(code.width()).unwrap() + 8;
        assert_eq!(width % modules, 0);
    }

    #[test]
    fn test_terminal_rendering_is_two_tone() {
        let code = build_symbol(b"Hello123", EcLevel::L).unwrap();
        let art = render_terminal(&code);
        assert!(!art.is_empty());
        assert!(
            art.chars()
                .all(|c| matches!(c, '█' | '▀' | '▄' | ' ' | '\n'))
        );
    }
}
