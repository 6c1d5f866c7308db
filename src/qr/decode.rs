/// Decoder adapter: image container decode plus QR symbol detection
/// via `rqrr`.
use std::path::Path;

use image::GrayImage;
use rqrr::PreparedImage;

use super::errors::CodecError;

/// Open an image file (JPEG or PNG) and extract the text embedded in its
/// QR symbol.
///
/// # Errors
///
/// - `CodecError::Image` — the container cannot be opened or parsed
/// - `CodecError::NoSymbol` — no QR symbol detected in the image
/// - `CodecError::Decode` — a symbol was found but error correction could
///   not recover its content
pub fn scan_file(path: &Path) -> Result<String, CodecError> {
    let img = image::open(path)?.to_luma8();
    scan_image(img)
}

/// Extract the text embedded in the QR symbol of an in-memory grayscale
/// image. When several symbols are present, the first detected grid wins.
///
/// # Errors
///
/// `CodecError::NoSymbol` / `CodecError::Decode` as for [`scan_file`].
pub fn scan_image(img: GrayImage) -> Result<String, CodecError> {
    let mut prepared = PreparedImage::prepare(img);
    let grids = prepared.detect_grids();
    let Some(grid) = grids.first() else {
        return Err(CodecError::NoSymbol);
    };
    let (_meta, content) = grid.decode()?;
    Ok(content)
}
