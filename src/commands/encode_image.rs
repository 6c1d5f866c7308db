/// `EncodeToImage`: payload → level-M QR symbol → square JPEG on disk.
use std::path::Path;

use qrcode::EcLevel;

use crate::qr::CodecError;
use crate::qr::encode::{build_symbol, render_raster, write_jpeg};
use crate::qr::payload::read_payload;

/// Run the image-encoding operation.
///
/// # Errors
///
/// Returns `CodecError` on unreadable input, empty or oversized payload,
/// or a failed image write.
pub fn run(input: Option<&Path>, output: &Path, binary: bool) -> Result<(), CodecError> {
    let payload = read_payload(input, binary)?;
    let code = build_symbol(&payload, EcLevel::M)?;
    write_jpeg(&render_raster(&code), output)?;
    println!("QR code saved as JPEG: {}", output.display());
    Ok(())
}
