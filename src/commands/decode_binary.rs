/// `DecodeToBinary`: image file → base64 text → raw bytes.
use std::fs;
use std::path::Path;

use crate::qr::CodecError;
use crate::qr::decode::scan_file;
use crate::qr::payload::decode_base64;

/// Run the binary-decoding operation.
///
/// The symbol's text content is base64-decoded; if an output path is given
/// the raw bytes land there, otherwise the base64 text itself goes to
/// stdout (raw bytes have no business in a terminal).
///
/// # Errors
///
/// Returns `CodecError` on an unreadable image, a missing or unrecoverable
/// symbol, non-base64 content, or a failed output write.
pub fn run(input: &Path, output: Option<&Path>) -> Result<(), CodecError> {
    let content = scan_file(input)?;
    let bytes = decode_base64(&content)?;
    match output {
        Some(path) => {
            fs::write(path, &bytes).map_err(|source| CodecError::io(path, source))?;
            println!("Decoded binary data written to: {}", path.display());
        }
        None => println!("{content}"),
    }
    Ok(())
}
