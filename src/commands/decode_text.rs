/// `DecodeToText`: image file → embedded text on stdout or in a file.
use std::fs;
use std::path::Path;

use crate::qr::CodecError;
use crate::qr::decode::scan_file;

/// Run the text-decoding operation.
///
/// # Errors
///
/// Returns `CodecError` on an unreadable image, a missing or unrecoverable
/// symbol, or a failed output write.
pub fn run(input: &Path, output: Option<&Path>) -> Result<(), CodecError> {
    let content = scan_file(input)?;
    match output {
        Some(path) => {
            fs::write(path, &content).map_err(|source| CodecError::io(path, source))?;
            println!("Decoded text written to: {}", path.display());
        }
        None => println!("{content}"),
    }
    Ok(())
}
