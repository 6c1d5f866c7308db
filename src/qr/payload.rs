/// Payload reading and base64 transcoding.
///
/// A payload is an ordered byte sequence. Text-mode payloads flow through
/// untouched (QR byte mode accepts arbitrary octets, so no UTF-8 validation
/// is imposed); binary-mode payloads are base64-encoded here so the QR
/// symbol only ever carries printable text.
use std::fs;
use std::io::{self, Read};
use std::path::Path;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use super::errors::CodecError;

/// Read the payload to encode, from a file or from standard input.
///
/// File input is taken verbatim. Stdin is read to end-of-stream and, in
/// text mode, trimmed of surrounding ASCII whitespace so a trailing newline
/// from an interactive shell never ends up inside the symbol. In binary
/// mode the raw bytes are base64-encoded (standard alphabet, padded).
///
/// # Errors
///
/// `CodecError::Io` / `CodecError::Stdin` when the source cannot be read.
pub fn read_payload(input: Option<&Path>, binary: bool) -> Result<Vec<u8>, CodecError> {
    let bytes = match input {
        Some(path) => fs::read(path).map_err(|source| CodecError::io(path, source))?,
        None => read_stdin(binary)?,
    };

    if binary {
        Ok(STANDARD.encode(&bytes).into_bytes())
    } else {
        Ok(bytes)
    }
}

/// Base64-decode text extracted from a QR symbol back to raw bytes.
///
/// # Errors
///
/// `CodecError::Base64` when the text is not valid padded base64 — the
/// image was not produced by the binary encode path, or was corrupted.
pub fn decode_base64(text: &str) -> Result<Vec<u8>, CodecError> {
    Ok(STANDARD.decode(text)?)
}

/// Read stdin to EOF. Text mode trims surrounding ASCII whitespace;
/// binary mode keeps every byte.
fn read_stdin(binary: bool) -> Result<Vec<u8>, CodecError> {
    let mut buf = Vec::new();
    io::stdin()
        .lock()
        .read_to_end(&mut buf)
        .map_err(CodecError::Stdin)?;
    if binary {
        Ok(buf)
    } else {
        Ok(buf.trim_ascii().to_vec())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_binary_payload_is_base64() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&[0x00, 0xFF, 0x10]).unwrap();

        let payload = read_payload(Some(file.path()), true).unwrap();
        assert_eq!(payload, b"AP8Q");
    }

    #[test]
    fn test_text_payload_is_verbatim() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"Hello123\n").unwrap();

        // File input is not trimmed; only stdin is.
        let payload = read_payload(Some(file.path()), false).unwrap();
        assert_eq!(payload, b"Hello123\n");
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = read_payload(Some(Path::new("/no/such/payload.txt")), false);
        assert!(matches!(result, Err(CodecError::Io { .. })));
    }

    #[test]
    fn test_base64_round_trip() {
        let bytes = [0x00, 0xFF, 0x10];
        let encoded = STANDARD.encode(bytes);
        assert_eq!(decode_base64(&encoded).unwrap(), bytes);
    }

    #[test]
    fn test_invalid_base64_rejected() {
        let result = decode_base64("this is not base64!");
        assert!(matches!(result, Err(CodecError::Base64(_))));
    }
}
