/// Errors from the QR codec domain layer.
use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Everything that can abort a `qrcodec` invocation.
#[derive(Debug, Error)]
pub enum CodecError {
    /// `--decode` was given without an input image path.
    #[error("an input image path is required for decoding")]
    DecodeSourceMissing,

    /// Image encoding was requested without an output path.
    #[error("an output path is required when writing a JPEG image")]
    OutputMissing,

    /// The payload is empty; a QR symbol would carry nothing.
    #[error("payload is empty; nothing to encode")]
    EmptyPayload,

    /// The QR library rejected the payload (most commonly: too long to fit
    /// a single symbol at the chosen error-correction level).
    #[error("cannot build QR symbol: {0}")]
    Symbol(#[from] qrcode::types::QrError),

    /// No QR symbol was detected anywhere in the image.
    #[error("no QR symbol found in the image")]
    NoSymbol,

    /// A symbol was detected but its content could not be recovered.
    #[error("QR symbol could not be decoded: {0}")]
    Decode(#[from] rqrr::DeQRError),

    /// The image container itself could not be read or written.
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    /// The decoded content is not valid base64, so it was not produced by
    /// the binary encode path (or the symbol was corrupted).
    #[error("decoded content is not valid base64: {0}")]
    Base64(#[from] base64::DecodeError),

    /// A file could not be opened, read, or written.
    #[error("{}: {}", path.display(), source)]
    Io {
        /// The file involved.
        path: PathBuf,
        /// The underlying I/O failure.
        source: io::Error,
    },

    /// Standard input could not be read.
    #[error("stdin: {0}")]
    Stdin(#[source] io::Error),
}

impl CodecError {
    /// Tag an I/O error with the path it concerns.
    #[must_use]
    pub fn io(path: &std::path::Path, source: io::Error) -> Self {
        Self::Io {
            path: path.to_owned(),
            source,
        }
    }
}
