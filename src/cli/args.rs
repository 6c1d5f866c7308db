/// CLI argument definitions via clap derive.
use std::path::PathBuf;

use clap::Parser;

/// qrcodec — convert text or binary payloads to and from QR-code images.
#[derive(Debug, Parser)]
#[command(
    name = "qrcodec",
    about = "Convert text or binary payloads to and from QR-code images",
    after_help = "With no --input, the payload is read from standard input \
        (encoding only; decoding always needs an image file).",
    version
)]
pub struct Cli {
    /// Input file: payload to encode, or image to decode.
    /// When omitted, the encode payload is read from standard input.
    #[arg(short, long, value_name = "PATH")]
    pub input: Option<PathBuf>,

    /// Output file: JPEG image when encoding, decoded payload when decoding.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Render the QR code to the terminal as Unicode blocks
    /// instead of writing an image.
    #[arg(short, long)]
    pub ascii: bool,

    /// Decode a QR code from an image file instead of encoding.
    #[arg(short, long)]
    pub decode: bool,

    /// Treat the payload as binary, carrying it through the QR
    /// symbol as base64 text.
    #[arg(short, long)]
    pub binary: bool,
}
