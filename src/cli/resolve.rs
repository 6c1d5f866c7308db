/// Operation resolution: convert the raw flag set into a single `Operation`.
///
/// Precedence (in priority order):
///
/// 1. **`--decode`**: wins over everything; `--binary` selects the binary
///    variant, `--ascii` is ignored.
/// 2. **`--ascii`**: terminal rendering; `--output` is not consulted.
/// 3. Otherwise: JPEG image output.
///
/// All validation happens here, before any file is opened. The rest of the
/// program only ever sees a fully resolved `Operation`.
use std::path::PathBuf;

use super::args::Cli;
use crate::qr::CodecError;

/// The single operation a `qrcodec` invocation performs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    /// Encode the payload into a square JPEG written to `output`.
    EncodeToImage {
        input: Option<PathBuf>,
        output: PathBuf,
        binary: bool,
    },
    /// Encode the payload and print it as Unicode blocks on stdout.
    EncodeToTerminal {
        input: Option<PathBuf>,
        binary: bool,
    },
    /// Decode an image and emit the embedded text.
    DecodeToText {
        input: PathBuf,
        output: Option<PathBuf>,
    },
    /// Decode an image and base64-decode the embedded text back to raw bytes.
    DecodeToBinary {
        input: PathBuf,
        output: Option<PathBuf>,
    },
}

/// Resolve parsed flags into exactly one `Operation`.
///
/// # Errors
///
/// - `CodecError::DecodeSourceMissing` — `--decode` without `--input`
/// - `CodecError::OutputMissing` — image encoding without `--output`
pub fn resolve(cli: &Cli) -> Result<Operation, CodecError> {
    if cli.decode {
        let input = cli
            .input
            .clone()
            .ok_or(CodecError::DecodeSourceMissing)?;
        let output = cli.output.clone();
        return Ok(if cli.binary {
            Operation::DecodeToBinary { input, output }
        } else {
            Operation::DecodeToText { input, output }
        });
    }

    if cli.ascii {
        return Ok(Operation::EncodeToTerminal {
            input: cli.input.clone(),
            binary: cli.binary,
        });
    }

    let output = cli.output.clone().ok_or(CodecError::OutputMissing)?;
    Ok(Operation::EncodeToImage {
        input: cli.input.clone(),
        output,
        binary: cli.binary,
    })
}
