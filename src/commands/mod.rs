/// Command dispatch: routes a resolved `Operation` to its implementation.
pub mod decode_binary;
pub mod decode_text;
pub mod encode_image;
pub mod encode_terminal;

use crate::cli::Operation;
use crate::qr::CodecError;

/// Dispatch a resolved `Operation` to its handler.
///
/// # Errors
///
/// Returns `CodecError` on any operation failure.
pub fn dispatch(operation: &Operation) -> Result<(), CodecError> {
    match operation {
        Operation::EncodeToImage {
            input,
            output,
            binary,
        } => encode_image::run(input.as_deref(), output, *binary),
        Operation::EncodeToTerminal { input, binary } => {
            encode_terminal::run(input.as_deref(), *binary)
        }
        Operation::DecodeToText { input, output } => decode_text::run(input, output.as_deref()),
        Operation::DecodeToBinary { input, output } => decode_binary::run(input, output.as_deref()),
    }
}
