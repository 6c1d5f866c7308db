/// `EncodeToTerminal`: payload → level-L QR symbol → Unicode blocks on stdout.
use std::path::Path;

use qrcode::EcLevel;

use crate::qr::CodecError;
use crate::qr::encode::{build_symbol, render_terminal};
use crate::qr::payload::read_payload;

/// Run the terminal-encoding operation.
///
/// Level L keeps the printed grid as small as the payload allows; the quiet
/// zone is dropped because terminal background serves as one.
///
/// # Errors
///
/// Returns `CodecError` on unreadable input or an empty/oversized payload.
pub fn run(input: Option<&Path>, binary: bool) -> Result<(), CodecError> {
    let payload = read_payload(input, binary)?;
    let code = build_symbol(&payload, EcLevel::L)?;
    println!("{}", render_terminal(&code));
    Ok(())
}
