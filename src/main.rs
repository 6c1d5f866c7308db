#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! qrcodec — convert text or binary payloads to and from QR-code images.

mod cli;
mod commands;
mod qr;

use clap::Parser;

use cli::Cli;

fn main() {
    let cli = Cli::parse();

    let operation = match cli::resolve(&cli) {
        Ok(operation) => operation,
        Err(err) => {
            eprintln!("qrcodec: {err}");
            std::process::exit(1);
        }
    };

    if let Err(err) = commands::dispatch(&operation) {
        eprintln!("qrcodec: {err}");
        std::process::exit(1);
    }
}
