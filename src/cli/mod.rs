/// CLI layer: argument parsing and operation resolution.
pub mod args;
pub mod resolve;

pub use args::Cli;
pub use resolve::{Operation, resolve};
