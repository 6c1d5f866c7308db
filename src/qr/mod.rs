/// Domain layer: payload handling and the QR encode/decode adapters.
pub mod decode;
pub mod encode;
pub mod errors;
pub mod payload;

pub use errors::CodecError;
