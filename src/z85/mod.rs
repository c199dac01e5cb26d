// Z85 codec (ZeroMQ RFC 32) with three remainder policies.
//
// # Modules
//
// - `alphabet` — the 85-symbol alphabet, mark/pad characters, reverse index
// - `variant`  — Default / Strict / Padded policy selector
// - `encoder`  — bytes to text
// - `decoder`  — text to bytes
// - `error`    — `Z85Error`

pub mod alphabet;
pub mod decoder;
pub mod encoder;
pub mod error;
pub mod variant;

pub use alphabet::{ALPHABET, BYTES_PER_BLOCK, CHARS_PER_BLOCK, MARK, PAD};
pub use decoder::{Decoder, decode};
pub use encoder::{Encoder, encode};
pub use error::Z85Error;
pub use variant::{ParseVariantError, Variant};

/// Encoder for `variant`.
pub fn get_encoder(variant: Variant) -> Encoder {
    Encoder::new(variant)
}

/// Decoder for `variant`.
pub fn get_decoder(variant: Variant) -> Decoder {
    Decoder::new(variant)
}
