//! Oxiz85: Z85 (ZeroMQ base-85) encoding/decoding in Rust.
//!
//! The crate provides:
//! - The whole-buffer Z85 codec (`z85`) with Default, Strict and Padded variants
//! - File-oriented helpers (`io`)
//! - An optional CLI (`cli` feature)
//!
//! # Quick Start
//!
//! ```
//! use oxiz85::z85::{self, Variant};
//!
//! let text = z85::get_encoder(Variant::Strict)
//!     .encode(&[0x86, 0x4F, 0xD2, 0x6F, 0xB5, 0x59, 0xF7, 0x5B])
//!     .unwrap();
//! assert_eq!(text, "HelloWorld");
//!
//! // The Default variant accepts any length and round-trips exactly.
//! let text = z85::encode(b"Hello");
//! assert_eq!(text, "nm=QNzV~~~");
//! assert_eq!(z85::decode(&text).unwrap(), b"Hello");
//! ```

pub mod io;
pub mod z85;

#[cfg(feature = "cli")]
pub mod cli;

pub use z85::{
    ALPHABET, Decoder, Encoder, Variant, Z85Error, decode, encode, get_decoder, get_encoder,
};
