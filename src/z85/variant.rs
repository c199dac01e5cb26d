// Remainder policies shared by the encoder and the decoder.

use std::fmt;
use std::str::FromStr;

/// How a byte count (encode) or character count (decode) that does not fill
/// whole blocks is handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Variant {
    /// Lossless for any length: a partial trailing block keeps its data
    /// digits and replaces the padding digits with [`MARK`](super::MARK).
    #[default]
    Default,
    /// Plain ZeroMQ Z85: input must fill whole blocks.
    Strict,
    /// Zero bytes / `'0'` characters complete the last block. Lossy on encode.
    Padded,
}

impl Variant {
    pub const ALL: [Variant; 3] = [Variant::Default, Variant::Strict, Variant::Padded];

    pub fn name(self) -> &'static str {
        match self {
            Variant::Default => "default",
            Variant::Strict => "strict",
            Variant::Padded => "padded",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown variant name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown Z85 variant '{0}' (expected default, strict or padded)")]
pub struct ParseVariantError(String);

impl FromStr for Variant {
    type Err = ParseVariantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Variant::ALL
            .into_iter()
            .find(|v| v.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseVariantError(s.to_string()))
    }
}
