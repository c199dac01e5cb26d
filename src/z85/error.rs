// Codec errors. Every failure is a pure function of the input.

use super::variant::Variant;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Z85Error {
    /// Input length does not fit the variant's block arithmetic.
    #[error("Z85 {variant}: length {len} is not a multiple of {block}")]
    InvalidLength {
        variant: Variant,
        len: usize,
        block: usize,
    },
    /// A character outside the alphabet, or a mark where none is allowed.
    /// `window` is the 5-character block that contains it, starting at
    /// character offset `position`.
    #[error("Z85: invalid character found near '{window}' at position {position}")]
    InvalidCharacter { window: String, position: usize },
}

impl Z85Error {
    pub(crate) fn invalid_block(input: &[u8], block: usize) -> Self {
        let start = block * super::CHARS_PER_BLOCK;
        let end = (start + super::CHARS_PER_BLOCK).min(input.len());
        Self::InvalidCharacter {
            window: String::from_utf8_lossy(&input[start..end]).into_owned(),
            position: start,
        }
    }
}

impl From<Z85Error> for std::io::Error {
    fn from(e: Z85Error) -> std::io::Error {
        std::io::Error::new(std::io::ErrorKind::InvalidData, e)
    }
}
