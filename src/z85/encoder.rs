// Z85 encoder: 4 raw bytes -> 5 alphabet characters.
//
// Each block is read as a big-endian u32 and written as five base-85
// digits, most significant first. A partial trailing block is handled
// according to the encoder's `Variant`.

use super::alphabet::{BYTES_PER_BLOCK, CHARS_PER_BLOCK, MARK, RADIX, symbol};
use super::error::Z85Error;
use super::variant::Variant;

/// Encode one block into its five characters.
#[inline]
pub(crate) fn encode_block(bytes: [u8; BYTES_PER_BLOCK]) -> [u8; CHARS_PER_BLOCK] {
    let mut value = u32::from_be_bytes(bytes);
    let mut chars = [0u8; CHARS_PER_BLOCK];
    for c in chars.iter_mut().rev() {
        *c = symbol(value % RADIX);
        value /= RADIX;
    }
    chars
}

/// Encodes byte slices into Z85 text under a fixed [`Variant`].
///
/// Encoders hold no state; the three variants are available as the
/// associated constants [`Encoder::DEFAULT`], [`Encoder::STRICT`] and
/// [`Encoder::PADDED`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Encoder {
    variant: Variant,
}

impl Encoder {
    pub const DEFAULT: Encoder = Encoder::new(Variant::Default);
    pub const STRICT: Encoder = Encoder::new(Variant::Strict);
    pub const PADDED: Encoder = Encoder::new(Variant::Padded);

    pub const fn new(variant: Variant) -> Self {
        Self { variant }
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    /// Number of characters `encode` produces for `len` input bytes.
    ///
    /// Fails only for [`Variant::Strict`] when `len` is not a multiple of 4.
    pub fn encoded_len(&self, len: usize) -> Result<usize, Z85Error> {
        if self.variant == Variant::Strict && !len.is_multiple_of(BYTES_PER_BLOCK) {
            return Err(Z85Error::InvalidLength {
                variant: self.variant,
                len,
                block: BYTES_PER_BLOCK,
            });
        }
        Ok(len.div_ceil(BYTES_PER_BLOCK) * CHARS_PER_BLOCK)
    }

    /// Encode `input` into a freshly allocated string.
    ///
    /// - Default: a trailing block of `r` bytes keeps its leading `r + 1`
    ///   digits; the remaining `4 - r` positions are written as `~`.
    /// - Strict: `InvalidLength` unless `input.len()` is a multiple of 4.
    /// - Padded: the trailing block is zero-extended; the original length
    ///   is not recoverable from the output.
    pub fn encode(&self, input: &[u8]) -> Result<String, Z85Error> {
        let len = self.encoded_len(input.len())?;
        let mut out = String::with_capacity(len);
        write_blocks(input, self.variant, &mut out);
        debug_assert_eq!(out.len(), len);
        Ok(out)
    }
}

impl Default for Encoder {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Encode with the Default variant, which accepts any length.
pub fn encode(input: &[u8]) -> String {
    let mut out = String::with_capacity(input.len().div_ceil(BYTES_PER_BLOCK) * CHARS_PER_BLOCK);
    write_blocks(input, Variant::Default, &mut out);
    out
}

// Strict inputs are length-checked by the caller; a tail never reaches here.
fn write_blocks(input: &[u8], variant: Variant, out: &mut String) {
    let mut chunks = input.chunks_exact(BYTES_PER_BLOCK);
    for chunk in &mut chunks {
        let mut block = [0u8; BYTES_PER_BLOCK];
        block.copy_from_slice(chunk);
        push_chars(out, &encode_block(block));
    }

    let tail = chunks.remainder();
    if tail.is_empty() {
        return;
    }

    let mut block = [0u8; BYTES_PER_BLOCK];
    block[..tail.len()].copy_from_slice(tail);
    let chars = encode_block(block);
    match variant {
        Variant::Padded | Variant::Strict => push_chars(out, &chars),
        Variant::Default => {
            let kept = tail.len() + 1;
            push_chars(out, &chars[..kept]);
            out.extend(std::iter::repeat_n(MARK, CHARS_PER_BLOCK - kept));
        }
    }
}

#[inline]
fn push_chars(out: &mut String, chars: &[u8]) {
    out.extend(chars.iter().map(|&c| char::from(c)));
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
