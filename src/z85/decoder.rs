// Z85 decoder: 5 alphabet characters -> 4 raw bytes.
//
// Block values are accumulated in a u64 (a block of five '#' is 85^5 - 1,
// above u32::MAX) and only the low 32 bits are emitted.
//
// Default-variant trailing blocks come in two layouts:
//   - "0rJ~~": the encoder's layout, marks replace the padding digits of the
//     last block. Hidden digits are filled with the top digit (84), which
//     rounds the value up into the range the zero padding produced.
//   - "0rr91~": a full last block followed by `r` marks, where `r` is the
//     number of bytes it carries. The marks themselves are never decoded.

use super::alphabet::{
    BYTES_PER_BLOCK, CHARS_PER_BLOCK, MARK_BYTE, MAX_DIGIT, PAD_BYTE, RADIX, value_of,
};
use super::error::Z85Error;
use super::variant::Variant;

/// Most marks a single block can carry (a 1-byte tail keeps 2 digits).
const MAX_MARKS: usize = BYTES_PER_BLOCK - 1;

/// Value of a block whose last `hidden` digits are unknown.
/// Returns `None` on any character outside the alphabet, and on a marked
/// block whose filled value overflows 32 bits (no encoder output does).
#[inline]
fn block_value(chars: &[u8], hidden: usize) -> Option<u32> {
    let mut value: u64 = 0;
    for &c in chars {
        value = value * u64::from(RADIX) + u64::from(value_of(c)?);
    }
    if hidden == 0 {
        return Some(value as u32);
    }
    for _ in 0..hidden {
        value = value * u64::from(RADIX) + u64::from(MAX_DIGIT);
    }
    u32::try_from(value).ok()
}

/// Decode whole blocks, appending 4 bytes per block to `out`.
/// `input` must start at block 0 of the caller's input so errors report
/// the right window.
fn decode_blocks(input: &[u8], out: &mut Vec<u8>) -> Result<(), Z85Error> {
    debug_assert!(input.len().is_multiple_of(CHARS_PER_BLOCK));
    for (block, chars) in input.chunks_exact(CHARS_PER_BLOCK).enumerate() {
        let value =
            block_value(chars, 0).ok_or_else(|| Z85Error::invalid_block(input, block))?;
        out.extend_from_slice(&value.to_be_bytes());
    }
    Ok(())
}

/// Decodes Z85 text under a fixed [`Variant`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decoder {
    variant: Variant,
}

impl Decoder {
    pub const DEFAULT: Decoder = Decoder::new(Variant::Default);
    pub const STRICT: Decoder = Decoder::new(Variant::Strict);
    pub const PADDED: Decoder = Decoder::new(Variant::Padded);

    pub const fn new(variant: Variant) -> Self {
        Self { variant }
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    /// Decode `input` into a freshly allocated byte vector.
    ///
    /// Characters with a code point of 128 or above are rejected first,
    /// reporting the 5-character window (by character position) that
    /// holds the first of them.
    pub fn decode(&self, input: &str) -> Result<Vec<u8>, Z85Error> {
        if let Some((offset, _)) = input.char_indices().find(|(_, c)| !c.is_ascii()) {
            let index = input[..offset].chars().count();
            let position = index - index % CHARS_PER_BLOCK;
            return Err(Z85Error::InvalidCharacter {
                window: input.chars().skip(position).take(CHARS_PER_BLOCK).collect(),
                position,
            });
        }
        self.decode_bytes(input.as_bytes())
    }

    /// Decode Z85 text given as raw bytes.
    pub fn decode_bytes(&self, input: &[u8]) -> Result<Vec<u8>, Z85Error> {
        match self.variant {
            Variant::Default => decode_default(input),
            Variant::Strict => decode_strict(input),
            Variant::Padded => decode_padded(input),
        }
    }
}

impl Default for Decoder {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Decode with the Default variant.
pub fn decode(input: &str) -> Result<Vec<u8>, Z85Error> {
    Decoder::DEFAULT.decode(input)
}

fn decode_strict(input: &[u8]) -> Result<Vec<u8>, Z85Error> {
    if !input.len().is_multiple_of(CHARS_PER_BLOCK) {
        return Err(Z85Error::InvalidLength {
            variant: Variant::Strict,
            len: input.len(),
            block: CHARS_PER_BLOCK,
        });
    }
    let mut out = Vec::with_capacity(input.len() / CHARS_PER_BLOCK * BYTES_PER_BLOCK);
    decode_blocks(input, &mut out)?;
    Ok(out)
}

fn decode_padded(input: &[u8]) -> Result<Vec<u8>, Z85Error> {
    let whole = input.len() - input.len() % CHARS_PER_BLOCK;
    let mut out = Vec::with_capacity(input.len().div_ceil(CHARS_PER_BLOCK) * BYTES_PER_BLOCK);
    decode_blocks(&input[..whole], &mut out)?;

    let tail = &input[whole..];
    if !tail.is_empty() {
        let mut chars = [PAD_BYTE; CHARS_PER_BLOCK];
        chars[..tail.len()].copy_from_slice(tail);
        let value = block_value(&chars, 0)
            .ok_or_else(|| Z85Error::invalid_block(input, whole / CHARS_PER_BLOCK))?;
        out.extend_from_slice(&value.to_be_bytes());
    }
    Ok(out)
}

fn decode_default(input: &[u8]) -> Result<Vec<u8>, Z85Error> {
    let tail = input.len() % CHARS_PER_BLOCK;
    if tail != 0 {
        return decode_appended_marks(input, tail);
    }
    let Some(last_start) = input.len().checked_sub(CHARS_PER_BLOCK) else {
        return Ok(Vec::new());
    };

    let last = &input[last_start..];
    let marks = last.iter().rev().take_while(|&&c| c == MARK_BYTE).count();
    if marks > MAX_MARKS {
        return Err(Z85Error::invalid_block(input, last_start / CHARS_PER_BLOCK));
    }

    let mut out = Vec::with_capacity(input.len() / CHARS_PER_BLOCK * BYTES_PER_BLOCK - marks);
    decode_blocks(&input[..last_start], &mut out)?;
    let value = block_value(&last[..CHARS_PER_BLOCK - marks], marks)
        .ok_or_else(|| Z85Error::invalid_block(input, last_start / CHARS_PER_BLOCK))?;
    out.extend_from_slice(&value.to_be_bytes()[..BYTES_PER_BLOCK - marks]);
    Ok(out)
}

// `tail` trailing characters past the last whole block: only marks are
// accepted there, and they stand for the number of bytes the last block holds.
fn decode_appended_marks(input: &[u8], tail: usize) -> Result<Vec<u8>, Z85Error> {
    let whole = input.len() - tail;
    if input[whole..].iter().any(|&c| c != MARK_BYTE) {
        return Err(Z85Error::invalid_block(input, whole / CHARS_PER_BLOCK));
    }
    let Some(last_start) = whole.checked_sub(CHARS_PER_BLOCK) else {
        return Err(Z85Error::InvalidLength {
            variant: Variant::Default,
            len: input.len(),
            block: CHARS_PER_BLOCK,
        });
    };

    let len = whole / CHARS_PER_BLOCK * BYTES_PER_BLOCK - (BYTES_PER_BLOCK - tail);
    let mut out = Vec::with_capacity(len);
    decode_blocks(&input[..last_start], &mut out)?;
    let value = block_value(&input[last_start..whole], 0)
        .ok_or_else(|| Z85Error::invalid_block(input, last_start / CHARS_PER_BLOCK))?;
    out.extend_from_slice(&value.to_be_bytes()[..tail]);
    debug_assert_eq!(out.len(), len);
    Ok(out)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
