// Z85 alphabet and reverse index (ZeroMQ RFC 32).
//
// The reverse index is evaluated at compile time, so the table exists
// before any encoder or decoder is used and is never written afterwards.

/// The 85 symbols of the Z85 alphabet, ordered by value.
pub const ALPHABET: &str =
    "0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ.-:+=^!/*?&<>()[]{}@%$#";

/// Marks the padding positions of a partial trailing block (Default variant).
pub const MARK: char = '~';

/// Character of value 0, appended by the Padded decoder.
pub const PAD: char = '0';

/// Number of symbols in the alphabet.
pub const RADIX: u32 = 85;

/// Raw bytes per block.
pub const BYTES_PER_BLOCK: usize = 4;

/// Encoded characters per block.
pub const CHARS_PER_BLOCK: usize = 5;

/// Sentinel for code points outside the alphabet.
pub const INVALID: u8 = 0xFF;

pub(crate) const SYMBOLS: &[u8; 85] = match ALPHABET.as_bytes().first_chunk::<85>() {
    Some(symbols) => symbols,
    None => panic!("Z85 alphabet must hold 85 symbols"),
};

pub(crate) const MARK_BYTE: u8 = MARK as u8;
pub(crate) const PAD_BYTE: u8 = PAD as u8;

/// Highest digit value; fills the digits hidden behind marks.
pub(crate) const MAX_DIGIT: u8 = (RADIX - 1) as u8;

const fn build_index() -> [u8; 128] {
    let mut index = [INVALID; 128];
    let mut i = 0;
    while i < SYMBOLS.len() {
        index[SYMBOLS[i] as usize] = i as u8;
        i += 1;
    }
    index
}

/// Code point (0..128) to digit value, or [`INVALID`].
pub(crate) const INDEX: [u8; 128] = build_index();

/// Character for a digit value in `[0, 85)`.
#[inline]
pub(crate) fn symbol(value: u32) -> u8 {
    SYMBOLS[value as usize]
}

/// Digit value of an ASCII byte, range-checked before the lookup.
#[inline]
pub fn value_of(byte: u8) -> Option<u8> {
    if byte >= 128 {
        return None;
    }
    match INDEX[byte as usize] {
        INVALID => None,
        v => Some(v),
    }
}

/// Whether `c` is one of the 85 alphabet symbols.
#[inline]
pub fn is_symbol(c: char) -> bool {
    c.is_ascii() && value_of(c as u8).is_some()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
