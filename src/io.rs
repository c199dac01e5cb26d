// File-level I/O helpers for Z85 encoding/decoding.
//
// The codec works on whole buffers, so every helper reads its input fully
// into memory, runs one codec call and writes the result through a
// `BufWriter`. Optionally computes SHA-256 of the raw (binary) side
// (feature-gated behind `file-io`).

use std::fs::File;
use std::io::{self, BufWriter, Read, Write};
use std::path::Path;

#[cfg(feature = "file-io")]
use sha2::Digest;

use crate::z85::{BYTES_PER_BLOCK, Decoder, Encoder, Variant, Z85Error};

// ---------------------------------------------------------------------------
// Options
// ---------------------------------------------------------------------------

/// Configuration for the file helpers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CodecOptions {
    /// Remainder policy for both directions.
    pub variant: Variant,
    /// Terminate encoded text with `\n`.
    pub newline: bool,
}

// ---------------------------------------------------------------------------
// Stats
// ---------------------------------------------------------------------------

/// Statistics returned by the encode helpers.
#[derive(Debug, Clone)]
pub struct EncodeStats {
    /// Raw input size in bytes.
    pub input_size: u64,
    /// Encoded text size in bytes, excluding any trailing newline.
    pub output_size: u64,
    /// Number of 5-character blocks written.
    pub blocks: u64,
    /// SHA-256 of the raw input (if `file-io` feature is enabled).
    pub input_sha256: Option<[u8; 32]>,
}

/// Statistics returned by the decode helpers.
#[derive(Debug, Clone)]
pub struct DecodeStats {
    /// Encoded text size in bytes, after stripping a trailing line ending.
    pub input_size: u64,
    /// Decoded output size in bytes.
    pub output_size: u64,
    /// Number of 4-byte blocks decoded (a partial last block counts as one).
    pub blocks: u64,
    /// SHA-256 of the decoded output (if `file-io` feature is enabled).
    pub output_sha256: Option<[u8; 32]>,
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Error type for the I/O helpers.
#[derive(Debug, thiserror::Error)]
pub enum IoError {
    /// I/O error (file open, read, write).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    /// Encoding or decoding error.
    #[error("codec error: {0}")]
    Codec(#[from] Z85Error),
}

// ---------------------------------------------------------------------------
// Reader/writer helpers
// ---------------------------------------------------------------------------

/// Read all of `reader`, encode it and write the text to `writer`.
pub fn encode_stream<R: Read, W: Write>(
    mut reader: R,
    mut writer: W,
    opts: CodecOptions,
) -> Result<EncodeStats, IoError> {
    let mut input = Vec::new();
    reader.read_to_end(&mut input)?;
    log::trace!("encoding {} bytes ({} variant)", input.len(), opts.variant);

    let text = Encoder::new(opts.variant).encode(&input)?;
    writer.write_all(text.as_bytes())?;
    if opts.newline {
        writer.write_all(b"\n")?;
    }
    writer.flush()?;

    Ok(EncodeStats {
        input_size: input.len() as u64,
        output_size: text.len() as u64,
        blocks: input.len().div_ceil(BYTES_PER_BLOCK) as u64,
        input_sha256: sha256(&input),
    })
}

/// Read all of `reader`, decode it and write the bytes to `writer`.
///
/// One trailing `\n` or `\r\n` is ignored, so text written with
/// [`CodecOptions::newline`] decodes as-is.
pub fn decode_stream<R: Read, W: Write>(
    mut reader: R,
    mut writer: W,
    opts: CodecOptions,
) -> Result<DecodeStats, IoError> {
    let mut input = Vec::new();
    reader.read_to_end(&mut input)?;
    let text = trim_line_ending(&input);
    log::trace!("decoding {} characters ({} variant)", text.len(), opts.variant);

    let output = Decoder::new(opts.variant).decode_bytes(text)?;
    writer.write_all(&output)?;
    writer.flush()?;

    Ok(DecodeStats {
        input_size: text.len() as u64,
        output_size: output.len() as u64,
        blocks: output.len().div_ceil(BYTES_PER_BLOCK) as u64,
        output_sha256: sha256(&output),
    })
}

fn trim_line_ending(input: &[u8]) -> &[u8] {
    let input = input.strip_suffix(b"\n").unwrap_or(input);
    input.strip_suffix(b"\r").unwrap_or(input)
}

#[cfg(feature = "file-io")]
fn sha256(data: &[u8]) -> Option<[u8; 32]> {
    Some(sha2::Sha256::digest(data).into())
}

#[cfg(not(feature = "file-io"))]
fn sha256(_data: &[u8]) -> Option<[u8; 32]> {
    None
}

/// Lowercase hex rendering of a digest.
pub fn hex(digest: &[u8]) -> String {
    digest.iter().map(|b| format!("{b:02x}")).collect()
}

// ---------------------------------------------------------------------------
// encode_file / decode_file
// ---------------------------------------------------------------------------

// `output_path` is only created once the codec has accepted the input.
fn write_file(path: &Path, data: &[u8]) -> io::Result<()> {
    let mut output = BufWriter::new(File::create(path)?);
    output.write_all(data)?;
    output.flush()
}

/// Encode the file at `input_path` into Z85 text at `output_path`.
///
/// On a codec error the output file is left untouched.
pub fn encode_file(
    input_path: &Path,
    output_path: &Path,
    opts: CodecOptions,
) -> Result<EncodeStats, IoError> {
    let input = File::open(input_path)?;
    let mut buf = Vec::new();
    let stats = encode_stream(input, &mut buf, opts)?;
    write_file(output_path, &buf)?;
    log::debug!(
        "{} -> {}: {} bytes -> {} chars",
        input_path.display(),
        output_path.display(),
        stats.input_size,
        stats.output_size
    );
    Ok(stats)
}

/// Decode the Z85 text file at `input_path` into `output_path`.
pub fn decode_file(
    input_path: &Path,
    output_path: &Path,
    opts: CodecOptions,
) -> Result<DecodeStats, IoError> {
    let input = File::open(input_path)?;
    let mut buf = Vec::new();
    let stats = decode_stream(input, &mut buf, opts)?;
    write_file(output_path, &buf)?;
    log::debug!(
        "{} -> {}: {} chars -> {} bytes",
        input_path.display(),
        output_path.display(),
        stats.input_size,
        stats.output_size
    );
    Ok(stats)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn write_temp_file(name: &str, data: &[u8]) -> std::path::PathBuf {
        let dir = std::env::temp_dir().join("oxiz85_io_test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join(name);
        let mut f = File::create(&path).unwrap();
        f.write_all(data).unwrap();
        path
    }

    fn cleanup_temp_files(paths: &[&Path]) {
        for p in paths {
            let _ = std::fs::remove_file(p);
        }
    }

    #[test]
    fn encode_decode_file_roundtrip() {
        let data = b"The quick brown fox jumps over the lazy dog.";

        let input_path = write_temp_file("input.bin", data);
        let text_path = write_temp_file("input.z85", b"");
        let output_path = write_temp_file("output.bin", b"");

        let opts = CodecOptions {
            newline: true,
            ..Default::default()
        };
        let enc_stats = encode_file(&input_path, &text_path, opts).unwrap();
        assert_eq!(enc_stats.input_size, data.len() as u64);
        assert_eq!(enc_stats.output_size, 55);
        assert_eq!(enc_stats.blocks, 11);

        let text = std::fs::read(&text_path).unwrap();
        assert_eq!(text.len(), 56);
        assert_eq!(text.last(), Some(&b'\n'));

        let dec_stats = decode_file(&text_path, &output_path, opts).unwrap();
        assert_eq!(dec_stats.input_size, 55);
        assert_eq!(dec_stats.output_size, data.len() as u64);

        assert_eq!(std::fs::read(&output_path).unwrap(), data);

        cleanup_temp_files(&[&input_path, &text_path, &output_path]);
    }

    #[test]
    fn strict_length_error_surfaces() {
        let opts = CodecOptions {
            variant: Variant::Strict,
            newline: false,
        };
        let mut out = Vec::new();
        let err = encode_stream(&b"abc"[..], &mut out, opts).unwrap_err();
        assert!(matches!(err, IoError::Codec(Z85Error::InvalidLength { .. })));
        assert!(out.is_empty());
    }

    #[test]
    fn crlf_is_stripped_before_decoding() {
        let mut out = Vec::new();
        let stats =
            decode_stream(&b"HelloWorld\r\n"[..], &mut out, CodecOptions::default()).unwrap();
        assert_eq!(out, [0x86, 0x4F, 0xD2, 0x6F, 0xB5, 0x59, 0xF7, 0x5B]);
        assert_eq!(stats.blocks, 2);
    }

    #[test]
    fn missing_input_is_io_error() {
        let dir = std::env::temp_dir().join("oxiz85_io_test");
        let err = encode_file(
            &dir.join("does-not-exist.bin"),
            &dir.join("never-written.z85"),
            CodecOptions::default(),
        )
        .unwrap_err();
        assert!(matches!(err, IoError::Io(_)));
    }

    #[test]
    fn rejected_input_leaves_output_untouched() {
        let input_path = write_temp_file("odd.bin", b"abc");
        let existing = write_temp_file("existing.z85", b"PRECIOUS");
        let fresh = std::env::temp_dir()
            .join("oxiz85_io_test")
            .join("fresh.z85");
        let _ = std::fs::remove_file(&fresh);
        let opts = CodecOptions {
            variant: Variant::Strict,
            newline: true,
        };

        let err = encode_file(&input_path, &existing, opts).unwrap_err();
        assert!(matches!(err, IoError::Codec(Z85Error::InvalidLength { .. })));
        assert_eq!(std::fs::read(&existing).unwrap(), b"PRECIOUS");

        assert!(encode_file(&input_path, &fresh, opts).is_err());
        assert!(!fresh.exists());

        let bad_text = write_temp_file("bad.z85", b"Hel o");
        assert!(decode_file(&bad_text, &existing, opts).is_err());
        assert_eq!(std::fs::read(&existing).unwrap(), b"PRECIOUS");

        cleanup_temp_files(&[&input_path, &existing, &bad_text]);
    }

    #[cfg(feature = "file-io")]
    #[test]
    fn sha256_of_binary_side_matches() {
        let data: Vec<u8> = (0..=255u8).collect();
        let mut text = Vec::new();
        let enc = encode_stream(&data[..], &mut text, CodecOptions::default()).unwrap();
        let mut out = Vec::new();
        let dec = decode_stream(&text[..], &mut out, CodecOptions::default()).unwrap();
        assert!(enc.input_sha256.is_some());
        assert_eq!(enc.input_sha256, dec.output_sha256);
        assert_eq!(hex(&enc.input_sha256.unwrap()).len(), 64);
    }

    #[test]
    fn hex_is_lowercase() {
        assert_eq!(hex(&[0x00, 0xAB, 0x0F]), "00ab0f");
    }
}
