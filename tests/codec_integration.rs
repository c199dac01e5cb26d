use oxiz85::z85::{self, ALPHABET, Decoder, Encoder, MARK, PAD, Variant, Z85Error};
use oxiz85::{get_decoder, get_encoder};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn random_bytes(rng: &mut StdRng, len: usize) -> Vec<u8> {
    let mut data = vec![0u8; len];
    rng.fill(&mut data[..]);
    data
}

// ---------------------------------------------------------------------------
// Selector functions
// ---------------------------------------------------------------------------

#[test]
fn selectors_return_matching_variants() {
    for variant in Variant::ALL {
        assert_eq!(get_encoder(variant).variant(), variant);
        assert_eq!(get_decoder(variant).variant(), variant);
    }
    assert_eq!(get_encoder(Variant::Strict), Encoder::STRICT);
    assert_eq!(get_decoder(Variant::Padded), Decoder::PADDED);
    assert_eq!(Encoder::default(), Encoder::DEFAULT);
    assert_eq!(Decoder::default(), Decoder::DEFAULT);
}

#[test]
fn codecs_are_shareable_across_threads() {
    fn assert_send_sync<T: Send + Sync + Copy + 'static>() {}
    assert_send_sync::<Encoder>();
    assert_send_sync::<Decoder>();

    let handles: Vec<_> = (0..4u8)
        .map(|seed| {
            std::thread::spawn(move || {
                let data: Vec<u8> = (0..1000u32).map(|i| (i as u8).wrapping_mul(seed)).collect();
                let text = Encoder::DEFAULT.encode(&data).unwrap();
                assert_eq!(Decoder::DEFAULT.decode(&text).unwrap(), data);
            })
        })
        .collect();
    for h in handles {
        h.join().unwrap();
    }
}

#[test]
fn alphabet_constants() {
    assert_eq!(ALPHABET.len(), 85);
    assert!(ALPHABET.starts_with("0123456789abc"));
    assert!(ALPHABET.ends_with("@%$#"));
    assert!(!ALPHABET.contains(MARK));
    assert_eq!(ALPHABET.find(PAD), Some(0));
}

// ---------------------------------------------------------------------------
// Concrete scenarios
// ---------------------------------------------------------------------------

#[test]
fn canonical_vector_strict() {
    let text = get_encoder(Variant::Strict)
        .encode(&[0xB5, 0x25, 0x88, 0x9C])
        .unwrap();
    assert_eq!(text, "WiZT0");
    assert_eq!(
        get_decoder(Variant::Strict).decode(&text).unwrap(),
        [0xB5, 0x25, 0x88, 0x9C]
    );
}

#[test]
fn empty_default() {
    assert_eq!(z85::encode(&[]), "");
    assert_eq!(z85::decode("").unwrap(), Vec::<u8>::new());
}

#[test]
fn one_byte_default() {
    let text = z85::encode(&[0x01]);
    assert_eq!(text.len(), 5);
    assert!(text.ends_with(MARK));
    assert_eq!(z85::decode(&text).unwrap(), [0x01]);
}

// ---------------------------------------------------------------------------
// Length accounting
// ---------------------------------------------------------------------------

#[test]
fn default_decode_length_formula_for_mark_tails() {
    // len % 5 == r: blocks * 4 - (4 - r)
    let body = Encoder::STRICT.encode(&[7u8; 12]).unwrap();
    for r in 1..=4usize {
        let text = format!("{body}{}", "~".repeat(r));
        let out = z85::decode(&text).unwrap();
        assert_eq!(out.len(), 3 * 4 - (4 - r));
        assert_eq!(out, vec![7u8; out.len()]);
    }
    // len % 5 == 0: (len / 5) * 4 less one byte per mark.
    assert_eq!(z85::decode(&body).unwrap().len(), 12);
}

#[test]
fn mark_tail_after_mark_block_rejected() {
    // The block before an appended tail must be complete.
    let err = z85::decode("0r~~~~").unwrap_err();
    assert!(matches!(err, Z85Error::InvalidCharacter { position: 0, .. }));
}

#[test]
fn encoded_len_reports_strict_violation() {
    assert_eq!(Encoder::STRICT.encoded_len(8), Ok(10));
    assert!(matches!(
        Encoder::STRICT.encoded_len(9),
        Err(Z85Error::InvalidLength { len: 9, block: 4, .. })
    ));
    assert_eq!(Encoder::PADDED.encoded_len(9), Ok(15));
    assert_eq!(Encoder::DEFAULT.encoded_len(0), Ok(0));
}

// ---------------------------------------------------------------------------
// Bulk round trips
// ---------------------------------------------------------------------------

#[test]
fn random_roundtrip_every_remainder() {
    let mut rng = StdRng::seed_from_u64(0x285);
    for _ in 0..200 {
        let len = rng.random_range(0..512);
        let data = random_bytes(&mut rng, len);
        let text = z85::encode(&data);
        assert_eq!(text.len(), len.div_ceil(4) * 5);
        assert_eq!(z85::decode(&text).unwrap(), data, "len {len}");
    }
}

#[test]
fn every_tail_byte_value_survives() {
    // The marked block must keep enough digits for its top bytes.
    for r in 1..=3usize {
        for b in 0..=255u8 {
            for fill in [0x00, 0xFF] {
                let mut data = vec![fill; r];
                data[r - 1] = b;
                assert_eq!(z85::decode(&z85::encode(&data)).unwrap(), data);
            }
        }
    }
}

#[test]
fn large_buffer_roundtrip() {
    let mut rng = StdRng::seed_from_u64(85);
    let data = random_bytes(&mut rng, (1 << 20) + 3);
    let text = Encoder::DEFAULT.encode(&data).unwrap();
    assert_eq!(Decoder::DEFAULT.decode(&text).unwrap(), data);

    let whole = &data[..1 << 20];
    let text = Encoder::STRICT.encode(whole).unwrap();
    assert_eq!(Decoder::STRICT.decode(&text).unwrap(), whole);
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[test]
fn error_messages_are_diagnosable() {
    let err = Encoder::STRICT.encode(&[1, 2, 3]).unwrap_err();
    assert_eq!(err.to_string(), "Z85 strict: length 3 is not a multiple of 4");

    let err = Decoder::STRICT.decode("Hel lo").unwrap_err();
    assert_eq!(
        err.to_string(),
        "Z85 strict: length 6 is not a multiple of 5"
    );

    let err = Decoder::DEFAULT.decode("Hel\"oWorld").unwrap_err();
    assert_eq!(
        err.to_string(),
        "Z85: invalid character found near 'Hel\"o' at position 0"
    );
}

#[test]
fn errors_convert_to_io_errors() {
    let err: std::io::Error = Decoder::STRICT.decode("~~~~~").unwrap_err().into();
    assert_eq!(err.kind(), std::io::ErrorKind::InvalidData);
}
