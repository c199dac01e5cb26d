#![no_main]
use libfuzzer_sys::fuzz_target;
use oxiz85::z85::{self, Decoder, Encoder, Variant};

fuzz_target!(|data: &[u8]| {
    // Default is lossless for every length.
    let text = z85::encode(data);
    assert_eq!(text.len(), data.len().div_ceil(4) * 5);
    assert_eq!(z85::decode(&text).unwrap(), data);

    // Strict only accepts whole blocks.
    match Encoder::STRICT.encode(data) {
        Ok(text) => {
            assert!(data.len() % 4 == 0);
            assert_eq!(Decoder::STRICT.decode(&text).unwrap(), data);
        }
        Err(_) => assert!(data.len() % 4 != 0),
    }

    // Padded returns the input zero-extended to whole blocks.
    let text = Encoder::new(Variant::Padded).encode(data).unwrap();
    let decoded = Decoder::PADDED.decode(&text).unwrap();
    assert_eq!(&decoded[..data.len()], data);
    assert!(decoded[data.len()..].iter().all(|&b| b == 0));
});
