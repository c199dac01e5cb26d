#![no_main]
use libfuzzer_sys::fuzz_target;
use oxiz85::z85::{Decoder, Variant};

fuzz_target!(|data: &[u8]| {
    // The decoder must never panic — only return errors.
    for variant in Variant::ALL {
        let _ = Decoder::new(variant).decode_bytes(data);
    }

    if let Ok(text) = std::str::from_utf8(data) {
        for variant in Variant::ALL {
            let _ = Decoder::new(variant).decode(text);
        }
    }
});
