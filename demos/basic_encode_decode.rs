use oxiz85::z85::{self, Decoder, Encoder, Variant};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let payload = b"Hello from oxiz85";

    // Default: any length, exact round trip.
    let text = z85::encode(payload);
    let restored = z85::decode(&text)?;
    assert_eq!(restored, payload);
    println!("default: {} bytes -> {text:?}", payload.len());

    // Strict: plain ZeroMQ Z85, whole blocks only.
    match Encoder::STRICT.encode(payload) {
        Ok(text) => println!("strict:  {text:?}"),
        Err(e) => println!("strict:  {e}"),
    }

    // Padded: zero-extended to whole blocks.
    let text = Encoder::new(Variant::Padded).encode(payload)?;
    let restored = Decoder::PADDED.decode(&text)?;
    println!(
        "padded:  {text:?} -> {} bytes ({} padding)",
        restored.len(),
        restored.len() - payload.len()
    );

    Ok(())
}
