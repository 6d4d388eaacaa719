use num_bigint::BigUint;

use edid::{Edid, EdidConfig, GenerateOptions};

fn main() {
    let edid = Edid::new(EdidConfig::default());

    let id = edid.generate(GenerateOptions::new().shard(7)).unwrap();
    let compacted = edid.compact(&id);
    let bits = BigUint::parse_bytes(compacted.as_bytes(), 10)
        .map(|n| n.bits())
        .unwrap();

    println!("Base58 ID:      {id} ({} bytes)", id.len());
    println!("Base10 compact: {compacted} ({bits} bits)");

    let restored = edid.restore(&compacted).unwrap();
    println!("Restored:       {restored}");
    assert_eq!(restored, id);

    // The packed form is only as wide as the configuration makes it
    let wide = Edid::new(
        EdidConfig::builder()
            .shard_count(0)
            .max_counter(0)
            .build()
            .unwrap(),
    );
    let id = wide.generate(GenerateOptions::new().shard(1001)).unwrap();
    let compacted = wide.compact(&id);
    let fits = compacted.parse::<u64>().is_ok();
    println!("\nWide layout: {id} -> {compacted} (fits u64: {fits})");

    // Wider than any machine integer still round-trips
    let widest = Edid::new(
        EdidConfig::builder()
            .time_len(10)
            .shard_len(10)
            .counter_len(10)
            .shard_count(0)
            .max_counter(0)
            .build()
            .unwrap(),
    );
    let id = widest
        .generate(GenerateOptions::new().shard(1001).counter(5))
        .unwrap();
    let compacted = widest.compact(&id);
    assert_eq!(widest.restore(&compacted).unwrap(), id);
    println!("Ten-digit fields: {id} -> {compacted}");
}
