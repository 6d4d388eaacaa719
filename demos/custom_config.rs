use edid::{Edid, EdidConfig, GenerateOptions};

fn main() {
    // 100 shards and up to 10,000 ids per millisecond per shard, counting from 2015
    let config = EdidConfig::builder()
        .shard_count(100)
        .counter_len(3)
        .max_counter(9999)
        .epoch(1_420_070_400_000)
        .build()
        .unwrap();

    let edid = Edid::new(config);

    println!("Codec configuration:");
    println!("  Time digits: {}", config.time_len());
    println!("  Shard digits: {} ({} shards)", config.shard_len(), config.shard_count());
    println!("  Counter digits: {} (max {})", config.counter_len(), config.max_counter());
    println!("  ID length: {}", config.id_len());

    let id = edid.generate(GenerateOptions::new().shard(11)).unwrap();
    let parsed = edid.parse(&id);

    println!("\nGenerated ID: {id}");
    println!("Components:");
    println!("  Timestamp: {} ms", parsed.time);
    println!("  Shard: {} (of {})", parsed.shard, config.shard_count());
    println!("  Counter: {} (of {})", parsed.counter, config.max_counter());

    // Invalid configurations are rejected up front
    match EdidConfig::builder().time_len(6).build() {
        Ok(_) => unreachable!("six time digits roll over before 2039"),
        Err(err) => println!("\nRejected config: {err}"),
    }
}
