use edid::{Edid, EdidConfig, GenerateOptions};

fn main() {
    // Default layout: 8 time digits, 3 shard digits, 2 counter digits
    let edid = Edid::new(EdidConfig::default());

    // A post lives on shard 7; its comments inherit the shard from the post id
    let post = edid.generate(GenerateOptions::new().shard(7)).unwrap();
    let comment1 = edid.generate(GenerateOptions::new().parent(&post)).unwrap();
    let comment2 = edid.generate(GenerateOptions::new().parent(&post)).unwrap();

    println!("Generated IDs ({edid}):");
    for id in [&post, &comment1, &comment2] {
        print_id(&edid, id);
    }

    // Without a shard or parent the shard is derived from the time
    let loose = edid.generate(GenerateOptions::new()).unwrap();
    println!("\nID without shard:");
    print_id(&edid, &loose);

    match edid.max_time() {
        Some(max) => println!("\nIDs keep their width until {max}"),
        None => println!("\nIDs keep their width beyond any representable date"),
    }
}

fn print_id(edid: &Edid, id: &str) {
    let parsed = edid.parse(id);
    let date = parsed
        .datetime()
        .map(|d| d.to_string())
        .unwrap_or_else(|| "out of range".to_string());

    println!(
        "  ID: {id}, Timestamp: {}, Human date: {date}, Shard: {}, Counter: {}",
        parsed.time, parsed.shard, parsed.counter
    );
}
