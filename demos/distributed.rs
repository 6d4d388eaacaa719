use rand::{rng, Rng};
use std::collections::HashSet;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use edid::{Edid, EdidConfig, GenerateOptions};

fn main() {
    // One codec shared by all workers; the counter is updated atomically
    let edid = Arc::new(Edid::new(EdidConfig::default()));
    let mut handles = vec![];

    for worker in 0..4 {
        let edid = Arc::clone(&edid);
        handles.push(thread::spawn(move || {
            let mut ids = HashSet::new();
            let mut rng = rng();
            let shard = rng.random_range(0..4000);

            for i in 0..5 {
                let id = edid.generate(GenerateOptions::new().shard(shard)).unwrap();
                let parsed = edid.parse(&id);

                println!(
                    "Worker {} generated ID {} {} (time={}, shard={}, counter={})",
                    worker, i, id, parsed.time, parsed.shard, parsed.counter
                );

                assert!(ids.insert(id), "Duplicate ID generated!");

                // Random delay to simulate work
                let delay = rng.random_range(0..=9);
                thread::sleep(Duration::from_millis(delay));
            }
            ids
        }));
    }

    let mut all_ids = HashSet::new();
    for handle in handles {
        all_ids.extend(handle.join().unwrap());
    }

    println!("\nTotal unique IDs generated: {}", all_ids.len());

    // Sorting the strings orders them by time, then shard, then counter
    let mut ids: Vec<_> = all_ids.into_iter().collect();
    ids.sort_unstable();
    let mut last_time = i64::MIN;
    for id in &ids {
        let time = edid.parse(id).time;
        assert!(time >= last_time, "IDs not ordered by time!");
        last_time = time;
    }
    println!("All IDs are unique and sort chronologically!");
}
