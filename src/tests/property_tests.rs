//! Property tests over valid field triples

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::tests::test_utils::fixed_clock;
    use crate::{Edid, EdidConfig, GenerateOptions};

    fn wide_counter() -> EdidConfig {
        EdidConfig::builder()
            .shard_count(100)
            .counter_len(3)
            .max_counter(9999)
            .epoch(1_420_070_400_000)
            .build()
            .unwrap()
    }

    /// Packs past 128 bits once every field is in use
    fn wide_fields() -> EdidConfig {
        EdidConfig::builder()
            .shard_len(10)
            .counter_len(5)
            .shard_count(0)
            .max_counter(0)
            .build()
            .unwrap()
    }

    fn widest() -> EdidConfig {
        EdidConfig::builder()
            .time_len(10)
            .shard_len(10)
            .counter_len(10)
            .shard_count(0)
            .max_counter(0)
            .build()
            .unwrap()
    }

    fn configs() -> impl Strategy<Value = EdidConfig> {
        prop_oneof![
            Just(EdidConfig::default()),
            Just(wide_counter()),
            Just(
                EdidConfig::builder()
                    .shard_count(0)
                    .max_counter(0)
                    .build()
                    .unwrap()
            ),
            Just(EdidConfig::builder().time_len(7).build().unwrap()),
            Just(wide_fields()),
            Just(widest()),
        ]
    }

    /// A config with an absolute time, shard and counter inside its bounds
    fn valid_triple() -> impl Strategy<Value = (EdidConfig, i64, i64, i64)> {
        configs().prop_flat_map(|config| {
            let edid = Edid::new(config);
            let times = config.epoch()..edid.max_time_millis();
            let shards = 0..config.shard_count() as i64;
            let counters = 0..=config.max_counter() as i64;
            (Just(config), times, shards, counters)
        })
    }

    proptest! {
        #[test]
        fn prop_parse_inverts_generate((config, time, shard, counter) in valid_triple()) {
            let edid = Edid::new(config);
            let id = edid
                .generate(GenerateOptions::new().time(time).shard(shard).counter(counter))
                .unwrap();
            let parsed = edid.parse(&id);
            prop_assert_eq!(parsed.time, time);
            prop_assert_eq!(parsed.shard, shard as u64);
            prop_assert_eq!(parsed.counter, counter as u64);
            prop_assert_eq!(parsed.source, id);
        }

        #[test]
        fn prop_restore_inverts_compact((config, time, shard, counter) in valid_triple()) {
            let edid = Edid::new(config);
            let id = edid
                .generate(GenerateOptions::new().time(time).shard(shard).counter(counter))
                .unwrap();
            let compacted = edid.compact(&id);
            prop_assert!(compacted == "0" || !compacted.starts_with('0'));
            prop_assert_eq!(edid.restore(&compacted).unwrap(), id);
        }

        #[test]
        fn prop_fixed_width((config, time, shard, counter) in valid_triple()) {
            let edid = fixed_clock(config, time);
            let explicit = edid
                .generate(GenerateOptions::new().shard(shard).counter(counter))
                .unwrap();
            let defaulted = edid.generate(GenerateOptions::new()).unwrap();
            prop_assert_eq!(explicit.len(), config.id_len());
            prop_assert_eq!(defaulted.len(), config.id_len());
        }

        #[test]
        fn prop_later_time_sorts_after(
            (config, time, shard, counter) in valid_triple(),
            step in 1i64..1_000_000,
        ) {
            let edid = Edid::new(config);
            prop_assume!(time + step < edid.max_time_millis());
            let earlier = edid
                .generate(GenerateOptions::new().time(time).shard(shard).counter(counter))
                .unwrap();
            let later = edid
                .generate(GenerateOptions::new().time(time + step).shard(shard).counter(counter))
                .unwrap();
            prop_assert!(earlier < later);
        }
    }
}
