//! Loopback counter tests

#[cfg(test)]
mod tests {
    use crate::tests::test_utils::{fixed_clock, utc_ms};
    use crate::{Edid, EdidConfig, GenerateOptions};

    #[test]
    fn test_counter_cycle() {
        let edid = Edid::new(EdidConfig::default());
        let max = edid.config().max_counter();

        let seen: Vec<u64> = (0..max + 2).map(|_| edid.next_counter()).collect();
        let mut expected: Vec<u64> = (0..=max).collect();
        expected.push(0);
        assert_eq!(seen, expected);
    }

    #[test]
    fn test_counter_cycle_at_field_maximum() {
        let config = EdidConfig::builder().max_counter(0).build().unwrap();
        let edid = Edid::new(config);
        for expected in 0..=3363 {
            assert_eq!(edid.next_counter(), expected);
        }
        assert_eq!(edid.next_counter(), 0);
    }

    #[test]
    fn test_generate_advances_counter() {
        let edid = fixed_clock(EdidConfig::default(), utc_ms(2015, 1, 1));

        let counters: Vec<u64> = (0..5)
            .map(|_| {
                let id = edid.generate(GenerateOptions::new().shard(9)).unwrap();
                edid.parse(&id).counter
            })
            .collect();
        assert_eq!(counters, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_generate_wraps_counter() {
        let config = EdidConfig::builder().max_counter(2).build().unwrap();
        let edid = fixed_clock(config, utc_ms(2015, 1, 1));

        let ids: Vec<String> = (0..4)
            .map(|_| edid.generate(GenerateOptions::new().shard(9)).unwrap())
            .collect();
        let counters: Vec<u64> = ids.iter().map(|id| edid.parse(id).counter).collect();
        assert_eq!(counters, vec![0, 1, 2, 0]);
        // same millisecond and shard after a wrap repeats the first id
        assert_eq!(ids[0], ids[3]);
    }

    #[test]
    fn test_instances_are_independent() {
        let a = Edid::new(EdidConfig::default());
        let b = Edid::new(EdidConfig::default());
        assert_eq!(a.next_counter(), 0);
        assert_eq!(a.next_counter(), 1);
        assert_eq!(b.next_counter(), 0);
    }
}
