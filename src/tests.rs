//! End-to-end tests through the crate's public surface.

#[cfg(test)]
mod integration_tests {
    use crate::{
        chain_insert, create_table, hash, linear_probe_insert, rehash, HashFunction, Slot,
        Table,
    };
    use rand::Rng;

    #[test]
    fn test_probe_then_rehash_scenario() {
        let mut table: Table = create_table(10);
        let f: HashFunction = HashFunction::Division;

        assert_eq!(linear_probe_insert(&mut table, 23, 5, f), 3);
        assert_eq!(hash(f, 33, table.capacity()), 3);
        assert_eq!(linear_probe_insert(&mut table, 33, 7, f), 4);

        let table: Table = rehash(table, f);
        assert_eq!(table.capacity(), 20);
        assert_eq!(table.len(), 2);

        let snapshot = table.snapshot();
        assert_eq!(snapshot.len(), 20);
        assert_eq!(snapshot[3].slot.entry().map(|e| (e.key, e.value)), Some((23, 5)));
        assert_eq!(snapshot[13].slot.entry().map(|e| (e.key, e.value)), Some((33, 7)));
        let occupied: Vec<usize> = snapshot
            .iter()
            .filter(|view| view.slot != Slot::Empty)
            .map(|view| view.index)
            .collect();
        assert_eq!(occupied, vec![3, 13]);
    }

    #[test]
    fn test_overfull_chain() {
        // capacity + 1 entries on one index
        let mut table: Table = create_table(8);
        let mut i: u32 = 0;
        while i < 9 {
            chain_insert(&mut table, 5 + 8 * i, 0, HashFunction::Division);
            i += 1;
        }
        assert_eq!(table.chain(5).len(), 9);
        assert_eq!(table.occupied_slots(), 0);
    }

    #[test]
    fn test_repeated_rehash_conserves_entries() {
        let mut rng = rand::thread_rng();
        let mut table: Table = create_table(10);
        let f: HashFunction = HashFunction::Rotation;
        let mut inserted: usize = 0;
        let mut round: usize = 0;
        while round < 4 {
            let mut i: usize = 0;
            while i < table.capacity() / 2 {
                let key: u32 = rng.gen_range(1000..10_000);
                linear_probe_insert(&mut table, key, 0, f);
                chain_insert(&mut table, key, 1, f);
                inserted += 2;
                i += 1;
            }
            let capacity: usize = table.capacity();
            table = rehash(table, f);
            assert_eq!(table.capacity(), capacity * 2);
            assert_eq!(table.len(), inserted);
            round += 1;
        }
        assert_eq!(table.capacity(), 160);
    }

    #[test]
    fn test_display_after_mixed_inserts() {
        let mut table: Table = create_table(3);
        let f: HashFunction = HashFunction::Division;
        linear_probe_insert(&mut table, 4, 40, f);
        chain_insert(&mut table, 7, 70, f);
        chain_insert(&mut table, 1, 10, f);
        let listing: String = table.to_string();
        assert_eq!(
            listing,
            "Hash Table:\nSlot [0]: empty\nSlot [1]: (4, 40)\n  -> (1, 10)\n  -> (7, 70)\nSlot [2]: empty\n"
        );
    }
}
