//! Collision resolution: linear probing, separate chaining and capacity-doubling rehash.

use std::fmt;

use crate::error::InsertError;
use crate::hash_fn::HashFunction;
use crate::table::{Entry, Slot, Table};

/// Writes the pair into the first empty slot found by scanning forward from the hash
/// index, wrapping at the end of the array. Returns the slot index.
///
/// There is no capacity check. On a table whose slots are all occupied this never
/// returns; use [`try_linear_probe_insert`] when that can happen.
pub fn linear_probe_insert(table: &mut Table, key: u32, value: i32, hash: HashFunction) -> usize {
    let capacity: usize = table.capacity();
    let mut index: usize = hash.apply(key, capacity);
    while let Slot::Occupied(_) = table.slots[index] {
        index = (index + 1) % capacity;
    }
    table.slots[index] = Slot::Occupied(Entry::new(key, value));
    index
}

/// Linear probing that gives up after visiting every slot once.
/// The table is left untouched on failure.
pub fn try_linear_probe_insert(
    table: &mut Table,
    key: u32,
    value: i32,
    hash: HashFunction,
) -> Result<usize, InsertError> {
    let capacity: usize = table.capacity();
    let mut index: usize = hash.apply(key, capacity);
    let mut probes: usize = 0;
    while probes < capacity {
        if table.slots[index].is_empty() {
            table.slots[index] = Slot::Occupied(Entry::new(key, value));
            return Ok(index);
        }
        index = (index + 1) % capacity;
        probes += 1;
    }
    Err(InsertError::TableFull { capacity })
}

/// Prepends the pair to the chain at the hash index. Never touches the slot area.
pub fn chain_insert(table: &mut Table, key: u32, value: i32, hash: HashFunction) -> usize {
    let index: usize = hash.apply(key, table.capacity());
    table.chains[index].push_front(Entry::new(key, value));
    index
}

/// Builds a table of twice the capacity and re-inserts every entry with `hash`.
///
/// Indices are visited in ascending order. A slot entry is linear-probed into the new
/// table; chain entries are walked head to tail (newest first) and chained again, which
/// leaves each rebuilt chain in reverse order relative to the walk. The old storage is
/// consumed and dropped before the new table is returned.
///
/// Panics if the doubled capacity overflows `usize`.
pub fn rehash(table: Table, hash: HashFunction) -> Table {
    let old_capacity: usize = table.capacity();
    let new_capacity: usize = match old_capacity.checked_mul(2) {
        Some(n) => n,
        None => panic!("capacity overflow"),
    };
    let Table { slots, chains } = table;
    let mut new_table: Table = Table::create(new_capacity);

    for (slot, chain) in slots.into_iter().zip(chains) {
        if let Slot::Occupied(entry) = slot {
            // at most old_capacity entries land in 2 * old_capacity slots
            linear_probe_insert(&mut new_table, entry.key, entry.value, hash);
        }
        for entry in chain {
            chain_insert(&mut new_table, entry.key, entry.value, hash);
        }
    }

    new_table
}

/// The collision strategy the driver applies to a new pair.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum CollisionStrategy {
    LinearProbe,
    Chaining,
    /// Double the table, then linear-probe the new pair.
    Rehash,
}

/// Where an insert ended up.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Placement {
    Slot(usize),
    Chain(usize),
}

impl CollisionStrategy {
    pub const ALL: [CollisionStrategy; 3] = [
        CollisionStrategy::LinearProbe,
        CollisionStrategy::Chaining,
        CollisionStrategy::Rehash,
    ];

    /// Maps a 1-based menu number onto a strategy.
    pub fn from_menu(choice: u32) -> Option<CollisionStrategy> {
        match choice {
            1..=3 => Some(Self::ALL[choice as usize - 1]),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            CollisionStrategy::LinearProbe => "Linear Probing",
            CollisionStrategy::Chaining => "Chaining",
            CollisionStrategy::Rehash => "Rehashing",
        }
    }

    /// Inserts the pair into `table`, replacing the table when the strategy rehashes.
    ///
    /// Linear probing goes through the guarded probe, so a full table is reported as
    /// [`InsertError::TableFull`] rather than spinning.
    pub fn insert(
        self,
        table: &mut Table,
        key: u32,
        value: i32,
        hash: HashFunction,
    ) -> Result<Placement, InsertError> {
        match self {
            CollisionStrategy::LinearProbe => {
                try_linear_probe_insert(table, key, value, hash).map(Placement::Slot)
            }
            CollisionStrategy::Chaining => Ok(Placement::Chain(chain_insert(table, key, value, hash))),
            CollisionStrategy::Rehash => {
                let old: Table = std::mem::take(table);
                *table = rehash(old, hash);
                try_linear_probe_insert(table, key, value, hash).map(Placement::Slot)
            }
        }
    }
}

impl fmt::Display for CollisionStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
