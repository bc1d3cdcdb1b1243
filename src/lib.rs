//! Integer hash-table construction: five key-to-slot hash functions combined with
//! linear probing, separate chaining and capacity-doubling rehash.

pub mod collision;
pub mod error;
pub mod hash_fn;
pub mod table;

#[cfg(test)]
mod tests;

pub use collision::{
    chain_insert, linear_probe_insert, rehash, try_linear_probe_insert, CollisionStrategy,
    Placement,
};
pub use error::InsertError;
pub use hash_fn::{hash, HashFunction};
pub use table::{Chain, Entry, Slot, SlotView, Table, DEFAULT_CAPACITY};

/// Allocates a table of `capacity` empty slots and chains.
pub fn create_table(capacity: usize) -> Table {
    Table::create(capacity)
}
