//! Slot array plus per-index overflow chains.
//!
//! The two storage areas share one index space but never interact: linear probing only
//! writes slots, chaining only writes chains. Only a rehash moves entries between them.

use std::collections::VecDeque;
use std::fmt;

/// Initial capacity of the table the driver starts with.
pub const DEFAULT_CAPACITY: usize = 10;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Entry {
    pub key: u32,
    pub value: i32,
}

impl Entry {
    pub fn new(key: u32, value: i32) -> Self {
        Self { key, value }
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.key, self.value)
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum Slot {
    #[default]
    Empty,
    Occupied(Entry),
}

impl Slot {
    pub fn is_empty(&self) -> bool {
        matches!(self, Slot::Empty)
    }

    pub fn entry(&self) -> Option<&Entry> {
        match self {
            Slot::Empty => None,
            Slot::Occupied(entry) => Some(entry),
        }
    }
}

/// Overflow list for one index. The newest entry sits at the front.
pub type Chain = VecDeque<Entry>;

/// One row of a [`Table::snapshot`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotView {
    pub index: usize,
    pub slot: Slot,
    pub chain: Vec<Entry>,
}

#[derive(Debug, Clone)]
pub struct Table {
    pub(crate) slots: Vec<Slot>,
    pub(crate) chains: Vec<Chain>,
}

impl Default for Table {
    fn default() -> Self {
        Self::create(DEFAULT_CAPACITY)
    }
}

impl Table {
    /// Allocates `capacity` empty slots and as many empty chains.
    ///
    /// Panics if `capacity` is zero. Allocation failure aborts the process.
    pub fn create(capacity: usize) -> Table {
        assert!(capacity > 0, "capacity must be positive");
        Table {
            slots: vec![Slot::Empty; capacity],
            chains: vec![Chain::new(); capacity],
        }
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn slot(&self, index: usize) -> &Slot {
        &self.slots[index]
    }

    pub fn chain(&self, index: usize) -> &Chain {
        &self.chains[index]
    }

    pub fn occupied_slots(&self) -> usize {
        self.slots.iter().filter(|slot| !slot.is_empty()).count()
    }

    pub fn chained_entries(&self) -> usize {
        self.chains.iter().map(|chain| chain.len()).sum()
    }

    /// Entries stored in either area.
    pub fn len(&self) -> usize {
        self.occupied_slots() + self.chained_entries()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Entries per index. Chains are counted, so this can exceed 1.0.
    pub fn load_factor(&self) -> f64 {
        self.len() as f64 / self.capacity() as f64
    }

    /// Ordered listing of every index with its slot state and chain contents (head first).
    pub fn snapshot(&self) -> Vec<SlotView> {
        self.slots
            .iter()
            .zip(self.chains.iter())
            .enumerate()
            .map(|(index, (slot, chain))| SlotView {
                index,
                slot: *slot,
                chain: chain.iter().copied().collect(),
            })
            .collect()
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Hash Table:")?;
        for view in self.snapshot() {
            match view.slot {
                Slot::Occupied(entry) => writeln!(f, "Slot [{}]: {}", view.index, entry)?,
                Slot::Empty => writeln!(f, "Slot [{}]: empty", view.index)?,
            }
            for entry in view.chain {
                writeln!(f, "  -> {}", entry)?;
            }
        }
        Ok(())
    }
}
