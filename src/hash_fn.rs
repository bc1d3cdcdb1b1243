//! The five key-to-slot hash functions.
//!
//! Every function maps a non-negative key onto `0..capacity`. They are pure and total
//! for `capacity > 0`; a zero capacity is a caller error and panics on the final
//! modulo like any other division by zero.

use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum HashFunction {
    MidSquare,
    Division,
    Folding,
    DigitExtraction,
    Rotation,
}

impl HashFunction {
    /// All variants, in the order the driver lists them.
    pub const ALL: [HashFunction; 5] = [
        HashFunction::MidSquare,
        HashFunction::Division,
        HashFunction::Folding,
        HashFunction::DigitExtraction,
        HashFunction::Rotation,
    ];

    /// Maps a 1-based menu number onto a variant.
    pub fn from_menu(choice: u32) -> Option<HashFunction> {
        match choice {
            1..=5 => Some(Self::ALL[choice as usize - 1]),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            HashFunction::MidSquare => "Mid-Square",
            HashFunction::Division => "Division",
            HashFunction::Folding => "Folding",
            HashFunction::DigitExtraction => "Digit Extraction",
            HashFunction::Rotation => "Rotation",
        }
    }

    #[inline]
    pub fn apply(self, key: u32, capacity: usize) -> usize {
        match self {
            HashFunction::MidSquare => mid_square(key, capacity),
            HashFunction::Division => division(key, capacity),
            HashFunction::Folding => folding(key, capacity),
            HashFunction::DigitExtraction => digit_extraction(key, capacity),
            HashFunction::Rotation => rotation(key, capacity),
        }
    }
}

impl fmt::Display for HashFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Hashes `key` into `0..capacity` with the given variant.
#[inline]
pub fn hash(variant: HashFunction, key: u32, capacity: usize) -> usize {
    variant.apply(key, capacity)
}

/// Squares the key in 64 bits and keeps the middle three digits, `(k^2 / 100) % 1000`.
pub fn mid_square(key: u32, capacity: usize) -> usize {
    let square: u64 = key as u64 * key as u64;
    let mid: u64 = (square / 100) % 1000;
    mid as usize % capacity
}

pub fn division(key: u32, capacity: usize) -> usize {
    key as usize % capacity
}

/// Sums the key's two-digit groups, least significant group first.
pub fn folding(key: u32, capacity: usize) -> usize {
    let mut key: u32 = key;
    let mut sum: usize = 0;
    while key > 0 {
        sum += (key % 100) as usize;
        key /= 100;
    }
    sum % capacity
}

/// Combines the thousands digit and the tens digit into a two-digit number.
/// Keys below 1000 contribute 0 for the thousands position.
pub fn digit_extraction(key: u32, capacity: usize) -> usize {
    let thousands: u32 = (key / 1000) % 10;
    let tens: u32 = (key / 10) % 10;
    (thousands * 10 + tens) as usize % capacity
}

/// Moves the last decimal digit in front of the rest: `1234 -> 4123`.
///
/// The multiplier is fixed at 1000, so this is a true rotation only for four-digit keys.
/// Shorter and longer keys get the same arithmetic, e.g. `12 -> 2001` and
/// `12345 -> 6234`. That behaviour is kept as is.
pub fn rotate_digits(key: u32) -> u64 {
    let last_digit: u64 = (key % 10) as u64;
    let rest: u64 = (key / 10) as u64;
    last_digit * 1000 + rest
}

pub fn rotation(key: u32, capacity: usize) -> usize {
    (rotate_digits(key) % capacity as u64) as usize
}
