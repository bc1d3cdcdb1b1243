//! Timing harness over random keys.

use std::io::Write;
use std::time::Instant;

use rand::Rng;
use slot_hashing::{CollisionStrategy, HashFunction, Placement, Table};

use crate::DriverError;

/// Keys are drawn from the four-digit domain the digit-based functions are built for.
const KEY_RANGE: u32 = 10_000;

/// Is the slot load factor greater than or equal to 0.9375?
///
/// Linear probing needs a free slot, so the probed runs double the table before this
/// point is passed.
fn should_grow(occupied: usize, capacity: usize) -> bool {
    occupied >= (capacity - (capacity >> 4))
}

fn random_keys(samples: usize) -> Vec<u32> {
    let mut rng = rand::thread_rng();
    let mut keys: Vec<u32> = Vec::with_capacity(samples);
    let mut i: usize = 0;
    while i < samples {
        keys.push(rng.gen_range(0..KEY_RANGE));
        i += 1;
    }
    keys
}

/// Fills one table per hash function and strategy and reports the average insert time.
pub fn run<W>(capacity: usize, samples: usize, out: &mut W) -> Result<(), DriverError>
where
    W: Write,
{
    let keys: Vec<u32> = random_keys(samples);
    let divisor: f64 = samples.max(1) as f64;

    benchmarking::warm_up();

    for hash in HashFunction::ALL {
        let bench_result = benchmarking::measure_function(|measurer| {
            for key in keys.iter() {
                measurer.measure(|| hash.apply(*key, capacity));
            }
        })
        .map_err(|err| DriverError::Benchmark(format!("{:?}", err)))?;
        writeln!(out, "{}: avg time to hash {:?}", hash, bench_result.elapsed())?;

        for strategy in [CollisionStrategy::LinearProbe, CollisionStrategy::Chaining] {
            let mut table: Table = Table::create(capacity);
            let mut rehashes: usize = 0;
            let mut occupied: usize = 0;

            let now: Instant = Instant::now();
            for (i, key) in keys.iter().enumerate() {
                if strategy == CollisionStrategy::LinearProbe
                    && should_grow(occupied, table.capacity())
                {
                    table = slot_hashing::rehash(table, hash);
                    rehashes += 1;
                }
                match strategy.insert(&mut table, *key, i as i32, hash) {
                    Ok(Placement::Slot(_)) => occupied += 1,
                    Ok(Placement::Chain(_)) => (),
                    Err(err) => return Err(DriverError::Benchmark(err.to_string())),
                }
            }
            let elapsed: u128 = now.elapsed().as_nanos();

            writeln!(out, "{} / {}", hash, strategy)?;
            writeln!(out, "Initial capacity {} actual capacity {}", capacity, table.capacity())?;
            writeln!(out, "Initial entries {} actual entries {}", samples, table.len())?;
            writeln!(out, "Load factor {}", table.load_factor())?;
            writeln!(out, "Rehashes {}", rehashes)?;
            writeln!(out, "Avg time to insert {}", elapsed as f64 / divisor)?;
        }
    }
    Ok(())
}
