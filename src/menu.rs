//! Menu-driven session: pick a hash function, enter a pair, pick a collision strategy.
//!
//! The session owns the table. The collision menu keeps applying strategies to the same
//! pair until the user leaves it with 0, and the table listing is printed after every pass
//! through the main menu.

use std::io::{BufRead, Write};
use std::str::FromStr;
use std::time::Instant;

use slot_hashing::{CollisionStrategy, HashFunction, Placement, Table};

use crate::DriverError;

pub struct Menu<R, W>
where
    R: BufRead,
    W: Write,
{
    input: R,
    output: W,
    table: Table,
    verbose: bool,
    line: String,
}

impl<R, W> Menu<R, W>
where
    R: BufRead,
    W: Write,
{
    pub fn new(input: R, output: W, table: Table, verbose: bool) -> Self {
        Self {
            input,
            output,
            table,
            verbose,
            line: String::new(),
        }
    }

    #[cfg(test)]
    pub fn table(&self) -> &Table {
        &self.table
    }

    /// Runs until the user picks 0 in the main menu or input ends.
    pub fn run(&mut self) -> Result<(), DriverError> {
        loop {
            writeln!(self.output, "\nSelect hashing algorithm:")?;
            for (i, f) in HashFunction::ALL.iter().enumerate() {
                writeln!(self.output, "{}. {}", i + 1, f)?;
            }
            writeln!(self.output, "0. Exit")?;
            let choice: u32 = match self.read_number("Input: ")? {
                Some(n) => n,
                None => return Ok(()),
            };

            if let Some(hash) = HashFunction::from_menu(choice) {
                let key: u32 = match self.read_number("Enter key to insert: ")? {
                    Some(n) => n,
                    None => return Ok(()),
                };
                let value: i32 = match self.read_number("Enter value: ")? {
                    Some(n) => n,
                    None => return Ok(()),
                };
                if !self.collision_menu(key, value, hash)? {
                    return Ok(());
                }
            }

            write!(self.output, "\n{}", self.table)?;
            if choice == 0 {
                return Ok(());
            }
        }
    }

    /// Returns false when input ended inside the menu.
    fn collision_menu(&mut self, key: u32, value: i32, hash: HashFunction) -> Result<bool, DriverError> {
        loop {
            writeln!(self.output, "\nSelect collision handling:")?;
            writeln!(self.output, "1. Linear Probing")?;
            writeln!(self.output, "2. Chaining (Separate Chaining)")?;
            writeln!(self.output, "3. Rehashing (Double Table Size)")?;
            writeln!(self.output, "0. Exit")?;
            let choice: u32 = match self.read_number("Input: ")? {
                Some(n) => n,
                None => return Ok(false),
            };
            if choice == 0 {
                writeln!(self.output, "Exiting collision handling menu.")?;
                return Ok(true);
            }
            match CollisionStrategy::from_menu(choice) {
                Some(strategy) => self.apply(strategy, key, value, hash)?,
                None => writeln!(self.output, "Invalid option!")?,
            }
        }
    }

    fn apply(
        &mut self,
        strategy: CollisionStrategy,
        key: u32,
        value: i32,
        hash: HashFunction,
    ) -> Result<(), DriverError> {
        let now: Instant = Instant::now();
        let result = strategy.insert(&mut self.table, key, value, hash);
        let elapsed: u128 = now.elapsed().as_nanos();

        if strategy == CollisionStrategy::Rehash {
            writeln!(self.output, "\nRehashed to new size: {}", self.table.capacity())?;
        }
        match result {
            Ok(placement) => {
                writeln!(
                    self.output,
                    "Key {} inserted with value {} using {}.",
                    key, value, strategy
                )?;
                if self.verbose {
                    let index: usize = match placement {
                        Placement::Slot(i) | Placement::Chain(i) => i,
                    };
                    writeln!(
                        self.output,
                        "{} index {} in {} ns, load factor {}",
                        hash,
                        index,
                        elapsed,
                        self.table.load_factor()
                    )?;
                }
            }
            Err(err) => writeln!(self.output, "{}", err)?,
        }
        Ok(())
    }

    /// Prompts until a line parses as `T`. `None` means end of input.
    fn read_number<T>(&mut self, prompt: &str) -> Result<Option<T>, DriverError>
    where
        T: FromStr,
    {
        loop {
            write!(self.output, "{}", prompt)?;
            self.output.flush()?;
            self.line.clear();
            if self.input.read_line(&mut self.line)? == 0 {
                return Ok(None);
            }
            match self.line.trim().parse::<T>() {
                Ok(n) => return Ok(Some(n)),
                Err(_) => writeln!(self.output, "Invalid input!")?,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use slot_hashing::{Entry, Slot};
    use std::io::Cursor;

    fn session(script: &str, capacity: usize) -> (Table, String) {
        let mut output: Vec<u8> = Vec::new();
        let table: Table = {
            let mut menu = Menu::new(Cursor::new(script), &mut output, Table::create(capacity), false);
            menu.run().unwrap();
            menu.table().clone()
        };
        (table, String::from_utf8(output).unwrap())
    }

    #[test]
    fn probe_then_rehash_session() {
        // Division, 23 -> 5 probed; Division, 33 -> 7 probed; then rehash with 43 -> 9
        let script: &str = "2\n23\n5\n1\n0\n2\n33\n7\n1\n0\n2\n43\n9\n3\n0\n0\n";
        let (table, out) = session(script, 10);
        assert_eq!(table.capacity(), 20);
        assert_eq!(table.slot(3), &Slot::Occupied(Entry::new(23, 5)));
        assert_eq!(table.slot(13), &Slot::Occupied(Entry::new(33, 7)));
        assert_eq!(table.slot(4), &Slot::Occupied(Entry::new(43, 9)));
        assert!(out.contains("Key 23 inserted with value 5 using Linear Probing."));
        assert!(out.contains("Rehashed to new size: 20"));
        assert!(out.contains("Slot [13]: (33, 7)"));
    }

    #[test]
    fn collision_menu_repeats_until_exit() {
        let script: &str = "3\n1234\n1\n2\n2\n0\n0\n";
        let (table, out) = session(script, 10);
        // folding(1234) = 12 + 34 = 46 -> 6
        assert_eq!(table.chain(6).len(), 2);
        assert!(out.contains("Exiting collision handling menu."));
        assert!(out.contains("  -> (1234, 1)\n  -> (1234, 1)"));
    }

    #[test]
    fn bad_input_is_reported_and_skipped() {
        let script: &str = "9\nabc\n2\n-5\n5\n1\n7\n2\n";
        let (table, out) = session(script, 10);
        assert!(out.contains("Invalid input!"));
        assert!(out.contains("Invalid option!"));
        assert_eq!(table.chain(5).front(), Some(&Entry::new(5, 1)));
        // input ended inside the collision menu
        assert!(!out.contains("Exiting collision handling menu."));
    }

    #[test]
    fn full_table_is_reported() {
        let script: &str = "2\n1\n1\n1\n1\n0\n0\n";
        let (table, out) = session(script, 1);
        assert_eq!(table.occupied_slots(), 1);
        assert!(out.contains("Table is full"));
    }

    #[test]
    fn exit_prints_listing() {
        let (_, out) = session("0\n", 2);
        assert!(out.ends_with("Hash Table:\nSlot [0]: empty\nSlot [1]: empty\n"));
    }
}
