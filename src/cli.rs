use clap::{Parser, Subcommand};
use slot_hashing::DEFAULT_CAPACITY;

#[derive(Parser)]
#[command(
    name = "slot_hashing",
    about = "Interactive integer hash table: five hash functions, three collision strategies",
    version
)]
pub struct Cli {
    /// Initial number of slots (and chains).
    #[arg(long, global = true, default_value_t = DEFAULT_CAPACITY, value_parser = parse_capacity)]
    pub capacity: usize,
    /// Print insert and rehash timings.
    #[arg(long, global = true)]
    pub verbose: bool,
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Menu-driven session on stdin/stdout (the default).
    Interactive,
    /// Time every hash function and strategy on random keys.
    Bench {
        #[arg(long, default_value_t = 10_000)]
        samples: usize,
    },
}

fn parse_capacity(s: &str) -> Result<usize, String> {
    match s.parse::<usize>() {
        Ok(0) => Err("capacity must be positive".to_string()),
        Ok(n) => Ok(n),
        Err(err) => Err(err.to_string()),
    }
}
