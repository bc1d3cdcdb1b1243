use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum InsertError {
    #[error("Table is full: all {capacity} slots are occupied")]
    TableFull { capacity: usize },
}
