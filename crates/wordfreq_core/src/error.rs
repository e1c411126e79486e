use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AllocationError {
    #[error("failed to reserve storage for a new table entry")]
    Entry,
    #[error("failed to reserve {len} bytes for a word copy")]
    Word { len: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidWord {
    #[error("word is empty")]
    Empty,
    #[error("non-alphabetic byte {byte:#04x} at offset {offset}")]
    NonAlphabetic { byte: u8, offset: usize },
    #[error("byte {byte:#04x} at offset {offset} is not a lowercase letter")]
    NotFolded { byte: u8, offset: usize },
}
