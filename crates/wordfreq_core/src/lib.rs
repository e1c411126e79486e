//! Wordfreq core: the word type and the word-count table.
mod error;
mod table;
mod word;

pub use error::{AllocationError, InvalidWord};
pub use table::{Entries, Entry, WordTable};
pub use word::Word;
