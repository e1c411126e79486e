//! Wordfreq engine: tokenizing input streams, counting sessions and output.
mod output;
mod persist;
mod session;
mod tokenizer;
mod types;

pub use output::{write_entries, write_entries_json, write_table, write_total};
pub use persist::{ensure_output_dir, write_file_atomically, AtomicFileWriter, PersistError};
pub use session::{
    count_paths, count_reader, CountSettings, CountSummary, OverlongPolicy, DEFAULT_MAX_WORD_LEN,
};
pub use tokenizer::Tokenizer;
pub use types::{CountError, OutputError, OutputFormat, TokenizeError};

pub use wordfreq_core::{AllocationError, Entry, InvalidWord, Word, WordTable};
