use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use wordfreq_core::WordTable;
use wordfreq_logging::{wf_debug, wf_info, wf_warn};

use crate::{CountError, OutputFormat, TokenizeError, Tokenizer};

/// Longest word accepted unless configured otherwise.
pub const DEFAULT_MAX_WORD_LEN: usize = 64;

/// What a session does when a word exceeds the length limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OverlongPolicy {
    #[default]
    Abort,
    Skip,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CountSettings {
    /// `None` accepts words of any length.
    pub max_word_len: Option<NonZeroUsize>,
    pub overlong: OverlongPolicy,
    pub format: OutputFormat,
}

impl Default for CountSettings {
    fn default() -> Self {
        Self {
            max_word_len: NonZeroUsize::new(DEFAULT_MAX_WORD_LEN),
            overlong: OverlongPolicy::Abort,
            format: OutputFormat::Tsv,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CountSummary {
    /// Words added to the table.
    pub words: u64,
    /// Over-long runs dropped under [`OverlongPolicy::Skip`].
    pub skipped: u64,
}

/// Tokenize `reader` to the end and count every word into `table`.
pub fn count_reader<R: BufRead>(
    reader: R,
    settings: &CountSettings,
    table: &mut WordTable,
) -> Result<CountSummary, CountError> {
    let mut tokenizer = match settings.max_word_len {
        Some(max_len) => Tokenizer::new(reader, max_len.get()),
        None => Tokenizer::unbounded(reader),
    };
    let mut summary = CountSummary::default();

    loop {
        match tokenizer.next_word() {
            Ok(Some(word)) => {
                table.insert_or_increment(&word)?;
                summary.words += 1;
            }
            Ok(None) => break,
            Err(TokenizeError::WordTooLong { max_len })
                if settings.overlong == OverlongPolicy::Skip =>
            {
                wf_warn!("Skipping word longer than {} letters", max_len);
                summary.skipped += 1;
            }
            Err(err) => return Err(err.into()),
        }
    }

    wf_debug!(
        "Counted {} words ({} distinct so far, {} skipped)",
        summary.words,
        table.len(),
        summary.skipped
    );
    Ok(summary)
}

/// Count every input into one table. An empty list or `-` reads stdin.
///
/// Each input is counted into its own table and merged in argument order.
pub fn count_paths(paths: &[PathBuf], settings: &CountSettings) -> Result<WordTable, CountError> {
    let mut total = WordTable::new();
    if paths.is_empty() {
        let partial = count_input(Path::new("-"), settings)?;
        total.merge(partial)?;
        return Ok(total);
    }

    for path in paths {
        let partial = count_input(path, settings)?;
        total.merge(partial)?;
    }
    wf_info!(
        "Counted {} inputs: {} words, {} distinct",
        paths.len(),
        total.total(),
        total.len()
    );
    Ok(total)
}

fn count_input(path: &Path, settings: &CountSettings) -> Result<WordTable, CountError> {
    let mut table = WordTable::new();
    let summary = if path == Path::new("-") {
        wf_info!("Counting words from stdin");
        count_reader(io::stdin().lock(), settings, &mut table)?
    } else {
        wf_info!("Counting words from {:?}", path);
        let file = File::open(path).map_err(|source| CountError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        count_reader(BufReader::new(file), settings, &mut table)?
    };
    wf_debug!(
        "{:?}: {} words, {} distinct, {} skipped",
        path,
        summary.words,
        table.len(),
        summary.skipped
    );
    Ok(table)
}
