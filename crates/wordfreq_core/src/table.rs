use std::collections::HashMap;
use std::iter::{FusedIterator, Rev};
use std::slice;

use crate::error::AllocationError;
use crate::word::Word;

/// A word and the number of times it has been seen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    word: Word,
    count: u64,
}

impl Entry {
    pub fn word(&self) -> &Word {
        &self.word
    }

    /// Occurrence count; always at least 1 and saturates at `u64::MAX`.
    pub fn count(&self) -> u64 {
        self.count
    }
}

/// Word-to-count table with a stable iteration order.
///
/// Entries are kept in discovery order with a hash index on the side, so
/// lookups are O(1) and iteration never depends on hashing. [`WordTable::entries`]
/// yields the most recently discovered word first, matching a list that
/// inserts every new word right after its head.
#[derive(Debug, Clone, Default)]
pub struct WordTable {
    entries: Vec<Entry>,
    index: HashMap<Word, usize>,
}

impl WordTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty table with room for `capacity` distinct words.
    pub fn try_with_capacity(capacity: usize) -> Result<Self, AllocationError> {
        let mut table = Self::new();
        table
            .entries
            .try_reserve(capacity)
            .map_err(|_| AllocationError::Entry)?;
        table
            .index
            .try_reserve(capacity)
            .map_err(|_| AllocationError::Entry)?;
        Ok(table)
    }

    pub fn find(&self, word: &str) -> Option<&Entry> {
        self.index.get(word).map(|&slot| &self.entries[slot])
    }

    /// Count one more occurrence of `word`, adding it with count 1 if unseen.
    pub fn insert_or_increment(&mut self, word: &Word) -> Result<(), AllocationError> {
        self.add_occurrences(word, 1)
    }

    /// Count `n` more occurrences of `word`. A zero `n` leaves the table untouched.
    pub fn add_occurrences(&mut self, word: &Word, n: u64) -> Result<(), AllocationError> {
        if n == 0 {
            return Ok(());
        }
        if let Some(&slot) = self.index.get(word.as_str()) {
            let entry = &mut self.entries[slot];
            entry.count = entry.count.saturating_add(n);
            return Ok(());
        }

        self.entries
            .try_reserve(1)
            .map_err(|_| AllocationError::Entry)?;
        self.index
            .try_reserve(1)
            .map_err(|_| AllocationError::Entry)?;
        let key = word.try_clone()?;
        let stored = word.try_clone()?;

        self.index.insert(key, self.entries.len());
        self.entries.push(Entry {
            word: stored,
            count: n,
        });
        Ok(())
    }

    /// Fold every entry of `other` into this table, summing shared words.
    pub fn merge(&mut self, other: WordTable) -> Result<(), AllocationError> {
        for entry in other.entries {
            self.add_occurrences(&entry.word, entry.count)?;
        }
        Ok(())
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts, i.e. the number of words fed into the table.
    pub fn total(&self) -> u64 {
        self.entries
            .iter()
            .fold(0u64, |acc, e| acc.saturating_add(e.count))
    }

    /// Entries in table order: most recently discovered word first.
    pub fn entries(&self) -> Entries<'_> {
        Entries {
            inner: self.entries.iter().rev(),
        }
    }

    /// Entries in the order their words were first seen.
    pub fn entries_first_seen(&self) -> slice::Iter<'_, Entry> {
        self.entries.iter()
    }

    /// Release the table. Ownership makes a second release impossible.
    pub fn destroy(self) {
        drop(self);
    }
}

impl<'a> IntoIterator for &'a WordTable {
    type Item = &'a Entry;
    type IntoIter = Entries<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries()
    }
}

/// Iterator over a [`WordTable`] in table order.
#[derive(Debug, Clone)]
pub struct Entries<'a> {
    inner: Rev<slice::Iter<'a, Entry>>,
}

impl<'a> Iterator for Entries<'a> {
    type Item = &'a Entry;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for Entries<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl ExactSizeIterator for Entries<'_> {}

impl FusedIterator for Entries<'_> {}
