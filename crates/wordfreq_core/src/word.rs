use std::borrow::Borrow;
use std::fmt;

use crate::error::{AllocationError, InvalidWord};

/// A non-empty run of lowercase ASCII letters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word(String);

impl Word {
    /// Fold `text` to lower case and validate it as a word.
    pub fn parse(text: &str) -> Result<Self, InvalidWord> {
        if text.is_empty() {
            return Err(InvalidWord::Empty);
        }
        if let Some((offset, byte)) = text
            .bytes()
            .enumerate()
            .find(|(_, b)| !b.is_ascii_alphabetic())
        {
            return Err(InvalidWord::NonAlphabetic { byte, offset });
        }
        Ok(Self(text.to_ascii_lowercase()))
    }

    /// Build a word from bytes the tokenizer already folded and validated.
    ///
    /// Fails if `bytes` is empty or holds anything but lowercase letters.
    pub fn from_folded(bytes: Vec<u8>) -> Result<Self, InvalidWord> {
        if bytes.is_empty() {
            return Err(InvalidWord::Empty);
        }
        if let Some((offset, &byte)) = bytes
            .iter()
            .enumerate()
            .find(|(_, b)| !b.is_ascii_lowercase())
        {
            return Err(InvalidWord::NotFolded { byte, offset });
        }
        Ok(Self(bytes.into_iter().map(char::from).collect()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Copy the word, reporting allocation failure instead of aborting.
    pub(crate) fn try_clone(&self) -> Result<Self, AllocationError> {
        let mut copy = String::new();
        copy.try_reserve_exact(self.0.len())
            .map_err(|_| AllocationError::Word { len: self.0.len() })?;
        copy.push_str(&self.0);
        Ok(Self(copy))
    }
}

impl Borrow<str> for Word {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Word {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<&str> for Word {
    type Error = InvalidWord;

    fn try_from(text: &str) -> Result<Self, Self::Error> {
        Self::parse(text)
    }
}
