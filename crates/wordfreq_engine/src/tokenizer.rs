use std::io::{self, BufRead};

use wordfreq_core::Word;
use wordfreq_logging::wf_trace;

use crate::TokenizeError;

/// Lazily splits a byte stream into lowercase ASCII words.
///
/// Every byte that is not an ASCII letter separates words. Words longer than
/// the configured maximum are rejected with [`TokenizeError::WordTooLong`],
/// never truncated; the rest of such a run is consumed so the next call
/// starts at the following word.
pub struct Tokenizer<R> {
    reader: R,
    max_len: Option<usize>,
    failure: Option<(io::ErrorKind, String)>,
    finished: bool,
}

impl<R: BufRead> Tokenizer<R> {
    /// Tokenizer that rejects words longer than `max_len` letters.
    ///
    /// A `max_len` of 0 rejects every word.
    pub fn new(reader: R, max_len: usize) -> Self {
        Self::with_limit(reader, Some(max_len))
    }

    /// Tokenizer that accepts words of any length.
    pub fn unbounded(reader: R) -> Self {
        Self::with_limit(reader, None)
    }

    fn with_limit(reader: R, max_len: Option<usize>) -> Self {
        Self {
            reader,
            max_len,
            failure: None,
            finished: false,
        }
    }

    pub fn max_len(&self) -> Option<usize> {
        self.max_len
    }

    /// Read the next word. `Ok(None)` means the stream is exhausted.
    ///
    /// Once the reader has failed, every later call fails without reading.
    pub fn next_word(&mut self) -> Result<Option<Word>, TokenizeError> {
        if let Some((kind, message)) = &self.failure {
            return Err(TokenizeError::Stream(io::Error::new(
                *kind,
                format!("stream failed earlier: {message}"),
            )));
        }

        let first = loop {
            match self.read_byte()? {
                None => return Ok(None),
                Some(byte) if byte.is_ascii_alphabetic() => break byte,
                Some(_) => {}
            }
        };

        let mut letters = vec![first.to_ascii_lowercase()];
        let mut overlong = self.exceeds(letters.len());
        while let Some(byte) = self.read_byte()? {
            if !byte.is_ascii_alphabetic() {
                break;
            }
            if overlong {
                continue;
            }
            if self.exceeds(letters.len() + 1) {
                overlong = true;
                letters.clear();
            } else {
                letters.push(byte.to_ascii_lowercase());
            }
        }

        match self.max_len {
            Some(max_len) if overlong => Err(TokenizeError::WordTooLong { max_len }),
            _ => Word::from_folded(letters)
                .map(Some)
                .map_err(TokenizeError::Malformed),
        }
    }

    pub fn into_inner(self) -> R {
        self.reader
    }

    fn exceeds(&self, len: usize) -> bool {
        self.max_len.is_some_and(|max| len > max)
    }

    fn read_byte(&mut self) -> Result<Option<u8>, TokenizeError> {
        loop {
            let byte = match self.reader.fill_buf() {
                Ok(buf) => buf.first().copied(),
                Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
                Err(err) => {
                    wf_trace!("Reader failed, tokenizer is now poisoned: {}", err);
                    self.failure = Some((err.kind(), err.to_string()));
                    return Err(TokenizeError::Stream(err));
                }
            };
            if byte.is_some() {
                self.reader.consume(1);
            }
            return Ok(byte);
        }
    }
}

impl<R: BufRead> Iterator for Tokenizer<R> {
    type Item = Result<Word, TokenizeError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        match self.next_word() {
            Ok(Some(word)) => Some(Ok(word)),
            Ok(None) => {
                self.finished = true;
                None
            }
            Err(err) => {
                if matches!(err, TokenizeError::Stream(_)) {
                    self.finished = true;
                }
                Some(Err(err))
            }
        }
    }
}
