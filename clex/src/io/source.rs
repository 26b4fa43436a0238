// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::io::{self, ErrorKind, Read};

use crate::constants::DEFAULT_CHUNK_SIZE;

/// Something that hands out the input a chunk at a time.
pub trait Source {
    /// Replaces the contents of `buf` with the next chunk. Returns `false`
    /// once the stream is exhausted, in which case `buf` is left empty.
    fn read_chunk(&mut self, buf: &mut String) -> io::Result<bool>;
}

impl<S: Source + ?Sized> Source for &mut S {
    fn read_chunk(&mut self, buf: &mut String) -> io::Result<bool> {
        (**self).read_chunk(buf)
    }
}

/// In-memory input, split into chunks of `chunk_size` characters.
#[derive(Debug, Clone)]
pub struct StrSource<'source_code> {
    remaining: &'source_code str,
    chunk_size: usize,
}

impl<'source_code> StrSource<'source_code> {
    #[must_use]
    pub fn new(input: &'source_code str) -> Self {
        Self::with_chunk_size(input, DEFAULT_CHUNK_SIZE)
    }

    #[must_use]
    pub fn with_chunk_size(input: &'source_code str, chunk_size: usize) -> Self {
        Self {
            remaining: input,
            chunk_size: chunk_size.max(1),
        }
    }
}

impl Source for StrSource<'_> {
    fn read_chunk(&mut self, buf: &mut String) -> io::Result<bool> {
        buf.clear();

        if self.remaining.is_empty() {
            return Ok(false);
        }

        let end = self.remaining
            .char_indices()
            .nth(self.chunk_size)
            .map(|(offset, _)| offset)
            .unwrap_or(self.remaining.len());

        let (chunk, rest) = self.remaining.split_at(end);
        buf.push_str(chunk);
        self.remaining = rest;

        Ok(true)
    }
}

/// Input from any [`Read`], `chunk_size` bytes at a time.
///
/// Every byte becomes exactly one `char` (Latin-1), so a multi-byte UTF-8
/// sequence turns into characters the scanner ignores.
#[derive(Debug)]
pub struct ReaderSource<R> {
    reader: R,
    chunk: Vec<u8>,
}

impl<R: Read> ReaderSource<R> {
    #[must_use]
    pub fn new(reader: R) -> Self {
        Self::with_chunk_size(reader, DEFAULT_CHUNK_SIZE)
    }

    #[must_use]
    pub fn with_chunk_size(reader: R, chunk_size: usize) -> Self {
        Self {
            reader,
            chunk: vec![0; chunk_size.max(1)],
        }
    }

    pub fn into_inner(self) -> R {
        self.reader
    }
}

impl<R: Read> Source for ReaderSource<R> {
    fn read_chunk(&mut self, buf: &mut String) -> io::Result<bool> {
        buf.clear();

        loop {
            match self.reader.read(&mut self.chunk) {
                Ok(0) => return Ok(false),
                Ok(n) => {
                    buf.extend(self.chunk[..n].iter().copied().map(char::from));
                    return Ok(true);
                }
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn chunks(mut source: impl Source) -> Vec<String> {
        let mut chunks = Vec::new();
        let mut buf = String::new();

        while source.read_chunk(&mut buf).unwrap() {
            chunks.push(buf.clone());
        }

        assert!(buf.is_empty());
        chunks
    }

    #[rstest]
    #[case("", 3, &[])]
    #[case("abc", 3, &["abc"])]
    #[case("abcdefg", 3, &["abc", "def", "g"])]
    #[case("ab", 0, &["a", "b"])]
    #[case("héllo", 2, &["hé", "ll", "o"])]
    fn str_source_chunks(#[case] input: &str, #[case] chunk_size: usize, #[case] expected: &[&str]) {
        assert_eq!(chunks(StrSource::with_chunk_size(input, chunk_size)), expected);
    }

    #[test]
    fn reader_source_chunks() {
        let input: &[u8] = b"int main";
        assert_eq!(chunks(ReaderSource::with_chunk_size(input, 3)), ["int", " ma", "in"]);
    }

    #[test]
    fn reader_source_maps_bytes_to_latin1() {
        let input: &[u8] = "é".as_bytes();
        assert_eq!(chunks(ReaderSource::new(input)), ["\u{c3}\u{a9}"]);
    }

    #[test]
    fn reader_source_retries_interrupted_reads() {
        struct Flaky {
            interrupted: bool,
        }

        impl Read for Flaky {
            fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
                if !self.interrupted {
                    self.interrupted = true;
                    return Err(io::Error::from(ErrorKind::Interrupted));
                }

                _ = buf;
                Ok(0)
            }
        }

        let mut source = ReaderSource::new(Flaky { interrupted: false });
        let mut buf = String::new();
        assert!(!source.read_chunk(&mut buf).unwrap());
    }
}
