// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::time::{Duration, Instant};

use strum::EnumCount;

use crate::{ScanDiagnostic, ScanOptions, Scanner, Sink, SinkError, Source, Token, TokenKind, TokenizeError};

/// Runs one full pass: every chunk of `source` is scanned and every token
/// is written to `sink`, which is finished before returning.
pub fn tokenize<Src, Snk>(source: &mut Src, sink: &mut Snk, options: ScanOptions) -> Result<ScanReport, TokenizeError>
        where Src: Source + ?Sized,
              Snk: Sink + ?Sized {
    let started = Instant::now();

    let mut scanner = Scanner::new(options);
    log::debug!("Scanning with {:?}", scanner.options());
    let mut sink = CountingSink {
        inner: sink,
        counts: [0; TokenKind::COUNT],
    };

    let mut chunk = String::new();
    let mut characters = 0;
    let mut chunks = 0;

    while source.read_chunk(&mut chunk).map_err(TokenizeError::Read)? {
        chunks += 1;

        for c in chunk.chars() {
            characters += 1;
            scanner.feed(c, &mut sink)?;
        }
    }

    scanner.finish(&mut sink)?;
    sink.finish()?;

    log::debug!("Read {characters} characters in {chunks} chunks");

    let report = ScanReport {
        counts: sink.counts,
        characters,
        chunks,
        diagnostics: scanner.take_diagnostics(),
        elapsed: started.elapsed(),
    };

    log::info!("Scanned {} tokens in {:?}", report.total(), report.elapsed);
    Ok(report)
}

struct CountingSink<'sink, S: ?Sized> {
    inner: &'sink mut S,
    counts: [usize; TokenKind::COUNT],
}

impl<S: Sink + ?Sized> Sink for CountingSink<'_, S> {
    fn accept(&mut self, token: Token) -> Result<(), SinkError> {
        self.counts[usize::from(token.kind.ordinal())] += 1;
        self.inner.accept(token)
    }

    fn finish(&mut self) -> Result<(), SinkError> {
        self.inner.finish()
    }
}

#[derive(Debug, Clone)]
pub struct ScanReport {
    counts: [usize; TokenKind::COUNT],
    characters: usize,
    chunks: usize,
    diagnostics: Vec<ScanDiagnostic>,
    elapsed: Duration,
}

impl ScanReport {
    #[must_use]
    pub fn count(&self, kind: TokenKind) -> usize {
        self.counts[usize::from(kind.ordinal())]
    }

    pub fn counts(&self) -> impl Iterator<Item = (TokenKind, usize)> + '_ {
        TokenKind::iter_variants().map(|kind| (kind, self.count(kind)))
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    #[must_use]
    pub const fn characters(&self) -> usize {
        self.characters
    }

    #[must_use]
    pub const fn chunks(&self) -> usize {
        self.chunks
    }

    #[must_use]
    pub fn diagnostics(&self) -> &[ScanDiagnostic] {
        &self.diagnostics
    }

    #[must_use]
    pub const fn elapsed(&self) -> Duration {
        self.elapsed
    }
}
