// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::{collections::VecDeque, str::Chars};

use super::{ScanDiagnostic, ScanOptions, Scanner, Token};

/// Pull-style wrapper around the [`Scanner`] for input that is already in
/// memory.
pub struct Lexer<I: Iterator<Item = char>> {
    chars: I,
    scanner: Scanner,
    pending: VecDeque<Token>,
    finished: bool,
}

impl<'source_code> Lexer<Chars<'source_code>> {
    pub fn new(input: &'source_code str) -> Self {
        Self::from_chars(input.chars())
    }
}

impl<I: Iterator<Item = char>> Lexer<I> {
    pub fn from_chars(chars: I) -> Self {
        Self {
            chars,
            scanner: Scanner::default(),
            pending: VecDeque::new(),
            finished: false,
        }
    }

    #[must_use]
    pub fn with_options(self, options: ScanOptions) -> Self {
        Self {
            scanner: Scanner::new(options),
            ..self
        }
    }

    pub fn next(&mut self) -> Option<Token> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Some(token);
            }

            if self.finished {
                return None;
            }

            // Pushing into a deque can't fail.
            match self.chars.next() {
                Some(c) => {
                    _ = self.scanner.feed(c, &mut self.pending);
                }
                None => {
                    self.finished = true;
                    _ = self.scanner.finish(&mut self.pending);
                }
            }
        }
    }

    #[must_use]
    pub fn diagnostics(&self) -> &[ScanDiagnostic] {
        self.scanner.diagnostics()
    }

    pub fn collect_all(mut self) -> (Vec<Token>, Vec<ScanDiagnostic>) {
        let mut tokens = Vec::new();

        while let Some(token) = self.next() {
            tokens.push(token);
        }

        (tokens, self.scanner.take_diagnostics())
    }
}

impl<I: Iterator<Item = char>> Iterator for Lexer<I> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        self.next()
    }
}
