// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::mem::take;

use crate::{Sink, SinkError};

use super::{CharClass, Keyword, OverflowPolicy, ScanDiagnostic, ScanDiagnosticKind, ScanOptions, Token, TokenKind};

/// The classify-and-emit loop. Characters are pushed in one at a time and
/// every token is handed to the sink as soon as its boundary is seen, so
/// the way the input is chunked has no influence on the output.
///
/// The scanner is idle while its buffer is empty and accumulating
/// otherwise; there is no other state.
#[derive(Debug, Default)]
pub struct Scanner {
    options: ScanOptions,

    /// Only ever holds ASCII, so `len()` counts characters.
    buffer: String,

    /// Characters of the current run that did not fit in the buffer.
    overflow: usize,

    diagnostics: Vec<ScanDiagnostic>,
}

impl Scanner {
    #[must_use]
    pub fn new(options: ScanOptions) -> Self {
        Self {
            options,
            buffer: String::new(),
            overflow: 0,
            diagnostics: Vec::new(),
        }
    }

    #[must_use]
    pub const fn options(&self) -> &ScanOptions {
        &self.options
    }

    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.buffer.is_empty() && self.overflow == 0
    }

    #[must_use]
    pub fn diagnostics(&self) -> &[ScanDiagnostic] {
        &self.diagnostics
    }

    pub fn take_diagnostics(&mut self) -> Vec<ScanDiagnostic> {
        take(&mut self.diagnostics)
    }

    pub fn feed<S: Sink + ?Sized>(&mut self, c: char, sink: &mut S) -> Result<(), SinkError> {
        match CharClass::of(c) {
            CharClass::Delimiter => self.flush(sink),

            CharClass::Operator(operator) => {
                self.flush(sink)?;
                self.emit(Token::operator(operator), sink)
            }

            CharClass::Digit | CharClass::Word => {
                self.push(c);
                Ok(())
            }

            CharClass::Other => Ok(()),
        }
    }

    pub fn feed_str<S: Sink + ?Sized>(&mut self, input: &str, sink: &mut S) -> Result<(), SinkError> {
        for c in input.chars() {
            self.feed(c, sink)?;
        }

        Ok(())
    }

    /// Signals the end of the input. What happens to a token that is still
    /// being accumulated depends on [`ScanOptions::flush_at_end`].
    pub fn finish<S: Sink + ?Sized>(&mut self, sink: &mut S) -> Result<(), SinkError> {
        if self.options.flush_at_end {
            return self.flush(sink);
        }

        if !self.is_idle() {
            log::debug!("Discarding unterminated `{}` at end of input", self.buffer);
            self.buffer.clear();
            self.overflow = 0;
        }

        Ok(())
    }

    fn push(&mut self, c: char) {
        match self.options.max_token_length {
            Some(max) if self.buffer.len() >= max.get() => self.overflow += 1,
            _ => self.buffer.push(c),
        }
    }

    fn flush<S: Sink + ?Sized>(&mut self, sink: &mut S) -> Result<(), SinkError> {
        if self.is_idle() {
            return Ok(());
        }

        let text = take(&mut self.buffer);
        let overflow = take(&mut self.overflow);

        if overflow != 0 {
            let max = text.len();
            let length = max + overflow;

            self.diagnostics.push(ScanDiagnostic {
                text: text.clone(),
                kind: ScanDiagnosticKind::TokenTooLong { length, max },
            });

            match self.options.overflow {
                OverflowPolicy::Truncate => {
                    log::warn!("Truncated token `{text}...` from {length} to {max} characters");
                }

                OverflowPolicy::Reject => {
                    log::warn!("Rejected token `{text}...` of {length} characters");
                    return Ok(());
                }
            }
        }

        let kind = self.classify(&text, overflow == 0);
        self.emit(Token::new(kind, text), sink)
    }

    /// A truncated run is never a keyword, even if its prefix spells one.
    fn classify(&self, text: &str, complete: bool) -> TokenKind {
        if complete && Keyword::is_keyword(text) {
            return TokenKind::Keyword;
        }

        let Some(first) = text.chars().next() else {
            return TokenKind::Unknown;
        };

        if self.options.numeric_literals && first.is_ascii_digit() {
            TokenKind::Literal
        } else if first.is_ascii_alphanumeric() {
            TokenKind::Identifier
        } else {
            TokenKind::Unknown
        }
    }

    fn emit<S: Sink + ?Sized>(&mut self, token: Token, sink: &mut S) -> Result<(), SinkError> {
        debug_assert!(!token.text.is_empty());
        log::trace!("Token {token}");
        sink.accept(token)
    }
}
