// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::{collections::VecDeque, io::Write};

use crate::{SinkError, Token};

use super::OutputFormat;

/// Receives tokens in the order they are produced.
pub trait Sink {
    fn accept(&mut self, token: Token) -> Result<(), SinkError>;

    /// Called once after the last token.
    fn finish(&mut self) -> Result<(), SinkError> {
        Ok(())
    }
}

impl<S: Sink + ?Sized> Sink for &mut S {
    fn accept(&mut self, token: Token) -> Result<(), SinkError> {
        (**self).accept(token)
    }

    fn finish(&mut self) -> Result<(), SinkError> {
        (**self).finish()
    }
}

impl Sink for Vec<Token> {
    fn accept(&mut self, token: Token) -> Result<(), SinkError> {
        self.push(token);
        Ok(())
    }
}

impl Sink for VecDeque<Token> {
    fn accept(&mut self, token: Token) -> Result<(), SinkError> {
        self.push_back(token);
        Ok(())
    }
}

/// Writes one line per token.
#[derive(Debug)]
pub struct TraceWriter<W> {
    writer: W,
    format: OutputFormat,
}

impl<W: Write> TraceWriter<W> {
    #[must_use]
    pub fn new(writer: W, format: OutputFormat) -> Self {
        Self {
            writer,
            format,
        }
    }

    #[must_use]
    pub const fn format(&self) -> OutputFormat {
        self.format
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> Sink for TraceWriter<W> {
    fn accept(&mut self, token: Token) -> Result<(), SinkError> {
        let result = match self.format {
            OutputFormat::Trace => writeln!(self.writer, "Token: Type={}, Value={}", token.kind.ordinal(), token.text),
            OutputFormat::Tabular => writeln!(self.writer, "{}\t{}", token.kind, token.text),
        };

        result.map_err(SinkError::Write)
    }

    fn finish(&mut self) -> Result<(), SinkError> {
        self.writer.flush().map_err(SinkError::Write)
    }
}
