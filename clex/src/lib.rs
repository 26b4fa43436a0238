// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

#![deny(elided_lifetimes_in_paths)]

mod config;
pub mod constants;
mod error;
mod io;
mod lexer;
mod tokenize;

pub use self::{
    config::{ConfigRoot, ConfigSectionLog, ConfigSectionOutput, ConfigSectionScanner},
    error::{ConfigError, SinkError, TokenizeError},
    io::{OutputFormat, ReaderSource, Sink, Source, StrSource, TraceWriter},
    lexer::{
        CharClass,
        Keyword,
        Lexer,
        Operator,
        OverflowPolicy,
        ScanDiagnostic,
        ScanDiagnosticKind,
        ScanOptions,
        Scanner,
        Token,
        TokenKind,
    },
    tokenize::{tokenize, ScanReport},
};
