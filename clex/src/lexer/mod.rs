// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

mod char_class;
mod diagnostic;
mod keyword;
mod lexer;
mod operator;
mod options;
mod scanner;
mod token;
mod token_kind;

pub use self::{
    char_class::CharClass,
    diagnostic::{
        ScanDiagnostic,
        ScanDiagnosticKind,
    },
    keyword::Keyword,
    lexer::Lexer,
    operator::Operator,
    options::{
        OverflowPolicy,
        ScanOptions,
    },
    scanner::Scanner,
    token::Token,
    token_kind::TokenKind,
};
