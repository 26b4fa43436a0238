// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use super::Operator;

/// How the scanner treats a single input character. The variants are listed
/// in the order they are checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    /// Ends the current token and is swallowed.
    Delimiter,

    /// Ends the current token and becomes a token of its own.
    Operator(Operator),

    Digit,

    /// ASCII letter or underscore.
    Word,

    /// Consumed without any effect.
    Other,
}

impl CharClass {
    #[must_use]
    pub const fn of(c: char) -> Self {
        if is_delimiter(c) {
            return Self::Delimiter;
        }

        if let Some(operator) = Operator::from_char(c) {
            return Self::Operator(operator);
        }

        if c.is_ascii_digit() {
            Self::Digit
        } else if c.is_ascii_alphabetic() || c == '_' {
            Self::Word
        } else {
            Self::Other
        }
    }
}

const fn is_delimiter(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | ';' | '(' | ')' | '{' | '}')
}
