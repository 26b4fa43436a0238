// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::fmt::{Display, Formatter};

use super::{Keyword, Operator, TokenKind};

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
}

impl Token {
    #[must_use]
    pub fn new(kind: TokenKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    #[must_use]
    pub fn identifier(text: impl Into<String>) -> Self {
        Self::new(TokenKind::Identifier, text)
    }

    #[must_use]
    pub fn keyword(keyword: Keyword) -> Self {
        Self::new(TokenKind::Keyword, keyword.as_str())
    }

    #[must_use]
    pub fn operator(operator: Operator) -> Self {
        Self::new(TokenKind::Operator, operator.as_str())
    }

    #[must_use]
    pub fn literal(text: impl Into<String>) -> Self {
        Self::new(TokenKind::Literal, text)
    }

    #[must_use]
    pub fn unknown(text: impl Into<String>) -> Self {
        Self::new(TokenKind::Unknown, text)
    }
}

impl Token {
    pub fn as_keyword(&self) -> Option<Keyword> {
        if self.kind != TokenKind::Keyword {
            return None;
        }

        Keyword::parse(&self.text)
    }

    pub fn as_operator(&self) -> Option<Operator> {
        if self.kind != TokenKind::Operator {
            return None;
        }

        let mut chars = self.text.chars();
        let operator = Operator::from_char(chars.next()?)?;
        chars.next().is_none().then_some(operator)
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({})", self.kind, self.text)
    }
}
