// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::fmt::{Display, Formatter};

use strum::IntoEnumIterator;

/// The discriminants are part of the trace format and must not be reordered.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[derive(strum::AsRefStr, strum::EnumIter, strum::EnumCount)]
#[strum(serialize_all = "snake_case")]
pub enum TokenKind {
    Identifier = 0,
    Keyword = 1,
    Operator = 2,
    Literal = 3,
    Unknown = 4,
}

impl TokenKind {
    pub fn iter_variants() -> impl Iterator<Item = Self> {
        Self::iter()
    }

    #[must_use]
    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    #[must_use]
    pub fn name(&self) -> &str {
        self.as_ref()
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
