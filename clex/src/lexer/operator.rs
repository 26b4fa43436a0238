// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::fmt::{Display, Formatter};

use strum::IntoStaticStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IntoStaticStr, strum::EnumIter)]
pub enum Operator {
    #[strum(serialize = "plus")]
    PlusSign,
    #[strum(serialize = "minus")]
    HyphenMinus,
    #[strum(serialize = "asterisk")]
    Asterisk,
    #[strum(serialize = "solidus")]
    Solidus,
    #[strum(serialize = "assignment")]
    Assignment,
}

impl Operator {
    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Self::PlusSign),
            '-' => Some(Self::HyphenMinus),
            '*' => Some(Self::Asterisk),
            '/' => Some(Self::Solidus),
            '=' => Some(Self::Assignment),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_char(&self) -> char {
        match self {
            Self::PlusSign => '+',
            Self::HyphenMinus => '-',
            Self::Asterisk => '*',
            Self::Solidus => '/',
            Self::Assignment => '=',
        }
    }

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::PlusSign => "+",
            Self::HyphenMinus => "-",
            Self::Asterisk => "*",
            Self::Solidus => "/",
            Self::Assignment => "=",
        }
    }

    #[must_use]
    pub fn name(&self) -> &'static str {
        self.into()
    }
}

impl Display for Operator {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
