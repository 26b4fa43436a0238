// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::num::NonZeroUsize;

use serde::Deserialize;

/// What happens to a token that grows past [`ScanOptions::max_token_length`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[derive(strum::AsRefStr, strum::EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum OverflowPolicy {
    /// Emit the first `max` characters.
    #[default]
    Truncate,

    /// Drop the token entirely.
    Reject,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanOptions {
    /// Classify runs starting with a digit as [`Literal`](super::TokenKind::Literal)
    /// instead of [`Identifier`](super::TokenKind::Identifier).
    pub numeric_literals: bool,

    /// Emit a token still being accumulated when the input runs out.
    pub flush_at_end: bool,

    pub max_token_length: Option<NonZeroUsize>,
    pub overflow: OverflowPolicy,
}

impl ScanOptions {
    /// Digit runs become identifiers and an unterminated final token is lost.
    #[must_use]
    pub const fn legacy() -> Self {
        Self {
            numeric_literals: false,
            flush_at_end: false,
            max_token_length: None,
            overflow: OverflowPolicy::Truncate,
        }
    }

    #[must_use]
    pub const fn corrected() -> Self {
        Self {
            numeric_literals: true,
            flush_at_end: true,
            ..Self::legacy()
        }
    }

    #[must_use]
    pub const fn with_max_token_length(self, max: NonZeroUsize, overflow: OverflowPolicy) -> Self {
        Self {
            max_token_length: Some(max),
            overflow,
            ..self
        }
    }
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            flush_at_end: true,
            ..Self::legacy()
        }
    }
}
