// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::{error::Error, fmt::Display};

use strum::AsRefStr;
use thiserror::Error;

/// A recoverable problem with one token. Scanning carries on past it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScanDiagnostic {
    /// The part of the offending token that was kept.
    pub text: String,
    pub kind: ScanDiagnosticKind,
}

impl Display for ScanDiagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (`{}...`)", self.kind, self.text)
    }
}

impl Error for ScanDiagnostic {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, AsRefStr)]
#[strum(serialize_all = "kebab-case")]
pub enum ScanDiagnosticKind {
    #[error("token of {length} characters exceeds the maximum of {max}")]
    TokenTooLong { length: usize, max: usize },
}

impl ScanDiagnosticKind {
    #[must_use]
    pub fn name(&self) -> &str {
        self.as_ref()
    }
}
