// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::{error::Error, io, path::PathBuf};

use clex::{ConfigError, TokenizeError};
use colored::Colorize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Unable to open input file `{}`", path.display())]
    InputUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Unable to create output file `{}`", path.display())]
    OutputUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Tokenization failed")]
    Tokenize(#[from] TokenizeError),
}

impl CliError {
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::InputUnavailable { .. } => 1,
            Self::OutputUnavailable { .. } => 1,
            Self::Config(..) => 1,
            Self::Tokenize(..) => 1,
        }
    }

    pub fn print(&self) {
        eprintln!("{}: {}", "error".red().bold(), self.to_string().bold());

        let mut source = self.source();
        while let Some(cause) = source {
            eprintln!("  {} {cause}", "caused by:".bright_blue());
            source = cause.source();
        }
    }
}
