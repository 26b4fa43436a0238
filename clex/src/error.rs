// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::{io, path::PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SinkError {
    #[error("could not write token")]
    Write(#[source] io::Error),
}

/// Ends a tokenization pass. Recoverable per-token problems are reported as
/// [`ScanDiagnostic`](crate::ScanDiagnostic)s instead.
#[derive(Debug, Error)]
pub enum TokenizeError {
    #[error("could not read input")]
    Read(#[source] io::Error),

    #[error(transparent)]
    Sink(#[from] SinkError),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read configuration file `{}`", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid configuration in `{}`", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}
