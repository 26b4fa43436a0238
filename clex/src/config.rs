// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::{num::NonZeroUsize, path::{Path, PathBuf}};

use serde::Deserialize;

use crate::{
    constants::{DEFAULT_CHUNK_SIZE, DEFAULT_OUTPUT_PATH},
    ConfigError,
    OutputFormat,
    OverflowPolicy,
    ScanOptions,
};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
#[serde(rename_all = "kebab-case")]
pub struct ConfigRoot {
    pub log: ConfigSectionLog,
    pub scanner: ConfigSectionScanner,
    pub output: ConfigSectionOutput,
}

impl ConfigRoot {
    pub fn from_toml(input: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(input)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        let contents = std::fs::read_to_string(path)
            .map_err(|source| ConfigError::Read { path: path.to_path_buf(), source })?;

        let config = Self::from_toml(&contents)
            .map_err(|source| ConfigError::Parse { path: path.to_path_buf(), source })?;

        log::debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
#[serde(rename_all = "kebab-case")]
pub struct ConfigSectionLog {
    pub debug: bool,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
#[serde(rename_all = "kebab-case")]
pub struct ConfigSectionScanner {
    pub numeric_literals: bool,
    pub flush_at_end: bool,
    pub max_token_length: Option<NonZeroUsize>,
    pub overflow: OverflowPolicy,
    pub chunk_size: usize,
}

impl ConfigSectionScanner {
    #[must_use]
    pub fn scan_options(&self) -> ScanOptions {
        ScanOptions {
            numeric_literals: self.numeric_literals,
            flush_at_end: self.flush_at_end,
            max_token_length: self.max_token_length,
            overflow: self.overflow,
        }
    }
}

impl Default for ConfigSectionScanner {
    fn default() -> Self {
        let options = ScanOptions::default();

        Self {
            numeric_literals: options.numeric_literals,
            flush_at_end: options.flush_at_end,
            max_token_length: options.max_token_length,
            overflow: options.overflow,
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
#[serde(rename_all = "kebab-case")]
pub struct ConfigSectionOutput {
    pub path: PathBuf,
    pub format: OutputFormat,
}

impl Default for ConfigSectionOutput {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            format: OutputFormat::default(),
        }
    }
}
