// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

/// Bytes per read.
pub const DEFAULT_CHUNK_SIZE: usize = 99;

pub const DEFAULT_OUTPUT_PATH: &str = "output.txt";

pub const DEFAULT_CONFIG_FILE: &str = "clex.toml";
