// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::path::{Path, PathBuf};

use clex::{tokenize, OutputFormat, ReaderSource, ScanOptions, ScanReport, Source, StrSource, Token, TraceWriter};

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).filter(None, log::LevelFilter::max()).try_init();
}

pub fn scan(input: &str) -> Vec<Token> {
    scan_with(input, ScanOptions::default())
}

pub fn scan_with(input: &str, options: ScanOptions) -> Vec<Token> {
    scan_chunked(input, options, clex::constants::DEFAULT_CHUNK_SIZE)
}

pub fn scan_chunked(input: &str, options: ScanOptions, chunk_size: usize) -> Vec<Token> {
    init_logging();

    let mut tokens = Vec::new();
    tokenize(&mut StrSource::with_chunk_size(input, chunk_size), &mut tokens, options).unwrap();
    tokens
}

pub fn trace(input: &str, options: ScanOptions, format: OutputFormat) -> (String, ScanReport) {
    init_logging();

    let mut source = ReaderSource::with_chunk_size(input.as_bytes(), 7);
    let (report, bytes) = run_to_writer(&mut source, options, format);

    (String::from_utf8(bytes).unwrap(), report)
}

fn run_to_writer(source: &mut dyn Source, options: ScanOptions, format: OutputFormat) -> (ScanReport, Vec<u8>) {
    let mut writer = TraceWriter::new(Vec::new(), format);
    let report = tokenize(source, &mut writer, options).unwrap();
    (report, writer.into_inner())
}

#[must_use]
pub fn fixture_path(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures").join(name)
}

pub fn read_fixture(name: &str) -> String {
    std::fs::read_to_string(fixture_path(name)).unwrap()
}
