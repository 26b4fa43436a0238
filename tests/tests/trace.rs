// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::num::NonZeroUsize;

use clex::{tokenize, OutputFormat, OverflowPolicy, ReaderSource, ScanOptions, TokenKind};
use pretty_assertions::assert_eq;
use rstest::rstest;
use tests::{fixture_path, read_fixture, scan, trace};

#[rstest]
#[case("int x = 5;", "\
Token: Type=1, Value=int
Token: Type=0, Value=x
Token: Type=2, Value==
Token: Type=0, Value=5
")]
#[case("a+b", "\
Token: Type=0, Value=a
Token: Type=2, Value=+
Token: Type=0, Value=b
")]
#[case("_x;", "\
Token: Type=4, Value=_x
")]
#[case("", "")]
fn trace_format(#[case] input: &str, #[case] expected: &str) {
    let (output, _) = trace(input, ScanOptions::default(), OutputFormat::Trace);
    assert_eq!(output, expected);
}

#[test]
fn counter_fixture_trace() {
    let input = read_fixture("counter.c");
    let (output, report) = trace(&input, ScanOptions::default(), OutputFormat::Trace);

    assert_eq!(output, read_fixture("counter.trace"));
    assert_eq!(report.total(), output.lines().count());
    assert_eq!(report.count(TokenKind::Literal), 0);
    assert_eq!(report.characters(), input.len());
}

#[test]
fn counter_fixture_tabular_with_literals() {
    let input = read_fixture("counter.c");
    let (output, report) = trace(&input, ScanOptions::corrected(), OutputFormat::Tabular);

    assert_eq!(output, read_fixture("counter.literals.tsv"));
    assert_eq!(report.count(TokenKind::Literal), 5);
    assert_eq!(report.count(TokenKind::Keyword), 8);
}

#[test]
fn long_tokens_are_truncated_in_the_trace() {
    let options = ScanOptions::default()
        .with_max_token_length(NonZeroUsize::new(5).unwrap(), OverflowPolicy::Truncate);

    let (output, report) = trace("an_identifier_that_goes_on = 1;", options, OutputFormat::Trace);

    assert_eq!(output, "\
Token: Type=0, Value=an_id
Token: Type=2, Value==
Token: Type=0, Value=1
");
    assert_eq!(report.diagnostics().len(), 1);
    assert_eq!(report.diagnostics()[0].text, "an_id");
}

#[test]
fn long_tokens_are_rejected_from_the_trace() {
    let options = ScanOptions::default()
        .with_max_token_length(NonZeroUsize::new(5).unwrap(), OverflowPolicy::Reject);

    let (output, report) = trace("an_identifier_that_goes_on = 1;", options, OutputFormat::Trace);

    assert_eq!(output, "\
Token: Type=2, Value==
Token: Type=0, Value=1
");
    assert_eq!(report.diagnostics().len(), 1);
}

#[test]
fn fixture_read_from_disk_matches_in_memory_scan() {
    let file = std::fs::File::open(fixture_path("counter.c")).unwrap();
    let mut source = ReaderSource::new(file);
    let mut tokens = Vec::new();

    let report = tokenize(&mut source, &mut tokens, ScanOptions::default()).unwrap();

    assert_eq!(tokens, scan(&read_fixture("counter.c")));
    assert!(report.chunks() > 1);
}
