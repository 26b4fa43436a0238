// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use clex::{Keyword, Operator, ScanOptions, Token, TokenKind};
use pretty_assertions::assert_eq;
use rstest::rstest;
use tests::{scan, scan_chunked, scan_with};

#[rstest]
#[case("int x = 5;", &[
    Token::keyword(Keyword::Int),
    Token::identifier("x"),
    Token::operator(Operator::Assignment),
    Token::identifier("5"),
])]
#[case("a+b", &[
    Token::identifier("a"),
    Token::operator(Operator::PlusSign),
    Token::identifier("b"),
])]
#[case("foo(bar)", &[
    Token::identifier("foo"),
    Token::identifier("bar"),
])]
#[case("x", &[
    Token::identifier("x"),
])]
fn default_scenarios(#[case] input: &str, #[case] expected: &[Token]) {
    assert_eq!(scan(input), expected);
}

#[rstest]
#[case("int x = 5;", &[
    Token::keyword(Keyword::Int),
    Token::identifier("x"),
    Token::operator(Operator::Assignment),
    Token::identifier("5"),
])]
#[case("a+b", &[
    Token::identifier("a"),
    Token::operator(Operator::PlusSign),
])]
#[case("foo(bar)", &[
    Token::identifier("foo"),
    Token::identifier("bar"),
])]
#[case("x", &[])]
fn legacy_scenarios(#[case] input: &str, #[case] expected: &[Token]) {
    assert_eq!(scan_with(input, ScanOptions::legacy()), expected);
}

#[test]
fn corrected_scenario_emits_literal() {
    assert_eq!(scan_with("int x = 5;", ScanOptions::corrected()), vec![
        Token::keyword(Keyword::Int),
        Token::identifier("x"),
        Token::operator(Operator::Assignment),
        Token::literal("5"),
    ]);
}

#[test]
fn all_keywords_in_order() {
    let input = Keyword::iter_variants()
        .map(|keyword| keyword.as_str())
        .collect::<Vec<_>>()
        .join(" ");

    let tokens = scan(&input);

    assert_eq!(tokens.len(), 32);
    assert!(tokens.iter().all(|token| token.kind == TokenKind::Keyword));
    assert_eq!(tokens.iter().map(|token| token.text.as_str()).collect::<Vec<_>>().join(" "), input);
}

#[rstest]
fn operators_without_neighbours(#[values('+', '-', '*', '/', '=')] operator: char, #[values("", " ", ";", "(")] around: &str) {
    let input = format!("{around}{operator}{around}");
    let tokens = scan(&input);

    assert_eq!(tokens, vec![Token::new(TokenKind::Operator, operator.to_string())]);
}

#[rstest]
#[case("")]
#[case("   ")]
#[case("\n\n\t;;{}()")]
fn nothing_to_emit(#[case] input: &str) {
    assert_eq!(scan(input), Vec::new());
}

#[test]
fn scanning_twice_gives_the_same_tokens() {
    let input = "for (i = 0; i < n; i = i + 1) { sum = sum + i; }";
    assert_eq!(scan(input), scan(input));
}

#[rstest]
fn chunk_size_does_not_matter(#[values(1, 2, 3, 5, 8, 99, 4096)] chunk_size: usize) {
    let input = "unsigned long total = counter_value*factor-offset/2;\ntypedef struct node { int v; } node_t;\nlast";
    let expected = scan_with(input, ScanOptions::corrected());

    assert_eq!(scan_chunked(input, ScanOptions::corrected(), chunk_size), expected);
}
