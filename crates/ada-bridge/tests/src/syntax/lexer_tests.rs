use super::*;

fn lex(input: &str) -> Vec<(SyntaxKind, &str)> {
    Lexer::new(input).collect()
}

#[test]
fn test_keywords_are_case_insensitive() {
    let tokens = lex("Procedure Foo IS");
    assert_eq!(
        tokens,
        vec![
            (SyntaxKind::Keyword, "Procedure"),
            (SyntaxKind::Whitespace, " "),
            (SyntaxKind::Ident, "Foo"),
            (SyntaxKind::Whitespace, " "),
            (SyntaxKind::Keyword, "IS"),
        ]
    );
}

#[test]
fn test_identifiers() {
    let tokens = lex("Small_Int Größe X1");
    assert_eq!(
        tokens,
        vec![
            (SyntaxKind::Ident, "Small_Int"),
            (SyntaxKind::Whitespace, " "),
            (SyntaxKind::Ident, "Größe"),
            (SyntaxKind::Whitespace, " "),
            (SyntaxKind::Ident, "X1"),
        ]
    );
}

#[test]
fn test_comment_runs_to_end_of_line() {
    let tokens = lex("X; -- not a Reference\nY");
    assert_eq!(
        tokens,
        vec![
            (SyntaxKind::Ident, "X"),
            (SyntaxKind::Semicolon, ";"),
            (SyntaxKind::Whitespace, " "),
            (SyntaxKind::Comment, "-- not a Reference"),
            (SyntaxKind::Whitespace, "\n"),
            (SyntaxKind::Ident, "Y"),
        ]
    );
}

#[test]
fn test_attribute_tick_and_character_literal() {
    let tokens = lex("X'First = 'a'");
    assert_eq!(
        tokens,
        vec![
            (SyntaxKind::Ident, "X"),
            (SyntaxKind::Tick, "'"),
            (SyntaxKind::Ident, "First"),
            (SyntaxKind::Whitespace, " "),
            (SyntaxKind::Equal, "="),
            (SyntaxKind::Whitespace, " "),
            (SyntaxKind::Char, "'a'"),
        ]
    );
}

#[test]
fn test_qualified_expression_tick() {
    let tokens = lex("T'('a')");
    assert_eq!(
        tokens,
        vec![
            (SyntaxKind::Ident, "T"),
            (SyntaxKind::Tick, "'"),
            (SyntaxKind::LParen, "("),
            (SyntaxKind::Char, "'a'"),
            (SyntaxKind::RParen, ")"),
        ]
    );
}

#[test]
fn test_tick_after_parenthesis_and_all() {
    let tokens = lex("F (X)'(')') P.ALL'Access");
    let significant: Vec<_> = tokens.into_iter().filter(|(kind, _)| !kind.is_trivia()).collect();
    assert_eq!(
        significant,
        vec![
            (SyntaxKind::Ident, "F"),
            (SyntaxKind::LParen, "("),
            (SyntaxKind::Ident, "X"),
            (SyntaxKind::RParen, ")"),
            (SyntaxKind::Tick, "'"),
            (SyntaxKind::LParen, "("),
            (SyntaxKind::Char, "')'"),
            (SyntaxKind::RParen, ")"),
            (SyntaxKind::Ident, "P"),
            (SyntaxKind::Dot, "."),
            (SyntaxKind::Keyword, "ALL"),
            (SyntaxKind::Tick, "'"),
            (SyntaxKind::Ident, "Access"),
        ]
    );
}

#[test]
fn test_character_literal_outside_names() {
    let tokens = lex("when 'x' => Put (C, ''');");
    let chars: Vec<_> = tokens.into_iter().filter(|(kind, _)| *kind == SyntaxKind::Char).collect();
    assert_eq!(chars, vec![(SyntaxKind::Char, "'x'"), (SyntaxKind::Char, "'''")]);
}

#[test]
fn test_literals() {
    let tokens = lex(r#"16#FF# 3.14 "say ""hi""""#);
    assert_eq!(
        tokens,
        vec![
            (SyntaxKind::Numeric, "16#FF#"),
            (SyntaxKind::Whitespace, " "),
            (SyntaxKind::Numeric, "3.14"),
            (SyntaxKind::Whitespace, " "),
            (SyntaxKind::String, r#""say ""hi""""#),
        ]
    );
}

#[test]
fn test_compound_delimiters() {
    let tokens = lex(":= => <> /= ** <<");
    let kinds: Vec<_> = tokens.into_iter().map(|(kind, _)| kind).filter(|kind| !kind.is_trivia()).collect();
    assert_eq!(
        kinds,
        vec![
            SyntaxKind::Assign,
            SyntaxKind::Arrow,
            SyntaxKind::Box,
            SyntaxKind::NotEqual,
            SyntaxKind::StarStar,
            SyntaxKind::LLabel,
        ]
    );
}

#[test]
fn test_unknown_character_is_error() {
    let tokens = lex("A # B");
    assert_eq!(tokens[2], (SyntaxKind::Error, "#"));
    assert_eq!(tokens.len(), 5);
}
