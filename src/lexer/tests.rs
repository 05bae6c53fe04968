//! Unit tests for the lexer module.

use super::*;
use crate::token::TokenKind;

/// Tokenizes input and returns only the kinds (EOF included).
fn tokenize_kinds(input: &str) -> Vec<TokenKind> {
    let mut lexer = Lexer::new(input);
    lexer.tokenize().into_iter().map(|t| t.kind).collect()
}

#[test]
fn empty_input_is_just_eof() {
    assert_eq!(tokenize_kinds(""), vec![TokenKind::Eof]);
}

#[test]
fn whitespace_only_is_just_eof() {
    assert_eq!(tokenize_kinds("   \n\t"), vec![TokenKind::Eof]);
}

#[test]
fn single_character_punctuation() {
    assert_eq!(
        tokenize_kinds("(){},.-+;*"),
        vec![
            TokenKind::LeftParen,
            TokenKind::RightParen,
            TokenKind::LeftBrace,
            TokenKind::RightBrace,
            TokenKind::Comma,
            TokenKind::Dot,
            TokenKind::Minus,
            TokenKind::Plus,
            TokenKind::Semicolon,
            TokenKind::Star,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn two_character_operators_win_over_their_prefix() {
    assert_eq!(
        tokenize_kinds("! != = == < <= > >="),
        vec![
            TokenKind::Bang,
            TokenKind::BangEqual,
            TokenKind::Equal,
            TokenKind::EqualEqual,
            TokenKind::Less,
            TokenKind::LessEqual,
            TokenKind::Greater,
            TokenKind::GreaterEqual,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn line_comment_is_skipped_to_end_of_line() {
    assert_eq!(
        tokenize_kinds("// a comment\nvar"),
        vec![TokenKind::Var, TokenKind::Eof]
    );
}

#[test]
fn slash_is_not_confused_with_comment() {
    assert_eq!(
        tokenize_kinds("1 / 2"),
        vec![
            TokenKind::NumberLiteral(1.0),
            TokenKind::Slash,
            TokenKind::NumberLiteral(2.0),
            TokenKind::Eof,
        ]
    );
}

#[test]
fn identifier_and_keywords_are_distinguished() {
    assert_eq!(
        tokenize_kinds("class fun variable while"),
        vec![
            TokenKind::Class,
            TokenKind::Fun,
            TokenKind::Identifier("variable".to_string()),
            TokenKind::While,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn keyword_matching_is_case_sensitive() {
    assert_eq!(
        tokenize_kinds("And"),
        vec![TokenKind::Identifier("And".to_string()), TokenKind::Eof]
    );
}

#[test]
fn string_literal_value_excludes_quotes() {
    let mut lexer = Lexer::new(r#""lox""#);
    let tokens = lexer.tokenize();
    assert_eq!(tokens[0].kind, TokenKind::StringLiteral("lox".to_string()));
    assert_eq!(tokens[0].lexeme, r#""lox""#);
}

#[test]
fn unterminated_string_yields_error_token_and_error() {
    let mut lexer = Lexer::new(r#""abc"#);
    let tokens = lexer.tokenize();
    assert!(matches!(tokens[0].kind, TokenKind::Error(_)));
    assert_eq!(lexer.errors().len(), 1);
    assert_eq!(lexer.errors()[0].span.line, 1);
}

#[test]
fn newline_inside_string_is_permitted_and_counted() {
    let mut lexer = Lexer::new("\"a\nb\"\nvar");
    let tokens = lexer.tokenize();
    assert_eq!(
        tokens[0].kind,
        TokenKind::StringLiteral("a\nb".to_string())
    );
    assert_eq!(tokens[1].kind, TokenKind::Var);
    assert_eq!(tokens[1].span.line, 2);
}

#[test]
fn integer_literal_parses_as_number() {
    assert_eq!(
        tokenize_kinds("42"),
        vec![TokenKind::NumberLiteral(42.0), TokenKind::Eof]
    );
}

#[test]
fn fractional_literal_parses_as_number() {
    assert_eq!(
        tokenize_kinds("3.14"),
        vec![TokenKind::NumberLiteral(3.14), TokenKind::Eof]
    );
}

#[test]
fn trailing_dot_without_digit_is_not_part_of_number() {
    assert_eq!(
        tokenize_kinds("1."),
        vec![TokenKind::NumberLiteral(1.0), TokenKind::Dot, TokenKind::Eof]
    );
}

#[test]
fn unexpected_character_becomes_error_token_but_lexing_continues() {
    let mut lexer = Lexer::new("@ var");
    let tokens = lexer.tokenize();
    assert!(matches!(tokens[0].kind, TokenKind::Error(_)));
    assert_eq!(tokens[1].kind, TokenKind::Var);
    assert_eq!(tokens[2].kind, TokenKind::Eof);
    assert_eq!(lexer.errors().len(), 1);
}

#[test]
fn lex_error_display_matches_cli_format() {
    let mut lexer = Lexer::new("@");
    lexer.tokenize();
    let message = format!("{}", lexer.errors()[0]);
    assert_eq!(message, "[line 1] Error: Unexpected character: @");
}

#[test]
fn line_numbers_advance_across_newlines() {
    let mut lexer = Lexer::new("var\nvar\nvar");
    let tokens = lexer.tokenize();
    assert_eq!(tokens[0].span.line, 1);
    assert_eq!(tokens[1].span.line, 2);
    assert_eq!(tokens[2].span.line, 3);
}

#[test]
fn spans_cover_the_exact_lexeme() {
    let mut lexer = Lexer::new("  foo");
    let tokens = lexer.tokenize();
    assert_eq!(tokens[0].span.start, 2);
    assert_eq!(tokens[0].span.end, 5);
    assert_eq!(tokens[0].lexeme, "foo");
}

#[test]
fn vertical_tab_and_form_feed_are_skipped_as_whitespace() {
    let mut lexer = Lexer::new("var\x0bvar\x0cvar");
    let tokens = lexer.tokenize();
    assert!(lexer.errors().is_empty());
    assert_eq!(tokens[0].span.line, 1);
    assert_eq!(tokens[1].span.line, 2);
    assert_eq!(tokens[2].span.line, 3);
}

#[test]
fn backtick_is_an_identifier_continuation_character() {
    assert_eq!(
        tokenize_kinds("`foo` foo`bar"),
        vec![
            TokenKind::Identifier("`foo`".to_string()),
            TokenKind::Identifier("foo`bar".to_string()),
            TokenKind::Eof,
        ]
    );
}

#[test]
fn full_statement_tokenizes_to_expected_sequence() {
    assert_eq!(
        tokenize_kinds(r#"var language = "lox";"#),
        vec![
            TokenKind::Var,
            TokenKind::Identifier("language".to_string()),
            TokenKind::Equal,
            TokenKind::StringLiteral("lox".to_string()),
            TokenKind::Semicolon,
            TokenKind::Eof,
        ]
    );
}
