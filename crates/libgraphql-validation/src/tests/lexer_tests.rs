use crate::parser::block_string_value;
use crate::parser::GraphQLLexer;
use crate::parser::GraphQLParseError;
use crate::parser::GraphQLParseErrorKind;
use crate::parser::GraphQLToken;
use crate::parser::GraphQLTokenKind;
use crate::SourcePosition;

fn lex(source: &str) -> Result<Vec<GraphQLToken>, GraphQLParseError> {
    let mut lexer = GraphQLLexer::new(source);
    let mut tokens = vec![];
    loop {
        let token = lexer.next_token()?;
        if token.kind == GraphQLTokenKind::Eof {
            return Ok(tokens);
        }
        tokens.push(token);
    }
}

fn lex_kinds(source: &str) -> Vec<GraphQLTokenKind> {
    lex(source).unwrap().into_iter().map(|token| token.kind).collect()
}

fn name(name: &str) -> GraphQLTokenKind {
    GraphQLTokenKind::Name(name.to_string())
}

#[test]
fn lexes_punctuators_and_names() {
    assert_eq!(lex_kinds("query Foo($a: [Int!]) { ...Bar @skip }"), vec![
        name("query"),
        name("Foo"),
        GraphQLTokenKind::ParenOpen,
        GraphQLTokenKind::Dollar,
        name("a"),
        GraphQLTokenKind::Colon,
        GraphQLTokenKind::SquareBracketOpen,
        name("Int"),
        GraphQLTokenKind::Bang,
        GraphQLTokenKind::SquareBracketClose,
        GraphQLTokenKind::ParenClose,
        GraphQLTokenKind::CurlyBraceOpen,
        GraphQLTokenKind::Ellipsis,
        name("Bar"),
        GraphQLTokenKind::At,
        name("skip"),
        GraphQLTokenKind::CurlyBraceClose,
    ]);
}

#[test]
fn skips_commas_comments_and_bom() {
    assert_eq!(
        lex_kinds("\u{FEFF}a,,b # trailing comment, with { punctuation }\n  c"),
        vec![name("a"), name("b"), name("c")],
    );
}

#[test]
fn tracks_lines_and_columns() {
    let tokens = lex("{\n  # comment\n  field\r\n\tother }").unwrap();
    let positions = tokens.iter()
        .map(|token| (token.position.line(), token.position.column()))
        .collect::<Vec<_>>();
    assert_eq!(positions, vec![(1, 1), (3, 3), (4, 2), (4, 8)]);
    assert_eq!(tokens[1].position.byte_offset(), 16);
}

#[test]
fn lexes_numbers() {
    assert_eq!(lex_kinds("0 -12 3.5 1e10 -0.25E-3"), vec![
        GraphQLTokenKind::IntValue("0".to_string()),
        GraphQLTokenKind::IntValue("-12".to_string()),
        GraphQLTokenKind::FloatValue("3.5".to_string()),
        GraphQLTokenKind::FloatValue("1e10".to_string()),
        GraphQLTokenKind::FloatValue("-0.25E-3".to_string()),
    ]);
}

#[test]
fn rejects_malformed_numbers() {
    for source in ["012", "1.", "1.a", "-", "1e", "12abc", "1.2.3"] {
        let err = lex(source).unwrap_err();
        assert_eq!(err.kind(), &GraphQLParseErrorKind::LexerError, "source: {source}");
        assert_eq!(err.position(), SourcePosition::new(1, 1, 0), "source: {source}");
    }
}

#[test]
fn decodes_string_escapes() {
    assert_eq!(
        lex_kinds(r#""a\nb\t\"q\" \\ \/ \u0041\uD83D\uDE00""#),
        vec![GraphQLTokenKind::StringValue("a\nb\t\"q\" \\ / A\u{1F600}".to_string())],
    );
}

#[test]
fn rejects_bad_strings() {
    let cases = [
        "\"unterminated",
        "\"line\nbreak\"",
        r#""\x""#,
        r#""\u12G4""#,
        r#""\uD83D""#,
        r#""\uD83DA""#,
    ];
    for source in cases {
        let err = lex(source).unwrap_err();
        assert_eq!(err.kind(), &GraphQLParseErrorKind::LexerError, "source: {source:?}");
    }
}

#[test]
fn dedents_block_strings() {
    let source = "\"\"\"\n    Hello,\n      World!\n\n    Yours,\n      GraphQL.\n  \"\"\"";
    assert_eq!(lex_kinds(source), vec![
        GraphQLTokenKind::StringValue("Hello,\n  World!\n\nYours,\n  GraphQL.".to_string()),
    ]);
}

#[test]
fn block_strings_keep_escaped_triple_quotes() {
    assert_eq!(
        lex_kinds(r#"""" contains \""" inside """"#),
        vec![GraphQLTokenKind::StringValue(" contains \"\"\" inside ".to_string())],
    );
}

#[test]
fn block_strings_count_lines() {
    let tokens = lex("\"\"\"a\nb\r\nc\"\"\" next").unwrap();
    assert_eq!(tokens[1].kind, name("next"));
    assert_eq!(tokens[1].position.line(), 3);
    assert_eq!(tokens[1].position.column(), 6);
}

#[test]
fn block_string_value_keeps_first_line_indent() {
    assert_eq!(block_string_value("  first\n    second\n    third"), "  first\nsecond\nthird");
    assert_eq!(block_string_value("\n\n  only\n\n"), "only");
    assert_eq!(block_string_value("   "), "");
}

#[test]
fn rejects_unexpected_characters() {
    let err = lex("{ ? }").unwrap_err();
    assert_eq!(err.kind(), &GraphQLParseErrorKind::LexerError);
    assert_eq!(err.position().column(), 3);

    let err = lex("..").unwrap_err();
    assert_eq!(err.kind(), &GraphQLParseErrorKind::LexerError);
}

#[test]
fn eof_repeats() {
    let mut lexer = GraphQLLexer::new("  ");
    assert_eq!(lexer.next_token().unwrap().kind, GraphQLTokenKind::Eof);
    assert_eq!(lexer.next_token().unwrap().kind, GraphQLTokenKind::Eof);
}

#[test]
fn columns_stay_exact_along_a_long_line() {
    let num_fields = 20_000;
    let source = format!("{{ {} }}", vec!["f(s: \"é\")"; num_fields].join(" "));
    let tokens = lex(source.as_str()).unwrap();

    // `{`, then per field: name `(` name `:` string `)`.
    assert_eq!(tokens.len(), 2 + num_fields * 6);
    let last_field = &tokens[1 + (num_fields - 1) * 6];
    assert_eq!(last_field.kind, name("f"));
    assert_eq!(last_field.position.line(), 1);
    // Each field is 9 chars plus a separating space; `{ ` precedes the first.
    assert_eq!(last_field.position.column(), 3 + (num_fields - 1) * 10);
    // `é` is two bytes, so byte offsets run ahead of columns.
    assert_eq!(last_field.position.byte_offset(), 2 + (num_fields - 1) * 11);

    let closing = tokens.last().unwrap();
    assert_eq!(closing.kind, GraphQLTokenKind::CurlyBraceClose);
    assert_eq!(closing.position.column(), 3 + num_fields * 10);
}
