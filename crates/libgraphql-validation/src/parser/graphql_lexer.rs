//! Hand-written lexer for GraphQL source text.
//!
//! Commas, whitespace, line terminators, byte-order marks and `#` comments
//! are insignificant and skipped between tokens.

use crate::parser::GraphQLParseError;
use crate::parser::GraphQLToken;
use crate::parser::GraphQLTokenKind;
use crate::SourcePosition;

type Result<T> = std::result::Result<T, GraphQLParseError>;

pub(crate) struct GraphQLLexer<'src> {
    source: &'src str,
    offset: usize,
    line: usize,
    /// 1-based column of `column_offset`, which trails `offset` on the
    /// current line so that columns are counted incrementally.
    column: usize,
    column_offset: usize,
}

impl<'src> GraphQLLexer<'src> {
    pub(crate) fn new(source: &'src str) -> Self {
        Self {
            source,
            offset: 0,
            line: 1,
            column: 1,
            column_offset: 0,
        }
    }

    /// Lexes the next significant token. Once the end of input is reached,
    /// every subsequent call returns [`GraphQLTokenKind::Eof`].
    pub(crate) fn next_token(&mut self) -> Result<GraphQLToken> {
        self.skip_ignored();
        let position = self.position();

        let Some(ch) = self.peek_char() else {
            return Ok(GraphQLToken::new(GraphQLTokenKind::Eof, position));
        };

        let kind = match ch {
            '&' => self.punctuator(GraphQLTokenKind::Ampersand),
            '@' => self.punctuator(GraphQLTokenKind::At),
            '!' => self.punctuator(GraphQLTokenKind::Bang),
            ':' => self.punctuator(GraphQLTokenKind::Colon),
            '}' => self.punctuator(GraphQLTokenKind::CurlyBraceClose),
            '{' => self.punctuator(GraphQLTokenKind::CurlyBraceOpen),
            '$' => self.punctuator(GraphQLTokenKind::Dollar),
            '=' => self.punctuator(GraphQLTokenKind::Equals),
            ')' => self.punctuator(GraphQLTokenKind::ParenClose),
            '(' => self.punctuator(GraphQLTokenKind::ParenOpen),
            '|' => self.punctuator(GraphQLTokenKind::Pipe),
            ']' => self.punctuator(GraphQLTokenKind::SquareBracketClose),
            '[' => self.punctuator(GraphQLTokenKind::SquareBracketOpen),

            '.' => {
                if !self.rest().starts_with("...") {
                    return Err(GraphQLParseError::lexer(
                        "Unexpected `.`; did you mean `...`?",
                        position,
                    ));
                }
                self.offset += 3;
                GraphQLTokenKind::Ellipsis
            },

            '"' => {
                if self.rest().starts_with("\"\"\"") {
                    self.lex_block_string(position)?
                } else {
                    self.lex_string(position)?
                }
            },

            '-' | '0'..='9' => self.lex_number(position)?,

            ch if is_name_start(ch) => self.lex_name(),

            other => return Err(GraphQLParseError::lexer(
                format!("Unexpected character `{}`", other.escape_debug()),
                position,
            )),
        };

        Ok(GraphQLToken::new(kind, position))
    }

    fn rest(&self) -> &'src str {
        &self.source[self.offset..]
    }

    fn peek_char(&self) -> Option<char> {
        self.rest().chars().next()
    }

    fn bump(&mut self) -> Option<char> {
        let ch = self.peek_char()?;
        self.offset += ch.len_utf8();
        Some(ch)
    }

    /// Records that a line terminator was just consumed.
    fn start_new_line(&mut self) {
        self.line += 1;
        self.column = 1;
        self.column_offset = self.offset;
    }

    fn position(&mut self) -> SourcePosition {
        self.column += self.source[self.column_offset..self.offset].chars().count();
        self.column_offset = self.offset;
        SourcePosition::new(self.line, self.column, self.offset)
    }

    fn punctuator(&mut self, kind: GraphQLTokenKind) -> GraphQLTokenKind {
        self.bump();
        kind
    }

    fn skip_ignored(&mut self) {
        while let Some(ch) = self.peek_char() {
            match ch {
                ' ' | '\t' | ',' | '\u{FEFF}' => {
                    self.bump();
                },

                '\n' => {
                    self.bump();
                    self.start_new_line();
                },

                '\r' => {
                    self.bump();
                    if self.peek_char() == Some('\n') {
                        self.bump();
                    }
                    self.start_new_line();
                },

                '#' => {
                    while let Some(ch) = self.peek_char() {
                        if ch == '\n' || ch == '\r' {
                            break;
                        }
                        self.bump();
                    }
                },

                _ => break,
            }
        }
    }

    fn lex_name(&mut self) -> GraphQLTokenKind {
        let start = self.offset;
        while let Some(ch) = self.peek_char() {
            if !is_name_continue(ch) {
                break;
            }
            self.bump();
        }
        GraphQLTokenKind::Name(self.source[start..self.offset].to_string())
    }

    fn lex_number(&mut self, position: SourcePosition) -> Result<GraphQLTokenKind> {
        let start = self.offset;
        let mut is_float = false;

        if self.peek_char() == Some('-') {
            self.bump();
        }

        match self.peek_char() {
            Some('0') => {
                self.bump();
                if let Some(ch) = self.peek_char()
                    && ch.is_ascii_digit() {
                    return Err(GraphQLParseError::lexer(
                        format!("Invalid number, unexpected digit after 0: `{ch}`"),
                        position,
                    ));
                }
            },
            Some(ch) if ch.is_ascii_digit() => self.eat_digits(),
            _ => return Err(GraphQLParseError::lexer(
                "Invalid number, expected a digit after `-`",
                position,
            )),
        }

        if self.peek_char() == Some('.') {
            self.bump();
            is_float = true;
            self.expect_digits(position)?;
        }

        if matches!(self.peek_char(), Some('e' | 'E')) {
            self.bump();
            is_float = true;
            if matches!(self.peek_char(), Some('+' | '-')) {
                self.bump();
            }
            self.expect_digits(position)?;
        }

        if let Some(ch) = self.peek_char()
            && (ch == '.' || is_name_start(ch)) {
            return Err(GraphQLParseError::lexer(
                format!("Invalid number, unexpected `{ch}`"),
                position,
            ));
        }

        let raw = self.source[start..self.offset].to_string();
        Ok(if is_float {
            GraphQLTokenKind::FloatValue(raw)
        } else {
            GraphQLTokenKind::IntValue(raw)
        })
    }

    fn eat_digits(&mut self) {
        while let Some(ch) = self.peek_char() {
            if !ch.is_ascii_digit() {
                break;
            }
            self.bump();
        }
    }

    fn expect_digits(&mut self, position: SourcePosition) -> Result<()> {
        match self.peek_char() {
            Some(ch) if ch.is_ascii_digit() => {
                self.eat_digits();
                Ok(())
            },
            Some(ch) => Err(GraphQLParseError::lexer(
                format!("Invalid number, expected digit but found `{}`", ch.escape_debug()),
                position,
            )),
            None => Err(GraphQLParseError::lexer(
                "Invalid number, expected digit but found end of input",
                position,
            )),
        }
    }

    fn lex_string(&mut self, position: SourcePosition) -> Result<GraphQLTokenKind> {
        // Opening quote
        self.bump();

        let mut value = String::new();
        loop {
            match self.peek_char() {
                None | Some('\n' | '\r') => return Err(GraphQLParseError::lexer(
                    "Unterminated string",
                    position,
                )),

                Some('"') => {
                    self.bump();
                    return Ok(GraphQLTokenKind::StringValue(value));
                },

                Some('\\') => {
                    self.bump();
                    let escaped = match self.bump() {
                        Some('"') => '"',
                        Some('\\') => '\\',
                        Some('/') => '/',
                        Some('b') => '\u{0008}',
                        Some('f') => '\u{000C}',
                        Some('n') => '\n',
                        Some('r') => '\r',
                        Some('t') => '\t',
                        Some('u') => self.lex_unicode_escape(position)?,
                        Some(other) => return Err(GraphQLParseError::lexer(
                            format!("Invalid escape sequence `\\{}`", other.escape_debug()),
                            position,
                        )),
                        None => return Err(GraphQLParseError::lexer(
                            "Unterminated string",
                            position,
                        )),
                    };
                    value.push(escaped);
                },

                Some(ch) => {
                    self.bump();
                    value.push(ch);
                },
            }
        }
    }

    /// Decodes the `XXXX` of a `\uXXXX` escape (the `\u` is already
    /// consumed), combining UTF-16 surrogate pairs.
    fn lex_unicode_escape(&mut self, position: SourcePosition) -> Result<char> {
        let invalid = || GraphQLParseError::lexer(
            "Invalid Unicode escape sequence",
            position,
        );

        let high = self.lex_hex4().ok_or_else(invalid)?;
        if (0xD800..0xDC00).contains(&high) {
            if !self.rest().starts_with("\\u") {
                return Err(invalid());
            }
            self.offset += 2;
            let low = self.lex_hex4().ok_or_else(invalid)?;
            if !(0xDC00..0xE000).contains(&low) {
                return Err(invalid());
            }
            let code_point = 0x10000 + ((high - 0xD800) << 10) + (low - 0xDC00);
            return char::from_u32(code_point).ok_or_else(invalid);
        }

        char::from_u32(high).ok_or_else(invalid)
    }

    fn lex_hex4(&mut self) -> Option<u32> {
        let mut code = 0u32;
        for _ in 0..4 {
            let digit = self.peek_char()?.to_digit(16)?;
            self.bump();
            code = (code << 4) | digit;
        }
        Some(code)
    }

    fn lex_block_string(&mut self, position: SourcePosition) -> Result<GraphQLTokenKind> {
        self.offset += 3;

        let mut raw = String::new();
        loop {
            if self.rest().starts_with("\"\"\"") {
                self.offset += 3;
                return Ok(GraphQLTokenKind::StringValue(block_string_value(&raw)));
            }

            if self.rest().starts_with("\\\"\"\"") {
                self.offset += 4;
                raw.push_str("\"\"\"");
                continue;
            }

            match self.bump() {
                None => return Err(GraphQLParseError::lexer(
                    "Unterminated block string",
                    position,
                )),

                Some('\n') => {
                    raw.push('\n');
                    self.start_new_line();
                },

                Some('\r') => {
                    if self.peek_char() == Some('\n') {
                        self.bump();
                    }
                    raw.push('\n');
                    self.start_new_line();
                },

                Some(ch) => raw.push(ch),
            }
        }
    }
}

fn is_name_start(ch: char) -> bool {
    ch == '_' || ch.is_ascii_alphabetic()
}

fn is_name_continue(ch: char) -> bool {
    ch == '_' || ch.is_ascii_alphanumeric()
}

fn leading_whitespace(line: &str) -> usize {
    line.chars().take_while(|ch| *ch == ' ' || *ch == '\t').count()
}

/// Applies the GraphQL block string algorithm: strips the common
/// indentation of all lines but the first, then drops leading and trailing
/// blank lines. `raw` must already have its line terminators normalized to
/// `\n`.
pub(crate) fn block_string_value(raw: &str) -> String {
    let lines: Vec<&str> = raw.split('\n').collect();

    let common_indent = lines.iter()
        .skip(1)
        .filter_map(|line| {
            let indent = leading_whitespace(line);
            (indent < line.len()).then_some(indent)
        })
        .min();

    let mut lines: Vec<&str> = lines.iter()
        .enumerate()
        .map(|(idx, line)| match common_indent {
            Some(indent) if idx > 0 => line.get(indent..).unwrap_or(""),
            _ => line,
        })
        .collect();

    let is_blank = |line: &&str| leading_whitespace(line) == line.len();
    while lines.first().is_some_and(is_blank) {
        lines.remove(0);
    }
    while lines.last().is_some_and(is_blank) {
        lines.pop();
    }

    lines.join("\n")
}
