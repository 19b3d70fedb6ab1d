/// A location within a GraphQL source document.
///
/// `line` and `column` are 1-based (the convention used when presenting
/// locations to users), `byte_offset` is 0-based from the start of the
/// document. Columns count characters, not bytes.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, serde::Serialize)]
pub struct SourcePosition {
    line: usize,
    column: usize,
    byte_offset: usize,
}

impl SourcePosition {
    pub fn new(line: usize, column: usize, byte_offset: usize) -> Self {
        Self {
            line,
            column,
            byte_offset,
        }
    }

    /// Returns the 1-based line number.
    pub fn line(&self) -> usize {
        self.line
    }

    /// Returns the 1-based column (in characters) within the line.
    pub fn column(&self) -> usize {
        self.column
    }

    /// Returns the 0-based byte offset from the start of the document.
    pub fn byte_offset(&self) -> usize {
        self.byte_offset
    }
}

impl std::fmt::Display for SourcePosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

impl std::convert::From<graphql_parser::Pos> for SourcePosition {
    /// `graphql_parser` positions carry no byte offset, so the offset is
    /// reported as `0`.
    fn from(pos: graphql_parser::Pos) -> Self {
        Self::new(pos.line, pos.column, 0)
    }
}
