use std::path::Path;
use std::path::PathBuf;

/// Very similar to graphql_parser's [Pos](graphql_parser::Pos), except it
/// includes a PathBuf to the file.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FilePosition {
    pub col: usize,
    pub file: PathBuf,
    pub line: usize,
}

impl FilePosition {
    pub(crate) fn from_pos(file: &Path, pos: graphql_parser::Pos) -> Self {
        Self {
            col: pos.column,
            file: file.to_path_buf(),
            line: pos.line,
        }
    }
}

/// Where a schema element was defined.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum SchemaDefLocation {
    GraphQLBuiltIn,
    Schema(FilePosition),
}

impl std::convert::From<FilePosition> for SchemaDefLocation {
    fn from(value: FilePosition) -> Self {
        Self::Schema(value)
    }
}
