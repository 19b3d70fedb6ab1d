//! Parsing of GraphQL executable documents into the [`ast`](crate::ast).

mod executable_document_parser;
mod graphql_lexer;
mod graphql_parse_error;
mod graphql_token;
mod parser_options;

pub use executable_document_parser::ExecutableDocumentParser;
pub(crate) use graphql_lexer::GraphQLLexer;
pub use graphql_parse_error::GraphQLParseError;
pub use graphql_parse_error::GraphQLParseErrorKind;
pub use graphql_token::GraphQLToken;
pub use graphql_token::GraphQLTokenKind;
pub use parser_options::ParserOptions;

use crate::ast;

/// Parses an executable document with the default [`ParserOptions`].
///
/// ```
/// use libgraphql_validation::parser::parse_executable_document;
///
/// let doc = parse_executable_document("query Foo($a: String) { field(arg: $a) }")
///     .unwrap();
/// assert_eq!(doc.operations().count(), 1);
/// ```
pub fn parse_executable_document(
    source: &str,
) -> Result<ast::Document, GraphQLParseError> {
    parse_executable_document_with_options(source, ParserOptions::default())
}

pub fn parse_executable_document_with_options(
    source: &str,
    options: ParserOptions,
) -> Result<ast::Document, GraphQLParseError> {
    ExecutableDocumentParser::new(source, options)?.parse_document()
}

#[cfg(test)]
pub(crate) use graphql_lexer::block_string_value;
