//! Variable-scoping validation for GraphQL executable documents.
//!
//! Documents are parsed with [`parser::parse_executable_document()`] and
//! validated against a [`schema::Schema`] with [`validation::validate()`],
//! which reports:
//!
//! * variables referenced but never declared by the operation (or
//!   variable-declaring fragment) they are reachable from, and
//! * variables declared but never referenced.
//!
//! Both checks follow fragment spreads transitively. The closures they
//! depend on are computed lazily and memoized per pass by
//! [`validation::ValidationContext`].
//!
//! ```
//! use libgraphql_validation::parser::parse_executable_document;
//! use libgraphql_validation::schema::SchemaBuilder;
//! use libgraphql_validation::validation::validate;
//!
//! let schema = SchemaBuilder::from_str(None, "type Query { user(id: ID!): String }")
//!     .unwrap()
//!     .build()
//!     .unwrap();
//! let doc = parse_executable_document(
//!     "query Q($id: ID!, $unused: Int) { ...F } fragment F on Query { user(id: $id) }",
//! ).unwrap();
//!
//! let errors = validate(&schema, &doc);
//! assert_eq!(errors.len(), 1);
//! assert_eq!(
//!     errors[0].message(),
//!     "Variable \"$unused\" is never used in operation \"Q\".",
//! );
//! ```

pub mod ast;
pub mod file_reader;
pub mod parser;
pub mod schema;
mod source_position;
pub mod validation;
pub mod visitor;

pub use source_position::SourcePosition;

#[cfg(test)]
mod tests;
