//! A read-only GraphQL schema, built from SDL.

mod graphql_type;
#[allow(clippy::module_inception)]
mod schema;
mod schema_builder;
mod schema_def_location;

pub use graphql_type::ConstValue;
pub use graphql_type::DirectiveDefinition;
pub use graphql_type::EnumType;
pub use graphql_type::FieldDefinition;
pub use graphql_type::GraphQLType;
pub use graphql_type::InputObjectType;
pub use graphql_type::InputValueDefinition;
pub use graphql_type::ObjectOrInterfaceType;
pub use graphql_type::ScalarType;
pub use graphql_type::UnionType;
pub use schema::Schema;
pub use schema_builder::NamedTypeDefLocation;
pub use schema_builder::SchemaBuildError;
pub use schema_builder::SchemaBuilder;
pub use schema_def_location::FilePosition;
pub use schema_def_location::SchemaDefLocation;
