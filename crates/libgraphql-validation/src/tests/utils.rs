use crate::ast::Document;
use crate::parser::parse_executable_document;
use crate::schema::Schema;
use crate::schema::SchemaBuilder;
use crate::validation::validate;
use crate::validation::ValidationError;

pub(super) const TEST_SCHEMA_SDL: &str = r#"
    type Query {
        field(arg: String, other: Int = 0, input: ComplexInput, list: [String]): String
        dog: Dog
        node(id: ID!): Node
        t: T
    }

    interface Node {
        id: ID!
    }

    type Dog implements Node {
        id: ID!
        name(surname: Boolean): String
        barks(times: Int = 1): Boolean
        owner: Human
    }

    type Human {
        name: String
        pets: [Dog!]!
    }

    type T {
        field(arg: String, a: String, b: String, c: String): String
        nested: T
    }

    input ComplexInput {
        requiredField: Boolean!
        intField: Int = 42
        stringListField: [String]
        nested: ComplexInput
    }
"#;

pub(super) fn test_schema() -> Schema {
    SchemaBuilder::from_str(None, TEST_SCHEMA_SDL)
        .unwrap()
        .build()
        .unwrap()
}

pub(super) fn parse_doc(source: &str) -> Document {
    parse_executable_document(source).unwrap()
}

pub(super) fn validate_source(source: &str) -> Vec<ValidationError> {
    validate(&test_schema(), &parse_doc(source))
}

/// Validates `source` against [`test_schema()`] and asserts the reported
/// messages, in order.
pub(super) fn expect_errors(source: &str, expected_messages: &[&str]) {
    let errors = validate_source(source);
    let messages = errors.iter()
        .map(|err| err.message())
        .collect::<Vec<_>>();
    assert_eq!(messages, expected_messages, "for document:\n{source}");
}

pub(super) fn expect_valid(source: &str) {
    expect_errors(source, &[]);
}
