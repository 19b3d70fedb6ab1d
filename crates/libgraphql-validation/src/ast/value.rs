use crate::ast::Variable;
use crate::SourcePosition;

/// An input value appearing in an argument, a default value or nested
/// within a list/object value.
///
/// Numeric literals keep their raw source text so no precision is lost
/// before a consumer decides how to coerce them.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Boolean(bool),
    Enum(String),
    Float(String),
    Int(String),
    List(Vec<Value>),
    Null,
    Object(Vec<ObjectField>),
    String(String),
    Variable(Variable),
}

impl Value {
    /// Returns the referenced [`Variable`] if this value is a variable
    /// reference.
    pub fn as_variable(&self) -> Option<&Variable> {
        if let Self::Variable(var) = self {
            Some(var)
        } else {
            None
        }
    }
}

/// A single `name: value` entry within an object value.
#[derive(Clone, Debug, PartialEq)]
pub struct ObjectField {
    pub position: SourcePosition,
    pub name: String,
    pub value: Value,
}
