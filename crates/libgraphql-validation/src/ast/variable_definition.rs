use crate::ast::DirectiveAnnotation;
use crate::ast::NodeId;
use crate::ast::TypeAnnotation;
use crate::ast::Value;
use crate::SourcePosition;

/// A variable declaration in an operation's (or an independent fragment's)
/// variable list, e.g. `$id: ID! = "default"`.
#[derive(Clone, Debug, PartialEq)]
pub struct VariableDefinition {
    pub id: NodeId,
    pub position: SourcePosition,
    pub variable: Variable,
    pub var_type: TypeAnnotation,
    pub default_value: Option<Value>,
    pub directives: Vec<DirectiveAnnotation>,
}

impl VariableDefinition {
    /// The declared variable's name (without the leading `$`).
    pub fn name(&self) -> &str {
        self.variable.name.as_str()
    }
}

/// A `$name` node. Appears both as the declared variable of a
/// [`VariableDefinition`] and as a reference within input values.
#[derive(Clone, Debug, PartialEq)]
pub struct Variable {
    pub id: NodeId,
    pub position: SourcePosition,
    pub name: String,
}
