use crate::ast::NodeId;
use crate::ast::Value;
use crate::SourcePosition;

/// A `@name(args...)` annotation applied to an executable node.
#[derive(Clone, Debug, PartialEq)]
pub struct DirectiveAnnotation {
    pub id: NodeId,
    pub position: SourcePosition,
    pub name: String,
    pub arguments: Vec<Argument>,
}

/// A `name: value` argument passed to a field or directive.
#[derive(Clone, Debug, PartialEq)]
pub struct Argument {
    pub id: NodeId,
    pub position: SourcePosition,
    pub name: String,
    pub value: Value,
}
