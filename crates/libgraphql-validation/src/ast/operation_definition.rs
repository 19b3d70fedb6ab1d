use crate::ast::DirectiveAnnotation;
use crate::ast::NodeId;
use crate::ast::SelectionSet;
use crate::ast::VariableDefinition;
use crate::SourcePosition;

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, serde::Serialize)]
pub enum OperationKind {
    Mutation,
    Query,
    Subscription,
}

impl OperationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mutation => "mutation",
            Self::Query => "query",
            Self::Subscription => "subscription",
        }
    }
}

impl std::fmt::Display for OperationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A query, mutation or subscription. The `{ ... }` shorthand is parsed as
/// an anonymous query with no variables.
#[derive(Clone, Debug, PartialEq)]
pub struct OperationDefinition {
    pub id: NodeId,
    pub position: SourcePosition,
    pub operation_kind: OperationKind,
    pub name: Option<String>,
    pub variable_definitions: Vec<VariableDefinition>,
    pub directives: Vec<DirectiveAnnotation>,
    pub selection_set: SelectionSet,
}
