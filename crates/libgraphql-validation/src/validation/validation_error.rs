use crate::ast::AstNode;
use crate::ast::AstNodeKind;
use crate::ast::NodeId;
use crate::SourcePosition;
use thiserror::Error;

/// One finding reported by a [`ValidationRule`](crate::validation::ValidationRule).
///
/// Findings are collected, never raised: a pass reports every violation it
/// finds in the document.
#[derive(Clone, Debug, Error, PartialEq, serde::Serialize)]
#[error("{message}")]
pub struct ValidationError {
    message: String,
    rule: &'static str,
    locations: Vec<ErrorLocation>,
}

impl ValidationError {
    pub fn new<'a>(
        rule: &'static str,
        message: impl Into<String>,
        nodes: impl IntoIterator<Item = AstNode<'a>>,
    ) -> Self {
        Self {
            message: message.into(),
            rule,
            locations: nodes.into_iter().map(ErrorLocation::from).collect(),
        }
    }

    pub fn message(&self) -> &str {
        self.message.as_str()
    }

    /// Name of the rule that reported this error.
    pub fn rule(&self) -> &'static str {
        self.rule
    }

    /// The offending nodes, most specific first.
    pub fn locations(&self) -> &[ErrorLocation] {
        &self.locations
    }
}

/// Identifies one of the AST nodes a [`ValidationError`] points at.
#[derive(Clone, Copy, Debug, Eq, PartialEq, serde::Serialize)]
pub struct ErrorLocation {
    pub node_id: Option<NodeId>,
    pub kind: AstNodeKind,
    pub position: Option<SourcePosition>,
}

impl<'a> std::convert::From<AstNode<'a>> for ErrorLocation {
    fn from(node: AstNode<'a>) -> Self {
        Self {
            node_id: node.id(),
            kind: node.kind(),
            position: node.position(),
        }
    }
}
