use crate::ast::Argument;
use crate::ast::DefinitionRef;
use crate::ast::DirectiveAnnotation;
use crate::ast::Document;
use crate::ast::Field;
use crate::ast::FragmentDefinition;
use crate::ast::FragmentSpread;
use crate::ast::InlineFragment;
use crate::ast::NodeId;
use crate::ast::ObjectField;
use crate::ast::OperationDefinition;
use crate::ast::SelectionSet;
use crate::ast::Value;
use crate::ast::Variable;
use crate::ast::VariableDefinition;
use crate::SourcePosition;

/// A borrowed reference to any node the [`visit`](crate::visitor::visit)
/// driver walks, one variant per node kind.
///
/// Variable references (and the declared variable of a
/// [`VariableDefinition`]) are always surfaced as [`AstNode::Variable`];
/// every other input value is surfaced as [`AstNode::Value`].
#[derive(Clone, Copy, Debug)]
pub enum AstNode<'a> {
    Argument(&'a Argument),
    DirectiveAnnotation(&'a DirectiveAnnotation),
    Document(&'a Document),
    Field(&'a Field),
    FragmentDefinition(&'a FragmentDefinition),
    FragmentSpread(&'a FragmentSpread),
    InlineFragment(&'a InlineFragment),
    ObjectField(&'a ObjectField),
    OperationDefinition(&'a OperationDefinition),
    SelectionSet(&'a SelectionSet),
    Value(&'a Value),
    Variable(&'a Variable),
    VariableDefinition(&'a VariableDefinition),
}

impl<'a> AstNode<'a> {
    pub fn kind(&self) -> AstNodeKind {
        match self {
            Self::Argument(_) => AstNodeKind::Argument,
            Self::DirectiveAnnotation(_) => AstNodeKind::DirectiveAnnotation,
            Self::Document(_) => AstNodeKind::Document,
            Self::Field(_) => AstNodeKind::Field,
            Self::FragmentDefinition(_) => AstNodeKind::FragmentDefinition,
            Self::FragmentSpread(_) => AstNodeKind::FragmentSpread,
            Self::InlineFragment(_) => AstNodeKind::InlineFragment,
            Self::ObjectField(_) => AstNodeKind::ObjectField,
            Self::OperationDefinition(_) => AstNodeKind::OperationDefinition,
            Self::SelectionSet(_) => AstNodeKind::SelectionSet,
            Self::Value(_) => AstNodeKind::Value,
            Self::Variable(_) => AstNodeKind::Variable,
            Self::VariableDefinition(_) => AstNodeKind::VariableDefinition,
        }
    }

    /// The node's identity, for node kinds that carry one.
    ///
    /// Documents, object fields and non-variable values have no id.
    pub fn id(&self) -> Option<NodeId> {
        match self {
            Self::Argument(node) => Some(node.id),
            Self::DirectiveAnnotation(node) => Some(node.id),
            Self::Field(node) => Some(node.id),
            Self::FragmentDefinition(node) => Some(node.id),
            Self::FragmentSpread(node) => Some(node.id),
            Self::InlineFragment(node) => Some(node.id),
            Self::OperationDefinition(node) => Some(node.id),
            Self::SelectionSet(node) => Some(node.id),
            Self::Variable(node) => Some(node.id),
            Self::VariableDefinition(node) => Some(node.id),
            Self::Document(_)
            | Self::ObjectField(_)
            | Self::Value(_) => None,
        }
    }

    pub fn position(&self) -> Option<SourcePosition> {
        match self {
            Self::Argument(node) => Some(node.position),
            Self::DirectiveAnnotation(node) => Some(node.position),
            Self::Field(node) => Some(node.position),
            Self::FragmentDefinition(node) => Some(node.position),
            Self::FragmentSpread(node) => Some(node.position),
            Self::InlineFragment(node) => Some(node.position),
            Self::ObjectField(node) => Some(node.position),
            Self::OperationDefinition(node) => Some(node.position),
            Self::SelectionSet(node) => Some(node.position),
            Self::Variable(node) => Some(node.position),
            Self::VariableDefinition(node) => Some(node.position),
            Self::Document(_) | Self::Value(_) => None,
        }
    }

    /// Returns the executable definition this node is, if it is one.
    pub fn as_definition_ref(&self) -> Option<DefinitionRef<'a>> {
        match *self {
            Self::FragmentDefinition(frag) => Some(DefinitionRef::Fragment(frag)),
            Self::OperationDefinition(op) => Some(DefinitionRef::Operation(op)),
            _ => None,
        }
    }
}

impl<'a> std::convert::From<DefinitionRef<'a>> for AstNode<'a> {
    fn from(def: DefinitionRef<'a>) -> Self {
        def.as_ast_node()
    }
}

impl<'a> std::convert::From<&'a Document> for AstNode<'a> {
    fn from(doc: &'a Document) -> Self {
        Self::Document(doc)
    }
}

impl<'a> std::convert::From<&'a SelectionSet> for AstNode<'a> {
    fn from(selection_set: &'a SelectionSet) -> Self {
        Self::SelectionSet(selection_set)
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, serde::Serialize)]
pub enum AstNodeKind {
    Argument,
    DirectiveAnnotation,
    Document,
    Field,
    FragmentDefinition,
    FragmentSpread,
    InlineFragment,
    ObjectField,
    OperationDefinition,
    SelectionSet,
    Value,
    Variable,
    VariableDefinition,
}
