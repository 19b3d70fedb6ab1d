//! The executable-document AST validated by this crate.
//!
//! Nodes that can serve as cache keys or error locations carry a
//! [`NodeId`] and a [`SourcePosition`](crate::SourcePosition).

mod ast_node;
mod directive_annotation;
mod document;
mod fragment_definition;
mod node_id;
mod operation_definition;
mod selection;
mod type_annotation;
mod value;
mod variable_definition;

pub use ast_node::AstNode;
pub use ast_node::AstNodeKind;
pub use directive_annotation::Argument;
pub use directive_annotation::DirectiveAnnotation;
pub use document::Definition;
pub use document::DefinitionRef;
pub use document::Document;
pub use fragment_definition::FragmentDefinition;
pub use node_id::NodeId;
pub(crate) use node_id::NodeIdAllocator;
pub use operation_definition::OperationDefinition;
pub use operation_definition::OperationKind;
pub use selection::Field;
pub use selection::FragmentSpread;
pub use selection::InlineFragment;
pub use selection::Selection;
pub use selection::SelectionSet;
pub use type_annotation::TypeAnnotation;
pub use value::ObjectField;
pub use value::Value;
pub use variable_definition::Variable;
pub use variable_definition::VariableDefinition;
