use crate::ast::DirectiveAnnotation;
use crate::ast::NodeId;
use crate::ast::SelectionSet;
use crate::ast::VariableDefinition;
use crate::SourcePosition;

/// A named fragment definition.
///
/// `variable_definitions` is only ever non-empty when the document was
/// parsed with
/// [`ParserOptions::allow_fragment_variables`](crate::parser::ParserOptions)
/// enabled (`fragment Foo($a: Int) on T { ... }`).
#[derive(Clone, Debug, PartialEq)]
pub struct FragmentDefinition {
    pub id: NodeId,
    pub position: SourcePosition,
    pub name: String,
    pub variable_definitions: Vec<VariableDefinition>,
    pub type_condition: String,
    pub directives: Vec<DirectiveAnnotation>,
    pub selection_set: SelectionSet,
}
