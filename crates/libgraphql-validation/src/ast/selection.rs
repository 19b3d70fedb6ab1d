use crate::ast::Argument;
use crate::ast::DirectiveAnnotation;
use crate::ast::NodeId;
use crate::SourcePosition;

/// The set of selections within braces `{ ... }`.
#[derive(Clone, Debug, PartialEq)]
pub struct SelectionSet {
    pub id: NodeId,
    pub position: SourcePosition,
    pub selections: Vec<Selection>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Selection {
    Field(Field),
    FragmentSpread(FragmentSpread),
    InlineFragment(InlineFragment),
}

impl Selection {
    pub fn id(&self) -> NodeId {
        match self {
            Self::Field(field) => field.id,
            Self::FragmentSpread(spread) => spread.id,
            Self::InlineFragment(inline) => inline.id,
        }
    }

    /// The nested selection set of this selection, if it has one.
    pub fn selection_set(&self) -> Option<&SelectionSet> {
        match self {
            Self::Field(field) => field.selection_set.as_ref(),
            Self::FragmentSpread(_) => None,
            Self::InlineFragment(inline) => Some(&inline.selection_set),
        }
    }
}

/// A field selection, optionally aliased, with arguments, directives and a
/// nested selection set.
#[derive(Clone, Debug, PartialEq)]
pub struct Field {
    pub id: NodeId,
    pub position: SourcePosition,
    pub alias: Option<String>,
    pub name: String,
    pub arguments: Vec<Argument>,
    pub directives: Vec<DirectiveAnnotation>,
    pub selection_set: Option<SelectionSet>,
}

impl Field {
    /// The key this field's result is stored under (alias if present).
    pub fn response_key(&self) -> &str {
        self.alias.as_deref().unwrap_or(self.name.as_str())
    }
}

/// A `...FragmentName` inclusion of a named fragment.
#[derive(Clone, Debug, PartialEq)]
pub struct FragmentSpread {
    pub id: NodeId,
    pub position: SourcePosition,
    pub fragment_name: String,
    pub directives: Vec<DirectiveAnnotation>,
}

/// An anonymous `... on Type { ... }` (or `... { ... }`) fragment.
#[derive(Clone, Debug, PartialEq)]
pub struct InlineFragment {
    pub id: NodeId,
    pub position: SourcePosition,
    pub type_condition: Option<String>,
    pub directives: Vec<DirectiveAnnotation>,
    pub selection_set: SelectionSet,
}
