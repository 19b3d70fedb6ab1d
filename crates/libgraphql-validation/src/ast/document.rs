use crate::ast::AstNode;
use crate::ast::FragmentDefinition;
use crate::ast::NodeId;
use crate::ast::OperationDefinition;
use crate::ast::SelectionSet;
use crate::ast::VariableDefinition;
use crate::SourcePosition;

/// A parsed executable document.
///
/// Documents are immutable once produced by the parser; every cache in
/// [`ValidationContext`](crate::validation::ValidationContext) relies on
/// that.
#[derive(Clone, Debug, PartialEq)]
pub struct Document {
    pub definitions: Vec<Definition>,
    pub(crate) node_count: u32,
}

impl Document {
    /// Iterates all definitions as [`DefinitionRef`]s, in source order.
    pub fn definition_refs(&self) -> impl Iterator<Item = DefinitionRef<'_>> {
        self.definitions.iter().map(Definition::as_definition_ref)
    }

    pub fn fragments(&self) -> impl Iterator<Item = &FragmentDefinition> {
        self.definitions.iter().filter_map(|def| match def {
            Definition::Fragment(frag) => Some(frag),
            Definition::Operation(_) => None,
        })
    }

    pub fn operations(&self) -> impl Iterator<Item = &OperationDefinition> {
        self.definitions.iter().filter_map(|def| match def {
            Definition::Operation(op) => Some(op),
            Definition::Fragment(_) => None,
        })
    }

    /// Number of [`NodeId`]s assigned while parsing this document.
    pub fn node_count(&self) -> usize {
        self.node_count as usize
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Definition {
    Fragment(FragmentDefinition),
    Operation(OperationDefinition),
}

impl Definition {
    pub fn as_definition_ref(&self) -> DefinitionRef<'_> {
        match self {
            Self::Fragment(frag) => DefinitionRef::Fragment(frag),
            Self::Operation(op) => DefinitionRef::Operation(op),
        }
    }
}

/// A borrowed view of either kind of executable definition.
///
/// This is the unit over which variable scoping is checked and the key
/// type accepted by the closure operations of
/// [`ValidationContext`](crate::validation::ValidationContext).
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DefinitionRef<'a> {
    Fragment(&'a FragmentDefinition),
    Operation(&'a OperationDefinition),
}

impl<'a> DefinitionRef<'a> {
    pub fn id(&self) -> NodeId {
        match self {
            Self::Fragment(frag) => frag.id,
            Self::Operation(op) => op.id,
        }
    }

    /// The definition's name. Always `Some` for fragments; `None` for
    /// anonymous operations.
    pub fn name(&self) -> Option<&'a str> {
        match self {
            Self::Fragment(frag) => Some(frag.name.as_str()),
            Self::Operation(op) => op.name.as_deref(),
        }
    }

    pub fn position(&self) -> SourcePosition {
        match self {
            Self::Fragment(frag) => frag.position,
            Self::Operation(op) => op.position,
        }
    }

    pub fn selection_set(&self) -> &'a SelectionSet {
        match self {
            Self::Fragment(frag) => &frag.selection_set,
            Self::Operation(op) => &op.selection_set,
        }
    }

    pub fn variable_definitions(&self) -> &'a [VariableDefinition] {
        match self {
            Self::Fragment(frag) => &frag.variable_definitions,
            Self::Operation(op) => &op.variable_definitions,
        }
    }

    /// Whether this definition is its own variable-scoping root.
    ///
    /// Operations always are. Fragments are only when they declare at least
    /// one variable of their own; otherwise they are transparent and their
    /// variable usages belong to whichever independent definition spreads
    /// them.
    pub fn is_independent(&self) -> bool {
        match self {
            Self::Fragment(frag) => !frag.variable_definitions.is_empty(),
            Self::Operation(_) => true,
        }
    }

    pub fn as_ast_node(&self) -> AstNode<'a> {
        match *self {
            Self::Fragment(frag) => AstNode::FragmentDefinition(frag),
            Self::Operation(op) => AstNode::OperationDefinition(op),
        }
    }
}

impl<'a> std::convert::From<&'a FragmentDefinition> for DefinitionRef<'a> {
    fn from(frag: &'a FragmentDefinition) -> Self {
        Self::Fragment(frag)
    }
}

impl<'a> std::convert::From<&'a OperationDefinition> for DefinitionRef<'a> {
    fn from(op: &'a OperationDefinition) -> Self {
        Self::Operation(op)
    }
}

impl<'a> std::convert::From<&'a Definition> for DefinitionRef<'a> {
    fn from(def: &'a Definition) -> Self {
        def.as_definition_ref()
    }
}
