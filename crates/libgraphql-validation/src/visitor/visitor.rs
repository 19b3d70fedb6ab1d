use crate::ast::AstNode;

/// What a [`Visitor`] wants the traversal to do after entering a node.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum VisitAction {
    /// Descend into the node's children, then call [`Visitor::leave`].
    #[default]
    Continue,

    /// Do not descend into the node. Its `leave` is not called either.
    Skip,
}

/// Callbacks invoked by [`visit`](crate::visitor::visit) as it walks a
/// tree of [`AstNode`]s.
///
/// Both methods default to no-ops so implementors only match on the node
/// kinds they care about.
pub trait Visitor<'a> {
    fn enter(&mut self, _node: AstNode<'a>) -> VisitAction {
        VisitAction::Continue
    }

    fn leave(&mut self, _node: AstNode<'a>) {}
}

impl<'a, V: Visitor<'a> + ?Sized> Visitor<'a> for Box<V> {
    fn enter(&mut self, node: AstNode<'a>) -> VisitAction {
        (**self).enter(node)
    }

    fn leave(&mut self, node: AstNode<'a>) {
        (**self).leave(node)
    }
}
