use crate::ast::AstNode;
use crate::visitor::TypeInfo;
use crate::visitor::VisitAction;
use crate::visitor::Visitor;

/// A visitor whose callbacks also receive the [`TypeInfo`] for the node
/// being visited.
pub trait TypeAwareVisitor<'a> {
    fn enter(&mut self, _node: AstNode<'a>, _type_info: &TypeInfo<'a>) -> VisitAction {
        VisitAction::Continue
    }

    fn leave(&mut self, _node: AstNode<'a>, _type_info: &TypeInfo<'a>) {}
}

/// Adapts a [`TypeAwareVisitor`] into a [`Visitor`], keeping a
/// [`TypeInfo`] in step with the traversal.
///
/// `TypeInfo` has already entered a node when the inner visitor's `enter`
/// sees it, and has not yet left it when the inner visitor's `leave` sees
/// it. If the inner visitor skips a node, the `TypeInfo` state for that
/// node is unwound immediately.
pub struct TypeInfoVisitor<'t, 'a, V> {
    inner: V,
    type_info: &'t mut TypeInfo<'a>,
}

impl<'t, 'a, V: TypeAwareVisitor<'a>> TypeInfoVisitor<'t, 'a, V> {
    pub fn new(type_info: &'t mut TypeInfo<'a>, inner: V) -> Self {
        Self {
            inner,
            type_info,
        }
    }

    pub fn into_inner(self) -> V {
        self.inner
    }
}

impl<'a, V: TypeAwareVisitor<'a>> Visitor<'a> for TypeInfoVisitor<'_, 'a, V> {
    fn enter(&mut self, node: AstNode<'a>) -> VisitAction {
        self.type_info.enter(node);
        let action = self.inner.enter(node, self.type_info);
        if action == VisitAction::Skip {
            self.type_info.leave(node);
        }
        action
    }

    fn leave(&mut self, node: AstNode<'a>) {
        self.inner.leave(node, self.type_info);
        self.type_info.leave(node);
    }
}
