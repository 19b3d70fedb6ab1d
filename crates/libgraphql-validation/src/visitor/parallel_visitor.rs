use crate::ast::AstNode;
use crate::visitor::VisitAction;
use crate::visitor::Visitor;

/// Runs several visitors in a single traversal.
///
/// When one visitor returns [`VisitAction::Skip`] for a node, only that
/// visitor stops receiving callbacks until the traversal leaves the node;
/// the others carry on into its children.
pub struct ParallelVisitor<V> {
    depth: usize,
    skipping_at: Vec<Option<usize>>,
    visitors: Vec<V>,
}

impl<V> ParallelVisitor<V> {
    pub fn new(visitors: Vec<V>) -> Self {
        Self {
            depth: 0,
            skipping_at: vec![None; visitors.len()],
            visitors,
        }
    }

    pub fn into_inner(self) -> Vec<V> {
        self.visitors
    }
}

impl<'a, V: Visitor<'a>> Visitor<'a> for ParallelVisitor<V> {
    fn enter(&mut self, node: AstNode<'a>) -> VisitAction {
        self.depth += 1;
        for (visitor, skipping_at) in self.visitors.iter_mut().zip(self.skipping_at.iter_mut()) {
            if skipping_at.is_none() && visitor.enter(node) == VisitAction::Skip {
                *skipping_at = Some(self.depth);
            }
        }
        VisitAction::Continue
    }

    fn leave(&mut self, node: AstNode<'a>) {
        for (visitor, skipping_at) in self.visitors.iter_mut().zip(self.skipping_at.iter_mut()) {
            match *skipping_at {
                None => visitor.leave(node),
                Some(depth) if depth == self.depth => *skipping_at = None,
                Some(_) => (),
            }
        }
        self.depth -= 1;
    }
}
