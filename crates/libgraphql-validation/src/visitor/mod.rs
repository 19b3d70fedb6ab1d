//! Generic depth-first traversal over [`AstNode`](crate::ast::AstNode)
//! trees, plus type tracking for visitors that need schema context.

mod parallel_visitor;
mod type_info;
mod type_info_visitor;
mod visit;
#[allow(clippy::module_inception)]
mod visitor;

pub use parallel_visitor::ParallelVisitor;
pub use type_info::TypeInfo;
pub use type_info_visitor::TypeAwareVisitor;
pub use type_info_visitor::TypeInfoVisitor;
pub use visit::visit;
pub use visitor::VisitAction;
pub use visitor::Visitor;
