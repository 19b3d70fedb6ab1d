use crate::validation::ValidationContext;
use crate::visitor::Visitor;

/// A validation rule: a named factory for the visitor that checks the
/// rule during one pass over a document.
///
/// The visitor reports findings through
/// [`ValidationContext::report_error()`] and may use the context's closure
/// operations to reason across fragment spreads.
pub trait ValidationRule {
    fn name(&self) -> &'static str;

    fn create_visitor<'c, 'a>(
        &self,
        context: &'c ValidationContext<'a>,
    ) -> Box<dyn Visitor<'a> + 'c>;
}
