use crate::ast::AstNode;
use crate::ast::Document;
use crate::schema::Schema;
use crate::validation::rules::NoUndefinedVariables;
use crate::validation::rules::NoUnusedVariables;
use crate::validation::ValidationContext;
use crate::validation::ValidationError;
use crate::validation::ValidationOptions;
use crate::validation::ValidationRule;
use crate::visitor::visit;
use crate::visitor::ParallelVisitor;

/// The rules [`validate()`] runs.
pub fn specified_rules() -> Vec<Box<dyn ValidationRule>> {
    vec![
        Box::new(NoUndefinedVariables),
        Box::new(NoUnusedVariables),
    ]
}

/// Validates `document` against `schema` with [`specified_rules()`] and
/// default [`ValidationOptions`].
///
/// ```
/// use libgraphql_validation::parser::parse_executable_document;
/// use libgraphql_validation::schema::Schema;
/// use libgraphql_validation::validation::validate;
///
/// let doc = parse_executable_document("query Foo { field(arg: $a) }").unwrap();
/// let errors = validate(&Schema::empty(), &doc);
/// assert_eq!(errors.len(), 1);
/// assert_eq!(
///     errors[0].message(),
///     "Variable \"$a\" is not defined by operation \"Foo\".",
/// );
/// ```
pub fn validate(schema: &Schema, document: &Document) -> Vec<ValidationError> {
    validate_with_options(schema, document, &ValidationOptions::default(), &specified_rules())
}

/// Runs `rules` over `document` in a single traversal and returns every
/// error they report, in the order reported.
pub fn validate_with_options(
    schema: &Schema,
    document: &Document,
    options: &ValidationOptions,
    rules: &[Box<dyn ValidationRule>],
) -> Vec<ValidationError> {
    log::debug!(
        "Validating {} definition(s) with {} rule(s).",
        document.definitions.len(),
        rules.len(),
    );

    let context = ValidationContext::with_options(schema, document, options.to_owned());
    {
        let visitors = rules.iter().map(|rule| {
            log::trace!("Creating visitor for {}.", rule.name());
            rule.create_visitor(&context)
        }).collect::<Vec<_>>();
        let mut parallel_visitor = ParallelVisitor::new(visitors);
        visit(AstNode::Document(document), &mut parallel_visitor);
    }

    let stats = context.cache_stats();
    let errors = context.into_errors();
    log::debug!(
        "Validation finished with {} error(s) ({stats:?}).",
        errors.len(),
    );
    errors
}
