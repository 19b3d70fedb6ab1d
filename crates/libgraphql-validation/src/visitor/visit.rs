use crate::ast::AstNode;
use crate::ast::DirectiveAnnotation;
use crate::ast::Selection;
use crate::ast::Value;
use crate::ast::VariableDefinition;
use crate::visitor::VisitAction;
use crate::visitor::Visitor;

/// Walks `root` and everything beneath it depth-first, in source order.
///
/// Children are visited in the same order as the GraphQL reference
/// implementation's visitor keys, e.g. an operation's variable
/// definitions, then its directives, then its selection set.
///
/// ```
/// use libgraphql_validation::ast::AstNode;
/// use libgraphql_validation::parser::parse_executable_document;
/// use libgraphql_validation::visitor::visit;
/// use libgraphql_validation::visitor::VisitAction;
/// use libgraphql_validation::visitor::Visitor;
///
/// #[derive(Default)]
/// struct FieldCounter(usize);
/// impl<'a> Visitor<'a> for FieldCounter {
///     fn enter(&mut self, node: AstNode<'a>) -> VisitAction {
///         if let AstNode::Field(_) = node {
///             self.0 += 1;
///         }
///         VisitAction::Continue
///     }
/// }
///
/// let doc = parse_executable_document("{ a { b c } d }").unwrap();
/// let mut counter = FieldCounter::default();
/// visit((&doc).into(), &mut counter);
/// assert_eq!(counter.0, 4);
/// ```
pub fn visit<'a, V: Visitor<'a> + ?Sized>(root: AstNode<'a>, visitor: &mut V) {
    if visitor.enter(root) == VisitAction::Skip {
        return;
    }
    for child in children(root) {
        visit(child, visitor);
    }
    visitor.leave(root);
}

fn value_node(value: &Value) -> AstNode<'_> {
    match value {
        Value::Variable(var) => AstNode::Variable(var),
        _ => AstNode::Value(value),
    }
}

fn push_directives<'a>(out: &mut Vec<AstNode<'a>>, directives: &'a [DirectiveAnnotation]) {
    out.extend(directives.iter().map(AstNode::DirectiveAnnotation));
}

fn push_variable_definitions<'a>(
    out: &mut Vec<AstNode<'a>>,
    variable_definitions: &'a [VariableDefinition],
) {
    out.extend(variable_definitions.iter().map(AstNode::VariableDefinition));
}

fn children(node: AstNode<'_>) -> Vec<AstNode<'_>> {
    let mut out = vec![];
    match node {
        AstNode::Argument(arg) => out.push(value_node(&arg.value)),

        AstNode::DirectiveAnnotation(directive) =>
            out.extend(directive.arguments.iter().map(AstNode::Argument)),

        AstNode::Document(doc) =>
            out.extend(doc.definition_refs().map(AstNode::from)),

        AstNode::Field(field) => {
            out.extend(field.arguments.iter().map(AstNode::Argument));
            push_directives(&mut out, &field.directives);
            if let Some(selection_set) = &field.selection_set {
                out.push(AstNode::SelectionSet(selection_set));
            }
        },

        AstNode::FragmentDefinition(frag) => {
            push_variable_definitions(&mut out, &frag.variable_definitions);
            push_directives(&mut out, &frag.directives);
            out.push(AstNode::SelectionSet(&frag.selection_set));
        },

        AstNode::FragmentSpread(spread) =>
            push_directives(&mut out, &spread.directives),

        AstNode::InlineFragment(inline) => {
            push_directives(&mut out, &inline.directives);
            out.push(AstNode::SelectionSet(&inline.selection_set));
        },

        AstNode::ObjectField(field) => out.push(value_node(&field.value)),

        AstNode::OperationDefinition(op) => {
            push_variable_definitions(&mut out, &op.variable_definitions);
            push_directives(&mut out, &op.directives);
            out.push(AstNode::SelectionSet(&op.selection_set));
        },

        AstNode::SelectionSet(selection_set) =>
            out.extend(selection_set.selections.iter().map(|selection| match selection {
                Selection::Field(field) => AstNode::Field(field),
                Selection::FragmentSpread(spread) => AstNode::FragmentSpread(spread),
                Selection::InlineFragment(inline) => AstNode::InlineFragment(inline),
            })),

        AstNode::Value(Value::List(items)) =>
            out.extend(items.iter().map(value_node)),

        AstNode::Value(Value::Object(fields)) =>
            out.extend(fields.iter().map(AstNode::ObjectField)),

        AstNode::Value(_) | AstNode::Variable(_) => (),

        AstNode::VariableDefinition(var_def) => {
            out.push(AstNode::Variable(&var_def.variable));
            if let Some(default_value) = &var_def.default_value {
                out.push(value_node(default_value));
            }
            push_directives(&mut out, &var_def.directives);
        },
    }
    out
}
