use crate::ast::AstNode;
use crate::ast::AstNodeKind;
use crate::tests::utils::parse_doc;
use crate::visitor::visit;
use crate::visitor::ParallelVisitor;
use crate::visitor::VisitAction;
use crate::visitor::Visitor;

/// Logs every enter/leave as `+Kind` / `-Kind`, optionally skipping one
/// node kind.
#[derive(Default)]
struct EventLog {
    events: Vec<String>,
    skip: Option<AstNodeKind>,
}

impl<'a> Visitor<'a> for EventLog {
    fn enter(&mut self, node: AstNode<'a>) -> VisitAction {
        self.events.push(format!("+{:?}", node.kind()));
        if self.skip == Some(node.kind()) {
            VisitAction::Skip
        } else {
            VisitAction::Continue
        }
    }

    fn leave(&mut self, node: AstNode<'a>) {
        self.events.push(format!("-{:?}", node.kind()));
    }
}

#[test]
fn visits_in_reference_key_order() {
    let doc = parse_doc("query Q($a: Int = 1) @dir { f(x: [$a]) }");
    let mut log = EventLog::default();
    visit(AstNode::Document(&doc), &mut log);

    assert_eq!(log.events, vec![
        "+Document",
        "+OperationDefinition",
        "+VariableDefinition",
        "+Variable",
        "-Variable",
        "+Value",
        "-Value",
        "-VariableDefinition",
        "+DirectiveAnnotation",
        "-DirectiveAnnotation",
        "+SelectionSet",
        "+Field",
        "+Argument",
        "+Value",
        "+Variable",
        "-Variable",
        "-Value",
        "-Argument",
        "-Field",
        "-SelectionSet",
        "-OperationDefinition",
        "-Document",
    ]);
}

#[test]
fn visits_fragments_and_nested_values() {
    let doc = parse_doc(
        "fragment F on T { ...G @d ... on T { g(o: { k: $v }) } }",
    );
    let mut log = EventLog::default();
    visit(AstNode::Document(&doc), &mut log);

    assert_eq!(log.events, vec![
        "+Document",
        "+FragmentDefinition",
        "+SelectionSet",
        "+FragmentSpread",
        "+DirectiveAnnotation",
        "-DirectiveAnnotation",
        "-FragmentSpread",
        "+InlineFragment",
        "+SelectionSet",
        "+Field",
        "+Argument",
        "+Value",
        "+ObjectField",
        "+Variable",
        "-Variable",
        "-ObjectField",
        "-Value",
        "-Argument",
        "-Field",
        "-SelectionSet",
        "-InlineFragment",
        "-SelectionSet",
        "-FragmentDefinition",
        "-Document",
    ]);
}

#[test]
fn skip_suppresses_children_and_leave() {
    let doc = parse_doc("query Q($a: Int) { f }");
    let mut log = EventLog {
        skip: Some(AstNodeKind::VariableDefinition),
        ..Default::default()
    };
    visit(AstNode::Document(&doc), &mut log);

    assert_eq!(log.events, vec![
        "+Document",
        "+OperationDefinition",
        "+VariableDefinition",
        "+SelectionSet",
        "+Field",
        "-Field",
        "-SelectionSet",
        "-OperationDefinition",
        "-Document",
    ]);
}

#[test]
fn visit_can_start_below_the_document() {
    let doc = parse_doc("{ a { b } }");
    let op = doc.operations().next().unwrap();
    let mut log = EventLog::default();
    visit(AstNode::SelectionSet(&op.selection_set), &mut log);
    assert_eq!(log.events.first().map(String::as_str), Some("+SelectionSet"));
    assert_eq!(log.events.last().map(String::as_str), Some("-SelectionSet"));
    assert_eq!(log.events.len(), 8);
}

#[test]
fn parallel_visitor_tracks_skips_per_visitor() {
    let doc = parse_doc("{ a { b } c }");
    let mut parallel = ParallelVisitor::new(vec![
        EventLog {
            skip: Some(AstNodeKind::Field),
            ..Default::default()
        },
        EventLog::default(),
    ]);
    visit(AstNode::Document(&doc), &mut parallel);
    let [skipper, full] = <[EventLog; 2]>::try_from(parallel.into_inner())
        .ok()
        .unwrap();

    assert_eq!(skipper.events, vec![
        "+Document",
        "+OperationDefinition",
        "+SelectionSet",
        "+Field",
        "+Field",
        "-SelectionSet",
        "-OperationDefinition",
        "-Document",
    ]);
    assert_eq!(full.events.len(), 14);
    assert!(full.events.contains(&"+Field".to_string()));
    assert_eq!(full.events.iter().filter(|e| *e == "+Field").count(), 3);
}
