use crate::ast::AstNode;
use crate::schema::Schema;
use crate::tests::utils::parse_doc;
use crate::tests::utils::test_schema;
use crate::visitor::visit;
use crate::visitor::TypeAwareVisitor;
use crate::visitor::TypeInfo;
use crate::visitor::TypeInfoVisitor;
use crate::visitor::VisitAction;

/// Records what `TypeInfo` reports at each variable reference and field.
#[derive(Default)]
struct Recorder {
    fields: Vec<(String, Option<String>, Option<String>)>,
    skip_fields_named: Option<&'static str>,
    variables: Vec<(String, Option<String>, Option<String>)>,
}

impl<'a> TypeAwareVisitor<'a> for Recorder {
    fn enter(&mut self, node: AstNode<'a>, type_info: &TypeInfo<'a>) -> VisitAction {
        match node {
            AstNode::Field(field) => {
                self.fields.push((
                    field.name.clone(),
                    type_info.parent_type().map(|t| t.name().to_string()),
                    type_info.output_type().map(|t| t.to_string()),
                ));
                if self.skip_fields_named == Some(field.name.as_str()) {
                    return VisitAction::Skip;
                }
            },
            AstNode::Variable(var) => self.variables.push((
                var.name.clone(),
                type_info.input_type().map(|t| t.to_string()),
                type_info.default_value().map(|v| v.to_string()),
            )),
            _ => (),
        }
        VisitAction::Continue
    }
}

fn record(schema: &Schema, source: &str, skip_fields_named: Option<&'static str>) -> Recorder {
    let doc = parse_doc(source);
    let mut type_info = TypeInfo::new(schema);
    let mut visitor = TypeInfoVisitor::new(&mut type_info, Recorder {
        skip_fields_named,
        ..Default::default()
    });
    visit(AstNode::Document(&doc), &mut visitor);
    visitor.into_inner()
}

fn variable_types(source: &str) -> Vec<(String, Option<String>, Option<String>)> {
    record(&test_schema(), source, None).variables
}

fn entry(name: &str, ty: Option<&str>, default: Option<&str>) -> (String, Option<String>, Option<String>) {
    (name.to_string(), ty.map(str::to_string), default.map(str::to_string))
}

#[test]
fn argument_positions_carry_the_argument_type() {
    assert_eq!(
        variable_types("query Q($a: String) { field(arg: $a) }"),
        vec![
            entry("a", Some("String"), None),
            entry("a", Some("String"), None),
        ],
    );
}

#[test]
fn argument_positions_carry_schema_defaults() {
    assert_eq!(
        variable_types("{ dog { barks(times: $t) } field(other: $o) }"),
        vec![
            entry("t", Some("Int"), Some("1")),
            entry("o", Some("Int"), Some("0")),
        ],
    );
}

#[test]
fn list_items_carry_the_item_type() {
    assert_eq!(
        variable_types("{ field(list: [$x, $y]) }"),
        vec![
            entry("x", Some("String"), None),
            entry("y", Some("String"), None),
        ],
    );
}

#[test]
fn list_values_in_non_list_positions_keep_the_nullable_type() {
    assert_eq!(
        variable_types("{ node(id: [$x]) { id } }"),
        vec![entry("x", Some("ID"), None)],
    );
}

#[test]
fn object_fields_carry_input_field_types_and_defaults() {
    assert_eq!(
        variable_types(r#"
            {
                field(input: {
                    intField: $i,
                    nested: { requiredField: $r, stringListField: [$s] },
                    unknownField: $u,
                })
            }
        "#),
        vec![
            entry("i", Some("Int"), Some("42")),
            entry("r", Some("Boolean!"), None),
            entry("s", Some("String"), None),
            entry("u", None, None),
        ],
    );
}

#[test]
fn directive_arguments_use_the_directive_definition() {
    assert_eq!(
        variable_types("{ dog @include(if: $c) { name(surname: $s) @skip(if: $d) } }"),
        vec![
            entry("c", Some("Boolean!"), None),
            entry("s", Some("Boolean"), None),
            entry("d", Some("Boolean!"), None),
        ],
    );
}

#[test]
fn unknown_positions_have_no_type() {
    assert_eq!(
        variable_types("{ unknown(arg: $a) dog { unknown(x: $b) } field(nope: $c) }"),
        vec![
            entry("a", None, None),
            entry("b", None, None),
            entry("c", None, None),
        ],
    );
}

#[test]
fn variable_definitions_carry_declared_input_types() {
    assert_eq!(
        variable_types("query Q($a: ComplexInput, $b: Dog, $c: Unknown) { field }"),
        vec![
            entry("a", Some("ComplexInput"), None),
            entry("b", None, None),
            entry("c", None, None),
        ],
    );
}

#[test]
fn tracks_parent_and_output_types_through_fragments() {
    let recorder = record(&test_schema(), r#"
        {
            dog { name owner { pets { __typename } } }
            node(id: 1) { ... on Dog { name } ...NodeFields }
        }
        fragment NodeFields on Node { id }
    "#, None);

    let fields = recorder.fields.iter()
        .map(|(name, parent, output)| (name.as_str(), parent.as_deref(), output.as_deref()))
        .collect::<Vec<_>>();
    assert_eq!(fields, vec![
        ("dog", Some("Query"), Some("Dog")),
        ("name", Some("Dog"), Some("String")),
        ("owner", Some("Dog"), Some("Human")),
        ("pets", Some("Human"), Some("[Dog!]!")),
        ("__typename", Some("Dog"), Some("String!")),
        ("node", Some("Query"), Some("Node")),
        ("name", Some("Dog"), Some("String")),
        ("id", Some("Node"), Some("ID!")),
    ]);
}

#[test]
fn inline_fragments_without_type_condition_keep_the_enclosing_type() {
    let recorder = record(&test_schema(), "{ dog { ... @include(if: true) { name } } }", None);
    assert_eq!(
        recorder.fields[1],
        ("name".to_string(), Some("Dog".to_string()), Some("String".to_string())),
    );
}

#[test]
fn skipped_nodes_unwind_type_info() {
    let recorder = record(
        &test_schema(),
        "{ dog { name(surname: $hidden) } field(arg: $a) }",
        Some("dog"),
    );
    assert_eq!(recorder.variables, vec![entry("a", Some("String"), None)]);
    assert_eq!(
        recorder.fields.last().unwrap(),
        &("field".to_string(), Some("Query".to_string()), Some("String".to_string())),
    );
}

#[test]
fn empty_schema_yields_no_types() {
    let recorder = record(&Schema::empty(), "query Q($a: String) { field(arg: $a) }", None);
    assert_eq!(recorder.variables, vec![
        entry("a", Some("String"), None),
        entry("a", None, None),
    ]);
    assert_eq!(recorder.fields, vec![("field".to_string(), None, None)]);
}

/// Records `(variable, input type, enclosing input type)` at each variable.
#[derive(Default)]
struct ParentInputRecorder {
    variables: Vec<(String, Option<String>, Option<String>)>,
}

impl<'a> TypeAwareVisitor<'a> for ParentInputRecorder {
    fn enter(&mut self, node: AstNode<'a>, type_info: &TypeInfo<'a>) -> VisitAction {
        if let AstNode::Variable(var) = node {
            self.variables.push((
                var.name.clone(),
                type_info.input_type().map(|t| t.to_string()),
                type_info.parent_input_type().map(|t| t.to_string()),
            ));
        }
        VisitAction::Continue
    }
}

#[test]
fn parent_input_type_is_the_enclosing_value_type() {
    let schema = test_schema();
    let doc = parse_doc(r#"
        {
            field(
                arg: $a,
                input: { nested: { intField: $i }, stringListField: [$s] },
            )
        }
    "#);
    let mut type_info = TypeInfo::new(&schema);
    let mut visitor = TypeInfoVisitor::new(&mut type_info, ParentInputRecorder::default());
    visit(AstNode::Document(&doc), &mut visitor);

    assert_eq!(visitor.into_inner().variables, vec![
        entry("a", Some("String"), None),
        entry("i", Some("Int"), Some("ComplexInput")),
        entry("s", Some("String"), Some("[String]")),
    ]);
}
