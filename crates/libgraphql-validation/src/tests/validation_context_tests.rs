use crate::ast::AstNode;
use crate::ast::DefinitionRef;
use crate::ast::Document;
use crate::ast::Selection;
use crate::schema::Schema;
use crate::tests::utils::parse_doc;
use crate::tests::utils::test_schema;
use crate::validation::CacheStats;
use crate::validation::DuplicateFragmentPolicy;
use crate::validation::ValidationContext;
use crate::validation::ValidationError;
use crate::validation::ValidationOptions;
use std::rc::Rc;

fn definition<'a>(doc: &'a Document, name: &str) -> DefinitionRef<'a> {
    doc.definition_refs()
        .find(|def| def.name() == Some(name))
        .unwrap_or_else(|| panic!("no definition named `{name}`"))
}

fn fragment_names(fragments: &[&crate::ast::FragmentDefinition]) -> Vec<String> {
    fragments.iter().map(|frag| frag.name.clone()).collect()
}

fn usage_names(usages: &[crate::validation::VariableUsage<'_>]) -> Vec<String> {
    usages.iter().map(|usage| usage.name().to_string()).collect()
}

#[test]
fn fragment_spreads_include_nested_selection_sets() {
    let schema = Schema::empty();
    let doc = parse_doc("{ ...A a { ...B b { ...C } } ... on Query { ...D } ...E }");
    let context = ValidationContext::new(&schema, &doc);

    let spreads = context.fragment_spreads(definition_selection_set(&doc));
    let names = spreads.iter()
        .map(|spread| spread.fragment_name.as_str())
        .collect::<Vec<_>>();
    // Spreads of a set come before those of its nested sets; nested sets
    // are expanded last-first.
    assert_eq!(names, vec!["A", "E", "D", "B", "C"]);
}

fn definition_selection_set(doc: &Document) -> &crate::ast::SelectionSet {
    &doc.operations().next().unwrap().selection_set
}

#[test]
fn fragment_spreads_of_a_leaf_set_are_empty() {
    let schema = Schema::empty();
    let doc = parse_doc("{ a b c }");
    let context = ValidationContext::new(&schema, &doc);
    assert!(context.fragment_spreads(definition_selection_set(&doc)).is_empty());
}

#[test]
fn recursively_referenced_fragments_are_transitive_and_unique() {
    let schema = test_schema();
    let doc = parse_doc(r#"
        query Q { ...A ...B }
        fragment A on Query { ...C dog { ...C } }
        fragment B on Query { ...C }
        fragment C on Query { ...D }
        fragment D on Query { field }
        fragment Unused on Query { field }
    "#);
    let context = ValidationContext::new(&schema, &doc);

    let fragments = context.recursively_referenced_fragments(definition(&doc, "Q"));
    assert_eq!(fragment_names(&fragments), vec!["A", "B", "C", "D"]);
}

#[test]
fn recursively_referenced_fragments_terminate_on_cycles() {
    let schema = test_schema();
    let doc = parse_doc(r#"
        query Q { ...A }
        fragment A on Query { ...B }
        fragment B on Query { ...A ...B t { ...A } }
    "#);
    let context = ValidationContext::new(&schema, &doc);

    let fragments = context.recursively_referenced_fragments(definition(&doc, "Q"));
    assert_eq!(fragment_names(&fragments), vec!["A", "B"]);

    let from_a = context.recursively_referenced_fragments(definition(&doc, "A"));
    assert_eq!(fragment_names(&from_a), vec!["B", "A"]);
}

#[test]
fn recursively_referenced_fragments_skip_unknown_names() {
    let schema = test_schema();
    let doc = parse_doc("query Q { ...Missing ...A } fragment A on Query { ...AlsoMissing }");
    let context = ValidationContext::new(&schema, &doc);

    let fragments = context.recursively_referenced_fragments(definition(&doc, "Q"));
    assert_eq!(fragment_names(&fragments), vec!["A"]);
    assert!(context.errors().is_empty());
}

#[test]
fn recursively_referenced_fragments_stop_at_independent_fragments() {
    let schema = test_schema();
    let doc = parse_doc(r#"
        query Q { ...Independent ...Transparent }
        fragment Independent($a: String) on Query { ...Behind }
        fragment Transparent on Query { field }
        fragment Behind on Query { field }
    "#);
    let context = ValidationContext::new(&schema, &doc);

    assert!(context.is_independent(definition(&doc, "Q")));
    assert!(context.is_independent(definition(&doc, "Independent")));
    assert!(!context.is_independent(definition(&doc, "Transparent")));

    let fragments = context.recursively_referenced_fragments(definition(&doc, "Q"));
    assert_eq!(fragment_names(&fragments), vec!["Transparent"]);

    let behind_independent =
        context.recursively_referenced_fragments(definition(&doc, "Independent"));
    assert_eq!(fragment_names(&behind_independent), vec!["Behind"]);
}

#[test]
fn variable_usages_skip_variable_definitions() {
    let schema = test_schema();
    let doc = parse_doc(r#"
        query Q($a: String = "x", $b: Int) {
            field(arg: $a, other: $b) @include(if: $c)
            dog { barks(times: $b) }
            ...F
        }
        fragment F on Query { field(arg: $f) }
    "#);
    let context = ValidationContext::new(&schema, &doc);

    let usages = context.variable_usages(definition(&doc, "Q"));
    assert_eq!(usage_names(&usages), vec!["a", "b", "c", "b"]);
    assert_eq!(usages[0].input_type.as_ref().map(|t| t.to_string()).as_deref(), Some("String"));
    assert_eq!(usages[2].input_type.as_ref().map(|t| t.to_string()).as_deref(), Some("Boolean!"));
    assert!(usages[3].default_value.is_some());
}

#[test]
fn recursive_variable_usages_concatenate_in_discovery_order() {
    let schema = test_schema();
    let doc = parse_doc(r#"
        query Q { field(arg: $q) ...A ...B }
        fragment A on Query { field(arg: $a) ...B }
        fragment B on Query { field(arg: $b1) t { field(a: $b2) } }
    "#);
    let context = ValidationContext::new(&schema, &doc);

    let usages = context.recursive_variable_usages(definition(&doc, "Q"));
    // B is reachable twice but contributes its usages once.
    assert_eq!(usage_names(&usages), vec!["q", "a", "b1", "b2"]);
}

#[test]
fn recursive_variable_usages_exclude_independent_fragments() {
    let schema = test_schema();
    let doc = parse_doc(r#"
        query Q($x: String) { field(arg: $x) ...Own }
        fragment Own($y: String) on Query { field(arg: $y) }
    "#);
    let context = ValidationContext::new(&schema, &doc);

    assert_eq!(usage_names(&context.recursive_variable_usages(definition(&doc, "Q"))), vec!["x"]);
    assert_eq!(usage_names(&context.recursive_variable_usages(definition(&doc, "Own"))), vec!["y"]);
}

#[test]
fn duplicate_fragment_names_follow_the_configured_policy() {
    let schema = test_schema();
    let doc = parse_doc(r#"
        query Q { ...F }
        fragment F on Query { field(arg: $first) }
        fragment F on Query { field(arg: $last) }
    "#);

    let first_field_arg = |context: &ValidationContext<'_>| {
        let frag = context.fragment("F").unwrap();
        let Selection::Field(field) = &frag.selection_set.selections[0] else {
            panic!("expected a field");
        };
        field.arguments[0].value.as_variable().unwrap().name.clone()
    };

    let keep_last = ValidationContext::new(&schema, &doc);
    assert_eq!(first_field_arg(&keep_last), "last");
    assert_eq!(
        usage_names(&keep_last.recursive_variable_usages(definition(&doc, "Q"))),
        vec!["last"],
    );

    let keep_first = ValidationContext::with_options(
        &schema,
        &doc,
        ValidationOptions::new().duplicate_fragment_policy(DuplicateFragmentPolicy::KeepFirst),
    );
    assert_eq!(first_field_arg(&keep_first), "first");
    assert_eq!(
        usage_names(&keep_first.recursive_variable_usages(definition(&doc, "Q"))),
        vec!["first"],
    );
}

#[test]
fn closure_operations_are_memoized() {
    let schema = test_schema();
    let doc = parse_doc(r#"
        query Q($a: String) { ...A field(arg: $a) }
        fragment A on Query { ...B }
        fragment B on Query { ...A field(arg: $a) }
    "#);
    let context = ValidationContext::new(&schema, &doc);
    let q = definition(&doc, "Q");
    assert_eq!(context.cache_stats(), CacheStats::default());

    let usages1 = context.recursive_variable_usages(q);
    let after_first = context.cache_stats();
    assert_eq!(after_first, CacheStats {
        fragment_table_builds: 1,
        fragment_spreads_computed: 3,
        recursively_referenced_fragments_computed: 1,
        variable_usages_computed: 3,
        recursive_variable_usages_computed: 1,
    });

    let usages2 = context.recursive_variable_usages(q);
    assert!(Rc::ptr_eq(&usages1, &usages2));
    assert_eq!(usages1, usages2);

    let fragments1 = context.recursively_referenced_fragments(q);
    let fragments2 = context.recursively_referenced_fragments(q);
    assert!(Rc::ptr_eq(&fragments1, &fragments2));

    let spreads1 = context.fragment_spreads(q.selection_set());
    let spreads2 = context.fragment_spreads(q.selection_set());
    assert!(Rc::ptr_eq(&spreads1, &spreads2));

    let own1 = context.variable_usages(q);
    let own2 = context.variable_usages(q);
    assert!(Rc::ptr_eq(&own1, &own2));

    assert!(context.fragment("A").is_some());
    assert!(context.fragment("Missing").is_none());

    assert_eq!(context.cache_stats(), after_first);
}

#[test]
fn memo_tables_are_keyed_by_node_identity() {
    let schema = test_schema();
    // Two structurally identical operations still get separate entries.
    let doc = parse_doc("query Q { field(arg: $a) } query R { field(arg: $a) }");
    let context = ValidationContext::new(&schema, &doc);

    let q = context.variable_usages(definition(&doc, "Q"));
    let r = context.variable_usages(definition(&doc, "R"));
    assert!(!Rc::ptr_eq(&q, &r));
    assert_ne!(q[0].node.id, r[0].node.id);
    assert_eq!(context.cache_stats().variable_usages_computed, 2);
}

#[test]
fn reported_errors_are_collected_in_order() {
    let schema = Schema::empty();
    let doc = parse_doc("query Q { a } query R { b }");
    let context = ValidationContext::new(&schema, &doc);
    assert_eq!(context.schema().all_types().len(), 5);
    assert_eq!(context.document().definitions.len(), 2);

    for name in ["Q", "R"] {
        let def = definition(&doc, name);
        context.report_error(ValidationError::new(
            "TestRule",
            format!("saw {name}"),
            [AstNode::from(def)],
        ));
    }
    assert_eq!(context.errors().len(), 2);

    let errors = context.into_errors();
    let messages = errors.iter().map(ValidationError::message).collect::<Vec<_>>();
    assert_eq!(messages, vec!["saw Q", "saw R"]);
    assert_eq!(errors[1].rule(), "TestRule");
    assert_eq!(errors[1].locations()[0].node_id, Some(definition(&doc, "R").id()));
}
