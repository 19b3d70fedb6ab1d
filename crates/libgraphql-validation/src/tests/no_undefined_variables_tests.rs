use crate::ast::AstNodeKind;
use crate::tests::utils::expect_errors;
use crate::tests::utils::expect_valid;
use crate::tests::utils::parse_doc;
use crate::tests::utils::test_schema;
use crate::validation::rules::undefined_var_message;
use crate::validation::rules::NoUndefinedVariables;
use crate::validation::validate_with_options;
use crate::validation::ValidationOptions;
use crate::validation::ValidationRule;

fn undefined_only(source: &str) -> Vec<crate::validation::ValidationError> {
    let rules: Vec<Box<dyn ValidationRule>> = vec![Box::new(NoUndefinedVariables)];
    validate_with_options(&test_schema(), &parse_doc(source), &ValidationOptions::default(), &rules)
}

#[test]
fn message_distinguishes_named_and_anonymous_operations() {
    assert_eq!(
        undefined_var_message("a", Some("Foo")),
        "Variable \"$a\" is not defined by operation \"Foo\".",
    );
    assert_eq!(undefined_var_message("a", None), "Variable \"$a\" is not defined.");
}

#[test]
fn all_variables_defined() {
    expect_valid("query Foo($a: String, $b: String) { field(arg: $a) t { field(a: $b) } }");
}

#[test]
fn undefined_variable_in_named_operation() {
    expect_errors(
        "query Foo { field(arg: $a) }",
        &["Variable \"$a\" is not defined by operation \"Foo\"."],
    );
}

#[test]
fn undefined_variable_in_anonymous_operation() {
    expect_errors(
        "{ field(arg: $a) }",
        &["Variable \"$a\" is not defined."],
    );
}

#[test]
fn variable_defined_by_operation_and_used_in_fragment() {
    expect_valid("query Foo($a: String) { ...Bar } fragment Bar on T { field(arg: $a) }");
}

#[test]
fn variable_used_in_transparent_fragment_is_reported_against_each_operation() {
    let errors = undefined_only(r#"
        query Foo($a: String) { t { ...Bar } }
        query Baz { t { ...Bar } }
        query { t { ...Bar } }
        fragment Bar on T { field(arg: $a) }
    "#);
    let messages = errors.iter().map(|e| e.message()).collect::<Vec<_>>();
    assert_eq!(messages, vec![
        "Variable \"$a\" is not defined by operation \"Baz\".",
        "Variable \"$a\" is not defined.",
    ]);
}

#[test]
fn variables_in_deeply_nested_fragments() {
    expect_errors(
        r#"
        query Foo($a: String) { ...A }
        fragment A on Query { t { ...B } }
        fragment B on T { nested { ...C } field(arg: $a) }
        fragment C on T { field(a: $c) }
        "#,
        &["Variable \"$c\" is not defined by operation \"Foo\"."],
    );
}

#[test]
fn variables_in_directives_lists_and_objects() {
    expect_errors(
        r#"
        query Foo {
            dog @include(if: $cond) { name }
            field(list: [$item], input: { requiredField: $req, nested: { intField: $deep } })
        }
        "#,
        &[
            "Variable \"$cond\" is not defined by operation \"Foo\".",
            "Variable \"$item\" is not defined by operation \"Foo\".",
            "Variable \"$req\" is not defined by operation \"Foo\".",
            "Variable \"$deep\" is not defined by operation \"Foo\".",
        ],
    );
}

#[test]
fn each_undefined_usage_is_reported() {
    let errors = undefined_only("query Foo { field(arg: $a) t { field(a: $a, b: $a) } }");
    assert_eq!(errors.len(), 3);
    assert!(errors.iter().all(|e| e.rule() == NoUndefinedVariables::NAME));
}

#[test]
fn errors_locate_the_usage_and_the_definition() {
    let errors = undefined_only("query Foo {\n  field(arg: $a)\n}");
    assert_eq!(errors.len(), 1);

    let locations = errors[0].locations();
    assert_eq!(locations.len(), 2);
    assert_eq!(locations[0].kind, AstNodeKind::Variable);
    let usage_position = locations[0].position.unwrap();
    assert_eq!((usage_position.line(), usage_position.column()), (2, 14));
    assert_eq!(locations[1].kind, AstNodeKind::OperationDefinition);
    let def_position = locations[1].position.unwrap();
    assert_eq!((def_position.line(), def_position.column()), (1, 1));
}

#[test]
fn fragment_cycles_terminate() {
    expect_errors(
        r#"
        query Foo($a: String) { ...A }
        fragment A on Query { t { ...B } field(arg: $a) }
        fragment B on T { ...C field(arg: $b) }
        fragment C on T { ...B nested { ...C } }
        "#,
        &["Variable \"$b\" is not defined by operation \"Foo\"."],
    );
}

#[test]
fn unknown_fragments_are_ignored() {
    expect_valid("query Foo($a: String) { field(arg: $a) ...Missing }");
}

#[test]
fn transparent_fragment_alone_reports_nothing() {
    expect_valid("fragment Bar on T { field(arg: $a) }");
}

#[test]
fn independent_fragment_declaring_its_variables_is_valid() {
    expect_valid("fragment Bar($a: String) on T { field(arg: $a) } query Foo { t { ...Bar } }");
}

#[test]
fn independent_fragment_must_declare_its_own_usages() {
    let errors = undefined_only(r#"
        fragment Bar($b: String) on T { field(arg: $a, b: $b) }
        query Foo($a: String) { t { ...Bar } }
    "#);
    let messages = errors.iter().map(|e| e.message()).collect::<Vec<_>>();
    assert_eq!(messages, vec!["Variable \"$a\" is not defined by operation \"Bar\"."]);
    assert_eq!(errors[0].locations()[1].kind, AstNodeKind::FragmentDefinition);
}

#[test]
fn independent_fragment_includes_transparent_fragments() {
    expect_errors(
        r#"
        fragment Bar($a: String) on T { ...Inner }
        fragment Inner on T { field(arg: $a, b: $b) }
        "#,
        &["Variable \"$b\" is not defined by operation \"Bar\"."],
    );
}

#[test]
fn independent_fragment_usages_are_not_attributed_to_callers() {
    expect_valid(r#"
        query Foo { t { ...Bar } }
        fragment Bar($a: String) on T { field(arg: $a) }
    "#);
}

#[test]
fn variable_default_values_are_not_usages() {
    expect_valid("query Foo($a: String = \"x\") { field(arg: $a) }");
}

#[test]
fn definitions_do_not_leak_declarations_into_siblings() {
    expect_errors(
        r#"
        query One($a: String) { field(arg: $a) }
        query Two { field(arg: $a) }
        "#,
        &["Variable \"$a\" is not defined by operation \"Two\"."],
    );
}
