use crate::ast::OperationKind;
use crate::ast::TypeAnnotation;
use crate::schema::DirectiveDefinition;
use crate::schema::FieldDefinition;
use crate::schema::GraphQLType;
use crate::schema::InputValueDefinition;
use crate::schema::SchemaBuilder;
use crate::schema::SchemaDefLocation;
use crate::schema::ScalarType;
use indexmap::IndexMap;

/// Names of the scalar types every schema implicitly defines.
pub(crate) const BUILTIN_SCALAR_NAMES: &[&str] = &["Boolean", "Float", "ID", "Int", "String"];

/// A read-only GraphQL schema.
///
/// Used by [`TypeInfo`](crate::visitor::TypeInfo) to annotate variable
/// usages with the input type and default value expected at their position.
#[derive(Clone, Debug, PartialEq)]
pub struct Schema {
    pub(crate) directive_defs: IndexMap<String, DirectiveDefinition>,
    pub(crate) query_type: Option<String>,
    pub(crate) mutation_type: Option<String>,
    pub(crate) subscription_type: Option<String>,
    pub(crate) types: IndexMap<String, GraphQLType>,
    pub(crate) meta_fields: MetaFields,
}

impl Schema {
    /// Helper function that just delegates to [`SchemaBuilder::new()`].
    pub fn builder() -> SchemaBuilder {
        SchemaBuilder::new()
    }

    /// A schema containing only the built-in scalars and directives, and no
    /// root operation types.
    ///
    /// Validating against it still checks variable scoping; variable usages
    /// simply carry no inferred input type.
    pub fn empty() -> Self {
        let mut schema = Self {
            directive_defs: IndexMap::new(),
            query_type: None,
            mutation_type: None,
            subscription_type: None,
            types: IndexMap::new(),
            meta_fields: MetaFields::new(),
        };
        schema.inject_missing_builtins();
        schema
    }

    pub fn all_directives(&self) -> &IndexMap<String, DirectiveDefinition> {
        &self.directive_defs
    }

    pub fn all_types(&self) -> &IndexMap<String, GraphQLType> {
        &self.types
    }

    pub fn directive(&self, name: &str) -> Option<&DirectiveDefinition> {
        self.directive_defs.get(name)
    }

    pub fn get_type(&self, name: &str) -> Option<&GraphQLType> {
        self.types.get(name)
    }

    /// Resolves the named type at the core of `annotation`.
    pub fn named_type(&self, annotation: &TypeAnnotation) -> Option<&GraphQLType> {
        self.get_type(annotation.innermost_name())
    }

    pub fn query_type(&self) -> Option<&GraphQLType> {
        self.root_operation_type(OperationKind::Query)
    }

    pub fn mutation_type(&self) -> Option<&GraphQLType> {
        self.root_operation_type(OperationKind::Mutation)
    }

    pub fn subscription_type(&self) -> Option<&GraphQLType> {
        self.root_operation_type(OperationKind::Subscription)
    }

    /// The object type at the root of operations of kind `kind`, factoring
    /// in any `schema { ... }` override of the default root type names.
    pub fn root_operation_type(&self, kind: OperationKind) -> Option<&GraphQLType> {
        let name = match kind {
            OperationKind::Mutation => self.mutation_type.as_deref(),
            OperationKind::Query => self.query_type.as_deref(),
            OperationKind::Subscription => self.subscription_type.as_deref(),
        }?;
        self.get_type(name)
    }

    /// Looks up the definition of field `field_name` on `parent_type`,
    /// including the `__typename`, `__schema` and `__type` meta fields.
    pub fn field_definition<'s>(
        &'s self,
        parent_type: &'s GraphQLType,
        field_name: &str,
    ) -> Option<&'s FieldDefinition> {
        let is_query_root = self.query_type.as_deref() == Some(parent_type.name());
        match field_name {
            "__typename" if parent_type.is_composite_type() =>
                Some(&self.meta_fields.typename),
            "__schema" if is_query_root =>
                Some(&self.meta_fields.schema),
            "__type" if is_query_root =>
                Some(&self.meta_fields.type_),
            _ => parent_type.fields()?.get(field_name),
        }
    }

    pub(crate) fn inject_missing_builtins(&mut self) {
        for name in BUILTIN_SCALAR_NAMES {
            if !self.types.contains_key(*name) {
                self.types.insert(name.to_string(), GraphQLType::Scalar(ScalarType {
                    name: name.to_string(),
                    def_location: SchemaDefLocation::GraphQLBuiltIn,
                }));
            }
        }

        for directive in builtin_directives() {
            if !self.directive_defs.contains_key(directive.name.as_str()) {
                self.directive_defs.insert(directive.name.clone(), directive);
            }
        }
    }
}

/// Definitions of the introspection meta fields.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct MetaFields {
    schema: FieldDefinition,
    type_: FieldDefinition,
    typename: FieldDefinition,
}

impl MetaFields {
    pub(crate) fn new() -> Self {
        Self {
            schema: builtin_field("__schema", [], TypeAnnotation::named("__Schema").non_null()),
            type_: builtin_field(
                "__type",
                [builtin_input_value("name", TypeAnnotation::named("String").non_null(), None)],
                TypeAnnotation::named("__Type"),
            ),
            typename: builtin_field("__typename", [], TypeAnnotation::named("String").non_null()),
        }
    }
}

fn builtin_field<const N: usize>(
    name: &str,
    arguments: [InputValueDefinition; N],
    field_type: TypeAnnotation,
) -> FieldDefinition {
    FieldDefinition {
        name: name.to_string(),
        def_location: SchemaDefLocation::GraphQLBuiltIn,
        arguments: arguments.into_iter()
            .map(|arg| (arg.name.clone(), arg))
            .collect(),
        field_type,
    }
}

fn builtin_input_value(
    name: &str,
    value_type: TypeAnnotation,
    default_value: Option<crate::schema::ConstValue>,
) -> InputValueDefinition {
    InputValueDefinition {
        name: name.to_string(),
        def_location: SchemaDefLocation::GraphQLBuiltIn,
        value_type,
        default_value,
    }
}

/// `@skip`, `@include`, `@deprecated` and `@specifiedBy`.
pub(crate) fn builtin_directives() -> Vec<DirectiveDefinition> {
    let directive = |name: &str, arg: InputValueDefinition| DirectiveDefinition {
        name: name.to_string(),
        def_location: SchemaDefLocation::GraphQLBuiltIn,
        arguments: IndexMap::from([(arg.name.clone(), arg)]),
    };

    vec![
        directive("skip", builtin_input_value(
            "if",
            TypeAnnotation::named("Boolean").non_null(),
            None,
        )),
        directive("include", builtin_input_value(
            "if",
            TypeAnnotation::named("Boolean").non_null(),
            None,
        )),
        directive("deprecated", builtin_input_value(
            "reason",
            TypeAnnotation::named("String"),
            Some(crate::schema::ConstValue::String("No longer supported".to_string())),
        )),
        directive("specifiedBy", builtin_input_value(
            "url",
            TypeAnnotation::named("String").non_null(),
            None,
        )),
    ]
}

pub(crate) fn builtin_directive_names() -> [&'static str; 4] {
    ["skip", "include", "deprecated", "specifiedBy"]
}
