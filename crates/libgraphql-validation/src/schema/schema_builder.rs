use crate::ast::OperationKind;
use crate::ast::TypeAnnotation;
use crate::file_reader;
use crate::schema::schema::builtin_directive_names;
use crate::schema::schema::MetaFields;
use crate::schema::DirectiveDefinition;
use crate::schema::EnumType;
use crate::schema::FieldDefinition;
use crate::schema::FilePosition;
use crate::schema::GraphQLType;
use crate::schema::InputObjectType;
use crate::schema::InputValueDefinition;
use crate::schema::ObjectOrInterfaceType;
use crate::schema::ScalarType;
use crate::schema::Schema;
use crate::schema::SchemaDefLocation;
use crate::schema::UnionType;
use indexmap::IndexMap;
use std::path::Path;
use std::path::PathBuf;
use thiserror::Error;

type Result<T> = std::result::Result<T, SchemaBuildError>;

mod sdl {
    pub type Definition = graphql_parser::schema::Definition<'static, String>;
    pub type DirectiveDefinition = graphql_parser::schema::DirectiveDefinition<'static, String>;
    pub type Field = graphql_parser::schema::Field<'static, String>;
    pub type InputValue = graphql_parser::schema::InputValue<'static, String>;
    pub type SchemaDefinition = graphql_parser::schema::SchemaDefinition<'static, String>;
    pub type Type = graphql_parser::schema::Type<'static, String>;
    pub type TypeDefinition = graphql_parser::schema::TypeDefinition<'static, String>;
    pub type TypeExtension = graphql_parser::schema::TypeExtension<'static, String>;
}

#[derive(Clone, Debug, PartialEq)]
pub struct NamedTypeDefLocation {
    pub def_location: FilePosition,
    pub type_name: String,
}

/// Utility for building a [`Schema`] from one or more SDL sources.
///
/// Type extensions may appear before the type they extend (even in an
/// earlier file); they are applied when [`SchemaBuilder::build()`] runs.
#[derive(Debug)]
pub struct SchemaBuilder {
    directive_defs: IndexMap<String, DirectiveDefinition>,
    mutation_type: Option<NamedTypeDefLocation>,
    query_type: Option<NamedTypeDefLocation>,
    str_load_counter: u16,
    subscription_type: Option<NamedTypeDefLocation>,
    type_extensions: Vec<(PathBuf, sdl::TypeExtension)>,
    types: IndexMap<String, GraphQLType>,
}

impl SchemaBuilder {
    pub fn new() -> Self {
        Self {
            directive_defs: IndexMap::new(),
            mutation_type: None,
            query_type: None,
            str_load_counter: 0,
            subscription_type: None,
            type_extensions: vec![],
            types: IndexMap::new(),
        }
    }

    /// Shorthand for `SchemaBuilder::new().load_str(file_path, content)`.
    pub fn from_str(file_path: Option<PathBuf>, content: &str) -> Result<Self> {
        Self::new().load_str(file_path, content)
    }

    pub fn build(mut self) -> Result<Schema> {
        let mut schema = Schema {
            directive_defs: std::mem::take(&mut self.directive_defs),
            query_type: None,
            mutation_type: None,
            subscription_type: None,
            types: std::mem::take(&mut self.types),
            meta_fields: MetaFields::new(),
        };
        schema.inject_missing_builtins();

        for (file_path, extension) in self.type_extensions.drain(..) {
            apply_type_extension(&mut schema.types, &file_path, extension)?;
        }

        schema.query_type = resolve_root_type(
            &schema.types,
            OperationKind::Query,
            self.query_type.take(),
        )?;
        if schema.query_type.is_none() {
            return Err(SchemaBuildError::NoQueryOperationTypeDefined);
        }

        schema.mutation_type = resolve_root_type(
            &schema.types,
            OperationKind::Mutation,
            self.mutation_type.take(),
        )?;
        schema.subscription_type = resolve_root_type(
            &schema.types,
            OperationKind::Subscription,
            self.subscription_type.take(),
        )?;

        log::debug!(
            "Built schema with {} types and {} directives.",
            schema.types.len(),
            schema.directive_defs.len(),
        );
        Ok(schema)
    }

    pub fn load_file(self, file_path: impl AsRef<Path>) -> Result<Self> {
        self.load_files(vec![file_path])
    }

    pub fn load_files(mut self, file_paths: Vec<impl AsRef<Path>>) -> Result<Self> {
        for file_path in file_paths {
            let file_path = file_path.as_ref();
            let file_content = file_reader::read_content(file_path)
                .map_err(|err| SchemaBuildError::SchemaFileReadError(Box::new(err)))?;
            self = self.load_str(Some(file_path.to_path_buf()), file_content.as_str())?;
        }
        Ok(self)
    }

    pub fn load_str(mut self, file_path: Option<PathBuf>, content: &str) -> Result<Self> {
        let file_path =
            if let Some(file_path) = file_path {
                file_path
            } else {
                let ctr = self.str_load_counter;
                self.str_load_counter += 1;
                PathBuf::from(format!("str://{ctr}"))
            };

        let ast_doc =
            graphql_parser::schema::parse_schema::<String>(content)
                .map_err(|err| SchemaBuildError::ParseError {
                    file: file_path.to_owned(),
                    err: err.to_string(),
                })?.into_static();

        log::trace!(
            "Loading {} schema definitions from {file_path:?}.",
            ast_doc.definitions.len(),
        );
        for def in ast_doc.definitions {
            self.visit_ast_def(file_path.as_path(), def)?;
        }

        Ok(self)
    }

    fn visit_ast_def(&mut self, file_path: &Path, def: sdl::Definition) -> Result<()> {
        use graphql_parser::schema::Definition;
        match def {
            Definition::SchemaDefinition(schema_def) =>
                self.visit_ast_schemablock_def(file_path, schema_def),
            Definition::TypeDefinition(type_def) =>
                self.visit_ast_type_def(file_path, type_def),
            Definition::TypeExtension(type_ext) => {
                self.type_extensions.push((file_path.to_path_buf(), type_ext));
                Ok(())
            },
            Definition::DirectiveDefinition(directive_def) =>
                self.visit_ast_directive_def(file_path, directive_def),
        }
    }

    fn visit_ast_directive_def(
        &mut self,
        file_path: &Path,
        def: sdl::DirectiveDefinition,
    ) -> Result<()> {
        let file_position = FilePosition::from_pos(file_path, def.position);

        if builtin_directive_names().contains(&def.name.as_str()) {
            return Err(SchemaBuildError::RedefinitionOfBuiltinDirective {
                directive_name: def.name,
                location: file_position.into(),
            });
        }

        if let Some(existing) = self.directive_defs.get(def.name.as_str()) {
            return Err(SchemaBuildError::DuplicateDirectiveDefinition {
                directive_name: def.name.clone(),
                location1: existing.def_location.clone(),
                location2: file_position.into(),
            });
        }

        let arguments = collect_input_values(file_path, def.name.as_str(), &def.arguments)?;
        self.directive_defs.insert(def.name.clone(), DirectiveDefinition {
            name: def.name,
            def_location: file_position.into(),
            arguments,
        });

        Ok(())
    }

    fn visit_ast_schemablock_def(
        &mut self,
        file_path: &Path,
        schema_def: sdl::SchemaDefinition,
    ) -> Result<()> {
        let roots = [
            (OperationKind::Query, schema_def.query),
            (OperationKind::Mutation, schema_def.mutation),
            (OperationKind::Subscription, schema_def.subscription),
        ];

        for (operation, type_name) in roots {
            let Some(type_name) = type_name else {
                continue;
            };
            let typedef_loc = NamedTypeDefLocation {
                def_location: FilePosition::from_pos(file_path, schema_def.position),
                type_name,
            };
            let slot = match operation {
                OperationKind::Mutation => &mut self.mutation_type,
                OperationKind::Query => &mut self.query_type,
                OperationKind::Subscription => &mut self.subscription_type,
            };
            if let Some(existing_typedef_loc) = slot {
                return Err(SchemaBuildError::DuplicateOperationDefinition {
                    operation,
                    location1: existing_typedef_loc.clone(),
                    location2: typedef_loc,
                });
            }
            *slot = Some(typedef_loc);
        }

        Ok(())
    }

    fn visit_ast_type_def(&mut self, file_path: &Path, def: sdl::TypeDefinition) -> Result<()> {
        use graphql_parser::schema::TypeDefinition;
        let (name, position) = match &def {
            TypeDefinition::Enum(t) => (t.name.clone(), t.position),
            TypeDefinition::InputObject(t) => (t.name.clone(), t.position),
            TypeDefinition::Interface(t) => (t.name.clone(), t.position),
            TypeDefinition::Object(t) => (t.name.clone(), t.position),
            TypeDefinition::Scalar(t) => (t.name.clone(), t.position),
            TypeDefinition::Union(t) => (t.name.clone(), t.position),
        };
        let def_location: SchemaDefLocation = FilePosition::from_pos(file_path, position).into();

        if let Some(existing) = self.types.get(name.as_str()) {
            return Err(SchemaBuildError::DuplicateTypeDefinition {
                type_name: name,
                def1: existing.def_location().clone(),
                def2: def_location,
            });
        }

        let graphql_type = match def {
            TypeDefinition::Enum(t) => GraphQLType::Enum(EnumType {
                name: t.name,
                def_location,
                values: t.values.into_iter().map(|v| v.name).collect(),
            }),

            TypeDefinition::InputObject(t) => GraphQLType::InputObject(InputObjectType {
                fields: collect_input_values(file_path, t.name.as_str(), &t.fields)?,
                name: t.name,
                def_location,
            }),

            TypeDefinition::Interface(t) => GraphQLType::Interface(ObjectOrInterfaceType {
                fields: collect_fields(file_path, t.name.as_str(), &t.fields)?,
                name: t.name,
                def_location,
                interfaces: vec![],
            }),

            TypeDefinition::Object(t) => GraphQLType::Object(ObjectOrInterfaceType {
                fields: collect_fields(file_path, t.name.as_str(), &t.fields)?,
                name: t.name,
                def_location,
                interfaces: t.implements_interfaces,
            }),

            TypeDefinition::Scalar(t) => GraphQLType::Scalar(ScalarType {
                name: t.name,
                def_location,
            }),

            TypeDefinition::Union(t) => GraphQLType::Union(UnionType {
                name: t.name,
                def_location,
                members: t.types,
            }),
        };

        self.types.insert(name, graphql_type);
        Ok(())
    }
}

impl Default for SchemaBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn resolve_root_type(
    types: &IndexMap<String, GraphQLType>,
    operation: OperationKind,
    declared: Option<NamedTypeDefLocation>,
) -> Result<Option<String>> {
    if let Some(declared) = declared {
        return match types.get(declared.type_name.as_str()) {
            Some(GraphQLType::Object(_)) => Ok(Some(declared.type_name)),
            _ => Err(SchemaBuildError::InvalidRootOperationType {
                operation,
                type_name: declared.type_name,
                location: declared.def_location,
            }),
        };
    }

    let default_name = match operation {
        OperationKind::Mutation => "Mutation",
        OperationKind::Query => "Query",
        OperationKind::Subscription => "Subscription",
    };
    match types.get(default_name) {
        Some(GraphQLType::Object(_)) => Ok(Some(default_name.to_string())),
        _ => Ok(None),
    }
}

fn apply_type_extension(
    types: &mut IndexMap<String, GraphQLType>,
    file_path: &Path,
    extension: sdl::TypeExtension,
) -> Result<()> {
    use graphql_parser::schema::TypeExtension;
    let (name, position, extension_kind) = match &extension {
        TypeExtension::Enum(ext) => (ext.name.clone(), ext.position, "enum"),
        TypeExtension::InputObject(ext) => (ext.name.clone(), ext.position, "input"),
        TypeExtension::Interface(ext) => (ext.name.clone(), ext.position, "interface"),
        TypeExtension::Object(ext) => (ext.name.clone(), ext.position, "type"),
        TypeExtension::Scalar(ext) => (ext.name.clone(), ext.position, "scalar"),
        TypeExtension::Union(ext) => (ext.name.clone(), ext.position, "union"),
    };
    let location = FilePosition::from_pos(file_path, position);

    let Some(target) = types.get_mut(name.as_str()) else {
        return Err(SchemaBuildError::ExtensionOfUndefinedType {
            type_name: name,
            location,
        });
    };

    match (target, extension) {
        (GraphQLType::Enum(target), TypeExtension::Enum(ext)) =>
            target.values.extend(ext.values.into_iter().map(|v| v.name)),

        (GraphQLType::InputObject(target), TypeExtension::InputObject(ext)) =>
            merge_into(
                &mut target.fields,
                collect_input_values(file_path, name.as_str(), &ext.fields)?,
                name.as_str(),
                location,
            )?,

        (GraphQLType::Interface(target), TypeExtension::Interface(ext)) =>
            merge_into(
                &mut target.fields,
                collect_fields(file_path, name.as_str(), &ext.fields)?,
                name.as_str(),
                location,
            )?,

        (GraphQLType::Object(target), TypeExtension::Object(ext)) => {
            target.interfaces.extend(ext.implements_interfaces);
            merge_into(
                &mut target.fields,
                collect_fields(file_path, name.as_str(), &ext.fields)?,
                name.as_str(),
                location,
            )?
        },

        (GraphQLType::Scalar(_), TypeExtension::Scalar(_)) => (),

        (GraphQLType::Union(target), TypeExtension::Union(ext)) =>
            target.members.extend(ext.types),

        _ => return Err(SchemaBuildError::InvalidTypeExtension {
            type_name: name,
            extension_kind,
            location,
        }),
    }

    Ok(())
}

/// Merges `additions` into `target`, rejecting names `target` already has.
fn merge_into<T>(
    target: &mut IndexMap<String, T>,
    additions: IndexMap<String, T>,
    type_name: &str,
    location: FilePosition,
) -> Result<()> {
    for (name, value) in additions {
        if target.contains_key(name.as_str()) {
            return Err(SchemaBuildError::DuplicateFieldDefinition {
                type_name: type_name.to_string(),
                field_name: name,
                location,
            });
        }
        target.insert(name, value);
    }
    Ok(())
}

fn collect_fields(
    file_path: &Path,
    type_name: &str,
    fields: &[sdl::Field],
) -> Result<IndexMap<String, FieldDefinition>> {
    let mut collected = IndexMap::new();
    for field in fields {
        let location = FilePosition::from_pos(file_path, field.position);
        if collected.contains_key(field.name.as_str()) {
            return Err(SchemaBuildError::DuplicateFieldDefinition {
                type_name: type_name.to_string(),
                field_name: field.name.clone(),
                location,
            });
        }
        collected.insert(field.name.clone(), FieldDefinition {
            name: field.name.clone(),
            def_location: location.into(),
            arguments: collect_input_values(file_path, type_name, &field.arguments)?,
            field_type: type_annotation_from_ast(&field.field_type),
        });
    }
    Ok(collected)
}

fn collect_input_values(
    file_path: &Path,
    owner_name: &str,
    input_values: &[sdl::InputValue],
) -> Result<IndexMap<String, InputValueDefinition>> {
    let mut collected = IndexMap::new();
    for input_value in input_values {
        let location = FilePosition::from_pos(file_path, input_value.position);
        if collected.contains_key(input_value.name.as_str()) {
            return Err(SchemaBuildError::DuplicateFieldDefinition {
                type_name: owner_name.to_string(),
                field_name: input_value.name.clone(),
                location,
            });
        }
        collected.insert(input_value.name.clone(), InputValueDefinition {
            name: input_value.name.clone(),
            def_location: location.into(),
            value_type: type_annotation_from_ast(&input_value.value_type),
            default_value: input_value.default_value.clone(),
        });
    }
    Ok(collected)
}

pub(crate) fn type_annotation_from_ast(ast_type: &sdl::Type) -> TypeAnnotation {
    use graphql_parser::schema::Type;
    match ast_type {
        Type::ListType(inner) => TypeAnnotation::list(type_annotation_from_ast(inner)),
        Type::NamedType(name) => TypeAnnotation::named(name.as_str()),
        Type::NonNullType(inner) => type_annotation_from_ast(inner).non_null(),
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum SchemaBuildError {
    #[error("Multiple directives were defined with the same name: `@{directive_name}`")]
    DuplicateDirectiveDefinition {
        directive_name: String,
        location1: SchemaDefLocation,
        location2: SchemaDefLocation,
    },

    #[error("The `{type_name}` type defines `{field_name}` more than once")]
    DuplicateFieldDefinition {
        type_name: String,
        field_name: String,
        location: FilePosition,
    },

    #[error("Multiple root {operation} types were declared")]
    DuplicateOperationDefinition {
        operation: OperationKind,
        location1: NamedTypeDefLocation,
        location2: NamedTypeDefLocation,
    },

    #[error("Multiple GraphQL types with the same name were defined: `{type_name}`")]
    DuplicateTypeDefinition {
        type_name: String,
        def1: SchemaDefLocation,
        def2: SchemaDefLocation,
    },

    #[error("Attempted to extend `{type_name}`, which is not defined")]
    ExtensionOfUndefinedType {
        type_name: String,
        location: FilePosition,
    },

    #[error("The root {operation} type `{type_name}` is not a defined object type")]
    InvalidRootOperationType {
        operation: OperationKind,
        type_name: String,
        location: FilePosition,
    },

    #[error("`extend {extension_kind} {type_name}` does not match the kind of `{type_name}`")]
    InvalidTypeExtension {
        type_name: String,
        extension_kind: &'static str,
        location: FilePosition,
    },

    #[error("No `Query` type (or `schema {{ query: ... }}` override) was defined")]
    NoQueryOperationTypeDefined,

    #[error("Error parsing schema file {file:?}: {err}")]
    ParseError {
        file: PathBuf,
        err: String,
    },

    #[error("The built-in `@{directive_name}` directive may not be redefined")]
    RedefinitionOfBuiltinDirective {
        directive_name: String,
        location: SchemaDefLocation,
    },

    #[error("Failure while trying to read a schema file from disk: {0}")]
    SchemaFileReadError(Box<file_reader::ReadContentError>),
}
