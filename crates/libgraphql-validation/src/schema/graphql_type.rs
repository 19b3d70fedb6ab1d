use crate::ast::TypeAnnotation;
use crate::schema::SchemaDefLocation;
use indexmap::IndexMap;

/// A constant (variable-free) value as it appears in schema SDL, e.g. an
/// argument's default value.
pub type ConstValue = graphql_parser::schema::Value<'static, String>;

/// A named type defined within a [`Schema`](crate::schema::Schema).
#[derive(Clone, Debug, PartialEq)]
pub enum GraphQLType {
    Enum(EnumType),
    InputObject(InputObjectType),
    Interface(ObjectOrInterfaceType),
    Object(ObjectOrInterfaceType),
    Scalar(ScalarType),
    Union(UnionType),
}

impl GraphQLType {
    pub fn name(&self) -> &str {
        match self {
            Self::Enum(t) => t.name.as_str(),
            Self::InputObject(t) => t.name.as_str(),
            Self::Interface(t) | Self::Object(t) => t.name.as_str(),
            Self::Scalar(t) => t.name.as_str(),
            Self::Union(t) => t.name.as_str(),
        }
    }

    pub fn def_location(&self) -> &SchemaDefLocation {
        match self {
            Self::Enum(t) => &t.def_location,
            Self::InputObject(t) => &t.def_location,
            Self::Interface(t) | Self::Object(t) => &t.def_location,
            Self::Scalar(t) => &t.def_location,
            Self::Union(t) => &t.def_location,
        }
    }

    /// Scalars, enums and input objects may be used as input types.
    pub fn is_input_type(&self) -> bool {
        matches!(self, Self::Enum(_) | Self::InputObject(_) | Self::Scalar(_))
    }

    /// Everything but input objects may be used as an output type.
    pub fn is_output_type(&self) -> bool {
        !matches!(self, Self::InputObject(_))
    }

    /// Objects, interfaces and unions may have selection sets.
    pub fn is_composite_type(&self) -> bool {
        matches!(self, Self::Interface(_) | Self::Object(_) | Self::Union(_))
    }

    /// The output fields of an object or interface type.
    pub fn fields(&self) -> Option<&IndexMap<String, FieldDefinition>> {
        match self {
            Self::Interface(t) | Self::Object(t) => Some(&t.fields),
            _ => None,
        }
    }

    /// The input fields of an input object type.
    pub fn input_fields(&self) -> Option<&IndexMap<String, InputValueDefinition>> {
        match self {
            Self::InputObject(t) => Some(&t.fields),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct EnumType {
    pub name: String,
    pub def_location: SchemaDefLocation,
    pub values: Vec<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct InputObjectType {
    pub name: String,
    pub def_location: SchemaDefLocation,
    pub fields: IndexMap<String, InputValueDefinition>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ObjectOrInterfaceType {
    pub name: String,
    pub def_location: SchemaDefLocation,
    pub interfaces: Vec<String>,
    pub fields: IndexMap<String, FieldDefinition>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ScalarType {
    pub name: String,
    pub def_location: SchemaDefLocation,
}

#[derive(Clone, Debug, PartialEq)]
pub struct UnionType {
    pub name: String,
    pub def_location: SchemaDefLocation,
    pub members: Vec<String>,
}

/// An output field of an object or interface type.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldDefinition {
    pub name: String,
    pub def_location: SchemaDefLocation,
    pub arguments: IndexMap<String, InputValueDefinition>,
    pub field_type: TypeAnnotation,
}

/// An argument of a field or directive, or a field of an input object.
#[derive(Clone, Debug, PartialEq)]
pub struct InputValueDefinition {
    pub name: String,
    pub def_location: SchemaDefLocation,
    pub value_type: TypeAnnotation,
    pub default_value: Option<ConstValue>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct DirectiveDefinition {
    pub name: String,
    pub def_location: SchemaDefLocation,
    pub arguments: IndexMap<String, InputValueDefinition>,
}
