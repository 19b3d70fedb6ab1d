/// A type reference such as `String`, `[ID!]` or `Episode!`.
///
/// Used both for variable definitions within executable documents and for
/// field, argument and input-field types within a
/// [`Schema`](crate::schema::Schema). Non-null wrapping is represented by
/// the `nullable` flag on each level rather than by a separate wrapper
/// variant.
#[derive(Clone, Debug, Eq, Hash, PartialEq, serde::Serialize)]
pub enum TypeAnnotation {
    List {
        inner: Box<TypeAnnotation>,
        nullable: bool,
    },
    Named {
        name: String,
        nullable: bool,
    },
}

impl TypeAnnotation {
    /// A nullable named type annotation (e.g. `String`).
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named {
            name: name.into(),
            nullable: true,
        }
    }

    /// A nullable list annotation wrapping `inner` (e.g. `[String]`).
    pub fn list(inner: TypeAnnotation) -> Self {
        Self::List {
            inner: Box::new(inner),
            nullable: true,
        }
    }

    /// Returns this annotation with its outermost level marked non-null.
    pub fn non_null(self) -> Self {
        match self {
            Self::List { inner, .. } => Self::List { inner, nullable: false },
            Self::Named { name, .. } => Self::Named { name, nullable: false },
        }
    }

    /// Returns a copy of this annotation with its outermost level marked
    /// nullable (GraphQL's `getNullableType`).
    pub fn to_nullable(&self) -> Self {
        match self {
            Self::List { inner, .. } => Self::List {
                inner: inner.clone(),
                nullable: true,
            },
            Self::Named { name, .. } => Self::Named {
                name: name.clone(),
                nullable: true,
            },
        }
    }

    /// The name of the innermost named type (`[[Foo!]]!` -> `Foo`).
    pub fn innermost_name(&self) -> &str {
        match self {
            Self::List { inner, .. } => inner.innermost_name(),
            Self::Named { name, .. } => name.as_str(),
        }
    }

    /// The wrapped item annotation, if this is a list annotation.
    pub fn list_item(&self) -> Option<&TypeAnnotation> {
        match self {
            Self::List { inner, .. } => Some(inner),
            Self::Named { .. } => None,
        }
    }

    pub fn nullable(&self) -> bool {
        match self {
            Self::List { nullable, .. } | Self::Named { nullable, .. } => *nullable,
        }
    }

    pub fn to_graphql_string(&self) -> String {
        self.to_string()
    }
}

impl std::fmt::Display for TypeAnnotation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::List { inner, nullable } => write!(
                f,
                "[{inner}]{}",
                if *nullable { "" } else { "!" },
            ),

            Self::Named { name, nullable } => write!(
                f,
                "{name}{}",
                if *nullable { "" } else { "!" },
            ),
        }
    }
}
