use crate::SourcePosition;

/// A lexed token together with the position of its first character.
#[derive(Clone, Debug, PartialEq)]
pub struct GraphQLToken {
    pub kind: GraphQLTokenKind,
    pub position: SourcePosition,
}

impl GraphQLToken {
    pub fn new(kind: GraphQLTokenKind, position: SourcePosition) -> Self {
        Self { kind, position }
    }
}

/// The kind of a GraphQL token.
///
/// String literals (both regular and block strings) carry their fully
/// decoded value. Numeric literals carry their raw source text, including a
/// leading `-` if present.
#[derive(Clone, Debug, PartialEq)]
pub enum GraphQLTokenKind {
    // =========================================================================
    // Punctuators
    // =========================================================================
    /// `&`
    Ampersand,
    /// `@`
    At,
    /// `!`
    Bang,
    /// `:`
    Colon,
    /// `}`
    CurlyBraceClose,
    /// `{`
    CurlyBraceOpen,
    /// `$`
    Dollar,
    /// `...`
    Ellipsis,
    /// `=`
    Equals,
    /// `)`
    ParenClose,
    /// `(`
    ParenOpen,
    /// `|`
    Pipe,
    /// `]`
    SquareBracketClose,
    /// `[`
    SquareBracketOpen,

    // =========================================================================
    // Literals
    // =========================================================================
    Name(String),
    IntValue(String),
    FloatValue(String),
    StringValue(String),

    /// End of input.
    Eof,
}

impl GraphQLTokenKind {
    /// Returns `true` if this token is the name `keyword`.
    pub fn is_keyword(&self, keyword: &str) -> bool {
        matches!(self, Self::Name(name) if name == keyword)
    }

    /// Short human-readable description used in parse error messages.
    pub fn describe(&self) -> String {
        match self {
            Self::Ampersand => "`&`".to_string(),
            Self::At => "`@`".to_string(),
            Self::Bang => "`!`".to_string(),
            Self::Colon => "`:`".to_string(),
            Self::CurlyBraceClose => "`}`".to_string(),
            Self::CurlyBraceOpen => "`{`".to_string(),
            Self::Dollar => "`$`".to_string(),
            Self::Ellipsis => "`...`".to_string(),
            Self::Equals => "`=`".to_string(),
            Self::ParenClose => "`)`".to_string(),
            Self::ParenOpen => "`(`".to_string(),
            Self::Pipe => "`|`".to_string(),
            Self::SquareBracketClose => "`]`".to_string(),
            Self::SquareBracketOpen => "`[`".to_string(),
            Self::Name(name) => format!("name `{name}`"),
            Self::IntValue(raw) => format!("int `{raw}`"),
            Self::FloatValue(raw) => format!("float `{raw}`"),
            Self::StringValue(_) => "string".to_string(),
            Self::Eof => "end of input".to_string(),
        }
    }
}
