use crate::SourcePosition;

/// Categorizes parse errors for programmatic handling.
///
/// The `#[error(...)]` messages are concise. Full human-readable messages
/// live in [`GraphQLParseError::message()`].
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum GraphQLParseErrorKind {
    /// Expected specific token(s) but found something else.
    #[error("unexpected token: {found}")]
    UnexpectedToken {
        expected: Vec<String>,
        found: String,
    },

    /// The document ended before a complete construct was parsed.
    #[error("unexpected end of input")]
    UnexpectedEof {
        expected: Vec<String>,
    },

    /// The lexer could not produce a token (bad character, unterminated
    /// string, malformed number, ...).
    #[error("lexer error")]
    LexerError,

    /// A type-system definition (`type`, `schema`, `extend`, ...) appeared in
    /// a document that may only contain operations and fragments.
    #[error("non-executable definition: `{keyword}`")]
    NonExecutableDefinition {
        keyword: String,
    },

    /// `fragment Foo($a: T) on ...` was used with
    /// [`ParserOptions::allow_fragment_variables`](crate::parser::ParserOptions)
    /// disabled.
    #[error("fragment variables are disabled: `{fragment_name}`")]
    FragmentVariablesDisabled {
        fragment_name: String,
    },

    /// A `$variable` appeared where only constant values are allowed.
    #[error("variable in constant value: `${variable_name}`")]
    VariableInConstContext {
        variable_name: String,
    },

    /// Nesting exceeded the parser's recursion limit.
    #[error("recursion limit exceeded")]
    RecursionLimitExceeded,
}

/// A parse error with location information.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
#[error("{message} ({position})")]
pub struct GraphQLParseError {
    message: String,
    position: SourcePosition,
    kind: GraphQLParseErrorKind,
}

impl GraphQLParseError {
    pub fn new(
        message: impl Into<String>,
        position: SourcePosition,
        kind: GraphQLParseErrorKind,
    ) -> Self {
        Self {
            message: message.into(),
            position,
            kind,
        }
    }

    pub(crate) fn lexer(message: impl Into<String>, position: SourcePosition) -> Self {
        Self::new(message, position, GraphQLParseErrorKind::LexerError)
    }

    /// Returns the human-readable error message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the position at which the error was detected.
    pub fn position(&self) -> SourcePosition {
        self.position
    }

    /// Returns the categorized error kind.
    pub fn kind(&self) -> &GraphQLParseErrorKind {
        &self.kind
    }
}
