/// Knobs for [`parse_executable_document_with_options`](crate::parser::parse_executable_document_with_options).
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ParserOptions {
    /// Accept variable definitions on fragments
    /// (`fragment Foo($a: Int) on T { ... }`).
    ///
    /// Fragments declaring variables are validated as their own
    /// variable-scoping roots. Defaults to `true`.
    pub allow_fragment_variables: bool,
}

impl ParserOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn allow_fragment_variables(mut self, allow: bool) -> Self {
        self.allow_fragment_variables = allow;
        self
    }
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self {
            allow_fragment_variables: true,
        }
    }
}
