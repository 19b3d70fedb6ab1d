//! Recursive descent parser for GraphQL executable documents.
//!
//! Each grammar rule has a corresponding `parse_*` method. Parsing stops at
//! the first error; the parser never panics on malformed input.
//!
//! [`NodeId`](crate::ast::NodeId)s are allocated in pre-order as each node
//! begins, so ids increase in source order.

use crate::ast;
use crate::ast::NodeIdAllocator;
use crate::parser::GraphQLLexer;
use crate::parser::GraphQLParseError;
use crate::parser::GraphQLParseErrorKind;
use crate::parser::GraphQLToken;
use crate::parser::GraphQLTokenKind;
use crate::parser::ParserOptions;

type Result<T> = std::result::Result<T, GraphQLParseError>;

/// Maximum nesting of selection sets, values and list type annotations.
const MAX_RECURSION_DEPTH: usize = 64;

const TYPE_SYSTEM_KEYWORDS: &[&str] = &[
    "directive",
    "enum",
    "extend",
    "input",
    "interface",
    "scalar",
    "schema",
    "type",
    "union",
];

/// Whether `$variables` may appear in the value being parsed.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum ConstContext {
    AllowVariables,
    ConstOnly,
}

pub struct ExecutableDocumentParser<'src> {
    lexer: GraphQLLexer<'src>,
    current: GraphQLToken,
    ids: NodeIdAllocator,
    options: ParserOptions,
    depth: usize,
}

impl<'src> ExecutableDocumentParser<'src> {
    pub fn new(source: &'src str, options: ParserOptions) -> Result<Self> {
        let mut lexer = GraphQLLexer::new(source);
        let current = lexer.next_token()?;
        Ok(Self {
            lexer,
            current,
            ids: NodeIdAllocator::new(),
            options,
            depth: 0,
        })
    }

    pub fn parse_document(mut self) -> Result<ast::Document> {
        let mut definitions = vec![];
        loop {
            if self.current.kind == GraphQLTokenKind::Eof {
                if definitions.is_empty() {
                    return Err(self.unexpected(&["a definition"]));
                }
                break;
            }
            definitions.push(self.parse_definition()?);
        }

        Ok(ast::Document {
            definitions,
            node_count: self.ids.allocated(),
        })
    }

    // =========================================================================
    // Token helpers
    // =========================================================================

    fn advance(&mut self) -> Result<GraphQLToken> {
        let next = self.lexer.next_token()?;
        Ok(std::mem::replace(&mut self.current, next))
    }

    fn at(&self, kind: &GraphQLTokenKind) -> bool {
        &self.current.kind == kind
    }

    /// Consumes the current token if it is `kind`.
    fn eat(&mut self, kind: &GraphQLTokenKind) -> Result<bool> {
        if self.at(kind) {
            self.advance()?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    fn expect(&mut self, kind: GraphQLTokenKind) -> Result<GraphQLToken> {
        if self.at(&kind) {
            self.advance()
        } else {
            Err(self.unexpected(&[kind.describe().as_str()]))
        }
    }

    fn expect_name(&mut self) -> Result<String> {
        if let GraphQLTokenKind::Name(_) = self.current.kind {
            match self.advance()?.kind {
                GraphQLTokenKind::Name(name) => Ok(name),
                _ => unreachable!("current token was checked to be a name"),
            }
        } else {
            Err(self.unexpected(&["a name"]))
        }
    }

    fn expect_keyword(&mut self, keyword: &str) -> Result<()> {
        if self.current.kind.is_keyword(keyword) {
            self.advance()?;
            Ok(())
        } else {
            let expected = format!("`{keyword}`");
            Err(self.unexpected(&[expected.as_str()]))
        }
    }

    fn unexpected(&self, expected: &[&str]) -> GraphQLParseError {
        let expected: Vec<String> = expected.iter().map(|s| s.to_string()).collect();
        let found = self.current.kind.describe();
        let message = format!("Expected {}, found {found}", expected.join(" or "));
        let kind =
            if self.current.kind == GraphQLTokenKind::Eof {
                GraphQLParseErrorKind::UnexpectedEof { expected }
            } else {
                GraphQLParseErrorKind::UnexpectedToken { expected, found }
            };
        GraphQLParseError::new(message, self.current.position, kind)
    }

    fn enter_nesting(&mut self) -> Result<()> {
        self.depth += 1;
        if self.depth > MAX_RECURSION_DEPTH {
            return Err(GraphQLParseError::new(
                format!("Document nesting exceeds the maximum depth of {MAX_RECURSION_DEPTH}"),
                self.current.position,
                GraphQLParseErrorKind::RecursionLimitExceeded,
            ));
        }
        Ok(())
    }

    fn exit_nesting(&mut self) {
        self.depth -= 1;
    }

    // =========================================================================
    // Definitions
    // =========================================================================

    fn parse_definition(&mut self) -> Result<ast::Definition> {
        match &self.current.kind {
            GraphQLTokenKind::CurlyBraceOpen =>
                Ok(ast::Definition::Operation(self.parse_operation_definition()?)),

            GraphQLTokenKind::Name(name) => match name.as_str() {
                "query" | "mutation" | "subscription" =>
                    Ok(ast::Definition::Operation(self.parse_operation_definition()?)),

                "fragment" =>
                    Ok(ast::Definition::Fragment(self.parse_fragment_definition()?)),

                keyword if TYPE_SYSTEM_KEYWORDS.contains(&keyword) => Err(GraphQLParseError::new(
                    format!(
                        "Unexpected `{keyword}`: type system definitions are not allowed in \
                        executable documents",
                    ),
                    self.current.position,
                    GraphQLParseErrorKind::NonExecutableDefinition {
                        keyword: keyword.to_string(),
                    },
                )),

                _ => Err(self.unexpected(&["`query`", "`mutation`", "`subscription`", "`fragment`", "`{`"])),
            },

            _ => Err(self.unexpected(&["`query`", "`mutation`", "`subscription`", "`fragment`", "`{`"])),
        }
    }

    fn parse_operation_definition(&mut self) -> Result<ast::OperationDefinition> {
        let id = self.ids.next_id();
        let position = self.current.position;

        // Query shorthand: `{ ... }`
        if self.at(&GraphQLTokenKind::CurlyBraceOpen) {
            return Ok(ast::OperationDefinition {
                id,
                position,
                operation_kind: ast::OperationKind::Query,
                name: None,
                variable_definitions: vec![],
                directives: vec![],
                selection_set: self.parse_selection_set()?,
            });
        }

        let operation_kind = match self.expect_name()?.as_str() {
            "mutation" => ast::OperationKind::Mutation,
            "subscription" => ast::OperationKind::Subscription,
            _ => ast::OperationKind::Query,
        };

        let name =
            if let GraphQLTokenKind::Name(_) = self.current.kind {
                Some(self.expect_name()?)
            } else {
                None
            };

        let variable_definitions =
            if self.at(&GraphQLTokenKind::ParenOpen) {
                self.parse_variable_definitions()?
            } else {
                vec![]
            };

        Ok(ast::OperationDefinition {
            id,
            position,
            operation_kind,
            name,
            variable_definitions,
            directives: self.parse_directives(ConstContext::AllowVariables)?,
            selection_set: self.parse_selection_set()?,
        })
    }

    fn parse_fragment_definition(&mut self) -> Result<ast::FragmentDefinition> {
        let id = self.ids.next_id();
        let position = self.current.position;
        self.expect_keyword("fragment")?;

        if self.current.kind.is_keyword("on") {
            return Err(self.unexpected(&["a fragment name"]));
        }
        let name = self.expect_name()?;

        let variable_definitions =
            if self.at(&GraphQLTokenKind::ParenOpen) {
                if !self.options.allow_fragment_variables {
                    return Err(GraphQLParseError::new(
                        format!(
                            "Fragment `{name}` declares variables, but fragment variables \
                            are disabled",
                        ),
                        self.current.position,
                        GraphQLParseErrorKind::FragmentVariablesDisabled {
                            fragment_name: name,
                        },
                    ));
                }
                self.parse_variable_definitions()?
            } else {
                vec![]
            };

        self.expect_keyword("on")?;
        let type_condition = self.expect_name()?;

        Ok(ast::FragmentDefinition {
            id,
            position,
            name,
            variable_definitions,
            type_condition,
            directives: self.parse_directives(ConstContext::AllowVariables)?,
            selection_set: self.parse_selection_set()?,
        })
    }

    fn parse_variable_definitions(&mut self) -> Result<Vec<ast::VariableDefinition>> {
        self.expect(GraphQLTokenKind::ParenOpen)?;
        let mut definitions = vec![self.parse_variable_definition()?];
        while !self.eat(&GraphQLTokenKind::ParenClose)? {
            definitions.push(self.parse_variable_definition()?);
        }
        Ok(definitions)
    }

    fn parse_variable_definition(&mut self) -> Result<ast::VariableDefinition> {
        let id = self.ids.next_id();
        let position = self.current.position;
        let variable = self.parse_variable()?;
        self.expect(GraphQLTokenKind::Colon)?;
        let var_type = self.parse_type_annotation()?;

        let default_value =
            if self.eat(&GraphQLTokenKind::Equals)? {
                Some(self.parse_value(ConstContext::ConstOnly)?)
            } else {
                None
            };

        Ok(ast::VariableDefinition {
            id,
            position,
            variable,
            var_type,
            default_value,
            directives: self.parse_directives(ConstContext::ConstOnly)?,
        })
    }

    fn parse_variable(&mut self) -> Result<ast::Variable> {
        let id = self.ids.next_id();
        let position = self.current.position;
        self.expect(GraphQLTokenKind::Dollar)?;
        Ok(ast::Variable {
            id,
            position,
            name: self.expect_name()?,
        })
    }

    fn parse_type_annotation(&mut self) -> Result<ast::TypeAnnotation> {
        let annotation =
            if self.at(&GraphQLTokenKind::SquareBracketOpen) {
                self.enter_nesting()?;
                self.advance()?;
                let inner = self.parse_type_annotation()?;
                self.expect(GraphQLTokenKind::SquareBracketClose)?;
                self.exit_nesting();
                ast::TypeAnnotation::list(inner)
            } else {
                ast::TypeAnnotation::named(self.expect_name()?)
            };

        if self.eat(&GraphQLTokenKind::Bang)? {
            Ok(annotation.non_null())
        } else {
            Ok(annotation)
        }
    }

    // =========================================================================
    // Selections
    // =========================================================================

    fn parse_selection_set(&mut self) -> Result<ast::SelectionSet> {
        self.enter_nesting()?;
        let id = self.ids.next_id();
        let position = self.current.position;
        self.expect(GraphQLTokenKind::CurlyBraceOpen)?;

        let mut selections = vec![self.parse_selection()?];
        while !self.eat(&GraphQLTokenKind::CurlyBraceClose)? {
            selections.push(self.parse_selection()?);
        }

        self.exit_nesting();
        Ok(ast::SelectionSet {
            id,
            position,
            selections,
        })
    }

    fn parse_selection(&mut self) -> Result<ast::Selection> {
        if !self.at(&GraphQLTokenKind::Ellipsis) {
            return Ok(ast::Selection::Field(self.parse_field()?));
        }

        let id = self.ids.next_id();
        let position = self.advance()?.position;

        match &self.current.kind {
            GraphQLTokenKind::Name(name) if name != "on" => {
                let fragment_name = self.expect_name()?;
                Ok(ast::Selection::FragmentSpread(ast::FragmentSpread {
                    id,
                    position,
                    fragment_name,
                    directives: self.parse_directives(ConstContext::AllowVariables)?,
                }))
            },

            _ => {
                let type_condition =
                    if self.current.kind.is_keyword("on") {
                        self.advance()?;
                        Some(self.expect_name()?)
                    } else {
                        None
                    };
                Ok(ast::Selection::InlineFragment(ast::InlineFragment {
                    id,
                    position,
                    type_condition,
                    directives: self.parse_directives(ConstContext::AllowVariables)?,
                    selection_set: self.parse_selection_set()?,
                }))
            },
        }
    }

    fn parse_field(&mut self) -> Result<ast::Field> {
        let id = self.ids.next_id();
        let position = self.current.position;

        let name_or_alias = self.expect_name()?;
        let (alias, name) =
            if self.eat(&GraphQLTokenKind::Colon)? {
                (Some(name_or_alias), self.expect_name()?)
            } else {
                (None, name_or_alias)
            };

        let arguments = self.parse_arguments(ConstContext::AllowVariables)?;
        let directives = self.parse_directives(ConstContext::AllowVariables)?;
        let selection_set =
            if self.at(&GraphQLTokenKind::CurlyBraceOpen) {
                Some(self.parse_selection_set()?)
            } else {
                None
            };

        Ok(ast::Field {
            id,
            position,
            alias,
            name,
            arguments,
            directives,
            selection_set,
        })
    }

    fn parse_arguments(&mut self, const_context: ConstContext) -> Result<Vec<ast::Argument>> {
        if !self.eat(&GraphQLTokenKind::ParenOpen)? {
            return Ok(vec![]);
        }

        let mut arguments = vec![self.parse_argument(const_context)?];
        while !self.eat(&GraphQLTokenKind::ParenClose)? {
            arguments.push(self.parse_argument(const_context)?);
        }
        Ok(arguments)
    }

    fn parse_argument(&mut self, const_context: ConstContext) -> Result<ast::Argument> {
        let id = self.ids.next_id();
        let position = self.current.position;
        let name = self.expect_name()?;
        self.expect(GraphQLTokenKind::Colon)?;
        Ok(ast::Argument {
            id,
            position,
            name,
            value: self.parse_value(const_context)?,
        })
    }

    fn parse_directives(
        &mut self,
        const_context: ConstContext,
    ) -> Result<Vec<ast::DirectiveAnnotation>> {
        let mut directives = vec![];
        while self.at(&GraphQLTokenKind::At) {
            let id = self.ids.next_id();
            let position = self.advance()?.position;
            let name = self.expect_name()?;
            directives.push(ast::DirectiveAnnotation {
                id,
                position,
                name,
                arguments: self.parse_arguments(const_context)?,
            });
        }
        Ok(directives)
    }

    // =========================================================================
    // Values
    // =========================================================================

    fn parse_value(&mut self, const_context: ConstContext) -> Result<ast::Value> {
        self.enter_nesting()?;
        let value = self.parse_value_impl(const_context)?;
        self.exit_nesting();
        Ok(value)
    }

    fn parse_value_impl(&mut self, const_context: ConstContext) -> Result<ast::Value> {
        match &self.current.kind {
            GraphQLTokenKind::Dollar => {
                let variable = self.parse_variable()?;
                if const_context == ConstContext::ConstOnly {
                    return Err(GraphQLParseError::new(
                        format!(
                            "Unexpected variable `${}` in constant value",
                            variable.name,
                        ),
                        variable.position,
                        GraphQLParseErrorKind::VariableInConstContext {
                            variable_name: variable.name,
                        },
                    ));
                }
                Ok(ast::Value::Variable(variable))
            },

            GraphQLTokenKind::SquareBracketOpen => {
                self.advance()?;
                let mut values = vec![];
                while !self.eat(&GraphQLTokenKind::SquareBracketClose)? {
                    values.push(self.parse_value(const_context)?);
                }
                Ok(ast::Value::List(values))
            },

            GraphQLTokenKind::CurlyBraceOpen => {
                self.advance()?;
                let mut fields = vec![];
                while !self.eat(&GraphQLTokenKind::CurlyBraceClose)? {
                    let position = self.current.position;
                    let name = self.expect_name()?;
                    self.expect(GraphQLTokenKind::Colon)?;
                    fields.push(ast::ObjectField {
                        position,
                        name,
                        value: self.parse_value(const_context)?,
                    });
                }
                Ok(ast::Value::Object(fields))
            },

            GraphQLTokenKind::IntValue(_)
            | GraphQLTokenKind::FloatValue(_)
            | GraphQLTokenKind::StringValue(_)
            | GraphQLTokenKind::Name(_) => Ok(match self.advance()?.kind {
                GraphQLTokenKind::IntValue(raw) => ast::Value::Int(raw),
                GraphQLTokenKind::FloatValue(raw) => ast::Value::Float(raw),
                GraphQLTokenKind::StringValue(value) => ast::Value::String(value),
                GraphQLTokenKind::Name(name) => match name.as_str() {
                    "true" => ast::Value::Boolean(true),
                    "false" => ast::Value::Boolean(false),
                    "null" => ast::Value::Null,
                    _ => ast::Value::Enum(name),
                },
                _ => unreachable!("current token was checked to be a literal"),
            }),

            _ => Err(self.unexpected(&["a value"])),
        }
    }
}
