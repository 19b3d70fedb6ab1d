use crate::ast::AstNode;
use crate::ast::TypeAnnotation;
use crate::ast::Value;
use crate::schema::ConstValue;
use crate::schema::DirectiveDefinition;
use crate::schema::FieldDefinition;
use crate::schema::GraphQLType;
use crate::schema::InputValueDefinition;
use crate::schema::Schema;

/// Tracks the schema types in scope at the current position of a
/// traversal.
///
/// Call [`TypeInfo::enter`] and [`TypeInfo::leave`] for every node the
/// traversal enters and leaves (or let a
/// [`TypeInfoVisitor`](crate::visitor::TypeInfoVisitor) do it), then query
/// the accessors from within visitor callbacks. Positions the schema knows
/// nothing about (unknown fields, arguments or types) simply report
/// `None`.
#[derive(Clone, Debug)]
pub struct TypeInfo<'a> {
    argument: Option<&'a InputValueDefinition>,
    default_value_stack: Vec<Option<&'a ConstValue>>,
    directive: Option<&'a DirectiveDefinition>,
    field_def_stack: Vec<Option<&'a FieldDefinition>>,
    input_type_stack: Vec<Option<TypeAnnotation>>,
    parent_type_stack: Vec<Option<&'a GraphQLType>>,
    schema: &'a Schema,
    type_stack: Vec<Option<TypeAnnotation>>,
}

impl<'a> TypeInfo<'a> {
    pub fn new(schema: &'a Schema) -> Self {
        Self {
            argument: None,
            default_value_stack: vec![],
            directive: None,
            field_def_stack: vec![],
            input_type_stack: vec![],
            parent_type_stack: vec![],
            schema,
            type_stack: vec![],
        }
    }

    pub fn schema(&self) -> &'a Schema {
        self.schema
    }

    /// The output type expected at the current position.
    pub fn output_type(&self) -> Option<&TypeAnnotation> {
        self.type_stack.last()?.as_ref()
    }

    /// The composite type whose selection set is currently being walked.
    pub fn parent_type(&self) -> Option<&'a GraphQLType> {
        *self.parent_type_stack.last()?
    }

    /// The input type expected at the current position.
    pub fn input_type(&self) -> Option<&TypeAnnotation> {
        self.input_type_stack.last()?.as_ref()
    }

    /// The input type of the value enclosing the current one, e.g. the
    /// list type while walking one of its items.
    pub fn parent_input_type(&self) -> Option<&TypeAnnotation> {
        let len = self.input_type_stack.len();
        self.input_type_stack.get(len.checked_sub(2)?)?.as_ref()
    }

    pub fn field_def(&self) -> Option<&'a FieldDefinition> {
        *self.field_def_stack.last()?
    }

    /// The schema-declared default of the argument or input field at the
    /// current position.
    pub fn default_value(&self) -> Option<&'a ConstValue> {
        *self.default_value_stack.last()?
    }

    pub fn directive(&self) -> Option<&'a DirectiveDefinition> {
        self.directive
    }

    pub fn argument(&self) -> Option<&'a InputValueDefinition> {
        self.argument
    }

    pub fn enter(&mut self, node: AstNode<'_>) {
        let schema = self.schema;
        match node {
            AstNode::SelectionSet(_) => {
                let parent_type =
                    self.output_type()
                        .and_then(|output_type| schema.named_type(output_type))
                        .filter(|named_type| named_type.is_composite_type());
                self.parent_type_stack.push(parent_type);
            },

            AstNode::Field(field) => {
                let field_def = self.parent_type().and_then(|parent_type| {
                    schema.field_definition(parent_type, field.name.as_str())
                });
                let field_type =
                    field_def
                        .map(|field_def| &field_def.field_type)
                        .filter(|field_type| self.is_output_type(field_type))
                        .cloned();
                self.field_def_stack.push(field_def);
                self.type_stack.push(field_type);
            },

            AstNode::DirectiveAnnotation(directive) =>
                self.directive = schema.directive(directive.name.as_str()),

            AstNode::OperationDefinition(op) => {
                let root_type =
                    schema.root_operation_type(op.operation_kind)
                        .filter(|root_type| matches!(root_type, GraphQLType::Object(_)))
                        .map(|root_type| TypeAnnotation::named(root_type.name()));
                self.type_stack.push(root_type);
            },

            AstNode::InlineFragment(inline) => {
                let output_type = match &inline.type_condition {
                    Some(type_condition) => Some(TypeAnnotation::named(type_condition.as_str())),
                    None => self.output_type().map(|t| TypeAnnotation::named(t.innermost_name())),
                };
                let output_type = output_type.filter(|t| self.is_output_type(t));
                self.type_stack.push(output_type);
            },

            AstNode::FragmentDefinition(frag) => {
                let output_type =
                    Some(TypeAnnotation::named(frag.type_condition.as_str()))
                        .filter(|t| self.is_output_type(t));
                self.type_stack.push(output_type);
            },

            AstNode::VariableDefinition(var_def) => {
                let input_type =
                    Some(&var_def.var_type)
                        .filter(|t| self.is_input_type(t))
                        .cloned();
                self.input_type_stack.push(input_type);
            },

            AstNode::Argument(arg) => {
                let arg_def = match self.directive {
                    Some(directive) => directive.arguments.get(arg.name.as_str()),
                    None => self.field_def().and_then(|field_def| {
                        field_def.arguments.get(arg.name.as_str())
                    }),
                };
                let arg_type =
                    arg_def
                        .map(|arg_def| &arg_def.value_type)
                        .filter(|t| self.is_input_type(t))
                        .cloned();
                self.argument = arg_def;
                self.default_value_stack.push(arg_def.and_then(|d| d.default_value.as_ref()));
                self.input_type_stack.push(arg_type);
            },

            AstNode::Value(Value::List(_)) => {
                // Input coercion accepts a lone item where a list is expected,
                // so a non-list type is its own "item" type.
                let item_type = self.input_type().map(|input_type| {
                    let list_type = input_type.to_nullable();
                    match list_type.list_item() {
                        Some(item_type) => item_type.clone(),
                        None => list_type,
                    }
                });
                let item_type = item_type.filter(|t| self.is_input_type(t));
                self.default_value_stack.push(None);
                self.input_type_stack.push(item_type);
            },

            AstNode::ObjectField(field) => {
                let input_field =
                    self.input_type()
                        .and_then(|input_type| schema.named_type(input_type))
                        .and_then(GraphQLType::input_fields)
                        .and_then(|fields| fields.get(field.name.as_str()));
                let input_field_type =
                    input_field
                        .map(|input_field| &input_field.value_type)
                        .filter(|t| self.is_input_type(t))
                        .cloned();
                self.default_value_stack.push(
                    input_field.and_then(|f| f.default_value.as_ref()),
                );
                self.input_type_stack.push(input_field_type);
            },

            AstNode::Document(_)
            | AstNode::FragmentSpread(_)
            | AstNode::Value(_)
            | AstNode::Variable(_) => (),
        }
    }

    pub fn leave(&mut self, node: AstNode<'_>) {
        match node {
            AstNode::SelectionSet(_) => {
                self.parent_type_stack.pop();
            },

            AstNode::Field(_) => {
                self.field_def_stack.pop();
                self.type_stack.pop();
            },

            AstNode::DirectiveAnnotation(_) => self.directive = None,

            AstNode::OperationDefinition(_)
            | AstNode::InlineFragment(_)
            | AstNode::FragmentDefinition(_) => {
                self.type_stack.pop();
            },

            AstNode::VariableDefinition(_) => {
                self.input_type_stack.pop();
            },

            AstNode::Argument(_) => {
                self.argument = None;
                self.default_value_stack.pop();
                self.input_type_stack.pop();
            },

            AstNode::Value(Value::List(_)) | AstNode::ObjectField(_) => {
                self.default_value_stack.pop();
                self.input_type_stack.pop();
            },

            AstNode::Document(_)
            | AstNode::FragmentSpread(_)
            | AstNode::Value(_)
            | AstNode::Variable(_) => (),
        }
    }

    fn is_input_type(&self, annotation: &TypeAnnotation) -> bool {
        self.schema.named_type(annotation).is_some_and(GraphQLType::is_input_type)
    }

    fn is_output_type(&self, annotation: &TypeAnnotation) -> bool {
        self.schema.named_type(annotation).is_some_and(GraphQLType::is_output_type)
    }
}
