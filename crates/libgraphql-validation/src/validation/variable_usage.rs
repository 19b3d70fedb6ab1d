use crate::ast::TypeAnnotation;
use crate::ast::Variable;
use crate::schema::ConstValue;

/// A reference to a variable somewhere within a definition, annotated with
/// the input type and default value the schema expects at that position.
#[derive(Clone, Debug, PartialEq)]
pub struct VariableUsage<'a> {
    pub node: &'a Variable,
    pub input_type: Option<TypeAnnotation>,
    pub default_value: Option<&'a ConstValue>,
}

impl<'a> VariableUsage<'a> {
    pub fn name(&self) -> &'a str {
        self.node.name.as_str()
    }
}
