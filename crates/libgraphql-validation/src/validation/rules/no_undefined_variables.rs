use crate::ast::AstNode;
use crate::validation::ValidationContext;
use crate::validation::ValidationError;
use crate::validation::ValidationRule;
use crate::visitor::VisitAction;
use crate::visitor::Visitor;
use std::collections::HashSet;

/// Every variable referenced within an independent definition (directly
/// or through the fragments it spreads) must be declared by that
/// definition.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoUndefinedVariables;

impl NoUndefinedVariables {
    pub const NAME: &'static str = "NoUndefinedVariables";
}

impl ValidationRule for NoUndefinedVariables {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn create_visitor<'c, 'a>(
        &self,
        context: &'c ValidationContext<'a>,
    ) -> Box<dyn Visitor<'a> + 'c> {
        Box::new(NoUndefinedVariablesVisitor {
            context,
            declared_names: vec![],
        })
    }
}

pub fn undefined_var_message(var_name: &str, op_name: Option<&str>) -> String {
    match op_name {
        Some(op_name) =>
            format!("Variable \"${var_name}\" is not defined by operation \"{op_name}\"."),
        None => format!("Variable \"${var_name}\" is not defined."),
    }
}

struct NoUndefinedVariablesVisitor<'c, 'a> {
    context: &'c ValidationContext<'a>,
    /// One set per independent definition currently entered.
    declared_names: Vec<HashSet<&'a str>>,
}

impl<'a> Visitor<'a> for NoUndefinedVariablesVisitor<'_, 'a> {
    fn enter(&mut self, node: AstNode<'a>) -> VisitAction {
        if let Some(definition) = node.as_definition_ref() {
            if !self.context.is_independent(definition) {
                return VisitAction::Skip;
            }
            self.declared_names.push(HashSet::new());
        } else if let AstNode::VariableDefinition(var_def) = node
            && let Some(declared_names) = self.declared_names.last_mut() {
            declared_names.insert(var_def.name());
        }
        VisitAction::Continue
    }

    fn leave(&mut self, node: AstNode<'a>) {
        let Some(definition) = node.as_definition_ref() else {
            return;
        };
        let Some(declared_names) = self.declared_names.pop() else {
            return;
        };

        for usage in self.context.recursive_variable_usages(definition).iter() {
            if declared_names.contains(usage.name()) {
                continue;
            }
            self.context.report_error(ValidationError::new(
                NoUndefinedVariables::NAME,
                undefined_var_message(usage.name(), definition.name()),
                [AstNode::Variable(usage.node), node],
            ));
        }
    }
}
