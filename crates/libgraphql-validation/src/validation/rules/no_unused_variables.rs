use crate::ast::AstNode;
use crate::ast::VariableDefinition;
use crate::validation::ValidationContext;
use crate::validation::ValidationError;
use crate::validation::ValidationRule;
use crate::visitor::VisitAction;
use crate::visitor::Visitor;
use std::collections::HashSet;

/// Every variable an independent definition declares must be referenced
/// within it, directly or through the fragments it spreads.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoUnusedVariables;

impl NoUnusedVariables {
    pub const NAME: &'static str = "NoUnusedVariables";
}

impl ValidationRule for NoUnusedVariables {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn create_visitor<'c, 'a>(
        &self,
        context: &'c ValidationContext<'a>,
    ) -> Box<dyn Visitor<'a> + 'c> {
        Box::new(NoUnusedVariablesVisitor {
            context,
            variable_defs: vec![],
        })
    }
}

pub fn unused_variable_message(var_name: &str, op_name: Option<&str>) -> String {
    match op_name {
        Some(op_name) =>
            format!("Variable \"${var_name}\" is never used in operation \"{op_name}\"."),
        None => format!("Variable \"${var_name}\" is never used."),
    }
}

struct NoUnusedVariablesVisitor<'c, 'a> {
    context: &'c ValidationContext<'a>,
    variable_defs: Vec<Vec<&'a VariableDefinition>>,
}

impl<'a> Visitor<'a> for NoUnusedVariablesVisitor<'_, 'a> {
    fn enter(&mut self, node: AstNode<'a>) -> VisitAction {
        if let Some(definition) = node.as_definition_ref() {
            if !self.context.is_independent(definition) {
                return VisitAction::Skip;
            }
            self.variable_defs.push(vec![]);
        } else if let AstNode::VariableDefinition(var_def) = node
            && let Some(variable_defs) = self.variable_defs.last_mut() {
            variable_defs.push(var_def);
        }
        VisitAction::Continue
    }

    fn leave(&mut self, node: AstNode<'a>) {
        let Some(definition) = node.as_definition_ref() else {
            return;
        };
        let Some(variable_defs) = self.variable_defs.pop() else {
            return;
        };

        let usages = self.context.recursive_variable_usages(definition);
        let used_names = usages.iter()
            .map(|usage| usage.name())
            .collect::<HashSet<_>>();

        for var_def in variable_defs {
            if used_names.contains(var_def.name()) {
                continue;
            }
            self.context.report_error(ValidationError::new(
                NoUnusedVariables::NAME,
                unused_variable_message(var_def.name(), definition.name()),
                [AstNode::VariableDefinition(var_def)],
            ));
        }
    }
}
