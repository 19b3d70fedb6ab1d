//! The variable-scoping rules.

mod no_undefined_variables;
mod no_unused_variables;

pub use no_undefined_variables::undefined_var_message;
pub use no_undefined_variables::NoUndefinedVariables;
pub use no_unused_variables::unused_variable_message;
pub use no_unused_variables::NoUnusedVariables;
