//! Validation of executable documents against a [`Schema`](crate::schema::Schema).
//!
//! [`validate()`] runs every rule in [`specified_rules()`] over a document
//! in one traversal. Rules share a [`ValidationContext`], which memoizes the
//! fragment and variable-usage closures they query.

mod cache_stats;
pub mod rules;
mod validate;
mod validation_context;
mod validation_error;
mod validation_options;
mod validation_rule;
mod variable_usage;

pub use cache_stats::CacheStats;
pub use validate::specified_rules;
pub use validate::validate;
pub use validate::validate_with_options;
pub use validation_context::ValidationContext;
pub use validation_error::ErrorLocation;
pub use validation_error::ValidationError;
pub use validation_options::DuplicateFragmentPolicy;
pub use validation_options::ValidationOptions;
pub use validation_rule::ValidationRule;
pub use variable_usage::VariableUsage;
