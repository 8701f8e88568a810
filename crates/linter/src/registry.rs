/// Registry of all available lint rules
///
/// Rules are registered here so that hosts and config validation can query
/// them without knowing individual rule types.
use crate::rules::{
    FieldNamesShouldBeCamelCaseRule, NoTypenamePrefixRule, SchemaRule,
    TypeNamesShouldBePascalCaseRule,
};
use std::sync::Arc;

/// Get all schema lint rules, in registration order
#[must_use]
pub fn all_schema_rules() -> Vec<Arc<dyn SchemaRule>> {
    vec![
        Arc::new(NoTypenamePrefixRule),
        Arc::new(TypeNamesShouldBePascalCaseRule),
        Arc::new(FieldNamesShouldBeCamelCaseRule),
    ]
}

/// Get the names of all registered rules
#[must_use]
pub fn all_rule_names() -> Vec<&'static str> {
    all_schema_rules().iter().map(|rule| rule.name()).collect()
}
