use crate::context::SchemaContext;
use crate::diagnostics::{Diagnostic, Severity};
use crate::rules::{name_range, SchemaRule};
use apollo_parser::cst;
use serde::Deserialize;

/// Lint rule that enforces field names use camelCase
///
/// GraphQL convention dictates that field names should use camelCase
/// formatting. Leading underscores are allowed for internal fields.
///
/// # Examples
///
/// ```graphql
/// # ❌ Bad - field names not in camelCase
/// type User {
///   user_id: ID!
///   FirstName: String!
/// }
///
/// # ✅ Good - field names in camelCase
/// type User {
///   userId: ID!
///   firstName: String!
/// }
/// ```
///
/// # Options
///
/// ```yaml
/// field_names_should_be_camel_case: [warn, { ignore: ["legacy_id"] }]
/// ```
pub struct FieldNamesShouldBeCamelCaseRule;

/// Options for the camelCase field rule
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct CamelCaseOptions {
    /// Field names exempt from the rule
    #[serde(default)]
    ignore: Vec<String>,
}

impl SchemaRule for FieldNamesShouldBeCamelCaseRule {
    fn name(&self) -> &'static str {
        "field_names_should_be_camel_case"
    }

    fn description(&self) -> &'static str {
        "Enforce that field names use camelCase formatting"
    }

    fn check(
        &self,
        ctx: &SchemaContext<'_>,
        options: Option<&serde_json::Value>,
    ) -> Vec<Diagnostic> {
        let opts: CamelCaseOptions = options
            .and_then(|value| {
                serde_json::from_value(value.clone())
                    .map_err(|err| {
                        tracing::warn!(rule = self.name(), %err, "Invalid rule options, ignoring");
                        err
                    })
                    .ok()
            })
            .unwrap_or_default();

        let mut diagnostics = Vec::new();
        let document = ctx.parsed.document();

        for definition in document.definitions() {
            let (type_name, field_names) = match &definition {
                cst::Definition::ObjectTypeDefinition(def) => {
                    (def.name(), output_field_names(def.fields_definition()))
                }
                cst::Definition::ObjectTypeExtension(def) => {
                    (def.name(), output_field_names(def.fields_definition()))
                }
                cst::Definition::InterfaceTypeDefinition(def) => {
                    (def.name(), output_field_names(def.fields_definition()))
                }
                cst::Definition::InterfaceTypeExtension(def) => {
                    (def.name(), output_field_names(def.fields_definition()))
                }
                cst::Definition::InputObjectTypeDefinition(def) => (
                    def.name(),
                    input_field_names(def.input_fields_definition()),
                ),
                cst::Definition::InputObjectTypeExtension(def) => (
                    def.name(),
                    input_field_names(def.input_fields_definition()),
                ),
                _ => continue,
            };

            let Some(type_name) = type_name else { continue };
            let type_name_text = type_name.text().to_string();

            for field_name in field_names {
                let field_name_text = field_name.text().to_string();

                if opts.ignore.iter().any(|name| *name == field_name_text) {
                    continue;
                }

                if !is_camel_case(&field_name_text) {
                    diagnostics.push(Diagnostic {
                        severity: Severity::Warning,
                        range: name_range(ctx.document, &field_name),
                        message: format!(
                            "Field '{field_name_text}' on type '{type_name_text}' should use camelCase formatting"
                        ),
                        code: Some(self.name().to_string()),
                        source: "gqlint".to_string(),
                    });
                }
            }
        }

        diagnostics
    }
}

fn output_field_names(fields: Option<cst::FieldsDefinition>) -> Vec<cst::Name> {
    fields
        .into_iter()
        .flat_map(|fields| fields.field_definitions())
        .filter_map(|field| field.name())
        .collect()
}

fn input_field_names(fields: Option<cst::InputFieldsDefinition>) -> Vec<cst::Name> {
    fields
        .into_iter()
        .flat_map(|fields| fields.input_value_definitions())
        .filter_map(|field| field.name())
        .collect()
}

/// Check if a name is in camelCase format
///
/// Rules:
/// - Must start with a lowercase letter
/// - Can contain letters, numbers, and internal capital letters
/// - Should not contain underscores or hyphens
/// - Leading underscores are allowed (for internal/private fields)
fn is_camel_case(name: &str) -> bool {
    if name.is_empty() {
        return false;
    }

    // Allow leading underscores for internal fields
    let name = name.trim_start_matches('_');
    if name.is_empty() {
        return false;
    }

    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };

    // First character (after underscores) must be lowercase
    if !first.is_ascii_lowercase() {
        return false;
    }

    // Rest should only contain letters and numbers, no underscores or hyphens
    for ch in chars {
        if !ch.is_alphanumeric() {
            return false;
        }
    }

    true
}
