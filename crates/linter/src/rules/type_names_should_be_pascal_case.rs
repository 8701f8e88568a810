use crate::context::SchemaContext;
use crate::diagnostics::{Diagnostic, Severity};
use crate::rules::{name_range, SchemaRule};
use apollo_parser::cst;

/// Lint rule that enforces type names use `PascalCase`
///
/// GraphQL convention dictates that type names should use `PascalCase`
/// formatting. This improves consistency across GraphQL APIs and follows the
/// official spec conventions.
///
/// # Examples
///
/// ```graphql
/// # ❌ Bad - type names not in PascalCase
/// type user {
///   id: ID!
/// }
///
/// type USER_PROFILE {
///   name: String!
/// }
///
/// # ✅ Good - type names in PascalCase
/// type User {
///   id: ID!
/// }
///
/// type UserProfile {
///   name: String!
/// }
/// ```
pub struct TypeNamesShouldBePascalCaseRule;

impl SchemaRule for TypeNamesShouldBePascalCaseRule {
    fn name(&self) -> &'static str {
        "type_names_should_be_pascal_case"
    }

    fn description(&self) -> &'static str {
        "Enforce that type names use PascalCase formatting"
    }

    fn check(
        &self,
        ctx: &SchemaContext<'_>,
        _options: Option<&serde_json::Value>,
    ) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();
        let document = ctx.parsed.document();

        for definition in document.definitions() {
            let (name, type_kind) = match &definition {
                cst::Definition::ObjectTypeDefinition(def) => (def.name(), "object"),
                cst::Definition::InterfaceTypeDefinition(def) => (def.name(), "interface"),
                cst::Definition::InputObjectTypeDefinition(def) => (def.name(), "input object"),
                cst::Definition::EnumTypeDefinition(def) => (def.name(), "enum"),
                cst::Definition::UnionTypeDefinition(def) => (def.name(), "union"),
                cst::Definition::ScalarTypeDefinition(def) => (def.name(), "scalar"),
                _ => continue,
            };

            let Some(name) = name else { continue };
            let name_text = name.text().to_string();

            // Skip built-in scalars and introspection types
            if name_text.starts_with("__") {
                continue;
            }
            if type_kind == "scalar"
                && matches!(
                    name_text.as_str(),
                    "Int" | "Float" | "String" | "Boolean" | "ID"
                )
            {
                continue;
            }

            if !is_pascal_case(&name_text) {
                diagnostics.push(Diagnostic {
                    severity: Severity::Warning,
                    range: name_range(ctx.document, &name),
                    message: format!(
                        "Type '{name_text}' ({type_kind}) should use PascalCase formatting"
                    ),
                    code: Some(self.name().to_string()),
                    source: "gqlint".to_string(),
                });
            }
        }

        diagnostics
    }
}

/// Check if a name is in `PascalCase` format
///
/// Rules:
/// - Must start with an uppercase letter
/// - Can contain letters and numbers
/// - Should not contain underscores or hyphens
fn is_pascal_case(name: &str) -> bool {
    if name.is_empty() {
        return false;
    }

    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };

    // First character must be uppercase
    if !first.is_ascii_uppercase() {
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

#[cfg(test)]
mod tests {
    use super::*;
    use apollo_parser::Parser;

    fn check(source: &str) -> Vec<Diagnostic> {
        let rule = TypeNamesShouldBePascalCaseRule;
        let parsed = Parser::new(source).parse();
        let ctx = SchemaContext {
            document: source,
            file_name: "schema.graphql",
            parsed: &parsed,
        };
        rule.check(&ctx, None)
    }

    #[test]
    fn test_is_pascal_case() {
        // Valid PascalCase
        assert!(is_pascal_case("User"));
        assert!(is_pascal_case("UserProfile"));
        assert!(is_pascal_case("CreateUserInput"));

        // Invalid - starts with lowercase
        assert!(!is_pascal_case("user"));
        assert!(!is_pascal_case("userProfile"));

        // Invalid - contains underscores
        assert!(!is_pascal_case("User_Profile"));
        assert!(!is_pascal_case("USER_PROFILE"));

        // Invalid - contains hyphens
        assert!(!is_pascal_case("User-Profile"));

        // Edge cases
        assert!(!is_pascal_case(""));
        assert!(is_pascal_case("A"));
        assert!(is_pascal_case("Http2Server"));
    }

    #[test]
    fn test_pascal_case_types_pass() {
        let source = r"
            type User { id: ID! }
            interface Node { id: ID! }
            enum Role { ADMIN }
            input CreateUserInput { name: String }
        ";
        assert!(check(source).is_empty());
    }

    #[test]
    fn test_lowercase_type_name_reports() {
        let diagnostics = check("type user { id: ID! }");
        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].message.contains("'user' (object)"));
    }

    #[test]
    fn test_snake_case_enum_reports() {
        let diagnostics = check("enum user_role { ADMIN }");
        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].message.contains("'user_role' (enum)"));
    }

    #[test]
    fn test_custom_scalar_is_checked() {
        let diagnostics = check("scalar date_time");
        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].message.contains("'date_time' (scalar)"));
    }

    #[test]
    fn test_diagnostic_points_at_type_name() {
        let diagnostics = check("type user { id: ID! }");
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].range.start.line, 0);
        assert_eq!(diagnostics[0].range.start.character, 5);
        assert_eq!(diagnostics[0].range.end.character, 9);
    }
}
