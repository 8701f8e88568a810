use crate::context::SchemaContext;
use crate::diagnostics::{Diagnostic, Severity};
use crate::rules::{name_range, SchemaRule};
use apollo_parser::cst;

/// Lint rule that disallows field names prefixed with their parent type name
///
/// Fields like `User.userName` are redundant since the type context is
/// already known. Prefer `User.name` instead.
///
/// # Examples
///
/// ```graphql
/// # ❌ Bad - fields repeat the type name
/// type User {
///   userId: ID!
///   userName: String!
/// }
///
/// # ✅ Good - field names stand on their own
/// type User {
///   id: ID!
///   name: String!
/// }
/// ```
pub struct NoTypenamePrefixRule;

impl SchemaRule for NoTypenamePrefixRule {
    fn name(&self) -> &'static str {
        "no_typename_prefix"
    }

    fn description(&self) -> &'static str {
        "Disallow field names that are prefixed with their parent type name"
    }

    fn check(
        &self,
        ctx: &SchemaContext<'_>,
        _options: Option<&serde_json::Value>,
    ) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();
        let document = ctx.parsed.document();

        for definition in document.definitions() {
            // Only object and interface types (and their extensions) carry
            // fields subject to this rule.
            let (type_name, fields) = match &definition {
                cst::Definition::ObjectTypeDefinition(def) => (def.name(), def.fields_definition()),
                cst::Definition::ObjectTypeExtension(def) => (def.name(), def.fields_definition()),
                cst::Definition::InterfaceTypeDefinition(def) => {
                    (def.name(), def.fields_definition())
                }
                cst::Definition::InterfaceTypeExtension(def) => {
                    (def.name(), def.fields_definition())
                }
                _ => continue,
            };

            let Some(type_name) = type_name else { continue };
            let Some(fields) = fields else { continue };

            let type_name_text = type_name.text().to_string();
            let type_name_lower = type_name_text.to_lowercase();

            for field in fields.field_definitions() {
                let Some(field_name) = field.name() else {
                    continue;
                };
                let field_name_text = field_name.text().to_string();

                if field_name_text.to_lowercase().starts_with(&type_name_lower) {
                    diagnostics.push(Diagnostic {
                        severity: Severity::Warning,
                        range: name_range(ctx.document, &field_name),
                        message: format!(
                            "Field \"{field_name_text}\" starts with the name of the parent type \"{type_name_text}\""
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

#[cfg(test)]
mod tests {
    use super::*;
    use apollo_parser::Parser;

    fn parse(source: &str) -> apollo_parser::SyntaxTree {
        Parser::new(source).parse()
    }

    fn check(source: &str) -> Vec<Diagnostic> {
        let rule = NoTypenamePrefixRule;
        let parsed = parse(source);
        let ctx = SchemaContext {
            document: source,
            file_name: "schema.graphql",
            parsed: &parsed,
        };
        rule.check(&ctx, None)
    }

    #[test]
    fn test_unprefixed_fields_pass() {
        let diagnostics = check("type User { id: ID! name: String! }");
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_prefixed_field_reports() {
        let diagnostics = check("type User { userId: ID! }");
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(
            diagnostics[0].message,
            "Field \"userId\" starts with the name of the parent type \"User\""
        );
        assert_eq!(diagnostics[0].code.as_deref(), Some("no_typename_prefix"));
        assert_eq!(diagnostics[0].severity, Severity::Warning);
    }

    #[test]
    fn test_multiple_prefixed_fields_report_in_order() {
        let diagnostics = check("type User { userId: ID! userName: String! }");
        assert_eq!(diagnostics.len(), 2);
        assert!(diagnostics[0].message.contains("\"userId\""));
        assert!(diagnostics[1].message.contains("\"userName\""));
    }

    #[test]
    fn test_interface_fields_are_checked() {
        let diagnostics = check("interface Node { nodeId: ID! }");
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(
            diagnostics[0].message,
            "Field \"nodeId\" starts with the name of the parent type \"Node\""
        );
    }

    #[test]
    fn test_match_is_case_insensitive() {
        let diagnostics = check("type User { USERID: ID! }");
        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].message.contains("\"USERID\""));
    }

    #[test]
    fn test_field_named_exactly_like_type_reports() {
        let diagnostics = check("type User { user: User }");
        assert_eq!(diagnostics.len(), 1);
    }

    #[test]
    fn test_type_extensions_are_checked() {
        let diagnostics = check("extend type User { userLocation: String }");
        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].message.contains("\"userLocation\""));
    }

    #[test]
    fn test_other_type_kinds_are_ignored() {
        let source = r"
            enum UserRole { USER_ADMIN USER_GUEST }
            union UserResult = Query
            input UserInput { userId: ID! }
            scalar UserDate
        ";
        let diagnostics = check(source);
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_diagnostic_points_at_field_name() {
        let source = "type User {\n  userId: ID!\n}";
        let diagnostics = check(source);
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].range.start.line, 1);
        assert_eq!(diagnostics[0].range.start.character, 2);
        assert_eq!(diagnostics[0].range.end.line, 1);
        assert_eq!(diagnostics[0].range.end.character, 8);
    }

    #[test]
    fn test_multiple_types_report_in_document_order() {
        let source = r"
            type User { userId: ID! }
            interface Node { nodeId: ID! }
        ";
        let diagnostics = check(source);
        assert_eq!(diagnostics.len(), 2);
        assert!(diagnostics[0].message.contains("\"userId\""));
        assert!(diagnostics[1].message.contains("\"nodeId\""));
    }
}
