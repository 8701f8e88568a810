/// Context for linting a standalone schema document
pub struct SchemaContext<'a> {
    pub document: &'a str,
    pub file_name: &'a str,
    /// Pre-parsed syntax tree to avoid repeated parsing
    pub parsed: &'a apollo_parser::SyntaxTree,
}
