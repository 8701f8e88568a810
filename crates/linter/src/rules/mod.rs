/// Lint rule implementations
///
/// Each rule is implemented in its own file and implements [`SchemaRule`].
/// Rules are pure: they receive a pre-parsed document through
/// [`SchemaContext`] and return diagnostics, nothing else.
use crate::context::SchemaContext;
use crate::diagnostics::{Diagnostic, Range};
use crate::position::offset_to_position;
use apollo_parser::cst::{self, CstNode};

/// A lint rule that runs on a standalone schema document
pub trait SchemaRule: Send + Sync {
    /// Unique identifier for this rule (e.g., `"no_typename_prefix"`)
    fn name(&self) -> &'static str;

    /// Human-readable description
    fn description(&self) -> &'static str;

    /// Check a document for issues
    ///
    /// The `options` parameter contains rule-specific configuration from the
    /// lint config file. Rules that take options should deserialize their own
    /// options struct from this JSON value.
    fn check(
        &self,
        ctx: &SchemaContext<'_>,
        options: Option<&serde_json::Value>,
    ) -> Vec<Diagnostic>;
}

/// Compute the source range of a name token
pub(crate) fn name_range(document: &str, name: &cst::Name) -> Range {
    let text_range = name.syntax().text_range();
    let start_offset: usize = text_range.start().into();
    let end_offset: usize = text_range.end().into();

    Range {
        start: offset_to_position(document, start_offset),
        end: offset_to_position(document, end_offset),
    }
}

mod field_names_should_be_camel_case;
mod no_typename_prefix;
mod type_names_should_be_pascal_case;

pub use field_names_should_be_camel_case::FieldNamesShouldBeCamelCaseRule;
pub use no_typename_prefix::NoTypenamePrefixRule;
pub use type_names_should_be_pascal_case::TypeNamesShouldBePascalCaseRule;
