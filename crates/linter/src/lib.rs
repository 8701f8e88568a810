//! Lint rules for GraphQL schema documents, focused on naming conventions.
//!
//! The entry point for hosts is [`Linter`]: configure it with a [`LintConfig`]
//! and feed it SDL source text. Everything else (rule registry, suppression
//! scanning, severity mapping) happens behind that call.

mod config;
mod context;
mod diagnostics;
mod linter;
mod loader;
mod position;
mod registry;
mod rules;
mod suppression;

pub use config::{ExtendsConfig, FullLintConfig, LintConfig, LintRuleConfig, LintSeverity};
pub use context::SchemaContext;
pub use diagnostics::{Diagnostic, Position, Range, Severity};
pub use linter::Linter;
pub use loader::{find_config, load_config, load_config_from_str, ConfigError};
pub use position::{offset_to_line_col, offset_to_position};
pub use registry::{all_rule_names, all_schema_rules};
pub use rules::SchemaRule;
pub use suppression::SuppressionIndex;
