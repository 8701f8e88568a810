use crate::config::{LintConfig, LintSeverity};
use crate::context::SchemaContext;
use crate::diagnostics::{Diagnostic, Severity};
use crate::registry;
use crate::suppression::SuppressionIndex;

/// Linter that runs configured lint rules over schema documents
pub struct Linter {
    config: LintConfig,
}

impl Linter {
    /// Create a new linter with the given configuration
    #[must_use]
    pub const fn new(config: LintConfig) -> Self {
        Self { config }
    }

    /// Lint a schema document
    ///
    /// Parses the source, runs every enabled rule, drops diagnostics covered
    /// by suppression directives, and applies configured severities.
    /// Documents with parse errors produce no diagnostics.
    #[must_use]
    #[tracing::instrument(skip(self, source), fields(file = file_name))]
    pub fn lint_source(&self, source: &str, file_name: &str) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();

        // Parse the document once
        let parsed = apollo_parser::Parser::new(source).parse();

        // If there are parse errors, return early
        if parsed.errors().len() > 0 {
            tracing::debug!("Document has parse errors, skipping linting");
            return diagnostics;
        }

        // Create context with pre-parsed tree
        let ctx = SchemaContext {
            document: source,
            file_name,
            parsed: &parsed,
        };

        let suppressions = SuppressionIndex::scan(source);

        let all_rules = registry::all_schema_rules();
        tracing::debug!(rules_count = all_rules.len(), "Running schema rules");

        for rule in all_rules {
            let rule_name = rule.name();

            // Skip if rule is not enabled (opt-in behavior)
            if !self.config.is_enabled(rule_name) {
                tracing::trace!(rule = rule_name, "Rule not enabled, skipping");
                continue;
            }

            tracing::trace!(rule = rule_name, "Running rule");
            let options = self.config.get_options(rule_name);
            let mut rule_diagnostics = rule.check(&ctx, options);

            // Drop diagnostics covered by a suppression directive
            if !suppressions.is_empty() {
                rule_diagnostics
                    .retain(|diag| !suppressions.is_suppressed(diag.range.start.line, rule_name));
            }

            // Apply configured severity
            if let Some(severity) = self.config.get_severity(rule_name) {
                apply_severity(&mut rule_diagnostics, severity);
            }

            if !rule_diagnostics.is_empty() {
                tracing::debug!(
                    rule = rule_name,
                    diagnostics = rule_diagnostics.len(),
                    "Rule found issues"
                );
            }

            diagnostics.extend(rule_diagnostics);
        }

        tracing::debug!(total_diagnostics = diagnostics.len(), "Linting complete");
        diagnostics
    }
}

/// Apply severity level to diagnostics
fn apply_severity(diagnostics: &mut [Diagnostic], severity: LintSeverity) {
    for diag in diagnostics {
        diag.severity = match severity {
            LintSeverity::Error => Severity::Error,
            LintSeverity::Warn => Severity::Warning,
            LintSeverity::Off => unreachable!("Off rules are skipped"),
        };
    }
}
