use std::collections::{HashMap, HashSet};

/// The comment directive that suppresses diagnostics on the following line
const DISABLE_NEXT_LINE: &str = "lint-disable-next-line";

/// What a single directive suppresses
#[derive(Debug, Clone, PartialEq, Eq)]
enum Suppression {
    /// Bare directive: all rules are suppressed
    All,
    /// Directive with rule names: only those rules are suppressed
    Rules(HashSet<String>),
}

/// Per-document index of suppression directives
///
/// Built once per lint run by scanning the raw source for comments containing
/// `lint-disable-next-line`. A directive on line N suppresses diagnostics
/// that start on line N+1 (0-indexed lines, matching [`crate::Position`]).
///
/// ```graphql
/// type User {
///   # lint-disable-next-line no_typename_prefix
///   userId: ID!
/// }
/// ```
#[derive(Debug, Default)]
pub struct SuppressionIndex {
    by_line: HashMap<usize, Suppression>,
}

impl SuppressionIndex {
    /// Scan a document for suppression directives
    #[must_use]
    pub fn scan(source: &str) -> Self {
        let mut by_line: HashMap<usize, Suppression> = HashMap::new();

        for (line_number, line) in source.lines().enumerate() {
            let Some(hash) = line.find('#') else {
                continue;
            };
            let comment = line[hash + 1..].trim();

            let Some(rest) = comment.strip_prefix(DISABLE_NEXT_LINE) else {
                continue;
            };
            // Reject look-alikes such as `lint-disable-next-liner`
            if !rest.is_empty() && !rest.starts_with(char::is_whitespace) {
                continue;
            }

            let rules: HashSet<String> = rest
                .split([' ', '\t', ','])
                .filter(|name| !name.is_empty())
                .map(ToString::to_string)
                .collect();

            let suppression = if rules.is_empty() {
                Suppression::All
            } else {
                Suppression::Rules(rules)
            };

            // One directive per source line, so target lines never collide
            by_line.insert(line_number + 1, suppression);
        }

        Self { by_line }
    }

    /// Check whether a rule is suppressed on the given line (0-indexed)
    #[must_use]
    pub fn is_suppressed(&self, line: usize, rule_name: &str) -> bool {
        match self.by_line.get(&line) {
            None => false,
            Some(Suppression::All) => true,
            Some(Suppression::Rules(rules)) => rules.contains(rule_name),
        }
    }

    /// True when the document contains no directives at all
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_line.is_empty()
    }
}
