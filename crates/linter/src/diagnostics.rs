use serde::{Deserialize, Serialize};

/// Diagnostic severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    Error,
    Warning,
    Information,
    Hint,
}

/// Position in a document (0-indexed)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    pub line: usize,
    pub character: usize,
}

/// Range in a document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Range {
    pub start: Position,
    pub end: Position,
}

/// A diagnostic message (error, warning, etc.)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Severity level
    pub severity: Severity,

    /// Range where the diagnostic applies
    pub range: Range,

    /// Diagnostic message
    pub message: String,

    /// Rule identifier that produced this diagnostic
    pub code: Option<String>,

    /// Source of the diagnostic (e.g., "gqlint")
    pub source: String,
}

impl Diagnostic {
    pub fn warning(range: Range, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            range,
            message: message.into(),
            code: None,
            source: "gqlint".to_string(),
        }
    }

    pub fn error(range: Range, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            range,
            message: message.into(),
            code: None,
            source: "gqlint".to_string(),
        }
    }

    #[must_use]
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn range() -> Range {
        Range {
            start: Position {
                line: 1,
                character: 2,
            },
            end: Position {
                line: 1,
                character: 8,
            },
        }
    }

    #[test]
    fn test_warning_constructor() {
        let diag = Diagnostic::warning(range(), "something looks off");
        assert_eq!(diag.severity, Severity::Warning);
        assert_eq!(diag.message, "something looks off");
        assert_eq!(diag.code, None);
        assert_eq!(diag.source, "gqlint");
    }

    #[test]
    fn test_with_code() {
        let diag = Diagnostic::error(range(), "bad name").with_code("some_rule");
        assert_eq!(diag.severity, Severity::Error);
        assert_eq!(diag.code.as_deref(), Some("some_rule"));
    }
}
