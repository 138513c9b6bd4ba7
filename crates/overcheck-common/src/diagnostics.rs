//! Diagnostic types and message definitions for the overload checker.

use serde::Serialize;

use crate::span::Span;

// =============================================================================
// Diagnostic Types
// =============================================================================

/// Diagnostic category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DiagnosticCategory {
    Warning,
}

/// A checker diagnostic anchored at a declaration's name token.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Diagnostic {
    pub file: String,
    pub start: u32,
    pub length: u32,
    pub message_text: String,
    pub category: DiagnosticCategory,
    pub code: u32,
}

impl Diagnostic {
    /// Create a diagnostic from a message definition and an already formatted text.
    #[must_use]
    pub fn new(file: String, span: Span, message: &DiagnosticMessage, text: String) -> Self {
        Self {
            file,
            start: span.start,
            length: span.length,
            message_text: text,
            category: message.category,
            code: message.code,
        }
    }

    #[must_use]
    pub const fn span(&self) -> Span {
        Span::new(self.start, self.length)
    }
}

/// Format a diagnostic message by replacing {0}, {1}, etc. with arguments.
#[must_use]
pub fn format_message(template: &str, args: &[&str]) -> String {
    let mut result = template.to_string();
    for (i, arg) in args.iter().enumerate() {
        result = result.replace(&format!("{{{i}}}"), arg);
    }
    result
}

/// A diagnostic message definition with code, category, and message template.
#[derive(Clone, Copy, Debug)]
pub struct DiagnosticMessage {
    pub code: u32,
    pub category: DiagnosticCategory,
    pub message: &'static str,
}

pub mod diagnostic_codes {
    pub const OVERLOAD_IMPLEMENTATION_MISSING: u32 = 1001;
    pub const OVERLOAD_SIGNATURE_NOT_COMPATIBLE: u32 = 1002;
}

pub mod diagnostic_messages {
    use super::{DiagnosticCategory, DiagnosticMessage, diagnostic_codes};

    pub const OVERLOAD_IMPLEMENTATION_MISSING: DiagnosticMessage = DiagnosticMessage {
        code: diagnostic_codes::OVERLOAD_IMPLEMENTATION_MISSING,
        category: DiagnosticCategory::Warning,
        message: "A series of @overload-decorated {0} should always be followed by an implementation that is not @overload-ed",
    };

    pub const OVERLOAD_SIGNATURE_NOT_COMPATIBLE: DiagnosticMessage = DiagnosticMessage {
        code: diagnostic_codes::OVERLOAD_SIGNATURE_NOT_COMPATIBLE,
        category: DiagnosticCategory::Warning,
        message: "Signature of this @overload-decorated {0} is not compatible with the implementation",
    };
}

#[cfg(test)]
#[path = "../tests/diagnostics_tests.rs"]
mod diagnostics_tests;
