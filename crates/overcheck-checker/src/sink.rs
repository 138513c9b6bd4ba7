//! Diagnostic kinds produced by the checker and the sink receiving them.

use crate::declaration::ScopeKind;
use crate::diagnostics::{Diagnostic, DiagnosticMessage, diagnostic_messages, format_message};

/// The two findings the overload checker reports.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OverloadDiagnosticKind {
    /// An overload group has no implementation, or its implementation is
    /// followed by another overload.
    MissingImplementation,
    /// An overload signature is not compatible with the implementation.
    IncompatibleOverload,
}

impl OverloadDiagnosticKind {
    pub const fn message(self) -> &'static DiagnosticMessage {
        match self {
            OverloadDiagnosticKind::MissingImplementation => {
                &diagnostic_messages::OVERLOAD_IMPLEMENTATION_MISSING
            }
            OverloadDiagnosticKind::IncompatibleOverload => {
                &diagnostic_messages::OVERLOAD_SIGNATURE_NOT_COMPATIBLE
            }
        }
    }

    pub const fn code(self) -> u32 {
        self.message().code
    }

    /// Message text for a finding in a scope of the given kind.
    pub fn format(self, scope: ScopeKind) -> String {
        let noun = match self {
            OverloadDiagnosticKind::MissingImplementation => scope.plural_noun(),
            OverloadDiagnosticKind::IncompatibleOverload => scope.singular_noun(),
        };
        format_message(self.message().message, &[noun])
    }
}

/// Receives diagnostics as the checker emits them.
pub trait DiagnosticSink {
    fn report(&mut self, diagnostic: Diagnostic);
}

impl DiagnosticSink for Vec<Diagnostic> {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.push(diagnostic);
    }
}

impl<S: DiagnosticSink + ?Sized> DiagnosticSink for &mut S {
    fn report(&mut self, diagnostic: Diagnostic) {
        (**self).report(diagnostic);
    }
}
