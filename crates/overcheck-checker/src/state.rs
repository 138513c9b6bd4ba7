//! `OverloadChecker`: per-file checker state.
//!
//! A checker is created for one file, borrows the host's oracle, and owns the
//! sink diagnostics are written to. It holds no other state, so checking the
//! same input twice yields the same diagnostics.

use crate::declaration::{CallableDecl, ScopeKind};
use crate::diagnostics::Diagnostic;
use crate::sink::{DiagnosticSink, OverloadDiagnosticKind};

pub struct OverloadChecker<'a, O: ?Sized, S = Vec<Diagnostic>> {
    file_name: String,
    pub(crate) oracle: &'a O,
    sink: S,
}

impl<'a, O: ?Sized> OverloadChecker<'a, O> {
    /// Create a checker collecting diagnostics into a vector.
    pub fn new(file_name: impl Into<String>, oracle: &'a O) -> Self {
        Self::with_sink(file_name, oracle, Vec::new())
    }

    /// Diagnostics reported so far.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.sink
    }

    pub fn take_diagnostics(&mut self) -> Vec<Diagnostic> {
        std::mem::take(&mut self.sink)
    }
}

impl<'a, O: ?Sized, S: DiagnosticSink> OverloadChecker<'a, O, S> {
    pub fn with_sink(file_name: impl Into<String>, oracle: &'a O, sink: S) -> Self {
        Self {
            file_name: file_name.into(),
            oracle,
            sink,
        }
    }

    /// Report `kind` anchored at `anchor`'s name token.
    pub(crate) fn error_at_decl<D: CallableDecl>(
        &mut self,
        anchor: &D,
        kind: OverloadDiagnosticKind,
        scope: ScopeKind,
    ) {
        let span = anchor.name_span();
        tracing::trace!(
            file = %self.file_name,
            name = anchor.name(),
            start = span.start,
            code = kind.code(),
            "report overload diagnostic"
        );
        let diagnostic = Diagnostic::new(
            self.file_name.clone(),
            span,
            kind.message(),
            kind.format(scope),
        );
        self.sink.report(diagnostic);
    }
}
