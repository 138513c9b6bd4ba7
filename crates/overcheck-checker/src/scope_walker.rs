//! Driving overload validation over a module's scopes.
//!
//! Two kinds of scope are units of grouping: the module's top-level
//! functions, and the direct methods of each class. Declarations nested in
//! function bodies are not visited.

use crate::declaration::{CallableDecl, DeclarationSource, OverloadOracle, ScopeKind};
use crate::diagnostics::Diagnostic;
use crate::grouping::{group_by_name, groups_in_source_order};
use crate::sink::DiagnosticSink;
use crate::state::OverloadChecker;

impl<'a, O: ?Sized, S: DiagnosticSink> OverloadChecker<'a, O, S> {
    /// Check every scope of `source`. Stub-only sources are skipped.
    pub fn check_module<Src>(&mut self, source: &Src)
    where
        Src: DeclarationSource,
        O: OverloadOracle<Src::Decl>,
    {
        let _span = tracing::info_span!("check_module", file = source.file_name()).entered();

        if source.is_stub() {
            tracing::debug!("skipping stub-only source");
            return;
        }

        self.check_scope(ScopeKind::Module, source.top_level_functions());

        for class in source.classes() {
            let _class_span = tracing::debug_span!("check_class", class = class.name).entered();
            self.check_scope(ScopeKind::Class, class.methods);
        }
    }

    /// Group the declarations of one scope by name and check each group.
    pub fn check_scope<'d, D, I>(&mut self, scope: ScopeKind, decls: I)
    where
        D: CallableDecl + 'd,
        I: IntoIterator<Item = &'d D>,
        O: OverloadOracle<D>,
    {
        let groups = groups_in_source_order(group_by_name(decls));
        tracing::trace!(?scope, groups = groups.len(), "check scope");

        for (_, group) in &groups {
            self.check_overload_group(scope, group);
        }
    }
}

/// Check one module with `oracle`, returning the diagnostics in report order.
pub fn check_module<Src, O>(source: &Src, oracle: &O) -> Vec<Diagnostic>
where
    Src: DeclarationSource,
    O: OverloadOracle<Src::Decl> + ?Sized,
{
    let mut checker = OverloadChecker::new(source.file_name(), oracle);
    checker.check_module(source);
    checker.take_diagnostics()
}
