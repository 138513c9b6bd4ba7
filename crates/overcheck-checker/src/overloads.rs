//! Validation of a single overload group.
//!
//! A group is valid when it contains no overload signatures, or when its
//! overload signatures are followed by exactly one implementation that
//! accepts every call the overloads admit.

use crate::declaration::{CallableDecl, OverloadOracle, ScopeKind};
use crate::sink::{DiagnosticSink, OverloadDiagnosticKind};
use crate::state::OverloadChecker;

impl<'a, O: ?Sized, S: DiagnosticSink> OverloadChecker<'a, O, S> {
    /// Check one group of same-named declarations.
    ///
    /// `group` is expected in ascending position order, as produced by
    /// `group_by_name`. Reports:
    /// - `MissingImplementation` at the highest-position member when every
    ///   member is an overload;
    /// - `MissingImplementation` at the last member when the implementation
    ///   (the last non-overload member) is followed by an overload;
    /// - `IncompatibleOverload` at each overload whose signature the
    ///   implementation is not compatible with.
    pub fn check_overload_group<D>(&mut self, scope: ScopeKind, group: &[&D])
    where
        D: CallableDecl,
        O: OverloadOracle<D>,
    {
        let oracle = self.oracle;

        if !group.iter().any(|&decl| oracle.is_overload(decl)) {
            return;
        }

        let implementation = group
            .iter()
            .rev()
            .copied()
            .find(|&decl| !oracle.is_overload(decl));

        let Some(implementation) = implementation else {
            // All overloads: anchor at the member furthest into the source.
            if let Some(anchor) = group.iter().copied().max_by_key(|decl| decl.position()) {
                tracing::debug!(
                    name = anchor.name(),
                    members = group.len(),
                    "overload group has no implementation"
                );
                self.error_at_decl(anchor, OverloadDiagnosticKind::MissingImplementation, scope);
            }
            return;
        };

        if let Some(&tail) = group.last()
            && !std::ptr::eq(tail, implementation)
        {
            tracing::debug!(
                name = tail.name(),
                implementation = implementation.position(),
                tail = tail.position(),
                "overload follows the implementation"
            );
            self.error_at_decl(tail, OverloadDiagnosticKind::MissingImplementation, scope);
        }

        for &overload in group {
            if std::ptr::eq(overload, implementation) || !oracle.is_overload(overload) {
                continue;
            }
            if !oracle.is_signature_compatible(implementation, overload) {
                self.error_at_decl(overload, OverloadDiagnosticKind::IncompatibleOverload, scope);
            }
        }
    }
}
