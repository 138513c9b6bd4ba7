//! Overload group checker.
//!
//! Validates that every group of same-named, overload-marked declarations in
//! a scope ends with exactly one implementation, and that every overload
//! signature is compatible with that implementation.
//!
//! This crate is organized into several submodules:
//! - `declaration` - traits the host implements over its declaration model
//! - `grouping` - partitioning a scope's declarations into name groups
//! - `overloads` - per-group validation
//! - `scope_walker` - driving validation over a module and its classes
//! - `sink` - diagnostic kinds and the sink abstraction
//! - `state` - `OverloadChecker`, which ties the pieces together
//!
//! Parsing, overload-marker detection and signature compatibility are
//! supplied by the host through `DeclarationSource` and `OverloadOracle`.

pub mod declaration;
pub mod grouping;
pub mod overloads;
pub mod scope_walker;
pub mod sink;
pub mod state;

pub mod diagnostics {
    pub use overcheck_common::diagnostics::{
        Diagnostic, DiagnosticCategory, DiagnosticMessage, diagnostic_codes, diagnostic_messages,
        format_message,
    };
}

#[cfg(test)]
#[path = "../tests/test_fixtures.rs"]
mod test_fixtures;
#[cfg(test)]
#[path = "../tests/grouping_tests.rs"]
mod grouping_tests;
#[cfg(test)]
#[path = "../tests/overload_group_tests.rs"]
mod overload_group_tests;
#[cfg(test)]
#[path = "../tests/scope_walker_tests.rs"]
mod scope_walker_tests;

// Re-export key types
pub use declaration::{
    CallableDecl, ClassScope, DeclarationSource, FnOracle, OverloadOracle, ScopeKind,
};
pub use grouping::{DeclGroup, group_by_name, groups_in_source_order};
pub use scope_walker::check_module;
pub use sink::{DiagnosticSink, OverloadDiagnosticKind};
pub use state::OverloadChecker;
