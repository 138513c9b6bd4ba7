//! Common types and utilities for the overcheck overload checker.
//!
//! This crate provides foundational types shared by the checker and the CLI:
//! - Source spans (`Span`) anchoring diagnostics at identifier tokens
//! - Position types and `LineMap` for line/column conversion
//! - Diagnostic types, codes and message templates

// Span - Source location tracking (byte offsets)
pub mod span;
pub use span::Span;

// Position types for line/column source locations
pub mod position;
pub use position::{LineMap, Position};

// Diagnostic types and message table
pub mod diagnostics;
pub use diagnostics::{Diagnostic, DiagnosticCategory, DiagnosticMessage};
