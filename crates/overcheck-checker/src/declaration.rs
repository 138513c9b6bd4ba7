//! Host-facing traits describing declarations and the predicates over them.
//!
//! The checker never looks inside a declaration beyond its name and the span
//! of its name token. Whether a declaration is an overload signature, and
//! whether two signatures are compatible, are questions answered by the host
//! through `OverloadOracle`.

use overcheck_common::Span;

/// A function or method declaration as seen by the checker.
pub trait CallableDecl {
    /// Declared identifier.
    fn name(&self) -> &str;

    /// Span of the identifier token. Diagnostics are anchored here.
    fn name_span(&self) -> Span;

    /// Ordering key within a scope. Two declarations of one scope never
    /// share a position.
    fn position(&self) -> u32 {
        self.name_span().start
    }
}

/// Predicates the checker needs but does not implement.
pub trait OverloadOracle<D> {
    /// Whether `decl` is marked as an overload signature.
    fn is_overload(&self, decl: &D) -> bool;

    /// Whether `implementation` accepts every call `overload` admits.
    fn is_signature_compatible(&self, implementation: &D, overload: &D) -> bool;
}

impl<D, O: OverloadOracle<D> + ?Sized> OverloadOracle<D> for &O {
    fn is_overload(&self, decl: &D) -> bool {
        (**self).is_overload(decl)
    }

    fn is_signature_compatible(&self, implementation: &D, overload: &D) -> bool {
        (**self).is_signature_compatible(implementation, overload)
    }
}

/// An oracle assembled from two closures.
pub struct FnOracle<M, C> {
    is_overload: M,
    is_compatible: C,
}

impl<M, C> FnOracle<M, C> {
    pub fn new(is_overload: M, is_compatible: C) -> Self {
        Self {
            is_overload,
            is_compatible,
        }
    }
}

impl<D, M, C> OverloadOracle<D> for FnOracle<M, C>
where
    M: Fn(&D) -> bool,
    C: Fn(&D, &D) -> bool,
{
    fn is_overload(&self, decl: &D) -> bool {
        (self.is_overload)(decl)
    }

    fn is_signature_compatible(&self, implementation: &D, overload: &D) -> bool {
        (self.is_compatible)(implementation, overload)
    }
}

/// The kind of scope a group of declarations lives in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ScopeKind {
    /// Top-level functions of a module.
    Module,
    /// Methods declared directly in a class body.
    Class,
}

impl ScopeKind {
    /// Plural noun used by the missing-implementation message.
    pub const fn plural_noun(self) -> &'static str {
        match self {
            ScopeKind::Module => "functions",
            ScopeKind::Class => "methods",
        }
    }

    /// Singular noun used by the incompatible-signature message.
    pub const fn singular_noun(self) -> &'static str {
        match self {
            ScopeKind::Module => "function",
            ScopeKind::Class => "method",
        }
    }
}

/// Methods declared directly in one class body (inherited members excluded).
pub struct ClassScope<'d, D> {
    pub name: &'d str,
    pub methods: Vec<&'d D>,
}

/// A parsed module, as supplied by the host.
pub trait DeclarationSource {
    type Decl: CallableDecl;

    fn file_name(&self) -> &str;

    /// Stub-only sources declare signatures without implementations and are
    /// never checked.
    fn is_stub(&self) -> bool;

    /// Top-level functions of the module, nested functions excluded.
    fn top_level_functions(&self) -> Vec<&Self::Decl>;

    /// Every class of the module with its direct methods.
    fn classes(&self) -> Vec<ClassScope<'_, Self::Decl>>;
}
