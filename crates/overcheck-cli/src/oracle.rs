//! Answers the checker's overload and compatibility questions for manifests.

use overcheck_checker::OverloadOracle;

use crate::manifest::FunctionDecl;
use crate::signature::is_signature_compatible;

/// Decorator spellings that mark an overload signature.
const OVERLOAD_DECORATORS: &[&str] = &["overload", "typing.overload", "typing_extensions.overload"];

#[derive(Debug, Clone, Copy, Default)]
pub struct ManifestOracle;

impl ManifestOracle {
    fn is_overload_decorator(decorator: &str) -> bool {
        let name = decorator.trim();
        let name = name.strip_prefix('@').unwrap_or(name).trim();
        OVERLOAD_DECORATORS.contains(&name)
    }
}

impl OverloadOracle<FunctionDecl> for ManifestOracle {
    fn is_overload(&self, decl: &FunctionDecl) -> bool {
        decl.overload.unwrap_or_else(|| {
            decl.decorators
                .iter()
                .any(|decorator| Self::is_overload_decorator(decorator))
        })
    }

    fn is_signature_compatible(
        &self,
        implementation: &FunctionDecl,
        overload: &FunctionDecl,
    ) -> bool {
        is_signature_compatible(&implementation.signature, &overload.signature)
    }
}
