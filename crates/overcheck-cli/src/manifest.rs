//! Declaration manifests: the parser output the CLI checks.
//!
//! A manifest describes one source module: its top-level functions, its
//! classes and their direct methods, each with the span of its name token,
//! its decorators and its signature.

use rustc_hash::FxHashSet;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

use overcheck_checker::{CallableDecl, ClassScope, DeclarationSource};
use overcheck_common::Span;

use crate::signature::Signature;

/// Suffix of manifest files picked up when walking directories.
pub const MANIFEST_SUFFIX: &str = ".decls.json";

/// Extension of stub-only sources.
const STUB_EXTENSION: &str = ".pyi";

#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("failed to read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("{file}: two declarations in {scope} share position {position}")]
    DuplicatePosition {
        file: String,
        scope: String,
        position: u32,
    },
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModuleManifest {
    pub file_name: String,
    #[serde(default)]
    pub stub: bool,
    #[serde(default)]
    pub functions: Vec<FunctionDecl>,
    #[serde(default)]
    pub classes: Vec<ClassDecl>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassDecl {
    pub name: String,
    #[serde(default)]
    pub methods: Vec<FunctionDecl>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionDecl {
    pub name: String,
    /// Byte offset of the name token.
    pub start: u32,
    /// Length of the name token; defaults to the byte length of `name`.
    #[serde(default)]
    pub length: Option<u32>,
    #[serde(default)]
    pub decorators: Vec<String>,
    /// Explicit overload marker, for sources that do not use decorators.
    #[serde(default)]
    pub overload: Option<bool>,
    #[serde(default)]
    pub signature: Signature,
}

impl CallableDecl for FunctionDecl {
    fn name(&self) -> &str {
        &self.name
    }

    fn name_span(&self) -> Span {
        let length = self.length.unwrap_or(self.name.len() as u32);
        Span::new(self.start, length)
    }
}

impl ModuleManifest {
    /// Read and validate the manifest at `path`.
    pub fn load(path: &Path) -> Result<Self, ManifestError> {
        let text = std::fs::read_to_string(path).map_err(|source| ManifestError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&text, path)
    }

    /// Parse and validate manifest text. `path` is only used for errors.
    pub fn parse(text: &str, path: &Path) -> Result<Self, ManifestError> {
        let manifest: ModuleManifest =
            serde_json::from_str(text).map_err(|source| ManifestError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        manifest.validate()?;
        Ok(manifest)
    }

    /// Reject scopes where two declarations share a position; the checker
    /// orders groups by position and requires it to be unique.
    fn validate(&self) -> Result<(), ManifestError> {
        self.check_unique_positions("module scope", &self.functions)?;
        for class in &self.classes {
            self.check_unique_positions(&format!("class {}", class.name), &class.methods)?;
        }
        Ok(())
    }

    fn check_unique_positions(
        &self,
        scope: &str,
        decls: &[FunctionDecl],
    ) -> Result<(), ManifestError> {
        let mut seen = FxHashSet::default();
        for decl in decls {
            if !seen.insert(decl.position()) {
                return Err(ManifestError::DuplicatePosition {
                    file: self.file_name.clone(),
                    scope: scope.to_string(),
                    position: decl.position(),
                });
            }
        }
        Ok(())
    }
}

impl DeclarationSource for ModuleManifest {
    type Decl = FunctionDecl;

    fn file_name(&self) -> &str {
        &self.file_name
    }

    fn is_stub(&self) -> bool {
        self.stub || self.file_name.ends_with(STUB_EXTENSION)
    }

    fn top_level_functions(&self) -> Vec<&FunctionDecl> {
        self.functions.iter().collect()
    }

    fn classes(&self) -> Vec<ClassScope<'_, FunctionDecl>> {
        self.classes
            .iter()
            .map(|class| ClassScope {
                name: &class.name,
                methods: class.methods.iter().collect(),
            })
            .collect()
    }
}

/// Whether `path` names a declaration manifest.
pub fn is_manifest_path(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.ends_with(MANIFEST_SUFFIX))
}
