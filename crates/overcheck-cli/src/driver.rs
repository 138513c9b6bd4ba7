//! Manifest discovery and checking.

use anyhow::{Result, bail};
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use overcheck_checker::check_module;
use overcheck_common::Diagnostic;

use crate::config::ResolvedOptions;
use crate::manifest::{ModuleManifest, is_manifest_path};
use crate::oracle::ManifestOracle;

#[derive(Debug, Default)]
pub struct CheckResult {
    pub files: Vec<PathBuf>,
    pub diagnostics: Vec<Diagnostic>,
}

/// Collect the manifests named by the options.
///
/// Files given explicitly are always checked. Directories are walked for
/// `*.decls.json` files that pass the include/exclude patterns, matched
/// against paths relative to the project directory.
pub fn discover_manifests(options: &ResolvedOptions) -> Result<Vec<PathBuf>> {
    let roots: Vec<PathBuf> = if options.inputs.is_empty() {
        vec![options.base_dir.clone()]
    } else {
        options.inputs.clone()
    };

    let mut files = Vec::new();
    for root in roots {
        if root.is_file() {
            files.push(root);
            continue;
        }
        if !root.is_dir() {
            bail!("input not found: {}", root.display());
        }

        for entry in WalkDir::new(&root)
            .follow_links(true)
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();
            if entry.file_type().is_dir() || !is_manifest_path(path) {
                continue;
            }
            if matches_filters(path, options) {
                files.push(path.to_path_buf());
            }
        }
    }

    files.sort();
    files.dedup();
    tracing::debug!(count = files.len(), "discovered manifests");
    Ok(files)
}

fn matches_filters(path: &Path, options: &ResolvedOptions) -> bool {
    let relative = path.strip_prefix(&options.base_dir).unwrap_or(path);
    let included = options
        .include
        .as_ref()
        .is_none_or(|include| include.is_match(relative));
    let excluded = options
        .exclude
        .as_ref()
        .is_some_and(|exclude| exclude.is_match(relative));
    included && !excluded
}

/// Check one loaded manifest.
pub fn check_manifest(manifest: &ModuleManifest) -> Vec<Diagnostic> {
    check_module(manifest, &ManifestOracle)
}

/// Load and check the manifest at `path`.
pub fn check_manifest_file(path: &Path) -> Result<Vec<Diagnostic>> {
    let _span = tracing::info_span!("check_file", file = %path.display()).entered();
    let manifest = ModuleManifest::load(path)?;
    Ok(check_manifest(&manifest))
}

/// Check `files` in parallel. Diagnostics keep the order of `files`.
pub fn check_files(files: &[PathBuf]) -> Result<Vec<Diagnostic>> {
    let _span = tracing::info_span!("check_files", files = files.len()).entered();

    let per_file: Vec<Result<Vec<Diagnostic>>> = files
        .par_iter()
        .map(|path| check_manifest_file(path))
        .collect();

    let mut diagnostics = Vec::new();
    for result in per_file {
        diagnostics.extend(result?);
    }
    Ok(diagnostics)
}

pub fn check(options: &ResolvedOptions) -> Result<CheckResult> {
    let files = discover_manifests(options)?;
    let diagnostics = check_files(&files)?;
    tracing::info!(
        files = files.len(),
        diagnostics = diagnostics.len(),
        "check finished"
    );
    Ok(CheckResult { files, diagnostics })
}
