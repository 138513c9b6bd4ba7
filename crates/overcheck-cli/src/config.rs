use anyhow::{Context, Result};
use globset::{Glob, GlobSet, GlobSetBuilder};
use serde::{Deserialize, Deserializer};
use std::path::{Path, PathBuf};

use crate::args::{CliArgs, OutputFormat};

/// File name looked up when `--project` names a directory.
pub const PROJECT_FILE_NAME: &str = "overcheck.json";

/// Custom deserializer for boolean options that accepts both bool and string values.
/// This handles cases where overcheck.json contains `"pretty": "true"` instead of `"pretty": true`.
fn deserialize_bool_or_string<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum BoolOrString {
        Bool(bool),
        String(String),
    }

    match Option::<BoolOrString>::deserialize(deserializer)? {
        None => Ok(None),
        Some(BoolOrString::Bool(b)) => Ok(Some(b)),
        Some(BoolOrString::String(s)) => {
            let normalized = s.trim().to_lowercase();
            match normalized.as_str() {
                "true" | "1" | "yes" | "on" => Ok(Some(true)),
                "false" | "0" | "no" | "off" => Ok(Some(false)),
                _ => Err(Error::custom(format!(
                    "invalid boolean value: '{}'. Expected true, false, 'true', or 'false'",
                    s
                ))),
            }
        }
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ProjectConfig {
    #[serde(default)]
    pub include: Option<Vec<String>>,
    #[serde(default)]
    pub exclude: Option<Vec<String>>,
    #[serde(default)]
    pub format: Option<OutputFormat>,
    #[serde(default, deserialize_with = "deserialize_bool_or_string")]
    pub pretty: Option<bool>,
}

/// Options after merging the project file with the command line.
#[derive(Debug, Clone)]
pub struct ResolvedOptions {
    /// Directory include/exclude patterns are relative to.
    pub base_dir: PathBuf,
    /// Explicit inputs; empty means "walk `base_dir`".
    pub inputs: Vec<PathBuf>,
    pub include: Option<GlobSet>,
    pub exclude: Option<GlobSet>,
    pub format: OutputFormat,
    pub pretty: Option<bool>,
}

/// Resolve `--project` to a project file path.
pub fn resolve_project_path(project: &Path, cwd: &Path) -> PathBuf {
    let path = if project.is_absolute() {
        project.to_path_buf()
    } else {
        cwd.join(project)
    };
    if path.is_dir() {
        path.join(PROJECT_FILE_NAME)
    } else {
        path
    }
}

pub fn load_project_config(path: &Path) -> Result<ProjectConfig> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read project file {}", path.display()))?;
    parse_project_config(&text)
        .with_context(|| format!("failed to parse project file {}", path.display()))
}

pub fn parse_project_config(text: &str) -> Result<ProjectConfig> {
    let config = serde_json::from_str(text)?;
    Ok(config)
}

/// Merge the project file (if any) with command-line flags. Flags win.
pub fn resolve_options(args: &CliArgs, cwd: &Path) -> Result<ResolvedOptions> {
    let (config, base_dir) = match &args.project {
        Some(project) => {
            let path = resolve_project_path(project, cwd);
            let config = load_project_config(&path)?;
            let base_dir = path
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| cwd.to_path_buf());
            (config, base_dir)
        }
        None => {
            let implicit = cwd.join(PROJECT_FILE_NAME);
            if args.inputs.is_empty() && implicit.is_file() {
                (load_project_config(&implicit)?, cwd.to_path_buf())
            } else {
                (ProjectConfig::default(), cwd.to_path_buf())
            }
        }
    };

    let inputs = args
        .inputs
        .iter()
        .map(|input| {
            if input.is_absolute() {
                input.clone()
            } else {
                cwd.join(input)
            }
        })
        .collect();

    Ok(ResolvedOptions {
        base_dir,
        inputs,
        include: build_glob_set(config.include.as_deref()).context("invalid include pattern")?,
        exclude: build_glob_set(config.exclude.as_deref()).context("invalid exclude pattern")?,
        format: args.format.or(config.format).unwrap_or_default(),
        pretty: args.pretty.or(config.pretty),
    })
}

fn build_glob_set(patterns: Option<&[String]>) -> Result<Option<GlobSet>> {
    let Some(patterns) = patterns else {
        return Ok(None);
    };

    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        let glob = Glob::new(pattern).with_context(|| format!("bad glob '{pattern}'"))?;
        builder.add(glob);
    }
    Ok(Some(builder.build()?))
}
