use anyhow::Result;
use colored::Colorize;
use rustc_hash::FxHashMap;
use std::path::{Path, PathBuf};

use overcheck_common::{Diagnostic, DiagnosticCategory, LineMap, Span};

/// Prefix printed in front of diagnostic codes.
const CODE_PREFIX: &str = "OVL";

pub struct Reporter {
    color: bool,
    /// Directory relative source file names are resolved against.
    base_dir: Option<PathBuf>,
    sources: FxHashMap<String, Option<String>>,
    line_maps: FxHashMap<String, LineMap>,
}

impl Reporter {
    pub fn new(color: bool) -> Self {
        Reporter {
            color,
            base_dir: None,
            sources: FxHashMap::default(),
            line_maps: FxHashMap::default(),
        }
    }

    /// Resolve relative source file names against `dir` instead of the
    /// current directory.
    pub fn with_base_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.base_dir = Some(dir.into());
        self
    }

    /// Register source text for `file` instead of reading it from disk.
    pub fn with_source(mut self, file: impl Into<String>, text: impl Into<String>) -> Self {
        self.sources.insert(file.into(), Some(text.into()));
        self
    }

    pub fn render(&mut self, diagnostics: &[Diagnostic]) -> String {
        let mut out = String::new();
        for diagnostic in diagnostics {
            out.push_str(&self.format_diagnostic(diagnostic));
            out.push('\n');
        }
        out
    }

    pub fn format_diagnostic(&mut self, diagnostic: &Diagnostic) -> String {
        let location = self.format_location(&diagnostic.file, diagnostic.start);
        let category = self.format_category(diagnostic.category);
        let code = self.format_code(diagnostic.code);

        let mut output = String::new();
        if let Some(location) = location {
            output.push_str(&location);
        } else if !diagnostic.file.is_empty() {
            output.push_str(&diagnostic.file);
        } else {
            output.push_str("<unknown>");
        }

        output.push_str(" - ");
        output.push_str(&category);
        if !code.is_empty() {
            output.push(' ');
            output.push_str(&code);
        }
        output.push_str(": ");
        output.push_str(&diagnostic.message_text);

        if let Some(snippet) = self.format_snippet(&diagnostic.file, diagnostic.span()) {
            output.push_str(&snippet);
        }

        output
    }

    /// Format a source line with the diagnostic span underlined.
    /// Example:
    ///     3   def area(r: float) -> float: ...
    ///             ~~~~
    fn format_snippet(&mut self, file: &str, span: Span) -> Option<String> {
        if file.is_empty() || span.length == 0 {
            return None;
        }

        let (line_num, column) = self.position_for(file, span.start)?;
        let source = self.sources.get(file)?.as_deref()?;
        let line_map = self.line_maps.get(file)?;
        let line_text = line_map.line_text((line_num - 1) as usize, source)?;

        let mut underline = String::new();
        let underline_end = column - 1 + span.length;
        for (i, ch) in line_text.chars().enumerate() {
            let offset = i as u32;
            if offset < column - 1 {
                if ch == '\t' {
                    underline.push('\t');
                } else {
                    underline.push(' ');
                }
            } else if offset < underline_end {
                underline.push('~');
            } else {
                break;
            }
        }

        if !underline.contains('~') {
            underline.push('~');
        }

        let underline_display = if self.color {
            underline.red().to_string()
        } else {
            underline
        };

        let mut snippet = String::new();
        snippet.push('\n');
        snippet.push_str(&format!("  {:>3}   {}", line_num, line_text));
        snippet.push('\n');
        snippet.push_str(&format!("        {}", underline_display));
        Some(snippet)
    }

    fn format_location(&mut self, file: &str, offset: u32) -> Option<String> {
        if file.is_empty() {
            return None;
        }

        let (line, column) = self.position_for(file, offset)?;
        Some(format!("{}:{}:{}", file, line, column))
    }

    /// 1-based (line, column) of `offset` in `file`.
    fn position_for(&mut self, file: &str, offset: u32) -> Option<(u32, u32)> {
        self.ensure_source(file);
        let source = self.sources.get(file)?.as_deref()?;
        let line_map = self
            .line_maps
            .entry(file.to_string())
            .or_insert_with(|| LineMap::build(source));
        let position = line_map.offset_to_position(offset, source);
        Some((position.line + 1, position.character + 1))
    }

    fn ensure_source(&mut self, file: &str) {
        if !self.sources.contains_key(file) {
            let contents = std::fs::read_to_string(self.source_path(file)).ok();
            if contents.is_none() {
                tracing::debug!(file, "source not readable, reporting without positions");
            }
            self.sources.insert(file.to_string(), contents);
        }
    }

    fn source_path(&self, file: &str) -> PathBuf {
        let path = Path::new(file);
        match &self.base_dir {
            Some(base_dir) if path.is_relative() => base_dir.join(path),
            _ => path.to_path_buf(),
        }
    }

    fn format_category(&self, category: DiagnosticCategory) -> String {
        let label = match category {
            DiagnosticCategory::Warning => "warning",
        };
        if self.color {
            label.yellow().bold().to_string()
        } else {
            label.to_string()
        }
    }

    fn format_code(&self, code: u32) -> String {
        if code == 0 {
            return String::new();
        }

        let label = format!("{CODE_PREFIX}{code}");
        if self.color {
            label.bright_blue().to_string()
        } else {
            label
        }
    }
}

/// Render diagnostics as a pretty-printed JSON array.
pub fn render_json(diagnostics: &[Diagnostic]) -> Result<String> {
    Ok(serde_json::to_string_pretty(diagnostics)?)
}
