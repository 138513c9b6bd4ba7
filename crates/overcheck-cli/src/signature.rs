//! Callable signatures and the compatibility check between an
//! implementation and one of its overloads.
//!
//! An implementation is compatible with an overload when every call the
//! overload admits is also accepted by the implementation: each argument the
//! overload takes has somewhere to go, each required implementation
//! parameter is always supplied, and every annotation on the implementation
//! side is at least as wide as the overload's.

use serde::Deserialize;
use smallvec::SmallVec;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ParameterKind {
    PositionalOnly,
    /// Positional-or-keyword.
    #[default]
    Positional,
    /// `*args`
    VarPositional,
    KeywordOnly,
    /// `**kwargs`
    VarKeyword,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Parameter {
    pub name: String,
    #[serde(default)]
    pub kind: ParameterKind,
    #[serde(default)]
    pub annotation: Option<String>,
    #[serde(default)]
    pub has_default: bool,
}

impl Parameter {
    fn is_positional(&self) -> bool {
        matches!(
            self.kind,
            ParameterKind::PositionalOnly | ParameterKind::Positional
        )
    }

    fn is_named(&self) -> bool {
        matches!(
            self.kind,
            ParameterKind::Positional | ParameterKind::KeywordOnly
        )
    }

    fn is_variadic(&self) -> bool {
        matches!(
            self.kind,
            ParameterKind::VarPositional | ParameterKind::VarKeyword
        )
    }

    fn is_required(&self) -> bool {
        !self.has_default && !self.is_variadic()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Signature {
    #[serde(default)]
    pub parameters: Vec<Parameter>,
    #[serde(default)]
    pub returns: Option<String>,
}

impl Signature {
    fn positional(&self) -> impl Iterator<Item = &Parameter> {
        self.parameters.iter().filter(|p| p.is_positional())
    }

    fn named(&self, name: &str) -> Option<&Parameter> {
        self.parameters
            .iter()
            .find(|p| p.is_named() && p.name == name)
    }

    fn of_kind(&self, kind: ParameterKind) -> Option<&Parameter> {
        self.parameters.iter().find(|p| p.kind == kind)
    }
}

/// Whether `implementation` accepts every call `overload` admits.
pub fn is_signature_compatible(implementation: &Signature, overload: &Signature) -> bool {
    accepts_positional_arguments(implementation, overload)
        && accepts_keyword_arguments(implementation, overload)
        && accepts_variadics(implementation, overload)
        && supplies_required_parameters(implementation, overload)
        && annotation_accepts(
            implementation.returns.as_deref(),
            overload.returns.as_deref(),
        )
}

fn accepts_positional_arguments(implementation: &Signature, overload: &Signature) -> bool {
    let var_positional = implementation.of_kind(ParameterKind::VarPositional);
    overload.positional().enumerate().all(|(index, param)| {
        match implementation.positional().nth(index).or(var_positional) {
            Some(slot) => {
                annotation_accepts(slot.annotation.as_deref(), param.annotation.as_deref())
            }
            None => false,
        }
    })
}

fn accepts_keyword_arguments(implementation: &Signature, overload: &Signature) -> bool {
    let var_keyword = implementation.of_kind(ParameterKind::VarKeyword);
    overload
        .parameters
        .iter()
        .filter(|p| p.is_named())
        .all(|param| match implementation.named(&param.name).or(var_keyword) {
            Some(slot) => {
                annotation_accepts(slot.annotation.as_deref(), param.annotation.as_deref())
            }
            None => false,
        })
}

fn accepts_variadics(implementation: &Signature, overload: &Signature) -> bool {
    [ParameterKind::VarPositional, ParameterKind::VarKeyword]
        .into_iter()
        .all(|kind| match overload.of_kind(kind) {
            None => true,
            Some(param) => implementation.of_kind(kind).is_some_and(|slot| {
                annotation_accepts(slot.annotation.as_deref(), param.annotation.as_deref())
            }),
        })
}

/// Every required implementation parameter must receive a value from every
/// call the overload admits.
fn supplies_required_parameters(implementation: &Signature, overload: &Signature) -> bool {
    let overload_positional: Vec<&Parameter> = overload.positional().collect();

    implementation
        .positional()
        .enumerate()
        .filter(|(_, param)| param.is_required())
        .all(|(index, param)| {
            let by_position = overload_positional
                .get(index)
                .is_some_and(|p| p.is_required());
            let by_name = param.kind == ParameterKind::Positional
                && overload
                    .named(&param.name)
                    .is_some_and(|p| p.is_required());
            by_position || by_name
        })
        && implementation
            .parameters
            .iter()
            .filter(|p| p.kind == ParameterKind::KeywordOnly && p.is_required())
            .all(|param| overload.named(&param.name).is_some_and(|p| p.is_required()))
}

/// Whether a value annotated `overload` may be passed where `implementation`
/// is expected. Missing annotations on either side are compatible.
pub fn annotation_accepts(implementation: Option<&str>, overload: Option<&str>) -> bool {
    let (Some(implementation), Some(overload)) = (implementation, overload) else {
        return true;
    };

    let accepted = union_members(implementation);
    if accepted.iter().any(|member| is_top_type(member)) {
        return true;
    }

    let offered = union_members(overload);
    if offered.iter().any(|member| member == "Any") {
        return true;
    }

    offered.iter().all(|member| {
        accepted
            .iter()
            .any(|target| member_accepts(target, member))
    })
}

fn is_top_type(member: &str) -> bool {
    matches!(member, "Any" | "object")
}

/// Builtin types with a known relationship to each other. Only pairs of
/// these are ever judged incompatible; anything else (classes, generics,
/// protocols) is assumed to match.
const SCALAR_TYPES: &[&str] = &["bool", "int", "float", "complex", "str", "bytes", "None"];

/// `bool` -> `int` -> `float` -> `complex`.
const NUMERIC_TOWER: &[&str] = &["bool", "int", "float", "complex"];

/// Whether a single offered union member fits a single accepted member.
fn member_accepts(target: &str, offered: &str) -> bool {
    if target == offered || promotes_to(offered, target) {
        return true;
    }
    !(SCALAR_TYPES.contains(&target) && SCALAR_TYPES.contains(&offered))
}

fn promotes_to(offered: &str, target: &str) -> bool {
    let rank = |name: &str| NUMERIC_TOWER.iter().position(|&numeric| numeric == name);
    matches!((rank(offered), rank(target)), (Some(from), Some(to)) if from < to)
}

/// Flatten an annotation into its union members, normalized.
///
/// Understands `A | B`, `Union[A, B]`, `Optional[A]` and `Literal[...]`,
/// nested to any depth. Literal values are replaced by their type.
pub fn union_members(annotation: &str) -> SmallVec<[String; 4]> {
    let mut members = SmallVec::new();
    collect_union_members(annotation, &mut members);
    members
}

fn collect_union_members(annotation: &str, out: &mut SmallVec<[String; 4]>) {
    let text = normalize(annotation);

    {
        let alternatives = split_top_level(&text, '|');
        if alternatives.len() > 1 {
            for alternative in alternatives {
                collect_union_members(alternative, out);
            }
            return;
        }
    }

    if let Some(inner) = subscript_of(&text, "Union") {
        for member in split_top_level(inner, ',') {
            collect_union_members(member, out);
        }
        return;
    }

    if let Some(inner) = subscript_of(&text, "Optional") {
        collect_union_members(inner, out);
        push_unique(out, "None".to_string());
        return;
    }

    if let Some(inner) = subscript_of(&text, "Literal") {
        for value in split_top_level(inner, ',') {
            if value.starts_with("Literal[") {
                collect_union_members(value, out);
            } else {
                push_unique(out, literal_type(value));
            }
        }
        return;
    }

    push_unique(out, text);
}

/// Type of one `Literal[...]` value: `"r"` is `str`, `b"r"` is `bytes`,
/// `True` is `bool`, `3` is `int`, `Color.RED` is `Color`.
fn literal_type(value: &str) -> String {
    let unprefixed = value.trim_start_matches(|ch: char| "bBrRuU".contains(ch));
    if unprefixed.starts_with(['"', '\'']) {
        let prefix = &value[..value.len() - unprefixed.len()];
        let kind = if prefix.contains(['b', 'B']) { "bytes" } else { "str" };
        return kind.to_string();
    }

    match value {
        "True" | "False" => "bool".to_string(),
        "None" => "None".to_string(),
        _ if value.parse::<i64>().is_ok() => "int".to_string(),
        _ => match value.rsplit_once('.') {
            Some((owner, _)) => owner.to_string(),
            None => value.to_string(),
        },
    }
}

fn push_unique(out: &mut SmallVec<[String; 4]>, member: String) {
    if !out.contains(&member) {
        out.push(member);
    }
}

/// Strip whitespace and `typing.` qualifiers.
fn normalize(annotation: &str) -> String {
    let compact: String = annotation.chars().filter(|ch| !ch.is_whitespace()).collect();
    let compact = compact.replace("typing_extensions.", "").replace("typing.", "");
    if compact == "NoneType" {
        "None".to_string()
    } else {
        compact
    }
}

/// `Name[inner]` -> `inner`.
fn subscript_of<'t>(text: &'t str, name: &str) -> Option<&'t str> {
    text.strip_prefix(name)?
        .strip_prefix('[')?
        .strip_suffix(']')
}

/// Split on `separator` outside of brackets and string literals.
fn split_top_level(text: &str, separator: char) -> SmallVec<[&str; 4]> {
    let mut parts = SmallVec::new();
    let mut depth = 0usize;
    let mut quote: Option<char> = None;
    let mut escaped = false;
    let mut start = 0;

    for (index, ch) in text.char_indices() {
        if let Some(open) = quote {
            if escaped {
                escaped = false;
            } else if ch == '\\' {
                escaped = true;
            } else if ch == open {
                quote = None;
            }
            continue;
        }

        match ch {
            '"' | '\'' => quote = Some(ch),
            '[' | '(' => depth += 1,
            ']' | ')' => depth = depth.saturating_sub(1),
            _ if ch == separator && depth == 0 => {
                parts.push(&text[start..index]);
                start = index + ch.len_utf8();
            }
            _ => {}
        }
    }
    parts.push(&text[start..]);
    parts
}
