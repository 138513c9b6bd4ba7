//! Partitioning a scope's declarations into same-name groups.

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::declaration::CallableDecl;

/// Declarations sharing one name, sorted by ascending position.
pub type DeclGroup<'d, D> = SmallVec<[&'d D; 4]>;

/// Group `decls` by name. Each group is sorted by position once, after all
/// declarations have been collected. Names with a single declaration still
/// form a group.
pub fn group_by_name<'d, D, I>(decls: I) -> FxHashMap<&'d str, DeclGroup<'d, D>>
where
    D: CallableDecl,
    I: IntoIterator<Item = &'d D>,
{
    let mut groups: FxHashMap<&'d str, DeclGroup<'d, D>> = FxHashMap::default();
    for decl in decls {
        groups.entry(decl.name()).or_default().push(decl);
    }
    for group in groups.values_mut() {
        group.sort_by_key(|decl| decl.position());
    }
    groups
}

/// Flatten a grouping into a list ordered by each group's first position,
/// so that diagnostics come out in a stable order regardless of hashing.
pub fn groups_in_source_order<'d, D: CallableDecl>(
    groups: FxHashMap<&'d str, DeclGroup<'d, D>>,
) -> Vec<(&'d str, DeclGroup<'d, D>)> {
    let mut ordered: Vec<_> = groups
        .into_iter()
        .filter(|(_, group)| !group.is_empty())
        .collect();
    ordered.sort_by_key(|(_, group)| group[0].position());
    ordered
}
