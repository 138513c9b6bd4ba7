use crate::grouping::{group_by_name, groups_in_source_order};
use crate::test_fixtures::{TestDecl, implementation, overload};

fn positions(group: &[&TestDecl]) -> Vec<u32> {
    group.iter().map(|decl| decl.start).collect()
}

#[test]
fn test_groups_sorted_by_position() {
    let decls = vec![
        implementation("f", 30),
        overload("g", 5),
        overload("f", 10),
        overload("f", 20),
    ];
    let groups = group_by_name(&decls);

    assert_eq!(groups.len(), 2);
    assert_eq!(positions(&groups["f"]), vec![10, 20, 30]);
    assert_eq!(positions(&groups["g"]), vec![5]);
}

#[test]
fn test_unrelated_names_form_singleton_groups() {
    let decls = vec![implementation("a", 0), implementation("b", 10)];
    let groups = group_by_name(&decls);

    assert_eq!(groups.len(), 2);
    assert!(groups.values().all(|group| group.len() == 1));
}

#[test]
fn test_empty_scope_has_no_groups() {
    let decls: Vec<TestDecl> = Vec::new();
    assert!(group_by_name(&decls).is_empty());
    assert!(groups_in_source_order(group_by_name(&decls)).is_empty());
}

#[test]
fn test_source_order_follows_first_member() {
    let decls = vec![
        implementation("late", 50),
        overload("early", 0),
        implementation("middle", 25),
        implementation("early", 60),
    ];
    let ordered = groups_in_source_order(group_by_name(&decls));
    let names: Vec<&str> = ordered.iter().map(|(name, _)| *name).collect();
    assert_eq!(names, vec!["early", "middle", "late"]);
    assert_eq!(positions(&ordered[0].1), vec![0, 60]);
}

#[test]
fn test_grouping_independent_of_input_order() {
    let forward = vec![overload("f", 0), overload("f", 10), implementation("f", 20)];
    let mut backward = forward.clone();
    backward.reverse();

    let a = group_by_name(&forward);
    let b = group_by_name(&backward);
    assert_eq!(positions(&a["f"]), positions(&b["f"]));
}
