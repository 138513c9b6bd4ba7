//! Tests for walking module and class scopes.

use crate::declaration::ScopeKind;
use crate::diagnostics::{Diagnostic, diagnostic_codes};
use crate::scope_walker::check_module;
use crate::state::OverloadChecker;
use crate::test_fixtures::{TestModule, TestOracle, implementation, overload};

fn codes_and_starts(diags: &[Diagnostic]) -> Vec<(u32, u32)> {
    diags.iter().map(|d| (d.code, d.start)).collect()
}

#[test]
fn test_module_functions_checked() {
    let module = TestModule::new(vec![
        overload("f", 0),
        overload("f", 10),
        implementation("g", 20),
    ]);
    let diags = check_module(&module, &TestOracle::default());
    assert_eq!(
        codes_and_starts(&diags),
        vec![(diagnostic_codes::OVERLOAD_IMPLEMENTATION_MISSING, 10)]
    );
    assert!(diags[0].message_text.contains("functions"));
    assert_eq!(diags[0].file, "test.py");
}

#[test]
fn test_class_methods_checked_with_method_wording() {
    let mut module = TestModule::new(Vec::new());
    module.classes.push((
        "Shape",
        vec![overload("area", 100), implementation("area", 120), overload("area", 140)],
    ));
    let diags = check_module(&module, &TestOracle::with_incompatible(&[(120, 100)]));
    assert_eq!(
        codes_and_starts(&diags),
        vec![
            (diagnostic_codes::OVERLOAD_IMPLEMENTATION_MISSING, 140),
            (diagnostic_codes::OVERLOAD_SIGNATURE_NOT_COMPATIBLE, 100),
        ]
    );
    assert!(diags[0].message_text.contains("@overload-decorated methods"));
    assert!(diags[1].message_text.contains("@overload-decorated method "));
}

#[test]
fn test_same_name_in_different_scopes_not_grouped() {
    // An overload at module level and an implementation in a class do not
    // form one group.
    let mut module = TestModule::new(vec![overload("run", 0)]);
    module.classes.push(("Runner", vec![implementation("run", 50)]));
    let diags = check_module(&module, &TestOracle::default());
    assert_eq!(
        codes_and_starts(&diags),
        vec![(diagnostic_codes::OVERLOAD_IMPLEMENTATION_MISSING, 0)]
    );
}

#[test]
fn test_each_class_is_its_own_scope() {
    let mut module = TestModule::new(Vec::new());
    module.classes.push(("A", vec![overload("m", 10), implementation("m", 20)]));
    module.classes.push(("B", vec![overload("m", 40)]));
    let diags = check_module(&module, &TestOracle::default());
    assert_eq!(
        codes_and_starts(&diags),
        vec![(diagnostic_codes::OVERLOAD_IMPLEMENTATION_MISSING, 40)]
    );
}

#[test]
fn test_stub_source_yields_nothing() {
    let mut module = TestModule::new(vec![overload("f", 0), overload("f", 10)]);
    module.classes.push(("C", vec![overload("m", 20)]));
    module.stub = true;
    module.file_name = "test.pyi";
    assert!(check_module(&module, &TestOracle::default()).is_empty());
}

#[test]
fn test_permuting_input_does_not_change_output() {
    let decls = vec![
        overload("f", 0),
        implementation("f", 10),
        overload("f", 20),
        overload("g", 30),
        overload("h", 40),
        implementation("h", 50),
    ];
    let oracle = TestOracle::with_incompatible(&[(10, 0), (50, 40)]);
    let expected = check_module(&TestModule::new(decls.clone()), &oracle);
    assert_eq!(expected.len(), 4);

    let mut reversed = decls.clone();
    reversed.reverse();
    assert_eq!(check_module(&TestModule::new(reversed), &oracle), expected);

    let mut rotated = decls;
    rotated.rotate_left(2);
    assert_eq!(check_module(&TestModule::new(rotated), &oracle), expected);
}

#[test]
fn test_groups_reported_in_source_order() {
    let module = TestModule::new(vec![
        overload("later", 50),
        overload("earlier", 5),
    ]);
    let diags = check_module(&module, &TestOracle::default());
    assert_eq!(
        diags.iter().map(|d| d.start).collect::<Vec<_>>(),
        vec![5, 50]
    );
}

#[test]
fn test_check_scope_with_external_sink() {
    let decls = [overload("f", 0), overload("f", 10)];
    let mut sink: Vec<Diagnostic> = Vec::new();
    {
        let oracle = TestOracle::default();
        let mut checker = OverloadChecker::with_sink("mod.py", &oracle, &mut sink);
        checker.check_scope(ScopeKind::Module, decls.iter());
    }
    assert_eq!(codes_and_starts(&sink), vec![(1001, 10)]);
    assert_eq!(sink[0].file, "mod.py");
}
