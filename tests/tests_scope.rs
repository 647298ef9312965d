//! Scope computation: exports, import rewriting, reference-site filters.

mod helpers;

use helpers::model_fixtures::*;
use reqsl::ast::{ConceptClass, ConceptKind, Reference, SystemRef};
use reqsl::scope::{ExportTarget, RefSite, ScopeProvider, TargetKind, compute_exports};
use reqsl::workspace::Workspace;

fn site(document: reqsl::DocumentId, expected: TargetKind) -> RefSite {
    RefSite {
        document,
        container: None,
        property: "isA",
        expected,
    }
}

#[test]
fn test_exports_qualify_with_system_name() {
    let mut ws = Workspace::new();
    let lib = document(&mut ws, "A.B");
    let foo = data_entity(&mut ws, lib, "Foo");
    state_machine(&mut ws, lib, "M", &[("S1", true, false)]);

    let exports = compute_exports(&ws, lib);
    let names: Vec<&str> = exports.iter().map(|e| e.qualified_name.as_str()).collect();
    assert!(names.contains(&"A.B"));
    assert!(names.contains(&"A.B.Foo"));
    assert!(names.contains(&"A.B.M"));
    assert!(names.contains(&"A.B.M.S1"));

    let foo_export = exports.iter().find(|e| e.qualified_name == "A.B.Foo").unwrap();
    assert_eq!(foo_export.target, ExportTarget::Concept(foo));
}

#[test]
fn test_wildcard_import_strips_namespace() {
    let mut ws = Workspace::new();
    let lib = document(&mut ws, "A.B");
    let foo = data_entity(&mut ws, lib, "Foo");
    let main = document(&mut ws, "Main");
    add_import(&mut ws, main, "A.B.*");

    let provider = ScopeProvider::new(&ws);
    let scope = provider.scope_for(&site(main, TargetKind::Concept(ConceptClass::DataEntity)));
    assert_eq!(
        scope.resolve("Foo").map(|e| e.target),
        Some(ExportTarget::Concept(foo))
    );
    // The fully qualified name stays visible alongside.
    assert!(scope.resolve("A.B.Foo").is_some());
}

#[test]
fn test_without_import_only_qualified_name_is_visible() {
    let mut ws = Workspace::new();
    let lib = document(&mut ws, "A.B");
    data_entity(&mut ws, lib, "Foo");
    let main = document(&mut ws, "Main");

    let provider = ScopeProvider::new(&ws);
    let scope = provider.scope_for(&site(main, TargetKind::Concept(ConceptClass::DataEntity)));
    assert!(scope.resolve("Foo").is_none());
    assert!(scope.resolve("A.B.Foo").is_some());
}

#[test]
fn test_plain_import_keeps_children_addressable() {
    let mut ws = Workspace::new();
    let lib = document(&mut ws, "A.B");
    let machine = state_machine(&mut ws, lib, "Foo", &[("S1", true, true)]);
    let main = document(&mut ws, "Main");
    add_import(&mut ws, main, "A.B.Foo");

    let provider = ScopeProvider::new(&ws);
    let scope = provider.scope_for(&site(main, TargetKind::AnyConcept));
    assert_eq!(
        scope.resolve("Foo").map(|e| e.target),
        Some(ExportTarget::Concept(machine))
    );
    assert!(scope.resolve("Foo.S1").is_some());
}

#[test]
fn test_local_names_shadow_imports() {
    let mut ws = Workspace::new();
    let lib = document(&mut ws, "A.B");
    data_entity(&mut ws, lib, "Foo");
    let main = document(&mut ws, "Main");
    add_import(&mut ws, main, "A.B.*");
    let local = data_entity(&mut ws, main, "Foo");

    let provider = ScopeProvider::new(&ws);
    let scope = provider.scope_for(&site(main, TargetKind::Concept(ConceptClass::DataEntity)));
    assert_eq!(
        scope.resolve("Foo").map(|e| e.target),
        Some(ExportTarget::Concept(local))
    );
}

#[test]
fn test_missing_document_yields_empty_scope() {
    let ws = Workspace::new();
    let provider = ScopeProvider::new(&ws);
    let scope = provider.scope_for(&site(reqsl::DocumentId::new(9), TargetKind::AnyConcept));
    assert!(scope.is_empty());
}

#[test]
fn test_state_references_bind_single_segments_only() {
    let mut ws = Workspace::new();
    let main = document(&mut ws, "Main");
    state_machine(&mut ws, main, "M", &[("S1", true, false), ("S2", false, true)]);

    let provider = ScopeProvider::new(&ws);
    let scope = provider.scope_for(&site(main, TargetKind::Concept(ConceptClass::State)));
    assert!(scope.resolve("S1").is_some());
    assert!(scope.resolve("M.S1").is_none());
    assert!(scope.resolve("Main.M.S1").is_none());
}

#[test]
fn test_include_element_scope_is_exactly_the_target_system() {
    let mut ws = Workspace::new();
    let lib = document(&mut ws, "Library");
    let foo = data_entity(&mut ws, lib, "Foo");
    data_entity(&mut ws, lib, "Bar");
    functional_requirement(&mut ws, lib, "F1");
    let main = document(&mut ws, "Main");
    let include = concept(
        &mut ws,
        main,
        "inc",
        ConceptKind::IncludeElement {
            system: SystemRef::Resolved(lib),
            element: Reference::Absent,
            expected: ConceptClass::DataEntity,
        },
    );

    let provider = ScopeProvider::new(&ws);
    let scope = provider.scope_for(&RefSite {
        document: main,
        container: Some(include),
        property: "element",
        expected: TargetKind::Concept(ConceptClass::DataEntity),
    });
    assert_eq!(scope.len(), 2);
    assert_eq!(
        scope.resolve("Foo").map(|e| e.target),
        Some(ExportTarget::Concept(foo))
    );
    assert!(scope.resolve("F1").is_none());
}

#[test]
fn test_extension_points_are_steps_prefixed_by_usecase_name() {
    let mut ws = Workspace::new();
    let main = document(&mut ws, "Main");
    let uc = concept(
        &mut ws,
        main,
        "uc1",
        ConceptKind::UseCase {
            extends: Vec::new(),
            extension_points: Vec::new(),
        },
    );
    concept(&mut ws, main, "uc1Step", ConceptKind::Step { next: Reference::Absent });
    concept(&mut ws, main, "other", ConceptKind::Step { next: Reference::Absent });

    let provider = ScopeProvider::new(&ws);
    let scope = provider.scope_for(&RefSite {
        document: main,
        container: Some(uc),
        property: "extensionPoint",
        expected: TargetKind::Concept(ConceptClass::Step),
    });
    assert!(scope.resolve("uc1Step").is_some());
    assert!(scope.resolve("other").is_none());
}

#[test]
fn test_system_reference_sees_systems_only() {
    let mut ws = Workspace::new();
    let lib = document(&mut ws, "Library");
    data_entity(&mut ws, lib, "Foo");
    let main = document(&mut ws, "Main");

    let provider = ScopeProvider::new(&ws);
    let scope = provider.scope_for(&site(main, TargetKind::System));
    assert_eq!(
        scope.resolve("Library").map(|e| e.target),
        Some(ExportTarget::System(lib))
    );
    assert!(scope.iter().all(|entry| entry.class.is_none()));
}
