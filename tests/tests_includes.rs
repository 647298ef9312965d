//! Include expansion: proxies are transparent to every enumeration.

mod helpers;

use helpers::model_fixtures::*;
use reqsl::ast::{ConceptClass, ConceptKind, Reference, SystemRef};
use reqsl::workspace::Workspace;

#[test]
fn test_include_all_exposes_the_included_concepts() {
    let mut ws = Workspace::new();
    let lib = document(&mut ws, "Library");
    let d1 = data_entity(&mut ws, lib, "D1");
    let d2 = data_entity(&mut ws, lib, "D2");
    let d3 = data_entity(&mut ws, lib, "D3");
    let main = document(&mut ws, "Main");
    concept(
        &mut ws,
        main,
        "inc",
        ConceptKind::IncludeAll { system: SystemRef::Resolved(lib) },
    );

    let visible = ws.concepts_of(main, ConceptClass::DataEntity);
    assert_eq!(visible, vec![d1, d2, d3]);
    // The proxy node itself disappears from the expanded list.
    assert!(
        ws.expanded_concepts(main)
            .iter()
            .all(|&id| ws.concept(id).class() != ConceptClass::IncludeAll)
    );
}

#[test]
fn test_include_element_exposes_one_concept() {
    let mut ws = Workspace::new();
    let lib = document(&mut ws, "Library");
    let d1 = data_entity(&mut ws, lib, "D1");
    data_entity(&mut ws, lib, "D2");
    let main = document(&mut ws, "Main");
    concept(
        &mut ws,
        main,
        "inc",
        ConceptKind::IncludeElement {
            system: SystemRef::Resolved(lib),
            element: Reference::Resolved(d1),
            expected: ConceptClass::DataEntity,
        },
    );

    assert_eq!(ws.concepts_of(main, ConceptClass::DataEntity), vec![d1]);
}

#[test]
fn test_unresolved_include_contributes_nothing() {
    let mut ws = Workspace::new();
    let main = document(&mut ws, "Main");
    concept(
        &mut ws,
        main,
        "inc",
        ConceptKind::IncludeAll { system: SystemRef::Unresolved("Missing".into()) },
    );
    let local = data_entity(&mut ws, main, "Local");

    assert_eq!(ws.expanded_concepts(main), vec![local]);
}

#[test]
fn test_expansion_goes_one_level_deep() {
    let mut ws = Workspace::new();
    let inner = document(&mut ws, "Inner");
    data_entity(&mut ws, inner, "Deep");
    let middle = document(&mut ws, "Middle");
    concept(
        &mut ws,
        middle,
        "inc_inner",
        ConceptKind::IncludeAll { system: SystemRef::Resolved(inner) },
    );
    let own = data_entity(&mut ws, middle, "Own");
    let main = document(&mut ws, "Main");
    concept(
        &mut ws,
        main,
        "inc_middle",
        ConceptKind::IncludeAll { system: SystemRef::Resolved(middle) },
    );

    // Middle's direct concepts appear; Inner's are not chased through
    // Middle's own include.
    let visible = ws.concepts_of(main, ConceptClass::DataEntity);
    assert_eq!(visible, vec![own]);
}
