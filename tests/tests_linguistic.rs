//! Linguistic rule engine: pattern matching, failure reporting, synonym
//! scan, quick fixes.

mod helpers;

use helpers::model_fixtures::*;
use once_cell::sync::Lazy;
use reqsl::ast::{
    Concept, ConceptClass, ConceptKind, LinguisticPattern, PatternPart, Reference, RuleProperty,
    RuleSeverity,
};
use reqsl::base::{ConceptId, DocumentId};
use reqsl::diagnostics::{Severity, codes, quick_fix};
use reqsl::nlp::{PosTag, TokenCache};
use reqsl::workspace::Workspace;
use reqsl::LinguisticEngine;

static CACHE: Lazy<TokenCache> = Lazy::new(TokenCache::new);

fn name_rule(
    ws: &mut Workspace,
    doc: DocumentId,
    target: ConceptClass,
    parts: Vec<PatternPart>,
) -> ConceptId {
    concept(
        ws,
        doc,
        "rule1",
        ConceptKind::LinguisticRule {
            severity: RuleSeverity::Warning,
            target_class: target,
            property: RuleProperty::Name,
            patterns: vec![LinguisticPattern { parts }],
        },
    )
}

fn named_fr(ws: &mut Workspace, doc: DocumentId, id: &str, display: &str) -> ConceptId {
    let mut fr = Concept::new(doc, id, ConceptKind::FunctionalRequirement {
        part_of: Reference::Absent,
    });
    fr.name_alias = Some(display.into());
    ws.add_concept(fr).unwrap()
}

fn determiner_noun() -> Vec<PatternPart> {
    vec![
        PatternPart::Word("The".into()),
        PatternPart::PartOfSpeech(PosTag::Noun),
    ]
}

#[test]
fn test_matching_name_produces_no_issues() {
    let mut ws = Workspace::new();
    let doc = document(&mut ws, "Main");
    name_rule(&mut ws, doc, ConceptClass::FunctionalRequirement, determiner_noun());
    let fr = named_fr(&mut ws, doc, "r_1", "The widget");

    let engine = LinguisticEngine::new(&ws, &CACHE);
    let mut issues = reqsl::IssueCollector::new();
    engine.check_concept(doc, fr, &mut issues);
    assert!(issues.issues().is_empty());
}

#[test]
fn test_excess_text_keeps_the_matched_prefix() {
    let mut ws = Workspace::new();
    let doc = document(&mut ws, "Main");
    name_rule(&mut ws, doc, ConceptClass::FunctionalRequirement, determiner_noun());
    named_fr(&mut ws, doc, "r_1", "The widget extra");

    let engine = LinguisticEngine::new(&ws, &CACHE);
    let issues = engine.check_document(doc);
    let issue = find_code(&issues, codes::LINT_EXCESS_TEXT).unwrap();
    assert_eq!(issue.severity, Severity::Warning);
    assert_eq!(issue.property, Some("name"));
    assert_eq!(issue.data, vec!["The widget".to_string(), "extra".to_string()]);
}

#[test]
fn test_wrong_word_offers_the_single_alternative() {
    let mut ws = Workspace::new();
    let doc = document(&mut ws, "Main");
    name_rule(&mut ws, doc, ConceptClass::FunctionalRequirement, determiner_noun());
    named_fr(&mut ws, doc, "r_1", "A widget");

    let engine = LinguisticEngine::new(&ws, &CACHE);
    let issues = engine.check_document(doc);
    let issue = find_code(&issues, codes::LINT_REPLACE_WORD).unwrap();
    assert_eq!(issue.data, vec!["A".to_string(), "The".to_string()]);

    let edit = quick_fix(&ws, issue).unwrap();
    assert_eq!(edit.new_text, "The");
    assert_eq!(edit.document, doc);
}

#[test]
fn test_rules_for_other_kinds_do_not_apply() {
    let mut ws = Workspace::new();
    let doc = document(&mut ws, "Main");
    name_rule(&mut ws, doc, ConceptClass::Goal, determiner_noun());
    named_fr(&mut ws, doc, "r_1", "A widget");

    let engine = LinguisticEngine::new(&ws, &CACHE);
    assert!(engine.check_document(doc).is_empty());
}

#[test]
fn test_only_the_first_matching_rule_decides() {
    let mut ws = Workspace::new();
    let doc = document(&mut ws, "Main");
    name_rule(&mut ws, doc, ConceptClass::FunctionalRequirement, determiner_noun());
    // A later rule that would accept the text has no effect.
    concept(
        &mut ws,
        doc,
        "rule2",
        ConceptKind::LinguisticRule {
            severity: RuleSeverity::Error,
            target_class: ConceptClass::FunctionalRequirement,
            property: RuleProperty::Name,
            patterns: vec![LinguisticPattern {
                parts: vec![
                    PatternPart::Word("A".into()),
                    PatternPart::PartOfSpeech(PosTag::Noun),
                ],
            }],
        },
    );
    named_fr(&mut ws, doc, "r_1", "A widget");

    let engine = LinguisticEngine::new(&ws, &CACHE);
    let issues = engine.check_document(doc);
    assert_eq!(count_code(&issues, codes::LINT_REPLACE_WORD), 1);
}

#[test]
fn test_missing_element_suggests_include_from_foreign_system() {
    let mut ws = Workspace::new();
    let library = document(&mut ws, "Library");
    data_entity(&mut ws, library, "Gadget");
    let doc = document(&mut ws, "Main");
    data_entity(&mut ws, doc, "Widget");
    name_rule(
        &mut ws,
        doc,
        ConceptClass::FunctionalRequirement,
        vec![
            PatternPart::Word("shows".into()),
            PatternPart::ElementProperty {
                class: ConceptClass::DataEntity,
                property: RuleProperty::Name,
            },
        ],
    );
    named_fr(&mut ws, doc, "r_1", "shows Gadget");

    let engine = LinguisticEngine::new(&ws, &CACHE);
    let issues = engine.check_document(doc);
    let create = find_code(&issues, codes::LINT_CREATE_ELEMENT).unwrap();
    assert_eq!(create.data[0], "DataEntity");

    let suggestion = find_code(&issues, codes::INCLUDE_ELEMENT_SUGGESTION).unwrap();
    assert_eq!(suggestion.severity, Severity::Info);
    assert_eq!(
        suggestion.data,
        vec!["Library".to_string(), "Gadget".to_string()]
    );
    let edit = quick_fix(&ws, suggestion).unwrap();
    assert_eq!(edit.new_text, "\ninclude Library.Gadget");
    assert!(edit.span.is_empty());
}

#[test]
fn test_element_reference_matches_by_lemma() {
    let mut ws = Workspace::new();
    let doc = document(&mut ws, "Main");
    data_entity(&mut ws, doc, "widget");
    name_rule(
        &mut ws,
        doc,
        ConceptClass::FunctionalRequirement,
        vec![
            PatternPart::Word("shows".into()),
            PatternPart::ElementProperty {
                class: ConceptClass::DataEntity,
                property: RuleProperty::Name,
            },
        ],
    );
    // Plural surface form, same lemma.
    named_fr(&mut ws, doc, "r_1", "shows widgets");

    let engine = LinguisticEngine::new(&ws, &CACHE);
    assert!(engine.check_document(doc).is_empty());
}

#[test]
fn test_fragment_alternatives_match_any_branch() {
    let mut ws = Workspace::new();
    let doc = document(&mut ws, "Main");
    let fragment = concept(
        &mut ws,
        doc,
        "determiner",
        ConceptKind::LinguisticFragment {
            alternatives: vec![
                PatternPart::Word("The".into()),
                PatternPart::Word("Every".into()),
            ],
        },
    );
    name_rule(
        &mut ws,
        doc,
        ConceptClass::FunctionalRequirement,
        vec![
            PatternPart::FragmentRef(Reference::Resolved(fragment)),
            PatternPart::PartOfSpeech(PosTag::Noun),
        ],
    );
    named_fr(&mut ws, doc, "r_1", "Every widget");

    let engine = LinguisticEngine::new(&ws, &CACHE);
    assert!(engine.check_document(doc).is_empty());
}

#[test]
fn test_id_rule_matches_raw_substrings() {
    let mut ws = Workspace::new();
    let doc = document(&mut ws, "Main");
    concept(
        &mut ws,
        doc,
        "rule1",
        ConceptKind::LinguisticRule {
            severity: RuleSeverity::Error,
            target_class: ConceptClass::FunctionalRequirement,
            property: RuleProperty::Id,
            patterns: vec![LinguisticPattern {
                parts: vec![
                    PatternPart::Word("r_".into()),
                    PatternPart::PartOfSpeech(PosTag::Numeral),
                ],
            }],
        },
    );
    functional_requirement(&mut ws, doc, "r_1");
    functional_requirement(&mut ws, doc, "req_2");

    let engine = LinguisticEngine::new(&ws, &CACHE);
    let issues = engine.check_document(doc);
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].severity, Severity::Error);
    assert_eq!(issues[0].property, Some("id"));
}

#[test]
fn test_synonym_warning_fires_independently_of_rules() {
    let mut ws = Workspace::new();
    let doc = document(&mut ws, "Main");
    let mut term = Concept::new(doc, "LoginDialog", ConceptKind::GlossaryTerm {
        is_a: Reference::Absent,
        part_of: Reference::Absent,
        synonyms: vec!["login mask".into()],
        applicable_to: Vec::new(),
    });
    term.name_alias = Some("Login Dialog".into());
    ws.add_concept(term).unwrap();
    let mut fr = Concept::new(doc, "r_1", ConceptKind::FunctionalRequirement {
        part_of: Reference::Absent,
    });
    fr.description = Some("Opens the Login Mask on demand".into());
    fr.description_span = Some(reqsl::Span::from_coords(2, 4, 2, 34));
    ws.add_concept(fr).unwrap();

    // No linguistic rule is declared at all.
    let engine = LinguisticEngine::new(&ws, &CACHE);
    let issues = engine.check_document(doc);
    let issue = find_code(&issues, codes::LINT_INCONSISTENT_TERM).unwrap();
    assert_eq!(issue.severity, Severity::Warning);
    assert_eq!(issue.property, Some("description"));
    assert_eq!(
        issue.data,
        vec!["login mask".to_string(), "Login Dialog".to_string()]
    );

    let edit = quick_fix(&ws, issue).unwrap();
    assert_eq!(edit.new_text, "Login Dialog");
    // "Opens the " is 10 columns past the description start.
    assert_eq!(edit.span, reqsl::Span::from_coords(2, 14, 2, 24));
}

#[test]
fn test_synonym_fix_survives_multibyte_text() {
    let mut ws = Workspace::new();
    let doc = document(&mut ws, "Main");
    concept(
        &mut ws,
        doc,
        "Mask",
        ConceptKind::GlossaryTerm {
            is_a: Reference::Absent,
            part_of: Reference::Absent,
            synonyms: vec!["mask".into()],
            applicable_to: Vec::new(),
        },
    );
    let mut fr = Concept::new(doc, "r_1", ConceptKind::FunctionalRequirement {
        part_of: Reference::Absent,
    });
    // Turkish dotted capital I lowercases to two code points; the fix
    // span must still land on the synonym, not shift or slice past the
    // end of the text.
    fr.description = Some("İİİİ mask".into());
    fr.description_span = Some(reqsl::Span::from_coords(3, 0, 3, 9));
    ws.add_concept(fr).unwrap();

    let engine = LinguisticEngine::new(&ws, &CACHE);
    let issues = engine.check_document(doc);
    let issue = find_code(&issues, codes::LINT_INCONSISTENT_TERM).unwrap();
    let edit = quick_fix(&ws, issue).unwrap();
    assert_eq!(edit.new_text, "Mask");
    assert_eq!(edit.span, reqsl::Span::from_coords(3, 5, 3, 9));
}

#[test]
fn test_synonym_scan_respects_applicability() {
    let mut ws = Workspace::new();
    let doc = document(&mut ws, "Main");
    concept(
        &mut ws,
        doc,
        "LoginDialog",
        ConceptKind::GlossaryTerm {
            is_a: Reference::Absent,
            part_of: Reference::Absent,
            synonyms: vec!["login mask".into()],
            applicable_to: vec![ConceptClass::Goal],
        },
    );
    let mut fr = Concept::new(doc, "r_1", ConceptKind::FunctionalRequirement {
        part_of: Reference::Absent,
    });
    fr.description = Some("Opens the login mask".into());
    ws.add_concept(fr).unwrap();

    let engine = LinguisticEngine::new(&ws, &CACHE);
    assert_eq!(count_code(&engine.check_document(doc), codes::LINT_INCONSISTENT_TERM), 0);
}
