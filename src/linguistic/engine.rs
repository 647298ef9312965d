//! Rule evaluation and diagnostic assembly.

use std::sync::Arc;

use crate::ast::{
    ConceptClass, ConceptKind, LinguisticPattern, RuleProperty, RuleSeverity,
};
use crate::base::{ConceptId, DocumentId};
use crate::diagnostics::{Issue, IssueCollector, Severity, codes};
use crate::nlp::{NlpToken, TokenCache};
use crate::workspace::Workspace;

use super::matcher::{Expectation, MatchFailure, Matcher};
use super::synonyms;

/// Matches free-text properties against user-declared linguistic rules.
///
/// The engine borrows the workspace snapshot and an injected token cache;
/// it carries no other state, so one instance per validation pass is the
/// expected shape.
pub struct LinguisticEngine<'w> {
    workspace: &'w Workspace,
    cache: &'w TokenCache,
}

impl<'w> LinguisticEngine<'w> {
    pub fn new(workspace: &'w Workspace, cache: &'w TokenCache) -> Self {
        Self { workspace, cache }
    }

    /// Check every concept of a document.
    pub fn check_document(&self, document: DocumentId) -> Vec<Issue> {
        let mut issues = IssueCollector::new();
        for &id in &self.workspace.system(document).concepts {
            self.check_concept(document, id, &mut issues);
        }
        issues.take()
    }

    /// Check one concept against the rules targeting its kind, plus the
    /// glossary synonym scan (which runs regardless of rule outcome).
    pub fn check_concept(
        &self,
        document: DocumentId,
        concept_id: ConceptId,
        issues: &mut IssueCollector,
    ) {
        let concept = self.workspace.concept(concept_id);
        let class = concept.class();

        for property in [RuleProperty::Id, RuleProperty::Name, RuleProperty::Description] {
            // Declaration order; only the first rule for this
            // (kind, property) pair decides, pass or fail.
            let rule = self
                .workspace
                .concepts_of(document, ConceptClass::LinguisticRule)
                .into_iter()
                .find_map(|id| match &self.workspace.concept(id).kind {
                    ConceptKind::LinguisticRule {
                        severity,
                        target_class,
                        property: rule_property,
                        patterns,
                    } if *target_class == class && *rule_property == property => {
                        Some((*severity, patterns.clone()))
                    }
                    _ => None,
                });
            let Some((severity, patterns)) = rule else {
                continue;
            };
            let Some(value) = concept.property_value(property) else {
                continue;
            };
            self.apply_rule(
                document, concept_id, property, severity, &patterns, value, issues,
            );
        }

        synonyms::check_synonyms(self.workspace, document, concept_id, issues);
    }

    #[allow(clippy::too_many_arguments)]
    fn apply_rule(
        &self,
        document: DocumentId,
        concept_id: ConceptId,
        property: RuleProperty,
        severity: RuleSeverity,
        patterns: &[LinguisticPattern],
        value: &str,
        issues: &mut IssueCollector,
    ) {
        let matcher = Matcher {
            workspace: self.workspace,
            document,
            cache: self.cache,
            language: self.workspace.system_language(document),
        };
        let severity = match severity {
            RuleSeverity::Error => Severity::Error,
            RuleSeverity::Warning => Severity::Warning,
        };

        if property == RuleProperty::Id {
            let mut worst: Option<MatchFailure> = None;
            for pattern in patterns {
                match matcher.match_id(&pattern.parts, value) {
                    Ok(()) => return,
                    Err(failure) => worst = Some(pick_failure(worst, failure)),
                }
            }
            if let Some(failure) = worst {
                self.report_id_failure(
                    document, concept_id, property, severity, value, failure, issues,
                );
            }
            return;
        }

        let language = self.workspace.system_language(document);
        let tokens = self.cache.tokenize(language, value);
        let mut worst: Option<MatchFailure> = None;
        for pattern in patterns {
            match matcher.match_tokens(&pattern.parts, &tokens) {
                Ok(()) => return,
                Err(failure) => worst = Some(pick_failure(worst, failure)),
            }
        }
        if let Some(failure) = worst {
            self.report_token_failure(
                document, concept_id, property, severity, &tokens, failure, issues,
            );
        }
    }

    // ========================================================================
    // FAILURE REPORTING
    // ========================================================================

    #[allow(clippy::too_many_arguments)]
    fn report_token_failure(
        &self,
        document: DocumentId,
        concept_id: ConceptId,
        property: RuleProperty,
        severity: Severity,
        tokens: &Arc<[NlpToken]>,
        failure: MatchFailure,
        issues: &mut IssueCollector,
    ) {
        match failure {
            MatchFailure::Excess { consumed } => {
                let prefix = join_tokens(&tokens[..consumed]);
                let leftover = join_tokens(&tokens[consumed..]);
                issues.add(
                    Issue::new(
                        severity,
                        document,
                        concept_id,
                        codes::LINT_EXCESS_TEXT,
                        format!("remove excess text '{leftover}'"),
                    )
                    .with_property(property.as_str())
                    .with_data(vec![prefix, leftover]),
                );
            }
            MatchFailure::Mismatch { at, expectation } => {
                let found = tokens.get(at).map(|t| t.text.to_string());
                let leftover = join_tokens(&tokens[at.min(tokens.len())..]);
                self.report_mismatch(
                    document, concept_id, property, severity, found, leftover, at, &expectation,
                    issues,
                );
            }
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn report_id_failure(
        &self,
        document: DocumentId,
        concept_id: ConceptId,
        property: RuleProperty,
        severity: Severity,
        value: &str,
        failure: MatchFailure,
        issues: &mut IssueCollector,
    ) {
        match failure {
            MatchFailure::Excess { consumed } => {
                let prefix = value[..consumed].to_string();
                let leftover = value[consumed..].to_string();
                issues.add(
                    Issue::new(
                        severity,
                        document,
                        concept_id,
                        codes::LINT_EXCESS_TEXT,
                        format!("remove excess text '{leftover}'"),
                    )
                    .with_property(property.as_str())
                    .with_data(vec![prefix, leftover]),
                );
            }
            MatchFailure::Mismatch { at, expectation } => {
                let rest = &value[at..];
                let found = rest
                    .split_whitespace()
                    .next()
                    .map(|chunk| chunk.to_string());
                self.report_mismatch(
                    document,
                    concept_id,
                    property,
                    severity,
                    found,
                    rest.to_string(),
                    at,
                    &expectation,
                    issues,
                );
            }
        }
    }

    /// Pick the code family from the violated expectation: a concrete
    /// replace/select/create suggestion when the alternatives allow one,
    /// a plain violation otherwise.
    #[allow(clippy::too_many_arguments)]
    fn report_mismatch(
        &self,
        document: DocumentId,
        concept_id: ConceptId,
        property: RuleProperty,
        severity: Severity,
        found: Option<String>,
        leftover: String,
        at: usize,
        expectation: &Expectation,
        issues: &mut IssueCollector,
    ) {
        let expected = expectation.describe();
        let (code, message, data) = match (&found, expectation) {
            (Some(found), e) if e.only_words() && e.words.len() == 1 => (
                codes::LINT_REPLACE_WORD,
                format!("replace '{found}' with '{}'", e.words[0]),
                vec![found.clone(), e.words[0].to_string()],
            ),
            (Some(found), e) if e.only_words() => {
                let mut data = vec![found.clone()];
                data.extend(e.words.iter().map(|w| w.to_string()));
                (
                    codes::LINT_SELECT_WORD,
                    format!("replace '{found}' with one of: {expected}"),
                    data,
                )
            }
            (Some(_), e) if e.only_elements() => {
                let (class, _) = e.elements[0];
                (
                    codes::LINT_CREATE_ELEMENT,
                    format!("no visible {} matches '{leftover}'", class.display()),
                    vec![class.keyword().to_string(), leftover.clone()],
                )
            }
            (Some(found), _) => (
                codes::LINT_VIOLATION,
                format!("found '{found}' where {expected} was expected"),
                Vec::new(),
            ),
            (None, _) => (
                codes::LINT_VIOLATION,
                format!("text ends where {expected} was expected"),
                Vec::new(),
            ),
        };
        issues.add(
            Issue::new(severity, document, concept_id, code, message)
                .with_property(property.as_str())
                .with_data(data),
        );

        // An element of another System that would satisfy the pattern is
        // worth an include suggestion, informational only.
        if !expectation.elements.is_empty() {
            self.suggest_includes(document, concept_id, property, &leftover, at, expectation, issues);
        }
    }

    /// Scan the other loaded Systems for elements that would have matched
    /// the failing element-reference part.
    #[allow(clippy::too_many_arguments)]
    fn suggest_includes(
        &self,
        document: DocumentId,
        concept_id: ConceptId,
        property: RuleProperty,
        leftover: &str,
        _at: usize,
        expectation: &Expectation,
        issues: &mut IssueCollector,
    ) {
        for foreign in self.workspace.document_ids() {
            if foreign == document {
                continue;
            }
            let mut matches = Vec::new();
            for (class, rule_property) in &expectation.elements {
                for id in self.workspace.concepts_of(foreign, *class) {
                    let concept = self.workspace.concept(id);
                    if let Some(value) = concept.property_value(*rule_property)
                        && leftover.starts_with(value)
                    {
                        matches.push(concept.name.clone());
                    }
                }
            }
            matches.dedup();
            let system = self.workspace.system(foreign).name.clone();
            match matches.as_slice() {
                [] => {}
                [element] => issues.add(
                    Issue::info(
                        document,
                        concept_id,
                        codes::INCLUDE_ELEMENT_SUGGESTION,
                        format!("'{element}' from system '{system}' would match; include it"),
                    )
                    .with_property(property.as_str())
                    .with_data(vec![system.to_string(), element.to_string()]),
                ),
                _ => issues.add(
                    Issue::info(
                        document,
                        concept_id,
                        codes::INCLUDE_ALL_SUGGESTION,
                        format!("several elements of system '{system}' would match; include it"),
                    )
                    .with_property(property.as_str())
                    .with_data(vec![system.to_string()]),
                ),
            }
        }
    }
}

/// Keep the failure that made it furthest into the input; `Excess` means
/// the whole pattern matched and is always furthest.
fn pick_failure(current: Option<MatchFailure>, candidate: MatchFailure) -> MatchFailure {
    let progress = |f: &MatchFailure| match f {
        MatchFailure::Excess { consumed } => (1, *consumed),
        MatchFailure::Mismatch { at, .. } => (0, *at),
    };
    match current {
        Some(existing) if progress(&existing) >= progress(&candidate) => existing,
        _ => candidate,
    }
}

fn join_tokens(tokens: &[NlpToken]) -> String {
    tokens
        .iter()
        .map(|t| t.text.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}
