//! The fixed issue-code taxonomy.
//!
//! Codes are stable, namespaced strings; quick-fix synthesis dispatches on
//! them, and the per-code `data` payload conventions are documented on each
//! constant. Unknown codes never produce a quick fix.

// ============================================================================
// HIERARCHY (always errors)
// ============================================================================

/// A multi-node cycle in an is-a/part-of/next chain.
pub const HIERARCHY_CYCLE: &str = "hierarchy.cycle";
/// A relation pointing straight back at its own node.
pub const HIERARCHY_SELF_REFERENCE: &str = "hierarchy.self-reference";

// ============================================================================
// DOMAIN CONSISTENCY (errors)
// ============================================================================

/// Subtype whose resolved name does not contain the type's resolved name.
pub const INVALID_SUBTYPE: &str = "type.invalid-subtype";
/// Relation whose source and target are the same reference.
pub const RELATION_SAME_ENDPOINTS: &str = "relation.same-source-target";
/// Condition/participant combination the DSL forbids.
pub const INVALID_CONDITION_COMBINATION: &str = "scenario.invalid-condition";
/// A use case listing itself among its own extensions.
pub const USECASE_SELF_EXTENSION: &str = "usecase.self-extension";
/// Two concepts with the same ID inside one System.
pub const DUPLICATE_ID: &str = "id.duplicate";
/// More than one linguistic-language declaration in a System.
pub const MULTIPLE_LANGUAGES: &str = "system.multiple-languages";

// ============================================================================
// STRUCTURAL (warnings)
// ============================================================================

/// State machine without a state flagged initial.
pub const MISSING_INITIAL_STATE: &str = "statemachine.missing-initial-state";
/// State machine without a state flagged final.
pub const MISSING_FINAL_STATE: &str = "statemachine.missing-final-state";

// ============================================================================
// LINGUISTIC (severity per rule unless noted)
// ============================================================================

/// Rule violation with no concrete fix to offer.
pub const LINT_VIOLATION: &str = "lint.rule-violation";
/// A wrong word where exactly one literal word was expected.
/// `data = [wrong, correct]`.
pub const LINT_REPLACE_WORD: &str = "lint.replace-word";
/// A word where one of several alternatives was expected.
/// `data = [wrong, alt...]`.
pub const LINT_SELECT_WORD: &str = "lint.select-word";
/// No visible element of the expected class matched; a new one could be
/// created. `data = [class_keyword, text]`.
pub const LINT_CREATE_ELEMENT: &str = "lint.create-element";
/// Tokens left over after the pattern was fully consumed.
/// `data = [matched_prefix, leftover]`. Severity follows the owning rule.
pub const LINT_EXCESS_TEXT: &str = "lint.excess-text";
/// A glossary-term synonym used instead of the preferred term. Always a
/// warning. `data = [synonym, preferred]`.
pub const LINT_INCONSISTENT_TERM: &str = "lint.inconsistent-term";

// ============================================================================
// INCLUDE SUGGESTIONS (always informational)
// ============================================================================

/// An element of another System would satisfy the pattern; offer to include
/// it. `data = [system, element]`.
pub const INCLUDE_ELEMENT_SUGGESTION: &str = "include.element";
/// Offer to include all concepts of another System. `data = [system]`.
pub const INCLUDE_ALL_SUGGESTION: &str = "include.all";
