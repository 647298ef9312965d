//! Mechanical quick-fix synthesis.
//!
//! Each fix is derived from an issue's code and positional `data` payload
//! alone; no re-analysis of the model text happens here. Codes without a
//! mechanical fix yield `None`.

use text_size::TextSize;

use crate::ast::RuleProperty;
use crate::base::{DocumentId, Position, Span};
use crate::workspace::Workspace;

use super::{Issue, codes};

/// A single replacement in one document. An empty `span` (start == end)
/// is an insertion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextEdit {
    pub document: DocumentId,
    pub span: Span,
    pub new_text: String,
}

/// Synthesize the edit that resolves `issue`, when one exists.
pub fn quick_fix(workspace: &Workspace, issue: &Issue) -> Option<TextEdit> {
    match issue.code {
        codes::LINT_REPLACE_WORD => {
            let [wrong, correct] = two(&issue.data)?;
            replace_in_property(workspace, issue, wrong, correct, false)
        }
        codes::LINT_SELECT_WORD => {
            // First alternative; clients listing every alternative build
            // the remaining edits from `data` themselves.
            let wrong = issue.data.first()?;
            let correct = issue.data.get(1)?;
            replace_in_property(workspace, issue, wrong, correct, false)
        }
        codes::LINT_INCONSISTENT_TERM => {
            let [synonym, preferred] = two(&issue.data)?;
            replace_in_property(workspace, issue, synonym, preferred, true)
        }
        codes::LINT_EXCESS_TEXT => {
            let prefix = issue.data.first()?;
            let concept = workspace.get_concept(issue.node.concept()?)?;
            let span = concept.property_span(rule_property(issue)?)?;
            Some(TextEdit {
                document: issue.document,
                span,
                new_text: prefix.clone(),
            })
        }
        codes::LINT_CREATE_ELEMENT => {
            let [keyword, text] = two(&issue.data)?;
            Some(insert_at_system_end(
                workspace,
                issue.document,
                format!("\n{keyword} {text}"),
            ))
        }
        codes::INCLUDE_ELEMENT_SUGGESTION => {
            let [system, element] = two(&issue.data)?;
            Some(insert_at_system_end(
                workspace,
                issue.document,
                format!("\ninclude {system}.{element}"),
            ))
        }
        codes::INCLUDE_ALL_SUGGESTION => {
            let system = issue.data.first()?;
            Some(insert_at_system_end(
                workspace,
                issue.document,
                format!("\ninclude {system}.*"),
            ))
        }
        _ => None,
    }
}

fn two(data: &[String]) -> Option<[&String; 2]> {
    match data {
        [a, b, ..] => Some([a, b]),
        _ => None,
    }
}

fn rule_property(issue: &Issue) -> Option<RuleProperty> {
    match issue.property? {
        "id" => Some(RuleProperty::Id),
        "name" => Some(RuleProperty::Name),
        "description" => Some(RuleProperty::Description),
        _ => None,
    }
}

/// Replace the first occurrence of `needle` inside the issue's property
/// value, narrowing the property span to the matched substring.
fn replace_in_property(
    workspace: &Workspace,
    issue: &Issue,
    needle: &str,
    replacement: &str,
    ignore_case: bool,
) -> Option<TextEdit> {
    let concept = workspace.get_concept(issue.node.concept()?)?;
    let property = rule_property(issue)?;
    let value = concept.property_value(property)?;
    let span = concept.property_span(property)?;

    let (start, end) = if ignore_case {
        find_ignore_case(value, needle)?
    } else {
        let start = value.find(needle)?;
        (start, start + needle.len())
    };
    let sub = sub_span(
        value,
        span,
        TextSize::new(start as u32),
        TextSize::new(end as u32),
    );
    Some(TextEdit {
        document: issue.document,
        span: sub,
        new_text: replacement.to_string(),
    })
}

/// Locate a case-insensitive match of `needle`, returning byte offsets
/// that are boundaries of `haystack` itself.
///
/// Case folding can change byte length (Turkish `İ` lowercases to two
/// code points), so offsets taken from a lowercased copy do not transfer
/// back; instead the fold runs per character over the original string.
fn find_ignore_case(haystack: &str, needle: &str) -> Option<(usize, usize)> {
    let needle: Vec<char> = needle.chars().flat_map(char::to_lowercase).collect();
    if needle.is_empty() {
        return None;
    }
    for (start, _) in haystack.char_indices() {
        let mut matched = 0;
        for (offset, c) in haystack[start..].char_indices() {
            let mut aligned = true;
            for folded in c.to_lowercase() {
                if matched < needle.len() && needle[matched] == folded {
                    matched += 1;
                } else {
                    // Either a differing character, or the needle ends in
                    // the middle of one character's folding.
                    aligned = false;
                    break;
                }
            }
            if !aligned {
                break;
            }
            if matched == needle.len() {
                return Some((start, start + offset + c.len_utf8()));
            }
        }
    }
    None
}

/// Zero-width edit just before the System's closing position.
fn insert_at_system_end(workspace: &Workspace, document: DocumentId, text: String) -> TextEdit {
    TextEdit {
        document,
        span: Span::caret(workspace.system(document).span.end),
        new_text: text,
    }
}

/// Narrow a property span to the byte range `[start, end)` of its value,
/// accounting for newlines inside multi-line values.
fn sub_span(value: &str, span: Span, start: TextSize, end: TextSize) -> Span {
    Span::new(
        offset_position(value, span.start, start),
        offset_position(value, span.start, end),
    )
}

fn offset_position(value: &str, origin: Position, offset: TextSize) -> Position {
    let prefix = &value[..usize::from(offset)];
    let newlines = prefix.matches('\n').count();
    if newlines == 0 {
        // Columns count characters, matching Position's convention.
        Position::new(origin.line, origin.column + prefix.chars().count())
    } else {
        let last_line = prefix.rsplit('\n').next().unwrap_or("");
        Position::new(origin.line + newlines, last_line.chars().count())
    }
}
