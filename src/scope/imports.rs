//! Import matching and relative-name rewriting.
//!
//! An import matches a qualified name if every non-wildcard segment equals
//! the corresponding name segment; a trailing wildcard matches any
//! remaining segments. When several imports match the same name the most
//! specific one wins: most non-wildcard segments, non-wildcard over
//! wildcard on a tie.

use crate::ast::Import;

/// Does `import` make `qualified` visible at all?
pub fn import_matches(import: &Import, qualified: &str) -> bool {
    relative_name(import, qualified).is_some()
}

/// The name `qualified` becomes under `import`, if the import matches.
///
/// A wildcard import strips the qualifying namespace; a plain import strips
/// everything up to (but not including) its last segment, so the imported
/// element stays addressable by that segment and its children below it.
pub fn relative_name(import: &Import, qualified: &str) -> Option<String> {
    let name: Vec<&str> = qualified.split('.').collect();
    let prefix = &import.segments;
    if import.wildcard {
        if name.len() <= prefix.len() {
            return None;
        }
        if !prefix.iter().zip(&name).all(|(a, b)| a == b) {
            return None;
        }
        Some(name[prefix.len()..].join("."))
    } else {
        if name.len() < prefix.len() {
            return None;
        }
        if !prefix.iter().zip(&name).all(|(a, b)| a == b) {
            return None;
        }
        Some(name[prefix.len() - 1..].join("."))
    }
}

/// Pick the most specific matching import for a qualified name.
pub fn best_import<'a>(imports: &'a [Import], qualified: &str) -> Option<&'a Import> {
    imports
        .iter()
        .filter(|import| import_matches(import, qualified))
        .max_by_key(|import| (import.segments.len(), !import.wildcard))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn import(path: &str) -> Import {
        Import::parse(path).unwrap()
    }

    #[test]
    fn test_wildcard_strips_namespace() {
        let i = import("A.B.*");
        assert_eq!(relative_name(&i, "A.B.Foo").as_deref(), Some("Foo"));
        assert_eq!(relative_name(&i, "A.B.C.Foo").as_deref(), Some("C.Foo"));
        assert_eq!(relative_name(&i, "A.C.Foo"), None);
        assert_eq!(relative_name(&i, "A.B"), None);
    }

    #[test]
    fn test_plain_import_keeps_last_segment() {
        let i = import("A.B.Foo");
        assert_eq!(relative_name(&i, "A.B.Foo").as_deref(), Some("Foo"));
        assert_eq!(relative_name(&i, "A.B.Foo.S1").as_deref(), Some("Foo.S1"));
        assert_eq!(relative_name(&i, "A.B.Bar"), None);
    }

    #[test]
    fn test_specific_import_beats_wildcard() {
        let imports = vec![import("A.B.*"), import("A.B.Foo")];
        let best = best_import(&imports, "A.B.Foo").unwrap();
        assert!(!best.wildcard);
        assert_eq!(best.namespace(), "A.B.Foo");
    }

    #[test]
    fn test_longer_prefix_wins() {
        let imports = vec![import("A.*"), import("A.B.*")];
        let best = best_import(&imports, "A.B.Foo").unwrap();
        assert_eq!(best.namespace(), "A.B");
    }

    #[test]
    fn test_no_match_no_import() {
        let imports = vec![import("X.*")];
        assert!(best_import(&imports, "A.B.Foo").is_none());
    }
}
