//! Alias path conflict reporting.
//!
//! Two nodes can produce the same alias (same title under the same prefix,
//! or the CMS handing out a duplicate). The registry finds them; this module
//! prints them.

use crate::core::UrlPath;
use crate::log;
use crate::utils::plural_s;

/// An alias claimed by several registry keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AliasConflict {
    /// The conflicting alias
    pub alias: UrlPath,
    /// All CMS ids claiming this alias, ascending
    pub keys: Vec<u64>,
}

/// Print conflicts using the standard log format.
///
/// Output format:
/// ```text
/// [warning] alias conflicts (1 alias, 2 nodes)
/// [alias] /news/hello (2 nodes)
///   - node 12
///   - node 40
/// ```
pub fn print_conflicts(level: &str, conflicts: &[AliasConflict]) {
    if conflicts.is_empty() {
        return;
    }

    let total: usize = conflicts.iter().map(|c| c.keys.len()).sum();
    log!(level; "alias conflicts ({} alias{}, {} node{})",
        conflicts.len(), if conflicts.len() == 1 { "" } else { "es" },
        total, plural_s(total));

    for conflict in conflicts {
        log!("alias"; "{} ({} node{})", conflict.alias, conflict.keys.len(), plural_s(conflict.keys.len()));
        for key in &conflict.keys {
            eprintln!("  - node {key}");
        }
    }
}

/// Format conflicts as a string (for error messages).
pub fn format_conflicts(conflicts: &[AliasConflict]) -> String {
    conflicts
        .iter()
        .map(format_single_conflict)
        .collect::<Vec<_>>()
        .join("\n")
}

fn format_single_conflict(conflict: &AliasConflict) -> String {
    let mut lines = vec![format!("{} ({})", conflict.alias, conflict.keys.len())];
    for key in &conflict.keys {
        lines.push(format!("  - node {key}"));
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_conflicts() {
        let conflicts = vec![
            AliasConflict {
                alias: UrlPath::from_alias("/foo"),
                keys: vec![1, 2],
            },
            AliasConflict {
                alias: UrlPath::from_alias("/bar"),
                keys: vec![3, 4, 5],
            },
        ];
        assert_eq!(
            format_conflicts(&conflicts),
            "/foo (2)\n  - node 1\n  - node 2\n/bar (3)\n  - node 3\n  - node 4\n  - node 5"
        );
    }

    #[test]
    fn test_format_empty() {
        assert_eq!(format_conflicts(&[]), "");
    }
}
