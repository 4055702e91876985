use std::sync::OnceLock;

use regex::{Captures, Regex};
use tracing::debug;

/// Merged lines longer than this are left split.
const MERGED_LINE_BUDGET: usize = 120;

/// Parenthesized groups whose joined interior reaches this length stay
/// multi-line.
const PAREN_GROUP_BUDGET: usize = 100;

/// A line consisting of exactly one of these keywords is merged with its
/// first argument, unless the next line starts another clause.
const JOINABLE_KEYWORDS: &[&str] = &[
    "SELECT", "FROM", "WHERE", "GROUP BY", "ORDER BY", "HAVING", "LIMIT", "OFFSET", "WITH", "AS",
];

/// Compacts already-pretty-printed SQL by merging short logical fragments
/// back onto single lines.
///
/// The input is expected to come out of a structural SQL formatter (one
/// clause fragment per line); this pass only reduces vertical sprawl. It
/// performs no grammar validation and is safe on arbitrary text: when no
/// merge rule applies, the input passes through unchanged.
///
/// # Example
///
/// ```rust
/// assert_eq!(refmt::sql::compact("SELECT\nid, name"), "SELECT id, name");
/// ```
pub fn compact(formatted_sql: &str) -> String {
    debug!(bytes = formatted_sql.len(), "compacting SQL");

    let mut lines: Vec<String> = formatted_sql.split('\n').map(str::to_string).collect();
    let mut result: Vec<String> = Vec::new();

    // Single forward pass with one line of lookahead. A merge rewrites the
    // next line in place, so later rules see the merged result.
    let mut i = 0;
    while i < lines.len() {
        let line = lines[i].trim_end().to_string();
        let next = lines
            .get(i + 1)
            .map(|l| l.trim().to_string())
            .unwrap_or_default();

        if let Some(merged) = try_merge(&line, &next) {
            lines[i + 1] = merged;
            i += 1;
            continue;
        }

        result.push(line);
        i += 1;
    }

    compact_parentheses(&result.join("\n"))
}

// Rules are tried in order; the first whose merged line fits wins.
fn try_merge(line: &str, next: &str) -> Option<String> {
    let next_is_comment = next.starts_with("--");

    // Comma-terminated list continuation.
    if line.ends_with(',') && !next.is_empty() && !next_is_comment {
        let prospective = format!("{} {}", line, next);
        if prospective.trim().len() < MERGED_LINE_BUDGET {
            return Some(prospective);
        }
    }

    // A keyword alone on its line takes its first argument, unless the next
    // line opens another clause.
    let next_upper = next.to_uppercase();
    if JOINABLE_KEYWORDS.contains(&line.trim().to_uppercase().as_str())
        && !next.is_empty()
        && !next_is_comment
        && !JOINABLE_KEYWORDS.iter().any(|kw| next_upper.starts_with(kw))
    {
        let prospective = format!("{} {}", line, next);
        if prospective.trim().len() < MERGED_LINE_BUDGET {
            return Some(prospective);
        }
    }

    // JOIN clauses absorb their ON condition and chained ANDs.
    let upper = line.to_uppercase();
    if (upper.contains("JOIN") || upper.starts_with("AND ") || upper.starts_with("ON "))
        && (next_upper.starts_with("ON ") || next_upper.starts_with("AND "))
    {
        let prospective = format!("{} {}", line, next);
        if prospective.trim().len() < MERGED_LINE_BUDGET {
            return Some(prospective);
        }
    }

    None
}

// Collapses parenthesized groups whose interior is short enough onto one
// line; longer groups are left untouched.
fn compact_parentheses(sql: &str) -> String {
    let opened = open_break_re().replace_all(sql, "(");
    let closed = close_break_re().replace_all(&opened, ")");

    paren_group_re()
        .replace_all(&closed, |caps: &Captures<'_>| {
            let joined = line_break_re().replace_all(&caps[1], " ").into_owned();
            if joined.len() < PAREN_GROUP_BUDGET {
                format!("({})", joined)
            } else {
                caps[0].to_string()
            }
        })
        .into_owned()
}

fn open_break_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\(\s*\n\s*").expect("valid pattern"))
}

fn close_break_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\s*\n\s*\)").expect("valid pattern"))
}

fn paren_group_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\(\s*([^)]+?)\s*\)").expect("valid pattern"))
}

fn line_break_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\s*\n\s*").expect("valid pattern"))
}
