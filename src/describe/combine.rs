//! List grammar.
//!
//! Three joining conventions are in use:
//! - [`combine`] joins effect clauses with an Oxford comma
//!   (`"a, b, and c"`)
//! - [`join_conjunctive`] joins immunity sources without one
//!   (`"a, b and c"`)
//! - [`join_disjunctive`] joins targeting sources without one
//!   (`"a, b or c"`)

/// Join effect clauses into one sentence.
///
/// - `[]` → `""`
/// - `[a]` → `"a"`
/// - `[a, b]` → `"a and b"`
/// - `[a, b, c]` → `"a, b, and c"`
pub fn combine<S: AsRef<str>>(parts: &[S]) -> String {
    match parts {
        [] => String::new(),
        [only] => only.as_ref().to_string(),
        [first, second] => format!("{} and {}", first.as_ref(), second.as_ref()),
        [init @ .., last] => {
            let mut text = join(init, ", ");
            text.push_str(", and ");
            text.push_str(last.as_ref());
            text
        }
    }
}

/// `"a, b and c"`.
pub fn join_conjunctive<S: AsRef<str>>(parts: &[S]) -> String {
    join_with_final(parts, " and ")
}

/// `"a, b or c"`.
pub fn join_disjunctive<S: AsRef<str>>(parts: &[S]) -> String {
    join_with_final(parts, " or ")
}

fn join_with_final<S: AsRef<str>>(parts: &[S], last_separator: &str) -> String {
    match parts {
        [] => String::new(),
        [only] => only.as_ref().to_string(),
        [init @ .., last] => {
            let mut text = join(init, ", ");
            text.push_str(last_separator);
            text.push_str(last.as_ref());
            text
        }
    }
}

fn join<S: AsRef<str>>(parts: &[S], separator: &str) -> String {
    let mut text = String::new();
    for (i, part) in parts.iter().enumerate() {
        if i > 0 {
            text.push_str(separator);
        }
        text.push_str(part.as_ref());
    }
    text
}

/// `"1 card"`, `"2 cards"`.
pub(crate) fn count_noun(count: u32, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{count} {singular}")
    } else {
        format!("{count} {plural}")
    }
}

/// Collapse runs of whitespace to one space and trim.
pub(crate) fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
