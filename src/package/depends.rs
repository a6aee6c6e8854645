//! Scanner for the value of a `Depends:` field.
//!
//! Entries are separated by `,` (all required) or `|` (alternatives). Both
//! are treated the same: every named package becomes a dependency. Version
//! constraints in parentheses are dropped.

const SEPARATORS: [char; 3] = [' ', ',', '|'];

/// Extract the package names from a `Depends:` value.
///
/// `libc6 (>= 2.17), libssl1.1 | libssl3` yields `libc6`, `libssl1.1`, `libssl3`.
pub fn parse_depends(value: &str) -> Vec<String> {
    let mut names = Vec::new();
    let mut rest = value;

    while let Some(c) = rest.chars().next() {
        if SEPARATORS.contains(&c) {
            rest = &rest[c.len_utf8()..];
        } else if c == '(' {
            // An unterminated constraint swallows the rest of the line
            rest = match rest.find(')') {
                Some(end) => &rest[end + 1..],
                None => "",
            };
        } else {
            let end = rest
                .find(|c: char| SEPARATORS.contains(&c) || c == '(')
                .unwrap_or(rest.len());
            names.push(rest[..end].to_string());
            rest = &rest[end..];
        }
    }

    names
}
