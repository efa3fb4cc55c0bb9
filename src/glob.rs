//! Wildcard name matching (`match` / `imatch`).

use crate::eval::{EvaluationResult, FileResult};
use crate::expr::QueryExpr;
use crate::name::NameScope;
use crate::parser::ParseError;
use regex::{Regex, RegexBuilder};
use serde_json::Value;

/// Matches the file's name against a wildcard pattern.
///
/// `*` and `?` stop at path separators; `**` crosses them; `[class]` passes
/// through, with a leading `!` negating the class. The pattern is translated
/// to an anchored regex once, at parse time.
#[derive(Debug)]
pub struct MatchExpr {
    pattern: String,
    regex: Regex,
    scope: NameScope,
}

pub(crate) fn parse_match(term: &Value) -> Result<QueryExpr, ParseError> {
    parse(term, "match", true)
}

pub(crate) fn parse_imatch(term: &Value) -> Result<QueryExpr, ParseError> {
    parse(term, "imatch", false)
}

fn shape_error(op: &str) -> ParseError {
    ParseError::new(format!(
        "must use [\"{op}\", \"pattern\", \"basename\" | \"wholename\"?]"
    ))
}

fn parse(term: &Value, op: &str, case_sensitive: bool) -> Result<QueryExpr, ParseError> {
    let items = term.as_array().ok_or_else(|| shape_error(op))?;
    let (pattern_term, scope_term) = match items.as_slice() {
        [_, pattern] => (pattern, None),
        [_, pattern, scope] => (pattern, Some(scope)),
        _ => return Err(shape_error(op)),
    };
    let pattern = pattern_term.as_str().ok_or_else(|| shape_error(op))?;

    let scope = match scope_term {
        Some(value) => NameScope::parse(value).ok_or_else(|| shape_error(op))?,
        None => NameScope::BaseName,
    };

    let regex = RegexBuilder::new(&wildcard_to_regex(pattern))
        .case_insensitive(!case_sensitive)
        .build()
        .map_err(|err| ParseError::new(format!("invalid match pattern {pattern:?}: {err}")))?;

    Ok(QueryExpr::Match(MatchExpr {
        pattern: pattern.to_string(),
        regex,
        scope,
    }))
}

impl MatchExpr {
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub(crate) fn evaluate(&self, file: &dyn FileResult) -> EvaluationResult {
        self.regex.is_match(self.scope.of(file)).into()
    }
}

fn wildcard_to_regex(pattern: &str) -> String {
    let mut out = String::with_capacity(pattern.len() + 8);
    out.push('^');
    let mut chars = pattern.chars().peekable();
    while let Some(ch) = chars.next() {
        match ch {
            '*' => {
                if chars.peek() == Some(&'*') {
                    chars.next();
                    if chars.peek() == Some(&'/') {
                        // `**/` spans zero or more whole directories.
                        chars.next();
                        out.push_str("(?:.*/)?");
                    } else {
                        out.push_str(".*");
                    }
                } else {
                    out.push_str("[^/]*");
                }
            }
            '?' => out.push_str("[^/]"),
            '[' => {
                // An unterminated class reaches the regex compiler as-is and
                // surfaces as a ParseError naming the pattern.
                out.push('[');
                if chars.peek() == Some(&'!') {
                    chars.next();
                    out.push('^');
                }
                for inner in chars.by_ref() {
                    out.push(inner);
                    if inner == ']' {
                        break;
                    }
                }
            }
            other => push_literal(&mut out, other),
        }
    }
    out.push('$');
    out
}

fn push_literal(out: &mut String, ch: char) {
    if matches!(
        ch,
        '.' | '^' | '$' | '+' | '(' | ')' | '{' | '}' | '|' | '\\' | ']'
    ) {
        out.push('\\');
    }
    out.push(ch);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn translates_wildcards() {
        assert_eq!(wildcard_to_regex("*.c"), "^[^/]*\\.c$");
        assert_eq!(wildcard_to_regex("ba?.c"), "^ba[^/]\\.c$");
        assert_eq!(wildcard_to_regex("**/*.c"), "^(?:.*/)?[^/]*\\.c$");
        assert_eq!(wildcard_to_regex("ba[!rz].c"), "^ba[^rz]\\.c$");
    }
}
