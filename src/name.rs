//! Exact name membership (`name` / `iname`).

use crate::eval::{EvaluationResult, FileResult};
use crate::expr::QueryExpr;
use crate::parser::ParseError;
use hashbrown::HashSet;
use serde_json::Value;

/// Which view of the file's path a name-based term compares against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameScope {
    BaseName,
    WholeName,
}

impl NameScope {
    pub(crate) fn parse(value: &Value) -> Option<Self> {
        match value.as_str() {
            Some("basename") => Some(NameScope::BaseName),
            Some("wholename") => Some(NameScope::WholeName),
            _ => None,
        }
    }

    pub(crate) fn of<'a>(self, file: &'a dyn FileResult) -> &'a str {
        match self {
            NameScope::BaseName => file.base_name(),
            NameScope::WholeName => file.whole_name(),
        }
    }
}

/// Matches when the file's name is one of a fixed set of names. `iname`
/// folds case at parse time so evaluation stays a plain set lookup.
#[derive(Debug)]
pub struct NameExpr {
    names: HashSet<String>,
    case_sensitive: bool,
    scope: NameScope,
}

pub(crate) fn parse_name(term: &Value) -> Result<QueryExpr, ParseError> {
    parse(term, "name", true)
}

pub(crate) fn parse_iname(term: &Value) -> Result<QueryExpr, ParseError> {
    parse(term, "iname", false)
}

fn shape_error(op: &str) -> ParseError {
    ParseError::new(format!(
        "must use [\"{op}\", \"string\" | [\"string\", ...], \"basename\" | \"wholename\"?]"
    ))
}

fn parse(term: &Value, op: &str, case_sensitive: bool) -> Result<QueryExpr, ParseError> {
    let items = term.as_array().ok_or_else(|| shape_error(op))?;
    let (names_term, scope_term) = match items.as_slice() {
        [_, names] => (names, None),
        [_, names, scope] => (names, Some(scope)),
        _ => return Err(shape_error(op)),
    };

    let mut names = HashSet::new();
    match names_term {
        Value::String(name) => {
            names.insert(fold_case(name, case_sensitive));
        }
        Value::Array(list) => {
            for entry in list {
                let name = entry.as_str().ok_or_else(|| shape_error(op))?;
                names.insert(fold_case(name, case_sensitive));
            }
        }
        _ => return Err(shape_error(op)),
    }
    if names.is_empty() {
        return Err(ParseError::new(format!(
            "\"{op}\" requires at least one name to match against"
        )));
    }

    let scope = match scope_term {
        Some(value) => NameScope::parse(value).ok_or_else(|| shape_error(op))?,
        None => NameScope::BaseName,
    };

    Ok(QueryExpr::Name(NameExpr {
        names,
        case_sensitive,
        scope,
    }))
}

fn fold_case(name: &str, case_sensitive: bool) -> String {
    if case_sensitive {
        name.to_string()
    } else {
        name.to_lowercase()
    }
}

impl NameExpr {
    pub(crate) fn evaluate(&self, file: &dyn FileResult) -> EvaluationResult {
        let candidate = self.scope.of(file);
        let matched = if self.case_sensitive {
            self.names.contains(candidate)
        } else {
            self.names.contains(&candidate.to_lowercase())
        };
        matched.into()
    }
}
