#![allow(dead_code)]
//! Shared fixtures for `query-expr` integration tests.

use query_expr::*;
use serde_json::{Value, json};

/// A file record with canned data.
pub struct StubFile {
    pub name: &'static str,
    pub exists: Option<bool>,
}

impl FileResult for StubFile {
    fn whole_name(&self) -> &str {
        self.name
    }

    fn exists(&self) -> Option<bool> {
        self.exists
    }
}

/// A record whose data is fully loaded.
pub fn file(name: &'static str) -> StubFile {
    StubFile {
        name,
        exists: Some(true),
    }
}

/// A record whose lazily loaded data is not available yet, so `exists`
/// evaluates to Indeterminate against it.
pub fn unloaded_file(name: &'static str) -> StubFile {
    StubFile { name, exists: None }
}

pub fn parse_ok(term: Value) -> Query {
    match parse_query(&term) {
        Ok(query) => query,
        Err(err) => panic!("failed to parse {term}: {err}"),
    }
}

pub fn parse_err(term: Value) -> ParseError {
    match parse_query(&term) {
        Ok(query) => panic!("expected {term} to fail, got {query:?}"),
        Err(err) => err,
    }
}

pub fn eval(query: &Query, file: &StubFile) -> EvaluationResult {
    let mut ctx = QueryContext::new();
    query.evaluate(&mut ctx, file)
}

pub fn eval_term(term: Value, file: &StubFile) -> EvaluationResult {
    eval(&parse_ok(term), file)
}

pub const ALL_RESULTS: [EvaluationResult; 3] = [
    EvaluationResult::Match,
    EvaluationResult::NoMatch,
    EvaluationResult::Indeterminate,
];

/// A sub-term with a fixed outcome when evaluated against [`unloaded_file`]:
/// `true` and `false` decide unconditionally and `exists` defers.
pub fn term_for(result: EvaluationResult) -> Value {
    match result {
        EvaluationResult::Match => json!("true"),
        EvaluationResult::NoMatch => json!("false"),
        EvaluationResult::Indeterminate => json!("exists"),
    }
}

/// Reference fold for `allof` per the evaluation contract.
pub fn fold_allof(results: &[EvaluationResult]) -> EvaluationResult {
    if results.contains(&EvaluationResult::NoMatch) {
        EvaluationResult::NoMatch
    } else if results.contains(&EvaluationResult::Indeterminate) {
        EvaluationResult::Indeterminate
    } else {
        EvaluationResult::Match
    }
}

/// Reference fold for `anyof`, the dual of [`fold_allof`].
pub fn fold_anyof(results: &[EvaluationResult]) -> EvaluationResult {
    if results.contains(&EvaluationResult::Match) {
        EvaluationResult::Match
    } else if results.contains(&EvaluationResult::Indeterminate) {
        EvaluationResult::Indeterminate
    } else {
        EvaluationResult::NoMatch
    }
}

pub fn as_list(expr: &QueryExpr) -> &ListExpr {
    match expr {
        QueryExpr::List(list) => list,
        other => panic!("expected List, got: {other:?}"),
    }
}
