//! Existence check (`exists`), the built-in term that can defer.

use crate::eval::{EvaluationResult, FileResult, QueryContext};
use crate::expr::QueryExpr;
use crate::parser::ParseError;
use serde_json::Value;

/// Matches when the file currently exists on disk. Existence is part of the
/// lazily loaded file data, so an unloaded record yields `Indeterminate`.
#[derive(Debug)]
pub struct ExistsExpr;

/// Accepts the bare `"exists"` string or any array led by the name, like
/// `true` / `false`.
pub(crate) fn parse_exists(_term: &Value) -> Result<QueryExpr, ParseError> {
    Ok(QueryExpr::Exists(ExistsExpr))
}

impl ExistsExpr {
    pub(crate) fn evaluate(
        &self,
        ctx: &mut QueryContext,
        file: &dyn FileResult,
    ) -> EvaluationResult {
        match file.exists() {
            Some(value) => value.into(),
            None => {
                ctx.note_deferred();
                EvaluationResult::Indeterminate
            }
        }
    }
}
