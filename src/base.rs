//! Parse functions for the basic boolean and compound operators.

use crate::expr::{AggregateOp, ListExpr, QueryExpr};
use crate::parser::{ParseError, parse_term};
use serde_json::Value;

/// Rigidly requires `["not", expr]`.
pub(crate) fn parse_not(term: &Value) -> Result<QueryExpr, ParseError> {
    let operand = match term.as_array().map(Vec::as_slice) {
        Some([_, operand]) => operand,
        _ => return Err(ParseError::new("must use [\"not\", expr]")),
    };
    Ok(QueryExpr::Not(Box::new(parse_term(operand)?)))
}

/// Accepts the bare `"true"` string or any array led by the name; extra
/// operands are ignored.
pub(crate) fn parse_true(_term: &Value) -> Result<QueryExpr, ParseError> {
    Ok(QueryExpr::True)
}

/// As permissive as [`parse_true`].
pub(crate) fn parse_false(_term: &Value) -> Result<QueryExpr, ParseError> {
    Ok(QueryExpr::False)
}

pub(crate) fn parse_allof(term: &Value) -> Result<QueryExpr, ParseError> {
    parse_list(term, AggregateOp::AllOf)
}

pub(crate) fn parse_anyof(term: &Value) -> Result<QueryExpr, ParseError> {
    parse_list(term, AggregateOp::AnyOf)
}

/// Parses `["allof"|"anyof", expr, expr, ...]` with at least two operands,
/// folding runs of same-kind aggregates into one wider node as operands are
/// appended.
fn parse_list(term: &Value, op: AggregateOp) -> Result<QueryExpr, ParseError> {
    let operands = match term.as_array() {
        Some(items) if items.len() >= 3 => &items[1..],
        _ => {
            return Err(ParseError::new(match op {
                AggregateOp::AllOf => "must use [\"allof\", expr...]",
                AggregateOp::AnyOf => "must use [\"anyof\", expr...]",
            }));
        }
    };

    let mut children: Vec<QueryExpr> = Vec::with_capacity(operands.len());
    for operand in operands {
        let parsed = parse_term(operand)?;
        match children.pop() {
            None => children.push(parsed),
            Some(previous) => match previous.try_aggregate(parsed, op) {
                Ok(merged) => children.push(merged),
                Err((previous, parsed)) => {
                    children.push(previous);
                    children.push(parsed);
                }
            },
        }
    }

    Ok(QueryExpr::List(ListExpr { op, children }))
}
