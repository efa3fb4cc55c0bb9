//! The compiled expression tree: a closed sum over the node kinds, the
//! short-circuiting aggregate evaluation, and the parse-time merge of
//! adjacent same-kind aggregates.

use crate::eval::{EvaluationResult, FileResult, QueryContext};
use crate::exists::ExistsExpr;
use crate::glob::MatchExpr;
use crate::name::NameExpr;

/// Which N-ary aggregate kind a [`ListExpr`] is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AggregateOp {
    AllOf,
    AnyOf,
}

impl AggregateOp {
    /// The child result that fixes the whole group's outcome on its own.
    fn deciding(self) -> EvaluationResult {
        match self {
            AggregateOp::AllOf => EvaluationResult::NoMatch,
            AggregateOp::AnyOf => EvaluationResult::Match,
        }
    }

    /// The group result after every child produced the non-deciding value.
    fn identity(self) -> EvaluationResult {
        match self {
            AggregateOp::AllOf => EvaluationResult::Match,
            AggregateOp::AnyOf => EvaluationResult::NoMatch,
        }
    }
}

/// One node of a compiled query expression.
///
/// Parsing produces an exclusively owned, acyclic tree of these. The tree is
/// immutable after parsing and carries no evaluation-time state, so a shared
/// reference can be evaluated from any number of threads as long as each
/// caller brings its own [`QueryContext`].
#[derive(Debug)]
pub enum QueryExpr {
    True,
    False,
    Not(Box<QueryExpr>),
    List(ListExpr),
    Name(NameExpr),
    Match(MatchExpr),
    Exists(ExistsExpr),
}

impl QueryExpr {
    /// Evaluates this node against one file record.
    pub fn evaluate(&self, ctx: &mut QueryContext, file: &dyn FileResult) -> EvaluationResult {
        match self {
            QueryExpr::True => EvaluationResult::Match,
            QueryExpr::False => EvaluationResult::NoMatch,
            // An undecided child stays undecided through negation.
            QueryExpr::Not(inner) => inner.evaluate(ctx, file).invert(),
            QueryExpr::List(list) => list.evaluate(ctx, file),
            QueryExpr::Name(name) => name.evaluate(file),
            QueryExpr::Match(glob) => glob.evaluate(file),
            QueryExpr::Exists(exists) => exists.evaluate(ctx, file),
        }
    }

    /// Attempts to fold `other` into `self` as one wider aggregate under
    /// `op`. Succeeds only when both nodes are themselves aggregates of `op`;
    /// the merged node evaluates exactly like the two originals side by side.
    /// On refusal both nodes come back unchanged for the caller to re-append.
    pub(crate) fn try_aggregate(
        self,
        other: QueryExpr,
        op: AggregateOp,
    ) -> Result<QueryExpr, (QueryExpr, QueryExpr)> {
        match (self, other) {
            (QueryExpr::List(mut left), QueryExpr::List(right))
                if left.op == op && right.op == op =>
            {
                left.children.extend(right.children);
                Ok(QueryExpr::List(left))
            }
            pair => Err(pair),
        }
    }
}

/// N-ary conjunction or disjunction with short-circuit evaluation.
#[derive(Debug)]
pub struct ListExpr {
    pub op: AggregateOp,
    pub children: Vec<QueryExpr>,
}

impl ListExpr {
    fn evaluate(&self, ctx: &mut QueryContext, file: &dyn FileResult) -> EvaluationResult {
        let mut need_data = false;

        for child in &self.children {
            let res = child.evaluate(ctx, file);
            if res == EvaluationResult::Indeterminate {
                // A later child may still decide the whole group.
                need_data = true;
            } else if res == self.op.deciding() {
                // The group's outcome is fixed no matter how any deferred
                // sibling would have resolved.
                return res;
            }
        }

        if need_data {
            EvaluationResult::Indeterminate
        } else {
            self.op.identity()
        }
    }
}
