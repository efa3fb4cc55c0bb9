//! Term-parser registry, dispatch, and the query compilation entry point.

use crate::base;
use crate::eval::{EvaluationResult, FileResult, QueryContext};
use crate::exists;
use crate::expr::QueryExpr;
use crate::glob;
use crate::name;
use hashbrown::HashMap;
use once_cell::sync::Lazy;
use parking_lot::RwLock;
use serde_json::Value;
use std::fmt;
use tracing::debug;

/// Malformed term shape. The only error this crate produces; raised during
/// query compilation and never during evaluation. The message always names
/// the expected shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    message: String,
}

impl ParseError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to parse query: {}", self.message)
    }
}

impl std::error::Error for ParseError {}

/// Parses one term into an expression node. Implementations recurse into
/// [`parse_term`] for any sub-term they do not handle themselves.
pub type TermParser = fn(&Value) -> Result<QueryExpr, ParseError>;

static REGISTRY: Lazy<RwLock<HashMap<String, TermParser>>> = Lazy::new(|| {
    let builtins: &[(&str, TermParser)] = &[
        ("not", base::parse_not),
        ("true", base::parse_true),
        ("false", base::parse_false),
        ("allof", base::parse_allof),
        ("anyof", base::parse_anyof),
        ("name", name::parse_name),
        ("iname", name::parse_iname),
        ("match", glob::parse_match),
        ("imatch", glob::parse_imatch),
        ("exists", exists::parse_exists),
    ];
    let mut parsers = HashMap::with_capacity(builtins.len());
    for (name, parser) in builtins {
        parsers.insert((*name).to_string(), *parser);
    }
    RwLock::new(parsers)
});

/// Associates `name` with a parser, process-wide.
///
/// Expected to run during service startup, before any query is compiled;
/// once queries start flowing the registry is only read. Returns the parser
/// it replaced when the name was already taken (last registration wins).
pub fn register_term_parser(name: &str, parser: TermParser) -> Option<TermParser> {
    debug!(term = name, "registering query term parser");
    REGISTRY.write().insert(name.to_string(), parser)
}

/// Dispatches one term to its registered parser.
///
/// A term is either a bare string naming a nullary operator or an array whose
/// first element is the operator name; everything past the name belongs to
/// that operator's parser.
pub fn parse_term(term: &Value) -> Result<QueryExpr, ParseError> {
    let name = term_name(term)?;
    let parser = REGISTRY
        .read()
        .get(name)
        .copied()
        .ok_or_else(|| ParseError::new(format!("unknown expression term '{name}'")))?;
    parser(term)
}

fn term_name(term: &Value) -> Result<&str, ParseError> {
    if let Some(name) = term.as_str() {
        return Ok(name);
    }
    match term.as_array().and_then(|items| items.first()) {
        Some(first) => first
            .as_str()
            .ok_or_else(|| ParseError::new("expected array to have a string as first element")),
        None => Err(ParseError::new(
            "expected a string or an array with a string as first element",
        )),
    }
}

/// A compiled query: the exclusively owned expression tree for one
/// user-supplied query, evaluated once per candidate file.
#[derive(Debug)]
pub struct Query {
    root: QueryExpr,
}

impl Query {
    pub fn root(&self) -> &QueryExpr {
        &self.root
    }

    pub fn evaluate(&self, ctx: &mut QueryContext, file: &dyn FileResult) -> EvaluationResult {
        self.root.evaluate(ctx, file)
    }
}

/// Compiles a structured query term into an expression tree.
///
/// Fails outright on the first malformed sub-term; no partially constructed
/// tree is ever handed back.
pub fn parse_query(term: &Value) -> Result<Query, ParseError> {
    let root = parse_term(term)?;
    debug!(term = %term, "compiled query expression");
    Ok(Query { root })
}
