//! # Boolean query expressions for file watching
//!
//! `query-expr` compiles the structured query terms a file-watching service
//! receives (JSON arrays such as `["allof", ["not", "exists"], ...]`) into an
//! expression tree, then evaluates that tree once per candidate file under a
//! three-valued logic: a term may match, not match, or be unable to decide
//! until more file data is loaded. Aggregates short-circuit, so a single
//! decisive child settles its group before any deferred data has to be
//! fetched, and runs of same-kind `allof`/`anyof` nodes are merged into one
//! wider node while the query is being compiled.
//!
//! ## Example
//! ```
//! use query_expr::{EvaluationResult, FileResult, QueryContext, parse_query};
//! use serde_json::json;
//!
//! struct Record {
//!     name: &'static str,
//!     exists: Option<bool>,
//! }
//!
//! impl FileResult for Record {
//!     fn whole_name(&self) -> &str {
//!         self.name
//!     }
//!     fn exists(&self) -> Option<bool> {
//!         self.exists
//!     }
//! }
//!
//! let query = parse_query(&json!(["allof", ["match", "*.rs"], "exists"])).unwrap();
//! let mut ctx = QueryContext::new();
//! let file = Record {
//!     name: "src/main.rs",
//!     exists: Some(true),
//! };
//! assert_eq!(query.evaluate(&mut ctx, &file), EvaluationResult::Match);
//! ```

mod base;
mod eval;
mod exists;
mod expr;
mod glob;
mod name;
mod parser;

pub use eval::*;
pub use exists::*;
pub use expr::*;
pub use glob::*;
pub use name::*;
pub use parser::*;
