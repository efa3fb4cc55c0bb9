//! The three-valued evaluation model and the contracts evaluation runs
//! against: a caller-owned per-pass context and the file record trait.

/// Outcome of evaluating an expression node against one file record.
///
/// `Indeterminate` means the node could not reach a verdict without file data
/// that was deliberately not loaded yet. The caller can load the missing data
/// and evaluate again; the tree itself never triggers a fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvaluationResult {
    Match,
    NoMatch,
    Indeterminate,
}

impl EvaluationResult {
    /// Logical negation. An undecided value stays undecided.
    pub fn invert(self) -> Self {
        match self {
            EvaluationResult::Match => EvaluationResult::NoMatch,
            EvaluationResult::NoMatch => EvaluationResult::Match,
            EvaluationResult::Indeterminate => EvaluationResult::Indeterminate,
        }
    }

    pub fn is_decided(self) -> bool {
        !matches!(self, EvaluationResult::Indeterminate)
    }

    /// `None` when the result is [`EvaluationResult::Indeterminate`].
    pub fn as_bool(self) -> Option<bool> {
        match self {
            EvaluationResult::Match => Some(true),
            EvaluationResult::NoMatch => Some(false),
            EvaluationResult::Indeterminate => None,
        }
    }
}

impl From<bool> for EvaluationResult {
    fn from(value: bool) -> Self {
        if value { Self::Match } else { Self::NoMatch }
    }
}

impl From<Option<bool>> for EvaluationResult {
    fn from(value: Option<bool>) -> Self {
        value.map_or(Self::Indeterminate, Self::from)
    }
}

/// One candidate file record, as the watching service sees it.
///
/// Names are always available; everything else may be loaded lazily, with
/// `None` meaning "not loaded yet". The evaluator only reads through this
/// trait and never keeps the reference past a single evaluate call.
pub trait FileResult {
    /// Path of the file relative to the watched root, `/`-separated.
    fn whole_name(&self) -> &str;

    /// Final path component of [`FileResult::whole_name`].
    fn base_name(&self) -> &str {
        self.whole_name().rsplit('/').next().unwrap_or_default()
    }

    /// Whether the file currently exists. `None` defers any term that needs
    /// the answer.
    fn exists(&self) -> Option<bool>;
}

/// Caller-owned state for one evaluation pass over one file.
///
/// Each concurrently evaluating worker gets its own context; the compiled
/// expression tree itself stays read-only and can be shared freely.
#[derive(Debug, Default)]
pub struct QueryContext {
    deferred: usize,
}

impl QueryContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// How many leaf evaluations returned `Indeterminate` because their file
    /// data was not loaded. Lets the caller decide whether a fetch plus
    /// re-evaluation is worth it.
    pub fn deferred(&self) -> usize {
        self.deferred
    }

    /// Clears the deferral count so the context can be reused for the next
    /// file.
    pub fn reset(&mut self) {
        self.deferred = 0;
    }

    pub(crate) fn note_deferred(&mut self) {
        self.deferred += 1;
    }
}
