// ── CRUD slice ──
//
// One named partition of the catalog state: `{status, message, items}`
// for a single resource, the four operations that talk to the backend,
// and the reducer that folds their lifecycle into the state.

pub mod messages;
pub mod operations;
pub mod reducer;

use serde::Serialize;
use strum::{Display, EnumString};

use crate::error::CoreError;

pub use reducer::reduce;

// ── Status ───────────────────────────────────────────────────────────

/// Status of the most recently settled or in-flight operation.
///
/// Not per item: two overlapping operations share this one field and the
/// last one to settle wins.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Status {
    #[default]
    Idle,
    Pending,
    Error,
}

// ── SliceState ───────────────────────────────────────────────────────

/// State of one resource slice.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SliceState<R> {
    pub status: Status,
    pub message: String,
    pub items: Vec<R>,
}

impl<R> Default for SliceState<R> {
    fn default() -> Self {
        Self {
            status: Status::Idle,
            message: String::new(),
            items: Vec::new(),
        }
    }
}

// ── Operation lifecycle ──────────────────────────────────────────────

/// The four operations every slice supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[strum(serialize_all = "lowercase")]
pub enum Operation {
    Fetch,
    Add,
    Update,
    Remove,
}

/// Stage of an async operation as seen by the reducer.
#[derive(Debug, Clone, PartialEq)]
pub enum Lifecycle<T> {
    /// The request has been issued and not yet settled.
    Pending,
    /// The operation body completed and produced a payload.
    Fulfilled(T),
    /// The operation failed without producing a payload.
    Rejected(CoreError),
}

impl<T> From<Result<T, CoreError>> for Lifecycle<T> {
    fn from(result: Result<T, CoreError>) -> Self {
        match result {
            Ok(payload) => Self::Fulfilled(payload),
            Err(err) => Self::Rejected(err),
        }
    }
}

/// Settled result of fetch-all.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchPayload<R> {
    pub status: bool,
    pub items: Vec<R>,
    pub message: String,
}

/// Settled result of add, update or remove.
///
/// `record` is always the input record, never a backend echo.
#[derive(Debug, Clone, PartialEq)]
pub struct MutationPayload<R> {
    pub status: bool,
    pub message: String,
    pub record: R,
}

/// Every action a slice reducer understands.
#[derive(Debug, Clone, PartialEq)]
pub enum SliceAction<R> {
    FetchAll(Lifecycle<FetchPayload<R>>),
    Add(Lifecycle<MutationPayload<R>>),
    Update(Lifecycle<MutationPayload<R>>),
    Remove(Lifecycle<MutationPayload<R>>),
}

impl<R> SliceAction<R> {
    /// The operation this action belongs to.
    pub fn operation(&self) -> Operation {
        match self {
            Self::FetchAll(_) => Operation::Fetch,
            Self::Add(_) => Operation::Add,
            Self::Update(_) => Operation::Update,
            Self::Remove(_) => Operation::Remove,
        }
    }
}
