use thiserror::Error;


/// Errors raised by the search engine.
///
/// An unreachable goal is not an error: searches report it through
/// [`SearchOutcome::path`](crate::metrics::SearchOutcome) being `None`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PathPlannerError {
    /// Start, goal or an edited cell lies outside the grid
    #[error("cell ({row}, {col}) is outside the {rows}x{cols} grid")]
    OutOfBounds { row: usize, col: usize, rows: usize, cols: usize },

    /// Grids need at least one row and one column
    #[error("invalid grid dimensions {rows}x{cols}")]
    InvalidDimensions { rows: usize, cols: usize },

    /// Random edge costs need a non-empty range small enough that path costs fit in u32
    #[error("invalid edge cost range {min}..={max}")]
    InvalidCostRange { min: u32, max: u32 },

    /// Path reconstruction was requested for a node the search never reached
    #[error("no predecessor entry for {0}")]
    MissingPredecessor(String),

    #[error("unknown search strategy: {0}")]
    UnknownStrategy(String),
}

pub type Result<T> = std::result::Result<T, PathPlannerError>;
