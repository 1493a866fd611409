//! Errors raised while building latency tables.

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Classification left too few stages to compute any latency.
    #[error("column size is {count} and must be at least 2")]
    Validation { count: usize },

    /// Two raw columns classified to the same stage label.
    #[error("columns {first:?} and {second:?} both map to stage {label:?}")]
    DuplicateLabel {
        label: String,
        first: String,
        second: String,
    },

    /// A latency series does not line up with the input rows.
    #[error("latency for {column:?} has {actual} rows, expected {expected}")]
    RowCountMismatch {
        column: String,
        expected: usize,
        actual: usize,
    },

    /// `end - start` does not fit in an `i64`.
    #[error("latency from {column:?} overflows at row {row}")]
    Overflow { column: String, row: usize },

    #[error("column {column:?} appears more than once")]
    DuplicateColumn { column: String },

    #[error("record set has no columns")]
    NoColumns,

    #[error("row {row} has unknown column {column:?}")]
    UnknownColumn { row: usize, column: String },

    #[error("renaming {from:?} to {to:?} collides with an existing column")]
    RenameCollision { from: String, to: String },

    #[error("invalid {field} pattern")]
    Pattern {
        field: &'static str,
        #[source]
        source: regex::Error,
    },
}
