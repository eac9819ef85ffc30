use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    /// A row that cannot become a valid record. Batch policy (skip or
    /// abort) belongs to the caller.
    #[error("malformed record at line {line}: {reason}")]
    MalformedRecord { line: u64, reason: String },

    #[error("no records found for \"{0}\"")]
    GroupNotFound(String),

    #[error("no groups with graded students to rank")]
    InsufficientData,
}
