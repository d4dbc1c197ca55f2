use thiserror::Error;

/// Failures surfaced by normalization, analysis and batching.
///
/// Row-level kinds (`UnparseableTimestamp`, `UnparseableDuration`,
/// `MissingDirection`) only ever cause a row to be dropped. Record-set kinds
/// abort the analysis of one file. Batch kinds abort the whole batch.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnalysisError {
    #[error("row {row}: could not parse call start time")]
    UnparseableTimestamp { row: usize },

    #[error("row {row}: could not parse call length")]
    UnparseableDuration { row: usize },

    #[error("row {row}: call direction is missing")]
    MissingDirection { row: usize },

    #[error("No valid calls found. Please check your data format.")]
    NoValidCalls,

    #[error("No outbound calls found in the data.")]
    NoOutboundCalls,

    #[error("Too many files: {count} supplied, at most {max} can be analyzed at once")]
    TooManyFiles { count: usize, max: usize },

    #[error("None of the {attempted} files contained analyzable call data")]
    NoValidFiles { attempted: usize },
}

pub type AnalysisResult<T> = std::result::Result<T, AnalysisError>;
