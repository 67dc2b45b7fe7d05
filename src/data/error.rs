use thiserror::Error;

/// Fatal problems found while turning a source file into a [`Dataset`].
///
/// Loader functions return `anyhow::Result` and attach file/row context on
/// top of these, so callers that care about the kind can `downcast_ref`.
/// Row numbers count data rows from 1; the CSV header is not a row.
///
/// [`Dataset`]: super::model::Dataset
#[derive(Debug, Error, PartialEq)]
pub enum DatasetError {
    #[error("Unsupported file extension: .{0}")]
    UnsupportedFormat(String),

    #[error("missing required column '{0}'")]
    MissingColumn(&'static str),

    #[error("row {row}: watchtime '{value}' is not a number")]
    InvalidWatchtime { row: usize, value: String },

    #[error("row {0} is not a JSON object")]
    NotAnObject(usize),

    #[error("expected a top-level JSON array of records")]
    NotAnArray,
}
