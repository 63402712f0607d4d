use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum InterlaceError {
    /// Decode ran out of input mid-field.
    #[error("truncated input at offset {offset}: need {needed} bytes, {available} available")]
    TruncatedInput {
        offset: usize,
        needed: usize,
        available: usize,
    },

    /// A length field exceeds the configured decode limit.
    #[error("{field} count {value} exceeds limit {limit}")]
    InvalidCount {
        field: &'static str,
        value: u32,
        limit: u32,
    },

    /// A parent hash does not share the first parent's epoch prefix.
    #[error("parent {index} does not share the epoch prefix")]
    ParentPrefixMismatch { index: usize },
}
