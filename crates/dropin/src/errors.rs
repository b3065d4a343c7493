//! Errors and error specific types

/// Custom Result
/// A custom datatype that wraps the error variant <E> into a report, allowing
/// error_stack::Report<E> specific extendability
///
/// Effectively, equivalent to `Result<T, error_stack::Report<E>>`
///
pub type CustomResult<T, E> = error_stack::Result<T, E>;

/// Errors raised while flattening or reading a parcel.
#[derive(Debug, thiserror::Error)]
pub enum ParcelError {
    #[error("Parcel ended while {expected} more bytes were expected")]
    UnexpectedEof { expected: usize },
    #[error("Invalid length prefix: {0}")]
    InvalidLength(i32),
    #[error("Invalid presence marker: {0}")]
    InvalidMarker(i32),
    #[error("String payload is not valid UTF-8")]
    InvalidUtf8,
    #[error("Missing required field: {field_name}")]
    MissingField { field_name: &'static str },
    #[error("No payment method type has ordinal {0}")]
    UnknownOrdinal(i32),
    #[error("Unknown parcelable tag: {0}")]
    UnknownTag(String),
    #[error("{0} bytes left over after decoding")]
    TrailingBytes(usize),
    #[error("Value of {0} bytes does not fit in a parcel")]
    TooLarge(usize),
}

/// Errors raised by a [`crate::KeyValueStore`].
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Failed to read preferences")]
    ReadFailed,
    #[error("Failed to write preferences")]
    WriteFailed,
    #[error("Failed to parse stored preferences")]
    DeserializationFailed,
    #[error("Failed to serialize preferences")]
    SerializationFailed,
    #[error("Preferences lock was poisoned")]
    LockPoisoned,
}
