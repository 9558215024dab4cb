use super::Error;

/// Error when a stored JSON document cannot be turned back into its declared
/// type.
///
/// This occurs when:
/// - The stored text is not valid JSON
/// - The document is valid JSON but does not match the declared shape
/// - The raw column value is neither text nor a native JSON value
///
/// Decode errors are never swallowed. The row materialization that triggered
/// the decode fails with this error as its root cause.
#[derive(Debug)]
pub(super) struct DecodeError {
    message: Box<str>,
}

impl std::error::Error for DecodeError {}

impl core::fmt::Display for DecodeError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "failed to decode JSON: {}", self.message)
    }
}

impl Error {
    /// Creates a decode error.
    pub fn decode(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::Decode(DecodeError {
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error is a decode error.
    pub fn is_decode(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::Decode(_))
    }
}
