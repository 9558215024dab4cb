use super::Error;

/// Error when a value cannot be encoded as JSON for its declared type.
#[derive(Debug)]
pub(super) struct EncodeError {
    message: Box<str>,
}

impl std::error::Error for EncodeError {}

impl core::fmt::Display for EncodeError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "failed to encode JSON: {}", self.message)
    }
}

impl Error {
    /// Creates an encode error.
    ///
    /// Raised when the runtime value is not an instance of the declared type
    /// or when the serializer itself fails.
    pub fn encode(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::Encode(EncodeError {
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error is an encode error.
    pub fn is_encode(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::Encode(_))
    }
}
