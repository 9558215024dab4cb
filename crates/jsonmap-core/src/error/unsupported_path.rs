use super::Error;

/// Signals that a predicate node is not a JSON path this crate can translate.
///
/// Path resolution runs speculatively on every predicate node, so this error
/// never reaches users: the translation hook turns it into "no result" and the
/// host's default translation takes over.
#[derive(Debug)]
pub(super) struct UnsupportedPath {
    reason: Box<str>,
}

impl std::error::Error for UnsupportedPath {}

impl core::fmt::Display for UnsupportedPath {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "unsupported JSON path: {}", self.reason)
    }
}

impl Error {
    /// Creates an unsupported path signal.
    pub fn unsupported_path(reason: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::UnsupportedPath(UnsupportedPath {
            reason: reason.into().into(),
        }))
    }

    /// Returns `true` if this error is an unsupported path signal.
    pub fn is_unsupported_path(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::UnsupportedPath(_))
    }
}
