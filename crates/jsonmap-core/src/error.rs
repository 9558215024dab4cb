mod adhoc;
mod decode;
mod encode;
mod expression_evaluation_failed;
mod invalid_schema;
mod type_conversion;
mod unsupported_expression;
mod unsupported_path;

use adhoc::AdhocError;
use decode::DecodeError;
use encode::EncodeError;
use expression_evaluation_failed::ExpressionEvaluationFailed;
use invalid_schema::InvalidSchema;
use std::sync::Arc;
use type_conversion::TypeConversionError;
use unsupported_expression::UnsupportedExpression;
use unsupported_path::UnsupportedPath;

/// Returns early with an ad-hoc error built from a format string.
#[macro_export]
macro_rules! bail {
    ($($arg:tt)*) => {
        return Err($crate::Error::from_args(format_args!($($arg)*)))
    };
}

/// Builds an ad-hoc error from a format string.
#[macro_export]
macro_rules! err {
    ($($arg:tt)*) => {
        $crate::Error::from_args(format_args!($($arg)*))
    };
}

/// An error raised while configuring, translating, encoding or decoding
/// JSON-mapped values.
#[derive(Clone)]
pub struct Error {
    inner: Option<Arc<ErrorInner>>,
}

#[derive(Debug)]
struct ErrorInner {
    kind: ErrorKind,
    cause: Option<Error>,
}

impl Error {
    /// Adds context to this error.
    ///
    /// Context is displayed in reverse order: the most recently added context is shown first,
    /// followed by earlier context, ending with the root cause.
    #[inline(always)]
    pub fn context(self, consequent: impl IntoError) -> Error {
        self.context_impl(consequent.into_error())
    }

    #[inline(never)]
    #[cold]
    fn context_impl(self, consequent: Error) -> Error {
        let kind = match consequent.inner {
            Some(inner) => match Arc::try_unwrap(inner) {
                Ok(inner) => inner.kind,
                // Shared consequents keep their message but lose identity.
                Err(shared) => ErrorKind::Adhoc(AdhocError::new(shared.kind.to_string())),
            },
            None => ErrorKind::Unknown,
        };

        Error {
            inner: Some(Arc::new(ErrorInner {
                kind,
                cause: Some(self),
            })),
        }
    }

    /// Returns the innermost error of the context chain.
    pub fn root(&self) -> &Error {
        let mut root = self;
        for err in self.chain() {
            root = err;
        }
        root
    }

    fn chain(&self) -> impl Iterator<Item = &Error> {
        let mut err = self;
        core::iter::once(err).chain(core::iter::from_fn(move || {
            err = err.inner.as_ref().and_then(|inner| inner.cause.as_ref())?;
            Some(err)
        }))
    }

    fn kind(&self) -> &ErrorKind {
        self.inner
            .as_ref()
            .map(|inner| &inner.kind)
            .unwrap_or(&ErrorKind::Unknown)
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self.kind() {
            ErrorKind::Anyhow(err) => Some(err.as_ref()),
            ErrorKind::Decode(err) => Some(err),
            ErrorKind::Encode(err) => Some(err),
            _ => None,
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        let mut it = self.chain().peekable();
        while let Some(err) = it.next() {
            core::fmt::Display::fmt(err.kind(), f)?;
            if it.peek().is_some() {
                f.write_str(": ")?;
            }
        }
        Ok(())
    }
}

impl core::fmt::Debug for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        if !f.alternate() {
            core::fmt::Display::fmt(self, f)
        } else {
            let Some(ref inner) = self.inner else {
                return f.debug_struct("Error").field("kind", &"None").finish();
            };
            f.debug_struct("Error")
                .field("kind", &inner.kind)
                .field("cause", &inner.cause)
                .finish()
        }
    }
}

#[derive(Debug)]
enum ErrorKind {
    Anyhow(anyhow::Error),
    Adhoc(AdhocError),
    Decode(DecodeError),
    Encode(EncodeError),
    ExpressionEvaluationFailed(ExpressionEvaluationFailed),
    InvalidSchema(InvalidSchema),
    TypeConversion(TypeConversionError),
    UnsupportedExpression(UnsupportedExpression),
    UnsupportedPath(UnsupportedPath),
    Unknown,
}

impl core::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        use self::ErrorKind::*;

        match self {
            Anyhow(err) => core::fmt::Display::fmt(err, f),
            Adhoc(err) => core::fmt::Display::fmt(err, f),
            Decode(err) => core::fmt::Display::fmt(err, f),
            Encode(err) => core::fmt::Display::fmt(err, f),
            ExpressionEvaluationFailed(err) => core::fmt::Display::fmt(err, f),
            InvalidSchema(err) => core::fmt::Display::fmt(err, f),
            TypeConversion(err) => core::fmt::Display::fmt(err, f),
            UnsupportedExpression(err) => core::fmt::Display::fmt(err, f),
            UnsupportedPath(err) => core::fmt::Display::fmt(err, f),
            Unknown => f.write_str("unknown jsonmap error"),
        }
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Error {
        Error {
            inner: Some(Arc::new(ErrorInner { kind, cause: None })),
        }
    }
}

impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Error {
        Error::from(ErrorKind::Anyhow(err))
    }
}

impl From<std::num::TryFromIntError> for Error {
    fn from(err: std::num::TryFromIntError) -> Error {
        Error::from(anyhow::Error::from(err))
    }
}

/// Trait for types that can be converted into an Error.
pub trait IntoError {
    /// Converts this type into an Error.
    fn into_error(self) -> Error;
}

impl IntoError for Error {
    #[inline(always)]
    fn into_error(self) -> Error {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_size() {
        // Ensure Error stays at one word (size of pointer/Arc)
        let expected_size = core::mem::size_of::<usize>();
        assert_eq!(expected_size, core::mem::size_of::<Error>());
    }

    #[test]
    fn error_from_args() {
        let err = Error::from_args(format_args!("test error: {}", 42));
        assert_eq!(err.to_string(), "test error: 42");
    }

    #[test]
    fn error_chain_display() {
        let root = Error::from_args(format_args!("root cause"));
        let mid = Error::from_args(format_args!("middle context"));
        let top = Error::from_args(format_args!("top context"));

        let chained = root.context(mid).context(top);
        assert_eq!(
            chained.to_string(),
            "top context: middle context: root cause"
        );
    }

    #[test]
    fn context_keeps_root_kind() {
        let err = Error::decode("expected value at line 1 column 1")
            .context(crate::err!("reading column `profile`"));

        assert!(!err.is_decode());
        assert!(err.root().is_decode());
        assert_eq!(
            err.to_string(),
            "reading column `profile`: failed to decode JSON: expected value at line 1 column 1"
        );
    }

    #[test]
    fn anyhow_bridge() {
        let anyhow_err = anyhow::anyhow!("something failed");
        let our_err: Error = anyhow_err.into();
        assert_eq!(our_err.to_string(), "something failed");
    }

    #[test]
    fn decode_error() {
        let err = Error::decode("EOF while parsing an object");
        assert!(err.is_decode());
        assert_eq!(
            err.to_string(),
            "failed to decode JSON: EOF while parsing an object"
        );
    }

    #[test]
    fn encode_error() {
        let err = Error::encode("value is `Address`, declared `Profile`");
        assert!(err.is_encode());
        assert_eq!(
            err.to_string(),
            "failed to encode JSON: value is `Address`, declared `Profile`"
        );
    }

    #[test]
    fn unsupported_path_error() {
        let err = Error::unsupported_path("`len` is not a property");
        assert!(err.is_unsupported_path());
        assert_eq!(
            err.to_string(),
            "unsupported JSON path: `len` is not a property"
        );
    }

    #[test]
    fn unsupported_expression_error() {
        let err = Error::unsupported_expression("index expressions");
        assert!(err.is_unsupported_expression());
        assert_eq!(
            err.to_string(),
            "unsupported expression: index expressions"
        );
    }

    #[test]
    fn invalid_schema_error() {
        let err = Error::invalid_schema("model `User` is not registered");
        assert!(err.is_invalid_schema());
        assert_eq!(
            err.to_string(),
            "invalid schema: model `User` is not registered"
        );
    }

    #[test]
    fn type_conversion_error() {
        let value = crate::stmt::Value::I64(42);
        let err = Error::type_conversion(value, "String");
        assert!(err.is_type_conversion());
        assert_eq!(err.to_string(), "cannot convert I64 to String");
    }

    #[test]
    fn expression_evaluation_failed_error() {
        let err = Error::expression_evaluation_failed("expression references the query argument");
        assert!(err.is_expression_evaluation_failed());
        assert_eq!(
            err.to_string(),
            "expression evaluation failed: expression references the query argument"
        );
    }
}
