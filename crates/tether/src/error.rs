//! Error types for the Tether model.
//!
//! Every fallible operation returns [`Result`]. Nothing is retried and
//! nothing is swallowed; the caller decides whether to report and continue
//! or to abort.

use std::fmt;

/// Errors produced by heap, scope, arithmetic and report operations.
#[derive(Debug)]
pub enum Error {
    /// Dereference of, or store through, a nil pointer.
    NilDereference {
        /// The operation that hit the nil pointer.
        op: &'static str,
    },

    /// View bounds outside the source (`lo > hi` or `hi > len`), or a
    /// `make` whose length exceeds its capacity.
    OutOfRange {
        /// Requested lower bound.
        lo: usize,
        /// Requested upper bound.
        hi: usize,
        /// Length the bounds were checked against.
        len: usize,
    },

    /// Element access past the end of a view or array.
    IndexOutOfRange {
        /// Requested index.
        index: usize,
        /// Length of the view or array.
        len: usize,
    },

    /// A handle refers to storage this heap never allocated.
    InvalidStorage {
        /// Raw storage id carried by the handle.
        id: u32,
    },

    /// A name was resolved that no enclosing block declares.
    UndefinedName {
        /// The unresolved name.
        name: String,
    },

    /// Integer division with a zero divisor.
    DivisionByZero,

    /// Writing the report failed.
    Io(std::io::Error),

    /// Encoding the report failed.
    Json(serde_json::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::NilDereference { op } => {
                write!(
                    f,
                    "invalid memory address or nil pointer dereference ({op})"
                )
            }
            Error::OutOfRange { lo, hi, len } => {
                write!(f, "slice bounds out of range [{lo}:{hi}] with length {len}")
            }
            Error::IndexOutOfRange { index, len } => {
                write!(f, "index out of range [{index}] with length {len}")
            }
            Error::InvalidStorage { id } => {
                write!(f, "handle refers to unknown storage #{id}")
            }
            Error::UndefinedName { name } => write!(f, "undefined: {name}"),
            Error::DivisionByZero => write!(f, "can not divide by 0"),
            Error::Io(err) => write!(f, "{err}"),
            Error::Json(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            Error::Json(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Json(err)
    }
}

/// Result type for Tether operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(Error::DivisionByZero.to_string(), "can not divide by 0");
        assert_eq!(
            Error::OutOfRange { lo: 2, hi: 1, len: 3 }.to_string(),
            "slice bounds out of range [2:1] with length 3"
        );
        assert_eq!(
            Error::IndexOutOfRange { index: 4, len: 4 }.to_string(),
            "index out of range [4] with length 4"
        );
        assert_eq!(
            Error::NilDereference { op: "deref" }.to_string(),
            "invalid memory address or nil pointer dereference (deref)"
        );
        assert_eq!(
            Error::UndefinedName { name: "myNum2".into() }.to_string(),
            "undefined: myNum2"
        );
    }

    #[test]
    fn test_io_error_is_propagated_unchanged() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: Error = io.into();

        match &err {
            Error::Io(inner) => {
                assert_eq!(inner.kind(), std::io::ErrorKind::PermissionDenied);
            }
            other => panic!("expected Io, got {other:?}"),
        }
        assert_eq!(err.to_string(), "denied");
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_model_errors_have_no_source() {
        assert!(std::error::Error::source(&Error::DivisionByZero).is_none());
    }
}
