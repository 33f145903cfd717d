//! Error types for encoding, decoding and importing share strings.

use serde::Serialize;
use thiserror::Error;

/// Coarse error categories, used to pick the message shown to users.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorKind {
    /// The text is not a valid share string (bad base64, corrupt stream).
    Decode,
    /// The payload decodes but holds nothing this crate can import.
    Schema,
    /// Anything else; shown verbatim.
    Other,
}

impl ErrorKind {
    /// Message for users who pasted the string, `None` when the error itself
    /// should be shown.
    pub fn user_message(self) -> Option<&'static str> {
        match self {
            ErrorKind::Decode => Some("Import string is invalid or incomplete."),
            ErrorKind::Schema => Some("Import string does not contain an importable object."),
            ErrorKind::Other => None,
        }
    }
}

/// Failures of the wire codec.
#[derive(Debug, Error)]
pub enum CodecError {
    #[error("invalid base64: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("corrupt compressed stream: {0}")]
    Inflate(#[source] std::io::Error),

    #[error("compression failed: {0}")]
    Deflate(#[source] std::io::Error),

    #[error("payload is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("malformed payload: {0}")]
    Json(#[source] serde_json::Error),

    #[error("failed to serialize {0}: {1}")]
    Serialize(&'static str, #[source] serde_json::Error),

    #[error("invalid type tag: {0}")]
    InvalidTag(String),

    #[error("unknown type: {0}")]
    UnknownType(String),

    #[error("expected {expected} but found {found}")]
    UnexpectedType {
        expected: &'static str,
        found: &'static str,
    },

    #[error("untagged object is not a {0}")]
    UnexpectedShape(&'static str),

    #[error("payload does not match {0}: {1}")]
    Shape(&'static str, #[source] serde_json::Error),

    #[error("payload holds no bar, shortcut or condition set")]
    Empty,

    #[error("{ty}.{field} is not a finite number")]
    NonFinite { ty: &'static str, field: String },
}

impl CodecError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CodecError::Base64(_) | CodecError::Inflate(_) | CodecError::Utf8(_) => {
                ErrorKind::Decode
            }
            CodecError::InvalidTag(_)
            | CodecError::UnknownType(_)
            | CodecError::UnexpectedType { .. }
            | CodecError::UnexpectedShape(_)
            | CodecError::Shape(..)
            | CodecError::Empty => ErrorKind::Schema,
            CodecError::Deflate(_)
            | CodecError::Json(_)
            | CodecError::Serialize(..)
            | CodecError::NonFinite { .. } => ErrorKind::Other,
        }
    }
}

/// Errors returned by the export/import entry points.
#[derive(Debug, Error)]
pub enum ShareError {
    #[error(transparent)]
    Codec(#[from] CodecError),

    #[error("import string does not contain a {0}")]
    MissingObject(&'static str),

    #[error(
        "condition set contains conditions that identify the player; \
         allow sensitive condition set exports to share it"
    )]
    SensitiveConditionSet,
}

impl ShareError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ShareError::Codec(e) => e.kind(),
            ShareError::MissingObject(_) => ErrorKind::Schema,
            ShareError::SensitiveConditionSet => ErrorKind::Other,
        }
    }
}

/// Result type for export/import operations.
pub type ShareResult<T> = std::result::Result<T, ShareError>;

#[cfg(test)]
mod tests {
    use super::*;
    use base64::Engine;
    use base64::engine::general_purpose::STANDARD;

    #[test]
    fn test_error_kinds() {
        let b64 = STANDARD.decode("!!!").unwrap_err();
        assert_eq!(CodecError::from(b64).kind(), ErrorKind::Decode);

        assert_eq!(
            CodecError::UnknownType("x".into()).kind(),
            ErrorKind::Schema
        );
        assert_eq!(ShareError::MissingObject("bar").kind(), ErrorKind::Schema);
        assert_eq!(CodecError::Empty.kind(), ErrorKind::Schema);
        let non_finite = CodecError::NonFinite {
            ty: "shortcut_share::model::Bar",
            field: "scale".into(),
        };
        assert_eq!(non_finite.kind(), ErrorKind::Other);
        assert_eq!(
            non_finite.to_string(),
            "shortcut_share::model::Bar.scale is not a finite number"
        );
        assert_eq!(ShareError::SensitiveConditionSet.kind(), ErrorKind::Other);

        let json = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        assert_eq!(CodecError::Json(json).kind(), ErrorKind::Other);
    }

    #[test]
    fn test_user_messages() {
        assert!(ErrorKind::Decode.user_message().unwrap().contains("invalid"));
        assert!(
            ErrorKind::Schema
                .user_message()
                .unwrap()
                .contains("importable object")
        );
        assert!(ErrorKind::Other.user_message().is_none());
    }

    #[test]
    fn test_error_kind_serialization() {
        let json = serde_json::to_string(&ErrorKind::Decode).unwrap();
        assert_eq!(json, "\"DECODE\"");
    }
}
