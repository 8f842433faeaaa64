use serde_json::Value;
use tracing::trace;

use super::Operator;
use crate::{MappingError, Payload};

/// Decodes the response body as UTF-8 text.
///
/// Rejects with [`MappingError::StringMapping`] when the value is not a
/// response or the body is not valid UTF-8.
#[derive(Debug, Clone, Copy, Default)]
pub struct MapString;

impl MapString {
    pub fn new() -> Self {
        Self
    }
}

impl Operator for MapString {
    type Output = String;

    fn apply(&self, payload: Payload) -> Result<String, MappingError> {
        let Some(response) = payload.as_response() else {
            return Err(MappingError::StringMapping {
                context: payload,
                source: None,
            });
        };

        match std::str::from_utf8(response.body()) {
            Ok(text) => Ok(text.to_owned()),
            Err(error) => {
                trace!(%error, "UTF-8 decoding failed");
                Err(MappingError::StringMapping {
                    context: payload,
                    source: Some(error),
                })
            }
        }
    }
}

/// Parses the body as JSON and extracts the string at a key path.
///
/// The key path is a dot-separated list of object keys, e.g.
/// `"data.user.name"`. A body that is not JSON is rejected with
/// [`MappingError::JsonMapping`]; a missing key or a value that is not a
/// string is rejected with [`MappingError::StringMapping`].
///
/// # Examples
///
/// ```
/// use sigmap_core::operator::{MapStringAtKeyPath, Operator};
/// use sigmap_core::Response;
///
/// let operator = MapStringAtKeyPath::new("user.name");
/// let body = r#"{"user": {"name": "ferris"}}"#;
/// let name = operator.apply(Response::new(200, body).into()).unwrap();
/// assert_eq!(name, "ferris");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapStringAtKeyPath {
    key_path: String,
}

impl MapStringAtKeyPath {
    pub fn new(key_path: impl Into<String>) -> Self {
        Self {
            key_path: key_path.into(),
        }
    }

    pub fn key_path(&self) -> &str {
        &self.key_path
    }

    fn lookup<'a>(&self, value: &'a Value) -> Option<&'a str> {
        self.key_path
            .split('.')
            .try_fold(value, |value, key| value.get(key))
            .and_then(Value::as_str)
    }
}

impl Operator for MapStringAtKeyPath {
    type Output = String;

    fn apply(&self, payload: Payload) -> Result<String, MappingError> {
        let Some(response) = payload.as_response() else {
            return Err(MappingError::StringMapping {
                context: payload,
                source: None,
            });
        };

        let value: Value = match serde_json::from_slice(response.body()) {
            Ok(value) => value,
            Err(error) => {
                return Err(MappingError::JsonMapping {
                    context: payload,
                    source: Some(error),
                });
            }
        };

        match self.lookup(&value) {
            Some(text) => Ok(text.to_owned()),
            None => {
                trace!(key_path = %self.key_path, "no string at key path");
                Err(MappingError::StringMapping {
                    context: payload,
                    source: None,
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error as _;

    use super::*;
    use crate::{MappingErrorKind, Response};

    #[test]
    fn test_decodes_utf8() {
        let text = MapString::new()
            .apply(Response::new(200, "hello").into())
            .unwrap();
        assert_eq!(text, "hello");
    }

    #[test]
    fn test_decodes_multibyte_and_empty() {
        let text = MapString::new()
            .apply(Response::new(200, "grüße, 世界").into())
            .unwrap();
        assert_eq!(text, "grüße, 世界");

        let text = MapString::new().apply(Response::new(204, "").into()).unwrap();
        assert_eq!(text, "");
    }

    #[test]
    fn test_rejects_invalid_utf8() {
        let error = MapString::new()
            .apply(Response::new(200, vec![0x68, 0x69, 0xc3, 0x28]).into())
            .unwrap_err();

        assert_eq!(error.kind(), MappingErrorKind::StringMapping);
        assert!(error.response().is_some());
        assert!(error.source().is_some());
    }

    #[test]
    fn test_rejects_non_response() {
        let error = MapString::new().apply(Payload::opaque("hello")).unwrap_err();

        assert_eq!(error.kind(), MappingErrorKind::StringMapping);
        assert!(error.source().is_none());
    }

    #[test]
    fn test_key_path_lookup() {
        let body = r#"{"data": {"user": {"name": "ferris", "age": 9}}}"#;
        let operator = MapStringAtKeyPath::new("data.user.name");

        let name = operator.apply(Response::new(200, body).into()).unwrap();
        assert_eq!(name, "ferris");
    }

    #[test]
    fn test_key_path_rejects_missing_or_non_string() {
        let body = r#"{"data": {"user": {"name": "ferris", "age": 9}}}"#;

        for key_path in ["data.user.email", "data.user.age", "data.user", "missing"] {
            let error = MapStringAtKeyPath::new(key_path)
                .apply(Response::new(200, body).into())
                .unwrap_err();
            assert_eq!(error.kind(), MappingErrorKind::StringMapping, "{key_path}");
        }
    }

    #[test]
    fn test_key_path_rejects_non_json_body() {
        let error = MapStringAtKeyPath::new("name")
            .apply(Response::new(200, "plain").into())
            .unwrap_err();
        assert_eq!(error.kind(), MappingErrorKind::JsonMapping);
    }
}
