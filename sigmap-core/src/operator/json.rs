use serde_json::Value;
use tracing::trace;

use super::Operator;
use crate::{MappingError, Payload};

/// Parses the response body as a JSON value.
///
/// Rejects with [`MappingError::JsonMapping`]. When the parser reported an
/// error it is carried as the failure's source; a failure without a source
/// means the value was not a response at all.
///
/// By default an empty body is a parse error. [`MapJson::allowing_empty`]
/// maps it to [`Value::Null`] instead.
#[derive(Debug, Clone, Copy, Default)]
pub struct MapJson {
    allow_empty: bool,
}

impl MapJson {
    pub fn new() -> Self {
        Self::default()
    }

    /// Maps an empty body to `null` instead of failing.
    pub fn allowing_empty() -> Self {
        Self { allow_empty: true }
    }
}

impl Operator for MapJson {
    type Output = Value;

    fn apply(&self, payload: Payload) -> Result<Value, MappingError> {
        let Some(response) = payload.as_response() else {
            return Err(MappingError::JsonMapping {
                context: payload,
                source: None,
            });
        };

        if self.allow_empty && response.body().is_empty() {
            return Ok(Value::Null);
        }

        serde_json::from_slice(response.body()).map_err(|error| {
            trace!(%error, "JSON parsing failed");
            MappingError::JsonMapping {
                context: payload,
                source: Some(error),
            }
        })
    }
}
