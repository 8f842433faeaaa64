//! Mapping failures.

use std::fmt;
use std::str::Utf8Error;

use thiserror::Error;

use crate::{Payload, Response, StatusRange};

/// Why a mapping operator rejected an element.
///
/// Every variant owns the upstream value it was handed (`context`), so the
/// consumer that observes the failure can inspect the offending response.
/// When a decoder reported its own error, it is kept as the
/// [`source`](std::error::Error::source).
#[derive(Debug, Error)]
pub enum MappingError {
    /// The body could not be decoded as an image.
    #[error("failed to map response body to an image")]
    ImageMapping {
        context: Payload,
        #[source]
        source: Option<image::ImageError>,
    },

    /// The body could not be parsed as JSON.
    #[error("failed to map response body to JSON")]
    JsonMapping {
        context: Payload,
        #[source]
        source: Option<serde_json::Error>,
    },

    /// The body (or the value at a key path) is not a UTF-8 string.
    #[error("failed to map response body to a string")]
    StringMapping {
        context: Payload,
        #[source]
        source: Option<Utf8Error>,
    },

    /// The body could not be deserialized into the requested type.
    #[error("failed to map response body to {target}")]
    ObjectMapping {
        target: &'static str,
        context: Payload,
        #[source]
        source: serde_json::Error,
    },

    /// The status code lies outside the accepted range.
    #[error("status code {status} is outside of {range}")]
    StatusCode {
        status: u16,
        range: StatusRange,
        context: Payload,
    },

    /// The upstream value is not a response.
    #[error("unexpected upstream value: {}", describe(.context))]
    Data { context: Payload },
}

fn describe(payload: &Payload) -> String {
    match payload {
        Payload::Response(response) => {
            format!("response with status {}", response.status_code())
        }
        Payload::Opaque(opaque) => opaque.type_name().to_owned(),
    }
}

/// Tag of a [`MappingError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MappingErrorKind {
    ImageMapping,
    JsonMapping,
    StringMapping,
    ObjectMapping,
    StatusCode,
    Data,
}

impl fmt::Display for MappingErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MappingErrorKind::ImageMapping => "image_mapping",
            MappingErrorKind::JsonMapping => "json_mapping",
            MappingErrorKind::StringMapping => "string_mapping",
            MappingErrorKind::ObjectMapping => "object_mapping",
            MappingErrorKind::StatusCode => "status_code",
            MappingErrorKind::Data => "data",
        };
        f.write_str(name)
    }
}

impl MappingError {
    pub fn kind(&self) -> MappingErrorKind {
        match self {
            MappingError::ImageMapping { .. } => MappingErrorKind::ImageMapping,
            MappingError::JsonMapping { .. } => MappingErrorKind::JsonMapping,
            MappingError::StringMapping { .. } => MappingErrorKind::StringMapping,
            MappingError::ObjectMapping { .. } => MappingErrorKind::ObjectMapping,
            MappingError::StatusCode { .. } => MappingErrorKind::StatusCode,
            MappingError::Data { .. } => MappingErrorKind::Data,
        }
    }

    /// The upstream value that was rejected.
    pub fn context(&self) -> &Payload {
        match self {
            MappingError::ImageMapping { context, .. }
            | MappingError::JsonMapping { context, .. }
            | MappingError::StringMapping { context, .. }
            | MappingError::ObjectMapping { context, .. }
            | MappingError::StatusCode { context, .. }
            | MappingError::Data { context } => context,
        }
    }

    /// Consumes the error and returns the rejected upstream value.
    pub fn into_context(self) -> Payload {
        match self {
            MappingError::ImageMapping { context, .. }
            | MappingError::JsonMapping { context, .. }
            | MappingError::StringMapping { context, .. }
            | MappingError::ObjectMapping { context, .. }
            | MappingError::StatusCode { context, .. }
            | MappingError::Data { context } => context,
        }
    }

    /// The rejected response, when the rejected value was one.
    pub fn response(&self) -> Option<&Response> {
        self.context().as_response()
    }
}
