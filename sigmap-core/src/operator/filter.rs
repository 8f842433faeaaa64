use tracing::trace;

use super::Operator;
use crate::{MappingError, Payload, Response, StatusRange};

/// Forwards responses whose status code lies in a [`StatusRange`].
///
/// - A response inside the range is forwarded unchanged.
/// - A response outside the range is rejected with
///   [`MappingError::StatusCode`].
/// - Any value that is not a response is rejected with
///   [`MappingError::Data`].
///
/// Applying the same filter again to a forwarded response forwards it again.
///
/// # Examples
///
/// ```
/// use sigmap_core::operator::{FilterStatusCodes, Operator};
/// use sigmap_core::{MappingErrorKind, Response};
///
/// let filter = FilterStatusCodes::successful();
///
/// assert!(filter.apply(Response::new(200, "").into()).is_ok());
///
/// let error = filter.apply(Response::new(404, "").into()).unwrap_err();
/// assert_eq!(error.kind(), MappingErrorKind::StatusCode);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterStatusCodes {
    range: StatusRange,
}

impl FilterStatusCodes {
    pub fn new(range: impl Into<StatusRange>) -> Self {
        Self {
            range: range.into(),
        }
    }

    /// Accepts 2xx responses.
    pub fn successful() -> Self {
        Self::new(StatusRange::SUCCESSFUL)
    }

    /// Accepts 3xx responses.
    pub fn redirect() -> Self {
        Self::new(StatusRange::REDIRECT)
    }

    /// Accepts 2xx and 3xx responses.
    pub fn successful_and_redirect() -> Self {
        Self::new(StatusRange::SUCCESSFUL_AND_REDIRECT)
    }

    /// Accepts exactly one status code.
    pub fn code(code: u16) -> Self {
        Self::new(StatusRange::single(code))
    }

    pub fn range(&self) -> StatusRange {
        self.range
    }
}

impl Operator for FilterStatusCodes {
    type Output = Response;

    fn apply(&self, payload: Payload) -> Result<Response, MappingError> {
        match payload {
            Payload::Response(response) if self.range.contains(response.status_code()) => {
                Ok(response)
            }
            Payload::Response(response) => {
                let status = response.status_code();
                trace!(status, range = %self.range, "status code rejected");
                Err(MappingError::StatusCode {
                    status,
                    range: self.range,
                    context: Payload::Response(response),
                })
            }
            context => Err(MappingError::Data { context }),
        }
    }
}
