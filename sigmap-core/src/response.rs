//! The response value that flows through mapping operators.

use bytes::Bytes;
use http::HeaderMap;

/// A completed HTTP exchange: status code, headers and the raw body.
///
/// Operators only read from a `Response`. They either forward it untouched
/// (status filters) or decode its body into a new value.
///
/// # Examples
///
/// ```
/// use sigmap_core::Response;
///
/// let response = Response::new(200, "hello");
/// assert_eq!(response.status_code(), 200);
/// assert_eq!(response.body().as_ref(), b"hello");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    status_code: u16,
    headers: HeaderMap,
    body: Bytes,
}

impl Response {
    /// Creates a response with the given status code, body and no headers.
    pub fn new(status_code: u16, body: impl Into<Bytes>) -> Self {
        Self {
            status_code,
            headers: HeaderMap::new(),
            body: body.into(),
        }
    }

    /// Replaces the response headers.
    pub fn with_headers(mut self, headers: HeaderMap) -> Self {
        self.headers = headers;
        self
    }

    /// Numeric HTTP status code.
    pub fn status_code(&self) -> u16 {
        self.status_code
    }

    /// Response headers.
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Raw response body.
    pub fn body(&self) -> &Bytes {
        &self.body
    }

    /// Consumes the response and returns the body.
    pub fn into_body(self) -> Bytes {
        self.body
    }
}

impl From<http::Response<Bytes>> for Response {
    fn from(response: http::Response<Bytes>) -> Self {
        let (parts, body) = response.into_parts();
        Self {
            status_code: parts.status.as_u16(),
            headers: parts.headers,
            body,
        }
    }
}

impl TryFrom<Response> for http::Response<Bytes> {
    type Error = http::Error;

    fn try_from(response: Response) -> Result<Self, Self::Error> {
        let mut builder = http::Response::builder().status(response.status_code);
        if let Some(headers) = builder.headers_mut() {
            *headers = response.headers;
        }
        builder.body(response.body)
    }
}
