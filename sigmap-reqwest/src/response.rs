use std::future::Future;

use futures::{Stream, StreamExt, stream};
use reqwest::RequestBuilder;
use sigmap::Response;
use tracing::debug;

use crate::Error;

/// Buffers a [`reqwest::Response`] into a [`Response`].
pub trait ResponseExt {
    /// Reads the whole body and keeps status and headers.
    fn into_mappable(self) -> impl Future<Output = Result<Response, reqwest::Error>> + Send;
}

impl ResponseExt for reqwest::Response {
    fn into_mappable(self) -> impl Future<Output = Result<Response, reqwest::Error>> + Send {
        async move {
            let status = self.status().as_u16();
            let headers = self.headers().clone();
            let body = self.bytes().await?;
            Ok(Response::new(status, body).with_headers(headers))
        }
    }
}

/// Sends `request` and emits its response as a single-element signal.
///
/// Transport failures surface as [`Error::Transport`] on the failure
/// channel. HTTP error statuses are not failures here; use a status filter
/// downstream to reject them.
pub fn signal(request: RequestBuilder) -> impl Stream<Item = Result<Response, Error>> + Send {
    stream::once(async move {
        let response = request.send().await.inspect_err(|error| {
            debug!(%error, "request failed");
        })?;
        debug!(url = %response.url(), status = response.status().as_u16(), "response received");
        Ok::<_, Error>(response.into_mappable().await?)
    })
}

/// Buffers every response of an upstream reqwest signal, in order.
pub fn responses<S>(upstream: S) -> impl Stream<Item = Result<Response, Error>>
where
    S: Stream<Item = Result<reqwest::Response, reqwest::Error>>,
{
    upstream.then(|result| async move {
        match result {
            Ok(response) => Ok::<_, Error>(response.into_mappable().await?),
            Err(error) => Err(Error::Transport(error)),
        }
    })
}
