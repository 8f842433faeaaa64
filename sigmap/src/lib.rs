//! # sigmap
//!
//! Status filters and body decoders for asynchronous signals of HTTP
//! responses.
//!
//! A signal is any [`futures::Stream`] of `Result<T, E>`: `Ok` elements are
//! values, an `Err` is the failure channel. [`ResponseStreamExt`] attaches
//! the operators from [`sigmap_core`] to such streams:
//!
//! - [`filter_status_codes`](ResponseStreamExt::filter_status_codes) and its
//!   named variants reject responses outside a [`StatusRange`]
//! - [`map_image`](ResponseStreamExt::map_image),
//!   [`map_json`](ResponseStreamExt::map_json) and
//!   [`map_string`](ResponseStreamExt::map_string) decode response bodies
//!
//! Operators are stateless and run synchronously inside `poll_next`. The
//! first failure ends the stream; scheduling, cancellation (dropping the
//! stream) and backpressure stay with the upstream signal.
//!
//! ```
//! use futures::{StreamExt, stream};
//! use sigmap::{MappingError, MappingErrorKind, Response, ResponseStreamExt};
//!
//! # futures::executor::block_on(async {
//! let signal = stream::iter([
//!     Ok::<_, MappingError>(Response::new(200, "hello")),
//!     Ok(Response::new(503, "unavailable")),
//!     Ok(Response::new(200, "never seen")),
//! ]);
//!
//! let mut strings = signal.filter_successful_status_codes().map_string();
//!
//! assert_eq!(strings.next().await.unwrap().unwrap(), "hello");
//! let error = strings.next().await.unwrap().unwrap_err();
//! assert_eq!(error.kind(), MappingErrorKind::StatusCode);
//! assert!(strings.next().await.is_none());
//! # });
//! ```

mod ext;
mod mapped;

pub use ext::ResponseStreamExt;
pub use mapped::Mapped;

pub use sigmap_core::operator;
pub use sigmap_core::{
    BoxOperator, DynamicImage, MappingError, MappingErrorKind, Opaque, Operator, OperatorExt,
    Payload, Response, StatusRange,
};
