//! # sigmap-core
//!
//! Core types and operators for mapping signals of HTTP responses.
//!
//! This crate is synchronous and protocol-light. It defines what flows
//! through a signal and how each element is filtered or decoded; the
//! `sigmap` crate attaches these operators to `futures` streams.
//!
//! ## Data model
//!
//! - [`Response`] - status code, headers and raw body of an HTTP exchange
//! - [`Payload`] - an upstream element: a response or any other value
//! - [`StatusRange`] - closed interval of accepted status codes
//! - [`MappingError`] - typed failure owning the rejected value
//!
//! ## Operators
//!
//! Every operator implements [`Operator`] and is applied to one element at
//! a time. See the [`operator`] module for the full list.
//!
//! ```
//! use sigmap_core::operator::{FilterStatusCodes, MapString, Operator, OperatorExt};
//! use sigmap_core::Response;
//!
//! let operator = FilterStatusCodes::successful().then(MapString::new());
//! let text = operator.apply(Response::new(200, "hello").into()).unwrap();
//! assert_eq!(text, "hello");
//! ```

pub mod error;
pub mod operator;
pub mod payload;
pub mod response;
pub mod status;

pub use error::{MappingError, MappingErrorKind};
pub use operator::{BoxOperator, Operator, OperatorExt};
pub use payload::{Opaque, Payload};
pub use response::Response;
pub use status::StatusRange;

/// Decoded image type produced by [`operator::MapImage`].
pub use image::DynamicImage;
