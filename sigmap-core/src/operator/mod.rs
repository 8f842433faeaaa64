//! Element-wise mapping operators.
//!
//! An [`Operator`] takes one upstream [`Payload`] and either produces an
//! output value or rejects it with a [`MappingError`]. Operators are pure:
//! they keep no state between elements, never block and never retain the
//! payload after returning.
//!
//! ## Provided operators
//!
//! - [`FilterStatusCodes`] - forwards responses whose status lies in a range
//! - [`MapImage`] - decodes the body as an image
//! - [`MapJson`] - parses the body as a JSON value
//! - [`MapString`] - decodes the body as UTF-8 text
//! - [`MapStringAtKeyPath`] - extracts a string from a JSON body
//! - [`MapDeserialize`] - deserializes the body into a typed value
//!
//! ## Composition
//!
//! [`OperatorExt::then`] feeds the output of one operator into the next and
//! stops at the first rejection.

pub mod combinators;
pub mod filter;
pub mod image;
pub mod json;
pub mod object;
pub mod string;

use std::sync::Arc;

use crate::{MappingError, Payload};

pub use combinators::{OperatorExt, Then};
pub use filter::FilterStatusCodes;
pub use image::MapImage;
pub use json::MapJson;
pub use object::MapDeserialize;
pub use string::{MapString, MapStringAtKeyPath};

/// A stateless transform applied to every element of a signal.
pub trait Operator {
    /// Value forwarded downstream on success.
    type Output;

    /// Transforms one upstream element or rejects it.
    fn apply(&self, payload: Payload) -> Result<Self::Output, MappingError>;
}

/// Type-erased operator.
pub type BoxOperator<O> = Box<dyn Operator<Output = O> + Send + Sync>;

impl<T> Operator for Box<T>
where
    T: Operator + ?Sized,
{
    type Output = T::Output;

    fn apply(&self, payload: Payload) -> Result<Self::Output, MappingError> {
        self.as_ref().apply(payload)
    }
}

impl<T> Operator for &T
where
    T: Operator + ?Sized,
{
    type Output = T::Output;

    fn apply(&self, payload: Payload) -> Result<Self::Output, MappingError> {
        (*self).apply(payload)
    }
}

impl<T> Operator for Arc<T>
where
    T: Operator + ?Sized,
{
    type Output = T::Output;

    fn apply(&self, payload: Payload) -> Result<Self::Output, MappingError> {
        self.as_ref().apply(payload)
    }
}
