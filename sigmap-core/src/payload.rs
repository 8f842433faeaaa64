//! Upstream elements accepted by mapping operators.
//!
//! A signal may carry things other than responses. Operators match on
//! [`Payload`] to tell a [`Response`] apart from any other value instead of
//! attempting a cast.

use std::any::{Any, type_name};
use std::fmt;

use crate::Response;

/// An element flowing into an operator.
#[derive(Debug)]
pub enum Payload {
    /// A completed HTTP exchange.
    Response(Response),
    /// Any other value carried by the signal.
    Opaque(Opaque),
}

impl Payload {
    /// Wraps an arbitrary value that is not a response.
    pub fn opaque<T>(value: T) -> Self
    where
        T: Any + Send + Sync,
    {
        Payload::Opaque(Opaque::new(value))
    }

    /// Returns the response if this payload carries one.
    pub fn as_response(&self) -> Option<&Response> {
        match self {
            Payload::Response(response) => Some(response),
            Payload::Opaque(_) => None,
        }
    }

    /// Takes the response out, or hands the payload back unchanged.
    pub fn into_response(self) -> Result<Response, Self> {
        match self {
            Payload::Response(response) => Ok(response),
            other => Err(other),
        }
    }

    pub fn is_response(&self) -> bool {
        matches!(self, Payload::Response(_))
    }
}

impl From<Response> for Payload {
    fn from(response: Response) -> Self {
        Payload::Response(response)
    }
}

impl From<Opaque> for Payload {
    fn from(opaque: Opaque) -> Self {
        Payload::Opaque(opaque)
    }
}

/// A type-erased value that is not a [`Response`].
///
/// The concrete type name is kept for diagnostics, and the value can be
/// recovered with [`downcast_ref`](Self::downcast_ref) or
/// [`downcast`](Self::downcast).
pub struct Opaque {
    type_name: &'static str,
    value: Box<dyn Any + Send + Sync>,
}

impl Opaque {
    pub fn new<T>(value: T) -> Self
    where
        T: Any + Send + Sync,
    {
        Self {
            type_name: type_name::<T>(),
            value: Box::new(value),
        }
    }

    /// Name of the wrapped type.
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.value.downcast_ref()
    }

    /// Recovers the wrapped value, or returns `self` if the type does not match.
    pub fn downcast<T: Any>(self) -> Result<T, Self> {
        let Opaque { type_name, value } = self;
        match value.downcast::<T>() {
            Ok(value) => Ok(*value),
            Err(value) => Err(Opaque { type_name, value }),
        }
    }
}

impl fmt::Debug for Opaque {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Opaque")
            .field("type_name", &self.type_name)
            .finish_non_exhaustive()
    }
}
