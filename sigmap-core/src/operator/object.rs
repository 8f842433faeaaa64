use std::any::type_name;
use std::fmt;
use std::marker::PhantomData;

use serde::de::DeserializeOwned;
use tracing::trace;

use super::Operator;
use crate::{MappingError, Payload};

/// Deserializes the JSON response body into `T`.
///
/// A value that is not a response is rejected with
/// [`MappingError::JsonMapping`]; a body that does not deserialize into `T`
/// is rejected with [`MappingError::ObjectMapping`].
///
/// # Examples
///
/// ```
/// use serde::Deserialize;
/// use sigmap_core::operator::{MapDeserialize, Operator};
/// use sigmap_core::Response;
///
/// #[derive(Deserialize)]
/// struct User {
///     name: String,
/// }
///
/// let user: User = MapDeserialize::new()
///     .apply(Response::new(200, r#"{"name":"ferris"}"#).into())
///     .unwrap();
/// assert_eq!(user.name, "ferris");
/// ```
pub struct MapDeserialize<T> {
    _target: PhantomData<fn() -> T>,
}

impl<T> MapDeserialize<T> {
    pub fn new() -> Self {
        Self {
            _target: PhantomData,
        }
    }
}

impl<T> Default for MapDeserialize<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for MapDeserialize<T> {
    fn clone(&self) -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for MapDeserialize<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MapDeserialize")
            .field("target", &type_name::<T>())
            .finish()
    }
}

impl<T> Operator for MapDeserialize<T>
where
    T: DeserializeOwned,
{
    type Output = T;

    fn apply(&self, payload: Payload) -> Result<T, MappingError> {
        let Some(response) = payload.as_response() else {
            return Err(MappingError::JsonMapping {
                context: payload,
                source: None,
            });
        };

        serde_json::from_slice(response.body()).map_err(|error| {
            trace!(%error, into = type_name::<T>(), "deserialization failed");
            MappingError::ObjectMapping {
                target: type_name::<T>(),
                context: payload,
                source: error,
            }
        })
    }
}
