//! Combinators for composing operators.
//!
//! ```
//! use sigmap_core::operator::{FilterStatusCodes, MapJson, Operator, OperatorExt};
//! use sigmap_core::Response;
//!
//! let operator = FilterStatusCodes::successful().then(MapJson::new());
//! let json = operator.apply(Response::new(200, r#"{"a":1}"#).into()).unwrap();
//! assert_eq!(json["a"], 1);
//! ```

use super::Operator;
use crate::{MappingError, Payload};

/// Applies `first`, then feeds its output into `second`.
///
/// Short-circuits: if `first` rejects the element, `second` is not applied.
#[derive(Debug, Clone)]
pub struct Then<A, B> {
    first: A,
    second: B,
}

impl<A, B> Then<A, B> {
    pub fn new(first: A, second: B) -> Self {
        Self { first, second }
    }
}

impl<A, B> Operator for Then<A, B>
where
    A: Operator,
    A::Output: Into<Payload>,
    B: Operator,
{
    type Output = B::Output;

    fn apply(&self, payload: Payload) -> Result<Self::Output, MappingError> {
        let intermediate = self.first.apply(payload)?;
        self.second.apply(intermediate.into())
    }
}

/// Extension trait for fluent operator composition.
///
/// Implemented for every [`Operator`].
pub trait OperatorExt: Operator + Sized {
    /// Chains `next` after this operator.
    fn then<B>(self, next: B) -> Then<Self, B>
    where
        Self::Output: Into<Payload>,
        B: Operator,
    {
        Then::new(self, next)
    }

    /// Erases the operator type.
    fn boxed(self) -> super::BoxOperator<Self::Output>
    where
        Self: Send + Sync + 'static,
    {
        Box::new(self)
    }
}

impl<T> OperatorExt for T where T: Operator {}
