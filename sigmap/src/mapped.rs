use std::pin::Pin;
use std::task::{Context, Poll};

use futures::ready;
use futures::stream::{FusedStream, Stream};
use pin_project::pin_project;
use sigmap_core::{MappingError, Operator, Payload};
use tracing::debug;

/// Stream returned by the [`ResponseStreamExt`](crate::ResponseStreamExt)
/// methods.
///
/// Applies an [`Operator`] to every `Ok` element of the upstream signal.
/// The first failure, whether raised by the operator or received from
/// upstream, is yielded once and terminates the stream; upstream is not
/// polled again after that.
#[pin_project]
#[must_use = "streams do nothing unless polled"]
#[derive(Debug)]
pub struct Mapped<St, Op> {
    #[pin]
    stream: St,
    operator: Op,
    terminated: bool,
}

impl<St, Op> Mapped<St, Op> {
    pub(crate) fn new(stream: St, operator: Op) -> Self {
        Self {
            stream,
            operator,
            terminated: false,
        }
    }

    pub fn operator(&self) -> &Op {
        &self.operator
    }

    /// Consumes the adapter, returning the upstream stream.
    pub fn into_inner(self) -> St {
        self.stream
    }
}

impl<St, Op, T, E> Stream for Mapped<St, Op>
where
    St: Stream<Item = Result<T, E>>,
    T: Into<Payload>,
    Op: Operator,
    E: From<MappingError>,
{
    type Item = Result<Op::Output, E>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = self.project();

        if *this.terminated {
            return Poll::Ready(None);
        }

        let item = match ready!(this.stream.poll_next(cx)) {
            Some(Ok(value)) => match this.operator.apply(value.into()) {
                Ok(output) => Ok(output),
                Err(error) => {
                    debug!(kind = %error.kind(), %error, "operator rejected element");
                    *this.terminated = true;
                    Err(E::from(error))
                }
            },
            Some(Err(error)) => {
                debug!("upstream signal failed");
                *this.terminated = true;
                Err(error)
            }
            None => {
                *this.terminated = true;
                return Poll::Ready(None);
            }
        };

        Poll::Ready(Some(item))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.terminated {
            (0, Some(0))
        } else {
            let (_, upper) = self.stream.size_hint();
            (0, upper)
        }
    }
}

impl<St, Op, T, E> FusedStream for Mapped<St, Op>
where
    St: Stream<Item = Result<T, E>>,
    T: Into<Payload>,
    Op: Operator,
    E: From<MappingError>,
{
    fn is_terminated(&self) -> bool {
        self.terminated
    }
}
