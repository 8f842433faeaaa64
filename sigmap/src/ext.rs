use futures::Stream;
use serde::de::DeserializeOwned;
use sigmap_core::operator::{
    FilterStatusCodes, MapDeserialize, MapImage, MapJson, MapString, MapStringAtKeyPath,
};
use sigmap_core::{MappingError, Operator, Payload, StatusRange};

use crate::Mapped;

/// Mapping operators for signals of HTTP responses.
///
/// # For Callers
///
/// Any stream of `Result<T, E>` gets these methods as long as its elements
/// convert into a [`Payload`] (a [`Response`](sigmap_core::Response), a
/// [`Payload`] itself, ...) and its error type can absorb a
/// [`MappingError`]. Each method returns a [`Mapped`] stream that forwards
/// transformed elements in order and ends after the first failure.
///
/// ```
/// use futures::{StreamExt, stream};
/// use sigmap::{MappingError, Response, ResponseStreamExt};
///
/// # futures::executor::block_on(async {
/// let signal = stream::iter([Ok::<_, MappingError>(Response::new(200, r#"{"ok":true}"#))]);
///
/// let values: Vec<_> = signal
///     .filter_successful_status_codes()
///     .map_json()
///     .collect()
///     .await;
///
/// assert_eq!(values[0].as_ref().unwrap()["ok"], true);
/// # });
/// ```
///
/// # For Implementors
///
/// This trait is implemented for every matching stream. You don't need to
/// implement it manually.
pub trait ResponseStreamExt<T, E>: Stream<Item = Result<T, E>> + Sized
where
    T: Into<Payload>,
    E: From<MappingError>,
{
    /// Applies an arbitrary operator to every element.
    fn map_with<Op>(self, operator: Op) -> Mapped<Self, Op>
    where
        Op: Operator,
    {
        Mapped::new(self, operator)
    }

    /// Forwards responses whose status code lies in `range`.
    ///
    /// Fails with a `StatusCode` error for responses outside the range and a
    /// `Data` error for elements that are not responses.
    fn filter_status_codes(
        self,
        range: impl Into<StatusRange>,
    ) -> Mapped<Self, FilterStatusCodes> {
        self.map_with(FilterStatusCodes::new(range))
    }

    /// Forwards responses with exactly this status code.
    fn filter_status_code(self, code: u16) -> Mapped<Self, FilterStatusCodes> {
        self.map_with(FilterStatusCodes::code(code))
    }

    /// Forwards 2xx responses.
    fn filter_successful_status_codes(self) -> Mapped<Self, FilterStatusCodes> {
        self.map_with(FilterStatusCodes::successful())
    }

    /// Forwards 3xx responses.
    fn filter_redirect_status_codes(self) -> Mapped<Self, FilterStatusCodes> {
        self.map_with(FilterStatusCodes::redirect())
    }

    /// Forwards 2xx and 3xx responses.
    fn filter_successful_status_and_redirect_codes(self) -> Mapped<Self, FilterStatusCodes> {
        self.map_with(FilterStatusCodes::successful_and_redirect())
    }

    /// Decodes each response body as an image.
    fn map_image(self) -> Mapped<Self, MapImage> {
        self.map_with(MapImage::new())
    }

    /// Parses each response body as JSON.
    fn map_json(self) -> Mapped<Self, MapJson> {
        self.map_with(MapJson::new())
    }

    /// Parses each response body as JSON, mapping empty bodies to `null`.
    fn map_json_allowing_empty(self) -> Mapped<Self, MapJson> {
        self.map_with(MapJson::allowing_empty())
    }

    /// Decodes each response body as UTF-8 text.
    fn map_string(self) -> Mapped<Self, MapString> {
        self.map_with(MapString::new())
    }

    /// Extracts the string at a dot-separated key path of a JSON body.
    fn map_string_at_key_path(
        self,
        key_path: impl Into<String>,
    ) -> Mapped<Self, MapStringAtKeyPath> {
        self.map_with(MapStringAtKeyPath::new(key_path))
    }

    /// Deserializes each JSON response body into `D`.
    fn map_deserialize<D>(self) -> Mapped<Self, MapDeserialize<D>>
    where
        D: DeserializeOwned,
    {
        self.map_with(MapDeserialize::new())
    }
}

impl<St, T, E> ResponseStreamExt<T, E> for St
where
    St: Stream<Item = Result<T, E>>,
    T: Into<Payload>,
    E: From<MappingError>,
{
}
