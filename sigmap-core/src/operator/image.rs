use ::image::DynamicImage;
use tracing::trace;

use super::Operator;
use crate::{MappingError, Payload};

/// Decodes the response body as an image.
///
/// The format is guessed from the body bytes. PNG, JPEG, GIF, BMP, TIFF,
/// ICO and WebP are supported. Rejects with [`MappingError::ImageMapping`]
/// when the value is not a response or the body does not decode.
#[derive(Debug, Clone, Copy, Default)]
pub struct MapImage;

impl MapImage {
    pub fn new() -> Self {
        Self
    }
}

impl Operator for MapImage {
    type Output = DynamicImage;

    fn apply(&self, payload: Payload) -> Result<DynamicImage, MappingError> {
        let Some(response) = payload.as_response() else {
            return Err(MappingError::ImageMapping {
                context: payload,
                source: None,
            });
        };

        ::image::load_from_memory(response.body()).map_err(|error| {
            trace!(%error, "image decoding failed");
            MappingError::ImageMapping {
                context: payload,
                source: Some(error),
            }
        })
    }
}
