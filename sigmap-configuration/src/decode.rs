use serde::{Deserialize, Serialize};
use serde_json::Value;
use sigmap_core::operator::{MapImage, MapJson, MapString, MapStringAtKeyPath};
use sigmap_core::{DynamicImage, MappingError, Operator, Payload, Response};

use crate::error::ConfigError;

/// How the response body is turned into the pipeline output.
#[derive(Serialize, Deserialize, Debug, Clone, Default, Eq, PartialEq)]
pub enum Decode {
    /// Keep the response itself.
    #[default]
    Response,
    Image,
    Json,
    /// JSON, with an empty body mapped to `null`.
    JsonAllowingEmpty,
    String,
    /// The string at a dot-separated key path of a JSON body.
    StringAtKeyPath(String),
}

/// Output of a configured pipeline.
#[derive(Debug)]
pub enum Decoded {
    Response(Response),
    Image(DynamicImage),
    Json(Value),
    String(String),
}

impl Decode {
    pub fn into_operator(self) -> Result<DecodeOperator, ConfigError> {
        if let Decode::StringAtKeyPath(key_path) = &self
            && (key_path.is_empty() || key_path.split('.').any(str::is_empty))
        {
            return Err(ConfigError::InvalidKeyPath(key_path.clone()));
        }
        Ok(DecodeOperator { decode: self })
    }
}

/// Operator built from a [`Decode`] configuration.
#[derive(Debug, Clone)]
pub struct DecodeOperator {
    decode: Decode,
}

impl Operator for DecodeOperator {
    type Output = Decoded;

    fn apply(&self, payload: Payload) -> Result<Decoded, MappingError> {
        match &self.decode {
            Decode::Response => match payload {
                Payload::Response(response) => Ok(Decoded::Response(response)),
                context => Err(MappingError::Data { context }),
            },
            Decode::Image => MapImage::new().apply(payload).map(Decoded::Image),
            Decode::Json => MapJson::new().apply(payload).map(Decoded::Json),
            Decode::JsonAllowingEmpty => {
                MapJson::allowing_empty().apply(payload).map(Decoded::Json)
            }
            Decode::String => MapString::new().apply(payload).map(Decoded::String),
            Decode::StringAtKeyPath(key_path) => MapStringAtKeyPath::new(key_path.as_str())
                .apply(payload)
                .map(Decoded::String),
        }
    }
}

#[cfg(test)]
mod tests {
    use sigmap_core::MappingErrorKind;

    use super::*;

    #[test]
    fn test_key_path_validation() {
        for key_path in ["", "a..b", ".a", "a."] {
            assert_eq!(
                Decode::StringAtKeyPath(key_path.to_owned()).into_operator().unwrap_err(),
                ConfigError::InvalidKeyPath(key_path.to_owned())
            );
        }
        assert!(Decode::StringAtKeyPath("a.b".to_owned()).into_operator().is_ok());
    }

    #[test]
    fn test_response_decode_requires_response() {
        let operator = Decode::Response.into_operator().unwrap();

        let decoded = operator.apply(Response::new(200, "raw").into()).unwrap();
        assert!(matches!(
            decoded,
            Decoded::Response(response) if response.body().as_ref() == b"raw"
        ));

        let error = operator.apply(Payload::opaque(0_u8)).unwrap_err();
        assert_eq!(error.kind(), MappingErrorKind::Data);
    }

    #[test]
    fn test_decoders_delegate() {
        let json = Decode::Json.into_operator().unwrap();
        assert!(matches!(
            json.apply(Response::new(200, "[]").into()),
            Ok(Decoded::Json(Value::Array(_)))
        ));

        let empty = Decode::JsonAllowingEmpty.into_operator().unwrap();
        assert!(matches!(
            empty.apply(Response::new(204, "").into()),
            Ok(Decoded::Json(Value::Null))
        ));

        let text = Decode::String.into_operator().unwrap();
        assert!(matches!(
            text.apply(Response::new(200, "hi").into()),
            Ok(Decoded::String(s)) if s == "hi"
        ));

        let image = Decode::Image.into_operator().unwrap();
        let error = image.apply(Response::new(200, "hi").into()).unwrap_err();
        assert_eq!(error.kind(), MappingErrorKind::ImageMapping);
    }
}
