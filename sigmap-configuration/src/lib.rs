//! # sigmap-configuration
//!
//! Declarative description of a response pipeline: an optional status
//! filter followed by a body decoder.
//!
//! Configurations are plain serde types, so they can be loaded from any
//! format. YAML example:
//!
//! ```yaml
//! filter:
//!   Range:
//!     low: 200
//!     high: 204
//! decode:
//!   StringAtKeyPath: data.name
//! ```
//!
//! [`ConfigPipeline::into_pipeline`] validates the configuration and builds
//! a boxed operator that can be handed to `ResponseStreamExt::map_with`.

mod decode;
mod error;
mod filter;

use serde::{Deserialize, Serialize};
use sigmap_core::{BoxOperator, OperatorExt};

pub use decode::{Decode, DecodeOperator, Decoded};
pub use error::ConfigError;
pub use filter::StatusFilter;

/// Operator built from a [`ConfigPipeline`].
pub type Pipeline = BoxOperator<Decoded>;

#[derive(Serialize, Deserialize, Debug, Clone, Default, Eq, PartialEq)]
pub struct ConfigPipeline {
    #[serde(default)]
    pub filter: Option<StatusFilter>,
    #[serde(default)]
    pub decode: Decode,
}

impl ConfigPipeline {
    pub fn into_pipeline(self) -> Result<Pipeline, ConfigError> {
        let decode = self.decode.into_operator()?;
        match self.filter {
            Some(filter) => Ok(filter.into_operator()?.then(decode).boxed()),
            None => Ok(decode.boxed()),
        }
    }
}
