use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};
use sigmap_core::StatusRange;
use sigmap_core::operator::FilterStatusCodes;

use crate::error::ConfigError;

const VALID_STATUS_CODES: RangeInclusive<u16> = 100..=599;

/// Which status codes a pipeline accepts.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Eq, PartialEq)]
pub enum StatusFilter {
    /// 2xx.
    Successful,
    /// 3xx.
    Redirect,
    /// 2xx and 3xx.
    SuccessfulAndRedirect,
    /// Exactly one status code.
    Code(u16),
    /// Inclusive range.
    Range { low: u16, high: u16 },
}

impl StatusFilter {
    pub fn into_range(self) -> Result<StatusRange, ConfigError> {
        match self {
            StatusFilter::Successful => Ok(StatusRange::SUCCESSFUL),
            StatusFilter::Redirect => Ok(StatusRange::REDIRECT),
            StatusFilter::SuccessfulAndRedirect => Ok(StatusRange::SUCCESSFUL_AND_REDIRECT),
            StatusFilter::Code(code) => {
                validate_code(code)?;
                Ok(StatusRange::single(code))
            }
            StatusFilter::Range { low, high } => {
                validate_code(low)?;
                validate_code(high)?;
                if low > high {
                    return Err(ConfigError::InvalidRange { low, high });
                }
                Ok(StatusRange::new(low, high))
            }
        }
    }

    pub fn into_operator(self) -> Result<FilterStatusCodes, ConfigError> {
        self.into_range().map(FilterStatusCodes::new)
    }
}

fn validate_code(code: u16) -> Result<(), ConfigError> {
    if VALID_STATUS_CODES.contains(&code) {
        Ok(())
    } else {
        Err(ConfigError::InvalidStatusCode(code))
    }
}
