use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use thiserror::Error;

pub const SIZE_UNIT_SUFFIX: &str = "ml";

#[derive(Debug, Error, Clone, PartialEq)]
pub enum SizeLabelError {
    #[error("Missing \"ml\" suffix in size label: {0}")]
    MissingUnit(String),

    #[error("Invalid millilitre amount in size label: {0}")]
    InvalidAmount(String),
}

/// A bottle size label such as `12ml`, carrying its parsed volume.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Hash)]
#[serde(try_from = "String", into = "String")]
pub struct SizeLabel {
    millilitres: u32,
}

impl SizeLabel {
    pub fn new(millilitres: u32) -> Result<Self, SizeLabelError> {
        if millilitres == 0 {
            return Err(SizeLabelError::InvalidAmount(format!(
                "{millilitres}{SIZE_UNIT_SUFFIX}"
            )));
        }
        Ok(Self { millilitres })
    }

    pub fn millilitres(&self) -> u32 {
        self.millilitres
    }

    pub fn as_f64(&self) -> f64 {
        f64::from(self.millilitres)
    }
}

impl fmt::Display for SizeLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{SIZE_UNIT_SUFFIX}", self.millilitres)
    }
}

impl FromStr for SizeLabel {
    type Err = SizeLabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        let amount = normalized
            .strip_suffix(SIZE_UNIT_SUFFIX)
            .ok_or_else(|| SizeLabelError::MissingUnit(s.to_string()))?
            .trim();

        match amount.parse::<u32>() {
            Ok(ml) if ml > 0 => Ok(Self { millilitres: ml }),
            _ => Err(SizeLabelError::InvalidAmount(s.to_string())),
        }
    }
}

impl TryFrom<String> for SizeLabel {
    type Error = SizeLabelError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<SizeLabel> for String {
    fn from(value: SizeLabel) -> Self {
        value.to_string()
    }
}
