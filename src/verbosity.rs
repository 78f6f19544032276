//! Verbosity levels
use crate::types::{Error, Result};
use log::LevelFilter;
use serde::{Deserialize, Serialize};

/// Amount of diagnostic output produced during evaluation.
///
/// The levels are ordered, so `Low < Default < High`. The discriminants are the
/// integer values accepted in a parameter list.
#[derive(
    Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Serialize, Deserialize,
)]
#[serde(try_from = "i32", into = "i32")]
#[repr(i32)]
pub enum VerbosityLevel {
    /// Only warnings
    Low = -5,
    /// Standard output
    #[default]
    Default = 0,
    /// Detailed output
    High = 5,
}

impl VerbosityLevel {
    /// All levels, from lowest to highest
    pub const ALL: [VerbosityLevel; 3] = [
        VerbosityLevel::Low,
        VerbosityLevel::Default,
        VerbosityLevel::High,
    ];

    /// The `log` filter that downstream code should use at this level
    pub fn level_filter(&self) -> LevelFilter {
        match self {
            VerbosityLevel::Low => LevelFilter::Warn,
            VerbosityLevel::Default => LevelFilter::Info,
            VerbosityLevel::High => LevelFilter::Debug,
        }
    }
}

impl TryFrom<i32> for VerbosityLevel {
    type Error = Error;

    fn try_from(value: i32) -> Result<Self> {
        match value {
            -5 => Ok(VerbosityLevel::Low),
            0 => Ok(VerbosityLevel::Default),
            5 => Ok(VerbosityLevel::High),
            _ => Err(Error::InvalidArgument(format!(
                "{value} is not a verbosity level (expected -5, 0 or 5)"
            ))),
        }
    }
}

impl From<VerbosityLevel> for i32 {
    fn from(level: VerbosityLevel) -> Self {
        level as i32
    }
}
