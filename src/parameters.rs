//! Parameter lists
use crate::evaluation_options::EvaluationMode;
use crate::types::Result;
use crate::verbosity::VerbosityLevel;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::{Map, Value};

/// Key holding the evaluation mode (`"dense"` or `"hmat"`)
pub const EVALUATION_MODE_KEY: &str = "options.assembly.potentialOperatorAssemblyType";
/// Key holding the maximum thread count (a positive number, or -1 for automatic)
pub const MAX_THREAD_COUNT_KEY: &str = "options.global.maxThreadCount";
/// Key holding the verbosity level (-5, 0 or 5)
pub const VERBOSITY_LEVEL_KEY: &str = "options.global.verbosityLevel";

/// A set of parameters from which evaluation options can be built
///
/// Each recognised parameter may be absent. Entries with any other key are kept so
/// that the full list can be read back later, but they are not interpreted. Only
/// [ParameterList::insert] adds such entries, so a recognised key always lives in
/// its typed field.
///
/// A thread count that does not fit in an `i32` is rejected when the list is
/// parsed. A count that fits but is zero or negative (other than -1) is rejected
/// when options are built from the list.
#[derive(Debug, Default, PartialEq, Clone, Serialize, Deserialize)]
pub struct ParameterList {
    /// Evaluation mode
    #[serde(
        rename = "options.assembly.potentialOperatorAssemblyType",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub evaluation_mode: Option<EvaluationMode>,
    /// Maximum thread count. This is checked when the options are built.
    #[serde(
        rename = "options.global.maxThreadCount",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub max_thread_count: Option<i32>,
    /// Verbosity level
    #[serde(
        rename = "options.global.verbosityLevel",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub verbosity_level: Option<VerbosityLevel>,
    #[serde(flatten)]
    other: Map<String, Value>,
}

impl ParameterList {
    /// Create an empty parameter list
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a generic key/value collection
    ///
    /// Fails if `value` is not an object, or if a recognised key holds a value of the
    /// wrong type.
    pub fn from_value(value: Value) -> Result<Self> {
        Ok(serde_json::from_value(value)?)
    }

    /// Store `value` under `key`
    ///
    /// A recognised key sets its typed field, and fails if `value` has the wrong type.
    /// Any other key is stored as it is.
    pub fn insert(&mut self, key: &str, value: Value) -> Result<()> {
        match key {
            EVALUATION_MODE_KEY => self.evaluation_mode = serde_json::from_value(value)?,
            MAX_THREAD_COUNT_KEY => self.max_thread_count = serde_json::from_value(value)?,
            VERBOSITY_LEVEL_KEY => self.verbosity_level = serde_json::from_value(value)?,
            _ => {
                self.other.insert(key.to_string(), value);
            }
        }
        Ok(())
    }

    /// Look up the value stored under `key`
    ///
    /// Returns `None` if the key is absent or its value cannot be read as a `T`.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let value = match key {
            EVALUATION_MODE_KEY => serde_json::to_value(self.evaluation_mode?).ok()?,
            MAX_THREAD_COUNT_KEY => Value::from(self.max_thread_count?),
            VERBOSITY_LEVEL_KEY => Value::from(i32::from(self.verbosity_level?)),
            _ => self.other.get(key)?.clone(),
        };
        serde_json::from_value(value).ok()
    }

    /// Keys of the entries that are not interpreted
    pub fn unrecognised_keys(&self) -> impl Iterator<Item = &str> {
        self.other.keys().map(String::as_str)
    }
}
