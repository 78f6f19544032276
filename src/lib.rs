//! Evaluation options for potential operators
//!
//! The options select between dense and hierarchical-matrix evaluation, set the
//! number of threads used by the evaluation engine and set how much diagnostic
//! output it produces.
#![cfg_attr(feature = "strict", deny(warnings))]
#![warn(missing_docs)]

pub mod bindings;
pub mod evaluation_options;
pub mod parallelization;
pub mod parameters;
pub mod types;
pub mod verbosity;

pub use evaluation_options::{EvaluationMode, EvaluationOptions};
pub use parallelization::{ParallelizationOptions, ThreadCount};
pub use parameters::ParameterList;
pub use types::{Error, Result};
pub use verbosity::VerbosityLevel;
