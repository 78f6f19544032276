//! Options controlling evaluation of potentials
use crate::parallelization::{ParallelizationOptions, ThreadCount};
use crate::parameters::ParameterList;
use crate::types::{Error, Result};
use crate::verbosity::VerbosityLevel;
use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroUsize;

/// Representation used when evaluating potential operators
#[derive(Debug, Default, PartialEq, Eq, Hash, Clone, Copy, Serialize, Deserialize)]
#[repr(u8)]
pub enum EvaluationMode {
    /// Assemble dense matrices
    #[default]
    #[serde(rename = "dense")]
    Dense = 0,
    /// Assemble hierarchical matrices
    #[serde(rename = "hmat")]
    HierarchicalMatrix = 1,
}

impl fmt::Display for EvaluationMode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            EvaluationMode::Dense => write!(f, "dense"),
            EvaluationMode::HierarchicalMatrix => write!(f, "hmat"),
        }
    }
}

/// Options controlling evaluation of potentials
///
/// The assembly and evaluation routines read the evaluation mode, parallelization
/// options and verbosity level from this object to decide how to run. It does no
/// numerical work itself.
///
/// The options are a plain value. To share them between concurrently running
/// evaluations, clone them or wrap them in a lock.
#[derive(Debug, Default, PartialEq, Clone)]
pub struct EvaluationOptions {
    evaluation_mode: EvaluationMode,
    parallelization_options: ParallelizationOptions,
    verbosity_level: VerbosityLevel,
    parameter_list: Option<ParameterList>,
}

impl EvaluationOptions {
    /// Thread count meaning that the number of threads is determined automatically
    pub const AUTO: i32 = -1;

    /// Create options with the default settings
    ///
    /// These are dense evaluation, an automatic thread count and the default
    /// verbosity level.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create options from a parameter list
    ///
    /// Parameters that are not set take their default values, and unrecognised
    /// parameters are ignored. The parameter list is kept and can be read back with
    /// [EvaluationOptions::parameter_list].
    pub fn from_parameters(parameters: ParameterList) -> Result<Self> {
        let mut options = Self::default();
        if let Some(mode) = parameters.evaluation_mode {
            options.evaluation_mode = mode;
        }
        if let Some(max_thread_count) = parameters.max_thread_count {
            options.set_max_thread_count(max_thread_count)?;
        }
        if let Some(level) = parameters.verbosity_level {
            options.verbosity_level = level;
        }
        for key in parameters.unrecognised_keys() {
            debug!("Ignoring unrecognised parameter {key}");
        }
        debug!(
            "Evaluation options: mode {}, max thread count {}, verbosity {:?}",
            options.evaluation_mode,
            options.parallelization_options.max_thread_count().as_raw(),
            options.verbosity_level
        );
        options.parameter_list = Some(parameters);
        Ok(options)
    }

    /// Use dense-matrix representations of potential operators
    ///
    /// This is the default evaluation mode. A potential due to a single charge
    /// distribution is evaluated directly by quadrature, and an assembled potential
    /// operator is stored as a dense matrix whose (c * i, j) entry is the cth
    /// component of the potential produced at the ith point by the jth basis
    /// function.
    pub fn switch_to_dense_mode(&mut self) {
        self.evaluation_mode = EvaluationMode::Dense;
    }

    /// Use hierarchical-matrix representations of potential operators
    pub fn switch_to_hmat_mode(&mut self) {
        self.evaluation_mode = EvaluationMode::HierarchicalMatrix;
    }

    /// Current evaluation mode
    pub fn evaluation_mode(&self) -> EvaluationMode {
        self.evaluation_mode
    }

    /// Set the maximum number of threads used during evaluation of potentials
    ///
    /// `max_thread_count` must be positive or [EvaluationOptions::AUTO]. In the latter
    /// case the number of threads is determined automatically. Any other value is
    /// rejected and the current setting is kept.
    pub fn set_max_thread_count(&mut self, max_thread_count: i32) -> Result<()> {
        let count = if max_thread_count == Self::AUTO {
            ThreadCount::Automatic
        } else {
            usize::try_from(max_thread_count)
                .ok()
                .and_then(NonZeroUsize::new)
                .map(ThreadCount::Fixed)
                .ok_or_else(|| {
                    Error::InvalidArgument(format!(
                        "max thread count must be positive or AUTO, got {max_thread_count}"
                    ))
                })?
        };
        self.parallelization_options.set_max_thread_count(count);
        Ok(())
    }

    /// Set the maximum number of threads used during evaluation of potentials
    #[deprecated(note = "Use set_max_thread_count instead")]
    pub fn switch_to_tbb(&mut self, max_thread_count: i32) -> Result<()> {
        self.set_max_thread_count(max_thread_count)
    }

    /// Current parallelization options
    pub fn parallelization_options(&self) -> &ParallelizationOptions {
        &self.parallelization_options
    }

    /// Set the verbosity level
    ///
    /// This determines how much diagnostic output evaluation routines produce.
    pub fn set_verbosity_level(&mut self, level: VerbosityLevel) {
        self.verbosity_level = level;
    }

    /// Current verbosity level
    pub fn verbosity_level(&self) -> VerbosityLevel {
        self.verbosity_level
    }

    /// The parameter list these options were created from, if any
    pub fn parameter_list(&self) -> Option<&ParameterList> {
        self.parameter_list.as_ref()
    }
}

impl TryFrom<ParameterList> for EvaluationOptions {
    type Error = Error;

    fn try_from(parameters: ParameterList) -> Result<Self> {
        Self::from_parameters(parameters)
    }
}
