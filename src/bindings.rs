//! Bindings for C

#![allow(missing_docs)]
#![allow(clippy::missing_safety_doc)]

/// Null pointers are accepted everywhere: freeing or changing them does nothing,
/// setters report failure, and reads give the values of default options.
pub mod evaluation_options {
    use crate::evaluation_options::{EvaluationMode, EvaluationOptions};
    use crate::verbosity::VerbosityLevel;
    use libc::c_int;

    #[no_mangle]
    pub extern "C" fn evaluation_options_new() -> *mut EvaluationOptions {
        Box::into_raw(Box::new(EvaluationOptions::new()))
    }

    #[no_mangle]
    pub unsafe extern "C" fn evaluation_options_free(options: *mut EvaluationOptions) {
        if !options.is_null() {
            unsafe { drop(Box::from_raw(options)) }
        }
    }

    unsafe fn read<R>(
        options: *const EvaluationOptions,
        f: impl FnOnce(&EvaluationOptions) -> R,
    ) -> R {
        match options.as_ref() {
            Some(options) => f(options),
            None => f(&EvaluationOptions::default()),
        }
    }

    #[no_mangle]
    pub unsafe extern "C" fn evaluation_options_switch_to_dense_mode(
        options: *mut EvaluationOptions,
    ) {
        if let Some(options) = options.as_mut() {
            options.switch_to_dense_mode();
        }
    }

    #[no_mangle]
    pub unsafe extern "C" fn evaluation_options_switch_to_hmat_mode(
        options: *mut EvaluationOptions,
    ) {
        if let Some(options) = options.as_mut() {
            options.switch_to_hmat_mode();
        }
    }

    #[no_mangle]
    pub unsafe extern "C" fn evaluation_options_evaluation_mode(
        options: *const EvaluationOptions,
    ) -> EvaluationMode {
        read(options, EvaluationOptions::evaluation_mode)
    }

    /// Returns false and leaves the options unchanged if `max_thread_count` is invalid
    #[no_mangle]
    pub unsafe extern "C" fn evaluation_options_set_max_thread_count(
        options: *mut EvaluationOptions,
        max_thread_count: c_int,
    ) -> bool {
        options
            .as_mut()
            .is_some_and(|options| options.set_max_thread_count(max_thread_count).is_ok())
    }

    #[no_mangle]
    pub unsafe extern "C" fn evaluation_options_max_thread_count(
        options: *const EvaluationOptions,
    ) -> c_int {
        read(options, |options| {
            options
                .parallelization_options()
                .max_thread_count()
                .as_raw()
        })
    }

    /// Returns false and leaves the options unchanged if `level` is not -5, 0 or 5
    #[no_mangle]
    pub unsafe extern "C" fn evaluation_options_set_verbosity_level(
        options: *mut EvaluationOptions,
        level: c_int,
    ) -> bool {
        match (options.as_mut(), VerbosityLevel::try_from(level)) {
            (Some(options), Ok(level)) => {
                options.set_verbosity_level(level);
                true
            }
            _ => false,
        }
    }

    #[no_mangle]
    pub unsafe extern "C" fn evaluation_options_verbosity_level(
        options: *const EvaluationOptions,
    ) -> c_int {
        read(options, |options| options.verbosity_level().into())
    }

}
