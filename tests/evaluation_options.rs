use bempp_options::parameters::{MAX_THREAD_COUNT_KEY, VERBOSITY_LEVEL_KEY};
use bempp_options::{
    Error, EvaluationMode, EvaluationOptions, ParameterList, ThreadCount, VerbosityLevel,
};
use paste::paste;
use serde_json::json;
use std::num::NonZeroUsize;

fn assert_same_settings(a: &EvaluationOptions, b: &EvaluationOptions) {
    assert_eq!(a.evaluation_mode(), b.evaluation_mode());
    assert_eq!(a.parallelization_options(), b.parallelization_options());
    assert_eq!(a.verbosity_level(), b.verbosity_level());
}

macro_rules! test_thread_count {
    ($($n:literal),+) => {
        $(
            paste! {
                #[test]
                #[allow(deprecated)]
                fn [<test_max_thread_count_ $n>]() {
                    let mut options = EvaluationOptions::new();
                    options.set_max_thread_count($n).unwrap();
                    assert_eq!(
                        options.parallelization_options().max_thread_count(),
                        ThreadCount::Fixed(NonZeroUsize::new($n).unwrap())
                    );

                    let mut alias = EvaluationOptions::new();
                    alias.switch_to_tbb($n).unwrap();
                    assert_eq!(alias, options);

                    options.set_max_thread_count(EvaluationOptions::AUTO).unwrap();
                    assert_eq!(
                        options.parallelization_options().max_thread_count(),
                        ThreadCount::Automatic
                    );
                }
            }
        )*
    };
}

test_thread_count!(1, 2, 4, 7, 64, 1024);

macro_rules! test_invalid_thread_count {
    ($(($name:ident, $n:expr)),+) => {
        $(
            paste! {
                #[test]
                fn [<test_invalid_max_thread_count_ $name>]() {
                    let mut options = EvaluationOptions::new();
                    options.set_max_thread_count(3).unwrap();
                    options.set_verbosity_level(VerbosityLevel::High);
                    let before = options.clone();

                    assert!(matches!(
                        options.set_max_thread_count($n),
                        Err(Error::InvalidArgument(_))
                    ));
                    assert_eq!(options, before);
                }
            }
        )*
    };
}

test_invalid_thread_count!(
    (zero, 0),
    (minus_two, -2),
    (minus_five, -5),
    (min, i32::MIN)
);

macro_rules! test_verbosity {
    ($($level:ident),+) => {
        $(
            paste! {
                #[test]
                fn [<test_verbosity_ $level:lower>]() {
                    let mut options = EvaluationOptions::new();
                    options.set_verbosity_level(VerbosityLevel::$level);
                    assert_eq!(options.verbosity_level(), VerbosityLevel::$level);
                    assert_eq!(options.evaluation_mode(), EvaluationMode::Dense);
                    assert_eq!(
                        options.parallelization_options().max_thread_count(),
                        ThreadCount::Automatic
                    );
                }
            }
        )*
    };
}

test_verbosity!(Low, Default, High);

#[test]
fn test_set_four_threads_keeps_dense_mode() {
    let mut options = EvaluationOptions::new();
    options.set_max_thread_count(4).unwrap();
    assert_eq!(
        options.parallelization_options().max_thread_count(),
        ThreadCount::Fixed(NonZeroUsize::new(4).unwrap())
    );
    assert_eq!(options.evaluation_mode(), EvaluationMode::Dense);
}

#[test]
fn test_zero_threads_keeps_automatic() {
    let mut options = EvaluationOptions::new();
    assert!(options.set_max_thread_count(0).is_err());
    assert_eq!(
        options.parallelization_options().max_thread_count(),
        ThreadCount::Automatic
    );
}

#[test]
fn test_facets_are_independent() {
    let mut options = EvaluationOptions::new();
    options.switch_to_hmat_mode();
    options.set_max_thread_count(2).unwrap();
    options.set_verbosity_level(VerbosityLevel::Low);
    options.switch_to_dense_mode();

    assert_eq!(options.evaluation_mode(), EvaluationMode::Dense);
    assert_eq!(options.parallelization_options().resolved_thread_count(), 2);
    assert_eq!(options.verbosity_level(), VerbosityLevel::Low);
}

#[test]
fn test_unrecognised_key_does_not_change_settings() {
    let with_extra = ParameterList::from_value(json!({
        "options.assembly.potentialOperatorAssemblyType": "hmat",
        "options.global.maxThreadCount": 3,
        "options.assembly.enableInterpolationForOscillatoryKernels": true,
    }))
    .unwrap();
    let without_extra = ParameterList::from_value(json!({
        "options.assembly.potentialOperatorAssemblyType": "hmat",
        "options.global.maxThreadCount": 3,
    }))
    .unwrap();

    let a = EvaluationOptions::from_parameters(with_extra).unwrap();
    let b = EvaluationOptions::from_parameters(without_extra).unwrap();
    assert_same_settings(&a, &b);
    assert_eq!(
        a.parameter_list()
            .unwrap()
            .get::<bool>("options.assembly.enableInterpolationForOscillatoryKernels"),
        Some(true)
    );
}

#[test]
fn test_only_unrecognised_keys_gives_defaults() {
    let params = ParameterList::from_value(json!({ "options.hmat.eps": 1e-4 })).unwrap();
    let options = EvaluationOptions::from_parameters(params).unwrap();
    assert_same_settings(&options, &EvaluationOptions::default());
}

#[test]
fn test_parameter_list_outlives_source() {
    let options = {
        let mut params = ParameterList::new();
        params.max_thread_count = Some(EvaluationOptions::AUTO);
        params.verbosity_level = Some(VerbosityLevel::High);
        EvaluationOptions::from_parameters(params).unwrap()
    };
    let params = options.parameter_list().unwrap();
    assert_eq!(params.get::<i32>(MAX_THREAD_COUNT_KEY), Some(-1));
    assert_eq!(params.get::<i32>(VERBOSITY_LEVEL_KEY), Some(5));
}

#[test]
fn test_invalid_thread_count_in_parameters() {
    let params = ParameterList::from_value(json!({ "options.global.maxThreadCount": -3 })).unwrap();
    assert!(matches!(
        EvaluationOptions::from_parameters(params),
        Err(Error::InvalidArgument(_))
    ));
}

#[test]
fn test_evaluate_in_pool() {
    let mut options = EvaluationOptions::new();
    options.set_max_thread_count(3).unwrap();
    let threads = options
        .parallelization_options()
        .install(rayon::current_num_threads)
        .unwrap();
    assert_eq!(threads, 3);
}
