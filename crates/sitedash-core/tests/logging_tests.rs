use rstest::rstest;
use sitedash_core::CoreError;
use sitedash_core::logging::{build_filter, init, is_initialized};

#[rstest]
#[case("info")]
#[case("sitedash_forms=trace,warn")]
fn test_build_filter_accepts_directives(#[case] directive: &str) {
	assert!(build_filter(directive).is_ok());
}

#[rstest]
fn test_build_filter_rejects_bad_level() {
	let err = build_filter("sitedash=loudest").unwrap_err();
	assert!(matches!(err, CoreError::InvalidLogFilter { .. }));
	assert!(err.to_string().contains("sitedash=loudest"));
}

#[rstest]
fn test_init_is_idempotent() {
	init("debug").unwrap();
	assert!(is_initialized());
	init("debug").unwrap();
}
