use traced_result::{ ContractViolation, Result, Success };

#[test]
fn result_success_str() {
	assert_eq!( Result::success().to_string(), "no error" );
}

#[test]
fn result_success_is_success() {
	let result = Result::success();
	assert!( result.is_success() );
	assert!( !result.is_failure() );
}

#[test]
fn result_success_get() {
	assert_eq!( Result::success().get(), Ok( &Success ));
}

#[test]
#[should_panic( expected = "Bad Access" )]
fn result_success_get_error() {
	let _ = Result::success().get_error();
}

#[test]
fn result_success_try_get_error() {
	match Result::success().try_get_error() {
		Err( ContractViolation::BadAccess { operation: "get_error", .. }) => {}
		value => panic!( "Expected BadAccess, found: {:#?}", value ),
	}
}

#[test]
#[should_panic( expected = "Bad Access" )]
fn result_success_trace() {
	let mut result = Result::success();
	result.trace( "nothing to annotate" );
}

#[test]
#[should_panic( expected = "Bad Access" )]
fn result_success_into_error() {
	let _ = Result::success().into_error();
}
