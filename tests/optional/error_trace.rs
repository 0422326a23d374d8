use traced_result::Optional ;

const ERROR_MSG_1: &str = "this is an error message" ;
const ERROR_MSG_2: &str = "another annotation" ;

fn traced_error() -> Optional<u32> {
	let mut optional = Optional::error( ERROR_MSG_1 );
	optional.trace( ERROR_MSG_2 );
	optional
}

#[test]
fn optional_error_trace_str() {
	let rendered = traced_error().to_string();
	assert!( !rendered.ends_with( ERROR_MSG_1 ));
	assert_annotated!( rendered, ERROR_MSG_2 );
	assert_in_order!( rendered, ERROR_MSG_1, ERROR_MSG_2 );
}

#[test]
fn optional_error_trace_has_error() {
	let optional = traced_error();
	assert!( optional.has_error() );
	assert!( !optional.has_value() );
}

#[test]
#[should_panic( expected = "Bad Access" )]
fn optional_error_trace_get_value() {
	let _ = traced_error().get_value();
}

#[test]
fn optional_error_trace_get_error() {
	let optional = traced_error();
	let rendered = optional.get_error().render();
	assert!( !rendered.ends_with( ERROR_MSG_1 ));
	assert_annotated!( rendered, ERROR_MSG_2 );
	assert_in_order!( rendered, ERROR_MSG_1, ERROR_MSG_2 );
	assert_eq!( optional.get_error().depth(), 2 );
}

#[test]
fn optional_error_trace_returns_self() {
	let mut optional: Optional<u32> = Optional::error( ERROR_MSG_1 );
	let returned = optional.trace( ERROR_MSG_2 ) as *const Optional<u32> ;
	assert!( std::ptr::eq( returned, &optional ));
}

#[test]
fn optional_error_trace_records_caller() {
	let mut optional: Optional<u32> = Optional::error( ERROR_MSG_1 );
	let line = line!() + 1 ;
	optional.trace( ERROR_MSG_2 );
	let site = optional.get_error().latest().site().expect( "latest entry is a frame" );
	assert_eq!( site.line(), line );
	assert_eq!( site.file(), file!() );
}
