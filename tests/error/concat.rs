use traced_result::{ Error, TraceEntry, SEPARATOR_TEXT };

#[test]
fn error_concat() {

	let error_msg_1 = "first error" ;
	let error_1 = Error::new( error_msg_1 );

	let error_msg_2 = "second error" ;
	let error_2 = Error::new( error_msg_2 );

	let concat_error = error_1.concat( &error_2 );

	assert_in_order!( concat_error.render(), error_msg_1, SEPARATOR_TEXT, error_msg_2 );
	assert_annotated!( concat_error.render(), error_msg_2 );

}

#[test]
fn error_concat_keeps_both_traces() {

	let mut error_1 = Error::new( "write failed" );
	error_1.trace( "while saving" );
	let mut error_2 = Error::new( "rollback failed" );
	error_2.trace( "while recovering" );

	let concat_error = error_1.concat( &error_2 );

	assert_eq!( concat_error.depth(), error_1.depth() + 1 + error_2.depth() );
	let expected = error_1.lines().into_iter()
		.chain( std::iter::once( SEPARATOR_TEXT.to_string() ))
		.chain( error_2.lines() )
		.collect::<Vec<_>>();
	assert_eq!( concat_error.lines(), expected );

}

#[test]
fn error_concat_leaves_operands_untouched() {

	let error_1 = Error::new( "first error" );
	let error_2 = Error::new( "second error" );
	let ( before_1, before_2 ) = ( error_1.clone(), error_2.clone() );

	let _ = error_1.concat( &error_2 );

	assert_eq!( error_1, before_1 );
	assert_eq!( error_2, before_2 );

}

#[test]
fn error_concat_separator_entry() {

	let concat_error = Error::new( "first error" ).concat( &Error::new( "second error" ));

	let separators = concat_error.entries().into_iter()
		.filter(| entry | matches!( entry, TraceEntry::Separator ))
		.count();
	assert_eq!( separators, 1 );

}

#[test]
fn error_concat_then_trace() {

	let mut concat_error = Error::new( "first error" ).concat( &Error::new( "second error" ));
	concat_error.trace( "while handling both" );

	assert_in_order!( concat_error.render(), "first error", SEPARATOR_TEXT, "second error", "while handling both" );

}
