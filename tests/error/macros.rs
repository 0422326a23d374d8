use traced_result::{ error, trace, Annotation, Optional };

#[test]
fn error_macro_without_annotation() {

	let error = error!();

	let site = error.root().site().expect( "root entry is a frame" );
	assert_eq!( site.function(), Some( "error_macro_without_annotation" ));
	assert_eq!( site.file(), file!() );
	assert_eq!( error.root().annotation(), Some( &Annotation::None ));
	assert!( error.render().ends_with( &format!( ":error_macro_without_annotation():{}", site.line() )));

}

#[test]
fn error_macro_formats_annotation() {

	let code = 7 ;
	let error = error!( "exit code {}", code );

	assert_annotated!( error.render(), "exit code 7" );
	assert!( error.render().contains( ":error_macro_formats_annotation():" ));

}

#[test]
fn trace_macro_records_function() {

	fn save() -> traced_result::Error {
		let mut error = error!( "disk full" );
		trace!( error, "while saving {}", "notes.txt" );
		trace!( error );
		error
	}

	let error = save();
	assert_eq!( error.depth(), 3 );
	assert!( error.entries().into_iter().all(| entry | entry.site().and_then(| site | site.function() ) == Some( "save" )));
	assert_in_order!( error.render(), ":save():", "disk full", ":save():", "while saving notes.txt", ":save():" );

}

#[test]
fn trace_macro_in_closure_records_enclosing_function() {

	let mut error = error!( "root" );
	let mut annotate = | note: &str | { trace!( error, "{}", note ); };
	annotate( "from closure" );

	let site = error.latest().site().expect( "latest entry is a frame" );
	assert_eq!( site.function(), Some( "trace_macro_in_closure_records_enclosing_function" ));

}

#[test]
fn trace_macro_on_optional() {

	let mut optional: Optional<u32> = Optional::error( "lookup failed" );
	trace!( optional, "while resolving id {}", 12 );

	assert_annotated!( optional.to_string(), "while resolving id 12" );
	assert!( optional.to_string().contains( ":trace_macro_on_optional():" ));

}

#[test]
#[should_panic( expected = "Bad Access" )]
fn trace_macro_on_value_optional() {
	let mut optional = Optional::value( 384 );
	trace!( optional, "an annotation" );
}
