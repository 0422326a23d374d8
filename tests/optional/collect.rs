use traced_result::{ Optional, SEPARATOR_TEXT };

#[test]
fn collect_all_values() {
	let collected: Optional<Vec<u32>> = ( 1..=3 ).map( Optional::value ).collect();
	assert_eq!( collected.into_value(), vec![ 1, 2, 3 ]);
}

#[test]
fn collect_empty() {
	let collected: Optional<Vec<u32>> = std::iter::empty::<Optional<u32>>().collect();
	assert_eq!( collected.into_value(), Vec::<u32>::new() );
}

#[test]
fn collect_single_error() {
	let collected: Optional<Vec<u32>> = vec![
		Optional::value( 1 ),
		Optional::error( "second failed" ),
		Optional::value( 3 ),
	].into_iter().collect();

	let rendered = collected.get_error().render();
	assert_annotated!( rendered, "second failed" );
	assert!( !rendered.contains( SEPARATOR_TEXT ));
}

#[test]
fn collect_joins_errors_in_order() {
	let collected: Optional<Vec<u32>> = vec![
		Optional::error( "first failed" ),
		Optional::value( 2 ),
		Optional::error( "third failed" ),
		Optional::error( "fourth failed" ),
	].into_iter().collect();

	let rendered = collected.get_error().render();
	assert_in_order!( rendered, "first failed", SEPARATOR_TEXT, "third failed", SEPARATOR_TEXT, "fourth failed" );
	assert_eq!( collected.get_error().depth(), 5 );
}
