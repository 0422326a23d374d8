use std::fmt ;
use pipe_trait::Pipe ;

use crate::ContractViolation ;



/// Rendered in place of the function name when it was not captured.
pub(crate) const UNKNOWN_FUNCTION: &str = "?" ;

const PROBE_SEGMENT: &str = "::__call_site_probe" ;
const CLOSURE_SEGMENT: &str = "::{{closure}}" ;

/// A source location recorded by a trace entry.
///
/// Rendered as `<file>:<function>():<line>`. Locations captured through
/// [`CallSite::caller`] (and therefore every `#[track_caller]` entry point of
/// this crate) know the file and line but not the enclosing function, which is
/// rendered as `?`. The [`call_site!`]( crate::call_site ) macro, used by
/// [`error!`]( crate::error! ) and [`trace!`]( crate::trace! ), records the
/// function as well.
#[derive( Debug, Clone, Copy, PartialEq, Eq, Hash )]
pub struct CallSite {
	file: &'static str,
	function: Option<&'static str>,
	line: u32,
	column: u32,
}

impl CallSite {

	/// Creates a call site from explicitly supplied parts.
	pub fn new( file: &'static str, function: Option<&'static str>, line: u32, column: u32 ) -> Self {
		Self { file, function, line, column }
	}

	/// The location of the code calling the current `#[track_caller]` chain.
	#[track_caller]
	pub fn caller() -> Self {
		let location = std::panic::Location::caller();
		Self { file: location.file(), function: None, line: location.line(), column: location.column() }
	}

	/// Builds a call site from the type name of a probe function nested inside the caller.
	///
	/// Used by [`call_site!`]( crate::call_site ); not meant to be called directly.
	///
	/// # Panics
	/// With [`ContractViolation::UnknownCallSite`] when the probe path does not
	/// name an enclosing function or the file is empty.
	#[doc( hidden )]
	#[track_caller]
	pub fn from_probe( file: &'static str, probe: &'static str, line: u32, column: u32 ) -> Self {
		match function_from_probe( probe ) {
			Some( function ) if !file.is_empty() => Self { file, function: Some( function ), line, column },
			_ => ContractViolation::UnknownCallSite(
				format!( "cannot resolve the calling function from `{}` in `{}`", probe, file )
			).raise(),
		}
	}

	#[inline] pub fn file( &self ) -> &'static str { self.file }

	/// Name of the enclosing function, if it was captured.
	#[inline] pub fn function( &self ) -> Option<&'static str> { self.function }

	#[inline] pub fn line( &self ) -> u32 { self.line }

	#[inline] pub fn column( &self ) -> u32 { self.column }

}

impl fmt::Display for CallSite {
	fn fmt( &self, f: &mut fmt::Formatter<'_> ) -> fmt::Result {
		write!( f, "{}:{}():{}", self.file, self.function.unwrap_or( UNKNOWN_FUNCTION ), self.line )
	}
}

fn function_from_probe( probe: &'static str ) -> Option<&'static str> {
	probe.strip_suffix( PROBE_SEGMENT )?
		.pipe( strip_closures )
		.rsplit( "::" )
		.next()
		.filter(| name | !name.is_empty() )
}

fn strip_closures( mut path: &str ) -> &str {
	while let Some( outer ) = path.strip_suffix( CLOSURE_SEGMENT ) { path = outer }
	path
}

/// Captures the [`CallSite`] of the code expanding this macro, enclosing function included.
///
/// ```
/// fn load_config() -> traced_result::CallSite { traced_result::call_site!() }
///
/// let site = load_config();
/// assert_eq!( site.function(), Some( "load_config" ));
/// ```
#[macro_export]
macro_rules! call_site {
	() => {{
		fn __call_site_probe() {}
		$crate::CallSite::from_probe(
			::core::file!(),
			::core::any::type_name_of_val( &__call_site_probe ),
			::core::line!(),
			::core::column!(),
		)
	}};
}

#[cfg( test )]
mod tests {

	use super::* ;

	#[test]
	fn probe_in_free_function() {
		assert_eq!( function_from_probe( "my_crate::db::query::__call_site_probe" ), Some( "query" ));
	}

	#[test]
	fn probe_in_closure() {
		assert_eq!(
			function_from_probe( "my_crate::db::query::{{closure}}::{{closure}}::__call_site_probe" ),
			Some( "query" ),
		);
	}

	#[test]
	fn probe_in_method() {
		assert_eq!(
			function_from_probe( "my_crate::db::<impl my_crate::db::Pool>::connect::__call_site_probe" ),
			Some( "connect" ),
		);
	}

	#[test]
	fn probe_without_probe_segment() {
		assert_eq!( function_from_probe( "my_crate::db::query" ), None );
	}

	#[test]
	fn macro_records_enclosing_function() {
		let site = crate::call_site!();
		assert_eq!( site.function(), Some( "macro_records_enclosing_function" ));
		assert_eq!( site.file(), file!() );
		assert!( site.to_string().starts_with( file!() ));
		assert!( site.to_string().contains( ":macro_records_enclosing_function():" ));
	}

	#[test]
	fn caller_has_no_function() {
		let site = CallSite::caller();
		assert_eq!( site.function(), None );
		assert!( site.to_string().contains( ":?():" ));
	}

	#[test]
	#[should_panic( expected = "Unknown Call Site" )]
	fn malformed_probe_is_fatal() {
		let _ = CallSite::from_probe( file!(), "not_a_probe", line!(), column!() );
	}

}
