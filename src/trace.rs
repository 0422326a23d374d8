use crate::{ Annotation, CallSite };



/// Anything that can have a call site appended to its error trace.
///
/// Implemented by [`Error`]( crate::Error ) and [`Optional`]( crate::Optional )
/// (and so [`Result`]( crate::Result )). This is the seam the [`trace!`]( crate::trace! )
/// macro goes through; the inherent `trace` methods capture the site with
/// `#[track_caller]` instead.
pub trait Trace {
	/// Appends an entry for `site`, then returns `self` for chaining.
	///
	/// # Panics
	/// Implementations that may hold no error panic with
	/// [`ContractViolation::BadAccess`]( crate::ContractViolation::BadAccess ) when they don't.
	fn trace_at( &mut self, site: CallSite, annotation: Annotation ) -> &mut Self ;
}

/// Creates an [`Error`]( crate::Error ) at the current call site, enclosing function included.
///
/// With no arguments the entry records the location only; otherwise the
/// arguments are a `format!` string and its parameters.
///
/// ```
/// use traced_result::error ;
///
/// fn open_db( path: &str ) -> traced_result::Error {
/// 	error!( "cannot open {}", path )
/// }
///
/// let rendered = open_db( "cache.db" ).render();
/// assert!( rendered.contains( ":open_db():" ));
/// assert!( rendered.ends_with( " -> cannot open cache.db" ));
/// ```
#[macro_export]
macro_rules! error {
	() => {
		$crate::Error::at( $crate::call_site!(), $crate::Annotation::None )
	};
	( $( $arg:tt )+ ) => {
		$crate::Error::at( $crate::call_site!(), $crate::Annotation::Text( ::std::format!( $( $arg )+ )))
	};
}

/// Appends the current call site, enclosing function included, to anything implementing [`Trace`].
///
/// Evaluates to the `&mut` reference returned by [`Trace::trace_at`].
///
/// ```
/// use traced_result::{ error, trace, Result };
///
/// fn flush() -> Result { Result::failure( error!( "disk full" )) }
///
/// fn save() -> Result {
/// 	let mut result = flush();
/// 	if result.is_failure() { trace!( result, "while saving" ); }
/// 	result
/// }
///
/// let rendered = save().to_string();
/// assert!( rendered.contains( ":flush():" ));
/// assert!( rendered.contains( ":save():" ));
/// assert!( rendered.ends_with( " -> while saving" ));
/// ```
#[macro_export]
macro_rules! trace {
	( $target:expr ) => {
		$crate::Trace::trace_at( &mut $target, $crate::call_site!(), $crate::Annotation::None )
	};
	( $target:expr, $( $arg:tt )+ ) => {
		$crate::Trace::trace_at( &mut $target, $crate::call_site!(), $crate::Annotation::Text( ::std::format!( $( $arg )+ )))
	};
}
