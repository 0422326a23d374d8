//! Value-or-error and success-or-error wrappers.
//!
//! [`Optional<T>`] holds either a value or an [`Error`]; [`Result`] is the same
//! type with the unit payload [`Success`]. Which variant an instance holds is
//! decided at construction and never changes. The only state-dependent
//! mutation is [`trace`]( Optional::trace ), which needs an error to append to.

use std::fmt ;
use itertools::{ Either, Itertools };

use crate::{ Annotation, CallSite, ContractViolation, Error, ErrorSource, Trace };



/// Either a value of type `T` or an [`Error`], never both and never neither.
///
/// Reading the side that is not held is a bug in the calling code: the
/// panicking accessors report it as [`ContractViolation::BadAccess`], and the
/// `try_*` accessors return it.
#[must_use = "this `Optional` may hold an error, which should be handled"]
#[derive( Debug, Clone, PartialEq, Eq )]
pub enum Optional<T> {
	Value( T ),
	Error( Error ),
}

/// Success or an [`Error`], with no payload on success.
pub type Result = Optional<Success> ;

/// The payload of a successful [`Result`].
#[derive( Debug, Clone, Copy, PartialEq, Eq, Hash, Default )]
pub struct Success ;

impl fmt::Display for Success {
	fn fmt( &self, f: &mut fmt::Formatter<'_> ) -> fmt::Result { f.write_str( "no error" ) }
}

impl<T> Optional<T> {

	/// An instance holding `value`.
	pub fn value( value: T ) -> Self { Self::Value( value ) }

	/// An instance holding the error `source` provides.
	///
	/// Text becomes a new [`Error`] located at the calling code; an [`Error`],
	/// failed [`Result`] or errored [`Optional`] has its error adopted verbatim.
	///
	/// Text is located through `#[track_caller]`, which knows the file and line
	/// but not the function, so the entry renders its function as `?`. Pass an
	/// [`error!`]( crate::error! ) instead to record the enclosing function too.
	///
	/// # Panics
	/// With [`ContractViolation::InvalidConstruction`] if `source` holds no error:
	/// `None`, or a wrapper holding a value.
	#[track_caller]
	pub fn error( source: impl Into<ErrorSource> ) -> Self {
		match source.into().into_error() {
			Ok( error ) => Self::Error( error ),
			Err( violation ) => violation.raise(),
		}
	}

	pub fn has_value( &self ) -> bool { matches!( self, Self::Value( _ )) }

	pub fn has_error( &self ) -> bool { matches!( self, Self::Error( _ )) }

	/// The held value.
	///
	/// # Panics
	/// With [`ContractViolation::BadAccess`] when an error is held.
	#[track_caller]
	pub fn get_value( &self ) -> &T {
		match self.try_get_value() {
			Ok( value ) => value,
			Err( violation ) => violation.raise(),
		}
	}

	/// The held error.
	///
	/// # Panics
	/// With [`ContractViolation::BadAccess`] when a value is held.
	#[track_caller]
	pub fn get_error( &self ) -> &Error {
		match self.try_get_error() {
			Ok( error ) => error,
			Err( violation ) => violation.raise(),
		}
	}

	/// # Errors
	/// [`ContractViolation::BadAccess`] when an error is held.
	pub fn try_get_value( &self ) -> std::result::Result<&T, ContractViolation> {
		match self {
			Self::Value( value ) => Ok( value ),
			Self::Error( _ ) => Err( bad_access( "get_value", "an error" )),
		}
	}

	/// # Errors
	/// [`ContractViolation::BadAccess`] when a value is held.
	pub fn try_get_error( &self ) -> std::result::Result<&Error, ContractViolation> {
		match self {
			Self::Value( _ ) => Err( bad_access( "get_error", "a value" )),
			Self::Error( error ) => Ok( error ),
		}
	}

	/// Whichever side is held.
	pub fn get( &self ) -> std::result::Result<&T, &Error> {
		match self {
			Self::Value( value ) => Ok( value ),
			Self::Error( error ) => Err( error ),
		}
	}

	/// # Panics
	/// With [`ContractViolation::BadAccess`] when an error is held.
	#[track_caller]
	pub fn into_value( self ) -> T {
		match self {
			Self::Value( value ) => value,
			Self::Error( _ ) => bad_access( "into_value", "an error" ).raise(),
		}
	}

	/// # Panics
	/// With [`ContractViolation::BadAccess`] when a value is held.
	#[track_caller]
	pub fn into_error( self ) -> Error {
		match self {
			Self::Value( _ ) => bad_access( "into_error", "a value" ).raise(),
			Self::Error( error ) => error,
		}
	}

	/// The value, discarding an error.
	pub fn ok( self ) -> Option<T> {
		match self {
			Self::Value( value ) => Some( value ),
			Self::Error( _ ) => None,
		}
	}

	/// The error, discarding a value.
	pub fn ok_error( self ) -> Option<Error> {
		match self {
			Self::Value( _ ) => None,
			Self::Error( error ) => Some( error ),
		}
	}

	/// The std form, so the `?` operator can propagate the error.
	pub fn into_result( self ) -> std::result::Result<T, Error> { self.into() }

	/// Transforms a held value, passing an error through untouched.
	pub fn map<U>( self, map: impl FnOnce( T ) -> U ) -> Optional<U> {
		match self {
			Self::Value( value ) => Optional::Value( map( value )),
			Self::Error( error ) => Optional::Error( error ),
		}
	}

	/// Appends the location of the calling code to the held error, then returns `self` for chaining.
	///
	/// # Panics
	/// With [`ContractViolation::BadAccess`] when a value is held: there is no
	/// error to annotate.
	#[track_caller]
	pub fn trace( &mut self, annotation: impl Into<Annotation> ) -> &mut Self {
		self.trace_at( CallSite::caller(), annotation.into() )
	}

	/// Like [`trace`]( Self::trace ) but moves `self` through.
	///
	/// # Panics
	/// With [`ContractViolation::BadAccess`] when a value is held.
	#[track_caller]
	pub fn traced( mut self, annotation: impl Into<Annotation> ) -> Self {
		self.trace_at( CallSite::caller(), annotation.into() );
		self
	}

}

impl Optional<Success> {

	/// A successful result.
	pub fn success() -> Self { Self::Value( Success ) }

	/// A failed result holding the error `source` provides.
	///
	/// Accepts the same sources as [`Optional::error`]. As there, text renders
	/// its function as `?`; [`error!`]( crate::error! ) and
	/// [`trace!`]( crate::trace! ) record the enclosing function.
	///
	/// An errored [`Optional`] built inline needs its payload type spelled out,
	/// since nothing else pins it down:
	///
	/// ```
	/// use traced_result::{ error, Optional, Result, Success };
	///
	/// let located = Result::failure( "disk full" );
	/// assert!( located.get_error().render().contains( ":?():" ));
	///
	/// let adopted = Result::failure( Optional::<Success>::error( "disk full" ));
	/// assert!( adopted.get_error().render().ends_with( " -> disk full" ));
	///
	/// fn flush() -> Result { Result::failure( error!( "disk full" )) }
	/// assert!( flush().get_error().render().contains( ":flush():" ));
	/// ```
	///
	/// # Panics
	/// With [`ContractViolation::InvalidConstruction`] if `source` holds no error.
	#[track_caller]
	pub fn failure( source: impl Into<ErrorSource> ) -> Self { Self::error( source ) }

	pub fn is_success( &self ) -> bool { self.has_value() }

	pub fn is_failure( &self ) -> bool { self.has_error() }

}

impl<T> Trace for Optional<T> {
	#[track_caller]
	fn trace_at( &mut self, site: CallSite, annotation: Annotation ) -> &mut Self {
		match self {
			Self::Value( _ ) => bad_access( "trace", "a value" ).raise(),
			Self::Error( error ) => { error.trace_at( site, annotation ); }
		}
		self
	}
}

fn bad_access( operation: &'static str, held: &'static str ) -> ContractViolation {
	ContractViolation::BadAccess { operation, held }
}

impl<T: fmt::Display> fmt::Display for Optional<T> {
	fn fmt( &self, f: &mut fmt::Formatter<'_> ) -> fmt::Result {
		match self {
			Self::Value( value ) => fmt::Display::fmt( value, f ),
			Self::Error( error ) => fmt::Display::fmt( error, f ),
		}
	}
}

impl<T> From<Error> for Optional<T> {
	fn from( error: Error ) -> Self { Self::Error( error ) }
}

impl<T> From<std::result::Result<T, Error>> for Optional<T> {
	fn from( result: std::result::Result<T, Error> ) -> Self {
		match result {
			Ok( value ) => Self::Value( value ),
			Err( error ) => Self::Error( error ),
		}
	}
}

impl<T> From<Optional<T>> for std::result::Result<T, Error> {
	fn from( optional: Optional<T> ) -> Self {
		match optional {
			Optional::Value( value ) => Ok( value ),
			Optional::Error( error ) => Err( error ),
		}
	}
}

/// Collects every value, or every error joined with [`Error::concat`] in iteration order.
impl<T> FromIterator<Optional<T>> for Optional<Vec<T>> {
	fn from_iter<I: IntoIterator<Item = Optional<T>>>( iter: I ) -> Self {
		let ( values, errors ): ( Vec<T>, Vec<Error> ) = iter.into_iter().partition_map(| item | match item {
			Optional::Value( value ) => Either::Left( value ),
			Optional::Error( error ) => Either::Right( error ),
		});
		match errors.into_iter().reduce(| merged, error | merged.concat( &error )) {
			None => Optional::Value( values ),
			Some( merged ) => Optional::Error( merged ),
		}
	}
}
