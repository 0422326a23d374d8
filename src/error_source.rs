use crate::{ ContractViolation, Error, Optional };



/// Everything a failure can be built from.
///
/// Accepted by [`Result::failure`]( crate::Result::failure ) and
/// [`Optional::error`]. Conversions exist from text, an [`Error`], any
/// [`Optional`] or [`Result`]( crate::Result ), and an [`Option`] of any of
/// those, so the factories take them directly.
#[derive( Debug, Clone, PartialEq, Eq )]
pub enum ErrorSource {
	/// An explicitly absent value. Never yields an error.
	Absent,
	/// A message; a new [`Error`] is raised around it.
	Text( String ),
	/// An existing error, adopted as is.
	Error( Error ),
	/// A Result or Optional: its error when it held one, `None` when it held a value.
	Wrapper( Option<Error> ),
}

impl ErrorSource {

	/// The error this source provides.
	///
	/// Text is raised into a new [`Error`] whose first entry is the location of
	/// the calling code. Errors held directly or by a wrapper are adopted with
	/// their trace untouched.
	///
	/// # Errors
	/// [`ContractViolation::InvalidConstruction`] for [`Absent`]( Self::Absent )
	/// and for a wrapper that held a value: there is no error to adopt.
	#[track_caller]
	pub fn into_error( self ) -> std::result::Result<Error, ContractViolation> {
		match self {
			Self::Absent => Err( ContractViolation::InvalidConstruction( "an absent value" )),
			Self::Text( text ) => Ok( Error::new( text )),
			Self::Error( error ) | Self::Wrapper( Some( error )) => Ok( error ),
			Self::Wrapper( None ) => Err( ContractViolation::InvalidConstruction( "a wrapper holding a value" )),
		}
	}

}

impl From<&str> for ErrorSource {
	fn from( text: &str ) -> Self { Self::Text( text.to_string() ) }
}

impl From<String> for ErrorSource {
	fn from( text: String ) -> Self { Self::Text( text ) }
}

impl From<Error> for ErrorSource {
	fn from( error: Error ) -> Self { Self::Error( error ) }
}

impl<T> From<Optional<T>> for ErrorSource {
	fn from( wrapper: Optional<T> ) -> Self { Self::Wrapper( wrapper.ok_error() ) }
}

impl<S: Into<ErrorSource>> From<Option<S>> for ErrorSource {
	fn from( source: Option<S> ) -> Self {
		match source {
			None => Self::Absent,
			Some( source ) => source.into(),
		}
	}
}
