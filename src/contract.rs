use thiserror::Error ;



/// Misuse of this library, as opposed to a domain failure.
///
/// Domain failures are [`Error`]( crate::Error ) values returned through
/// [`Result`]( crate::Result ) and [`Optional`]( crate::Optional ). A
/// `ContractViolation` means the calling code has a bug: it read a payload
/// that is not there, built a failure out of something holding no error, or
/// captured a call site that could not be identified.
///
/// The panicking API (`get_value`, `get_error`, `trace`, `failure`, ...) reports
/// these by panicking with the variant's message. The `try_*` accessors and
/// [`ErrorSource::into_error`]( crate::ErrorSource::into_error ) return them
/// as values instead.
#[derive( Error, Debug, Clone, PartialEq, Eq )]
pub enum ContractViolation {
	/// An accessor or `trace` was used in a state that does not carry what it needs.
	#[error( "Bad Access: `{operation}` called while holding {held}" )]
	BadAccess { operation: &'static str, held: &'static str },
	/// A failure was built from a source that contains no error to adopt.
	#[error( "Invalid Construction: cannot build an error from {0}" )]
	InvalidConstruction( &'static str ),
	/// The location of the calling code could not be determined.
	#[error( "Unknown Call Site: {0}" )]
	UnknownCallSite( String ),
}

impl ContractViolation {

	/// Logs the violation and panics with its message at the caller's location.
	#[track_caller]
	pub(crate) fn raise( self ) -> ! {
		let location = std::panic::Location::caller();
		tracing::error!( violation = %self, at = %location, "contract violation" );
		panic!( "{}", self )
	}

}
