//! Explicit success/failure values whose errors carry the path they took.
//!
//! Instead of unwinding, fallible functions return a [`Result`] (success or
//! failure, no payload) or an [`Optional<T>`] (a value or a failure). A failure
//! is an [`Error`]: not a single throw-site location but a trace that starts
//! where the failure happened and grows by one entry every time a caller
//! passes it on with `trace`.
//!
//! # Core Concepts
//!
//! - [`Error`]: an append-only, never-empty list of [`TraceEntry`] values. Each
//! 	entry records a [`CallSite`] and an optional [`Annotation`]: a message, or
//! 	the type, message and sub-trace of a failure replicated from elsewhere.
//!
//! - [`Optional<T>`]: `Value( T )` or `Error( Error )`. Which one is decided at
//! 	construction and never changes.
//!
//! - [`Result`]: `Optional<Success>`, with [`Result::success`] and
//! 	[`Result::failure`] as the factories.
//!
//! - [`ErrorSource`]: what failure factories accept. Text raises a new error;
//! 	an [`Error`], a failed [`Result`] or an errored [`Optional`] is adopted
//! 	with its trace intact.
//!
//! - [`ContractViolation`]: misuse of this crate (reading a payload that isn't
//! 	there, building a failure from something holding no error). These are
//! 	bugs in the calling code and panic; they are never turned into an [`Error`].
//!
//! # Capturing Call Sites
//!
//! Methods such as [`Error::new`] and [`Optional::trace`] are `#[track_caller]`:
//! they record the file and line of the code calling them. The [`error!`] and
//! [`trace!`] macros additionally record the enclosing function.
//!
//! # Example
//!
//! ```
//! use traced_result::{ error, trace, Optional, Result };
//!
//! fn query( attempt: u32 ) -> Optional<String> {
//! 	Optional::error( error!( "db timeout on attempt {}", attempt ))
//! }
//!
//! fn query_with_retry() -> Optional<String> {
//! 	let mut reply = query( 0 );
//! 	for attempt in 1..=2 {
//! 		if reply.has_value() { break }
//! 		trace!( reply, "retry {} failed", attempt );
//! 	}
//! 	reply
//! }
//!
//! fn refresh() -> Result {
//! 	let reply = query_with_retry();
//! 	match reply.has_error() {
//! 		// Adopts the whole trace.
//! 		true => Result::failure( reply ),
//! 		false => Result::success(),
//! 	}
//! }
//!
//! let result = refresh();
//! assert!( result.is_failure() );
//!
//! let rendered = result.get_error().render();
//! assert_eq!( rendered.lines().count(), 3 );
//! assert!( rendered.contains( ":query():" ));
//! assert!( rendered.contains( "db timeout on attempt 0" ));
//! assert!( rendered.ends_with( " -> retry 2 failed" ));
//! ```
//!
//! # Handling One Failure Runs Into Another
//!
//! [`Error::concat`] keeps both histories, separated by a marker entry:
//!
//! ```
//! use traced_result::{ Error, SEPARATOR_TEXT };
//!
//! let write_failed = Error::new( "write failed" );
//! let rollback_failed = Error::new( "rollback failed" );
//!
//! let both = write_failed.concat( &rollback_failed );
//! let rendered = both.render();
//! let write = rendered.find( "write failed" ).unwrap();
//! let separator = rendered.find( SEPARATOR_TEXT ).unwrap();
//! let rollback = rendered.find( "rollback failed" ).unwrap();
//! assert!( write < separator && separator < rollback );
//! ```
//!
//! # Foreign Failures
//!
//! The crate never catches anything itself. When the caller decides a failure
//! from elsewhere belongs in a trace, [`Annotation::foreign`] replicates it:
//!
//! ```
//! use traced_result::{ Annotation, Error };
//!
//! let io = std::io::Error::new( std::io::ErrorKind::NotFound, "settings.toml" );
//! let error = Error::new( Annotation::foreign( &io ));
//! assert!( error.render().ends_with( "Error: settings.toml" ));
//! ```
//!
//! # Logging
//!
//! The crate emits [`tracing`](https://docs.rs/tracing) events: `trace` level
//! when errors are raised, traced or concatenated, and `error` level right
//! before a [`ContractViolation`] panics. Install a subscriber to see them.

mod annotation ;
mod call_site ;
mod contract ;
mod error ;
mod error_source ;
mod optional ;
mod trace ;

#[doc( no_inline )]
pub use nonempty_collections::NEVec ;

pub use annotation::{ Annotation, ForeignFailure };
pub use call_site::CallSite ;
pub use contract::ContractViolation ;
pub use error::{ Error, TraceEntry, SEPARATOR_TEXT };
pub use error_source::ErrorSource ;
pub use optional::{ Optional, Result, Success };
pub use trace::Trace ;
