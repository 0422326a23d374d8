//! The trace-accumulating error type.
//!
//! An [`Error`] is created where a failure happens and records that call site.
//! Every frame that passes the failure on appends its own call site with
//! [`Error::trace`] (or the [`trace!`]( crate::trace! ) macro), so the rendered
//! error reads from the original failure outward:
//!
//! ```text
//! src/db.rs:query():41 -> db timeout
//! src/db.rs:query_with_retry():77 -> retry 1 failed
//! src/db.rs:query_with_retry():77 -> retry 2 failed
//! ```

use std::fmt ;
use itertools::Itertools ;
use nonempty_collections::NEVec ;

use crate::{ Annotation, CallSite, Trace };



/// Rendered in place of a [`TraceEntry::Separator`].
pub const SEPARATOR_TEXT: &str = "encountered another error while handling the previous error" ;

/// Prefix of each continuation line of a foreign failure dump.
pub(crate) const CONTINUATION_INDENT: &str = "    " ;

/// One entry of an [`Error`]'s trace.
#[derive( Debug, Clone, PartialEq, Eq )]
pub enum TraceEntry {
	/// A recorded call site and what was attached to it.
	Frame { site: CallSite, annotation: Annotation },
	/// Marks where a second error's trace begins, see [`Error::concat`].
	Separator,
}

impl TraceEntry {

	/// The call site of a frame; `None` for the separator.
	pub fn site( &self ) -> Option<&CallSite> {
		match self {
			Self::Frame { site, .. } => Some( site ),
			Self::Separator => None,
		}
	}

	/// The annotation of a frame; `None` for the separator.
	pub fn annotation( &self ) -> Option<&Annotation> {
		match self {
			Self::Frame { annotation, .. } => Some( annotation ),
			Self::Separator => None,
		}
	}

}

impl fmt::Display for TraceEntry {
	fn fmt( &self, f: &mut fmt::Formatter<'_> ) -> fmt::Result {
		match self {
			Self::Frame { site, annotation } => write!( f, "{}{}", site, annotation ),
			Self::Separator => f.write_str( SEPARATOR_TEXT ),
		}
	}
}

/// A failure together with the call sites it has passed through.
///
/// The trace is never empty: construction records the caller as the first
/// entry. Entries can only be appended, by [`trace`]( Self::trace ); there is
/// no way to remove or reorder them. Appending needs `&mut self`, so one error
/// cannot be traced from two places at once; [`Clone`] it to give each its own
/// copy.
#[derive( Debug, Clone, PartialEq, Eq )]
pub struct Error {
	entries: NEVec<TraceEntry>,
}

impl Error {

	/// Creates an error whose first entry is the location of the calling code.
	///
	/// The function name is not available this way; use [`error!`]( crate::error! )
	/// to record it too.
	#[track_caller]
	pub fn new( annotation: impl Into<Annotation> ) -> Self {
		Self::at( CallSite::caller(), annotation )
	}

	/// Creates an error whose first entry is `site`.
	pub fn at( site: CallSite, annotation: impl Into<Annotation> ) -> Self {
		tracing::trace!( site = %site, "error raised" );
		Self { entries: NEVec::new( TraceEntry::Frame { site, annotation: annotation.into() }) }
	}

	/// Appends the location of the calling code, then returns `self` for chaining.
	#[track_caller]
	pub fn trace( &mut self, annotation: impl Into<Annotation> ) -> &mut Self {
		self.trace_at( CallSite::caller(), annotation.into() )
	}

	/// Like [`trace`]( Self::trace ) but moves the error through, for
	/// `return Err( error.traced( "..." ))` style propagation.
	#[track_caller]
	pub fn traced( mut self, annotation: impl Into<Annotation> ) -> Self {
		self.trace_at( CallSite::caller(), annotation.into() );
		self
	}

	/// A new error holding this trace, a separator, then `other`'s trace.
	///
	/// For when handling one failure runs into a second, unrelated one and
	/// neither history should be lost.
	pub fn concat( &self, other: &Error ) -> Error {
		tracing::trace!( first = self.depth(), second = other.depth(), "errors concatenated" );
		let mut entries = self.entries.clone();
		entries.push( TraceEntry::Separator );
		for entry in &other.entries { entries.push( entry.clone() ) }
		Error { entries }
	}

	/// The whole trace, one line per entry, oldest first.
	pub fn render( &self ) -> String { self.to_string() }

	/// Every line [`render`]( Self::render ) produces, in order.
	pub fn lines( &self ) -> Vec<String> {
		self.iter()
			.flat_map(| entry | entry.to_string().lines().map( String::from ).collect::<Vec<_>>() )
			.collect()
	}

	#[inline] pub fn entries( &self ) -> &NEVec<TraceEntry> { &self.entries }

	/// Number of entries, separators included. Never zero.
	#[inline] pub fn depth( &self ) -> usize { self.iter().count() }

	/// The entry recorded where the failure was raised.
	#[inline] pub fn root( &self ) -> &TraceEntry { self.entries.first() }

	/// The most recently appended entry.
	#[inline] pub fn latest( &self ) -> &TraceEntry { self.entries.last() }

	fn iter( &self ) -> impl Iterator<Item = &TraceEntry> { ( &self.entries ).into_iter() }

	pub(crate) fn root_message( &self ) -> Option<&str> {
		match self.root().annotation() {
			Some( Annotation::Text( text )) => Some( text ),
			Some( Annotation::Foreign( failure )) => Some( failure.message() ),
			_ => None,
		}
	}

}

impl Trace for Error {
	fn trace_at( &mut self, site: CallSite, annotation: Annotation ) -> &mut Self {
		tracing::trace!( site = %site, depth = self.depth(), "error traced" );
		self.entries.push( TraceEntry::Frame { site, annotation });
		self
	}
}

impl fmt::Display for Error {
	fn fmt( &self, f: &mut fmt::Formatter<'_> ) -> fmt::Result {
		write!( f, "{}", self.iter().join( "\n" ))
	}
}

impl std::error::Error for Error {}
