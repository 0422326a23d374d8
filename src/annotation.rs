use std::fmt ;

use crate::Error ;



/// What a trace entry records next to its location.
#[derive( Debug, Clone, PartialEq, Eq, Default )]
pub enum Annotation {
	/// Location only.
	#[default] None,
	/// A human-readable message.
	Text( String ),
	/// Details replicated from a failure raised outside this crate.
	Foreign( ForeignFailure ),
}

impl Annotation {

	/// Replicates a foreign failure: its type name, message and sub-trace.
	///
	/// This is how callers decide to turn an underlying failure into part of a
	/// trace; the crate never catches one on its own.
	pub fn foreign<E: std::error::Error + 'static>( failure: &E ) -> Self {
		Self::Foreign( ForeignFailure::capture( failure ))
	}

	/// Like [`foreign`]( Self::foreign ), for a failure whose type has been
	/// erased, such as the contents of a `Box<dyn Error>`.
	///
	/// ```
	/// use traced_result::{ Annotation, Error };
	///
	/// let boxed: Box<dyn std::error::Error> = "settings.toml".parse::<u8>().unwrap_err().into();
	/// let error = Error::new( Annotation::foreign_dyn( &*boxed ));
	/// assert!( error.render().ends_with( "invalid digit found in string" ));
	/// ```
	pub fn foreign_dyn( failure: &( dyn std::error::Error + 'static )) -> Self {
		Self::Foreign( ForeignFailure::capture_dyn( failure ))
	}

}

impl From<&str> for Annotation {
	fn from( text: &str ) -> Self { Self::Text( text.to_string() ) }
}

impl From<String> for Annotation {
	fn from( text: String ) -> Self { Self::Text( text ) }
}

impl From<ForeignFailure> for Annotation {
	fn from( failure: ForeignFailure ) -> Self { Self::Foreign( failure ) }
}

/// A failure from outside this crate, flattened into plain text.
///
/// `frames` is the failure's own sub-trace: the rendered lines of an [`Error`]
/// when the failure is one, and the messages of its
/// [`source`]( std::error::Error::source ) chain otherwise.
#[derive( Debug, Clone, PartialEq, Eq )]
pub struct ForeignFailure {
	type_name: String,
	message: String,
	frames: Vec<String>,
}

impl ForeignFailure {

	pub fn new(
		type_name: impl Into<String>,
		message: impl Into<String>,
		frames: impl IntoIterator<Item = impl Into<String>>,
	) -> Self {
		Self {
			type_name: type_name.into(),
			message: message.into(),
			frames: frames.into_iter().map( Into::into ).collect(),
		}
	}

	pub fn capture<E: std::error::Error + 'static>( failure: &E ) -> Self {
		Self::capture_named( std::any::type_name::<E>(), failure )
	}

	/// Captures a type-erased failure. Only a traced [`Error`] is recognised by
	/// type; anything else is named by its trait object type.
	pub fn capture_dyn( failure: &( dyn std::error::Error + 'static )) -> Self {
		let type_name = match failure.is::<Error>() {
			true => std::any::type_name::<Error>(),
			false => std::any::type_name_of_val( failure ),
		};
		Self::capture_named( type_name, failure )
	}

	fn capture_named( type_name: &str, failure: &( dyn std::error::Error + 'static )) -> Self {
		match failure.downcast_ref::<Error>() {
			Some( traced ) => Self::new( type_name, traced.root_message().unwrap_or_default(), traced.lines() ),
			None => Self::new(
				type_name,
				failure.to_string(),
				std::iter::successors( failure.source(), | source | source.source() )
					.map( ToString::to_string ),
			),
		}
	}

	#[inline] pub fn type_name( &self ) -> &str { &self.type_name }

	#[inline] pub fn message( &self ) -> &str { &self.message }

	#[inline] pub fn frames( &self ) -> &[String] { &self.frames }

}

impl fmt::Display for Annotation {
	fn fmt( &self, f: &mut fmt::Formatter<'_> ) -> fmt::Result {
		match self {
			Self::None => Ok(()),
			Self::Text( text ) => write!( f, " -> {}", text ),
			Self::Foreign( failure ) => write!( f, " -> {}", failure ),
		}
	}
}

impl fmt::Display for ForeignFailure {
	fn fmt( &self, f: &mut fmt::Formatter<'_> ) -> fmt::Result {
		write!( f, "{}: {}", self.type_name, self.message )?;
		self.frames.iter().try_for_each(| frame | write!( f, "\n{}{}", crate::error::CONTINUATION_INDENT, frame ))
	}
}
