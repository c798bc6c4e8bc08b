//! A module containing [`IntervalError`].

use alloc::string::String;

/// The error type returned by the fallible operations of this crate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IntervalError {
	/// A required input was missing or unusable, for example a finite
	/// endpoint value which is not comparable with itself (`f64::NAN`).
	#[error("invalid argument: {reason}")]
	InvalidArgument {
		/// What was wrong with the argument.
		reason: &'static str,
	},
	/// Two bounds or intervals were merged without overlapping.
	#[error("cannot merge intervals which do not overlap")]
	InvalidOperation,
	/// The text form of an interval could not be parsed.
	#[error("cannot parse {input:?} as an interval: {reason}")]
	Parse {
		/// The offending input, or the part of it that failed.
		input: String,
		/// Why parsing failed.
		reason: &'static str,
	},
}
