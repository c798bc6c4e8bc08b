//! Parsing of the text form written by the `Display` impl of
//! [`Interval`].
//!
//! Accepted input is `∅`, or one or more bounds separated by commas where
//! each bound is `[`/`(`, an endpoint, a comma, an endpoint and `]`/`)`.
//! An endpoint is a value parsed with [`FromStr`], `-Inf`, `+Inf` or
//! `Inf`. Brackets next to an infinite endpoint are accepted either way
//! since infinite endpoints are never inclusive.

use alloc::string::ToString;
use alloc::vec::Vec;
use core::str::FromStr;

use crate::{Bound, Endpoint, Interval, IntervalError};

impl<T> FromStr for Interval<T>
where
	T: FromStr + PartialOrd + Clone,
{
	type Err = IntervalError;

	/// Parses an interval.
	///
	/// A single bound is kept exactly as written, several bounds are
	/// reduced to the canonical set.
	///
	/// # Examples
	/// ```
	/// use interval_algebra::interval::{ie, ii, ui};
	/// use interval_algebra::Interval;
	///
	/// assert_eq!("[2, 5)".parse(), Ok(ie(2, 5)));
	/// assert_eq!("(-Inf, 3]".parse(), Ok(ui(3)));
	/// assert_eq!(
	/// 	"[4, 8], [2, 5]".parse(),
	/// 	Ok(ii(2, 5).union([ii(4, 8)]))
	/// );
	/// assert!("[2 5]".parse::<Interval<i32>>().is_err());
	/// ```
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let input = s.trim();
		if input == "∅" {
			return Ok(Interval::empty());
		}

		let mut bounds = Vec::new();
		let mut rest = input;
		loop {
			let (bound, remaining) = parse_bound(rest)?;
			bounds.push(bound);

			rest = remaining.trim_start();
			if rest.is_empty() {
				break;
			}
			rest = rest
				.strip_prefix(',')
				.ok_or_else(|| parse_error(rest, "expected `,` between bounds"))?
				.trim_start();
		}

		match (bounds.pop(), bounds.is_empty()) {
			(Some(bound), true) => Ok(Interval::from(bound)),
			(last, _) => Ok(Interval::from_bounds(bounds.into_iter().chain(last))),
		}
	}
}

fn parse_bound<T>(input: &str) -> Result<(Bound<T>, &str), IntervalError>
where
	T: FromStr + PartialOrd,
{
	let mut chars = input.chars();
	let lower_inclusive = match chars.next() {
		Some('[') => true,
		Some('(') => false,
		_ => return Err(parse_error(input, "expected `[` or `(`")),
	};

	let body = chars.as_str();
	let close = body
		.find(|c: char| c == ']' || c == ')')
		.ok_or_else(|| parse_error(input, "expected `]` or `)`"))?;
	let upper_inclusive = body[close..].starts_with(']');

	let (lower, upper) = body[..close]
		.split_once(',')
		.ok_or_else(|| parse_error(input, "expected `,` between endpoints"))?;

	let bound = Bound::new(
		parse_endpoint(lower.trim(), lower_inclusive)?,
		parse_endpoint(upper.trim(), upper_inclusive)?,
	);

	Ok((bound, &body[close + 1..]))
}

fn parse_endpoint<T>(
	input: &str,
	inclusive: bool,
) -> Result<Endpoint<T>, IntervalError>
where
	T: FromStr + PartialOrd,
{
	match input {
		"-Inf" => Ok(Endpoint::NegativeInfinity),
		"+Inf" => Ok(Endpoint::PositiveInfinity),
		"Inf" => Ok(Endpoint::Infinity),
		_ => {
			let value = input
				.parse()
				.map_err(|_| parse_error(input, "invalid endpoint value"))?;

			Endpoint::new(value, inclusive)
		}
	}
}

fn parse_error(input: &str, reason: &'static str) -> IntervalError {
	IntervalError::Parse {
		input: input.to_string(),
		reason,
	}
}
