//! A module containing [`Endpoint`], the boundary type every interval is
//! built from.

use core::cmp::Ordering;
use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::IntervalError;

/// One end of an interval.
///
/// A finite endpoint carries a value and whether that value itself is
/// part of the interval. The infinite endpoints carry nothing and are
/// never inclusive.
///
/// [`Endpoint::Infinity`] has no direction of its own, it becomes
/// [`Endpoint::NegativeInfinity`] when used as the lower end of a
/// [`Bound`](crate::Bound) and [`Endpoint::PositiveInfinity`] when used
/// as the upper end. See [`Endpoint::lower()`] and [`Endpoint::upper()`].
///
/// `PartialEq`, `Eq` and `Hash` are structural, `[5` and `(5` are
/// different endpoints. Ordering ignores inclusivity and is only
/// available through [`Endpoint::compare()`].
///
/// # Examples
/// ```
/// use core::cmp::Ordering;
///
/// use interval_algebra::Endpoint;
///
/// let closed = Endpoint::closed(5);
/// let open = Endpoint::open(5);
///
/// assert_ne!(closed, open);
/// assert_eq!(closed.compare(&open), Ordering::Equal);
/// assert_eq!(
/// 	Endpoint::PositiveInfinity.compare(&closed),
/// 	Ordering::Greater
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Endpoint<T> {
	/// A finite boundary value.
	///
	/// Building this variant directly skips the check performed by
	/// [`Endpoint::new()`]. A `value` which is not comparable with itself,
	/// such as `f64::NAN`, compares [`Equal`](Ordering::Equal) to every
	/// other endpoint in [`Endpoint::compare()`]. A [`Bound`](crate::Bound)
	/// holding one is treated as empty and overlaps nothing.
	Finite {
		/// The boundary value.
		value: T,
		/// Whether `value` is contained by the interval.
		inclusive: bool,
	},
	/// Greater than every finite endpoint.
	PositiveInfinity,
	/// Less than every finite endpoint.
	NegativeInfinity,
	/// Infinity in whichever direction the context asks for.
	Infinity,
}

impl<T> Endpoint<T> {
	/// Returns the value of a finite endpoint, `None` for the infinite
	/// ones.
	pub fn value(&self) -> Option<&T> {
		match self {
			Endpoint::Finite { value, .. } => Some(value),
			_ => None,
		}
	}

	/// Returns whether the boundary value is part of the interval, always
	/// `false` for the infinite endpoints.
	pub fn is_inclusive(&self) -> bool {
		matches!(self, Endpoint::Finite { inclusive: true, .. })
	}

	/// Returns `true` for [`Endpoint::Finite`].
	pub fn is_finite(&self) -> bool {
		matches!(self, Endpoint::Finite { .. })
	}

	/// Returns `true` for the three infinite endpoints.
	pub fn is_infinite(&self) -> bool {
		!self.is_finite()
	}

	/// Resolves this endpoint for use as the lower end of a bound.
	///
	/// # Examples
	/// ```
	/// use interval_algebra::Endpoint;
	///
	/// assert_eq!(
	/// 	Endpoint::<u8>::Infinity.lower(),
	/// 	Endpoint::NegativeInfinity
	/// );
	/// assert_eq!(Endpoint::closed(3).lower(), Endpoint::closed(3));
	/// ```
	pub fn lower(self) -> Self {
		match self {
			Endpoint::Infinity => Endpoint::NegativeInfinity,
			x => x,
		}
	}

	/// Resolves this endpoint for use as the upper end of a bound.
	///
	/// # Examples
	/// ```
	/// use interval_algebra::Endpoint;
	///
	/// assert_eq!(
	/// 	Endpoint::<u8>::Infinity.upper(),
	/// 	Endpoint::PositiveInfinity
	/// );
	/// ```
	pub fn upper(self) -> Self {
		match self {
			Endpoint::Infinity => Endpoint::PositiveInfinity,
			x => x,
		}
	}

	/// Converts from `&Endpoint<T>` to `Endpoint<&T>`.
	pub fn as_ref(&self) -> Endpoint<&T> {
		match self {
			Endpoint::Finite { value, inclusive } => Endpoint::Finite {
				value,
				inclusive: *inclusive,
			},
			Endpoint::PositiveInfinity => Endpoint::PositiveInfinity,
			Endpoint::NegativeInfinity => Endpoint::NegativeInfinity,
			Endpoint::Infinity => Endpoint::Infinity,
		}
	}
}

impl<T> Endpoint<T>
where
	T: PartialOrd,
{
	/// Makes a finite endpoint.
	///
	/// Returns [`IntervalError::InvalidArgument`] if `value` is not
	/// comparable with itself, such as `f64::NAN`, since such a value
	/// cannot be placed anywhere on the line.
	///
	/// # Examples
	/// ```
	/// use interval_algebra::{Endpoint, IntervalError};
	///
	/// assert_eq!(
	/// 	Endpoint::new(2.5, false),
	/// 	Ok(Endpoint::Finite {
	/// 		value: 2.5,
	/// 		inclusive: false
	/// 	})
	/// );
	/// assert!(matches!(
	/// 	Endpoint::new(f64::NAN, true),
	/// 	Err(IntervalError::InvalidArgument { .. })
	/// ));
	/// ```
	pub fn new(value: T, inclusive: bool) -> Result<Self, IntervalError> {
		if value.partial_cmp(&value).is_none() {
			return Err(IntervalError::InvalidArgument {
				reason: "endpoint value is not comparable with itself",
			});
		}

		Ok(Endpoint::Finite { value, inclusive })
	}

	/// Makes an inclusive endpoint.
	///
	/// # Panics
	///
	/// Panics if `value` is not comparable with itself, see
	/// [`Endpoint::new()`].
	pub fn closed(value: T) -> Self {
		Endpoint::new(value, true).unwrap_or_else(|_| invalid_endpoint_panic())
	}

	/// Makes an exclusive endpoint.
	///
	/// # Panics
	///
	/// Panics if `value` is not comparable with itself, see
	/// [`Endpoint::new()`].
	pub fn open(value: T) -> Self {
		Endpoint::new(value, false).unwrap_or_else(|_| invalid_endpoint_panic())
	}

	/// Compares two endpoints by position only, inclusivity is ignored.
	///
	/// An unresolved [`Endpoint::Infinity`] compares like
	/// [`Endpoint::PositiveInfinity`]. Two finite values which cannot be
	/// compared are reported as equal.
	#[rustfmt::skip]
	pub fn compare(&self, other: &Self) -> Ordering {
		match (self, other) {
			(Endpoint::Finite { value: x, .. }, Endpoint::Finite { value: y, .. }) => x.partial_cmp(y).unwrap_or(Ordering::Equal),
			(Endpoint::Finite { .. }, Endpoint::PositiveInfinity) => Ordering::Less,
			(Endpoint::Finite { .. }, Endpoint::NegativeInfinity) => Ordering::Greater,
			(Endpoint::Finite { .. }, Endpoint::Infinity) => Ordering::Less,

			(Endpoint::PositiveInfinity, Endpoint::Finite { .. }) => Ordering::Greater,
			(Endpoint::PositiveInfinity, Endpoint::PositiveInfinity) => Ordering::Equal,
			(Endpoint::PositiveInfinity, Endpoint::NegativeInfinity) => Ordering::Greater,
			(Endpoint::PositiveInfinity, Endpoint::Infinity) => Ordering::Equal,

			(Endpoint::NegativeInfinity, Endpoint::Finite { .. }) => Ordering::Less,
			(Endpoint::NegativeInfinity, Endpoint::PositiveInfinity) => Ordering::Less,
			(Endpoint::NegativeInfinity, Endpoint::NegativeInfinity) => Ordering::Equal,
			(Endpoint::NegativeInfinity, Endpoint::Infinity) => Ordering::Less,

			(Endpoint::Infinity, Endpoint::Finite { .. }) => Ordering::Greater,
			(Endpoint::Infinity, Endpoint::PositiveInfinity) => Ordering::Equal,
			(Endpoint::Infinity, Endpoint::NegativeInfinity) => Ordering::Greater,
			(Endpoint::Infinity, Endpoint::Infinity) => Ordering::Equal,
		}
	}

	/// Returns `true` if this endpoint lies after `other`, or at the same
	/// position when this endpoint is inclusive.
	pub fn is_after(&self, other: &Self) -> bool {
		match self.compare(other) {
			Ordering::Greater => true,
			Ordering::Equal => self.is_inclusive(),
			Ordering::Less => false,
		}
	}

	/// Returns `true` if this endpoint lies before `other`, or at the
	/// same position when this endpoint is inclusive.
	pub fn is_before(&self, other: &Self) -> bool {
		match self.compare(other) {
			Ordering::Less => true,
			Ordering::Equal => self.is_inclusive(),
			Ordering::Greater => false,
		}
	}

	/// Returns `true` if `point` is not below this endpoint when it is
	/// used as a lower end.
	pub fn is_before_point(&self, point: &T) -> bool {
		match self {
			Endpoint::Finite {
				value,
				inclusive: true,
			} => value <= point,
			Endpoint::Finite {
				value,
				inclusive: false,
			} => value < point,
			Endpoint::NegativeInfinity => true,
			Endpoint::PositiveInfinity | Endpoint::Infinity => false,
		}
	}

	/// Returns `true` if `point` is not above this endpoint when it is
	/// used as an upper end.
	pub fn is_after_point(&self, point: &T) -> bool {
		match self {
			Endpoint::Finite {
				value,
				inclusive: true,
			} => value >= point,
			Endpoint::Finite {
				value,
				inclusive: false,
			} => value > point,
			Endpoint::PositiveInfinity | Endpoint::Infinity => true,
			Endpoint::NegativeInfinity => false,
		}
	}

	/// Returns `false` for a finite endpoint whose value is not comparable
	/// with itself.
	pub(crate) fn is_comparable(&self) -> bool {
		match self {
			Endpoint::Finite { value, .. } => value.partial_cmp(value).is_some(),
			_ => true,
		}
	}

	/// Like [`Endpoint::compare()`] but ties between equal positions are
	/// broken by inclusivity, where `inclusive_first` decides whether the
	/// inclusive endpoint sorts before or after the exclusive one.
	pub(crate) fn cmp_with_priority(
		&self,
		other: &Self,
		inclusive_first: bool,
	) -> Ordering {
		let result = self.compare(other);

		match result {
			Ordering::Equal => {
				match (self.is_inclusive(), other.is_inclusive()) {
					(true, false) => match inclusive_first {
						true => Ordering::Less,
						false => Ordering::Greater,
					},
					(false, true) => match inclusive_first {
						true => Ordering::Greater,
						false => Ordering::Less,
					},
					_ => Ordering::Equal,
				}
			}
			x => x,
		}
	}
}

fn invalid_endpoint_panic() -> ! {
	panic!("invalid endpoint: value is not comparable with itself")
}

impl<T> fmt::Display for Endpoint<T>
where
	T: fmt::Display,
{
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Endpoint::Finite { value, .. } => value.fmt(f),
			Endpoint::PositiveInfinity => f.write_str("+Inf"),
			Endpoint::NegativeInfinity => f.write_str("-Inf"),
			Endpoint::Infinity => f.write_str("Inf"),
		}
	}
}

#[cfg(test)]
mod tests {
	use alloc::string::ToString;

	use pretty_assertions::assert_eq;

	use super::*;

	fn all_endpoints() -> [Endpoint<i8>; 8] {
		[
			Endpoint::NegativeInfinity,
			Endpoint::closed(-4),
			Endpoint::open(-4),
			Endpoint::closed(0),
			Endpoint::open(7),
			Endpoint::closed(7),
			Endpoint::PositiveInfinity,
			Endpoint::Infinity,
		]
	}

	#[test]
	fn mass_compare_test() {
		use Ordering::*;

		//Finite
		assert_eq!(Endpoint::closed(5).compare(&Endpoint::closed(10)), Less);
		assert_eq!(Endpoint::closed(25).compare(&Endpoint::closed(7)), Greater);
		assert_eq!(Endpoint::closed(-5).compare(&Endpoint::open(-5)), Equal);
		assert_eq!(Endpoint::open(115).compare(&Endpoint::open(75)), Greater);

		//PositiveInfinity
		for x in [i32::MIN, 0, i32::MAX] {
			assert_eq!(
				Endpoint::PositiveInfinity.compare(&Endpoint::closed(x)),
				Greater
			);
			assert_eq!(
				Endpoint::NegativeInfinity.compare(&Endpoint::closed(x)),
				Less
			);
			assert_eq!(Endpoint::Infinity.compare(&Endpoint::open(x)), Greater);
		}
		assert_eq!(
			Endpoint::<i32>::PositiveInfinity
				.compare(&Endpoint::NegativeInfinity),
			Greater
		);
		assert_eq!(
			Endpoint::<i32>::PositiveInfinity
				.compare(&Endpoint::PositiveInfinity),
			Equal
		);

		//NegativeInfinity
		assert_eq!(
			Endpoint::<i32>::NegativeInfinity
				.compare(&Endpoint::NegativeInfinity),
			Equal
		);
		assert_eq!(
			Endpoint::<i32>::NegativeInfinity.compare(&Endpoint::Infinity),
			Less
		);

		//Infinity
		assert_eq!(Endpoint::<i32>::Infinity.compare(&Endpoint::Infinity), Equal);
		assert_eq!(
			Endpoint::<i32>::Infinity.compare(&Endpoint::PositiveInfinity),
			Equal
		);

		//chars
		for x in ['a', 'f', 'z'] {
			assert_eq!(
				Endpoint::PositiveInfinity.compare(&Endpoint::closed(x)),
				Greater
			);
		}
	}

	#[test]
	fn compare_is_antisymmetric_and_transitive() {
		let endpoints = all_endpoints();

		for a in endpoints.iter() {
			for b in endpoints.iter() {
				assert_eq!(a.compare(b), b.compare(a).reverse(), "{a:?} {b:?}");

				for c in endpoints.iter() {
					if a.compare(b).is_le() && b.compare(c).is_le() {
						assert!(a.compare(c).is_le(), "{a:?} {b:?} {c:?}");
					}
				}
			}
		}
	}

	#[test]
	fn directional_predicate_tests() {
		assert_eq!(Endpoint::closed(5).is_before(&Endpoint::closed(5)), true);
		assert_eq!(Endpoint::open(5).is_before(&Endpoint::closed(5)), false);
		assert_eq!(Endpoint::closed(5).is_after(&Endpoint::open(5)), true);
		assert_eq!(Endpoint::open(5).is_after(&Endpoint::closed(5)), false);
		assert_eq!(Endpoint::open(4).is_before(&Endpoint::open(5)), true);
		assert_eq!(Endpoint::open(6).is_after(&Endpoint::open(5)), true);

		assert_eq!(
			Endpoint::NegativeInfinity.is_before(&Endpoint::closed(i8::MIN)),
			true
		);
		assert_eq!(
			Endpoint::PositiveInfinity.is_after(&Endpoint::closed(i8::MAX)),
			true
		);
		assert_eq!(
			Endpoint::<i8>::PositiveInfinity
				.is_after(&Endpoint::PositiveInfinity),
			false
		);
	}

	#[test]
	fn point_predicate_tests() {
		assert_eq!(Endpoint::closed(1).is_before_point(&1), true);
		assert_eq!(Endpoint::open(1).is_before_point(&1), false);
		assert_eq!(Endpoint::closed(5).is_after_point(&5), true);
		assert_eq!(Endpoint::open(5).is_after_point(&5), false);
		assert_eq!(Endpoint::NegativeInfinity.is_before_point(&i8::MIN), true);
		assert_eq!(Endpoint::NegativeInfinity.is_after_point(&i8::MIN), false);
		assert_eq!(Endpoint::PositiveInfinity.is_after_point(&i8::MAX), true);
		assert_eq!(Endpoint::PositiveInfinity.is_before_point(&i8::MAX), false);
		assert_eq!(Endpoint::closed(1.0).is_before_point(&f64::NAN), false);
		assert_eq!(Endpoint::closed(1.0).is_after_point(&f64::NAN), false);
	}

	#[test]
	fn cmp_with_priority_tests() {
		let closed = Endpoint::closed(3);
		let open = Endpoint::open(3);

		assert_eq!(closed.cmp_with_priority(&open, true), Ordering::Less);
		assert_eq!(closed.cmp_with_priority(&open, false), Ordering::Greater);
		assert_eq!(open.cmp_with_priority(&closed, true), Ordering::Greater);
		assert_eq!(open.cmp_with_priority(&open, true), Ordering::Equal);
		assert_eq!(
			closed.cmp_with_priority(&Endpoint::open(4), false),
			Ordering::Less
		);
	}

	#[test]
	fn is_comparable_tests() {
		assert_eq!(Endpoint::closed(1.5).is_comparable(), true);
		assert_eq!(Endpoint::<f64>::Infinity.is_comparable(), true);
		assert_eq!(
			Endpoint::Finite {
				value: f64::NAN,
				inclusive: true
			}
			.is_comparable(),
			false
		);
	}

	#[test]
	fn new_tests() {
		assert_eq!(
			Endpoint::new(3, true),
			Ok(Endpoint::Finite {
				value: 3,
				inclusive: true
			})
		);
		assert_eq!(Endpoint::new(3, false), Ok(Endpoint::open(3)));
		assert!(matches!(
			Endpoint::new(f32::NAN, false),
			Err(IntervalError::InvalidArgument { .. })
		));
	}

	#[test]
	#[should_panic]
	fn closed_nan_panics() {
		Endpoint::closed(f64::NAN);
	}

	#[test]
	fn accessor_tests() {
		assert_eq!(Endpoint::closed(3).value(), Some(&3));
		assert_eq!(Endpoint::<u8>::Infinity.value(), None);
		assert_eq!(Endpoint::closed(3).is_inclusive(), true);
		assert_eq!(Endpoint::open(3).is_inclusive(), false);
		assert_eq!(Endpoint::<u8>::NegativeInfinity.is_inclusive(), false);
		assert_eq!(Endpoint::<u8>::Infinity.is_infinite(), true);
		assert_eq!(Endpoint::open(3).is_finite(), true);
		assert_eq!(Endpoint::open(3).as_ref(), Endpoint::open(&3));
	}

	#[test]
	fn projection_tests() {
		for endpoint in all_endpoints() {
			match endpoint {
				Endpoint::Infinity => {
					assert_eq!(endpoint.lower(), Endpoint::NegativeInfinity);
					assert_eq!(endpoint.upper(), Endpoint::PositiveInfinity);
				}
				x => {
					assert_eq!(x.lower(), x);
					assert_eq!(x.upper(), x);
				}
			}
		}
	}

	#[test]
	fn display_tests() {
		assert_eq!(Endpoint::closed(4).to_string(), "4");
		assert_eq!(Endpoint::open(-1.5).to_string(), "-1.5");
		assert_eq!(Endpoint::<u8>::PositiveInfinity.to_string(), "+Inf");
		assert_eq!(Endpoint::<u8>::NegativeInfinity.to_string(), "-Inf");
		assert_eq!(Endpoint::<u8>::Infinity.to_string(), "Inf");
	}
}
