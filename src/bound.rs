//! A module containing [`Bound`], a single contiguous range described by a
//! lower and an upper [`Endpoint`].

use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{Discrete, Endpoint, IntervalError};

/// An ordered pair of endpoints describing one contiguous range.
///
/// Both endpoints are resolved on construction so a `Bound` never holds
/// an [`Endpoint::Infinity`]. No ordering is enforced between the two
/// ends, a lower end above the upper end simply gives an empty bound.
///
/// # Examples
/// ```
/// use interval_algebra::{Bound, Endpoint};
///
/// let a = Bound::new(Endpoint::closed(2), Endpoint::closed(7));
/// let b = Bound::new(Endpoint::open(7), Endpoint::closed(8));
///
/// assert!(a.overlaps(&b));
/// assert_eq!(
/// 	a.merge(&b),
/// 	Ok(Bound::new(Endpoint::closed(2), Endpoint::closed(8)))
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "RawBound<T>"))]
pub struct Bound<T> {
	lower: Endpoint<T>,
	upper: Endpoint<T>,
}

impl<T> Bound<T> {
	/// Makes a bound, resolving [`Endpoint::Infinity`] on either side.
	pub fn new(lower: Endpoint<T>, upper: Endpoint<T>) -> Self {
		Bound {
			lower: lower.lower(),
			upper: upper.upper(),
		}
	}

	/// The lower endpoint.
	pub fn lower(&self) -> &Endpoint<T> {
		&self.lower
	}

	/// The upper endpoint.
	pub fn upper(&self) -> &Endpoint<T> {
		&self.upper
	}

	/// Splits the bound back into its endpoints.
	pub fn into_endpoints(self) -> (Endpoint<T>, Endpoint<T>) {
		(self.lower, self.upper)
	}
}

impl<T> Bound<T>
where
	T: PartialOrd,
{
	/// Returns `true` if no value lies inside the bound.
	///
	/// A bound holding a finite value which is not comparable with itself
	/// is always empty.
	///
	/// # Examples
	/// ```
	/// use interval_algebra::{Bound, Endpoint};
	///
	/// assert!(Bound::new(Endpoint::closed(1.0), Endpoint::closed(0.5)).is_empty());
	/// assert!(Bound::new(Endpoint::closed(1.0), Endpoint::open(1.0)).is_empty());
	/// assert!(!Bound::new(Endpoint::closed(1.0), Endpoint::closed(1.0)).is_empty());
	/// ```
	pub fn is_empty(&self) -> bool {
		!self.is_comparable()
			|| !(self.lower.is_before(&self.upper)
				&& self.upper.is_after(&self.lower))
	}

	/// Returns `true` if exactly one value lies inside the bound.
	pub fn is_degenerate(&self) -> bool {
		self.is_comparable()
			&& self.lower.is_inclusive()
			&& self.upper.is_inclusive()
			&& self.lower.compare(&self.upper).is_eq()
	}

	/// Returns `true` if `point` lies inside the bound.
	pub fn contains(&self, point: &T) -> bool {
		self.lower.is_before_point(point) && self.upper.is_after_point(point)
	}

	/// Returns `true` if the two bounds share a point or touch at a value
	/// that at least one of the touching sides includes.
	///
	/// `[2, 7]` overlaps `(7, 8]`, whereas `[2, 7)` does not. A bound
	/// holding a value not comparable with itself overlaps nothing.
	pub fn overlaps(&self, other: &Self) -> bool {
		if !(self.is_comparable() && other.is_comparable()) {
			return false;
		}

		let continuous_left = (self.lower.is_inclusive()
			|| other.upper.is_inclusive())
			&& self.lower.compare(&other.upper).is_eq();
		let continuous_right = (other.lower.is_inclusive()
			|| self.upper.is_inclusive())
			&& self.upper.compare(&other.lower).is_eq();

		continuous_left
			|| continuous_right
			|| (self.lower.is_before(&other.upper)
				&& other.lower.is_before(&self.upper))
	}

	fn is_comparable(&self) -> bool {
		self.lower.is_comparable() && self.upper.is_comparable()
	}
}

impl<T> Bound<T>
where
	T: PartialOrd + Clone,
{
	/// Merges two overlapping bounds into the smallest bound covering
	/// both.
	///
	/// Returns [`IntervalError::InvalidOperation`] if the bounds do not
	/// overlap, see [`Bound::overlaps()`].
	///
	/// # Examples
	/// ```
	/// use interval_algebra::{Bound, Endpoint, IntervalError};
	///
	/// let a = Bound::new(Endpoint::closed(3), Endpoint::open(5));
	/// let b = Bound::new(Endpoint::open(5), Endpoint::closed(8));
	///
	/// assert_eq!(a.merge(&b), Err(IntervalError::InvalidOperation));
	/// ```
	pub fn merge(&self, other: &Self) -> Result<Self, IntervalError> {
		if !self.overlaps(other) {
			return Err(IntervalError::InvalidOperation);
		}

		Ok(self.hull(other))
	}

	/// The smallest bound covering both bounds, whether or not they
	/// overlap. At equal positions an inclusive endpoint wins over an
	/// exclusive one.
	pub fn hull(&self, other: &Self) -> Self {
		Bound {
			lower: pick(&self.lower, &other.lower, true, true),
			upper: pick(&self.upper, &other.upper, false, true),
		}
	}

	/// The bound of values inside both bounds, possibly empty. At equal
	/// positions an exclusive endpoint wins over an inclusive one.
	///
	/// # Examples
	/// ```
	/// use interval_algebra::{Bound, Endpoint};
	///
	/// let a = Bound::new(Endpoint::closed(1), Endpoint::open(5));
	/// let b = Bound::new(Endpoint::closed(2), Endpoint::closed(5));
	///
	/// assert_eq!(
	/// 	a.intersect(&b),
	/// 	Bound::new(Endpoint::closed(2), Endpoint::open(5))
	/// );
	/// ```
	pub fn intersect(&self, other: &Self) -> Self {
		Bound {
			lower: pick(&self.lower, &other.lower, false, false),
			upper: pick(&self.upper, &other.upper, true, false),
		}
	}
}

impl<T> Bound<T>
where
	T: PartialOrd + Clone + Discrete,
{
	/// Returns `true` if the bounds do not overlap but no value of a
	/// [`Discrete`] type lies between them, such as `[5, 7]` and `[8, 10]`.
	///
	/// Both facing endpoints must be inclusive.
	pub fn touches_discrete(&self, other: &Self) -> bool {
		fn steps_into<T>(upper: &Endpoint<T>, lower: &Endpoint<T>) -> bool
		where
			T: PartialOrd + Clone + Discrete,
		{
			match (upper, lower) {
				(
					Endpoint::Finite {
						value: upper,
						inclusive: true,
					},
					Endpoint::Finite {
						value: lower,
						inclusive: true,
					},
				) => upper.clone().up().is_some_and(|next| next == *lower),
				_ => false,
			}
		}

		steps_into(&self.upper, &other.lower)
			|| steps_into(&other.upper, &self.lower)
	}

	/// Like [`Bound::merge()`] but also merges bounds which only
	/// [touch discretely](Bound::touches_discrete).
	pub fn merge_discrete(&self, other: &Self) -> Result<Self, IntervalError> {
		if !(self.overlaps(other) || self.touches_discrete(other)) {
			return Err(IntervalError::InvalidOperation);
		}

		Ok(self.hull(other))
	}
}

/// Picks the minimum (`lowest == true`) or maximum of two endpoints,
/// settling equal positions in favour of the inclusive endpoint when
/// `prefer_inclusive` is set, otherwise the exclusive one.
fn pick<T>(
	a: &Endpoint<T>,
	b: &Endpoint<T>,
	lowest: bool,
	prefer_inclusive: bool,
) -> Endpoint<T>
where
	T: PartialOrd + Clone,
{
	// an inclusive-first order makes the inclusive endpoint the minimum
	let inclusive_first = lowest == prefer_inclusive;
	let ordering = a.cmp_with_priority(b, inclusive_first);

	match (lowest, ordering.is_le()) {
		(true, true) | (false, false) => a.clone(),
		(true, false) | (false, true) => b.clone(),
	}
}

impl<T> fmt::Display for Bound<T>
where
	T: fmt::Display + PartialOrd,
{
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		if self.is_empty() {
			return f.write_str("∅");
		}

		let open = if self.lower.is_inclusive() { '[' } else { '(' };
		let close = if self.upper.is_inclusive() { ']' } else { ')' };

		write!(f, "{open}{}, {}{close}", self.lower, self.upper)
	}
}

#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct RawBound<T> {
	lower: Endpoint<T>,
	upper: Endpoint<T>,
}

#[cfg(feature = "serde")]
impl<T> From<RawBound<T>> for Bound<T> {
	fn from(raw: RawBound<T>) -> Self {
		Bound::new(raw.lower, raw.upper)
	}
}

#[cfg(test)]
mod tests {
	use alloc::string::ToString;

	use pretty_assertions::assert_eq;

	use super::*;

	fn b(lower: Endpoint<i8>, upper: Endpoint<i8>) -> Bound<i8> {
		Bound::new(lower, upper)
	}
	fn c(x: i8) -> Endpoint<i8> {
		Endpoint::closed(x)
	}
	fn o(x: i8) -> Endpoint<i8> {
		Endpoint::open(x)
	}

	fn all_test_bounds() -> alloc::vec::Vec<Bound<i8>> {
		let mut endpoints = alloc::vec![
			Endpoint::NegativeInfinity,
			Endpoint::PositiveInfinity
		];
		for x in [2, 4, 6] {
			endpoints.push(c(x));
			endpoints.push(o(x));
		}

		let mut output = alloc::vec::Vec::new();
		for lower in endpoints.iter() {
			for upper in endpoints.iter() {
				output.push(b(*lower, *upper));
			}
		}
		output
	}

	#[test]
	fn overlap_tests() {
		assert_eq!(b(c(2), c(5)).overlaps(&b(c(3), c(4))), true);
		assert_eq!(b(c(2), c(5)).overlaps(&b(c(7), c(8))), false);
		assert_eq!(b(c(2), c(7)).overlaps(&b(c(6), c(8))), true);
		assert_eq!(b(c(2), c(7)).overlaps(&b(c(7), c(8))), true);
		assert_eq!(b(c(2), o(7)).overlaps(&b(o(7), c(8))), false);
		assert_eq!(b(c(2), c(7)).overlaps(&b(o(7), c(8))), true);
		assert_eq!(b(c(2), o(7)).overlaps(&b(c(7), c(8))), true);
		assert_eq!(b(c(2), c(7)).overlaps(&b(c(1), c(5))), true);
		assert_eq!(
			b(Endpoint::NegativeInfinity, c(0))
				.overlaps(&b(c(0), Endpoint::PositiveInfinity)),
			true
		);
	}

	#[test]
	fn overlaps_is_symmetric() {
		let bounds = all_test_bounds();
		for x in bounds.iter() {
			for y in bounds.iter() {
				assert_eq!(x.overlaps(y), y.overlaps(x), "{x:?} {y:?}");
			}
		}
	}

	#[test]
	fn overlaps_matches_shared_points() {
		//every non-empty pair sharing a point must overlap
		let bounds = all_test_bounds();
		for x in bounds.iter().filter(|x| !x.is_empty()) {
			for y in bounds.iter().filter(|y| !y.is_empty()) {
				let shares_point = (0..=8).any(|p| x.contains(&p) && y.contains(&p));
				if shares_point {
					assert!(x.overlaps(y), "{x:?} {y:?}");
				}
			}
		}
	}

	#[test]
	fn merge_tests() {
		assert_eq!(b(c(2), c(5)).merge(&b(c(4), c(8))), Ok(b(c(2), c(8))));
		assert_eq!(b(c(2), c(5)).merge(&b(c(3), c(4))), Ok(b(c(2), c(5))));
		assert_eq!(b(c(2), o(7)).merge(&b(c(7), c(8))), Ok(b(c(2), c(8))));
		assert_eq!(
			b(c(3), o(5)).merge(&b(o(5), c(8))),
			Err(IntervalError::InvalidOperation)
		);
		assert_eq!(
			b(c(2), c(5)).merge(&b(c(7), c(8))),
			Err(IntervalError::InvalidOperation)
		);
		assert_eq!(
			b(Endpoint::Infinity, c(5)).merge(&b(c(4), o(8))),
			Ok(b(Endpoint::NegativeInfinity, o(8)))
		);
	}

	#[test]
	fn merge_prefers_inclusive_endpoints() {
		assert_eq!(b(o(2), o(5)).merge(&b(c(2), c(5))), Ok(b(c(2), c(5))));
		assert_eq!(b(c(2), c(5)).merge(&b(o(2), o(5))), Ok(b(c(2), c(5))));
		assert_eq!(b(c(2), o(5)).merge(&b(o(2), c(5))), Ok(b(c(2), c(5))));
		assert_eq!(b(c(3), c(3)).merge(&b(o(3), c(4))), Ok(b(c(3), c(4))));
	}

	#[test]
	fn merge_is_commutative() {
		let bounds = all_test_bounds();
		for x in bounds.iter() {
			for y in bounds.iter() {
				assert_eq!(x.merge(y), y.merge(x), "{x:?} {y:?}");
			}
		}
	}

	#[test]
	fn intersect_tests() {
		assert_eq!(b(c(5), c(10)).intersect(&b(c(2), c(7))), b(c(5), c(7)));
		assert_eq!(b(c(1), c(10)).intersect(&b(c(2), c(7))), b(c(2), c(7)));
		assert_eq!(b(c(5), c(5)).intersect(&b(c(2), c(7))), b(c(5), c(5)));
		assert_eq!(b(c(5), c(7)).intersect(&b(c(7), c(10))), b(c(7), c(7)));
		assert_eq!(b(o(2), c(7)).intersect(&b(c(2), o(7))), b(o(2), o(7)));
		assert!(b(c(1), c(5)).intersect(&b(c(6), c(8))).is_empty());
		assert!(b(c(1), o(5)).intersect(&b(o(5), c(10))).is_empty());
		assert!(b(c(1), o(5)).intersect(&b(c(5), c(10))).is_empty());
		assert!(b(c(1), c(5)).intersect(&b(o(5), c(10))).is_empty());
	}

	#[test]
	fn empty_and_degenerate_tests() {
		assert_eq!(b(c(5), c(5)).is_empty(), false);
		assert_eq!(b(c(5), c(5)).is_degenerate(), true);
		assert_eq!(b(c(5), o(5)).is_empty(), true);
		assert_eq!(b(o(5), c(5)).is_empty(), true);
		assert_eq!(b(o(5), o(5)).is_empty(), true);
		assert_eq!(b(o(5), o(5)).is_degenerate(), false);
		assert_eq!(b(c(6), c(5)).is_empty(), true);
		assert_eq!(b(c(6), c(5)).is_degenerate(), false);
		assert_eq!(
			b(Endpoint::NegativeInfinity, Endpoint::PositiveInfinity).is_empty(),
			false
		);
		assert_eq!(
			b(Endpoint::PositiveInfinity, Endpoint::NegativeInfinity).is_empty(),
			true
		);
		assert_eq!(b(Endpoint::Infinity, Endpoint::Infinity).is_empty(), false);
	}

	#[test]
	fn incomparable_value_tests() {
		let nan = |inclusive| Endpoint::Finite {
			value: f64::NAN,
			inclusive,
		};
		let poisoned = Bound::new(nan(true), Endpoint::closed(3.0));
		let plain = Bound::new(Endpoint::closed(0.0), Endpoint::closed(5.0));

		assert_eq!(poisoned.is_empty(), true);
		assert_eq!(Bound::new(nan(true), nan(true)).is_degenerate(), false);
		assert_eq!(poisoned.overlaps(&plain), false);
		assert_eq!(plain.overlaps(&poisoned), false);
		assert_eq!(poisoned.merge(&plain), Err(IntervalError::InvalidOperation));
	}

	#[test]
	fn contains_tests() {
		assert_eq!(b(c(1), c(10)).contains(&5), true);
		assert_eq!(b(c(100), c(120)).contains(&57), false);
		assert_eq!(b(c(15), c(15)).contains(&15), true);
		assert_eq!(b(o(1), o(5)).contains(&1), false);
		assert_eq!(b(o(1), o(5)).contains(&5), false);
		assert_eq!(b(Endpoint::Infinity, c(5)).contains(&-100), true);
		assert_eq!(b(c(-77), Endpoint::Infinity).contains(&1), true);
	}

	#[test]
	fn touches_discrete_tests() {
		assert_eq!(b(c(5), c(7)).touches_discrete(&b(c(8), c(10))), true);
		assert_eq!(b(c(8), c(10)).touches_discrete(&b(c(5), c(7))), true);
		assert_eq!(b(c(5), o(7)).touches_discrete(&b(c(8), c(10))), false);
		assert_eq!(b(c(5), c(7)).touches_discrete(&b(c(9), c(10))), false);
		assert_eq!(
			b(c(0), c(i8::MAX)).touches_discrete(&b(c(i8::MIN), c(0))),
			false
		);
		assert_eq!(
			b(c(3), c(8)).merge_discrete(&b(c(9), c(10))),
			Ok(b(c(3), c(10)))
		);
		assert_eq!(
			b(c(5), o(7)).merge_discrete(&b(c(8), c(10))),
			Err(IntervalError::InvalidOperation)
		);
	}

	#[test]
	fn display_tests() {
		assert_eq!(b(c(2), c(5)).to_string(), "[2, 5]");
		assert_eq!(b(o(2), c(5)).to_string(), "(2, 5]");
		assert_eq!(b(c(2), o(5)).to_string(), "[2, 5)");
		assert_eq!(b(Endpoint::Infinity, c(8)).to_string(), "(-Inf, 8]");
		assert_eq!(b(c(0), Endpoint::Infinity).to_string(), "[0, +Inf)");
		assert_eq!(b(c(5), c(2)).to_string(), "∅");
	}
}
