//! A module containing [`Interval`] and it's various constructor functions.
//!
//! The constructor functions are named after what happens on each side,
//! `i` for included, `e` for excluded and `u` for unbounded, so `ie(1, 5)`
//! is `[1, 5)` and `ui(3)` is `(-Inf, 3]`.

use core::fmt;

use itertools::Itertools;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use smallvec::smallvec;

use crate::union::{reduce, reduce_overlapping, Bounds};
use crate::{Bound, Discrete, Endpoint, IntervalError};

/// A set of values described by one or more [`Bound`]s.
///
/// An interval made with [`Interval::new()`] holds exactly the bound it
/// was given, even an empty one. Intervals produced by a union hold the
/// canonical set of bounds: sorted by lower endpoint, pairwise
/// non-overlapping and non-contiguous, none of them empty.
///
/// Equality and hashing compare the held bounds structurally.
///
/// # Examples
/// ```
/// use interval_algebra::interval::{ii, ui};
/// use interval_algebra::Interval;
///
/// let a = ii(5, 10);
///
/// assert_eq!(a.intersect(&ii(2, 7)), ii(5, 7));
/// assert_eq!(ui(5).contains(&-1000), true);
/// assert_eq!(ui(5).contains(&6), false);
///
/// let union = Interval::from_iter([ii(2, 5), ii(7, 8)]);
/// assert_eq!(union.to_string(), "[2, 5], [7, 8]");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
	feature = "serde",
	serde(
		from = "RawInterval<T>",
		bound(deserialize = "T: Deserialize<'de> + PartialOrd + Clone")
	)
)]
pub struct Interval<T> {
	bounds: Bounds<T>,
}

impl<T> Interval<T> {
	/// Makes an interval of a single bound.
	///
	/// # Examples
	/// ```
	/// use interval_algebra::{Endpoint, Interval};
	///
	/// let interval = Interval::new(Endpoint::closed(3), Endpoint::closed(24));
	///
	/// assert_eq!(interval.lower(), Some(&Endpoint::closed(3)));
	/// assert_eq!(interval.upper(), Some(&Endpoint::closed(24)));
	/// ```
	pub fn new(lower: Endpoint<T>, upper: Endpoint<T>) -> Self {
		Interval::from(Bound::new(lower, upper))
	}

	/// Makes an interval holding no bounds at all.
	pub fn empty() -> Self {
		Interval {
			bounds: Bounds::new(),
		}
	}

	/// The held bounds, in ascending order for a union.
	pub fn bounds(&self) -> &[Bound<T>] {
		&self.bounds
	}

	/// The lower endpoint of the first bound, `None` if there are no
	/// bounds.
	pub fn lower(&self) -> Option<&Endpoint<T>> {
		self.bounds.first().map(Bound::lower)
	}

	/// The upper endpoint of the last bound, `None` if there are no
	/// bounds.
	pub fn upper(&self) -> Option<&Endpoint<T>> {
		self.bounds.last().map(Bound::upper)
	}
}

impl<T> Interval<T>
where
	T: PartialOrd,
{
	/// Returns `true` if the interval contains no values.
	///
	/// # Examples
	/// ```
	/// use interval_algebra::interval::{ie, ii};
	///
	/// assert_eq!(ii(1.0, 0.5).is_empty(), true);
	/// assert_eq!(ie(1.0, 1.0).is_empty(), true);
	/// assert_eq!(ii(1.0, 1.0).is_empty(), false);
	/// ```
	pub fn is_empty(&self) -> bool {
		self.bounds.iter().all(Bound::is_empty)
	}

	/// Returns `true` if the interval contains exactly one value.
	///
	/// # Examples
	/// ```
	/// use interval_algebra::interval::ii;
	///
	/// assert_eq!(ii(0.005, 0.005).is_degenerate(), true);
	/// assert_eq!(ii(1.0, 0.5).is_degenerate(), false);
	/// ```
	pub fn is_degenerate(&self) -> bool {
		matches!(self.bounds.as_slice(), [bound] if bound.is_degenerate())
	}

	/// Returns `true` if any held bound contains `point`.
	pub fn contains(&self, point: &T) -> bool {
		self.bounds.iter().any(|bound| bound.contains(point))
	}

	/// Returns `true` if the intervals overlap, see [`Bound::overlaps()`].
	///
	/// Two single-bound intervals answer exactly as their bounds do, even
	/// when a bound is empty. Otherwise only non-empty bounds are compared.
	pub fn overlaps(&self, other: &Self) -> bool {
		match (self.bounds.as_slice(), other.bounds.as_slice()) {
			([a], [b]) => a.overlaps(b),
			_ => self.non_empty_bounds().any(|bound| {
				other.non_empty_bounds().any(|other| bound.overlaps(other))
			}),
		}
	}

	fn non_empty_bounds(&self) -> impl Iterator<Item = &Bound<T>> {
		self.bounds.iter().filter(|bound| !bound.is_empty())
	}
}

impl<T> Interval<T>
where
	T: PartialOrd + Clone,
{
	/// Makes an interval from any number of bounds, reduced to the
	/// canonical set.
	///
	/// # Examples
	/// ```
	/// use interval_algebra::{Bound, Endpoint, Interval};
	///
	/// let interval = Interval::from_bounds([
	/// 	Bound::new(Endpoint::Infinity, Endpoint::closed(5)),
	/// 	Bound::new(Endpoint::closed(4), Endpoint::closed(8)),
	/// ]);
	///
	/// assert_eq!(interval.to_string(), "(-Inf, 8]");
	/// ```
	pub fn from_bounds<I>(bounds: I) -> Self
	where
		I: IntoIterator<Item = Bound<T>>,
	{
		Interval {
			bounds: reduce_overlapping(bounds),
		}
	}

	/// Returns the interval of values contained by both intervals.
	///
	/// Intersecting two single-bound intervals intersects their bounds
	/// directly, the result may be an empty bound but this never fails.
	/// Otherwise every pair of bounds is intersected and the non-empty
	/// results are reduced to the canonical set.
	///
	/// # Examples
	/// ```
	/// use interval_algebra::interval::{ie, ii, iu, ui};
	///
	/// assert_eq!(ii(5, 7).intersect(&ii(7, 10)), ii(7, 7));
	/// assert_eq!(ui(5).intersect(&ii(2, 7)), ii(2, 5));
	/// assert!(ie(1, 5).intersect(&ii(5, 10)).is_empty());
	/// ```
	pub fn intersect(&self, other: &Self) -> Self {
		match (self.bounds.as_slice(), other.bounds.as_slice()) {
			([a], [b]) => Interval::from(a.intersect(b)),
			(ours, theirs) => Interval::from_bounds(
				ours.iter()
					.cartesian_product(theirs.iter())
					.map(|(a, b)| a.intersect(b)),
			),
		}
	}

	/// Returns the union of `self` and every interval in `others`,
	/// reduced to the canonical set. This never fails, disjoint inputs
	/// simply stay separate bounds.
	///
	/// # Examples
	/// ```
	/// use interval_algebra::interval::{ie, ii};
	///
	/// assert_eq!(ii(2, 5).union([ii(4, 8)]).to_string(), "[2, 8]");
	/// assert_eq!(ii(2, 5).union([ie(4, 8)]).to_string(), "[2, 8)");
	/// assert_eq!(
	/// 	ii(2, 5).union([ii(7, 8), ii(-1, 0)]).to_string(),
	/// 	"[-1, 0], [2, 5], [7, 8]"
	/// );
	/// ```
	pub fn union<I>(&self, others: I) -> Self
	where
		I: IntoIterator<Item = Self>,
	{
		Interval::from_bounds(self.flatten_with(others))
	}

	/// Returns the union of two overlapping intervals.
	///
	/// Two single-bound intervals merge as their bounds do, see
	/// [`Bound::merge()`]. Otherwise the result is the canonical union.
	///
	/// Returns [`IntervalError::InvalidOperation`] if the intervals do not
	/// overlap, see [`Interval::overlaps()`].
	///
	/// # Examples
	/// ```
	/// use interval_algebra::interval::{ie, ei, ii};
	/// use interval_algebra::IntervalError;
	///
	/// assert_eq!(ii(2, 5).merge(&ii(4, 8)), Ok(ii(2, 8)));
	/// assert_eq!(
	/// 	ie(3, 5).merge(&ei(5, 8)),
	/// 	Err(IntervalError::InvalidOperation)
	/// );
	/// ```
	pub fn merge(&self, other: &Self) -> Result<Self, IntervalError> {
		if let ([a], [b]) = (self.bounds.as_slice(), other.bounds.as_slice()) {
			return a.merge(b).map(Interval::from);
		}
		if !self.overlaps(other) {
			return Err(IntervalError::InvalidOperation);
		}

		Ok(self.union([other.clone()]))
	}

	fn flatten_with<I>(&self, others: I) -> impl Iterator<Item = Bound<T>>
	where
		I: IntoIterator<Item = Self>,
	{
		self.bounds
			.clone()
			.into_iter()
			.chain(others.into_iter().flat_map(|other| other.bounds))
	}
}

impl<T> Interval<T>
where
	T: PartialOrd + Clone + Discrete,
{
	/// Like [`Interval::union()`] but bounds which
	/// [touch discretely](Bound::touches_discrete) are joined too.
	///
	/// # Examples
	/// ```
	/// use interval_algebra::interval::ii;
	///
	/// assert_eq!(ii(5, 7).union_discrete([ii(8, 10)]), ii(5, 10));
	/// assert_eq!(ii(5, 7).union([ii(8, 10)]).bounds().len(), 2);
	/// ```
	pub fn union_discrete<I>(&self, others: I) -> Self
	where
		I: IntoIterator<Item = Self>,
	{
		Interval {
			bounds: reduce(self.flatten_with(others), |a, b| {
				a.overlaps(b) || a.touches_discrete(b)
			}),
		}
	}

	/// Like [`Interval::merge()`] but intervals which
	/// [touch discretely](Bound::touches_discrete) are merged too.
	///
	/// # Examples
	/// ```
	/// use interval_algebra::interval::{ie, ii};
	/// use interval_algebra::IntervalError;
	///
	/// assert_eq!(
	/// 	ii(3, 8).merge_discrete(&ii(9, 10))
	/// 		.and_then(|x| x.merge_discrete(&ii(11, 15))),
	/// 	Ok(ii(3, 15))
	/// );
	/// assert_eq!(
	/// 	ie(5, 7).merge_discrete(&ii(8, 10)),
	/// 	Err(IntervalError::InvalidOperation)
	/// );
	/// ```
	pub fn merge_discrete(&self, other: &Self) -> Result<Self, IntervalError> {
		if let ([a], [b]) = (self.bounds.as_slice(), other.bounds.as_slice()) {
			return a.merge_discrete(b).map(Interval::from);
		}
		let touching = self.non_empty_bounds().any(|bound| {
			other.non_empty_bounds().any(|other| {
				bound.overlaps(other) || bound.touches_discrete(other)
			})
		});
		if !touching {
			return Err(IntervalError::InvalidOperation);
		}

		Ok(self.union_discrete([other.clone()]))
	}
}

impl<T> From<Bound<T>> for Interval<T> {
	fn from(bound: Bound<T>) -> Self {
		Interval {
			bounds: smallvec![bound],
		}
	}
}

impl<T> FromIterator<Interval<T>> for Interval<T>
where
	T: PartialOrd + Clone,
{
	fn from_iter<I>(iter: I) -> Self
	where
		I: IntoIterator<Item = Interval<T>>,
	{
		Interval::from_bounds(
			iter.into_iter().flat_map(|interval| interval.bounds),
		)
	}
}

impl<T> FromIterator<Bound<T>> for Interval<T>
where
	T: PartialOrd + Clone,
{
	fn from_iter<I>(iter: I) -> Self
	where
		I: IntoIterator<Item = Bound<T>>,
	{
		Interval::from_bounds(iter)
	}
}

impl<T> fmt::Display for Interval<T>
where
	T: fmt::Display + PartialOrd,
{
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		if self.is_empty() {
			return f.write_str("∅");
		}

		write!(f, "{}", self.non_empty_bounds().format(", "))
	}
}

/// Returns `true` if any of the given intervals contains `point`.
///
/// # Examples
/// ```
/// use interval_algebra::contains_any;
/// use interval_algebra::interval::ii;
///
/// let intervals = [ii(2, 5), ii(7, 15)];
///
/// assert_eq!(contains_any(&intervals, &8), true);
/// assert_eq!(contains_any(&intervals, &6), false);
/// ```
pub fn contains_any<'a, T, I>(intervals: I, point: &T) -> bool
where
	T: PartialOrd + 'a,
	I: IntoIterator<Item = &'a Interval<T>>,
{
	intervals
		.into_iter()
		.any(|interval| interval.contains(point))
}

#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct RawInterval<T> {
	bounds: alloc::vec::Vec<Bound<T>>,
}

#[cfg(feature = "serde")]
impl<T> From<RawInterval<T>> for Interval<T>
where
	T: PartialOrd + Clone,
{
	fn from(raw: RawInterval<T>) -> Self {
		match raw.bounds.len() {
			0 | 1 => Interval {
				bounds: Bounds::from_vec(raw.bounds),
			},
			_ => Interval::from_bounds(raw.bounds),
		}
	}
}

/// An unbounded-unbounded interval
pub fn uu<T>() -> Interval<T> {
	Interval::new(Endpoint::NegativeInfinity, Endpoint::PositiveInfinity)
}
/// An unbounded-included interval
///
/// # Panics
///
/// Panics if `x` is not comparable with itself, see [`Endpoint::new()`].
pub fn ui<T: PartialOrd>(x: T) -> Interval<T> {
	Interval::new(Endpoint::NegativeInfinity, Endpoint::closed(x))
}
/// An unbounded-excluded interval
///
/// # Panics
///
/// Panics if `x` is not comparable with itself, see [`Endpoint::new()`].
pub fn ue<T: PartialOrd>(x: T) -> Interval<T> {
	Interval::new(Endpoint::NegativeInfinity, Endpoint::open(x))
}
/// An included-unbounded interval
///
/// # Panics
///
/// Panics if `x` is not comparable with itself, see [`Endpoint::new()`].
pub fn iu<T: PartialOrd>(x: T) -> Interval<T> {
	Interval::new(Endpoint::closed(x), Endpoint::PositiveInfinity)
}
/// An excluded-unbounded interval
///
/// # Panics
///
/// Panics if `x` is not comparable with itself, see [`Endpoint::new()`].
pub fn eu<T: PartialOrd>(x: T) -> Interval<T> {
	Interval::new(Endpoint::open(x), Endpoint::PositiveInfinity)
}
/// An included-included interval
///
/// # Panics
///
/// Panics if `x1` or `x2` is not comparable with itself, see
/// [`Endpoint::new()`].
pub fn ii<T: PartialOrd>(x1: T, x2: T) -> Interval<T> {
	Interval::new(Endpoint::closed(x1), Endpoint::closed(x2))
}
/// An included-excluded interval
///
/// # Panics
///
/// Panics if `x1` or `x2` is not comparable with itself, see
/// [`Endpoint::new()`].
pub fn ie<T: PartialOrd>(x1: T, x2: T) -> Interval<T> {
	Interval::new(Endpoint::closed(x1), Endpoint::open(x2))
}
/// An excluded-included interval
///
/// # Panics
///
/// Panics if `x1` or `x2` is not comparable with itself, see
/// [`Endpoint::new()`].
pub fn ei<T: PartialOrd>(x1: T, x2: T) -> Interval<T> {
	Interval::new(Endpoint::open(x1), Endpoint::closed(x2))
}
/// An excluded-excluded interval
///
/// # Panics
///
/// Panics if `x1` or `x2` is not comparable with itself, see
/// [`Endpoint::new()`].
pub fn ee<T: PartialOrd>(x1: T, x2: T) -> Interval<T> {
	Interval::new(Endpoint::open(x1), Endpoint::open(x2))
}
