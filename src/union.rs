//! The reduction of an unordered collection of bounds into the canonical
//! set: sorted by lower endpoint, pairwise non-overlapping and
//! non-contiguous.

use alloc::vec::Vec;

use itertools::Itertools;
use smallvec::SmallVec;

use crate::Bound;

/// The storage used by [`Interval`](crate::Interval), one bound inline.
pub(crate) type Bounds<T> = SmallVec<[Bound<T>; 1]>;

/// Reduces `bounds` to the canonical set, treating two bounds as one
/// whenever `joins` says so.
///
/// Empty bounds are dropped. The rest are sorted by lower endpoint, with
/// an inclusive lower endpoint ahead of an exclusive one at the same
/// position, and swept left to right: each bound either folds into the
/// last output bound or starts a new one. `joins` must accept every pair
/// of overlapping bounds.
pub(crate) fn reduce<T, I, F>(bounds: I, joins: F) -> Bounds<T>
where
	T: PartialOrd + Clone,
	I: IntoIterator<Item = Bound<T>>,
	F: Fn(&Bound<T>, &Bound<T>) -> bool,
{
	let mut working: Vec<Bound<T>> = bounds.into_iter().collect();
	let input_len = working.len();

	working.retain(|bound| !bound.is_empty());
	working.sort_by(|a, b| a.lower().cmp_with_priority(b.lower(), true));

	let output: Bounds<T> = working
		.into_iter()
		.coalesce(|accumulator, next| match joins(&accumulator, &next) {
			true => Ok(accumulator.hull(&next)),
			false => Err((accumulator, next)),
		})
		.collect();

	log::trace!("reduced {} bounds to {} disjoint bounds", input_len, output.len());

	output
}

/// Reduction where bounds join when they overlap.
pub(crate) fn reduce_overlapping<T, I>(bounds: I) -> Bounds<T>
where
	T: PartialOrd + Clone,
	I: IntoIterator<Item = Bound<T>>,
{
	reduce(bounds, Bound::overlaps)
}
