//! This crate provides [`Interval`], a generic interval type whose
//! endpoints may be open, closed or infinite, along with the operations
//! needed to work with sets of such intervals: containment, overlap,
//! merging, intersection and union into a minimal disjoint set.
//!
//! ## Example
//!
//! ```rust
//! use interval_algebra::interval::{ee, ie, ii, iu, ui};
//! use interval_algebra::{Interval, IntervalError};
//!
//! let a = ii(5, 10);
//!
//! assert_eq!(a.contains(&10), true);
//! assert_eq!(a.intersect(&ii(2, 7)), ii(5, 7));
//! assert_eq!(ui(5).contains(&-1000), true);
//!
//! // touching at a value neither side includes is not overlapping
//! assert_eq!(ie(3, 5).merge(&ee(5, 8)), Err(IntervalError::InvalidOperation));
//!
//! let union = Interval::from_iter([ii(7, 8), ii(2, 5), iu(20)]);
//! assert_eq!(union.to_string(), "[2, 5], [7, 8], [20, +Inf)");
//! assert_eq!(union.contains(&6), false);
//! ```
//!
//! ## Key Understandings and Philosophies:
//!
//! ### Endpoints
//!
//! An [`Endpoint`] is either a finite value together with whether that
//! value is included, or one of the infinite sentinels. The
//! direction-less [`Endpoint::Infinity`] becomes negative infinity on the
//! lower side of a [`Bound`] and positive infinity on the upper side.
//!
//! Endpoints are ordered by position only, so `[5` and `(5` compare as
//! equal. Inclusivity only matters when asking whether a particular value
//! or bound lies before or after an endpoint.
//!
//! ### Empty Bounds
//!
//! A bound whose lower endpoint lies above its upper endpoint is legal,
//! it is simply empty. So is `[5, 5)` and `(5, 5)`, whereas `[5, 5]` holds
//! exactly one value and is called degenerate.
//!
//! | bound      | empty | degenerate |
//! | ---------- | ----- | ---------- |
//! | `[1, 2]`   | NO    | NO         |
//! | `[2, 2]`   | NO    | YES        |
//! | `[2, 2)`   | YES   | NO         |
//! | `(2, 1]`   | YES   | NO         |
//!
//! ### Overlap
//!
//! Two bounds are "overlapping" if there exists a value contained within
//! both, or if they meet at a value that at least one of them includes.
//! For example `[2, 7]` overlaps `(7, 8]` but `[2, 7)` does not.
//!
//! ### Merging
//!
//! When a bound "merges" an overlapping bound it absorbs it to become
//! larger. Where both have an endpoint at the same position the inclusive
//! one is kept.
//!
//! ### Union
//!
//! Any collection of intervals can be reduced to the canonical set of
//! bounds: sorted by lower endpoint, with no two overlapping. On
//! [`Discrete`] types, [`Interval::union_discrete()`] also joins bounds
//! with no value between them, such as `[5, 7]` and `[8, 10]`.
//!
//! ### Text Form
//!
//! Intervals print as `[lower, upper]` with a round bracket on any
//! excluded side, `-Inf`/`+Inf` for infinite endpoints, `∅` when empty,
//! and several bounds joined by `", "`. The same form can be parsed back
//! with [`str::parse()`].
//!
//! ## Features
//!
//! - `serde`: implements `Serialize` and `Deserialize` for [`Endpoint`],
//!   [`Bound`] and [`Interval`].
//!
//! ## Further Reading
//!
//! See Wikipedia's article on mathematical Intervals:
//! <https://en.wikipedia.org/wiki/Interval_(mathematics)>

#![no_std]
#![allow(clippy::tabs_in_doc_comments)]

extern crate alloc;

pub mod bound;
pub mod discrete;
pub mod endpoint;
pub mod error;
pub mod interval;

mod parse;
mod union;

pub use crate::bound::Bound;
pub use crate::discrete::Discrete;
pub use crate::endpoint::Endpoint;
pub use crate::error::IntervalError;
pub use crate::interval::{contains_any, Interval};
