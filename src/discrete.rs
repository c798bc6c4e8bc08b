//! A module containing the [`Discrete`] trait and trait impls for the
//! primitive integer datatypes.

/// A trait for point types where every value has a well-defined next value,
/// such as the integers.
///
/// On such types `[5, 7]` and `[8, 10]` leave no value between them, so
/// [`Interval::union_discrete()`](crate::Interval::union_discrete) joins
/// them into `[5, 10]`. On a continuous type like `f64` they stay apart.
pub trait Discrete {
	/// The smallest value greater than `self` if one exists.
	fn up(self) -> Option<Self>
	where
		Self: Sized;
	/// The greatest value smaller than `self` if one exists.
	fn down(self) -> Option<Self>
	where
		Self: Sized;
}

macro_rules! discrete_integers {
	() => {};
	($ident:ident, $($t:tt)*) => {
		impl Discrete for $ident {
			fn up(self) -> Option<Self> {
				self.checked_add(1)
			}
			fn down(self) -> Option<Self> {
				self.checked_sub(1)
			}
		}

		discrete_integers!($($t)*);
	};
}

discrete_integers!(
	u8, i8, u16, i16, u32, i32, u64, i64, u128, i128, usize, isize,
);

impl Discrete for char {
	fn up(self) -> Option<Self> {
		match self {
			'\u{D7FF}' => Some('\u{E000}'),
			x => char::from_u32(u32::from(x) + 1),
		}
	}
	fn down(self) -> Option<Self> {
		match self {
			'\u{E000}' => Some('\u{D7FF}'),
			'\0' => None,
			x => char::from_u32(u32::from(x) - 1),
		}
	}
}
