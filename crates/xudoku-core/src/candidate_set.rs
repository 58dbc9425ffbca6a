//! A bitset of candidate values for one cell.

use std::{
    fmt,
    ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign},
};

/// A set of candidate values `1..=size`, backed by a 64-bit mask.
///
/// Bit `v - 1` represents value `v`, so boards up to
/// [`MAX_SIZE`](Self::MAX_SIZE) values per group are supported. The set
/// itself does not know the board size; constructors that depend on it, such
/// as [`full`](Self::full), take the size explicitly.
///
/// A cell is *solved* when its set holds exactly one value, *contradictory*
/// when it holds none, and *undetermined* otherwise.
///
/// # Examples
///
/// ```
/// use xudoku_core::CandidateSet;
///
/// let mut set = CandidateSet::full(9);
/// set.remove(5);
/// set.remove(7);
///
/// assert_eq!(set.len(), 7);
/// assert!(!set.contains(5));
/// assert!(set.contains(1));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CandidateSet(u64);

impl CandidateSet {
    /// The largest supported board size (values per group).
    pub const MAX_SIZE: u8 = 64;

    /// The set holding no candidates.
    pub const EMPTY: Self = Self(0);

    /// Returns the set holding every value `1..=size`.
    ///
    /// # Panics
    ///
    /// Panics if `size` exceeds [`MAX_SIZE`](Self::MAX_SIZE).
    #[must_use]
    pub fn full(size: u8) -> Self {
        assert!(size <= Self::MAX_SIZE, "board size {size} exceeds 64");
        if size == Self::MAX_SIZE {
            Self(u64::MAX)
        } else {
            Self((1_u64 << size) - 1)
        }
    }

    /// Returns the set holding exactly `value`.
    ///
    /// # Panics
    ///
    /// Panics if `value` is not in `1..=MAX_SIZE`.
    #[must_use]
    pub fn solved(value: u8) -> Self {
        Self(Self::bit(value))
    }

    fn bit(value: u8) -> u64 {
        assert!(
            (1..=Self::MAX_SIZE).contains(&value),
            "value must be in 1..=64, got {value}"
        );
        1_u64 << (value - 1)
    }

    /// Returns `true` if `value` is still a candidate.
    #[must_use]
    pub fn contains(self, value: u8) -> bool {
        self.0 & Self::bit(value) != 0
    }

    /// Adds `value` to the set.
    pub fn insert(&mut self, value: u8) {
        self.0 |= Self::bit(value);
    }

    /// Removes `value` from the set.
    pub fn remove(&mut self, value: u8) {
        self.0 &= !Self::bit(value);
    }

    /// Returns the number of candidates held.
    #[expect(clippy::cast_possible_truncation)]
    #[must_use]
    pub fn len(self) -> u8 {
        // A u64 holds at most 64 set bits.
        self.0.count_ones() as u8
    }

    /// Returns `true` if no candidate remains (a contradiction).
    #[must_use]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns `true` if exactly one candidate remains.
    #[must_use]
    pub fn is_solved(self) -> bool {
        self.0 != 0 && self.0 & (self.0 - 1) == 0
    }

    /// Returns the single remaining value, or `None` if the cell is not
    /// solved.
    #[expect(clippy::cast_possible_truncation)]
    #[must_use]
    pub fn sole_value(self) -> Option<u8> {
        // trailing_zeros of a non-zero u64 is at most 63.
        self.is_solved().then(|| self.0.trailing_zeros() as u8 + 1)
    }

    /// Returns the candidates in `self` that are absent from `other`.
    #[must_use]
    pub fn difference(self, other: Self) -> Self {
        Self(self.0 & !other.0)
    }

    /// Returns `true` if every candidate in `self` is also in `other`.
    #[must_use]
    pub fn is_subset(self, other: Self) -> bool {
        self.0 & !other.0 == 0
    }

    /// Iterates over the values held, in ascending order.
    #[must_use]
    pub fn iter(self) -> Iter {
        Iter(self.0)
    }
}

impl FromIterator<u8> for CandidateSet {
    fn from_iter<T: IntoIterator<Item = u8>>(iter: T) -> Self {
        let mut set = Self::EMPTY;
        for value in iter {
            set.insert(value);
        }
        set
    }
}

impl IntoIterator for CandidateSet {
    type Item = u8;
    type IntoIter = Iter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl BitOr for CandidateSet {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for CandidateSet {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for CandidateSet {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}

impl BitAndAssign for CandidateSet {
    fn bitand_assign(&mut self, rhs: Self) {
        self.0 &= rhs.0;
    }
}

impl fmt::Debug for CandidateSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// Iterator over the values of a [`CandidateSet`], ascending.
#[derive(Debug, Clone)]
pub struct Iter(u64);

impl Iterator for Iter {
    type Item = u8;

    #[expect(clippy::cast_possible_truncation)]
    fn next(&mut self) -> Option<Self::Item> {
        if self.0 == 0 {
            return None;
        }
        let value = self.0.trailing_zeros() as u8 + 1;
        self.0 &= self.0 - 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.0.count_ones() as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for Iter {}
impl std::iter::FusedIterator for Iter {}
