//! A fixed-size coordinate set packed into a single unsigned integer.
//!
//! The type is `no_std` friendly and avoids heap allocations. An `N×N` grid
//! is stored row-major in `T`, one bit per cell. The engine uses the 10×10
//! `u128` flavour (`CellSet`) for firing histories and ship hit sets.

use core::ops::{BitAnd, BitOr, Not};
use core::{fmt, mem};
use num_traits::{PrimInt, Unsigned, Zero};

use crate::common::Coord;
use crate::config::GRID_SIZE;

/// Errors returned by bitboard operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BitBoardError {
    /// Requested board size N*N exceeds capacity of `T::BITS`.
    SizeTooLarge { n: usize, capacity: usize },
    /// Row or column index is out of bounds [0..N).
    OutOfBounds { row: usize, col: usize },
}

impl fmt::Display for BitBoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BitBoardError::SizeTooLarge { n, capacity } => {
                write!(f, "grid of {}x{} does not fit in {} bits", n, n, capacity)
            }
            BitBoardError::OutOfBounds { row, col } => {
                write!(f, "cell ({}, {}) is outside the grid", row, col)
            }
        }
    }
}

/// A set of cells on an N×N grid stored in the unsigned integer `T`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct BitBoard<T, const N: usize>
where
    T: PrimInt + Unsigned + Zero,
{
    bits: T,
}

/// The coordinate set used throughout the engine.
pub type CellSet = BitBoard<u128, GRID_SIZE>;

impl<T, const N: usize> BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    const CELLS: usize = N * N;

    #[inline]
    fn mask() -> T {
        if Self::CELLS == mem::size_of::<T>() * 8 {
            !T::zero()
        } else {
            (T::one() << Self::CELLS) - T::one()
        }
    }

    #[inline]
    fn bit(row: usize, col: usize) -> Result<T, BitBoardError> {
        if row >= N || col >= N {
            return Err(BitBoardError::OutOfBounds { row, col });
        }
        Ok(T::one() << (row * N + col))
    }

    /// Empty set, without checking that `N*N` fits in `T`.
    #[inline]
    pub fn new() -> Self {
        BitBoard { bits: T::zero() }
    }

    /// Fallible constructor: returns `Err(SizeTooLarge)` if N*N > T::BITS.
    pub fn try_new() -> Result<Self, BitBoardError> {
        let capacity = mem::size_of::<T>() * 8;
        if Self::CELLS > capacity {
            Err(BitBoardError::SizeTooLarge { n: N, capacity })
        } else {
            Ok(Self::new())
        }
    }

    /// Builds a set from an iterator of cells; fails on the first cell off the grid.
    pub fn from_cells<I>(cells: I) -> Result<Self, BitBoardError>
    where
        I: IntoIterator<Item = Coord>,
    {
        let mut set = Self::new();
        for cell in cells {
            set.insert(cell)?;
        }
        Ok(set)
    }

    /// `true` when `cell` is in the set. Cells off the grid are never members.
    #[inline]
    pub fn contains(&self, (row, col): Coord) -> bool {
        match Self::bit(row, col) {
            Ok(bit) => (self.bits & bit) != T::zero(),
            Err(_) => false,
        }
    }

    /// Adds `cell`, returning `true` if it was not already present.
    pub fn insert(&mut self, (row, col): Coord) -> Result<bool, BitBoardError> {
        let bit = Self::bit(row, col)?;
        let fresh = (self.bits & bit).is_zero();
        self.bits = self.bits | bit;
        Ok(fresh)
    }

    /// Removes `cell`, returning `true` if it was present.
    pub fn remove(&mut self, (row, col): Coord) -> Result<bool, BitBoardError> {
        let bit = Self::bit(row, col)?;
        let present = !(self.bits & bit).is_zero();
        self.bits = self.bits & !bit;
        Ok(present)
    }

    /// Number of cells in the set.
    #[inline]
    pub fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bits.is_zero()
    }

    /// Every in-grid cell that is not in this set.
    #[inline]
    pub fn complement(&self) -> Self {
        BitBoard {
            bits: !self.bits & Self::mask(),
        }
    }

    /// Cells of the set in row-major order.
    pub fn iter(&self) -> Cells<T, N> {
        Cells {
            bits: self.bits,
            idx: 0,
        }
    }
}

impl<T, const N: usize> Default for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const N: usize> fmt::Debug for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T, const N: usize> fmt::Display for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..N {
            for c in 0..N {
                let ch = if self.contains((r, c)) { '■' } else { '□' };
                write!(f, "{} ", ch)?;
            }
            if r + 1 < N {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

/// Iterator over the cells of a bitboard, row-major.
#[derive(Clone, Copy)]
pub struct Cells<T, const N: usize>
where
    T: PrimInt + Unsigned + Zero,
{
    bits: T,
    idx: usize,
}

impl<T, const N: usize> Iterator for Cells<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    type Item = Coord;

    fn next(&mut self) -> Option<Coord> {
        while self.idx < N * N {
            let idx = self.idx;
            self.idx += 1;
            if ((self.bits >> idx) & T::one()) != T::zero() {
                return Some((idx / N, idx % N));
            }
        }
        None
    }
}

impl<T, const N: usize> BitAnd for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    type Output = Self;
    fn bitand(self, rhs: Self) -> Self {
        BitBoard {
            bits: self.bits & rhs.bits,
        }
    }
}

impl<T, const N: usize> BitOr for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    type Output = Self;
    fn bitor(self, rhs: Self) -> Self {
        BitBoard {
            bits: self.bits | rhs.bits,
        }
    }
}

impl<T, const N: usize> Not for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    type Output = Self;
    fn not(self) -> Self {
        self.complement()
    }
}
