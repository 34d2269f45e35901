//! Bitboard representation and operations.
//!
//! A bitboard is a 64-bit integer where each bit represents a square on the
//! chess board. This allows efficient parallel operations on multiple squares.
//!
//! Every operation is a value transformation: methods take `self` by copy
//! and return the resulting board, leaving the receiver untouched.

use bitboard_core::{File, Rank, Square};
use std::fmt;
use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not};

/// A 64-bit board representation.
///
/// Bit 0 = a1, bit 1 = b1, ..., bit 63 = h8 (little-endian rank-file mapping).
#[derive(Clone, Copy, PartialEq, Eq, Default)]
pub struct Bitboard(pub u64);

impl Bitboard {
    /// Empty bitboard (no squares set).
    pub const EMPTY: Bitboard = Bitboard(0);

    /// Full bitboard (all squares set).
    pub const FULL: Bitboard = Bitboard(!0);

    /// Creates a bitboard from a raw u64.
    #[inline]
    pub const fn new(bits: u64) -> Self {
        Bitboard(bits)
    }

    /// Creates a bitboard with a single square set.
    #[inline]
    pub const fn from_square(sq: Square) -> Self {
        Bitboard(sq.bit())
    }

    /// Creates a bitboard with every listed square set.
    #[inline]
    pub const fn from_squares(squares: &[Square]) -> Self {
        let mut bits = 0u64;
        let mut i = 0;
        while i < squares.len() {
            bits |= squares[i].bit();
            i += 1;
        }
        Bitboard(bits)
    }

    /// Returns true if the bitboard is empty.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns the number of set bits (population count).
    #[inline]
    pub const fn count(self) -> u32 {
        self.0.count_ones()
    }

    /// Returns true if the given square is set.
    #[inline]
    pub const fn contains_square(self, sq: Square) -> bool {
        (self.0 & sq.bit()) != 0
    }

    /// Returns the board with the given square set.
    ///
    /// Setting an already-set square is a no-op.
    #[inline]
    #[must_use]
    pub const fn set_square(self, sq: Square) -> Bitboard {
        Bitboard(self.0 | sq.bit())
    }

    /// Returns the board with the given square cleared.
    ///
    /// The clear is a single XOR, so the square must currently be set;
    /// deleting an absent square would set it instead. Debug builds assert
    /// the precondition, release builds trust the caller.
    #[inline]
    #[must_use]
    pub const fn delete_square(self, sq: Square) -> Bitboard {
        debug_assert!(self.0 & sq.bit() != 0);
        Bitboard(self.0 ^ sq.bit())
    }

    /// Returns the board with the set bit moved from `from` to `to`.
    ///
    /// Both updates happen in one XOR, so `from` must be set and `to` must
    /// be clear; violating either corrupts the board. Debug builds assert
    /// both preconditions, release builds trust the caller.
    #[inline]
    #[must_use]
    pub const fn move_bit(self, from: Square, to: Square) -> Bitboard {
        debug_assert!(self.0 & from.bit() != 0);
        debug_assert!(self.0 & to.bit() == 0);
        Bitboard(self.0 ^ (from.bit() | to.bit()))
    }

    /// Returns the index of the least significant set bit (0-63).
    /// Returns None if the bitboard is empty.
    #[inline]
    pub const fn lsb(self) -> Option<u8> {
        if self.is_empty() {
            None
        } else {
            Some(self.0.trailing_zeros() as u8)
        }
    }

    /// Splits off the least significant set bit.
    ///
    /// Returns the board with that bit cleared, together with the square it
    /// occupied. Returns None if the bitboard is empty.
    #[inline]
    #[must_use]
    pub const fn pop_lsb(self) -> Option<(Bitboard, Square)> {
        if self.is_empty() {
            None
        } else {
            let index = self.0.trailing_zeros() as u8;
            // SAFETY: trailing_zeros of a nonzero u64 is in 0-63
            let sq = unsafe { Square::from_index_unchecked(index) };
            Some((Bitboard(self.0 & (self.0 - 1)), sq))
        }
    }
}

macro_rules! impl_bitwise_op {
    ($op:ident, $op_assign:ident, $func:ident, $func_assign:ident) => {
        impl $op for Bitboard {
            type Output = Self;
            #[inline]
            fn $func(self, rhs: Self) -> Self::Output {
                Bitboard(self.0.$func(rhs.0))
            }
        }

        impl $op_assign for Bitboard {
            #[inline]
            fn $func_assign(&mut self, rhs: Self) {
                self.0.$func_assign(rhs.0);
            }
        }
    };
}

impl_bitwise_op!(BitAnd, BitAndAssign, bitand, bitand_assign);
impl_bitwise_op!(BitOr, BitOrAssign, bitor, bitor_assign);
impl_bitwise_op!(BitXor, BitXorAssign, bitxor, bitxor_assign);

impl Not for Bitboard {
    type Output = Self;
    #[inline]
    fn not(self) -> Self::Output {
        Bitboard(!self.0)
    }
}

/// Renders the board as an 8x8 grid of `0`/`1` digits, one rank per line,
/// rank 8 first, files a to h left to right.
impl fmt::Display for Bitboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in Rank::ALL.into_iter().rev() {
            for file in File::ALL {
                if file.index() > 0 {
                    f.write_str(" ")?;
                }
                let digit = self.contains_square(Square::new(file, rank)) as u8;
                write!(f, "{digit}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Bitboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Bitboard({:#018x})", self.0)?;
        for rank in Rank::ALL.into_iter().rev() {
            write!(f, "{} ", rank.number())?;
            for file in File::ALL {
                let glyph = if self.contains_square(Square::new(file, rank)) {
                    "X "
                } else {
                    ". "
                };
                f.write_str(glyph)?;
            }
            writeln!(f)?;
        }
        writeln!(f, "  a b c d e f g h")
    }
}

/// Iterator over set squares in a bitboard, in LSB-first order.
pub struct BitboardIter(Bitboard);

impl Iterator for BitboardIter {
    type Item = Square;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let (rest, sq) = self.0.pop_lsb()?;
        self.0 = rest;
        Some(sq)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let count = self.0.count() as usize;
        (count, Some(count))
    }
}

impl IntoIterator for Bitboard {
    type Item = Square;
    type IntoIter = BitboardIter;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        BitboardIter(self)
    }
}
