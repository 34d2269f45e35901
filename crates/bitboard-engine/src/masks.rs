//! Rank, file, and castling mask tables.
//!
//! All masks are computed at compile time and shared as immutable
//! constants; nothing here is ever built or mutated at runtime.

use bitboard_core::{Color, File, NotationError, Rank, Square};

use crate::Bitboard;

/// Precomputed rank masks, indexed by rank (RANKS[0] = rank 1).
pub const RANKS: [Bitboard; 8] = compute_rank_masks();

/// Precomputed file masks, indexed by file (FILES[0] = the a-file).
pub const FILES: [Bitboard; 8] = compute_file_masks();

// Castling masks. PATH squares are crossed by the king and must be empty
// and unattacked; BLOCK squares are only crossed by the rook and must be
// empty but may be attacked.

/// White kingside castling path (f1, g1).
pub const WHITE_KINGSIDE_PATH: Bitboard = Bitboard::from_squares(&[Square::F1, Square::G1]);

/// Black kingside castling path (f8, g8).
pub const BLACK_KINGSIDE_PATH: Bitboard = Bitboard::from_squares(&[Square::F8, Square::G8]);

/// White queenside castling path (c1, d1).
pub const WHITE_QUEENSIDE_PATH: Bitboard = Bitboard::from_squares(&[Square::C1, Square::D1]);

/// Black queenside castling path (c8, d8).
pub const BLACK_QUEENSIDE_PATH: Bitboard = Bitboard::from_squares(&[Square::C8, Square::D8]);

/// The rook's extra transit square for white queenside castling (b1).
pub const WHITE_QUEENSIDE_BLOCK: Bitboard = Bitboard::from_square(Square::B1);

/// The rook's extra transit square for black queenside castling (b8).
pub const BLACK_QUEENSIDE_BLOCK: Bitboard = Bitboard::from_square(Square::B8);

/// Returns the mask of all squares on the given rank.
#[inline]
pub const fn rank_mask(rank: Rank) -> Bitboard {
    RANKS[rank.index() as usize]
}

/// Returns the mask of all squares on the given file.
#[inline]
pub const fn file_mask(file: File) -> Bitboard {
    FILES[file.index() as usize]
}

/// Returns the mask of the given side's back rank.
#[inline]
pub const fn back_rank_mask(color: Color) -> Bitboard {
    rank_mask(color.back_rank())
}

/// Returns the kingside castling path for the given side.
#[inline]
pub const fn kingside_path(color: Color) -> Bitboard {
    match color {
        Color::White => WHITE_KINGSIDE_PATH,
        Color::Black => BLACK_KINGSIDE_PATH,
    }
}

/// Returns the queenside castling path for the given side.
#[inline]
pub const fn queenside_path(color: Color) -> Bitboard {
    match color {
        Color::White => WHITE_QUEENSIDE_PATH,
        Color::Black => BLACK_QUEENSIDE_PATH,
    }
}

/// Returns the queenside rook transit square for the given side.
#[inline]
pub const fn queenside_block(color: Color) -> Bitboard {
    match color {
        Color::White => WHITE_QUEENSIDE_BLOCK,
        Color::Black => BLACK_QUEENSIDE_BLOCK,
    }
}

/// Computes the eight rank masks at compile time.
const fn compute_rank_masks() -> [Bitboard; 8] {
    let mut masks = [Bitboard::EMPTY; 8];
    let mut rank = 0;
    while rank < 8 {
        let mut bb = 0u64;
        let mut file = 0;
        while file < 8 {
            bb |= 1u64 << (rank * 8 + file);
            file += 1;
        }
        masks[rank] = Bitboard(bb);
        rank += 1;
    }
    masks
}

/// Computes the eight file masks at compile time.
const fn compute_file_masks() -> [Bitboard; 8] {
    let mut masks = [Bitboard::EMPTY; 8];
    let mut file = 0;
    while file < 8 {
        let mut bb = 0u64;
        let mut rank = 0;
        while rank < 8 {
            bb |= 1u64 << (rank * 8 + file);
            rank += 1;
        }
        masks[file] = Bitboard(bb);
        file += 1;
    }
    masks
}

impl Bitboard {
    /// Returns the board with each (file letter, rank number) pair set.
    ///
    /// # Example
    ///
    /// ```
    /// use bitboard_engine::Bitboard;
    ///
    /// let board = Bitboard::EMPTY
    ///     .set_by_notation(&[('f', 1), ('g', 1)])
    ///     .unwrap();
    /// assert_eq!(board.0, 96);
    /// ```
    pub fn set_by_notation(self, squares: &[(char, u8)]) -> Result<Bitboard, NotationError> {
        let mut board = self;
        for &(file, rank) in squares {
            board = board.set_square(Square::from_notation(file, rank)?);
        }
        Ok(board)
    }
}
