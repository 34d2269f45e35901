//! Whole-board rotations and the diagonal layout tables.
//!
//! The 90-degree transforms go through an explicit 8x8 matrix view of the
//! board. The 45-degree transforms re-pack the board's diagonals into
//! contiguous bit runs, so a diagonal's occupancy can be read out of the
//! rotated board the same way a rank is read out of an unrotated one;
//! [`DIAG_LEN`] and [`DIAG_SHIFT`] describe where each run lands.
//!
//! Rotations are described as acting on the board as conventionally
//! printed: rank 8 on top, file a on the left.

use bitboard_core::Square;

use crate::Bitboard;

/// Direction selector for [`Bitboard::rotate45`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Diagonal {
    /// Anti-diagonals, running from upper left to lower right (file plus
    /// rank constant).
    Left,
    /// Diagonals running from lower left to upper right (file minus rank
    /// constant).
    Right,
}

/// Lengths of the 15 diagonal runs in a 45-degree rotated board, from the
/// single-square corner run up to the 8-square main diagonal and back.
pub const DIAG_LEN: [u8; 15] = compute_diag_lengths();

/// Bit offset where each diagonal run starts in a 45-degree rotated board.
/// `DIAG_SHIFT[d]` is the sum of the lengths of runs `0..d`.
pub const DIAG_SHIFT: [u8; 15] = compute_diag_shifts();

const fn compute_diag_lengths() -> [u8; 15] {
    let mut lengths = [0u8; 15];
    let mut d = 0;
    while d < 15 {
        lengths[d] = if d < 8 { d as u8 + 1 } else { 15 - d as u8 };
        d += 1;
    }
    lengths
}

const fn compute_diag_shifts() -> [u8; 15] {
    let mut shifts = [0u8; 15];
    let mut shift = 0u8;
    let mut d = 0;
    while d < 15 {
        shifts[d] = shift;
        shift += DIAG_LEN[d];
        d += 1;
    }
    shifts
}

/// 8x8 matrix view of a board, `matrix[rank][file]`, cells 0 or 1.
type Matrix = [[u8; 8]; 8];

/// Unpacks a bitboard into a matrix.
const fn to_matrix(board: Bitboard) -> Matrix {
    let mut m = [[0u8; 8]; 8];
    let mut sq = 0;
    while sq < 64 {
        m[sq / 8][sq % 8] = ((board.0 >> sq) & 1) as u8;
        sq += 1;
    }
    m
}

/// Packs a matrix back into a bitboard. Exact inverse of [`to_matrix`].
const fn from_matrix(m: &Matrix) -> Bitboard {
    let mut bits = 0u64;
    let mut sq = 0;
    while sq < 64 {
        bits |= (m[sq / 8][sq % 8] as u64) << sq;
        sq += 1;
    }
    Bitboard(bits)
}

/// Rotates a matrix a quarter turn clockwise (as printed, a1 lands on a8).
const fn rotate_matrix_clockwise(m: &Matrix) -> Matrix {
    let mut out = [[0u8; 8]; 8];
    let mut r = 0;
    while r < 8 {
        let mut c = 0;
        while c < 8 {
            out[r][c] = m[c][7 - r];
            c += 1;
        }
        r += 1;
    }
    out
}

/// Rotates a matrix a quarter turn counterclockwise (a1 lands on h1).
const fn rotate_matrix_counterclockwise(m: &Matrix) -> Matrix {
    let mut out = [[0u8; 8]; 8];
    let mut r = 0;
    while r < 8 {
        let mut c = 0;
        while c < 8 {
            out[r][c] = m[7 - c][r];
            c += 1;
        }
        r += 1;
    }
    out
}

/// Reverses the rank order of a matrix (a1 lands on a8).
const fn flip_matrix_vertical(m: &Matrix) -> Matrix {
    let mut out = [[0u8; 8]; 8];
    let mut r = 0;
    while r < 8 {
        out[r] = m[7 - r];
        r += 1;
    }
    out
}

/// Concatenates the matrix diagonals into one 64-bit value, shortest
/// corner run first, cells within a run in increasing row order.
const fn pack_diagonals(m: &Matrix) -> Bitboard {
    let mut bits = 0u64;
    let mut d = 0;
    while d < 15 {
        // Runs 0-7 start on the first rank, runs 8-14 on the a-file
        let (mut row, mut col) = if d < 8 { (0, 7 - d) } else { (d - 7, 0) };
        let mut k = 0u8;
        while k < DIAG_LEN[d] {
            bits |= (m[row][col] as u64) << (DIAG_SHIFT[d] + k);
            row += 1;
            col += 1;
            k += 1;
        }
        d += 1;
    }
    Bitboard(bits)
}

impl Bitboard {
    /// Returns the board rotated a quarter turn counterclockwise: a1 moves
    /// to h1, h1 to h8, h8 to a8. Four applications return the original
    /// board.
    #[must_use]
    pub const fn rotate90_counterclockwise(self) -> Bitboard {
        from_matrix(&rotate_matrix_counterclockwise(&to_matrix(self)))
    }

    /// Returns the board rotated a quarter turn clockwise and then flipped
    /// top to bottom.
    ///
    /// The composite mirrors the board about the a1-h8 diagonal, so rank
    /// `f` of the result holds the occupancy of file `f` indexed by rank:
    /// `rotated.0 >> (8 * f) & 0xFF`. Applying the transform twice returns
    /// the original board.
    #[must_use]
    pub const fn rotate90_clockwise_mirrored(self) -> Bitboard {
        let rotated = rotate_matrix_clockwise(&to_matrix(self));
        from_matrix(&flip_matrix_vertical(&rotated))
    }

    /// Returns the board with its ranks in reverse order (the view from
    /// the other side of the table). Equivalent to a byte swap of the
    /// underlying u64.
    #[must_use]
    pub const fn flip_vertical(self) -> Bitboard {
        Bitboard(self.0.swap_bytes())
    }

    /// Returns the board with each diagonal's squares re-packed into a
    /// contiguous bit run.
    ///
    /// `Right` packs the lower-left-to-upper-right diagonals starting from
    /// the h1 corner; `Left` packs the anti-diagonals starting from the h8
    /// corner. Runs concatenate without padding, so the result is a
    /// permutation of the 64 bits and only meaningful to diagonal-aware
    /// readers such as [`diagonal_occupancy`].
    #[must_use]
    pub const fn rotate45(self, diagonal: Diagonal) -> Bitboard {
        let m = to_matrix(self);
        let m = match diagonal {
            Diagonal::Right => m,
            Diagonal::Left => flip_matrix_vertical(&m),
        };
        pack_diagonals(&m)
    }
}

/// Returns which of the 15 diagonal runs holds the given square after
/// [`Bitboard::rotate45`] in the given direction.
#[inline]
pub const fn diagonal_index(sq: Square, diagonal: Diagonal) -> usize {
    let file = sq.file().index() as usize;
    let rank = sq.rank().index() as usize;
    match diagonal {
        Diagonal::Right => 7 - file + rank,
        Diagonal::Left => 14 - file - rank,
    }
}

/// Extracts the occupancy of the diagonal run holding `sq` from a board
/// already rotated 45 degrees in the same direction.
///
/// The low [`DIAG_LEN`]`[d]` bits of the result are the run's squares in
/// the run's packing order.
#[inline]
pub const fn diagonal_occupancy(rotated: Bitboard, sq: Square, diagonal: Diagonal) -> u8 {
    let d = diagonal_index(sq, diagonal);
    ((rotated.0 >> DIAG_SHIFT[d]) & ((1u64 << DIAG_LEN[d]) - 1)) as u8
}

/// Extracts the occupancy of the rank holding `sq` from an unrotated board.
///
/// Bit `f` of the result is the square on file `f` of that rank.
#[inline]
pub const fn rank_occupancy(board: Bitboard, sq: Square) -> u8 {
    (board.0 >> (sq.rank().index() * 8)) as u8
}

/// Extracts the occupancy of the file holding `sq` from a board already
/// rotated with [`Bitboard::rotate90_clockwise_mirrored`].
///
/// Bit `r` of the result is the square on rank `r` of that file.
#[inline]
pub const fn file_occupancy(rotated: Bitboard, sq: Square) -> u8 {
    (rotated.0 >> (sq.file().index() * 8)) as u8
}
