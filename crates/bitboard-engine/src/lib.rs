//! 64-bit board representation and whole-board transforms.
//!
//! This crate provides:
//! - [`Bitboard`] - a 64-bit board where each bit is one square
//! - [`masks`] - rank, file, and castling mask tables
//! - [`rotate`] - 90- and 45-degree rotations and the diagonal layout
//!   tables that make rotated occupancy lookups possible
//!
//! # Architecture
//!
//! A bitboard packs one bit per square in little-endian rank-file order
//! (a1 = bit 0, h8 = bit 63). Every operation takes the board by value and
//! returns a new board; there is no shared or interior mutability anywhere
//! in the crate, so boards can be freely copied across threads.
//!
//! # Example
//!
//! ```
//! use bitboard_core::Square;
//! use bitboard_engine::Bitboard;
//!
//! let board = Bitboard::EMPTY
//!     .set_square(Square::F1)
//!     .set_square(Square::G1);
//! assert_eq!(board.0, 96);
//!
//! let (rest, lowest) = board.pop_lsb().unwrap();
//! assert_eq!(lowest, Square::F1);
//! assert_eq!(rest, Bitboard::from_square(Square::G1));
//!
//! let rotated = board.rotate90_clockwise_mirrored();
//! assert_eq!(rotated.count(), board.count());
//! ```

mod bitboard;
pub mod masks;
pub mod rotate;

pub use bitboard::{Bitboard, BitboardIter};
pub use rotate::Diagonal;
