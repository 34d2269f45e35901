//! Core types for 8x8 board coordinates.
//!
//! This crate provides the fundamental types used across the bitboard
//! workspace:
//! - [`Square`], [`File`], and [`Rank`] for board coordinates
//! - [`Color`] for the two sides of the board
//! - Fallible square-notation parsing with [`NotationError`]

mod color;
mod notation;
mod square;

pub use color::Color;
pub use notation::NotationError;
pub use square::{File, Rank, Square};
