//! Property-based tests for bit primitives, masks, and transforms.

use bitboard_core::{Rank, Square};
use bitboard_engine::{masks, rotate, Bitboard, Diagonal};
use proptest::prelude::*;

fn square(index: u8) -> Square {
    Square::from_index(index).unwrap()
}

proptest! {
    #[test]
    fn set_then_contains(bits in any::<u64>(), index in 0u8..64) {
        let sq = square(index);
        let board = Bitboard::new(bits).set_square(sq);
        prop_assert!(board.contains_square(sq));
        prop_assert_eq!(board.0, bits | (1u64 << index));
    }

    #[test]
    fn delete_clears_only_that_bit(bits in any::<u64>(), index in 0u8..64) {
        let sq = square(index);
        let board = Bitboard::new(bits).set_square(sq);
        let after = board.delete_square(sq);
        prop_assert!(!after.contains_square(sq));
        prop_assert_eq!(after.0, board.0 & !(1u64 << index));
    }

    #[test]
    fn move_bit_moves_exactly_one_bit(bits in any::<u64>(), from in 0u8..64, to in 0u8..64) {
        prop_assume!(from != to);
        let board = Bitboard::new((bits | (1u64 << from)) & !(1u64 << to));
        let after = board.move_bit(square(from), square(to));
        prop_assert!(!after.contains_square(square(from)));
        prop_assert!(after.contains_square(square(to)));
        prop_assert_eq!(after.count(), board.count());
        let untouched = !(1u64 << from) & !(1u64 << to);
        prop_assert_eq!(after.0 & untouched, board.0 & untouched);
    }

    #[test]
    fn pop_lsb_returns_the_lowest_set_bit(bits in any::<u64>()) {
        let board = Bitboard::new(bits);
        match board.pop_lsb() {
            None => prop_assert!(board.is_empty()),
            Some((rest, sq)) => {
                prop_assert!(board.contains_square(sq));
                for below in 0..sq.index() {
                    prop_assert!(!board.contains_square(square(below)));
                }
                prop_assert_eq!(rest, board.delete_square(sq));
            }
        }
    }

    #[test]
    fn pop_lsb_drains_in_ascending_order(bits in any::<u64>()) {
        let mut board = Bitboard::new(bits);
        let mut prev: Option<u8> = None;
        let mut rebuilt = Bitboard::EMPTY;
        let mut steps = 0u32;
        while let Some((rest, sq)) = board.pop_lsb() {
            if let Some(p) = prev {
                prop_assert!(sq.index() > p);
            }
            prev = Some(sq.index());
            rebuilt = rebuilt.set_square(sq);
            board = rest;
            steps += 1;
        }
        prop_assert_eq!(steps, Bitboard::new(bits).count());
        prop_assert_eq!(rebuilt, Bitboard::new(bits));
    }

    #[test]
    fn iterator_visits_every_set_square(bits in any::<u64>()) {
        let board = Bitboard::new(bits);
        let squares: Vec<Square> = board.into_iter().collect();
        prop_assert_eq!(squares.len() as u32, board.count());
        for sq in &squares {
            prop_assert!(board.contains_square(*sq));
        }
    }

    #[test]
    fn display_has_one_digit_per_square(bits in any::<u64>()) {
        let board = Bitboard::new(bits);
        let rendered = board.to_string();
        let ones = rendered.chars().filter(|&c| c == '1').count();
        let zeros = rendered.chars().filter(|&c| c == '0').count();
        prop_assert_eq!(ones as u32, board.count());
        prop_assert_eq!(ones + zeros, 64);
    }
}

proptest! {
    #[test]
    fn counterclockwise_four_times_is_identity(bits in any::<u64>()) {
        let board = Bitboard::new(bits);
        let turned = board
            .rotate90_counterclockwise()
            .rotate90_counterclockwise()
            .rotate90_counterclockwise()
            .rotate90_counterclockwise();
        prop_assert_eq!(turned, board);
    }

    #[test]
    fn mirrored_rotation_is_involution(bits in any::<u64>()) {
        let board = Bitboard::new(bits);
        prop_assert_eq!(
            board.rotate90_clockwise_mirrored().rotate90_clockwise_mirrored(),
            board
        );
    }

    #[test]
    fn flip_vertical_is_involution(bits in any::<u64>()) {
        let board = Bitboard::new(bits);
        prop_assert_eq!(board.flip_vertical().flip_vertical(), board);
    }

    #[test]
    fn counterclockwise_equals_flip_then_mirror(bits in any::<u64>()) {
        let board = Bitboard::new(bits);
        prop_assert_eq!(
            board.flip_vertical().rotate90_clockwise_mirrored(),
            board.rotate90_counterclockwise()
        );
    }

    #[test]
    fn transforms_preserve_population(bits in any::<u64>()) {
        let board = Bitboard::new(bits);
        let n = board.count();
        prop_assert_eq!(board.rotate90_counterclockwise().count(), n);
        prop_assert_eq!(board.rotate90_clockwise_mirrored().count(), n);
        prop_assert_eq!(board.flip_vertical().count(), n);
        prop_assert_eq!(board.rotate45(Diagonal::Left).count(), n);
        prop_assert_eq!(board.rotate45(Diagonal::Right).count(), n);
    }

    #[test]
    fn rotate45_distributes_over_union(a in any::<u64>(), b in any::<u64>()) {
        for diagonal in [Diagonal::Left, Diagonal::Right] {
            let joint = (Bitboard::new(a) | Bitboard::new(b)).rotate45(diagonal);
            let separate =
                Bitboard::new(a).rotate45(diagonal) | Bitboard::new(b).rotate45(diagonal);
            prop_assert_eq!(joint, separate);
        }
    }

    #[test]
    fn diagonal_occupancy_tracks_membership(bits in any::<u64>(), index in 0u8..64) {
        let board = Bitboard::new(bits);
        let sq = square(index);
        let rank = sq.rank().index();
        let file = sq.file().index();
        for (diagonal, k) in [
            (Diagonal::Right, rank.min(file)),
            (Diagonal::Left, (7 - rank).min(file)),
        ] {
            let rotated = board.rotate45(diagonal);
            let run = rotate::diagonal_occupancy(rotated, sq, diagonal);
            prop_assert_eq!((run >> k) & 1 == 1, board.contains_square(sq));
        }
    }

    #[test]
    fn line_occupancy_tracks_membership(bits in any::<u64>(), index in 0u8..64) {
        let board = Bitboard::new(bits);
        let sq = square(index);
        let rank_run = rotate::rank_occupancy(board, sq);
        prop_assert_eq!(
            (rank_run >> sq.file().index()) & 1 == 1,
            board.contains_square(sq)
        );
        let file_run = rotate::file_occupancy(board.rotate90_clockwise_mirrored(), sq);
        prop_assert_eq!(
            (file_run >> sq.rank().index()) & 1 == 1,
            board.contains_square(sq)
        );
    }
}

proptest! {
    #[test]
    fn each_square_in_its_rank_and_file_mask(index in 0u8..64) {
        let sq = square(index);
        prop_assert!(masks::rank_mask(sq.rank()).contains_square(sq));
        prop_assert!(masks::file_mask(sq.file()).contains_square(sq));
        for rank in Rank::ALL {
            prop_assert_eq!(
                masks::rank_mask(rank).contains_square(sq),
                rank == sq.rank()
            );
        }
    }

    #[test]
    fn set_by_notation_matches_squares(file in prop::char::range('a', 'h'), rank in 1..=8u8) {
        let board = Bitboard::EMPTY.set_by_notation(&[(file, rank)]).unwrap();
        let sq = Square::from_notation(file, rank).unwrap();
        prop_assert_eq!(sq.index(), (file as u8 - b'a') + (rank - 1) * 8);
        prop_assert_eq!(board, Bitboard::from_square(sq));
    }
}
