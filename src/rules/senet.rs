//! The Senet ruleset.
//!
//! - A throw moves one piece exactly that many cells forward
//! - Landing on a lone opposing piece swaps it back to the mover's origin
//! - Moving to or past the end of the track bears the piece off
//! - The first side to bear off all five pieces wins
//! - Turns always alternate

use tracing::debug;

use crate::board::Board;
use crate::core::{EngineError, Player};

use super::engine::RulesEngine;
use super::houses::{self, HouseEffect};
use super::moves::{self, Destination, MoveOutcome, ValidMoves};

/// The single fixed Senet ruleset.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SenetRules;

impl RulesEngine for SenetRules {
    fn valid_moves(&self, board: &Board, player: Player, dice: u8) -> ValidMoves {
        moves::valid_moves(board, player, dice)
    }

    fn apply_move(
        &self,
        board: &mut Board,
        player: Player,
        origin: usize,
        dice: u8,
    ) -> Result<MoveOutcome, EngineError> {
        if dice == 0 {
            return Err(EngineError::NoRollPending);
        }
        if !moves::is_legal(board, player, origin, dice) {
            return Err(EngineError::InvalidMove { origin, dice });
        }

        let landing = Destination::from_move(origin, dice);
        let piece = board.take(origin);

        let mut outcome = MoveOutcome {
            player,
            origin,
            dice,
            landing,
            resting: None,
            captured: None,
            house_effect: HouseEffect::None,
        };

        let Destination::Cell(to) = landing else {
            debug!(%player, origin, "piece borne off");
            return Ok(outcome);
        };

        let opponent = player.opponent();
        if board[to].is_owned_by(opponent) {
            board.place(origin, opponent.into());
            outcome.captured = Some(origin);
            debug!(%player, origin, to, "captured opposing piece");
        }
        board.place(to, piece);

        outcome.house_effect = houses::resolve_landing(board, to);
        outcome.resting = Some(houses::resting_cell(to, outcome.house_effect));
        if let HouseEffect::SentBack { to: back } = outcome.house_effect {
            debug!(%player, landed = to, sent_to = back, "house sent piece back");
        }

        Ok(outcome)
    }

    fn winner(&self, board: &Board) -> Option<Player> {
        Player::ALL.into_iter().find(|&p| board.count(p) == 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Occupant, HOUSE_OF_WATER, SAFE_HOUSE};

    #[test]
    fn test_simple_step() {
        let mut board = Board::new();
        let outcome = SenetRules.apply_move(&mut board, Player::Dark, 9, 2).unwrap();

        assert_eq!(outcome.landing, Destination::Cell(11));
        assert_eq!(outcome.resting, Some(11));
        assert!(!outcome.is_capture());
        assert_eq!(board[9], Occupant::Empty);
        assert_eq!(board[11], Occupant::Dark);
    }

    #[test]
    fn test_capture_swaps_pieces() {
        let mut board = Board::new();
        let outcome = SenetRules.apply_move(&mut board, Player::Light, 4, 1).unwrap();

        assert_eq!(outcome.captured, Some(4));
        assert_eq!(board[4], Occupant::Dark);
        assert_eq!(board[5], Occupant::Light);
        assert_eq!(board.count(Player::Dark), 5);
        assert_eq!(board.count(Player::Light), 5);
    }

    #[test]
    fn test_bear_off_removes_piece() {
        let mut board = Board::with_pieces(&[27, 3], &[6]);
        let outcome = SenetRules.apply_move(&mut board, Player::Light, 27, 3).unwrap();

        assert!(outcome.is_bear_off());
        assert_eq!(outcome.resting, None);
        assert_eq!(board.count(Player::Light), 1);
    }

    #[test]
    fn test_illegal_move_leaves_board_untouched() {
        let mut board = Board::with_pieces(&[11], &[SAFE_HOUSE]);
        let before = board;

        let err = SenetRules.apply_move(&mut board, Player::Light, 11, 3).unwrap_err();
        assert_eq!(err, EngineError::InvalidMove { origin: 11, dice: 3 });
        assert_eq!(board, before);

        let err = SenetRules.apply_move(&mut board, Player::Light, 11, 0).unwrap_err();
        assert_eq!(err, EngineError::NoRollPending);
        assert_eq!(board, before);
    }

    #[test]
    fn test_water_returns_piece() {
        let mut board = Board::with_pieces(&[23, 0], &[1]);
        let outcome = SenetRules.apply_move(&mut board, Player::Light, 23, 3).unwrap();

        assert_eq!(outcome.landing, Destination::Cell(HOUSE_OF_WATER));
        assert_eq!(outcome.house_effect, HouseEffect::SentBack { to: 2 });
        assert_eq!(outcome.resting, Some(2));
        assert_eq!(board[HOUSE_OF_WATER], Occupant::Empty);
        assert_eq!(board[2], Occupant::Light);
    }

    #[test]
    fn test_water_returns_dark_piece_to_dark_start() {
        let mut board = Board::with_pieces(&[20], &[24, 6]);
        let outcome = SenetRules.apply_move(&mut board, Player::Dark, 24, 2).unwrap();

        assert_eq!(outcome.landing, Destination::Cell(HOUSE_OF_WATER));
        assert_eq!(outcome.house_effect, HouseEffect::SentBack { to: 5 });
        assert_eq!(outcome.resting, Some(5));
        assert_eq!(board[0], Occupant::Empty);
        assert_eq!(board[5], Occupant::Dark);
        assert_eq!(board.to_string(), ".....DD.............L.........");
    }

    #[test]
    fn test_winner() {
        assert_eq!(SenetRules.winner(&Board::new()), None);
        assert_eq!(SenetRules.winner(&Board::with_pieces(&[], &[3])), Some(Player::Light));
        assert_eq!(SenetRules.winner(&Board::with_pieces(&[3], &[])), Some(Player::Dark));
    }

    #[test]
    fn test_no_extra_turns() {
        for dice in 1..=4 {
            assert!(!SenetRules.grants_extra_turn(dice));
        }
    }
}
