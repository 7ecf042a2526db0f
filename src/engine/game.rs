//! Game engine: turn sequencing, dice and win detection.

use tracing::{debug, info};

use crate::board::{Board, PIECES_PER_SIDE};
use crate::core::{EngineConfig, EngineError, Player, PositionError};
use crate::dice::{Dice, MAX_THROW};
use crate::history::{MoveLog, MoveRecord};
use crate::rules::{Destination, RulesEngine, SenetRules, ValidMoves};

use super::snapshot::GameSnapshot;

/// One Senet game.
///
/// ## Turn cycle
///
/// 1. `roll_dice` stores a throw
/// 2. `get_valid_moves` lists the pieces that can use it
/// 3. `make_move` moves one of them, or `pass_turn` if the list is empty
///
/// Every rejected call returns an `EngineError` and leaves the game as it
/// was.
///
/// ```
/// use senet_engine::GameEngine;
///
/// let mut game = GameEngine::with_seed(42);
/// let throw = game.roll_dice().unwrap();
/// assert!((1..=4).contains(&throw));
///
/// match game.get_valid_moves().first() {
///     Some(&origin) => {
///         game.make_move(origin).unwrap();
///     }
///     None => game.pass_turn().unwrap(),
/// }
/// assert_eq!(game.dice_value(), 0);
/// ```
#[derive(Clone, Debug)]
pub struct GameEngine {
    board: Board,
    current_player: Player,
    dice_value: u8,
    game_over: bool,
    winner: Option<Player>,
    move_count: u32,
    history: MoveLog,
    dice: Dice,
    rules: SenetRules,
}

impl GameEngine {
    /// Start a new game.
    #[must_use]
    pub fn new(config: &EngineConfig) -> Self {
        Self {
            board: Board::new(),
            current_player: Player::Light,
            dice_value: 0,
            game_over: false,
            winner: None,
            move_count: 0,
            history: MoveLog::with_limit(config.history_limit),
            dice: Dice::new(config.rng()),
            rules: SenetRules,
        }
    }

    /// Start a new game with deterministic throws.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self::new(&EngineConfig::default().with_seed(seed))
    }

    /// Start from a custom position.
    ///
    /// Pieces missing from the board count as borne off. If a side has
    /// none left the game starts already won.
    pub fn from_position(
        board: Board,
        current_player: Player,
        config: &EngineConfig,
    ) -> Result<Self, PositionError> {
        validate_position(&board)?;

        let mut game = Self::new(config);
        game.board = board;
        game.current_player = current_player;
        game.check_win();
        Ok(game)
    }

    /// Resume a game from a snapshot.
    ///
    /// Snapshots do not carry the move log, so the restored game keeps
    /// `move_count` (record numbers continue from it) with an empty
    /// `history()`. A snapshot whose status fields disagree with each other
    /// or with the board is refused.
    pub fn restore(snapshot: &GameSnapshot, config: &EngineConfig) -> Result<Self, PositionError> {
        validate_position(&snapshot.board)?;
        validate_status(snapshot)?;

        let mut game = Self::new(config);
        game.board = snapshot.board;
        game.current_player = snapshot.current_player;
        game.dice_value = snapshot.dice_value;
        game.game_over = snapshot.game_over;
        game.winner = snapshot.winner;
        game.move_count = snapshot.move_count;
        game.dice = Dice::from_state(&snapshot.rng);
        Ok(game)
    }

    /// Capture the full game state.
    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            board: self.board,
            current_player: self.current_player,
            dice_value: self.dice_value,
            game_over: self.game_over,
            winner: self.winner,
            move_count: self.move_count,
            rng: self.dice.state(),
        }
    }

    // === Accessors ===

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Pending throw, 0 when none.
    #[must_use]
    pub fn dice_value(&self) -> u8 {
        self.dice_value
    }

    #[must_use]
    pub fn game_over(&self) -> bool {
        self.game_over
    }

    #[must_use]
    pub fn winner(&self) -> Option<Player> {
        self.winner
    }

    /// Successful moves since the game started.
    #[must_use]
    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    /// Moves of the current game.
    #[must_use]
    pub fn history(&self) -> &MoveLog {
        &self.history
    }

    #[must_use]
    pub fn pieces_on_board(&self, player: Player) -> usize {
        self.board.count(player)
    }

    #[must_use]
    pub fn borne_off(&self, player: Player) -> usize {
        PIECES_PER_SIDE - self.board.count(player)
    }

    // === Operations ===

    /// Throw the sticks for the current player.
    pub fn roll_dice(&mut self) -> Result<u8, EngineError> {
        if self.game_over {
            return Err(self.reject(EngineError::GameAlreadyOver));
        }
        if self.dice_value != 0 {
            return Err(self.reject(EngineError::RerollNotAllowed {
                pending: self.dice_value,
            }));
        }

        self.dice_value = self.dice.throw();
        debug!(player = %self.current_player, dice = self.dice_value, "dice rolled");
        Ok(self.dice_value)
    }

    /// Origins of the current player's legal moves for the pending throw.
    ///
    /// Empty when no throw is pending, the game is over, or nothing can move.
    #[must_use]
    pub fn get_valid_moves(&self) -> ValidMoves {
        self.try_valid_moves().unwrap_or_default()
    }

    /// Like `get_valid_moves`, but says why nothing is listed.
    pub fn try_valid_moves(&self) -> Result<ValidMoves, EngineError> {
        if self.game_over {
            return Err(EngineError::GameAlreadyOver);
        }
        if self.dice_value == 0 {
            return Err(EngineError::NoRollPending);
        }
        Ok(self
            .rules
            .valid_moves(&self.board, self.current_player, self.dice_value))
    }

    /// Can the piece on `origin` use the pending throw?
    #[must_use]
    pub fn can_move(&self, origin: usize) -> bool {
        !self.game_over
            && self
                .rules
                .is_valid_move(&self.board, self.current_player, origin, self.dice_value)
    }

    /// Where the piece on `origin` would land with the pending throw.
    ///
    /// `None` when the move is not legal.
    #[must_use]
    pub fn destination_of(&self, origin: usize) -> Option<Destination> {
        self.can_move(origin)
            .then(|| Destination::from_move(origin, self.dice_value))
    }

    /// Move the current player's piece on `origin` by the pending throw.
    pub fn make_move(&mut self, origin: usize) -> Result<MoveRecord, EngineError> {
        if self.game_over {
            return Err(self.reject(EngineError::GameAlreadyOver));
        }

        let outcome = self
            .rules
            .apply_move(&mut self.board, self.current_player, origin, self.dice_value)
            .map_err(|e| self.reject(e))?;

        self.move_count += 1;
        let record = MoveRecord::new(self.move_count, &outcome);
        self.history.push(record);
        debug!(
            number = record.number,
            player = %record.player,
            origin,
            landing = ?record.landing,
            dice = record.dice,
            "move made"
        );

        let extra_turn = self.rules.grants_extra_turn(self.dice_value);
        self.dice_value = 0;
        self.check_win();
        if !self.game_over && !extra_turn {
            self.current_player = self.current_player.opponent();
        }

        Ok(record)
    }

    /// Give up the pending throw and hand the turn over.
    ///
    /// Meant for when `get_valid_moves` is empty; the engine does not
    /// pass on the caller's behalf.
    pub fn pass_turn(&mut self) -> Result<(), EngineError> {
        if self.game_over {
            return Err(self.reject(EngineError::GameAlreadyOver));
        }
        if self.dice_value == 0 {
            return Err(self.reject(EngineError::NoRollPending));
        }

        debug!(player = %self.current_player, dice = self.dice_value, "turn passed");
        self.dice_value = 0;
        self.current_player = self.current_player.opponent();
        Ok(())
    }

    /// Return to the starting position. The dice keep their sequence.
    pub fn reset(&mut self) {
        self.board = Board::new();
        self.current_player = Player::Light;
        self.dice_value = 0;
        self.game_over = false;
        self.winner = None;
        self.move_count = 0;
        self.history.clear();
        debug!("game reset");
    }

    /// Set the pending throw directly.
    #[doc(hidden)]
    pub fn force_dice(&mut self, value: u8) {
        self.dice_value = value;
    }

    // === Internals ===

    fn check_win(&mut self) {
        if let Some(winner) = self.rules.winner(&self.board) {
            self.game_over = true;
            self.winner = Some(winner);
            self.dice_value = 0;
            info!(%winner, moves = self.move_count, "game won");
        }
    }

    fn reject(&self, err: EngineError) -> EngineError {
        debug!(player = %self.current_player, error = %err, "request rejected");
        err
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new(&EngineConfig::default())
    }
}

fn validate_position(board: &Board) -> Result<(), PositionError> {
    for player in Player::ALL {
        let count = board.count(player);
        if count > PIECES_PER_SIDE {
            return Err(PositionError::TooManyPieces {
                player,
                count,
                max: PIECES_PER_SIDE,
            });
        }
    }
    if board.iter().all(|c| c.is_empty()) {
        return Err(PositionError::EmptyBoard);
    }
    Ok(())
}

fn validate_status(snapshot: &GameSnapshot) -> Result<(), PositionError> {
    if snapshot.game_over != snapshot.winner.is_some() {
        return Err(inconsistent("game_over and winner disagree"));
    }
    if SenetRules.winner(&snapshot.board) != snapshot.winner {
        return Err(inconsistent("winner does not match the pieces on the board"));
    }
    if snapshot.game_over && snapshot.dice_value != 0 {
        return Err(inconsistent("finished game has a pending throw"));
    }
    if snapshot.dice_value > MAX_THROW {
        return Err(inconsistent(format!(
            "pending throw {} is above {MAX_THROW}",
            snapshot.dice_value
        )));
    }
    Ok(())
}

fn inconsistent(reason: impl Into<String>) -> PositionError {
    PositionError::InconsistentStatus(reason.into())
}
