//! Line tic-tac-toe game engine.
//!
//! The engine owns one board and one rule set at a time. `prepare` starts a
//! game, `make_move` places marks and evaluates lines, and a winning line or
//! a full board finalizes the game back into a non-running phase.

use crate::action::{Move, MoveReport};
use crate::board::Board;
use crate::invariants::{EngineInvariants, InvariantSet};
use crate::phases::{Outcome, Phase};
use crate::rules::{self, Rules};
use crate::types::{Coordinate, Player};
use std::collections::HashMap;
use tracing::{debug, info, instrument, warn};

/// Rule engine for one game at a time.
#[derive(Debug, Clone, Default)]
pub struct Engine {
    board: Board,
    rules: Rules,
    active: Option<Player>,
    phase: Phase,
    history: Vec<Move>,
}

impl Engine {
    /// Creates an idle engine.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new game, discarding any game in progress.
    ///
    /// The board is installed empty, the move history is reset and the turn
    /// goes to the first player, which is returned.
    #[instrument(skip(self, board, rules), fields(side = board.side(), win = rules.min_win_length()))]
    pub fn prepare(&mut self, mut board: Board, rules: Rules) -> Option<Player> {
        if self.phase.is_running() {
            info!(moves = self.history.len(), "Discarding running game");
        }
        self.board.clear();
        self.active = None;
        self.history.clear();

        if rules.min_win_length() > usize::from(board.side()) {
            warn!("Winning line is longer than the board side, only a draw is possible");
        }

        board.clear();
        self.board = board;
        self.rules = rules;
        self.active = Some(Player::advance(self.active));
        self.phase = Phase::Running;

        info!(first = ?self.active, "Game prepared");
        self.active
    }

    /// Places a mark for the active player and returns the next active player.
    ///
    /// See [`Engine::play`] for the full move semantics.
    pub fn make_move(&mut self, coord: Coordinate) -> Option<Player> {
        *self.play(coord).next()
    }

    /// Places a mark for an explicit player and returns the next active player.
    ///
    /// The player does not have to match the active player.
    pub fn make_move_as(&mut self, coord: Coordinate, player: Player) -> Option<Player> {
        *self.play_as(coord, player).next()
    }

    /// Places a mark for the active player and reports what happened.
    pub fn play(&mut self, coord: Coordinate) -> MoveReport {
        let player = self.active.unwrap_or(Player::A);
        self.play_as(coord, player)
    }

    /// Places a mark for `player` and reports what happened.
    ///
    /// - Without a running game the move is ignored.
    /// - An out-of-bounds or occupied coordinate leaves the board untouched,
    ///   but the turn still passes to the opponent.
    /// - Otherwise the line through the new mark is measured. A winning line
    ///   or a full board finishes the game and no player is active afterwards.
    #[instrument(skip(self), fields(phase = ?self.phase, active = ?self.active))]
    pub fn play_as(&mut self, coord: Coordinate, player: Player) -> MoveReport {
        let attempted = Move::new(player, coord);

        if !self.phase.is_running() {
            warn!("No game running, move ignored");
            return MoveReport::rejected(attempted, self.active);
        }

        if !self.board.place_mark(coord, player) {
            warn!("Move rejected, turn passes anyway");
            self.active = Some(Player::advance(self.active));
            return MoveReport::rejected(attempted, self.active);
        }
        self.history.push(attempted);

        debug_assert!(
            EngineInvariants::check_all(&*self).is_ok(),
            "Engine invariants violated after {}",
            attempted
        );

        let line = rules::measure_line(&self.board, coord);
        let outcome = match line {
            Some(measured) if self.rules.is_win(measured.length) => Some(Outcome::Winner(player)),
            _ if rules::is_full(&self.board) => Some(Outcome::Draw),
            _ => None,
        };

        if let Some(outcome) = outcome {
            self.finalize(outcome);
            return MoveReport::accepted(attempted, line, Some(outcome), self.active);
        }

        self.active = Some(Player::advance(self.active));
        debug!(next = ?self.active, "Turn passed");
        MoveReport::accepted(attempted, line, None, self.active)
    }

    /// Ends the current game.
    ///
    /// A running game is recorded as abandoned. Calling this without a
    /// running game only makes sure the board is clear.
    #[instrument(skip(self), fields(phase = ?self.phase))]
    pub fn finish(&mut self) {
        if self.phase.is_running() {
            self.finalize(Outcome::Abandoned);
        } else {
            self.board.clear();
            self.active = None;
        }
    }

    /// True iff a game is accepting moves.
    pub fn is_running(&self) -> bool {
        self.phase.is_running()
    }

    /// Occupied cells of the current game, for rendering.
    pub fn current_field(&self) -> &HashMap<Coordinate, Player> {
        self.board.cells()
    }

    /// Player whose mark goes next.
    pub fn active_player(&self) -> Option<Player> {
        self.active
    }

    /// Lifecycle phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Outcome of the last finished game.
    pub fn outcome(&self) -> Option<Outcome> {
        self.phase.outcome()
    }

    /// Current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Current rules.
    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    /// Accepted moves of the current or last game.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Plays `moves` on a fresh game, stopping at the first move that ends it.
    ///
    /// Each move is applied for its own player.
    #[instrument(skip(board, rules, moves), fields(count = moves.len()))]
    pub fn replay(board: Board, rules: Rules, moves: &[Move]) -> (Self, Vec<MoveReport>) {
        let mut engine = Self::new();
        engine.prepare(board, rules);

        let mut reports = Vec::with_capacity(moves.len());
        for mov in moves {
            let report = engine.play_as(mov.coordinate, mov.player);
            reports.push(report);
            if report.finished_game() {
                break;
            }
        }
        (engine, reports)
    }

    fn finalize(&mut self, outcome: Outcome) {
        info!(%outcome, moves = self.history.len(), "Game finished");
        debug!("Final board:\n{}", self.board);
        self.board.clear();
        self.active = None;
        self.phase = Phase::Finished(outcome);
    }
}
