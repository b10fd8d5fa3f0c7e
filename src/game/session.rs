use tracing::{debug, info};

use super::{Board, Cell, DropResult, Token};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Winner(Token),
    Draw,
}

/// Lifecycle of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Waiting for player names.
    Setup,
    Playing,
    /// Terminal for moves until `restart` or `full_reset`.
    Finished(GameOutcome),
}

/// What happened to a single `play_move` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveReport {
    pub accepted: bool,
    /// (row, column) of the piece that was placed
    pub placed_at: Option<(usize, usize)>,
    /// Set when this move ended the game
    pub outcome: Option<GameOutcome>,
}

impl MoveReport {
    fn ignored() -> Self {
        MoveReport {
            accepted: false,
            placed_at: None,
            outcome: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Players {
    player_a: String,
    player_b: String,
}

/// A two-player game from name entry through any number of restarts.
///
/// All operations are total: input that does not apply to the current phase
/// (a move before the game starts, a drop into a full column, a move after the
/// game is decided) is ignored and leaves the session unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSession {
    board: Board,
    current_turn: Token,
    phase: Phase,
    players: Option<Players>,
    has_move_occurred: bool,
}

impl GameSession {
    /// Create a session waiting for player names
    pub fn new() -> Self {
        GameSession {
            board: Board::new(),
            current_turn: Token::PlayerA,
            phase: Phase::Setup,
            players: None,
            has_move_occurred: false,
        }
    }

    /// Confirm player names and begin the first game.
    ///
    /// Blank names fall back to "Player 1" / "Player 2". Returns `false` and
    /// does nothing unless the session is in [`Phase::Setup`].
    pub fn start_game(&mut self, name1: &str, name2: &str) -> bool {
        if self.phase != Phase::Setup {
            debug!(phase = ?self.phase, "start_game ignored outside setup");
            return false;
        }

        let players = Players {
            player_a: resolve_name(name1, Token::PlayerA),
            player_b: resolve_name(name2, Token::PlayerB),
        };
        info!(
            player_a = %players.player_a,
            player_b = %players.player_b,
            "game started"
        );

        self.players = Some(players);
        self.new_board();
        true
    }

    /// Drop the current player's piece into `column`
    pub fn play_move(&mut self, column: usize) -> MoveReport {
        if self.phase != Phase::Playing {
            debug!(column, phase = ?self.phase, "move ignored: game not in progress");
            return MoveReport::ignored();
        }

        let mover = self.current_turn;
        let row = match self.board.drop(column, mover) {
            DropResult::Placed { row, .. } => row,
            DropResult::Rejected => {
                debug!(column, "move ignored: column full or out of range");
                return MoveReport::ignored();
            }
        };
        self.has_move_occurred = true;
        debug!(?mover, row, column, "piece placed");

        // Win is checked first so a board-filling winning move is not a draw
        let outcome = if self.board.is_winning_placement(row, column, mover) {
            Some(GameOutcome::Winner(mover))
        } else if self.board.is_full() {
            Some(GameOutcome::Draw)
        } else {
            None
        };

        match outcome {
            Some(outcome) => {
                info!(?outcome, moves = self.board.piece_count(), "game finished");
                self.phase = Phase::Finished(outcome);
            }
            None => self.current_turn = mover.other(),
        }

        MoveReport {
            accepted: true,
            placed_at: Some((row, column)),
            outcome,
        }
    }

    /// Start a fresh game with the same players.
    ///
    /// Valid while playing or finished; ignored during setup.
    pub fn restart(&mut self) {
        if self.phase == Phase::Setup {
            debug!("restart ignored during setup");
            return;
        }
        info!("game restarted");
        self.new_board();
    }

    /// Forget both players and return to name entry
    pub fn full_reset(&mut self) {
        info!(phase = ?self.phase, "session reset");
        *self = GameSession::new();
    }

    fn new_board(&mut self) {
        self.board = Board::new();
        self.current_turn = Token::PlayerA;
        self.has_move_occurred = false;
        self.phase = Phase::Playing;
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn cell_at(&self, row: usize, col: usize) -> Cell {
        self.board.get(row, col)
    }

    pub fn current_turn(&self) -> Token {
        self.current_turn
    }

    pub fn has_move_occurred(&self) -> bool {
        self.has_move_occurred
    }

    /// Display name for `token`, `None` until names are confirmed
    pub fn player_name(&self, token: Token) -> Option<&str> {
        self.players.as_ref().map(|players| match token {
            Token::PlayerA => players.player_a.as_str(),
            Token::PlayerB => players.player_b.as_str(),
        })
    }

    pub fn current_player_name(&self) -> Option<&str> {
        self.player_name(self.current_turn)
    }

    pub fn outcome(&self) -> Option<GameOutcome> {
        match self.phase {
            Phase::Finished(outcome) => Some(outcome),
            _ => None,
        }
    }

    /// Name of the winning player, if the last game was won
    pub fn winner_name(&self) -> Option<&str> {
        match self.outcome()? {
            GameOutcome::Winner(token) => self.player_name(token),
            GameOutcome::Draw => None,
        }
    }

    /// Row the next piece would land in for `column`, for hover previews.
    /// Only available while a game is in progress.
    pub fn preview_row(&self, column: usize) -> Option<usize> {
        if self.phase != Phase::Playing {
            return None;
        }
        self.board.lowest_empty_row(column)
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

fn resolve_name(raw: &str, token: Token) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        token.default_name().to_string()
    } else {
        trimmed.to_string()
    }
}
