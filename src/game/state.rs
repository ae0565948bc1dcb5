use super::board::{self, Board, InvalidDimension, DEFAULT_COLS, DEFAULT_ROWS};
use super::player::{Player, PlayerId};

/// Outcome of the game so far. `Won` and `Tie` are terminal and absorbing:
/// once reached, no further move is accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Ongoing,
    Won(PlayerId),
    Tie,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DropError {
    #[error("column is full")]
    ColumnFull,

    #[error("column is out of range")]
    InvalidColumn,

    #[error("the game is already over")]
    GameOver,
}

/// Full game state: board, the two players, whose turn it is, and the
/// status. Mutated only through [`GameState::drop_piece`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    players: [Player; 2],
    current: PlayerId,
    status: Status,
}

impl GameState {
    /// Create a game on the standard 7x6 board. `player1` must carry
    /// [`PlayerId::One`] and moves first.
    pub fn new(player1: Player, player2: Player) -> Self {
        Self::with_size(player1, player2, DEFAULT_COLS, DEFAULT_ROWS)
            .expect("default board size is valid")
    }

    /// Create a game on a custom board. Fails if either dimension is below
    /// the minimum needed for a line of four.
    pub fn with_size(
        player1: Player,
        player2: Player,
        width: usize,
        height: usize,
    ) -> Result<Self, InvalidDimension> {
        Ok(GameState {
            board: Board::new(width, height)?,
            players: [player1, player2],
            current: PlayerId::One,
            status: Status::Ongoing,
        })
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn status(&self) -> Status {
        self.status
    }

    /// Check if game is over
    pub fn is_terminal(&self) -> bool {
        self.status != Status::Ongoing
    }

    pub fn player(&self, id: PlayerId) -> &Player {
        match id {
            PlayerId::One => &self.players[0],
            PlayerId::Two => &self.players[1],
        }
    }

    /// The player whose turn it is. After a win this stays the winner; the
    /// turn never advances out of a terminal state.
    pub fn current_player(&self) -> &Player {
        self.player(self.current)
    }

    /// Drop a piece for the current player, returning the landing row for
    /// the caller to render.
    ///
    /// Validates, places the piece at the lowest empty cell of the column,
    /// evaluates win/tie around the placed cell, then advances the turn if
    /// the game is still ongoing. On any error the board is left unchanged.
    pub fn drop_piece(&mut self, column: usize) -> Result<usize, DropError> {
        if self.is_terminal() {
            return Err(DropError::GameOver);
        }

        let row = self
            .board
            .drop_piece(column, self.current)
            .map_err(|e| match e {
                board::DropError::ColumnFull => DropError::ColumnFull,
                board::DropError::InvalidColumn => DropError::InvalidColumn,
            })?;

        if self.board.check_win(row, column) {
            self.status = Status::Won(self.current);
        } else if self.board.is_full() {
            self.status = Status::Tie;
        }

        self.advance_turn();

        Ok(row)
    }

    /// Hand the turn to the other player. No-op once the game is over.
    fn advance_turn(&mut self) {
        if self.is_terminal() {
            return;
        }
        self.current = self.current.other();
    }
}
