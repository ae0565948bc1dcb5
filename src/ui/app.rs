use crate::game::{DropError, GameState, Status};
use crossterm::event::{self, Event, KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{backend::Backend, layout::Rect, Terminal};
use std::io;

pub struct App {
    game_state: GameState,
    /// Pristine copy used to start a new game with the same players and
    /// board size.
    initial: GameState,
    selected_column: usize,
    should_quit: bool,
    message: Option<String>,
    /// Where the board was drawn last frame, for click-to-column mapping.
    board_area: Option<Rect>,
}

impl App {
    pub fn new(game_state: GameState) -> Self {
        let selected_column = game_state.board().width() / 2;
        App {
            initial: game_state.clone(),
            game_state,
            selected_column,
            should_quit: false,
            message: None,
            board_area: None,
        }
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
        }
        Ok(())
    }

    /// Handle keyboard and mouse events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(std::time::Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) => self.handle_key(key),
                Event::Mouse(mouse) => self.handle_mouse(mouse),
                _ => {}
            }
        }
        Ok(())
    }

    /// Handle key press
    fn handle_key(&mut self, key: KeyEvent) {
        // Clear message on any key press
        self.message = None;

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left => {
                if self.selected_column > 0 {
                    self.selected_column -= 1;
                }
            }
            KeyCode::Right => {
                if self.selected_column + 1 < self.game_state.board().width() {
                    self.selected_column += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.drop_piece();
            }
            KeyCode::Char('r') => {
                self.restart();
            }
            _ => {}
        }
    }

    /// A left click inside the board area drops a piece in the clicked
    /// column (the original game's click-a-column input).
    fn handle_mouse(&mut self, mouse: MouseEvent) {
        if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
            if let Some(col) = self.column_at(mouse.column, mouse.row) {
                self.message = None;
                self.selected_column = col;
                self.drop_piece();
            }
        }
    }

    /// Map screen coordinates to a board column, if they fall on one.
    fn column_at(&self, x: u16, y: u16) -> Option<usize> {
        let area = self.board_area?;
        if y < area.y || y >= area.y.saturating_add(area.height) {
            return None;
        }

        let width = self.game_state.board().width();
        let line_width = super::game_view::board_line_width(width);
        // The board paragraph is centered; every line carries a 3-char left
        // margin before the first cell.
        let first_cell = area.x + area.width.saturating_sub(line_width) / 2 + 3;
        if x < first_cell {
            return None;
        }
        let col = ((x - first_cell) / 3) as usize;
        (col < width).then_some(col)
    }

    /// Drop piece in selected column
    fn drop_piece(&mut self) {
        match self.game_state.drop_piece(self.selected_column) {
            Ok(_row) => {
                match self.game_state.status() {
                    Status::Won(id) => {
                        let winner = self.game_state.player(id);
                        self.message = Some(format!(
                            "{} wins! Press 'r' for a new game.",
                            winner.name()
                        ));
                    }
                    Status::Tie => {
                        self.message = Some("Tie game! Press 'r' for a new game.".to_string());
                    }
                    Status::Ongoing => {}
                }
            }
            Err(DropError::ColumnFull) => {
                self.message = Some("Column is full!".to_string());
            }
            Err(DropError::InvalidColumn) => {
                self.message = Some("Invalid column!".to_string());
            }
            Err(DropError::GameOver) => {
                self.message = Some("Game over! Press 'r' for a new game.".to_string());
            }
        }
    }

    /// Start a new game with the same players and board size
    fn restart(&mut self) {
        self.game_state = self.initial.clone();
        self.selected_column = self.game_state.board().width() / 2;
        self.message = Some("New game started!".to_string());
    }

    /// Render the UI
    fn render(&mut self, frame: &mut ratatui::Frame) {
        let board_area =
            super::game_view::render(frame, &self.game_state, self.selected_column, &self.message);
        self.board_area = Some(board_area);
    }
}
