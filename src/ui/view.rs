use crate::game_engine::GameObserver;
use crate::io::OutputWriter;
use crate::models::board::Board;
use crate::ui::presenters::ScorePresenter;

/// Engine observer for the terminal front end.
///
/// Writes overlays as they happen and remembers the latest best score so
/// the driver can persist it once the input event has been processed.
pub struct TerminalView<'a> {
    output: &'a mut dyn OutputWriter,
    win_value: u32,
    board_dirty: bool,
    pending_best: Option<u32>,
}

impl<'a> TerminalView<'a> {
    pub fn new(output: &'a mut dyn OutputWriter, win_value: u32) -> Self {
        TerminalView {
            output,
            win_value,
            board_dirty: false,
            pending_best: None,
        }
    }

    /// Whether the board changed since the view was created.
    pub fn board_dirty(&self) -> bool {
        self.board_dirty
    }

    /// Best score waiting to be persisted, if any.
    pub fn take_pending_best(&mut self) -> Option<u32> {
        self.pending_best.take()
    }
}

impl GameObserver for TerminalView<'_> {
    fn on_board_changed(&mut self, _board: &Board) {
        self.board_dirty = true;
    }

    fn on_game_over(&mut self, final_score: u32) {
        ScorePresenter::show_game_over(final_score, self.output);
    }

    fn on_won(&mut self, score_at_win: u32) {
        ScorePresenter::show_victory(score_at_win, self.win_value, self.output);
    }

    fn on_best_score(&mut self, best_score: u32) {
        self.pending_best = Some(best_score);
    }
}
