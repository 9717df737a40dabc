use std::io;

use crate::game_engine::{GameEngine, GameState};
use crate::io::{InputReader, OutputWriter};
use crate::models::constants::LEADERBOARD_LIMIT;
use crate::models::direction::Direction;
use crate::models::errors::GameResult;
use crate::services::scores::ScoreSync;
use crate::ui::presenters::{BoardPresenter, LeaderboardPresenter, ScorePresenter};
use crate::ui::TerminalView;

/// Terminal front end: feeds commands to the engine and persists best scores.
pub struct Game<I: InputReader, O: OutputWriter> {
    pub engine: GameEngine,
    scores: ScoreSync,
    io: I,
    output: O,
}

impl<I: InputReader, O: OutputWriter> Game<I, O> {
    pub fn new(engine: GameEngine, scores: ScoreSync, io: I, output: O) -> Self {
        Game {
            engine,
            scores,
            io,
            output,
        }
    }

    pub fn output(&self) -> &O {
        &self.output
    }

    pub fn run(&mut self) -> GameResult<()> {
        self.new_game();

        loop {
            let input = match self.io.read_line("MOVE") {
                Ok(line) => line,
                Err(err) if err.kind() == io::ErrorKind::UnexpectedEof => break,
                Err(err) => return Err(err.into()),
            };

            match input.trim().to_ascii_lowercase().as_str() {
                "" => continue,
                "q" | "quit" => {
                    self.output.writeln("GOODBYE.");
                    break;
                }
                "n" | "new" => self.new_game(),
                "c" | "continue" => {
                    if self.engine.state() == GameState::Won {
                        self.engine.continue_play();
                    }
                    self.show();
                }
                "b" | "board" => self.show_leaderboard(),
                "h" | "help" | "?" => Self::print_command_menu(&mut self.output),
                other => match other.parse::<Direction>() {
                    Ok(direction) => self.play(direction),
                    Err(e) => {
                        self.output.writeln(&format!("Error: {}", e));
                        Self::print_command_menu(&mut self.output);
                    }
                },
            }
        }

        self.flush_score();
        Ok(())
    }

    /// Start a session seeded with the reconciled best score.
    pub fn new_game(&mut self) {
        let best = self.scores.reconcile().max(self.engine.best_score());
        let mut view = TerminalView::new(&mut self.output, self.engine.win_value());
        self.engine.start(best, &mut view);
        self.show();
    }

    /// Run one direction through the engine pipeline.
    pub fn play(&mut self, direction: Direction) {
        let mut view = TerminalView::new(&mut self.output, self.engine.win_value());
        self.engine.submit_direction(direction, &mut view);
        let pending = view.take_pending_best();
        let dirty = view.board_dirty();

        if let Some(best) = pending {
            self.scores.persist(best);
        }
        if dirty {
            self.show();
        } else if !self.engine.is_over() {
            self.output.writeln(&format!("CANNOT MOVE {}", direction.name().to_uppercase()));
        }
    }

    fn flush_score(&mut self) {
        let score = self.engine.current_score();
        if score > 0 && score >= self.engine.best_score() {
            self.scores.persist(self.engine.best_score());
        }
    }

    fn show(&mut self) {
        ScorePresenter::show_scores(
            self.engine.current_score(),
            self.engine.best_score(),
            &mut self.output,
        );
        BoardPresenter::show_board(self.engine.board(), &mut self.output);
    }

    fn show_leaderboard(&mut self) {
        match self.scores.leaderboard(LEADERBOARD_LIMIT) {
            Ok(entries) => {
                LeaderboardPresenter::show_leaderboard(&entries, self.scores.user(), &mut self.output)
            }
            Err(e) => {
                tracing::warn!("leaderboard unavailable: {}", e);
                self.output.writeln("LEADERBOARD IS NOT AVAILABLE");
            }
        }
    }

    fn print_command_menu(output: &mut dyn OutputWriter) {
        output.writeln("   W / UP     = SLIDE UP");
        output.writeln("   A / LEFT   = SLIDE LEFT");
        output.writeln("   S / DOWN   = SLIDE DOWN");
        output.writeln("   D / RIGHT  = SLIDE RIGHT");
        output.writeln("   C          = CONTINUE AFTER WINNING");
        output.writeln("   N          = NEW GAME");
        output.writeln("   B          = LEADERBOARD");
        output.writeln("   Q          = QUIT");
    }
}
