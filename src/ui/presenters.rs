use crate::io::OutputWriter;
use crate::models::board::Board;
use crate::store::LeaderboardEntry;

pub struct BoardPresenter;

impl BoardPresenter {
    /// Render the board as text rows, one per board row plus borders.
    /// Cells are right-aligned to the widest value so columns line up.
    pub fn render(board: &Board) -> Vec<String> {
        let width = board.max_value().to_string().len().max(4);
        let border = format!(
            "+{}",
            std::iter::repeat(format!("{}+", "-".repeat(width + 2)))
                .take(board.size())
                .collect::<String>()
        );

        let mut lines = Vec::with_capacity(board.size() * 2 + 1);
        lines.push(border.clone());
        for row in board.grid() {
            let cells: String = row
                .iter()
                .map(|cell| match cell {
                    Some(value) => format!(" {:>width$} |", value, width = width),
                    None => format!(" {:>width$} |", ".", width = width),
                })
                .collect();
            lines.push(format!("|{}", cells));
            lines.push(border.clone());
        }
        lines
    }

    pub fn show_board(board: &Board, output: &mut dyn OutputWriter) {
        for line in Self::render(board) {
            output.writeln(&line);
        }
    }
}

pub struct ScorePresenter;

impl ScorePresenter {
    pub fn show_scores(current: u32, best: u32, output: &mut dyn OutputWriter) {
        output.writeln(&format!("SCORE {:>8}    BEST {:>8}", current, best));
    }

    pub fn show_victory(score: u32, win_value: u32, output: &mut dyn OutputWriter) {
        output.writeln("");
        output.writeln(&format!("*** YOU REACHED {} ***", win_value));
        output.writeln(&format!("SCORE: {}", score));
        output.writeln("ENTER C TO KEEP PLAYING OR N FOR A NEW GAME");
        output.writeln("");
    }

    pub fn show_game_over(score: u32, output: &mut dyn OutputWriter) {
        output.writeln("");
        output.writeln("*** GAME OVER ***");
        output.writeln(&format!("FINAL SCORE: {}", score));
        output.writeln("ENTER N TO TRY AGAIN OR Q TO QUIT");
        output.writeln("");
    }
}

pub struct LeaderboardPresenter;

impl LeaderboardPresenter {
    pub fn show_leaderboard(
        entries: &[LeaderboardEntry],
        current_user: Option<&str>,
        output: &mut dyn OutputWriter,
    ) {
        output.writeln("LEADERBOARD");
        if entries.is_empty() {
            output.writeln("  NO SCORES YET");
            return;
        }
        for entry in entries {
            let marker = if Some(entry.user.as_str()) == current_user { "*" } else { " " };
            output.writeln(&format!(
                "{}{:>3}. {:<20}{:>8}",
                marker, entry.rank, entry.display_name, entry.high_score
            ));
        }
    }
}
