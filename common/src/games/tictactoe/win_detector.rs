use super::board::Board;
use super::types::{Mark, WinningLine};

/// Rows, then columns, then diagonals. The first complete line wins.
pub const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

pub fn check_win(board: &Board) -> Option<Mark> {
    check_win_with_line(board).map(|line| line.mark)
}

pub fn check_win_with_line(board: &Board) -> Option<WinningLine> {
    let cells = board.cells();

    for line in LINES {
        let [a, b, c] = line;
        let mark = cells[a];
        if mark == Mark::Empty {
            continue;
        }
        if cells[b] == mark && cells[c] == mark {
            return Some(WinningLine::new(mark, line));
        }
    }

    None
}

pub fn is_draw(board: &Board) -> bool {
    board.is_full() && check_win(board).is_none()
}
