use std::fmt::{Debug, Display};
use std::ops::{Deref, DerefMut};
use std::str::FromStr;

use lazy_static::lazy_static;

pub const BOARD_SIZE: usize = 5;

/*====================================================================================================================*/

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    One,
    Two,
}

impl Player {
    /// wire id of the player, 1 or 2
    pub fn id(self) -> u8 {
        match self {
            Player::One => 1,
            Player::Two => 2,
        }
    }

    pub fn from_id(id: u8) -> Option<Player> {
        match id {
            1 => Some(Player::One),
            2 => Some(Player::Two),
            _ => None,
        }
    }
}

// the opponent, i.e. One -> Two and Two -> One
impl std::ops::Not for Player {
    type Output = Player;

    fn not(self) -> Self::Output {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }
}

impl Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.id())
    }
}

/*====================================================================================================================*/

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cell {
    #[default]
    Empty,
    Taken(Player),
}

/*====================================================================================================================*/

#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    // 0-based grid indices
    row: u8,
    col: u8,
}

impl Move {
    pub fn new(row: u8, col: u8) -> Self {
        assert!(
            (row as usize) < BOARD_SIZE && (col as usize) < BOARD_SIZE,
            "Move ({row}, {col}) is outside the board"
        );

        Move { row, col }
    }

    /// Decodes the public `row * 10 + col` encoding with 1-based row and column.
    pub fn from_code(code: u32) -> Option<Move> {
        let row = (code / 10).checked_sub(1)?;
        let col = (code % 10).checked_sub(1)?;

        if row as usize >= BOARD_SIZE || col as usize >= BOARD_SIZE {
            return None;
        }

        Some(Move {
            row: row as u8,
            col: col as u8,
        })
    }

    pub fn code(&self) -> u32 {
        (self.row as u32 + 1) * 10 + (self.col as u32 + 1)
    }

    pub fn row(&self) -> usize {
        self.row as usize
    }

    pub fn col(&self) -> usize {
        self.col as usize
    }

    /// all cells in row-major order
    pub fn all() -> impl Iterator<Item = Move> {
        (0..BOARD_SIZE as u8).flat_map(|row| (0..BOARD_SIZE as u8).map(move |col| Move { row, col }))
    }
}

impl Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl Debug for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Move({}, {})", self.row, self.col)
    }
}

/*====================================================================================================================*/

// owning every cell of one of these wins
const WIN_LENGTH: usize = 4;
// owning every cell of one of these loses
const LOSE_LENGTH: usize = 3;

lazy_static! {
    static ref WIN_LINES: Vec<[Move; WIN_LENGTH]> = straight_lines::<WIN_LENGTH>();
    static ref LOSE_LINES: Vec<[Move; LOSE_LENGTH]> = straight_lines::<LOSE_LENGTH>();
}

fn straight_lines<const N: usize>() -> Vec<[Move; N]> {
    const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

    let size = BOARD_SIZE as isize;
    let span = N as isize - 1;

    let mut lines = Vec::new();

    for start in Move::all() {
        for (d_row, d_col) in DIRECTIONS {
            let end_row = start.row as isize + d_row * span;
            let end_col = start.col as isize + d_col * span;

            if !(0..size).contains(&end_row) || !(0..size).contains(&end_col) {
                continue;
            }

            lines.push(std::array::from_fn(|i| {
                let i = i as isize;
                Move::new(
                    (start.row as isize + d_row * i) as u8,
                    (start.col as isize + d_col * i) as u8,
                )
            }));
        }
    }

    lines
}

/*====================================================================================================================*/

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Board {
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    pub fn new() -> Self {
        Board::default()
    }

    pub fn cell(&self, move_: Move) -> Cell {
        self.cells[move_.row()][move_.col()]
    }

    pub fn is_empty(&self, move_: Move) -> bool {
        self.cell(move_) == Cell::Empty
    }

    /// true iff `code` decodes to a cell on the board that is still empty
    pub fn is_valid_code(&self, code: u32) -> bool {
        Move::from_code(code).map_or(false, |move_| self.is_empty(move_))
    }

    pub fn apply_move(&mut self, move_: Move, player: Player) {
        assert!(self.is_empty(move_), "Trying to play {move_} on a taken cell");

        self.cells[move_.row()][move_.col()] = Cell::Taken(player);
    }

    pub fn clear(&mut self, move_: Move) {
        self.cells[move_.row()][move_.col()] = Cell::Empty;
    }

    /// Places `player`'s mark on `move_`; the cell goes back to empty when the returned guard is dropped.
    pub fn place_scoped(&mut self, move_: Move, player: Player) -> ScopedMove<'_> {
        self.apply_move(move_, player);

        ScopedMove { board: self, move_ }
    }

    pub fn legal_moves(&self) -> impl Iterator<Item = Move> + '_ {
        Move::all().filter(|&move_| self.is_empty(move_))
    }

    pub fn has_legal_move(&self) -> bool {
        self.legal_moves().next().is_some()
    }

    pub fn is_full(&self) -> bool {
        !self.has_legal_move()
    }

    pub fn has_won(&self, player: Player) -> bool {
        WIN_LINES.iter().any(|line| self.owns_line(line, player))
    }

    pub fn has_lost(&self, player: Player) -> bool {
        LOSE_LINES.iter().any(|line| self.owns_line(line, player))
    }

    fn owns_line(&self, line: &[Move], player: Player) -> bool {
        line.iter().all(|&move_| self.cell(move_) == Cell::Taken(player))
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "  ")?;
        for col in 1..=BOARD_SIZE {
            write!(f, " {col}")?;
        }

        for (row, cells) in self.cells.iter().enumerate() {
            write!(f, "\n{} ", row + 1)?;

            for cell in cells {
                match cell {
                    Cell::Empty => write!(f, " -")?,
                    Cell::Taken(Player::One) => write!(f, " X")?,
                    Cell::Taken(Player::Two) => write!(f, " O")?,
                }
            }
        }

        Ok(())
    }
}

// five rows of '.', '1' or '2', separated by '/' or newlines
impl FromStr for Board {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<&str> = s
            .split(|c: char| c == '/' || c == '\n')
            .map(str::trim)
            .filter(|row| !row.is_empty())
            .collect();

        if rows.len() != BOARD_SIZE {
            return Err(format!("expected {BOARD_SIZE} rows, got {}", rows.len()));
        }

        let mut board = Board::new();

        for (row, row_str) in rows.iter().enumerate() {
            let chars: Vec<char> = row_str.chars().collect();

            if chars.len() != BOARD_SIZE {
                return Err(format!("row {} has {} cells: \"{}\"", row + 1, chars.len(), row_str));
            }

            for (col, c) in chars.into_iter().enumerate() {
                board.cells[row][col] = match c {
                    '.' => Cell::Empty,
                    '1' => Cell::Taken(Player::One),
                    '2' => Cell::Taken(Player::Two),
                    _ => return Err(format!("unexpected cell '{c}' in row {}", row + 1)),
                };
            }
        }

        Ok(board)
    }
}

/*====================================================================================================================*/

/// A mark placed by [`Board::place_scoped`]; undone on drop, on every exit path.
pub struct ScopedMove<'a> {
    board: &'a mut Board,
    move_: Move,
}

impl Deref for ScopedMove<'_> {
    type Target = Board;

    fn deref(&self) -> &Self::Target {
        self.board
    }
}

impl DerefMut for ScopedMove<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.board
    }
}

impl Drop for ScopedMove<'_> {
    fn drop(&mut self) {
        self.board.clear(self.move_);
    }
}

/*====================================================================================================================*/

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_new() {
        let board = Board::new();

        for move_ in Move::all() {
            assert_eq!(board.cell(move_), Cell::Empty);
        }

        assert_eq!(board.legal_moves().count(), BOARD_SIZE * BOARD_SIZE);
        assert!(!board.has_won(Player::One));
        assert!(!board.has_lost(Player::Two));
    }

    #[test]
    fn test_line_tables() {
        assert_eq!(WIN_LINES.len(), 28);
        assert_eq!(LOSE_LINES.len(), 48);
    }

    #[test]
    fn test_move_codes() {
        assert_eq!(Move::from_code(11), Some(Move::new(0, 0)));
        assert_eq!(Move::from_code(35), Some(Move::new(2, 4)));
        assert_eq!(Move::from_code(55), Some(Move::new(4, 4)));

        for code in [0, 5, 10, 16, 60, 61, 99, 105] {
            assert_eq!(Move::from_code(code), None, "code {code}");
        }

        assert_eq!(Move::new(1, 3).code(), 24);
        assert_eq!(Move::all().next().map(|m| m.code()), Some(11));
        assert_eq!(Move::all().last().map(|m| m.code()), Some(55));
    }

    #[test]
    fn test_is_valid_code() {
        let board: Board = "1..../...../..2../...../.....".parse().unwrap();

        assert!(!board.is_valid_code(11));
        assert!(!board.is_valid_code(33));
        assert!(board.is_valid_code(12));
        assert!(board.is_valid_code(55));

        for code in [0, 6, 10, 16, 56, 60, 66, 123] {
            assert!(!board.is_valid_code(code), "code {code}");
        }
    }

    #[test]
    fn test_win_and_lose_lines() {
        let four: Board = "...../...../.1111/...../.....".parse().unwrap();
        assert!(four.has_won(Player::One));
        assert!(four.has_lost(Player::One));
        assert!(!four.has_won(Player::Two));

        let three: Board = "2..../.2.../..2../...../.....".parse().unwrap();
        assert!(three.has_lost(Player::Two));
        assert!(!three.has_won(Player::Two));

        let anti_diagonal: Board = "...../...1./..1../.1.../1....".parse().unwrap();
        assert!(anti_diagonal.has_won(Player::One));

        let split: Board = "11.11/...../...../...../.....".parse().unwrap();
        assert!(!split.has_lost(Player::One));
        assert!(!split.has_won(Player::One));
    }

    #[test]
    fn test_scoped_move_restores() {
        let mut board: Board = "1..../...../...../...../....2".parse().unwrap();
        let before = board.clone();

        {
            let scoped = board.place_scoped(Move::new(2, 2), Player::One);
            assert_eq!(scoped.cell(Move::new(2, 2)), Cell::Taken(Player::One));
        }

        assert_eq!(board, before);

        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let _scoped = board.place_scoped(Move::new(3, 3), Player::Two);
            panic!("unwinding through a placed mark");
        }));

        assert!(result.is_err());
        assert_eq!(board, before);
    }

    #[test]
    fn test_from_to_str() {
        let board: Board = "12.../...../...../...../.....".parse().unwrap();

        assert_eq!(board.cell(Move::new(0, 0)), Cell::Taken(Player::One));
        assert_eq!(board.cell(Move::new(0, 1)), Cell::Taken(Player::Two));

        let rendered = board.to_string();
        assert!(rendered.starts_with("   1 2 3 4 5\n1  X O - - -"));

        assert!("12...".parse::<Board>().is_err());
        assert!("x..../...../...../...../.....".parse::<Board>().is_err());
    }

    #[test]
    fn test_player_ids() {
        assert_eq!(Player::from_id(1), Some(Player::One));
        assert_eq!(Player::from_id(2), Some(Player::Two));
        assert_eq!(Player::from_id(0), None);
        assert_eq!(Player::from_id(3), None);
        assert_eq!(!Player::One, Player::Two);
        assert_eq!((!Player::Two).id(), 1);
    }
}
