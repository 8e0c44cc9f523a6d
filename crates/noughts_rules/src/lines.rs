//! The eight winning lines of tic-tac-toe.

use super::Position;

/// A winning triple: one of 3 rows, 3 columns or 2 diagonals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum::EnumIter)]
pub enum Line {
    /// Row 0.
    TopRow,
    /// Row 1.
    MiddleRow,
    /// Row 2.
    BottomRow,
    /// Column 0.
    LeftColumn,
    /// Column 1.
    CenterColumn,
    /// Column 2.
    RightColumn,
    /// Top-left to bottom-right.
    MainDiagonal,
    /// Top-right to bottom-left.
    AntiDiagonal,
}

impl Line {
    /// All 8 lines: rows, then columns, then diagonals.
    pub const ALL: [Line; 8] = [
        Line::TopRow,
        Line::MiddleRow,
        Line::BottomRow,
        Line::LeftColumn,
        Line::CenterColumn,
        Line::RightColumn,
        Line::MainDiagonal,
        Line::AntiDiagonal,
    ];

    /// The three squares making up this line.
    pub fn positions(self) -> [Position; 3] {
        match self {
            Line::TopRow => row(0),
            Line::MiddleRow => row(1),
            Line::BottomRow => row(2),
            Line::LeftColumn => column(0),
            Line::CenterColumn => column(1),
            Line::RightColumn => column(2),
            Line::MainDiagonal => [
                Position::at(0, 0),
                Position::at(1, 1),
                Position::at(2, 2),
            ],
            Line::AntiDiagonal => [
                Position::at(0, 2),
                Position::at(1, 1),
                Position::at(2, 0),
            ],
        }
    }

    /// Checks whether the square lies on this line.
    pub fn contains(self, position: Position) -> bool {
        self.positions().contains(&position)
    }

    /// Lines passing through a square: its row and column, plus whichever
    /// diagonals it sits on.
    pub fn through(position: Position) -> impl Iterator<Item = Line> {
        let row = Self::ALL[position.row()];
        let column = Self::ALL[3 + position.col()];
        let main = position.on_main_diagonal().then_some(Line::MainDiagonal);
        let anti = position.on_anti_diagonal().then_some(Line::AntiDiagonal);

        [row, column].into_iter().chain(main).chain(anti)
    }
}

fn row(r: u8) -> [Position; 3] {
    [Position::at(r, 0), Position::at(r, 1), Position::at(r, 2)]
}

fn column(c: u8) -> [Position; 3] {
    [Position::at(0, c), Position::at(1, c), Position::at(2, c)]
}
