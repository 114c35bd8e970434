use alloc::collections::VecDeque;
use alloc::vec::Vec;
use core::{fmt, mem};

use ndarray::ArrayD;
use serde::{Deserialize, Serialize};

use crate::*;

/// Lifecycle of a game. `Defeat` and `Victory` are terminal: once reached
/// the status never changes and no further cell is ever revealed.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum GameStatus {
    Ongoing,
    Defeat,
    Victory,
}

impl GameStatus {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Defeat | Self::Victory)
    }
}

impl Default for GameStatus {
    fn default() -> Self {
        Self::Ongoing
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Ongoing => "ongoing",
            Self::Defeat => "defeat",
            Self::Victory => "victory",
        })
    }
}

/// A game in progress: an immutable board plus the per-cell visibility
/// mask. Cells only ever move from hidden to revealed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Game {
    board: Board,
    hidden: ArrayD<bool>,
    revealed_count: CellCount,
    status: GameStatus,
}

impl Game {
    /// Starts a game on `board` with every cell hidden.
    pub fn new(board: Board) -> Self {
        let hidden = ArrayD::from_elem(board.cells().raw_dim(), true);
        Self {
            board,
            hidden,
            revealed_count: 0,
            status: GameStatus::Ongoing,
        }
    }

    pub fn from_bombs(shape: &[Ix], bombs: &[Coord]) -> Result<Self> {
        Ok(Self::new(Board::from_bombs(shape, bombs)?))
    }

    /// Two-dimensional convenience constructor; bombs given as
    /// `(row, column)` pairs.
    pub fn new_2d(rows: Ix, cols: Ix, bombs: &[(Ix, Ix)]) -> Result<Self> {
        let bombs: Vec<Coord> = bombs
            .iter()
            .map(|&(row, col)| Coord::from_slice(&[row, col]))
            .collect();
        Self::from_bombs(&[rows, cols], &bombs)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn shape(&self) -> &[Ix] {
        self.board.shape()
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_finished(&self) -> bool {
        self.status.is_finished()
    }

    pub fn revealed_count(&self) -> CellCount {
        self.revealed_count
    }

    /// Checked visibility lookup; `true` means the cell is still hidden.
    pub fn is_hidden(&self, coord: &[Ix]) -> Result<bool> {
        self.hidden.get(coord).copied().ok_or(GameError::InvalidCoords)
    }

    pub(crate) fn hidden_cells(&self) -> &ArrayD<bool> {
        &self.hidden
    }

    /// Reveals the cell at `coord`. Digging a zero cell flood-fills
    /// outward: its neighbors are revealed, and those that are themselves
    /// zero keep propagating. Digging a bomb ends the game in defeat.
    ///
    /// Returns how many cells changed from hidden to revealed. Digging a
    /// finished game is a defined no-op returning 0.
    pub fn dig(&mut self, coord: &[Ix]) -> Result<CellCount> {
        let coord = self.board.validate_coord(coord)?;

        if self.status.is_finished() {
            return Ok(0);
        }

        match self.board[coord] {
            Cell::Bomb => {
                self.hidden[coord] = false;
                self.status = GameStatus::Defeat;
                Ok(1)
            }
            Cell::Clear(0) => {
                let revealed = self.flood_reveal(coord);
                self.update_status();
                Ok(revealed)
            }
            Cell::Clear(_) => {
                let revealed = self.reveal_single(coord);
                self.update_status();
                Ok(revealed)
            }
        }
    }

    /// Two-dimensional convenience wrapper for [`Game::dig`].
    pub fn dig_2d(&mut self, row: Ix, col: Ix) -> Result<CellCount> {
        self.dig(&[row, col])
    }

    fn reveal_single(&mut self, coord: &[Ix]) -> CellCount {
        if mem::replace(&mut self.hidden[coord], false) {
            self.revealed_count += 1;
            1
        } else {
            0
        }
    }

    /// Breadth-first reveal starting from a zero cell. The visibility mask
    /// doubles as the visited check: cells are marked revealed when they
    /// are queued, so no coordinate enters the queue twice.
    fn flood_reveal(&mut self, start: &[Ix]) -> CellCount {
        if self.reveal_single(start) == 0 {
            return 0;
        }

        let mut revealed = 1;
        let mut frontier = VecDeque::from([Coord::from_slice(start)]);

        while let Some(coord) = frontier.pop_front() {
            // only zero cells propagate the fill
            if self.board[&coord[..]] != Cell::Clear(0) {
                continue;
            }

            for neighbor in self.hidden.iter_neighbors(&coord) {
                if self.reveal_single(&neighbor) == 1 {
                    revealed += 1;
                    frontier.push_back(neighbor);
                }
            }
        }

        revealed
    }

    fn update_status(&mut self) {
        if self.status.is_finished() {
            return;
        }

        if self.revealed_count == self.board.safe_cell_count() {
            self.status = GameStatus::Victory;
        }
    }
}

/// Deterministic diagnostic listing of the game fields, sorted by name.
impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "board:")?;
        writeln!(f, "{}", self.render(true))?;
        writeln!(f, "dimensions: {:?}", self.shape())?;
        writeln!(f, "hidden:")?;
        writeln!(f, "{}", self.hidden.map(|&hidden| if hidden { 'T' } else { 'F' }))?;
        write!(f, "status: {}", self.status)
    }
}
