use core::ops::Index;

use ndarray::{ArrayD, Dimension, IxDyn};
use serde::{Deserialize, Serialize};

use crate::*;

/// The immutable contents of a minefield: bomb placements plus the
/// precomputed bomb-adjacency count of every clear cell, shaped by an
/// arbitrary number of axes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    cells: ArrayD<Cell>,
    bomb_count: CellCount,
}

impl Board {
    /// Builds a board from a bomb mask, counting each clear cell's
    /// bomb-holding neighbors.
    pub fn from_bomb_mask(mask: ArrayD<bool>) -> Result<Self> {
        validate_shape(mask.shape())?;

        let bomb_count = mask.iter().filter(|&&bomb| bomb).count();
        let cells = ArrayD::from_shape_fn(mask.raw_dim(), |ix| {
            if mask[ix.slice()] {
                Cell::Bomb
            } else {
                let adjacent = mask
                    .iter_neighbors(ix.slice())
                    .filter(|pos| mask[&pos[..]])
                    .count();
                Cell::Clear(adjacent.try_into().unwrap())
            }
        });

        Ok(Self { cells, bomb_count })
    }

    /// Builds a board from explicit bomb coordinates. Duplicates collapse
    /// into a single bomb; out-of-bounds or wrong-arity coordinates are
    /// rejected.
    pub fn from_bombs(shape: &[Ix], bombs: &[Coord]) -> Result<Self> {
        validate_shape(shape)?;

        let mut mask = ArrayD::from_elem(IxDyn(shape), false);
        for bomb in bombs {
            match mask.get_mut(&bomb[..]) {
                Some(cell) => *cell = true,
                None => return Err(GameError::InvalidCoords),
            }
        }

        Self::from_bomb_mask(mask)
    }

    pub fn config(&self) -> GameConfig {
        GameConfig::new_unchecked(Shape::from_slice(self.shape()), self.bomb_count)
    }

    pub fn shape(&self) -> &[Ix] {
        self.cells.shape()
    }

    pub fn ndim(&self) -> usize {
        self.cells.ndim()
    }

    pub fn total_cells(&self) -> CellCount {
        self.cells.len()
    }

    pub fn bomb_count(&self) -> CellCount {
        self.bomb_count
    }

    pub fn safe_cell_count(&self) -> CellCount {
        self.total_cells() - self.bomb_count
    }

    /// Checked cell lookup.
    pub fn cell(&self, coord: &[Ix]) -> Result<Cell> {
        self.cells.get(coord).copied().ok_or(GameError::InvalidCoords)
    }

    pub fn validate_coord<'a>(&self, coord: &'a [Ix]) -> Result<&'a [Ix]> {
        if coord.len() == self.ndim() && coord.iter().zip(self.shape()).all(|(&c, &len)| c < len) {
            Ok(coord)
        } else {
            Err(GameError::InvalidCoords)
        }
    }

    pub(crate) fn cells(&self) -> &ArrayD<Cell> {
        &self.cells
    }
}

impl Index<&[Ix]> for Board {
    type Output = Cell;

    fn index(&self, index: &[Ix]) -> &Self::Output {
        &self.cells[index]
    }
}
