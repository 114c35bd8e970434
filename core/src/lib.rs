#![no_std]

extern crate alloc;

use serde::{Deserialize, Serialize};

pub use board::*;
pub use cell::*;
pub use engine::*;
pub use error::*;
pub use generator::*;
pub use render::*;
pub use types::*;

mod board;
mod cell;
mod engine;
mod error;
mod generator;
mod render;
mod types;

/// Parameters for generated games: a board shape and how many bombs to
/// place on it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    pub shape: Shape,
    pub bombs: CellCount,
}

impl GameConfig {
    pub fn new_unchecked(shape: Shape, bombs: CellCount) -> Self {
        Self { shape, bombs }
    }

    /// Validates the shape and clamps the bomb count to what the board can
    /// hold, always leaving at least one bomb.
    pub fn new(shape: Shape, bombs: CellCount) -> Result<Self> {
        validate_shape(&shape)?;
        let bombs = bombs.clamp(1, shape.iter().product());
        Ok(Self::new_unchecked(shape, bombs))
    }

    pub fn total_cells(&self) -> CellCount {
        self.shape.iter().product()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_clamps_the_bomb_count() {
        let config = GameConfig::new(Shape::from_slice(&[2, 4]), 99).unwrap();
        assert_eq!(config.bombs, 8);

        let config = GameConfig::new(Shape::from_slice(&[2, 4]), 0).unwrap();
        assert_eq!(config.bombs, 1);
    }

    #[test]
    fn config_rejects_malformed_shapes() {
        assert_eq!(GameConfig::new(Shape::new(), 1), Err(GameError::InvalidShape));
        assert_eq!(
            GameConfig::new(Shape::from_slice(&[3, 0]), 1),
            Err(GameError::InvalidShape)
        );
    }

    #[test]
    fn total_cells_is_the_shape_product() {
        let config = GameConfig::new(Shape::from_slice(&[2, 3, 4]), 5).unwrap();
        assert_eq!(config.total_cells(), 24);
    }
}
