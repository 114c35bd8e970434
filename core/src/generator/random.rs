use alloc::vec::Vec;
use core::iter;

use ndarray::{ArrayD, IxDyn};

use super::*;

/// Generation strategy that can optionally keep the starting cell safe or
/// even zero, but other than that is purely random.
#[derive(Clone, Debug, PartialEq)]
pub struct RandomBoardGenerator {
    seed: u64,
    start: Coord,
    start_cell: StartCell,
}

impl RandomBoardGenerator {
    /// `start` must be a valid coordinate of the shape the generator is
    /// later run on.
    pub fn new(seed: u64, start: Coord, start_cell: StartCell) -> Self {
        Self {
            seed,
            start,
            start_cell,
        }
    }
}

impl BoardGenerator for RandomBoardGenerator {
    fn generate(self, config: &GameConfig) -> Board {
        use rand::prelude::*;
        use StartCell::*;

        let total_cells = config.total_cells();

        // full boards need no sampling
        if config.bombs >= total_cells {
            if config.bombs > total_cells {
                log::warn!(
                    "board already full, generated anyway, requested {} but only fits {}",
                    config.bombs,
                    total_cells
                );
            }
            let mask = ArrayD::from_elem(IxDyn(&config.shape), true);
            return Board::from_bomb_mask(mask).expect("config shape should be valid");
        }

        let start_zone: Vec<Coord> = iter::once(self.start.clone())
            .chain(NeighborIter::new(self.start.clone(), config.shape.clone()))
            .collect();

        let actual_start_cell = match self.start_cell {
            Random => Random,
            SimpleSafe | AlwaysZero if config.bombs + 1 > total_cells => {
                log::warn!("cannot keep the start cell safe, fallback to random");
                Random
            }
            SimpleSafe => SimpleSafe,
            AlwaysZero if config.bombs + start_zone.len() > total_cells => {
                log::warn!("cannot keep the start cell zero, fallback to simple safe");
                SimpleSafe
            }
            AlwaysZero => AlwaysZero,
        };

        let mut mask: ArrayD<bool> = ArrayD::from_elem(IxDyn(&config.shape), false);
        let mut free_cells = match actual_start_cell {
            Random => total_cells,
            SimpleSafe => {
                mask[&self.start[..]] = true;
                total_cells - 1
            }
            AlwaysZero => {
                for coord in &start_zone {
                    mask[&coord[..]] = true;
                }
                total_cells - start_zone.len()
            }
        };
        let mut bombs_placed = 0;

        let mut rng = SmallRng::seed_from_u64(self.seed);
        {
            let cells = mask.as_slice_mut().expect("freshly built mask is contiguous");
            while bombs_placed < config.bombs {
                if free_cells == 0 {
                    break;
                }
                let mut place = rng.random_range(0..free_cells);
                for (i, cell) in cells.iter_mut().enumerate() {
                    if *cell {
                        place += 1;
                    }
                    if i == place {
                        *cell = true;
                        bombs_placed += 1;
                        free_cells -= 1;
                        break;
                    }
                }
            }
        }

        // undo to clear the protected cells again
        match actual_start_cell {
            Random => {}
            SimpleSafe => mask[&self.start[..]] = false,
            AlwaysZero => {
                for coord in &start_zone {
                    mask[&coord[..]] = false;
                }
            }
        }

        // double check the bomb count
        let count = mask.iter().filter(|&&cell| cell).count();
        if count != config.bombs {
            log::warn!(
                "generated bomb count mismatch, actual: {}, requested: {}",
                count,
                config.bombs
            );
        }
        Board::from_bomb_mask(mask).expect("config shape should be valid")
    }
}
