use crate::*;
pub use random::*;

mod random;

/// Strategy for producing a fully counted board from a game configuration.
pub trait BoardGenerator {
    fn generate(self, config: &GameConfig) -> Board;
}

/// Constraint applied to the starting cell during generation.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum StartCell {
    /// No constraint; the first dig may hit a bomb.
    Random,
    /// The starting cell never holds a bomb.
    SimpleSafe,
    /// The starting cell and its whole neighborhood stay clear of bombs.
    AlwaysZero,
}
