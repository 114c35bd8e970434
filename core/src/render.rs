use alloc::string::String;
use alloc::vec::Vec;

use ndarray::{ArrayD, Axis, Zip};

use crate::*;

/// Marker shown for cells that are still hidden.
pub const HIDDEN_SYMBOL: char = '_';

impl Game {
    /// Projects the board into a same-shaped grid of display symbols.
    /// With `xray` the visibility mask is ignored and every cell shows its
    /// contents.
    pub fn render(&self, xray: bool) -> ArrayD<char> {
        Zip::from(self.board().cells())
            .and(self.hidden_cells())
            .map_collect(|&cell, &hidden| {
                if hidden && !xray {
                    HIDDEN_SYMBOL
                } else {
                    cell.symbol()
                }
            })
    }

    /// Renders a two-dimensional game as rows of symbols joined by
    /// newlines.
    pub fn render_2d(&self, xray: bool) -> Result<String> {
        let grid = self.render(xray);
        if grid.ndim() != 2 {
            return Err(GameError::NotTwoDimensional);
        }

        let rows: Vec<String> = grid
            .axis_iter(Axis(0))
            .map(|row| row.iter().collect())
            .collect();
        Ok(rows.join("\n"))
    }
}
