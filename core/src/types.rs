use ndarray::{ArrayD, Dimension, IxDyn};
use smallvec::SmallVec;

use crate::*;

/// Single coordinate axis component.
pub type Ix = usize;

/// Count type used for bomb counts and total-cell counts.
pub type CellCount = usize;

/// N-dimensional coordinate, one component per axis. Stored inline for up
/// to four axes, spilling to the heap for deeper boards.
pub type Coord = SmallVec<[Ix; 4]>;

/// Board shape; each entry is the exclusive upper bound for its axis.
pub type Shape = SmallVec<[Ix; 4]>;

pub(crate) fn validate_shape(shape: &[Ix]) -> Result<()> {
    if shape.is_empty() || shape.iter().any(|&len| len == 0) {
        Err(GameError::InvalidShape)
    } else {
        Ok(())
    }
}

/// Yields every valid coordinate of `shape` exactly once, axis-major with
/// the last axis varying fastest.
pub fn iter_coords(shape: &[Ix]) -> impl Iterator<Item = Coord> + use<> {
    ndarray::indices(IxDyn(shape))
        .into_iter()
        .map(|ix| Coord::from_slice(ix.slice()))
}

/// Applies the displacement encoded by `code` to `center`, returning a
/// value only when the result stays within `bounds`.
///
/// `code` is a base-3 odometer reading, one trit per axis with the last
/// axis fastest: 0 maps to -1, 1 to 0, 2 to +1.
fn apply_displacement(center: &[Ix], bounds: &[Ix], mut code: usize) -> Option<Coord> {
    let mut next = Coord::from_slice(center);
    for axis in (0..center.len()).rev() {
        let delta = (code % 3) as isize - 1;
        code /= 3;

        let shifted = center[axis].checked_add_signed(delta)?;
        if shifted >= bounds[axis] {
            return None;
        }
        next[axis] = shifted;
    }
    Some(next)
}

/// Iterator over the in-bounds neighbors of a coordinate: every coordinate
/// differing from the center by at most one on every axis, the center
/// itself excluded. Deterministic axis-major order, last axis fastest.
#[derive(Debug)]
pub struct NeighborIter {
    center: Coord,
    bounds: Shape,
    cursor: usize,
    end: usize,
    identity: usize,
}

impl NeighborIter {
    pub fn new(center: Coord, bounds: Shape) -> Self {
        debug_assert_eq!(center.len(), bounds.len());
        let end = 3usize.pow(center.len() as u32);
        Self {
            center,
            bounds,
            cursor: 0,
            end,
            identity: (end - 1) / 2,
        }
    }
}

impl Iterator for NeighborIter {
    type Item = Coord;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if self.cursor >= self.end {
                return None;
            }

            let code = self.cursor;
            self.cursor += 1;

            // the all-zero displacement is the center itself
            if code == self.identity {
                continue;
            }

            let next_item = apply_displacement(&self.center, &self.bounds, code);
            if next_item.is_some() {
                return next_item;
            }
        }
    }
}

pub trait NeighborIterExt {
    fn iter_neighbors(&self, index: &[Ix]) -> NeighborIter;
}

impl<T> NeighborIterExt for ArrayD<T> {
    fn iter_neighbors(&self, index: &[Ix]) -> NeighborIter {
        NeighborIter::new(Coord::from_slice(index), Shape::from_slice(self.shape()))
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use super::*;

    fn coord(components: &[Ix]) -> Coord {
        Coord::from_slice(components)
    }

    #[test]
    fn iter_coords_is_axis_major() {
        let coords: Vec<Coord> = iter_coords(&[2, 3]).collect();
        let expected = [[0, 0], [0, 1], [0, 2], [1, 0], [1, 1], [1, 2]];

        assert_eq!(coords.len(), expected.len());
        for (got, want) in coords.iter().zip(expected.iter()) {
            assert_eq!(&got[..], &want[..]);
        }
    }

    #[test]
    fn iter_coords_covers_any_dimensionality() {
        assert_eq!(iter_coords(&[4]).count(), 4);
        assert_eq!(iter_coords(&[2, 3, 4]).count(), 24);
        assert_eq!(iter_coords(&[2, 2, 2, 2]).count(), 16);
    }

    #[test]
    fn neighbors_exclude_the_center() {
        let neighbors: Vec<Coord> =
            NeighborIter::new(coord(&[1, 1]), Shape::from_slice(&[3, 3])).collect();

        assert_eq!(neighbors.len(), 8);
        assert!(!neighbors.contains(&coord(&[1, 1])));
    }

    #[test]
    fn neighbors_stay_in_bounds() {
        let neighbors: Vec<Coord> =
            NeighborIter::new(coord(&[0, 0]), Shape::from_slice(&[3, 3])).collect();
        let expected = [[0, 1], [1, 0], [1, 1]];

        assert_eq!(neighbors.len(), expected.len());
        for (got, want) in neighbors.iter().zip(expected.iter()) {
            assert_eq!(&got[..], &want[..]);
        }
    }

    #[test]
    fn neighbor_counts_scale_with_dimensionality() {
        assert_eq!(NeighborIter::new(coord(&[2]), Shape::from_slice(&[5])).count(), 2);
        assert_eq!(NeighborIter::new(coord(&[0]), Shape::from_slice(&[5])).count(), 1);
        assert_eq!(
            NeighborIter::new(coord(&[1, 1, 1]), Shape::from_slice(&[3, 3, 3])).count(),
            26
        );
        assert_eq!(
            NeighborIter::new(coord(&[0, 0, 0, 0]), Shape::from_slice(&[2, 2, 2, 2])).count(),
            15
        );
    }
}
