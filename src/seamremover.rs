// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Take a seam out of a grid
//!
//! The seam is checked against the grid before anything moves, so a
//! bad seam leaves the grid exactly as it was.

use crate::error::CarveError;
use crate::seamfinder::{Axis, Seam};
use crate::twodmap::{Dimensions, TwoDimensionalMap};

fn malformed(reason: String) -> CarveError {
    CarveError::MalformedSeam { reason }
}

/// Check that a seam fits a grid of the given dimensions: one offset
/// per line, every offset in range, every step at most one, and room
/// to shrink.
pub fn validate_seam(seam: &Seam, dimensions: Dimensions) -> Result<(), CarveError> {
    let (lines, span) = match seam.axis {
        Axis::Vertical => (dimensions.height, dimensions.width),
        Axis::Horizontal => (dimensions.width, dimensions.height),
    };
    if span <= 1 {
        return Err(malformed(format!(
            "a {} seam would empty a {}x{} grid",
            seam.axis, dimensions.width, dimensions.height
        )));
    }
    if seam.len() != lines as usize {
        return Err(malformed(format!(
            "{} seam has {} offsets, grid has {} lines",
            seam.axis,
            seam.len(),
            lines
        )));
    }
    if let Some((line, &offset)) = seam.offsets.iter().enumerate().find(|&(_, &o)| o >= span) {
        return Err(malformed(format!(
            "offset {} at line {} is outside 0..{}",
            offset, line, span
        )));
    }
    if !seam.is_connected() {
        return Err(malformed(format!("{} seam is not connected", seam.axis)));
    }
    Ok(())
}

/// Remove a seam from the grid in place, returning the new dimensions.
/// Exactly one dimension shrinks by one; every other cell keeps its
/// order and neighbours.
pub fn remove_seam<P>(grid: &mut TwoDimensionalMap<P>, seam: &Seam) -> Result<Dimensions, CarveError>
where
    P: Default + Copy,
{
    validate_seam(seam, grid.dimensions())?;
    match seam.axis {
        Axis::Vertical => grid.remove_column_per_row(&seam.offsets),
        Axis::Horizontal => grid.remove_row_per_column(&seam.offsets),
    }
    Ok(grid.dimensions())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pixel::{Pixel, PixelGrid};

    fn seam(axis: Axis, offsets: &[u32]) -> Seam {
        Seam {
            axis,
            offsets: offsets.to_vec(),
            cost: 0,
        }
    }

    fn labelled(width: u32, height: u32) -> PixelGrid {
        PixelGrid::from_fn(width, height, |x, y| Pixel::new(x as u8, y as u8, 0))
    }

    #[test]
    fn vertical_removal_shrinks_width_only() {
        let mut grid = labelled(4, 3);
        let dims = remove_seam(&mut grid, &seam(Axis::Vertical, &[1, 2, 3])).unwrap();
        assert_eq!(dims, Dimensions::new(3, 3));
        assert_eq!(grid.as_slice().len(), 12 - 3);
        assert_eq!(
            grid.row(0),
            &[Pixel::new(0, 0, 0), Pixel::new(2, 0, 0), Pixel::new(3, 0, 0)]
        );
        assert_eq!(
            grid.row(2),
            &[Pixel::new(0, 2, 0), Pixel::new(1, 2, 0), Pixel::new(2, 2, 0)]
        );
    }

    #[test]
    fn horizontal_removal_shrinks_height_only() {
        let mut grid = labelled(3, 4);
        let dims = remove_seam(&mut grid, &seam(Axis::Horizontal, &[3, 2, 2])).unwrap();
        assert_eq!(dims, Dimensions::new(3, 3));
        assert_eq!(grid.as_slice().len(), 12 - 3);
        // Column 0 loses its last row and is otherwise untouched.
        assert_eq!(grid[(0, 2)], Pixel::new(0, 2, 0));
        // Column 1 loses row 2, so row 3 slides up.
        assert_eq!(grid[(1, 1)], Pixel::new(1, 1, 0));
        assert_eq!(grid[(1, 2)], Pixel::new(1, 3, 0));
    }

    #[test]
    fn bad_seams_leave_the_grid_alone() {
        let original = labelled(3, 3);
        let bad = [
            seam(Axis::Vertical, &[0, 1]),
            seam(Axis::Vertical, &[0, 1, 3]),
            seam(Axis::Vertical, &[0, 2, 2]),
            seam(Axis::Horizontal, &[0, 0, 0, 0]),
        ];
        for s in bad.iter() {
            let mut grid = original.clone();
            match remove_seam(&mut grid, s) {
                Err(CarveError::MalformedSeam { .. }) => (),
                other => panic!("expected a malformed seam error, got {:?}", other),
            }
            assert_eq!(grid, original);
        }
    }

    #[test]
    fn cannot_remove_the_last_column() {
        let mut grid = labelled(1, 2);
        assert!(remove_seam(&mut grid, &seam(Axis::Vertical, &[0, 0])).is_err());
        assert_eq!(grid.dimensions(), Dimensions::new(1, 2));
    }
}
