// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The two-dimensional map
//!
//! One contiguous, row-major buffer that serves as the pixel grid,
//! the energy grid, and the cumulative-energy grid with its back
//! pointers.  The pixel grid shrinks in place as seams come out of
//! it; the others are rebuilt every pass.

use std::ops::{Index, IndexMut};

/// The pair (width, height).  Every component hands one of these
/// back rather than mutating a pair of counters somewhere else.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    pub fn new(width: u32, height: u32) -> Self {
        Dimensions { width, height }
    }
}

/// An addressable two-dimensional field of `P`, addressed as `(x, y)`
/// where `x` is the column and `y` the row.
#[derive(Debug, Clone, PartialEq)]
pub struct TwoDimensionalMap<P: Default + Copy> {
    width: u32,
    height: u32,
    data: Vec<P>,
}

impl<P: Default + Copy> TwoDimensionalMap<P> {
    /// Define a new map filled with `P::default()`.
    pub fn new(width: u32, height: u32) -> Self {
        TwoDimensionalMap {
            width,
            height,
            data: vec![P::default(); width as usize * height as usize],
        }
    }

    /// Wrap an existing row-major buffer.  Returns `None` if the
    /// buffer's length doesn't match the dimensions.
    pub fn from_vec(width: u32, height: u32, data: Vec<P>) -> Option<Self> {
        if data.len() != width as usize * height as usize {
            return None;
        }
        Some(TwoDimensionalMap {
            width,
            height,
            data,
        })
    }

    /// Build a map by calling `f(x, y)` for every cell, row by row.
    pub fn from_fn<F>(width: u32, height: u32, mut f: F) -> Self
    where
        F: FnMut(u32, u32) -> P,
    {
        let mut data = Vec::with_capacity(width as usize * height as usize);
        for y in 0..height {
            for x in 0..width {
                data.push(f(x, y));
            }
        }
        TwoDimensionalMap {
            width,
            height,
            data,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn dimensions(&self) -> Dimensions {
        Dimensions::new(self.width, self.height)
    }

    /// The raw row-major buffer.
    pub fn as_slice(&self) -> &[P] {
        &self.data
    }

    /// One row, as a slice.
    pub fn row(&self, y: u32) -> &[P] {
        let start = self.get_index(0, y);
        &self.data[start..start + self.width as usize]
    }

    // Absolutely, the number one name of this game is keep the index
    // math in a singular location and never, ever mess with it.
    fn get_index(&self, x: u32, y: u32) -> usize {
        debug_assert!(x < self.width && y < self.height);
        (y as usize) * (self.width as usize) + (x as usize)
    }

    /// Drop the cell at `(columns[y], y)` from every row and close the
    /// gap.  Works inside the existing buffer: the write cursor never
    /// overtakes the read cursor, so nothing is clobbered before it is
    /// moved.  The caller guarantees one in-range column per row.
    pub(crate) fn remove_column_per_row(&mut self, columns: &[u32]) {
        debug_assert_eq!(columns.len(), self.height as usize);
        let width = self.width as usize;
        let mut write = 0;
        for (y, &skip) in columns.iter().enumerate() {
            let start = y * width;
            for x in 0..width {
                if x != skip as usize {
                    self.data[write] = self.data[start + x];
                    write += 1;
                }
            }
        }
        self.data.truncate(write);
        self.width -= 1;
    }

    /// Drop the cell at `(x, rows[x])` from every column, pulling the
    /// cells below it up by one, then discard the last row.
    pub(crate) fn remove_row_per_column(&mut self, rows: &[u32]) {
        debug_assert_eq!(rows.len(), self.width as usize);
        let width = self.width as usize;
        let height = self.height as usize;
        for (x, &skip) in rows.iter().enumerate() {
            for y in (skip as usize)..(height - 1) {
                self.data[y * width + x] = self.data[(y + 1) * width + x];
            }
        }
        self.data.truncate((height - 1) * width);
        self.height -= 1;
    }
}

impl<P: Default + Copy> Index<(u32, u32)> for TwoDimensionalMap<P> {
    type Output = P;

    /// A convenience addressing mode for getting values.
    fn index(&self, (x, y): (u32, u32)) -> &P {
        let index = self.get_index(x, y);
        &self.data[index]
    }
}

impl<P: Default + Copy> IndexMut<(u32, u32)> for TwoDimensionalMap<P> {
    /// A convenience addressing mode for setting values.
    fn index_mut(&mut self, (x, y): (u32, u32)) -> &mut P {
        let index = self.get_index(x, y);
        &mut self.data[index]
    }
}

/// A cumulative energy paired with the offset of the cell it was
/// reached from on the previous line.
#[derive(Default, Debug, Copy, Clone)]
pub(crate) struct EnergyAndBackPointer<P: Default + Copy> {
    pub energy: P,
    pub parent: u32,
}
