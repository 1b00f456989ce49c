// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Find the cheapest seam in an energy map
//!
//! Dynamic programming over the cumulative energy: every cell holds
//! the cheapest way to reach it from the first line, plus a pointer
//! back to the neighbour on the previous line it came from.  The
//! cheapest cell on the last line is the end of the seam, and the
//! pointers lead back to the start.
//!
//! Ties are broken the same way every time.  At the end of the seam
//! the lowest index wins.  Walking back, the straight-ahead parent
//! wins, then the lower-index diagonal, then the higher one.

use crate::cq;
use crate::energy::EnergyGrid;
use crate::twodmap::{EnergyAndBackPointer, TwoDimensionalMap};
use itertools::Itertools;
use std::fmt;

/// Which way a seam runs.  A vertical seam runs top to bottom and
/// takes one pixel out of every row, narrowing the image; a
/// horizontal seam runs left to right and shortens it.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Axis {
    Vertical,
    Horizontal,
}

impl Axis {
    /// The other one.
    pub fn turn(self) -> Self {
        match self {
            Axis::Vertical => Axis::Horizontal,
            Axis::Horizontal => Axis::Vertical,
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Axis::Vertical => write!(f, "vertical"),
            Axis::Horizontal => write!(f, "horizontal"),
        }
    }
}

/// A connected path of pixels, one per line across the seam's axis:
/// a column index for each row of a vertical seam, a row index for
/// each column of a horizontal one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Seam {
    pub axis: Axis,
    pub offsets: Vec<u32>,
    /// Total energy of the pixels on the path.
    pub cost: u64,
}

impl Seam {
    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    /// True if no two consecutive offsets are more than one apart.
    pub fn is_connected(&self) -> bool {
        self.offsets
            .iter()
            .tuple_windows()
            .all(|(&a, &b)| a.max(b) - a.min(b) <= 1)
    }
}

type CumulativeMap = TwoDimensionalMap<EnergyAndBackPointer<u64>>;

// The DP is written once, in terms of "lines" (rows for a vertical
// seam, columns for a horizontal one) and "positions" along each
// line.  `energy_at(line, pos)` does the coordinate swap, and the
// cumulative map is always stored as (pos, line).
fn cumulative_energy<F>(lines: u32, span: u32, energy_at: F) -> CumulativeMap
where
    F: Fn(u32, u32) -> u32,
{
    let mut target = CumulativeMap::new(span, lines);

    // Populate the first line with their native energies.
    for pos in 0..span {
        target[(pos, 0)].energy = u64::from(energy_at(0, pos));
    }

    let maxpos = span - 1;
    for line in 1..lines {
        for pos in 0..span {
            // Straight ahead first, so it wins any tie.
            let mut best = EnergyAndBackPointer {
                energy: target[(pos, line - 1)].energy,
                parent: pos,
            };
            let diagonals = [
                cq!(pos > 0, Some(pos - 1), None),
                cq!(pos < maxpos, Some(pos + 1), None),
            ];
            for candidate in diagonals.iter().filter_map(|&c| c) {
                let energy = target[(candidate, line - 1)].energy;
                if energy < best.energy {
                    best = EnergyAndBackPointer {
                        energy,
                        parent: candidate,
                    };
                }
            }
            target[(pos, line)] = EnergyAndBackPointer {
                energy: u64::from(energy_at(line, pos)) + best.energy,
                parent: best.parent,
            };
        }
    }
    target
}

fn backtrack(target: &CumulativeMap, axis: Axis) -> Seam {
    let (span, lines) = (target.width(), target.height());
    let last = lines - 1;

    // Find the cheapest end of the seam; min_by_key keeps the first
    // of several equal minima, which is the lowest index.
    let mut seam_pos = (0..span)
        .min_by_key(|pos| target[(*pos, last)].energy)
        .unwrap_or(0);
    let cost = target[(seam_pos, last)].energy;

    // Working backwards, collect the offsets, reverse and return.
    let mut offsets: Vec<u32> = (0..lines)
        .rev()
        .fold(Vec::with_capacity(lines as usize), |mut acc, line| {
            acc.push(seam_pos);
            seam_pos = target[(seam_pos, line)].parent;
            acc
        });
    offsets.reverse();

    Seam { axis, offsets, cost }
}

/// Given an energy map, return the seam of x-coordinates, one per
/// row, with the least total energy.
pub fn energy_to_vertical_seam(energy: &EnergyGrid) -> Seam {
    let target = cumulative_energy(energy.height(), energy.width(), |y, x| energy[(x, y)]);
    backtrack(&target, Axis::Vertical)
}

/// Given an energy map, return the seam of y-coordinates, one per
/// column, with the least total energy.
pub fn energy_to_horizontal_seam(energy: &EnergyGrid) -> Seam {
    let target = cumulative_energy(energy.width(), energy.height(), |x, y| energy[(x, y)]);
    backtrack(&target, Axis::Horizontal)
}

/// Find the cheapest seam along the requested axis.
pub fn find_seam(energy: &EnergyGrid, axis: Axis) -> Seam {
    match axis {
        Axis::Vertical => energy_to_vertical_seam(energy),
        Axis::Horizontal => energy_to_horizontal_seam(energy),
    }
}
