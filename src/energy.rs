// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Calculate the energy of an image
//!
//! The energy of a pixel is the colour gradient across it: the pair
//! energy of its left and right neighbours plus the pair energy of
//! the ones above and below.  Neighbours that would fall off the
//! edge are replaced by the pixel itself, so the border is never
//! amplified.

use crate::cq;
use crate::pixel::PixelGrid;
use crate::pixelpairs::energy_of_pair;
use crate::twodmap::TwoDimensionalMap;
use image::{GrayImage, Luma};
use num_traits::{NumCast, ToPrimitive};

/// Per-pixel energies, the same shape as the grid they came from.
pub type EnergyGrid = TwoDimensionalMap<u32>;

/// Anything that can score the pixels of a grid.  The carver only
/// ever talks to this trait, so a different cost model can be slotted
/// in without touching the seam code.
pub trait EnergyFunction {
    fn compute_energy(&self, grid: &PixelGrid) -> EnergyGrid;
}

/// The RGB gradient-magnitude energy.
#[derive(Debug, Default, Copy, Clone)]
pub struct GradientEnergy;

impl EnergyFunction for GradientEnergy {
    fn compute_energy(&self, grid: &PixelGrid) -> EnergyGrid {
        calculate_energy(grid)
    }
}

/// Compute the energy of every pixel in a grid.
pub fn calculate_energy(grid: &PixelGrid) -> EnergyGrid {
    let (width, height) = (grid.width(), grid.height());
    let (mw, mh) = (width - 1, height - 1);

    EnergyGrid::from_fn(width, height, |x, y| {
        let current_pixel = grid[(x, y)];
        let (leftpixel, rightpixel, uppixel, downpixel) = (
            cq!(x == 0, current_pixel, grid[(x - 1, y)]),
            cq!(x >= mw, current_pixel, grid[(x + 1, y)]),
            cq!(y == 0, current_pixel, grid[(x, y - 1)]),
            cq!(y >= mh, current_pixel, grid[(x, y + 1)]),
        );
        energy_of_pair(&leftpixel, &rightpixel) + energy_of_pair(&uppixel, &downpixel)
    })
}

/// Scale any numeric map into an 8-bit greyscale image, with the
/// largest value mapped to 255.  A flat map comes out black.
pub fn energy_to_image<P>(energy: &TwoDimensionalMap<P>) -> GrayImage
where
    P: Default + Copy + ToPrimitive,
{
    let value = |p: P| p.to_f64().unwrap_or(0.0);
    let factor = energy
        .as_slice()
        .iter()
        .map(|&p| value(p))
        .fold(0.0, f64::max);

    GrayImage::from_fn(energy.width(), energy.height(), |x, y| {
        let scaled = cq!(factor > 0.0, value(energy[(x, y)]) * 255.0 / factor, 0.0);
        Luma([NumCast::from(scaled.round().min(255.0)).unwrap_or(255u8)])
    })
}
