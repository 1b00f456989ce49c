// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Pixels and the pixel grid
//!
//! The carver works on its own plain RGB grid rather than on an
//! ImageRS buffer, so that seams can be removed in place.  These are
//! the conversions in and out of ImageRS.

use crate::twodmap::TwoDimensionalMap;
use image::{Rgb, RgbImage};

/// Three 8-bit channels.
#[derive(Default, Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Pixel {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Pixel {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Pixel { r, g, b }
    }

    pub fn channels(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

impl From<Rgb<u8>> for Pixel {
    fn from(p: Rgb<u8>) -> Self {
        Pixel::new(p[0], p[1], p[2])
    }
}

impl From<Pixel> for Rgb<u8> {
    fn from(p: Pixel) -> Self {
        Rgb([p.r, p.g, p.b])
    }
}

/// The image being carved.
pub type PixelGrid = TwoDimensionalMap<Pixel>;

/// Copy an ImageRS RGB buffer into a pixel grid.
pub fn grid_from_image(image: &RgbImage) -> PixelGrid {
    let (width, height) = (image.width(), image.height());
    PixelGrid::from_fn(width, height, |x, y| Pixel::from(*image.get_pixel(x, y)))
}

/// Copy a pixel grid back out into an ImageRS RGB buffer.
pub fn grid_to_image(grid: &PixelGrid) -> RgbImage {
    RgbImage::from_fn(grid.width(), grid.height(), |x, y| grid[(x, y)].into())
}
