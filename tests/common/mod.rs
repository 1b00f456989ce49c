// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use image::{Rgb, RgbImage};

/// A flat grey field with a bright block in it.  Carving should take
/// the grey and leave the block alone.
pub fn block_on_grey(width: u32, height: u32, block: (u32, u32, u32, u32)) -> RgbImage {
    let (bx, by, bw, bh) = block;
    RgbImage::from_fn(width, height, |x, y| {
        if x >= bx && x < bx + bw && y >= by && y < by + bh {
            Rgb([250, 200, 20])
        } else {
            Rgb([90, 90, 90])
        }
    })
}

/// Deterministic colour noise: every pixel differs from its
/// neighbours, so no seam is free.
pub fn noise(width: u32, height: u32) -> RgbImage {
    RgbImage::from_fn(width, height, |x, y| {
        let v = x.wrapping_mul(2_654_435_761).wrapping_add(y.wrapping_mul(40_503));
        Rgb([v as u8, (v >> 8) as u8, (v >> 16) as u8])
    })
}

pub fn count_colour(image: &RgbImage, colour: Rgb<u8>) -> usize {
    image.pixels().filter(|&&p| p == colour).count()
}
