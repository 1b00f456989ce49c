// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Calculate the energy of a pixel pair
//!
//! Given two pixels, the energy between them is the sum of the
//! absolute differences of their red, green and blue channels.

use crate::pixel::Pixel;

/// (Pixel, Pixel) -> Energy
#[inline]
pub fn energy_of_pair(p1: &Pixel, p2: &Pixel) -> u32 {
    p1.channels()
        .iter()
        .zip(p2.channels().iter())
        .map(|(&a, &b)| (i32::from(a) - i32::from(b)).abs() as u32)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pair_energy_is_symmetric_and_unclamped() {
        let black = Pixel::new(0, 0, 0);
        let white = Pixel::new(255, 255, 255);
        assert_eq!(energy_of_pair(&black, &white), 765);
        assert_eq!(energy_of_pair(&white, &black), 765);
        assert_eq!(energy_of_pair(&white, &white), 0);
        assert_eq!(energy_of_pair(&Pixel::new(10, 20, 30), &Pixel::new(13, 18, 30)), 5);
    }
}
