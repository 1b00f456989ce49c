// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Everything that can go wrong while carving.

use failure::Fail;

#[derive(Debug, Fail)]
pub enum CarveError {
    /// Seam carving only shrinks; a target larger than the image, or
    /// with a zero dimension, is refused before any work is done.
    #[fail(
        display = "cannot carve a {}x{} image to {}x{}: targets must be between 1 and the current size",
        width, height, target_width, target_height
    )]
    InvalidTarget {
        width: u32,
        height: u32,
        target_width: u32,
        target_height: u32,
    },

    /// A seam that doesn't fit the grid it was meant for.  This is a
    /// bug in the carver, never a user error.
    #[fail(display = "malformed seam: {}", reason)]
    MalformedSeam { reason: String },

    #[fail(display = "could not decode {}: {}", path, cause)]
    Decode {
        path: String,
        #[cause]
        cause: image::ImageError,
    },

    #[fail(display = "could not encode {}: {}", path, message)]
    Encode { path: String, message: String },
}
