// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Getting pixels in and out of files.  The carver never sees a file;
//! these traits sit between it and ImageRS, which picks the format
//! from the file's contents on the way in and its extension on the
//! way out.

use crate::error::CarveError;
use crate::pixel::{grid_from_image, grid_to_image, PixelGrid};
use log::debug;
use std::path::Path;

pub trait Loader {
    fn load(&self, path: &Path) -> Result<PixelGrid, CarveError>;
}

pub trait Writer {
    fn save(&self, grid: &PixelGrid, path: &Path) -> Result<(), CarveError>;
}

/// Loads and saves through ImageRS.  Anything with an alpha channel or
/// a different depth is flattened to 8-bit RGB on the way in.
#[derive(Debug, Default, Copy, Clone)]
pub struct ImageFile;

impl Loader for ImageFile {
    fn load(&self, path: &Path) -> Result<PixelGrid, CarveError> {
        let image = image::open(path).map_err(|cause| CarveError::Decode {
            path: path.display().to_string(),
            cause,
        })?;
        let grid = grid_from_image(&image.to_rgb());
        if grid.width() == 0 || grid.height() == 0 {
            return Err(CarveError::Decode {
                path: path.display().to_string(),
                cause: image::ImageError::DimensionError,
            });
        }
        debug!("loaded {} ({}x{})", path.display(), grid.width(), grid.height());
        Ok(grid)
    }
}

impl Writer for ImageFile {
    fn save(&self, grid: &PixelGrid, path: &Path) -> Result<(), CarveError> {
        grid_to_image(grid)
            .save(path)
            .map_err(|e| CarveError::Encode {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;
        debug!("saved {} ({}x{})", path.display(), grid.width(), grid.height());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pixel::Pixel;

    #[test]
    fn png_survives_a_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("grid.png");
        let grid = PixelGrid::from_fn(5, 3, |x, y| Pixel::new(x as u8 * 50, y as u8 * 80, 17));
        ImageFile.save(&grid, &path).unwrap();
        assert_eq!(ImageFile.load(&path).unwrap(), grid);
    }

    #[test]
    fn missing_file_is_a_decode_error() {
        let dir = tempfile::tempdir().unwrap();
        match ImageFile.load(&dir.path().join("nothing-here.png")) {
            Err(CarveError::Decode { .. }) => (),
            other => panic!("expected a decode error, got {:?}", other),
        }
    }

    #[test]
    fn empty_image_is_a_decode_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.ppm");
        std::fs::write(&path, b"P6\n0 0\n255\n").unwrap();
        match ImageFile.load(&path) {
            Err(CarveError::Decode { .. }) => (),
            other => panic!("expected a decode error, got {:?}", other),
        }
    }

    #[test]
    fn unknown_extension_is_an_encode_error() {
        let dir = tempfile::tempdir().unwrap();
        let grid = PixelGrid::new(2, 2);
        match ImageFile.save(&grid, &dir.path().join("grid.not-a-format")) {
            Err(CarveError::Encode { .. }) => (),
            other => panic!("expected an encode error, got {:?}", other),
        }
    }
}
