// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Watching the carver work
//!
//! A `Visualizer` is shown the energy map, the chosen seam, and the
//! shrunk image at the end of every pass.  What it does with them is
//! its own business: the carver logs any error it returns and carries
//! on.

use crate::energy::{energy_to_image, EnergyGrid};
use crate::pixel::{grid_to_image, Pixel, PixelGrid};
use crate::seamfinder::{Axis, Seam};
use failure::{Error, ResultExt};
use std::fs;
use std::path::{Path, PathBuf};

/// The colour a seam is painted in.
pub const SEAM_COLOUR: Pixel = Pixel::new(255, 0, 0);

pub trait Visualizer {
    fn show_image(&mut self, grid: &PixelGrid, label: &str) -> Result<(), Error>;
    fn show_energy(&mut self, energy: &EnergyGrid, label: &str) -> Result<(), Error>;
    fn show_seam(&mut self, grid: &PixelGrid, seam: &Seam, label: &str) -> Result<(), Error>;
}

/// Shows nothing.  For headless use and tests.
#[derive(Debug, Default, Copy, Clone)]
pub struct NullVisualizer;

impl Visualizer for NullVisualizer {
    fn show_image(&mut self, _grid: &PixelGrid, _label: &str) -> Result<(), Error> {
        Ok(())
    }

    fn show_energy(&mut self, _energy: &EnergyGrid, _label: &str) -> Result<(), Error> {
        Ok(())
    }

    fn show_seam(&mut self, _grid: &PixelGrid, _seam: &Seam, _label: &str) -> Result<(), Error> {
        Ok(())
    }
}

/// A copy of the grid with the seam painted over it.
pub fn paint_seam(grid: &PixelGrid, seam: &Seam) -> PixelGrid {
    let mut painted = grid.clone();
    let (width, height) = (grid.width(), grid.height());
    for (line, &offset) in seam.offsets.iter().enumerate() {
        let (x, y) = match seam.axis {
            Axis::Vertical => (offset, line as u32),
            Axis::Horizontal => (line as u32, offset),
        };
        // Offsets off the grid are skipped.
        if x < width && y < height {
            painted[(x, y)] = SEAM_COLOUR;
        }
    }
    painted
}

/// Writes every frame it's shown as a PNG in a directory, named after
/// the label with a running frame number in front, so that a listing
/// of the directory plays back the carve in order.
#[derive(Debug)]
pub struct DumpVisualizer {
    directory: PathBuf,
    frame: usize,
}

impl DumpVisualizer {
    /// Creates the directory if it doesn't already exist.
    pub fn new<P: AsRef<Path>>(directory: P) -> Result<Self, Error> {
        let directory = directory.as_ref().to_path_buf();
        fs::create_dir_all(&directory)
            .with_context(|_| format!("creating dump directory {}", directory.display()))?;
        Ok(DumpVisualizer {
            directory,
            frame: 0,
        })
    }

    fn next_path(&mut self, label: &str) -> PathBuf {
        let name = format!("{:06}-{}.png", self.frame, label);
        self.frame += 1;
        self.directory.join(name)
    }
}

impl Visualizer for DumpVisualizer {
    fn show_image(&mut self, grid: &PixelGrid, label: &str) -> Result<(), Error> {
        let path = self.next_path(label);
        grid_to_image(grid)
            .save(&path)
            .with_context(|_| format!("writing {}", path.display()))?;
        Ok(())
    }

    fn show_energy(&mut self, energy: &EnergyGrid, label: &str) -> Result<(), Error> {
        let path = self.next_path(label);
        energy_to_image(energy)
            .save(&path)
            .with_context(|_| format!("writing {}", path.display()))?;
        Ok(())
    }

    fn show_seam(&mut self, grid: &PixelGrid, seam: &Seam, label: &str) -> Result<(), Error> {
        let path = self.next_path(label);
        grid_to_image(&paint_seam(grid, seam))
            .save(&path)
            .with_context(|_| format!("writing {}", path.display()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn painting_follows_the_seam() {
        let grid = PixelGrid::new(3, 2);
        let seam = Seam {
            axis: Axis::Horizontal,
            offsets: vec![1, 0, 1],
            cost: 0,
        };
        let painted = paint_seam(&grid, &seam);
        assert_eq!(painted[(0, 1)], SEAM_COLOUR);
        assert_eq!(painted[(1, 0)], SEAM_COLOUR);
        assert_eq!(painted[(2, 1)], SEAM_COLOUR);
        assert_eq!(painted[(0, 0)], Pixel::default());
        assert_eq!(grid[(0, 1)], Pixel::default());
    }

    #[test]
    fn painting_skips_offsets_off_the_grid() {
        let grid = PixelGrid::new(2, 3);
        let seam = Seam {
            axis: Axis::Vertical,
            offsets: vec![0, 7, 1, 1],
            cost: 0,
        };
        let painted = paint_seam(&grid, &seam);
        assert_eq!(painted[(0, 0)], SEAM_COLOUR);
        assert_eq!(painted.row(1), &[Pixel::default(), Pixel::default()]);
        assert_eq!(painted[(1, 2)], SEAM_COLOUR);
    }

    #[test]
    fn dumps_numbered_frames() {
        let dir = tempfile::tempdir().unwrap();
        let mut dumper = DumpVisualizer::new(dir.path().join("frames")).unwrap();
        let grid = PixelGrid::new(2, 2);
        dumper.show_energy(&EnergyGrid::new(2, 2), "energy").unwrap();
        dumper.show_image(&grid, "image").unwrap();
        assert!(dir.path().join("frames/000000-energy.png").is_file());
        assert!(dir.path().join("frames/000001-image.png").is_file());
    }
}
