// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Content-aware image reduction by seam carving.
//!
//! A seam is a connected path of pixels, one per row or one per
//! column.  The carver repeatedly finds the seam with the least
//! colour-gradient energy and removes it, until the image is the size
//! asked for.

pub mod ternary;

pub mod cancel;
pub mod energy;
pub mod error;
pub mod imagefile;
pub mod pixel;
pub mod pixelpairs;
pub mod seamcarver;
pub mod seamfinder;
pub mod seamremover;
pub mod twodmap;
pub mod visualizer;

pub use cancel::CancellationToken;
pub use energy::{calculate_energy, energy_to_image, EnergyFunction, EnergyGrid, GradientEnergy};
pub use error::CarveError;
pub use imagefile::{ImageFile, Loader, Writer};
pub use pixel::{grid_from_image, grid_to_image, Pixel, PixelGrid};
pub use seamcarver::{seamcarve, AxisPriority, CarveOptions, Outcome, SeamCarver};
pub use seamfinder::{energy_to_horizontal_seam, energy_to_vertical_seam, find_seam, Axis, Seam};
pub use seamremover::remove_seam;
pub use twodmap::{Dimensions, TwoDimensionalMap};
pub use visualizer::{DumpVisualizer, NullVisualizer, Visualizer};
