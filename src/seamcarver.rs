// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Seamcarve - The main loop
//!
//! Carve one seam at a time until the grid is the target size:
//! energy, seam, removal, repeat.  The energy map is rebuilt from
//! scratch every pass, since every removal changes which pixels are
//! neighbours.

use crate::cancel::CancellationToken;
use crate::energy::{EnergyFunction, GradientEnergy};
use crate::error::CarveError;
use crate::pixel::{grid_from_image, grid_to_image, PixelGrid};
use crate::seamfinder::{find_seam, Axis};
use crate::seamremover::{remove_seam, validate_seam};
use crate::twodmap::Dimensions;
use crate::visualizer::Visualizer;
use image::RgbImage;
use log::{debug, info, warn};
use std::str::FromStr;

/// Which way to carve when both dimensions still need to come down.
/// It matters: carving columns first and rows first keep different
/// pixels.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum AxisPriority {
    /// Take columns until the width is right, then rows.
    VerticalFirst,
    /// Take rows until the height is right, then columns.
    HorizontalFirst,
    /// Take a column, then a row, and so on, until one of them is done.
    Alternate,
}

impl Default for AxisPriority {
    fn default() -> Self {
        AxisPriority::VerticalFirst
    }
}

impl FromStr for AxisPriority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "vertical-first" => Ok(AxisPriority::VerticalFirst),
            "horizontal-first" => Ok(AxisPriority::HorizontalFirst),
            "alternate" => Ok(AxisPriority::Alternate),
            _ => Err(format!("unknown axis priority '{}'", s)),
        }
    }
}

/// Knobs for the carver.
#[derive(Debug, Default, Copy, Clone)]
pub struct CarveOptions {
    pub axis_priority: AxisPriority,
}

/// How a reduction ended.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub dimensions: Dimensions,
    pub vertical_seams: u32,
    pub horizontal_seams: u32,
    /// True if the cancellation token stopped the carve early.
    pub cancelled: bool,
}

impl Outcome {
    pub fn seams_removed(&self) -> u32 {
        self.vertical_seams + self.horizontal_seams
    }
}

/// The carver: an energy function plus options.
#[derive(Debug, Clone)]
pub struct SeamCarver<E: EnergyFunction = GradientEnergy> {
    energy: E,
    options: CarveOptions,
}

impl SeamCarver<GradientEnergy> {
    pub fn new(options: CarveOptions) -> Self {
        SeamCarver {
            energy: GradientEnergy,
            options,
        }
    }
}

impl Default for SeamCarver<GradientEnergy> {
    fn default() -> Self {
        SeamCarver::new(CarveOptions::default())
    }
}

impl<E: EnergyFunction> SeamCarver<E> {
    /// A carver that scores pixels with something other than the
    /// gradient energy.
    pub fn with_energy(energy: E, options: CarveOptions) -> Self {
        SeamCarver { energy, options }
    }

    /// Pick the axis for the next seam, or `None` if the grid is
    /// already at the target size.  `previous` is the axis of the last
    /// seam taken, for alternation.
    fn next_axis(&self, current: Dimensions, target: Dimensions, previous: Option<Axis>) -> Option<Axis> {
        let need_width = current.width > target.width;
        let need_height = current.height > target.height;
        match (need_width, need_height) {
            (false, false) => None,
            (true, false) => Some(Axis::Vertical),
            (false, true) => Some(Axis::Horizontal),
            (true, true) => Some(match self.options.axis_priority {
                AxisPriority::VerticalFirst => Axis::Vertical,
                AxisPriority::HorizontalFirst => Axis::Horizontal,
                AxisPriority::Alternate => previous.map_or(Axis::Vertical, Axis::turn),
            }),
        }
    }

    /// Carve the grid down to `target` in place.
    ///
    /// A target larger than the grid, or with a zero dimension, is an
    /// error and the grid is not touched.  If `cancel` is tripped the
    /// carve stops after the current seam and the grid is left at
    /// whatever size it had reached.  A malformed seam aborts the
    /// carve, leaving the grid as it was after the last good seam.
    pub fn reduce(
        &self,
        grid: &mut PixelGrid,
        target: Dimensions,
        mut visualizer: Option<&mut dyn Visualizer>,
        cancel: Option<&CancellationToken>,
    ) -> Result<Outcome, CarveError> {
        let start = grid.dimensions();
        if target.width > start.width
            || target.height > start.height
            || target.width == 0
            || target.height == 0
        {
            return Err(CarveError::InvalidTarget {
                width: start.width,
                height: start.height,
                target_width: target.width,
                target_height: target.height,
            });
        }

        let mut outcome = Outcome {
            dimensions: start,
            vertical_seams: 0,
            horizontal_seams: 0,
            cancelled: false,
        };
        let mut previous = None;

        while let Some(axis) = self.next_axis(outcome.dimensions, target, previous) {
            let energy = self.energy.compute_energy(grid);
            let seam = find_seam(&energy, axis);
            validate_seam(&seam, outcome.dimensions)?;
            debug!(
                "{}x{}: {} seam, cost {}",
                outcome.dimensions.width, outcome.dimensions.height, axis, seam.cost
            );

            if let Some(v) = visualizer.as_mut() {
                if let Err(e) = v.show_energy(&energy, "energy") {
                    warn!("visualizer failed to show the energy map: {}", e);
                }
                if let Err(e) = v.show_seam(grid, &seam, "seam") {
                    warn!("visualizer failed to show the seam: {}", e);
                }
            }

            outcome.dimensions = remove_seam(grid, &seam)?;
            match axis {
                Axis::Vertical => outcome.vertical_seams += 1,
                Axis::Horizontal => outcome.horizontal_seams += 1,
            }
            previous = Some(axis);

            if let Some(v) = visualizer.as_mut() {
                if let Err(e) = v.show_image(grid, "carved") {
                    warn!("visualizer failed to show the carved image: {}", e);
                }
            }

            if cancel.map_or(false, CancellationToken::is_cancelled) {
                outcome.cancelled = true;
                break;
            }
        }

        if outcome.cancelled {
            info!(
                "carve cancelled at {}x{} after {} seams",
                outcome.dimensions.width,
                outcome.dimensions.height,
                outcome.seams_removed()
            );
        } else {
            info!(
                "carved {}x{} to {}x{} ({} vertical, {} horizontal seams)",
                start.width,
                start.height,
                outcome.dimensions.width,
                outcome.dimensions.height,
                outcome.vertical_seams,
                outcome.horizontal_seams
            );
        }
        Ok(outcome)
    }

    /// Carve an ImageRS image into a new one of the given size.
    pub fn carve(&self, image: &RgbImage, newwidth: u32, newheight: u32) -> Result<RgbImage, CarveError> {
        let mut grid = grid_from_image(image);
        self.reduce(&mut grid, Dimensions::new(newwidth, newheight), None, None)?;
        Ok(grid_to_image(&grid))
    }
}

/// Given an image and a desired new width and height, carve it down
/// with the default options.
pub fn seamcarve(image: &RgbImage, newwidth: u32, newheight: u32) -> Result<RgbImage, CarveError> {
    SeamCarver::new(CarveOptions::default()).carve(image, newwidth, newheight)
}
