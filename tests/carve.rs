// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

mod common;

use common::{block_on_grey, count_colour};
use image::Rgb;
use rgbseam::{
    grid_from_image, seamcarve, AxisPriority, CarveError, CarveOptions, Dimensions, ImageFile,
    Loader, SeamCarver, Writer,
};

#[test]
fn carving_keeps_the_block() {
    let _ = env_logger::builder().is_test(true).try_init();
    let image = block_on_grey(24, 16, (8, 5, 4, 4));
    let carved = seamcarve(&image, 16, 10).unwrap();
    assert_eq!((carved.width(), carved.height()), (16, 10));
    assert_eq!(count_colour(&carved, Rgb([250, 200, 20])), 16);
}

#[test]
fn every_priority_reaches_the_target() {
    let image = block_on_grey(12, 9, (3, 3, 2, 2));
    for &priority in &[
        AxisPriority::VerticalFirst,
        AxisPriority::HorizontalFirst,
        AxisPriority::Alternate,
    ] {
        let carver = SeamCarver::new(CarveOptions {
            axis_priority: priority,
        });
        let mut grid = grid_from_image(&image);
        let outcome = carver
            .reduce(&mut grid, Dimensions::new(7, 5), None, None)
            .unwrap();
        assert_eq!(outcome.dimensions, Dimensions::new(7, 5), "{:?}", priority);
        assert_eq!(outcome.vertical_seams, 5);
        assert_eq!(outcome.horizontal_seams, 4);
        assert_eq!(grid.as_slice().len(), 35);
    }
}

#[test]
fn carves_down_to_a_single_pixel() {
    let image = block_on_grey(5, 4, (1, 1, 1, 1));
    let carved = seamcarve(&image, 1, 1).unwrap();
    assert_eq!((carved.width(), carved.height()), (1, 1));
}

#[test]
fn load_carve_save() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("source.png");
    let target = dir.path().join("carved.png");
    block_on_grey(10, 10, (4, 4, 2, 2)).save(&source).unwrap();

    let mut grid = ImageFile.load(&source).unwrap();
    SeamCarver::new(CarveOptions::default())
        .reduce(&mut grid, Dimensions::new(8, 9), None, None)
        .unwrap();
    ImageFile.save(&grid, &target).unwrap();

    let reloaded = ImageFile.load(&target).unwrap();
    assert_eq!(reloaded.dimensions(), Dimensions::new(8, 9));
    assert_eq!(reloaded, grid);
}

#[test]
fn enlargement_is_an_error() {
    let image = block_on_grey(6, 6, (2, 2, 2, 2));
    match seamcarve(&image, 6, 7) {
        Err(CarveError::InvalidTarget {
            width: 6,
            height: 6,
            target_width: 6,
            target_height: 7,
        }) => (),
        other => panic!("expected InvalidTarget, got {:?}", other.err()),
    }
}
