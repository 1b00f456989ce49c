// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use clap::{App, Arg, ArgMatches};
use failure::{Error, ResultExt};
use log::info;
use rgbseam::{
    calculate_energy, energy_to_image, AxisPriority, CancellationToken, CarveOptions, Dimensions,
    DumpVisualizer, ImageFile, Loader, SeamCarver, Visualizer, Writer,
};
use std::path::Path;
use std::process;
use std::thread;
use std::time::Duration;

fn positive(value: String) -> Result<(), String> {
    match value.parse::<u32>() {
        Ok(n) if n > 0 => Ok(()),
        _ => Err(format!("'{}' is not a positive integer", value)),
    }
}

fn parse_or<T: std::str::FromStr>(matches: &ArgMatches, name: &str, default: T) -> T {
    matches
        .value_of(name)
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

fn init_logging(verbosity: u64) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn run(matches: &ArgMatches) -> Result<(), Error> {
    let input = Path::new(matches.value_of("input").unwrap_or_default());
    let output = Path::new(matches.value_of("output").unwrap_or_default());

    let mut grid = ImageFile.load(input)?;

    if matches.is_present("energy") {
        let path = output.display().to_string();
        energy_to_image(&calculate_energy(&grid))
            .save(output)
            .with_context(|_| format!("writing energy map {}", path))?;
        return Ok(());
    }

    let start = grid.dimensions();
    let target = Dimensions::new(
        parse_or(matches, "width", start.width),
        parse_or(matches, "height", start.height),
    );
    let options = CarveOptions {
        axis_priority: parse_or(matches, "priority", AxisPriority::default()),
    };

    let mut dumper = match matches.value_of("dump-dir") {
        Some(dir) => Some(DumpVisualizer::new(dir)?),
        None => None,
    };

    let token = CancellationToken::new();
    if let Some(seconds) = matches.value_of("time-limit").and_then(|v| v.parse().ok()) {
        let timer = token.clone();
        thread::spawn(move || {
            thread::sleep(Duration::from_secs(seconds));
            timer.cancel();
        });
    }

    let outcome = SeamCarver::new(options).reduce(
        &mut grid,
        target,
        dumper.as_mut().map(|d| d as &mut dyn Visualizer),
        Some(&token),
    )?;
    if outcome.cancelled {
        info!(
            "time limit reached, writing a {}x{} image",
            outcome.dimensions.width, outcome.dimensions.height
        );
    }

    ImageFile.save(&grid, output)?;
    Ok(())
}

fn main() {
    let matches = App::new("rgbseam")
        .version("0.1.0")
        .author("Elf M. Sternberg <elf.sternberg@gmail.com>")
        .about("Content-aware image reduction by seam carving")
        .arg(
            Arg::with_name("input")
                .help("The image to carve")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::with_name("output")
                .help("Where to write the result; the extension picks the format")
                .required(true)
                .index(2),
        )
        .arg(
            Arg::with_name("width")
                .help("Target width (defaults to the current width)")
                .short("w")
                .long("width")
                .takes_value(true)
                .validator(positive),
        )
        .arg(
            Arg::with_name("height")
                .help("Target height (defaults to the current height)")
                .short("H")
                .long("height")
                .takes_value(true)
                .validator(positive),
        )
        .arg(
            Arg::with_name("priority")
                .help("Which seams to take first when both dimensions shrink")
                .long("priority")
                .takes_value(true)
                .possible_values(&["vertical-first", "horizontal-first", "alternate"]),
        )
        .arg(
            Arg::with_name("dump-dir")
                .help("Write every energy map, seam and intermediate image here")
                .long("dump-dir")
                .takes_value(true)
                .value_name("DIR"),
        )
        .arg(
            Arg::with_name("time-limit")
                .help("Stop carving after this many seconds and write what there is")
                .long("time-limit")
                .takes_value(true)
                .value_name("SECS")
                .validator(positive),
        )
        .arg(
            Arg::with_name("energy")
                .help("Write the energy map of the input instead of carving it")
                .long("energy"),
        )
        .arg(
            Arg::with_name("verbose")
                .help("More logging; repeat for more still")
                .short("v")
                .multiple(true),
        )
        .get_matches();

    init_logging(matches.occurrences_of("verbose"));

    if let Err(e) = run(&matches) {
        eprintln!("rgbseam: {}", e);
        process::exit(1);
    }
}
