// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

extern crate asciibrot;
extern crate clap;
extern crate env_logger;
extern crate failure;
#[macro_use]
extern crate log;
extern crate num;
extern crate num_cpus;

use asciibrot::gallery::{Gallery, DEFAULT_GALLERY};
use asciibrot::presets::{self, Preset, PRESETS};
use asciibrot::{server, zoom_view, AsciiRenderer};
use clap::{App, Arg, ArgMatches};
use num::Complex;
use std::str::FromStr;

fn validate_range<T: FromStr + Ord>(
    s: &str,
    low: T,
    high: T,
    isnotanumber_err: &str,
    isnotinrange_err: &str,
) -> Result<(), String> {
    match T::from_str(s) {
        Ok(i) => {
            if i >= low && i <= high {
                Ok(())
            } else {
                Err(isnotinrange_err.to_string())
            }
        }
        Err(_) => Err(isnotanumber_err.to_string()),
    }
}

fn validate_preset(s: &str) -> Result<(), String> {
    presets::find(s)
        .map(|_| ())
        .map_err(|_| format!("Preset must be one of: {}", presets::names().join(", ")))
}

const SERVER: &str = "server";
const PORT: &str = "port";
const GALLERY: &str = "gallery";
const THREADS: &str = "threads";
const PRESET: &str = "preset";
const NO_SAVE: &str = "no-save";

fn args<'a>() -> ArgMatches<'a> {
    let max_threads = num_cpus::get();

    App::new("asciibrot")
        .version("0.1.0")
        .about("Mandelbrot ASCII art renderer")
        .arg(
            Arg::with_name(SERVER)
                .long(SERVER)
                .help("Run as HTTP server instead of CLI"),
        )
        .arg(
            Arg::with_name(PORT)
                .required(false)
                .long(PORT)
                .short("p")
                .takes_value(true)
                .default_value(":8080")
                .help("Port for HTTP server (e.g., :8080)"),
        )
        .arg(
            Arg::with_name(GALLERY)
                .required(false)
                .long(GALLERY)
                .short("g")
                .takes_value(true)
                .default_value(DEFAULT_GALLERY)
                .help("Gallery file to append to and serve"),
        )
        .arg(
            Arg::with_name(THREADS)
                .required(false)
                .long(THREADS)
                .short("t")
                .takes_value(true)
                .default_value("1")
                .validator(move |s| {
                    validate_range(
                        &s,
                        1,
                        max_threads,
                        "Could not parse thread count",
                        &format!("Thread count must be between 1 and {}", max_threads),
                    )
                })
                .help("Number of threads to use per frame"),
        )
        .arg(
            Arg::with_name(PRESET)
                .required(false)
                .long(PRESET)
                .takes_value(true)
                .validator(|s| validate_preset(&s))
                .help("Render only this preset in CLI mode"),
        )
        .arg(
            Arg::with_name(NO_SAVE)
                .long(NO_SAVE)
                .help("Do not append frames to the gallery"),
        )
        .get_matches()
}

fn rule() -> String {
    "=".repeat(50)
}

/// Renders one preset the way the batch run presents it.  Zoom
/// framings open with the line naming their zoom factor.
fn render_preset(preset: &Preset, threads: usize) -> Result<String, failure::Error> {
    let entry = match preset.zoom {
        Some(zoom) => zoom_view(
            preset.view.width,
            preset.view.height,
            preset.view.max_iter,
            Complex::new(zoom.re, zoom.im),
            zoom.factor,
            threads,
        )?,
        None => AsciiRenderer::new(preset.view)?
            .with_threads(threads)
            .render(true)?,
    };
    Ok(entry)
}

fn print_legend() {
    println!("\n{}", rule());
    println!("ASCII LEGEND:");
    println!("' ' (space) - Quick escape (not in set)");
    println!(".:- - Fast escape");
    println!("=+* - Medium escape time");
    println!("#%@ - Slow escape / In the set");
    println!("\nThe darker the character, the more iterations");
    println!("it took to determine if the point escapes.");
}

fn run_cli(matches: &ArgMatches, gallery: &Gallery, threads: usize) -> Result<(), failure::Error> {
    let selected: Vec<&Preset> = match matches.value_of(PRESET) {
        Some(name) => vec![presets::find(name)?],
        None => PRESETS.iter().collect(),
    };
    let save = !matches.is_present(NO_SAVE);
    let mut saved = 0;

    for (index, preset) in selected.iter().enumerate() {
        if index == 0 && preset.zoom.is_none() {
            println!("=== {} ===", preset.title.to_uppercase());
        } else {
            if index == 1 || (index == 0 && preset.zoom.is_some()) {
                println!("\n{}", rule());
                println!("=== INTERESTING REGIONS ===");
            }
            println!("\n--- {} ---", preset.title);
        }

        debug!("rendering {} on {} thread(s)", preset.name, threads);
        let entry = render_preset(preset, threads)?;
        if preset.zoom.is_some() {
            println!();
        }
        print!("{}", entry);

        if save {
            gallery.append(&entry, preset.title)?;
            saved += 1;
        }
    }

    print_legend();
    println!("\n{}", rule());
    if save {
        info!("appended {} frame(s) to {}", saved, gallery.path().display());
        println!("ASCII art saved to {}", gallery.path().display());
    }
    Ok(())
}

fn run() -> Result<(), failure::Error> {
    let matches = args();
    let gallery = Gallery::new(matches.value_of(GALLERY).unwrap_or(DEFAULT_GALLERY));
    let threads = match matches.value_of(THREADS) {
        Some(t) => usize::from_str(t)?,
        None => 1,
    };

    if matches.is_present(SERVER) {
        let port = matches.value_of(PORT).unwrap_or(":8080");
        println!("Starting Mandelbrot HTTP server on http://localhost{}", port);
        println!("Open your browser and visit: http://localhost{}", port);
        server::serve(port, gallery, threads)?;
        return Ok(());
    }

    run_cli(&matches, &gallery, threads)
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = run() {
        eprintln!("asciibrot: {}", e);
        std::process::exit(1);
    }
}
