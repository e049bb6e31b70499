// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

extern crate asciibrot;
extern crate tempfile;

use asciibrot::{AsciiRenderer, Gallery, View};
use std::fs;

fn banner() -> String {
    format!("MANDELBROT ASCII ART GALLERY\n{}\n\n", "=".repeat(80))
}

#[test]
fn first_append_writes_the_banner() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("gallery.txt");
    let gallery = Gallery::new(&path);

    gallery.append("@@@\n", "Tiny").unwrap();

    let contents = fs::read_to_string(&path).unwrap();
    assert!(contents.starts_with(&banner()));
    let entry = &contents[banner().len()..];
    assert!(entry.starts_with(&format!("\n{}\nGenerated: ", "-".repeat(80))));
    assert!(entry.contains("\nName: "));
    assert!(entry.contains("\nDescription: "));
    assert!(entry.ends_with("Type: Tiny\n\n@@@\n\n\n"));
}

#[test]
fn later_appends_keep_earlier_entries() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("gallery.txt");
    let gallery = Gallery::new(&path);

    gallery.append("first\n", "One").unwrap();
    let after_one = fs::read_to_string(&path).unwrap();
    gallery.append("second\n", "Two").unwrap();
    let after_two = fs::read_to_string(&path).unwrap();

    assert!(after_two.starts_with(&after_one));
    assert_eq!(after_two.matches("MANDELBROT ASCII ART GALLERY").count(), 1);
    assert_eq!(after_two.matches("Generated: ").count(), 2);
    assert!(after_two.find("Type: One").unwrap() < after_two.find("Type: Two").unwrap());
}

#[test]
fn existing_files_are_appended_to_without_a_banner() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("gallery.txt");
    fs::write(&path, "kept\n").unwrap();

    Gallery::new(&path).append("x\n", "Appended").unwrap();

    let contents = fs::read_to_string(&path).unwrap();
    assert!(contents.starts_with("kept\n\n---"));
    assert!(!contents.contains("MANDELBROT ASCII ART GALLERY"));
}

#[test]
fn timestamp_has_seconds_resolution() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("gallery.txt");
    Gallery::new(&path).append("x\n", "Stamp").unwrap();

    let contents = fs::read_to_string(&path).unwrap();
    let line = contents
        .lines()
        .find(|l| l.starts_with("Generated: "))
        .unwrap();
    let stamp = &line["Generated: ".len()..];
    // YYYY-MM-DD HH:MM:SS
    assert_eq!(stamp.len(), 19);
    assert_eq!(&stamp[4..5], "-");
    assert_eq!(&stamp[10..11], " ");
    assert_eq!(&stamp[13..14], ":");
}

#[test]
fn rendered_frames_round_trip_through_read() {
    let dir = tempfile::tempdir().unwrap();
    let gallery = Gallery::new(dir.path().join("gallery.txt"));
    let view = View {
        width: 16,
        height: 8,
        ..View::default()
    };
    let frame = AsciiRenderer::new(view).unwrap().render(true).unwrap();

    gallery.append(&frame, "Small").unwrap();

    let contents = gallery.read().unwrap().unwrap();
    assert!(contents.contains(&format!("Type: Small\n\n{}\n\n", frame)));
}

#[test]
fn unwritable_location_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let gallery = Gallery::new(dir.path().join("missing").join("gallery.txt"));
    assert!(gallery.append("x\n", "Nowhere").is_err());
}
