// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The frame renderer.  Walks the grid row by row, evaluates the
//! escape time of every cell, and writes the matching gradient symbol
//! to a sink.  Returning a frame as a `String` is the same walk over
//! an in-memory sink.

use crossbeam::thread::ScopedJoinHandle;
use num::Complex;
use std::io::Write;
use std::ops::Range;
use std::sync::{Arc, Mutex};

use crate::errors::BrotError;
use crate::escape::escape_time;
use crate::gradient::iter_to_char;
use crate::planes::{Pixel, PlaneMapper};
use crate::view::View;

type RowQueue = Arc<Mutex<Range<usize>>>;

/// Renders one view as ASCII art.  Once built it is immutable, and
/// every render of it produces identical text.
pub struct AsciiRenderer {
    view: View,
    plane: PlaneMapper,
    threads: usize,
}

impl AsciiRenderer {
    /// Validates the view and prepares the plane mapping.
    pub fn new(view: View) -> Result<Self, BrotError> {
        view.validate()?;
        let plane = PlaneMapper::new(view.width, view.height, view.min_corner(), view.max_corner())?;
        Ok(AsciiRenderer {
            view,
            plane,
            threads: 1,
        })
    }

    /// Spreads rows across this many worker threads.  One (the
    /// default) streams the frame cell by cell with no workers.
    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = threads.max(1);
        self
    }

    /// The parameters this renderer was built from.
    pub fn view(&self) -> &View {
        &self.view
    }

    #[inline]
    fn symbol(&self, pixel: &Pixel) -> char {
        let c = self.plane.pixel_to_point(pixel);
        iter_to_char(escape_time(c, self.view.max_iter), self.view.max_iter)
    }

    fn line(&self, row: usize) -> String {
        self.plane.row(row).map(|pixel| self.symbol(&pixel)).collect()
    }

    /// Writes the frame to `sink`, optionally preceded by the view's
    /// header.  Every line, including the last, ends with a newline.
    pub fn render_to<W: Write>(&self, sink: &mut W, header: bool) -> Result<(), BrotError> {
        if header {
            sink.write_all(self.view.header().as_bytes())?;
        }

        if self.threads > 1 {
            for line in self.lines()? {
                writeln!(sink, "{}", line)?;
            }
            return Ok(());
        }

        let last_column = self.view.width - 1;
        let mut cell = [0u8; 4];
        for pixel in self.plane.pixels() {
            sink.write_all(self.symbol(&pixel).encode_utf8(&mut cell).as_bytes())?;
            if pixel.0 == last_column {
                sink.write_all(b"\n")?;
            }
        }
        Ok(())
    }

    /// Renders the frame into a string.
    pub fn render(&self, header: bool) -> Result<String, BrotError> {
        let mut buffer: Vec<u8> = Vec::with_capacity(self.plane.len() + self.view.height + 128);
        self.render_to(&mut buffer, header)?;
        Ok(String::from_utf8(buffer)?)
    }

    /// Every line of the frame, top to bottom, without newlines.  With
    /// more than one thread, workers pull rows from a shared queue and
    /// the results are put back in row order before returning.
    pub fn lines(&self) -> Result<Vec<String>, BrotError> {
        let height = self.view.height;
        if self.threads <= 1 {
            return Ok((0..height).map(|row| self.line(row)).collect());
        }

        let workers = self.threads.min(height);
        trace!("rendering {} rows on {} workers", height, workers);
        let rows: RowQueue = Arc::new(Mutex::new(0..height));
        let mut lines = vec![String::new(); height];

        let finished = crossbeam::scope(|spawner| {
            let handles: Vec<ScopedJoinHandle<Vec<(usize, String)>>> = (0..workers)
                .map(|_| {
                    let rows = rows.clone();
                    spawner.spawn(move |_| {
                        let mut done = vec![];
                        loop {
                            let row = match rows.lock() {
                                Ok(mut queue) => queue.next(),
                                Err(_) => None,
                            };
                            match row {
                                Some(row) => done.push((row, self.line(row))),
                                None => break,
                            }
                        }
                        done
                    })
                })
                .collect();
            handles
                .into_iter()
                .map(|handle| handle.join())
                .collect::<Vec<_>>()
        })
        .map_err(|_| BrotError::WorkerPanic)?;

        for band in finished {
            for (row, line) in band.map_err(|_| BrotError::WorkerPanic)? {
                lines[row] = line;
            }
        }
        Ok(lines)
    }
}

/// Renders a square window of side `2.0 / zoom` around `center`, with
/// a line naming the zoom factor above the usual header.
pub fn zoom_view(
    width: usize,
    height: usize,
    max_iter: usize,
    center: Complex<f64>,
    zoom: f64,
    threads: usize,
) -> Result<String, BrotError> {
    let view = View::zoom(width, height, max_iter, center, zoom);
    let art = AsciiRenderer::new(view)?.with_threads(threads).render(true)?;
    Ok(format!("{}\n{}", zoom_label(zoom), art))
}

/// The line that introduces a zoomed frame.
pub fn zoom_label(zoom: f64) -> String {
    format!("Zoomed view (zoom: {:.1}x)", zoom)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small() -> View {
        View {
            width: 7,
            height: 5,
            max_iter: 20,
            ..View::default()
        }
    }

    #[test]
    fn frame_has_height_lines_of_width_symbols() {
        for &(width, height) in &[(2, 2), (7, 5), (80, 40), (13, 31)] {
            let view = View {
                width,
                height,
                ..View::default()
            };
            let frame = AsciiRenderer::new(view).unwrap().render(false).unwrap();
            let lines: Vec<&str> = frame.lines().collect();
            assert_eq!(lines.len(), height);
            assert!(lines.iter().all(|l| l.chars().count() == width));
            assert!(frame.ends_with('\n'));
        }
    }

    #[test]
    fn header_precedes_body() {
        let renderer = AsciiRenderer::new(small()).unwrap();
        assert_eq!(renderer.view(), &small());
        let with = renderer.render(true).unwrap();
        let without = renderer.render(false).unwrap();
        assert_eq!(with, format!("{}{}", small().header(), without));
    }

    #[test]
    fn sink_and_string_agree() {
        let renderer = AsciiRenderer::new(View::default()).unwrap();
        let mut sink: Vec<u8> = vec![];
        renderer.render_to(&mut sink, true).unwrap();
        assert_eq!(String::from_utf8(sink).unwrap(), renderer.render(true).unwrap());
    }

    #[test]
    fn threaded_render_matches_sequential() {
        let sequential = AsciiRenderer::new(View::default()).unwrap().render(true).unwrap();
        for threads in &[2, 3, 8, 64] {
            let threaded = AsciiRenderer::new(View::default())
                .unwrap()
                .with_threads(*threads)
                .render(true)
                .unwrap();
            assert_eq!(sequential, threaded, "{} threads", threads);
        }
    }

    #[test]
    fn lines_join_to_the_body() {
        let renderer = AsciiRenderer::new(small()).unwrap();
        let joined: String = renderer
            .lines()
            .unwrap()
            .iter()
            .map(|l| format!("{}\n", l))
            .collect();
        assert_eq!(joined, renderer.render(false).unwrap());
    }

    #[test]
    fn renderer_rejects_bad_views() {
        assert!(AsciiRenderer::new(View { width: 1, ..small() }).is_err());
        assert!(AsciiRenderer::new(View { max_iter: 0, ..small() }).is_err());
        assert!(AsciiRenderer::new(View { y_min: 2.0, ..small() }).is_err());
    }

    #[test]
    fn zoom_view_is_labelled() {
        let art = zoom_view(20, 10, 50, Complex::new(-0.75, 0.1), 20.0, 1).unwrap();
        assert!(art.starts_with("Zoomed view (zoom: 20.0x)\nMandelbrot Set ASCII Art (20x10)\n"));
        assert!(art.contains("Range: x[-0.80, -0.70], y[0.05, 0.15]"));
        assert_eq!(zoom_label(50.0), "Zoomed view (zoom: 50.0x)");
    }
}
