// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Named regions of interest.  Shared by the batch run and the quick
//! select buttons of the web form.

use crate::errors::BrotError;
use crate::view::View;

/// A zoom framing: a center point and a magnification.  The window is
/// a square of side `2.0 / factor`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Zoom {
    /// Real part of the center
    pub re: f64,
    /// Imaginary part of the center
    pub im: f64,
    /// Magnification
    pub factor: f64,
}

/// A named view.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Preset {
    /// Short name used on the command line and in the form.
    pub name: &'static str,
    /// Human readable title, used for gallery entries.
    pub title: &'static str,
    /// Button label in the web form.
    pub label: &'static str,
    /// The literal window.
    pub view: View,
    /// When present, the batch run renders this framing instead of
    /// `view`; it covers the same window.
    pub zoom: Option<Zoom>,
}

const fn window(max_iter: usize, x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> View {
    View {
        width: 80,
        height: 40,
        max_iter,
        x_min,
        x_max,
        y_min,
        y_max,
    }
}

/// The catalogue, in batch order.
pub static PRESETS: [Preset; 5] = [
    Preset {
        name: "full",
        title: "Full Mandelbrot Set",
        label: "Full Set",
        view: window(100, -2.5, 1.0, -1.25, 1.25),
        zoom: None,
    },
    Preset {
        name: "seahorse",
        title: "Seahorse Valley",
        label: "Seahorse Valley",
        view: window(100, -0.8, -0.7, 0.05, 0.15),
        zoom: Some(Zoom { re: -0.75, im: 0.1, factor: 20.0 }),
    },
    Preset {
        name: "spiral",
        title: "Spiral Region",
        label: "Spiral Region",
        view: window(100, -0.18, -0.14, 1.02, 1.06),
        zoom: Some(Zoom { re: -0.16, im: 1.04, factor: 50.0 }),
    },
    Preset {
        name: "lightning",
        title: "Lightning Region",
        label: "Lightning Region",
        view: window(100, -1.26, -1.24, 0.01, 0.03),
        zoom: Some(Zoom { re: -1.25, im: 0.02, factor: 100.0 }),
    },
    Preset {
        name: "highdetail",
        title: "High Detail View",
        label: "High Detail",
        view: window(200, -0.8, -0.7, 0.05, 0.15),
        zoom: None,
    },
];

/// Looks a preset up by its short name.
pub fn find(name: &str) -> Result<&'static Preset, BrotError> {
    PRESETS
        .iter()
        .find(|p| p.name == name)
        .ok_or_else(|| BrotError::UnknownPreset(name.to_string()))
}

/// The short names, in catalogue order.
pub fn names() -> Vec<&'static str> {
    PRESETS.iter().map(|p| p.name).collect()
}
