// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Maps escape times onto a fixed ASCII gradient.

/// Ten symbols, lightest first.  The last one marks points presumed
/// to be inside the set.
pub const GRADIENT: [char; 10] = [' ', '.', ':', '-', '=', '+', '*', '#', '%', '@'];

/// Quantizes an iteration count into one of the ten gradient buckets.
/// `iter == limit` always maps to the heaviest symbol.
pub fn iter_to_char(iter: usize, limit: usize) -> char {
    let last = GRADIENT.len() - 1;
    if iter == limit {
        return GRADIENT[last];
    }
    let index = (iter as f64 / limit as f64 * last as f64) as usize;
    GRADIENT[index.min(last)]
}
