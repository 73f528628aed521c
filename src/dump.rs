// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Render the energy of an image as a greyscale picture, brightest
//! where the image is busiest.  Handy for seeing where seams will go.

use crate::energy::energy_map;
use crate::error::SlimError;
use crate::pixelgrid::PixelGrid;
use image::{GrayImage, ImageBuffer, Luma};

/// Scale every pixel's energy so that the largest lands on 255.  A
/// featureless image comes out black.
pub fn energy_to_image(grid: &PixelGrid) -> Result<GrayImage, SlimError> {
    let emap = energy_map(grid)?;
    let factor = emap.as_slice().iter().cloned().fold(0.0, f64::max);
    Ok(ImageBuffer::from_fn(emap.width(), emap.height(), |x, y| {
        let level = if factor > 0.0 {
            (emap[(x, y)] / factor * 255.0).round()
        } else {
            0.0
        };
        Luma([level.max(0.0).min(255.0) as u8])
    }))
}
