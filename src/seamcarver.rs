// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Seamcarve - The main function
//!
//! The slimming loop: build the cost map once, then for every column
//! to be removed find the cheapest seam, carve it out of the pixels,
//! and patch up the cost map rather than rebuilding it.

use crate::costmap::CostMap;
use crate::error::SlimError;
use crate::pixelgrid::PixelGrid;
use crate::seamfinder::{Seam, SeamFinder};
use image::{GenericImageView, Pixel, Primitive, RgbImage};
use log::{debug, trace};

/// Carve `seam` out of `grid` in place, leaving it one column
/// narrower.  Nothing is touched if the seam doesn't fit the grid or
/// jumps columns.
pub fn remove_vertical_seam(grid: &mut PixelGrid, seam: &Seam) -> Result<(), SlimError> {
    seam.check_connected()?;
    grid.remove_seam(seam.columns())
}

/// Return a copy of `image` with `k` vertical seams removed.  The
/// original is never modified.
///
/// At least one column always survives: asking for `k` at or beyond
/// the image's width is an error rather than an empty image.
pub fn reduce_width(image: &PixelGrid, k: u32) -> Result<PixelGrid, SlimError> {
    let (width, height) = image.dimensions();
    debug!("slimming {}x{} image by {} columns", width, height, k);

    let mut scratch = image.clone();
    if k == 0 {
        return Ok(scratch);
    }
    if k >= width {
        return Err(SlimError::TooManySeams {
            requested: k,
            width,
        });
    }
    if height == 0 {
        return Err(SlimError::EmptyImage);
    }

    let mut costs = CostMap::build(&scratch)?;
    for pass in 0..k {
        let seam = costs.find_vertical_seam()?;
        trace!(
            "seam {}: cost {} entering at column {}",
            pass,
            seam.cost(),
            seam.columns()[0]
        );
        remove_vertical_seam(&mut scratch, &seam)?;
        costs.repair(&scratch, &seam)?;
    }
    Ok(scratch)
}

/// A struct for holding the image to be carved.
pub struct SeamCarver<'a, I, P, S>
where
    I: GenericImageView<Pixel = P>,
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    image: &'a I,
}

impl<'a, I, P, S> SeamCarver<'a, I, P, S>
where
    I: GenericImageView<Pixel = P>,
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    /// Creates a new SeamCarver with an image to be carved.
    pub fn new(image: &'a I) -> Self {
        Self { image }
    }

    /// Carve seams out of the image until it is `newwidth` pixels
    /// wide.  The result is always 8-bit RGB.
    pub fn carve(&self, newwidth: u32) -> Result<RgbImage, SlimError> {
        let width = self.image.width();
        if newwidth > width {
            return Err(SlimError::Upscale {
                width,
                requested: newwidth,
            });
        }
        let grid = PixelGrid::from_image(self.image);
        Ok(reduce_width(&grid, width - newwidth)?.to_image())
    }
}
