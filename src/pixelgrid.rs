// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The pixel grid the engine carves, and its bridge to the `image`
//! crate.
//!
//! The engine only ever sees 8-bit RGB triples.  Whatever the source
//! image stores (grey, alpha, 16-bit, float) is flattened to that on
//! the way in, by scaling each channel from the subpixel's nominal
//! range onto `0..=255`.

use crate::twodmap::TwoDimensionalMap;
use image::{GenericImageView, ImageBuffer, Pixel, Primitive, Rgb, RgbImage};
use num_traits::NumCast;

/// Row-major RGB pixels.
pub type PixelGrid = TwoDimensionalMap<[u8; 3]>;

// Subpixel -> u8, scaled by the subpixel's nominal maximum.
fn to_u8<S: Primitive>(c: S) -> u8 {
    let max: f64 = NumCast::from(S::DEFAULT_MAX_VALUE).unwrap_or(255.0);
    let value: f64 = NumCast::from(c).unwrap_or(0.0);
    let scaled = (value / max * 255.0).round();
    NumCast::from(scaled.max(0.0).min(255.0)).unwrap_or(0)
}

impl TwoDimensionalMap<[u8; 3]> {
    /// Copy any `image` view into a fresh pixel grid.
    pub fn from_image<I, P, S>(image: &I) -> PixelGrid
    where
        I: GenericImageView<Pixel = P>,
        P: Pixel<Subpixel = S> + 'static,
        S: Primitive + 'static,
    {
        let (width, height) = image.dimensions();
        let mut grid = PixelGrid::new(width, height);
        for (x, y, pixel) in image.pixels() {
            let c = pixel.to_rgb().0;
            grid[(x, y)] = [to_u8(c[0]), to_u8(c[1]), to_u8(c[2])];
        }
        grid
    }

    /// Copy the grid out as an `image` RGB buffer.
    pub fn to_image(&self) -> RgbImage {
        ImageBuffer::from_fn(self.width(), self.height(), |x, y| Rgb(self[(x, y)]))
    }
}
