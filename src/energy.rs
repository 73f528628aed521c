// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Calculate the energy of a pixel
//!
//! The energy of a pixel is the sum, over red, green and blue, of the
//! gradient magnitude on that channel: half the absolute vertical
//! difference plus half the absolute horizontal difference.  Central
//! differences are used wherever both neighbors exist; on the borders
//! of the image the pixel is compared with its one existing neighbor
//! instead, and an axis only one pixel long contributes nothing.

use crate::error::SlimError;
use crate::pixelgrid::PixelGrid;
use crate::pixelpairs::{channel_gradient, CHANNELS};
use crate::twodmap::TwoDimensionalMap;
use itertools::iproduct;

// The pair of positions to difference along one axis, or None when
// the axis has no room for a second pixel.
//
//   first:    (pos, pos + 1)
//   interior: (pos - 1, pos + 1)
//   last:     (pos - 1, pos)
fn axis_pair(pos: u32, len: u32) -> Option<(u32, u32)> {
    if len < 2 {
        None
    } else if pos == 0 {
        Some((0, 1))
    } else if pos == len - 1 {
        Some((pos - 1, pos))
    } else {
        Some((pos - 1, pos + 1))
    }
}

/// The energy of pixel `(x, y)` on a single color channel.  The
/// coordinates and channel are checked once, here.
pub fn channel_energy(grid: &PixelGrid, x: u32, y: u32, channel: usize) -> Result<f64, SlimError> {
    grid.check(x, y)?;
    if channel >= CHANNELS {
        return Err(SlimError::InvalidChannel(channel));
    }
    let (width, height) = grid.dimensions();

    let vertical = match axis_pair(y, height) {
        Some((above, below)) => channel_gradient(grid[(x, above)][channel], grid[(x, below)][channel]),
        None => 0.0,
    };
    let horizontal = match axis_pair(x, width) {
        Some((left, right)) => channel_gradient(grid[(left, y)][channel], grid[(right, y)][channel]),
        None => 0.0,
    };
    Ok(vertical + horizontal)
}

/// The energy of pixel `(x, y)`, summed over all channels.
pub fn pixel_energy(grid: &PixelGrid, x: u32, y: u32) -> Result<f64, SlimError> {
    (0..CHANNELS).try_fold(0.0, |acc, channel| -> Result<f64, SlimError> {
        Ok(acc + channel_energy(grid, x, y, channel)?)
    })
}

/// Compute the energy of every pixel in the grid.
pub fn energy_map(grid: &PixelGrid) -> Result<TwoDimensionalMap<f64>, SlimError> {
    let (width, height) = grid.dimensions();
    let mut emap = TwoDimensionalMap::new(width, height);
    for (y, x) in iproduct!(0..height, 0..width) {
        emap[(x, y)] = pixel_energy(grid, x, y)?;
    }
    Ok(emap)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grey(width: u32, height: u32, values: &[u8]) -> PixelGrid {
        PixelGrid::from_raw(width, height, values.iter().map(|&v| [v, v, v]).collect()).unwrap()
    }

    // 0  10  20
    // 30 40  50
    // 60 70  80
    const RAMP: [u8; 9] = [0, 10, 20, 30, 40, 50, 60, 70, 80];

    #[test]
    fn interior_pixels_use_central_differences() {
        let grid = grey(3, 3, &RAMP);
        // vertical |10 - 70| / 2 = 30, horizontal |30 - 50| / 2 = 10
        assert_eq!(channel_energy(&grid, 1, 1, 0), Ok(40.0));
        assert_eq!(pixel_energy(&grid, 1, 1), Ok(120.0));
    }

    #[test]
    fn borders_use_one_sided_differences() {
        let grid = grey(3, 3, &RAMP);
        // top edge: vertical |10 - 40| / 2, horizontal |0 - 20| / 2
        assert_eq!(channel_energy(&grid, 1, 0, 2), Ok(25.0));
        // right edge: vertical |20 - 80| / 2, horizontal |40 - 50| / 2
        assert_eq!(channel_energy(&grid, 2, 1, 1), Ok(35.0));
        // corners are one-sided on both axes
        assert_eq!(channel_energy(&grid, 0, 0, 0), Ok(15.0 + 5.0));
        assert_eq!(channel_energy(&grid, 2, 2, 0), Ok(15.0 + 5.0));
    }

    #[test]
    fn single_pixel_axes_contribute_nothing() {
        let row = grey(3, 1, &[0, 10, 40]);
        assert_eq!(channel_energy(&row, 1, 0, 0), Ok(20.0));
        let column = grey(1, 2, &[0, 10]);
        assert_eq!(channel_energy(&column, 0, 1, 0), Ok(5.0));
        let dot = grey(1, 1, &[99]);
        assert_eq!(pixel_energy(&dot, 0, 0), Ok(0.0));
    }

    #[test]
    fn channels_are_measured_separately() {
        let grid = PixelGrid::from_raw(2, 1, vec![[0, 0, 0], [10, 20, 40]]).unwrap();
        assert_eq!(channel_energy(&grid, 0, 0, 0), Ok(5.0));
        assert_eq!(channel_energy(&grid, 0, 0, 1), Ok(10.0));
        assert_eq!(channel_energy(&grid, 0, 0, 2), Ok(20.0));
        assert_eq!(pixel_energy(&grid, 0, 0), Ok(35.0));
    }

    #[test]
    fn uniform_grids_have_no_energy() {
        let grid = grey(4, 3, &[17; 12]);
        let emap = energy_map(&grid).unwrap();
        assert!(emap.as_slice().iter().all(|&e| e == 0.0));
    }

    #[test]
    fn bad_coordinates_and_channels_fail() {
        let grid = grey(3, 3, &RAMP);
        assert_eq!(
            pixel_energy(&grid, 3, 0),
            Err(SlimError::OutOfBounds {
                x: 3,
                y: 0,
                width: 3,
                height: 3
            })
        );
        assert_eq!(
            channel_energy(&grid, 0, 0, 5),
            Err(SlimError::InvalidChannel(5))
        );
        let dot = grey(1, 1, &[0]);
        assert_eq!(
            channel_energy(&dot, 0, 0, 3),
            Err(SlimError::InvalidChannel(3))
        );
    }
}
