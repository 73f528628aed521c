// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! A row-major, shrinkable two-dimensional buffer.

use crate::error::SlimError;
use std::ops::{Index, IndexMut};

/// Defines the basic two-dimensional map: an addressable field that
/// holds either the pixels of the image being slimmed or the running
/// path costs computed over it.  Both of them lose one cell per row
/// every time a seam is carved out, so the map knows how to do that
/// itself.
#[derive(Debug, Clone, PartialEq)]
pub struct TwoDimensionalMap<P: Default + Copy> {
    width: u32,
    height: u32,
    data: Vec<P>,
}

impl<P: Default + Copy> TwoDimensionalMap<P> {
    /// Define a new map with every cell at its default value.
    pub fn new(width: u32, height: u32) -> Self {
        TwoDimensionalMap {
            width,
            height,
            data: vec![P::default(); width as usize * height as usize],
        }
    }

    /// Wrap an existing row-major buffer.  Returns `None` when the
    /// buffer's length does not agree with the dimensions.
    pub fn from_raw(width: u32, height: u32, data: Vec<P>) -> Option<Self> {
        if data.len() != width as usize * height as usize {
            return None;
        }
        Some(TwoDimensionalMap {
            width,
            height,
            data,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// The raw row-major storage.
    pub fn as_slice(&self) -> &[P] {
        &self.data
    }

    /// One row of the map.
    pub fn row(&self, y: u32) -> &[P] {
        let start = self.get_index(0, y);
        &self.data[start..start + self.width as usize]
    }

    /// Bounds-checked read.
    pub fn get(&self, x: u32, y: u32) -> Result<P, SlimError> {
        self.check(x, y)?;
        Ok(self.data[self.get_index(x, y)])
    }

    pub(crate) fn check(&self, x: u32, y: u32) -> Result<(), SlimError> {
        if x >= self.width || y >= self.height {
            return Err(SlimError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }

    // Absolutely, the number one name of this game is keep the index
    // math in a singular location and never, ever mess with it.
    fn get_index(&self, x: u32, y: u32) -> usize {
        (y as usize) * (self.width as usize) + (x as usize)
    }

    /// Remove one cell from every row, the one at `columns[y]` for row
    /// `y`, and close up the gap.  The whole buffer is compacted in a
    /// single forward pass: rows already processed sit at their new,
    /// narrower stride, so the write cursor never overtakes the read.
    ///
    /// The map is validated before anything moves; on error it is left
    /// exactly as it was.
    pub fn remove_seam(&mut self, columns: &[u32]) -> Result<(), SlimError> {
        if self.width == 0 {
            return Err(SlimError::ZeroWidth);
        }
        if columns.len() != self.height as usize {
            return Err(SlimError::SeamLength {
                expected: self.height,
                found: columns.len() as u32,
            });
        }
        for (y, &x) in columns.iter().enumerate() {
            self.check(x, y as u32)?;
        }

        let width = self.width as usize;
        let mut write = 0;
        for (y, &x) in columns.iter().enumerate() {
            let start = y * width;
            let cut = start + x as usize;
            self.data.copy_within(start..cut, write);
            write += cut - start;
            self.data.copy_within(cut + 1..start + width, write);
            write += start + width - cut - 1;
        }
        self.data.truncate(write);
        self.width -= 1;
        Ok(())
    }
}

impl<P: Default + Copy> Index<(u32, u32)> for TwoDimensionalMap<P> {
    type Output = P;

    /// A convenience addressing mode for getting values.
    fn index(&self, (x, y): (u32, u32)) -> &P {
        let index = self.get_index(x, y);
        &self.data[index]
    }
}

impl<P: Default + Copy> IndexMut<(u32, u32)> for TwoDimensionalMap<P> {
    /// A convenience addressing mode for setting values.
    fn index_mut(&mut self, (x, y): (u32, u32)) -> &mut P {
        let index = self.get_index(x, y);
        &mut self.data[index]
    }
}
