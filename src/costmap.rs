// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The cumulative cost map
//!
//! Every cell holds the cheapest total energy of any seam that starts
//! anywhere on the top row and ends at that cell.  The top row is just
//! the energy of each pixel; every row below adds a pixel's energy to
//! the cheapest of the (up to) three cells directly above it:
//!
//! ```text
//!            ⎧ M(x−1,y−1)
//! M(x,y)=e+min⎨ M(x,y−1)
//!            ⎩ M(x+1,y−1)
//! ```
//!
//! with the missing candidate dropped on the left and right edges.

use crate::energy::pixel_energy;
use crate::error::SlimError;
use crate::pixelgrid::PixelGrid;
use crate::twodmap::TwoDimensionalMap;
use itertools::iproduct;
use std::ops::Index;

/// Path costs over a pixel grid, kept the same width as the grid.
#[derive(Debug, Clone, PartialEq)]
pub struct CostMap {
    pub(crate) costs: TwoDimensionalMap<f64>,
}

impl CostMap {
    /// Run the full forward pass over `grid`.
    pub fn build(grid: &PixelGrid) -> Result<Self, SlimError> {
        let (width, height) = grid.dimensions();
        let mut map = CostMap {
            costs: TwoDimensionalMap::new(width, height),
        };
        for (y, x) in iproduct!(0..height, 0..width) {
            let cost = map.cell_cost(grid, x, y)?;
            map.costs[(x, y)] = cost;
        }
        Ok(map)
    }

    /// Wrap precomputed costs.  Returns `None` if the buffer does not
    /// match the dimensions.
    pub fn from_raw(width: u32, height: u32, costs: Vec<f64>) -> Option<Self> {
        TwoDimensionalMap::from_raw(width, height, costs).map(|costs| CostMap { costs })
    }

    pub fn width(&self) -> u32 {
        self.costs.width()
    }

    pub fn height(&self) -> u32 {
        self.costs.height()
    }

    /// One row of costs.
    pub fn row(&self, y: u32) -> &[f64] {
        self.costs.row(y)
    }

    /// The cost `(x, y)` ought to hold, given the grid and the row
    /// above as it currently stands in this map.  The map must already
    /// be as wide as the grid.
    pub(crate) fn cell_cost(&self, grid: &PixelGrid, x: u32, y: u32) -> Result<f64, SlimError> {
        let energy = pixel_energy(grid, x, y)?;
        if y == 0 {
            return Ok(energy);
        }
        let max_x = self.width() - 1;
        let lo = x.saturating_sub(1);
        let hi = if x == max_x { max_x } else { x + 1 };
        let cheapest = (lo..=hi)
            .map(|px| self.costs[(px, y - 1)])
            .fold(f64::INFINITY, f64::min);
        Ok(energy + cheapest)
    }
}

impl Index<(u32, u32)> for CostMap {
    type Output = f64;

    fn index(&self, at: (u32, u32)) -> &f64 {
        &self.costs[at]
    }
}
