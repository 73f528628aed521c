// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Repairing a cost map after a seam has been carved.
//!
//! Rebuilding the whole map after every seam is absurdly wasteful;
//! nearly all of it is still right.  Once the seam's cells are shifted
//! out, the only cells that can disagree with a fresh build are:
//!
//! * the two pixels in each row that became neighbors across the gap
//!   (their energies changed), plus those whose vertical neighbor moved
//!   because the seam stepped sideways between rows;
//! * cells whose parents in the row above now belong to different
//!   pixels, again within a column or two of the seam;
//! * anything below a changed cell, spreading at most one column per
//!   row.
//!
//! The seam itself never moves more than one column per row, so all of
//! that fits in a cone hanging from the seam's top-row column `f`:
//! row `y` recomputes `[f - y - 2, f + y + 1]`.

use crate::costmap::CostMap;
use crate::error::SlimError;
use crate::pixelgrid::PixelGrid;
use crate::seamfinder::Seam;
use log::trace;

// The columns of row `y` that need recomputing, clamped to the map.
fn repair_window(first: u32, y: u32, width: u32) -> (u32, u32) {
    let lo = first.saturating_sub(y.saturating_add(2));
    let hi = first.saturating_add(y).saturating_add(1).min(width - 1);
    (lo.min(width - 1), hi)
}

impl CostMap {
    /// Bring the map back in line with `grid`, which has just had
    /// `seam` carved out of it.  The map must still be at the width
    /// the grid had before the carve, and the seam must be connected:
    /// the recomputed window only covers cells reachable from a seam
    /// that moves at most one column per row.
    pub fn repair(&mut self, grid: &PixelGrid, seam: &Seam) -> Result<(), SlimError> {
        if self.height() != grid.height() || self.width() != grid.width() + 1 {
            return Err(SlimError::Mismatch {
                grid: grid.width(),
                table: self.width(),
            });
        }
        seam.check_connected()?;
        self.costs.remove_seam(seam.columns())?;

        let (width, height) = grid.dimensions();
        if width == 0 || height == 0 {
            return Ok(());
        }

        let first = seam.columns()[0];
        let mut recomputed = 0usize;
        for y in 0..height {
            let (lo, hi) = repair_window(first, y, width);
            for x in lo..=hi {
                let cost = self.cell_cost(grid, x, y)?;
                self.costs[(x, y)] = cost;
            }
            recomputed += (hi - lo + 1) as usize;
        }
        trace!(
            "repaired {} of {} cost cells below column {}",
            recomputed,
            width as usize * height as usize,
            first
        );
        Ok(())
    }
}
