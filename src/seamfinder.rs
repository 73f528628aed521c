// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Seams, and how to find the cheapest one in a cost map.

use crate::costmap::CostMap;
use crate::error::SlimError;

/// A top-to-bottom path through the image, one column per row.
/// Consecutive columns never differ by more than one.
#[derive(Debug, Clone, PartialEq)]
pub struct Seam {
    columns: Vec<u32>,
    cost: f64,
}

impl Seam {
    pub fn new(columns: Vec<u32>, cost: f64) -> Self {
        Seam { columns, cost }
    }

    /// The seam's column in each row, top row first.
    pub fn columns(&self) -> &[u32] {
        &self.columns
    }

    /// The cheapest total in the bottom row of the cost map the seam
    /// was traced from.
    pub fn cost(&self) -> f64 {
        self.cost
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Fails on the first pair of rows whose columns are more than one
    /// apart.  A seam built by hand has to pass this before it is
    /// carved out of anything.
    pub fn check_connected(&self) -> Result<(), SlimError> {
        match self
            .columns
            .windows(2)
            .position(|pair| pair[0].max(pair[1]) - pair[0].min(pair[1]) > 1)
        {
            Some(y) => Err(SlimError::DisconnectedSeam(y as u32, y as u32 + 1)),
            None => Ok(()),
        }
    }

    /// The seam as `(x, y)` coordinates, top row first.
    pub fn points(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        self.columns
            .iter()
            .enumerate()
            .map(|(y, &x)| (x, y as u32))
    }
}

/// This trait defines how we will get seams out of whatever holds
/// the precomputed costs.  Only vertical seams are ever needed.
pub trait SeamFinder {
    /// Request the cheapest top-to-bottom seam.
    fn find_vertical_seam(&self) -> Result<Seam, SlimError>;
}

// Pick the column in the row above that the trace moves to from
// column `x`.  The interior rule is lopsided: left wins only when
// left < centre < right, then centre when centre < right, and right
// otherwise.  Edges prefer the centre on a tie.
fn parent_column(above: &[f64], x: usize) -> usize {
    let max_x = above.len() - 1;
    if max_x == 0 {
        0
    } else if x == 0 {
        if above[0] <= above[1] {
            0
        } else {
            1
        }
    } else if x == max_x {
        if above[x] <= above[x - 1] {
            x
        } else {
            x - 1
        }
    } else {
        let (left, centre, right) = (above[x - 1], above[x], above[x + 1]);
        if left < centre && centre < right {
            x - 1
        } else if centre < right {
            x
        } else {
            x + 1
        }
    }
}

impl SeamFinder for CostMap {
    fn find_vertical_seam(&self) -> Result<Seam, SlimError> {
        let (width, height) = (self.width(), self.height());
        if width == 0 || height == 0 {
            return Err(SlimError::EmptyImage);
        }

        // Find the leftmost column of the bottom row with the least cost.
        let bottom = self.row(height - 1);
        let (mut seam_col, cost) = bottom
            .iter()
            .enumerate()
            .skip(1)
            .fold((0, bottom[0]), |(best, lowest), (x, &c)| {
                if c < lowest {
                    (x, c)
                } else {
                    (best, lowest)
                }
            });

        // Working backwards, fill in the column for every row above.
        let mut columns = vec![0u32; height as usize];
        columns[height as usize - 1] = seam_col as u32;
        for y in (1..height).rev() {
            seam_col = parent_column(self.row(y - 1), seam_col);
            columns[y as usize - 1] = seam_col as u32;
        }
        Ok(Seam::new(columns, cost))
    }
}
