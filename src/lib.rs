// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Content-aware image slimming.
//!
//! An image is narrowed one column at a time by carving out the
//! vertical seam whose pixels carry the least energy.  The cost map
//! used to find seams is built once and repaired after every carve.

pub mod costmap;
mod costrepair;
pub mod dump;
pub mod energy;
pub mod error;
pub mod pixelgrid;
pub mod pixelpairs;
pub mod seamcarver;
pub mod seamfinder;
pub mod twodmap;

pub use costmap::CostMap;
pub use dump::energy_to_image;
pub use energy::{channel_energy, pixel_energy};
pub use error::SlimError;
pub use pixelgrid::PixelGrid;
pub use seamcarver::{reduce_width, remove_vertical_seam, SeamCarver};
pub use seamfinder::{Seam, SeamFinder};
pub use twodmap::TwoDimensionalMap;
