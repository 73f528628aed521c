// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Errors raised by the slimming engine.

use failure::Fail;

/// Everything that can go wrong while measuring, tracing or removing
/// seams.  Every public operation of the engine returns one of these
/// rather than a magic number.
#[derive(Debug, Fail, Clone, PartialEq)]
pub enum SlimError {
    #[fail(
        display = "pixel ({}, {}) lies outside a {}x{} grid",
        x, y, width, height
    )]
    OutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },

    #[fail(display = "channel {} is not one of red (0), green (1) or blue (2)", _0)]
    InvalidChannel(usize),

    #[fail(display = "cannot remove a seam from a grid with no columns")]
    ZeroWidth,

    #[fail(display = "the grid or cost map holds no cells")]
    EmptyImage,

    #[fail(display = "seam has {} rows but the grid has {}", found, expected)]
    SeamLength { expected: u32, found: u32 },

    #[fail(display = "seam jumps more than one column between rows {} and {}", _0, _1)]
    DisconnectedSeam(u32, u32),

    #[fail(
        display = "cost map width {} does not match grid width {} plus the removed seam",
        table, grid
    )]
    Mismatch { grid: u32, table: u32 },

    #[fail(
        display = "cannot remove {} seams from an image {} pixels wide",
        requested, width
    )]
    TooManySeams { requested: u32, width: u32 },

    #[fail(
        display = "seam carving cannot upscale an image {} pixels wide to {}",
        width, requested
    )]
    Upscale { width: u32, requested: u32 },
}
