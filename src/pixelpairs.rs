// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Calculate the gradient across a pixel pair
//!
//! Given two pixels, the gradient between them on one color channel
//! is half the absolute distance between their values on that
//! channel.  Halving averages the horizontal and vertical terms of a
//! pixel's energy.

/// Number of color channels every pixel carries.
pub const CHANNELS: usize = 3;

/// (value, value) -> gradient
///
/// Takes the two pixels' values on one channel; picking and checking
/// the channel is the caller's job.
#[inline]
pub fn channel_gradient(a: u8, b: u8) -> f64 {
    f64::from(a.max(b) - a.min(b)) / 2.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gradient_is_half_the_distance() {
        let (a, b) = ([0u8, 50, 255], [10u8, 50, 0]);
        assert_eq!(channel_gradient(a[0], b[0]), 5.0);
        assert_eq!(channel_gradient(a[1], b[1]), 0.0);
        assert_eq!(channel_gradient(b[2], a[2]), 127.5);
    }

    #[test]
    fn gradient_is_symmetric() {
        assert_eq!(channel_gradient(0, 255), 127.5);
        assert_eq!(channel_gradient(255, 0), 127.5);
        assert_eq!(channel_gradient(7, 7), 0.0);
    }
}
