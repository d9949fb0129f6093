//! Video stream geometry and frame rate.
//!
//! A [`VideoFormat`] describes what a capture device produces or what a
//! consumer asks for: frame size, time between frames, and pixel layout.
//!
//! ```
//! use vidlayout::{FourCC, VideoFormat};
//!
//! let vga = VideoFormat::with_fps(640, 480, 20, FourCC::I420);
//! assert_eq!(vga.to_string(), "I420 640x480x20");
//! assert!(VideoFormat::default().is_size_0x0());
//! ```

use core::cmp::Ordering;
use core::fmt;

use num_traits::Float;

use crate::fourcc::FourCC;

/// Nanoseconds per second; the unit of [`VideoFormat::interval`].
pub const NANOS_PER_SEC: i64 = 1_000_000_000;

/// Shortest frame interval a format may request (10k fps).
///
/// Also stands for "as fast as possible" when no rate is known.
pub const MINIMUM_INTERVAL: i64 = NANOS_PER_SEC / 10_000;

/// Frame size, frame interval, and pixel layout of a video stream.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct VideoFormat {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Nanoseconds between frames. `0` or [`MINIMUM_INTERVAL`] mean
    /// "as fast as possible".
    pub interval: i64,
    /// Pixel layout.
    pub fourcc: FourCC,
}

impl Default for VideoFormat {
    fn default() -> Self {
        Self {
            width: 0,
            height: 0,
            interval: MINIMUM_INTERVAL,
            fourcc: FourCC::ANY,
        }
    }
}

impl VideoFormat {
    /// Create a format from an explicit interval in nanoseconds.
    pub const fn new(width: u32, height: u32, interval: i64, fourcc: FourCC) -> Self {
        Self {
            width,
            height,
            interval,
            fourcc,
        }
    }

    /// Create a format from a whole frame rate.
    pub const fn with_fps(width: u32, height: u32, fps: i32, fourcc: FourCC) -> Self {
        Self::new(width, height, Self::fps_to_interval(fps), fourcc)
    }

    /// Frame interval for a whole frame rate, truncated to whole nanoseconds.
    ///
    /// Non-positive rates yield [`MINIMUM_INTERVAL`].
    pub const fn fps_to_interval(fps: i32) -> i64 {
        if fps <= 0 {
            MINIMUM_INTERVAL
        } else {
            NANOS_PER_SEC / fps as i64
        }
    }

    /// Whole frame rate for an interval, truncated. Non-positive intervals
    /// yield 0.
    pub const fn interval_to_fps(interval: i64) -> i32 {
        if interval <= 0 {
            0
        } else {
            // interval >= 1, so the quotient fits in i32.
            (NANOS_PER_SEC / interval) as i32
        }
    }

    /// Fractional frame rate for an interval. Non-positive intervals yield 0.
    pub fn interval_to_fps_f32(interval: i64) -> f32 {
        if interval <= 0 {
            0.0
        } else {
            NANOS_PER_SEC as f32 / interval as f32
        }
    }

    /// Frame interval for a fractional rate such as 29.97, rounded to the
    /// nearest nanosecond.
    ///
    /// Non-positive or non-finite rates yield [`MINIMUM_INTERVAL`].
    pub fn fps_f32_to_interval(fps: f32) -> i64 {
        if !fps.is_finite() || fps <= 0.0 {
            return MINIMUM_INTERVAL;
        }
        let interval = Float::round(NANOS_PER_SEC as f64 / fps as f64);
        (interval as i64).max(1)
    }

    /// Whole frame rate of this format.
    pub const fn fps(&self) -> i32 {
        Self::interval_to_fps(self.interval)
    }

    /// Fractional frame rate of this format.
    pub fn fps_f32(&self) -> f32 {
        Self::interval_to_fps_f32(self.interval)
    }

    /// Whether both dimensions are zero. Interval and fourcc are ignored.
    pub const fn is_size_0x0(&self) -> bool {
        self.width == 0 && self.height == 0
    }

    /// Pixels per second at the whole frame rate.
    pub const fn pixel_rate(&self) -> u64 {
        // u32 * u32 fits in u64; fps is at most 1e9 so saturate the last step.
        let area = self.width as u64 * self.height as u64;
        let fps = self.fps();
        let fps = if fps < 0 { 0 } else { fps as u64 };
        area.saturating_mul(fps)
    }

    /// Whether `self` moves fewer pixels per second than `other`.
    ///
    /// Only size and derived frame rate matter; fourcc does not.
    pub fn is_pixel_rate_less(&self, other: &Self) -> bool {
        let rate = |f: &Self| f.width as u128 * f.height as u128 * f.fps().max(0) as u128;
        rate(self) < rate(other)
    }
}

impl Ord for VideoFormat {
    /// Fourcc first, then width, then height. A shorter interval (higher
    /// frame rate) sorts greater.
    fn cmp(&self, other: &Self) -> Ordering {
        self.fourcc
            .cmp(&other.fourcc)
            .then(self.width.cmp(&other.width))
            .then(self.height.cmp(&other.height))
            .then(other.interval.cmp(&self.interval))
    }
}

impl PartialOrd for VideoFormat {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for VideoFormat {
    /// `I420 640x480x30`, or `640x480x30` when the fourcc is not printable
    /// (which includes [`FourCC::ANY`]).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.fourcc.is_printable() {
            write!(f, "{} ", self.fourcc)?;
        }
        write!(f, "{}x{}x{}", self.width, self.height, self.fps())
    }
}
