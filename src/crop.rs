//! Aspect-ratio crop of captured frames.
//!
//! Given what a consumer asked for (e.g. 16:9) and what the camera delivers
//! (e.g. 4:3 VGA with slightly wide pixels), compute how much of the frame to
//! keep so the displayed image has the requested shape. Pure geometry: the
//! result is a size (and optionally a centered rect), never pixels.
//!
//! # Example
//!
//! ```
//! use vidlayout::{compute_crop, CropRequest, Rotation, Size};
//!
//! // 16:9 request from a 4:3 camera: keep full width, trim height.
//! let size = compute_crop(640, 360, 640, 480, 1, 1, Rotation::Rotate0);
//! assert_eq!(size, Size::new(640, 360));
//!
//! // Same request through the validating builder, with placement.
//! let rect = CropRequest::new(640, 360).compute_rect(640, 480).unwrap();
//! assert_eq!((rect.x, rect.y), (0, 60));
//! ```

use core::fmt;

use crate::rotation::Rotation;

/// Width × height dimensions in pixels.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Size {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Size {
    /// Create a new size.
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// Axis-aligned rectangle in frame pixel coordinates.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    /// Create a new rect.
    pub const fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Center `crop` inside `frame`.
    ///
    /// Offsets are rounded down to even values so that 4:2:0 chroma planes
    /// start on a whole sample. A crop larger than the frame is clamped.
    pub fn centered(frame: Size, crop: Size) -> Self {
        let width = crop.width.min(frame.width);
        let height = crop.height.min(frame.height);
        Self {
            x: ((frame.width - width) / 2) & !1,
            y: ((frame.height - height) / 2) & !1,
            width,
            height,
        }
    }

    /// Whether this rect covers the full frame (no actual crop).
    pub fn is_full(&self, frame_w: u32, frame_h: u32) -> bool {
        self.x == 0 && self.y == 0 && self.width == frame_w && self.height == frame_h
    }

    /// Dimensions of this rect.
    pub const fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

/// Tunables for [`CropRequest`].
///
/// The defaults are what the capture pipeline has always used; see
/// [`compute_crop`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CropPolicy {
    /// Largest ratio between frame and request aspect that is still cropped.
    /// Beyond it the frame is passed through uncropped. `0.0` disables
    /// cropping.
    pub aspect_threshold: f32,
    /// Cropped widths are rounded down to a multiple of this.
    pub width_alignment: u32,
    /// Cropped heights are rounded down to a multiple of this.
    pub height_alignment: u32,
}

impl CropPolicy {
    /// 1.34 lets 4:3 crop to 16:9 and back, but not 4:3 to 21:9.
    pub const DEFAULT_ASPECT_THRESHOLD: f32 = 1.34;

    /// The capture pipeline's policy: threshold 1.34, width to multiples of
    /// 4, height to multiples of 2.
    pub const DEFAULT: Self = Self {
        aspect_threshold: Self::DEFAULT_ASPECT_THRESHOLD,
        width_alignment: 4,
        height_alignment: 2,
    };

    /// Never crop.
    pub const fn disabled() -> Self {
        Self {
            aspect_threshold: 0.0,
            ..Self::DEFAULT
        }
    }

    /// Set the aspect threshold.
    pub fn aspect_threshold(mut self, threshold: f32) -> Self {
        self.aspect_threshold = threshold;
        self
    }

    /// Set width and height alignment. `0` behaves like `1`.
    pub fn alignment(mut self, width: u32, height: u32) -> Self {
        self.width_alignment = width;
        self.height_alignment = height;
        self
    }
}

impl Default for CropPolicy {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Reasons a [`CropRequest`] is rejected.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CropError {
    /// Pixel aspect numerator or denominator is zero.
    ZeroPixelAspect,
    /// Exactly one of the requested dimensions is zero.
    PartialCropSize,
    /// Frame has zero width or height.
    ZeroFrameDimension,
}

impl fmt::Display for CropError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::ZeroPixelAspect => "pixel aspect ratio has a zero term",
            Self::PartialCropSize => "crop size has exactly one zero dimension",
            Self::ZeroFrameDimension => "frame has a zero dimension",
        })
    }
}

impl core::error::Error for CropError {}

/// A crop request in display space, checked before computing.
///
/// # Example
///
/// ```
/// use vidlayout::{CropError, CropRequest, Rotation, Size};
///
/// let size = CropRequest::new(640, 360)
///     .pixel_aspect(15, 11)
///     .compute(320, 240)
///     .unwrap();
/// assert_eq!(size, Size::new(312, 240));
///
/// let err = CropRequest::new(640, 0).compute(320, 240).unwrap_err();
/// assert_eq!(err, CropError::PartialCropSize);
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CropRequest {
    /// Requested width. `0` together with `height == 0` means "no crop".
    pub width: u32,
    /// Requested height.
    pub height: u32,
    /// Pixel aspect numerator (horizontal extent of one pixel).
    pub pixel_width: u32,
    /// Pixel aspect denominator (vertical extent of one pixel).
    pub pixel_height: u32,
    /// Rotation from camera space to display space.
    pub rotation: Rotation,
    pub policy: CropPolicy,
}

impl CropRequest {
    /// Request a crop to `width`:`height` with square pixels and no rotation.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixel_width: 1,
            pixel_height: 1,
            rotation: Rotation::Rotate0,
            policy: CropPolicy::DEFAULT,
        }
    }

    /// Set the frame's pixel aspect ratio.
    pub fn pixel_aspect(mut self, pixel_width: u32, pixel_height: u32) -> Self {
        self.pixel_width = pixel_width;
        self.pixel_height = pixel_height;
        self
    }

    /// Set the rotation applied to the frame before display.
    pub fn rotation(mut self, rotation: Rotation) -> Self {
        self.rotation = rotation;
        self
    }

    /// Replace the crop policy.
    pub fn policy(mut self, policy: CropPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Compute the cropped size for a frame of the given dimensions.
    pub fn compute(&self, frame_w: u32, frame_h: u32) -> Result<Size, CropError> {
        if let Err(e) = self.validate(frame_w, frame_h) {
            tracing::debug!(
                crop_w = self.width,
                crop_h = self.height,
                frame_w,
                frame_h,
                error = %e,
                "crop request rejected"
            );
            return Err(e);
        }
        Ok(crop_with_policy(
            self.width,
            self.height,
            frame_w,
            frame_h,
            self.pixel_width,
            self.pixel_height,
            self.rotation,
            &self.policy,
        ))
    }

    /// Like [`compute`](Self::compute), but centers the crop in the frame.
    pub fn compute_rect(&self, frame_w: u32, frame_h: u32) -> Result<Rect, CropError> {
        let size = self.compute(frame_w, frame_h)?;
        Ok(Rect::centered(Size::new(frame_w, frame_h), size))
    }

    fn validate(&self, frame_w: u32, frame_h: u32) -> Result<(), CropError> {
        if self.pixel_width == 0 || self.pixel_height == 0 {
            return Err(CropError::ZeroPixelAspect);
        }
        if (self.width == 0) != (self.height == 0) {
            return Err(CropError::PartialCropSize);
        }
        if frame_w == 0 || frame_h == 0 {
            return Err(CropError::ZeroFrameDimension);
        }
        Ok(())
    }
}

/// Compute the largest crop of a `frame_w`×`frame_h` frame that shows the
/// `crop_w`:`crop_h` aspect ratio, using [`CropPolicy::DEFAULT`].
///
/// - `crop_w == crop_h == 0` means "no crop requested": the frame size is
///   returned as is.
/// - `pixel_w`:`pixel_h` is the frame's pixel aspect ratio. Wide pixels make
///   the frame look wider than its pixel count says, and vice versa.
/// - `rotation` is applied to the frame before display; the request is
///   expressed in display space.
///
/// Only the cropped axis changes. Cropped widths are multiples of 4 and
/// cropped heights multiples of 2; neither exceeds the frame.
///
/// Inputs are not validated. A zero pixel-aspect term or a single zero crop
/// dimension gives an unspecified (but non-panicking) result; use
/// [`CropRequest::compute`] to have them rejected.
#[allow(clippy::too_many_arguments)]
pub fn compute_crop(
    crop_w: u32,
    crop_h: u32,
    frame_w: u32,
    frame_h: u32,
    pixel_w: u32,
    pixel_h: u32,
    rotation: Rotation,
) -> Size {
    crop_with_policy(
        crop_w,
        crop_h,
        frame_w,
        frame_h,
        pixel_w,
        pixel_h,
        rotation,
        &CropPolicy::DEFAULT,
    )
}

#[allow(clippy::too_many_arguments)]
fn crop_with_policy(
    crop_w: u32,
    crop_h: u32,
    frame_w: u32,
    frame_h: u32,
    pixel_w: u32,
    pixel_h: u32,
    rotation: Rotation,
    policy: &CropPolicy,
) -> Size {
    let frame = Size::new(frame_w, frame_h);
    if crop_w == 0 && crop_h == 0 {
        return frame;
    }

    // Bring the request into camera space so one comparison covers every
    // rotation.
    let (crop_w, crop_h) = rotation.transform_dimensions(crop_w, crop_h);

    // Single precision throughout. Cropped sizes must match deployed capture
    // output pixel for pixel, including its rounding.
    let frame_aspect = (frame_w as u64 * pixel_w as u64) as f32
        / (frame_h as u64 * pixel_h as u64) as f32;
    let crop_aspect = crop_w as f32 / crop_h as f32;
    let threshold = policy.aspect_threshold;

    if frame_aspect > crop_aspect && frame_aspect < crop_aspect * threshold {
        // Frame is wider — crop width, keep full height.
        let w = round_half_up(crop_aspect * frame_h as f32 * pixel_h as f32 / pixel_w as f32);
        let w = align_down(w.min(frame_w), policy.width_alignment);
        tracing::trace!(frame_w, frame_h, cropped_w = w, frame_aspect, crop_aspect, "crop width");
        Size::new(w, frame_h)
    } else if frame_aspect < crop_aspect && frame_aspect > crop_aspect / threshold {
        // Frame is taller — crop height, keep full width.
        let h = round_half_up(
            (frame_w as u64 * pixel_w as u64) as f32 / (crop_aspect * pixel_h as f32),
        );
        let h = align_down(h.min(frame_h), policy.height_alignment);
        tracing::trace!(frame_w, frame_h, cropped_h = h, frame_aspect, crop_aspect, "crop height");
        Size::new(frame_w, h)
    } else {
        tracing::trace!(frame_w, frame_h, frame_aspect, crop_aspect, "no crop");
        frame
    }
}

/// `v + 0.5`, truncated. Saturates on overflow, NaN becomes 0.
fn round_half_up(v: f32) -> u32 {
    (v + 0.5) as u32
}

fn align_down(v: u32, alignment: u32) -> u32 {
    let alignment = alignment.max(1);
    v - v % alignment
}
