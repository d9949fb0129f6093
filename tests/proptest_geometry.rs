//! Property-based tests for crop geometry, fourcc canonicalization, and
//! frame rate conversion.

use proptest::prelude::*;
use vidlayout::{
    CropRequest, FourCC, NANOS_PER_SEC, Rect, Rotation, Size, VideoFormat, canonical_fourcc,
    compute_crop,
};

fn rotation() -> impl Strategy<Value = Rotation> {
    prop_oneof![
        Just(Rotation::Rotate0),
        Just(Rotation::Rotate90),
        Just(Rotation::Rotate180),
        Just(Rotation::Rotate270),
    ]
}

// =============================================================================
// Crop
// =============================================================================

proptest! {
    /// Cropped sizes stay inside the frame and stay even for even frames.
    #[test]
    fn crop_within_frame_and_even(
        crop_w in 1u32..=4096,
        crop_h in 1u32..=4096,
        half_w in 1u32..=4096,
        half_h in 1u32..=4096,
        pixel_w in 1u32..=16,
        pixel_h in 1u32..=16,
        rot in rotation()
    ) {
        let (frame_w, frame_h) = (half_w * 2, half_h * 2);
        let out = compute_crop(crop_w, crop_h, frame_w, frame_h, pixel_w, pixel_h, rot);
        prop_assert!(out.width <= frame_w, "{out:?} wider than {frame_w}");
        prop_assert!(out.height <= frame_h, "{out:?} taller than {frame_h}");
        prop_assert_eq!(out.width % 2, 0);
        prop_assert_eq!(out.height % 2, 0);
    }

    /// At most one axis is cropped; a cropped width is a multiple of 4.
    #[test]
    fn crop_changes_one_axis(
        crop_w in 1u32..=4096,
        crop_h in 1u32..=4096,
        frame_w in 1u32..=8192,
        frame_h in 1u32..=8192,
        pixel_w in 1u32..=16,
        pixel_h in 1u32..=16,
        rot in rotation()
    ) {
        let out = compute_crop(crop_w, crop_h, frame_w, frame_h, pixel_w, pixel_h, rot);
        prop_assert!(out.width == frame_w || out.height == frame_h);
        if out.width != frame_w {
            prop_assert_eq!(out.width % 4, 0);
        }
        if out.height != frame_h {
            prop_assert_eq!(out.height % 2, 0);
        }
    }

    /// Half turns never change the result; neither does the direction of a
    /// quarter turn.
    #[test]
    fn crop_rotation_symmetry(
        crop_w in 1u32..=4096,
        crop_h in 1u32..=4096,
        frame_w in 1u32..=8192,
        frame_h in 1u32..=8192,
        pixel_w in 1u32..=16,
        pixel_h in 1u32..=16
    ) {
        let at = |r| compute_crop(crop_w, crop_h, frame_w, frame_h, pixel_w, pixel_h, r);
        prop_assert_eq!(at(Rotation::Rotate0), at(Rotation::Rotate180));
        prop_assert_eq!(at(Rotation::Rotate90), at(Rotation::Rotate270));
    }

    /// A zero request is a passthrough regardless of anything else.
    #[test]
    fn zero_request_passthrough(
        frame_w in 1u32..=8192,
        frame_h in 1u32..=8192,
        pixel_w in 1u32..=16,
        pixel_h in 1u32..=16,
        rot in rotation()
    ) {
        let out = compute_crop(0, 0, frame_w, frame_h, pixel_w, pixel_h, rot);
        prop_assert_eq!(out, Size::new(frame_w, frame_h));
    }

    /// Centered rects lie inside the frame at even offsets.
    #[test]
    fn centered_rect_inside_frame(
        crop_w in 1u32..=4096,
        crop_h in 1u32..=4096,
        frame_w in 1u32..=8192,
        frame_h in 1u32..=8192,
        pixel_w in 1u32..=16,
        pixel_h in 1u32..=16,
        rot in rotation()
    ) {
        let r: Rect = CropRequest::new(crop_w, crop_h)
            .pixel_aspect(pixel_w, pixel_h)
            .rotation(rot)
            .compute_rect(frame_w, frame_h)
            .unwrap();
        prop_assert!(r.x + r.width <= frame_w);
        prop_assert!(r.y + r.height <= frame_h);
        prop_assert_eq!(r.x % 2, 0);
        prop_assert_eq!(r.y % 2, 0);
    }
}

// =============================================================================
// FourCC
// =============================================================================

proptest! {
    /// Canonicalizing twice is the same as canonicalizing once.
    #[test]
    fn canonical_idempotent(code in any::<u32>()) {
        let once = canonical_fourcc(code);
        prop_assert_eq!(canonical_fourcc(once), once);
    }

    /// Only listed aliases change.
    #[test]
    fn canonical_changes_only_aliases(code in any::<u32>()) {
        let listed = FourCC::ALIASES.iter().any(|(alias, _)| alias.0 == code);
        prop_assert_eq!(canonical_fourcc(code) != code, listed);
    }
}

#[test]
fn canonical_any_unchanged() {
    assert_eq!(FourCC::ANY.canonical(), FourCC::ANY);
    assert_eq!(canonical_fourcc(FourCC::ANY.0), FourCC::ANY.0);
}

// =============================================================================
// Frame rate
// =============================================================================

proptest! {
    /// fps → interval → fps is exact for every divisor of one second.
    #[test]
    fn fps_round_trip_divisors(twos in 0u32..=9, fives in 0u32..=9) {
        let fps = 2i64.pow(twos) * 5i64.pow(fives);
        prop_assert_eq!(NANOS_PER_SEC % fps, 0);
        let fps = fps as i32;
        let interval = VideoFormat::fps_to_interval(fps);
        prop_assert_eq!(VideoFormat::interval_to_fps(interval), fps);
    }

    /// Halving the interval never lowers the pixel rate.
    #[test]
    fn faster_is_not_less(
        width in 1u32..=8192,
        height in 1u32..=8192,
        fps in 1i32..=240
    ) {
        let slow = VideoFormat::with_fps(width, height, fps, FourCC::I420);
        let mut fast = slow;
        fast.interval /= 2;
        prop_assert!(!fast.is_pixel_rate_less(&slow));
        prop_assert!(slow.is_pixel_rate_less(&fast));
    }
}
