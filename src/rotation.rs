//! Frame rotation between camera space and display space.

/// Clockwise rotation applied to captured frames before display.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Rotation {
    /// No rotation.
    #[default]
    Rotate0,
    /// 90 degrees clockwise.
    Rotate90,
    /// 180 degrees.
    Rotate180,
    /// 270 degrees clockwise (90 counter-clockwise).
    Rotate270,
}

impl Rotation {
    /// Parse a rotation in degrees. Any multiple of 90 is accepted,
    /// including negative and > 360 values; anything else is `None`.
    pub fn from_degrees(degrees: i32) -> Option<Self> {
        match degrees.rem_euclid(360) {
            0 => Some(Self::Rotate0),
            90 => Some(Self::Rotate90),
            180 => Some(Self::Rotate180),
            270 => Some(Self::Rotate270),
            _ => None,
        }
    }

    /// Rotation in degrees, `0..360`.
    pub const fn degrees(self) -> i32 {
        match self {
            Self::Rotate0 => 0,
            Self::Rotate90 => 90,
            Self::Rotate180 => 180,
            Self::Rotate270 => 270,
        }
    }

    /// Whether this rotation swaps width and height.
    pub const fn swaps_axes(self) -> bool {
        matches!(self, Self::Rotate90 | Self::Rotate270)
    }

    /// Map display-space dimensions to camera space (or back; the mapping is
    /// its own inverse).
    pub const fn transform_dimensions(self, width: u32, height: u32) -> (u32, u32) {
        if self.swaps_axes() {
            (height, width)
        } else {
            (width, height)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn degrees_round_trip() {
        for r in [
            Rotation::Rotate0,
            Rotation::Rotate90,
            Rotation::Rotate180,
            Rotation::Rotate270,
        ] {
            assert_eq!(Rotation::from_degrees(r.degrees()), Some(r));
        }
    }

    #[test]
    fn degrees_wrap() {
        assert_eq!(Rotation::from_degrees(-90), Some(Rotation::Rotate270));
        assert_eq!(Rotation::from_degrees(450), Some(Rotation::Rotate90));
        assert_eq!(Rotation::from_degrees(360), Some(Rotation::Rotate0));
    }

    #[test]
    fn degrees_invalid() {
        assert_eq!(Rotation::from_degrees(45), None);
        assert_eq!(Rotation::from_degrees(1), None);
    }

    #[test]
    fn swaps_axes() {
        assert!(!Rotation::Rotate0.swaps_axes());
        assert!(Rotation::Rotate90.swaps_axes());
        assert!(!Rotation::Rotate180.swaps_axes());
        assert!(Rotation::Rotate270.swaps_axes());
    }

    #[test]
    fn transform_dimensions() {
        assert_eq!(Rotation::Rotate0.transform_dimensions(640, 360), (640, 360));
        assert_eq!(Rotation::Rotate90.transform_dimensions(640, 360), (360, 640));
        assert_eq!(Rotation::Rotate180.transform_dimensions(640, 360), (640, 360));
        assert_eq!(Rotation::Rotate270.transform_dimensions(640, 360), (360, 640));
    }
}
