//! FourCC pixel-format codes and alias canonicalization.
//!
//! Several capture drivers report the same memory layout under different
//! codes (`IYUV` and `I420`, `yuvs` and `YUY2`, ...). Downstream converters
//! only understand one spelling per layout, so every code coming off a device
//! goes through [`FourCC::canonical`] first.
//!
//! Codes are packed little-endian: the first character is the low byte.
//!
//! ```
//! use vidlayout::FourCC;
//!
//! assert_eq!(FourCC::IYUV.canonical(), FourCC::I420);
//! assert_eq!(FourCC::I420.canonical(), FourCC::I420);
//! assert_eq!(FourCC::ANY.canonical(), FourCC::ANY);
//! ```

use core::fmt;

/// A four-character code identifying a raw pixel or compressed video layout.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FourCC(pub u32);

const fn fourcc(a: u8, b: u8, c: u8, d: u8) -> FourCC {
    FourCC(u32::from_le_bytes([a, b, c, d]))
}

impl FourCC {
    /// Unspecified format; the pipeline may choose.
    pub const ANY: Self = Self(0xFFFF_FFFF);

    // Canonical planar YUV.
    pub const I420: Self = fourcc(b'I', b'4', b'2', b'0');
    pub const I422: Self = fourcc(b'I', b'4', b'2', b'2');
    pub const I444: Self = fourcc(b'I', b'4', b'4', b'4');
    pub const I411: Self = fourcc(b'I', b'4', b'1', b'1');
    pub const I400: Self = fourcc(b'I', b'4', b'0', b'0');
    pub const YV12: Self = fourcc(b'Y', b'V', b'1', b'2');
    pub const YV16: Self = fourcc(b'Y', b'V', b'1', b'6');
    pub const YV24: Self = fourcc(b'Y', b'V', b'2', b'4');

    // Canonical bi-planar and packed YUV.
    pub const NV12: Self = fourcc(b'N', b'V', b'1', b'2');
    pub const NV21: Self = fourcc(b'N', b'V', b'2', b'1');
    pub const M420: Self = fourcc(b'M', b'4', b'2', b'0');
    pub const Q420: Self = fourcc(b'Q', b'4', b'2', b'0');
    pub const YUY2: Self = fourcc(b'Y', b'U', b'Y', b'2');
    pub const UYVY: Self = fourcc(b'U', b'Y', b'V', b'Y');
    pub const V210: Self = fourcc(b'V', b'2', b'1', b'0');

    // Canonical RGB.
    pub const ARGB: Self = fourcc(b'A', b'R', b'G', b'B');
    pub const BGRA: Self = fourcc(b'B', b'G', b'R', b'A');
    pub const ABGR: Self = fourcc(b'A', b'B', b'G', b'R');
    /// Packed 24-bit BGR.
    pub const BGR24: Self = fourcc(b'2', b'4', b'B', b'G');
    /// Packed 24-bit RGB (`raw `).
    pub const RAW: Self = fourcc(b'r', b'a', b'w', b' ');
    pub const RGBP: Self = fourcc(b'R', b'G', b'B', b'P');
    pub const RGBO: Self = fourcc(b'R', b'G', b'B', b'O');
    pub const R444: Self = fourcc(b'R', b'4', b'4', b'4');

    // Canonical Bayer.
    pub const RGGB: Self = fourcc(b'R', b'G', b'G', b'B');
    pub const BGGR: Self = fourcc(b'B', b'G', b'G', b'R');
    pub const GRBG: Self = fourcc(b'G', b'R', b'B', b'G');
    pub const GBRG: Self = fourcc(b'G', b'B', b'R', b'G');

    // Canonical compressed.
    pub const MJPG: Self = fourcc(b'M', b'J', b'P', b'G');
    pub const H264: Self = fourcc(b'H', b'2', b'6', b'4');

    // Aliases. Each maps to exactly one canonical code in `ALIASES`.
    pub const IYUV: Self = fourcc(b'I', b'Y', b'U', b'V');
    pub const YU12: Self = fourcc(b'Y', b'U', b'1', b'2');
    pub const YU16: Self = fourcc(b'Y', b'U', b'1', b'6');
    pub const YU24: Self = fourcc(b'Y', b'U', b'2', b'4');
    pub const YUYV: Self = fourcc(b'Y', b'U', b'Y', b'V');
    pub const YUVS: Self = fourcc(b'y', b'u', b'v', b's');
    pub const HDYC: Self = fourcc(b'H', b'D', b'Y', b'C');
    pub const TWO_VUY: Self = fourcc(b'2', b'v', b'u', b'y');
    pub const JPEG: Self = fourcc(b'J', b'P', b'E', b'G');
    pub const DMB1: Self = fourcc(b'd', b'm', b'b', b'1');
    pub const BA81: Self = fourcc(b'B', b'A', b'8', b'1');
    pub const RGB3: Self = fourcc(b'R', b'G', b'B', b'3');
    pub const BGR3: Self = fourcc(b'B', b'G', b'R', b'3');
    /// CoreMedia 32-bit ARGB, reported as the integer 32.
    pub const CM32: Self = fourcc(0, 0, 0, 32);
    /// CoreMedia 24-bit RGB, reported as the integer 24.
    pub const CM24: Self = fourcc(0, 0, 0, 24);

    /// Alias → canonical pairs. No canonical code appears as an alias,
    /// which keeps [`canonical`](Self::canonical) idempotent.
    pub const ALIASES: &'static [(Self, Self)] = &[
        (Self::IYUV, Self::I420),
        (Self::YU12, Self::I420),
        (Self::YU16, Self::I422),
        (Self::YU24, Self::I444),
        (Self::YUYV, Self::YUY2),
        (Self::YUVS, Self::YUY2),
        (Self::HDYC, Self::UYVY),
        (Self::TWO_VUY, Self::UYVY),
        // JPEG carries Huffman tables, MJPG relies on the default ones.
        (Self::JPEG, Self::MJPG),
        (Self::DMB1, Self::MJPG),
        (Self::BA81, Self::BGGR),
        (Self::RGB3, Self::RAW),
        (Self::BGR3, Self::BGR24),
        (Self::CM32, Self::BGRA),
        (Self::CM24, Self::RAW),
    ];

    /// Build a code from its four characters, first character first.
    pub const fn from_bytes(bytes: [u8; 4]) -> Self {
        Self(u32::from_le_bytes(bytes))
    }

    /// The four characters, first character first.
    pub const fn to_bytes(self) -> [u8; 4] {
        self.0.to_le_bytes()
    }

    /// Map an alias to its canonical code. Unknown codes, canonical codes,
    /// and [`ANY`](Self::ANY) are returned unchanged.
    pub fn canonical(self) -> Self {
        Self::ALIASES
            .iter()
            .find(|(alias, _)| *alias == self)
            .map_or(self, |&(_, canonical)| canonical)
    }

    /// Whether this code is listed as an alias of another.
    pub fn is_alias(self) -> bool {
        self.canonical() != self
    }

    /// Whether all four bytes are printable ASCII.
    pub fn is_printable(self) -> bool {
        self.to_bytes().iter().all(|b| (0x20..0x7F).contains(b))
    }
}

/// Canonicalize a raw 32-bit code. See [`FourCC::canonical`].
pub fn canonical_fourcc(code: u32) -> u32 {
    FourCC(code).canonical().0
}

impl From<u32> for FourCC {
    fn from(code: u32) -> Self {
        Self(code)
    }
}

impl From<FourCC> for u32 {
    fn from(code: FourCC) -> Self {
        code.0
    }
}

impl From<[u8; 4]> for FourCC {
    fn from(bytes: [u8; 4]) -> Self {
        Self::from_bytes(bytes)
    }
}

impl fmt::Display for FourCC {
    /// The four characters when printable, otherwise `0x` and eight hex digits.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_printable() {
            for &b in &self.to_bytes() {
                fmt::Write::write_char(f, b as char)?;
            }
            Ok(())
        } else {
            write!(f, "0x{:08X}", self.0)
        }
    }
}

impl fmt::Debug for FourCC {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FourCC({self})")
    }
}
