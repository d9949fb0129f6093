//! Video capture geometry: FourCC canonicalization, video format values, and
//! aspect-ratio crop computation.
//!
//! Pure geometry — no pixel operations, no allocations, `no_std` compatible.
//!
//! # Modules
//!
//! - [`fourcc`] — FourCC codes and alias canonicalization
//! - [`format`] — [`VideoFormat`]: size, frame interval, fourcc; fps conversion and ordering
//! - [`crop`] — Aspect-ratio crop with pixel aspect and rotation
//! - [`rotation`] — Camera-to-display rotation

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

pub mod crop;
pub mod format;
pub mod fourcc;
pub mod rotation;

pub use crop::{CropError, CropPolicy, CropRequest, Rect, Size, compute_crop};
pub use format::{MINIMUM_INTERVAL, NANOS_PER_SEC, VideoFormat};
pub use fourcc::{FourCC, canonical_fourcc};
pub use rotation::Rotation;
