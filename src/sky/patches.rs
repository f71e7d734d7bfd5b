//! Sky-patch direction vectors for the Tregenza and Reinhart subdivisions.
//!
//! The Tregenza sky has 145 patches in 8 altitude bands of 12°; the Reinhart sky splits
//! every band in two and every patch in two by azimuth (577 patches). Each vector points
//! at a patch center: band `i` of height `h` is centered at altitude `(i + 0.5) * h`, patch
//! `j` of `n` is centered at azimuth `j * 360 / n` clockwise from north, and the last patch
//! is the zenith cap.
//!
//! Both tables are embedded constants, so they are available without `std`.

#![allow(clippy::unreadable_literal)]

use crate::Vector3;

/// Patches per altitude band of the Tregenza sky, excluding the zenith cap.
pub const TREGENZA_BANDS: [usize; 7] = [30, 30, 24, 24, 18, 12, 6];

/// Patches per altitude band of the Reinhart sky, excluding the zenith cap.
pub const REINHART_BANDS: [usize; 14] = [60, 60, 60, 60, 48, 48, 48, 48, 36, 36, 24, 24, 12, 12];

/// Number of Tregenza patches, zenith included.
pub const TREGENZA_PATCH_COUNT: usize = 145;

/// Number of Reinhart patches, zenith included.
pub const REINHART_PATCH_COUNT: usize = 577;

/// Tregenza patch directions.
pub static TREGENZA: [Vector3; TREGENZA_PATCH_COUNT] = include!("data/tregenza_vectors.rs");

/// Reinhart patch directions.
pub static REINHART: [Vector3; REINHART_PATCH_COUNT] = include!("data/reinhart_vectors.rs");

/// The 145 Tregenza patch directions.
#[must_use]
pub fn tregenza() -> &'static [Vector3] {
    &TREGENZA
}

/// The 577 Reinhart patch directions.
#[must_use]
pub fn reinhart() -> &'static [Vector3] {
    &REINHART
}
