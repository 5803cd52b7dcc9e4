//! Alpha boundary detection.
//!
//! Finds how much of an image, measured from the top, is drawn before a
//! fully transparent region begins. Only the leftmost pixel column is
//! sampled, so padding is expected to span the full width.
//!
//! # Algorithm
//!
//! Binary search on the row index testing row `py - 1`:
//!
//! ```text
//! sy = 0, ey = H, py = H
//! while py > sy:
//!     if alpha[py - 1] == 0 { ey = py } else { sy = py }
//!     py = (ey + sy) / 2
//! ratio = py / H
//! ```
//!
//! A ratio of exactly `0` counts as a failed detection and reads as `1.0`.

use crate::decode::DecodedImage;

/// Fraction of the image height that is opaque, for the given image.
///
/// Returns `1.0` for images whose source format has no alpha channel.
pub fn opaque_height_ratio(image: &DecodedImage) -> f64 {
    if !image.has_alpha || image.is_empty() {
        return 1.0;
    }
    let column: Vec<u8> = (0..image.height).map(|y| image.alpha_at(0, y)).collect();
    alpha_boundary_ratio(&column)
}

/// Fraction of a vertical alpha column that is opaque before transparency.
///
/// `column[i]` is the alpha of row `i`. The result is in `(0, 1]`.
pub fn alpha_boundary_ratio(column: &[u8]) -> f64 {
    let height = column.len();
    if height == 0 {
        return 1.0;
    }

    let mut sy = 0usize;
    let mut ey = height;
    let mut py = height;

    while py > sy {
        if column[py - 1] == 0 {
            ey = py;
        } else {
            sy = py;
        }
        py = (ey + sy) >> 1;
    }

    if py == 0 {
        1.0
    } else {
        py as f64 / height as f64
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Opaque-over-transparent columns converge to the boundary within one row.
        #[test]
        fn prop_converges_to_boundary(opaque in 1usize..=500, transparent in 0usize..=500) {
            let mut col = vec![255u8; opaque];
            col.extend(std::iter::repeat(0u8).take(transparent));
            let height = col.len() as f64;

            let ratio = alpha_boundary_ratio(&col);
            let expected = opaque as f64 / height;
            prop_assert!((ratio - expected).abs() <= 1.0 / height + 1e-12);
        }

        /// Any column yields a ratio in (0, 1].
        #[test]
        fn prop_ratio_in_range(col in proptest::collection::vec(any::<u8>(), 0..200)) {
            let ratio = alpha_boundary_ratio(&col);
            prop_assert!(ratio > 0.0 && ratio <= 1.0);
        }
    }
}
