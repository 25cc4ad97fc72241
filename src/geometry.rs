//! Symmetries of the square board.
//!
//! A square has 8 symmetries (the dihedral group D4): the identity, three
//! rotations, and four reflections. The reflections are generated here as a
//! flip applied before or after a quarter turn, so every transform reduces to
//! the three primitives on `Placement`.

use std::fmt;

use crate::grid::Placement;

/// One of the 8 symmetries of the square.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Symmetry {
    Identity,
    Rotate90,
    Rotate180,
    Rotate270,
    /// Mirror left to right.
    FlipHorizontal,
    /// Mirror top to bottom.
    FlipVertical,
    /// Horizontal flip of the 90-degree rotation (reflection in the anti-diagonal).
    FlipHorizontalRotate90,
    /// Vertical flip of the 90-degree rotation (reflection in the main diagonal).
    FlipVerticalRotate90,
}

impl Symmetry {
    /// All symmetries, identity first.
    pub const ALL: [Symmetry; 8] = [
        Symmetry::Identity,
        Symmetry::Rotate90,
        Symmetry::Rotate180,
        Symmetry::Rotate270,
        Symmetry::FlipHorizontal,
        Symmetry::FlipVertical,
        Symmetry::FlipHorizontalRotate90,
        Symmetry::FlipVerticalRotate90,
    ];

    /// Applies this symmetry to a placement.
    ///
    /// On non-square boards the quarter turns swap the shape, so their images
    /// never compare equal to the original.
    pub fn apply(self, placement: &Placement) -> Placement {
        match self {
            Symmetry::Identity => placement.clone(),
            Symmetry::Rotate90 => placement.rotate_90(),
            Symmetry::Rotate180 => placement.rotate_90().rotate_90(),
            Symmetry::Rotate270 => placement.rotate_90().rotate_90().rotate_90(),
            Symmetry::FlipHorizontal => placement.flip_horizontal(),
            Symmetry::FlipVertical => placement.flip_vertical(),
            Symmetry::FlipHorizontalRotate90 => placement.rotate_90().flip_horizontal(),
            Symmetry::FlipVerticalRotate90 => placement.rotate_90().flip_vertical(),
        }
    }
}

impl fmt::Display for Symmetry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Symmetry::Identity => "identity",
            Symmetry::Rotate90 => "rotate 90",
            Symmetry::Rotate180 => "rotate 180",
            Symmetry::Rotate270 => "rotate 270",
            Symmetry::FlipHorizontal => "flip horizontal",
            Symmetry::FlipVertical => "flip vertical",
            Symmetry::FlipHorizontalRotate90 => "flip horizontal after rotate 90",
            Symmetry::FlipVerticalRotate90 => "flip vertical after rotate 90",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A placement with no symmetry of its own, so all 8 images differ.
    fn asymmetric() -> Placement {
        Placement::from_cells(4, 4, [(0, 0), (0, 1), (1, 0), (3, 2)])
    }

    #[test]
    fn test_identity_is_unchanged() {
        let placement = asymmetric();
        assert_eq!(Symmetry::Identity.apply(&placement), placement);
    }

    #[test]
    fn test_images_are_distinct_for_asymmetric_placement() {
        let images = asymmetric().images();
        for i in 0..images.len() {
            for j in (i + 1)..images.len() {
                assert_ne!(
                    images[i], images[j],
                    "{} and {} produced the same image",
                    Symmetry::ALL[i], Symmetry::ALL[j]
                );
            }
        }
    }

    #[test]
    fn test_symmetries_are_closed_under_composition() {
        let placement = asymmetric();
        let images = placement.images();
        for first in Symmetry::ALL {
            for second in Symmetry::ALL {
                let composed = second.apply(&first.apply(&placement));
                assert!(
                    images.contains(&composed),
                    "{second} after {first} left the group"
                );
            }
        }
    }

    #[test]
    fn test_every_symmetry_has_an_inverse() {
        let placement = asymmetric();
        for symmetry in Symmetry::ALL {
            let image = symmetry.apply(&placement);
            assert!(
                Symmetry::ALL
                    .iter()
                    .any(|inverse| inverse.apply(&image) == placement),
                "{symmetry} has no inverse"
            );
        }
    }

    #[test]
    fn test_diagonal_reflections() {
        let placement = Placement::from_cells(3, 3, [(0, 1)]);
        // anti-diagonal: (r, c) -> (2 - c, 2 - r)
        assert_eq!(
            Symmetry::FlipHorizontalRotate90.apply(&placement),
            Placement::from_cells(3, 3, [(1, 2)])
        );
        // main diagonal: (r, c) -> (c, r)
        assert_eq!(
            Symmetry::FlipVerticalRotate90.apply(&placement),
            Placement::from_cells(3, 3, [(1, 0)])
        );
    }
}
